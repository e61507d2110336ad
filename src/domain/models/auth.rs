use serde::{Deserialize, Serialize};

/// JWT claims carried by the access token. The token is opaque to clients;
/// `sub` is the principal's user id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}
