#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    taskboard_backend::run().await;
}
