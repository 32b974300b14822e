#[tokio::main]
async fn main() -> std::io::Result<()> {
    customer_server::run_with_config().await
}
