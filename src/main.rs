use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(error) = creator_hub::run().await {
        error!("creator-hub exited with error: {}", error);
        std::process::exit(1);
    }
}
