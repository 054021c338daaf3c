#[tokio::main]
async fn main() -> litvinovgpt::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("litvinovgpt=info"),
    )
    .init();
    log::info!("Starting litvinovgpt chat handler");

    match litvinovgpt::run().await {
        Ok(()) => {
            log::info!("Event handled successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Handler encountered an error: {}", e);
            Err(e)
        }
    }
}
