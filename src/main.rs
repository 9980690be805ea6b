use anyhow::Result;

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    cari_bot::logging::init();

    // Missing credentials are fatal; the bot never connects without them.
    let config = match cari_bot::config::Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "configuration error, refusing to start");
            return Err(err);
        }
    };

    cari_bot::bot::run(config).await
}
