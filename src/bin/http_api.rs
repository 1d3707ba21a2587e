//! Serves `/generate-song` and `/generate-music`.

use log::{info, warn};
use musical_timeline::config::ConfigBuilder;
use musical_timeline::proxy;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    info!("Building config ...");
    let config = ConfigBuilder::from_env().build()?;
    if config.chat_api_key.is_none() {
        warn!("LOVABLE_API_KEY is not set, /generate-song will fail");
    }
    if config.music_api_key.is_none() {
        warn!("ELEVENLABS_API_KEY is not set, /generate-music will fail");
    }

    proxy::serve(config).await?;
    Ok(())
}
