use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::info;
use serde::{Deserialize, Serialize};

use crate::proxy::AppState;
use crate::proxy::errors::ProxyError;
use crate::proxy::providers::MusicClient;

const REQUIRED_FIELDS: &[&str] = &["prompt"];

/// Used when the request has no duration, or zero
pub const DEFAULT_DURATION_SECS: f64 = 30.0;

#[derive(Deserialize, Debug)]
struct MusicRequest {
    prompt: Option<String>,
    duration: Option<f64>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Success body of `/generate-music`.
pub struct MusicResponse {
    /// Base64 of the provider's audio bytes
    pub audio_content: String,
}

// Zero counts as "not given", like an absent field.
fn duration_or_default(duration: Option<f64>) -> f64 {
    match duration {
        Some(d) if d != 0.0 => d,
        _ => DEFAULT_DURATION_SECS,
    }
}

pub(crate) async fn generate(state: &AppState, body: &[u8]) -> Result<MusicResponse, ProxyError> {
    let request: MusicRequest = serde_json::from_slice(body)?;
    let Some(prompt) = request.prompt.filter(|p| !p.is_empty()) else {
        return Err(ProxyError::MissingFields(REQUIRED_FIELDS));
    };

    let api_key = state
        .config
        .music_api_key
        .as_deref()
        .ok_or(ProxyError::NotConfigured("ELEVENLABS_API_KEY"))?;

    info!("Generating music with prompt: {prompt}");
    let music = MusicClient {
        client: &state.http,
        url: &state.config.music_api_url,
        api_key,
    };
    let audio = music
        .compose(&prompt, duration_or_default(request.duration))
        .await?;

    info!("Music generated successfully, size: {}", audio.len());
    Ok(MusicResponse {
        audio_content: STANDARD.encode(&audio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_defaults() {
        assert!((duration_or_default(None) - 30.0).abs() < f64::EPSILON);
        assert!((duration_or_default(Some(0.0)) - 30.0).abs() < f64::EPSILON);
        assert!((duration_or_default(Some(12.5)) - 12.5).abs() < f64::EPSILON);
    }
}
