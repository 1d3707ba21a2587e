use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::Decade;
use crate::composer::GeneratedSong;
use crate::errors::{Error, Result};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SongRequest<'a> {
    genre: &'a str,
    keyword: &'a str,
    decade_name: &'a str,
}

#[derive(Serialize, Debug)]
struct MusicRequest<'a> {
    prompt: &'a str,
    duration: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MusicResponse {
    audio_content: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: String,
}

/// Client for a running `http_api` server.
///
/// Each call is one request; nothing is retried and nothing is deduplicated.
pub struct RemoteComposer {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteComposer {
    /// Client for the server at `base_url`, e.g. `http://127.0.0.1:8787`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        RemoteComposer {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST `/generate-song` for `decade`; the proxy's `error` text becomes
    /// [`Error::RemoteError`].
    pub async fn generate_song(
        &self,
        genre: &str,
        keyword: &str,
        decade: &Decade,
    ) -> Result<GeneratedSong> {
        let url = format!("{}/generate-song", self.base_url);
        debug!("Requesting song from {url}");
        let response = self
            .client
            .post(&url)
            .json(&SongRequest {
                genre,
                keyword,
                decade_name: &decade.name,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Returns the decoded audio bytes.
    pub async fn generate_music(&self, prompt: &str, duration: u32) -> Result<Vec<u8>> {
        let url = format!("{}/generate-music", self.base_url);
        debug!("Requesting {duration}s of music from {url}");
        let response = self
            .client
            .post(&url)
            .json(&MusicRequest { prompt, duration })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }
        let body: MusicResponse = response.json().await?;
        STANDARD
            .decode(body.audio_content)
            .map_err(|e| Error::RemoteUnexpectedResponse(format!("audio is not base64: {e}")))
    }
}

async fn remote_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(e) => format!("unreadable error body: {e}"),
    };
    Error::RemoteError { status, message }
}
