use std::net::SocketAddr;
use std::path::PathBuf;

use log::{debug, warn};

use crate::errors::Result;
use crate::proxy::errors::Locale;

/// OpenAI-compatible chat completions endpoint
pub const DEFAULT_CHAT_API_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
/// Model sent with every chat request
pub const DEFAULT_CHAT_MODEL: &str = "google/gemini-3-flash-preview";
/// Music generation endpoint
pub const DEFAULT_MUSIC_API_URL: &str = "https://api.elevenlabs.io/v1/music";
/// Where `http_api` listens
pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

/// Settings shared by the proxy server and the CLI.
///
/// Credentials stay optional here: a proxy without its key still starts and
/// answers every generation request with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address of the proxy
    pub addr: SocketAddr,
    /// Chat completions endpoint
    pub chat_api_url: String,
    /// Chat model name
    pub chat_model: String,
    /// Bearer token for the chat provider
    pub chat_api_key: Option<String>,
    /// Music generation endpoint
    pub music_api_url: String,
    /// `xi-api-key` for the music provider
    pub music_api_key: Option<String>,
    /// Language of client-facing error text
    pub locale: Locale,
    /// Decade data file; the embedded dataset when unset
    pub data_path: Option<PathBuf>,
}

/// Assembles a [`Config`]; unset values fall back to the defaults.
#[derive(Default)]
pub struct ConfigBuilder {
    addr: Option<String>,
    chat_api_url: Option<String>,
    chat_model: Option<String>,
    chat_api_key: Option<String>,
    music_api_url: Option<String>,
    music_api_key: Option<String>,
    locale: Option<Locale>,
    data_path: Option<PathBuf>,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl ConfigBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded from the process environment (call `dotenvy` first).
    pub fn from_env() -> Self {
        let locale = env_var("PROXY_LOCALE").and_then(|tag| {
            let locale = Locale::from_tag(&tag);
            if locale.is_none() {
                warn!("Unknown PROXY_LOCALE {tag:?}, using the default");
            }
            locale
        });
        Self {
            addr: env_var("HTTP_API_ADDR"),
            chat_api_url: env_var("CHAT_API_URL"),
            chat_model: env_var("CHAT_MODEL"),
            chat_api_key: env_var("LOVABLE_API_KEY"),
            music_api_url: env_var("MUSIC_API_URL"),
            music_api_key: env_var("ELEVENLABS_API_KEY"),
            locale,
            data_path: env_var("DECADES_DATA").map(PathBuf::from),
        }
    }

    /// Listen address, `host:port`.
    #[must_use]
    pub fn addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = Some(addr.into());
        self
    }

    /// Override the chat endpoint.
    #[must_use]
    pub fn chat_api_url(mut self, url: impl Into<String>) -> Self {
        self.chat_api_url = Some(url.into());
        self
    }

    /// Override the chat model.
    #[must_use]
    pub fn chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = Some(model.into());
        self
    }

    /// Chat provider token.
    #[must_use]
    pub fn chat_api_key(mut self, key: impl Into<String>) -> Self {
        self.chat_api_key = Some(key.into());
        self
    }

    /// Override the music endpoint.
    #[must_use]
    pub fn music_api_url(mut self, url: impl Into<String>) -> Self {
        self.music_api_url = Some(url.into());
        self
    }

    /// Music provider key.
    #[must_use]
    pub fn music_api_key(mut self, key: impl Into<String>) -> Self {
        self.music_api_key = Some(key.into());
        self
    }

    /// Language of error messages.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Decade data file.
    #[must_use]
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Fill in defaults. Fails only on an unparsable address.
    pub fn build(self) -> Result<Config> {
        let addr: SocketAddr = self.addr.as_deref().unwrap_or(DEFAULT_ADDR).parse()?;
        let config = Config {
            addr,
            chat_api_url: self
                .chat_api_url
                .unwrap_or_else(|| DEFAULT_CHAT_API_URL.to_string()),
            chat_model: self
                .chat_model
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            chat_api_key: self.chat_api_key,
            music_api_url: self
                .music_api_url
                .unwrap_or_else(|| DEFAULT_MUSIC_API_URL.to_string()),
            music_api_key: self.music_api_key,
            locale: self.locale.unwrap_or_default(),
            data_path: self.data_path,
        };
        debug!(
            "Config: addr={}, chat={}, music={}, locale={:?}",
            config.addr, config.chat_api_url, config.music_api_url, config.locale
        );
        Ok(config)
    }
}
