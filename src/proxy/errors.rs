use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// What a proxy was asked to produce, for picking the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    /// `/generate-song`
    Song,
    /// `/generate-music`
    Music,
}

/// A failed proxy request.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Required request fields absent or empty.
    #[error("Missing required {}: {}", field_noun(.0), .0.join(", "))]
    MissingFields(&'static [&'static str]),

    /// A provider key is not set.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Provider answered 429.
    #[error("Provider rate limit reached")]
    RateLimited,

    /// Provider answered 402.
    #[error("Provider credits exhausted")]
    OutOfCredits,

    /// Any other non-2xx provider answer.
    #[error("Provider responded with {status}: {body}")]
    Provider {
        /// Which route failed
        product: Product,
        /// Upstream status
        status: u16,
        /// Upstream body, logged only
        body: String,
    },

    /// Anything else, including bad request JSON and transport failures.
    #[error("{0}")]
    Unexpected(String),
}

fn field_noun(fields: &[&str]) -> &'static str {
    if fields.len() == 1 { "field" } else { "fields" }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> Self {
        ProxyError::Unexpected(err.to_string())
    }
}

/// Failure classes, each with one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400
    Validation,
    /// 500
    Configuration,
    /// 429
    RateLimit,
    /// 402
    Quota,
    /// 500
    Provider(Product),
    /// 500
    Unexpected,
}

impl ErrorKind {
    /// Status code of the response.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::RateLimit => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::Quota => StatusCode::PAYMENT_REQUIRED,
            ErrorKind::Configuration | ErrorKind::Provider(_) | ErrorKind::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Language of the `error` text returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// `he`
    #[default]
    Hebrew,
    /// `en`
    English,
}

impl Locale {
    /// Parse `he`/`en`, ignoring case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "he" | "he-il" => Some(Locale::Hebrew),
            "en" | "en-us" | "en-gb" => Some(Locale::English),
            _ => None,
        }
    }

    /// Fixed text for each kind that doesn't carry its own message.
    pub fn message(self, kind: ErrorKind) -> &'static str {
        match (self, kind) {
            (Locale::Hebrew, ErrorKind::RateLimit) => "יותר מדי בקשות, נסה שוב בעוד כמה שניות",
            (Locale::Hebrew, ErrorKind::Quota) => "נגמרו הקרדיטים, יש להוסיף קרדיטים בהגדרות",
            (Locale::Hebrew, ErrorKind::Provider(Product::Song)) => "שגיאה ביצירת השיר",
            (Locale::Hebrew, ErrorKind::Provider(Product::Music)) => "שגיאה ביצירת המוזיקה",
            (Locale::Hebrew, ErrorKind::Configuration) => "השירות אינו מוגדר כראוי",
            (Locale::Hebrew, ErrorKind::Validation | ErrorKind::Unexpected) => "שגיאה לא ידועה",
            (Locale::English, ErrorKind::RateLimit) => {
                "Too many requests, try again in a few seconds"
            }
            (Locale::English, ErrorKind::Quota) => "Out of credits, add more credits in settings",
            (Locale::English, ErrorKind::Provider(Product::Song)) => "Failed to generate the song",
            (Locale::English, ErrorKind::Provider(Product::Music)) => {
                "Failed to generate the music"
            }
            (Locale::English, ErrorKind::Configuration) => "The service is not configured",
            (Locale::English, ErrorKind::Validation | ErrorKind::Unexpected) => "Unknown error",
        }
    }
}

impl ProxyError {
    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProxyError::MissingFields(_) => ErrorKind::Validation,
            ProxyError::NotConfigured(_) => ErrorKind::Configuration,
            ProxyError::RateLimited => ErrorKind::RateLimit,
            ProxyError::OutOfCredits => ErrorKind::Quota,
            ProxyError::Provider { product, .. } => ErrorKind::Provider(*product),
            ProxyError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Text for the `error` field. Validation and unexpected errors keep their
    /// own message; everything else uses the locale table.
    pub fn client_message(&self, locale: Locale) -> String {
        match self {
            ProxyError::MissingFields(_) => self.to_string(),
            ProxyError::Unexpected(msg) if !msg.is_empty() => msg.clone(),
            _ => locale.message(self.kind()).to_string(),
        }
    }

    /// `{"error": ...}` with the kind's status code.
    pub fn into_response_in(self, locale: Locale) -> Response {
        let status = self.kind().status();
        (status, Json(json!({ "error": self.client_message(locale) }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ProxyError::MissingFields(&["genre", "keyword", "decadeName"]);
        assert_eq!(
            err.client_message(Locale::Hebrew),
            "Missing required fields: genre, keyword, decadeName"
        );
        let err = ProxyError::MissingFields(&["prompt"]);
        assert_eq!(err.client_message(Locale::English), "Missing required field: prompt");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ProxyError::MissingFields(&["prompt"]).kind().status(), 400);
        assert_eq!(ProxyError::NotConfigured("KEY").kind().status(), 500);
        assert_eq!(ProxyError::RateLimited.kind().status(), 429);
        assert_eq!(ProxyError::OutOfCredits.kind().status(), 402);
        let provider = ProxyError::Provider {
            product: Product::Song,
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(provider.kind().status(), 500);
        assert_eq!(ProxyError::Unexpected(String::new()).kind().status(), 500);
    }

    #[test]
    fn test_provider_details_stay_server_side() {
        let err = ProxyError::Provider {
            product: Product::Music,
            status: 500,
            body: "stack trace".to_string(),
        };
        assert_eq!(err.client_message(Locale::Hebrew), "שגיאה ביצירת המוזיקה");
        let err = ProxyError::NotConfigured("LOVABLE_API_KEY");
        assert!(!err.client_message(Locale::English).contains("LOVABLE_API_KEY"));
    }

    #[test]
    fn test_unexpected_message_passthrough() {
        let err = ProxyError::Unexpected("EOF while parsing".to_string());
        assert_eq!(err.client_message(Locale::Hebrew), "EOF while parsing");
        let err = ProxyError::Unexpected(String::new());
        assert_eq!(err.client_message(Locale::Hebrew), "שגיאה לא ידועה");
        assert_eq!(err.client_message(Locale::English), "Unknown error");
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("HE"), Some(Locale::Hebrew));
        assert_eq!(Locale::from_tag("en"), Some(Locale::English));
        assert_eq!(Locale::from_tag("fr"), None);
    }
}
