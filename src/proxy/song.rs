use log::info;
use serde::Deserialize;

use crate::composer::GeneratedSong;
use crate::proxy::AppState;
use crate::proxy::errors::ProxyError;
use crate::proxy::providers::ChatClient;

const REQUIRED_FIELDS: &[&str] = &["genre", "keyword", "decadeName"];

const DELIMITER: &str = "---";

const SYSTEM_PROMPT: &str = "אתה פייטן ומלחין מוזיקלי מומחה. אתה כותב שירים בעברית בלבד.
כשמבקשים ממך לכתוב שיר, אתה מחזיר תמיד את התשובה במבנה הבא בדיוק:

🎤 בית 1:
(טקסט הבית הראשון - 4 שורות)

🎶 פזמון:
(טקסט הפזמון - 4 שורות)

🎤 בית 2:
(טקסט הבית השני - 4 שורות)

🎶 פזמון:
(חזרה על הפזמון)

🌉 גשר:
(טקסט הגשר - 2-3 שורות)

🎶 פזמון:
(חזרה אחרונה על הפזמון)

---

🎵 מבנה מומלץ:
• קצב: (קצב מתאים לסגנון)
• מפתח: (מפתח מוזיקלי מומלץ)
• כלי נגינה: (כלים אופייניים לסגנון)
• מבנה: בית → פזמון → בית → פזמון → גשר → פזמון

חשוב: השיר חייב להיות בעברית, להתאים לסגנון המוזיקלי שנבחר ולעשור הרלוונטי, ולכלול את מילת המפתח באופן טבעי בתוך הטקסט.";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SongRequest {
    genre: Option<String>,
    keyword: Option<String>,
    decade_name: Option<String>,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

fn user_prompt(genre: &str, keyword: &str, decade_name: &str) -> String {
    format!("כתוב שיר בסגנון {genre} מהתקופה של {decade_name}. מילת המפתח/נושא השיר: \"{keyword}\".")
}

/// Split a model reply into lyrics and the arrangement that follows `---`.
///
/// Only the first two segments are used; a reply that opens with the
/// delimiter keeps the whole text as lyrics.
pub fn split_reply(content: &str) -> GeneratedSong {
    let mut parts = content.split(DELIMITER);
    let lyrics = match parts.next() {
        Some(first) if !first.is_empty() => first.trim(),
        _ => content.trim(),
    };
    let structure = parts.next().unwrap_or_default().trim();
    GeneratedSong {
        lyrics: lyrics.to_string(),
        structure: structure.to_string(),
    }
}

pub(crate) async fn generate(state: &AppState, body: &[u8]) -> Result<GeneratedSong, ProxyError> {
    let request: SongRequest = serde_json::from_slice(body)?;
    let (Some(genre), Some(keyword), Some(decade_name)) = (
        present(request.genre),
        present(request.keyword),
        present(request.decade_name),
    ) else {
        return Err(ProxyError::MissingFields(REQUIRED_FIELDS));
    };

    let api_key = state
        .config
        .chat_api_key
        .as_deref()
        .ok_or(ProxyError::NotConfigured("LOVABLE_API_KEY"))?;

    info!("Generating song: genre={genre}, keyword={keyword}, decade={decade_name}");
    let chat = ChatClient {
        client: &state.http,
        url: &state.config.chat_api_url,
        model: &state.config.chat_model,
        api_key,
    };
    let content = chat
        .complete(SYSTEM_PROMPT, &user_prompt(&genre, &keyword, &decade_name))
        .await?;

    Ok(split_reply(&content))
}
