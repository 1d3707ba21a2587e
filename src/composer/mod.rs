//! Song generator.
//!
//! [`generate`] fills the fixed verse/chorus skeleton locally; [`remote`] asks
//! the `/generate-song` proxy for a model-written song with the same shape.

/// HTTP client for the generation proxies
pub mod remote;

use serde::{Deserialize, Serialize};

use crate::catalog::Decade;

const DEFAULT_INSTRUMENTS: &str = "גיטרה, בס, תופים, סינתיסייזר";

const INSTRUMENTS: &[(&str, &str)] = &[
    ("רוקנ'רול", "גיטרה חשמלית, בס, תופים, פסנתר"),
    ("רוק", "גיטרה חשמלית, בס, תופים"),
    ("ג'אז", "סקסופון, פסנתר, קונטרבס, תופים"),
    ("בלוז", "גיטרה אקוסטית, הרמוניקה, פסנתר"),
    ("פופ", "סינתיסייזר, גיטרה, תופים אלקטרוניים"),
    ("דיסקו", "בס, גיטרה פאנקית, כלי מיתר, תופים"),
    ("היפ-הופ", "ביטים, סמפלר, סינתיסייזר, 808"),
    ("EDM", "סינתיסייזר, דראם מאשין, בס אלקטרוני"),
    ("רגטיים", "פסנתר, בנג'ו"),
    ("סווינג", "תזמורת גדולה, חצוצרות, סקסופון"),
    ("פאנק", "גיטרה חשמלית, בס, תופים מהירים"),
];

/// Lyrics plus the suggested arrangement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSong {
    /// Verses and chorus
    pub lyrics: String,
    /// Tempo, instruments, structure and vocal notes
    pub structure: String,
}

impl GeneratedSong {
    /// Text placed on the clipboard by the copy action.
    pub fn copy_text(&self) -> String {
        format!("{}\n\n{}", self.lyrics, self.structure)
    }
}

/// Typical instrumentation for a genre.
pub fn instruments_for(genre: &str) -> &'static str {
    INSTRUMENTS
        .iter()
        .find(|(name, _)| *name == genre)
        .map_or(DEFAULT_INSTRUMENTS, |(_, list)| list)
}

// The skeleton is the same for every genre; only the interpolated text changes.
struct Template {
    verses: [String; 2],
    chorus: String,
    structure: String,
}

impl Template {
    fn default_for(genre: &str, keyword: &str, decade: &Decade) -> Self {
        Template {
            verses: [
                format!(
                    "בלילות שקטים, {keyword} מרחף באוויר\nכמו מנגינה ישנה שלא נגמרה\nהלב פועם בקצב של {genre}\nוהזמן עוצר, רק המוזיקה נשארה"
                ),
                format!(
                    "ברחובות העיר, {keyword} לוחש בשקט\nצלילים מתערבבים כמו חלום\nמהעשור של {}, הסיפור נולד\nוכל תו הוא רגע שלא יחזור",
                    decade.name
                ),
            ],
            chorus: format!(
                "{keyword}, {keyword}\nתן למוזיקה לדבר\nבסגנון {genre} אנחנו שרים\nבואו נרקוד עד הבוקר"
            ),
            structure: format!(
                "🎵 מבנה מומלץ:\n• קצב: בינוני-מהיר, אופייני ל{genre}\n• מפתח: רה מינור (Dm)\n• כלי נגינה: {}\n• מבנה: בית → פזמון → בית → פזמון → גשר → פזמון",
                instruments_for(genre)
            ),
        }
    }
}

/// Fill the song skeleton with `keyword`, `genre` and the decade name.
///
/// Blank inputs are the caller's problem; this never fails and always returns
/// the same song for the same arguments.
pub fn generate(genre: &str, keyword: &str, decade: &Decade) -> GeneratedSong {
    let Template {
        verses: [first, second],
        chorus,
        structure,
    } = Template::default_for(genre, keyword, decade);

    let lyrics = format!(
        "🎤 בית 1:\n{first}\n\n🎶 פזמון:\n{chorus}\n\n🎤 בית 2:\n{second}\n\n🎶 פזמון:\n{chorus}"
    );

    GeneratedSong { lyrics, structure }
}
