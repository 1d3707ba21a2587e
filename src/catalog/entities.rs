use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// A song of the era with a link to hear it.
pub struct Hit {
    /// Song title
    pub title: String,
    /// Performer
    pub artist: String,
    /// Watch, short or embed link; search links carry no video id
    pub youtube_url: String,
}

/// One era of the timeline, loaded once from the fixture and never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Decade {
    /// Unique key, e.g. `1980s`
    pub id: String,
    /// Display name
    pub name: String,
    /// Year range label, e.g. `1980-1989`
    pub years: String,
    /// One-paragraph summary
    pub description: String,
    /// Emoji
    pub icon: String,
    /// Characteristic genres, most typical first
    pub genres: Vec<String>,
    /// Hits shown on the timeline card
    pub preview_hits: Vec<Hit>,
    /// Full list for the detail panel
    pub all_hits: Vec<Hit>,
    /// Shown in the panel's history box
    pub historical_note: String,
}
