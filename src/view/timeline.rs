use std::fmt::Write;

use crate::catalog::styling::color_for;
use crate::catalog::{Catalog, Decade, Hit};

/// Badges shown on a card; the detail panel lists every genre.
pub const CARD_GENRES: usize = 3;

const ANSI_RESET: &str = "\x1b[0m";

/// Static texts of the page header and footer.
pub struct Hero;

impl Hero {
    /// Page title
    pub const TITLE: &'static str = "ציר הזמן המוזיקלי";
    /// Two-line tagline under the title
    pub const SUBTITLE: &'static str = "מסע אינטראקטיבי בהיסטוריה של המוזיקה, מ-1900 ועד היום.\n\
        גלו את הסגנונות, הלהיטים, וצרו שירים חדשים בעזרת AI.";
    /// Hint under the tagline
    pub const SCROLL_HINT: &'static str = "גלול למטה";
    /// Printed after the last card
    pub const END_MARKER: &'static str = "🎧";
}

/// Which side of the timeline line a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Leading side; the first card goes here
    Start,
    /// Trailing side
    End,
}

/// One decade card on the timeline.
#[derive(Debug)]
pub struct TimelineCard<'a> {
    /// Position in the catalog
    pub index: usize,
    /// Side of the line
    pub side: Side,
    /// The decade shown
    pub decade: &'a Decade,
}

impl<'a> TimelineCard<'a> {
    /// Genre badges, capped at [`CARD_GENRES`].
    pub fn genres(&self) -> &'a [String] {
        let genres = &self.decade.genres;
        &genres[..genres.len().min(CARD_GENRES)]
    }

    /// Hits listed on the card.
    pub fn preview_hits(&self) -> &'a [Hit] {
        &self.decade.preview_hits
    }
}

/// Cards in dataset order, alternating sides starting with [`Side::Start`].
pub fn cards(catalog: &Catalog) -> Vec<TimelineCard<'_>> {
    catalog
        .decades()
        .iter()
        .enumerate()
        .map(|(index, decade)| TimelineCard {
            index,
            side: if index % 2 == 0 { Side::Start } else { Side::End },
            decade,
        })
        .collect()
}

/// The "discover more" button: resolves a card index back to its decade.
pub fn select(catalog: &Catalog, index: usize) -> Option<&Decade> {
    catalog.decades().get(index)
}

/// `[genre]`, coloured when `ansi` is set.
pub fn render_badge(genre: &str, ansi: bool) -> String {
    if ansi {
        format!("{}[{genre}]{ANSI_RESET}", color_for(genre).ansi_code())
    } else {
        format!("[{genre}]")
    }
}

/// Plain-text rendering of the hero and every card.
pub fn render(catalog: &Catalog, ansi: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🎵 {} 🎶\n{}", Hero::TITLE, Hero::SUBTITLE);
    let _ = writeln!(out, "  ↓ {}\n", Hero::SCROLL_HINT);

    for card in cards(catalog) {
        let indent = match card.side {
            Side::Start => "",
            Side::End => "        ",
        };
        let d = card.decade;
        let _ = writeln!(out, "{indent}{} {}  ({})  #{}", d.icon, d.name, d.years, d.id);
        let _ = writeln!(out, "{indent}  {}", d.description);
        let badges: Vec<_> = card.genres().iter().map(|g| render_badge(g, ansi)).collect();
        let _ = writeln!(out, "{indent}  {}", badges.join(" "));
        for hit in card.preview_hits() {
            let _ = writeln!(
                out,
                "{indent}  ♪ {} - {}  {}",
                hit.title, hit.artist, hit.youtube_url
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", Hero::END_MARKER);
    out
}
