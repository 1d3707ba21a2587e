//! State of the decade detail panel.
//!
//! The panel moves between [`PanelMode::Info`], [`PanelMode::Composing`] and
//! [`PanelMode::Result`], and owns the single "active video" slot: at most one
//! hit plays at a time, and starting another one replaces it.

use crate::catalog::video::{embed_url, extract_video_id};
use crate::catalog::{Decade, Hit};
use crate::composer::{self, GeneratedSong};

use thiserror::Error;

/// Button label on the playing row
pub const PLAYING_LABEL: &str = "▶ מנגן";
/// Button label on every other row
pub const STOPPED_LABEL: &str = "▶ נגן";
/// Shown when generating with a blank field
pub const VALIDATION_NOTICE: &str = "נא למלא את כל השדות";

/// What the panel body is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// Decade facts and hit list
    Info,
    /// The song form
    Composing,
    /// A generated song
    Result,
}

/// Why a song was not shown.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Genre or keyword is blank.
    #[error("{}", VALIDATION_NOTICE)]
    MissingInput,
    /// The form is closed, e.g. the user went back before a remote song arrived.
    #[error("the song form is not open")]
    NotComposing,
}

/// One entry of the full hit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRow<'a> {
    /// The hit itself
    pub hit: &'a Hit,
    /// `None` when the link has no recognizable video id
    pub video_id: Option<&'a str>,
    /// Whether this row holds the active video slot
    pub playing: bool,
}

impl HitRow<'_> {
    /// Play button text.
    pub fn label(&self) -> &'static str {
        if self.playing { PLAYING_LABEL } else { STOPPED_LABEL }
    }

    /// Player URL, only while this row is playing.
    pub fn player_url(&self) -> Option<String> {
        if self.playing { self.video_id.map(embed_url) } else { None }
    }
}

/// Panel for one selected decade.
#[derive(Debug)]
pub struct DetailPanel<'a> {
    decade: &'a Decade,
    composing: bool,
    genre: Option<String>,
    keyword: String,
    result: Option<GeneratedSong>,
    active_video: Option<String>,
}

impl<'a> DetailPanel<'a> {
    /// Open on `decade` in [`PanelMode::Info`] with an empty form.
    pub fn open(decade: &'a Decade) -> Self {
        DetailPanel {
            decade,
            composing: false,
            genre: None,
            keyword: String::new(),
            result: None,
            active_video: None,
        }
    }

    /// The decade this panel shows.
    pub fn decade(&self) -> &'a Decade {
        self.decade
    }

    /// Current mode, derived from the form flag and the stored result.
    pub fn mode(&self) -> PanelMode {
        match (self.composing, &self.result) {
            (false, _) => PanelMode::Info,
            (true, None) => PanelMode::Composing,
            (true, Some(_)) => PanelMode::Result,
        }
    }

    /// Video id currently playing, if any.
    pub fn active_video(&self) -> Option<&str> {
        self.active_video.as_deref()
    }

    /// Every hit of the decade with its play state.
    pub fn hit_rows(&self) -> Vec<HitRow<'a>> {
        self.decade
            .all_hits
            .iter()
            .map(|hit| {
                let video_id = extract_video_id(&hit.youtube_url);
                HitRow {
                    hit,
                    video_id,
                    playing: video_id.is_some() && video_id == self.active_video.as_deref(),
                }
            })
            .collect()
    }

    /// Click on hit row `index`. Returns the player URL when a video starts.
    ///
    /// Clicking the playing row stops it; clicking another row switches the slot.
    /// Rows without a recognizable video id, and unknown indices, do nothing.
    pub fn toggle_hit(&mut self, index: usize) -> Option<String> {
        let hit = self.decade.all_hits.get(index)?;
        let video_id = extract_video_id(&hit.youtube_url)?;
        if self.active_video.as_deref() == Some(video_id) {
            self.active_video = None;
            None
        } else {
            self.active_video = Some(video_id.to_string());
            Some(embed_url(video_id))
        }
    }

    /// "Create a song": switch to the form.
    pub fn start_composing(&mut self) {
        self.composing = true;
    }

    /// Pick a genre button. Any text is accepted.
    pub fn select_genre(&mut self, genre: impl Into<String>) {
        self.genre = Some(genre.into());
    }

    /// Selected genre.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// Replace the keyword field.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// Keyword field, as typed.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Genre and keyword, when both are filled in. A whitespace-only keyword counts as blank.
    pub fn composition_input(&self) -> Result<(&str, &str), Rejection> {
        match self.genre.as_deref() {
            Some(genre) if !genre.is_empty() && !self.keyword.trim().is_empty() => {
                Ok((genre, self.keyword.as_str()))
            }
            _ => Err(Rejection::MissingInput),
        }
    }

    fn ready(&self) -> Result<(&str, &str), Rejection> {
        if !self.composing {
            return Err(Rejection::NotComposing);
        }
        self.composition_input()
    }

    /// Run the local template engine and show its song. Only from the form.
    pub fn generate(&mut self) -> Result<&GeneratedSong, Rejection> {
        let (genre, keyword) = self.ready()?;
        let song = composer::generate(genre, keyword, self.decade);
        Ok(self.result.insert(song))
    }

    /// Show a song produced elsewhere, e.g. by the remote proxy.
    ///
    /// Accepted under the same conditions as [`DetailPanel::generate`]; a song
    /// arriving after the form was left is dropped. The latest accepted call wins.
    pub fn show_result(&mut self, song: GeneratedSong) -> Result<&GeneratedSong, Rejection> {
        self.ready()?;
        Ok(self.result.insert(song))
    }

    /// Song on display.
    pub fn result(&self) -> Option<&GeneratedSong> {
        self.result.as_ref()
    }

    /// Text for the copy button, if a song is shown.
    pub fn copy_text(&self) -> Option<String> {
        self.result.as_ref().map(GeneratedSong::copy_text)
    }

    /// "New song": drop the result but keep the form.
    pub fn clear_result(&mut self) {
        self.result = None;
    }

    /// Back to the decade facts; the form keeps its values.
    pub fn back_to_info(&mut self) {
        self.composing = false;
        self.result = None;
    }

    /// Clear the form, result and active video.
    pub fn reset(&mut self) {
        self.composing = false;
        self.genre = None;
        self.keyword.clear();
        self.result = None;
        self.active_video = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn eighties() -> Decade {
        Catalog::embedded().unwrap().get("1980s").unwrap().clone()
    }

    fn song(lyrics: &str) -> GeneratedSong {
        GeneratedSong {
            lyrics: lyrics.to_string(),
            structure: String::new(),
        }
    }

    #[test]
    fn test_opens_in_info_mode() {
        let decade = eighties();
        let panel = DetailPanel::open(&decade);
        assert_eq!(panel.mode(), PanelMode::Info);
        assert!(panel.active_video().is_none());
        assert!(panel.hit_rows().iter().all(|r| !r.playing));
        assert_eq!(panel.hit_rows()[0].label(), STOPPED_LABEL);
    }

    #[test]
    fn test_single_active_video() {
        let decade = eighties();
        let mut panel = DetailPanel::open(&decade);

        let url = panel.toggle_hit(0).unwrap();
        assert_eq!(url, "https://www.youtube.com/embed/Zi_XLOBDo_Y?autoplay=1");
        assert_eq!(panel.active_video(), Some("Zi_XLOBDo_Y"));

        panel.toggle_hit(2).unwrap();
        assert_eq!(panel.active_video(), Some("dQw4w9WgXcQ"));
        let rows = panel.hit_rows();
        assert_eq!(rows.iter().filter(|r| r.playing).count(), 1);
        assert!(rows[2].playing);
        assert_eq!(rows[2].label(), PLAYING_LABEL);
        assert!(rows[0].player_url().is_none());
        assert!(rows[2].player_url().is_some());
    }

    #[test]
    fn test_clicking_playing_row_stops_it() {
        let decade = eighties();
        let mut panel = DetailPanel::open(&decade);
        panel.toggle_hit(1);
        assert!(panel.toggle_hit(1).is_none());
        assert!(panel.active_video().is_none());
    }

    #[test]
    fn test_row_without_video_id_is_noop() {
        let catalog = Catalog::embedded().unwrap();
        let decade = catalog.get("1900s").unwrap();
        let mut panel = DetailPanel::open(decade);
        panel.toggle_hit(0);
        let before = panel.active_video().map(str::to_string);

        // "Memphis Blues" links to a search page
        assert!(panel.toggle_hit(2).is_none());
        assert_eq!(panel.active_video().map(str::to_string), before);
        assert!(panel.hit_rows()[2].video_id.is_none());
        assert!(panel.toggle_hit(99).is_none());
    }

    #[test]
    fn test_generate_requires_genre_and_keyword() {
        let decade = eighties();
        let mut panel = DetailPanel::open(&decade);
        panel.start_composing();
        assert_eq!(panel.mode(), PanelMode::Composing);

        assert_eq!(panel.generate().unwrap_err(), Rejection::MissingInput);
        panel.select_genre("פופ");
        panel.set_keyword("   ");
        assert_eq!(panel.generate().unwrap_err().to_string(), VALIDATION_NOTICE);
        assert_eq!(panel.mode(), PanelMode::Composing);

        panel.set_keyword("ניאון");
        let song = panel.generate().unwrap().clone();
        assert!(song.lyrics.contains("ניאון"));
        assert_eq!(panel.mode(), PanelMode::Result);
        assert_eq!(panel.copy_text(), Some(song.copy_text()));
    }

    #[test]
    fn test_new_song_and_back() {
        let decade = eighties();
        let mut panel = DetailPanel::open(&decade);
        panel.start_composing();
        panel.select_genre("רוק");
        panel.set_keyword("לילה");
        panel.generate().unwrap();

        panel.clear_result();
        assert_eq!(panel.mode(), PanelMode::Composing);
        assert_eq!(panel.genre(), Some("רוק"));

        panel.generate().unwrap();
        panel.back_to_info();
        assert_eq!(panel.mode(), PanelMode::Info);
        assert!(panel.result().is_none());
        assert_eq!(panel.keyword(), "לילה");
    }

    #[test]
    fn test_remote_results_last_write_wins() {
        let decade = eighties();
        let mut panel = DetailPanel::open(&decade);
        panel.start_composing();
        panel.select_genre("דיסקו");
        panel.set_keyword("רחבה");
        panel.show_result(song("first")).unwrap();
        panel.show_result(song("second")).unwrap();
        assert_eq!(panel.result().unwrap().lyrics, "second");
        assert_eq!(panel.mode(), PanelMode::Result);
    }

    #[test]
    fn test_late_result_after_back_to_info_is_dropped() {
        let decade = eighties();
        let mut panel = DetailPanel::open(&decade);
        panel.start_composing();
        panel.select_genre("דיסקו");
        panel.set_keyword("רחבה");
        panel.back_to_info();

        assert_eq!(panel.show_result(song("late")), Err(Rejection::NotComposing));
        assert_eq!(panel.mode(), PanelMode::Info);
        assert!(panel.result().is_none());
    }

    #[test]
    fn test_show_result_on_fresh_panel_is_rejected() {
        let decade = eighties();
        let mut panel = DetailPanel::open(&decade);
        assert_eq!(panel.show_result(song("x")), Err(Rejection::NotComposing));
        assert_eq!(panel.generate().unwrap_err(), Rejection::NotComposing);
        assert_eq!(panel.mode(), PanelMode::Info);

        panel.start_composing();
        assert_eq!(panel.show_result(song("x")), Err(Rejection::MissingInput));
        assert_eq!(panel.mode(), PanelMode::Composing);
    }

    #[test]
    fn test_reset_clears_everything() {
        let decade = eighties();
        let mut panel = DetailPanel::open(&decade);
        panel.toggle_hit(0);
        panel.start_composing();
        panel.select_genre("פופ");
        panel.set_keyword("ים");
        panel.generate().unwrap();

        panel.reset();
        assert_eq!(panel.mode(), PanelMode::Info);
        assert!(panel.genre().is_none());
        assert!(panel.keyword().is_empty());
        assert!(panel.result().is_none());
        assert!(panel.active_video().is_none());
    }
}
