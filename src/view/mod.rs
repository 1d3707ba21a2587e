/// Decade detail panel state
pub mod panel;
/// Hero and timeline cards
pub mod timeline;

use crate::catalog::Catalog;
use panel::DetailPanel;

/// Top-level view state: the timeline, plus the panel of the decade that is
/// currently open, if any.
pub struct App<'a> {
    catalog: &'a Catalog,
    panel: Option<DetailPanel<'a>>,
}

impl<'a> App<'a> {
    /// Timeline over `catalog` with no panel open.
    pub fn new(catalog: &'a Catalog) -> Self {
        App {
            catalog,
            panel: None,
        }
    }

    /// Open the panel for the card at `index`, replacing any open panel.
    pub fn select(&mut self, index: usize) -> Option<&mut DetailPanel<'a>> {
        let decade = timeline::select(self.catalog, index)?;
        Some(self.panel.insert(DetailPanel::open(decade)))
    }

    /// Same as [`App::select`], by decade id.
    pub fn select_id(&mut self, id: &str) -> Option<&mut DetailPanel<'a>> {
        let index = self.catalog.decades().iter().position(|d| d.id == id)?;
        self.select(index)
    }

    /// The open panel.
    pub fn panel(&self) -> Option<&DetailPanel<'a>> {
        self.panel.as_ref()
    }

    /// Close the panel. Its state is discarded, so a result that arrives
    /// afterwards has nowhere to go.
    pub fn close(&mut self) {
        self.panel = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::panel::PanelMode;

    #[test]
    fn test_select_and_close() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog);
        assert!(app.panel().is_none());

        let panel = app.select_id("1970s").unwrap();
        panel.toggle_hit(0);
        panel.start_composing();
        assert_eq!(app.panel().unwrap().decade().id, "1970s");
        assert_eq!(app.panel().unwrap().mode(), PanelMode::Composing);

        app.close();
        assert!(app.panel().is_none());

        let panel = app.select_id("1970s").unwrap();
        assert_eq!(panel.mode(), PanelMode::Info);
        assert!(panel.active_video().is_none());
    }

    #[test]
    fn test_select_unknown() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog);
        assert!(app.select(catalog.decades().len()).is_none());
        assert!(app.select_id("1800s").is_none());
    }

    #[test]
    fn test_selecting_another_decade_starts_fresh() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog);
        app.select(0).unwrap().start_composing();
        let panel = app.select(1).unwrap();
        assert_eq!(panel.decade().id, catalog.decades()[1].id);
        assert_eq!(panel.mode(), PanelMode::Info);
    }
}
