use ratatui::widgets::ListState;

use crate::sync::{SyncEvent, SyncState};

pub struct App {
    /// Backend synchronization state; mutated only via [`App::apply`].
    pub sync: SyncState,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            sync: SyncState::new(),
            list_state: ListState::default(),
            quit: false,
        }
    }

    /// Apply one worker event and keep the selection within bounds.
    pub fn apply(&mut self, event: SyncEvent) {
        self.sync.apply(event);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.sync.items.len();
        if len == 0 {
            self.list_state.select(None);
        } else if let Some(i) = self.list_state.selected() {
            if i >= len {
                self.list_state.select(Some(len - 1));
            }
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.sync.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.sync.items.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.sync.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.sync.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.sync.items.is_empty() {
            self.list_state.select(Some(self.sync.items.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HoaxLabel, NewsItem};

    fn make_item(id: &str, title: &str) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            source: None,
            link: None,
            hoax_label: HoaxLabel::Unknown,
            confidence: None,
            published_time: None,
            created_at: None,
        }
    }

    fn loaded_app(n: usize) -> App {
        let mut app = App::new();
        let items = (0..n)
            .map(|i| make_item(&i.to_string(), &format!("Item {i}")))
            .collect();
        app.apply(SyncEvent::LoadFinished(items));
        app
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_app_starts_empty() {
        let app = App::new();
        assert!(app.sync.items.is_empty());
        assert!(!app.quit);
        assert!(app.list_state.selected().is_none());
    }

    // -- navigation ----------------------------------------------------------

    #[test]
    fn select_next_on_empty_is_noop() {
        let mut app = App::new();
        app.select_next();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_previous_on_empty_is_noop() {
        let mut app = App::new();
        app.select_previous();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_next_starts_at_zero_then_advances() {
        let mut app = loaded_app(3);

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn select_next_clamps_at_last_item() {
        let mut app = loaded_app(3);

        app.select_last();
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_previous_clamps_at_zero() {
        let mut app = loaded_app(3);

        app.select_first();
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn select_first_and_last_jump() {
        let mut app = loaded_app(3);

        app.select_last();
        assert_eq!(app.list_state.selected(), Some(2));
        app.select_first();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    // -- selection clamping on reload ------------------------------------------

    #[test]
    fn selection_clamps_when_reload_shrinks_the_list() {
        let mut app = loaded_app(5);
        app.select_last();

        app.apply(SyncEvent::LoadFinished(vec![make_item("only", "Only")]));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn selection_clears_when_reload_empties_the_list() {
        let mut app = loaded_app(2);
        app.select_first();

        app.apply(SyncEvent::LoadFinished(Vec::new()));
        assert!(app.list_state.selected().is_none());
    }
}
