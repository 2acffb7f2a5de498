//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  Rendering is a pure function of
//! state: it issues no network calls and reports nothing back to the
//! synchronization worker.
//!
//! The main area shows exactly one of, in priority order: a loading
//! indicator, the current error notice, a "no data yet" hint, or the news
//! list.  A one-line status bar at the bottom carries the latest ingestion
//! summary, the item count, and key help.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::api::{HoaxLabel, NewsItem};
use crate::app::App;

const TITLE: &str = " Hoax Watch ";

/// Hint shown when the backend has no articles yet.
pub const EMPTY_NOTICE: &str = "No news yet. Press r to ingest articles from the RSS source.";

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    if app.sync.is_loading {
        draw_message(frame, main_area, "Loading news…", Color::Yellow);
    } else if let Some(error) = app.sync.error.clone() {
        draw_message(frame, main_area, &error, Color::Red);
    } else if app.sync.items.is_empty() {
        draw_message(frame, main_area, EMPTY_NOTICE, Color::Yellow);
    } else {
        draw_news_list(app, frame, main_area);
    }

    draw_status_bar(app, frame, status_area);
}

/// Render a single centered-ish notice inside the main block.
fn draw_message(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true })
    .block(Block::default().title(TITLE).borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Render the scrollable article list.
fn draw_news_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .sync
        .items
        .iter()
        .map(render_item)
        .collect();

    let list = List::new(list_items)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Pure per-item formatting: title, meta line, preview, date, optional link.
fn render_item(item: &NewsItem) -> ListItem<'static> {
    let (badge, badge_color) = badge_style(item.hoax_label);

    let mut meta = vec![
        Span::styled(
            item.source_label().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(format!("[{badge}]"), Style::default().fg(badge_color)),
    ];
    if let Some(percent) = item.confidence_percent() {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(
            format!("confidence {percent}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(meta),
    ];

    let preview = item.preview();
    if !preview.is_empty() {
        lines.push(Line::from(Span::styled(
            preview,
            Style::default().fg(Color::Gray),
        )));
    }

    let mut footer = vec![Span::styled(
        item.display_date(),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(link) = &item.link {
        footer.push(Span::raw("  "));
        footer.push(Span::styled(
            link.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    lines.push(Line::from(footer));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn badge_style(label: HoaxLabel) -> (&'static str, Color) {
    let color = match label {
        HoaxLabel::Hoax => Color::Red,
        HoaxLabel::NonHoax => Color::Green,
        HoaxLabel::Unknown => Color::Yellow,
    };
    (label.badge_text(), color)
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status_text = if app.sync.is_fetching_rss {
        "Ingesting articles from RSS…".to_string()
    } else if let Some(notice) = &app.sync.notice {
        notice.clone()
    } else {
        "Ready".to_string()
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} items", app.sync.items.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  q: quit  r: ingest  l: reload  ↑/↓: scroll"),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IngestSummary;
    use crate::sync::{SyncEvent, LOAD_FAILED_NOTICE};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

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

    /// Render one frame and return the buffer contents as a flat string.
    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn loading_state_shows_indicator() {
        let mut app = App::new();
        app.apply(SyncEvent::LoadStarted);

        let text = render(&mut app);
        assert!(text.contains("Loading news"));
    }

    #[test]
    fn error_state_shows_generic_notice() {
        let mut app = App::new();
        app.apply(SyncEvent::LoadStarted);
        app.apply(SyncEvent::LoadFailed);

        let text = render(&mut app);
        assert!(text.contains("Failed to load news"));
        assert!(LOAD_FAILED_NOTICE.starts_with("Failed to load news"));
    }

    #[test]
    fn empty_list_shows_no_data_notice_not_error() {
        let mut app = App::new();
        app.apply(SyncEvent::LoadStarted);
        app.apply(SyncEvent::LoadFinished(Vec::new()));

        let text = render(&mut app);
        assert!(text.contains("No news yet"));
        assert!(!text.contains("Failed to load"));
    }

    #[test]
    fn hoax_item_renders_badge_and_confidence() {
        let mut item = make_item("1", "A");
        item.hoax_label = HoaxLabel::Hoax;
        item.confidence = Some(0.87);

        let mut app = App::new();
        app.apply(SyncEvent::LoadFinished(vec![item]));

        let text = render(&mut app);
        assert!(text.contains("[Hoax]"));
        assert!(text.contains("87.0%"));
    }

    #[test]
    fn unlabeled_item_renders_unverified_badge() {
        let mut app = App::new();
        app.apply(SyncEvent::LoadFinished(vec![make_item("1", "A")]));

        let text = render(&mut app);
        assert!(text.contains("[Unverified]"));
        assert!(!text.contains("[Non-Hoax]"));
    }

    #[test]
    fn item_without_link_renders_without_panicking() {
        let mut item = make_item("1", "Linkless");
        item.content = "some body".into();

        let mut app = App::new();
        app.apply(SyncEvent::LoadFinished(vec![item]));

        let text = render(&mut app);
        assert!(text.contains("Linkless"));
        assert!(!text.contains("http"));
    }

    #[test]
    fn item_with_link_renders_it() {
        let mut item = make_item("1", "Linked");
        item.link = Some("https://example.com/a".into());

        let mut app = App::new();
        app.apply(SyncEvent::LoadFinished(vec![item]));

        let text = render(&mut app);
        assert!(text.contains("https://example.com/a"));
    }

    #[test]
    fn status_bar_shows_ingesting_while_fetching() {
        let mut app = App::new();
        app.apply(SyncEvent::RefreshStarted);

        let text = render(&mut app);
        assert!(text.contains("Ingesting articles"));
    }

    #[test]
    fn status_bar_shows_summary_notice_and_count() {
        let mut app = App::new();
        app.apply(SyncEvent::RefreshStarted);
        app.apply(SyncEvent::RefreshSummary(IngestSummary {
            message: "Done".into(),
            processed: 5,
            skipped: 2,
        }));
        app.apply(SyncEvent::LoadStarted);
        app.apply(SyncEvent::LoadFinished(vec![make_item("1", "A")]));
        app.apply(SyncEvent::RefreshSettled);

        let text = render(&mut app);
        assert!(text.contains("Done"));
        assert!(text.contains("processed: 5"));
        assert!(text.contains("skipped: 2"));
        assert!(text.contains("1 items"));
    }

    #[test]
    fn stale_items_still_render_with_error_present() {
        // A failed refresh keeps the old list; the error takes the main area
        // but the item count in the status bar reflects the stale data.
        let mut app = App::new();
        app.apply(SyncEvent::LoadFinished(vec![make_item("1", "Old")]));
        app.apply(SyncEvent::LoadStarted);
        app.apply(SyncEvent::LoadFailed);

        let text = render(&mut app);
        assert!(text.contains("Failed to load news"));
        assert!(text.contains("1 items"));
    }
}
