//! The wire data model shared across the client.
//!
//! `NewsItem` mirrors the record shape the backend serves: an article pulled
//! from an RSS source, stored with a hoax/non-hoax classification and an
//! optional confidence score.  The client decodes these as-is and performs
//! no transformation beyond the pure display helpers below.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Maximum number of characters shown in a content preview.
const PREVIEW_CHARS: usize = 200;

/// Shown when neither timestamp is present or parsable.
pub const DATE_PLACEHOLDER: &str = "date unavailable";

/// Shown when the backend did not record an origin for an article.
pub const UNKNOWN_SOURCE: &str = "unknown source";

/// Classification assigned by the backend pipeline.
///
/// The wire carries `"hoax"`, `"non-hoax"`, or nothing at all.  Anything
/// unrecognized (including an absent field) maps to [`HoaxLabel::Unknown`],
/// which gets its own badge rather than being conflated with an explicit
/// non-hoax verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoaxLabel {
    Hoax,
    NonHoax,
    #[default]
    #[serde(other)]
    Unknown,
}

impl HoaxLabel {
    /// Badge text shown next to the article's source.
    pub fn badge_text(self) -> &'static str {
        match self {
            HoaxLabel::Hoax => "Hoax",
            HoaxLabel::NonHoax => "Non-Hoax",
            HoaxLabel::Unknown => "Unverified",
        }
    }
}

/// A single classified article as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsItem {
    /// Opaque identifier assigned by the backend.
    pub id: String,

    /// Headline.
    pub title: String,

    /// Full article body; may be empty.
    #[serde(default)]
    pub content: String,

    /// Origin label (feed or publisher name).
    #[serde(default)]
    pub source: Option<String>,

    /// URL of the original article.
    #[serde(default)]
    pub link: Option<String>,

    /// Classification; absent, null, or unrecognized values decode as
    /// `Unknown`.
    #[serde(default, deserialize_with = "nullable_label")]
    pub hoax_label: HoaxLabel,

    /// Classifier confidence in [0, 1].  `Some(0.0)` is a real score and is
    /// rendered as such; only `None` means "no score recorded".
    #[serde(default)]
    pub confidence: Option<f64>,

    /// When the article was published, as reported by the feed.
    #[serde(default)]
    pub published_time: Option<String>,

    /// When the backend stored the article.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl NewsItem {
    /// First [`PREVIEW_CHARS`] characters of the body, with an ellipsis when
    /// truncated.  Counts characters, not bytes, so multi-byte text is safe.
    pub fn preview(&self) -> String {
        let mut out: String = self.content.chars().take(PREVIEW_CHARS).collect();
        if self.content.chars().count() > PREVIEW_CHARS {
            out.push('…');
        }
        out
    }

    /// Source label, falling back to [`UNKNOWN_SOURCE`].
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or(UNKNOWN_SOURCE)
    }

    /// Confidence as a percentage with one decimal place, when a score is
    /// recorded.  A score of exactly zero renders as `"0.0%"`.
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence.map(|c| format!("{:.1}%", c * 100.0))
    }

    /// Display timestamp: prefers `published_time`, falls back to
    /// `created_at`, then to [`DATE_PLACEHOLDER`] when neither parses.
    pub fn display_date(&self) -> String {
        self.published_time
            .as_deref()
            .and_then(parse_timestamp)
            .or_else(|| self.created_at.as_deref().and_then(parse_timestamp))
            .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
    }
}

/// The backend serializes an unclassified article with an explicit null,
/// which a bare enum field would reject.
fn nullable_label<'de, D>(deserializer: D) -> Result<HoaxLabel, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HoaxLabel>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a backend timestamp string into display form.
///
/// Accepts RFC 3339 as well as the offset-less ISO form the backend emits
/// for locally generated timestamps.
fn parse_timestamp(raw: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format("%Y-%m-%d %H:%M").to_string());
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

/// Envelope for the list endpoint: item count plus the items themselves, in
/// backend order.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsListResponse {
    #[serde(default)]
    pub total: u64,
    pub news: Vec<NewsItem>,
}

/// Result summary of a triggered RSS ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngestSummary {
    pub message: String,
    pub processed: u64,
    pub skipped: u64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
