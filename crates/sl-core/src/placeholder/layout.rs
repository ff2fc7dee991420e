//! Text layout of the branded placeholder image.
//! 占位图文本布局。

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::ids::CampaignId;

pub const LINE_HEIGHT_PX: u32 = 40;
pub const CAMPAIGN_ID_DISPLAY_CHARS: usize = 12;
pub const PROMPT_DISPLAY_CHARS: usize = 40;
const ELLIPSIS: &str = "...";

/// Static branding lines shown at the top of the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceholderBranding {
    pub label: String,
    pub subtitle: String,
}

impl Default for PlaceholderBranding {
    fn default() -> Self {
        Self {
            label: "SOLARA AI".to_string(),
            subtitle: "Content Generation".to_string(),
        }
    }
}

/// Prompt shortened to [`PROMPT_DISPLAY_CHARS`] characters, with an ellipsis
/// only when something was cut.
pub fn prompt_preview(prompt: &str) -> String {
    let mut chars = prompt.chars();
    let head: String = chars.by_ref().take(PROMPT_DISPLAY_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}{ELLIPSIS}")
    } else {
        head
    }
}

/// Local wall-clock time for a Unix-millisecond timestamp. Out-of-range
/// values fall back to the epoch.
pub fn local_timestamp(ms: i64) -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .unwrap_or_default()
        .with_timezone(&Local)
        .naive_local()
}

/// The fixed, ordered line sequence. Blank entries are separators.
pub fn placeholder_lines(
    branding: &PlaceholderBranding,
    campaign_id: &CampaignId,
    prompt: &str,
    generated_at: NaiveDateTime,
) -> Vec<String> {
    vec![
        branding.label.clone(),
        branding.subtitle.clone(),
        String::new(),
        format!("Campaign: {}", campaign_id.short(CAMPAIGN_ID_DISPLAY_CHARS)),
        format!("Prompt: {}", prompt_preview(prompt)),
        String::new(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M")),
    ]
}

/// A line of text with its top edge in canvas pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    pub text: String,
    pub y: u32,
}

/// Placeholder canvas size plus positioned text lines.
///
/// The block height counts only non-empty lines, while each line keeps the
/// slot of its index in the full sequence, so separators still push later
/// lines down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderLayout {
    pub width: u32,
    pub height: u32,
    pub lines: Vec<LayoutLine>,
}

impl PlaceholderLayout {
    pub fn new(width: u32, height: u32, lines: &[String]) -> Self {
        let non_empty = lines.iter().filter(|line| !line.is_empty()).count() as u32;
        let start_y = height.saturating_sub(non_empty * LINE_HEIGHT_PX) / 2;

        let lines = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| LayoutLine {
                text: line.clone(),
                y: start_y + i as u32 * LINE_HEIGHT_PX,
            })
            .collect();

        Self {
            width,
            height,
            lines,
        }
    }
}
