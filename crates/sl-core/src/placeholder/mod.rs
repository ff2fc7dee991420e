mod layout;

pub use layout::{
    local_timestamp, placeholder_lines, prompt_preview, LayoutLine, PlaceholderBranding,
    PlaceholderLayout, CAMPAIGN_ID_DISPLAY_CHARS, LINE_HEIGHT_PX, PROMPT_DISPLAY_CHARS,
};
