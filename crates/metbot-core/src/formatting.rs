//! Formatting utilities (artwork record → Telegram HTML caption + image URL).

use crate::artwork::ArtworkRecord;

/// Caption + image ready to hand to the messenger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    pub caption_html: String,
    pub image_url: Option<String>,
}

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Labelled fields in display order.
fn caption_fields(record: &ArtworkRecord) -> [(&'static str, Option<&str>); 7] {
    [
        ("Title", record.title.as_deref()),
        ("Artist", record.artist_display_name.as_deref()),
        ("Date", record.object_date.as_deref()),
        ("Culture", record.culture.as_deref()),
        ("Period", record.period.as_deref()),
        ("Medium", record.medium.as_deref()),
        ("Country", record.country.as_deref()),
    ]
}

/// One `<b>Label</b>: value` line per non-empty field, then a link to the
/// object page when the record has one.
pub fn format_caption(record: &ArtworkRecord) -> String {
    let mut lines: Vec<String> = caption_fields(record)
        .into_iter()
        .filter_map(|(label, value)| {
            let value = non_empty(value)?;
            Some(format!("<b>{label}</b>: {}", escape_html(value)))
        })
        .collect();

    if let Some(url) = non_empty(record.object_url.as_deref()) {
        lines.push(format!(
            "\n<a href=\"{}\">View on Met website</a>",
            escape_html(url)
        ));
    }

    lines.join("\n")
}

/// Small primary image, then primary image, then the first additional image.
pub fn select_image(record: &ArtworkRecord) -> Option<&str> {
    non_empty(record.primary_image_small.as_deref())
        .or_else(|| non_empty(record.primary_image.as_deref()))
        .or_else(|| {
            non_empty(
                record
                    .additional_images
                    .as_ref()
                    .and_then(|imgs| imgs.first())
                    .map(String::as_str),
            )
        })
}

pub fn render(record: &ArtworkRecord) -> RenderedMessage {
    RenderedMessage {
        caption_html: format_caption(record),
        image_url: select_image(record).map(str::to_string),
    }
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.trim().is_empty())
}
