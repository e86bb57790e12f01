use alloy::primitives::{Address, TxHash};
use chrono::{DateTime, Utc};
use ratatui::layout::Rect;

/// Truncate a transaction hash to "0xabcd...ef12" format
pub fn truncate_hash(hash: &TxHash) -> String {
    truncate_middle(&format!("{hash}"))
}

/// Truncate an address to "0xabcd...ef12" format
pub fn truncate_address(addr: &Address) -> String {
    truncate_middle(&format!("{addr}"))
}

fn truncate_middle(s: &str) -> String {
    if s.len() > 14 {
        format!("{}...{}", &s[..8], &s[s.len() - 4..])
    } else {
        s.to_string()
    }
}

/// Format a trip time, "Invalid Date" when out of range
pub fn format_trip_time(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|dt| dt.format("%a %b %d %Y %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}

/// Rect of `width` x `height` centered in `area`, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
