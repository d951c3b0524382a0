//! Report formatting utilities for terminal output

/// Progress bar for `bought` out of `qty` units
pub fn format_bar(bought: u32, qty: u32, width: usize) -> String {
    if qty == 0 || bought == 0 {
        return "░".repeat(width);
    }

    let filled = ((f64::from(bought) / f64::from(qty)) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
