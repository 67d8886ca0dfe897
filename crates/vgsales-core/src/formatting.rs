/// Format a number with comma-grouped thousands and a fixed number of
/// decimal places.
///
/// Rounding is whatever Rust's float formatting does for the stored binary
/// value; chart labels never need more fidelity than that.
///
/// # Examples
///
/// ```
/// use vgsales_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5, 1), "1,234.5");
/// assert_eq!(format_number(82.74, 0), "83");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    // Let the standard formatter do the rounding, then regroup the digits.
    let plain = format!("{:.*}", decimals as usize, value.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(plain.len() + digits / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a sales figure (in millions of units) as a tooltip label.
///
/// # Examples
///
/// ```
/// use vgsales_core::formatting::format_millions;
///
/// assert_eq!(format_millions(82.74), "82.7 mn");
/// assert_eq!(format_millions(1234.5), "1,234.5 mn");
/// ```
pub fn format_millions(value: f64) -> String {
    format!("{} mn", format_number(value, 1))
}

/// Clip a label to `max_len` characters, appending an ellipsis when clipped.
///
/// Axis labels for long publisher names are shortened this way before they
/// reach the chart.
///
/// # Examples
///
/// ```
/// use vgsales_core::formatting::truncate_label;
///
/// assert_eq!(truncate_label("Nintendo", 10), "Nintendo");
/// assert_eq!(truncate_label("Sony Computer Entertainment", 10), "Sony Compu...");
/// ```
pub fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }
    let clipped: String = label.chars().take(max_len).collect();
    format!("{}...", clipped)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
