//! Text and chart rendering for analysis results.

pub mod chart;
pub mod verdict;

pub use chart::*;
pub use verdict::*;

/// Format a dollar amount with thousands separators: `$71,500.00`.
pub fn format_usd(value: f64) -> String {
    format!("${}", group_thousands(value, 2))
}

/// Fixed-precision number with `,` between thousands groups.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3 + 1);
    if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d as char);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
