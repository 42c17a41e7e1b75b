//! Display-time number formatting. Stored values are never rounded; rounding
//! happens only here.

/// Formats an amount with thousands separators and two decimals, prefixed by the
/// currency symbol: `S/ 1,234.50`, `S/ -400.00`. Non-finite amounts show `N/A`.
pub fn format_money(symbol: &str, amount: f64) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }
    let grouped = group_thousands(amount, 2);
    if symbol.is_empty() {
        grouped
    } else {
        format!("{symbol} {grouped}")
    }
}

/// Percentage with one decimal, `N/A` when undefined.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(percent) => format!("{}%", group_thousands(percent, 1)),
        None => "N/A".to_string(),
    }
}

/// Renders `value` with `decimals` places and comma-grouped integer digits.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let negative = value < 0.0 && fixed.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
