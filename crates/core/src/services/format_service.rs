use crate::models::panel::Tone;

/// `$25,000.00`; negatives as `-$18.00`.
pub fn money(value: f64, symbol: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{}", group_thousands(value.abs()))
}

/// Like [`money`] but always signed: `+$28.00`, `-$18.00`. Zero is `+`.
pub fn signed_money(value: f64, symbol: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    format!("{sign}{symbol}{}", group_thousands(value.abs()))
}

/// `68.50%`
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// `+0.65%`, `-1.20%`
pub fn signed_percent(value: f64) -> String {
    if value < 0.0 {
        format!("{value:.2}%")
    } else {
        format!("+{value:.2}%")
    }
}

/// Price with thousands separators but no currency symbol: `43,480.00`.
pub fn price(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(value.abs()))
}

/// Quantity trimmed of trailing zeros: `0.1`, `1.5`, `2000`.
pub fn quantity(value: f64) -> String {
    let s = format!("{value:.8}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn tone_of(value: f64) -> Tone {
    if value > 0.0 {
        Tone::Positive
    } else if value < 0.0 {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

/// Two decimals, comma-grouped integer part. Expects a non-negative value.
fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{frac_part}")
}
