/// Renders a fraction as a percentage rounded to three decimals, `0.27` ->
/// `"27.0%"`. Rounding is done once on the exact binary value with ties to
/// even. Trailing zeros are dropped but one decimal always stays so the
/// output reads as a float.
pub fn format_percent(fraction: f64) -> String {
    let percent = fraction * 100.0;
    if !percent.is_finite() {
        return format!("{percent}%");
    }

    let mut text = format!("{percent:.3}");
    let trimmed = text.trim_end_matches('0').len();
    text.truncate(trimmed);
    if text.ends_with('.') {
        text.push('0');
    }
    text.push('%');
    text
}
