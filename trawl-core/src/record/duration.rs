/// Normalize a duration token to whole milliseconds.
///
/// `"25ms"` is taken as integer milliseconds. `"1.5s"` and the bare
/// `"0.042"` written by the gateway are seconds, truncated to milliseconds.
pub fn parse_duration_ms(token: &str) -> Option<u64> {
    if let Some(ms) = token.strip_suffix("ms") {
        return ms.parse::<u64>().ok();
    }

    let secs = token.strip_suffix('s').unwrap_or(token);
    let (whole, frac) = secs.split_once('.').unwrap_or((secs, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Decimal arithmetic on the digits avoids float rounding at the ms boundary.
    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let millis: u64 = frac
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'));

    whole.checked_mul(1000)?.checked_add(millis)
}
