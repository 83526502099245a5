use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_abbrev(month: u32) -> Option<&'static str> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

pub fn month_number(abbrev: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == abbrev)
        .map(|i| i as u32 + 1)
}

/// `2024-03-07` -> `07/Mar/2024`
pub fn iso_to_gateway_date(iso: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()?;
    // Reject unpadded input so the conversion stays invertible.
    if date.format("%Y-%m-%d").to_string() != iso {
        return None;
    }
    Some(format!(
        "{:02}/{}/{:04}",
        date.day(),
        month_abbrev(date.month())?,
        date.year()
    ))
}

/// `07/Mar/2024` -> `2024-03-07`
pub fn gateway_to_iso_date(gateway: &str) -> Option<String> {
    let date = parse_gateway_date(gateway)?;
    Some(date.format("%Y-%m-%d").to_string())
}

pub(crate) fn parse_gateway_date(gateway: &str) -> Option<NaiveDate> {
    let mut parts = gateway.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || day.len() != 2 || year.len() != 4 {
        return None;
    }
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month_number(month)?, day)
}
