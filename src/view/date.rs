//! Date formatting in the reader's fixed locale (tr-TR, Europe/Istanbul).

use chrono::{DateTime, Datelike, FixedOffset, Utc};

/// Istanbul has stayed on UTC+03:00 all year since 2016.
const LOCALE_OFFSET_SECS: i32 = 3 * 3600;

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

fn to_locale(date: &DateTime<Utc>) -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(LOCALE_OFFSET_SECS) {
        Some(offset) => date.with_timezone(&offset),
        None => date.fixed_offset(),
    }
}

/// `5 Mart 2024`
pub fn long_date(date: &DateTime<Utc>) -> String {
    let local = to_locale(date);
    let month = MONTHS[local.month0() as usize];
    format!("{} {} {}", local.day(), month, local.year())
}

/// `05.03.2024`
pub fn numeric_date(date: &DateTime<Utc>) -> String {
    let local = to_locale(date);
    format!("{:02}.{:02}.{}", local.day(), local.month(), local.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn long_form_uses_turkish_month_names() {
        assert_eq!(long_date(&parse("2024-03-05T00:00:00Z")), "5 Mart 2024");
        assert_eq!(long_date(&parse("2023-08-19T12:00:00Z")), "19 Ağustos 2023");
    }

    #[test]
    fn numeric_form_pads_day_and_month() {
        assert_eq!(numeric_date(&parse("2024-03-05T00:00:00Z")), "05.03.2024");
    }

    #[test]
    fn late_utc_evening_rolls_into_next_local_day() {
        let date = parse("2024-12-31T22:30:00Z");
        assert_eq!(long_date(&date), "1 Ocak 2025");
        assert_eq!(numeric_date(&date), "01.01.2025");
    }
}
