//! Calendar legality for the date-bearing formats.

use chrono::NaiveDate;

/// Two-digit years below this value belong to the 2000s, the rest to the 1900s.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// Build a date from already-matched digit groups.
///
/// Returns `None` when the groups are not numbers or do not name a real day
/// (month 13, day 32, February 30, February 29 outside leap years).
#[must_use]
pub fn from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Like [`from_parts`], but a two-digit `year` is expanded around
/// [`TWO_DIGIT_YEAR_PIVOT`] first.
#[must_use]
pub fn from_us_parts(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let parsed: i32 = year.parse().ok()?;
    let full_year = if year.len() == 2 {
        expand_two_digit_year(parsed)
    } else {
        parsed
    };
    NaiveDate::from_ymd_opt(full_year, month.parse().ok()?, day.parse().ok()?)
}

#[must_use]
pub const fn expand_two_digit_year(year: i32) -> i32 {
    if year < TWO_DIGIT_YEAR_PIVOT {
        2000 + year
    } else {
        1900 + year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_leap_years() {
        assert!(from_parts("2024", "02", "29").is_some());
        assert!(from_parts("2023", "02", "29").is_none());
        assert!(from_parts("2000", "02", "29").is_some());
        assert!(from_parts("1900", "02", "29").is_none());
    }

    #[test]
    fn test_impossible_days() {
        assert!(from_parts("2024", "13", "01").is_none());
        assert!(from_parts("2024", "00", "10").is_none());
        assert!(from_parts("2024", "01", "32").is_none());
        assert!(from_parts("2024", "04", "31").is_none());
        assert!(from_parts("2024", "01", "00").is_none());
        assert!(from_parts("2024", "12", "31").is_some());
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(68), 2068);
        assert_eq!(expand_two_digit_year(69), 1969);
        assert_eq!(expand_two_digit_year(99), 1999);
    }

    #[test]
    fn test_us_parts() {
        assert!(from_us_parts("02", "29", "24").is_some());
        assert!(from_us_parts("02", "29", "23").is_none());
        assert!(from_us_parts("12", "31", "1999").is_some());
        assert!(from_us_parts("31", "12", "1999").is_none());
    }

    #[test]
    fn test_us_parts_expand_only_two_digit_years() {
        let short = from_us_parts("07", "04", "76").map(|d| d.year());
        assert_eq!(short, Some(1976));
        let long = from_us_parts("07", "04", "2076").map(|d| d.year());
        assert_eq!(long, Some(2076));
    }
}
