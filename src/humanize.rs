use chrono::NaiveDate;

use crate::error::AppError;

/// Turns a `YYYY-MM-DD...` fragment into spoken form, e.g. `"March 5, 2025"`.
///
/// Only the first ten characters are looked at, so full timestamps are fine.
pub fn humanize(fragment: &str) -> Result<String, AppError> {
    let day = fragment.get(..10).unwrap_or(fragment);
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| AppError::MalformedDate(fragment.to_string()))?;
    Ok(date.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_month_and_unpadded_day() {
        assert_eq!(humanize("2025-03-05T09:00:00").unwrap(), "March 5, 2025");
        assert_eq!(humanize("2024-02-29").unwrap(), "February 29, 2024");
        assert_eq!(humanize("2023-12-31 23:59").unwrap(), "December 31, 2023");
    }

    #[test]
    fn out_of_range_month_is_an_error() {
        assert!(matches!(
            humanize("2025-13-01"),
            Err(AppError::MalformedDate(raw)) if raw == "2025-13-01"
        ));
        assert!(matches!(humanize("2025-00-10"), Err(AppError::MalformedDate(_))));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(matches!(humanize(""), Err(AppError::MalformedDate(_))));
        assert!(matches!(humanize("2025/03/05"), Err(AppError::MalformedDate(_))));
        assert!(matches!(humanize("2025-02-30"), Err(AppError::MalformedDate(_))));
        assert!(matches!(humanize("März 2025"), Err(AppError::MalformedDate(_))));
    }
}
