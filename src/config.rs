//! Endpoint constants and URL construction for the CBR daily feed.

use chrono::NaiveDate;

/// Daily report endpoint, Russian locale.
pub const RU_DAILY_URL: &str = "https://www.cbr.ru/scripts/XML_daily.asp";

/// Daily report endpoint, English locale.
pub const EN_DAILY_URL: &str = "https://www.cbr.ru/scripts/XML_daily_eng.asp";

/// HTTP timeout in seconds.
///
/// The feed is a few tens of kilobytes; 30 seconds accommodates slow
/// connections without hanging callers indefinitely.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Format a date the way the scripts endpoint expects it in `date_req`.
///
/// # Arguments
/// * `date` - Report date to request
///
/// # Returns
/// Zero-padded `DD/MM/YYYY` string
///
/// # Examples
/// ```
/// use cbr_rates::config::format_date_req;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2014, 2, 1).unwrap();
/// assert_eq!(format_date_req(date), "01/02/2014");
/// ```
pub fn format_date_req(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Build the daily report URL for a locale base, optionally for a
/// historical date.
///
/// # Arguments
/// * `base` - Locale endpoint (or a test-server override)
/// * `date` - Historical report date, or `None` for today's report
///
/// # Returns
/// The base URL unchanged, or with a `date_req` query parameter appended
pub fn daily_url(base: &str, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{base}?date_req={}", format_date_req(date)),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_req_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2014, 2, 1).unwrap();
        assert_eq!(format_date_req(date), "01/02/2014");
    }

    #[test]
    fn test_format_date_req_two_digit_fields() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_date_req(date), "25/12/2023");
    }

    #[test]
    fn test_daily_url_without_date() {
        assert_eq!(daily_url(RU_DAILY_URL, None), RU_DAILY_URL);
    }

    #[test]
    fn test_daily_url_with_date() {
        let date = NaiveDate::from_ymd_opt(2014, 2, 1).unwrap();
        assert_eq!(
            daily_url(EN_DAILY_URL, Some(date)),
            "https://www.cbr.ru/scripts/XML_daily_eng.asp?date_req=01/02/2014"
        );
    }
}
