//! Visit-booking contract: form fields, presence/pattern validation and the
//! payload posted to the spreadsheet endpoint.
//!
//! The submission itself is fire-and-forget on the UI side, so this module
//! is the entire write-side contract of the site.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tag identifying this site's rows in the shared spreadsheet.
pub const BOOKING_SOURCE: &str = "vuonmaigocat_web";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0|\+84)\d{9}$").unwrap());

/// Everything the visitor types into the booking form.
///
/// `website` is a honeypot: humans never see the field, bots tend to fill it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// ISO date, `yyyy-mm-dd`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
    pub note: String,
    pub website: String,
}

/// Strip whitespace so "090 123 4567" and "0901234567" compare equal.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Vietnamese mobile format: `0` or `+84` followed by nine digits.
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(raw))
}

/// Visit dates must be today or later. Unparseable input counts as invalid.
pub fn is_today_or_later(date_iso: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(date_iso, "%Y-%m-%d")
        .map(|d| d >= today)
        .unwrap_or(false)
}

impl BookingForm {
    /// A filled honeypot means the submission should be dropped silently.
    pub fn is_bot(&self) -> bool {
        !self.website.trim().is_empty()
    }

    /// Field-by-field check; the message is shown inline above the submit
    /// button. `today` is passed in so the rule stays pure.
    pub fn validate(&self, today: NaiveDate) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Vui lòng nhập họ và tên.".into());
        }
        if !is_valid_phone(&self.phone) {
            return Err("Số điện thoại không hợp lệ (0xxxxxxxxx hoặc +84xxxxxxxxx).".into());
        }
        if self.date.trim().is_empty() {
            return Err("Vui lòng chọn ngày tham quan.".into());
        }
        if !is_today_or_later(&self.date, today) {
            return Err("Ngày tham quan phải từ hôm nay trở đi.".into());
        }
        if self.time.trim().is_empty() {
            return Err("Vui lòng chọn giờ hẹn.".into());
        }
        Ok(())
    }
}

/// Wire payload for the Apps Script endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub note: String,
    pub website: String,
    pub created_at: String,
    pub source: String,
}

impl BookingPayload {
    /// `created_at` is an ISO timestamp supplied by the caller, keeping the
    /// conversion deterministic.
    pub fn from_form(form: &BookingForm, created_at: String) -> Self {
        Self {
            name: form.name.trim().to_string(),
            phone: normalize_phone(&form.phone),
            email: form.email.trim().to_string(),
            date: form.date.clone(),
            time: form.time.clone(),
            note: form.note.trim().to_string(),
            website: form.website.clone(),
            created_at,
            source: BOOKING_SOURCE.to_string(),
        }
    }
}

/// Locally generated confirmation code, "DL" + the last eight digits of the
/// timestamp. Shown optimistically since the endpoint response is never read.
pub fn reference_code(timestamp_millis: i64) -> String {
    let digits = timestamp_millis.max(0).to_string();
    let tail = &digits[digits.len().saturating_sub(8)..];
    format!("DL{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
    }

    fn valid_form() -> BookingForm {
        BookingForm {
            name: "Nguyễn Văn A".into(),
            phone: "090 123 4567".into(),
            email: "a@example.com".into(),
            date: "2026-01-25".into(),
            time: "09:30".into(),
            note: String::new(),
            website: String::new(),
        }
    }

    #[test]
    fn accepts_local_and_international_phones() {
        assert!(is_valid_phone("0901234567"));
        assert!(is_valid_phone("090 123 4567"));
        assert!(is_valid_phone("+84901234567"));
        assert!(is_valid_phone("+84 901 234 567"));
    }

    #[test]
    fn rejects_malformed_phones() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("090123456"));
        assert!(!is_valid_phone("09012345678"));
        assert!(!is_valid_phone("1901234567"));
        assert!(!is_valid_phone("+85901234567"));
        assert!(!is_valid_phone("090-123-4567"));
    }

    #[test]
    fn visit_date_must_not_be_past() {
        assert!(is_today_or_later("2026-01-20", today()));
        assert!(is_today_or_later("2026-02-01", today()));
        assert!(!is_today_or_later("2026-01-19", today()));
        assert!(!is_today_or_later("not-a-date", today()));
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(today()), Ok(()));
    }

    #[test]
    fn validation_reports_the_first_failing_field() {
        let mut form = valid_form();
        form.name = "   ".into();
        assert!(form.validate(today()).unwrap_err().contains("họ và tên"));

        let mut form = valid_form();
        form.phone = "12345".into();
        assert!(form.validate(today()).unwrap_err().contains("điện thoại"));

        let mut form = valid_form();
        form.date = "2020-01-01".into();
        assert!(form.validate(today()).unwrap_err().contains("hôm nay"));

        let mut form = valid_form();
        form.time = String::new();
        assert!(form.validate(today()).unwrap_err().contains("giờ"));
    }

    #[test]
    fn honeypot_flags_bots() {
        let mut form = valid_form();
        assert!(!form.is_bot());
        form.website = "https://spam.example".into();
        assert!(form.is_bot());
    }

    #[test]
    fn payload_normalizes_phone_and_tags_source() {
        let payload =
            BookingPayload::from_form(&valid_form(), "2026-01-20T08:00:00Z".into());
        assert_eq!(payload.phone, "0901234567");
        assert_eq!(payload.source, BOOKING_SOURCE);
        assert_eq!(payload.created_at, "2026-01-20T08:00:00Z");

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn reference_codes_use_the_timestamp_tail() {
        assert_eq!(reference_code(1_768_892_400_123), "DL92400123");
        assert_eq!(reference_code(42), "DL42");
    }
}
