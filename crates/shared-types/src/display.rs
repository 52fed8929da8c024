use chrono::NaiveDate;

use crate::{Profile, Session};

/// Name used when neither a profile nor an email gives one.
pub const FALLBACK_GREETING_NAME: &str = "there";

/// Name to greet the user by.
///
/// Prefers the profile display name, then the local part of the session
/// email, then [`FALLBACK_GREETING_NAME`]. Blank candidates are skipped.
pub fn greeting_name(profile: Option<&Profile>, session: Option<&Session>) -> String {
    profile
        .map(|p| p.display_name.trim())
        .filter(|name| !name.is_empty())
        .or_else(|| session.and_then(|s| email_local_part(&s.email)))
        .unwrap_or(FALLBACK_GREETING_NAME)
        .to_string()
}

/// Text before the `@` of an email address, if non-blank.
pub fn email_local_part(email: &str) -> Option<&str> {
    let local = email.split('@').next().unwrap_or_default().trim();
    (!local.is_empty()).then_some(local)
}

/// Long calendar date, e.g. "Monday, October 19, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            user_id: "u1".into(),
            display_name: name.into(),
        }
    }

    #[test]
    fn profile_name_wins() {
        let session = Session::new("u1", "bob@x.com");
        assert_eq!(greeting_name(Some(&profile("Alice")), Some(&session)), "Alice");
    }

    #[test]
    fn email_local_part_when_no_profile() {
        let session = Session::new("u1", "bob@x.com");
        assert_eq!(greeting_name(None, Some(&session)), "bob");
    }

    #[test]
    fn blank_profile_name_falls_through_to_email() {
        let session = Session::new("u1", "bob@x.com");
        assert_eq!(greeting_name(Some(&profile("   ")), Some(&session)), "bob");
    }

    #[test]
    fn generic_fallback_when_nothing_known() {
        assert_eq!(greeting_name(None, None), FALLBACK_GREETING_NAME);
        let session = Session::new("u1", "@x.com");
        assert_eq!(greeting_name(None, Some(&session)), "there");
        let session = Session::new("u1", "");
        assert_eq!(greeting_name(Some(&profile("")), Some(&session)), "there");
    }

    #[test]
    fn email_without_at_uses_whole_address() {
        assert_eq!(email_local_part("operator"), Some("operator"));
    }

    #[test]
    fn long_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(long_date(date), "Monday, October 19, 2026");
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(long_date(date), "Wednesday, March 5, 2025");
    }
}
