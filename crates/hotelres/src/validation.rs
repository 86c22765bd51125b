//! Input checks for records entered at the desk.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{NewClient, NewEvaluation};

/// Something that looks like `local@domain.tld`.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Lowest and highest review score.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Whether `value` is a plausible email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Whether `value` is a non-empty string of ASCII digits.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

impl NewClient {
    /// Return a copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    /// Check that the client can be stored.
    ///
    /// Every field is required; the email must look like an address and the
    /// phone must be digits only. Fields are checked after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let client = self.trimmed();
        let required = [
            ("full_name", &client.full_name),
            ("address", &client.address),
            ("city", &client.city),
            ("postal_code", &client.postal_code),
            ("email", &client.email),
            ("phone", &client.phone),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(Error::validation(field, "this field is required"));
            }
        }

        if !is_valid_email(&client.email) {
            return Err(Error::validation(
                "email",
                format!("'{}' is not a valid email address", client.email),
            ));
        }

        if !is_valid_phone(&client.phone) {
            return Err(Error::validation("phone", "must contain digits only"));
        }

        Ok(())
    }
}

impl NewEvaluation {
    /// Check that the review can be stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the rating is outside 1..=5.
    pub fn validate(&self) -> Result<()> {
        if !RATING_RANGE.contains(&self.rating) {
            return Err(Error::validation(
                "rating",
                format!(
                    "{} is outside {}..={}",
                    self.rating,
                    RATING_RANGE.start(),
                    RATING_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}
