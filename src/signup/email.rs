//! Email shape validation
//!
//! The rule is deliberately loose: a non-empty local part, `@`, and a domain
//! with at least one inner `.`, none of it containing whitespace or a second `@`.

use crate::error::{Result, SiteError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Whether `candidate` has the shape of an email address
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// An email address that passed [`is_valid_email`] after trimming
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trim `raw` and validate it
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if is_valid_email(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(SiteError::InvalidEmail(raw.to_string()))
        }
    }

    /// The address as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for address in [
            "user@example.com",
            "first.last@sub.example.co.uk",
            "x+tag@a.io",
        ] {
            assert!(is_valid_email(address), "{address} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for address in [
            "",
            "not-an-email",
            "@example.com",
            "user@",
            "user@example",
            "user@.com",
            "user@example.",
            "us er@example.com",
            "user@exa mple.com",
            "user@@example.com",
            "user@example@com.org",
        ] {
            assert!(!is_valid_email(address), "{address:?} should be invalid");
        }
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let email = EmailAddress::parse("  user@example.com\n").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn parse_error_keeps_raw_input() {
        let err = EmailAddress::parse("nope").unwrap_err();
        assert!(matches!(err, SiteError::InvalidEmail(ref raw) if raw == "nope"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: local@domain.tld built from safe characters is always valid
            #[test]
            fn well_formed_addresses_validate(
                local in "[a-z0-9._+-]{1,20}",
                domain in "[a-z0-9-]{1,20}",
                tld in "[a-z]{2,6}"
            ) {
                let address = format!("{local}@{domain}.{tld}");
                prop_assert!(is_valid_email(&address));
            }

            /// Property: anything without an @ is invalid
            #[test]
            fn missing_at_is_invalid(s in "[^@]*") {
                prop_assert!(!is_valid_email(&s));
            }

            /// Property: inner whitespace always invalidates an address
            #[test]
            fn inner_whitespace_is_invalid(
                left in "[a-z]{1,10}",
                ws in "[ \t]",
                right in "[a-z]{1,10}"
            ) {
                let address = format!("{left}{ws}{right}@example.com");
                prop_assert!(!is_valid_email(&address));
            }

            /// Property: a domain without a dot is invalid
            #[test]
            fn dotless_domain_is_invalid(local in "[a-z]{1,10}", domain in "[a-z]{1,10}") {
                let address = format!("{local}@{domain}");
                prop_assert!(!is_valid_email(&address));
            }
        }
    }
}
