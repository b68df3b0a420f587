//! Dialer addresses.
//!
//! A phone number from the directory is turned into `<scheme>://<number>`
//! (scheme `tel` by default) before it is handed to the system URL handler.
//! Whitespace is stripped first; what remains must consist of dialable
//! characters only.

use std::fmt;

use url::Url;

use crate::error::DialError;

pub const DEFAULT_SCHEME: &str = "tel";

/// A validated dial target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialAddress {
    number: String,
    url: Url,
}

impl DialAddress {
    /// Build a `tel://` address from a phone number as stored in the directory.
    pub fn parse(phone_number: &str) -> Result<Self, DialError> {
        Self::with_scheme(phone_number, DEFAULT_SCHEME)
    }

    /// Build an address with a custom scheme (e.g. `sip`, `callto`).
    pub fn with_scheme(phone_number: &str, scheme: &str) -> Result<Self, DialError> {
        let number: String = phone_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if number.is_empty() {
            return Err(DialError::Empty);
        }
        let undialable = number.chars().find(|c| !is_dialable(*c));
        if let Some(bad) = undialable {
            return Err(DialError::Malformed {
                reason: format!("character {bad:?} cannot be dialed"),
                number,
            });
        }

        // '#' would start a URL fragment
        let encoded = number.replace('#', "%23");
        let url = Url::parse(&format!("{scheme}://{encoded}")).map_err(|e| {
            DialError::Malformed {
                number: number.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self { number, url })
    }

    /// The number with whitespace removed.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for DialAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Digits, vanity letters and the usual dial-string punctuation.
fn is_dialable(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '*' | '#' | ',' | ';' | '-' | '.' | '(' | ')')
}
