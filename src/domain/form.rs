//! Shortening form input.
//!
//! Holds the three fields exactly as typed and turns them into a
//! [`ShortenRequest`]. The only hard requirement is a non-empty URL; the
//! service does all other validation.

use crate::api::dto::shorten::ShortenRequest;
use crate::error::ClientError;

/// Raw values of the shortening form.
///
/// Values are sent as typed. A field counts as supplied when it is not the
/// empty string, whitespace included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenForm {
    pub long_url: String,
    pub expiry: String,
    pub alias: String,
}

impl ShortenForm {
    pub fn new(
        long_url: impl Into<String>,
        expiry: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            long_url: long_url.into(),
            expiry: expiry.into(),
            alias: alias.into(),
        }
    }

    /// Builds the request body, including optional fields only when supplied.
    ///
    /// A supplied expiry is read as its leading integer (`"10abc"` is 10,
    /// `"1.5"` is 1). When it holds no number the field is still sent, as
    /// `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingUrl`] when the URL field is empty.
    pub fn to_request(&self) -> Result<ShortenRequest, ClientError> {
        if self.long_url.is_empty() {
            return Err(ClientError::MissingUrl);
        }

        let mut request = ShortenRequest::new(self.long_url.as_str());

        if !self.expiry.is_empty() {
            request = request.with_expiry_minutes(leading_integer(&self.expiry));
        }

        if !self.alias.is_empty() {
            request = request.with_custom_alias(self.alias.as_str());
        }

        Ok(request)
    }
}

/// Reads the integer at the start of `raw`.
///
/// Leading whitespace and one sign are skipped, and a `0x` prefix switches to
/// hexadecimal. Parsing stops at the first character that is not a digit.
/// Returns `None` when no digit is found or the value overflows `i64`.
fn leading_integer(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();

    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let value = i64::from_str_radix(&rest[..end], radix).ok()?;

    Some(if negative { -value } else { value })
}
