//! Short code extraction.

/// Returns the last `/`-separated segment of a short URL.
///
/// No URL parsing is involved: a trailing slash yields an empty code and a
/// string without slashes is returned whole.
///
/// # Examples
///
/// ```
/// use url_shortener_client::utils::short_code::short_code_from_url;
///
/// assert_eq!(short_code_from_url("http://127.0.0.1:8000/promo"), "promo");
/// ```
pub fn short_code_from_url(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap_or(short_url)
}
