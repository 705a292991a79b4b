//! Helpers for reading and writing the session cookie.
//!
//! The access token travels in an HTTP-only cookie rather than an
//! Authorization header, so the middleware and the auth handlers need a
//! small codec for the Cookie and Set-Cookie header values.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Name of the cookie carrying the signed access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Extracts a cookie value from the request headers by name.
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key == name { Some(value) } else { None }
    })
}

/// Builds the Set-Cookie value handing the access token to the client.
///
/// HTTP-only, so page scripts can never read the token.
pub fn access_token_cookie(token: &str, max_age_seconds: u64) -> String {
    format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        ACCESS_TOKEN_COOKIE, token, max_age_seconds
    )
}

/// Builds the Set-Cookie value that clears the access token on logout.
pub fn clear_access_token_cookie() -> String {
    format!(
        "{}=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0",
        ACCESS_TOKEN_COOKIE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn reads_single_cookie() {
        let headers = headers_with_cookie("access_token=abc123");
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), Some("abc123"));
    }

    #[test]
    fn reads_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; access_token=abc123; lang=en");
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), Some("abc123"));
    }

    #[test]
    fn missing_cookie_is_none() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), None);

        let empty = HeaderMap::new();
        assert_eq!(get_cookie(&empty, ACCESS_TOKEN_COOKIE), None);
    }

    #[test]
    fn set_cookie_is_http_only_with_max_age() {
        let cookie = access_token_cookie("abc123", 86400);
        assert!(cookie.starts_with("access_token=abc123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_access_token_cookie();
        assert!(cookie.starts_with("access_token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
