use axum::http::HeaderValue;
use color_eyre::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue> {
    let secure = if secure { "; Secure" } else { "" };
    let cookie =
        format!("{name}={value}; HttpOnly; Max-Age=86400; Path=/; SameSite=Strict{secure}");
    Ok(HeaderValue::from_str(&cookie)?)
}

/// A Set-Cookie value that clears the named cookie.
pub fn expired_cookie(name: &str) -> Result<HeaderValue> {
    let cookie = format!("{name}=; HttpOnly; Max-Age=0; Path=/; SameSite=Strict");
    Ok(HeaderValue::from_str(&cookie)?)
}
