//! One-shot notices carried to the next page in an encrypted cookie.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;
use tracing::debug;

const FLASH_COOKIE: &str = "quotewall_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == FlashLevel::Error
    }
}

/// Queue `flash` for the next rendered page, replacing any pending one.
pub fn set_flash(jar: PrivateCookieJar, flash: &Flash) -> PrivateCookieJar {
    match serde_json::to_string(flash) {
        Ok(value) => jar.add(build_cookie(value)),
        Err(e) => {
            debug!(error = %e, "failed to encode flash message");
            jar
        }
    }
}

/// Remove and return the pending flash. Cookies that fail to decrypt or decode
/// are dropped silently.
pub fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Flash>) {
    let Some(value) = jar.get(FLASH_COOKIE).map(|c| c.value().to_owned()) else {
        return (jar, None);
    };
    let flash = serde_json::from_str(&value).ok();
    (jar.remove(clear_cookie()), flash)
}

fn build_cookie(value: String) -> Cookie<'static> {
    Cookie::build(Cookie::new(FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(5))
        .build()
}

fn clear_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(FLASH_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
