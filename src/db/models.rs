use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;

use crate::error::QuoteError;

/// Longest accepted `source`, matching the width the table was designed for.
pub const MAX_SOURCE_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub source: Option<String>,
    pub background_image_url: Option<String>,
}

/// Field set for a quote that has passed validation but is not yet stored.
///
/// Fields are private so every draft reaching the store went through
/// [`QuoteDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDraft {
    text: String,
    source: Option<String>,
    background_image_url: Option<String>,
}

impl QuoteDraft {
    /// Trims every field, drops blank optional fields and rejects:
    /// - blank `text`
    /// - `source` longer than [`MAX_SOURCE_CHARS`]
    /// - a background image that is not an absolute http(s) URL
    ///
    /// Accepted image URLs are stored in their normalized, percent-encoded form.
    pub fn new(
        text: impl AsRef<str>,
        source: Option<impl AsRef<str>>,
        background_image_url: Option<impl AsRef<str>>,
    ) -> Result<Self, QuoteError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(QuoteError::Validation("quote text is required".to_string()));
        }

        let source = non_blank(source);
        if let Some(s) = source.as_deref()
            && s.chars().count() > MAX_SOURCE_CHARS
        {
            return Err(QuoteError::Validation(format!(
                "source must be at most {MAX_SOURCE_CHARS} characters"
            )));
        }

        let background_image_url = non_blank(background_image_url)
            .map(|raw| validate_image_url(&raw).map(String::from))
            .transpose()?;

        Ok(Self {
            text: text.to_string(),
            source,
            background_image_url,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn background_image_url(&self) -> Option<&str> {
        self.background_image_url.as_deref()
    }
}

fn non_blank(value: Option<impl AsRef<str>>) -> Option<String> {
    value
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_image_url(raw: &str) -> Result<Url, QuoteError> {
    let url = Url::parse(raw)
        .map_err(|e| QuoteError::Validation(format!("background image URL is invalid: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(QuoteError::Validation(format!(
            "background image URL must use http or https, not {other}"
        ))),
    }
}
