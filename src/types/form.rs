use serde::Deserialize;

use crate::db::QuoteDraft;
use crate::error::QuoteError;

/// Raw `application/x-www-form-urlencoded` body of the add and edit forms.
///
/// Every field is optional here; a missing `text` is reported by
/// [`QuoteForm::into_draft`] rather than rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub background_image_url: Option<String>,
}

impl QuoteForm {
    pub fn into_draft(self) -> Result<QuoteDraft, QuoteError> {
        QuoteDraft::new(
            self.text.unwrap_or_default(),
            self.source,
            self.background_image_url,
        )
    }
}
