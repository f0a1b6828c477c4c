use axum::extract::State;

use crate::{QuoteError, router::QuoteState};

/// GET /healthz -> `ok` once the database answers.
pub async fn healthz(State(state): State<QuoteState>) -> Result<&'static str, QuoteError> {
    state.store.ping().await?;
    Ok("ok")
}
