use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use tower_http::trace::TraceLayer;

use crate::db::QuoteStore;
use crate::handlers::{health, quotes};

/// Shared request state: the store handle and the key for the flash cookie.
#[derive(Clone)]
pub struct QuoteState {
    pub store: QuoteStore,
    cookie_key: Key,
}

impl QuoteState {
    pub fn new(store: QuoteStore, cookie_key: Key) -> Self {
        Self { store, cookie_key }
    }
}

impl FromRef<QuoteState> for Key {
    fn from_ref(state: &QuoteState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn quote_router(state: QuoteState) -> Router {
    Router::new()
        .route("/", get(quotes::index))
        .route("/add", get(quotes::add_form))
        .route("/add_quote", post(quotes::add_quote_post))
        .route("/edit/{id}", get(quotes::edit_form))
        .route("/edit_quote_post/{id}", post(quotes::edit_quote_post))
        .route("/delete/{id}", get(quotes::delete_quote))
        .route("/healthz", get(health::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
