use axum::{
    Form,
    extract::{Path, State, rejection::PathRejection},
    response::Redirect,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use maud::Markup;
use tracing::{debug, error, info, warn};

use crate::middleware::flash::{Flash, set_flash, take_flash};
use crate::types::form::QuoteForm;
use crate::views;
use crate::{QuoteError, router::QuoteState};

/// GET / -> rotating homepage with every quote embedded as JSON.
pub async fn index(
    State(state): State<QuoteState>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, Markup), QuoteError> {
    let quotes = state.store.list_all().await?;
    let (jar, flash) = take_flash(jar);
    let page = views::index_page(&quotes, flash.as_ref())?;
    Ok((jar, page))
}

/// GET /add -> empty quote form.
pub async fn add_form(jar: PrivateCookieJar) -> (PrivateCookieJar, Markup) {
    let (jar, flash) = take_flash(jar);
    (jar, views::add_form(flash.as_ref()))
}

/// POST /add_quote -> create, then back to the homepage.
///
/// Invalid input returns to the form; storage failures return to the
/// homepage. Both leave the table untouched and report through a flash.
pub async fn add_quote_post(
    State(state): State<QuoteState>,
    jar: PrivateCookieJar,
    Form(form): Form<QuoteForm>,
) -> (PrivateCookieJar, Redirect) {
    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(e) => {
            warn!(error = %e, "rejected new quote");
            return (
                set_flash(jar, &Flash::error(e.to_string())),
                Redirect::to("/add"),
            );
        }
    };

    match state.store.create(&draft).await {
        Ok(quote) => {
            info!(id = quote.id, "quote added");
            (set_flash(jar, &Flash::success("Quote added.")), Redirect::to("/"))
        }
        Err(e) => {
            error!(error = %e, "failed to add quote");
            (
                set_flash(jar, &Flash::error("The quote could not be saved.")),
                Redirect::to("/"),
            )
        }
    }
}

/// GET /edit/{id} -> form pre-filled with the stored quote.
pub async fn edit_form(
    State(state): State<QuoteState>,
    id: Result<Path<i64>, PathRejection>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, Markup), QuoteError> {
    let id = quote_id(id)?;
    let quote = state.store.get_by_id(id).await?;
    let (jar, flash) = take_flash(jar);
    Ok((jar, views::edit_form(&quote, flash.as_ref())))
}

/// POST /edit_quote_post/{id} -> overwrite text, source and background image.
pub async fn edit_quote_post(
    State(state): State<QuoteState>,
    id: Result<Path<i64>, PathRejection>,
    jar: PrivateCookieJar,
    Form(form): Form<QuoteForm>,
) -> Result<(PrivateCookieJar, Redirect), QuoteError> {
    let id = quote_id(id)?;
    match state.store.get_by_id(id).await {
        Ok(_) => {}
        Err(e @ QuoteError::NotFound(_)) => return Err(e),
        Err(e) => {
            error!(id, error = %e, "failed to load quote for update");
            return Ok((
                set_flash(jar, &Flash::error("The quote could not be updated.")),
                Redirect::to("/"),
            ));
        }
    }

    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(e) => {
            warn!(id, error = %e, "rejected quote edit");
            return Ok((
                set_flash(jar, &Flash::error(e.to_string())),
                Redirect::to(&format!("/edit/{id}")),
            ));
        }
    };

    match state.store.update(id, &draft).await {
        Ok(_) => {
            info!(id, "quote updated");
            Ok((
                set_flash(jar, &Flash::success("Quote updated.")),
                Redirect::to("/"),
            ))
        }
        Err(e @ QuoteError::NotFound(_)) => Err(e),
        Err(e) => {
            error!(id, error = %e, "failed to update quote");
            Ok((
                set_flash(jar, &Flash::error("The quote could not be updated.")),
                Redirect::to("/"),
            ))
        }
    }
}

/// GET /delete/{id} -> remove the quote and return to the homepage.
pub async fn delete_quote(
    State(state): State<QuoteState>,
    id: Result<Path<i64>, PathRejection>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, Redirect), QuoteError> {
    let id = quote_id(id)?;
    match state.store.delete(id).await {
        Ok(()) => {
            info!(id, "quote deleted");
            Ok((
                set_flash(jar, &Flash::success("Quote deleted.")),
                Redirect::to("/"),
            ))
        }
        Err(e @ QuoteError::NotFound(_)) => Err(e),
        Err(e) => {
            error!(id, error = %e, "failed to delete quote");
            Ok((
                set_flash(jar, &Flash::error("The quote could not be deleted.")),
                Redirect::to("/"),
            ))
        }
    }
}

/// Ids that are not an `i64` can never name a row, so they are reported as
/// not found rather than as a malformed request.
fn quote_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, QuoteError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            let reason = rejection.body_text();
            debug!(%reason, "unparseable quote id");
            Err(QuoteError::BadId(reason))
        }
    }
}
