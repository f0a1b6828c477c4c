//! HTML rendering with `maud`.
//!
//! Pages share [`layout`]; each page module only builds its own body.

pub mod forms;
pub mod index;
pub mod rotator;

use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::middleware::flash::Flash;

pub use forms::{FormValues, add_form, edit_form};
pub use index::index_page;

const BASE_STYLE: &str = "body { font-family: 'Inter', sans-serif; }";

pub fn layout(title: &str, flash: Option<&Flash>, content: Markup) -> Markup {
    layout_with_background(title, flash, None, content)
}

/// [`layout`] with an optional page background. The URL must already be a
/// normalized http(s) URL, which cannot contain a raw `"`.
pub fn layout_with_background(
    title: &str,
    flash: Option<&Flash>,
    background: Option<&str>,
    content: Markup,
) -> Markup {
    let body_style = background.map(|url| format!("background-image: url(\"{url}\")"));
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;700&display=swap" rel="stylesheet";
                style { (PreEscaped(BASE_STYLE)) }
            }
            body class="bg-gray-900 text-gray-100 flex items-center justify-center min-h-screen bg-cover bg-center" style=[body_style] {
                @if let Some(flash) = flash {
                    (flash_banner(flash))
                }
                (content)
            }
        }
    }
}

fn flash_banner(flash: &Flash) -> Markup {
    let color = if flash.is_error() {
        "bg-red-700"
    } else {
        "bg-green-700"
    };
    html! {
        div id="flash" role="status" class={ "fixed top-4 left-1/2 -translate-x-1/2 px-6 py-3 rounded-lg shadow-lg text-white " (color) } {
            (flash.message)
        }
    }
}

pub fn error_page(status: StatusCode, title: &str, message: &str) -> Markup {
    layout(
        title,
        None,
        html! {
            div class="bg-gray-800 rounded-lg shadow-lg p-8 w-full max-w-md text-center" {
                h1 class="text-5xl font-bold text-gray-50 mb-2" { (status.as_u16()) }
                h2 class="text-2xl font-semibold text-gray-200 mb-4" { (title) }
                p class="text-gray-400 mb-6" { (message) }
                a href="/" class="inline-block bg-blue-600 text-white font-semibold py-3 px-6 rounded-lg hover:bg-blue-700" {
                    "Back to quotes"
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_escapes_message() {
        let page = error_page(StatusCode::BAD_REQUEST, "Invalid quote", "<b>bad</b>").into_string();
        assert!(page.contains("400"));
        assert!(page.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(!page.contains("<b>bad</b>"));
    }

    #[test]
    fn layout_renders_flash_banner() {
        let flash = Flash::error("Could not save quote.");
        let page = layout("Quotes", Some(&flash), html! { p { "body" } }).into_string();
        assert!(page.contains("id=\"flash\""));
        assert!(page.contains("bg-red-700"));
        assert!(page.contains("Could not save quote."));

        let plain = layout("Quotes", None, html! { p { "body" } }).into_string();
        assert!(!plain.contains("id=\"flash\""));
    }

    #[test]
    fn background_is_set_on_body_only_when_given() {
        let page = layout_with_background(
            "Quotes",
            None,
            Some("https://img.test/bg.jpg"),
            html! { p { "body" } },
        )
        .into_string();
        assert!(page.contains(r#"style="background-image: url(&quot;https://img.test/bg.jpg&quot;)""#));

        let plain = layout("Quotes", None, html! { p { "body" } }).into_string();
        assert!(!plain.contains("background-image"));
    }
}
