use maud::{Markup, PreEscaped, html};

use super::layout_with_background;
use super::rotator::{
    EMPTY_PLACEHOLDER, FADE_MS, ROTATE_INTERVAL_MS, ROTATOR_JS, Rotator, UNKNOWN_SOURCE,
    quotes_json, source_label,
};
use crate::db::Quote;
use crate::middleware::flash::Flash;

/// Homepage: the first quote rendered in place, the full list as JSON for the
/// rotator script, and edit/delete links for whichever quote is showing.
pub fn index_page(quotes: &[Quote], flash: Option<&Flash>) -> Result<Markup, serde_json::Error> {
    let data = quotes_json(quotes)?;
    let first = Rotator::new(quotes.len()).current().map(|i| &quotes[i]);
    let actions_class = if first.is_some() {
        "mt-4 flex gap-4 text-sm"
    } else {
        "mt-4 flex gap-4 text-sm hidden"
    };

    let content = html! {
        div class="container mx-auto p-4 md:p-8 text-center" {
            header class="mb-12" {
                h1 class="text-4xl font-bold text-gray-50 mb-2" { "Iconic Quotes from Movies & Shows" }
                p class="text-lg text-gray-400" { "A collection of memorable dialogues." }
            }

            main id="quote-container"
                class="bg-gray-800 bg-opacity-90 rounded-lg shadow-lg p-6 w-full max-w-xl mx-auto min-h-[200px] flex flex-col justify-center items-center transition-opacity duration-500 ease-in-out"
                data-interval-ms=(ROTATE_INTERVAL_MS)
                data-fade-ms=(FADE_MS)
                data-placeholder=(EMPTY_PLACEHOLDER)
                data-unknown-source=(UNKNOWN_SOURCE) {
                @match first {
                    Some(quote) => {
                        blockquote id="quote-text" class="text-xl font-medium leading-relaxed text-gray-200 mb-4" {
                            "\"" (quote.text) "\""
                        }
                        p id="quote-source" class="text-sm font-semibold text-gray-400 text-right" {
                            (source_label(quote))
                        }
                    }
                    None => {
                        blockquote id="quote-text" class="text-xl font-medium leading-relaxed text-gray-200 mb-4" {
                            (EMPTY_PLACEHOLDER)
                        }
                        p id="quote-source" class="text-sm font-semibold text-gray-400 text-right" { "-" }
                    }
                }
                div id="quote-actions" class=(actions_class) {
                    a id="edit-link" href=(first.map(|q| format!("/edit/{}", q.id)).unwrap_or_default())
                        class="text-blue-400 hover:text-blue-300" { "Edit" }
                    a id="delete-link" href=(first.map(|q| format!("/delete/{}", q.id)).unwrap_or_default())
                        class="text-red-400 hover:text-red-300" { "Delete" }
                }
            }

            div class="mt-8 text-center" {
                a href="/add" aria-label="Add quote"
                    class="inline-block bg-blue-600 text-white p-4 rounded-full shadow-2xl hover:bg-blue-500 transition-transform transform hover:scale-110" {
                    (PreEscaped(PLUS_ICON))
                }
            }
        }
        script id="quotes-data" type="application/json" { (PreEscaped(data)) }
        script { (PreEscaped(ROTATOR_JS)) }
    };

    let background = first.and_then(|q| q.background_image_url.as_deref());
    Ok(layout_with_background(
        "Movie & Show Quotes",
        flash,
        background,
        content,
    ))
}

const PLUS_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4" /></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: i64, text: &str, source: Option<&str>) -> Quote {
        Quote {
            id,
            text: text.to_string(),
            source: source.map(str::to_string),
            background_image_url: None,
        }
    }

    #[test]
    fn renders_first_quote_and_its_actions() {
        let quotes = [
            quote(3, "Live long and prosper.", Some("Star Trek")),
            quote(5, "My precious.", None),
        ];
        let page = index_page(&quotes, None).expect("render").into_string();

        assert!(page.contains("Live long and prosper."));
        assert!(page.contains("- Star Trek"));
        assert!(page.contains("href=\"/edit/3\""));
        assert!(page.contains("href=\"/delete/3\""));
        assert!(page.contains(r#""id":5,"text":"My precious.","source":null"#));
        assert!(page.contains("data-interval-ms=\"7000\""));
        assert!(page.contains("data-fade-ms=\"500\""));
    }

    #[test]
    fn empty_list_shows_placeholder_and_hides_actions() {
        let page = index_page(&[], None).expect("render").into_string();
        assert!(page.contains(EMPTY_PLACEHOLDER));
        assert!(page.contains("mt-4 flex gap-4 text-sm hidden"));
        assert!(page.contains(">[]</script>"));
    }

    #[test]
    fn first_quote_background_is_server_rendered() {
        let mut first = quote(1, "I'll be back.", Some("The Terminator"));
        first.background_image_url = Some("https://img.test/t800.jpg".to_string());
        let quotes = [first, quote(2, "Inconceivable!", None)];
        let page = index_page(&quotes, None).expect("render").into_string();
        assert!(page.contains("<body"));
        assert!(page.contains("background-image: url(&quot;https://img.test/t800.jpg&quot;)"));

        let quotes = [quote(2, "Inconceivable!", None)];
        let page = index_page(&quotes, None).expect("render").into_string();
        assert!(!page.contains("background-image: url("));
    }
}
