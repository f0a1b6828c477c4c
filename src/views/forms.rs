use maud::{Markup, html};

use super::layout;
use crate::db::Quote;
use crate::db::models::MAX_SOURCE_CHARS;
use crate::middleware::flash::Flash;

/// Values used to pre-fill the quote form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub text: String,
    pub source: String,
    pub background_image_url: String,
}

impl From<&Quote> for FormValues {
    fn from(q: &Quote) -> Self {
        Self {
            text: q.text.clone(),
            source: q.source.clone().unwrap_or_default(),
            background_image_url: q.background_image_url.clone().unwrap_or_default(),
        }
    }
}

pub fn add_form(flash: Option<&Flash>) -> Markup {
    layout(
        "Add New Quote",
        flash,
        quote_form("Add a New Quote", "/add_quote", &FormValues::default(), "Submit"),
    )
}

pub fn edit_form(quote: &Quote, flash: Option<&Flash>) -> Markup {
    layout(
        "Edit Quote",
        flash,
        quote_form(
            "Edit Quote",
            &format!("/edit_quote_post/{}", quote.id),
            &FormValues::from(quote),
            "Save",
        ),
    )
}

fn quote_form(heading: &str, action: &str, values: &FormValues, submit: &str) -> Markup {
    const INPUT: &str = "w-full p-3 bg-gray-700 border border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";
    const LABEL: &str = "block text-gray-300 font-medium mb-2";

    html! {
        div class="bg-gray-800 rounded-lg shadow-lg p-8 w-full max-w-md" {
            h2 class="text-2xl font-bold text-gray-50 mb-6 text-center" { (heading) }
            form method="POST" action=(action) {
                div class="mb-4" {
                    label for="text" class=(LABEL) { "Quote Text" }
                    textarea id="text" name="text" rows="4" required class=(INPUT) { (values.text) }
                }
                div class="mb-4" {
                    label for="source" class=(LABEL) { "Source (Movie/Show)" }
                    input type="text" id="source" name="source" maxlength=(MAX_SOURCE_CHARS)
                        value=(values.source) class=(INPUT);
                }
                div class="mb-6" {
                    label for="backgroundImageUrl" class=(LABEL) { "Background Image URL" }
                    input type="url" id="backgroundImageUrl" name="backgroundImageUrl"
                        placeholder="https://"
                        value=(values.background_image_url) class=(INPUT);
                }
                div class="flex justify-between" {
                    button type="submit" class="w-1/2 mr-2 bg-blue-600 text-white font-semibold py-3 rounded-lg hover:bg-blue-700 transition duration-300" {
                        (submit)
                    }
                    a href="/" class="w-1/2 ml-2 text-center bg-gray-600 text-white font-semibold py-3 rounded-lg hover:bg-gray-700 transition duration-300" {
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_posts_to_add_quote() {
        let page = add_form(None).into_string();
        assert!(page.contains("action=\"/add_quote\""));
        assert!(page.contains("name=\"backgroundImageUrl\""));
        assert!(page.contains("value=\"\""));
    }

    #[test]
    fn edit_form_is_prefilled_and_escaped() {
        let quote = Quote {
            id: 9,
            text: "Say \"hello\" <now>".into(),
            source: Some("Heat".into()),
            background_image_url: Some("https://x.test/bg.png".into()),
        };
        let page = edit_form(&quote, None).into_string();
        assert!(page.contains("action=\"/edit_quote_post/9\""));
        assert!(page.contains("Say &quot;hello&quot; &lt;now&gt;"));
        assert!(page.contains("value=\"Heat\""));
        assert!(page.contains("value=\"https://x.test/bg.png\""));
    }
}
