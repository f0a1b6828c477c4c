//! Homepage quote rotation.
//!
//! The browser side is a small script driven by `setInterval`; [`Rotator`]
//! mirrors its index arithmetic so the server can render the first slide.

use serde::Serialize;

use crate::db::Quote;

/// Time each quote stays on screen.
pub const ROTATE_INTERVAL_MS: u64 = 7_000;
/// Delay between fading out and swapping in the next quote.
pub const FADE_MS: u64 = 500;

pub const EMPTY_PLACEHOLDER: &str = "No quotes available. Add one!";
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Cursor over a fixed-length quote list. Wraps around after the last entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotator {
    len: usize,
    current: usize,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index that the next cycle will show, or `None` for an empty list.
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    /// Runs one cycle: returns the index shown and moves past it.
    pub fn advance(&mut self) -> Option<usize> {
        let shown = self.current()?;
        self.current = (shown + 1) % self.len;
        Some(shown)
    }
}

/// Serialize `quotes` for embedding inside a `<script>` element.
///
/// `<`, `>` and `&` are written as JSON unicode escapes so quote text can never
/// close the element; `JSON.parse` restores them.
pub fn quotes_json<T: Serialize>(quotes: &[T]) -> Result<String, serde_json::Error> {
    let raw = serde_json::to_string(quotes)?;
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Source line shown under a quote.
pub fn source_label(quote: &Quote) -> String {
    format!("- {}", quote.source.as_deref().unwrap_or(UNKNOWN_SOURCE))
}

/// Browser-side rotator. Reads the quote list from `#quotes-data` and the
/// timings from `data-*` attributes on `#quote-container`.
pub const ROTATOR_JS: &str = r#"
document.addEventListener('DOMContentLoaded', () => {
    const quotes = JSON.parse(document.getElementById('quotes-data').textContent);
    const container = document.getElementById('quote-container');
    const textEl = document.getElementById('quote-text');
    const sourceEl = document.getElementById('quote-source');
    const actions = document.getElementById('quote-actions');
    const editLink = document.getElementById('edit-link');
    const deleteLink = document.getElementById('delete-link');
    const intervalMs = Number(container.dataset.intervalMs);
    const fadeMs = Number(container.dataset.fadeMs);
    const placeholder = container.dataset.placeholder;
    const unknownSource = container.dataset.unknownSource;

    let currentIndex = 0;

    function displayQuote() {
        if (quotes.length === 0) {
            textEl.textContent = placeholder;
            sourceEl.textContent = '-';
            actions.classList.add('hidden');
            document.body.style.backgroundImage = '';
            return;
        }

        container.style.opacity = '0';
        setTimeout(() => {
            const quote = quotes[currentIndex];
            textEl.textContent = `"${quote.text}"`;
            sourceEl.textContent = `- ${quote.source || unknownSource}`;
            document.body.style.backgroundImage = quote.backgroundImageUrl
                ? `url(${JSON.stringify(quote.backgroundImageUrl)})`
                : '';
            editLink.href = `/edit/${quote.id}`;
            deleteLink.href = `/delete/${quote.id}`;
            actions.classList.remove('hidden');
            container.style.opacity = '1';

            currentIndex = (currentIndex + 1) % quotes.length;
        }, fadeMs);
    }

    displayQuote();
    setInterval(displayQuote, intervalMs);
});
"#;
