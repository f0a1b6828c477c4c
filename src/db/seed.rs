use crate::db::models::QuoteDraft;
use crate::error::QuoteError;

/// `(text, source)` pairs inserted when the store starts out empty.
pub const SAMPLE_QUOTES: [(&str, &str); 7] = [
    ("May the Force be with you.", "Star Wars"),
    ("I'm the king of the world!", "Titanic"),
    ("Here's looking at you, kid.", "Casablanca"),
    ("Houston, we have a problem.", "Apollo 13"),
    ("My precious.", "The Lord of the Rings"),
    ("Elementary, my dear Watson.", "Sherlock Holmes"),
    ("Live long and prosper.", "Star Trek"),
];

pub fn sample_drafts() -> Result<Vec<QuoteDraft>, QuoteError> {
    SAMPLE_QUOTES
        .iter()
        .map(|(text, source)| QuoteDraft::new(text, Some(source), None::<&str>))
        .collect()
}
