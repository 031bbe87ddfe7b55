//! Query highlighting for rendered search results.
//!
//! Highlighting is a presentation concern layered on top of the search
//! engine: a match can exist in a non-visual context (JSON output, say)
//! without any markers. The query is treated as a literal string; regex
//! metacharacters in user input are escaped before the pattern is built.

use regex::RegexBuilder;

/// Wrap every case-insensitive occurrence of `query` in `text` with the
/// given marker pair, preserving the original casing of the matched text.
///
/// An empty query, or a query that fails to compile even after escaping,
/// returns the text unchanged.
#[must_use]
pub fn highlight(text: &str, query: &str, prefix: &str, suffix: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let pattern = regex::escape(query);
    let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &regex::Captures<'_>| {
        format!("{prefix}{}{suffix}", &caps[0])
    })
    .into_owned()
}
