//! Whitespace and markup clean-up applied to every rendered person.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n+").unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Drop tag markup left dangling by an empty field.
///
/// On every line that ends with `>`, everything from the first `<` onwards
/// is removed. A template line such as `<remembrances>{remembrances}</remembrances>`
/// therefore disappears completely and leaves an empty line behind, which
/// [`collapse_blank_lines`] later folds away.
///
/// This also removes any line of free text that happens to end in a tag.
pub fn strip_tag_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| match line.find('<') {
            Some(start) if line.ends_with('>') => &line[..start],
            _ => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fold two or more consecutive newlines into a single blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n\n").into_owned()
}

/// Fold runs of spaces into a single space. Tabs and newlines are kept.
pub fn collapse_spaces(text: &str) -> String {
    SPACES.replace_all(text, " ").into_owned()
}

/// Full clean-up pass: optional tag stripping, then blank-line and space
/// collapse, then trimming.
pub fn normalize(text: &str, strip_tags: bool) -> String {
    let text = if strip_tags {
        strip_tag_lines(text)
    } else {
        text.to_string()
    };
    let text = collapse_blank_lines(&text);
    let text = collapse_spaces(&text);
    text.trim().to_string()
}
