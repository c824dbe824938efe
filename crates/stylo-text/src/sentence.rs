//! Sentence splitting with protection for non-terminal periods.

use std::sync::LazyLock;

use regex::Regex;

use crate::word_count;

/// Stand-in for a protected period while splitting. NUL bytes keep it from
/// colliding with real text.
const PROTECTED_DOT: &str = "\0DOT\0";

/// Known abbreviations directly followed by a period.
static ABBREVIATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:et\s+al|fig|dr|mr|mrs|prof|inc|ltd|vs|i\.e|e\.g|etc)\.")
        .expect("valid regex")
});

/// Digit, period, digit (`0.45`).
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)\.(\d)").expect("valid regex"));

/// Whitespace, period, digit (`p = .001`).
static LEADING_DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s)\.(\d)").expect("valid regex"));

/// A parenthetical span without a nested closing paren.
static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("valid regex"));

/// Minimum whitespace-delimited words for a fragment to count as a sentence.
pub const MIN_SENTENCE_WORDS: usize = 3;

/// Split `text` into sentences.
///
/// Boundaries are `.`, `!` or `?` followed by whitespace or the end of the
/// text. Abbreviation periods, decimal points and periods inside
/// parentheses are never boundaries. Fragments shorter than
/// [`MIN_SENTENCE_WORDS`] words are dropped.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let working = protect_periods(text);

    split_on_terminals(&working)
        .into_iter()
        .map(|part| part.replace(PROTECTED_DOT, "."))
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty() && word_count(part) >= MIN_SENTENCE_WORDS)
        .collect()
}

/// Word counts of every sentence in `text`, in order.
#[must_use]
pub fn sentence_lengths(text: &str) -> Vec<usize> {
    split_sentences(text)
        .iter()
        .map(|s| word_count(s))
        .collect()
}

fn protect_periods(text: &str) -> String {
    let working = ABBREVIATION_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        let matched = &caps[0];
        format!("{}{PROTECTED_DOT}", &matched[..matched.len() - 1])
    });

    let decimal = format!("${{1}}{PROTECTED_DOT}${{2}}");
    let working = DECIMAL_RE.replace_all(&working, decimal.as_str());
    let working = LEADING_DECIMAL_RE.replace_all(&working, decimal.as_str());

    PARENTHETICAL_RE
        .replace_all(&working, |caps: &regex::Captures<'_>| {
            format!("({})", caps[1].replace('.', PROTECTED_DOT))
        })
        .into_owned()
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Cut after every terminal mark followed by whitespace or end of input,
/// consuming the whitespace run.
fn split_on_terminals(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let boundary = match chars.peek() {
            None => true,
            Some((_, next)) => next.is_whitespace(),
        };
        if !boundary {
            continue;
        }

        parts.push(&text[start..idx + c.len_utf8()]);
        start = text.len();
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if ws.is_whitespace() {
                chars.next();
            } else {
                start = ws_idx;
                break;
            }
        }
    }

    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}
