//! Query text normalization and tokenization.
//!
//! Word characters follow the ASCII definition (`[a-z0-9_]` after lowercasing). Letters
//! outside ASCII are stripped along with all other punctuation, except for the four
//! characters that appear inside catalog terms: `&` ("I&D"), `-` ("re-assessment"),
//! `'` ("mother's") and `/` ("weekend/holiday").

/// Punctuation kept by [`normalize`].
const RETAINED_PUNCTUATION: &[char] = &['&', '-', '\'', '/'];

/// Returns true if `c` survives normalization as a non-whitespace character.
pub fn is_retained_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || RETAINED_PUNCTUATION.contains(&c)
}

/// Converts a raw query into its canonical form.
///
/// Lowercases, strips unsupported characters, collapses every whitespace run to a single
/// space and trims. Trimming happens after stripping so that punctuation at either end
/// (`"!wrist"`, `"wrist ?"`) cannot leave a dangling space behind.
///
/// The function is idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if is_retained_char(c) {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            pending_space = false;
            normalized.push(c);
        }
    }

    normalized
}

/// Splits a normalized query into tokens.
///
/// Empty pieces are discarded, so a query made only of stripped characters yields no
/// tokens at all.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
