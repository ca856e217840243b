use regex::Regex;
use std::sync::LazyLock;

/// Two or more word characters, matching the usual bag-of-words token pattern.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// Lowercases `text` and splits it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Expands `tokens` into space-joined n-grams of length `1..=max_n`.
///
/// Unigrams come first, followed by bigrams, and so on. `max_n` is capped at the token count.
pub fn ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let max_n = max_n.min(tokens.len());
    let mut out = Vec::with_capacity(tokens.len() * max_n);
    for n in 1..=max_n {
        out.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    out
}
