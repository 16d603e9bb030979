use once_cell::sync::Lazy;
use regex::Regex;

// Non-greedy so multiple reasoning spans are removed independently; (?s) lets
// a span run across newlines.
static THINKING_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid thinking-span pattern"));

/// Remove every `<think>...</think>` span the model emitted and trim the
/// remainder. Content without markers passes through unchanged, which also
/// makes the operation idempotent.
pub fn strip_thinking(content: &str) -> String {
    THINKING_SPAN.replace_all(content, "").trim().to_string()
}
