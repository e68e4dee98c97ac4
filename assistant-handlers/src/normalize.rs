//! Outgoing completion request text.

/// Hard cap on request length, in Unicode code points.
pub const MAX_REQUEST_CHARS: usize = 4000;

/// Characters that already end a sentence.
pub const SENTENCE_TERMINATORS: &[char] = &[',', '.', ';', '!', '?', '，', '。', '！', '？', '、', '…'];

fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Builds the completion prompt: trimmed text, prefixed by the prior prompt, cut to
/// [`MAX_REQUEST_CHARS`], closed with `？` when it does not end a sentence.
///
/// Returns an empty string when the trimmed text is empty; callers drop such messages.
pub fn normalize(raw: &str, prior_prompt: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        return String::new();
    }

    let combined = if prior_prompt.is_empty() {
        text.to_string()
    } else {
        format!("{prior_prompt}\n{text}")
    };

    let mut request: String = combined.chars().take(MAX_REQUEST_CHARS).collect();
    if !request.chars().last().is_some_and(is_terminator) {
        request.push('？');
    }
    request
}
