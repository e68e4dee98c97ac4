//! Post-processing of raw completions into user-facing replies.

/// Sent when the completion has no usable content.
pub const FALLBACK_REPLY: &str = "请求得不到任何有意义的回复，请具体提出问题。";

/// Keeps the first non-blank paragraph of `raw`, trims it and puts `prefix` on its own line
/// above it. Leading blank paragraphs are skipped; blank results become [`FALLBACK_REPLY`].
pub fn build_reply(raw: &str, prefix: &str) -> String {
    let paragraph = raw
        .split("\n\n")
        .map(str::trim)
        .find(|p| !p.is_empty())
        .unwrap_or_default();

    if paragraph.is_empty() {
        return FALLBACK_REPLY.to_string();
    }

    format!("{prefix}\n{paragraph}").trim_matches('\n').to_string()
}
