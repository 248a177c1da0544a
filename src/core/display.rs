//! Small formatting helpers for rendering layers.
//!
//! The engine hands out raw prompts and raw seconds; these helpers turn
//! them into what a screen shows.

/// Replace every occurrence of `placeholder` in `prompt` with `name`.
///
/// ```
/// use aita_engine::core::personalize;
///
/// assert_eq!(
///     personalize("%% borrowed a car and %% crashed it", "Alice", "%%"),
///     "Alice borrowed a car and Alice crashed it"
/// );
/// ```
#[must_use]
pub fn personalize(prompt: &str, name: &str, placeholder: &str) -> String {
    if placeholder.is_empty() {
        return prompt.to_string();
    }
    prompt.replace(placeholder, name)
}

/// Format seconds as `m:ss`.
///
/// ```
/// use aita_engine::core::format_clock;
///
/// assert_eq!(format_clock(300), "5:00");
/// assert_eq!(format_clock(59), "0:59");
/// ```
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
