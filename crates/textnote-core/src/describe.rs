//! Status line text shown under the editor

/// Render the status line for the current search and word counts.
///
/// While searching with at least one match this reports the number of
/// matches; otherwise it falls back to the document word count.
///
/// # Examples
/// ```
/// use textnote_core::describe_results;
/// assert_eq!(describe_results(true, 1, 5), "Found 1 repeat");
/// assert_eq!(describe_results(true, 3, 5), "Found 3 repeats");
/// assert_eq!(describe_results(false, 0, 5), "Words count: 5");
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn describe_results(is_searching: bool, occurrence_count: u32, word_count: u32) -> String {
    if is_searching && occurrence_count > 0 {
        let noun = if occurrence_count == 1 { "repeat" } else { "repeats" };
        format!("Found {} {}", occurrence_count, noun)
    } else {
        format!("Words count: {}", word_count)
    }
}
