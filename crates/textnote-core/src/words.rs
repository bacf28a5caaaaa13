//! Live word count for the document status line

/// Count the maximal runs of non-whitespace characters in `text`.
///
/// Any Unicode whitespace separates words, including newlines and tabs.
/// Leading and trailing whitespace never produce empty words.
///
/// # Examples
/// ```
/// use textnote_core::count_words;
/// assert_eq!(count_words("a b  c"), 3);
/// assert_eq!(count_words("   \n\t "), 0);
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn count_words(text: &str) -> u32 {
    let count = text.split_whitespace().count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn whitespace_only_has_no_words() {
        assert_eq!(count_words("   \n\t "), 0);
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        assert_eq!(count_words("a b  c"), 3);
        assert_eq!(count_words(" a "), 1);
    }

    #[test]
    fn newlines_separate_words() {
        assert_eq!(count_words("first line\nsecond line\r\nthird"), 5);
    }

    #[test]
    fn unicode_whitespace_separates_words() {
        // no-break space and ideographic space
        assert_eq!(count_words("one\u{00A0}two\u{3000}three"), 3);
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(count_words("Hello, world! It's 9:30."), 4);
    }
}
