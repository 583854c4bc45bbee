pub const TESTIMONIAL_PREVIEW_CHARS: usize = 150;
const ELLIPSIS: &str = "...";

/// Cuts `text` to at most `max_chars` characters and marks the cut. Text that
/// already fits comes back unchanged.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{}", text[..end].trim_end(), ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_chars("Gratidão.", 150), "Gratidão.");
    }

    #[test]
    fn long_text_is_cut_at_the_budget() {
        let text = "á".repeat(200);
        let cut = truncate_chars(&text, TESTIMONIAL_PREVIEW_CHARS);
        assert!(cut.ends_with(ELLIPSIS));
        assert_eq!(cut.chars().count(), TESTIMONIAL_PREVIEW_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn exact_budget_is_not_marked() {
        let text = "x".repeat(TESTIMONIAL_PREVIEW_CHARS);
        assert_eq!(truncate_chars(&text, TESTIMONIAL_PREVIEW_CHARS), text);
    }

    #[test]
    fn trailing_space_before_cut_is_dropped() {
        assert_eq!(truncate_chars("abc def", 4), "abc...");
    }
}
