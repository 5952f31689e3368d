//! Output normalization
//!
//! Raw completions are capped by a token budget and usually stop mid-sentence. Normalizing
//! keeps whole sentences only and makes the ending look deliberate, so a cut-off answer does
//! not give away which slot belongs to a smaller configuration.

/// Marks that close a sentence
pub const SENTENCE_ENDERS: [char; 3] = ['.', '!', '?'];

/// Endings that are left untouched
pub const TERMINAL_ENDINGS: [char; 4] = ['.', '!', '?', '"'];

/// Endings replaced by the ellipsis
pub const DANGLING_ENDINGS: [char; 4] = [',', ';', ':', '('];

pub const ELLIPSIS: &str = "...";

/// Trim `raw` to whole sentences and guarantee a clean ending
///
/// Never returns an empty string; the shortest output is `"..."`.
pub fn normalize(raw: &str) -> String {
    let mut text = complete_sentences(raw).trim().to_string();

    match text.chars().last() {
        Some(last) if TERMINAL_ENDINGS.contains(&last) => {}
        Some(last) if DANGLING_ENDINGS.contains(&last) => {
            text.pop();
            text.truncate(text.trim_end().len());
            text.push_str(ELLIPSIS);
        }
        _ => text.push_str(ELLIPSIS),
    }

    text
}

/// Everything up to the last sentence mark, keeping a closing quote glued to it
fn complete_sentences(raw: &str) -> &str {
    let Some(mark) = raw.rfind(&SENTENCE_ENDERS[..]) else {
        return raw;
    };

    // sentence marks are single byte
    let end = mark + 1;
    let rest = &raw[end..];
    let closing_quotes = rest.len() - rest.trim_start_matches('"').len();
    &raw[..end + closing_quotes]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_trailing_fragment() {
        assert_eq!(
            normalize(
                "Moon shines bright tonight. It glows over silent hills. Dreams drift with the ti"
            ),
            "Moon shines bright tonight. It glows over silent hills."
        );
    }

    #[test]
    fn test_no_punctuation_gets_ellipsis() {
        assert_eq!(normalize("the cat sat there"), "the cat sat there...");
        assert_eq!(normalize("  padded words \n"), "padded words...");
    }

    #[test]
    fn test_dangling_punctuation_is_replaced() {
        assert_eq!(normalize("Hello, world,"), "Hello, world...");
        assert_eq!(normalize("Ingredients:"), "Ingredients...");
        assert_eq!(normalize("first; second;"), "first; second...");
        assert_eq!(normalize("a remark ("), "a remark...");
    }

    #[test]
    fn test_terminal_endings_unchanged() {
        assert_eq!(normalize("Is it over? Yes!"), "Is it over? Yes!");
        assert_eq!(normalize("Done."), "Done.");
        assert_eq!(normalize("  Done.  "), "Done.");
        assert_eq!(normalize("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            normalize("She said \"stop.\" Then she wal"),
            "She said \"stop.\""
        );
    }

    #[test]
    fn test_mixed_marks_keep_original_punctuation() {
        assert_eq!(normalize("Wow! Really? Yes. And th"), "Wow! Really? Yes.");
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert_eq!(normalize(""), "...");
        assert_eq!(normalize("   "), "...");
        assert_eq!(normalize(","), "...");
    }

    #[test]
    fn test_single_ellipsis_only() {
        assert_eq!(normalize("and then,"), "and then...");
        assert!(!normalize("and then,").ends_with("......"));
    }

    #[test]
    fn test_idempotent_on_terminated_text() {
        let samples = [
            "One. Two.",
            "Why? Because!",
            "He said \"hi.\"",
            "Moon shines bright tonight. It glows over silent hills. Dreams drift with the ti",
            "the cat sat there",
            "Hello, world,",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_never_empty() {
        for sample in ["", " ", ".", "!", "?", "(", "\"", "x", "\n\t"] {
            assert!(!normalize(sample).is_empty(), "empty output for {sample:?}");
        }
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(normalize("Café au lait. Très bon"), "Café au lait.");
        assert_eq!(normalize("月が綺麗ですね"), "月が綺麗ですね...");
    }
}
