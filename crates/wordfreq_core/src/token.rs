use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unicode-aware: matches letters, digits and underscore.
    static ref WORD: Regex = Regex::new(r"\w+").expect("word token regex");
}

/// Lazy iterator over the word tokens of `text`, scanned left to right.
///
/// A token is a maximal run of word characters (`\w`), case-folded to
/// lowercase. Punctuation and whitespace never produce empty tokens. The
/// iterator is restartable: the same text always yields the same sequence.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::tokens;

    fn collect(text: &str) -> Vec<String> {
        tokens(text).collect()
    }

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        assert_eq!(
            collect("Hello, world! foo-bar"),
            vec!["hello", "world", "foo", "bar"]
        );
    }

    #[test]
    fn case_folds_to_lowercase() {
        assert_eq!(collect("The THE The"), vec!["the", "the", "the"]);
    }

    #[test]
    fn digits_and_underscore_are_word_characters() {
        assert_eq!(collect("snake_case x86_64"), vec!["snake_case", "x86_64"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(collect("").is_empty());
        assert!(collect("  ... !!").is_empty());
    }

    #[test]
    fn same_text_yields_same_sequence() {
        let text = "repeatable Input 123";
        assert_eq!(collect(text), collect(text));
    }
}
