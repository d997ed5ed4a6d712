/// Normalize a typed guess for comparison: surrounding whitespace removed, lowercased.
pub fn normalize_guess(guess: &str) -> String {
    guess.trim().to_lowercase()
}

/// Check a guess against the answer word.
///
/// Only the guess is trimmed; the stored word is compared as-is apart from case.
/// There is no fuzzy matching or partial credit.
pub fn is_correct_guess(guess: &str, word: &str) -> bool {
    normalize_guess(guess) == word.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_correct_guess("cat", "cat"));
        assert!(!is_correct_guess("dog", "cat"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_correct_guess("CAT", "cat"));
        assert!(is_correct_guess("cat", "Cat"));
        assert!(is_correct_guess("cAt", "CaT"));
    }

    #[test]
    fn test_whitespace_handling() {
        assert!(is_correct_guess("CAT ", "cat"));
        assert!(is_correct_guess("  cat\t", "cat"));
        assert!(is_correct_guess("\ncat\n", "cat"));

        // Inner whitespace is significant
        assert!(!is_correct_guess("c at", "cat"));
        assert!(is_correct_guess(" ice cream ", "ice cream"));
    }

    #[test]
    fn test_no_partial_credit() {
        assert!(!is_correct_guess("ca", "cat"));
        assert!(!is_correct_guess("cats", "cat"));
        assert!(!is_correct_guess("", "cat"));
        assert!(!is_correct_guess("   ", "cat"));
    }

    #[test]
    fn test_word_is_not_trimmed() {
        // Stored words are compared as they are, only lowercased
        assert!(!is_correct_guess("cat", "cat "));
    }

    #[test]
    fn test_normalize_guess() {
        assert_eq!(normalize_guess("  HeLLo "), "hello");
        assert_eq!(normalize_guess(""), "");
    }
}
