//! Whitespace-insensitive output comparison.

/// Compare two outputs token by token.
///
/// Leading, trailing and repeated whitespace (blank lines and `\r` included)
/// is ignored. Tokens must match exactly.
pub fn lenient_eq(expected: &str, actual: &str) -> bool {
    expected
        .split_ascii_whitespace()
        .eq(actual.split_ascii_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_surrounding_whitespace() {
        assert!(lenient_eq("Berto\n", "  Berto"));
        assert!(lenient_eq("Berto\r\n\r\n", "Berto"));
    }

    #[test]
    fn ignores_repeated_inner_whitespace() {
        assert!(lenient_eq("a b\nc", "a   b c\n"));
    }

    #[test]
    fn is_case_sensitive() {
        assert!(!lenient_eq("Berto", "berto"));
    }

    #[test]
    fn detects_missing_or_extra_tokens() {
        assert!(!lenient_eq("Berto", ""));
        assert!(!lenient_eq("Berto", "Berto Carlo"));
    }
}
