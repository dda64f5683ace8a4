//! Length criterion - checks password minimum length.

const MIN_LENGTH: usize = 8;

/// Checks if the password has at least 8 characters.
///
/// Length is counted in characters, not bytes, so a multi-byte character
/// counts once.
pub fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short() {
        assert!(!has_min_length("Short1!"));
        assert!(!has_min_length(""));
    }

    #[test]
    fn test_exactly_minimum() {
        assert!(has_min_length("12345678"));
    }

    #[test]
    fn test_longer_than_minimum() {
        assert!(has_min_length("LongEnough123!"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert!(!has_min_length("ééééééé"));
        // 8 characters, 16 bytes
        assert!(has_min_length("éééééééé"));
    }
}
