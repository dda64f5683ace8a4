//! Character class criteria - uppercase, lowercase, digits, special characters.
//!
//! Only the ASCII ranges A-Z, a-z and 0-9 count for the letter and digit
//! checks. Accented or non-Latin letters satisfy none of them.

/// The only characters that count as special.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks if the password contains an uppercase letter (A-Z).
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Checks if the password contains a lowercase letter (a-z).
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks if the password contains a digit (0-9).
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Checks if the password contains a character from the fixed special set.
pub fn has_special_character(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
