//! Digit transliteration between Devanagari and ASCII numerals.

/// Transliterates Devanagari digits to ASCII, leaving other characters
/// untouched.
pub fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '०'..='९' => {
                let offset = c as u32 - '०' as u32;
                // Safe: offset is 0..=9
                char::from_digit(offset, 10).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Transliterates ASCII digits to Devanagari, leaving other characters
/// untouched. Used for diagnostic spans shown alongside expected Bikram
/// Sambat dates.
pub fn to_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                let offset = c as u32 - '0' as u32;
                char::from_u32('०' as u32 + offset).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ascii_digits() {
        assert_eq!(to_ascii_digits("२०५६-१०-१५"), "2056-10-15");
        assert_eq!(to_ascii_digits("नं १२३"), "नं 123");
        assert_eq!(to_ascii_digits("no digits"), "no digits");
    }

    #[test]
    fn test_to_devanagari_digits() {
        assert_eq!(to_devanagari_digits("2056-10-15"), "२०५६-१०-१५");
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(to_ascii_digits(&to_devanagari_digits("1234567890")), "1234567890");
    }
}
