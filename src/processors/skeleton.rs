//! Cross-script consonant-skeleton extraction and matching.
//!
//! Names on citizenship cards are printed in Devanagari while users assert
//! them in Latin script. Both scripts reduce to a consonant-only "skeleton"
//! ("Manjil" and "मन्जिल" both become `mnjl`), which makes approximate
//! identity matching possible without transliteration: a skeleton substring
//! hit is an exact match, anything else falls back to an edit-distance
//! similarity ratio.

use strsim::normalized_levenshtein;

/// Extracts the Latin consonant skeleton.
///
/// Lowercases, keeps `a`-`z` only, then drops the vowels `aeiou`.
pub fn latin_skeleton(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .collect()
}

/// Extracts the Devanagari consonant skeleton.
///
/// Each consonant maps to its romanized consonant sound; vowel signs, the
/// virama, digits, and everything else are dropped.
pub fn devanagari_skeleton(text: &str) -> String {
    let mut skeleton = String::with_capacity(text.len() / 2);
    for c in text.chars() {
        if let Some(sound) = consonant_sound(c) {
            skeleton.push_str(sound);
        }
    }
    skeleton
}

/// Romanized consonant sound for a Devanagari consonant.
///
/// व maps to `b` rather than `v` to match how it is asserted in Latin-script
/// Nepali names.
fn consonant_sound(c: char) -> Option<&'static str> {
    let sound = match c {
        'क' => "k",
        'ख' => "kh",
        'ग' => "g",
        'घ' => "gh",
        'ङ' => "n",
        'च' => "ch",
        'छ' => "chh",
        'ज' => "j",
        'झ' => "jh",
        'ञ' => "n",
        'ट' => "t",
        'ठ' => "th",
        'ड' => "d",
        'ढ' => "dh",
        'ण' => "n",
        'त' => "t",
        'थ' => "th",
        'द' => "d",
        'ध' => "dh",
        'न' => "n",
        'प' => "p",
        'फ' => "f",
        'ब' => "b",
        'भ' => "bh",
        'म' => "m",
        'य' => "y",
        'र' => "r",
        'ल' => "l",
        'व' => "b",
        'श' => "s",
        'ष' => "sh",
        'स' => "s",
        'ह' => "h",
        _ => return None,
    };
    Some(sound)
}

/// Scores an asserted-name skeleton against a corpus skeleton.
///
/// A substring hit is an exact match (100); otherwise the score is the
/// normalized Levenshtein similarity scaled to `[0, 100]`. An empty skeleton
/// on either side scores 0.
pub fn skeleton_score(needle: &str, haystack: &str) -> u8 {
    if needle.is_empty() || haystack.is_empty() {
        return 0;
    }
    if haystack.contains(needle) {
        return 100;
    }
    (normalized_levenshtein(needle, haystack) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_skeleton() {
        assert_eq!(latin_skeleton("Manjil"), "mnjl");
        assert_eq!(latin_skeleton("Manjil Rai"), "mnjlr");
        assert_eq!(latin_skeleton("AEIOU aeiou"), "");
        assert_eq!(latin_skeleton("O'Brien-1"), "brn");
    }

    #[test]
    fn test_devanagari_skeleton() {
        // मन्जिल: म न ् ज ि ल -> m n j l (virama and vowel sign dropped)
        assert_eq!(devanagari_skeleton("मन्जिल"), "mnjl");
        assert_eq!(devanagari_skeleton("राई"), "r");
        assert_eq!(devanagari_skeleton("२०५६"), "");
    }

    #[test]
    fn test_cross_script_agreement() {
        assert_eq!(latin_skeleton("Manjil"), devanagari_skeleton("मन्जिल"));
    }

    #[test]
    fn test_substring_scores_exact() {
        assert_eq!(skeleton_score("mnjl", "mnjl"), 100);
        assert_eq!(skeleton_score("mnjl", "xxmnjlrxx"), 100);
    }

    #[test]
    fn test_fuzzy_fallback_is_bounded() {
        let score = skeleton_score("mnjl", "mnjr");
        assert!(score > 50 && score < 100, "got {score}");
    }

    #[test]
    fn test_empty_skeletons_score_zero() {
        assert_eq!(skeleton_score("", "mnjl"), 0);
        assert_eq!(skeleton_score("mnjl", ""), 0);
    }
}
