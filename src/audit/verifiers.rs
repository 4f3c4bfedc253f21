//! Field verifiers reconciling asserted identity values against OCR text.
//!
//! Each verifier takes the asserted value plus the raw and normalized OCR
//! corpora and returns an [`AuditField`]. Verifiers never fail the request:
//! even an unparseable date of birth is reported as a field-level `ERROR`
//! outcome rather than a pipeline error.

use crate::calendar::BsDate;
use crate::core::config::PipelineConfig;
use crate::core::traits::DateConverter;
use crate::domain::{AuditField, ErrorType, FieldStatus};
use crate::processors::{
    devanagari_skeleton, latin_skeleton, skeleton_score, to_ascii_digits, to_devanagari_digits,
};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Verifies the asserted name against the corpus.
///
/// Fast path: a case-insensitive literal hit anywhere in the combined corpus
/// is a full match. Otherwise the Devanagari runs of the corpus and the
/// asserted name are reduced to consonant skeletons and scored.
pub fn verify_name(
    asserted: &str,
    raw_corpus: &str,
    normalized_corpus: &str,
    config: &PipelineConfig,
) -> AuditField {
    let corpus = format!("{raw_corpus} {normalized_corpus}");
    let asserted_trimmed = asserted.trim();

    if !asserted_trimmed.is_empty()
        && corpus
            .to_lowercase()
            .contains(&asserted_trimmed.to_lowercase())
    {
        return AuditField {
            score: 100,
            status: FieldStatus::Match,
            span: asserted_trimmed.to_string(),
            error_type: ErrorType::Success,
        };
    }

    let asserted_skeleton = latin_skeleton(asserted_trimmed);
    let devanagari_text: String = corpus
        .chars()
        .filter(|c| ('\u{0900}'..='\u{097F}').contains(c))
        .collect();
    let corpus_skeleton = devanagari_skeleton(&devanagari_text);
    let score = skeleton_score(&asserted_skeleton, &corpus_skeleton);

    let status = if score > config.name_match_threshold {
        FieldStatus::Match
    } else if score > config.name_partial_threshold {
        FieldStatus::Partial
    } else {
        FieldStatus::Mismatch
    };
    let error_type = if score > config.name_match_threshold {
        ErrorType::Success
    } else {
        ErrorType::NameMismatch
    };
    tracing::debug!(score, %status, "name skeleton comparison");

    AuditField {
        score,
        status,
        span: format!("Skeleton: {asserted_skeleton}"),
        error_type,
    }
}

/// Verifies the asserted ID number against the corpus.
///
/// Both sides are reduced to bare ASCII digit strings; the asserted digits
/// must appear as a contiguous run in the corpus digits. There is no partial
/// state for this field.
pub fn verify_id_number(asserted: &str, raw_corpus: &str, normalized_corpus: &str) -> AuditField {
    let corpus = to_ascii_digits(&format!("{raw_corpus} {normalized_corpus}"));
    let corpus_digits: String = corpus.chars().filter(char::is_ascii_digit).collect();
    let asserted_digits: String = to_ascii_digits(asserted)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if !asserted_digits.is_empty() && corpus_digits.contains(&asserted_digits) {
        return AuditField {
            score: 100,
            status: FieldStatus::Match,
            span: asserted.to_string(),
            error_type: ErrorType::Success,
        };
    }

    AuditField {
        score: 0,
        status: FieldStatus::Mismatch,
        span: "Not Found".to_string(),
        error_type: ErrorType::IdDigitMisread,
    }
}

/// Verifies the asserted date of birth against the corpus.
///
/// The asserted Gregorian date is converted to Bikram Sambat and both
/// calendars' token sets are searched in the digit-normalized corpus. A
/// calendar matches only when its year token appears and at least two of its
/// tokens (the year included) appear, which avoids false positives from
/// incidental digit collisions. Bikram Sambat is checked first since cards
/// display it with priority.
pub fn verify_dob(
    asserted: &str,
    raw_corpus: &str,
    normalized_corpus: &str,
    converter: &dyn DateConverter,
) -> AuditField {
    let (ad_date, bs_date) = match parse_and_convert(asserted, converter) {
        Ok(dates) => dates,
        Err(reason) => {
            return AuditField {
                score: 0,
                status: FieldStatus::Error,
                span: reason,
                error_type: ErrorType::DateParseErr,
            };
        }
    };

    let corpus = to_ascii_digits(&format!("{raw_corpus} {normalized_corpus}"));

    let ad_year = ad_date.year().to_string();
    let ad_tokens: BTreeSet<String> = [
        ad_year.clone(),
        format!("{:02}", ad_date.month()),
        format!("{:02}", ad_date.day()),
    ]
    .into_iter()
    .collect();

    let bs_year = bs_date.year.to_string();
    let bs_tokens: BTreeSet<String> = [
        bs_year.clone(),
        format!("{:02}", bs_date.month),
        format!("{:02}", bs_date.day),
        bs_date.month.to_string(),
        bs_date.day.to_string(),
    ]
    .into_iter()
    .collect();

    if calendar_matches(&corpus, &bs_year, &bs_tokens) {
        return dob_match("BS", &format!("{}-{}-{}", bs_date.year, bs_date.month, bs_date.day));
    }
    if calendar_matches(&corpus, &ad_year, &ad_tokens) {
        let date = format!("{}-{}-{}", ad_date.year(), ad_date.month(), ad_date.day());
        return dob_match("AD", &date);
    }

    let expected = bs_date.to_string();
    AuditField {
        score: 0,
        status: FieldStatus::Mismatch,
        span: format!("Expected BS: {expected} ({})", to_devanagari_digits(&expected)),
        error_type: ErrorType::DobMismatch,
    }
}

/// Parses the asserted Gregorian date and converts it to Bikram Sambat.
/// Returns the failure reason on any parse, validity, or conversion error.
fn parse_and_convert(
    asserted: &str,
    converter: &dyn DateConverter,
) -> Result<(NaiveDate, BsDate), String> {
    let cleaned = asserted.trim().replace('/', "-");
    let mut parts = cleaned.splitn(3, '-');
    let year = next_number(&mut parts)?;
    let month = next_number(&mut parts)?;
    let day = next_number(&mut parts)?;

    let ad_date = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| format!("invalid Gregorian date {year}-{month}-{day}"))?;
    let bs_date = converter
        .to_bikram_sambat(ad_date)
        .map_err(|e| e.to_string())?;
    Ok((ad_date, bs_date))
}

fn next_number(parts: &mut std::str::SplitN<'_, char>) -> Result<u32, String> {
    let part = parts
        .next()
        .ok_or_else(|| "expected YYYY-MM-DD".to_string())?;
    part.trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid date component '{part}': {e}"))
}

/// The minimum-evidence rule: the year token must appear, and at least two
/// distinct tokens (the year counts) must appear.
fn calendar_matches(corpus: &str, year_token: &str, tokens: &BTreeSet<String>) -> bool {
    let hits = tokens.iter().filter(|t| corpus.contains(t.as_str())).count();
    hits >= 2 && corpus.contains(year_token)
}

fn dob_match(calendar: &str, date: &str) -> AuditField {
    AuditField {
        score: 100,
        status: FieldStatus::Match,
        span: format!("{calendar}: {date}"),
        error_type: ErrorType::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::BikramSambat;

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[test]
    fn test_name_literal_match() {
        let field = verify_name("Manjil Rai", "Name: MANJIL RAI", "", &config());
        assert_eq!(field.score, 100);
        assert_eq!(field.status, FieldStatus::Match);
        assert_eq!(field.error_type, ErrorType::Success);
    }

    #[test]
    fn test_name_skeleton_match_across_scripts() {
        let field = verify_name("Manjil", "नाम: मन्जिल", "", &config());
        assert_eq!(field.score, 100);
        assert_eq!(field.status, FieldStatus::Match);
        assert_eq!(field.error_type, ErrorType::Success);
        assert!(field.span.contains("mnjl"));
    }

    #[test]
    fn test_name_partial_when_only_first_name_on_card() {
        // Asserted "Manjil Rai" skeletonizes to "mnjlr" but the card only
        // carries the first name ("mnjl"): similarity 0.8 lands the score on
        // the partial band's upper bound, below the full-match threshold.
        let field = verify_name("Manjil Rai", "मन्जिल", "", &config());
        assert_eq!(field.score, 80);
        assert_eq!(field.status, FieldStatus::Partial);
        assert_eq!(field.error_type, ErrorType::NameMismatch);
    }

    #[test]
    fn test_name_mismatch() {
        let field = verify_name("Manjil", "no names here", "", &config());
        assert_eq!(field.score, 0);
        assert_eq!(field.status, FieldStatus::Mismatch);
        assert_eq!(field.error_type, ErrorType::NameMismatch);
    }

    #[test]
    fn test_empty_name_does_not_match() {
        let field = verify_name("", "any corpus", "", &config());
        assert_eq!(field.status, FieldStatus::Mismatch);
    }

    #[test]
    fn test_id_match_ignores_separators() {
        let field = verify_id_number("12-34-567", "ID No: 1234567", "");
        assert_eq!(field.score, 100);
        assert_eq!(field.status, FieldStatus::Match);
        assert_eq!(field.error_type, ErrorType::Success);
    }

    #[test]
    fn test_id_match_devanagari_digits() {
        let field = verify_id_number("1234567", "नं १२३४५६७", "");
        assert_eq!(field.status, FieldStatus::Match);
    }

    #[test]
    fn test_id_mismatch() {
        let field = verify_id_number("7654321", "ID No: 1234567", "");
        assert_eq!(field.score, 0);
        assert_eq!(field.status, FieldStatus::Mismatch);
        assert_eq!(field.error_type, ErrorType::IdDigitMisread);
    }

    #[test]
    fn test_empty_id_does_not_match() {
        let field = verify_id_number("--", "1234567", "");
        assert_eq!(field.status, FieldStatus::Mismatch);
    }

    #[test]
    fn test_dob_bs_match_without_gregorian_year() {
        // 2000-01-29 AD converts to 2056-10-15 BS; the corpus carries the BS
        // year and month but no Gregorian year.
        let field = verify_dob("2000-01-29", "जन्म मिति: २०५६-१०-१५", "", &BikramSambat);
        assert_eq!(field.score, 100);
        assert_eq!(field.status, FieldStatus::Match);
        assert!(field.span.starts_with("BS:"), "span was {}", field.span);
    }

    #[test]
    fn test_dob_ad_fallback_match() {
        let field = verify_dob("2000-01-29", "Date of Birth: 2000-01-29", "", &BikramSambat);
        assert_eq!(field.status, FieldStatus::Match);
        assert!(field.span.starts_with("AD:"), "span was {}", field.span);
    }

    #[test]
    fn test_dob_year_alone_is_not_enough() {
        // Only the BS year appears; the minimum-evidence rule needs a second
        // token.
        let field = verify_dob("2000-01-29", "२०५६", "", &BikramSambat);
        assert_eq!(field.status, FieldStatus::Mismatch);
        assert_eq!(field.error_type, ErrorType::DobMismatch);
        assert!(field.span.contains("2056-10-15"));
    }

    #[test]
    fn test_dob_parse_failure() {
        let field = verify_dob("2000-13-40", "anything", "", &BikramSambat);
        assert_eq!(field.score, 0);
        assert_eq!(field.status, FieldStatus::Error);
        assert_eq!(field.error_type, ErrorType::DateParseErr);
    }

    #[test]
    fn test_dob_garbage_input() {
        let field = verify_dob("soon", "anything", "", &BikramSambat);
        assert_eq!(field.status, FieldStatus::Error);
        assert_eq!(field.error_type, ErrorType::DateParseErr);
    }

    #[test]
    fn test_dob_slash_separators_accepted() {
        let field = verify_dob("2000/01/29", "2000-01-29", "", &BikramSambat);
        assert_eq!(field.status, FieldStatus::Match);
    }

    #[test]
    fn test_dob_out_of_range_reports_parse_error() {
        let field = verify_dob("1900-01-01", "anything", "", &BikramSambat);
        assert_eq!(field.status, FieldStatus::Error);
        assert_eq!(field.error_type, ErrorType::DateParseErr);
        assert!(field.span.contains("Bikram Sambat range"));
    }
}
