//! OCR result types flowing between recognition and verification.

use crate::domain::card::CardFace;
use serde::{Deserialize, Serialize};

/// Script bias passed to the recognition engine.
///
/// The back of a citizenship card is printed in Latin script, every other
/// face is read with the Devanagari-capable engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptHint {
    /// Devanagari-capable recognition (also reads Latin reasonably well).
    Nepali,
    /// Latin-only recognition.
    English,
}

impl ScriptHint {
    /// Picks the script hint for a card face.
    pub fn for_face(face: CardFace) -> Self {
        match face {
            CardFace::Back => Self::English,
            CardFace::Front | CardFace::Unknown => Self::Nepali,
        }
    }
}

/// How the recognition engine arrived at its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceFlag {
    /// Primary engine produced the text.
    Normal,
    /// A fallback engine produced the text.
    FallbackUsed,
    /// The crop was empty or degenerate; no text was produced.
    EmptyCrop,
}

/// Recognized and repaired text for one text-bearing region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrOutcome {
    /// Face of the card the region belonged to.
    pub face: CardFace,
    /// Text exactly as the engine produced it.
    pub raw_text: String,
    /// Text after the normalization pipeline.
    pub normalized_text: String,
    /// Identifier of the engine that produced the text.
    pub engine_id: String,
    /// How the engine arrived at the result.
    pub flag: ConfidenceFlag,
}
