use regex::Regex;
use serde::Serialize;

use super::{
    composition::{
        analyze_composition,
        extract_kanji,
        TextComposition,
    },
    difficulty::{
        estimate_difficulty,
        estimate_jlpt,
    },
    sentence_type::detect_sentence_type,
};
use crate::core::{
    JlptLevel,
    ManabiError,
    SentenceType,
};

/// Everything the estimator derives from one sentence. The caller writes
/// the difficulty/JLPT fields onto its sentence record; the composition
/// and kanji list feed display features.
#[derive(Serialize, Debug, Clone)]
pub struct SentenceAnalysis {
    pub text: String, // normalized form the analysis was computed over
    pub composition: TextComposition,
    pub has_kanji: bool,
    pub kanji_count: usize,
    pub kanji_characters: Vec<char>,
    pub difficulty_level: u8,
    pub jlpt_level: Option<JlptLevel>,
    pub sentence_type: SentenceType,
}

/// Sentence analyzer. Construct one and pass it to whoever needs it.
/// It only holds the compiled whitespace pattern, and analysis is pure,
/// so a single instance can be shared across threads.
pub struct TextAnalyzer {
    whitespace: Regex,
}

impl TextAnalyzer {
    pub fn new() -> Self {
        TextAnalyzer { whitespace: Regex::new(r"\s+").unwrap() }
    }

    /// Analyze one sentence. Whitespace-only input is rejected rather
    /// than analyzed as an empty composition.
    pub fn analyze(&self, text: &str) -> Result<SentenceAnalysis, ManabiError> {
        let normalized = self.normalize(text);
        if normalized.is_empty() {
            return Err(ManabiError::EmptyText);
        }

        let composition = analyze_composition(&normalized);
        let length = normalized.chars().count();

        Ok(SentenceAnalysis {
            has_kanji: composition.kanji > 0,
            kanji_count: composition.kanji,
            kanji_characters: extract_kanji(&normalized),
            difficulty_level: estimate_difficulty(&composition, length),
            jlpt_level: estimate_jlpt(&composition),
            sentence_type: detect_sentence_type(&normalized),
            composition,
            text: normalized,
        })
    }

    /// Trim and collapse whitespace runs to a single space. Length and
    /// composition are both measured on this form.
    fn normalize(&self, text: &str) -> String {
        self.whitespace.replace_all(text.trim(), " ").to_string()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
