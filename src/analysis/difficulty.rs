use super::composition::TextComposition;
use crate::core::JlptLevel;

/// Map kanji density onto a JLPT band. Thresholds are checked in
/// ascending order; the first match wins. Returns None when there is
/// nothing to measure.
pub fn estimate_jlpt(composition: &TextComposition) -> Option<JlptLevel> {
    if composition.total() == 0 {
        return None;
    }

    let ratio = composition.kanji_ratio();
    let level = if ratio == 0.0 {
        JlptLevel::N5
    } else if ratio <= 0.2 {
        JlptLevel::N4
    } else if ratio <= 0.4 {
        JlptLevel::N3
    } else if ratio <= 0.6 {
        JlptLevel::N2
    } else {
        JlptLevel::N1
    };

    Some(level)
}

/// Difficulty on a 1-5 scale: the same density thresholds as the JLPT
/// estimate, then a nudge for raw length. Long texts (over 50 chars) get
/// one harder, short ones (under 10) one easier.
pub fn estimate_difficulty(composition: &TextComposition, text_length: usize) -> u8 {
    if composition.total() == 0 {
        return 1;
    }

    let ratio = composition.kanji_ratio();
    let mut difficulty: u8 = if ratio == 0.0 {
        1
    } else if ratio <= 0.2 {
        2
    } else if ratio <= 0.4 {
        3
    } else if ratio <= 0.6 {
        4
    } else {
        5
    };

    if text_length > 50 {
        difficulty = (difficulty + 1).min(5);
    } else if text_length < 10 {
        difficulty = (difficulty - 1).max(1);
    }

    difficulty
}
