use core::fmt;

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

/// JLPT proficiency bands, N5 (easiest) through N1 (hardest).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl fmt::Display for JlptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        };
        write!(f, "{}", label)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StudyStatus {
    New,
    Learning,
    Review,
    Mastered,
}

impl fmt::Display for StudyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            StudyStatus::New => "new",
            StudyStatus::Learning => "learning",
            StudyStatus::Review => "review",
            StudyStatus::Mastered => "mastered",
        };
        write!(f, "{}", readable)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SentenceType {
    Statement,
    Question,
    Exclamation,
    Command,
    Other,
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            SentenceType::Statement => "statement",
            SentenceType::Question => "question",
            SentenceType::Exclamation => "exclamation",
            SentenceType::Command => "command",
            SentenceType::Other => "other",
        };
        write!(f, "{}", readable)
    }
}

/// A study sentence as the persistence layer stores it. The analysis
/// fields (reading, romaji, difficulty, JLPT) are filled in by the
/// import pipeline; the caller owns the row itself.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Sentence {
    pub uuid: Uuid,
    pub japanese_text: String,
    pub english_translation: String,
    pub hiragana_reading: Option<String>,
    pub romaji_reading: Option<String>,
    pub furigana_html: Option<String>,
    pub difficulty_level: u8,            // 1-5 scale
    pub jlpt_level: Option<JlptLevel>,
    pub sentence_type: SentenceType,
    pub category: Option<String>,        // grammar, vocabulary, etc.
    pub source: Option<String>,          // textbook, anime, import file, etc.
    pub created_at: DateTime<Utc>,
}
