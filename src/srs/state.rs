use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use crate::core::StudyStatus;

/// Mastery state for one learner x sentence pair. Values only; the
/// scheduler consumes a state and returns the updated one, and the
/// caller is responsible for persisting it (and for serializing
/// concurrent reviews of the same pair).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudyState {
    pub uuid: Uuid,

    // SM-2 parameters
    pub repetition_count: u32,   // consecutive successful reviews since last reset
    pub easiness_factor: f64,    // never below 1.3
    pub interval_days: u32,      // days until the next review, >= 1
    pub next_review_date: DateTime<Utc>,

    // Performance tracking
    pub correct_answers: u32,
    pub total_attempts: u32,
    pub current_streak: u32,
    pub best_streak: u32,

    pub study_status: StudyStatus,
    pub mastery_level: u8,       // 0-5, never decreases

    pub created_at: DateTime<Utc>,
    pub last_studied: Option<DateTime<Utc>>,
    pub last_correct: Option<DateTime<Utc>>,
}

impl StudyState {
    /// Fresh state for an item the learner is seeing for the first time.
    pub fn new(now: DateTime<Utc>) -> Self {
        StudyState {
            uuid: Uuid::new_v4(),
            repetition_count: 0,
            easiness_factor: 2.5,
            interval_days: 1,
            next_review_date: now,
            correct_answers: 0,
            total_attempts: 0,
            current_streak: 0,
            best_streak: 0,
            study_status: StudyStatus::New,
            mastery_level: 0,
            created_at: now,
            last_studied: None,
            last_correct: None,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.next_review_date
    }

    /// Lifetime accuracy as a percentage, 0.0 before the first attempt.
    pub fn accuracy_rate(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        (self.correct_answers as f64 / self.total_attempts as f64) * 100.0
    }
}
