//! SM-2 spaced-repetition scheduling.
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but the answer was remembered once seen
//! - 2: Incorrect, but the answer seemed easy to recall
//! - 3: Correct with serious difficulty
//! - 4: Correct after hesitation
//! - 5: Perfect recall

use chrono::{
    DateTime,
    Duration,
    Utc,
};

use super::state::StudyState;
use crate::core::{
    ManabiError,
    StudyStatus,
};

/// Floor for the easiness factor.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Apply one review with the given quality rating and return the updated
/// state. The input is never mutated; `now` anchors the next review date.
///
/// Ratings below 3 restart the repetition ladder (count, streak, interval)
/// but leave the easiness factor and mastery level untouched. Ratings of 3
/// and above grow the interval: 1 day, then 6 days, then the previous
/// interval scaled by the updated easiness factor.
pub fn schedule(
    state: &StudyState,
    quality: u8,
    now: DateTime<Utc>,
) -> Result<StudyState, ManabiError> {
    if quality > 5 {
        return Err(ManabiError::InvalidQualityRating(quality));
    }

    let mut next = state.clone();
    next.total_attempts += 1;

    if quality < 3 {
        next.repetition_count = 0;
        next.interval_days = 1;
        next.current_streak = 0;
    } else {
        next.repetition_count += 1;
        next.current_streak += 1;
        next.best_streak = next.best_streak.max(next.current_streak);
        next.correct_answers += 1;
        next.last_correct = Some(now);

        // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02))
        // A rating of 4 leaves the factor unchanged; 5 raises it; 3 shrinks
        // it toward the floor.
        let q = quality as f64;
        next.easiness_factor = MIN_EASE_FACTOR
            .max(next.easiness_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)));

        // Fixed anchors for the first two repetitions; easiness-driven
        // growth after that. Truncation, not rounding: intervals must be
        // reproducible in whole days.
        next.interval_days = match next.repetition_count {
            1 => 1,
            2 => 6,
            _ => (next.interval_days as f64 * next.easiness_factor) as u32,
        };

        if next.current_streak >= 5 && quality >= 4 {
            next.mastery_level = (next.mastery_level + 1).min(5);
            if next.mastery_level >= 4 {
                next.study_status = StudyStatus::Mastered;
            }
        } else {
            next.study_status = StudyStatus::Review;
        }
    }

    next.next_review_date = now + Duration::days(next.interval_days as i64);
    next.last_studied = Some(now);

    Ok(next)
}

/// Intervals (in days) that the Again/Hard/Good/Easy ratings (quality 1,
/// 3, 4, 5) would produce from this state. Lets a caller show the learner
/// what each answer button costs.
pub fn preview_intervals(state: &StudyState, now: DateTime<Utc>) -> [u32; 4] {
    [1u8, 3, 4, 5].map(|quality| {
        schedule(state, quality, now).map(|next| next.interval_days).unwrap_or(1)
    })
}
