//! Round scoring
//!
//! The player sorts the anonymized outputs and submits the years in the order they chose. The
//! submission must be a permutation of the line-up's years; the correct order is those years
//! sorted ascending.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const POINTS_PER_POSITION: u32 = 100;
pub const PERFECT_ORDER_BONUS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub score: u32,
    pub correct_order: Vec<i32>,
    pub user_order: Vec<i32>,
    pub correct_count: usize,
    /// Percentage of positions placed correctly
    pub accuracy: f64,
    pub share_text: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("userOrder must contain at least one year")]
    EmptyOrder,
    #[error("year {0} appears more than once in userOrder")]
    DuplicateYear(i32),
    #[error("year {0} is not part of the current line-up")]
    UnknownYear(i32),
    #[error("userOrder has {submitted} years but the line-up has {expected}")]
    IncompleteOrder { submitted: usize, expected: usize },
}

/// Score a submitted ordering against the years of the line-up
pub fn score_ordering(user_order: &[i32], lineup_years: &[i32]) -> Result<GameScore, ScoreError> {
    if user_order.is_empty() {
        return Err(ScoreError::EmptyOrder);
    }

    let mut seen = HashSet::with_capacity(user_order.len());
    if let Some(duplicate) = user_order.iter().find(|year| !seen.insert(**year)) {
        return Err(ScoreError::DuplicateYear(*duplicate));
    }

    if let Some(unknown) = user_order.iter().find(|year| !lineup_years.contains(*year)) {
        return Err(ScoreError::UnknownYear(*unknown));
    }

    if user_order.len() != lineup_years.len() {
        return Err(ScoreError::IncompleteOrder {
            submitted: user_order.len(),
            expected: lineup_years.len(),
        });
    }

    let mut correct_order = lineup_years.to_vec();
    correct_order.sort_unstable();

    let correct_count = user_order
        .iter()
        .zip(&correct_order)
        .filter(|(user, correct)| user == correct)
        .count();

    let mut score = correct_count as u32 * POINTS_PER_POSITION;
    if correct_count == user_order.len() {
        score += PERFECT_ORDER_BONUS;
    }

    let accuracy = correct_count as f64 / user_order.len() as f64 * 100.0;

    Ok(GameScore {
        score,
        correct_order,
        user_order: user_order.to_vec(),
        correct_count,
        accuracy,
        share_text: share_text(score),
    })
}

/// Text prefilled when the player shares their result
pub fn share_text(score: u32) -> String {
    format!(
        "AI is progressing scary fast.\n\nTry your own prompt and compare GPT-2 to GPT-5:\n\n(I got {score} points)"
    )
}
