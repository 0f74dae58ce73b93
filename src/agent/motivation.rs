//! Motivation Generator
//!
//! Picks an encouragement message from a tiered pool. The randomness source
//! is passed in so callers can seed or stub it.

use rand::seq::SliceRandom;
use rand::Rng;

/// Interaction counts above this use the advanced pool
pub const ADVANCED_THRESHOLD: u64 = 5;

pub const STANDARD_POOL: [&str; 10] = [
    "Every expert was once a beginner. Keep going!",
    "Small steps every day add up to big results.",
    "You're building skills that employers are looking for.",
    "Consistency beats intensity. You've got this!",
    "Learning something new today puts you ahead of yesterday.",
    "Your future self will thank you for the work you do now.",
    "Progress, not perfection, is what counts.",
    "Curiosity is your best career asset. Stay curious!",
    "Each skill you learn opens a new door.",
    "You're investing in the most important asset: yourself.",
];

const ADVANCED_POOL: [&str; 4] = [
    "{count} sessions in and still going strong. That's real commitment!",
    "You've checked in {count} times. Momentum like this gets people hired.",
    "{count} interactions! You're well past the point where most people quit.",
    "Session {count}: your dedication is turning into expertise.",
];

/// The advanced pool with the interaction count filled in
pub fn advanced_pool(interaction_count: u64) -> Vec<String> {
    ADVANCED_POOL
        .iter()
        .map(|template| template.replace("{count}", &interaction_count.to_string()))
        .collect()
}

pub fn motivational_message<R: Rng + ?Sized>(interaction_count: u64, rng: &mut R) -> String {
    if interaction_count <= ADVANCED_THRESHOLD {
        STANDARD_POOL
            .choose(rng)
            .copied()
            .unwrap_or(STANDARD_POOL[0])
            .to_string()
    } else {
        advanced_pool(interaction_count)
            .choose(rng)
            .cloned()
            .unwrap_or_default()
    }
}
