//! Aggregation of the per round statistics over multiple rounds.
//!
//! Clutch and defuser numbers only cover the recording player's team, which
//! the replay always reports as team 0.

use std::collections::HashMap;

use common::round_stats::{AdvancedStats, ClutchSummary, DefuserSummary};

use crate::round::{Participant, RoundInput};

pub const RECORDING_TEAM: u8 = 0;

/// The statistics of a round together with the roster they were computed for
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedRound {
    pub roster: Vec<Participant>,
    pub stats: HashMap<String, AdvancedStats>,
}

impl AnalyzedRound {
    pub fn analyze(input: &RoundInput) -> Self {
        Self {
            roster: input.roster.clone(),
            stats: crate::advanced::analyze(&input.roster, &input.base, &input.events),
        }
    }

    /// The stats of every player on the given team
    pub fn team(&self, team: u8) -> impl Iterator<Item = (&String, &AdvancedStats)> + '_ {
        self.roster
            .iter()
            .filter(move |p| p.team == team)
            .filter_map(move |p| self.stats.get_key_value(&p.username))
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Clutch numbers per player, only for players with at least one attempt.
///
/// Sorted by wins (descending), ties broken by username.
pub fn clutches(rounds: &[AnalyzedRound]) -> Vec<ClutchSummary> {
    let mut summaries = HashMap::<&str, ClutchSummary>::new();

    for (username, stats) in rounds.iter().flat_map(|round| round.team(RECORDING_TEAM)) {
        let summary = summaries
            .entry(username.as_str())
            .or_insert_with(|| ClutchSummary {
                username: username.clone(),
                ..Default::default()
            });

        for enemies in 1..=5 {
            if stats.clutch_flag(enemies) == Some(true) {
                summary.situations[enemies - 1] += 1;
                if stats.survived {
                    summary.won[enemies - 1] += 1;
                }
            }
        }

        summary.attempts += stats.clutch_attempts;
        summary.wins += stats.clutch_wins;
    }

    let mut result: Vec<_> = summaries
        .into_values()
        .filter(|s| s.attempts > 0)
        .map(|mut s| {
            s.clutch_rate = percentage(s.wins, s.attempts);
            s
        })
        .collect();
    result.sort_unstable_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| a.username.cmp(&b.username))
    });

    result
}

/// Objective numbers per player, only for players that interacted with the defuser.
///
/// Sorted by plants (descending), ties broken by username.
pub fn defusers(rounds: &[AnalyzedRound]) -> Vec<DefuserSummary> {
    let mut summaries = HashMap::<&str, DefuserSummary>::new();

    for (username, stats) in rounds.iter().flat_map(|round| round.team(RECORDING_TEAM)) {
        let summary = summaries
            .entry(username.as_str())
            .or_insert_with(|| DefuserSummary {
                username: username.clone(),
                ..Default::default()
            });

        summary.plants += stats.defuser_plants;
        summary.defuses += stats.defuser_defuses;
        summary.plant_denials += stats.plant_denials;
    }

    let mut result: Vec<_> = summaries
        .into_values()
        .filter(|s| s.plants > 0 || s.defuses > 0 || s.plant_denials > 0)
        .map(|mut s| {
            s.plant_success_rate = percentage(s.plants, s.plants + s.plant_denials);
            s
        })
        .collect();
    result.sort_unstable_by(|a, b| {
        b.plants
            .cmp(&a.plants)
            .then_with(|| a.username.cmp(&b.username))
    });

    result
}

/// Share of the rounds the player took part in where they had a KOST, in percent
pub fn kost_percentage(rounds: &[AnalyzedRound], username: &str) -> Option<f64> {
    let played: Vec<_> = rounds.iter().filter_map(|r| r.stats.get(username)).collect();
    if played.is_empty() {
        return None;
    }

    let kost = played.iter().filter(|s| s.kost).count();
    Some(percentage(kost, played.len()))
}
