//! Derived per-player statistics for a single round.
//!
//! Everything is computed in a single pass over the round's events, followed
//! by grouping every player's kills into streaks and combining the results
//! with the base statistics of the round.

use std::collections::HashMap;

use common::round_stats::AdvancedStats;

use crate::round::{BaseRoundStats, Event, Participant};

pub mod alive;
pub mod multikill;
pub mod trade;

/// Time windows used to detect trades and multi kills, in seconds
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of seconds between a death and the kill avenging it
    pub trade_window: f64,
    /// Maximum number of seconds between two kills of the same streak
    pub streak_gap: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trade_window: 3.0,
            streak_gap: 10.0,
        }
    }
}

struct Context<'c> {
    config: &'c Config,
    stats: HashMap<String, AdvancedStats>,
    alive: alive::AliveTracker,
    trades: trade::TradeWindow,
    timelines: HashMap<String, Vec<f64>>,
    entry_duel: bool,
}

impl<'c> Context<'c> {
    fn new(config: &'c Config, roster: &[Participant]) -> Self {
        let stats = roster
            .iter()
            .map(|p| (p.username.clone(), AdvancedStats::default()))
            .collect();

        Self {
            config,
            stats,
            alive: alive::AliveTracker::new(roster),
            trades: trade::TradeWindow::new(config.trade_window),
            timelines: HashMap::new(),
            entry_duel: false,
        }
    }

    fn player(&mut self, username: &str) -> Option<&mut AdvancedStats> {
        let stats = self.stats.get_mut(username);
        if stats.is_none() {
            tracing::warn!(username, "Event references a player outside of the roster");
        }
        stats
    }

    fn process(&mut self, event: &Event) {
        tracing::trace!(?event, "Processing");

        match event {
            Event::Kill {
                killer,
                victim,
                time,
                ..
            } => self.kill(killer, victim, *time),
            Event::Plant { username, .. } => {
                if let Some(stats) = self.player(username) {
                    stats.defuser_plants += 1;
                }
            }
            Event::Defuse { username, .. } => {
                if let Some(stats) = self.player(username) {
                    stats.defuser_defuses += 1;
                }
            }
            Event::Pickup { username, .. } => {
                if let Some(stats) = self.player(username) {
                    stats.defuser_pickups += 1;
                }
            }
        };
    }

    fn kill(&mut self, killer: &str, victim: &str, time: f64) {
        self.alive.remove(victim);

        self.timelines
            .entry(killer.to_owned())
            .or_default()
            .push(time);

        if !self.entry_duel {
            self.entry_duel = true;
            tracing::debug!(killer, victim, time, "Entry duel");

            if let Some(stats) = self.player(killer) {
                stats.entry_kill = true;
            }
            if let Some(stats) = self.player(victim) {
                stats.entry_death = true;
            }
        }

        let trades = self.trades.record(killer, victim, time);
        if trades > 0 {
            if let Some(stats) = self.player(killer) {
                stats.trade_kills += trades;
            }
            if let Some(stats) = self.player(victim) {
                stats.trade_deaths += trades;
            }
        }

        if let Some(clutch) = self.alive.clutch(killer) {
            tracing::debug!(killer, enemies = clutch.enemies, time, "Clutch situation");

            if let Some(stats) = self.player(killer) {
                stats.clutch_attempts += 1;
                stats.set_clutch_flag(clutch.enemies);

                // Counted once the situation is down to a 1v1, not when the last enemy dies
                if clutch.enemies == 1 {
                    stats.clutch_wins += 1;
                }
            }
        }
    }

    fn multikills(&mut self) {
        for (username, timeline) in self.timelines.iter() {
            let stats = match self.stats.get_mut(username) {
                Some(s) => s,
                None => continue,
            };

            let result = multikill::classify(timeline, self.config.streak_gap);
            if result != multikill::MultiKills::default() {
                tracing::debug!(username = username.as_str(), ?result, "Multi kills");
            }

            stats.double_kills += result.double;
            stats.triple_kills += result.triple;
            stats.quad_kills += result.quad;
            stats.ace |= result.ace;
        }
    }

    fn finalize(mut self, base: &[BaseRoundStats]) -> HashMap<String, AdvancedStats> {
        self.multikills();

        for base_stats in base {
            let stats = match self.stats.get_mut(&base_stats.username) {
                Some(s) => s,
                None => continue,
            };

            stats.survived = !base_stats.died;

            let kill = base_stats.kills > 0;
            let objective = stats.defuser_plants > 0 || stats.defuser_defuses > 0;
            let traded = stats.trade_deaths > 0;
            stats.kost = kill || objective || stats.survived || traded;
        }

        self.stats
    }
}

/// Analyses a round using the default [`Config`].
pub fn analyze(
    roster: &[Participant],
    base: &[BaseRoundStats],
    events: &[Event],
) -> HashMap<String, AdvancedStats> {
    analyze_with(&Config::default(), roster, base, events)
}

/// Analyses a single round.
///
/// The result contains exactly one entry for every participant of the
/// roster. `events` must be in the order they were recorded, they are never
/// reordered. References to players outside of the roster are skipped.
#[tracing::instrument(skip_all, fields(players = roster.len(), events = events.len()))]
pub fn analyze_with(
    config: &Config,
    roster: &[Participant],
    base: &[BaseRoundStats],
    events: &[Event],
) -> HashMap<String, AdvancedStats> {
    let mut context = Context::new(config, roster);

    for event in events {
        context.process(event);
    }

    context.finalize(base)
}

/// Same as [`analyze`] but in the order of the roster, every player once
pub fn analyze_ordered(
    roster: &[Participant],
    base: &[BaseRoundStats],
    events: &[Event],
) -> Vec<(String, AdvancedStats)> {
    let mut stats = analyze(roster, base, events);

    roster
        .iter()
        .filter_map(|p| stats.remove_entry(&p.username))
        .collect()
}
