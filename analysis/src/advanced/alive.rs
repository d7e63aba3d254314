use std::collections::{HashMap, HashSet};

use crate::round::Participant;

/// The players of each team that are still alive at the current point of the round
#[derive(Debug)]
pub struct AliveTracker {
    teams: HashMap<String, u8>,
    alive: HashMap<u8, HashSet<String>>,
}

/// A lone surviving player facing `enemies` living opponents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clutch {
    pub enemies: usize,
}

impl AliveTracker {
    pub fn new(roster: &[Participant]) -> Self {
        let mut teams = HashMap::with_capacity(roster.len());
        let mut alive: HashMap<u8, HashSet<String>> = HashMap::new();

        for participant in roster {
            teams
                .entry(participant.username.clone())
                .or_insert(participant.team);
            alive
                .entry(participant.team)
                .or_default()
                .insert(participant.username.clone());
        }

        Self { teams, alive }
    }

    pub fn team_of(&self, username: &str) -> Option<u8> {
        self.teams.get(username).copied()
    }

    pub fn alive(&self, team: u8) -> usize {
        self.alive.get(&team).map(|players| players.len()).unwrap_or(0)
    }

    /// Marks the player as dead, returns false if they were not alive to begin with
    pub fn remove(&mut self, username: &str) -> bool {
        self.alive
            .values_mut()
            .fold(false, |removed, players| players.remove(username) || removed)
    }

    /// Checks whether `player` is the last one standing on their team while
    /// at least one opponent is still alive.
    pub fn clutch(&self, player: &str) -> Option<Clutch> {
        let team = self.team_of(player)?;
        if self.alive(team) != 1 {
            return None;
        }

        let enemies = match 1u8.checked_sub(team) {
            Some(enemy_team) => self.alive(enemy_team),
            None => 0,
        };
        if enemies == 0 {
            return None;
        }

        Some(Clutch { enemies })
    }
}
