/// Derived per-player statistics for a single round.
///
/// `Default` is the state every roster entry starts from before any event of
/// the round has been looked at.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStats {
    pub entry_kill: bool,
    pub entry_death: bool,

    pub defuser_plants: usize,
    pub defuser_defuses: usize,
    pub defuser_pickups: usize,
    /// No event currently produces a denial, this is always 0
    pub plant_denials: usize,

    pub clutch_attempts: usize,
    pub clutch_wins: usize,
    #[serde(rename = "clutch1v1")]
    pub clutch_1v1: bool,
    #[serde(rename = "clutch1v2")]
    pub clutch_1v2: bool,
    #[serde(rename = "clutch1v3")]
    pub clutch_1v3: bool,
    #[serde(rename = "clutch1v4")]
    pub clutch_1v4: bool,
    #[serde(rename = "clutch1v5")]
    pub clutch_1v5: bool,

    pub double_kills: usize,
    pub triple_kills: usize,
    pub quad_kills: usize,
    pub ace: bool,

    pub trade_kills: usize,
    pub trade_deaths: usize,

    /// Not derived from the event feed, always 0
    pub survival_time: f64,
    pub survived: bool,
    pub kost: bool,
}

impl AdvancedStats {
    /// The `clutch1vN` flag for the given number of enemies, `None` outside of 1..=5
    pub fn clutch_flag(&self, enemies: usize) -> Option<bool> {
        match enemies {
            1 => Some(self.clutch_1v1),
            2 => Some(self.clutch_1v2),
            3 => Some(self.clutch_1v3),
            4 => Some(self.clutch_1v4),
            5 => Some(self.clutch_1v5),
            _ => None,
        }
    }

    pub fn set_clutch_flag(&mut self, enemies: usize) {
        match enemies {
            1 => self.clutch_1v1 = true,
            2 => self.clutch_1v2 = true,
            3 => self.clutch_1v3 = true,
            4 => self.clutch_1v4 = true,
            5 => self.clutch_1v5 = true,
            _ => {}
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClutchSummary {
    pub username: String,
    /// Indexed by `enemies - 1`, the number of rounds with the 1vN flag set
    pub situations: [usize; 5],
    /// Same indexing, rounds with the 1vN flag set that the player survived
    pub won: [usize; 5],
    pub attempts: usize,
    pub wins: usize,
    pub clutch_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefuserSummary {
    pub username: String,
    pub plants: usize,
    pub defuses: usize,
    pub plant_denials: usize,
    pub plant_success_rate: f64,
}
