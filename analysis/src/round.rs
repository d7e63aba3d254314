#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub username: String,
    #[serde(rename = "teamIndex")]
    pub team: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Start,
    Complete,
}

/// A single entry of the round's match feed.
///
/// `time` is the number of seconds since the start of the round. A round's
/// events are expected in the order they were recorded, which is also
/// non-decreasing in `time`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Event {
    Kill {
        killer: String,
        victim: String,
        time: f64,
        headshot: bool,
    },
    Plant {
        username: String,
        phase: Phase,
        time: f64,
    },
    Defuse {
        username: String,
        phase: Phase,
        time: f64,
    },
    Pickup {
        username: String,
        time: f64,
    },
}

impl Event {
    pub fn time(&self) -> f64 {
        match self {
            Self::Kill { time, .. }
            | Self::Plant { time, .. }
            | Self::Defuse { time, .. }
            | Self::Pickup { time, .. } => *time,
        }
    }
}

/// Per player numbers as reported by the replay itself
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRoundStats {
    pub username: String,
    pub kills: usize,
    pub died: bool,
    pub assists: usize,
    pub headshots: usize,
    pub headshot_percentage: f64,
}

/// Everything needed to analyse one round
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundInput {
    pub roster: Vec<Participant>,
    pub base: Vec<BaseRoundStats>,
    pub events: Vec<Event>,
}
