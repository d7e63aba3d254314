//! Conversion of the raw match feed, as emitted by the replay decoder, into
//! round [`Event`]s.

use crate::round::{Event, Phase};

/// A single match feed entry as emitted by the replay decoder
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub target: String,
    pub time_in_seconds: f64,
    #[serde(default)]
    pub headshot: Option<bool>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FeedError {
    #[error("{kind} entry at {time}s is missing the {field}")]
    MissingField {
        kind: String,
        field: &'static str,
        time: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedKind {
    Kill,
    Plant(Phase),
    Defuse(Phase),
    Pickup,
    /// Entries without any meaning for the round statistics
    Ignored,
}

static FEED_KINDS: phf::Map<&'static str, FeedKind> = phf::phf_map! {
    "Kill" => FeedKind::Kill,
    "DefuserPlantStart" => FeedKind::Plant(Phase::Start),
    "DefuserPlantComplete" => FeedKind::Plant(Phase::Complete),
    "DefuserDisableStart" => FeedKind::Defuse(Phase::Start),
    "DefuserDisableComplete" => FeedKind::Defuse(Phase::Complete),
    "DefuserPickedUp" => FeedKind::Pickup,
    "Other" => FeedKind::Ignored,
    "Death" => FeedKind::Ignored,
    "LocateObjective" => FeedKind::Ignored,
    "OperatorSwap" => FeedKind::Ignored,
    "Battleye" => FeedKind::Ignored,
    "PlayerLeave" => FeedKind::Ignored,
    "DefuserTimer" => FeedKind::Ignored,
};

impl FeedRecord {
    fn require(&self, value: &str, field: &'static str) -> Result<String, FeedError> {
        if value.is_empty() {
            return Err(FeedError::MissingField {
                kind: self.kind.clone(),
                field,
                time: self.time_in_seconds,
            });
        }

        Ok(value.to_owned())
    }

    /// Converts the record into an event, `Ok(None)` for entries that are
    /// irrelevant for the statistics or of an unknown type.
    ///
    /// A kill is kept even if one of its players is missing, the analysis
    /// skips the side it can't attribute.
    pub fn to_event(&self) -> Result<Option<Event>, FeedError> {
        let kind = match FEED_KINDS.get(self.kind.as_str()) {
            Some(k) => k,
            None => {
                tracing::warn!(kind = self.kind.as_str(), "Ignoring unknown match feed type");
                return Ok(None);
            }
        };

        let time = self.time_in_seconds;
        let event = match kind {
            FeedKind::Kill => Event::Kill {
                killer: self.username.clone(),
                victim: self.target.clone(),
                time,
                headshot: self.headshot.unwrap_or(false),
            },
            FeedKind::Plant(phase) => Event::Plant {
                username: self.require(&self.username, "username")?,
                phase: *phase,
                time,
            },
            FeedKind::Defuse(phase) => Event::Defuse {
                username: self.require(&self.username, "username")?,
                phase: *phase,
                time,
            },
            FeedKind::Pickup => Event::Pickup {
                username: self.require(&self.username, "username")?,
                time,
            },
            FeedKind::Ignored => return Ok(None),
        };

        Ok(Some(event))
    }
}

/// Converts the whole feed, failing on the first entry that can't be converted
pub fn decode(records: &[FeedRecord]) -> Result<Vec<Event>, FeedError> {
    let mut events = Vec::with_capacity(records.len());
    for record in records {
        if let Some(event) = record.to_event()? {
            events.push(event);
        }
    }

    Ok(events)
}

/// Converts the feed, skipping every entry that can't be converted
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn decode_lossy(records: &[FeedRecord]) -> Vec<Event> {
    records
        .iter()
        .filter_map(|record| match record.to_event() {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(%e, "Skipping match feed entry");
                None
            }
        })
        .collect()
}
