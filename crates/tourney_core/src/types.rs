use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable participant identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    /// Fresh random id for a new enrollment.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id, handy for fixtures and imports.
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An enrolled competitor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub first_name: String,
    pub last_name: String,
}

impl Participant {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self::with_id(ParticipantId::new(), first_name, last_name)
    }

    pub fn with_id(id: ParticipantId, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (true, _) => self.last_name.clone(),
            (_, true) => self.first_name.clone(),
        }
    }
}

/// How a match is scored and how many participants it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Two participants (or one on a bye), result is wins/wins/draws
    HeadToHead,
    /// Three or four participants, each receives a placement code
    PlacementGroup,
}

impl ScoringMode {
    pub fn group_bounds(self) -> GroupBounds {
        match self {
            ScoringMode::HeadToHead => GroupBounds::new(1, 2),
            ScoringMode::PlacementGroup => GroupBounds::new(3, 4),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::HeadToHead => write!(f, "Head-to-head"),
            ScoringMode::PlacementGroup => write!(f, "Placement group"),
        }
    }
}

/// Pairing discipline used to build groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingSystem {
    /// Straight input order, rematches allowed
    None,
    /// Similar standing, avoids rematches
    Swiss,
    /// Similar standing, rematches allowed
    Danish,
}

impl PairingSystem {
    pub fn avoids_rematches(self) -> bool {
        matches!(self, PairingSystem::Swiss)
    }
}

impl fmt::Display for PairingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingSystem::None => write!(f, "None"),
            PairingSystem::Swiss => write!(f, "Swiss"),
            PairingSystem::Danish => write!(f, "Danish"),
        }
    }
}

/// How many match losses knock a participant out of the segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EliminationStyle {
    None,
    Single,
    Double,
}

impl EliminationStyle {
    /// Loss count at which a participant is dropped (None = never)
    pub fn loss_threshold(self) -> Option<u32> {
        match self {
            EliminationStyle::None => None,
            EliminationStyle::Single => Some(1),
            EliminationStyle::Double => Some(2),
        }
    }

    pub fn is_eliminating(self) -> bool {
        self.loss_threshold().is_some()
    }
}

impl fmt::Display for EliminationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EliminationStyle::None => write!(f, "None"),
            EliminationStyle::Single => write!(f, "Single"),
            EliminationStyle::Double => write!(f, "Double"),
        }
    }
}

/// Inclusive size limits for a single pairing group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupBounds {
    pub min: usize,
    pub max: usize,
}

impl GroupBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}
