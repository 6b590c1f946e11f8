use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// A point of interest as exchanged over the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Uuid,
    /// Image reference shown on cards and map popups.
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "typeicon")]
    pub type_icon: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
}

impl Location {
    pub fn counts(&self) -> VoteCounts {
        VoteCounts { likes: self.likes, dislikes: self.dislikes }
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// Both counters of a location after a vote.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteCounts {
    pub likes: u64,
    pub dislikes: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Which counter a vote increments.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Like,
    Dislike,
}

impl Vote {
    /// Path segment used by `/locations/:id/{like,dislike}`.
    pub fn as_path(self) -> &'static str {
        match self {
            Vote::Like => "like",
            Vote::Dislike => "dislike",
        }
    }

    pub fn apply(self, counts: VoteCounts) -> VoteCounts {
        match self {
            Vote::Like => VoteCounts { likes: counts.likes.saturating_add(1), ..counts },
            Vote::Dislike => VoteCounts { dislikes: counts.dislikes.saturating_add(1), ..counts },
        }
    }
}
