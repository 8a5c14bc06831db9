// goal.rs — Goal: one trackable objective, rendered as a TV channel.
//
// A Goal carries the listing text shown in the program guide (title,
// description, category) plus step-counted progress toward a numeric
// target. Progress percentage is always derived from the step counts;
// there is no stored percentage to drift out of sync.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Broadcast genre for a channel listing.
///
/// Serialized as the capitalized word (`"Sitcom"`, `"News"`, ...) — the
/// same form the naming service returns and the guide displays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Sitcom,
    News,
    Drama,
    Sports,
    Documentary,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Sitcom => write!(f, "Sitcom"),
            Category::News => write!(f, "News"),
            Category::Drama => write!(f, "Drama"),
            Category::Sports => write!(f, "Sports"),
            Category::Documentary => write!(f, "Documentary"),
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sitcom" => Ok(Category::Sitcom),
            "News" => Ok(Category::News),
            "Drama" => Ok(Category::Drama),
            "Sports" => Ok(Category::Sports),
            "Documentary" => Ok(Category::Documentary),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Returned when a string is not one of the five broadcast genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// One trackable objective — a "channel" in the lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique, stable identifier. Never reused.
    pub id: String,

    /// Listing title (e.g., "Morning Jog").
    pub title: String,

    /// Guide-style synopsis shown on the channel card.
    pub description: String,

    /// Broadcast genre.
    pub category: Category,

    /// Steps completed so far. Invariant: `current_steps <= total_steps`.
    pub current_steps: u32,

    /// Target step count. Invariant: `total_steps > 0`.
    pub total_steps: u32,

    /// When this goal entered the lineup.
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with a fresh UUID identifier and zero progress.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        total_steps: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            category,
            current_steps: 0,
            total_steps: total_steps.max(1),
            created_at: Utc::now(),
        }
    }

    /// Construct a goal with a known id and progress — used for the seed
    /// lineup, where ids and step counts are fixed.
    pub fn seeded(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        current_steps: u32,
        total_steps: u32,
    ) -> Self {
        let total_steps = total_steps.max(1);
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            current_steps: current_steps.min(total_steps),
            total_steps,
            created_at: Utc::now(),
        }
    }

    /// Derived progress percentage in `[0, 100]`.
    pub fn progress(&self) -> u8 {
        ((self.current_steps as u64 * 100) / self.total_steps as u64) as u8
    }

    /// Whether the goal has reached its target.
    pub fn is_complete(&self) -> bool {
        self.current_steps >= self.total_steps
    }
}
