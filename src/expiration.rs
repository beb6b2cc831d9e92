//! Expiration management: freshness classification for scanned shelf items.
//!
//! The status thresholds and the status-to-action mapping are fixed store
//! policy: anything under 3 days (or already expired) comes off the shelf,
//! 3-7 days gets a markdown, 8-14 days gets front-faced, beyond that nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Product;

/// Freshness classification derived from days remaining until expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationStatus {
    /// Under 3 days remaining, or already expired.
    Critical,
    /// 3 to 7 days remaining.
    Warning,
    /// 8 to 14 days remaining.
    Monitor,
    /// More than 14 days remaining.
    Ok,
}

impl ExpirationStatus {
    /// Classify by days remaining.
    pub fn from_days_remaining(days: i64) -> Self {
        match days {
            d if d < 3 => ExpirationStatus::Critical,
            3..=7 => ExpirationStatus::Warning,
            8..=14 => ExpirationStatus::Monitor,
            _ => ExpirationStatus::Ok,
        }
    }

    /// The recommended shelf action is a pure function of the status.
    pub fn recommended_action(&self) -> RecommendedAction {
        match self {
            ExpirationStatus::Critical => RecommendedAction::Remove,
            ExpirationStatus::Warning => RecommendedAction::Markdown,
            ExpirationStatus::Monitor => RecommendedAction::FrontFace,
            ExpirationStatus::Ok => RecommendedAction::None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExpirationStatus::Critical => "Critical",
            ExpirationStatus::Warning => "Warning",
            ExpirationStatus::Monitor => "Monitor",
            ExpirationStatus::Ok => "OK",
        }
    }
}

/// What the associate should do with a shelf item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    Remove,
    Markdown,
    FrontFace,
    None,
}

impl RecommendedAction {
    pub fn display_name(&self) -> &'static str {
        match self {
            RecommendedAction::Remove => "Remove from shelf",
            RecommendedAction::Markdown => "Apply markdown",
            RecommendedAction::FrontFace => "Front face",
            RecommendedAction::None => "No action needed",
        }
    }
}

/// A scanned shelf item being tracked for expiration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirationItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub product: Product,
    pub expiration_date: DateTime<Utc>,
    pub scanned_date: DateTime<Utc>,
    pub status: ExpirationStatus,
    #[serde(default)]
    pub action: Option<RecommendedAction>,
    pub quantity: i32,
    pub location: String,
    #[serde(default)]
    pub handled_by: Option<String>,
    #[serde(default)]
    pub handled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ExpirationItem {
    /// Whole calendar days from `now` to the expiration date. Negative once
    /// the item has expired.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.expiration_date.date_naive() - now.date_naive()).num_days()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.days_remaining(now) < 0
    }

    /// Display string for the days-remaining figure.
    pub fn display_days_remaining(&self, now: DateTime<Utc>) -> String {
        let days = self.days_remaining(now);
        if days < 0 {
            format!("Expired {} day(s) ago", days.abs())
        } else if days == 0 {
            "Expires today".to_string()
        } else if days == 1 {
            "Expires tomorrow".to_string()
        } else {
            format!("{} days remaining", days)
        }
    }
}
