//! Order fulfillment: pick-list items tracked by scanned-vs-ordered quantity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Product;
use crate::types::Priority;

/// Progress of a pick-list line.
///
/// `Pending`, `Partial`, and `Complete` are derived from the scanned count;
/// `Skipped` is set explicitly by the associate and is never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickStatus {
    Pending,
    Partial,
    Complete,
    Skipped,
}

impl PickStatus {
    /// Derive the status from scanned vs ordered quantity.
    pub fn from_progress(scanned: i32, ordered: i32) -> Self {
        if scanned >= ordered {
            PickStatus::Complete
        } else if scanned > 0 {
            PickStatus::Partial
        } else {
            PickStatus::Pending
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PickStatus::Pending => "Pending",
            PickStatus::Partial => "Partial",
            PickStatus::Complete => "Complete",
            PickStatus::Skipped => "Skipped",
        }
    }
}

/// A line item on a pick list: quantity of a product to gather for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickListItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub product: Product,
    pub quantity: i32,
    #[serde(default)]
    pub scanned_quantity: i32,
    pub status: PickStatus,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub last_scanned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PickListItem {
    pub fn is_complete(&self) -> bool {
        self.scanned_quantity >= self.quantity
    }

    pub fn remaining_quantity(&self) -> i32 {
        (self.quantity - self.scanned_quantity).max(0)
    }

    /// Fraction picked, capped at 1.0; 0.0 for zero-quantity lines.
    pub fn completion_percentage(&self) -> f64 {
        if self.quantity <= 0 {
            return 0.0;
        }
        (f64::from(self.scanned_quantity) / f64::from(self.quantity)).min(1.0)
    }

    /// Record a scan: bump the count, stamp the scan time, and re-derive the
    /// status. Scanning a skipped line puts it back into the derived
    /// lifecycle.
    pub fn increment_scanned(&mut self, amount: i32, now: DateTime<Utc>) {
        self.scanned_quantity += amount;
        self.last_scanned_at = Some(now);
        self.status = PickStatus::from_progress(self.scanned_quantity, self.quantity);
    }

    /// Explicitly skip this line. Only ever set by the associate, never
    /// derived from quantities.
    pub fn mark_skipped(&mut self) {
        self.status = PickStatus::Skipped;
    }
}
