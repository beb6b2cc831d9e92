//! Receiving: manifests for incoming shipments and variance classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Product;

/// Classification of the received-vs-expected difference on a manifest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceType {
    Overage,
    Shortage,
    Match,
}

impl VarianceType {
    /// Classify a signed variance (`received - expected`).
    pub fn from_variance(variance: i32) -> Self {
        if variance > 0 {
            VarianceType::Overage
        } else if variance < 0 {
            VarianceType::Shortage
        } else {
            VarianceType::Match
        }
    }
}

/// Lifecycle of a receiving manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestStatus {
    Pending,
    Receiving,
    Complete,
    Discrepancy,
    Cancelled,
}

impl ManifestStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ManifestStatus::Pending => "Pending",
            ManifestStatus::Receiving => "Receiving",
            ManifestStatus::Complete => "Complete",
            ManifestStatus::Discrepancy => "Discrepancy",
            ManifestStatus::Cancelled => "Cancelled",
        }
    }
}

/// One expected line on a receiving manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub product: Product,
    pub expected_quantity: i32,
    pub received_quantity: i32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub scanned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub damage_reported: bool,
    #[serde(default)]
    pub quality_issue: bool,
}

impl ManifestItem {
    /// Signed difference between received and expected quantity.
    pub fn variance(&self) -> i32 {
        self.received_quantity - self.expected_quantity
    }

    pub fn variance_type(&self) -> VarianceType {
        VarianceType::from_variance(self.variance())
    }

    pub fn has_discrepancy(&self) -> bool {
        self.received_quantity != self.expected_quantity
    }
}

/// A receiving document listing expected items and quantities for an
/// incoming shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingManifest {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub po_number: String,
    pub vendor: String,
    pub expected_date: DateTime<Utc>,
    #[serde(default)]
    pub received_date: Option<DateTime<Utc>>,
    pub items: Vec<ManifestItem>,
    pub status: ManifestStatus,
    #[serde(default)]
    pub received_by: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ReceivingManifest {
    pub fn total_expected(&self) -> i32 {
        self.items.iter().map(|i| i.expected_quantity).sum()
    }

    pub fn total_received(&self) -> i32 {
        self.items.iter().map(|i| i.received_quantity).sum()
    }

    pub fn has_discrepancies(&self) -> bool {
        self.items.iter().any(|i| i.has_discrepancy())
    }

    pub fn discrepancy_count(&self) -> usize {
        self.items.iter().filter(|i| i.has_discrepancy()).count()
    }

    /// Fraction of expected units received, 0.0 when nothing is expected.
    pub fn completion_percentage(&self) -> f64 {
        let expected = self.total_expected();
        if expected <= 0 {
            return 0.0;
        }
        f64::from(self.total_received()) / f64::from(expected)
    }
}
