//! Driver selection policies used once the affinity pass has not claimed a party.

pub mod algorithm;
pub mod balanced;
pub mod fill_ratio;
pub mod first_fit;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use algorithm::DriverSelector;
pub use balanced::BalancedSelection;
pub use fill_ratio::FillRatioSelection;
pub use first_fit::FirstFitSelection;

/// Which [`DriverSelector`] an allocation run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Fewest riders first, fill ratio as tie-break.
    #[default]
    Balanced,
    /// Lowest fill ratio first, rider count as tie-break.
    FillRatio,
    /// First driver with room.
    FirstFit,
}

impl SelectionPolicy {
    pub fn selector(self) -> Box<dyn DriverSelector> {
        match self {
            SelectionPolicy::Balanced => Box::new(BalancedSelection),
            SelectionPolicy::FillRatio => Box::new(FillRatioSelection),
            SelectionPolicy::FirstFit => Box::new(FirstFitSelection),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectionPolicy::Balanced => "balanced",
            SelectionPolicy::FillRatio => "fill_ratio",
            SelectionPolicy::FirstFit => "first_fit",
        };
        f.write_str(label)
    }
}
