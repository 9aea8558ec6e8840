use crate::model::Driver;

use super::algorithm::{candidates, DriverSelector};

/// First driver in input order with enough free seats. No balancing at all; useful as
/// a baseline when comparing the balancing policies.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFitSelection;

impl DriverSelector for FirstFitSelection {
    fn select(&self, drivers: &[Driver], seats: u32) -> Option<usize> {
        candidates(drivers, seats).next().map(|(index, _)| index)
    }
}
