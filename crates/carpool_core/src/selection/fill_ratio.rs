use crate::model::Driver;

use super::algorithm::{candidates, DriverSelector};

/// Fill-ratio-first balancing: the emptiest vehicle relative to its size wins, rider
/// count only breaks exact ratio ties, and the earliest driver wins a full tie.
#[derive(Debug, Default, Clone, Copy)]
pub struct FillRatioSelection;

impl DriverSelector for FillRatioSelection {
    fn select(&self, drivers: &[Driver], seats: u32) -> Option<usize> {
        candidates(drivers, seats)
            .min_by(|(_, a), (_, b)| {
                a.cmp_fill_ratio(b)
                    .then_with(|| a.rider_count().cmp(&b.rider_count()))
            })
            .map(|(index, _)| index)
    }
}
