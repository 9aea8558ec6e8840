use tracing::debug;

use crate::model::{Rider, UnassignedReason, UnassignedRider};

use super::AllocationContext;

impl AllocationContext<'_> {
    pub(super) fn place_solo(&mut self, rider: &Rider) {
        match self.selector.select(&self.drivers, 1) {
            Some(index) => {
                let driver = &mut self.drivers[index];
                driver.board(std::iter::once(rider));
                debug!(rider = %rider.name, driver = %driver.name, "solo rider placed");
            }
            None => {
                debug!(rider = %rider.name, "no seats left for solo rider");
                self.unassigned.push(UnassignedRider {
                    rider: rider.clone(),
                    reason: UnassignedReason::NoSeatsLeft,
                });
            }
        }
    }
}
