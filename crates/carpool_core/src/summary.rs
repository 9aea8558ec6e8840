use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{AllocationResult, GroupId, UnassignedReason};

/// Aggregated counters for one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocationSummary {
    pub total_drivers: usize,
    pub total_riders: usize,
    pub assigned_riders: usize,
    /// Seats taken, counted only over drivers that received at least one rider.
    pub capacity_used: u64,
    /// Remaining seats over every driver, including those left empty.
    pub empty_seats: u64,
    pub unassigned_riders: usize,
    /// Distinct groups seated together on some driver.
    pub placed_groups: usize,
    /// Groups that could not be seated together.
    pub unplaced_groups: usize,
}

impl AllocationSummary {
    pub fn from_result(result: &AllocationResult) -> Self {
        let capacity_used = result
            .drivers
            .iter()
            .filter(|driver| driver.rider_count() > 0)
            .map(|driver| u64::from(driver.seats_used()))
            .sum();
        let empty_seats = result
            .drivers
            .iter()
            .map(|driver| u64::from(driver.capacity()))
            .sum();
        let placed_groups = result
            .drivers
            .iter()
            .flat_map(|driver| driver.assignments().filter_map(|(_, group)| group))
            .collect::<BTreeSet<GroupId>>()
            .len();
        let unplaced_groups = result
            .unassigned
            .iter()
            .filter_map(|entry| match entry.reason {
                UnassignedReason::GroupDoesNotFit { group, .. } => Some(group),
                UnassignedReason::NoSeatsLeft => None,
            })
            .collect::<BTreeSet<GroupId>>()
            .len();
        let assigned_riders = result.assigned_count();

        Self {
            total_drivers: result.drivers.len(),
            total_riders: assigned_riders + result.unassigned.len(),
            assigned_riders,
            capacity_used,
            empty_seats,
            unassigned_riders: result.unassigned.len(),
            placed_groups,
            unplaced_groups,
        }
    }
}
