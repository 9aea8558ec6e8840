//! Two-phase allocation: whole groups first, then solo riders.

mod group;
mod solo;

use tracing::info;

use crate::config::AllocatorConfig;
use crate::grouping::{group_riders, GroupBucket};
use crate::model::{AllocationResult, Driver, Rider, UnassignedRider};
use crate::selection::DriverSelector;

/// Mutable state threaded through both allocation phases.
///
/// The context owns the driver pool for the duration of a run; nothing else can
/// touch capacities or rosters until [`AllocationContext::finish`] hands them back.
pub struct AllocationContext<'a> {
    drivers: Vec<Driver>,
    unassigned: Vec<UnassignedRider>,
    selector: &'a dyn DriverSelector,
    respect_affinity: bool,
}

impl<'a> AllocationContext<'a> {
    pub fn new(drivers: Vec<Driver>, selector: &'a dyn DriverSelector) -> Self {
        Self {
            drivers,
            unassigned: Vec::new(),
            selector,
            respect_affinity: true,
        }
    }

    pub fn respect_affinity(mut self, enabled: bool) -> Self {
        self.respect_affinity = enabled;
        self
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn unassigned(&self) -> &[UnassignedRider] {
        &self.unassigned
    }

    /// Runs the group phase over every bucket, in the order given.
    pub fn allocate_groups(&mut self, buckets: &[GroupBucket]) {
        let mut placed = 0usize;
        for bucket in buckets {
            if self.place_group(bucket) {
                placed += 1;
            }
        }
        info!(
            groups = buckets.len(),
            placed,
            unplaced = buckets.len() - placed,
            "group phase finished"
        );
    }

    /// Runs the solo phase over `riders` in arrival order.
    pub fn allocate_solo(&mut self, riders: &[Rider]) {
        let before = self.unassigned.len();
        for rider in riders {
            self.place_solo(rider);
        }
        let unplaced = self.unassigned.len() - before;
        info!(
            riders = riders.len(),
            placed = riders.len() - unplaced,
            unplaced,
            "solo phase finished"
        );
    }

    pub fn finish(self) -> AllocationResult {
        AllocationResult {
            drivers: self.drivers,
            unassigned: self.unassigned,
        }
    }
}

/// Owns a selection policy and runs complete allocations with it.
pub struct Allocator {
    config: AllocatorConfig,
    selector: Box<dyn DriverSelector>,
}

impl Allocator {
    pub fn new(config: AllocatorConfig) -> Self {
        Self {
            selector: config.policy.selector(),
            config,
        }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Groups `riders`, places every group bucket, then places solo riders.
    ///
    /// Groups run to completion before any solo rider is seated: they are the harder
    /// constraint, and solo riders only get the capacity groups left behind.
    pub fn run(&self, drivers: Vec<Driver>, riders: &[Rider]) -> AllocationResult {
        info!(
            drivers = drivers.len(),
            riders = riders.len(),
            policy = %self.config.policy,
            "allocation started"
        );
        let grouped = group_riders(riders);
        let mut context = AllocationContext::new(drivers, self.selector.as_ref())
            .respect_affinity(self.config.respect_affinity);
        context.allocate_groups(&grouped.groups);
        context.allocate_solo(&grouped.solo);
        context.finish()
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new(AllocatorConfig::default())
    }
}

/// Allocates with the default configuration.
pub fn allocate(drivers: Vec<Driver>, riders: &[Rider]) -> AllocationResult {
    Allocator::default().run(drivers, riders)
}
