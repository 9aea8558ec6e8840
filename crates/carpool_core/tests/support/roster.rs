#![allow(dead_code)]

use std::collections::HashMap;

use carpool_core::model::{AllocationResult, Driver, GroupId, Rider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builder for small hand-written rosters.
#[derive(Debug, Default, Clone)]
pub struct TestRosterBuilder {
    drivers: Vec<Driver>,
    riders: Vec<Rider>,
}

impl TestRosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn driver(mut self, name: &str, capacity: u32) -> Self {
        self.drivers.push(Driver::new(name, capacity));
        self
    }

    pub fn shuttle(mut self, name: &str, capacity: u32, group: i64) -> Self {
        self.drivers
            .push(Driver::new(name, capacity).with_affinity(GroupId(group)));
        self
    }

    pub fn solo(mut self, names: &[&str]) -> Self {
        self.riders.extend(names.iter().map(|name| Rider::solo(*name)));
        self
    }

    pub fn group(mut self, group: i64, names: &[&str]) -> Self {
        self.riders
            .extend(names.iter().map(|name| Rider::in_group(*name, GroupId(group))));
        self
    }

    pub fn build(self) -> (Vec<Driver>, Vec<Rider>) {
        (self.drivers, self.riders)
    }
}

/// Parameters for randomly generated rosters.
#[derive(Debug, Clone, Copy)]
pub struct RandomRosterConfig {
    pub seed: u64,
    pub max_drivers: usize,
    pub max_capacity: u32,
    pub max_riders: usize,
    pub group_count: i64,
}

impl Default for RandomRosterConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_drivers: 8,
            max_capacity: 6,
            max_riders: 40,
            group_count: 6,
        }
    }
}

/// Generates a reproducible roster: zero-seat drivers, affinities and oversized
/// groups all show up across seeds.
pub fn random_roster(config: RandomRosterConfig) -> (Vec<Driver>, Vec<Rider>) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let driver_count = rng.gen_range(0..=config.max_drivers);
    let drivers = (0..driver_count)
        .map(|index| {
            let driver = Driver::new(
                format!("driver-{index}"),
                rng.gen_range(0..=config.max_capacity),
            );
            if rng.gen_bool(0.3) {
                driver.with_affinity(GroupId(rng.gen_range(0..config.group_count)))
            } else {
                driver
            }
        })
        .collect();

    let rider_count = rng.gen_range(0..=config.max_riders);
    let riders = (0..rider_count)
        .map(|index| {
            let name = format!("rider-{index}");
            if rng.gen_bool(0.6) {
                Rider::in_group(name, GroupId(rng.gen_range(0..config.group_count)))
            } else {
                Rider::solo(name)
            }
        })
        .collect();

    (drivers, riders)
}

/// Maps every placed rider name to the driver holding it.
pub fn placements(result: &AllocationResult) -> HashMap<&str, &str> {
    result
        .drivers
        .iter()
        .flat_map(|driver| {
            driver
                .assigned_riders()
                .iter()
                .map(move |rider| (rider.as_str(), driver.name.as_str()))
        })
        .collect()
}
