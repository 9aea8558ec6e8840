use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier shared by riders that must travel in the same vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A passenger waiting to be placed. `group` is `None` for riders travelling alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rider {
    pub name: String,
    pub group: Option<GroupId>,
}

impl Rider {
    pub fn solo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
        }
    }

    pub fn in_group(name: impl Into<String>, group: GroupId) -> Self {
        Self {
            name: name.into(),
            group: Some(group),
        }
    }
}

/// A vehicle with a fixed number of seats.
///
/// Remaining capacity and the roster only change through [`Driver::board`], which keeps
/// `assigned_riders().len() == initial_capacity - capacity()` true at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Driver {
    pub name: String,
    pub initial_capacity: u32,
    /// Group this driver should receive before any balancing is considered.
    pub affinity: Option<GroupId>,
    capacity: u32,
    assigned_riders: Vec<String>,
    #[serde(skip)]
    assigned_groups: Vec<Option<GroupId>>,
}

impl Driver {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            initial_capacity: capacity,
            affinity: None,
            capacity,
            assigned_riders: Vec::new(),
            assigned_groups: Vec::new(),
        }
    }

    pub fn with_affinity(mut self, group: GroupId) -> Self {
        self.affinity = Some(group);
        self
    }

    /// Remaining free seats.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Rider names in the order they were boarded.
    pub fn assigned_riders(&self) -> &[String] {
        &self.assigned_riders
    }

    /// Boarded riders with the group each travelled in, in boarding order.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, Option<GroupId>)> {
        self.assigned_riders
            .iter()
            .map(String::as_str)
            .zip(self.assigned_groups.iter().copied())
    }

    pub fn rider_count(&self) -> usize {
        self.assigned_riders.len()
    }

    pub fn seats_used(&self) -> u32 {
        self.initial_capacity - self.capacity
    }

    pub fn can_accommodate(&self, seats: u32) -> bool {
        self.capacity >= seats
    }

    pub fn has_affinity_for(&self, group: GroupId) -> bool {
        self.affinity == Some(group)
    }

    /// Occupied fraction of the original capacity, in `[0, 1]`. Zero-seat drivers report 0.
    pub fn fill_ratio(&self) -> f64 {
        if self.initial_capacity == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.capacity) / f64::from(self.initial_capacity)
    }

    /// Compares fill ratios exactly by cross-multiplying `used / initial` fractions.
    pub fn cmp_fill_ratio(&self, other: &Driver) -> Ordering {
        let (used_a, total_a) = self.fill_fraction();
        let (used_b, total_b) = other.fill_fraction();
        (used_a * total_b).cmp(&(used_b * total_a))
    }

    fn fill_fraction(&self) -> (u64, u64) {
        if self.initial_capacity == 0 {
            (0, 1)
        } else {
            (
                u64::from(self.seats_used()),
                u64::from(self.initial_capacity),
            )
        }
    }

    /// Seats every rider in `riders` at once. Callers check `can_accommodate` first.
    pub(crate) fn board<'a>(&mut self, riders: impl IntoIterator<Item = &'a Rider>) {
        for rider in riders {
            debug_assert!(self.capacity > 0, "boarding past capacity on {}", self.name);
            self.assigned_riders.push(rider.name.clone());
            self.assigned_groups.push(rider.group);
            self.capacity -= 1;
        }
    }
}

/// Why a rider ended up without a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnassignedReason {
    /// No single driver had room for the whole group.
    GroupDoesNotFit { group: GroupId, size: usize },
    /// Every driver was already full.
    NoSeatsLeft,
}

impl fmt::Display for UnassignedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnassignedReason::GroupDoesNotFit { group, size } => {
                write!(f, "group {group} of {size} does not fit any driver")
            }
            UnassignedReason::NoSeatsLeft => write!(f, "no seats left"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnassignedRider {
    pub rider: Rider,
    pub reason: UnassignedReason,
}

/// Final state of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationResult {
    pub drivers: Vec<Driver>,
    pub unassigned: Vec<UnassignedRider>,
}

impl AllocationResult {
    pub fn assigned_count(&self) -> usize {
        self.drivers.iter().map(Driver::rider_count).sum()
    }

    /// Driver holding the named rider, if the rider was placed.
    pub fn driver_of(&self, rider_name: &str) -> Option<&Driver> {
        self.drivers
            .iter()
            .find(|driver| driver.assigned_riders.iter().any(|name| name == rider_name))
    }

    pub fn is_unassigned(&self, rider_name: &str) -> bool {
        self.unassigned
            .iter()
            .any(|entry| entry.rider.name == rider_name)
    }
}
