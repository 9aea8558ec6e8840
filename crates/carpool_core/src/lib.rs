//! Group-aware allocation of riders to drivers.
//!
//! Riders that share a group identifier are seated together on one driver or not at
//! all; riders travelling alone fill whatever capacity the groups left. Both phases
//! are greedy, single-pass and deterministic: the same drivers and riders in the
//! same order always produce the same rosters.
//!
//! ```
//! use carpool_core::model::{Driver, GroupId, Rider};
//! use carpool_core::allocation::allocate;
//!
//! let drivers = vec![Driver::new("A", 3).with_affinity(GroupId(7)), Driver::new("B", 3)];
//! let riders = vec![Rider::in_group("p", GroupId(7)), Rider::in_group("q", GroupId(7))];
//!
//! let result = allocate(drivers, &riders);
//! assert_eq!(result.drivers[0].assigned_riders(), ["p", "q"]);
//! assert!(result.unassigned.is_empty());
//! ```
//!
//! - [`model`]: drivers, riders and the allocation result
//! - [`grouping`]: splitting riders into group buckets
//! - [`selection`]: balancing policies for picking a driver
//! - [`allocation`]: the group and solo phases
//! - [`input`], [`report`]: reading rosters and rendering results

pub mod allocation;
pub mod config;
pub mod error;
pub mod grouping;
pub mod input;
pub mod model;
pub mod report;
pub mod selection;
pub mod summary;

pub use allocation::{allocate, AllocationContext, Allocator};
pub use config::AllocatorConfig;
pub use error::{ConfigError, InputError, RecordError, ReportError};
pub use model::{AllocationResult, Driver, GroupId, Rider, UnassignedReason, UnassignedRider};
pub use selection::SelectionPolicy;
pub use summary::AllocationSummary;
