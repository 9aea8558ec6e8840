//! Partitioning riders into group buckets.

use std::collections::HashMap;

use crate::model::{GroupId, Rider};

/// Riders sharing one group identifier, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBucket {
    pub group: GroupId,
    pub riders: Vec<Rider>,
}

impl GroupBucket {
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}

/// Output of [`group_riders`]: grouped buckets ready for group allocation plus the
/// solo riders that bypass it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedRiders {
    /// Sorted by ascending group identifier.
    pub groups: Vec<GroupBucket>,
    /// Riders without a group, in arrival order.
    pub solo: Vec<Rider>,
}

impl GroupedRiders {
    pub fn rider_count(&self) -> usize {
        self.solo.len() + self.groups.iter().map(GroupBucket::len).sum::<usize>()
    }
}

/// Splits `riders` into per-group buckets and the solo bucket.
///
/// Buckets are collected in first-seen order and then sorted by group identifier, so
/// processing order is ascending regardless of how riders arrived. The sort is stable
/// and each bucket keeps its riders in input order.
pub fn group_riders(riders: &[Rider]) -> GroupedRiders {
    let mut grouped = GroupedRiders::default();
    let mut bucket_index: HashMap<GroupId, usize> = HashMap::new();

    for rider in riders {
        let Some(group) = rider.group else {
            grouped.solo.push(rider.clone());
            continue;
        };
        let index = *bucket_index.entry(group).or_insert_with(|| {
            grouped.groups.push(GroupBucket {
                group,
                riders: Vec::new(),
            });
            grouped.groups.len() - 1
        });
        grouped.groups[index].riders.push(rider.clone());
    }

    grouped.groups.sort_by_key(|bucket| bucket.group);
    grouped
}
