use tracing::debug;

use crate::grouping::GroupBucket;
use crate::model::{Driver, GroupId, UnassignedReason, UnassignedRider};

use super::AllocationContext;

impl AllocationContext<'_> {
    /// Seats the whole bucket on one driver, or moves every rider in it to the
    /// unassigned pool. Returns whether the bucket was placed.
    pub(super) fn place_group(&mut self, bucket: &GroupBucket) -> bool {
        let Some(seats) = u32::try_from(bucket.len()).ok().filter(|n| *n > 0) else {
            return self.reject_group(bucket);
        };

        let by_affinity = if self.respect_affinity {
            affinity_driver(&self.drivers, bucket.group, seats)
        } else {
            None
        };
        let chosen = by_affinity.or_else(|| self.selector.select(&self.drivers, seats));

        let Some(index) = chosen else {
            return self.reject_group(bucket);
        };
        let driver = &mut self.drivers[index];
        driver.board(&bucket.riders);
        debug!(
            group = %bucket.group,
            size = bucket.len(),
            driver = %driver.name,
            affinity = by_affinity.is_some(),
            remaining = driver.capacity(),
            "group placed"
        );
        true
    }

    fn reject_group(&mut self, bucket: &GroupBucket) -> bool {
        debug!(group = %bucket.group, size = bucket.len(), "group does not fit any driver");
        let reason = UnassignedReason::GroupDoesNotFit {
            group: bucket.group,
            size: bucket.len(),
        };
        self.unassigned
            .extend(bucket.riders.iter().cloned().map(|rider| UnassignedRider { rider, reason }));
        false
    }
}

/// First driver, in input order, that asked for `group` and still has `seats` free.
fn affinity_driver(drivers: &[Driver], group: GroupId, seats: u32) -> Option<usize> {
    drivers
        .iter()
        .position(|driver| driver.has_affinity_for(group) && driver.can_accommodate(seats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rider;
    use crate::selection::{BalancedSelection, FirstFitSelection};

    fn bucket(group: i64, names: &[&str]) -> GroupBucket {
        GroupBucket {
            group: GroupId(group),
            riders: names
                .iter()
                .map(|name| Rider::in_group(*name, GroupId(group)))
                .collect(),
        }
    }

    #[test]
    fn affinity_driver_skips_matches_without_room() {
        let drivers = vec![
            Driver::new("tight", 1).with_affinity(GroupId(4)),
            Driver::new("other", 5).with_affinity(GroupId(2)),
            Driver::new("roomy", 3).with_affinity(GroupId(4)),
        ];
        assert_eq!(affinity_driver(&drivers, GroupId(4), 2), Some(2));
        assert_eq!(affinity_driver(&drivers, GroupId(4), 4), None);
    }

    #[test]
    fn affinity_can_be_disabled() {
        let drivers = vec![
            Driver::new("plain", 3),
            Driver::new("shuttle", 3).with_affinity(GroupId(1)),
        ];
        let mut context =
            AllocationContext::new(drivers, &FirstFitSelection).respect_affinity(false);
        assert!(context.place_group(&bucket(1, &["p", "q"])));
        assert_eq!(context.drivers()[0].assigned_riders(), ["p", "q"]);
        assert_eq!(context.drivers()[1].rider_count(), 0);
    }

    #[test]
    fn failed_group_is_rejected_whole() {
        let drivers = vec![Driver::new("A", 2), Driver::new("B", 2)];
        let mut context = AllocationContext::new(drivers, &BalancedSelection);

        assert!(!context.place_group(&bucket(3, &["a", "b", "c"])));

        assert!(context.drivers().iter().all(|d| d.rider_count() == 0));
        let reasons: Vec<_> = context.unassigned().iter().map(|u| u.reason).collect();
        assert_eq!(
            reasons,
            vec![
                UnassignedReason::GroupDoesNotFit {
                    group: GroupId(3),
                    size: 3
                };
                3
            ]
        );
    }
}
