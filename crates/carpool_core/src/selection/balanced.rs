use crate::model::Driver;

use super::algorithm::{candidates, DriverSelector};

/// Rider-count-first balancing.
///
/// Among drivers with room, picks the one carrying the fewest riders. Equal counts
/// are broken by the lower fill ratio, and a full tie keeps the earliest driver in
/// input order. This spreads riders across vehicles first and only then evens out
/// how full each vehicle is relative to its size.
#[derive(Debug, Default, Clone, Copy)]
pub struct BalancedSelection;

impl DriverSelector for BalancedSelection {
    fn select(&self, drivers: &[Driver], seats: u32) -> Option<usize> {
        candidates(drivers, seats)
            .min_by(|(_, a), (_, b)| {
                a.rider_count()
                    .cmp(&b.rider_count())
                    .then_with(|| a.cmp_fill_ratio(b))
            })
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rider;

    fn loaded(name: &str, capacity: u32, riders: usize) -> Driver {
        let mut driver = Driver::new(name, capacity);
        let party: Vec<Rider> = (0..riders).map(|i| Rider::solo(format!("{name}{i}"))).collect();
        driver.board(&party);
        driver
    }

    #[test]
    fn prefers_fewer_riders_over_lower_fill() {
        // big: 2/10 = 0.2 full, small: 1/2 = 0.5 full
        let drivers = vec![loaded("big", 10, 2), loaded("small", 2, 1)];
        assert_eq!(BalancedSelection.select(&drivers, 1), Some(1));
    }

    #[test]
    fn equal_counts_fall_back_to_fill_ratio() {
        let drivers = vec![loaded("small", 2, 1), loaded("big", 4, 1)];
        assert_eq!(BalancedSelection.select(&drivers, 1), Some(1));
    }

    #[test]
    fn full_tie_keeps_first_driver() {
        let drivers = vec![loaded("a", 3, 0), loaded("b", 3, 0), loaded("c", 3, 0)];
        assert_eq!(BalancedSelection.select(&drivers, 2), Some(0));
    }

    #[test]
    fn skips_drivers_without_room() {
        let drivers = vec![loaded("a", 1, 0), loaded("b", 0, 0), loaded("c", 3, 2)];
        assert_eq!(BalancedSelection.select(&drivers, 1), Some(0));
        assert_eq!(BalancedSelection.select(&drivers, 2), None);
    }
}
