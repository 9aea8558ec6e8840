use crate::model::Driver;

/// Picks which driver receives a party of riders once the affinity pass has failed.
pub trait DriverSelector: Send + Sync {
    /// Returns the index into `drivers` of the chosen driver, or `None` if no driver
    /// has at least `seats` free seats. Implementations must be deterministic for a
    /// given driver slice so that allocation runs are reproducible.
    fn select(&self, drivers: &[Driver], seats: u32) -> Option<usize>;
}

/// Drivers with at least `seats` free seats, paired with their position.
pub(crate) fn candidates(
    drivers: &[Driver],
    seats: u32,
) -> impl Iterator<Item = (usize, &Driver)> {
    drivers
        .iter()
        .enumerate()
        .filter(move |(_, driver)| driver.can_accommodate(seats))
}
