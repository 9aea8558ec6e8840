//! Allocates a small built-in roster and prints the text report.
//!
//! Run with `cargo run -p carpool_core --example allocate_roster`.

use carpool_core::input::parse_roster;
use carpool_core::report::render_text;
use carpool_core::{Allocator, AllocatorConfig};

const ROSTER: &str = "\
Shuttle 6 10
Sedan 4
Coupe 2
Scooter 0

ana 10
ben 10
cai 10
dov 3
eli 3
fay
gus
hal 4
ivy 4
jon 4
kim 4
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let roster = parse_roster(ROSTER)?;
    let result = Allocator::new(AllocatorConfig::default()).run(roster.drivers, &roster.riders);
    print!("{}", render_text(&result)?);
    Ok(())
}
