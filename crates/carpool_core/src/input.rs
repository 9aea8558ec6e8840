//! Reading rosters from the line-based text format.
//!
//! Lines before the first blank line describe drivers as
//! `<name> <capacity> [affinity]`; lines after it describe riders as
//! `<name> [group]`. Any malformed line aborts the whole read, so allocation never
//! sees a partially valid roster.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{InputError, RecordError};
use crate::model::{Driver, GroupId, Rider};

/// Validated drivers and riders, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub drivers: Vec<Driver>,
    pub riders: Vec<Rider>,
}

impl Roster {
    pub fn add_driver(
        &mut self,
        name: &str,
        capacity: u32,
        affinity: Option<GroupId>,
    ) -> Result<&mut Self, RecordError> {
        let name = non_empty(name, "driver")?;
        let mut driver = Driver::new(name, capacity);
        driver.affinity = affinity;
        self.drivers.push(driver);
        Ok(self)
    }

    pub fn add_rider(&mut self, name: &str, group: Option<GroupId>) -> Result<&mut Self, RecordError> {
        let name = non_empty(name, "rider")?;
        self.riders.push(Rider {
            name: name.to_string(),
            group,
        });
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Drivers,
    Riders,
}

/// Reads and parses the roster at `path`.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Unresolvable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster(&text)
}

pub fn parse_roster(text: &str) -> Result<Roster, InputError> {
    let mut roster = Roster::default();
    let mut section = Section::Drivers;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            section = Section::Riders;
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let parsed = match section {
            Section::Drivers => parse_driver(&fields, &mut roster),
            Section::Riders => parse_rider(&fields, &mut roster),
        };
        parsed.map_err(|reason| InputError::MalformedRecord {
            line: index + 1,
            text: line.to_string(),
            reason,
        })?;
    }

    warn_duplicate_drivers(&roster.drivers);
    debug!(
        drivers = roster.drivers.len(),
        riders = roster.riders.len(),
        "roster parsed"
    );
    Ok(roster)
}

fn parse_driver(fields: &[&str], roster: &mut Roster) -> Result<(), RecordError> {
    let (name, capacity, affinity) = match fields {
        [name] => {
            return Err(RecordError::MissingCapacity {
                name: name.to_string(),
            })
        }
        [name, capacity] => (*name, *capacity, None),
        [name, capacity, affinity] => (*name, *capacity, Some(*affinity)),
        [_, _, _, extra, ..] => {
            return Err(RecordError::TrailingField {
                value: extra.to_string(),
            })
        }
        [] => return Err(RecordError::EmptyName { kind: "driver" }),
    };
    let capacity = capacity
        .parse::<u32>()
        .map_err(|_| RecordError::InvalidCapacity {
            value: capacity.to_string(),
        })?;
    let affinity = affinity.map(parse_group).transpose()?;
    roster.add_driver(name, capacity, affinity)?;
    Ok(())
}

fn parse_rider(fields: &[&str], roster: &mut Roster) -> Result<(), RecordError> {
    let (name, group) = match fields {
        [name] => (*name, None),
        [name, group] => (*name, Some(parse_group(group)?)),
        [_, _, extra, ..] => {
            return Err(RecordError::TrailingField {
                value: extra.to_string(),
            })
        }
        [] => return Err(RecordError::EmptyName { kind: "rider" }),
    };
    roster.add_rider(name, group)?;
    Ok(())
}

fn parse_group(value: &str) -> Result<GroupId, RecordError> {
    value
        .parse::<i64>()
        .map(GroupId)
        .map_err(|_| RecordError::InvalidGroup {
            value: value.to_string(),
        })
}

fn non_empty<'a>(name: &'a str, kind: &'static str) -> Result<&'a str, RecordError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RecordError::EmptyName { kind });
    }
    Ok(name)
}

fn warn_duplicate_drivers(drivers: &[Driver]) {
    let mut seen = HashSet::new();
    for driver in drivers {
        if !seen.insert(driver.name.as_str()) {
            warn!(driver = %driver.name, "duplicate driver name; rosters will be ambiguous");
        }
    }
}
