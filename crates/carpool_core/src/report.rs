//! Rendering allocation results for people and for other tools.

use std::io::Write;

use serde::Serialize;

use crate::error::ReportError;
use crate::model::{AllocationResult, Driver, GroupId, UnassignedRider};
use crate::summary::AllocationSummary;

/// Label used for the pseudo-driver that lists unplaced riders in text output.
pub const UNASSIGNED_LABEL: &str = "NULL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable rosters followed by a summary block.
    #[default]
    Text,
    /// One JSON document with rosters, unassigned riders and the summary.
    Json,
    /// One row per rider, placed or not, with the rider's group id.
    Csv,
}

#[derive(Debug, Serialize)]
struct DriverRoster<'a> {
    name: &'a str,
    initial_capacity: u32,
    capacity: u32,
    fill_ratio: f64,
    riders: &'a [String],
}

impl<'a> From<&'a Driver> for DriverRoster<'a> {
    fn from(driver: &'a Driver) -> Self {
        Self {
            name: &driver.name,
            initial_capacity: driver.initial_capacity,
            capacity: driver.capacity(),
            fill_ratio: driver.fill_ratio(),
            riders: driver.assigned_riders(),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    drivers: Vec<DriverRoster<'a>>,
    unassigned: &'a [UnassignedRider],
    summary: AllocationSummary,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    driver: &'a str,
    rider: &'a str,
    group: Option<GroupId>,
    status: &'static str,
    reason: String,
}

/// Writes `result` to `writer` in the requested format.
pub fn write_report<W: Write>(
    result: &AllocationResult,
    format: ReportFormat,
    writer: W,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => write_text(result, writer),
        ReportFormat::Json => write_json(result, writer),
        ReportFormat::Csv => write_csv(result, writer),
    }
}

/// Renders `result` as text into a `String`.
pub fn render_text(result: &AllocationResult) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_text(result, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_text<W: Write>(result: &AllocationResult, mut out: W) -> Result<(), ReportError> {
    for driver in &result.drivers {
        writeln!(out, "{}:", driver.name)?;
        if driver.assigned_riders().is_empty() {
            writeln!(out, "  No Riders Assigned")?;
        }
        for rider in driver.assigned_riders() {
            writeln!(out, "  {rider}")?;
        }
        writeln!(out)?;
    }

    if !result.unassigned.is_empty() {
        writeln!(out, "{UNASSIGNED_LABEL}:")?;
        for entry in &result.unassigned {
            writeln!(out, "  {}", entry.rider.name)?;
        }
        writeln!(out)?;
    }

    let summary = AllocationSummary::from_result(result);
    writeln!(out, "Summary:")?;
    writeln!(out, "  Total Capacity Used: {}", summary.capacity_used)?;
    writeln!(out, "  Total Empty Seats Remaining: {}", summary.empty_seats)?;
    writeln!(out, "  Total Riders Unassigned: {}", summary.unassigned_riders)?;
    out.flush()?;
    Ok(())
}

fn write_json<W: Write>(result: &AllocationResult, mut out: W) -> Result<(), ReportError> {
    let report = JsonReport {
        drivers: result.drivers.iter().map(DriverRoster::from).collect(),
        unassigned: &result.unassigned,
        summary: AllocationSummary::from_result(result),
    };
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn write_csv<W: Write>(result: &AllocationResult, out: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    for driver in &result.drivers {
        for (rider, group) in driver.assignments() {
            writer.serialize(CsvRow {
                driver: &driver.name,
                rider,
                group,
                status: "assigned",
                reason: String::new(),
            })?;
        }
    }
    for entry in &result.unassigned {
        writer.serialize(CsvRow {
            driver: "",
            rider: &entry.rider.name,
            group: entry.rider.group,
            status: "unassigned",
            reason: entry.reason.to_string(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
