use std::io::Write;

use carpool_core::input::{load_roster, parse_roster};
use carpool_core::model::{Driver, GroupId, Rider};
use carpool_core::{InputError, RecordError};
use tempfile::NamedTempFile;

const ROSTER: &str = "\
Alice 4
Bob 3 7
Carol 0

dave
erin 7
frank 7
grace -1
";

#[test]
fn parses_drivers_then_riders() {
    let roster = parse_roster(ROSTER).unwrap();

    assert_eq!(
        roster.drivers,
        vec![
            Driver::new("Alice", 4),
            Driver::new("Bob", 3).with_affinity(GroupId(7)),
            Driver::new("Carol", 0),
        ]
    );
    assert_eq!(
        roster.riders,
        vec![
            Rider::solo("dave"),
            Rider::in_group("erin", GroupId(7)),
            Rider::in_group("frank", GroupId(7)),
            Rider::in_group("grace", GroupId(-1)),
        ]
    );
}

#[test]
fn extra_blank_lines_and_crlf_are_tolerated() {
    let roster = parse_roster("A 2\r\n\r\n\r\nx\r\n\r\ny 3\r\n").unwrap();
    assert_eq!(roster.drivers.len(), 1);
    assert_eq!(roster.riders, vec![Rider::solo("x"), Rider::in_group("y", GroupId(3))]);
}

#[test]
fn drivers_only_and_empty_inputs_are_valid() {
    let roster = parse_roster("A 2\nB 1\n").unwrap();
    assert_eq!(roster.drivers.len(), 2);
    assert!(roster.riders.is_empty());

    let roster = parse_roster("").unwrap();
    assert!(roster.drivers.is_empty());
    assert!(roster.riders.is_empty());

    let roster = parse_roster("\nx\ny\n").unwrap();
    assert!(roster.drivers.is_empty());
    assert_eq!(roster.riders.len(), 2);
}

fn malformed(text: &str) -> (usize, RecordError) {
    match parse_roster(text) {
        Err(InputError::MalformedRecord { line, reason, .. }) => (line, reason),
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn driver_without_capacity_is_fatal() {
    assert_eq!(
        malformed("A 2\nB\n\nx\n"),
        (
            2,
            RecordError::MissingCapacity {
                name: "B".to_string()
            }
        )
    );
}

#[test]
fn bad_numbers_are_fatal() {
    assert_eq!(
        malformed("A -2\n"),
        (
            1,
            RecordError::InvalidCapacity {
                value: "-2".to_string()
            }
        )
    );
    assert_eq!(
        malformed("A 2 seven\n"),
        (
            1,
            RecordError::InvalidGroup {
                value: "seven".to_string()
            }
        )
    );
    assert_eq!(
        malformed("A 2\n\nx 1.5\n"),
        (
            3,
            RecordError::InvalidGroup {
                value: "1.5".to_string()
            }
        )
    );
}

#[test]
fn trailing_fields_are_fatal() {
    assert_eq!(
        malformed("A 2 1 9\n"),
        (
            1,
            RecordError::TrailingField {
                value: "9".to_string()
            }
        )
    );
    assert_eq!(
        malformed("A 2\n\nx 1 2\n"),
        (
            3,
            RecordError::TrailingField {
                value: "2".to_string()
            }
        )
    );
}

#[test]
fn error_message_names_line_and_text() {
    let err = parse_roster("A 2\nB x\n").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 2"), "{message}");
    assert!(message.contains("`B x`"), "{message}");
}

#[test]
fn loads_roster_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(ROSTER.as_bytes()).unwrap();

    let roster = load_roster(file.path()).unwrap();
    assert_eq!(roster.drivers.len(), 3);
    assert_eq!(roster.riders.len(), 4);
}

#[test]
fn missing_file_is_unresolvable() {
    let err = load_roster("/definitely/not/here/roster.txt").unwrap_err();
    assert!(matches!(err, InputError::Unresolvable { .. }));
    assert!(err.to_string().contains("/definitely/not/here/roster.txt"));
}
