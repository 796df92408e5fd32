#![allow(dead_code)]

use roomtrack_lib::{Group, Indication, Location, Position, RecordSet};

pub fn location(name: &str, lat: &str, lng: &str, alt: &str, rad: &str) -> Location {
    Location::parse(name, lat, lng, alt, rad).expect("valid fixture location")
}

pub fn indication(a: &str, b: &str, forward: &str, backward: &str) -> Indication {
    Indication {
        name_a: a.to_string(),
        name_b: b.to_string(),
        forward_info: forward.to_string(),
        backward_info: backward.to_string(),
    }
}

pub fn group(name: &str, of: &str) -> Group {
    Group {
        name: name.to_string(),
        of: of.to_string(),
    }
}

pub fn position(lat: &str, lng: &str, alt: &str) -> Position {
    Position::parse(lat, lng, alt).expect("valid fixture position")
}

pub fn names(path: &[&str]) -> Vec<String> {
    path.iter().map(|name| name.to_string()).collect()
}

/// Three nodes on a 3-4-5 layout: A-B is 5 long, B-C is 5 long.
pub fn line_records() -> RecordSet {
    RecordSet {
        locations: vec![
            location("A", "0", "0", "0", "1"),
            location("B", "3", "4", "0", "1"),
            location("C", "3", "4", "5", "1"),
        ],
        indications: vec![
            indication("A", "B", "A to B", "B to A"),
            indication("B", "C", "B to C", "C to B"),
        ],
        groups: vec![group("Room101", "C")],
    }
}

/// A small floor plan: a short hallway route and a long corridor via `Far`.
///
/// ```text
///   Lobby --1-- Hall1 --1-- Hall2 --1-- Lab
///     |                                  |
///     `--sqrt(125)-- Far ------10--------'
/// ```
/// `Island` has no indications, and one indication points at a location
/// (`Nowhere`) that does not exist.
pub fn campus_records() -> RecordSet {
    RecordSet {
        locations: vec![
            location("Lobby", "0", "0", "0", "2.5"),
            location("Hall1", "1", "0", "0", "1.0"),
            location("Hall2", "2", "0", "0", "1.0"),
            location("Lab", "2", "1", "0", "0.75"),
            location("Far", "2", "11", "0", "1"),
            location("Island", "50", "50", "0", "1"),
        ],
        indications: vec![
            indication("Lobby", "Hall1", "Walk east", "Walk west"),
            indication("Hall1", "Hall2", "Continue east", "Continue west"),
            indication("Lab", "Hall2", "Exit the lab", "Enter the lab"),
            indication("Lobby", "Far", "Long corridor", "Long corridor back"),
            indication("Far", "Lab", "Down the stairs", "Up the stairs"),
            indication("Lobby", "Nowhere", "Pending", "Pending"),
        ],
        groups: vec![group("Room101", "Hall1"), group("Chemistry", "Lab")],
    }
}
