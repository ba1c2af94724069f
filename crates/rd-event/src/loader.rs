//! Event-file loader.
//!
//! # Format
//!
//! One event per line, whitespace separated.  Blank lines and lines starting
//! with `#` are skipped.
//!
//! ```text
//! # timestamp DriverRequest    id  row,col  speed
//! 0           DriverRequest    Amaranth 1,1 1
//! # timestamp PassengerRequest id  origin  destination  patience
//! 1           PassengerRequest Bogus 4,2 1,5 15
//! ```
//!
//! A driver named on several lines is the same driver (first definition of
//! location and speed wins); a passenger name may appear only once.
//! Coordinates are limited to `±Location::MAX_COORDINATE` and a passenger's
//! cancellation deadline (`timestamp + patience`) must fit in a `Tick`.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rd_agent::{Driver, Fleet, Passenger};
use rd_core::{Location, RdError, Tick};

use crate::{Event, EventError, EventResult};

/// A loaded event file: the entities it mentions and its initial events in
/// file order.
#[derive(Debug, Default)]
pub struct Scenario {
    pub fleet:  Fleet,
    pub events: Vec<Event>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from an event file.
pub fn load_events_path(path: &Path) -> EventResult<Scenario> {
    let file = std::fs::File::open(path).map_err(EventError::Io)?;
    load_events_reader(file)
}

/// Like [`load_events_path`] but accepts any `Read` source.
pub fn load_events_reader<R: Read>(reader: R) -> EventResult<Scenario> {
    let mut scenario = Scenario::default();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = parse_line(trimmed, line_no, &mut scenario.fleet)?;
        scenario.events.push(event);
    }

    Ok(scenario)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_line(line: &str, line_no: usize, fleet: &mut Fleet) -> EventResult<Event> {
    let parse_err = |message: String| EventError::Parse { line: line_no, message };
    let core_err = |source: RdError| EventError::Core { line: line_no, source };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let expect_len = |n: usize, kind: &str| {
        if tokens.len() == n {
            Ok(())
        } else {
            Err(parse_err(format!("{kind} takes {n} fields, found {}", tokens.len())))
        }
    };
    if tokens.len() < 2 {
        return Err(parse_err(format!("expected \"timestamp EventType ...\", got {line:?}")));
    }

    let at = Tick(parse_int(tokens[0], "timestamp").map_err(parse_err)?);

    match tokens[1] {
        "DriverRequest" => {
            expect_len(5, "DriverRequest")?;
            let location: Location = tokens[3].parse().map_err(core_err)?;
            let speed = parse_int(tokens[4], "speed").map_err(parse_err)?;
            if speed == 0 {
                return Err(core_err(RdError::ZeroSpeed(tokens[2].to_owned())));
            }
            let driver = fleet.add_driver(Driver::new(tokens[2], location, speed));
            Ok(Event::DriverRequest { at, driver })
        }
        "PassengerRequest" => {
            expect_len(6, "PassengerRequest")?;
            let origin: Location = tokens[3].parse().map_err(core_err)?;
            let destination: Location = tokens[4].parse().map_err(core_err)?;
            let patience = parse_int(tokens[5], "patience").map_err(parse_err)?;
            if at.checked_add(patience).is_none() {
                return Err(parse_err(format!(
                    "patience {patience} at {at} runs past the last representable tick"
                )));
            }
            let passenger = fleet
                .add_passenger(Passenger::new(tokens[2], patience, origin, destination))
                .map_err(core_err)?;
            Ok(Event::PassengerRequest { at, passenger })
        }
        other => Err(parse_err(format!("unknown event type {other:?}"))),
    }
}

fn parse_int(token: &str, what: &str) -> Result<u64, String> {
    token
        .parse::<u64>()
        .map_err(|_| format!("invalid {what} {token:?}: expected a non-negative integer"))
}
