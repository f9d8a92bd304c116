//! Flight roster for an ATC training desk.
//!
//! Keeps the ordered list of flight plans, hands out transponder codes and
//! turns pasted `Key: Value` flight plans into roster entries.

pub mod errors;
pub mod export;
pub mod flight_field;
pub mod flight_record;
pub mod flight_roster;
pub mod flight_rules;
pub mod parser;
pub mod squawk;

pub use errors::RosterError;
pub use flight_field::FlightField;
pub use flight_record::{FieldMap, FlightRecord, ValidatedFlight};
pub use flight_roster::{Direction, FlightRoster};
pub use flight_rules::FlightRules;
pub use squawk::{SquawkAllocator, SquawkCode};
