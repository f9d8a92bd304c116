use crate::errors::RosterError;
use crate::export;
use crate::flight_record::{FieldMap, FlightRecord, ValidatedFlight};
use crate::parser;
use crate::squawk::SquawkAllocator;

/// Direction of a one-step move in the sequence.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
}

/// The ordered list of flights the controller is working.
///
/// Order is the sequencing order (runway or handoff) and only changes through
/// adjacent swaps. Squawk codes come from the roster's own allocator, so no two
/// instrument flights in the roster share a code.
#[derive(Default)]
pub struct FlightRoster {
    flights: Vec<FlightRecord>,
    allocator: SquawkAllocator,
}

impl FlightRoster {
    /// Creates an empty roster that issues codes from `allocator`.
    pub fn new(allocator: SquawkAllocator) -> Self {
        FlightRoster {
            flights: Vec::new(),
            allocator,
        }
    }

    /// Validates `fields`, issues a squawk and appends the flight.
    ///
    /// # Returns
    /// A copy of the stored record.
    ///
    /// # Errors
    /// - `RosterError::MissingField` / `RosterError::EmptyField` - If the fields are incomplete.
    /// - `RosterError::AllocationExhausted` - If no discrete code is left.
    pub fn add(&mut self, fields: &FieldMap) -> Result<FlightRecord, RosterError> {
        let flight = ValidatedFlight::from_fields(fields)?;
        let squawk = self.allocator.allocate(flight.flight_rules())?;
        let record = flight.into_record(squawk);
        self.flights.push(record.clone());
        Ok(record)
    }

    /// Parses a pasted flight plan and adds it.
    pub fn add_from_text(&mut self, text: &str) -> Result<FlightRecord, RosterError> {
        let fields = parser::parse(text)?;
        self.add(&fields)
    }

    /// Removes the flight at `index`. Its squawk stays reserved.
    pub fn delete(&mut self, index: usize) -> Result<FlightRecord, RosterError> {
        self.check_index(index)?;
        Ok(self.flights.remove(index))
    }

    /// Swaps the flight at `index` with its neighbour in `direction`.
    ///
    /// Moving the first flight up or the last one down does nothing.
    ///
    /// # Returns
    /// The position the flight ends up at.
    ///
    /// # Errors
    /// - `RosterError::IndexOutOfRange` - If there is no flight at `index`.
    pub fn move_flight(&mut self, index: usize, direction: Direction) -> Result<usize, RosterError> {
        self.check_index(index)?;
        let destination = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|next| *next < self.flights.len()),
        };
        match destination {
            Some(destination) => {
                self.flights.swap(index, destination);
                Ok(destination)
            }
            None => Ok(index),
        }
    }

    /// Returns the fields of the flight at `index` so they can be edited and
    /// submitted again through [`FlightRoster::add`].
    ///
    /// The roster is left untouched. A resubmitted flight is a new entry and
    /// gets a newly issued squawk.
    pub fn edit(&self, index: usize) -> Result<FieldMap, RosterError> {
        self.check_index(index)?;
        Ok(self.flights[index].fields())
    }

    /// Copies the current sequence out for display or export.
    pub fn snapshot(&self) -> Vec<FlightRecord> {
        self.flights.clone()
    }

    pub fn get(&self, index: usize) -> Option<&FlightRecord> {
        self.flights.get(index)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn allocator(&self) -> &SquawkAllocator {
        &self.allocator
    }

    /// Renders the flight log of the current sequence.
    pub fn export_log(&self) -> String {
        export::log_string(&self.flights)
    }

    fn check_index(&self, index: usize) -> Result<(), RosterError> {
        if index >= self.flights.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.flights.len(),
            });
        }
        Ok(())
    }
}
