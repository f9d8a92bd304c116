use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::RosterError;
use crate::flight_field::FlightField;
use crate::flight_rules::FlightRules;
use crate::squawk::SquawkCode;

/// Field values keyed by field, kept in export order.
pub type FieldMap = BTreeMap<FlightField, String>;

/// A complete set of flight plan fields that has not been given a squawk yet.
#[derive(Debug, PartialEq, Clone)]
pub struct ValidatedFlight {
    username: String,
    callsign: String,
    aircraft: String,
    flight_rules: String,
    departing: String,
    arriving: String,
    route: String,
    flight_level: String,
}

impl ValidatedFlight {
    /// Checks that every required field is present and non-blank.
    ///
    /// Values are stored trimmed. Fields are checked in export order, so the
    /// error names the first offending one.
    ///
    /// # Errors
    /// - `RosterError::MissingField` - If a field is absent from `fields`.
    /// - `RosterError::EmptyField` - If a field is blank after trimming.
    pub fn from_fields(fields: &FieldMap) -> Result<Self, RosterError> {
        let required = |field: FlightField| -> Result<String, RosterError> {
            let value = fields
                .get(&field)
                .ok_or(RosterError::MissingField(field))?
                .trim();
            if value.is_empty() {
                return Err(RosterError::EmptyField(field));
            }
            Ok(value.to_string())
        };

        Ok(ValidatedFlight {
            username: required(FlightField::Username)?,
            callsign: required(FlightField::Callsign)?,
            aircraft: required(FlightField::Aircraft)?,
            flight_rules: required(FlightField::FlightRules)?,
            departing: required(FlightField::Departing)?,
            arriving: required(FlightField::Arriving)?,
            route: required(FlightField::Route)?,
            flight_level: required(FlightField::FlightLevel)?,
        })
    }

    pub fn flight_rules(&self) -> &str {
        &self.flight_rules
    }

    /// Attaches the squawk issued for this flight.
    pub fn into_record(self, squawk: SquawkCode) -> FlightRecord {
        FlightRecord {
            username: self.username,
            callsign: self.callsign,
            aircraft: self.aircraft,
            flight_rules: self.flight_rules,
            departing: self.departing,
            arriving: self.arriving,
            route: self.route,
            flight_level: self.flight_level,
            squawk,
        }
    }
}

/// A flight plan stored in the roster.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct FlightRecord {
    #[serde(rename = "Username")]
    username: String,
    #[serde(rename = "Callsign")]
    callsign: String,
    #[serde(rename = "Aircraft")]
    aircraft: String,
    #[serde(rename = "Flight Rules")]
    flight_rules: String,
    #[serde(rename = "Departing")]
    departing: String,
    #[serde(rename = "Arriving")]
    arriving: String,
    #[serde(rename = "Route")]
    route: String,
    #[serde(rename = "Flight Level")]
    flight_level: String,
    #[serde(rename = "Squawk")]
    squawk: SquawkCode,
}

impl FlightRecord {
    /// Returns the value the operator entered for `field`.
    pub fn value(&self, field: FlightField) -> &str {
        match field {
            FlightField::Username => &self.username,
            FlightField::Callsign => &self.callsign,
            FlightField::Aircraft => &self.aircraft,
            FlightField::FlightRules => &self.flight_rules,
            FlightField::Departing => &self.departing,
            FlightField::Arriving => &self.arriving,
            FlightField::Route => &self.route,
            FlightField::FlightLevel => &self.flight_level,
        }
    }

    /// Copies the eight input fields back out, e.g. to refill an input form.
    pub fn fields(&self) -> FieldMap {
        FlightField::ALL
            .iter()
            .map(|field| (*field, self.value(*field).to_string()))
            .collect()
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn rules(&self) -> FlightRules {
        FlightRules::classify(&self.flight_rules)
    }

    pub fn squawk(&self) -> SquawkCode {
        self.squawk
    }
}
