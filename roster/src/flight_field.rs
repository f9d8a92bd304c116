use std::fmt;

/// The eight fields an operator has to provide for a flight plan, in the order
/// they are prompted, displayed and exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlightField {
    Username,
    Callsign,
    Aircraft,
    FlightRules,
    Departing,
    Arriving,
    Route,
    FlightLevel,
}

/// Label written after the eight input fields of every exported record.
pub const SQUAWK_LABEL: &str = "Squawk";

impl FlightField {
    pub const ALL: [FlightField; 8] = [
        FlightField::Username,
        FlightField::Callsign,
        FlightField::Aircraft,
        FlightField::FlightRules,
        FlightField::Departing,
        FlightField::Arriving,
        FlightField::Route,
        FlightField::FlightLevel,
    ];

    /// Returns the label used in prompts, pasted plans and exported logs.
    pub fn label(&self) -> &'static str {
        match self {
            FlightField::Username => "Username",
            FlightField::Callsign => "Callsign",
            FlightField::Aircraft => "Aircraft",
            FlightField::FlightRules => "Flight Rules",
            FlightField::Departing => "Departing",
            FlightField::Arriving => "Arriving",
            FlightField::Route => "Route",
            FlightField::FlightLevel => "Flight Level",
        }
    }

    /// Looks a field up by its label.
    ///
    /// Besides the canonical label, the compact spelling without spaces
    /// (`FlightRules`, `FlightLevel`) is accepted. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<FlightField> {
        match label {
            "Username" => Some(FlightField::Username),
            "Callsign" => Some(FlightField::Callsign),
            "Aircraft" => Some(FlightField::Aircraft),
            "Flight Rules" | "FlightRules" => Some(FlightField::FlightRules),
            "Departing" => Some(FlightField::Departing),
            "Arriving" => Some(FlightField::Arriving),
            "Route" => Some(FlightField::Route),
            "Flight Level" | "FlightLevel" => Some(FlightField::FlightLevel),
            _ => None,
        }
    }
}

impl fmt::Display for FlightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
