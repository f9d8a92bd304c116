/// Classification of a flight plan's rules string.
///
/// Only the exact string `VFR` is visual; anything else the operator typed is
/// handled as an instrument flight and gets a discrete squawk.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FlightRules {
    Visual,
    Instrument,
}

impl FlightRules {
    pub fn classify(rules: &str) -> FlightRules {
        if rules == "VFR" {
            FlightRules::Visual
        } else {
            FlightRules::Instrument
        }
    }
}
