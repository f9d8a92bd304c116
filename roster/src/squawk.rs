use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Serializer};

use crate::errors::RosterError;
use crate::flight_rules::FlightRules;

/// Lowest code handed out to instrument flights.
pub const MIN_SQUAWK: u16 = 1000;
/// Highest code handed out to instrument flights.
pub const MAX_SQUAWK: u16 = 7777;
/// Random draws tried before falling back to a sweep of the pool.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// A transponder code as shown on the radar scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquawkCode(u16);

impl SquawkCode {
    /// Code every VFR flight squawks.
    pub const VFR_CONVERSION: SquawkCode = SquawkCode(1200);
    /// Hijack, radio failure and general emergency.
    pub const EMERGENCY: [SquawkCode; 3] = [SquawkCode(7500), SquawkCode(7600), SquawkCode(7700)];

    /// Builds a code if `value` lies in the assignable range.
    pub fn new(value: u16) -> Option<SquawkCode> {
        if (MIN_SQUAWK..=MAX_SQUAWK).contains(&value) {
            Some(SquawkCode(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn is_emergency(&self) -> bool {
        SquawkCode::EMERGENCY.contains(self)
    }
}

impl fmt::Display for SquawkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for SquawkCode {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 4 {
            return Err(RosterError::InvalidFormat);
        }
        trimmed
            .parse::<u16>()
            .ok()
            .and_then(SquawkCode::new)
            .ok_or(RosterError::InvalidFormat)
    }
}

impl Serialize for SquawkCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Hands out squawk codes for the lifetime of a desk session.
///
/// Codes issued to instrument flights are remembered and never given out
/// again, even after the flight that held them is deleted. VFR flights all
/// share 1200 and never touch the used set.
pub struct SquawkAllocator {
    used: HashSet<SquawkCode>,
    rng: StdRng,
    max_attempts: usize,
}

impl Default for SquawkAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl SquawkAllocator {
    /// Creates an allocator seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates an allocator whose draws are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        SquawkAllocator {
            used: HashSet::new(),
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many random draws are tried before sweeping the pool.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns a code for a flight filed under `flight_rules`.
    ///
    /// # Errors
    /// - `RosterError::AllocationExhausted` - If every assignable code is used.
    pub fn allocate(&mut self, flight_rules: &str) -> Result<SquawkCode, RosterError> {
        if FlightRules::classify(flight_rules) == FlightRules::Visual {
            return Ok(SquawkCode::VFR_CONVERSION);
        }

        for _ in 0..self.max_attempts {
            let candidate = SquawkCode(self.rng.gen_range(MIN_SQUAWK..=MAX_SQUAWK));
            if self.is_available(&candidate) {
                self.used.insert(candidate);
                return Ok(candidate);
            }
        }

        // Random draws keep missing, the pool is nearly full.
        let candidate = (MIN_SQUAWK..=MAX_SQUAWK)
            .map(SquawkCode)
            .find(|code| self.is_available(code))
            .ok_or(RosterError::AllocationExhausted)?;
        self.used.insert(candidate);
        Ok(candidate)
    }

    /// Records `code` as taken so it is never handed out.
    ///
    /// Returns `false` if the code was already taken.
    pub fn mark_used(&mut self, code: SquawkCode) -> bool {
        self.used.insert(code)
    }

    pub fn is_used(&self, code: &SquawkCode) -> bool {
        self.used.contains(code)
    }

    /// Number of discrete codes issued or marked so far.
    pub fn issued_count(&self) -> usize {
        self.used.len()
    }

    /// Number of codes instrument flights can still get.
    pub fn remaining(&self) -> usize {
        (MIN_SQUAWK..=MAX_SQUAWK)
            .map(SquawkCode)
            .filter(|code| self.is_available(code))
            .count()
    }

    fn is_available(&self, code: &SquawkCode) -> bool {
        !code.is_emergency() && !self.used.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_pool_except(allocator: &mut SquawkAllocator, free: &[u16]) {
        for value in MIN_SQUAWK..=MAX_SQUAWK {
            if !free.contains(&value) {
                allocator.mark_used(SquawkCode(value));
            }
        }
    }

    #[test]
    fn vfr_always_gets_conversion_code() {
        let mut allocator = SquawkAllocator::with_seed(7);
        for _ in 0..20 {
            assert_eq!(allocator.allocate("VFR"), Ok(SquawkCode::VFR_CONVERSION));
        }
        assert_eq!(allocator.issued_count(), 0);
    }

    #[test]
    fn vfr_does_not_need_free_codes() {
        let mut allocator = SquawkAllocator::with_seed(7);
        fill_pool_except(&mut allocator, &[]);
        assert_eq!(allocator.allocate("VFR"), Ok(SquawkCode::VFR_CONVERSION));
    }

    #[test]
    fn instrument_codes_are_in_range_and_not_emergency() {
        let mut allocator = SquawkAllocator::with_seed(42);
        for _ in 0..500 {
            let code = allocator.allocate("IFR").unwrap();
            assert!((MIN_SQUAWK..=MAX_SQUAWK).contains(&code.value()));
            assert!(!code.is_emergency());
        }
    }

    #[test]
    fn instrument_codes_are_never_repeated() {
        let mut allocator = SquawkAllocator::with_seed(3);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let code = allocator.allocate("IFR").unwrap();
            assert!(seen.insert(code), "code {} issued twice", code);
        }
        assert_eq!(allocator.issued_count(), 2000);
    }

    #[test]
    fn lowercase_vfr_is_treated_as_instrument() {
        let mut allocator = SquawkAllocator::with_seed(1);
        let code = allocator.allocate("vfr").unwrap();
        assert!(allocator.is_used(&code));
    }

    #[test]
    fn sweep_finds_last_free_code() {
        let mut allocator = SquawkAllocator::with_seed(9).max_attempts(5);
        fill_pool_except(&mut allocator, &[4321]);
        assert_eq!(allocator.remaining(), 1);
        assert_eq!(allocator.allocate("IFR"), Ok(SquawkCode(4321)));
        assert_eq!(allocator.remaining(), 0);
    }

    #[test]
    fn emergency_codes_are_never_swept_up() {
        let mut allocator = SquawkAllocator::with_seed(9).max_attempts(0);
        fill_pool_except(&mut allocator, &[7500, 7600, 7700]);
        assert_eq!(allocator.remaining(), 0);
        assert_eq!(
            allocator.allocate("IFR"),
            Err(RosterError::AllocationExhausted)
        );
    }

    #[test]
    fn exhausted_pool_reports_error() {
        let mut allocator = SquawkAllocator::with_seed(11);
        fill_pool_except(&mut allocator, &[]);
        assert_eq!(
            allocator.allocate("IFR"),
            Err(RosterError::AllocationExhausted)
        );
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = SquawkAllocator::with_seed(2024);
        let mut b = SquawkAllocator::with_seed(2024);
        for _ in 0..10 {
            assert_eq!(a.allocate("IFR"), b.allocate("IFR"));
        }
    }

    #[test]
    fn mark_used_reports_duplicates() {
        let mut allocator = SquawkAllocator::new();
        assert!(allocator.mark_used(SquawkCode(2000)));
        assert!(!allocator.mark_used(SquawkCode(2000)));
    }

    #[test]
    fn code_parsing_and_display() {
        assert_eq!("1200".parse::<SquawkCode>(), Ok(SquawkCode::VFR_CONVERSION));
        assert_eq!(SquawkCode(4567).to_string(), "4567");
        assert!("0999".parse::<SquawkCode>().is_err());
        assert!("7778".parse::<SquawkCode>().is_err());
        assert!("12".parse::<SquawkCode>().is_err());
        assert!("abcd".parse::<SquawkCode>().is_err());
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        assert_eq!(SquawkCode::new(999), None);
        assert_eq!(SquawkCode::new(7778), None);
        assert!(SquawkCode::new(7700).unwrap().is_emergency());
    }
}
