use crate::errors::RosterError;
use crate::flight_field::FlightField;
use crate::flight_record::FieldMap;

/// Parses a pasted flight plan made of `Key: Value` lines.
///
/// Blank lines are ignored. The first colon of a line separates key from value,
/// so values may contain colons themselves. A line with no colon or an unknown
/// key rejects the whole paste with `RosterError::InvalidFormat`, without
/// saying which line. When a key repeats, the last value wins.
///
/// Squawk codes are never accepted from pasted text.
///
/// # Errors
/// - `RosterError::InvalidFormat` - If a line cannot be split or names an unknown key.
/// - `RosterError::MissingRequiredField` - If every line parsed but a field is absent.
pub fn parse(text: &str) -> Result<FieldMap, RosterError> {
    let mut fields = FieldMap::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (key, value) = line.split_once(':').ok_or(RosterError::InvalidFormat)?;
        let field = FlightField::from_label(key.trim()).ok_or(RosterError::InvalidFormat)?;
        fields.insert(field, value.trim().to_string());
    }

    if let Some(missing) = FlightField::ALL
        .iter()
        .find(|field| !fields.contains_key(*field))
    {
        return Err(RosterError::MissingRequiredField(*missing));
    }

    Ok(fields)
}
