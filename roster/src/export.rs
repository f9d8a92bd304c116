use std::io::Write;

use crate::errors::RosterError;
use crate::flight_field::{FlightField, SQUAWK_LABEL};
use crate::flight_record::FlightRecord;

/// Writes the flight log: one block of nine `Label: value` lines per record,
/// each block followed by a blank line.
///
/// Values are written as they are. A value holding a newline breaks the block
/// layout.
pub fn write_log<W: Write>(records: &[FlightRecord], writer: &mut W) -> Result<(), RosterError> {
    for record in records {
        for field in FlightField::ALL {
            writeln!(writer, "{}: {}", field.label(), record.value(field))?;
        }
        writeln!(writer, "{}: {}", SQUAWK_LABEL, record.squawk())?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders the flight log in memory.
pub fn log_string(records: &[FlightRecord]) -> String {
    let mut log = String::new();
    for record in records {
        for field in FlightField::ALL {
            log.push_str(&format!("{}: {}\n", field.label(), record.value(field)));
        }
        log.push_str(&format!("{}: {}\n\n", SQUAWK_LABEL, record.squawk()));
    }
    log
}

/// Writes the roster as CSV with a header row of the nine labels.
pub fn write_csv<W: Write>(records: &[FlightRecord], writer: W) -> Result<(), RosterError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if records.is_empty() {
        let mut header: Vec<&str> = FlightField::ALL.iter().map(|f| f.label()).collect();
        header.push(SQUAWK_LABEL);
        csv_writer.write_record(&header)?;
    }
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
