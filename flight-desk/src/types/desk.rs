use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use logger::{Color, Logger};
use roster::export;
use roster::{Direction, FieldMap, FlightField, FlightRecord, FlightRoster, SquawkAllocator};

use super::config::DeskConfig;
use super::desk_error::DeskError;

/// One operator session: the roster being worked plus its log.
///
/// Flight positions taken and returned here are 1-based, as shown in the
/// flight list.
pub struct Desk {
    roster: FlightRoster,
    logger: Logger,
}

impl Desk {
    /// Sets up the log directory, the session log and an empty roster.
    pub fn new(config: &DeskConfig) -> Result<Self, DeskError> {
        fs::create_dir_all(&config.log_dir)?;
        let logger = Logger::new(&config.log_dir, &config.session)?;

        let allocator = match config.seed {
            Some(seed) => SquawkAllocator::with_seed(seed),
            None => SquawkAllocator::new(),
        }
        .max_attempts(config.max_attempts);

        let desk = Desk {
            roster: FlightRoster::new(allocator),
            logger,
        };
        desk.note(&format!("Session {} started", config.session), Color::Cyan);
        Ok(desk)
    }

    pub fn roster(&self) -> &FlightRoster {
        &self.roster
    }

    pub fn log_path(&self) -> &Path {
        self.logger.path()
    }

    /// Adds a flight typed in field by field.
    pub fn add_flight(&mut self, fields: &FieldMap) -> Result<FlightRecord, DeskError> {
        let record = self.roster.add(fields)?;
        self.note(&added_message(&record), Color::Green);
        Ok(record)
    }

    /// Adds a flight from a pasted `Key: Value` flight plan.
    pub fn paste_flight(&mut self, text: &str) -> Result<FlightRecord, DeskError> {
        if text.trim().is_empty() {
            return Err(DeskError::InvalidInput(
                "Please paste flight details to import.".to_string(),
            ));
        }
        let record = self.roster.add_from_text(text)?;
        self.note(&added_message(&record), Color::Green);
        Ok(record)
    }

    /// Removes the flight at `position`.
    pub fn delete_flight(&mut self, position: usize) -> Result<FlightRecord, DeskError> {
        let record = self.roster.delete(to_index(position)?)?;
        self.note(
            &format!("Deleted {} ({})", record.callsign(), record.squawk()),
            Color::Yellow,
        );
        Ok(record)
    }

    /// Moves the flight at `position` one step and returns where it ended up.
    pub fn move_flight(&mut self, position: usize, direction: Direction) -> Result<usize, DeskError> {
        let index = to_index(position)?;
        let new_index = self.roster.move_flight(index, direction)?;
        if new_index != index {
            self.note(
                &format!("Moved flight {} to position {}", position, new_index + 1),
                Color::Blue,
            );
        }
        Ok(new_index + 1)
    }

    /// Loads the fields of the flight at `position` for editing.
    pub fn edit_fields(&self, position: usize) -> Result<FieldMap, DeskError> {
        Ok(self.roster.edit(to_index(position)?)?)
    }

    /// Writes the flight log to `path`.
    pub fn export_log(&self, path: &Path) -> Result<usize, DeskError> {
        let records = self.exportable()?;
        let mut writer = BufWriter::new(File::create(path)?);
        export::write_log(&records, &mut writer)?;
        self.note(
            &format!("Log saved successfully to {}", path.display()),
            Color::Cyan,
        );
        Ok(records.len())
    }

    /// Writes the roster to `path` as CSV.
    pub fn export_csv(&self, path: &Path) -> Result<usize, DeskError> {
        let records = self.exportable()?;
        export::write_csv(&records, BufWriter::new(File::create(path)?))?;
        self.note(
            &format!("CSV saved successfully to {}", path.display()),
            Color::Cyan,
        );
        Ok(records.len())
    }

    /// Renders the roster as a table, one flight per row.
    pub fn flight_table(&self) -> String {
        let records = self.roster.snapshot();
        if records.is_empty() {
            return "No flights available.".to_string();
        }

        let mut table = format!("{:<4}", "#");
        for field in FlightField::ALL {
            table.push_str(&format!("{:<14}", field.label()));
        }
        table.push_str("Squawk\n");

        for (index, record) in records.iter().enumerate() {
            table.push_str(&format!("{:<4}", index + 1));
            for field in FlightField::ALL {
                table.push_str(&format!("{:<14}", record.value(field)));
            }
            table.push_str(&format!("{}\n", record.squawk()));
        }
        table
    }

    /// Logs an operator action the desk refused.
    pub fn reject(&self, action: &str, error: &DeskError) {
        if let Err(e) = self.logger.warn(&format!("{} rejected: {}", action, error), false) {
            eprintln!("Failed to write log: {}", e);
        }
    }

    fn exportable(&self) -> Result<Vec<FlightRecord>, DeskError> {
        if self.roster.is_empty() {
            return Err(DeskError::InvalidInput("No flights to log.".to_string()));
        }
        Ok(self.roster.snapshot())
    }

    fn note(&self, message: &str, color: Color) {
        if let Err(e) = self.logger.info(message, color, false) {
            eprintln!("Failed to write log: {}", e);
        }
    }
}

fn added_message(record: &FlightRecord) -> String {
    format!(
        "Added {} ({}) squawking {}",
        record.callsign(),
        record.value(FlightField::FlightRules),
        record.squawk()
    )
}

fn to_index(position: usize) -> Result<usize, DeskError> {
    position
        .checked_sub(1)
        .ok_or_else(|| DeskError::InvalidInput("Flight numbers start at 1.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::{RosterError, SquawkCode};
    use std::path::PathBuf;

    const PLAN: &str = "Username: J
Callsign: DAL1
Aircraft: B738
Flight Rules: IFR
Departing: KATL
Arriving: KJFK
Route: DIRECT
Flight Level: 350";

    fn desk(name: &str) -> (Desk, PathBuf) {
        let dir = std::env::temp_dir().join(format!("flight_desk_test_{}", name));
        let config = DeskConfig {
            log_dir: dir.clone(),
            session: name.to_string(),
            seed: Some(17),
            max_attempts: 100,
        };
        (Desk::new(&config).expect("Failed to create desk"), dir)
    }

    fn vfr_fields(callsign: &str) -> FieldMap {
        FlightField::ALL
            .iter()
            .map(|field| {
                let value = match field {
                    FlightField::Callsign => callsign,
                    FlightField::FlightRules => "VFR",
                    _ => "X",
                };
                (*field, value.to_string())
            })
            .collect()
    }

    #[test]
    fn actions_are_logged() {
        let (mut desk, dir) = desk("logged");
        desk.paste_flight(PLAN).unwrap();
        let error = desk.delete_flight(5).unwrap_err();
        desk.reject("delete", &error);

        let log = fs::read_to_string(desk.log_path()).unwrap();
        assert!(log.contains("Added DAL1 (IFR) squawking"));
        assert!(log.contains("[WARN]"));
        assert!(log.contains("delete rejected"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn positions_are_one_based() {
        let (mut desk, dir) = desk("positions");
        desk.add_flight(&vfr_fields("A")).unwrap();
        desk.add_flight(&vfr_fields("B")).unwrap();

        assert_eq!(desk.move_flight(2, Direction::Up).unwrap(), 1);
        assert_eq!(desk.roster().get(0).unwrap().callsign(), "B");
        assert_eq!(desk.move_flight(1, Direction::Up).unwrap(), 1);
        assert!(matches!(
            desk.delete_flight(0),
            Err(DeskError::InvalidInput(_))
        ));
        assert!(matches!(
            desk.delete_flight(3),
            Err(DeskError::Roster(RosterError::IndexOutOfRange { index: 2, len: 2 }))
        ));
        assert_eq!(desk.edit_fields(2).unwrap()[&FlightField::Callsign], "A");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn empty_paste_is_rejected() {
        let (mut desk, dir) = desk("empty_paste");
        assert!(matches!(
            desk.paste_flight("   \n"),
            Err(DeskError::InvalidInput(_))
        ));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn exports_write_files() {
        let (mut desk, dir) = desk("exports");
        assert!(matches!(
            desk.export_log(&dir.join("empty.txt")),
            Err(DeskError::InvalidInput(_))
        ));

        desk.add_flight(&vfr_fields("N1")).unwrap();
        desk.paste_flight(PLAN).unwrap();

        let log_path = dir.join("flights.txt");
        assert_eq!(desk.export_log(&log_path).unwrap(), 2);
        let log = fs::read_to_string(&log_path).unwrap();
        assert_eq!(log, desk.roster().export_log());
        assert!(log.contains(&format!("Squawk: {}", SquawkCode::VFR_CONVERSION)));

        let csv_path = dir.join("flights.csv");
        assert_eq!(desk.export_csv(&csv_path).unwrap(), 2);
        assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 3);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn table_lists_flights_in_order() {
        let (mut desk, dir) = desk("table");
        assert_eq!(desk.flight_table(), "No flights available.");
        desk.add_flight(&vfr_fields("A")).unwrap();
        desk.add_flight(&vfr_fields("B")).unwrap();
        let table = desk.flight_table();
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("1") && rows[1].contains("A"));
        assert!(rows[2].starts_with("2") && rows[2].ends_with("1200"));
        fs::remove_dir_all(dir).unwrap();
    }
}
