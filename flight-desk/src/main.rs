mod types;

use roster::{Direction, FieldMap, FlightField};
use std::{
    env,
    io::{self, Write},
    path::Path,
};
use types::{config::DeskConfig, desk::Desk, desk_error::DeskError};

fn clean_scr() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

fn add_flight(desk: &mut Desk) -> Result<(), DeskError> {
    clean_scr();
    let mut fields = FieldMap::new();
    for field in FlightField::ALL {
        fields.insert(field, prompt_input(&format!("{}: ", field.label()))?);
    }

    let record = desk.add_flight(&fields)?;
    println!("Flight {} added with squawk {}", record.callsign(), record.squawk());
    Ok(())
}

fn edit_flight(desk: &mut Desk, position: usize) -> Result<(), DeskError> {
    let mut fields = desk.edit_fields(position)?;
    clean_scr();
    println!("Editing flight {}. Press Enter to keep a value.", position);
    for (field, value) in fields.iter_mut() {
        let input = prompt_input(&format!("{} [{}]: ", field.label(), value))?;
        if !input.is_empty() {
            *value = input;
        }
    }

    let record = desk.add_flight(&fields)?;
    println!(
        "Flight {} resubmitted with squawk {}",
        record.callsign(),
        record.squawk()
    );
    Ok(())
}

fn paste_flight(desk: &mut Desk) -> Result<(), DeskError> {
    clean_scr();
    println!("Paste the flight details, then an empty line:");
    let mut text = String::new();
    loop {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }
        text.push_str(&line);
    }

    let record = desk.paste_flight(&text)?;
    println!("Flight added successfully! Squawk {}", record.squawk());
    Ok(())
}

fn parse_position(arg: Option<&&str>) -> Result<usize, DeskError> {
    let arg = arg.ok_or_else(|| DeskError::InvalidInput("Please select a flight.".to_string()))?;
    arg.parse::<usize>()
        .map_err(|_| DeskError::InvalidInput(format!("'{}' is not a flight number.", arg)))
}

fn run_command(desk: &mut Desk, args: &[&str]) -> Result<(), DeskError> {
    match args[0] {
        "add" => add_flight(desk)?,
        "paste" => paste_flight(desk)?,
        "list" => println!("{}", desk.flight_table()),
        "edit" => edit_flight(desk, parse_position(args.get(1))?)?,
        "delete" => {
            let record = desk.delete_flight(parse_position(args.get(1))?)?;
            println!("Deleted {}", record.callsign());
        }
        "up" | "down" => {
            let direction = if args[0] == "up" {
                Direction::Up
            } else {
                Direction::Down
            };
            let position = desk.move_flight(parse_position(args.get(1))?, direction)?;
            println!("{}", desk.flight_table());
            println!("Selected flight {}", position);
        }
        "export" | "export-csv" => {
            let path = args.get(1).ok_or_else(|| {
                DeskError::InvalidInput("Please give a file path.".to_string())
            })?;
            let count = if args[0] == "export" {
                desk.export_log(Path::new(path))?
            } else {
                desk.export_csv(Path::new(path))?
            };
            println!("Saved {} flights to {}", count, path);
        }
        "-h" | "help" => print_help(),
        _ => eprintln!("Invalid command. Use -h for help."),
    }
    Ok(())
}

fn main() -> Result<(), DeskError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = DeskConfig::from_args(&args)?;
    let mut desk = Desk::new(&config)?;
    println!("Logging to {}", desk.log_path().display());

    loop {
        println!("Enter command (type '-h' or 'help' for options): ");
        let mut command = String::new();
        if io::stdin().read_line(&mut command)? == 0 {
            break;
        }

        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }
        if args[0] == "exit" {
            break;
        }

        if let Err(e) = run_command(&mut desk, &args) {
            eprintln!("Error: {}", e);
            desk.reject(args[0], &e);
        }
    }

    Ok(())
}

fn prompt_input(prompt: &str) -> Result<String, DeskError> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn print_help() {
    clean_scr();
    println!("Available commands:");
    println!("  add");
    println!("    Adds a new flight. You'll be prompted for each detail.");
    println!("  paste");
    println!("    Adds a flight from pasted 'Key: Value' lines, ended by an empty line.");
    println!("  list");
    println!("    Shows the flights in sequence order.");
    println!("  edit <n>");
    println!("    Loads flight n for editing and submits it as a new flight.");
    println!("  delete <n>");
    println!("    Removes flight n. Its squawk is not reused.");
    println!("  up <n> / down <n>");
    println!("    Moves flight n one place up or down the sequence.");
    println!("  export <path>");
    println!("    Saves the flight log as text.");
    println!("  export-csv <path>");
    println!("    Saves the flights as CSV.");
    println!("  exit");
    println!("    Closes this application.");
}
