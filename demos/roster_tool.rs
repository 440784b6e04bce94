//! Roster Tool Example
//!
//! This example demonstrates a small command-line tool that prints the
//! per-team meal schedule extracted from a training-table roster.

use std::fs::File;
use std::io;
use std::process;
use training_table::{
    format_meals, team_mapping, OutputFormat, ScheduleParserBuilder, TeamCode, TrainingTableError,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <roster.xlsx> [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --team <code>   Print the schedule for a single team");
        eprintln!("  --json          Print the schedule (or the --team schedule) as JSON");
        eprintln!("  --teams         List known team codes");
        eprintln!("\nExamples:");
        eprintln!("  {} roster.xlsx", args[0]);
        eprintln!("  {} roster.xlsx --team FB", args[0]);
        eprintln!("  {} roster.xlsx --json", args[0]);
        eprintln!("  {} roster.xlsx --team FB --json", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];
    let mut team: Option<TeamCode> = None;
    let mut format = OutputFormat::Text;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--team" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --team requires a value");
                    process::exit(1);
                }
                team = match TeamCode::lookup(&args[i + 1]) {
                    Some(code) => Some(code),
                    None => {
                        eprintln!("Error: Unknown team code: {}", args[i + 1]);
                        process::exit(1);
                    }
                };
                i += 2;
            }
            "--json" => {
                format = OutputFormat::Json;
                i += 1;
            }
            "--teams" => {
                for (code, name) in team_mapping() {
                    println!("{:<5} {}", code, name);
                }
                return;
            }
            _ => {
                eprintln!("Error: Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
    }

    if let Err(e) = run(input_path, team, format) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(
    input_path: &str,
    team: Option<TeamCode>,
    format: OutputFormat,
) -> Result<(), TrainingTableError> {
    let parser = ScheduleParserBuilder::new().build()?;
    let schedule = parser.parse(File::open(input_path)?)?;

    match (team, format) {
        (Some(code), OutputFormat::Json) => {
            parser.render(&schedule.for_team(code), OutputFormat::Json, io::stdout())
        }
        (Some(code), _) => {
            match schedule.team(code) {
                Some(detail) => println!(
                    "{} ({} athletes) {}",
                    detail.name, detail.headcount, detail.special_diets
                ),
                None => println!("{}: no meals scheduled", code.name()),
            }
            let meals = schedule.meals_for(code);
            for (meal, line) in meals.iter().zip(format_meals(meals)) {
                println!("{:<10} {:<10} {}", meal.meal_type, meal.time, line);
            }
            Ok(())
        }
        (None, _) => parser.render(&schedule, format, io::stdout()),
    }
}
