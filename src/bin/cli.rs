//! Roster CLI
//!
//! Thin command-line caller: collects fields, hands them to the roster,
//! prints the outcome.

use clap::{Parser, Subcommand, ValueEnum};
use roster::command::{Command, Outcome};
use roster::{Config, RollNoStrategy, Roster, StudentForm, StudentRecord};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster CLI
#[derive(Parser, Debug)]
#[command(name = "roster-cli")]
#[command(about = "Manage the student roster")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short, long, default_value = "students.db")]
    db: String,

    /// Roll number strategy
    #[arg(short, long, value_enum, default_value = "row-count")]
    strategy: Strategy,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Strategy {
    /// Row count + 1 (may reissue after a delete)
    RowCount,
    /// Persisted high-water mark + 1
    Counter,
}

impl From<Strategy> for RollNoStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::RowCount => RollNoStrategy::RowCount,
            Strategy::Counter => RollNoStrategy::Counter,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a student under a newly generated roll number
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        gender: String,
    },

    /// Update the student with a roll number
    Update {
        /// Roll number, e.g. 22CSR007
        roll_no: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        gender: String,
    },

    /// Delete the student with a roll number
    Delete {
        /// Roll number, e.g. 22CSR007
        roll_no: String,
    },

    /// List all students
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing/logging (stderr, so stdout stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,roster=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("roster-cli v{}", roster::VERSION);

    let config = Config::builder()
        .db_path(&args.db)
        .roll_no_strategy(args.strategy.into())
        .build();

    let roster = match Roster::open(config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to open roster: {}", e);
            std::process::exit(1);
        }
    };

    let (command, json) = match args.command {
        Commands::Add { name, email, age, gender } => (
            Command::Add {
                form: StudentForm::new(name, email, age, gender),
            },
            false,
        ),
        Commands::Update { roll_no, name, email, age, gender } => (
            Command::Update {
                roll_no,
                form: StudentForm::new(name, email, age, gender),
            },
            false,
        ),
        Commands::Delete { roll_no } => (Command::Delete { roll_no }, false),
        Commands::List { json } => (Command::List, json),
    };

    match roster.execute(command) {
        Ok(outcome) => print_outcome(outcome, json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(if e.validation_kind().is_some() { 2 } else { 1 });
        }
    }
}

fn print_outcome(outcome: Outcome, json: bool) {
    match outcome {
        Outcome::Added { roll_no } => {
            println!("Student added successfully with Roll No {}", roll_no)
        }
        Outcome::Updated { roll_no, rows } => {
            println!("Student with Roll No {} updated ({} row(s))", roll_no, rows)
        }
        Outcome::Deleted { roll_no, rows } => {
            println!("Student with Roll No {} deleted ({} row(s))", roll_no, rows)
        }
        Outcome::Listed(records) if json => match serde_json::to_string_pretty(&records) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Outcome::Listed(records) => print_table(&records),
    }
}

fn print_table(records: &[StudentRecord]) {
    println!(
        "{:<4} {:<9} {:<20} {:<28} {:>4} {:<6}",
        "id", "roll_no", "name", "email", "age", "gender"
    );
    for r in records {
        println!(
            "{:<4} {:<9} {:<20} {:<28} {:>4} {:<6}",
            r.id, r.roll_no, r.name, r.email, r.age, r.gender.as_str()
        );
    }
}
