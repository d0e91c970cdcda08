use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shards_frontend::{
    parse_amount, render_outcome, render_table, to_json, CalculatorForm, Scenario, FIELD_NAMES,
};
use shards_rewards::{LockSizes, RewardResult, ShardsError, USER_COUNT};

/// Shards reward calculator
#[derive(Parser)]
#[command(name = "shards", version, about = "Shards reward calculator for locked tokens")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute rewards from command-line values
    Calc {
        /// Lock size per user, exactly five values (non-numeric entries count as 0)
        #[arg(
            long = "lock",
            num_args = 5,
            allow_hyphen_values = true,
            default_values = ["100", "100", "100", "100", "100"]
        )]
        locks: Vec<String>,

        /// Total token supply
        #[arg(long, default_value = "1000", allow_hyphen_values = true)]
        total: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compute rewards from a scenario file (.toml or .json)
    Run {
        /// Path to the scenario file
        #[arg(long)]
        scenario: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a scenario file with the default inputs
    Init {
        /// Output path; a .toml extension writes TOML, anything else JSON
        #[arg(long, default_value = "scenario.toml")]
        output: PathBuf,
    },

    /// Edit the form field by field and calculate on demand
    Interactive,

    /// Print version information
    Version,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc { locks, total, json } => cmd_calc(&locks, &total, json),
        Commands::Run { scenario, json } => cmd_run(scenario, json),
        Commands::Init { output } => cmd_init(output),
        Commands::Interactive => cmd_interactive(),
        Commands::Version => cmd_version(),
    }
}

fn cmd_calc(raw_locks: &[String], raw_total: &str, json: bool) {
    if raw_locks.len() != USER_COUNT {
        eprintln!("Expected {USER_COUNT} lock sizes, got {}", raw_locks.len());
        std::process::exit(1);
    }

    let mut lock_sizes: LockSizes = [0.0; USER_COUNT];
    for (slot, raw) in lock_sizes.iter_mut().zip(raw_locks) {
        *slot = parse_amount(raw);
    }
    let total_tokens = parse_amount(raw_total);

    report(shards_rewards::compute(&lock_sizes, total_tokens), json);
}

fn cmd_run(path: PathBuf, json: bool) {
    let scenario = Scenario::from_file(&path).unwrap_or_else(|e| {
        eprintln!("Error reading scenario file: {e}");
        std::process::exit(1);
    });

    report(scenario.compute(), json);
}

fn cmd_init(output: PathBuf) {
    let scenario = Scenario::default();
    scenario.to_file(&output).unwrap_or_else(|e| {
        eprintln!("Error writing scenario file: {e}");
        std::process::exit(1);
    });

    println!("Scenario file created: {}", output.display());
    println!("  Lock sizes: {:?}", scenario.lock_sizes);
    println!("  Total tokens: {}", scenario.total_tokens);
}

/// Print a calculation and exit non-zero when it failed validation.
fn report(result: Result<RewardResult, ShardsError>, json: bool) {
    if json {
        println!("{}", to_json(&result));
    } else {
        match &result {
            Ok(r) => print!("{}", render_table(r)),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    if result.is_err() {
        std::process::exit(1);
    }
}

fn cmd_interactive() {
    let mut form = CalculatorForm::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Shards reward calculator. Type `help` for commands.");
    print_fields(&form);

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                std::process::exit(1);
            }
        }

        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            "show" => print_fields(&form),
            "reset" => {
                form.reset();
                print_fields(&form);
            }
            "calculate" | "calc" => {
                form.calculate();
                print!("{}", render_outcome(form.outcome()));
            }
            _ => {
                let (name, value) = match line.split_once('=') {
                    Some((n, v)) => (n.trim(), v.trim()),
                    None => match line.split_once(char::is_whitespace) {
                        Some((n, v)) => (n.trim(), v.trim()),
                        None => (line, ""),
                    },
                };
                match form.set_field(name, value) {
                    Ok(v) => println!("  {name} = {v}"),
                    Err(e) => {
                        tracing::warn!(input = line, "ignored form edit");
                        println!("  {e} (fields: {})", FIELD_NAMES.join(", "));
                    }
                }
            }
        }
    }
}

fn print_fields(form: &CalculatorForm) {
    for name in FIELD_NAMES {
        if let Ok(value) = form.field(name) {
            println!("  {name:<12} {value}");
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <field> <value>   set a field (also <field>=<value>)");
    println!("  calculate         compute rewards for the current values");
    println!("  show              print the current values");
    println!("  reset             restore default values");
    println!("  quit              leave");
    println!("Fields: {}", FIELD_NAMES.join(", "));
}

fn cmd_version() {
    println!(
        "shards {} (shards reward calculator)",
        env!("CARGO_PKG_VERSION")
    );
}
