use std::fs;
use std::io::Read;
use std::process;

use clap::{Parser, Subcommand};

use sixdot_cli::commands::{chart_ops, config_ops};
use sixdot_cli::{feedback, live, replay, trace_init};

#[derive(Parser)]
#[command(name = "sixtool", about = "Sixdot braille input diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the chord → cell chart
    Chart {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay an event script through a fresh session ("-" reads stdin)
    Replay {
        /// Path to the script file
        script_file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Drive a session interactively from stdin with a real debounce timer
    Live,

    /// Settings utilities
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the embedded default settings TOML
    Export,
    /// Validate a settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    trace_init::init_tracing(std::path::Path::new("."));

    let cli = Cli::parse();
    match cli.command {
        Command::Chart { json } => chart_ops::chart(json),
        Command::Replay { script_file, json } => run_replay(&script_file, json),
        Command::Live => {
            let player = feedback::platform_player();
            if let Err(e) = live::run(player.as_ref()) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        Command::Settings { command } => match command {
            SettingsCommand::Export => config_ops::settings_export(),
            SettingsCommand::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}

fn run_replay(script_file: &str, json: bool) {
    let source = if script_file == "-" {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Error reading stdin: {e}");
            process::exit(1);
        }
        buf
    } else {
        fs::read_to_string(script_file).unwrap_or_else(|e| {
            eprintln!("Error reading {script_file}: {e}");
            process::exit(1);
        })
    };

    let steps = replay::parse_script(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    let outcome = replay::run_script(&steps);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).expect("outcome serializes")
        );
        return;
    }
    for event in &outcome.events {
        println!("{event}");
    }
    println!("mode: {}", if outcome.mode_active { "ON" } else { "OFF" });
    println!("document: {}", outcome.document);
}
