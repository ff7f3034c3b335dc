mod config;
mod controller;

use std::io::{self, BufRead};

use clap::Parser;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{FirstPlayerMode, GameSession, Mark};
use tictactoe_common::{log, logger};

use config::get_config_manager;
use controller::{Command, Controller, HELP_TEXT, parse_command};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a computer that never loses")]
struct Args {
    /// Path to the YAML config; defaults to a file next to the executable
    #[arg(long)]
    config: Option<String>,

    /// Mark the human plays: x or o
    #[arg(long)]
    human_mark: Option<Mark>,

    /// Who opens: human, computer or random
    #[arg(long)]
    first: Option<FirstPlayerMode>,

    /// Seed for the random first-player choice
    #[arg(long)]
    seed: Option<u64>,

    /// Print game log lines to stdout
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let mut setup = config.game;
    if let Some(mark) = args.human_mark {
        setup.human_mark = mark;
    }
    if let Some(first) = args.first {
        setup.first_player = first;
    }

    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!("Session seed {}", rng.seed());

    let mut controller = Controller::new(GameSession::new(setup, rng));
    println!("{}", HELP_TEXT);
    print_lines(&controller.start());

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => print_lines(&controller.handle(command)),
            Err(message) => println!("{}", message),
        }
    }

    log!("Client exiting");
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
