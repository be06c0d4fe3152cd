mod cli;

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use quizline::config::{self, Config};
use quizline::source::{self, LoadedBank};
use quizline::state::AppState;
use quizline::{logging, tui};

use crate::cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    // --check prints to the terminal, so it logs there too
    let log_file = match (&cli.log_file, cli.check) {
        (Some(path), _) => Some(PathBuf::from(path)),
        (None, true) => None,
        (None, false) => Some(config::default_log_path()),
    };
    if let Err(e) = logging::init_logging(cli.debug, log_file.as_deref()) {
        eprintln!("Warning: {}", e);
    }

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);
    let mut cfg = match config::load_config(&config_path) {
        Ok(Some(cfg)) => cfg,
        Ok(None) => Config::default(),
        Err(e) => {
            warn!("{}", e);
            eprintln!("Warning: {} (using defaults)", e);
            Config::default()
        }
    };
    apply_overrides(&mut cfg, &cli);

    if cli.save_config {
        config::save_config(&config_path, &cfg).map_err(|e| e.to_string())?;
        eprintln!("Settings saved to {}", config_path.display());
    }

    let bank_path = source::resolve_source(&cli.path).map_err(|e| e.to_string())?;
    let bank = source::load_bank(&bank_path).map_err(|e| e.to_string())?;

    if cli.check {
        print_summary(&bank, &cfg);
        return Ok(());
    }

    let rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let state = AppState::new(bank, cfg.session_config(), rng);
    let export = cli.export.as_ref().map(PathBuf::from);

    info!("starting quiz");
    let mut state = tui::run_tui(state, export.clone()).map_err(|e| e.to_string())?;

    if let Ok(results) = state.results() {
        println!(
            "{}: {} of {} correct, score {}",
            state.bank_name, results.correct_answers, results.total_questions, results.score
        );
    }

    if let Some(e) = state.export_error.take() {
        return Err(e.to_string());
    }
    if let (Some(path), Ok(_)) = (&export, state.results()) {
        eprintln!("Results exported to {}", path.display());
    }

    Ok(())
}

fn apply_overrides(cfg: &mut Config, cli: &Cli) {
    if let Some(n) = cli.max_questions {
        cfg.max_questions = n;
    }
    if cli.sequential {
        cfg.random_order = false;
    }
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
}

fn print_summary(bank: &LoadedBank, cfg: &Config) {
    let parsed = bank.summary.questions.len();
    let asked = if cfg.max_questions > 0 {
        cfg.max_questions.min(parsed)
    } else {
        parsed
    };
    println!("Bank: {}", bank.path.display());
    println!("Hash: {}", bank.hash);
    println!("Questions: {}", parsed);
    println!("Skipped lines: {}", bank.summary.skipped);
    println!(
        "Per session: {} ({})",
        asked,
        if cfg.random_order { "random order" } else { "bank order" }
    );
}
