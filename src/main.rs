//! Wordle Mates - CLI
//!
//! Wordle game with a TUI, a line mode and per-player statistics.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use wordle_mates::{
    commands::{
        SettingsUpdate, check_guess, recent_games, reset_stats, run_simple, show_stats,
        update_settings,
    },
    config::AppConfig,
    core::Word,
    interactive::{App, run_tui},
    logging::init_logging,
    output::{print_evaluation, print_history, print_stats},
    profile::Profiles,
    store::{StoreConfig, UserId, open_store},
    wordlists::{Dictionary, TargetSelection, loader::build_dictionary},
};

/// Games listed under the `stats` panel
const RECENT_GAMES: usize = 5;

#[derive(Parser)]
#[command(
    name = "wordle_mates",
    about = "Wordle with player statistics, achievements and a terminal UI",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player profile to record games under (default: from config)
    #[arg(short, long, global = true, env = "WORDLE_MATES_PLAYER")]
    player: Option<String>,

    /// Require revealed hints to be used in later guesses
    #[arg(long, global = true)]
    hard_mode: bool,

    /// Use the daily word instead of a random one
    #[arg(long, global = true, conflicts_with = "target")]
    daily: bool,

    /// Play against a specific word
    #[arg(long, global = true)]
    target: Option<String>,

    /// Custom answer list, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Keep statistics in memory only for this run
    #[arg(long, global = true)]
    no_save: bool,

    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Show player statistics and achievements
    Stats,

    /// Reset player statistics
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Score a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Show or change saved settings
    Settings {
        /// Default player
        #[arg(long)]
        default_player: Option<String>,

        /// Default hard mode setting
        #[arg(long, action = ArgAction::Set)]
        default_hard_mode: Option<bool>,

        /// Default target selection
        #[arg(long, value_enum)]
        default_target: Option<TargetArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    Random,
    Daily,
}

impl From<TargetArg> for TargetSelection {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Random => Self::Random,
            TargetArg::Daily => Self::Daily,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let interactive = matches!(command, Commands::Play);
    init_logging(cli.verbose, cli.log_file.as_deref(), interactive)?;

    let config = AppConfig::load(cli.config.as_deref())?;

    match command {
        Commands::Check { guess, target } => run_check_command(&guess, &target),
        Commands::Settings {
            default_player,
            default_hard_mode,
            default_target,
        } => run_settings_command(
            cli.config.as_deref(),
            SettingsUpdate {
                player: default_player,
                hard_mode: default_hard_mode,
                target: default_target.map(Into::into),
            },
        ),
        Commands::Stats => {
            let (profiles, user) = open_profiles(&cli, &config)?;
            print_stats(user.as_str(), &show_stats(&profiles, &user)?);
            print_history(&recent_games(&profiles, &user, RECENT_GAMES)?);
            Ok(())
        }
        Commands::Reset { yes } => {
            let (profiles, user) = open_profiles(&cli, &config)?;
            run_reset_command(&profiles, &user, yes)
        }
        Commands::Simple => {
            let (profiles, user) = open_profiles(&cli, &config)?;
            let mut words = load_dictionary(&cli, &config)?;
            let hard_mode = cli.hard_mode || config.settings.hard_mode;
            let stdin = io::stdin();
            run_simple(
                stdin.lock(),
                &mut io::stdout(),
                &mut words,
                &profiles,
                &user,
                hard_mode,
            )?;
            Ok(())
        }
        Commands::Play => {
            let (profiles, user) = open_profiles(&cli, &config)?;
            let words = load_dictionary(&cli, &config)?;
            let hard_mode = cli.hard_mode || config.settings.hard_mode;
            run_tui(App::new(words, &profiles, user, hard_mode))
        }
    }
}

fn open_profiles(cli: &Cli, config: &AppConfig) -> Result<(Profiles, UserId)> {
    let player = cli.player.as_deref().unwrap_or(&config.player);
    let user = UserId::new(player)?;

    let store_config = if cli.no_save {
        StoreConfig::Memory
    } else {
        config.store.clone()
    };
    let store = open_store(&store_config)?;
    Ok((Profiles::new(store), user))
}

fn load_dictionary(cli: &Cli, config: &AppConfig) -> Result<Dictionary> {
    let selection = if let Some(target) = &cli.target {
        TargetSelection::Fixed(
            Word::new(target).with_context(|| format!("Invalid target '{target}'"))?,
        )
    } else if cli.daily {
        TargetSelection::Daily
    } else {
        config.target.clone()
    };
    build_dictionary(cli.wordlist.as_deref(), selection)
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target)?;
    println!();
    print_evaluation(&result.guess, &result.evaluation);
    println!("\n  {}", result.evaluation);
    Ok(())
}

fn run_settings_command(path: Option<&Path>, update: SettingsUpdate) -> Result<()> {
    let config = if update.is_empty() {
        AppConfig::load(path)?
    } else {
        let (config, written) = update_settings(path, update)?;
        println!("{} {}", "Saved".green().bold(), written.display());
        config
    };

    println!("\n{}", "Settings:".bright_cyan().bold());
    println!("   Player:     {}", config.player);
    println!("   Hard mode:  {}", config.settings.hard_mode);
    println!(
        "   Target:     {}",
        match config.target {
            TargetSelection::Daily => "daily",
            _ => "random",
        }
    );
    println!("   Store:      {}", describe_store(&config.store));
    Ok(())
}

fn describe_store(store: &StoreConfig) -> String {
    match store {
        StoreConfig::Memory => "memory".to_string(),
        StoreConfig::File { dir: Some(dir) } => format!("file ({})", dir.display()),
        StoreConfig::File { dir: None } => "file".to_string(),
        StoreConfig::Remote { url, .. } => format!("remote ({url})"),
    }
}

fn run_reset_command(profiles: &Profiles, user: &UserId, yes: bool) -> Result<()> {
    if !yes {
        print!("Reset all statistics for {user}? (yes/no): ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
            println!("Cancelled");
            return Ok(());
        }
    }

    reset_stats(profiles, user)?;
    println!("{} statistics for {user}", "Reset".green().bold());
    Ok(())
}
