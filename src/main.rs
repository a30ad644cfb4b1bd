use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, warn};

use launcher::config::{load_config, Config};
use launcher::{Activation, ApplicationEntry, CatalogBuilder, Session, ShellLauncher};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Scan DIR instead of the configured directories (repeatable)
    #[arg(short, long = "dir", value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the applications whose name contains QUERY
    List {
        #[arg(default_value = "")]
        query: String,
        /// Print JSON instead of name/command lines
        #[arg(long)]
        json: bool,
    },
    /// Launch the first application whose name contains QUERY
    Launch { query: String },
    /// Print the directories scanned for desktop entries, in scan order
    Dirs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let dirs = if args.dirs.is_empty() { config.search_dirs() } else { args.dirs.clone() };

    match args.command {
        Some(Cmd::Dirs) => {
            for dir in &dirs {
                println!("{}", dir.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Cmd::List { query, json }) => {
            let (mut session, _) = open_session(&config, dirs);
            session.update_query(&query);
            let visible: Vec<&ApplicationEntry> = session.visible().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for entry in visible {
                    println!("{}\t{}", entry.name, entry.command);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Cmd::Launch { query }) => {
            let (mut session, launcher) = open_session(&config, dirs);
            session.update_query(&query);
            match session.activate(&launcher) {
                Activation::Empty => {
                    warn!("No application matches {:?}", query);
                    Ok(ExitCode::FAILURE)
                }
                Activation::Launched(_) | Activation::Failed(_) => Ok(ExitCode::SUCCESS),
            }
        }
        None => {
            let (mut session, launcher) = open_session(&config, dirs);
            interactive(&mut session, &launcher)
        }
    }
}

fn open_session(config: &Config, dirs: Vec<PathBuf>) -> (Session, ShellLauncher) {
    let entries = CatalogBuilder::from_config_with_dirs(config, dirs).build();
    let session = Session::new(entries, config.filter.mode);
    (session, ShellLauncher::new(config.general.shell.clone()))
}

/// Line-driven session: each line replaces the query, an empty line launches
/// the selection, `:N` launches entry N, `:q` or end of input quits.
fn interactive(session: &mut Session, launcher: &ShellLauncher) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    print_view(&mut stdout, session)?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let input = line.trim_end_matches(['\r', '\n']);

        if input.is_empty() {
            if session.activate(launcher) != Activation::Empty {
                break;
            }
        } else if input == ":q" {
            break;
        } else if let Some(number) = input.strip_prefix(':').and_then(|n| n.parse::<usize>().ok()) {
            if number > 0 && session.select(number - 1) {
                session.activate(launcher);
                break;
            }
            warn!("No entry {} in the current view", number);
        } else {
            session.update_query(input);
        }
        print_view(&mut stdout, session)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn print_view(out: &mut impl Write, session: &Session) -> io::Result<()> {
    for (i, entry) in session.visible().enumerate() {
        let marker = if i == session.selected_index() { '>' } else { ' ' };
        writeln!(out, "{} {:>3}  {}", marker, i + 1, entry.name)?;
    }
    write!(out, "[{}] {}> ", session.visible_len(), session.query())?;
    out.flush()
}
