//! Scorekeeper - Main Binary
//!
//! Line-based presentation shell over the session state. It renders the
//! read-only projection and translates typed commands into session
//! commands; all business rules stay in the core.

use clap::Parser;
use scorekeeper::{
    core::PlayerId,
    session::{Command, SessionState, SessionView, VerbosityLevel},
    Result,
};
use std::io::{self, BufRead, Write};

/// Verbosity level for session output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "sk")]
#[command(about = "Scorekeeper - score and turn tracker for party game sessions", long_about = None)]
struct Cli {
    /// Initial player names, comma separated (missing names are filled in,
    /// more than 8 are ignored)
    #[arg(long, value_delimiter = ',')]
    names: Vec<String>,

    /// Verbosity level (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "normal", short = 'v')]
    verbosity: VerbosityArg,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let name_refs: Vec<&str> = cli.names.iter().map(|s| s.as_str()).collect();
    let mut state = SessionState::with_names(&name_refs);
    state.logger.set_verbosity(cli.verbosity.into());

    state
        .logger
        .log(VerbosityLevel::Minimal, "session started (type 'help' for commands)");

    render(&state.view());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let editing = state.view().edit_state().is_some();
        if editing {
            print!("name> ");
        } else {
            print!("> ");
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;

        if editing {
            handle_edit_line(&mut state, &line);
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "q" {
            break;
        }
        handle_command_line(&mut state, trimmed);
    }

    state.logger.log(VerbosityLevel::Minimal, "session ended");
    Ok(())
}

/// Handle one input line while a rename is active
///
/// 'save' is the accept key, 'esc' the discard key; anything else
/// replaces the draft verbatim.
fn handle_edit_line(state: &mut SessionState, line: &str) {
    let text = line.trim_end_matches(['\r', '\n']);
    match text.trim() {
        "save" => {
            if !state.apply(&Command::CommitRename) {
                eprintln!("Name unchanged (blank names are discarded).");
            }
            render(&state.view());
        }
        "esc" => {
            state.apply(&Command::CancelRename);
            render(&state.view());
        }
        _ => {
            state.apply(&Command::UpdateDraft(text.to_string()));
            println!("Draft: {:?} ('save' to apply, 'esc' to discard)", text);
        }
    }
}

/// Parse a command line and apply the resulting session command
fn handle_command_line(state: &mut SessionState, input: &str) {
    let mut parts = input.split_whitespace();
    let verb = parts.next().unwrap_or("");

    let command = match verb {
        "add" => Some(Command::AddPlayer),
        "remove" | "rm" => parse_index(state, parts.next()).map(Command::RemovePlayer),
        "next" | "n" => Some(Command::AdvanceTurn),
        "+" => parse_index(state, parts.next()).map(|id| Command::AdjustScore { id, delta: 1 }),
        "-" => parse_index(state, parts.next()).map(|id| Command::AdjustScore { id, delta: -1 }),
        "edit" => parse_index(state, parts.next()).map(Command::BeginRename),
        "reset" => Some(Command::ResetScores),
        "show" | "s" => {
            render(&state.view());
            return;
        }
        "help" | "?" => {
            print_help();
            return;
        }
        _ => {
            eprintln!("Unknown command '{}' (type 'help' for commands).", verb);
            return;
        }
    };

    let Some(command) = command else {
        return; // parse_index already reported the problem
    };

    let applied = state.apply(&command);
    if !applied {
        eprintln!("Cannot {} right now.", command);
    }

    // A fresh rename gets its own prompt instead of a roster dump
    if applied && matches!(command, Command::BeginRename(_)) {
        if let Some((_, draft)) = state.view().edit_state() {
            println!("Editing {:?}: type the new name, then 'save' or 'esc'.", draft);
        }
        return;
    }
    render(&state.view());
}

/// Translate a 1-based display position into a player id
fn parse_index(state: &SessionState, arg: Option<&str>) -> Option<PlayerId> {
    let view = state.view();
    let Some(arg) = arg else {
        eprintln!("Missing player number (1-{}).", view.player_count());
        return None;
    };
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= view.player_count() => Some(view.roster()[n - 1].id),
        _ => {
            eprintln!(
                "Invalid player number '{}' (expected 1-{}).",
                arg,
                view.player_count()
            );
            None
        }
    }
}

/// Render the projection: turn banner, roster, stats line
fn render(view: &SessionView) {
    println!();
    println!("=== Turn: {} ===", view.current_player().name);
    for (index, player) in view.roster().iter().enumerate() {
        let marker = if index == view.current_turn_index() {
            ">"
        } else {
            " "
        };
        println!(
            "{} {}. {:<20} {:>3}",
            marker,
            index + 1,
            player.name.as_str(),
            player.score
        );
    }
    println!(
        "players: {}/8 | max: {} | total: {}",
        view.player_count(),
        view.max_score(),
        view.total_score()
    );
}

fn print_help() {
    println!("\n=== Commands ===");
    println!("  add          - add a player (up to 8)");
    println!("  remove <n>   - remove player n (down to 2)");
    println!("  next         - advance the turn");
    println!("  + <n>        - give player n a point");
    println!("  - <n>        - take a point from player n (floor 0)");
    println!("  edit <n>     - rename player n ('save' applies, 'esc' discards)");
    println!("  reset        - zero all scores");
    println!("  show         - redraw the board");
    println!("  quit         - exit");
}
