//! The read-eval loop. One `Game` is owned by the loop and lent to each
//! command handler.

use std::io::{BufRead, Write};

use anyhow::Result;
use chess_core::{ChessError, Game, GameStatus, Side, load_from_path, save_to_path};
use tracing::{debug, warn};

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::render::{render_board, square_list};

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Print the board again before the next prompt.
    Redraw,
    /// Just prompt.
    Continue,
    Exit,
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::White => "White",
        Side::Black => "Black",
    }
}

/// Apply one command to `game`, writing any feedback to `out`.
///
/// Rule violations and file problems are reported to the user and are not
/// errors here; only a failing `out` is.
pub fn handle(game: &mut Game, cmd: Command, config: &Config, out: &mut dyn Write) -> Result<Flow> {
    let flow = match cmd {
        Command::Exit => Flow::Exit,
        Command::Help => {
            writeln!(out, "{HELP}")?;
            Flow::Continue
        }
        Command::Board => Flow::Redraw,
        Command::Move { from, to } => match game.try_move(from, to) {
            Ok(outcome) => {
                match outcome.status {
                    GameStatus::Check(_) => writeln!(out, "Check!")?,
                    GameStatus::Checkmate { winner, plies } => {
                        writeln!(out, "Checkmate! {} wins!", side_name(winner))?;
                        writeln!(out, "Moves played: {plies}")?;
                    }
                    GameStatus::InProgress => {}
                }
                Flow::Redraw
            }
            Err(ChessError::GameOver { winner }) => {
                writeln!(
                    out,
                    "The game is over, {} won. Use back, load or exit.",
                    side_name(winner)
                )?;
                Flow::Continue
            }
            Err(e) => {
                writeln!(out, "Illegal move: {e}. Try again.")?;
                Flow::Continue
            }
        },
        Command::Back => match game.undo() {
            Some(_) => Flow::Redraw,
            None => {
                writeln!(out, "Nothing to take back.")?;
                Flow::Continue
            }
        },
        Command::Next => match game.redo() {
            Some(_) => Flow::Redraw,
            None => {
                writeln!(out, "Nothing to replay.")?;
                Flow::Continue
            }
        },
        Command::Hint(sq) => {
            let dests = if config.hints.filter_self_check {
                game.legal_destinations_from(sq)
            } else {
                game.pseudo_destinations_from(sq)
            };
            match dests {
                Ok(mut dests) => {
                    dests.sort();
                    writeln!(out, "{}", render_board(game.board(), &dests, &config.display))?;
                    if dests.is_empty() {
                        writeln!(out, "The piece on {sq} has no moves.")?;
                    } else {
                        writeln!(out, "Moves from {sq}: {}", square_list(&dests))?;
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            }
            Flow::Continue
        }
        Command::Threats(sq) => {
            match game.attackers_of(sq) {
                Ok(attackers) => {
                    writeln!(
                        out,
                        "{}",
                        render_board(game.board(), &attackers, &config.display)
                    )?;
                    if attackers.is_empty() {
                        writeln!(out, "The piece on {sq} is not under attack.")?;
                    } else {
                        writeln!(out, "The piece on {sq} is attacked by:")?;
                        for a in &attackers {
                            if let Some(pc) = game.board().piece_at(*a) {
                                writeln!(out, "{pc} on {a}")?;
                            }
                        }
                    }
                }
                Err(e) => writeln!(out, "{e}")?,
            }
            Flow::Continue
        }
        Command::Save(path) => {
            match save_to_path(game, &path) {
                Ok(()) => writeln!(out, "Game saved to {}", path.display())?,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "save failed");
                    writeln!(out, "Could not save the game: {e}")?;
                }
            }
            Flow::Continue
        }
        Command::Load(path) => match load_from_path(&path) {
            Ok(loaded) => {
                *game = loaded;
                writeln!(out, "Game loaded from {}", path.display())?;
                Flow::Redraw
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed");
                writeln!(out, "Could not load the game: {e}")?;
                Flow::Continue
            }
        },
    };
    Ok(flow)
}

fn prompt(game: &Game, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{} to move. Enter a move (e.g. e2 e4) or a command (back, next, hint, threats, save, load, exit):",
        side_name(game.side_to_move())
    )?;
    out.flush()?;
    Ok(())
}

/// Run commands from `input` until `exit` or end of input.
///
/// Returns the game as it stood when the loop ended.
pub fn run(mut game: Game, input: &mut dyn BufRead, out: &mut dyn Write, config: &Config) -> Result<Game> {
    writeln!(out, "{}", render_board(game.board(), &[], &config.display))?;
    prompt(&game, out)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            break;
        }
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                prompt(&game, out)?;
                continue;
            }
        };
        debug!(?cmd, "command");

        match handle(&mut game, cmd, config, out)? {
            Flow::Exit => break,
            Flow::Redraw => {
                writeln!(out, "{}", render_board(game.board(), &[], &config.display))?;
            }
            Flow::Continue => {}
        }
        prompt(&game, out)?;
    }
    Ok(game)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
