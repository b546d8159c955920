//! Parsing of one input line into a command.

use std::path::PathBuf;

use anyhow::{Result, bail};
use chess_core::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `move e2 e4`, or just `e2 e4`
    Move { from: Square, to: Square },
    /// `back`: take back the last move
    Back,
    /// `next`: replay a taken-back move
    Next,
    Hint(Square),
    Threats(Square),
    Save(PathBuf),
    Load(PathBuf),
    Board,
    Help,
    Exit,
}

pub const HELP: &str = "\
Commands:
  move <from> <to>   play a move (the word 'move' may be omitted), e.g. e2 e4
  back               take back the last move
  next               replay a move taken back
  hint <square>      show where the piece on <square> can go
  threats <square>   show enemy pieces attacking <square>
  save <file>        write the game to <file>
  load <file>        replace the game with the one in <file>
  board              print the board again
  help               show this text
  exit               quit";

fn square_arg(cmd: &str, arg: Option<&str>) -> Result<Square> {
    match arg {
        Some(a) => Ok(a.parse::<Square>()?),
        None => bail!("'{cmd}' needs a square, e.g. {cmd} e2"),
    }
}

fn file_arg(cmd: &str, rest: &str) -> Result<PathBuf> {
    if rest.is_empty() {
        bail!("'{cmd}' needs a file name");
    }
    Ok(PathBuf::from(rest))
}

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        let Some((word, rest)) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .or_else(|| (!line.is_empty()).then_some((line, "")))
        else {
            return Ok(None);
        };
        let args: Vec<&str> = rest.split_whitespace().collect();
        let keyword = word.to_ascii_lowercase();

        let cmd = match keyword.as_str() {
            "exit" | "quit" => Command::Exit,
            "back" | "undo" => Command::Back,
            "next" | "redo" => Command::Next,
            "board" => Command::Board,
            "help" | "?" => Command::Help,
            "hint" => Command::Hint(square_arg("hint", args.first().copied())?),
            "threats" => Command::Threats(square_arg("threats", args.first().copied())?),
            "save" => Command::Save(file_arg("save", rest)?),
            "load" => Command::Load(file_arg("load", rest)?),
            "move" => match args.as_slice() {
                [from, to] => Command::Move {
                    from: from.parse()?,
                    to: to.parse()?,
                },
                _ => bail!("usage: move <from> <to>"),
            },
            _ => match (word.parse::<Square>(), args.as_slice()) {
                (Ok(from), [to]) => Command::Move {
                    from,
                    to: to.parse()?,
                },
                _ => bail!("unknown command {word:?}, type 'help'"),
            },
        };
        Ok(Some(cmd))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
