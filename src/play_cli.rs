//! Terminal front end: one command per line.
//!
//! `w`/`a`/`s`/`d` or `up`/`left`/`down`/`right` slide the board, `n` starts
//! a new game, `q` quits. Anything else is ignored.

use crate::data::ResultRecord;
use crate::services::{GameController, GameView, MoveOutcome};
use crate::Result;
use std::io::{BufRead, Write};

fn render<W: Write>(view: &GameView, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}  score: {}  turns: {}", view.player_name, view.score, view.turns)?;
    write!(out, "{}", view.grid)?;
    Ok(())
}

fn render_history<W: Write>(history: &[ResultRecord], out: &mut W) -> Result<()> {
    if history.is_empty() {
        return Ok(());
    }
    writeln!(out, "Past games:")?;
    for record in history {
        writeln!(out, "  {} pts - {}", record.final_score, record.timestamp)?;
    }
    Ok(())
}

/// Runs until `q` or end of input. Returns the number of finished games.
pub fn play_in_terminal<R: BufRead, W: Write>(
    controller: &mut GameController,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let mut finished = 0;
    render(&controller.view(), out)?;
    writeln!(out, "Move with w/a/s/d, n for a new game, q to quit.")?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "q" | "quit" => break,
            "n" | "new" => {
                controller.new_game();
                render(&controller.view(), out)?;
                continue;
            }
            _ => {}
        }

        match controller.handle_input(command) {
            MoveOutcome::Ignored => {
                if controller.session().is_game_over() {
                    writeln!(out, "Game over. Press n to play again.")?;
                }
            }
            MoveOutcome::Moved { .. } => render(&controller.view(), out)?,
            MoveOutcome::GameOver(record) => {
                finished += 1;
                let view = controller.view();
                render(&view, out)?;
                writeln!(out, "Game over 💀  final score: {}", record.final_score)?;
                render_history(&view.recent_history, out)?;
                writeln!(out, "Press n to play again, q to quit.")?;
            }
        }
    }

    out.flush()?;
    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{shared_store, MemoryStore};
    use crate::game::{FixedTileSource, RandomTileSource};
    use std::io::Cursor;

    #[test]
    fn test_quit_immediately() {
        let store = shared_store(MemoryStore::new());
        let mut controller =
            GameController::new("ada", Box::new(FixedTileSource::first_two()), store).unwrap();
        let mut out = Vec::new();

        let finished = play_in_terminal(&mut controller, Cursor::new("q\na\n"), &mut out).unwrap();

        assert_eq!(finished, 0);
        assert_eq!(controller.view().turns, 0, "Input after q must not be read");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ada  score: 0"));
    }

    #[test]
    fn test_moves_and_garbage() {
        let store = shared_store(MemoryStore::new());
        let mut controller =
            GameController::new("ada", Box::new(FixedTileSource::first_two()), store).unwrap();
        let mut out = Vec::new();

        play_in_terminal(&mut controller, Cursor::new("xyz\na\n\n"), &mut out).unwrap();

        assert_eq!(controller.view().score, 4);
        assert_eq!(controller.view().turns, 1);
    }

    #[test]
    fn test_plays_a_full_game() {
        let store = shared_store(MemoryStore::new());
        let mut controller =
            GameController::new("bot", Box::new(RandomTileSource::from_seed(21)), store).unwrap();
        let script = "a\nd\nw\ns\n".repeat(20_000);
        let mut out = Vec::new();

        let finished = play_in_terminal(&mut controller, Cursor::new(script), &mut out).unwrap();

        assert_eq!(finished, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("final score"));
        assert!(text.contains("Past games:"));
    }
}
