//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Reads guesses from any `BufRead` so the
//! loop can be driven from tests.

use crate::game::{Game, GameState};
use crate::output::formatters::evaluation_row;
use crate::output::{write_keyboard, write_unlocked};
use crate::profile::{ProfileError, Profiles};
use crate::stats::{GameOutcome, GameRecord, MAX_GUESSES};
use crate::store::UserId;
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run line-mode games until the player quits or input ends
///
/// Returns the outcome of every finished game.
///
/// # Errors
/// Returns an error on I/O failure or if a new target cannot be drawn.
pub fn run_simple<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    words: &mut Dictionary,
    profiles: &Profiles,
    user: &UserId,
    hard_mode: bool,
) -> Result<Vec<GameOutcome>> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Wordle Mates - Line Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in {MAX_GUESSES} tries.")?;
    if hard_mode {
        writeln!(out, "{}", "Hard mode: revealed hints must be reused.".yellow())?;
    }
    writeln!(out, "Commands: 'quit' to exit, 'new' to give up and start over\n")?;

    let mut outcomes = Vec::new();
    let mut game = Game::from_source(&*words, hard_mode);

    loop {
        let prompt = format!("Guess {}/{MAX_GUESSES}", game.turns().len() + 1);
        let Some(line) = read_line(&mut input, out, &prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(outcomes);
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(outcomes);
            }
            "new" | "n" => {
                writeln!(out, "The word was {}", game.target().text().bright_yellow())?;
                words.next_target()?;
                game = Game::from_source(&*words, hard_mode);
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        match game.submit(&line, &*words) {
            Ok(turn) => {
                writeln!(
                    out,
                    "  {}   {}",
                    evaluation_row(&turn.guess, &turn.evaluation),
                    turn.evaluation.to_emoji()
                )?;
            }
            Err(e) => {
                writeln!(out, "❌ {e}")?;
                continue;
            }
        }

        if !game.is_over() {
            write_keyboard(out, game.keyboard())?;
            continue;
        }

        write_result(out, &game)?;
        if let Some(finished) = game.record() {
            record(out, profiles, user, &finished)?;
            outcomes.push(finished.outcome());
        }

        let again = read_line(&mut input, out, "Play again? (yes/no)")?;
        let again = again.map(|answer| answer.to_lowercase());
        if !matches!(again.as_deref(), Some("yes" | "y")) {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(outcomes);
        }

        words.next_target()?;
        game = Game::from_source(&*words, hard_mode);
        writeln!(out, "\n🔄 New game started!\n")?;
    }
}

fn write_result<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match game.state() {
        GameState::Won => {
            let used = game.turns().len();
            writeln!(
                out,
                "{}",
                "    🎉  S O L V E D !  🎉    ".bright_green().bold()
            )?;
            writeln!(
                out,
                "\n  Solved in {} {}",
                used.to_string().bright_cyan().bold(),
                if used == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameState::Lost | GameState::InProgress => {
            writeln!(out, "{}", "    Out of guesses    ".bright_red().bold())?;
            writeln!(
                out,
                "\n  The word was {}",
                game.target().text().bright_yellow().bold()
            )?;
        }
    }

    writeln!(out, "\n  Guess history:")?;
    for (i, turn) in game.turns().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            turn.guess.text().bright_white().bold(),
            turn.evaluation.to_emoji()
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;
    Ok(())
}

fn record<W: Write>(
    out: &mut W,
    profiles: &Profiles,
    user: &UserId,
    finished: &GameRecord,
) -> Result<()> {
    match profiles.record_game(user, finished) {
        Ok(recorded) => {
            writeln!(
                out,
                "  Played {}  Win % {}  Streak {}",
                recorded.stats.games_played,
                recorded.stats.win_percentage(),
                recorded.stats.current_streak
            )?;
            write_unlocked(out, &recorded.unlocked)?;
        }
        Err(ProfileError::Persistence { pending, source }) => {
            writeln!(
                out,
                "  {} {source} (played {}, streak {})",
                "Statistics not saved:".red(),
                pending.games_played,
                pending.current_streak
            )?;
        }
        Err(e) => writeln!(out, "  {} {e}", "Statistics not updated:".red())?,
    }
    writeln!(out)?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::store::MemoryStore;
    use crate::wordlists::TargetSelection;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn dictionary(target: &str) -> Dictionary {
        Dictionary::new(
            words_from_slice(&["plane", "slate", "place", "crane"]),
            words_from_slice(&["audio", "lemon", "robot", "steam"]),
            TargetSelection::Fixed(Word::new(target).unwrap()),
        )
        .unwrap()
    }

    fn play(script: &str, hard_mode: bool) -> (Vec<GameOutcome>, String, Profiles) {
        colored::control::set_override(false);
        let mut words = dictionary("plane");
        let profiles = Profiles::new(Box::new(MemoryStore::new()));
        let user = UserId::new("tester").unwrap();
        let mut out = Vec::new();

        let outcomes = run_simple(
            Cursor::new(script.to_string()),
            &mut out,
            &mut words,
            &profiles,
            &user,
            hard_mode,
        )
        .unwrap();
        (outcomes, String::from_utf8(out).unwrap(), profiles)
    }

    #[test]
    fn winning_game_is_recorded() {
        let (outcomes, out, profiles) = play("slate\nplace\nplane\nno\n", false);

        assert_eq!(outcomes, vec![GameOutcome::win(3)]);
        assert!(out.contains("Solved in 3 guesses"));
        assert!(out.contains("First Victory"));

        let stats = profiles.stats(&UserId::new("tester").unwrap()).unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn invalid_guesses_are_reported_and_retried() {
        let (outcomes, out, _) = play("pla\nzzzzz\nplane\nn\n", false);

        assert!(out.contains("5 letters"));
        assert!(out.contains("ZZZZZ is not in the word list"));
        assert_eq!(outcomes, vec![GameOutcome::win(1)]);
    }

    #[test]
    fn losing_reveals_the_word() {
        let (outcomes, out, _) = play("slate\ncrane\naudio\nlemon\nrobot\nsteam\nno\n", false);

        assert_eq!(outcomes, vec![GameOutcome::loss()]);
        assert!(out.contains("The word was PLANE"));
    }

    #[test]
    fn play_again_starts_a_new_game() {
        let (outcomes, _, profiles) = play("plane\nyes\nslate\nplane\nno\n", false);

        assert_eq!(outcomes, vec![GameOutcome::win(1), GameOutcome::win(2)]);
        let user = UserId::new("tester").unwrap();
        assert_eq!(profiles.stats(&user).unwrap().current_streak, 2);

        let history = profiles.games(&user).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].attempts, ["SLATE", "PLANE"]);
    }

    #[test]
    fn hard_mode_messages_are_shown() {
        let (_, out, _) = play("slate\ncrane\nquit\n", true);
        assert!(out.contains("2nd letter must be L"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (outcomes, out, _) = play("slate\n", false);
        assert!(outcomes.is_empty());
        assert!(out.contains("Thanks for playing"));
    }
}
