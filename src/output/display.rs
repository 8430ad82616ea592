//! Display functions for command results

use super::formatters::{distribution_bar, evaluation_row, keyboard_rows};
use crate::core::{Evaluation, KeyboardState, Word};
use crate::stats::{Achievement, GameRecord, PlayerStatistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print one evaluated guess as tiles plus its emoji row
pub fn print_evaluation(guess: &Word, evaluation: &Evaluation) {
    println!("  {}   {}", evaluation_row(guess, evaluation), evaluation.to_emoji());
}

/// Write the keyboard hint rows between blank lines
///
/// # Errors
/// Returns any error from `out`.
pub fn write_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardState) -> io::Result<()> {
    writeln!(out)?;
    for row in keyboard_rows(keyboard) {
        writeln!(out, "    {row}")?;
    }
    writeln!(out)
}

/// Print a player's statistics panel
pub fn print_stats(player: &str, stats: &PlayerStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STATISTICS:".bright_cyan().bold(),
        player.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Played:           {}", stats.games_played);
    println!(
        "   Win %:            {}",
        stats.win_percentage().to_string().bright_yellow().bold()
    );
    println!("   Current streak:   {}", stats.current_streak);
    println!("   Max streak:       {}", stats.max_streak);
    println!(
        "   Average guesses:  {}",
        format!("{:.1}", stats.average_guesses).bright_yellow()
    );
    if let Some(last) = stats.last_played {
        println!("   Last played:      {}", last.format("%Y-%m-%d %H:%M UTC"));
    }

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.max_distribution();
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = distribution_bar(count, max, 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }

    println!("\n🏅 {}", "Achievements:".bright_cyan().bold());
    for achievement in Achievement::ALL {
        print_achievement(achievement, stats.has_achievement(achievement));
    }
    println!();
}

/// Print the most recent games, one line each
pub fn print_history(games: &[GameRecord]) {
    if games.is_empty() {
        return;
    }

    println!("🕘 {}", "Recent games:".bright_cyan().bold());
    for game in games {
        let result = if game.won {
            format!("{}/6", game.guesses).green().bold()
        } else {
            "X/6".red().bold()
        };
        println!(
            "   {}  {}  {result}  {}",
            game.timestamp.format("%Y-%m-%d"),
            game.word.bright_white().bold(),
            game.attempts.join(" ").bright_black()
        );
    }
    println!();
}

fn print_achievement(achievement: Achievement, unlocked: bool) {
    if unlocked {
        println!(
            "   {} {} - {}",
            "✓".green().bold(),
            achievement.title().bright_white().bold(),
            achievement.description()
        );
    } else {
        println!(
            "   {} {}",
            "·".bright_black(),
            achievement.title().bright_black()
        );
    }
}

/// Announce achievements unlocked by the game just finished
///
/// # Errors
/// Returns any error from `out`.
pub fn write_unlocked<W: Write>(out: &mut W, unlocked: &[Achievement]) -> io::Result<()> {
    for achievement in unlocked {
        writeln!(
            out,
            "  🏆 {} {}",
            "Achievement unlocked:".bright_yellow().bold(),
            achievement.title().bright_white().bold()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_rows_are_indented() {
        colored::control::set_override(false);

        let mut out = Vec::new();
        write_keyboard(&mut out, &KeyboardState::new()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "    Q W E R T Y U I O P");
        assert!(lines[0].is_empty() && lines[4].is_empty());
    }

    #[test]
    fn one_line_per_unlocked_achievement() {
        colored::control::set_override(false);

        let mut out = Vec::new();
        write_unlocked(&mut out, &[Achievement::FirstVictory, Achievement::WordWizard]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Achievement unlocked: First Victory"));

        let mut none = Vec::new();
        write_unlocked(&mut none, &[]).unwrap();
        assert!(none.is_empty());
    }
}
