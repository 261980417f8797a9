//! Terminal number guessing game

use std::io::{self, BufRead, Write};

use colored::Colorize;
use dicebox_core::{GuessGame, Hint};

/// Play `game` reading guesses line by line from `input`.
///
/// Returns the number of attempts once solved, or `None` if the player quit
/// (`q`) or the input ran out.
pub fn play_guess(
    game: &mut GuessGame,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<u32>> {
    let (low, high) = game.range();
    writeln!(
        out,
        "I'm thinking of a number between {} and {}. (q to give up)",
        low, high
    )?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let entry = line.trim();

        if entry.eq_ignore_ascii_case("q") {
            writeln!(out, "The number was {}.", game.secret().to_string().cyan())?;
            return Ok(None);
        }

        match entry.parse::<u32>() {
            Ok(value) => match game.guess(value) {
                Ok(Hint::TooLow) => writeln!(out, "{}", "Too low!".yellow())?,
                Ok(Hint::TooHigh) => writeln!(out, "{}", "Too high!".yellow())?,
                Ok(Hint::Correct { attempts }) => {
                    writeln!(
                        out,
                        "{} You found {} in {} attempts.",
                        "Correct!".bright_green().bold(),
                        value,
                        attempts
                    )?;
                    return Ok(Some(attempts));
                }
                Err(e) => writeln!(out, "{} {}", "Error:".red().bold(), e)?,
            },
            Err(_) => writeln!(
                out,
                "{} '{}' is not a whole number",
                "Error:".red().bold(),
                entry
            )?,
        }
        prompt(out)?;
    }

    Ok(None)
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{} ", "Your guess:".bold())?;
    out.flush()
}
