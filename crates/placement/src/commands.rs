//! Line-oriented configuration commands for the locators.
//!
//! Each non-empty line holds one command followed by whitespace separated
//! arguments. Text after `#` is a comment.
//!
//! | Command | Arguments | Effect |
//! |---------|-----------|--------|
//! | `contourlabelmindistsamevalue` | d | label same-value distance |
//! | `contourlabelmindistdifferentvalue` | d | label different-value distance |
//! | `contourlabelmindistdifferentparam` | d | label different-parameter distance |
//! | `contourfontmindistsamevalue` | d | font same-value distance |
//! | `contourfontmindistdifferentvalue` | d | font different-value distance |
//! | `contourfontmindistdifferentparam` | d | font different-parameter distance |
//! | `contoursymbolmindist` | d | all three symbol image distances |
//! | `pressuremindistsame` | d | same-kind marker distance |
//! | `pressuremindistdifferent` | d | high/low marker distance |
//! | `contourlabelimagemargin` | dx dy | label box inset |
//! | `clear` | contours \| labels \| pressure | forget locations |

use std::str::FromStr;

use chart_common::LocatorError;
use thiserror::Error;
use tracing::debug;

use crate::locators::LocatorSet;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {command} requires {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid argument '{value}' for {command}")]
    InvalidArgument {
        line: usize,
        command: String,
        value: String,
    },

    #[error("line {line}: unexpected extra argument '{value}' for {command}")]
    UnexpectedArgument {
        line: usize,
        command: String,
        value: String,
    },

    #[error("line {line}: {command} failed: {source}")]
    Locator {
        line: usize,
        command: String,
        #[source]
        source: LocatorError,
    },
}

impl CommandError {
    /// 1-based script line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            CommandError::UnknownCommand { line, .. }
            | CommandError::MissingArgument { line, .. }
            | CommandError::InvalidArgument { line, .. }
            | CommandError::UnexpectedArgument { line, .. }
            | CommandError::Locator { line, .. } => *line,
        }
    }
}

/// Apply every command of a script. Returns the number of commands applied.
pub fn apply_script(set: &mut LocatorSet, script: &str) -> Result<usize, CommandError> {
    let mut applied = 0;
    for (index, line) in script.lines().enumerate() {
        if apply_command(set, line, index + 1)? {
            applied += 1;
        }
    }
    debug!(applied, "Applied placement script");
    Ok(applied)
}

/// Apply a single command line.
///
/// Returns `Ok(false)` for blank and comment-only lines.
pub fn apply_command(
    set: &mut LocatorSet,
    text: &str,
    line: usize,
) -> Result<bool, CommandError> {
    let content = text.split('#').next().unwrap_or_default();
    let mut words = content.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(false);
    };

    let mut args = Arguments {
        words,
        line,
        command,
    };

    let result = match command {
        "contourlabelmindistsamevalue" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.labels.set_min_distance_to_same_value(d)
        }
        "contourlabelmindistdifferentvalue" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.labels.set_min_distance_to_different_value(d)
        }
        "contourlabelmindistdifferentparam" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.labels.set_min_distance_to_different_parameter(d)
        }
        "contourfontmindistsamevalue" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.symbols.set_min_distance_to_same_value(d)
        }
        "contourfontmindistdifferentvalue" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.symbols.set_min_distance_to_different_value(d)
        }
        "contourfontmindistdifferentparam" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.symbols.set_min_distance_to_different_parameter(d)
        }
        "contoursymbolmindist" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.images
                .set_min_distance_to_different_parameter(d)
                .and_then(|_| set.images.set_min_distance_to_different_value(d))
                .and_then(|_| set.images.set_min_distance_to_same_value(d))
        }
        "pressuremindistsame" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.pressure.set_min_distance_to_same(d)
        }
        "pressuremindistdifferent" => {
            let d = args.number("a distance")?;
            args.finish()?;
            set.pressure.set_min_distance_to_different(d)
        }
        "contourlabelimagemargin" => {
            let dx = args.number("x and y margins")?;
            let dy = args.number("x and y margins")?;
            args.finish()?;
            set.set_label_margin(dx, dy);
            Ok(())
        }
        "clear" => {
            let target = args.word("contours, labels or pressure")?;
            args.finish()?;
            match target {
                "contours" => set.clear_contours(),
                "labels" => set.clear_labels(),
                "pressure" => set.clear_pressure(),
                other => return Err(args.invalid(other)),
            }
            Ok(())
        }
        other => {
            return Err(CommandError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };

    result.map_err(|source| CommandError::Locator {
        line,
        command: command.to_string(),
        source,
    })?;

    debug!(line, command, "Applied placement command");
    Ok(true)
}

struct Arguments<'a, I> {
    words: I,
    line: usize,
    command: &'a str,
}

impl<'a, I: Iterator<Item = &'a str>> Arguments<'a, I> {
    fn word(&mut self, expected: &'static str) -> Result<&'a str, CommandError> {
        self.words.next().ok_or_else(|| CommandError::MissingArgument {
            line: self.line,
            command: self.command.to_string(),
            expected,
        })
    }

    fn number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, CommandError> {
        let word = self.word(expected)?;
        word.parse().map_err(|_| self.invalid(word))
    }

    fn finish(&mut self) -> Result<(), CommandError> {
        match self.words.next() {
            None => Ok(()),
            Some(extra) => Err(CommandError::UnexpectedArgument {
                line: self.line,
                command: self.command.to_string(),
                value: extra.to_string(),
            }),
        }
    }

    fn invalid(&self, value: &str) -> CommandError {
        CommandError::InvalidArgument {
            line: self.line,
            command: self.command.to_string(),
            value: value.to_string(),
        }
    }
}
