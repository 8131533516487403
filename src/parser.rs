use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::Bounds;
use crate::heading::{Command, Direction, Pose};

static DIMENSIONS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+) (\d+)$").unwrap());
static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+) (\d+) ([NESW])$").unwrap());
static COMMANDS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[LRF]*$").unwrap());

/// Which kind of line the parser was expecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
	Dimensions,
	Position,
	Commands,
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Stage::Dimensions => "Dimensions",
			Stage::Position => "Position",
			Stage::Commands => "Commands",
		};
		f.write_str(name)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("Parse error: Dimensions: {0}")]
	Dimensions(String),
	#[error("Parse error: Position: {0}")]
	Position(String),
	#[error("Parse error: Commands: {0}")]
	Commands(String),
}

impl ParseError {
	fn at(stage: Stage, line: &str) -> Self {
		match stage {
			Stage::Dimensions => ParseError::Dimensions(line.to_string()),
			Stage::Position => ParseError::Position(line.to_string()),
			Stage::Commands => ParseError::Commands(line.to_string()),
		}
	}

	pub fn stage(&self) -> Stage {
		match self {
			ParseError::Dimensions(_) => Stage::Dimensions,
			ParseError::Position(_) => Stage::Position,
			ParseError::Commands(_) => Stage::Commands,
		}
	}

	/// The raw input line that failed to parse.
	pub fn line(&self) -> &str {
		match self {
			ParseError::Dimensions(l) | ParseError::Position(l) | ParseError::Commands(l) => l,
		}
	}
}

fn number(digits: &str, stage: Stage, line: &str) -> Result<u32, ParseError> {
	digits.parse().map_err(|_| ParseError::at(stage, line))
}

pub fn parse_dimensions(line: &str) -> Result<Bounds, ParseError> {
	let caps = DIMENSIONS_RE
		.captures(line)
		.ok_or_else(|| ParseError::at(Stage::Dimensions, line))?;
	let width = number(&caps[1], Stage::Dimensions, line)?;
	let height = number(&caps[2], Stage::Dimensions, line)?;
	Ok(Bounds::new(width, height))
}

pub fn parse_position(line: &str) -> Result<Pose, ParseError> {
	let caps = POSITION_RE
		.captures(line)
		.ok_or_else(|| ParseError::at(Stage::Position, line))?;
	let x = number(&caps[1], Stage::Position, line)?;
	let y = number(&caps[2], Stage::Position, line)?;
	let facing = caps[3]
		.chars()
		.next()
		.and_then(Direction::from_char)
		.ok_or_else(|| ParseError::at(Stage::Position, line))?;
	Ok(Pose::new(i64::from(x), i64::from(y), facing))
}

pub fn parse_commands(line: &str) -> Result<Vec<Command>, ParseError> {
	if !COMMANDS_RE.is_match(line) {
		return Err(ParseError::at(Stage::Commands, line));
	}
	line.chars()
		.map(|c| Command::from_char(c).ok_or_else(|| ParseError::at(Stage::Commands, line)))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dimensions_line() {
		assert_eq!(parse_dimensions("5 3").unwrap(), Bounds::new(5, 3));
		assert_eq!(parse_dimensions("0 0").unwrap(), Bounds::new(0, 0));
	}

	#[test]
	fn malformed_dimensions_name_the_stage_and_line() {
		let err = parse_dimensions("abc").unwrap_err();
		assert_eq!(err.stage(), Stage::Dimensions);
		assert_eq!(err.line(), "abc");
		let msg = err.to_string();
		assert!(msg.contains("Dimensions"));
		assert!(msg.contains("abc"));
	}

	#[test]
	fn dimensions_reject_extra_spacing_and_signs() {
		assert!(parse_dimensions("5  3").is_err());
		assert!(parse_dimensions(" 5 3").is_err());
		assert!(parse_dimensions("-5 3").is_err());
		assert!(parse_dimensions("5 3 N").is_err());
	}

	#[test]
	fn oversized_number_is_a_parse_error() {
		let err = parse_dimensions("99999999999 3").unwrap_err();
		assert_eq!(err, ParseError::Dimensions("99999999999 3".into()));
	}

	#[test]
	fn position_line() {
		assert_eq!(parse_position("1 1 E").unwrap(), Pose::new(1, 1, Direction::E));
		let err = parse_position("1 1 X").unwrap_err();
		assert_eq!(err.to_string(), "Parse error: Position: 1 1 X");
	}

	#[test]
	fn commands_line() {
		assert_eq!(
			parse_commands("LRF").unwrap(),
			vec![Command::L, Command::R, Command::F]
		);
		assert!(parse_commands("").unwrap().is_empty());
		let err = parse_commands("LRX").unwrap_err();
		assert_eq!(err.stage(), Stage::Commands);
		assert!(parse_commands("l").is_err());
	}
}
