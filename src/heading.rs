//! Facing directions, robot commands and the movement table that combines them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::GridCoord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
	N,
	E,
	S,
	W,
}

impl Direction {
	pub fn from_char(c: char) -> Option<Self> {
		match c {
			'N' => Some(Direction::N),
			'E' => Some(Direction::E),
			'S' => Some(Direction::S),
			'W' => Some(Direction::W),
			_ => None,
		}
	}

	pub fn as_char(self) -> char {
		match self {
			Direction::N => 'N',
			Direction::E => 'E',
			Direction::S => 'S',
			Direction::W => 'W',
		}
	}

	/// Counter-clockwise quarter turn.
	pub fn left(self) -> Self {
		match self {
			Direction::N => Direction::W,
			Direction::W => Direction::S,
			Direction::S => Direction::E,
			Direction::E => Direction::N,
		}
	}

	/// Clockwise quarter turn.
	pub fn right(self) -> Self {
		match self {
			Direction::N => Direction::E,
			Direction::E => Direction::S,
			Direction::S => Direction::W,
			Direction::W => Direction::N,
		}
	}

	/// Unit step `(dx, dy)` taken by a forward move.
	pub fn delta(self) -> (i64, i64) {
		match self {
			Direction::N => (0, 1),
			Direction::E => (1, 0),
			Direction::S => (0, -1),
			Direction::W => (-1, 0),
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
	L,
	R,
	F,
}

impl Command {
	pub fn from_char(c: char) -> Option<Self> {
		match c {
			'L' => Some(Command::L),
			'R' => Some(Command::R),
			'F' => Some(Command::F),
			_ => None,
		}
	}

	/// Applies the movement table entry for `(pose.facing, self)`. Bounds are
	/// not consulted here.
	pub fn apply(self, pose: Pose) -> Pose {
		match self {
			Command::L => Pose { facing: pose.facing.left(), ..pose },
			Command::R => Pose { facing: pose.facing.right(), ..pose },
			Command::F => {
				let (dx, dy) = pose.facing.delta();
				Pose { position: pose.position.offset(dx, dy), ..pose }
			}
		}
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let c = match self {
			Command::L => 'L',
			Command::R => 'R',
			Command::F => 'F',
		};
		write!(f, "{}", c)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
	pub position: GridCoord,
	pub facing: Direction,
}

impl Pose {
	pub fn new(x: i64, y: i64, facing: Direction) -> Self {
		Self { position: GridCoord::new(x, y), facing }
	}
}
