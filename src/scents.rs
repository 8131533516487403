use serde::{Deserialize, Serialize};

use crate::heading::{Command, Pose};

/// The pose a robot was lost from, together with the command that took it
/// off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scent {
	pub pose: Pose,
	pub command: Command,
}

/// Append-only record of every loss in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScentLog {
	scents: Vec<Scent>,
}

impl ScentLog {
	pub fn new() -> Self {
		Self { scents: Vec::new() }
	}

	pub fn record(&mut self, scent: Scent) {
		self.scents.push(scent);
	}

	/// Exact match on position, facing and command.
	pub fn deters(&self, pose: Pose, command: Command) -> bool {
		self.scents.iter().any(|s| s.pose == pose && s.command == command)
	}

	pub fn len(&self) -> usize {
		self.scents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scents.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Scent> {
		self.scents.iter()
	}
}
