use serde::{Deserialize, Serialize};

use crate::heading::{Command, Pose};

/// Final state of one robot once its command line has been run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
	pub pose: Pose,
	/// The command that would have taken the robot off the grid, if any.
	pub lost_by: Option<Command>,
}

impl Outcome {
	pub fn safe(pose: Pose) -> Self {
		Self { pose, lost_by: None }
	}

	pub fn lost(pose: Pose, command: Command) -> Self {
		Self { pose, lost_by: Some(command) }
	}

	pub fn is_lost(&self) -> bool {
		self.lost_by.is_some()
	}
}
