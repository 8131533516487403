use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::coords::Bounds;
use crate::heading::{Command, Pose};
use crate::parser::{ParseError, parse_commands, parse_dimensions, parse_position};
use crate::report::render_report;
use crate::robot::Outcome;
use crate::scents::{Scent, ScentLog};

/// What the next input line is expected to be. Later modes carry the data
/// parsed by earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
	Dimensions,
	Position(Bounds),
	Commands(Bounds, Pose),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
	mode: Mode,
	scents: ScentLog,
	outcomes: Vec<Outcome>,
}

impl Default for Simulation {
	fn default() -> Self {
		Self::new()
	}
}

impl Simulation {
	pub fn new() -> Self {
		Self { mode: Mode::Dimensions, scents: ScentLog::new(), outcomes: Vec::new() }
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn scents(&self) -> &ScentLog {
		&self.scents
	}

	pub fn outcomes(&self) -> &[Outcome] {
		&self.outcomes
	}

	/// Consumes one non-empty input line and returns the next state.
	pub fn feed(self, line: &str) -> Result<Self, ParseError> {
		trace!(mode = ?self.mode, line, "feeding line");
		match self.mode {
			Mode::Dimensions => {
				let bounds = parse_dimensions(line)?;
				Ok(Self { mode: Mode::Position(bounds), ..self })
			}
			Mode::Position(bounds) => {
				let pose = parse_position(line)?;
				Ok(Self { mode: Mode::Commands(bounds, pose), ..self })
			}
			Mode::Commands(bounds, start) => {
				let commands = parse_commands(line)?;
				let (outcome, scents) = run_commands(&commands, bounds, start, self.scents);
				let mut outcomes = self.outcomes;
				outcomes.push(outcome);
				Ok(Self { mode: Mode::Position(bounds), scents, outcomes })
			}
		}
	}

	pub fn render(&self) -> String {
		render_report(&self.outcomes)
	}

	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string_pretty(self)
	}
}

/// Runs one robot's commands in order. The scent log is handed back with a
/// new entry if the robot was lost.
pub fn run_commands(
	commands: &[Command],
	bounds: Bounds,
	start: Pose,
	mut scents: ScentLog,
) -> (Outcome, ScentLog) {
	let mut pose = start;
	for &command in commands {
		let candidate = if scents.deters(pose, command) {
			debug!(?pose, %command, "scent ignores command");
			pose
		} else {
			command.apply(pose)
		};
		if !bounds.contains(candidate.position) {
			debug!(?pose, %command, "robot lost");
			scents.record(Scent { pose, command });
			return (Outcome::lost(pose, command), scents);
		}
		pose = candidate;
	}
	(Outcome::safe(pose), scents)
}

/// Folds every non-empty line of `input` into a finished simulation.
pub fn simulate(input: &str) -> Result<Simulation, ParseError> {
	input
		.lines()
		.filter(|line| !line.is_empty())
		.try_fold(Simulation::new(), Simulation::feed)
}

pub fn run_robots(input: &str) -> Result<String, ParseError> {
	simulate(input).map(|sim| sim.render())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::heading::Direction;

	fn cmds(s: &str) -> Vec<Command> {
		parse_commands(s).unwrap()
	}

	#[test]
	fn no_commands_keeps_start_pose() {
		let start = Pose::new(2, 1, Direction::S);
		let (out, scents) = run_commands(&[], Bounds::new(5, 3), start, ScentLog::new());
		assert_eq!(out, Outcome::safe(start));
		assert!(scents.is_empty());
	}

	#[test]
	fn leaving_north_edge_keeps_pre_move_pose() {
		let start = Pose::new(2, 3, Direction::N);
		let (out, scents) = run_commands(&cmds("F"), Bounds::new(5, 3), start, ScentLog::new());
		assert_eq!(out, Outcome::lost(start, Command::F));
		assert!(scents.deters(start, Command::F));
	}

	#[test]
	fn lost_robot_ignores_remaining_commands() {
		let start = Pose::new(0, 0, Direction::W);
		let (out, scents) = run_commands(&cmds("FRFFF"), Bounds::new(5, 3), start, ScentLog::new());
		assert_eq!(out, Outcome::lost(start, Command::F));
		assert_eq!(scents.len(), 1);
	}

	#[test]
	fn scent_blocks_the_same_fatal_step() {
		let mut scents = ScentLog::new();
		scents.record(Scent { pose: Pose::new(3, 3, Direction::N), command: Command::F });
		let start = Pose::new(3, 3, Direction::N);
		let (out, scents) = run_commands(&cmds("FRF"), Bounds::new(5, 3), start, scents);
		assert_eq!(out, Outcome::safe(Pose::new(4, 3, Direction::E)));
		assert_eq!(scents.len(), 1);
	}

	#[test]
	fn start_outside_grid_is_lost_on_first_command() {
		let start = Pose::new(7, 7, Direction::N);
		let (out, _) = run_commands(&cmds("R"), Bounds::new(5, 3), start, ScentLog::new());
		assert_eq!(out, Outcome::lost(start, Command::R));
	}

	#[test]
	fn modes_advance_in_order() {
		let sim = Simulation::new().feed("5 3").unwrap();
		assert_eq!(sim.mode(), Mode::Position(Bounds::new(5, 3)));
		let sim = sim.feed("1 1 E").unwrap();
		assert_eq!(sim.mode(), Mode::Commands(Bounds::new(5, 3), Pose::new(1, 1, Direction::E)));
		let sim = sim.feed("RFRFRFRF").unwrap();
		assert_eq!(sim.mode(), Mode::Position(Bounds::new(5, 3)));
		assert_eq!(sim.outcomes().len(), 1);
	}

	#[test]
	fn dangling_position_is_not_an_error() {
		assert_eq!(run_robots("5 3\n1 1 E\n").unwrap(), "");
		assert_eq!(run_robots("").unwrap(), "");
	}

	#[test]
	fn second_position_line_where_commands_expected_fails() {
		let err = run_robots("5 3\n1 1 E\n2 2 N\nF\n").unwrap_err();
		assert_eq!(err, ParseError::Commands("2 2 N".into()));
	}
}
