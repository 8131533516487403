pub mod coords;
pub mod engine;
pub mod heading;
pub mod logging;
pub mod parser;
pub mod report;
pub mod robot;
pub mod scents;

// Re-exports for convenience in tests and integration users.
pub use coords::{Bounds, GridCoord};
pub use engine::{Mode, Simulation, run_commands, run_robots, simulate};
pub use heading::{Command, Direction, Pose};
pub use parser::{ParseError, Stage};
pub use report::{render_outcome, render_report};
pub use robot::Outcome;
pub use scents::{Scent, ScentLog};
