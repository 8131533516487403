use std::io::{self, Read, Write};
use std::process::ExitCode;

use martian_robots::{logging, run_robots};

fn main() -> ExitCode {
	logging::init();

	let mut input = String::new();
	if let Err(err) = io::stdin().read_to_string(&mut input) {
		eprintln!("failed to read stdin: {err}");
		return ExitCode::FAILURE;
	}

	match run_robots(&input) {
		Ok(report) => {
			let mut stdout = io::stdout().lock();
			if let Err(err) = stdout.write_all(report.as_bytes()).and_then(|_| stdout.flush()) {
				eprintln!("failed to write report: {err}");
				return ExitCode::FAILURE;
			}
			ExitCode::SUCCESS
		}
		Err(err) => {
			tracing::warn!(stage = %err.stage(), "input rejected");
			eprintln!("{err}");
			ExitCode::FAILURE
		}
	}
}
