use crate::robot::Outcome;

pub fn render_outcome(outcome: &Outcome) -> String {
	let p = &outcome.pose;
	format!(
		"{} {} {}{}\n",
		p.position.x,
		p.position.y,
		p.facing,
		if outcome.is_lost() { " LOST" } else { "" }
	)
}

pub fn render_report(outcomes: &[Outcome]) -> String {
	outcomes.iter().map(render_outcome).collect()
}
