use anyhow::Context;
use kinderscore::util::ResultExt;
use kinderscore::{SheetRecord, ScoredSheet, FOCUS_AREA_LIMIT};
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
#[error("usage: kinderscore <worksheet.json>")]
struct Usage;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	// Scores go to stdout, so keep diagnostics on stderr.
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.with_writer(std::io::stderr)
			.finish(),
	)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`. Because we enable the "log" feature on the `tracing` crate, the
	// reverse happens if setting the global subscriber above failed.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

fn print_sheet(sheet: &ScoredSheet) {
	for cell in &sheet.cells {
		println!(
			"{:>3} {:>3}% {}",
			cell.glyph.to_string(),
			cell.result.score,
			cell.result.grade
		);
	}

	let summary = &sheet.summary;
	println!();
	println!("{} of {} written", summary.written, summary.total);
	println!("Average Score: {}%", summary.rounded_average());
	println!("Need Practice: {}", summary.needs_practice.len());
	for item in summary.focus_areas(FOCUS_AREA_LIMIT) {
		println!("  {} {}%", item.glyph, item.score);
	}
}

fn run() -> anyhow::Result<()> {
	let path: PathBuf = std::env::args_os().nth(1).ok_or(Usage)?.into();
	let json = std::fs::read_to_string(&path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	let sheet = SheetRecord::from_json(&json)?.score()?;
	tracing::info!(path = %path.display(), kind = ?sheet.kind, cells = sheet.cells.len(), "scored worksheet");
	print_sheet(&sheet);
	Ok(())
}

fn main() -> anyhow::Result<()> {
	// We can technically continue without logging.
	configure_logging().ok_or_log();

	run()
}
