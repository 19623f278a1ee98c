use glam::dvec2;
use kinderscore::quiz::{addition_problems, AdditionPart, ProctoredSession, Prompt, QuizSession};
use kinderscore::*;

fn strokes_spanning(min_y: f64, max_y: f64, points: usize) -> StrokeSet {
	let step = (max_y - min_y) / (points - 1) as f64;
	[(0..points)
		.map(|i| dvec2(20.0 + i as f64, min_y + step * i as f64))
		.collect::<Stroke>()]
	.into_iter()
	.collect()
}

#[test]
fn empty_sheet_is_not_written_for_every_glyph() {
	let mut rng = fastrand::Rng::with_seed(1);
	let letters = HandwritingScorer::letters();
	let numbers = HandwritingScorer::numbers();
	for item in letter_sheet(CaseMode::Mixed, &mut rng) {
		assert_eq!(
			letters.score(&StrokeSet::new(), CELL_SIZE, &item.glyph),
			ScoreResult::not_written()
		);
	}
	for glyph in number_sheet() {
		assert_eq!(
			numbers.score(&StrokeSet::new(), CELL_SIZE, &glyph),
			ScoreResult::not_written()
		);
	}
}

#[test]
fn reference_cases() {
	let scorer = HandwritingScorer::letters();
	let a = Glyph::Letter('A');

	let full = scorer.score(&strokes_spanning(12.0, 68.0, 8), CELL_SIZE, &a);
	assert_eq!((full.score, full.grade), (100, Grade::Excellent));

	let small = scorer.score(&strokes_spanning(40.0, 45.0, 6), CELL_SIZE, &a);
	assert_eq!((small.score, small.grade), (33, Grade::KeepTrying));
}

#[test]
fn scores_stay_in_range() {
	let mut rng = fastrand::Rng::with_seed(0x13371337);
	let scorer = HandwritingScorer::letters();
	for _ in 0..200 {
		let min_y = 200.0 * rng.f64() - 50.0;
		let max_y = min_y + 150.0 * rng.f64();
		let strokes = strokes_spanning(min_y, max_y, 5 + rng.usize(..20));
		let glyph = Glyph::Letter(rng.alphabetic());
		let result = scorer.score(&strokes, CELL_SIZE, &glyph);
		assert!(result.score <= 100);
		assert_eq!(result.grade, Grade::from_score(result.score));
		assert_eq!(result, scorer.score(&strokes, CELL_SIZE, &glyph));
	}
}

#[test]
fn number_sheet_assessment() {
	let mut assessment = WritingAssessment::new();
	assessment.apply(Action::Start(Worksheet::numbers())).unwrap();

	// A well placed 1, a 2 sitting too low, and a 3 that is only a tap.
	let writes: [(usize, &[f64]); 3] = [
		(1, &[12.0, 30.0, 50.0, 60.0, 68.0]),
		(2, &[30.0, 45.0, 60.0, 70.0, 79.0]),
		(3, &[40.0, 41.0]),
	];
	for (cell, ys) in writes {
		for (i, y) in ys.iter().enumerate() {
			let point = dvec2(40.0, *y);
			let action = if i == 0 {
				Action::PenDown { cell, point }
			} else {
				Action::PenMove { cell, point }
			};
			assessment.apply(action).unwrap();
		}
		assessment.apply(Action::PenUp).unwrap();
	}
	assessment.apply(Action::Analyze).unwrap();

	let summary = assessment.summary().unwrap();
	assert_eq!(summary.total, 21);
	assert_eq!(summary.written, 3);
	let weakest = summary.focus_areas(FOCUS_AREA_LIMIT);
	assert_eq!(weakest[0].glyph, Glyph::Number(3));
	assert_eq!(weakest[0].score, 20);
	assert!(weakest.windows(2).all(|w| w[0].score <= w[1].score));
	assert_eq!(assessment.cells()[1].score.map(|s| s.score), Some(100));
}

#[test]
fn addition_quiz_round() {
	let problems = addition_problems(AdditionPart::SingleDigitToNine, &mut fastrand::Rng::with_seed(4));
	let mut session = QuizSession::new();
	session.start(problems).unwrap();
	let mut answered = 0;
	while let Some((problem, step)) = session.current() {
		// Miss every other question.
		let pick = if answered % 2 == 0 {
			problem.expected(step)
		} else {
			*problem
				.choices(step)
				.iter()
				.find(|c| **c != problem.expected(step))
				.unwrap()
		};
		session.answer(pick).unwrap();
		answered += 1;
	}
	let summary = session.summary().unwrap();
	assert_eq!(summary.total, 10);
	assert_eq!(summary.correct, 5);
	assert_eq!(summary.percentage, 50);
}

#[test]
fn worksheet_round_trip_through_json() {
	let record = SheetRecord {
		kind: SheetKind::Letters,
		cell_size: CELL_SIZE,
		cells: vec![
			CellRecord {
				glyph: "h".to_owned(),
				strokes: vec![(0..8).map(|i| [30.0, 12.0 + 8.0 * i as f64]).collect()],
			},
			CellRecord {
				glyph: "o".to_owned(),
				strokes: vec![(0..8).map(|i| [30.0, 40.0 + 4.0 * i as f64]).collect()],
			},
		],
	};
	let json = serde_json::to_string(&record).unwrap();
	let scored = SheetRecord::from_json(&json).unwrap().score().unwrap();
	assert_eq!(scored.cells[0].result.score, 100);
	assert_eq!(scored.cells[1].result.score, 100);
	assert_eq!(scored.summary.rounded_average(), 100);
	assert!(scored.summary.needs_practice.is_empty());
}

#[test]
fn fractional_coordinates_from_json() {
	let sheet = SheetRecord::from_json(
		r#"{
			"kind": "letters",
			"cells": [
				{ "glyph": "A", "strokes": [[[40, 0.3], [40, 10], [40, 15], [40, 20], [40, 28.3]]] },
				{ "glyph": "B", "strokes": [[[12.5, 1.0], [30, 20]], [[31.25, 40], [40, 59.8]], [[44, 30]]] }
			]
		}"#,
	)
	.unwrap();
	let scored = sheet.score().unwrap();
	assert_eq!(scored.cells[0].result.score, 59);
	assert_eq!(scored.cells[1].result.score, 87);
	assert_eq!(scored.cells[1].result.grade, Grade::Excellent);
	assert_eq!(scored.summary.rounded_average(), 73);
}

#[test]
fn letter_sounds_round() {
	let mut rng = fastrand::Rng::with_seed(31);
	let glyphs: Vec<Glyph> = letter_sheet(CaseMode::Mixed, &mut rng)
		.into_iter()
		.map(|item| item.glyph)
		.collect();
	let mut session = ProctoredSession::new();
	session.start(glyphs, Some(&mut rng)).unwrap();
	// Tall letters are known, short ones are not.
	while let Some(glyph) = session.current() {
		session.record(glyph.is_tall()).unwrap();
	}
	let summary = session.summary().unwrap();
	assert_eq!(summary.total, 26);
	assert_eq!(summary.correct + summary.incorrect, 26);
	assert!(summary.correct_glyphs.iter().all(Glyph::is_tall));
	assert!(!summary.incorrect_glyphs.iter().any(Glyph::is_tall));
	assert_eq!(summary.incorrect_glyphs.len(), summary.incorrect);
}
