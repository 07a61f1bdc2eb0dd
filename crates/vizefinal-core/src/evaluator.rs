//! Grade evaluator: weighted semester grade, letter resolution, pass/fail.
//!
//! Every function here is pure and total over its inputs; failure to produce
//! a result is an `Option`, never an error. The goal solver reuses this
//! module for its formula and constraint checks.

use chrono::Utc;
use uuid::Uuid;

use crate::messages::{fmt_score, fmt_threshold, render, MessageCatalog};
use crate::model::{
    CalculationResult, GradeBreakdown, GradeInput, GradeSettings, LetterGradeRange,
};

/// A usable score is present and within [0,100]; anything else is rejected.
pub(crate) fn valid_grade(value: Option<f64>) -> Option<f64> {
    value.filter(|g| (0.0..=100.0).contains(g))
}

/// Weighted semester grade, normalized by the weight sum.
///
/// Returns 0.0 when both weights are zero; the zero check preempts the
/// division rather than catching it after the fact.
pub fn compute_semester_grade(midterm: f64, final_score: f64, settings: &GradeSettings) -> f64 {
    let total_weight = settings.midterm_weight + settings.final_weight;
    if total_weight == 0.0 {
        return 0.0;
    }
    (midterm * settings.midterm_weight + final_score * settings.final_weight) / total_weight
}

/// Resolve the letter band containing a semester grade.
///
/// Ordered scan over `ranges`; the first inclusive match wins, so list order
/// decides precedence if ranges overlap. A grade outside every range resolves
/// to `None`.
pub fn resolve_letter_grade(semester_grade: f64, ranges: &[LetterGradeRange]) -> Option<&str> {
    ranges
        .iter()
        .find(|r| semester_grade >= r.min && semester_grade <= r.max)
        .map(|r| r.letter.as_str())
}

/// Pass/fail verdict with one reason per triggered constraint.
#[derive(Debug, Clone)]
pub struct PassFailOutcome {
    pub passed: bool,
    /// Never empty: a passing student with no other reasons gets a single
    /// congratulatory one.
    pub reasons: Vec<String>,
}

/// Check every configured constraint and accumulate all applicable reasons.
///
/// Constraints are not short-circuited: a student failing the final minimum
/// still learns about a failing semester grade and letter band in the same
/// result.
pub fn evaluate_pass_fail(
    final_score: f64,
    semester_grade: f64,
    settings: &GradeSettings,
    messages: &MessageCatalog,
) -> PassFailOutcome {
    let mut passed = true;
    let mut reasons = Vec::new();

    if final_score < settings.minimum_final_grade {
        passed = false;
        reasons.push(render(
            &messages.final_below_minimum,
            &[
                ("final", fmt_score(final_score)),
                ("minimum", fmt_threshold(settings.minimum_final_grade)),
            ],
        ));
    }

    if semester_grade < settings.minimum_semester_grade {
        passed = false;
        reasons.push(render(
            &messages.semester_below_minimum,
            &[
                ("semester", fmt_score(semester_grade)),
                ("minimum", fmt_threshold(settings.minimum_semester_grade)),
            ],
        ));
    }

    if settings.letter_grades_enabled {
        if let Some(range) = settings
            .letter_grade_ranges
            .iter()
            .find(|r| semester_grade >= r.min && semester_grade <= r.max)
        {
            if !range.passing {
                passed = false;
                reasons.push(render(
                    &messages.letter_grade_fail,
                    &[("letter", range.letter.clone())],
                ));
            } else if passed {
                // Positive confirmation, only when nothing above failed.
                reasons.push(render(
                    &messages.letter_grade_pass,
                    &[("letter", range.letter.clone())],
                ));
            }
        }
    }

    if passed && reasons.is_empty() {
        reasons.push(render(
            &messages.congratulations,
            &[("grade", fmt_score(semester_grade))],
        ));
    }

    PassFailOutcome { passed, reasons }
}

/// Evaluate a full grade input against a settings profile.
///
/// Returns `None` when either score is missing or outside [0,100]. Inputs are
/// re-validated here even though the UI validates first.
pub fn evaluate(
    input: &GradeInput,
    settings: &GradeSettings,
    messages: &MessageCatalog,
) -> Option<CalculationResult> {
    let (Some(midterm), Some(final_score)) =
        (valid_grade(input.midterm), valid_grade(input.final_score))
    else {
        tracing::warn!(?input.midterm, ?input.final_score, "unusable grade input rejected");
        return None;
    };

    let semester_grade = compute_semester_grade(midterm, final_score, settings);
    let outcome = evaluate_pass_fail(final_score, semester_grade, settings, messages);

    let letter_grade = if settings.letter_grades_enabled {
        resolve_letter_grade(semester_grade, &settings.letter_grade_ranges).map(str::to_owned)
    } else {
        None
    };

    let total_weight = settings.midterm_weight + settings.final_weight;
    let breakdown = if total_weight > 0.0 {
        GradeBreakdown {
            midterm_contribution: midterm * settings.midterm_weight / total_weight,
            final_contribution: final_score * settings.final_weight / total_weight,
        }
    } else {
        GradeBreakdown {
            midterm_contribution: 0.0,
            final_contribution: 0.0,
        }
    };

    tracing::debug!(semester_grade, passed = outcome.passed, "evaluated grade input");

    Some(CalculationResult {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        semester_grade,
        passed: outcome.passed,
        reasons: outcome.reasons,
        letter_grade,
        breakdown,
    })
}
