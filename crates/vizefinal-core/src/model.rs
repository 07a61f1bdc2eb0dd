//! Core data model types for VizeFinal.
//!
//! These are the value objects exchanged between the surrounding application
//! and the computation core: the settings profile, grade/goal inputs, and the
//! immutable results produced by the evaluator and the goal solver.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The settings profile the computation core evaluates against.
///
/// Owned and persisted by the surrounding application (stored as camelCase
/// JSON); the core only ever reads a snapshot passed in per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSettings {
    /// Relative weight of the midterm component.
    pub midterm_weight: f64,
    /// Relative weight of the final-exam component.
    pub final_weight: f64,
    /// Lowest final-exam score that can still pass, in [0,100].
    pub minimum_final_grade: f64,
    /// Lowest weighted semester grade that can still pass, in [0,100].
    pub minimum_semester_grade: f64,
    /// Whether letter grades are resolved and checked at all.
    #[serde(default = "default_true")]
    pub letter_grades_enabled: bool,
    /// Letter bands consulted in order; the first containing range wins.
    #[serde(default)]
    pub letter_grade_ranges: Vec<LetterGradeRange>,
}

/// A labeled interval of semester-grade values with a pass/fail classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterGradeRange {
    /// Unique label, e.g. "AA".
    pub letter: String,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Whether landing in this band counts as passing.
    pub passing: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GradeSettings {
    fn default() -> Self {
        Self {
            midterm_weight: 40.0,
            final_weight: 60.0,
            minimum_final_grade: 50.0,
            minimum_semester_grade: 60.0,
            letter_grades_enabled: true,
            letter_grade_ranges: vec![
                LetterGradeRange { letter: "AA".into(), min: 90.0, max: 100.0, passing: true },
                LetterGradeRange { letter: "BA".into(), min: 85.0, max: 89.0, passing: true },
                LetterGradeRange { letter: "BB".into(), min: 80.0, max: 84.0, passing: true },
                LetterGradeRange { letter: "CB".into(), min: 75.0, max: 79.0, passing: true },
                LetterGradeRange { letter: "CC".into(), min: 70.0, max: 74.0, passing: true },
                LetterGradeRange { letter: "DC".into(), min: 65.0, max: 69.0, passing: true },
                LetterGradeRange { letter: "DD".into(), min: 60.0, max: 64.0, passing: true },
                LetterGradeRange { letter: "FD".into(), min: 50.0, max: 59.0, passing: false },
                LetterGradeRange { letter: "FF".into(), min: 0.0, max: 49.0, passing: false },
            ],
        }
    }
}

/// The two known scores fed to the evaluator.
///
/// `None` and out-of-range values are treated identically as "not usable";
/// the evaluator re-validates even though the UI parses and checks first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeInput {
    pub midterm: Option<f64>,
    #[serde(rename = "final")]
    pub final_score: Option<f64>,
}

/// What the goal solver should aim for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum GoalTarget {
    /// Reach passing status under the profile's constraints.
    Pass,
    /// Reach a specific numeric semester grade.
    Score(f64),
    /// Reach a specific letter band, identified by its label.
    Letter(String),
}

impl fmt::Display for GoalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalTarget::Pass => write!(f, "pass"),
            GoalTarget::Score(score) => write!(f, "score {score}"),
            GoalTarget::Letter(letter) => write!(f, "letter {letter}"),
        }
    }
}

/// Input to the goal solver: the known scores plus the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInput {
    pub midterm: Option<f64>,
    /// When present and valid, the solver reports against the realized
    /// outcome instead of solving for an unknown final.
    #[serde(rename = "final")]
    pub final_score: Option<f64>,
    pub target: GoalTarget,
}

/// A complete evaluation of one (midterm, final) pair against a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique result identifier.
    pub id: Uuid,
    /// When the result was computed.
    pub created_at: DateTime<Utc>,
    /// Weighted semester grade, full precision.
    pub semester_grade: f64,
    /// Overall pass/fail verdict across all configured constraints.
    pub passed: bool,
    /// One human-readable reason per triggered constraint; never empty.
    pub reasons: Vec<String>,
    /// Resolved letter band, if enabled and the grade falls in one.
    pub letter_grade: Option<String>,
    /// Per-component weighted contributions.
    pub breakdown: GradeBreakdown,
}

/// Each component's share of the semester grade, normalized by the weight sum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GradeBreakdown {
    pub midterm_contribution: f64,
    pub final_contribution: f64,
}

/// Outcome of a goal-solving request.
///
/// Infeasibility is a value, never an error: `required_final = None` and
/// `possible = false` with a single explanatory message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResult {
    /// The final-exam score that satisfies the goal, full precision.
    pub required_final: Option<f64>,
    pub possible: bool,
    pub message: String,
}

impl GoalResult {
    pub(crate) fn feasible(required_final: f64, message: String) -> Self {
        Self {
            required_final: Some(required_final),
            possible: true,
            message,
        }
    }

    pub(crate) fn infeasible(message: String) -> Self {
        Self {
            required_final: None,
            possible: false,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_shipped_profile() {
        let settings = GradeSettings::default();
        assert_eq!(settings.midterm_weight, 40.0);
        assert_eq!(settings.final_weight, 60.0);
        assert_eq!(settings.minimum_final_grade, 50.0);
        assert_eq!(settings.minimum_semester_grade, 60.0);
        assert!(settings.letter_grades_enabled);
        assert_eq!(settings.letter_grade_ranges.len(), 9);
        assert_eq!(settings.letter_grade_ranges[0].letter, "AA");
        assert!(!settings.letter_grade_ranges[8].passing);
    }

    #[test]
    fn settings_serde_uses_camel_case() {
        let json = serde_json::to_string(&GradeSettings::default()).unwrap();
        assert!(json.contains("\"midtermWeight\":40.0"));
        assert!(json.contains("\"minimumSemesterGrade\":60.0"));
        assert!(json.contains("\"letterGradesEnabled\":true"));

        let parsed: GradeSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.final_weight, 60.0);
        assert_eq!(parsed.letter_grade_ranges[1].letter, "BA");
    }

    #[test]
    fn settings_deserialize_tolerates_missing_letter_fields() {
        let json = r#"{
            "midtermWeight": 50,
            "finalWeight": 50,
            "minimumFinalGrade": 40,
            "minimumSemesterGrade": 55
        }"#;
        let settings: GradeSettings = serde_json::from_str(json).unwrap();
        assert!(settings.letter_grades_enabled);
        assert!(settings.letter_grade_ranges.is_empty());
    }

    #[test]
    fn goal_target_serde_is_tagged() {
        let json = serde_json::to_string(&GoalTarget::Score(85.0)).unwrap();
        assert_eq!(json, r#"{"type":"score","value":85.0}"#);

        let pass: GoalTarget = serde_json::from_str(r#"{"type":"pass"}"#).unwrap();
        assert_eq!(pass, GoalTarget::Pass);

        let letter: GoalTarget =
            serde_json::from_str(r#"{"type":"letter","value":"AA"}"#).unwrap();
        assert_eq!(letter, GoalTarget::Letter("AA".into()));
    }

    #[test]
    fn grade_input_uses_final_key() {
        let input: GradeInput = serde_json::from_str(r#"{"midterm":80,"final":70}"#).unwrap();
        assert_eq!(input.midterm, Some(80.0));
        assert_eq!(input.final_score, Some(70.0));
    }

    #[test]
    fn goal_target_display() {
        assert_eq!(GoalTarget::Pass.to_string(), "pass");
        assert_eq!(GoalTarget::Score(95.0).to_string(), "score 95");
        assert_eq!(GoalTarget::Letter("BB".into()).to_string(), "letter BB");
    }
}
