//! Injected message catalog and placeholder rendering.
//!
//! The core composes no user-facing language of its own: the surrounding
//! application loads a per-language catalog (camelCase JSON, one template per
//! key) and passes it in with every call. Templates carry named
//! `{placeholder}` tokens that the core fills by literal substitution.

use serde::{Deserialize, Serialize};

/// Message templates consumed by the evaluator and the goal solver.
///
/// Every field is a template string; the placeholders each template is
/// expected to contain are listed per field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCatalog {
    /// `{final}`, `{minimum}`
    pub final_below_minimum: String,
    /// `{semester}`, `{minimum}`
    pub semester_below_minimum: String,
    /// `{letter}`
    pub letter_grade_fail: String,
    /// `{letter}`
    pub letter_grade_pass: String,
    /// `{grade}`
    pub congratulations: String,
    pub invalid_midterm: String,
    pub invalid_weights: String,
    /// `{minimumFinal}`, `{minimumSemester}`
    pub impossible_pass: String,
    pub impossible_goal: String,
    /// `{required}`, `{minimum}`
    pub need_final_below_minimum: String,
    /// `{final}`, `{minimum}`
    pub need_final_to_pass: String,
    /// `{final}`
    pub need_final_for_goal: String,
    /// `{semester}`, `{final}`
    pub current_status_pass: String,
    /// `{semester}`, `{final}`, `{required}`
    pub current_status_fail: String,
    /// `{semester}`, `{target}`
    pub current_status_score_achieved: String,
    /// `{semester}`, `{target}`, `{required}`
    pub current_status_score_not_achieved: String,
    /// `{semester}`, `{letter}`
    pub current_status_letter_achieved: String,
    pub invalid_letter_selected: String,
    pub to_pass: String,
    /// `{score}`
    pub to_achieve_score: String,
    /// `{letter}`
    pub to_achieve_letter: String,
}

/// Fill named `{key}` placeholders in a template by literal substitution.
///
/// Unknown placeholders are left in place; the catalogs own template/argument
/// agreement.
pub fn render(template: &str, args: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in args {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// One-decimal display formatting for achieved and required scores.
///
/// Display only: comparisons always happen on the full-precision value.
pub fn fmt_score(value: f64) -> String {
    format!("{value:.1}")
}

/// Display formatting for configured thresholds and targets.
///
/// Whole numbers print without a decimal point (`50`, not `50.0`), matching
/// how the application renders configured minimums.
pub fn fmt_threshold(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
pub(crate) fn english() -> MessageCatalog {
    MessageCatalog {
        final_below_minimum: "Final grade {final} is below the minimum of {minimum}.".into(),
        semester_below_minimum: "Semester grade {semester} is below the minimum of {minimum}."
            .into(),
        letter_grade_fail: "Letter grade {letter} is a failing grade.".into(),
        letter_grade_pass: "Letter grade {letter} is a passing grade.".into(),
        congratulations: "Congratulations! You passed with {grade}.".into(),
        invalid_midterm: "Enter a valid midterm grade between 0 and 100.".into(),
        invalid_weights: "Weights are invalid; the final weight must be greater than zero.".into(),
        impossible_pass:
            "Impossible to pass: even at the minimum final of {minimumFinal} the semester \
             grade stays below {minimumSemester}."
                .into(),
        impossible_goal: "This goal is impossible to reach.".into(),
        need_final_below_minimum:
            "You would only need {required}, but the final minimum is {minimum}.".into(),
        need_final_to_pass: "You need {final} on the final (the minimum of {minimum}) to pass."
            .into(),
        need_final_for_goal: "You need {final} on the final.".into(),
        current_status_pass: "You are passing with {semester} (final: {final}).".into(),
        current_status_fail:
            "You are failing with {semester} (final: {final}); you need {required}.".into(),
        current_status_score_achieved: "Your {semester} already reaches the target of {target}."
            .into(),
        current_status_score_not_achieved:
            "Your {semester} misses the target of {target}; you need {required}.".into(),
        current_status_letter_achieved: "Your {semester} already reaches {letter}.".into(),
        invalid_letter_selected: "The selected letter grade is not defined.".into(),
        to_pass: "This is enough to pass.".into(),
        to_achieve_score: "This reaches a score of {score}.".into(),
        to_achieve_letter: "This reaches the letter grade {letter}.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_named_placeholders() {
        let out = render(
            "need {required} (minimum {minimum})",
            &[("required", "66.7".into()), ("minimum", "50".into())],
        );
        assert_eq!(out, "need 66.7 (minimum 50)");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("grade {grade} in {other}", &[("grade", "80.0".into())]);
        assert_eq!(out, "grade 80.0 in {other}");
    }

    #[test]
    fn render_replaces_repeated_placeholders() {
        let out = render("{x} and {x}", &[("x", "1".into())]);
        assert_eq!(out, "1 and 1");
    }

    #[test]
    fn score_formatting_is_one_decimal() {
        assert_eq!(fmt_score(80.0), "80.0");
        assert_eq!(fmt_score(200.0 / 3.0), "66.7");
        assert_eq!(fmt_score(49.96), "50.0");
    }

    #[test]
    fn threshold_formatting_drops_trailing_decimal() {
        assert_eq!(fmt_threshold(50.0), "50");
        assert_eq!(fmt_threshold(62.5), "62.5");
        assert_eq!(fmt_threshold(0.0), "0");
    }

    #[test]
    fn catalog_deserializes_from_camel_case() {
        let json = serde_json::to_string(&english()).unwrap();
        assert!(json.contains("\"finalBelowMinimum\""));
        assert!(json.contains("\"needFinalForGoal\""));

        let parsed: MessageCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_pass, english().to_pass);
    }
}
