//! Goal solver: invert the weighting formula to find the required final.
//!
//! A decision tree over (known-final?, target kind), reusing the evaluator's
//! formula and pass/fail check. Unlike the evaluator, which accumulates every
//! failing reason, the solver reports only the first blocking reason; the
//! asymmetry is deliberate.

use crate::evaluator::{compute_semester_grade, evaluate_pass_fail, valid_grade};
use crate::messages::{fmt_score, fmt_threshold, render, MessageCatalog};
use crate::model::{GoalInput, GoalResult, GoalTarget, GradeSettings};

/// Solve for the final-exam score that reaches the target.
///
/// Never fails: infeasibility comes back as `possible = false` with a single
/// explanatory message. When the final is already known and valid, the solver
/// degrades to a status report against the realized semester grade.
pub fn solve_goal(
    input: &GoalInput,
    settings: &GradeSettings,
    messages: &MessageCatalog,
) -> GoalResult {
    let Some(midterm) = valid_grade(input.midterm) else {
        tracing::warn!(?input.midterm, "goal request rejected: unusable midterm");
        return GoalResult::infeasible(messages.invalid_midterm.clone());
    };

    tracing::debug!(midterm, target = %input.target, "solving goal");

    match valid_grade(input.final_score) {
        Some(final_score) => {
            solve_with_known_final(midterm, final_score, &input.target, settings, messages)
        }
        None => solve_for_unknown_final(midterm, &input.target, settings, messages),
    }
}

/// The final score at which the semester grade reaches `target_semester_grade`.
///
/// `None` when the final is unsolvable: a zero weight sum or a zero final
/// weight would divide by zero, so both are checked before inverting.
fn required_final_for(
    target_semester_grade: f64,
    midterm: f64,
    settings: &GradeSettings,
) -> Option<f64> {
    let total_weight = settings.midterm_weight + settings.final_weight;
    if total_weight == 0.0 || settings.final_weight == 0.0 {
        return None;
    }
    let midterm_contribution = midterm * settings.midterm_weight / total_weight;
    Some((target_semester_grade - midterm_contribution) * total_weight / settings.final_weight)
}

/// Clamp a raw solved value up to the minimum final and re-verify.
///
/// Only pass targets clamp: a clamped value would overshoot a numeric or
/// letter target. `None` means the semester minimum still fails at the
/// clamped value, i.e. passing is impossible.
fn clamp_to_minimum_final(midterm: f64, settings: &GradeSettings) -> Option<f64> {
    let clamped = settings.minimum_final_grade;
    let adjusted = compute_semester_grade(midterm, clamped, settings);
    if adjusted < settings.minimum_semester_grade {
        None
    } else {
        Some(clamped)
    }
}

fn impossible_pass_message(settings: &GradeSettings, messages: &MessageCatalog) -> String {
    render(
        &messages.impossible_pass,
        &[
            ("minimumFinal", fmt_threshold(settings.minimum_final_grade)),
            ("minimumSemester", fmt_threshold(settings.minimum_semester_grade)),
        ],
    )
}

/// Branch A: the final is already known, report against the realized outcome.
fn solve_with_known_final(
    midterm: f64,
    final_score: f64,
    target: &GoalTarget,
    settings: &GradeSettings,
    messages: &MessageCatalog,
) -> GoalResult {
    let semester_grade = compute_semester_grade(midterm, final_score, settings);

    match target {
        GoalTarget::Pass => {
            let outcome = evaluate_pass_fail(final_score, semester_grade, settings, messages);
            if outcome.passed {
                return GoalResult::feasible(
                    final_score,
                    render(
                        &messages.current_status_pass,
                        &[
                            ("semester", fmt_score(semester_grade)),
                            ("final", fmt_score(final_score)),
                        ],
                    ),
                );
            }

            let Some(required) =
                required_final_for(settings.minimum_semester_grade, midterm, settings)
            else {
                return GoalResult::infeasible(messages.invalid_weights.clone());
            };

            let adjusted = if required < settings.minimum_final_grade {
                match clamp_to_minimum_final(midterm, settings) {
                    Some(clamped) => clamped,
                    None => {
                        return GoalResult::infeasible(impossible_pass_message(settings, messages))
                    }
                }
            } else {
                required
            };

            GoalResult::feasible(
                adjusted,
                render(
                    &messages.current_status_fail,
                    &[
                        ("semester", fmt_score(semester_grade)),
                        ("final", fmt_score(final_score)),
                        ("required", fmt_score(adjusted)),
                    ],
                ),
            )
        }
        GoalTarget::Score(target_score) => {
            if semester_grade >= *target_score {
                return GoalResult::feasible(
                    final_score,
                    render(
                        &messages.current_status_score_achieved,
                        &[
                            ("semester", fmt_score(semester_grade)),
                            ("target", fmt_threshold(*target_score)),
                        ],
                    ),
                );
            }

            let Some(required) = required_final_for(*target_score, midterm, settings) else {
                return GoalResult::infeasible(messages.invalid_weights.clone());
            };
            if required > 100.0 {
                return GoalResult::infeasible(messages.impossible_goal.clone());
            }
            // No clamping here: a clamped final would no longer hit the target exactly.
            if required < settings.minimum_final_grade {
                return GoalResult::infeasible(render(
                    &messages.need_final_below_minimum,
                    &[
                        ("required", fmt_score(required)),
                        ("minimum", fmt_threshold(settings.minimum_final_grade)),
                    ],
                ));
            }

            GoalResult::feasible(
                required,
                render(
                    &messages.current_status_score_not_achieved,
                    &[
                        ("semester", fmt_score(semester_grade)),
                        ("target", fmt_threshold(*target_score)),
                        ("required", fmt_score(required)),
                    ],
                ),
            )
        }
        GoalTarget::Letter(label) => {
            // Symmetric to the score branch, targeting the band's lower bound.
            let Some(range) = settings
                .letter_grade_ranges
                .iter()
                .find(|r| r.letter == *label)
            else {
                return GoalResult::infeasible(messages.invalid_letter_selected.clone());
            };

            if semester_grade >= range.min {
                return GoalResult::feasible(
                    final_score,
                    render(
                        &messages.current_status_letter_achieved,
                        &[
                            ("semester", fmt_score(semester_grade)),
                            ("letter", label.clone()),
                        ],
                    ),
                );
            }

            let Some(required) = required_final_for(range.min, midterm, settings) else {
                return GoalResult::infeasible(messages.invalid_weights.clone());
            };
            if required > 100.0 {
                return GoalResult::infeasible(messages.impossible_goal.clone());
            }
            if required < settings.minimum_final_grade {
                return GoalResult::infeasible(render(
                    &messages.need_final_below_minimum,
                    &[
                        ("required", fmt_score(required)),
                        ("minimum", fmt_threshold(settings.minimum_final_grade)),
                    ],
                ));
            }

            let mut message = render(
                &messages.need_final_for_goal,
                &[("final", fmt_score(required))],
            );
            message.push(' ');
            message.push_str(&render(
                &messages.to_achieve_letter,
                &[("letter", label.clone())],
            ));
            GoalResult::feasible(required, message)
        }
    }
}

/// Branch B: the final is unknown, solve the inversion for the target grade.
fn solve_for_unknown_final(
    midterm: f64,
    target: &GoalTarget,
    settings: &GradeSettings,
    messages: &MessageCatalog,
) -> GoalResult {
    let target_semester_grade = match target {
        GoalTarget::Pass => settings.minimum_semester_grade,
        GoalTarget::Score(score) => *score,
        GoalTarget::Letter(label) => {
            match settings
                .letter_grade_ranges
                .iter()
                .find(|r| r.letter == *label)
            {
                Some(range) => range.min,
                None => return GoalResult::infeasible(messages.invalid_letter_selected.clone()),
            }
        }
    };

    let Some(required) = required_final_for(target_semester_grade, midterm, settings) else {
        return GoalResult::infeasible(messages.invalid_weights.clone());
    };

    if !(0.0..=100.0).contains(&required) {
        return GoalResult::infeasible(messages.impossible_goal.clone());
    }

    if required < settings.minimum_final_grade {
        if *target == GoalTarget::Pass {
            return match clamp_to_minimum_final(midterm, settings) {
                Some(clamped) => GoalResult::feasible(
                    clamped,
                    render(
                        &messages.need_final_to_pass,
                        &[
                            ("final", fmt_score(clamped)),
                            ("minimum", fmt_threshold(settings.minimum_final_grade)),
                        ],
                    ),
                ),
                None => GoalResult::infeasible(impossible_pass_message(settings, messages)),
            };
        }
        return GoalResult::infeasible(render(
            &messages.need_final_below_minimum,
            &[
                ("required", fmt_score(required)),
                ("minimum", fmt_threshold(settings.minimum_final_grade)),
            ],
        ));
    }

    let mut message = render(
        &messages.need_final_for_goal,
        &[("final", fmt_score(required))],
    );
    message.push(' ');
    message.push_str(&match target {
        GoalTarget::Pass => messages.to_pass.clone(),
        GoalTarget::Score(score) => render(
            &messages.to_achieve_score,
            &[("score", fmt_threshold(*score))],
        ),
        GoalTarget::Letter(label) => render(
            &messages.to_achieve_letter,
            &[("letter", label.clone())],
        ),
    });

    GoalResult::feasible(required, message)
}
