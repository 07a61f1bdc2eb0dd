//! Settings profile validation.
//!
//! The evaluator and solver stay total over arbitrary profiles (a zero weight
//! sum evaluates to 0, an unsolvable weight split comes back as an infeasible
//! goal), so validation here is advisory: the application calls it before
//! persisting an edited profile to surface problems at save time instead of
//! at evaluation time.

use thiserror::Error;

use crate::model::GradeSettings;

/// Problems a settings profile can have.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A component weight is negative.
    #[error("negative {component} weight: {value}")]
    NegativeWeight { component: &'static str, value: f64 },

    /// Both weights are zero; every semester grade would evaluate to 0.
    #[error("midterm and final weights are both zero")]
    ZeroWeightSum,

    /// A configured minimum lies outside [0,100].
    #[error("{name} of {value} is outside 0..=100")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    /// A letter band whose lower bound exceeds its upper bound.
    #[error("letter grade range '{letter}' has min {min} greater than max {max}")]
    InvertedRange { letter: String, min: f64, max: f64 },

    /// Two letter bands share a label.
    #[error("duplicate letter grade label '{0}'")]
    DuplicateLetter(String),
}

impl GradeSettings {
    /// Check a profile for configuration mistakes.
    ///
    /// Reports the first problem found, in field order. Overlapping letter
    /// ranges are not an error: list order decides precedence.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.midterm_weight < 0.0 {
            return Err(SettingsError::NegativeWeight {
                component: "midterm",
                value: self.midterm_weight,
            });
        }
        if self.final_weight < 0.0 {
            return Err(SettingsError::NegativeWeight {
                component: "final",
                value: self.final_weight,
            });
        }
        if self.midterm_weight + self.final_weight == 0.0 {
            return Err(SettingsError::ZeroWeightSum);
        }
        for (name, value) in [
            ("minimum final grade", self.minimum_final_grade),
            ("minimum semester grade", self.minimum_semester_grade),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(SettingsError::ThresholdOutOfRange { name, value });
            }
        }
        for (i, range) in self.letter_grade_ranges.iter().enumerate() {
            if range.min > range.max {
                return Err(SettingsError::InvertedRange {
                    letter: range.letter.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
            if self.letter_grade_ranges[..i]
                .iter()
                .any(|r| r.letter == range.letter)
            {
                return Err(SettingsError::DuplicateLetter(range.letter.clone()));
            }
        }
        Ok(())
    }
}
