//! Partitioning constraints and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Daily budgets at or below this many whole minutes are rejected.
pub const MIN_DAILY_MINUTES: u64 = 10;

/// Constraint as requested by a caller, before validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ConstraintInput {
    /// Fill each day up to a time budget
    TimeBased {
        /// Study minutes per day; must be more than ten whole minutes
        daily_minutes: f64,
    },
    /// Spread the playlist over a number of days
    DayBased {
        /// Number of days; must be positive
        total_days: i64,
    },
}

impl ConstraintInput {
    /// Time-based input from a daily budget in hours.
    pub fn from_daily_hours(hours: f64) -> Self {
        ConstraintInput::TimeBased {
            daily_minutes: hours * 60.0,
        }
    }
}

/// A validated partitioning rule stored alongside a schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Constraint {
    /// Each day holds at most `daily_seconds` of video, except for a single
    /// video longer than the budget
    TimeBased { daily_seconds: u64 },
    /// The playlist is split evenly across at most `total_days` days
    DayBased { total_days: u32 },
}

impl TryFrom<ConstraintInput> for Constraint {
    type Error = ScheduleError;

    fn try_from(input: ConstraintInput) -> Result<Self> {
        match input {
            ConstraintInput::TimeBased { daily_minutes } => {
                if !daily_minutes.is_finite() {
                    return Err(ScheduleError::invalid_constraint(
                        "Daily study time must be a finite number of minutes",
                    ));
                }
                let whole_minutes = daily_minutes.trunc();
                if whole_minutes <= MIN_DAILY_MINUTES as f64 {
                    return Err(ScheduleError::invalid_constraint(format!(
                        "Daily study time must be greater than {MIN_DAILY_MINUTES} minutes"
                    )));
                }
                Ok(Constraint::TimeBased {
                    daily_seconds: (whole_minutes as u64).saturating_mul(60),
                })
            }
            ConstraintInput::DayBased { total_days } => {
                if total_days <= 0 {
                    return Err(ScheduleError::invalid_constraint(
                        "Target days must be greater than 0",
                    ));
                }
                let total_days = u32::try_from(total_days).map_err(|_| {
                    ScheduleError::invalid_constraint(format!(
                        "Target days must be at most {}",
                        u32::MAX
                    ))
                })?;
                Ok(Constraint::DayBased { total_days })
            }
        }
    }
}

impl Constraint {
    /// Convert the mode to its database string representation
    pub fn mode_str(&self) -> &'static str {
        match self {
            Constraint::TimeBased { .. } => "time-based",
            Constraint::DayBased { .. } => "day-based",
        }
    }

    /// The numeric parameter of the constraint (seconds or days).
    pub fn value(&self) -> u64 {
        match self {
            Constraint::TimeBased { daily_seconds } => *daily_seconds,
            Constraint::DayBased { total_days } => u64::from(*total_days),
        }
    }

    /// Rebuild a constraint from its stored mode and value.
    pub fn from_parts(mode: &str, value: u64) -> std::result::Result<Self, String> {
        match mode {
            "time-based" => Ok(Constraint::TimeBased {
                daily_seconds: value,
            }),
            "day-based" => u32::try_from(value)
                .map(|total_days| Constraint::DayBased { total_days })
                .map_err(|_| format!("Day count out of range: {value}")),
            _ => Err(format!("Invalid constraint mode: {mode}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_based_requires_more_than_ten_minutes() {
        for minutes in [0.0, -30.0, 10.0, 10.9, f64::NAN, f64::INFINITY] {
            let err = Constraint::try_from(ConstraintInput::TimeBased {
                daily_minutes: minutes,
            })
            .unwrap_err();
            assert!(matches!(err, ScheduleError::InvalidConstraint { .. }));
        }

        let constraint = Constraint::try_from(ConstraintInput::TimeBased {
            daily_minutes: 11.0,
        })
        .unwrap();
        assert_eq!(constraint, Constraint::TimeBased { daily_seconds: 660 });
    }

    #[test]
    fn test_daily_hours_truncate_to_whole_minutes() {
        let constraint = Constraint::try_from(ConstraintInput::from_daily_hours(1.5)).unwrap();
        assert_eq!(
            constraint,
            Constraint::TimeBased {
                daily_seconds: 5400
            }
        );

        let partial = Constraint::try_from(ConstraintInput::TimeBased {
            daily_minutes: 45.7,
        })
        .unwrap();
        assert_eq!(partial.value(), 2700);
    }

    #[test]
    fn test_day_based_requires_positive_days() {
        for days in [0, -1] {
            assert!(Constraint::try_from(ConstraintInput::DayBased { total_days: days }).is_err());
        }
        assert_eq!(
            Constraint::try_from(ConstraintInput::DayBased { total_days: 7 }).unwrap(),
            Constraint::DayBased { total_days: 7 }
        );
    }

    #[test]
    fn test_parts_round_trip() {
        let constraint = Constraint::DayBased { total_days: 3 };
        let rebuilt = Constraint::from_parts(constraint.mode_str(), constraint.value()).unwrap();
        assert_eq!(rebuilt, constraint);
        assert!(Constraint::from_parts("weekly", 1).is_err());
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(Constraint::TimeBased {
            daily_seconds: 3600,
        })
        .unwrap();
        assert_eq!(json["mode"], "time-based");
        assert_eq!(json["daily_seconds"], 3600);

        let input: ConstraintInput =
            serde_json::from_str(r#"{"mode":"day-based","total_days":5}"#).unwrap();
        assert_eq!(input, ConstraintInput::DayBased { total_days: 5 });
    }
}
