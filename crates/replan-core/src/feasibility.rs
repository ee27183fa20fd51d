//! Weekly time-budget arithmetic.
//!
//! Answers two questions for goal planning: does a plan of N hours per week
//! fit the hours left after sleep, work and commuting, and what do the
//! minimal / standard / aggressive variants of a goal look like in hours.

use std::fmt;

use serde::{Deserialize, Serialize};

const HOURS_PER_WEEK: f64 = 168.0;
/// Weekly hours reserved for chores and life admin.
const LIFE_ADMIN_BUFFER_HOURS: f64 = 10.0;
/// Share of available hours a plan may use and still be comfortable.
const GREEN_THRESHOLD_RATIO: f64 = 0.8;
/// Weekly hours above which the aggressive variant stops being tight.
const AGGRESSIVE_TIGHT_BELOW_HOURS: f64 = 20.0;
const AGGRESSIVE_CAP_HOURS: f64 = 24.0;

/// Fixed weekly commitments of the person planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum nightly sleep, hours
    #[serde(default = "default_sleep_floor")]
    pub sleep_floor: f64,
    #[serde(default = "default_work_hours_per_day")]
    pub work_hours_per_day: f64,
    #[serde(default = "default_work_days_per_week")]
    pub work_days_per_week: f64,
    #[serde(default = "default_commute_minutes_per_day")]
    pub commute_minutes_per_day: f64,
    #[serde(default = "default_weekly_goal_hours")]
    pub weekly_goal_hours: f64,
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: f64,
}

fn default_sleep_floor() -> f64 {
    7.0
}
fn default_work_hours_per_day() -> f64 {
    8.0
}
fn default_work_days_per_week() -> f64 {
    5.0
}
fn default_commute_minutes_per_day() -> f64 {
    30.0
}
fn default_weekly_goal_hours() -> f64 {
    10.0
}
fn default_monthly_budget() -> f64 {
    500.0
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            sleep_floor: default_sleep_floor(),
            work_hours_per_day: default_work_hours_per_day(),
            work_days_per_week: default_work_days_per_week(),
            commute_minutes_per_day: default_commute_minutes_per_day(),
            weekly_goal_hours: default_weekly_goal_hours(),
            monthly_budget: default_monthly_budget(),
        }
    }
}

/// Hours per week left for goals after fixed commitments; never negative.
pub fn available_hours(constraints: &Constraints) -> f64 {
    let sleep = constraints.sleep_floor * 7.0;
    let work = constraints.work_hours_per_day * constraints.work_days_per_week;
    let commute = constraints.commute_minutes_per_day * constraints.work_days_per_week / 60.0;

    (HOURS_PER_WEEK - sleep - work - commute - LIFE_ADMIN_BUFFER_HOURS).max(0.0)
}

/// Traffic-light rating of a plan against the weekly budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityStatus {
    Green,
    Yellow,
    Red,
}

impl FeasibilityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FeasibilityStatus::Green => "green",
            FeasibilityStatus::Yellow => "yellow",
            FeasibilityStatus::Red => "red",
        }
    }
}

impl fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    pub status: FeasibilityStatus,
    pub available_hours: f64,
    pub message: String,
}

/// Rate a plan of `plan_hours` per week.
///
/// Green up to 80% of the available hours, yellow up to 100%, red beyond.
pub fn check_feasibility(plan_hours: f64, constraints: &Constraints) -> FeasibilityResult {
    let available = available_hours(constraints);

    let (status, message) = if plan_hours <= available * GREEN_THRESHOLD_RATIO {
        (
            FeasibilityStatus::Green,
            "Plan fits comfortably within your time budget.",
        )
    } else if plan_hours <= available {
        (
            FeasibilityStatus::Yellow,
            "Tight execution required. Consider reducing scope.",
        )
    } else {
        (
            FeasibilityStatus::Red,
            "Plan exceeds available time. Must reduce scope or extend timeline.",
        )
    };

    FeasibilityResult {
        status,
        available_hours: available,
        message: message.to_string(),
    }
}

/// Scope level of a plan variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantLevel {
    /// Minimum viable goal
    Mvg,
    Standard,
    Aggressive,
}

impl VariantLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            VariantLevel::Mvg => "mvg",
            VariantLevel::Standard => "standard",
            VariantLevel::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for VariantLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanVariant {
    pub level: VariantLevel,
    /// Weekly hours, rounded to whole hours
    pub hours: u32,
    pub description: String,
    pub feasibility: FeasibilityStatus,
}

/// The three standard scopes for a goal, sized from the available hours.
pub fn plan_variants(constraints: &Constraints) -> Vec<PlanVariant> {
    let available = available_hours(constraints);
    let share = |ratio: f64| (available * ratio).round() as u32;

    let aggressive_feasibility = if available < AGGRESSIVE_TIGHT_BELOW_HOURS {
        FeasibilityStatus::Yellow
    } else {
        FeasibilityStatus::Green
    };

    vec![
        PlanVariant {
            level: VariantLevel::Mvg,
            hours: share(0.3),
            description: "Core fundamentals only".to_string(),
            feasibility: FeasibilityStatus::Green,
        },
        PlanVariant {
            level: VariantLevel::Standard,
            hours: share(0.6),
            description: "Balanced approach with key features".to_string(),
            feasibility: FeasibilityStatus::Green,
        },
        PlanVariant {
            level: VariantLevel::Aggressive,
            hours: share(0.9).min(AGGRESSIVE_CAP_HOURS as u32),
            description: "Full scope, tight execution".to_string(),
            feasibility: aggressive_feasibility,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constraints_leave_66_and_a_half_hours() {
        // 168 - 49 sleep - 40 work - 2.5 commute - 10 admin
        assert_eq!(available_hours(&Constraints::default()), 66.5);
    }

    #[test]
    fn available_hours_never_negative() {
        let overbooked = Constraints {
            work_hours_per_day: 16.0,
            work_days_per_week: 7.0,
            ..Constraints::default()
        };
        assert_eq!(available_hours(&overbooked), 0.0);
    }

    #[test]
    fn feasibility_thresholds() {
        let c = Constraints::default();
        // 80% of 66.5 = 53.2
        assert_eq!(check_feasibility(53.0, &c).status, FeasibilityStatus::Green);
        assert_eq!(check_feasibility(60.0, &c).status, FeasibilityStatus::Yellow);
        assert_eq!(check_feasibility(66.5, &c).status, FeasibilityStatus::Yellow);
        assert_eq!(check_feasibility(70.0, &c).status, FeasibilityStatus::Red);
    }

    #[test]
    fn variants_scale_and_cap() {
        let variants = plan_variants(&Constraints::default());
        assert_eq!(variants[0].level, VariantLevel::Mvg);
        assert_eq!(variants[0].hours, 20); // 19.95
        assert_eq!(variants[1].hours, 40); // 39.9
        assert_eq!(variants[2].hours, 24); // capped from 60
        assert_eq!(variants[2].feasibility, FeasibilityStatus::Green);
    }

    #[test]
    fn aggressive_is_tight_on_small_budgets() {
        let maxed = Constraints {
            work_hours_per_day: 13.5,
            work_days_per_week: 6.0,
            sleep_floor: 8.0,
            ..Constraints::default()
        };
        // 168 - 56 sleep - 81 work - 3 commute - 10 admin
        assert_eq!(available_hours(&maxed), 18.0);

        let variants = plan_variants(&maxed);
        assert_eq!(variants[2].feasibility, FeasibilityStatus::Yellow);
        assert_eq!(variants[2].hours, 16); // 16.2
    }

    #[test]
    fn display_names_match_serde() {
        for status in [FeasibilityStatus::Green, FeasibilityStatus::Yellow, FeasibilityStatus::Red] {
            assert_eq!(serde_json::to_value(status).unwrap(), status.as_str());
        }
        for level in [VariantLevel::Mvg, VariantLevel::Standard, VariantLevel::Aggressive] {
            assert_eq!(serde_json::to_value(level).unwrap(), level.to_string());
        }
    }
}
