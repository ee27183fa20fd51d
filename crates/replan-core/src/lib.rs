//! # Replan Core Library
//!
//! This library recovers a day of time-boxed blocks after real time has
//! drifted from the plan. It follows a CLI-first philosophy: the `replan`
//! binary is a thin layer that loads blocks, calls into this crate and writes
//! the result back.
//!
//! ## Architecture
//!
//! - **Replan Engine**: pure functions over a block snapshot and a clock
//!   reading. Three modes share one greedy first-fit packer:
//!   keep-priorities, salvage-streak and hard-reset
//! - **Drift Detector**: flags the first flexible block running late
//! - **Timeline**: free-slot detection around fixed commitments
//! - **Feasibility**: weekly time-budget checks and plan variants
//! - **Storage**: TOML configuration and the JSON block file
//!
//! ## Key Components
//!
//! - [`ReplanEngine`]: mode dispatch and tuning
//! - [`Block`]: a planned activity
//! - [`ReplanResult`]: revised blocks plus the action log
//! - [`Config`]: application configuration management

pub mod error;
pub mod feasibility;
pub mod replan;
pub mod schedule;
pub mod storage;
pub mod timeline;

pub use error::{ConfigError, CoreError, ValidationError};
pub use feasibility::{
    available_hours, check_feasibility, plan_variants, Constraints, FeasibilityResult,
    FeasibilityStatus, PlanVariant, VariantLevel,
};
pub use replan::{
    check_for_drift, generate_hard_reset_replan, generate_replan, generate_salvage_streak_replan,
    ActionRecord, ActionSummary, ReplanAction, ReplanConfig, ReplanEngine, ReplanMode,
    ReplanResult,
};
pub use schedule::{validate_blocks, Block, Category, Priority, TimeOfDay};
pub use storage::{BlockFile, Config};
pub use timeline::{FreeSlots, TimeSlot};
