use clap::Subcommand;
use replan_core::{available_hours, check_feasibility, plan_variants, Config};

#[derive(Subcommand)]
pub enum FeasibilityAction {
    /// Rate a weekly plan against the configured constraints
    Check {
        /// Planned hours per week
        plan_hours: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the minimal, standard and aggressive plan sizes
    Variants {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: FeasibilityAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let constraints = &config.constraints;

    match action {
        FeasibilityAction::Check { plan_hours, json } => {
            if !plan_hours.is_finite() || plan_hours < 0.0 {
                return Err(format!("plan hours must be a non-negative number: {plan_hours}").into());
            }
            let result = check_feasibility(plan_hours, constraints);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{}: {plan_hours}h of {:.1}h available",
                    result.status,
                    result.available_hours
                );
                println!("{}", result.message);
            }
        }
        FeasibilityAction::Variants { json } => {
            let variants = plan_variants(constraints);
            if json {
                println!("{}", serde_json::to_string_pretty(&variants)?);
            } else {
                println!("{:.1}h available per week", available_hours(constraints));
                for variant in &variants {
                    println!(
                        "  {:<10} {:>3}h  {:<6} {}",
                        variant.level.as_str(),
                        variant.hours,
                        variant.feasibility.as_str(),
                        variant.description
                    );
                }
            }
        }
    }
    Ok(())
}
