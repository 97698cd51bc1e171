use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use relo_engine::config::AppConfig;
use relo_engine::error::AppError;
use relo_engine::telemetry;
use relo_engine::workflows::dispatch::FleetAssignmentOptimizer;
use relo_engine::workflows::estimating::{
    EstimateRequest, InventoryItem, PricingEngine, ServiceOption, TimeSlot,
};
use relo_engine::workflows::screening::{CustomerHistory, RiskScorer};

use crate::demo::{self, DemoArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Relocation Back Office Console",
    about = "Price moves, screen customers, and dispatch trucks from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a move from inventory, distance, and time-of-day
    Estimate(EstimateArgs),
    /// Score a customer's order history into a risk level
    Risk(RiskArgs),
    /// Select the most cost-efficient truck from the demo fleet
    Assign(AssignArgs),
    /// Run an end-to-end walkthrough over the bundled fixtures (default)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Trip distance in kilometers
    #[arg(long)]
    distance: f64,
    /// Move date (YYYY-MM-DD). Defaults to one business week out.
    #[arg(long, value_parser = parse_date)]
    move_date: Option<NaiveDate>,
    /// Departure window: normal, early_morning, or night
    #[arg(long, default_value = "normal")]
    time_slot: String,
    /// Inventory line as name:count:unit_points (repeatable)
    #[arg(long = "item")]
    items: Vec<String>,
    /// Optional service code (repeatable): packing, cleaning, storage, disposal
    #[arg(long = "option")]
    options: Vec<String>,
    /// Tax rate override; defaults to APP_DEFAULT_TAX_RATE
    #[arg(long)]
    tax_rate: Option<f64>,
    /// Emit the raw result as JSON instead of the rendered quote
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RiskArgs {
    #[arg(long, default_value_t = 0)]
    completed_orders: u32,
    #[arg(long, default_value_t = 0)]
    canceled_orders: u32,
    #[arg(long, default_value_t = 0)]
    late_payments: u32,
    #[arg(long, default_value_t = 0)]
    total_spent: i64,
    #[arg(long, default_value_t = 0)]
    account_age_days: u32,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AssignArgs {
    /// Inventory point total to move
    #[arg(long)]
    points: u32,
    /// Trip distance in kilometers
    #[arg(long)]
    distance: f64,
    /// Preferred service date (YYYY-MM-DD). Defaults to one business week out.
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Departure window: normal, early_morning, or night
    #[arg(long, default_value = "normal")]
    time_slot: String,
    #[arg(long)]
    json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config)?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Demo(DemoArgs::default()));
    let today = Local::now().date_naive();

    match command {
        Command::Estimate(args) => run_estimate(args, &config, today),
        Command::Risk(args) => run_risk(args),
        Command::Assign(args) => run_assign(args, today),
        Command::Demo(args) => demo::run_demo(args, &config, today),
    }
}

fn run_estimate(args: EstimateArgs, config: &AppConfig, today: NaiveDate) -> Result<(), AppError> {
    let items = if args.items.is_empty() {
        demo::demo_inventory()
    } else {
        args.items
            .iter()
            .map(|raw| parse_item(raw))
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::InvalidArgument)?
    };

    let request = EstimateRequest {
        distance_km: args.distance,
        items,
        time_slot: parse_time_slot(&args.time_slot),
        selected_options: args.options.iter().map(|raw| parse_option(raw)).collect(),
        move_date: args.move_date.unwrap_or_else(|| demo::default_move_date(today)),
        tax_rate: args.tax_rate.unwrap_or(config.estimating.default_tax_rate),
    };

    let engine = PricingEngine::default();
    let estimate = engine.calculate_estimate(&request, today)?;
    tracing::info!(total = estimate.total, "estimate priced");

    if args.json {
        println!("{}", render_json(&estimate));
    } else {
        demo::render_estimate(&estimate, engine.rates());
    }
    Ok(())
}

fn run_risk(args: RiskArgs) -> Result<(), AppError> {
    let history = CustomerHistory {
        completed_orders: args.completed_orders,
        canceled_orders: args.canceled_orders,
        late_payments: args.late_payments,
        total_spent: args.total_spent,
        account_age_days: args.account_age_days,
    };

    let assessment = RiskScorer::new().assess(&history);
    tracing::info!(level = assessment.risk_level.label(), "history scored");

    if args.json {
        println!("{}", render_json(&assessment));
    } else {
        demo::render_assessment(&assessment);
    }
    Ok(())
}

fn run_assign(args: AssignArgs, today: NaiveDate) -> Result<(), AppError> {
    let preferred_date = args.date.unwrap_or_else(|| demo::default_move_date(today));
    let request = relo_engine::workflows::dispatch::AssignmentRequest {
        total_points: args.points,
        distance_km: args.distance,
        time_slot: parse_time_slot(&args.time_slot),
        preferred_date,
    };

    let fleet = demo::demo_fleet(preferred_date);
    let result = FleetAssignmentOptimizer::default().find_optimal_assignment(&request, &fleet);
    tracing::info!(success = result.success, "fleet searched");

    if args.json {
        println!("{}", render_json(&result));
    } else {
        demo::render_assignment(&result);
    }
    Ok(())
}

fn render_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("'{value}' is not a YYYY-MM-DD date"))
}

/// Unrecognized slots fall through to `Other`, which carries no surcharge.
fn parse_time_slot(value: &str) -> TimeSlot {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => TimeSlot::Normal,
        "early_morning" => TimeSlot::EarlyMorning,
        "night" => TimeSlot::Night,
        _ => TimeSlot::Other,
    }
}

/// Unknown codes map to `Other` and price at zero, matching the engine's
/// treatment of unrecognized options.
fn parse_option(value: &str) -> ServiceOption {
    match value.trim().to_ascii_lowercase().as_str() {
        "packing" => ServiceOption::Packing,
        "cleaning" => ServiceOption::Cleaning,
        "storage" => ServiceOption::Storage,
        "disposal" => ServiceOption::Disposal,
        _ => ServiceOption::Other,
    }
}

fn parse_item(raw: &str) -> Result<InventoryItem, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [name, count, unit_points] = parts.as_slice() else {
        return Err(format!("'{raw}' is not name:count:unit_points"));
    };

    let count: u32 = count
        .parse()
        .map_err(|_| format!("'{count}' is not a valid count in '{raw}'"))?;
    let unit_points: u32 = unit_points
        .parse()
        .map_err(|_| format!("'{unit_points}' is not a valid point value in '{raw}'"))?;

    Ok(InventoryItem {
        name: name.trim().to_string(),
        count,
        unit_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inventory_items() {
        let item = parse_item("sofa:2:15").expect("item parses");
        assert_eq!(item.name, "sofa");
        assert_eq!(item.count, 2);
        assert_eq!(item.unit_points, 15);

        assert!(parse_item("sofa:2").is_err());
        assert!(parse_item("sofa:two:15").is_err());
    }

    #[test]
    fn unknown_slot_and_option_strings_degrade_gracefully() {
        assert_eq!(parse_time_slot("weekend"), TimeSlot::Other);
        assert_eq!(parse_time_slot("Early_Morning"), TimeSlot::EarlyMorning);
        assert_eq!(parse_option("piano"), ServiceOption::Other);
        assert_eq!(parse_option("Packing"), ServiceOption::Packing);
    }

    #[test]
    fn parses_iso_dates() {
        assert!(parse_date("2026-09-01").is_ok());
        assert!(parse_date("09/01/2026").is_err());
    }
}
