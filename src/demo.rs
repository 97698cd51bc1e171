use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use clap::Args;

use relo_engine::config::AppConfig;
use relo_engine::error::AppError;
use relo_engine::workflows::dispatch::{
    AssignmentRequest, AssignmentResult, FleetAssignmentOptimizer, Truck,
};
use relo_engine::workflows::estimating::{
    quote_lines, EstimateRequest, EstimateResult, InventoryItem, PricingEngine, RateTable,
    ServiceOption, TimeSlot,
};
use relo_engine::workflows::scheduling::{add_business_days, DateAvailabilityValidator};
use relo_engine::workflows::screening::{
    CustomerHistory, CustomerIntake, CustomerRecord, RiskAssessment, RiskScorer,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Preferred move date (YYYY-MM-DD). Defaults to one business week out.
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) move_date: Option<NaiveDate>,
}

/// First slot the sales desk offers by default: a business week from today.
pub(crate) fn default_move_date(today: NaiveDate) -> NaiveDate {
    add_business_days(today, 5)
}

pub(crate) fn demo_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            name: "dining table".to_string(),
            count: 1,
            unit_points: 10,
        },
        InventoryItem {
            name: "chair".to_string(),
            count: 4,
            unit_points: 5,
        },
        InventoryItem {
            name: "wardrobe".to_string(),
            count: 2,
            unit_points: 12,
        },
        InventoryItem {
            name: "moving box".to_string(),
            count: 20,
            unit_points: 1,
        },
    ]
}

pub(crate) fn demo_customer() -> CustomerRecord {
    CustomerRecord {
        last_name: " Tanaka ".to_string(),
        first_name: "Hiroshi".to_string(),
        email: "Hiroshi.Tanaka@Example.JP".to_string(),
        phone: "090-1234-5678".to_string(),
        postal_code: "1600022".to_string(),
        address: "3-5-1 Shinjuku, Shinjuku-ku, Tokyo".to_string(),
    }
}

pub(crate) fn demo_history() -> CustomerHistory {
    CustomerHistory {
        completed_orders: 6,
        canceled_orders: 2,
        late_payments: 1,
        total_spent: 420_000,
        account_age_days: 180,
    }
}

pub(crate) fn demo_fleet(preferred_date: NaiveDate) -> Vec<Truck> {
    let nearby = |offsets: &[i64]| -> BTreeSet<NaiveDate> {
        offsets
            .iter()
            .map(|offset| preferred_date + Duration::days(*offset))
            .collect()
    };

    vec![
        Truck {
            id: "t-101".to_string(),
            name: "2t short".to_string(),
            capacity_points: 80,
            cost_per_km: 110.0,
            availability: nearby(&[0, 1, 3]),
        },
        Truck {
            id: "t-202".to_string(),
            name: "3t standard".to_string(),
            capacity_points: 150,
            cost_per_km: 140.0,
            availability: nearby(&[0, 2]),
        },
        Truck {
            id: "t-303".to_string(),
            name: "4t long".to_string(),
            capacity_points: 300,
            cost_per_km: 210.0,
            availability: nearby(&[1, 4, 5]),
        },
    ]
}

pub(crate) fn run_demo(
    args: DemoArgs,
    config: &AppConfig,
    today: NaiveDate,
) -> Result<(), AppError> {
    let move_date = args.move_date.unwrap_or_else(|| default_move_date(today));
    tracing::info!(%move_date, "starting walkthrough");

    println!("== Customer intake ==");
    let customer = CustomerIntake::new().normalize(demo_customer())?;
    println!(
        "{} {} <{}> {} {}",
        customer.last_name, customer.first_name, customer.email, customer.phone, customer.postal_code
    );

    println!();
    println!("== Date availability ==");
    let blackout = BTreeSet::from([move_date + Duration::days(1)]);
    let decision = DateAvailabilityValidator::new().validate(move_date, today, &blackout);
    println!("{}: {}", move_date, decision.message);

    println!();
    println!("== Estimate ==");
    let engine = PricingEngine::default();
    let request = EstimateRequest {
        distance_km: 42.0,
        items: demo_inventory(),
        time_slot: TimeSlot::EarlyMorning,
        selected_options: BTreeSet::from([ServiceOption::Packing, ServiceOption::Cleaning]),
        move_date,
        tax_rate: config.estimating.default_tax_rate,
    };
    let estimate = engine.calculate_estimate(&request, today)?;
    render_estimate(&estimate, engine.rates());

    println!();
    println!("== Risk screening ==");
    let assessment = RiskScorer::new().assess(&demo_history());
    render_assessment(&assessment);

    println!();
    println!("== Fleet assignment ==");
    let assignment_request = AssignmentRequest {
        total_points: estimate.breakdown.total_points,
        distance_km: request.distance_km,
        time_slot: request.time_slot,
        preferred_date: move_date,
    };
    let optimizer = FleetAssignmentOptimizer::new(engine.surcharges().clone());
    let assignment =
        optimizer.find_optimal_assignment(&assignment_request, &demo_fleet(move_date));
    render_assignment(&assignment);

    Ok(())
}

pub(crate) fn render_estimate(estimate: &EstimateResult, rates: &RateTable) {
    println!(
        "{} points over {} km at {}/km ({})",
        estimate.breakdown.total_points,
        estimate.breakdown.distance_km,
        estimate.breakdown.base_rate_per_km,
        estimate.breakdown.time_slot.label()
    );
    for line in quote_lines(estimate, rates) {
        println!("  {:<24}{:>12}", line.label, line.amount);
    }
}

pub(crate) fn render_assessment(assessment: &RiskAssessment) {
    println!(
        "score {} ({})",
        assessment.risk_score,
        assessment.risk_level.label()
    );
    for factor in &assessment.factors {
        println!("  factor: {factor}");
    }
    for action in &assessment.recommended_actions {
        println!("  action: {action}");
    }
}

pub(crate) fn render_assignment(result: &AssignmentResult) {
    match &result.recommended_truck {
        Some(recommended) => {
            println!(
                "recommended: {} (cost {}, efficiency {:.4})",
                recommended.truck.name, recommended.total_cost, recommended.efficiency
            );
            for alternative in &result.alternatives {
                println!(
                    "  alternative: {} (cost {})",
                    alternative.truck.name, alternative.total_cost
                );
            }
            for entry in &result.cost_comparison {
                println!(
                    "  comparison: {:<16} cost {:>10} efficiency {:>6.2}",
                    entry.name, entry.cost, entry.efficiency
                );
            }
        }
        None => {
            println!("{}", result.message.unwrap_or("no recommendation"));
            for date in &result.alternative_dates {
                println!("  alternative date: {date}");
            }
        }
    }
}
