// Home Affordability Calculator - CLI Shell
// Loads scenario JSON, runs the engine, prints the breakdown and ratios.
// All rounding happens here; the engine stays at full precision.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use home_affordability::{
    compare_scenarios, compute_loan, evaluate, sweep, AffordabilityResult, LoanResult, RatioBand,
    RatioThresholds, Scenario, SweepRequest,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("evaluate") if args.len() >= 3 => run_evaluate(&args[2], args.get(3)),
        Some("compare") if args.len() >= 3 => run_compare(&args[2], args.get(3)),
        Some("sweep") if args.len() >= 3 => run_sweep(&args[2], args.get(3)),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("🏠 Home Affordability Calculator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Usage:");
    println!("  home-affordability evaluate <scenario.json> [thresholds.json]");
    println!("  home-affordability compare <scenarios.json> [thresholds.json]");
    println!("  home-affordability sweep <sweep.json> [thresholds.json]");
    println!();
    println!("Sample inputs live in demos/");
}

fn load_thresholds(path: Option<&String>) -> Result<RatioThresholds> {
    match path {
        Some(p) => RatioThresholds::from_file(p),
        None => Ok(RatioThresholds::default()),
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let content = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read input file: {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {}", path))
}

fn run_evaluate(input_path: &str, thresholds_path: Option<&String>) -> Result<()> {
    let scenario: Scenario = load_json(input_path)?;
    let thresholds = load_thresholds(thresholds_path)?;

    println!("🏠 Scenario: {}", scenario.name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let loan = match compute_loan(&scenario.loan) {
        Ok(loan) => loan,
        Err(e) => {
            eprintln!("❌ Invalid input — {}", e);
            std::process::exit(1);
        }
    };

    print_breakdown(&loan);

    match evaluate(&loan, &scenario.affordability, &thresholds) {
        Ok(result) => print_ratios(&result),
        Err(e) => {
            eprintln!("❌ Invalid input — {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_breakdown(loan: &LoanResult) {
    println!("\n💰 Loan");
    println!("   Loan amount:        ${:>12.2}", loan.loan_amount);
    println!("   Down payment:       ${:>12.2}", loan.down_payment);
    println!("   Total paid (P&I):   ${:>12.2}", loan.total_paid);
    println!("   Total interest:     ${:>12.2}", loan.total_interest);

    println!("\n📋 Monthly payment");
    println!("   Principal+interest: ${:>12.2}", loan.monthly_principal_interest);
    println!("   Property tax:       ${:>12.2}", loan.monthly_tax);
    println!("   Insurance:          ${:>12.2}", loan.monthly_insurance);
    println!("   PMI:                ${:>12.2}", loan.monthly_pmi);
    println!("   HOA:                ${:>12.2}", loan.monthly_hoa);
    println!("   ─────────────────────────────────");
    println!("   Total:              ${:>12.2}", loan.total_monthly_payment);
}

fn band_icon(band: RatioBand) -> &'static str {
    match band {
        RatioBand::Good => "🟢",
        RatioBand::Caution => "🟡",
        RatioBand::Unaffordable => "🔴",
    }
}

fn print_ratios(result: &AffordabilityResult) {
    println!("\n📊 Debt-to-income");
    println!(
        "   Front-end: {:>5.1}%  {} {}",
        result.front_end_ratio * 100.0,
        band_icon(result.front_end_band),
        result.front_end_band.name()
    );
    println!(
        "   Back-end:  {:>5.1}%  {} {}",
        result.back_end_ratio * 100.0,
        band_icon(result.back_end_band),
        result.back_end_band.name()
    );

    if result.is_affordable() {
        println!("\n✅ Within conventional affordability guidelines");
    } else {
        println!("\n⚠️  Outside conventional affordability guidelines");
    }
}

fn run_compare(input_path: &str, thresholds_path: Option<&String>) -> Result<()> {
    let scenarios: Vec<Scenario> = load_json(input_path)?;
    let thresholds = load_thresholds(thresholds_path)?;

    println!("🔀 Comparing {} scenarios", scenarios.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "{:<20} {:>12} {:>10} {:>10}  {}",
        "Scenario", "Monthly", "Front-end", "Back-end", "Verdict"
    );

    for outcome in compare_scenarios(&scenarios, &thresholds) {
        match &outcome.outcome {
            Ok(metrics) => {
                let a = &metrics.affordability;
                let verdict = if a.is_affordable() { "✅ affordable" } else { "⚠️  stretch" };
                println!(
                    "{:<20} {:>11.2} {:>9.1}% {:>9.1}%  {}",
                    outcome.scenario.name,
                    metrics.loan.total_monthly_payment,
                    a.front_end_ratio * 100.0,
                    a.back_end_ratio * 100.0,
                    verdict
                );
            }
            Err(e) => {
                println!("{:<20} ❌ invalid input — {}", outcome.scenario.name, e);
            }
        }
    }

    Ok(())
}

fn run_sweep(input_path: &str, thresholds_path: Option<&String>) -> Result<()> {
    let request: SweepRequest = load_json(input_path)?;
    let thresholds = load_thresholds(thresholds_path)?;

    println!("📈 Sweep: {} ({} points)", request.axis.label(), request.steps);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let points = match sweep(&request, &thresholds) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("❌ Invalid input — {}", e);
            std::process::exit(1);
        }
    };

    println!("{:>14} {:>12} {:>10}  Band", "Value", "Monthly", "Front-end");
    for point in points {
        println!(
            "{:>14.2} {:>11.2} {:>9.1}%  {} {}",
            point.value,
            point.total_monthly_payment,
            point.front_end_ratio * 100.0,
            band_icon(point.front_end_band),
            point.front_end_band.name()
        );
    }

    Ok(())
}
