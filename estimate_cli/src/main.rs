//! # Estimate CLI
//!
//! Command-line front end for `estimate_core`: reads an estimation request
//! (JSON), optional prices (JSON) and engine settings (TOML), and prints a
//! shopping list as a text report or as JSON.
//!
//! ```text
//! estimate_cli estimate --request room.json --prices prices.json --budget 500
//! estimate_cli estimate --request room.json --json
//! estimate_cli check-config estimator.toml
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=estimate_core=debug`).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use estimate_core::project::BudgetStatus;
use estimate_core::{EstimationRequest, Estimator, EstimatorConfig, NoPrices, PriceBook, Project, ShoppingList};

#[derive(Parser, Debug)]
#[command(name = "estimate_cli", version, about = "Materials estimation and waste calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate a shopping list for a request
    Estimate {
        /// Estimation request (JSON)
        #[arg(long)]
        request: PathBuf,
        /// Price book (JSON): {"prices": {"<material>": "<price>"}}
        #[arg(long)]
        prices: Option<PathBuf>,
        /// Engine settings (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Compare the total against this budget
        #[arg(long)]
        budget: Option<Decimal>,
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// Validate an engine settings file and print the effective values
    CheckConfig { path: PathBuf },
}

/// JSON output of the `estimate` command
#[derive(Serialize)]
struct EstimateOutput<'a> {
    shopping_list: &'a ShoppingList,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<BudgetStatus>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            request,
            prices,
            config,
            budget,
            json,
        } => run_estimate(&request, prices.as_deref(), config.as_deref(), budget, json),
        Commands::CheckConfig { path } => run_check_config(&path),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_estimate(
    request_path: &Path,
    prices_path: Option<&Path>,
    config_path: Option<&Path>,
    budget: Option<Decimal>,
    json: bool,
) -> anyhow::Result<()> {
    let request = load_request(request_path)?;

    let config = match config_path {
        Some(path) => EstimatorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EstimatorConfig::default(),
    };
    let estimator = Estimator::new(config);

    let prices = match prices_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read prices {}", path.display()))?;
            let book = PriceBook::from_json_str(&text)
                .with_context(|| format!("invalid prices in {}", path.display()))?;
            debug!(event = "prices_loaded", path = %path.display(), count = book.len());
            Some(book)
        }
        None => None,
    };

    let (list, budget_status) = match budget {
        Some(amount) => {
            let project = Project::new(file_stem(request_path), request).with_budget(amount);
            let estimate = match &prices {
                Some(book) => project.estimate(&estimator, book)?,
                None => project.estimate(&estimator, &NoPrices)?,
            };
            (estimate.shopping_list, Some(estimate.budget))
        }
        None => {
            let list = match &prices {
                Some(book) => estimator.estimate(&request, book)?,
                None => estimator.estimate(&request, &NoPrices)?,
            };
            (list, None)
        }
    };

    if json {
        let output = EstimateOutput {
            shopping_list: &list,
            budget: budget_status,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_report(&request_summary(request_path), &list, budget_status.as_ref())?);
    }
    Ok(())
}

fn load_request(path: &Path) -> anyhow::Result<EstimationRequest> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read request {}", path.display()))?;
    let request: EstimationRequest =
        serde_json::from_str(&text).with_context(|| format!("invalid request in {}", path.display()))?;
    debug!(
        event = "request_loaded",
        path = %path.display(),
        project_type = %request.project_type,
        rooms = request.rooms.len(),
    );
    Ok(request)
}

fn run_check_config(path: &Path) -> anyhow::Result<()> {
    let config = EstimatorConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))?;
    println!("[OK] {}", path.display());
    println!();
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "estimate".to_string())
}

fn request_summary(path: &Path) -> String {
    file_stem(path).to_uppercase()
}

/// Text report for a shopping list.
fn render_report(title: &str, list: &ShoppingList, budget: Option<&BudgetStatus>) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "  SHOPPING LIST: {}", title)?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out)?;

    if list.items.is_empty() {
        writeln!(out, "  (nothing to buy)")?;
    }
    for item in &list.items {
        let cost = match item.estimated_total_cost {
            Some(cost) => format!("${:.2}", cost),
            None => "(no price)".to_string(),
        };
        writeln!(
            out,
            "  {:<22} {:>8} {:<7} {}",
            item.material_name,
            item.actual_purchase_quantity.normalize(),
            item.unit_of_measure.symbol(),
            cost
        )?;
        writeln!(
            out,
            "      need {:.2} {} + {}% waste = {:.2} {}",
            item.calculated_quantity,
            item.base_unit.symbol(),
            item.waste_factor_percent.normalize(),
            item.adjusted_quantity,
            item.base_unit.symbol()
        )?;
        if let Some(pieces) = &item.stock_pieces {
            let boards: Vec<String> = pieces
                .iter()
                .map(|p| format!("{} × {} ft", p.count, p.length_ft.normalize()))
                .collect();
            writeln!(out, "      boards: {}", boards.join(", "))?;
        }
    }

    if !list.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Warnings:")?;
        for warning in &list.warnings {
            writeln!(out, "  [WARN] {}", warning)?;
        }
    }

    if list.has_failures() {
        writeln!(out)?;
        writeln!(out, "Needs manual input:")?;
        for failure in &list.failures {
            writeln!(out, "  [FAIL] {}", failure)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "═══════════════════════════════════════")?;
    if list.is_partial() {
        let unpriced = list.items.iter().filter(|item| !item.is_priced()).count();
        writeln!(
            out,
            "  TOTAL: ${:.2} (partial, {} item(s) unpriced)",
            list.total_estimated_cost, unpriced
        )?;
    } else {
        writeln!(out, "  TOTAL: ${:.2}", list.total_estimated_cost)?;
    }
    match budget {
        Some(BudgetStatus::WithinBudget { remaining }) => {
            writeln!(out, "  BUDGET: [OK] ${:.2} remaining", remaining)?
        }
        Some(BudgetStatus::OverBudget { overage }) => {
            writeln!(out, "  BUDGET: [OVER] ${:.2} over budget", overage)?
        }
        Some(BudgetStatus::NoBudget) | None => {}
    }
    writeln!(out, "═══════════════════════════════════════")?;
    Ok(out)
}
