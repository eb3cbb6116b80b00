//! Command-line flags.

use std::path::PathBuf;

use sme_bridge::Page;
use sme_core::bounds::ScenarioField;
use sme_core::insights::{CategoryFilter, Severity};
use sme_core::visuals::ChartPeriod;

use crate::error::{CliError, CliResult};

pub const USAGE: &str = "\
Usage: sme-dashboard [page] [options]

Pages:
  dashboard (default), profile, upload, visualizations, risks,
  recommendations, simulator, export

Options:
  --json                 Output as JSON instead of formatted text
  --preset NAME          Apply a quick scenario (e.g. \"Ramadan Boost\")
  --revenue-change N     Revenue change in percent (-30..50)
  --cost-reduction N     Cost reduction in percent (0..25)
  --staff N              Additional staff (0..10)
  --marketing N          Additional marketing spend (RM)
  --price-increase N     Price increase in percent (0..20)
  --category NAME        Recommendation category (all, Marketing, HR, ...)
  --severity LEVEL       Minimum risk severity (low, medium, high)
  --top N                Number of risks to show (default: 5)
  --risk-category NAME   Keep risks in this category or group (repeatable)
  --period P             Chart window (3months, 6months, 12months, 24months)
  --actions FILE         Replay a JSON array of dashboard requests
  --template NAME        Print a data template's header row as CSV
  --config FILE          JSON config file
  -h, --help             Show this message

Examples:
  sme-dashboard simulator --preset \"Ramadan Boost\"
  sme-dashboard simulator --revenue-change 25 --marketing 5000 --json
  sme-dashboard risks --severity medium --top 2
  sme-dashboard --actions session.json";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliArgs {
    pub page: Page,
    pub json: bool,
    pub help: bool,
    pub preset: Option<String>,
    /// Slider values in the order given.
    pub scenario: Vec<(ScenarioField, f64)>,
    pub category: Option<CategoryFilter>,
    pub severity: Option<Severity>,
    pub top: Option<usize>,
    pub risk_categories: Vec<String>,
    pub period: Option<ChartPeriod>,
    pub actions: Option<PathBuf>,
    pub template: Option<String>,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// The simulator runs when any scenario flag is present.
    pub fn wants_simulation(&self) -> bool {
        self.preset.is_some() || !self.scenario.is_empty()
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> CliResult<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut page_seen = false;
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            "--preset" => parsed.preset = Some(value(args, i)?.to_string()),
            "--revenue-change" => scenario(&mut parsed, ScenarioField::RevenueChange, args, i)?,
            "--cost-reduction" => scenario(&mut parsed, ScenarioField::CostReduction, args, i)?,
            "--staff" => scenario(&mut parsed, ScenarioField::StaffIncrease, args, i)?,
            "--marketing" => scenario(&mut parsed, ScenarioField::MarketingSpend, args, i)?,
            "--price-increase" => scenario(&mut parsed, ScenarioField::PriceIncrease, args, i)?,
            "--category" => parsed.category = Some(value(args, i)?.parse()?),
            "--severity" => parsed.severity = Some(value(args, i)?.parse()?),
            "--top" => {
                let raw = value(args, i)?;
                let top = raw
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        CliError::Usage(format!("--top requires a positive integer, got '{raw}'"))
                    })?;
                parsed.top = Some(top);
            }
            "--risk-category" => {
                let name = value(args, i)?.trim();
                if name.is_empty() {
                    return Err(CliError::Usage("--risk-category requires a name".into()));
                }
                parsed.risk_categories.push(name.to_string());
            }
            "--period" => parsed.period = Some(value(args, i)?.parse()?),
            "--actions" => parsed.actions = Some(PathBuf::from(value(args, i)?)),
            "--template" => parsed.template = Some(value(args, i)?.to_string()),
            "--config" => parsed.config = Some(PathBuf::from(value(args, i)?)),
            other if other.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown argument: {other}")));
            }
            other => {
                if page_seen {
                    return Err(CliError::Usage(format!("unexpected argument: {other}")));
                }
                parsed.page = other.parse()?;
                page_seen = true;
                i += 1;
                continue;
            }
        }
        i += if takes_value(arg) { 2 } else { 1 };
    }

    Ok(parsed)
}

fn takes_value(flag: &str) -> bool {
    !matches!(flag, "--json" | "-h" | "--help")
}

fn value(args: &[String], i: usize) -> CliResult<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("{} requires a value", args[i])))
}

fn scenario(
    parsed: &mut CliArgs,
    field: ScenarioField,
    args: &[String],
    i: usize,
) -> CliResult<()> {
    let raw = value(args, i)?;
    let number: f64 = raw
        .parse()
        .map_err(|_| CliError::Usage(format!("{} requires a number, got '{raw}'", args[i])))?;
    parsed.scenario.push((field, field.check(number)?));
    Ok(())
}
