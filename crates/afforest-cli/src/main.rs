// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use afforest_model::prelude::{AirQualityBand, Budgets, Catalog, CatalogLoader};
use afforest_solver::prelude::{
    ClockResolution, GeneticConfig, SolveReport, Solver, TracingMonitor,
};
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "afforest")]
#[command(about = "Plan a tree planting that maximizes desirability within area and cost limits")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Air quality index of the planting site
    aqi: i64,
    /// Available area
    area_limit: u64,
    /// Available budget
    cost_limit: u64,
    /// Number of people the planting serves
    population: u64,
    /// Search runtime in seconds
    runtime_secs: f64,

    /// Species catalog (JSON array of species records)
    #[arg(long, default_value = "data/tree_info.json")]
    catalog: PathBuf,
    /// Name index (JSON object of common name to position); defaults to
    /// `tree_idx.json` next to the catalog when that file exists
    #[arg(long)]
    index: Option<PathBuf>,
    /// Drop species with zero cost, zero area or non-finite scores instead of failing
    #[arg(long)]
    skip_degenerate: bool,
    #[arg(long, default_value_t = 20)]
    chromosomes: usize,
    /// Generations without significant improvement before the population is re-randomized
    #[arg(long, default_value_t = 30)]
    stagnation: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    max_generations: Option<u64>,
    /// Compare the exact elapsed time instead of whole seconds
    #[arg(long)]
    precise_clock: bool,
    /// Evaluate chromosomes on the rayon thread pool
    #[arg(long)]
    parallel: bool,
    #[arg(long, default_value_t = 1000)]
    log_every: u64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Append a JSON run record to this file
    #[arg(long)]
    record: Option<PathBuf>,
}

impl Cli {
    fn budgets(&self) -> Result<Budgets> {
        Budgets::new(self.area_limit, self.cost_limit, self.population)
            .map_err(|e| anyhow!("Invalid budgets: {e}"))
    }

    fn config(&self) -> Result<GeneticConfig> {
        if !self.runtime_secs.is_finite() || self.runtime_secs <= 0.0 {
            return Err(anyhow!(
                "Runtime must be a positive number of seconds, got {}",
                self.runtime_secs
            ));
        }
        let time_limit = Duration::try_from_secs_f64(self.runtime_secs)
            .with_context(|| format!("Runtime {} is out of range", self.runtime_secs))?;
        let resolution = if self.precise_clock {
            ClockResolution::Precise
        } else {
            ClockResolution::WholeSeconds
        };
        let config = GeneticConfig::default()
            .with_chromosome_count(self.chromosomes)
            .with_max_stagnant_generations(self.stagnation)
            .with_time_limit(time_limit)
            .with_clock_resolution(resolution)
            .with_max_generations(self.max_generations)
            .with_seed(self.seed)
            .with_parallel_evaluation(self.parallel)
            .with_log_every(self.log_every);
        config.validate().context("Invalid search configuration")?;
        Ok(config)
    }

    fn index_path(&self) -> Option<PathBuf> {
        if let Some(index) = &self.index {
            return Some(index.clone());
        }
        let sibling = self.catalog.with_file_name("tree_idx.json");
        sibling.is_file().then_some(sibling)
    }
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(catalog: &Path, index: Option<&Path>, skip_degenerate: bool) -> Result<Catalog> {
    let loader = CatalogLoader::default().skip_degenerate(skip_degenerate);
    match index {
        Some(index) => loader.from_paths(catalog, index).with_context(|| {
            format!(
                "Failed to load catalog {} with index {}",
                catalog.display(),
                index.display()
            )
        }),
        None => loader
            .from_path(catalog)
            .with_context(|| format!("Failed to load catalog {}", catalog.display())),
    }
}

/// JSON with tab indentation, matching the layout of the `Trees :` block.
fn to_tab_indented_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(out)?)
}

fn render_text(band: AirQualityBand, report: &SolveReport) -> Result<String> {
    let plan = report
        .plan
        .as_ref()
        .ok_or_else(|| anyhow!("No planting to render"))?;
    Ok(format!(
        "Air Quality : {} ({})\nTrees : {}\nScore : {:.6}\nArea : {}\nCost : {}",
        band.label(),
        band.zone(),
        to_tab_indented_json(plan.trees())?,
        plan.score(),
        plan.area(),
        plan.cost()
    ))
}

#[derive(Debug, Serialize)]
struct RunRecord {
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    aqi: i64,
    zone: String,
    area_limit: u64,
    cost_limit: u64,
    population: u64,
    seed: u64,
    generations: u64,
    restarts: u64,
    termination: String,
    score: Option<f64>,
    area: Option<u64>,
    cost: Option<u64>,
}

fn append_record(path: &Path, record: &RunRecord) -> Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open run record {}", path.display()))?;
    let line = serde_json::to_string(record)?;
    writeln!(f, "{line}")?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    enable_tracing();
    let cli = Cli::parse();

    let budgets = cli.budgets()?;
    let config = cli.config()?;
    let band = AirQualityBand::from_index(cli.aqi);
    let index = cli.index_path();
    let catalog = load_catalog(&cli.catalog, index.as_deref(), cli.skip_degenerate)?;

    tracing::info!(
        species = catalog.len(),
        band = band.label(),
        zone = %band.zone(),
        "Planning afforestation"
    );

    let start_ts = Utc::now();
    let t0 = Instant::now();
    let mut monitor = TracingMonitor::new(config.log_every);
    let report = Solver::new(config)
        .run(&catalog, &budgets, band.zone(), &mut monitor)
        .context("Search failed")?;
    let runtime = t0.elapsed();
    let end_ts = Utc::now();

    if let Some(path) = &cli.record {
        let plan = report.plan.as_ref();
        append_record(
            path,
            &RunRecord {
                start_ts,
                end_ts,
                runtime_ms: runtime.as_millis(),
                aqi: cli.aqi,
                zone: band.zone().to_string(),
                area_limit: cli.area_limit,
                cost_limit: cli.cost_limit,
                population: cli.population,
                seed: report.seed,
                generations: report.generations,
                restarts: report.restarts,
                termination: report.reason.to_string(),
                score: plan.map(|p| p.score()),
                area: plan.map(|p| p.area()),
                cost: plan.map(|p| p.cost()),
            },
        )?;
    }

    let Some(plan) = report.plan.as_ref() else {
        eprintln!(
            "No feasible planting found within area {} and cost {} after {} generations",
            cli.area_limit, cli.cost_limit, report.generations
        );
        return Ok(ExitCode::from(2));
    };

    match cli.format {
        OutputFormat::Text => println!("{}", render_text(band, &report)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(plan)?),
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use afforest_model::prelude::{CatalogBuilder, PriorityZone, ZoneScores};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments_in_order() {
        let cli = Cli::try_parse_from(["afforest", "320", "100", "500", "25", "2.5"]).unwrap();
        assert_eq!(cli.aqi, 320);
        assert_eq!(
            (cli.area_limit, cli.cost_limit, cli.population),
            (100, 500, 25)
        );
        assert_eq!(cli.runtime_secs, 2.5);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.catalog, PathBuf::from("data/tree_info.json"));

        let config = cli.config().unwrap();
        assert_eq!(config.time_limit, Duration::from_millis(2500));
        assert_eq!(config.chromosome_count, 20);
        assert_eq!(config.clock_resolution, ClockResolution::WholeSeconds);
    }

    #[test]
    fn test_options_flow_into_config() {
        let cli = Cli::try_parse_from([
            "afforest",
            "80",
            "100",
            "500",
            "25",
            "1",
            "--chromosomes",
            "40",
            "--stagnation",
            "10",
            "--seed",
            "7",
            "--max-generations",
            "300",
            "--precise-clock",
            "--parallel",
            "--format",
            "json",
        ])
        .unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.chromosome_count, 40);
        assert_eq!(config.max_stagnant_generations, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_generations, Some(300));
        assert_eq!(config.clock_resolution, ClockResolution::Precise);
        assert!(config.parallel_evaluation);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_negative_aqi_is_accepted_as_good() {
        let cli = Cli::try_parse_from(["afforest", "-5", "100", "500", "25", "1"]).unwrap();
        assert_eq!(cli.aqi, -5);
        let band = AirQualityBand::from_index(cli.aqi);
        assert_eq!(band, AirQualityBand::Good);
        assert_eq!(band.zone(), PriorityZone::ZoneIV);
    }

    #[test]
    fn test_skip_degenerate_drops_zero_cost_species() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trees.json");
        std::fs::write(
            &path,
            r#"[
                { "plantSpecies": "X", "commonName": "Gift",
                  "zoneI": 1, "zoneII": 1, "zoneIII": 1, "zoneIV": 1,
                  "utility": 1, "cost": 0, "area": 5 },
                { "plantSpecies": "Y", "commonName": "Paid",
                  "zoneI": 1, "zoneII": 1, "zoneIII": 1, "zoneIV": 1,
                  "utility": 1, "cost": 3, "area": 5 }
            ]"#,
        )
        .unwrap();

        assert!(load_catalog(&path, None, false).is_err());
        let catalog = load_catalog(&path, None, true).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.lookup("Gift").is_none());

        let cli = Cli::try_parse_from(["afforest", "80", "1", "1", "1", "1", "--skip-degenerate"])
            .unwrap();
        assert!(cli.skip_degenerate);
    }

    #[test]
    fn test_rejects_non_positive_runtime_and_budgets() {
        let cli = Cli::try_parse_from(["afforest", "80", "100", "500", "25", "0"]).unwrap();
        assert!(cli.config().is_err());
        let cli = Cli::try_parse_from(["afforest", "80", "0", "500", "25", "1"]).unwrap();
        assert!(cli.budgets().is_err());
    }

    #[test]
    fn test_render_text_layout() {
        let mut b = CatalogBuilder::new();
        b.add_species("Neem", ZoneScores::uniform(9.0), 8.0, 40, 20)
            .unwrap();
        b.add_species("Teak", ZoneScores::uniform(5.0), 9.0, 30, 15)
            .unwrap();
        let catalog = b.build().unwrap();
        let budgets = Budgets::new(40, 80, 1).unwrap();
        let report = Solver::new(
            GeneticConfig::default()
                .with_seed(Some(1))
                .with_max_generations(Some(50)),
        )
        .run(
            &catalog,
            &budgets,
            PriorityZone::ZoneI,
            &mut afforest_solver::prelude::NoopMonitor,
        )
        .unwrap();

        let text = render_text(AirQualityBand::from_index(320), &report).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Air Quality : Hazardous (Zone I)");
        assert_eq!(lines[1], "Trees : {");
        assert!(lines[2].starts_with("\t\""));
        assert!(text.contains("\nScore : "));
        assert!(text.contains("\nArea : "));
        assert!(text.contains("\nCost : "));
    }

    #[test]
    fn test_append_record_writes_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.jsonl");
        let record = RunRecord {
            start_ts: Utc::now(),
            end_ts: Utc::now(),
            runtime_ms: 12,
            aqi: 80,
            zone: "Zone IV".to_string(),
            area_limit: 100,
            cost_limit: 500,
            population: 25,
            seed: 3,
            generations: 40,
            restarts: 1,
            termination: "generation limit reached".to_string(),
            score: Some(10.5),
            area: Some(90),
            cost: Some(480),
        };
        append_record(&path, &record).unwrap();
        append_record(&path, &record).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        let parsed: serde_json::Value =
            serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(parsed["seed"], 3);
        assert_eq!(parsed["zone"], "Zone IV");
    }
}
