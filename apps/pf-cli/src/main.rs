use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pf_core::{PfError, PfResult};
use pf_flow::{FlowSnapshot, StateError};
use pf_stand::{Scenario, StandError, TestStand};

const DEFAULT_GRID: f64 = 50.0;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "P&ID flow viewer - test-stand valve states and fluid paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set valves, recompute flow, and print flowing pipes and lit ports
    Show {
        /// YAML scenario applied before the individual valve flags
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Open a solenoid or ball valve (repeatable)
        #[arg(long, value_name = "VALVE")]
        open: Vec<String>,
        /// Close a solenoid or ball valve (repeatable)
        #[arg(long, value_name = "VALVE")]
        close: Vec<String>,
        /// Set a ball valve opening, e.g. bv1=50 (repeatable)
        #[arg(long, value_name = "VALVE=PCT", value_parser = parse_ball)]
        ball: Vec<(String, f64)>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Dump the schematic layout
    Layout {
        /// Pixels per grid cell
        #[arg(long, default_value_t = DEFAULT_GRID)]
        grid: f64,
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
    /// Assemble the stand and check its wiring
    Validate,
    /// List every component with its kind, ports and links
    Components,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Stand(#[from] StandError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

impl From<CliError> for PfError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Stand(e) => e.into(),
            CliError::State(e) => e.into(),
            CliError::Json(e) => PfError::Serialization {
                what: e.to_string(),
            },
        }
    }
}

fn main() -> PfResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli.command).map_err(PfError::from)
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Show {
            scenario,
            open,
            close,
            ball,
            json,
        } => cmd_show(scenario.as_deref(), &open, &close, ball, json),
        Commands::Layout { grid, format } => cmd_layout(grid, format),
        Commands::Validate => cmd_validate(),
        Commands::Components => cmd_components(),
    }
}

fn parse_ball(arg: &str) -> Result<(String, f64), String> {
    let (name, pct) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected VALVE=PCT, got '{arg}'"))?;
    let pct: f64 = pct
        .trim()
        .parse()
        .map_err(|_| format!("'{pct}' is not a number"))?;
    Ok((name.trim().to_string(), pct))
}

/// Fold the command-line valve flags into one scenario so they apply
/// together with the file, all or nothing.
fn command_scenario(
    base: Option<Scenario>,
    open: &[String],
    close: &[String],
    ball: Vec<(String, f64)>,
    stand: &TestStand,
) -> CliResult<Scenario> {
    let mut scenario = base.unwrap_or_else(|| Scenario {
        name: "command line".to_string(),
        ..Scenario::default()
    });

    let graph = stand.network.graph();
    for (names, state) in [(open, true), (close, false)] {
        for name in names {
            let id = stand.network.id(name)?;
            match graph.kind(id) {
                Some(pf_graph::ComponentKind::BallValve) => {
                    let pct = if state { pf_flow::FULL_OPEN_PCT } else { 0.0 };
                    scenario.ball_valves.insert(name.clone(), pct);
                }
                _ => {
                    scenario.solenoids.insert(name.clone(), state);
                }
            }
        }
    }
    scenario.ball_valves.extend(ball);
    Ok(scenario)
}

fn cmd_show(
    scenario: Option<&Path>,
    open: &[String],
    close: &[String],
    ball: Vec<(String, f64)>,
    json: bool,
) -> CliResult<()> {
    let mut stand = pf_stand::build(DEFAULT_GRID)?;

    let base = scenario.map(Scenario::load_yaml).transpose()?;
    let scenario = command_scenario(base, open, close, ball, &stand)?;
    scenario.apply(&mut stand.network)?;
    stand.network.recompute_flow();

    let snapshot = stand.network.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&scenario.name, &snapshot);
    }
    Ok(())
}

fn print_snapshot(name: &str, snapshot: &FlowSnapshot) {
    println!("Scenario: {}", name);

    println!("\nFlowing pipes ({}):", snapshot.flowing.len());
    if snapshot.flowing.is_empty() {
        println!("  none");
    }
    for pipe in &snapshot.flowing {
        println!("  {}", pipe);
    }

    println!("\nLit ports:");
    if snapshot.highlights.is_empty() {
        println!("  none");
    }
    for (name, ports) in &snapshot.highlights {
        println!("  {:<8} {}", name, ports);
    }
}

fn cmd_layout(grid: f64, format: Format) -> CliResult<()> {
    let stand = pf_stand::build(grid)?;
    let out = match format {
        Format::Yaml => stand.layout.to_yaml()?,
        Format::Json => serde_json::to_string_pretty(&stand.layout)?,
    };
    print!("{}", out);
    Ok(())
}

fn cmd_validate() -> CliResult<()> {
    let graph = pf_stand::assemble().map_err(StandError::from)?;
    info!(components = graph.len(), rules = graph.rules().len(), "stand assembled");
    println!(
        "✓ Stand is valid ({} components, {} highlight rules)",
        graph.len(),
        graph.rules().len()
    );
    Ok(())
}

fn cmd_components() -> CliResult<()> {
    let graph = pf_stand::assemble().map_err(StandError::from)?;

    println!("{:<8} {:<16} {:<24} links", "name", "kind", "ports");
    for comp in graph.components() {
        let links: Vec<String> = comp
            .neighbors
            .iter()
            .filter_map(|(side, id)| graph.name(id).map(|n| format!("{side}->{n}")))
            .collect();
        let mut kind = comp.kind.label().to_string();
        if comp.terminal {
            kind.push_str(" (end)");
        }
        println!(
            "{:<8} {:<16} {:<24} {}",
            comp.name,
            kind,
            comp.ports.to_string(),
            links.join(" ")
        );
    }
    Ok(())
}
