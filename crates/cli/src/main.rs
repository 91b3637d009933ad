mod input;
mod output;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hulls::api::{compute_all, vertex_sets_agree, Push, Session};
use hulls::{compute_hull, AlgorithmChoice, Point};
use output::{CompareReport, HullReport};
use provenance::Payload;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "hulls-cli")]
#[command(about = "Convex hulls of integer point sets")]
#[command(version = hulls::VERSION)]
struct Cmd {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

/// Where the points come from.
#[derive(Args, Clone, Debug)]
struct Source {
    /// CSV file with integer `x` and `y` columns and a header row
    #[arg(long, conflicts_with = "random", required_unless_present = "random")]
    input: Option<PathBuf>,
    /// Draw this many random points on an 800x600 canvas instead
    #[arg(long)]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Sample --random points in a disk rather than the full canvas
    #[arg(long)]
    disk: bool,
}

impl Source {
    fn load(&self) -> Result<Vec<Point>> {
        match (&self.input, self.random) {
            (Some(path), _) => input::read_points_csv(path),
            (None, Some(n)) => Ok(input::random_points(n, self.seed, self.disk)),
            (None, None) => bail!("either --input or --random is required"),
        }
    }

    fn describe(&self) -> String {
        match (&self.input, self.random) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(n)) => format!("random:{n}:seed={}:disk={}", self.seed, self.disk),
            (None, None) => "none".to_string(),
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull and print (or write) it as JSON
    Hull {
        /// graham | jarvis | andrew | chan
        #[arg(long, default_value = "graham")]
        algo: AlgorithmChoice,
        #[command(flatten)]
        source: Source,
        /// Write the JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run every implemented algorithm and check that the vertex sets agree
    Compare {
        #[command(flatten)]
        source: Source,
    },
    /// Read `x y` lines from stdin until --target points are collected, then run the hull
    Collect {
        #[arg(long)]
        target: usize,
        #[arg(long, default_value = "graham")]
        algo: AlgorithmChoice,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull { algo, source, out } => hull(algo, &source, out.as_deref()),
        Action::Compare { source } => compare(&source),
        Action::Collect { target, algo } => collect(target, algo, std::io::stdin().lock()),
        Action::Report => report(),
    }
}

fn hull(algo: AlgorithmChoice, source: &Source, out: Option<&Path>) -> Result<()> {
    tracing::info!(algo = algo.key(), source = source.describe(), out = ?out, "hull");
    let points = source.load()?;
    let result = compute_hull(algo, &points);
    let report = HullReport::new(algo, &points, &result);
    let body = serde_json::to_vec_pretty(&report)?;
    match out {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(out_path, &body)
                .with_context(|| format!("writing {}", out_path.display()))?;
            let payload = Payload::new(serde_json::json!({
                "algo": algo.key(),
                "points": points.len(),
            }))
            .with_input(source.describe());
            let prov = provenance::write_sidecar(out_path, payload)?;
            tracing::info!(out = %out_path.display(), provenance = %prov.display(), "written");
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    result
        .map(|_| ())
        .with_context(|| format!("{} produced no hull", algo.label()))
}

fn compare(source: &Source) -> Result<()> {
    tracing::info!(source = source.describe(), "compare");
    let points = source.load()?;
    let results = compute_all(&points);
    let agree = vertex_sets_agree(&results);
    let report = CompareReport {
        agree,
        results: results
            .iter()
            .map(|(choice, r)| HullReport::new(*choice, &points, r))
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !agree {
        bail!("algorithms disagree on the hull vertex set");
    }
    Ok(())
}

fn collect<R: BufRead>(target: usize, algo: AlgorithmChoice, reader: R) -> Result<()> {
    let report = collect_report(target, algo, reader)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn collect_report<R: BufRead>(
    target: usize,
    algo: AlgorithmChoice,
    reader: R,
) -> Result<HullReport> {
    let mut session = Session::new(target)?;
    session.select(algo);
    for point in input::points_from_reader(reader) {
        match session.push(point?) {
            Push::Accepted { remaining } => tracing::debug!(remaining, "point accepted"),
            Push::Completed | Push::Ignored => break,
        }
    }
    let Some(outcome) = session.outcome() else {
        bail!(
            "input ended after {} of {} points",
            session.points().len(),
            session.target()
        );
    };
    if let Err(e) = outcome {
        tracing::warn!(error = %e, "no hull to show");
    }
    Ok(HullReport::new(session.selected(), session.points(), outcome))
}

fn report() -> Result<()> {
    let obj = provenance::block(serde_json::json!({}), &[], &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
