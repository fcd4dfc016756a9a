mod io;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use plcurve::curve::rand::{draw_curve, CurveCfg, PointCount, ReplayToken};
use plcurve::{reduce, sort_ascending, split, sum, truncate, value_at, CurveError, Monotone};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::io::{load_curve, load_points, write_json, FieldAxes};

#[derive(Parser)]
#[command(name = "plcurve")]
#[command(about = "Piecewise-linear curve algebra over JSON point files")]
struct Cmd {
    /// Field read as the independent coordinate
    #[arg(long, global = true, default_value = "x")]
    x_field: String,

    /// Field read as the dependent coordinate
    #[arg(long, global = true, default_value = "y")]
    y_field: String,

    /// Write the result here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report whether a curve is sorted by X
    Check { input: PathBuf },
    /// Stable sort by X, keeping every field
    Sort { input: PathBuf },
    /// Drop exactly collinear interior points, keeping every field
    Reduce { input: PathBuf },
    /// Split at X into two halves relative to the split point
    Split {
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
    },
    /// Restrict to [min, max], interpolating the endpoints
    Truncate {
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
    },
    /// Sum curves, each held constant beyond its own ends
    Sum {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Evaluate a curve at X
    Eval {
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
    },
    /// Emit a random monotone curve
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 16)]
        points: usize,
    },
}

#[derive(Serialize)]
struct CheckReport {
    monotone: bool,
    points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_decrease: Option<usize>,
}

#[derive(Serialize)]
struct SplitReport {
    at: f64,
    lhs: Value,
    rhs: Value,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let axes = FieldAxes {
        x: cmd.x_field,
        y: cmd.y_field,
    };
    let out = cmd.out.as_deref();
    let value = match cmd.action {
        Action::Check { input } => check(&input, &axes)?,
        Action::Sort { input } => {
            let points = load_points(&input, &axes)?;
            let sorted = sort_ascending(&points, &axes);
            tracing::info!(input = %input.display(), points = sorted.len(), "sort");
            records(sorted)
        }
        Action::Reduce { input } => {
            let curve = load_curve(&input, &axes)?;
            let reduced = reduce(&curve, &axes);
            tracing::info!(
                input = %input.display(),
                before = curve.len(),
                after = reduced.len(),
                "reduce"
            );
            records(reduced)
        }
        Action::Split { input, at } => {
            let curve = load_curve(&input, &axes)?;
            let (lhs, rhs) = split(&curve, &axes, at);
            tracing::info!(input = %input.display(), at, lhs = lhs.len(), rhs = rhs.len(), "split");
            serde_json::to_value(SplitReport {
                at,
                lhs: axes.curve_to_json(&lhs),
                rhs: axes.curve_to_json(&rhs),
            })?
        }
        Action::Truncate { input, min, max } => {
            let curve = load_curve(&input, &axes)?;
            let t = truncate(&curve, &axes, min, max);
            tracing::info!(input = %input.display(), min, max, points = t.len(), "truncate");
            axes.curve_to_json(&t)
        }
        Action::Sum { inputs } => {
            let curves = inputs
                .iter()
                .map(|p| load_curve(p, &axes))
                .collect::<Result<Vec<_>>>()?;
            let total = sum(&curves, &axes);
            tracing::info!(curves = curves.len(), points = total.len(), "sum");
            axes.curve_to_json(&total)
        }
        Action::Eval { input, at } => {
            let curve = load_curve(&input, &axes)?;
            let y = value_at(&curve, &axes, at);
            tracing::info!(input = %input.display(), at, y = ?y, "eval");
            y.map_or(Value::Null, Value::from)
        }
        Action::Sample {
            seed,
            index,
            points,
        } => {
            let cfg = CurveCfg {
                point_count: PointCount::Fixed(points),
                ..CurveCfg::default()
            };
            let curve = draw_curve(cfg, ReplayToken { seed, index });
            tracing::info!(seed, index, points, "sample");
            axes.curve_to_json(&curve)
        }
    };
    write_json(out, &value)
}

fn check(input: &Path, axes: &FieldAxes) -> Result<Value> {
    let points = load_points(input, axes)?;
    let n = points.len();
    let first_decrease = match Monotone::new(points, axes) {
        Ok(_) => None,
        Err(CurveError::NotMonotone { index, prev, next }) => {
            tracing::warn!(index, prev, next, "not monotone");
            Some(index)
        }
    };
    let report = CheckReport {
        monotone: first_decrease.is_none(),
        points: n,
        first_decrease,
    };
    tracing::info!(input = %input.display(), monotone = report.monotone, "check");
    Ok(serde_json::to_value(report)?)
}

fn records(curve: Monotone<io::Record>) -> Value {
    Value::Array(curve.into_inner().into_iter().map(Value::Object).collect())
}
