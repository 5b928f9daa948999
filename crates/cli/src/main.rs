mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use frontier::prelude::*;
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{code_rev, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Pareto front extraction for evaluation logs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the front of a CSV/Parquet log and write it as JSON
    Front {
        #[command(flatten)]
        src: Source,
        #[arg(long)]
        out: PathBuf,
    },
    /// Build fronts on growing prefixes of a log
    Progression {
        #[command(flatten)]
        src: Source,
        #[arg(long, default_value_t = 10)]
        fine_step: usize,
        #[arg(long, default_value_t = 200)]
        fine_until: usize,
        #[arg(long, default_value_t = 100)]
        coarse_step: usize,
        #[arg(long, default_value_t = 10_000)]
        limit: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AnchorRule {
    MinXMaxY,
    MinXMaxX,
}

impl AnchorRule {
    fn selector(self) -> &'static dyn AnchorSelector {
        match self {
            AnchorRule::MinXMaxY => &MinXMaxY,
            AnchorRule::MinXMaxX => &MinXMaxX,
        }
    }
}

/// Input log, objective columns and pipeline knobs shared by subcommands.
#[derive(Args, Clone, Debug)]
struct Source {
    #[arg(long)]
    input: PathBuf,
    /// Objective-1 column (minimized unless --maximize-x)
    #[arg(long)]
    x: String,
    /// Objective-2 column (maximized unless --minimize-y)
    #[arg(long)]
    y: String,
    #[arg(long, default_value_t = 0.0)]
    alpha: f64,
    /// Initial best objective-2 value, in maximize units
    #[arg(long, allow_hyphen_values = true)]
    floor: Option<f64>,
    #[arg(long)]
    maximize_x: bool,
    #[arg(long)]
    minimize_y: bool,
    #[arg(long, value_enum, default_value_t = AnchorRule::MinXMaxY)]
    anchors: AnchorRule,
}

impl Source {
    fn objectives(&self) -> (Objective, Objective) {
        let o1 = if self.maximize_x {
            Objective::maximize(self.x.clone())
        } else {
            Objective::minimize(self.x.clone())
        };
        let o2 = if self.minimize_y {
            Objective::minimize(self.y.clone())
        } else {
            Objective::maximize(self.y.clone())
        };
        (o1, o2)
    }
    fn cfg(&self) -> FrontCfg {
        FrontCfg {
            alpha: self.alpha,
            floor: self.floor.unwrap_or(f64::NEG_INFINITY),
        }
    }
    fn params(&self) -> serde_json::Value {
        json!({
            "x": self.x,
            "y": self.y,
            "alpha": self.alpha,
            "floor": self.floor,
            "maximize_x": self.maximize_x,
            "minimize_y": self.minimize_y,
            "anchors": format!("{:?}", self.anchors),
        })
    }
}

#[derive(Serialize)]
struct ObjectiveOut {
    name: String,
    sense: &'static str,
}

impl From<&Objective> for ObjectiveOut {
    fn from(o: &Objective) -> Self {
        Self {
            name: o.name.clone(),
            sense: match o.sense {
                Sense::Minimize => "minimize",
                Sense::Maximize => "maximize",
            },
        }
    }
}

#[derive(Serialize)]
struct FrontOut {
    objective1: ObjectiveOut,
    objective2: ObjectiveOut,
    points: Vec<[f64; 2]>,
}

impl From<&ParetoFront> for FrontOut {
    fn from(f: &ParetoFront) -> Self {
        Self {
            objective1: f.objective1().into(),
            objective2: f.objective2().into(),
            points: f
                .points()
                .iter()
                .map(|p| [p.objective1, p.objective2])
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct SnapshotOut {
    evals: usize,
    front: Option<FrontOut>,
    error: Option<String>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Front { src, out } => front(&src, &out),
        Action::Progression {
            src,
            fine_step,
            fine_until,
            coarse_step,
            limit,
            out,
        } => {
            let schedule = Schedule {
                fine_step,
                fine_until,
                coarse_step,
                limit,
            };
            progression(&src, &schedule, &out)
        }
        Action::Report => report(),
    }
}

/// Read the two objective columns as points; nulls are an error.
fn load_points(input: &Path, x: &str, y: &str) -> Result<Vec<Point>> {
    let lf = match input.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(input, ScanArgsParquet::default())?,
        _ => LazyCsvReader::new(input)
            .with_infer_schema_length(Some(100))
            .finish()?,
    };
    let df = lf
        .select([col(x), col(y)])
        .collect()
        .with_context(|| format!("reading columns {x}, {y} from {}", input.display()))?;
    let xs = df.column(x)?.cast(&DataType::Float64)?;
    let ys = df.column(y)?.cast(&DataType::Float64)?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (a, b)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        match (a, b) {
            (Some(a), Some(b)) => points.push(Point::new(a, b)),
            _ => bail!("row {row} has a missing {x} or {y} value"),
        }
    }
    tracing::info!(rows = points.len(), input = %input.display(), "loaded");
    Ok(points)
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn front(src: &Source, out: &Path) -> Result<()> {
    tracing::info!(input = %src.input.display(), x = %src.x, y = %src.y, alpha = src.alpha, "front");
    let points = load_points(&src.input, &src.x, &src.y)?;
    let (o1, o2) = src.objectives();
    let front = build_pareto_front_with(&points, o1, o2, src.cfg(), src.anchors.selector())
        .with_context(|| format!("building front for {}", src.input.display()))?;
    tracing::info!(points = front.len(), "front_built");

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&FrontOut::from(&front))?)
        .with_context(|| format!("writing {}", out.display()))?;
    Provenance::new(src.params())
        .input(&src.input)
        .write_next_to(out)?;
    Ok(())
}

fn progression(src: &Source, schedule: &Schedule, out: &Path) -> Result<()> {
    tracing::info!(input = %src.input.display(), ?schedule, "progression");
    let points = load_points(&src.input, &src.x, &src.y)?;
    let (o1, o2) = src.objectives();
    let series = front_series(
        &points,
        &o1,
        &o2,
        src.cfg(),
        src.anchors.selector(),
        schedule,
    );
    let snapshots: Vec<SnapshotOut> = series
        .iter()
        .map(|(evals, res)| match res {
            Ok(f) => SnapshotOut {
                evals: *evals,
                front: Some(f.into()),
                error: None,
            },
            Err(e) => {
                tracing::warn!(evals, error = %e, "front unavailable");
                SnapshotOut {
                    evals: *evals,
                    front: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();
    tracing::info!(snapshots = snapshots.len(), "progression_built");

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&snapshots)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let mut params = src.params();
    params["schedule"] = json!({
        "fine_step": schedule.fine_step,
        "fine_until": schedule.fine_until,
        "coarse_step": schedule.coarse_step,
        "limit": schedule.limit,
    });
    Provenance::new(params).input(&src.input).write_next_to(out)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": code_rev(),
        "frontier_version": frontier::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn source(input: PathBuf, alpha: f64) -> Source {
        Source {
            input,
            x: "latency".into(),
            y: "accuracy_top1".into(),
            alpha,
            floor: None,
            maximize_x: false,
            minimize_y: false,
            anchors: AnchorRule::MinXMaxY,
        }
    }

    fn write_log(dir: &Path) -> PathBuf {
        let path = dir.join("log.csv");
        fs::write(
            &path,
            "config,latency,accuracy_top1\n\
             a,1,1\n\
             b,2,3\n\
             c,3,2\n\
             d,4,5\n\
             e,5,4\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn front_writes_json_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = write_log(dir.path());
        let out = dir.path().join("out").join("front.json");
        front(&source(input, 0.0), &out).unwrap();

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["objective1"]["name"], "latency");
        assert_eq!(parsed["objective2"]["sense"], "maximize");
        assert_eq!(parsed["points"], json!([[1.0, 1.0], [2.0, 3.0], [4.0, 5.0]]));
        assert!(dir.path().join("out").join("front.provenance.json").exists());
    }

    #[test]
    fn progression_marks_each_prefix() {
        let dir = tempdir().unwrap();
        let input = write_log(dir.path());
        let out = dir.path().join("prog.json");
        let schedule = Schedule {
            fine_step: 1,
            fine_until: 6,
            coarse_step: 1,
            limit: 6,
        };
        progression(&source(input, 0.0), &schedule, &out).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let snaps = parsed.as_array().unwrap();
        assert_eq!(snaps.len(), 5);
        assert_eq!(snaps[0]["evals"], 1);
        assert_eq!(snaps[0]["front"]["points"], json!([[1.0, 1.0]]));
        assert_eq!(snaps[4]["front"]["points"], json!([[1.0, 1.0], [2.0, 3.0], [4.0, 5.0]]));
    }

    #[test]
    fn missing_values_are_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("holes.csv");
        fs::write(&input, "latency,accuracy_top1\n1,1\n2,\n").unwrap();
        let err = load_points(&input, "latency", "accuracy_top1").unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
