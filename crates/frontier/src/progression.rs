//! Front quality over time: prefix snapshots of an evaluation log.
//!
//! Purpose
//! - Rebuild the front on growing prefixes of a search log, score each front
//!   with a caller-supplied indicator (typically hypervolume, which this crate
//!   does not implement), and aggregate several runs into mean and standard
//!   error per snapshot.
//!
//! Recovery policy
//! - A prefix whose front cannot be built is "unavailable": it is logged, its
//!   value carries the previous one forward, and the series continues.
//! - Values are clamped to a running maximum over the series.

use std::fmt;

use tracing::warn;

use crate::error::FrontError;
use crate::front::{build_pareto_front_with, AnchorSelector};
use crate::types::{FrontCfg, Objective, ParetoFront, PointCloud};

/// Scalar quality of a front (e.g. hypervolume against a reference point).
pub trait FrontIndicator {
    fn measure(&self, front: &ParetoFront) -> f64;
}

impl<F> FrontIndicator for F
where
    F: Fn(&ParetoFront) -> f64,
{
    #[inline]
    fn measure(&self, front: &ParetoFront) -> f64 {
        self(front)
    }
}

/// Prefix sizes: dense steps early on, coarse steps later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub fine_step: usize,
    pub fine_until: usize,
    pub coarse_step: usize,
    /// Exclusive upper bound on prefix sizes.
    pub limit: usize,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            fine_step: 10,
            fine_until: 200,
            coarse_step: 100,
            limit: 10_000,
        }
    }
}

impl Schedule {
    /// Prefix sizes not exceeding `available` evaluations.
    pub fn prefix_sizes(&self, available: usize) -> Vec<usize> {
        let fine_step = self.fine_step.max(1);
        let coarse_step = self.coarse_step.max(1);
        let fine_until = self.fine_until.min(self.limit);
        (fine_step..fine_until)
            .step_by(fine_step)
            .chain((fine_until.max(fine_step)..self.limit).step_by(coarse_step))
            .take_while(|&n| n <= available)
            .collect()
    }
}

/// Front (or the reason it is unavailable) for each scheduled prefix.
pub fn front_series<S: AnchorSelector + ?Sized>(
    log: &PointCloud,
    objective1: &Objective,
    objective2: &Objective,
    cfg: FrontCfg,
    selector: &S,
    schedule: &Schedule,
) -> Vec<(usize, Result<ParetoFront, FrontError>)> {
    schedule
        .prefix_sizes(log.len())
        .into_iter()
        .map(|evals| {
            let front = build_pareto_front_with(
                &log[..evals],
                objective1.clone(),
                objective2.clone(),
                cfg,
                selector,
            );
            (evals, front)
        })
        .collect()
}

/// One point of a progression curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub evals: usize,
    pub value: f64,
    /// False if the front for this prefix could not be built.
    pub available: bool,
}

/// Non-decreasing indicator curve over prefix sizes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Progression {
    pub snapshots: Vec<Snapshot>,
}

impl Progression {
    pub fn evals(&self) -> Vec<usize> {
        self.snapshots.iter().map(|s| s.evals).collect()
    }
    pub fn values(&self) -> Vec<f64> {
        self.snapshots.iter().map(|s| s.value).collect()
    }
    pub fn unavailable(&self) -> usize {
        self.snapshots.iter().filter(|s| !s.available).count()
    }
}

/// Score every scheduled prefix with `indicator` and clamp to a running maximum.
pub fn indicator_series<S, I>(
    log: &PointCloud,
    objective1: &Objective,
    objective2: &Objective,
    cfg: FrontCfg,
    selector: &S,
    schedule: &Schedule,
    indicator: &I,
) -> Progression
where
    S: AnchorSelector + ?Sized,
    I: FrontIndicator + ?Sized,
{
    let mut best = 0.0f64;
    let mut snapshots = Vec::new();
    for (evals, front) in front_series(log, objective1, objective2, cfg, selector, schedule) {
        let available = match front {
            Ok(front) => {
                best = best.max(indicator.measure(&front));
                true
            }
            Err(err) => {
                warn!(evals, error = %err, "front unavailable");
                false
            }
        };
        snapshots.push(Snapshot {
            evals,
            value: best,
            available,
        });
    }
    Progression { snapshots }
}

/// Errors from multi-run aggregation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AggregateError {
    NoRuns,
    /// Run `run` has `found` snapshots where run 0 has `expected`.
    LengthMismatch {
        run: usize,
        expected: usize,
        found: usize,
    },
    /// Runs disagree on the prefix size of snapshot `index`.
    EvalsMismatch { index: usize },
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::NoRuns => write!(f, "no runs to aggregate"),
            AggregateError::LengthMismatch {
                run,
                expected,
                found,
            } => write!(
                f,
                "run {} has {} snapshots, expected {}",
                run, found, expected
            ),
            AggregateError::EvalsMismatch { index } => {
                write!(f, "runs disagree on prefix size at snapshot {}", index)
            }
        }
    }
}

impl std::error::Error for AggregateError {}

/// Mean and standard error of one snapshot across runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStats {
    pub evals: usize,
    pub mean: f64,
    /// Sample standard deviation over `sqrt(runs)`; zero for a single run.
    pub sem: f64,
}

/// Per-snapshot mean and standard error across equally scheduled runs.
pub fn aggregate_runs(runs: &[Progression]) -> Result<Vec<RunStats>, AggregateError> {
    let first = runs.first().ok_or(AggregateError::NoRuns)?;
    let expected = first.snapshots.len();
    for (run, p) in runs.iter().enumerate() {
        if p.snapshots.len() != expected {
            return Err(AggregateError::LengthMismatch {
                run,
                expected,
                found: p.snapshots.len(),
            });
        }
    }
    let n = runs.len() as f64;
    let mut out = Vec::with_capacity(expected);
    for index in 0..expected {
        let evals = first.snapshots[index].evals;
        if runs.iter().any(|p| p.snapshots[index].evals != evals) {
            return Err(AggregateError::EvalsMismatch { index });
        }
        let mean = runs.iter().map(|p| p.snapshots[index].value).sum::<f64>() / n;
        let sem = if runs.len() > 1 {
            let var = runs
                .iter()
                .map(|p| (p.snapshots[index].value - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0);
            var.sqrt() / n.sqrt()
        } else {
            0.0
        };
        out.push(RunStats { evals, mean, sem });
    }
    Ok(out)
}
