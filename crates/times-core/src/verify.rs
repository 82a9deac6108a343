//! Brute-force property checks for the repeat operator.
//!
//! Each check runs [`repeat`] for one count and confirms the action saw
//! exactly `max(n, 0)` indices, ascending from zero with no gaps. The
//! narrow widths are enumerated in full; `i32` and `i64` use configured
//! boundary samples since enumerating them is impractical.

use crate::config::VerifyConfig;
use crate::count::Count;
use crate::error::{Result, TimesError};
use crate::repeat::repeat;
use crate::width::Width;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Exhaustive,
    Sampled,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::Sampled => "sampled",
        }
    }
}

/// The counts checked for a single width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub width: Width,
    pub strategy: Strategy,
    pub counts: Vec<i64>,
}

impl Plan {
    /// Every value from `MIN` to `MAX`. Only offered for `i8` and `i16`.
    pub fn exhaustive(width: Width) -> Option<Self> {
        match width {
            Width::I8 | Width::I16 => Some(Self {
                width,
                strategy: Strategy::Exhaustive,
                counts: (width.min()..=width.max()).collect(),
            }),
            Width::I32 | Width::I64 => None,
        }
    }

    pub fn sampled(width: Width, samples: &[i64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(TimesError::EmptySamples(width));
        }
        if let Some(&value) = samples.iter().find(|&&s| !width.contains(s)) {
            return Err(TimesError::InvalidSample { width, value });
        }
        Ok(Self {
            width,
            strategy: Strategy::Sampled,
            counts: samples.to_vec(),
        })
    }

    /// Exhaustive where feasible, configured samples otherwise.
    pub fn for_width(width: Width, config: &VerifyConfig) -> Result<Self> {
        match config.samples.for_width(width) {
            None => Self::exhaustive(width).ok_or(TimesError::EmptySamples(width)),
            Some(samples) => Self::sampled(width, samples),
        }
    }

    /// One plan per configured width, in configuration order.
    pub fn from_config(config: &VerifyConfig) -> Result<Vec<Self>> {
        config
            .widths
            .iter()
            .map(|&width| Self::for_width(width, config))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// The action ran the wrong number of times.
    RunCount { expected: u64, actual: u64 },
    /// The action saw `actual` as its `position`-th index.
    Index {
        position: u64,
        expected: i64,
        actual: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub width: Width,
    pub count: i64,
    #[serde(flatten)]
    pub kind: FailureKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub width: Width,
    pub strategy: Strategy,
    /// Number of counts checked.
    pub checked: u64,
    /// Total action invocations across all checked counts.
    pub invocations: u64,
    pub failures: Vec<Failure>,
    /// Set when checking stopped early because `max_failures` was reached.
    #[serde(default)]
    pub truncated: bool,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Outcome of checking a single count.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Check {
    invocations: u64,
    failure: Option<FailureKind>,
}

/// Drive `op` with count `n` and compare what the action observed with the
/// expected sequence `0..max(n, 0)`.
fn check_count<N, R>(n: N, op: &R) -> Check
where
    N: Count,
    R: Fn(N, &mut dyn FnMut(N)),
{
    let expected_runs = if n > N::ZERO { n.to_i64() as u64 } else { 0 };
    let mut runs: u64 = 0;
    let mut mismatch = None;

    op(n, &mut |index: N| {
        let expected = runs as i64;
        if mismatch.is_none() && index.to_i64() != expected {
            mismatch = Some(FailureKind::Index {
                position: runs,
                expected,
                actual: index.to_i64(),
            });
        }
        runs += 1;
    });

    let failure = match mismatch {
        Some(kind) => Some(kind),
        None if runs != expected_runs => Some(FailureKind::RunCount {
            expected: expected_runs,
            actual: runs,
        }),
        None => None,
    };
    Check {
        invocations: runs,
        failure,
    }
}

fn run_typed<N, R>(plan: &Plan, max_failures: usize, op: &R) -> Report
where
    N: Count,
    R: Fn(N, &mut dyn FnMut(N)),
{
    let width = N::WIDTH;
    let mut report = Report {
        width,
        strategy: plan.strategy,
        checked: 0,
        invocations: 0,
        failures: Vec::new(),
        truncated: false,
    };

    for &raw in &plan.counts {
        if max_failures > 0 && report.failures.len() >= max_failures {
            report.truncated = true;
            break;
        }
        // Plans are range-checked on construction; a stray value is skipped.
        let Some(n) = N::from_i64(raw) else {
            tracing::warn!(width = %width, count = raw, "count outside width, skipped");
            continue;
        };

        let check = check_count(n, op);
        report.checked += 1;
        report.invocations += check.invocations;
        if let Some(kind) = check.failure {
            tracing::warn!(width = %width, count = raw, ?kind, "repeat check failed");
            report.failures.push(Failure {
                width,
                count: raw,
                kind,
            });
        }
    }

    report
}

fn run_with<R8, R16, R32, R64>(plan: &Plan, max_failures: usize, ops: (R8, R16, R32, R64)) -> Report
where
    R8: Fn(i8, &mut dyn FnMut(i8)),
    R16: Fn(i16, &mut dyn FnMut(i16)),
    R32: Fn(i32, &mut dyn FnMut(i32)),
    R64: Fn(i64, &mut dyn FnMut(i64)),
{
    tracing::debug!(
        width = %plan.width,
        strategy = ?plan.strategy,
        counts = plan.counts.len(),
        "verifying"
    );
    let report = match plan.width {
        Width::I8 => run_typed::<i8, _>(plan, max_failures, &ops.0),
        Width::I16 => run_typed::<i16, _>(plan, max_failures, &ops.1),
        Width::I32 => run_typed::<i32, _>(plan, max_failures, &ops.2),
        Width::I64 => run_typed::<i64, _>(plan, max_failures, &ops.3),
    };
    tracing::info!(
        width = %report.width,
        checked = report.checked,
        invocations = report.invocations,
        failures = report.failures.len(),
        "verification finished"
    );
    report
}

fn repeat_op<N: Count>(n: N, action: &mut dyn FnMut(N)) {
    repeat(n, action)
}

/// Check every count in `plan` against [`repeat`].
///
/// `max_failures` caps the failures recorded before giving up on the width;
/// zero records all of them.
pub fn run(plan: &Plan, max_failures: usize) -> Report {
    run_with(
        plan,
        max_failures,
        (repeat_op::<i8>, repeat_op::<i16>, repeat_op::<i32>, repeat_op::<i64>),
    )
}

/// Build the plans for `config` and run each one.
pub fn run_config(config: &VerifyConfig) -> Result<Vec<Report>> {
    let plans = Plan::from_config(config)?;
    Ok(plans
        .iter()
        .map(|plan| run(plan, config.max_failures))
        .collect())
}
