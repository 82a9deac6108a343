use crate::output::{print_json, print_table};
use anyhow::Context;
use std::path::Path;
use times_core::config::{Config, WarnLevel};
use times_core::verify::{self, Failure, FailureKind, Report};
use times_core::Width;

pub fn run(config_path: Option<&Path>, widths: Vec<Width>, json: bool) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(config_path).context("failed to load config")?;
    if !widths.is_empty() {
        config.verify.widths = widths;
    }

    for w in config.validate() {
        match w.level {
            WarnLevel::Warning => tracing::warn!("{}", w.message),
            WarnLevel::Error => tracing::error!("{}", w.message),
        }
    }

    let reports =
        verify::run_config(&config.verify).context("failed to build verification plans")?;
    let passed = reports.iter().all(Report::passed);

    if json {
        let value = serde_json::json!({
            "passed": passed,
            "reports": reports,
        });
        print_json(&value)?;
    } else {
        print_reports(&reports);
    }

    if !passed {
        let failed: Vec<String> = reports
            .iter()
            .filter(|r| !r.passed())
            .map(|r| r.width.to_string())
            .collect();
        anyhow::bail!("verification failed for {}", failed.join(", "));
    }
    Ok(())
}

fn print_reports(reports: &[Report]) {
    if reports.is_empty() {
        println!("No widths selected.");
        return;
    }

    let rows = reports
        .iter()
        .map(|r| {
            vec![
                r.width.to_string(),
                r.strategy.as_str().to_string(),
                r.checked.to_string(),
                r.invocations.to_string(),
                r.failures.len().to_string(),
            ]
        })
        .collect::<Vec<_>>();
    print_table(
        &["width", "strategy", "checked", "invocations", "failures"],
        &rows,
    );

    for report in reports {
        for failure in &report.failures {
            println!("  {}", describe(failure));
        }
        if report.truncated {
            println!("  {}: stopped after {} failures", report.width, report.failures.len());
        }
    }
}

fn describe(failure: &Failure) -> String {
    match failure.kind {
        FailureKind::RunCount { expected, actual } => format!(
            "{} count={}: ran {actual} times, expected {expected}",
            failure.width, failure.count
        ),
        FailureKind::Index {
            position,
            expected,
            actual,
        } => format!(
            "{} count={}: invocation #{position} got index {actual}, expected {expected}",
            failure.width, failure.count
        ),
    }
}
