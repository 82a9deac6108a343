use anyhow::Context;
use std::io::Write;
use times_core::{Count, Times, Width};

pub fn run(width: Width, raw_count: &str, quiet: bool, json: bool) -> anyhow::Result<()> {
    let count = width.parse_count(raw_count)?;
    tracing::debug!(%width, count, "repeating");
    match width {
        Width::I8 => run_as::<i8>(count, quiet, json),
        Width::I16 => run_as::<i16>(count, quiet, json),
        Width::I32 => run_as::<i32>(count, quiet, json),
        Width::I64 => run_as::<i64>(count, quiet, json),
    }
}

fn run_as<N: Count>(count: i64, quiet: bool, json: bool) -> anyhow::Result<()> {
    let n = N::from_i64(count)
        .with_context(|| format!("count {count} does not fit in {}", N::WIDTH))?;

    if quiet {
        let mut runs: u64 = 0;
        n.times(|_| runs += 1);
        println!("{runs}");
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if json {
        write_json(&mut out, n).context("failed to write indices")?;
    } else {
        n.try_times(|i| writeln!(out, "{i}"))
            .context("failed to write index")?;
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Stream `{width, count, indices, runs}` as the indices are produced, so
/// memory stays flat however large the count.
fn write_json<N: Count, W: Write>(out: &mut W, n: N) -> std::io::Result<()> {
    writeln!(out, "{{")?;
    writeln!(out, "  \"width\": \"{}\",", N::WIDTH)?;
    writeln!(out, "  \"count\": {n},")?;
    write!(out, "  \"indices\": [")?;
    let mut runs: u64 = 0;
    n.try_times(|i| {
        let sep = if runs == 0 { "" } else { "," };
        runs += 1;
        write!(out, "{sep}\n    {i}")
    })?;
    if runs > 0 {
        write!(out, "\n  ")?;
    }
    writeln!(out, "],")?;
    writeln!(out, "  \"runs\": {runs}")?;
    writeln!(out, "}}")
}
