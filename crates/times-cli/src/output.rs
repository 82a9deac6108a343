use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Render `rows` under `headers`. Columns whose cells are all numeric are
/// right-aligned.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    let mut numeric = vec![!rows.is_empty(); columns];
    for row in rows {
        for (i, cell) in row.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(cell.len());
            numeric[i] &= cell.parse::<i128>().is_ok();
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers, &widths, &numeric));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        let cells: Vec<&str> = row.iter().take(columns).map(String::as_str).collect();
        lines.push(render_row(&cells, &widths, &numeric));
    }
    lines.join("\n")
}

fn render_row(cells: &[&str], widths: &[usize], numeric: &[bool]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if numeric[i] {
                format!("{:>width$}", cell, width = widths[i])
            } else {
                format!("{:<width$}", cell, width = widths[i])
            }
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    println!("{}", format_table(headers, rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_align_right() {
        let table = format_table(
            &["width", "max"],
            &[
                vec!["i8".to_string(), "127".to_string()],
                vec!["i16".to_string(), "32767".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "width    max");
        assert_eq!(lines[1], "-----  -----");
        assert_eq!(lines[2], "i8       127");
        assert_eq!(lines[3], "i16    32767");
    }

    #[test]
    fn empty_table_has_header_only() {
        let table = format_table(&["a", "bb"], &[]);
        assert_eq!(table, "a  bb\n-  --");
    }
}
