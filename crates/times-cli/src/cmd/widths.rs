use crate::output::{print_json, print_table};
use serde::Serialize;
use times_core::Width;

#[derive(Serialize)]
struct WidthInfo {
    width: Width,
    bits: u32,
    min: i64,
    max: i64,
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let infos: Vec<WidthInfo> = Width::ALL
        .iter()
        .map(|&width| WidthInfo {
            width,
            bits: width.bits(),
            min: width.min(),
            max: width.max(),
        })
        .collect();

    if json {
        return print_json(&infos);
    }

    let rows = infos
        .iter()
        .map(|w| {
            vec![
                w.width.to_string(),
                w.bits.to_string(),
                w.min.to_string(),
                w.max.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    print_table(&["width", "bits", "min", "max"], &rows);
    Ok(())
}
