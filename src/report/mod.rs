//! Rendering the comparison table.
//!
//! The table renders as CSV (the format downstream spreadsheets consume) or
//! JSON. Rendering is pure: the same rows always produce identical bytes.

use crate::models::InstanceRow;
use anyhow::{Context, Result};

/// Column headers, in the order downstream spreadsheets expect. The
/// `IGD_MOAE_D` spelling is historical; sheets built on earlier exports
/// reference it.
pub const COLUMNS: [&str; 13] = [
    "Instance",
    "HV_MOEA_D",
    "HV_COMOLS_D",
    "HV_NSGA2",
    "EPS_MOEA_D",
    "EPS_COMOLS_D",
    "EPS_NSGA2",
    "IGD_MOAE_D",
    "IGD_COMOLS_D",
    "IGD_NSGA2",
    "Kruskal Wallis Test (HV)",
    "Kruskal Wallis Test (EPS)",
    "Kruskal Wallis Test (IGD)",
];

/// Format a mean to `decimals` places. Missing and non-finite means render
/// as `nan`, the sentinel the table has always used for absent data.
pub fn format_mean(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{:.*}", decimals, v),
        _ => "nan".to_string(),
    }
}

/// Render rows as CSV with the fixed column order.
pub fn render_csv(rows: &[InstanceRow], decimals: usize) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(COLUMNS)?;

    for row in rows {
        let mut record = Vec::with_capacity(COLUMNS.len());
        record.push(row.instance.clone());
        for block in [&row.hypervolume, &row.epsilon_additive, &row.igd] {
            record.push(format_mean(block.moead, decimals));
            record.push(format_mean(block.comolsd, decimals));
            record.push(format_mean(block.nsga2, decimals));
        }
        record.push(row.kruskal_hv.to_string());
        record.push(row.kruskal_eps.to_string());
        record.push(row.kruskal_igd.to_string());
        writer.write_record(&record)?;
    }

    let data = writer.into_inner().context("Failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Render rows as pretty-printed JSON.
pub fn render_json(rows: &[InstanceRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("Failed to serialize table rows")
}
