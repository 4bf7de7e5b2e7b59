//! `wells`: validate the well list the map would draw.

use ogp_core::ApiClient;
use ogp_data::wells::{validate_wells, Bounds, ValidationReport};
use std::fmt::Write;

pub async fn run_wells(client: &ApiClient) -> anyhow::Result<()> {
    let raw = client.fetch_wells().await?;
    let report = validate_wells(&raw);
    if report.valid.is_empty() {
        log::error!("No valid well data found");
    }
    print!("{}", render_wells(&report)?);
    Ok(())
}

pub fn render_wells(report: &ValidationReport) -> anyhow::Result<String> {
    let mut out = String::new();
    for well in &report.valid {
        writeln!(
            out,
            "{:<24} {:>11.6} {:>11.6}  {}",
            well.name, well.latitude, well.longitude, well.region
        )?;
    }
    writeln!(
        out,
        "{} valid, {} rejected",
        report.valid.len(),
        report.rejected_count()
    )?;
    for (index, reason) in &report.rejected {
        writeln!(out, "  record {}: {}", index, reason)?;
    }
    match Bounds::covering(&report.valid) {
        Some(b) => writeln!(
            out,
            "Bounds: ({:.6}, {:.6}) to ({:.6}, {:.6})",
            b.south_west.0, b.south_west.1, b.north_east.0, b.north_east.1
        )?,
        None => writeln!(out, "Bounds: default view")?,
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_rejections_and_bounds() {
        let raw = vec![
            json!({"name": "W1", "latitude": 24.0, "longitude": 54.0, "region": "North"}),
            json!({"name": "W2", "longitude": 55.0, "region": "South"}),
            json!({"well_name": "W3", "latitude": 25.0, "longitude": 55.0, "region": "East"}),
        ];
        let out = render_wells(&validate_wells(&raw)).unwrap();
        assert!(out.contains("2 valid, 1 rejected"));
        assert!(out.contains("record 1:"));
        assert!(out.contains("Bounds: (24.000000, 54.000000) to (25.000000, 55.000000)"));
    }

    #[test]
    fn no_wells_uses_default_view() {
        let out = render_wells(&ValidationReport::default()).unwrap();
        assert!(out.contains("0 valid, 0 rejected"));
        assert!(out.contains("Bounds: default view"));
    }
}
