//! `summary`: the numbers behind the dashboard charts.

use ogp_core::{ApiClient, ChartDatum, FilterCriteria, ProductionData};
use ogp_data::aggregate::{self, AxisScale};
use ogp_data::format::{format_axis_tick, format_volume};
use std::fmt::Write;

pub async fn run_summary(client: &ApiClient, filters: &FilterCriteria) -> anyhow::Result<()> {
    let records = client.fetch_production(filters).await?;
    print!("{}", render_summary(&records)?);
    Ok(())
}

/// Per-date totals, per-region totals and the bar chart's y-axis.
pub fn render_summary(records: &[ProductionData]) -> anyhow::Result<String> {
    let by_date = aggregate::by_date(records);
    let by_region = aggregate::by_region(records);
    let scale = AxisScale::for_data(&by_date);

    let mut out = String::new();
    writeln!(out, "Records: {}", records.len())?;
    write_section(&mut out, "Production by date", &by_date)?;
    write_section(&mut out, "Production by region", &by_region)?;

    let ticks: Vec<String> = scale.ticks.iter().map(|t| format_axis_tick(*t)).collect();
    writeln!(out)?;
    writeln!(out, "Y axis max: {}", format_axis_tick(scale.max))?;
    writeln!(out, "Y axis ticks: {}", ticks.join(", "))?;
    Ok(out)
}

fn write_section(out: &mut String, title: &str, data: &[ChartDatum]) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    if data.is_empty() {
        writeln!(out, "  (none)")?;
    }
    let width = data.iter().map(|d| d.name.chars().count()).max().unwrap_or(0);
    for datum in data {
        writeln!(out, "  {:<width$}  {}", datum.name, format_volume(datum.value))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, date: &str, volume: f64, region: &str) -> ProductionData {
        ProductionData {
            well_name: name.to_string(),
            date: date.to_string(),
            oil_volume: volume,
            region: region.to_string(),
        }
    }

    #[test]
    fn summary_lists_sorted_dates_and_region_totals() {
        let records = vec![
            record("A", "2024-01-02", 10.0, "North"),
            record("B", "2024-01-01", 5.0, "North"),
        ];
        let out = render_summary(&records).unwrap();
        let first = out.find("2024-01-01").unwrap();
        let second = out.find("2024-01-02").unwrap();
        assert!(first < second);
        assert!(out.contains("  North  15"));
        assert!(out.contains("Y axis max: 11"));
    }

    #[test]
    fn empty_summary_has_zero_axis() {
        let out = render_summary(&[]).unwrap();
        assert!(out.contains("Records: 0"));
        assert!(out.contains("(none)"));
        assert!(out.contains("Y axis ticks: 0"));
    }
}
