//! `production`: print records as a table, CSV or JSON.

use crate::OutputFormat;
use log::info;
use ogp_core::{ApiClient, FilterCriteria, ProductionData};
use ogp_data::format::{format_table_date, format_volume};
use std::io::Write;

pub async fn run_production(
    client: &ApiClient,
    filters: &FilterCriteria,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let records = client.fetch_production(filters).await?;
    info!("Fetched {} production records", records.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_records(&records, format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write records in the requested format.
pub fn write_records<W: Write>(
    records: &[ProductionData],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => write_table(records, out),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for record in records {
                wtr.serialize(record)?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Same columns and formatting as the dashboard table.
fn write_table<W: Write>(records: &[ProductionData], out: &mut W) -> anyhow::Result<()> {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.well_name.clone(),
                format_volume(r.oil_volume),
                r.region.clone(),
                format_table_date(&r.date),
            ]
        })
        .collect();

    let header = ["Name", "Volume", "Region", "Date"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(
        out,
        "{:<w0$}  {:>w1$}  {:<w2$}  {:<w3$}",
        header[0],
        header[1],
        header[2],
        header[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )?;
    for row in &rows {
        writeln!(
            out,
            "{:<w0$}  {:>w1$}  {:<w2$}  {:<w3$}",
            row[0],
            row[1],
            row[2],
            row[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        )?;
    }
    writeln!(out, "{} records", rows.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProductionData> {
        vec![
            ProductionData {
                well_name: "A".to_string(),
                date: "2024-01-02".to_string(),
                oil_volume: 1234.5,
                region: "North".to_string(),
            },
            ProductionData {
                well_name: "Well B".to_string(),
                date: "2024-01-01".to_string(),
                oil_volume: 5.0,
                region: "South".to_string(),
            },
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_records(&sample(), format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_formats_like_dashboard() {
        let out = render(OutputFormat::Table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].contains("1,234.5"));
        assert!(lines[1].contains("Jan 2, 2024"));
        assert_eq!(lines[3], "2 records");
    }

    #[test]
    fn csv_has_header_and_rows_in_order() {
        let out = render(OutputFormat::Csv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "well_name,date,oil_volume,region");
        assert_eq!(lines[1], "A,2024-01-02,1234.5,North");
        assert_eq!(lines[2], "Well B,2024-01-01,5.0,South");
    }

    #[test]
    fn json_parses_back() {
        let out = render(OutputFormat::Json);
        let parsed: Vec<ProductionData> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn empty_table_still_has_header() {
        let mut buf = Vec::new();
        write_records(&[], OutputFormat::Table, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Name"));
        assert!(out.ends_with("0 records\n"));
    }
}
