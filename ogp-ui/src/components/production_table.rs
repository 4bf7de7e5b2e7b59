//! Production records as a plain table.

use crate::components::Card;
use dioxus::prelude::*;
use ogp_core::models::ProductionSnapshot;
use ogp_data::format::{format_table_date, format_volume};

const CELL_STYLE: &str = "padding: 8px 12px; border-bottom: 1px solid #eee; text-align: left;";

#[derive(Props, Clone, PartialEq)]
pub struct ProductionTableProps {
    pub snapshot: ProductionSnapshot,
}

/// One row per record, in the order received. Every record is rendered;
/// there is no paging.
#[component]
pub fn ProductionTable(props: ProductionTableProps) -> Element {
    let records = props.snapshot.records.clone();

    rsx! {
        Card {
            title: "Production Data".to_string(),
            div {
                class: "table-responsive",
                style: "overflow-x: auto; max-height: 420px; overflow-y: auto;",
                table {
                    class: "table",
                    style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                    thead {
                        tr {
                            th { style: CELL_STYLE, "Name" }
                            th { style: CELL_STYLE, "Volume" }
                            th { style: CELL_STYLE, "Region" }
                            th { style: CELL_STYLE, "Date" }
                        }
                    }
                    tbody {
                        for record in records.iter() {
                            tr {
                                td { style: CELL_STYLE, "{record.well_name}" }
                                td { style: CELL_STYLE, {format_volume(record.oil_volume)} }
                                td { style: CELL_STYLE, "{record.region}" }
                                td { style: CELL_STYLE, {format_table_date(&record.date)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
