//! Reusable Dioxus RSX components for the production dashboard.

mod card;
mod chart_container;
mod chatbot;
mod error_display;
mod filter_form;
mod loading_spinner;
mod production_chart;
mod production_table;
mod regional_chart;
mod well_map;

pub use card::Card;
pub use chart_container::ChartContainer;
pub use chatbot::Chatbot;
pub use error_display::ErrorDisplay;
pub use filter_form::FilterForm;
pub use loading_spinner::LoadingSpinner;
pub use production_chart::ProductionChart;
pub use production_table::ProductionTable;
pub use regional_chart::RegionalChart;
pub use well_map::WellMap;
