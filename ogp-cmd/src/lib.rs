//! Command implementations for the OGP terminal client.
//!
//! Every subcommand talks to the same backend as the web dashboard and
//! reuses its aggregation, validation and chat logic.

use clap::{Args, Subcommand, ValueEnum};
use ogp_core::{ApiClient, ApiConfig, FilterCriteria};

pub mod chat;
pub mod production;
pub mod summary;
pub mod wells;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch production records and print them
    Production {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print per-date and per-region production totals
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Fetch well locations, validate them and print the map extent
    Wells,

    /// Send one message to the chat assistant
    Chat {
        /// Message text
        message: String,
    },
}

/// Production filters; unset flags are omitted from the query.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Region name
    #[arg(long, value_parser = ["North", "South", "East", "West"])]
    pub region: Option<String>,

    /// Well name
    #[arg(long)]
    pub well_name: Option<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            start_date: args.start_date.unwrap_or_default(),
            end_date: args.end_date.unwrap_or_default(),
            region: args.region.unwrap_or_default(),
            well_name: args.well_name.unwrap_or_default(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

pub async fn run(config: ApiConfig, command: Command) -> anyhow::Result<()> {
    log::info!("Using backend {}", config.base_url());
    let client = ApiClient::new(config);
    match command {
        Command::Production { filters, format } => {
            production::run_production(&client, &filters.into(), format).await
        }
        Command::Summary { filters } => summary::run_summary(&client, &filters.into()).await,
        Command::Wells => wells::run_wells(&client).await,
        Command::Chat { message } => chat::run_chat(&client, &message).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_become_empty_criteria() {
        let args = FilterArgs {
            region: Some("North".to_string()),
            ..Default::default()
        };
        let criteria = FilterCriteria::from(args);
        assert_eq!(criteria.region, "North");
        assert_eq!(criteria.to_query_string(), "region=North");
    }
}
