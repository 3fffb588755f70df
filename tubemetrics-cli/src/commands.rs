//! CLI command implementations

use anyhow::anyhow;
use clap::Subcommand;
use tubemetrics_api::{DateRange, VideoDataService, YouTubeConfig};
use tubemetrics_web::handlers::params::{DayEdge, date_range_from_bounds, parse_iso_timestamp};
use tubemetrics_web::run_server;

fn max_results_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(1..=50)
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the JSON API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Print the current trending listing as JSON
    Trending {
        /// Two-letter region code
        #[arg(long, default_value = "US")]
        region: String,
        /// Number of results to request, 1-50
        #[arg(long, default_value_t = 50, value_parser = max_results_parser())]
        max_results: u8,
        /// Only keep videos in this upstream category
        #[arg(long)]
        category_id: Option<String>,
        /// Only keep videos published on or after this ISO 8601 date
        #[arg(long)]
        start_date: Option<String>,
        /// Only keep videos published on or before this ISO 8601 date
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Print the category id to name mapping as JSON
    Categories,
    /// Print channels ranked by aggregate trending views
    TopChannels {
        /// Two-letter region code
        #[arg(long, default_value = "US")]
        region: String,
        /// Number of results to request, 1-50
        #[arg(long, default_value_t = 50, value_parser = max_results_parser())]
        max_results: u8,
    },
    /// Search the trending listing by keyword
    Search {
        /// Substring matched against titles and channel names
        query: String,
        /// Two-letter region code
        #[arg(long, default_value = "US")]
        region: String,
        /// Number of results to request, 1-50
        #[arg(long, default_value_t = 50, value_parser = max_results_parser())]
        max_results: u8,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns an error when configuration is missing, an argument is malformed,
/// or the upstream fetch fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { host, port } => serve(host, port).await,
        Commands::Trending {
            region,
            max_results,
            category_id,
            start_date,
            end_date,
        } => trending(region, max_results, category_id, start_date, end_date).await,
        Commands::Categories => categories().await,
        Commands::TopChannels {
            region,
            max_results,
        } => top_channels(region, max_results).await,
        Commands::Search {
            query,
            region,
            max_results,
        } => search(query, region, max_results).await,
    }
}

fn service_from_env() -> anyhow::Result<VideoDataService> {
    let config = YouTubeConfig::from_env()?;
    Ok(VideoDataService::new(&config))
}

async fn serve(host: String, port: u16) -> anyhow::Result<()> {
    let service = service_from_env()?;
    run_server(service, &host, port).await?;
    Ok(())
}

async fn trending(
    region: String,
    max_results: u8,
    category_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
) -> anyhow::Result<()> {
    let service = service_from_env()?;
    let date_range = date_range_from_args(start_date.as_deref(), end_date.as_deref())?;

    let videos = service
        .fetch_trending(&region, max_results, category_id.as_deref(), date_range)
        .await?;
    println!("{}", serde_json::to_string_pretty(&videos)?);
    Ok(())
}

async fn categories() -> anyhow::Result<()> {
    let service = service_from_env()?;
    let categories = service.fetch_category_map().await?;
    println!("{}", serde_json::to_string_pretty(&categories)?);
    Ok(())
}

async fn top_channels(region: String, max_results: u8) -> anyhow::Result<()> {
    let service = service_from_env()?;
    let channels = service.fetch_top_channels(&region, max_results).await?;

    let pairs: Vec<_> = channels.iter().map(|c| c.as_pair()).collect();
    println!("{}", serde_json::to_string_pretty(&pairs)?);
    Ok(())
}

async fn search(query: String, region: String, max_results: u8) -> anyhow::Result<()> {
    let service = service_from_env()?;
    let videos = service
        .search_videos(&region, Some(query.as_str()), max_results)
        .await?;
    println!("{}", serde_json::to_string_pretty(&videos)?);
    Ok(())
}

/// Parses the optional date arguments with the same ISO 8601 rules as the
/// HTTP layer.
fn date_range_from_args(
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<Option<DateRange>> {
    let start = start
        .map(|raw| parse_iso_timestamp(raw, DayEdge::Start))
        .transpose()
        .map_err(|message| anyhow!(message))?;
    let end = end
        .map(|raw| parse_iso_timestamp(raw, DayEdge::End))
        .transpose()
        .map_err(|message| anyhow!(message))?;

    Ok(date_range_from_bounds(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_from_args_combines_bounds() {
        let range = date_range_from_args(Some("2024-03-01"), Some("2024-03-31"))
            .unwrap()
            .unwrap();
        assert!(range.start < range.end);
    }

    #[test]
    fn test_date_range_from_args_rejects_garbage() {
        assert!(date_range_from_args(Some("yesterday"), None).is_err());
    }

    #[test]
    fn test_date_range_from_args_absent() {
        assert_eq!(date_range_from_args(None, None).unwrap(), None);
    }
}
