use anyhow::{bail, Context};
use marquee_lib::modules::{catalog::ItemType, identity::StaticIdentityProvider};
use marquee_lib::shared::{
    infrastructure::{AppConfig, CatalogStore},
    utils::init_logger,
};
use marquee_lib::{log_info, AppServices};
use std::sync::Arc;

const USAGE: &str = "Usage: marquee <search query> | marquee list <movie|show> [page]";

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum CliCommand {
    Search(String),
    List { item_type: ItemType, page: Option<u32> },
}

fn parse_args(args: &[String]) -> anyhow::Result<CliCommand> {
    match args {
        [command, item_type, rest @ ..] if command == "list" => {
            let item_type: ItemType = item_type.parse()?;
            let page = match rest {
                [] => None,
                [page] => Some(
                    page.parse::<u32>()
                        .with_context(|| format!("Invalid page number '{}'", page))?,
                ),
                _ => bail!(USAGE),
            };
            Ok(CliCommand::List { item_type, page })
        }
        _ => {
            let query = args.join(" ");
            if query.trim().is_empty() {
                bail!(USAGE);
            }
            Ok(CliCommand::Search(query))
        }
    }
}

/// Run one catalog search or listing against a seed file and print the
/// result as JSON.
///
/// `MARQUEE_SEED_FILE` must point at the seed.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to read configuration")?;
    init_logger(config.log_level);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    let Some(seed_file) = config.seed_file.as_ref() else {
        bail!("MARQUEE_SEED_FILE is not set");
    };
    let store = CatalogStore::load_seed_file(seed_file)
        .await
        .with_context(|| format!("Failed to load seed file {}", seed_file.display()))?;

    // Reads are anonymous
    let services = AppServices::new(
        Arc::new(store),
        Arc::new(StaticIdentityProvider::anonymous()),
        &config,
    );

    let output = match command {
        CliCommand::Search(query) => {
            let results = services.catalog.search(&query).await?;
            log_info!("{} item(s) matched '{}'", results.len(), query);
            serde_json::to_string_pretty(&results)?
        }
        CliCommand::List { item_type, page } => {
            let listing = services.catalog.list_items(item_type, page, None).await?;
            log_info!(
                "Listed page {} of {} for {}",
                listing.page,
                listing.total_pages,
                item_type
            );
            serde_json::to_string_pretty(&listing)?
        }
    };
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_words_become_search_query() {
        assert_eq!(
            parse_args(&args(&["after", "1972"])).unwrap(),
            CliCommand::Search("after 1972".to_string())
        );
        assert_eq!(
            parse_args(&args(&["list"])).unwrap(),
            CliCommand::Search("list".to_string())
        );
    }

    #[test]
    fn test_list_parses_item_type_and_page() {
        assert_eq!(
            parse_args(&args(&["list", "Shows", "2"])).unwrap(),
            CliCommand::List {
                item_type: ItemType::Show,
                page: Some(2)
            }
        );
        assert_eq!(
            parse_args(&args(&["list", "movie"])).unwrap(),
            CliCommand::List {
                item_type: ItemType::Movie,
                page: None
            }
        );
    }

    #[test]
    fn test_bad_arguments_rejected() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["list", "documentary"])).is_err());
        assert!(parse_args(&args(&["list", "movie", "two"])).is_err());
    }
}
