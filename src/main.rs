mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::args::{Cli, Command, list_table};
use cli::render;
use cli::shell::Shell;
use seaports::PortService;
use seaports::query::narrow_options;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config().context("failed to load configuration")?;
    let service = PortService::from_config(&config);

    match cli.command {
        Command::List {
            filters,
            sort,
            desc,
            page,
        } => {
            let table = list_table(config.page_size, &filters, sort.as_deref(), desc, page);
            let result = service
                .query(&table.request())
                .await
                .context("failed to list ports")?;
            print!("{}", render::page(&table, &result));
        }
        Command::Count { filters } => {
            let total = service
                .count(&filters.to_spec())
                .await
                .context("failed to count ports")?;
            println!("{total}");
        }
        Command::Get { id } => {
            let record = service
                .get_one(&id)
                .await
                .with_context(|| format!("failed to load port {id}"))?;
            println!("{}", render::record(&record));
        }
        Command::Options { field, narrow } => {
            let values = service
                .list_distinct_values(&field)
                .await
                .with_context(|| format!("failed to list values of {field}"))?;
            let shown = narrow_options(&values, narrow.as_deref().unwrap_or(""));
            print!("{}", render::options(&shown));
        }
        Command::Shell => {
            Shell::new(service, config.page_size).run().await?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seaports=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
