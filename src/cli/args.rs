use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use seaports::{FilterSpec, ServiceConfig, SortDirection, SortKey, TableState};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seaports")]
#[command(about = "Browse and edit the sea ports dataset")]
pub struct Cli {
    /// Fetch the ports document from this URL
    #[arg(long, global = true, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the ports document from a local file
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Answer immediately instead of simulating network delays
    #[arg(long, global = true)]
    pub no_latency: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of ports
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Field path to sort by
        #[arg(long)]
        sort: Option<String>,
        #[arg(long, requires = "sort")]
        desc: bool,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Count ports matching the filters
    Count {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show a single port
    Get { id: String },
    /// List the distinct values of a field
    Options {
        field: String,
        #[arg(long)]
        narrow: Option<String>,
    },
    /// Interactive session with create, update and delete
    Shell,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search over name, country, code, continent and province
    #[arg(long)]
    pub search: Option<String>,

    /// Column filter as `path=value`, repeatable
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

impl FilterArgs {
    pub fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(term) = &self.search {
            spec.search = term.clone();
        }
        for (path, value) in &self.filters {
            spec.set(path.clone(), value.clone());
        }
        spec
    }
}

fn parse_filter(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((path, value)) if !path.trim().is_empty() => {
            Ok((path.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected `path=value`, got `{raw}`")),
    }
}

impl Cli {
    /// Environment first, then command line flags on top.
    pub fn config(&self) -> Result<ServiceConfig> {
        let mut config = ServiceConfig::from_env()?;

        if let Some(url) = &self.url {
            config = config.url(url);
        }
        if let Some(path) = &self.file {
            config = config.file(path.clone());
        }
        if let Some(size) = self.page_size {
            anyhow::ensure!(size > 0, "--page-size must be at least 1");
            config = config.page_size(size);
        }
        if self.no_latency {
            config = config.without_latency();
        }
        Ok(config)
    }
}

/// Table state for a one-shot `list`.
pub fn list_table(
    page_size: usize,
    filters: &FilterArgs,
    sort: Option<&str>,
    desc: bool,
    page: usize,
) -> TableState {
    let mut table = TableState::new(page_size);
    let spec = filters.to_spec();
    table.set_search(spec.search.clone());
    for (path, value) in spec.active_columns() {
        table.apply_column_filter(path, value);
    }
    if let Some(field) = sort {
        let direction = if desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        table.set_sort(Some(SortKey::new(field, direction)));
    }
    table.jump_to(page.saturating_sub(1));
    table
}
