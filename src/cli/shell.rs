//! Line-oriented session over a single in-process store.
//!
//! Every failed command prints one `error:` line and the session goes on.

use super::render;
use anyhow::{Context, Result, bail};
use seaports::core::fields_from_json;
use seaports::query::narrow_options;
use seaports::{PortService, TableState};
use serde_json::Value as JsonValue;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  list                     show the current page
  count                    count ports matching the current filters
  get <id>                 show one port
  options <field> [term]   distinct values of a field, optionally narrowed
  create <json>            add a port, e.g. create {\"name\": \"Test\"}
  update <id> <json>       merge fields into a port
  delete <id>              remove a port
  search [term]            set or clear the free-text search
  filter <column> [value]  set or clear a column filter
  clear                    drop the search and every column filter
  sort <column>            cycle ascending, descending, unsorted
  columns                  list columns and their visibility
  toggle <column>          show or hide a column
  next | prev | page <n>   move between pages
  help                     this text
  quit                     leave the shell
";

pub enum Reply {
    Output(String),
    Quit,
}

pub struct Shell {
    service: PortService,
    table: TableState,
    total_count: usize,
}

impl Shell {
    pub fn new(service: PortService, page_size: usize) -> Self {
        Self {
            service,
            table: TableState::new(page_size),
            total_count: 0,
        }
    }

    #[cfg(test)]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("Sea ports shell. Type `help` for commands.");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("seaports> ");
            std::io::stdout().flush().context("failed to flush stdout")?;

            let Some(line) = lines.next_line().await.context("failed to read input")? else {
                break;
            };
            match self.handle(&line).await {
                Ok(Reply::Output(text)) => print!("{text}"),
                Ok(Reply::Quit) => break,
                Err(err) => println!("error: {err:#}"),
            }
        }
        Ok(())
    }

    pub async fn handle(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line, ""));

        let text = match command {
            "" => String::new(),
            "help" => HELP.to_string(),
            "quit" | "exit" => return Ok(Reply::Quit),
            "list" => self.list().await?,
            "count" => {
                let total = self.service.count(self.table.filters()).await?;
                format!("{total}\n")
            }
            "get" => {
                let record = self.service.get_one(required(rest, "get <id>")?).await?;
                format!("{}\n", render::record(&record))
            }
            "options" => {
                let (field, term) = split_word(required(rest, "options <field> [term]")?);
                let values = self.service.list_distinct_values(field).await?;
                render::options(&narrow_options(&values, term))
            }
            "create" => {
                let fields = parse_fields(required(rest, "create <json>")?)?;
                let record = self.service.create(fields).await?;
                format!("Created port {}\n", record.id())
            }
            "update" => {
                let (id, json) = split_word(required(rest, "update <id> <json>")?);
                let fields = parse_fields(required(json, "update <id> <json>")?)?;
                let record = self.service.update(id, fields).await?;
                format!("Updated port {}\n", record.id())
            }
            "delete" => {
                let id = required(rest, "delete <id>")?;
                self.service.remove(id).await?;
                format!("Deleted port {id}\n")
            }
            "search" => {
                self.table.set_search(rest);
                self.list().await?
            }
            "filter" => {
                let (column, value) = split_word(required(rest, "filter <column> [value]")?);
                if value.is_empty() {
                    self.table.clear_column_filter(column);
                } else {
                    self.table.apply_column_filter(column, value);
                }
                self.list().await?
            }
            "clear" => {
                self.table.clear_all_filters();
                self.list().await?
            }
            "sort" => {
                self.table.toggle_sort(required(rest, "sort <column>")?);
                self.list().await?
            }
            "columns" => self.columns(),
            "toggle" => {
                let column = required(rest, "toggle <column>")?;
                if !self.table.toggle_column_visibility(column) {
                    bail!("unknown column `{column}`");
                }
                self.columns()
            }
            "next" => {
                self.refresh_total().await?;
                if !self.table.next_page(self.total_count) {
                    bail!("already on the last page");
                }
                self.list().await?
            }
            "prev" => {
                if !self.table.previous_page() {
                    bail!("already on the first page");
                }
                self.list().await?
            }
            "page" => {
                let number: usize = required(rest, "page <n>")?
                    .parse()
                    .context("page number must be a positive integer")?;
                self.refresh_total().await?;
                self.table.set_page(number.saturating_sub(1), self.total_count);
                self.list().await?
            }
            other => bail!("unknown command `{other}`, try `help`"),
        };

        Ok(Reply::Output(text))
    }

    async fn list(&mut self) -> Result<String> {
        let result = self.service.query(&self.table.request()).await?;
        self.total_count = result.total_count;
        Ok(render::page(&self.table, &result))
    }

    /// Paging clamps against the count, which may be stale or never fetched.
    async fn refresh_total(&mut self) -> Result<()> {
        self.total_count = self.service.count(self.table.filters()).await?;
        Ok(())
    }

    fn columns(&self) -> String {
        self.table
            .columns()
            .iter()
            .map(|column| {
                let mark = if column.visible { "x" } else { " " };
                format!("[{mark}] {:<10} {}\n", column.id, column.accessor)
            })
            .collect()
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str> {
    if value.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(value)
}

fn split_word(input: &str) -> (&str, &str) {
    input
        .split_once(char::is_whitespace)
        .map(|(head, tail)| (head, tail.trim()))
        .unwrap_or((input, ""))
}

fn parse_fields(json: &str) -> Result<seaports::Fields> {
    let value: JsonValue = serde_json::from_str(json).context("payload is not valid JSON")?;
    Ok(fields_from_json(value)?)
}
