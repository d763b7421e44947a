//! Interactive browse shell: line-based events re-render the catalog.

use crate::catalog::{CatalogController, CatalogEvent, SortMode};
use crate::config::Config;
use crate::format::{render_sort_selector, Formatter};
use crate::store::{ProductSource, StoreClient};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const PROMPT: &str = "catalog> ";

const HELP: &str = "\
Commands:
  search <text>   filter by title (bare `search` clears); `/text` works too
  sort <mode>     default, price-asc, price-desc, rating-asc, rating-desc, title
  sorts           show the sort options
  page <n>        jump to page n
  next, n         next page
  prev, p         previous page
  help            this text
  quit, q         leave";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Event(CatalogEvent),
    Sorts,
    Help,
    Quit,
}

impl std::str::FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim_start();
        if let Some(term) = trimmed.strip_prefix('/') {
            return Ok(ShellCommand::Event(CatalogEvent::Search(term.to_string())));
        }

        let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(ShellCommand::Event(CatalogEvent::Search(rest.to_string()))),
            "sort" if rest.trim().is_empty() => Ok(ShellCommand::Sorts),
            "sort" => rest.parse::<SortMode>().map(|m| ShellCommand::Event(CatalogEvent::Sort(m))),
            "sorts" => Ok(ShellCommand::Sorts),
            "page" => rest
                .trim()
                .parse::<usize>()
                .map(|n| ShellCommand::Event(CatalogEvent::GoToPage(n)))
                .map_err(|_| format!("Not a page number: {:?}", rest.trim())),
            "next" | "n" => Ok(ShellCommand::Event(CatalogEvent::NextPage)),
            "prev" | "p" => Ok(ShellCommand::Event(CatalogEvent::PrevPage)),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "q" | "exit" => Ok(ShellCommand::Quit),
            _ => Err(format!("Unknown command: {}. Type `help` for commands.", word)),
        }
    }
}

/// Runs the interactive catalog browser.
pub struct BrowseCommand {
    config: Config,
}

impl BrowseCommand {
    /// Creates a new browse command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the catalog and browses it on stdin/stdout.
    pub async fn execute(&self) -> Result<()> {
        let client = StoreClient::new(&self.config).context("Failed to create HTTP client")?;
        debug!("Catalog endpoint: {}", client.endpoint());

        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        self.execute_with_source(&client, stdin, &mut stdout).await
    }

    /// Executes against a provided source and streams (for testing).
    pub async fn execute_with_source(
        &self,
        source: &impl ProductSource,
        input: impl AsyncBufRead + Unpin,
        output: &mut impl Write,
    ) -> Result<()> {
        let mut controller = CatalogController::new()
            .with_sort(self.config.sort)
            .with_reset_page_on_change(self.config.reset_page_on_change);
        controller.load(source).await;

        let formatter = Formatter::new(self.config.format);
        writeln!(output, "{}", formatter.format_view(&controller.view()))?;
        write_prompt(output)?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            if line.trim().is_empty() {
                write_prompt(output)?;
                continue;
            }

            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Event(event)) => {
                    controller.dispatch(event);
                    writeln!(output, "{}", formatter.format_view(&controller.view()))?;
                }
                Ok(ShellCommand::Sorts) => {
                    writeln!(output, "{}", render_sort_selector(controller.sort_mode()))?;
                }
                Ok(ShellCommand::Help) => writeln!(output, "{}", HELP)?,
                Ok(ShellCommand::Quit) => {
                    debug!("Quit requested");
                    break;
                }
                Err(message) => writeln!(output, "{}", message)?,
            }
            write_prompt(output)?;
        }

        info!("Browse session ended on page {}", controller.current_page());
        output.flush().context("Failed to flush output")?;
        Ok(())
    }
}

fn write_prompt(output: &mut impl Write) -> Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;
    Ok(())
}
