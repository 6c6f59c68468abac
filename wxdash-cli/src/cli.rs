use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use inquire::autocompletion::Replacement;
use inquire::{Autocomplete, CustomUserError, InquireError, Password, Text};
use wxdash_core::{
    Config, Dashboard, FileStore, IpLocationProvider, RecentSearches, WeatherClient,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxdash", version, about = "Terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current conditions and the 5-day forecast for a city.
    City {
        /// City name, e.g. "Kyiv" or "New York".
        name: String,
    },

    /// Show weather for the current location (resolved from your public IP).
    Here,

    /// Print recent searches.
    Recent {
        /// Clear the recent-search list instead of printing it.
        #[arg(long)]
        clear: bool,
    },
}

impl Cli {
    /// Without a subcommand, drops into the interactive prompt loop.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::City { name }) => {
                let mut dashboard = build_dashboard()?;
                dashboard.search_city(&name).await;
                report_outcome(&dashboard)
            }
            Some(Command::Here) => {
                let mut dashboard = build_dashboard()?;
                dashboard
                    .search_here()
                    .await
                    .map_err(|err| anyhow!("{err}"))?;
                report_outcome(&dashboard)
            }
            Some(Command::Recent { clear }) => {
                let store = FileStore::open_default()?;
                let mut recent = RecentSearches::load(Box::new(store));
                if clear {
                    recent.clear();
                    println!("Recent searches cleared.");
                } else {
                    render::print_recent(recent.entries());
                }
                Ok(())
            }
            None => interactive(build_dashboard()?).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

fn build_dashboard() -> Result<Dashboard> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;

    let store = FileStore::open_default()?;
    let recent = RecentSearches::load(Box::new(store));

    Ok(Dashboard::new(
        WeatherClient::new(api_key),
        Box::new(IpLocationProvider::new()),
        recent,
    ))
}

/// One-shot outcome: render the report, or fail with the query error message.
fn report_outcome(dashboard: &Dashboard) -> Result<()> {
    if let Some(report) = dashboard.report() {
        render::print_report(report);
        Ok(())
    } else if let Some(err) = dashboard.error() {
        Err(anyhow!("{}", err.message))
    } else {
        Ok(())
    }
}

/// Interactive outcome: errors render inline and the prompt returns.
fn print_outcome(dashboard: &Dashboard) {
    if let Some(report) = dashboard.report() {
        render::print_report(report);
    } else if let Some(err) = dashboard.error() {
        println!("{}", err.message);
    }
}

async fn interactive(mut dashboard: Dashboard) -> Result<()> {
    println!("wxdash interactive mode. Type a city name, :here, :clear, or :quit.");

    loop {
        let prompt = Text::new("City:")
            .with_autocomplete(RecentCompleter {
                entries: dashboard.recent_searches().to_vec(),
            })
            .prompt();

        let line = match prompt {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":clear" => {
                dashboard.clear_recent();
                println!("Recent searches cleared.");
            }
            ":here" => match dashboard.search_here().await {
                Ok(()) => print_outcome(&dashboard),
                Err(err) => println!("{err}"),
            },
            city => {
                dashboard.search_city(city).await;
                print_outcome(&dashboard);
            }
        }
    }

    Ok(())
}

/// Completes the city prompt from the recent-search list.
#[derive(Debug, Clone)]
struct RecentCompleter {
    entries: Vec<String>,
}

impl Autocomplete for RecentCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        let input = input.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.to_lowercase().starts_with(&input))
            .cloned()
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}
