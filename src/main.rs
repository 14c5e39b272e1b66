//! Nastenka - book recommendations in the terminal
//!
//! Loads the vectorizers, neighbor index and catalog once, then answers
//! one-shot or interactive queries against them.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use nastenka::cli::{Cli, Command};
use nastenka::commands;
use nastenka::config::ArtifactPaths;
use nastenka::storage::ArtifactStore;
use nastenka::ui::{self, Log};
use nastenka::Recommender;

fn main() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);

	match cli.command {
		Command::Recommend {
			ref title,
			ref description,
			neighbors,
			json,
			open,
		} => {
			let recommender = load(&cli)?.with_neighbors(neighbors);
			commands::recommend::run(&recommender, title, description, json, open)
		}
		Command::Repl { neighbors } => {
			let recommender = load(&cli)?.with_neighbors(neighbors);
			commands::repl::run(&recommender)
		}
		Command::Info => {
			let recommender = load(&cli)?;
			commands::info::run(&recommender)
		}
		Command::Help { ref subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(sub) {
					sub_cmd.print_help()?;
				} else {
					ui::error(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}

/// Load every artifact once; the resulting service is shared by the whole session
fn load(cli: &Cli) -> Result<Recommender> {
	let paths = ArtifactPaths::resolve(cli.artifacts.dir.as_deref(), &cli.artifacts.overrides());

	let start = std::time::Instant::now();
	let store = ArtifactStore::load(&paths).context("Cannot serve recommendations")?;
	ui::debug(&format!(
		"Artifacts ready in {:.2}s ({} books)",
		start.elapsed().as_secs_f32(),
		store.catalog().len()
	));

	Ok(Recommender::new(store))
}
