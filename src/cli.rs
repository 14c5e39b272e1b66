use clap::{builder::Styles, Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{ArtifactOverrides, DEFAULT_NEIGHBORS};

fn parse_neighbors(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid count", s))?;
	if val == 0 {
		Err("must return at least one neighbor".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "nastenka",
	author,
	version,
	about = "Find your next book from a title and a short description",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {recommend} {recommend_args}  {recommend_desc}
  {bin} {recommend} {json_args}                 {json_desc}
  {bin} {repl}      {repl_args}                          {repl_desc}
  {bin} {info}      {info_args}               {info_desc}
  {bin} {help}      {help_args}                      {help_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "nastenka".bright_blue(),
		recommend = "recommend".yellow(),
		recommend_args = "\"Dune\" \"desert planet, spice, prophecy\"",
		recommend_desc = "Top five similar books".dimmed(),
		json_args = "\"Emma\" \"matchmaking\" --json",
		json_desc = "Machine-readable output".dimmed(),
		repl = "repl".yellow(),
		repl_args = "-n 3",
		repl_desc = "Interactive session".dimmed(),
		info = "info".yellow(),
		info_args = "-a ./artifacts/",
		info_desc = "Describe loaded artifacts".dimmed(),
		help = "help".yellow(),
		help_args = "recommend",
		help_desc = "Show help for recommend".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(flatten)]
	pub artifacts: ArtifactArgs,

	#[command(subcommand)]
	pub command: Command,
}

/// Artifact locations
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
	/// Artifacts root (default: $NASTENKA_ARTIFACTS_DIR, ./artifacts next to the binary, or ./artifacts)
	#[arg(short = 'a', long = "artifacts", value_name = "DIR", global = true)]
	pub dir: Option<PathBuf>,

	/// Title vectorizer file
	#[arg(long = "title-vectorizer", value_name = "PATH", global = true)]
	pub title_vectorizer: Option<PathBuf>,

	/// Description vectorizer file
	#[arg(long = "desc-vectorizer", value_name = "PATH", global = true)]
	pub desc_vectorizer: Option<PathBuf>,

	/// Neighbor index file
	#[arg(long = "index", value_name = "PATH", global = true)]
	pub index: Option<PathBuf>,

	/// Catalog file (.msgpack or .json)
	#[arg(long = "catalog", value_name = "PATH", global = true)]
	pub catalog: Option<PathBuf>,
}

impl ArtifactArgs {
	pub fn overrides(&self) -> ArtifactOverrides {
		ArtifactOverrides {
			title_vectorizer: self.title_vectorizer.clone(),
			desc_vectorizer: self.desc_vectorizer.clone(),
			index: self.index.clone(),
			catalog: self.catalog.clone(),
		}
	}
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Recommend books similar to a title and description
	Recommend {
		/// Book title
		#[arg(value_name = "TITLE")]
		title: String,

		/// Brief notes about the book's content
		#[arg(value_name = "DESCRIPTION")]
		description: String,

		/// Number of recommendations
		#[arg(short = 'n', long = "neighbors", default_value_t = DEFAULT_NEIGHBORS, value_parser = parse_neighbors)]
		neighbors: usize,

		/// Print results as JSON
		#[arg(long = "json")]
		json: bool,

		/// Open the top recommendation's cover in the default browser
		#[arg(short = 'o', long = "open")]
		open: bool,
	},

	/// Interactive session: enter a title and description, get recommendations
	Repl {
		/// Number of recommendations
		#[arg(short = 'n', long = "neighbors", default_value_t = DEFAULT_NEIGHBORS, value_parser = parse_neighbors)]
		neighbors: usize,
	},

	/// Show what the artifacts contain
	Info,

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
