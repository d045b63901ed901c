use crate::config::settings::SettingsOverrides;
use crate::utils::logger::LogFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tennis")]
#[command(version)]
#[command(about = "Tennis repository CLI tool")]
#[command(
    long_about = "A CLI tool to interact with the tennis repository - trigger workflows and create match issues"
)]
pub struct CliConfig {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// GitHub token (defaults to GITHUB_TOKEN, then GH_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Repository owner (defaults to the owner in GITHUB_REPOSITORY)
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Repository name (defaults to the name in GITHUB_REPOSITORY)
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// GitHub REST API base URL (defaults to GITHUB_API_URL, then https://api.github.com)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl GlobalArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            token: self.token.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            api_url: self.api_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create GitHub issues for recording tennis matches
    #[command(subcommand)]
    Match(MatchCommand),

    /// Trigger GitHub Actions workflows in the tennis repository
    #[command(subcommand)]
    Workflow(WorkflowCommand),

    /// Print the version number
    Version,
}

#[derive(Debug, Clone, Subcommand)]
pub enum MatchCommand {
    /// Create a singles match issue
    #[command(after_help = "Examples:\n  \
        tennis match singles --players \"@player_one,@player_two\" --sets \"6-3,4-6,6-4\" --date \"2025-01-15\"\n  \
        tennis match singles -p \"@player_one,@player_two\" -s \"6-3,4-6,6-4\"\n\n\
        If date is not provided, today's date will be used.")]
    Singles {
        /// Players separated by comma (winner first): @player_one,@player_two
        #[arg(short, long)]
        players: String,

        /// Sets separated by comma: 6-3,4-6,6-4
        #[arg(short, long)]
        sets: String,

        /// Match date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Print the issue without creating it
        #[arg(long)]
        dry_run: bool,
    },

    /// Create a doubles match issue
    #[command(after_help = "Examples:\n  \
        tennis match doubles --teams \"@player_one,@player_two||@player_three,@player_four\" --sets \"6-3,4-6,6-4\" --date \"2025-01-15\"\n\n\
        If date is not provided, today's date will be used.")]
    Doubles {
        /// Teams separated by || : @player_one,@player_two||@player_three,@player_four
        #[arg(short, long)]
        teams: String,

        /// Sets separated by comma: 6-3,4-6,6-4
        #[arg(short, long)]
        sets: String,

        /// Match date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Print the issue without creating it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum WorkflowCommand {
    /// Trigger a workflow by name, file name, path, or id
    #[command(after_help = "Examples:\n  \
        tennis workflow trigger rebuild-rankings --environment github-pages\n  \
        tennis workflow trigger rebuild-rankings.yml -e production\n  \
        tennis workflow trigger \"Rebuild Rankings\"")]
    Trigger {
        /// Workflow name, file name, path, or numeric id
        workflow: String,

        /// Environment input passed to the workflow (defaults to github-pages)
        #[arg(short, long)]
        environment: Option<String>,

        /// Resolve the workflow and print the dispatch without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// List the workflows defined in the repository
    List,
}
