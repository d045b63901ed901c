use clap::Parser;
use tennis_cli::config::cli::{Command, GlobalArgs, MatchCommand, WorkflowCommand};
use tennis_cli::core::commands::{prepare_doubles, prepare_singles, CommandRunner};
use tennis_cli::core::resolver::normalize_identifier;
use tennis_cli::domain::model::IssuePayload;
use tennis_cli::utils::logger;
use tennis_cli::{CliConfig, GitHubGateway, Result, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.global.verbose, config.global.log_format);
    tracing::debug!("CLI config: {:?}", config.command);

    if let Err(e) = run(config).await {
        tracing::error!("Command failed ({:?}): {}", e.category(), e);
        eprintln!("Error: {}", e);
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<()> {
    match config.command {
        Command::Version => {
            println!("tennis CLI v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Match(MatchCommand::Singles {
            players,
            sets,
            date,
            dry_run,
        }) => {
            let payload = prepare_singles(&players, &sets, date.as_deref())?;
            record_match(&config.global, &payload, "Singles", dry_run).await
        }
        Command::Match(MatchCommand::Doubles {
            teams,
            sets,
            date,
            dry_run,
        }) => {
            let payload = prepare_doubles(&teams, &sets, date.as_deref())?;
            record_match(&config.global, &payload, "Doubles", dry_run).await
        }
        Command::Workflow(WorkflowCommand::Trigger {
            workflow,
            environment,
            dry_run,
        }) => {
            normalize_identifier(&workflow)?;

            let settings = Settings::from_env(config.global.overrides())?;
            let actions_url = settings.actions_url();
            let runner = CommandRunner::new(GitHubGateway::new(settings)?);

            let outcome = runner
                .trigger_workflow(&workflow, environment.as_deref(), dry_run)
                .await?;

            println!("Triggering workflow: {}", outcome.workflow.name);
            println!("Path: {}", outcome.workflow.path);
            println!("Ref: {}", outcome.request.git_ref);
            println!(
                "Inputs: {}",
                serde_json::to_string(&outcome.request.inputs).unwrap_or_default()
            );
            if outcome.dispatched {
                println!("✅ Workflow triggered successfully!");
                println!("View runs at: {}", actions_url);
            } else {
                println!("Dry run: workflow not dispatched");
            }
            Ok(())
        }
        Command::Workflow(WorkflowCommand::List) => {
            let settings = Settings::from_env(config.global.overrides())?;
            let runner = CommandRunner::new(GitHubGateway::new(settings)?);

            for workflow in runner.list_workflows().await? {
                println!("{}  {} ({})", workflow.id, workflow.name, workflow.path);
            }
            Ok(())
        }
    }
}

async fn record_match(
    global: &GlobalArgs,
    payload: &IssuePayload,
    kind: &str,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        println!("Title: {}", payload.title);
        println!("Label: {}", payload.label);
        println!();
        println!("{}", payload.body);
        return Ok(());
    }

    let settings = Settings::from_env(global.overrides())?;
    let runner = CommandRunner::new(GitHubGateway::new(settings)?);

    println!("Creating {} match issue...", kind.to_lowercase());
    println!("Title: {}", payload.title);

    let issue = runner.create_match_issue(payload).await?;

    println!("✅ {} match issue created successfully!", kind);
    println!("Issue #{}: {}", issue.number, issue.html_url);
    Ok(())
}
