use crate::core::payload::{build_doubles_payload, build_singles_payload};
use crate::core::resolver::{normalize_identifier, resolve_workflow};
use crate::domain::model::{
    CreatedIssue, DispatchRequest, DoublesMatch, IssuePayload, MatchDate, SinglesMatch,
    WorkflowDescriptor,
};
use crate::domain::ports::Gateway;
use crate::utils::error::Result;
use crate::utils::validation::{parse_players, parse_sets, parse_teams, validate_date};
use std::collections::HashMap;

/// Environment handed to dispatched workflows when the operator names none.
pub const DEFAULT_ENVIRONMENT: &str = "github-pages";

/// Validates raw singles arguments and renders the issue payload.
/// A missing date means today's local calendar date.
pub fn prepare_singles(players: &str, sets: &str, date: Option<&str>) -> Result<IssuePayload> {
    let date = resolve_date(date)?;
    let (winner, loser) = parse_players(players)?;
    let sets = parse_sets(sets)?;

    let game = SinglesMatch {
        winner,
        loser,
        sets,
    };
    Ok(build_singles_payload(&game, &date))
}

/// Validates raw doubles arguments and renders the issue payload.
pub fn prepare_doubles(teams: &str, sets: &str, date: Option<&str>) -> Result<IssuePayload> {
    let date = resolve_date(date)?;
    let (winners, losers) = parse_teams(teams)?;
    let sets = parse_sets(sets)?;

    let game = DoublesMatch {
        winners,
        losers,
        sets,
    };
    Ok(build_doubles_payload(&game, &date))
}

fn resolve_date(date: Option<&str>) -> Result<MatchDate> {
    match date {
        Some(text) => validate_date(text),
        None => {
            let today = chrono::Local::now().format("%Y-%m-%d").to_string();
            tracing::debug!("No match date given, using today ({})", today);
            validate_date(&today)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerOutcome {
    pub workflow: WorkflowDescriptor,
    pub request: DispatchRequest,
    pub dispatched: bool,
}

/// Runs the remote half of each command against a `Gateway`, one call at a time.
pub struct CommandRunner<G: Gateway> {
    gateway: G,
}

impl<G: Gateway> CommandRunner<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn create_match_issue(&self, payload: &IssuePayload) -> Result<CreatedIssue> {
        tracing::info!("Creating issue: {}", payload.title);
        let issue = self.gateway.create_issue(payload).await?;
        tracing::info!("Created issue #{}", issue.number);
        Ok(issue)
    }

    pub async fn list_workflows(&self) -> Result<Vec<WorkflowDescriptor>> {
        self.gateway.list_workflows().await
    }

    pub async fn trigger_workflow(
        &self,
        identifier: &str,
        environment: Option<&str>,
        dry_run: bool,
    ) -> Result<TriggerOutcome> {
        normalize_identifier(identifier)?;

        let workflows = self.gateway.list_workflows().await?;
        tracing::debug!("Repository defines {} workflows", workflows.len());

        let workflow = resolve_workflow(identifier, &workflows)?.workflow.clone();
        let git_ref = self.gateway.get_default_branch().await?;

        let environment = environment
            .filter(|env| !env.trim().is_empty())
            .unwrap_or(DEFAULT_ENVIRONMENT);
        let mut inputs = HashMap::new();
        inputs.insert("environment".to_string(), environment.to_string());

        let request = DispatchRequest { git_ref, inputs };

        if dry_run {
            tracing::info!("Dry run: not dispatching '{}'", workflow.name);
        } else {
            tracing::info!(
                "Dispatching '{}' ({}) on {}",
                workflow.name,
                workflow.path,
                request.git_ref
            );
            self.gateway.dispatch_workflow(workflow.id, &request).await?;
        }

        Ok(TriggerOutcome {
            workflow,
            request,
            dispatched: !dry_run,
        })
    }
}
