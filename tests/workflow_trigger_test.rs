use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use tennis_cli::core::commands::{CommandRunner, DEFAULT_ENVIRONMENT};
use tennis_cli::{GitHubGateway, Settings, SettingsOverrides, TennisError};

fn runner_for(server: &MockServer) -> Result<CommandRunner<GitHubGateway>> {
    let settings = Settings::resolve(
        SettingsOverrides {
            token: Some("secret-token".to_string()),
            api_url: Some(server.base_url()),
            ..Default::default()
        },
        |key| match key {
            "GITHUB_REPOSITORY" => Some("club/league".to_string()),
            _ => None,
        },
    )?;
    Ok(CommandRunner::new(GitHubGateway::new(settings)?))
}

fn mock_workflows(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/repos/club/league/actions/workflows");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "total_count": 2,
                "workflows": [
                    {"id": 11, "name": "Validate Match", "path": ".github/workflows/validate-match.yml"},
                    {"id": 42, "name": "Rebuild Rankings", "path": ".github/workflows/rebuild-rankings.yml"}
                ]
            }));
    })
}

fn mock_repository(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/repos/club/league");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"default_branch": "main"}));
    })
}

#[tokio::test]
async fn test_trigger_by_file_stem_dispatches_with_default_environment() -> Result<()> {
    let server = MockServer::start();
    let list_mock = mock_workflows(&server);
    let repo_mock = mock_repository(&server);
    let dispatch_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/club/league/actions/workflows/42/dispatches")
            .json_body(json!({"ref": "main", "inputs": {"environment": DEFAULT_ENVIRONMENT}}));
        then.status(204);
    });

    let outcome = runner_for(&server)?
        .trigger_workflow("rebuild-rankings", None, false)
        .await?;

    list_mock.assert();
    repo_mock.assert();
    dispatch_mock.assert();
    assert!(outcome.dispatched);
    assert_eq!(outcome.workflow.name, "Rebuild Rankings");
    Ok(())
}

#[tokio::test]
async fn test_trigger_by_display_name_with_environment() -> Result<()> {
    let server = MockServer::start();
    mock_workflows(&server);
    mock_repository(&server);
    let dispatch_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/club/league/actions/workflows/42/dispatches")
            .json_body(json!({"ref": "main", "inputs": {"environment": "production"}}));
        then.status(204);
    });

    runner_for(&server)?
        .trigger_workflow("rebuild rankings", Some("production"), false)
        .await?;

    dispatch_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_unknown_workflow_lists_candidates_and_never_dispatches() -> Result<()> {
    let server = MockServer::start();
    let list_mock = mock_workflows(&server);
    let repo_mock = mock_repository(&server);
    let dispatch_mock = server.mock(|when, then| {
        when.method(POST).path_contains("/dispatches");
        then.status(204);
    });

    let err = runner_for(&server)?
        .trigger_workflow("rebuild", None, false)
        .await
        .unwrap_err();

    list_mock.assert();
    repo_mock.assert_hits(0);
    dispatch_mock.assert_hits(0);

    let message = err.to_string();
    assert!(matches!(err, TennisError::WorkflowNotFound { .. }));
    assert!(message.contains("  - Validate Match (.github/workflows/validate-match.yml)"));
    assert!(message.contains("  - Rebuild Rankings (.github/workflows/rebuild-rankings.yml)"));
    Ok(())
}

#[tokio::test]
async fn test_dispatch_rejection_is_reported() -> Result<()> {
    let server = MockServer::start();
    mock_workflows(&server);
    mock_repository(&server);
    server.mock(|when, then| {
        when.method(POST)
            .path("/repos/club/league/actions/workflows/42/dispatches");
        then.status(422)
            .body(r#"{"message":"Workflow does not have 'workflow_dispatch' trigger"}"#);
    });

    let err = runner_for(&server)?
        .trigger_workflow("42", None, false)
        .await
        .unwrap_err();

    assert!(err
        .to_string()
        .contains("Workflow does not have 'workflow_dispatch' trigger"));
    Ok(())
}
