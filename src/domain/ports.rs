use crate::domain::model::{CreatedIssue, DispatchRequest, IssuePayload, WorkflowDescriptor};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The hosted platform as seen by the command flows. Implemented over REST by
/// `adapters::github::GitHubGateway`; tests substitute in-memory doubles.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn create_issue(&self, payload: &IssuePayload) -> Result<CreatedIssue>;
    async fn list_workflows(&self) -> Result<Vec<WorkflowDescriptor>>;
    async fn get_default_branch(&self) -> Result<String>;
    async fn dispatch_workflow(&self, workflow_id: u64, request: &DispatchRequest) -> Result<()>;
}
