//! Resolves an operator-supplied workflow identifier against the workflows
//! defined in the repository.
//!
//! Tiers are tried in order and the first descriptor (in platform order)
//! matching a tier wins. Later tiers are never consulted once a tier matches.
//! All comparisons ignore case. There is no fuzzy matching: anything that
//! fails every tier is a miss.

use crate::domain::model::WorkflowDescriptor;
use crate::utils::error::{Result, TennisError};

const WORKFLOW_EXTENSIONS: &[&str] = &[".yml", ".yaml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Display name, e.g. `Rebuild Rankings`.
    Name,
    /// Suffix of the file path, e.g. `rebuild-rankings.yml`.
    PathSuffix,
    /// File name without its extension, e.g. `rebuild-rankings`.
    FileStem,
    /// Numeric workflow id.
    Id,
}

const TIERS: [MatchTier; 4] = [
    MatchTier::Name,
    MatchTier::PathSuffix,
    MatchTier::FileStem,
    MatchTier::Id,
];

impl MatchTier {
    fn matches(&self, needle: &str, workflow: &WorkflowDescriptor) -> bool {
        match self {
            MatchTier::Name => workflow.name.to_lowercase() == needle,
            MatchTier::PathSuffix => workflow.path.to_lowercase().ends_with(needle),
            MatchTier::FileStem => file_stem(&workflow.path).to_lowercase() == needle,
            MatchTier::Id => workflow.id.to_string() == needle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub workflow: &'a WorkflowDescriptor,
    pub tier: MatchTier,
}

pub fn resolve_workflow<'a>(
    identifier: &str,
    workflows: &'a [WorkflowDescriptor],
) -> Result<Resolution<'a>> {
    let needle = normalize_identifier(identifier)?;

    for tier in TIERS {
        if let Some(workflow) = workflows.iter().find(|w| tier.matches(&needle, w)) {
            tracing::debug!(
                "Resolved '{}' to workflow {} ({}) by {:?}",
                identifier,
                workflow.id,
                workflow.path,
                tier
            );
            return Ok(Resolution { workflow, tier });
        }
    }

    Err(TennisError::WorkflowNotFound {
        identifier: identifier.to_string(),
        candidates: workflows.to_vec(),
    })
}

/// Trimmed, lowercased identifier. Blank input is rejected since it would
/// suffix-match every path.
pub fn normalize_identifier(identifier: &str) -> Result<String> {
    let needle = identifier.trim().to_lowercase();
    if needle.is_empty() {
        return Err(TennisError::validation("workflow identifier cannot be empty"));
    }
    Ok(needle)
}

fn file_stem(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    WORKFLOW_EXTENSIONS
        .iter()
        .find_map(|ext| strip_suffix_ignore_case(file_name, ext))
        .unwrap_or(file_name)
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    let (head, tail) = (text.get(..split)?, text.get(split..)?);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
