//! Chat message value.
//!
//! Messages are produced by the chat layer; this crate only defines their
//! shape and the version-history rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("Version {index} out of range (message has {len} versions)")]
    VersionOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A cited source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

/// Model reasoning shown alongside an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reasoning {
    pub content: String,
    /// Seconds spent reasoning
    pub duration: u64,
}

/// One alternative text of a message (regenerations, edits).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageVersion {
    pub id: String,
    pub content: String,
}

/// A conversational unit.
///
/// `versions`, when present, is never empty; the displayed version is an
/// index into it kept by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<Reasoning>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_versions"
    )]
    pub versions: Option<Vec<MessageVersion>>,
}

/// `"versions": []` reads as no history.
fn non_empty_versions<'de, D>(deserializer: D) -> Result<Option<Vec<MessageVersion>>, D::Error>
where
    D: Deserializer<'de>,
{
    let versions = Option::<Vec<MessageVersion>>::deserialize(deserializer)?;
    Ok(versions.filter(|v| !v.is_empty()))
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            role,
            content: content.into(),
            timestamp: Some(Utc::now()),
            sources: None,
            reasoning: None,
            versions: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn with_reasoning(mut self, content: impl Into<String>, duration: u64) -> Self {
        self.reasoning = Some(Reasoning {
            content: content.into(),
            duration,
        });
        self
    }

    /// Number of versions; a message without history counts as one.
    pub fn version_count(&self) -> usize {
        self.versions.as_ref().map_or(1, Vec::len)
    }

    /// Add an alternative version and return its index.
    ///
    /// The first call also records the current content as version 0.
    pub fn add_version(&mut self, content: impl Into<String>) -> usize {
        let versions = self.versions.get_or_insert_with(|| {
            vec![MessageVersion {
                id: self.id.clone(),
                content: self.content.clone(),
            }]
        });
        versions.push(MessageVersion {
            id: new_id(),
            content: content.into(),
        });
        versions.len() - 1
    }

    /// Text of the version at `index`.
    pub fn version(&self, index: usize) -> Result<&str, MessageError> {
        match &self.versions {
            Some(versions) => versions
                .get(index)
                .map(|v| v.content.as_str())
                .ok_or(MessageError::VersionOutOfRange {
                    index,
                    len: versions.len(),
                }),
            None if index == 0 => Ok(&self.content),
            None => Err(MessageError::VersionOutOfRange { index, len: 1 }),
        }
    }

    /// Make version `index` the displayed content.
    pub fn select_version(&mut self, index: usize) -> Result<(), MessageError> {
        let content = self.version(index)?.to_string();
        self.content = content;
        Ok(())
    }
}
