//! Guild list view-model
//!
//! Mirrors the server's guild list locally. Every mutating operation
//! updates the local list only after the server confirmed it; failures
//! leave the list as it was and surface a message through [`GuildListModel::error`].

use tracing::{debug, warn};

use crate::api::{GuildApiClient, GuildRecord};
use crate::error::ClientError;

/// Message shown when a name is blank
pub const EMPTY_NAME_MESSAGE: &str = "Guild name cannot be empty.";

/// Message shown when the draft level is not a positive number
pub const INVALID_LEVEL_MESSAGE: &str = "Level must be a positive number.";

/// In-progress inline edit of one guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: i64,
    pub name: String,
    /// Raw text as typed; parsed on submit
    pub level: String,
}

impl EditDraft {
    fn from_record(record: &GuildRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            level: record.level.to_string(),
        }
    }
}

/// Local guild list kept in step with the server
#[derive(Debug)]
pub struct GuildListModel {
    api: GuildApiClient,
    guilds: Vec<GuildRecord>,
    error: Option<String>,
    is_loading: bool,
    editing: Option<EditDraft>,
}

impl GuildListModel {
    pub fn new(api: GuildApiClient) -> Self {
        Self {
            api,
            guilds: Vec::new(),
            error: None,
            is_loading: false,
            editing: None,
        }
    }

    pub fn guilds(&self) -> &[GuildRecord] {
        &self.guilds
    }

    /// Last user-visible failure, cleared when the next operation starts
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    /// Replace the local list with the server's
    ///
    /// On failure the last-known-good list is kept.
    pub async fn load(&mut self) -> bool {
        self.is_loading = true;
        self.error = None;

        let result = self.api.list().await;
        self.is_loading = false;

        match result {
            Ok(guilds) => {
                debug!(count = guilds.len(), "Guilds loaded");
                self.guilds = guilds;
                true
            }
            Err(e) => {
                self.fail("load guilds", &e);
                false
            }
        }
    }

    /// Create a guild and append the server's record
    pub async fn create(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            self.error = Some(EMPTY_NAME_MESSAGE.to_string());
            return false;
        }
        self.error = None;

        match self.api.create(name, None).await {
            Ok(record) => {
                debug!(id = record.id, "Guild created");
                self.guilds.push(record);
                true
            }
            Err(e) => {
                self.fail("create guild", &e);
                false
            }
        }
    }

    /// Open the inline editor for the guild with `id`
    ///
    /// Returns `false` if no such guild is in the local list.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.guilds.iter().find(|g| g.id == id) {
            Some(record) => {
                self.editing = Some(EditDraft::from_record(record));
                self.error = None;
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.name = name.into();
        }
    }

    pub fn set_draft_level(&mut self, level: impl Into<String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.level = level.into();
        }
    }

    /// Validate the draft locally, then send it
    ///
    /// On success the matching record is replaced and the draft closed.
    pub async fn submit_edit(&mut self) -> bool {
        let Some(draft) = self.editing.clone() else {
            return false;
        };

        let name = draft.name.trim();
        if name.is_empty() {
            self.error = Some(EMPTY_NAME_MESSAGE.to_string());
            return false;
        }
        let Some(level) = parse_level(&draft.level) else {
            self.error = Some(INVALID_LEVEL_MESSAGE.to_string());
            return false;
        };
        self.error = None;

        match self.api.update(draft.id, name, level).await {
            Ok(record) => {
                if let Some(slot) = self.guilds.iter_mut().find(|g| g.id == draft.id) {
                    *slot = record;
                }
                self.editing = None;
                true
            }
            Err(e) => {
                self.fail("update guild", &e);
                false
            }
        }
    }

    /// Delete a guild and drop it from the local list
    pub async fn delete(&mut self, id: i64) -> bool {
        self.error = None;

        match self.api.delete(id).await {
            Ok(()) => {
                self.guilds.retain(|g| g.id != id);
                if self.editing.as_ref().is_some_and(|d| d.id == id) {
                    self.editing = None;
                }
                true
            }
            Err(e) => {
                self.fail("delete guild", &e);
                false
            }
        }
    }

    fn fail(&mut self, action: &str, err: &ClientError) {
        warn!(error = %err, "Failed to {action}");
        self.error = Some(format!("Failed to {action}: {err}"));
    }
}

/// Leading base-10 integer of `text`, accepted only when >= 1
fn parse_level(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    (!negative && value >= 1).then_some(value)
}
