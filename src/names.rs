//! Bidirectional mapping between vertex names and dense handles
//!
//! Handles are handed out in registration order starting at zero, so a
//! [`NameIndex`] with `n` names always covers exactly the handles `0..n`.
//! Names are fixed once registered.

use rustc_hash::FxHashMap;

use crate::error::{GraphError, Result, VertexKey};
use crate::graph::VertexId;

/// Longest accepted display name, in bytes.
pub const MAX_NAME_LEN: usize = 49;

/// Name ↔ handle bijection.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    /// Handle → name
    names: Vec<String>,
    /// Name → handle
    handles: FxHashMap<String, VertexId>,
}

impl NameIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next unused handle to `name`.
    ///
    /// # Errors
    /// - [`GraphError::DuplicateName`] if `name` is already registered
    /// - [`GraphError::InvalidName`] if `name` is empty or longer than [`MAX_NAME_LEN`]
    pub fn register(&mut self, name: &str) -> Result<VertexId> {
        validate_name(name)?;
        if self.handles.contains_key(name) {
            return Err(GraphError::DuplicateName(name.to_owned()));
        }

        let handle = self.names.len();
        self.names.push(name.to_owned());
        self.handles.insert(name.to_owned(), handle);
        Ok(handle)
    }

    /// Returns the handle registered for `name`.
    pub fn resolve(&self, name: &str) -> Result<VertexId> {
        self.handles
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(VertexKey::Name(name.to_owned())))
    }

    /// Returns the name registered for `handle`, if any.
    pub fn name_of(&self, handle: VertexId) -> Option<&str> {
        self.names.get(handle).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(handle, name)` pairs in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.names.iter().map(String::as_str).enumerate()
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.len() > MAX_NAME_LEN {
        "name is longer than 49 bytes"
    } else {
        return Ok(());
    };
    Err(GraphError::InvalidName {
        name: name.to_owned(),
        reason,
    })
}
