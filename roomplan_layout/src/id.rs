// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity identity: stable string ids and the room-owned generator.

use core::fmt;

/// Stable identifier of an opening, bed, or furniture item.
///
/// Ids are assigned once at creation and preserved across persistence round-trips.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(String);

impl EntityId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty id, which stored data uses for "not assigned".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The kind of entity an id refers to. Also used as the id prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A window opening.
    Window,
    /// A door opening.
    Door,
    /// A bed.
    Bed,
    /// A furniture item.
    Furniture,
}

impl EntityKind {
    /// Lowercase name, used in generated ids and messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Door => "door",
            Self::Bed => "bed",
            Self::Furniture => "furniture",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monotonic id source owned by a [`Room`](crate::Room).
///
/// Produces `window-1`, `door-2`, `bed-3`, ... sharing one counter across kinds.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator starting at 1.
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Next id for `kind` for which `taken` returns false.
    pub fn next(&mut self, kind: EntityKind, taken: impl Fn(&str) -> bool) -> EntityId {
        loop {
            self.last += 1;
            let candidate = format!("{}-{}", kind.as_str(), self.last);
            if !taken(&candidate) {
                return EntityId(candidate);
            }
        }
    }
}
