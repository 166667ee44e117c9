// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Saved projects and the active-project pointer.
//!
//! The catalog is an in-memory store keyed by project id. It serializes as a
//! single JSON document, so a host can keep it in whatever storage it has.
//! Timestamps are milliseconds since the Unix epoch and are supplied by the
//! caller.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use roomplan_layout::Room;

use crate::convert::{deserialize_room, serialize_room};
use crate::error::ProjectError;
use crate::record::RoomRecord;

/// One saved project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    /// Project id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// First save, in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
    /// Latest save, in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub updated_at: i64,
    /// The stored room.
    pub room: RoomRecord,
}

impl ProjectData {
    /// Rebuild the live room.
    pub fn to_room(&self) -> Result<Room, ProjectError> {
        Ok(deserialize_room(&self.room)?)
    }
}

/// Saved projects plus the id of the one last opened.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCatalog {
    #[serde(default)]
    projects: BTreeMap<String, ProjectData>,
    #[serde(default)]
    active_id: Option<String>,
}

impl ProjectCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `room` under `id`, keeping the original creation time if the project
    /// already exists, and make it the active project.
    pub fn save(&mut self, id: &str, name: &str, room: &Room, now_ms: i64) -> &ProjectData {
        self.active_id = Some(id.to_owned());
        let mut data = ProjectData {
            id: id.to_owned(),
            name: name.to_owned(),
            created_at: now_ms,
            updated_at: now_ms,
            room: serialize_room(room),
        };
        match self.projects.entry(id.to_owned()) {
            Entry::Occupied(mut slot) => {
                data.created_at = slot.get().created_at;
                debug!(id, name, updated_at = now_ms, "project updated");
                slot.insert(data);
                slot.into_mut()
            }
            Entry::Vacant(slot) => {
                debug!(id, name, created_at = now_ms, "project created");
                slot.insert(data)
            }
        }
    }

    /// The saved project with this id.
    pub fn load(&self, id: &str) -> Option<&ProjectData> {
        self.projects.get(id)
    }

    /// Rebuild the room of the saved project with this id.
    pub fn open(&self, id: &str) -> Result<Room, ProjectError> {
        self.load(id)
            .ok_or_else(|| ProjectError::NotFound(id.to_owned()))?
            .to_room()
    }

    /// All projects, most recently updated first.
    pub fn list(&self) -> Vec<&ProjectData> {
        let mut out: Vec<_> = self.projects.values().collect();
        out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        out
    }

    /// Number of saved projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Id of the active project, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Set or clear the active project.
    pub fn set_active_id(&mut self, id: Option<&str>) {
        self.active_id = id.map(str::to_owned);
    }

    /// Encode the whole catalog as JSON.
    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a catalog written by [`ProjectCatalog::to_json`].
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number,
        other => return Err(D::Error::custom(format!("expected a timestamp, got {other}"))),
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "Millisecond timestamps written as floats are whole and in range."
    )]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err(D::Error::custom(format!("timestamp {number} is not a whole number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use serde_json::json;

    fn room_with_bed() -> Room {
        let mut room = Room::new(4.0, 3.0).unwrap();
        room.insert_default_bed(Point::new(2.0, 1.5));
        room
    }

    #[test]
    fn resave_keeps_created_at() {
        let mut catalog = ProjectCatalog::new();
        let room = room_with_bed();
        catalog.save("p1", "Bedroom", &room, 1_000);
        let saved = catalog.save("p1", "Main bedroom", &room, 5_000);
        assert_eq!(saved.created_at, 1_000);
        assert_eq!(saved.updated_at, 5_000);
        assert_eq!(saved.name, "Main bedroom");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn list_is_most_recent_first_and_save_sets_active() {
        let mut catalog = ProjectCatalog::new();
        let room = room_with_bed();
        catalog.save("a", "A", &room, 10);
        catalog.save("b", "B", &room, 30);
        catalog.save("c", "C", &room, 20);
        let ids: Vec<_> = catalog.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
        assert_eq!(catalog.active_id(), Some("c"));
        catalog.set_active_id(None);
        assert_eq!(catalog.active_id(), None);
    }

    #[test]
    fn open_rebuilds_the_room() {
        let mut catalog = ProjectCatalog::new();
        catalog.save("p", "P", &room_with_bed(), 1);
        let room = catalog.open("p").unwrap();
        assert_eq!(room.beds().len(), 1);
        assert!(matches!(
            catalog.open("missing"),
            Err(ProjectError::NotFound(id)) if id == "missing"
        ));
    }

    #[test]
    fn catalog_survives_json() {
        let mut catalog = ProjectCatalog::new();
        catalog.save("p", "P", &room_with_bed(), 42);
        let json = catalog.to_json().unwrap();
        assert_eq!(ProjectCatalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn float_timestamps_are_accepted() {
        let data: ProjectData = serde_json::from_value(json!({
            "id": "p",
            "name": "P",
            "createdAt": 1_700_000_000_000.0,
            "updatedAt": 1_700_000_000_500_i64,
            "room": { "width": 4.0, "height": 3.0 }
        }))
        .unwrap();
        assert_eq!(data.created_at, 1_700_000_000_000);
        assert!(data.to_room().unwrap().beds().is_empty());
        let bad = serde_json::from_value::<ProjectData>(json!({
            "id": "p",
            "name": "P",
            "createdAt": 1.5,
            "updatedAt": 2,
            "room": { "width": 4.0, "height": 3.0 }
        }));
        assert!(bad.is_err());
    }
}
