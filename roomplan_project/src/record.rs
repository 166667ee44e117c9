// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persisted room schema.
//!
//! Records mirror the stored JSON field for field (camelCase, meters, radians).
//! Decoding is lenient the way stored editor data needs it to be: optional
//! fields that are missing or of the wrong type fall back to defaults, and
//! collections that are not arrays read as empty.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use roomplan_layout::{DEFAULT_WALL_THICKNESS, WallSide};

/// Stored form of a room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    /// Interior width in meters.
    pub width: f64,
    /// Interior height in meters.
    pub height: f64,
    /// Wall thickness in meters.
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness_m: f64,
    /// Windows and doors in drawing order.
    #[serde(default, deserialize_with = "lenient_list")]
    pub openings: Vec<OpeningRecord>,
    /// Beds in drawing order.
    #[serde(default, deserialize_with = "lenient_list")]
    pub beds: Vec<BedRecord>,
    /// Furniture in drawing order.
    #[serde(default, deserialize_with = "lenient_list")]
    pub furniture: Vec<FurnitureRecord>,
}

/// Stored opening type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningType {
    /// A window.
    Window,
    /// A door.
    Door,
}

/// Stored form of a window or door. Door fields are written for windows too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningRecord {
    /// Stable id; empty when unassigned.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Window or door.
    #[serde(rename = "type")]
    pub kind: OpeningType,
    /// Wall the opening is set into.
    pub wall_side: WallSide,
    /// Distance along the wall, in meters.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub offset_m: Option<f64>,
    /// Span along the wall, in meters. Missing means the default for the type.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub length_m: Option<f64>,
    /// How far the door is open, 0 to 1.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub door_open01: Option<f64>,
    /// Hinge at the start of the span.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub door_hinge_start: bool,
    /// Swing mirrored on north and south walls.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub door_mirror_h: bool,
    /// Swing mirrored on east and west walls.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub door_mirror_v: bool,
}

/// Stored form of a bed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedRecord {
    /// Stable id; empty when unassigned.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Origin x in meters.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub x_m: Option<f64>,
    /// Origin y in meters.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub y_m: Option<f64>,
    /// Local width in meters.
    pub width_m: f64,
    /// Local height in meters.
    pub height_m: f64,
    /// Rotation in radians; always a multiple of a quarter turn when written.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rotation_rad: Option<f64>,
    /// Nightstand on the local left.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub nightstand_left: bool,
    /// Nightstand on the local right.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub nightstand_right: bool,
    /// Nightstand side length in meters.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub nightstand_size_m: Option<f64>,
}

/// Stored form of a furniture item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureRecord {
    /// Stable id; empty when unassigned.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Origin x in meters.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub x_m: Option<f64>,
    /// Origin y in meters.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub y_m: Option<f64>,
    /// Local width in meters.
    pub width_m: f64,
    /// Local height in meters.
    pub height_m: f64,
    /// Rotation in radians.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rotation_rad: Option<f64>,
    /// Display label.
    #[serde(default = "fallback_label", deserialize_with = "lenient_label")]
    pub label: String,
}

/// Label given to stored furniture that has none.
pub const FALLBACK_LABEL: &str = "Item";

fn default_wall_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS
}

fn fallback_label() -> String {
    FALLBACK_LABEL.to_owned()
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}

/// Truthiness of an arbitrary JSON value.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map_or_else(fallback_label, str::to_owned))
}

/// A list that reads as empty unless it is an array. Elements that do not
/// decode are dropped with a warning.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let serde_json::Value::Array(items) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(record) => out.push(record),
            Err(err) => warn!(index, error = %err, "skipping malformed stored entity"),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let bed: BedRecord = serde_json::from_value(json!({
            "widthM": 1.6,
            "heightM": 2.0,
            "nightstandLeft": "yes",
            "rotationRad": "sideways"
        }))
        .unwrap();
        assert_eq!(bed.id, "");
        assert_eq!(bed.x_m, None);
        assert_eq!(bed.rotation_rad, None);
        assert!(bed.nightstand_left);
        assert!(!bed.nightstand_right);

        let item: FurnitureRecord =
            serde_json::from_value(json!({ "widthM": 1.0, "heightM": 1.0, "label": 7 })).unwrap();
        assert_eq!(item.label, FALLBACK_LABEL);
        let missing: FurnitureRecord =
            serde_json::from_value(json!({ "widthM": 1.0, "heightM": 1.0 })).unwrap();
        assert_eq!(missing.label, FALLBACK_LABEL);
    }

    #[test]
    fn collections_that_are_not_arrays_read_as_empty() {
        let room: RoomRecord = serde_json::from_value(json!({
            "width": 5.0,
            "height": 4.0,
            "openings": "none",
            "beds": [
                { "widthM": 1.6, "heightM": 2.0 },
                { "heightM": 2.0 }
            ]
        }))
        .unwrap();
        assert_eq!(room.wall_thickness_m, DEFAULT_WALL_THICKNESS);
        assert!(room.openings.is_empty());
        assert_eq!(room.beds.len(), 1, "the bed without a width is dropped");
        assert!(room.furniture.is_empty());
    }

    #[test]
    fn field_names_follow_the_stored_schema() {
        let o = OpeningRecord {
            id: "door-1".into(),
            kind: OpeningType::Door,
            wall_side: WallSide::East,
            offset_m: Some(0.5),
            length_m: Some(0.9),
            door_open01: Some(0.25),
            door_hinge_start: true,
            door_mirror_h: false,
            door_mirror_v: true,
        };
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["type"], "door");
        assert_eq!(v["wallSide"], "E");
        assert_eq!(v["offsetM"], 0.5);
        assert_eq!(v["doorOpen01"], 0.25);
        assert_eq!(v["doorHingeStart"], true);
        assert_eq!(v["doorMirrorV"], true);
    }
}
