// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for placement search, drag snapping, and edit validation.

/// Layout engine configuration, owned by a [`Room`](crate::Room).
///
/// All distances are in meters.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Distance between consecutive rings of the placement search.
    pub search_step: f64,
    /// Number of rings tried before the search gives up. Each ring has four candidates.
    pub search_rings: u32,
    /// During a live drag, footprint edges this close to a wall snap flush to it.
    pub snap_distance: f64,
    /// Discrete edits that collide try the placement search before reverting.
    pub relocate_on_commit: bool,
    /// Smallest bed width or height accepted by a resize.
    pub min_bed_side: f64,
    /// Smallest furniture width or height accepted by a resize.
    pub min_furniture_side: f64,
    /// Smallest nightstand size accepted by an edit.
    pub min_nightstand_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            search_step: 0.2,
            search_rings: 10,
            snap_distance: 0.2,
            relocate_on_commit: true,
            min_bed_side: 0.5,
            min_furniture_side: 0.2,
            min_nightstand_size: 0.2,
        }
    }
}
