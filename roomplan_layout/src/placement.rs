// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap resolution: the ring search and commit/revert of discrete edits.
//!
//! Only beds and furniture constrain each other. Containment is always
//! enforced; overlap is resolved when possible and otherwise either tolerated
//! (fresh placements) or undone (edits).

use kurbo::{Point, Vec2};
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::entity::{Bed, Furniture};
use crate::error::LayoutError;
use crate::footprint::Occupant;
use crate::id::{EntityId, EntityKind};
use crate::opening::{Opening, WallSide};
use crate::room::{Interior, Room, collides_with_any};

/// How the room responded to a placement or edit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EditOutcome {
    /// Applied as requested, after clamping.
    Accepted,
    /// Applied, but the entity was moved to clear an overlap.
    Relocated {
        /// Origin after clamping, before the search.
        from: Point,
        /// Origin the search settled on.
        to: Point,
    },
    /// Applied with a residual overlap because no candidate was free.
    Overlapping,
    /// Undone because it would have caused an overlap.
    Reverted,
}

impl EditOutcome {
    /// Whether the requested value is now in effect (possibly relocated).
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Reverted)
    }
}

/// Candidate displacements of the ring search, in the order they are tried.
///
/// For each ring `r` in `1..=rings` with `d = r * step`, yields
/// `(+d, 0)`, `(-d, 0)`, `(0, +d)`, `(0, -d)`.
///
/// ```
/// use roomplan_layout::ring_offsets;
///
/// let first: Vec<_> = ring_offsets(0.5, 1).collect();
/// assert_eq!(first.len(), 4);
/// assert_eq!((first[1].x, first[1].y), (-0.5, 0.0));
/// ```
pub fn ring_offsets(step: f64, rings: u32) -> impl Iterator<Item = Vec2> {
    (1..=rings).flat_map(move |r| {
        let d = f64::from(r) * step;
        [
            Vec2::new(d, 0.0),
            Vec2::new(-d, 0.0),
            Vec2::new(0.0, d),
            Vec2::new(0.0, -d),
        ]
    })
}

/// Move `entity` to the first ring candidate clear of `others`.
///
/// Returns the new origin, or `None` after putting the entity back where it
/// started. `entity` is expected to be clamped already.
fn search_free_origin<E: Occupant, O: Occupant>(
    entity: &mut E,
    others: &[O],
    interior: Interior,
    config: &LayoutConfig,
) -> Option<Point> {
    let start = entity.origin();
    for offset in ring_offsets(config.search_step, config.search_rings) {
        entity.set_origin(start + offset);
        interior.clamp(entity);
        if !collides_with_any(entity, others) {
            return Some(entity.origin());
        }
    }
    entity.set_origin(start);
    interior.clamp(entity);
    None
}

/// Clamp `entity`, then move it to the first ring candidate clear of `others`.
///
/// When every candidate collides the entity stays at its clamped starting
/// origin and [`EditOutcome::Overlapping`] is returned.
pub(crate) fn resolve_placement<E: Occupant, O: Occupant>(
    entity: &mut E,
    others: &[O],
    interior: Interior,
    config: &LayoutConfig,
) -> EditOutcome {
    interior.clamp(entity);
    if !collides_with_any(entity, others) {
        return EditOutcome::Accepted;
    }
    let from = entity.origin();
    match search_free_origin(entity, others, interior, config) {
        Some(to) => {
            debug!(kind = %E::KIND, id = %entity.id(), ?from, ?to, "relocated to clear overlap");
            EditOutcome::Relocated { from, to }
        }
        None => {
            warn!(kind = %E::KIND, id = %entity.id(), "no free placement found; overlap tolerated");
            EditOutcome::Overlapping
        }
    }
}

/// Validate an edit already applied to `entity`, whose pre-edit state is `before`.
///
/// Clamps, then accepts, relocates (if enabled), or restores `before`.
pub(crate) fn commit_edit<E: Occupant, O: Occupant>(
    entity: &mut E,
    before: E,
    others: &[O],
    interior: Interior,
    config: &LayoutConfig,
) -> EditOutcome {
    interior.clamp(entity);
    if !collides_with_any(entity, others) {
        return EditOutcome::Accepted;
    }
    let from = entity.origin();
    if config.relocate_on_commit
        && let Some(to) = search_free_origin(entity, others, interior, config)
    {
        debug!(kind = %E::KIND, id = %entity.id(), ?from, ?to, "edit relocated to clear overlap");
        return EditOutcome::Relocated { from, to };
    }
    debug!(kind = %E::KIND, id = %entity.id(), "edit reverted");
    *entity = before;
    EditOutcome::Reverted
}

impl Room {
    /// Add a bed and move it clear of furniture if it lands on any.
    pub fn place_bed(&mut self, bed: Bed) -> Result<(EntityId, EditOutcome), LayoutError> {
        self.check_new_id(bed.id())?;
        Ok(self.push_resolved_bed(bed))
    }

    /// Add a furniture item and move it clear of beds if it lands on any.
    pub fn place_furniture(
        &mut self,
        item: Furniture,
    ) -> Result<(EntityId, EditOutcome), LayoutError> {
        self.check_new_id(item.id())?;
        Ok(self.push_resolved_furniture(item))
    }

    /// Insert a default bed centred on `center` with a generated id.
    pub fn insert_default_bed(&mut self, center: Point) -> (EntityId, EditOutcome) {
        let id = self.next_id(EntityKind::Bed);
        self.push_resolved_bed(Bed::centered_at(id, center))
    }

    /// Insert a default table centred on `center` with a generated id.
    pub fn insert_default_furniture(&mut self, center: Point) -> (EntityId, EditOutcome) {
        let id = self.next_id(EntityKind::Furniture);
        self.push_resolved_furniture(Furniture::centered_at(id, center))
    }

    fn push_resolved_bed(&mut self, mut bed: Bed) -> (EntityId, EditOutcome) {
        let outcome = resolve_placement(&mut bed, &self.furniture, self.interior(), &self.config);
        let id = bed.id().clone();
        self.beds.push(bed);
        (id, outcome)
    }

    fn push_resolved_furniture(&mut self, mut item: Furniture) -> (EntityId, EditOutcome) {
        let outcome = resolve_placement(&mut item, &self.beds, self.interior(), &self.config);
        let id = item.id().clone();
        self.furniture.push(item);
        (id, outcome)
    }

    /// Insert a default window on `wall` at `offset` with a generated id.
    pub fn insert_window(&mut self, wall: WallSide, offset: f64) -> EntityId {
        let id = self.next_id(EntityKind::Window);
        self.adopt_opening(Opening::window(id, wall, offset))
    }

    /// Insert a default closed door on `wall` at `offset` with a generated id.
    pub fn insert_door(&mut self, wall: WallSide, offset: f64) -> EntityId {
        let id = self.next_id(EntityKind::Door);
        self.adopt_opening(Opening::door(id, wall, offset))
    }

    /// Apply `edit` to a bed and validate it against the furniture.
    pub(crate) fn edit_bed(
        &mut self,
        id: &EntityId,
        edit: impl FnOnce(&mut Bed),
    ) -> Result<EditOutcome, LayoutError> {
        let idx = self.bed_index(id)?;
        let interior = self.interior();
        let Self {
            beds,
            furniture,
            config,
            ..
        } = self;
        let bed = &mut beds[idx];
        let before = bed.clone();
        edit(bed);
        Ok(commit_edit(bed, before, furniture, interior, config))
    }

    /// Apply `edit` to a furniture item and validate it against the beds.
    pub(crate) fn edit_furniture(
        &mut self,
        id: &EntityId,
        edit: impl FnOnce(&mut Furniture),
    ) -> Result<EditOutcome, LayoutError> {
        let idx = self.furniture_index(id)?;
        let interior = self.interior();
        let Self {
            beds,
            furniture,
            config,
            ..
        } = self;
        let item = &mut furniture[idx];
        let before = item.clone();
        edit(item);
        Ok(commit_edit(item, before, beds, interior, config))
    }
}
