//! Pointer coalescer: folds per-surface enter/leave into object-level hover edges.

use std::collections::HashSet;

/// One raycast-testable sub-mesh of an interactive object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Membership transition between empty and non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEdge {
    /// 0 → ≥1 hot surfaces.
    Start,
    /// ≥1 → 0 hot surfaces.
    End,
}

/// Set of surfaces currently under the pointer.
#[derive(Debug, Default)]
pub struct PointerCoalescer {
    members: HashSet<SurfaceId>,
}

impl PointerCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `surface` hot. Re-entering an already hot surface is a no-op.
    pub fn on_surface_enter(&mut self, surface: SurfaceId) -> Option<HoverEdge> {
        let was_empty = self.members.is_empty();
        if !self.members.insert(surface) {
            return None;
        }
        was_empty.then_some(HoverEdge::Start)
    }

    /// Marks `surface` cold. Leaving a surface that is not hot is a no-op.
    pub fn on_surface_leave(&mut self, surface: SurfaceId) -> Option<HoverEdge> {
        if !self.members.remove(&surface) {
            return None;
        }
        self.members.is_empty().then_some(HoverEdge::End)
    }

    /// Drops every hot surface at once; yields a single `End` edge if any were hot.
    pub fn clear(&mut self) -> Option<HoverEdge> {
        if self.members.is_empty() {
            return None;
        }
        self.members.clear();
        Some(HoverEdge::End)
    }

    pub fn is_hovered(&self) -> bool {
        !self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, surface: SurfaceId) -> bool {
        self.members.contains(&surface)
    }
}
