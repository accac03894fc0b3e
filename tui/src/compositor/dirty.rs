//! Dirty-Region Tracking
//!
//! Records which regions need their content recomputed. A fresh tracker
//! starts fully dirty so the first pass paints everything.

use std::collections::HashSet;

use super::layout::RegionId;

/// Set of regions whose content is stale
#[derive(Debug)]
pub struct DirtyRegions {
    dirty: HashSet<RegionId>,
}

impl DirtyRegions {
    pub fn new() -> Self {
        Self {
            dirty: RegionId::ALL.into_iter().collect(),
        }
    }

    pub fn mark(&mut self, id: RegionId) {
        self.dirty.insert(id);
    }

    /// Resize, mode switch and first paint
    pub fn mark_all(&mut self) {
        self.dirty.extend(RegionId::ALL);
    }

    pub fn is_dirty(&self, id: RegionId) -> bool {
        self.dirty.contains(&id)
    }

    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Drain the stale regions in paint order
    pub fn take(&mut self) -> Vec<RegionId> {
        let taken = RegionId::ALL
            .into_iter()
            .filter(|id| self.dirty.contains(id))
            .collect();
        self.dirty.clear();
        taken
    }
}

impl Default for DirtyRegions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_fully_dirty() {
        let mut dirty = DirtyRegions::new();
        assert_eq!(dirty.take(), RegionId::ALL.to_vec());
        assert!(dirty.is_clean());
    }

    #[test]
    fn test_take_keeps_paint_order() {
        let mut dirty = DirtyRegions::new();
        dirty.take();
        dirty.mark(RegionId::Input);
        dirty.mark(RegionId::Banner);
        dirty.mark(RegionId::Input);
        assert!(dirty.is_dirty(RegionId::Banner));
        assert!(!dirty.is_dirty(RegionId::Log));
        assert_eq!(dirty.take(), vec![RegionId::Banner, RegionId::Input]);
    }
}
