//! Lazily populated grid cache, one per engine tier.
//!
//! Grids are built on first reference and shared afterwards through `Arc`,
//! so a published grid is never mutated and every piece holding it sees the
//! same cells.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::color::ColorCombination;
use crate::grid::BlockGrid;
use crate::shape::{Category, PieceType, ROTATION_COUNT};
use crate::tables;

/// Composite key of one canonical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub category: Category,
    pub subcategory: u8,
    pub color: ColorCombination,
    pub rotation: u8,
}

impl GridKey {
    pub fn new(kind: &PieceType, rotation: u8) -> Self {
        Self {
            category: kind.category,
            subcategory: kind.subcategory,
            color: kind.color,
            rotation: rotation % ROTATION_COUNT,
        }
    }

    fn piece_type(&self) -> PieceType {
        PieceType::new(self.category, self.subcategory, self.color)
    }
}

#[derive(Debug, Default)]
pub struct LookupCache {
    grids: FxHashMap<GridKey, Arc<BlockGrid>>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a grid only if it has already been built.
    pub fn get(&self, kind: &PieceType, rotation: u8) -> Option<Arc<BlockGrid>> {
        self.grids.get(&GridKey::new(kind, rotation)).cloned()
    }

    /// Builds all four rotations of a type ahead of use.
    ///
    /// Returns `false` if the type has no authored grid.
    pub fn prewarm(&mut self, kind: &PieceType) -> bool {
        let mut built = 0;
        for rotation in 0..ROTATION_COUNT {
            let key = GridKey::new(kind, rotation);
            if self.grids.contains_key(&key) {
                continue;
            }
            let Some(grid) = tables::build(kind, rotation) else {
                return false;
            };
            self.grids.insert(key, Arc::new(grid));
            built += 1;
        }
        debug!(%kind, built, "pre-warmed rotation grids");
        true
    }

    /// Returns the cached grid, building and caching it on a miss.
    ///
    /// A miss is the expected path for a type that was never registered, so
    /// it is only logged. `None` means the type has no authored grid at all.
    pub fn get_or_build(&mut self, kind: &PieceType, rotation: u8) -> Option<Arc<BlockGrid>> {
        let key = GridKey::new(kind, rotation);
        if let Some(grid) = self.grids.get(&key) {
            return Some(Arc::clone(grid));
        }

        let grid = Arc::new(tables::build(&key.piece_type(), key.rotation)?);
        debug!(kind = %key.piece_type(), rotation = key.rotation, "built grid on demand");
        self.grids.insert(key, Arc::clone(&grid));
        Some(grid)
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Tetracube, Tetromino};

    fn t_piece() -> PieceType {
        PieceType::plain(Category::Tetromino(Tetromino::T), ColorCombination::RED)
    }

    #[test]
    fn test_miss_builds_and_caches() {
        let mut cache = LookupCache::new();
        assert!(cache.get(&t_piece(), 0).is_none());

        let first = cache.get_or_build(&t_piece(), 0).unwrap();
        let second = cache.get_or_build(&t_piece(), 0).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&t_piece(), 0).is_some());
    }

    #[test]
    fn test_rotation_is_reduced_modulo_four() {
        let mut cache = LookupCache::new();
        let wrapped = cache.get_or_build(&t_piece(), 5).unwrap();
        let direct = cache.get_or_build(&t_piece(), 1).unwrap();
        assert!(Arc::ptr_eq(&wrapped, &direct));
    }

    #[test]
    fn test_prewarm_builds_every_rotation_once() {
        let mut cache = LookupCache::new();
        assert!(cache.prewarm(&t_piece()));
        assert!(cache.prewarm(&t_piece()));
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_colors_are_separate_entries() {
        let mut cache = LookupCache::new();
        let red = cache.get_or_build(&t_piece(), 0).unwrap();
        let blue_kind = PieceType { color: ColorCombination::BLUE, ..t_piece() };
        let blue = cache.get_or_build(&blue_kind, 0).unwrap();
        assert_ne!(red, blue);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_unauthored_subcategory_is_not_cached() {
        let mut cache = LookupCache::new();
        let bogus = PieceType::new(Category::Tetracube(Tetracube::Screw), 3, ColorCombination::RED);
        assert!(cache.get_or_build(&bogus, 0).is_none());
        assert!(!cache.prewarm(&bogus));
        assert!(cache.is_empty());
    }
}
