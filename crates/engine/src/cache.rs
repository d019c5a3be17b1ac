//! Per-node memo of measure results.
//!
//! Entries are keyed by the full constraint tuple plus the owner size used as the percentage
//! base and the inherited direction. The cache holds sixteen entries inline and replaces them
//! round-robin once full.

use layout_buffers::FixedBuffer16;
use layout_values::{Direction, LayoutSize, MeasureMode};
use log::trace;

/// Tolerance used when comparing constraint floats.
const EPSILON: f32 = 0.0001;

fn same_float(left: f32, right: f32) -> bool {
    (left.is_nan() && right.is_nan()) || (left - right).abs() < EPSILON
}

fn same_size(left: LayoutSize, right: LayoutSize) -> bool {
    same_float(left.width, right.width) && same_float(left.height, right.height)
}

/// Everything a measure result depends on besides the subtree itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintKey {
    pub available: LayoutSize,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    pub owner: LayoutSize,
    /// Direction inherited from the owner.
    pub direction: Direction,
}

impl ConstraintKey {
    /// NaN-aware approximate equality.
    pub fn matches(&self, other: &Self) -> bool {
        self.width_mode == other.width_mode
            && self.height_mode == other.height_mode
            && self.direction == other.direction
            && same_size(self.available, other.available)
            && same_size(self.owner, other.owner)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CacheEntry {
    key: ConstraintKey,
    size: LayoutSize,
    used: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureCache {
    entries: FixedBuffer16<CacheEntry>,
    next: usize,
}

impl MeasureCache {
    pub fn lookup(&self, key: &ConstraintKey) -> Option<LayoutSize> {
        self.entries
            .iter()
            .find(|entry| entry.used && entry.key.matches(key))
            .map(|entry| entry.size)
    }

    pub fn store(&mut self, key: ConstraintKey, size: LayoutSize) {
        let slot = self.next;
        self.entries[slot] = CacheEntry {
            key,
            size,
            used: true,
        };
        self.next = (slot + 1) % FixedBuffer16::<CacheEntry>::LENGTH;
        trace!(target: "layout::cache", "stored measurement in slot {slot}: {size:?}");
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.used).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(width: f32, mode: MeasureMode) -> ConstraintKey {
        ConstraintKey {
            available: LayoutSize::new(width, f32::NAN),
            width_mode: mode,
            height_mode: MeasureMode::Undefined,
            owner: LayoutSize::UNDEFINED,
            direction: Direction::Ltr,
        }
    }

    #[test]
    /// # Panics
    /// Panics if NaN constraints do not match each other or a different direction hits.
    fn nan_constraints_match() {
        let mut cache = MeasureCache::default();
        cache.store(key(100.0, MeasureMode::AtMost), LayoutSize::new(40.0, 10.0));
        assert_eq!(
            cache.lookup(&key(100.0, MeasureMode::AtMost)),
            Some(LayoutSize::new(40.0, 10.0))
        );
        assert_eq!(cache.lookup(&key(100.0, MeasureMode::Exactly)), None);
        assert_eq!(cache.lookup(&key(100.5, MeasureMode::AtMost)), None);
        let rtl = ConstraintKey {
            direction: Direction::Rtl,
            ..key(100.0, MeasureMode::AtMost)
        };
        assert_eq!(cache.lookup(&rtl), None);
    }

    #[test]
    /// # Panics
    /// Panics if the seventeenth entry does not evict the oldest one.
    fn round_robin_replacement() {
        let mut cache = MeasureCache::default();
        for step in 0..17u8 {
            let width = f32::from(step);
            cache.store(key(width, MeasureMode::Exactly), LayoutSize::new(width, 0.0));
        }
        assert_eq!(cache.len(), 16);
        assert_eq!(cache.lookup(&key(0.0, MeasureMode::Exactly)), None);
        assert!(cache.lookup(&key(16.0, MeasureMode::Exactly)).is_some());
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
