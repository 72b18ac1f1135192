//! Cyclic navigation over the catalog indices.
//!
//! The navigator owns the single active index. `advance`/`retreat` walk the
//! cycle `0 -> 1 -> .. -> N-1 -> 0`, `select` jumps anywhere in one step.
//! Every mutator reports whether the index actually moved so callers can
//! skip re-composing the stack on a no-op.

use crate::catalog::Catalog;
use crate::error::{CoreError, Result};

/// Direction of a single step around the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    active: usize,
    len: usize,
}

impl Navigator {
    /// Create a navigator over `len` entries, starting at index 0.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(CoreError::EmptyCatalog);
        }
        Ok(Self { active: 0, len })
    }

    /// Navigator over every entry of `catalog`; infallible because a
    /// catalog is never empty.
    pub fn over(catalog: &Catalog) -> Self {
        Self {
            active: 0,
            len: catalog.len(),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true; a navigator always covers at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// `active <- (active + 1) mod N`
    pub fn advance(&mut self) -> bool {
        self.set((self.active + 1) % self.len)
    }

    /// `active <- (active - 1 + N) mod N`; adding `N` first keeps the
    /// unsigned arithmetic from underflowing at index 0.
    pub fn retreat(&mut self) -> bool {
        self.set((self.active + self.len - 1) % self.len)
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.advance(),
            Direction::Previous => self.retreat(),
        }
    }

    /// Jump straight to `index`. Out-of-range indices are rejected and the
    /// current index is kept.
    pub fn select(&mut self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.set(index))
    }

    fn set(&mut self, index: usize) -> bool {
        debug_assert!(index < self.len);
        if index == self.active {
            return false;
        }
        log::debug!(
            "Carousel active index {} -> {} (len={})",
            self.active,
            index,
            self.len
        );
        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_navigator_is_rejected() {
        assert_eq!(Navigator::new(0), Err(CoreError::EmptyCatalog));
    }

    #[test]
    fn navigator_over_catalog_starts_at_front() {
        let nav = Navigator::over(&Catalog::builtin());
        assert_eq!(nav.active(), 0);
        assert_eq!(nav.len(), 7);
    }

    #[test]
    fn retreat_from_zero_wraps_to_last() {
        let mut nav = Navigator::new(7).unwrap();
        assert!(nav.retreat());
        assert_eq!(nav.active(), 6);
    }

    #[test]
    fn advance_from_last_wraps_to_zero() {
        let mut nav = Navigator::new(7).unwrap();
        nav.select(6).unwrap();
        assert!(nav.advance());
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn single_entry_never_moves() {
        let mut nav = Navigator::new(1).unwrap();
        assert!(!nav.advance());
        assert!(!nav.retreat());
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn select_same_index_reports_no_change() {
        let mut nav = Navigator::new(3).unwrap();
        nav.select(2).unwrap();
        assert_eq!(nav.select(2), Ok(false));
    }

    #[test]
    fn out_of_range_select_keeps_state() {
        let mut nav = Navigator::new(7).unwrap();
        nav.select(3).unwrap();
        assert_eq!(
            nav.select(7),
            Err(CoreError::IndexOutOfRange { index: 7, len: 7 })
        );
        assert_eq!(nav.active(), 3);
    }

    #[test]
    fn step_dispatches_by_direction() {
        let mut nav = Navigator::new(4).unwrap();
        nav.step(Direction::Next);
        nav.step(Direction::Next);
        nav.step(Direction::Previous);
        assert_eq!(nav.active(), 1);
    }
}
