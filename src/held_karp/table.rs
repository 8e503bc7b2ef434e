//! Subset × node arena for the Held-Karp recurrence.

use crate::error::TspError;

/// Marks a table entry with no predecessor (singleton subsets).
pub(super) const NO_PARENT: u8 = u8::MAX;

/// Dense `(mask, node)` table of path costs and predecessors.
///
/// Columns are the non-origin nodes `1..n`, stored at column `node - 1`;
/// bit `node - 1` of a mask marks `node` as visited. Both tables are
/// allocated up front as `2^width · width` entries.
pub(super) struct SubsetTable {
    width: usize,
    cost: Vec<f64>,
    parent: Vec<u8>,
}

impl SubsetTable {
    /// Allocates a table for `width` non-origin nodes.
    ///
    /// Fails with [`TspError::ProblemTooLarge`] when the entry count
    /// overflows `usize` or the allocation is refused.
    pub(super) fn new(width: usize) -> Result<Self, TspError> {
        let too_large = || TspError::ProblemTooLarge {
            nodes: width + 1,
            max: usize::BITS as usize,
        };

        let rows = u32::try_from(width)
            .ok()
            .and_then(|w| 1usize.checked_shl(w))
            .ok_or_else(too_large)?;
        let entries = rows.checked_mul(width).ok_or_else(too_large)?;

        let mut cost = Vec::new();
        cost.try_reserve_exact(entries).map_err(|_| too_large())?;
        cost.resize(entries, f64::INFINITY);

        let mut parent = Vec::new();
        parent.try_reserve_exact(entries).map_err(|_| too_large())?;
        parent.resize(entries, NO_PARENT);

        Ok(Self {
            width,
            cost,
            parent,
        })
    }

    /// Mask with every non-origin node set.
    pub(super) fn full_mask(&self) -> usize {
        (1usize << self.width) - 1
    }

    pub(super) fn entries(&self) -> usize {
        self.cost.len()
    }

    #[inline]
    fn index(&self, mask: usize, column: usize) -> usize {
        mask * self.width + column
    }

    #[inline]
    pub(super) fn cost(&self, mask: usize, column: usize) -> f64 {
        self.cost[self.index(mask, column)]
    }

    #[inline]
    pub(super) fn parent(&self, mask: usize, column: usize) -> u8 {
        self.parent[self.index(mask, column)]
    }

    #[inline]
    pub(super) fn set(&mut self, mask: usize, column: usize, cost: f64, parent: u8) {
        let idx = self.index(mask, column);
        self.cost[idx] = cost;
        self.parent[idx] = parent;
    }
}

/// Iterates the set bit positions of `mask`, lowest first.
pub(super) fn bits(mut mask: usize) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            None
        } else {
            let bit = mask.trailing_zeros() as usize;
            mask &= mask - 1;
            Some(bit)
        }
    })
}
