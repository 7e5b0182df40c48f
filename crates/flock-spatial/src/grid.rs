//! Hash-grid spatial index.
//!
//! # Model
//!
//! The plane is cut into square cells of side `cell_size`.  A position `p`
//! lives in cell `(floor(p.x / cell_size), floor(p.y / cell_size))`.  The map
//! only holds occupied cells, so the domain needs no fixed bounds and agents
//! that drift outside it (circular containment has no hard edge) still index
//! correctly.
//!
//! # Lifetime
//!
//! An index describes exactly one snapshot.  The simulation rebuilds it at
//! the start of every tick, reusing the bucket allocations, and never reads
//! it across ticks.
//!
//! # Neighbor guarantee
//!
//! A ring-`r` query returns every agent within `r * cell_size` of the query
//! agent (plus some farther ones).  With `r = 1` and
//! `cell_size ≥ max rule radius` no in-radius neighbor is ever missed.

use flock_core::Vec2;

#[cfg(feature = "fx-hash")]
type CellMap = rustc_hash::FxHashMap<CellKey, Vec<usize>>;
#[cfg(not(feature = "fx-hash"))]
type CellMap = std::collections::HashMap<CellKey, Vec<usize>>;

/// Integer cell coordinates `(column, row)`.
pub type CellKey = (i32, i32);

/// Agents bucketed by cell for one snapshot.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    cell_size:   f32,
    cells:       CellMap,
    /// Cell of every agent, indexed by agent.  Lets queries skip
    /// re-reading positions.
    agent_cells: Vec<CellKey>,
}

impl SpatialIndex {
    /// An empty index.  Call [`rebuild`](Self::rebuild) before querying.
    ///
    /// # Panics
    /// Panics if `cell_size` is not a positive finite number; configs are
    /// validated long before this point.
    pub fn new(cell_size: f32) -> Self {
        assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "cell size must be positive, got {cell_size}"
        );
        Self {
            cell_size,
            cells:       CellMap::default(),
            agent_cells: Vec::new(),
        }
    }

    /// Group every agent index by its cell in one O(N) pass.
    pub fn build(positions: &[Vec2], cell_size: f32) -> Self {
        let mut index = Self::new(cell_size);
        index.rebuild(positions);
        index
    }

    /// Replace the contents with a fresh snapshot, keeping allocations for
    /// cells that are still occupied.
    pub fn rebuild(&mut self, positions: &[Vec2]) {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }

        self.agent_cells.clear();
        self.agent_cells.reserve(positions.len());
        for (i, &p) in positions.iter().enumerate() {
            let key = self.cell_of(p);
            self.agent_cells.push(key);
            self.cells.entry(key).or_default().push(i);
        }

        // Drop cells vacated since the last snapshot so the map tracks the
        // flock instead of every cell it ever touched.
        self.cells.retain(|_, bucket| !bucket.is_empty());

        log::trace!(
            "spatial index rebuilt: {} agents in {} cells",
            positions.len(),
            self.cells.len()
        );
    }

    /// Cell containing `p`.  Non-finite coordinates saturate (NaN maps to 0).
    #[inline]
    pub fn cell_of(&self, p: Vec2) -> CellKey {
        (
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of indexed agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.agent_cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agent_cells.is_empty()
    }

    /// Number of cells holding at least one agent.
    #[inline]
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Agents in a single cell (empty slice for an unoccupied cell).
    pub fn agents_in_cell(&self, key: CellKey) -> &[usize] {
        self.cells.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidates in the 3×3 block of cells around agent `i`, excluding `i`.
    ///
    /// # Panics
    /// Panics if `i` was not part of the last rebuild.
    pub fn neighbors_of(&self, i: usize) -> Vec<usize> {
        self.neighbors_in_ring(i, 1)
    }

    /// Candidates in the `(2·ring + 1)²` block around agent `i`, excluding `i`.
    pub fn neighbors_in_ring(&self, i: usize, ring: u32) -> Vec<usize> {
        let mut out = Vec::new();
        self.neighbors_into(i, ring, &mut out);
        out
    }

    /// Allocation-reusing form of [`neighbors_in_ring`](Self::neighbors_in_ring).
    /// `out` is cleared first.
    pub fn neighbors_into(&self, i: usize, ring: u32, out: &mut Vec<usize>) {
        out.clear();
        let (cx, cy) = self.agent_cells[i];
        let r = ring.min(i32::MAX as u32) as i32;

        for dy in -r..=r {
            for dx in -r..=r {
                let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                if let Some(bucket) = self.cells.get(&key) {
                    out.extend(bucket.iter().copied().filter(|&j| j != i));
                }
            }
        }
    }
}
