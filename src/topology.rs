//! Precomputed board topology: units, units-of-a-square, and peers-of-a-square.
//!
//! Built once and shared as `&'static Topology` (spec.md §5/§9: "topology
//! built once... construct once at engine startup and pass an immutable
//! reference into everything that needs it").

use std::sync::OnceLock;

/// A square index in `0..81`, encoding `row * 9 + col`.
pub type Square = usize;

/// One of the 27 units (a row, a column, or a 3x3 block): 9 square indices
/// that must collectively hold every digit exactly once.
pub type Unit = [Square; 9];

/// The precomputed, immutable board topology.
pub struct Topology {
    unit_list: Vec<Unit>,
    units_of: Vec<[usize; 3]>,
    peers_of: Vec<[Square; 20]>,
}

fn row_col(sq: Square) -> (usize, usize) {
    (sq / 9, sq % 9)
}

fn block_of(sq: Square) -> usize {
    let (row, col) = row_col(sq);
    (row / 3) * 3 + col / 3
}

fn build() -> Topology {
    let mut unit_list: Vec<Unit> = Vec::with_capacity(27);

    // Rows.
    for row in 0..9 {
        let mut unit = [0usize; 9];
        for (col, slot) in unit.iter_mut().enumerate() {
            *slot = row * 9 + col;
        }
        unit_list.push(unit);
    }
    // Columns.
    for col in 0..9 {
        let mut unit = [0usize; 9];
        for (row, slot) in unit.iter_mut().enumerate() {
            *slot = row * 9 + col;
        }
        unit_list.push(unit);
    }
    // Blocks, in row-major block order.
    for block_row in 0..3 {
        for block_col in 0..3 {
            let mut unit = [0usize; 9];
            let mut idx = 0;
            for r in 0..3 {
                for c in 0..3 {
                    unit[idx] = (block_row * 3 + r) * 9 + (block_col * 3 + c);
                    idx += 1;
                }
            }
            unit_list.push(unit);
        }
    }
    debug_assert_eq!(unit_list.len(), 27);

    // units_of[sq]: the indices (into unit_list) of the row, column, and block unit.
    let mut units_of: Vec<[usize; 3]> = Vec::with_capacity(81);
    for sq in 0..81 {
        let (row, col) = row_col(sq);
        let block = block_of(sq);
        units_of.push([row, 9 + col, 18 + block]);
    }

    // peers_of[sq]: the 20 distinct other squares sharing a unit with sq.
    let mut peers_of: Vec<[Square; 20]> = Vec::with_capacity(81);
    for sq in 0..81 {
        let mut peers = Vec::with_capacity(20);
        for &unit_idx in &units_of[sq] {
            for &cand in &unit_list[unit_idx] {
                if cand != sq && !peers.contains(&cand) {
                    peers.push(cand);
                }
            }
        }
        debug_assert_eq!(peers.len(), 20);
        let mut arr = [0usize; 20];
        arr.copy_from_slice(&peers);
        peers_of.push(arr);
    }

    Topology {
        unit_list,
        units_of,
        peers_of,
    }
}

static TOPOLOGY: OnceLock<Topology> = OnceLock::new();

impl Topology {
    /// Returns the shared, lazily-built topology instance.
    pub fn get() -> &'static Topology {
        TOPOLOGY.get_or_init(build)
    }

    /// The 27 units, in deterministic order: rows, then columns, then
    /// blocks in row-major block order.
    pub fn unit_list(&self) -> &[Unit] {
        &self.unit_list
    }

    /// The three units containing `sq`.
    pub fn units_of(&self, sq: Square) -> [&Unit; 3] {
        let idx = self.units_of[sq];
        [
            &self.unit_list[idx[0]],
            &self.unit_list[idx[1]],
            &self.unit_list[idx[2]],
        ]
    }

    /// The 20 distinct peers of `sq`.
    pub fn peers_of(&self, sq: Square) -> &[Square; 20] {
        &self.peers_of[sq]
    }
}
