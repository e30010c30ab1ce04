//! Bitmask adjacency graphs on up to 64 labeled nodes.
//!
//! A [`Graph`] stores one `u64` neighbor mask per node: bit `j` of mask `i`
//! means a directed edge from node `i` to node `j`. An undirected edge is the
//! pair of reciprocal bits. Nodes have no identity beyond their position, so
//! relabeling two nodes is a mask exchange plus a bit exchange inside every
//! mask.

use rand::Rng;
use std::fmt;
use std::io::{self, Write};

// ============================================================================
// Constants and bit helpers
// ============================================================================

/// Hard ceiling on the node count: one `u64` adjacency mask per node means
/// bit positions exist only for nodes `0..64`.
pub const MAX_NODES: usize = 64;

/// Returns a mask with the lowest `n` bits set.
#[inline(always)]
const fn low_bits(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

#[inline(always)]
const fn bit(v: usize) -> u64 {
    1u64 << v
}

// ============================================================================
// Errors
// ============================================================================

/// Errors from graph construction and enumeration sizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// More nodes requested than a `u64` adjacency mask can address.
    TooManyNodes {
        /// Requested node count.
        nodes: usize,
    },
    /// Enumerating this node count would materialize more graphs than the
    /// edge-slot ceiling allows.
    EnumerationTooLarge {
        /// Requested node count.
        nodes: usize,
        /// Candidate edge slots implied by the node count.
        edge_slots: u32,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::TooManyNodes { nodes } => write!(
                f,
                "graph has {nodes} nodes; u64 adjacency masks support at most {MAX_NODES}"
            ),
            GraphError::EnumerationTooLarge { nodes, edge_slots } => write!(
                f,
                "enumerating {nodes} nodes means 2^{edge_slots} graphs, too many to materialize"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Errors encountered while parsing a `0/1` adjacency matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixParseError {
    /// No non-empty rows were found.
    Empty,
    /// Matrix is not square.
    NonSquare {
        /// The row index with the wrong length.
        row: usize,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// Encountered a character other than `0` or `1`.
    InvalidChar {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The invalid character.
        ch: char,
    },
    /// The matrix is wider than a `u64` bitmask row.
    TooManyNodes {
        /// Number of rows in the matrix.
        nodes: usize,
    },
}

impl fmt::Display for MatrixParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixParseError::Empty => write!(f, "adjacency matrix is empty"),
            MatrixParseError::NonSquare { row, expected, got } => write!(
                f,
                "adjacency matrix is not square: row {row} has length {got}, expected {expected}"
            ),
            MatrixParseError::InvalidChar { row, col, ch } => write!(
                f,
                "invalid character at ({row}, {col}): {ch:?} (expected '0' or '1')"
            ),
            MatrixParseError::TooManyNodes { nodes } => write!(
                f,
                "matrix has {nodes} rows; this implementation supports at most {MAX_NODES}"
            ),
        }
    }
}

impl std::error::Error for MatrixParseError {}

// ============================================================================
// Graph
// ============================================================================

/// A labeled graph on a fixed node count, one `u64` adjacency mask per node.
///
/// The mask vector always has exactly `node_count` entries and is deeply
/// owned: `clone()` yields an independent value, which the enumerator relies
/// on every time it branches a candidate into edge-present and edge-absent
/// variants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Graph {
    node_count: usize,
    masks: Vec<u64>,
}

impl Graph {
    /// Creates a zeroed graph (no edges) on `node_count` nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyNodes`] if `node_count` exceeds
    /// [`MAX_NODES`].
    pub fn new(node_count: usize) -> Result<Self, GraphError> {
        if node_count > MAX_NODES {
            return Err(GraphError::TooManyNodes { nodes: node_count });
        }
        Ok(Self {
            node_count,
            masks: vec![0u64; node_count],
        })
    }

    /// Adopts a prebuilt mask vector, one mask per node.
    ///
    /// Bits at positions `masks.len()` and above must be clear; that is a
    /// caller contract, checked in debug builds.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyNodes`] if `masks.len()` exceeds
    /// [`MAX_NODES`].
    pub fn from_masks(masks: Vec<u64>) -> Result<Self, GraphError> {
        let node_count = masks.len();
        if node_count > MAX_NODES {
            return Err(GraphError::TooManyNodes { nodes: node_count });
        }
        for (i, &mask) in masks.iter().enumerate() {
            debug_assert_eq!(
                mask & !low_bits(node_count),
                0,
                "mask {i} has bits outside the node range"
            );
        }
        Ok(Self { node_count, masks })
    }

    /// Creates the complete graph: every edge between distinct nodes in both
    /// directions, no self-loops.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyNodes`] if `node_count` exceeds
    /// [`MAX_NODES`].
    pub fn complete(node_count: usize) -> Result<Self, GraphError> {
        let mut g = Self::new(node_count)?;
        let mask = low_bits(node_count);
        for i in 0..node_count {
            g.masks[i] = mask & !bit(i);
        }
        Ok(g)
    }

    /// Samples an Erdős–Rényi graph: each unordered pair of distinct nodes
    /// carries an undirected edge independently with probability `p`.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyNodes`] if `node_count` exceeds
    /// [`MAX_NODES`].
    pub fn random_undirected<R: Rng>(
        rng: &mut R,
        node_count: usize,
        p: f64,
    ) -> Result<Self, GraphError> {
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
        let mut g = Self::new(node_count)?;
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if rng.random_bool(p) {
                    g.masks[i] |= bit(j);
                    g.masks[j] |= bit(i);
                }
            }
        }
        Ok(g)
    }

    /// Returns the node count.
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the adjacency masks, one per node.
    #[inline(always)]
    pub fn masks(&self) -> &[u64] {
        &self.masks
    }

    /// Returns whether the directed edge `i -> j` exists.
    ///
    /// # Panics
    /// Panics if `i` or `j` is not below the node count.
    #[inline(always)]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.check_index(i);
        self.check_index(j);
        (self.masks[i] & bit(j)) != 0
    }

    /// Sets the directed edge `i -> j`. Setting an edge that is already
    /// present is a no-op.
    ///
    /// # Panics
    /// Panics if `i` or `j` is not below the node count.
    #[inline]
    pub fn add_directed_edge(&mut self, i: usize, j: usize) {
        self.check_index(i);
        self.check_index(j);
        self.masks[i] |= bit(j);
    }

    /// Sets both reciprocal bits for the edge between `i` and `j`. For
    /// `i == j` this sets the single diagonal bit, a self-loop.
    ///
    /// # Panics
    /// Panics if `i` or `j` is not below the node count.
    #[inline]
    pub fn add_undirected_edge(&mut self, i: usize, j: usize) {
        self.check_index(i);
        self.check_index(j);
        self.masks[i] |= bit(j);
        self.masks[j] |= bit(i);
    }

    /// Relabels nodes `i` and `j`, exchanging their positions.
    ///
    /// The two masks trade places, then bits `i` and `j` trade places inside
    /// every mask so that incoming edges follow the relabeling too. The
    /// unlabeled structure is unchanged and the operation is its own inverse.
    ///
    /// # Panics
    /// Panics if `i` or `j` is not below the node count.
    pub fn swap_nodes(&mut self, i: usize, j: usize) {
        self.check_index(i);
        self.check_index(j);
        self.masks.swap(i, j);
        for mask in &mut self.masks {
            // XOR two-bit exchange: flip both bits iff they differ.
            let x = (*mask >> i ^ *mask >> j) & 1;
            *mask ^= (x << i) | (x << j);
        }
    }

    /// Returns the out-degree of node `i`.
    ///
    /// # Panics
    /// Panics if `i` is not below the node count.
    #[inline]
    pub fn out_degree(&self, i: usize) -> u32 {
        self.check_index(i);
        self.masks[i].count_ones()
    }

    /// Returns the total number of directed edges (set bits). An undirected
    /// edge between distinct nodes contributes two; a self-loop one.
    #[inline]
    pub fn edge_count(&self) -> usize {
        let mut sum = 0u32;
        for &mask in &self.masks {
            sum += mask.count_ones();
        }
        sum as usize
    }

    /// Returns whether every edge has its reciprocal bit set, i.e.
    /// `has_edge(i, j) == has_edge(j, i)` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.node_count {
            for j in (i + 1)..self.node_count {
                if ((self.masks[i] >> j) & 1) != ((self.masks[j] >> i) & 1) {
                    return false;
                }
            }
        }
        true
    }

    /// Renders the adjacency-listing form: one line per node holding the node
    /// index, a colon, then its neighbors in ascending order.
    ///
    /// A node with no outgoing edges still gets its line.
    pub fn adjacency_string(&self) -> String {
        use fmt::Write as _;
        let mut out = String::new();
        for i in 0..self.node_count {
            let _ = write!(out, "{i}:");
            let mut t = self.masks[i];
            while t != 0 {
                let j = t.trailing_zeros();
                t &= t - 1;
                let _ = write!(out, " {j}");
            }
            out.push('\n');
        }
        out
    }

    /// Writes the graph as an `n x n` matrix of `0`/`1` characters, one row
    /// per line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_matrix_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for i in 0..self.node_count {
            for j in 0..self.node_count {
                let edge = (self.masks[i] >> j) & 1;
                write!(w, "{edge}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Parses an `n x n` matrix of `0`/`1` characters.
    ///
    /// Rules:
    /// - Blank lines are ignored.
    /// - The matrix must be square with at most [`MAX_NODES`] rows.
    /// - Asymmetric entries and diagonal bits are legal: graphs here are
    ///   general directed graphs and may carry self-loops.
    ///
    /// # Errors
    /// Returns an error if the input is empty, non-square, too wide, or
    /// contains characters other than `0` and `1`.
    pub fn parse_matrix(text: &str) -> Result<Self, MatrixParseError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(MatrixParseError::Empty);
        }
        let n = lines.len();
        if n > MAX_NODES {
            return Err(MatrixParseError::TooManyNodes { nodes: n });
        }

        let mut masks = Vec::with_capacity(n);
        for (i, line) in lines.iter().enumerate() {
            let bytes = line.as_bytes();
            if bytes.len() != n {
                return Err(MatrixParseError::NonSquare {
                    row: i,
                    expected: n,
                    got: bytes.len(),
                });
            }
            let mut mask = 0u64;
            for (j, &b) in bytes.iter().enumerate() {
                match b {
                    b'0' => {}
                    b'1' => mask |= bit(j),
                    _ => {
                        return Err(MatrixParseError::InvalidChar {
                            row: i,
                            col: j,
                            ch: b as char,
                        })
                    }
                }
            }
            masks.push(mask);
        }

        Ok(Self {
            node_count: n,
            masks,
        })
    }

    #[inline(always)]
    fn check_index(&self, v: usize) {
        assert!(
            v < self.node_count,
            "node index {v} out of range for node count {}",
            self.node_count
        );
    }
}

impl fmt::Display for Graph {
    /// Edge-pair listing: bracketed `(i j)` pairs in ascending `i` then `j`.
    /// The empty graph renders as `[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for i in 0..self.node_count {
            let mut t = self.masks[i];
            while t != 0 {
                let j = t.trailing_zeros();
                t &= t - 1;
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "({i} {j})")?;
            }
        }
        f.write_str("]")
    }
}

// ============================================================================
// Tests
// ============================================================================
