//! Exhaustive enumeration of labeled graphs by list doubling.
//!
//! Both enumerators walk the candidate edge slots in a fixed order and, for
//! each slot, copy every graph produced so far and add that slot's edge to
//! the copy. Each slot therefore doubles the result list; after the final
//! slot the list holds exactly one graph per subset of the edge slots, with
//! no duplicates and no decoding between a subset index and an adjacency
//! value; all mutation stays inside [`Graph`].

use crate::graph::{Graph, GraphError};

// ============================================================================
// Sizing
// ============================================================================

/// Hard ceiling on candidate edge slots per enumeration. Every `2^slots`
/// graph is materialized in a single `Vec` before any consumer sees it, and
/// at this bound the list already holds ~16.7 million graphs.
pub const MAX_EDGE_SLOTS: u32 = 24;

/// Number of unordered node pairs, self-pairs included: `n * (n + 1) / 2`.
#[inline]
pub const fn undirected_edge_slots(node_count: usize) -> u32 {
    (node_count * (node_count + 1) / 2) as u32
}

/// Number of ordered node pairs, self-pairs included: `n * n`.
#[inline]
pub const fn directed_edge_slots(node_count: usize) -> u32 {
    (node_count * node_count) as u32
}

fn check_slots(node_count: usize, edge_slots: u32) -> Result<(), GraphError> {
    if edge_slots > MAX_EDGE_SLOTS {
        return Err(GraphError::EnumerationTooLarge {
            nodes: node_count,
            edge_slots,
        });
    }
    Ok(())
}

// ============================================================================
// Enumerators
// ============================================================================

/// Generates every labeled undirected graph on `node_count` nodes,
/// self-loops included.
///
/// Unordered pairs `(i, j)` with `i <= j` are visited in ascending `i` then
/// `j`. The result holds exactly `2^(n(n+1)/2)` pairwise distinct graphs:
/// the empty graph first, the graph carrying every candidate edge last.
///
/// # Errors
/// Returns [`GraphError::EnumerationTooLarge`] if the edge-slot total
/// exceeds [`MAX_EDGE_SLOTS`].
pub fn generate_undirected_graphs(node_count: usize) -> Result<Vec<Graph>, GraphError> {
    let slots = undirected_edge_slots(node_count);
    check_slots(node_count, slots)?;

    let mut graphs = Vec::with_capacity(1usize << slots);
    graphs.push(Graph::new(node_count)?);
    for i in 0..node_count {
        for j in i..node_count {
            let len = graphs.len();
            for k in 0..len {
                let mut g = graphs[k].clone();
                g.add_undirected_edge(i, j);
                graphs.push(g);
            }
        }
    }
    Ok(graphs)
}

/// Generates every labeled directed graph on `node_count` nodes, self-loops
/// included.
///
/// Same doubling scheme as [`generate_undirected_graphs`], but every ordered
/// pair `(i, j)` is an independent slot, so the result holds exactly
/// `2^(n^2)` pairwise distinct graphs.
///
/// # Errors
/// Returns [`GraphError::EnumerationTooLarge`] if the edge-slot total
/// exceeds [`MAX_EDGE_SLOTS`].
pub fn generate_directed_graphs(node_count: usize) -> Result<Vec<Graph>, GraphError> {
    let slots = directed_edge_slots(node_count);
    check_slots(node_count, slots)?;

    let mut graphs = Vec::with_capacity(1usize << slots);
    graphs.push(Graph::new(node_count)?);
    for i in 0..node_count {
        for j in 0..node_count {
            let len = graphs.len();
            for k in 0..len {
                let mut g = graphs[k].clone();
                g.add_directed_edge(i, j);
                graphs.push(g);
            }
        }
    }
    Ok(graphs)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // -------------------------------------------------------------------------
    // Counts and distinctness
    // -------------------------------------------------------------------------

    #[test]
    fn undirected_counts_match_two_to_the_edge_slots() {
        for n in 0..=4 {
            let graphs = generate_undirected_graphs(n).unwrap();
            assert_eq!(
                graphs.len(),
                1usize << undirected_edge_slots(n),
                "node count {n}"
            );
        }
    }

    #[test]
    fn undirected_graphs_are_pairwise_distinct() {
        for n in 0..=4 {
            let graphs = generate_undirected_graphs(n).unwrap();
            let distinct: HashSet<&[u64]> = graphs.iter().map(Graph::masks).collect();
            assert_eq!(distinct.len(), graphs.len(), "node count {n}");
        }
    }

    #[test]
    fn directed_counts_match_two_to_the_edge_slots() {
        for n in 0..=3 {
            let graphs = generate_directed_graphs(n).unwrap();
            assert_eq!(
                graphs.len(),
                1usize << directed_edge_slots(n),
                "node count {n}"
            );
        }
    }

    #[test]
    fn directed_graphs_are_pairwise_distinct() {
        let graphs = generate_directed_graphs(3).unwrap();
        let distinct: HashSet<&[u64]> = graphs.iter().map(Graph::masks).collect();
        assert_eq!(distinct.len(), graphs.len());
    }

    // -------------------------------------------------------------------------
    // Generation order and structure
    // -------------------------------------------------------------------------

    #[test]
    fn first_graph_is_empty_and_last_has_every_candidate_edge() {
        let graphs = generate_undirected_graphs(3).unwrap();
        assert_eq!(graphs.len(), 64);
        assert_eq!(graphs[0].to_string(), "[]");

        let last = graphs.last().unwrap();
        for i in 0..3 {
            for j in i..3 {
                assert!(last.has_edge(i, j), "missing ({i} {j})");
                assert!(last.has_edge(j, i), "missing ({j} {i})");
            }
        }
        assert_eq!(last.edge_count(), 9);
    }

    #[test]
    fn second_graph_carries_only_the_first_candidate_pair() {
        // The pair walk starts at the self-pair (0, 0).
        let graphs = generate_undirected_graphs(3).unwrap();
        assert_eq!(graphs[1].to_string(), "[(0 0)]");
    }

    #[test]
    fn every_undirected_result_is_symmetric() {
        for g in generate_undirected_graphs(3).unwrap() {
            assert!(g.is_symmetric(), "asymmetric result: {g}");
        }
    }

    #[test]
    fn directed_enumeration_covers_asymmetric_graphs() {
        let graphs = generate_directed_graphs(2).unwrap();
        assert_eq!(graphs.len(), 16);
        assert!(graphs.iter().any(|g| g.has_edge(0, 1) && !g.has_edge(1, 0)));

        let last = graphs.last().unwrap();
        assert_eq!(last.masks(), &[0b11, 0b11]);
    }

    #[test]
    fn zero_nodes_yields_the_single_empty_graph() {
        let graphs = generate_undirected_graphs(0).unwrap();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].node_count(), 0);
    }

    // -------------------------------------------------------------------------
    // Size guard
    // -------------------------------------------------------------------------

    #[test]
    fn edge_slot_counts() {
        assert_eq!(undirected_edge_slots(0), 0);
        assert_eq!(undirected_edge_slots(3), 6);
        assert_eq!(undirected_edge_slots(4), 10);
        assert_eq!(directed_edge_slots(3), 9);
        assert_eq!(directed_edge_slots(4), 16);
    }

    #[test]
    fn enumeration_rejects_node_counts_past_the_slot_ceiling() {
        assert_eq!(
            generate_undirected_graphs(7),
            Err(GraphError::EnumerationTooLarge {
                nodes: 7,
                edge_slots: 28
            })
        );
        assert_eq!(
            generate_directed_graphs(5),
            Err(GraphError::EnumerationTooLarge {
                nodes: 5,
                edge_slots: 25
            })
        );
    }
}
