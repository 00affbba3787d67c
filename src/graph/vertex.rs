//! Graph vertex records.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::set::SortedSet;

use super::edge::EdgeId;

/// Slot identity of a vertex. Ids order vertex iteration and decide the
/// canonical orientation of undirected edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct VertexId(pub(super) u32);

pub(super) struct VertexNode<V> {
    pub object: V,
    pub flag: i32,
    /// Edges for which this vertex is the source.
    pub out_edges: SortedSet<EdgeId>,
    /// Edges for which this vertex is the destination.
    pub in_edges: SortedSet<EdgeId>,
    // Countdown state for the BOTH-direction neighbour interleave; always
    // within 0..=len of the respective set.
    pub out_to_iterate: usize,
    pub in_to_iterate: usize,
}

impl<V> VertexNode<V> {
    pub fn new(object: V) -> Self {
        Self {
            object,
            flag: 0,
            out_edges: SortedSet::new(),
            in_edges: SortedSet::new(),
            out_to_iterate: 0,
            in_to_iterate: 0,
        }
    }

    /// Forward reset: cursors to the first edge, counters to full.
    /// Applied after every mutation that touches this vertex's edge sets.
    pub fn reset_iteration(&mut self) {
        self.out_edges.cursor_first().ok();
        self.in_edges.cursor_first().ok();
        self.out_to_iterate = self.out_edges.len();
        self.in_to_iterate = self.in_edges.len();
    }

    /// Backward reset: cursors to the last edge, counters drained.
    pub fn reset_iteration_backward(&mut self) {
        self.out_edges.cursor_last().ok();
        self.in_edges.cursor_last().ok();
        self.out_to_iterate = 0;
        self.in_to_iterate = 0;
    }
}
