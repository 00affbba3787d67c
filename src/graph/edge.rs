//! Graph edge records.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use super::vertex::VertexId;

/// Slot identity of an edge. Adjacency sets order their edges by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct EdgeId(pub(super) u32);

pub(super) struct EdgeNode<E> {
    pub object: E,
    pub source: VertexId,
    pub destination: VertexId,
}
