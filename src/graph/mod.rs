// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Generic graph, directed or undirected.
//!
//! Vertices and edges are opaque owned objects; vertices are addressed by
//! value (`V: Eq`) and stored in slab pools keyed by [`VertexId`] /
//! [`EdgeId`]. Per-vertex adjacency lives in two sorted sets of edge ids:
//! `out_edges` holds every edge whose source is the vertex, `in_edges`
//! every edge whose destination it is. In an undirected graph each edge is
//! canonicalised so that its source is the endpoint with the smaller id,
//! which keeps the edge in exactly one out-set (the serializer depends on
//! this to emit each edge once).
//!
//! Iteration is cyclic and stateful. The vertex cycle lives on the vertex
//! set's external cursor; each vertex carries the cursors and countdown
//! counters for its own neighbour cycle. Mutating a vertex's edges resets
//! that vertex's iteration state and nothing else, so cycles over other
//! vertices continue undisturbed.

pub mod io;
pub mod search;

mod edge;
mod pool;
mod vertex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::set::SortedSet;

use self::edge::EdgeNode;
use self::pool::Pool;
use self::vertex::VertexNode;

pub use self::edge::EdgeId;
pub use self::vertex::VertexId;

/// Which of a vertex's edge sets an operation works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeDir {
    In,
    Out,
    Both,
}

/// Which way a cyclic iteration steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IterDir {
    Next,
    Previous,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError<V, E> {
    /// The vertex is already in the graph; it travels back to the caller.
    #[error("graph already contains the vertex")]
    ContainsVertex(V),
    #[error("graph does not contain the vertex")]
    DoesNotContainVertex,
    /// The vertex pair is already connected; the edge object travels back.
    #[error("graph already contains an edge between these vertices")]
    ContainsEdge(E),
    #[error("graph does not contain an edge between these vertices")]
    DoesNotContainEdge,
    /// Undirected graphs hold no self-loops: the canonical orientation
    /// needs a strict source/destination order.
    #[error("undirected graph cannot hold a self-loop")]
    SelfLoop(E),
    #[error("graph has no vertices")]
    Empty,
}

pub struct Graph<V, E> {
    directed: bool,
    vertex_set: SortedSet<VertexId>,
    vertices: Pool<VertexNode<V>>,
    edges: Pool<EdgeNode<E>>,
}

impl<V: Eq, E> Graph<V, E> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertex_set: SortedSet::new(),
            vertices: Pool::new(),
            edges: Pool::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_set.len()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.find_vertex(vertex).is_some()
    }

    /// Adds `vertex` with a zeroed flag and no edges.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError<V, E>> {
        self.add_vertex_returning_id(vertex).map(|_| ())
    }

    /// Removes `vertex`, destroying every incident edge, and hands the
    /// vertex object back. Neighbours losing an edge have their iteration
    /// state reset.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<V, GraphError<V, E>> {
        let vid = self
            .find_vertex(vertex)
            .ok_or(GraphError::DoesNotContainVertex)?;
        self.vertex_set.remove(&vid);
        let node = self.vertices.remove(vid.0).unwrap();
        for eid in node.out_edges {
            // A directed self-loop sits in both of the removed vertex's
            // sets but must only be taken from the pool once.
            let Some(edge) = self.edges.remove(eid.0) else {
                continue;
            };
            if edge.destination != vid {
                let far = self.vertex_mut(edge.destination);
                far.in_edges.remove(&eid);
                far.reset_iteration();
            }
        }
        for eid in node.in_edges {
            let Some(edge) = self.edges.remove(eid.0) else {
                continue;
            };
            if edge.source != vid {
                let far = self.vertex_mut(edge.source);
                far.out_edges.remove(&eid);
                far.reset_iteration();
            }
        }
        Ok(node.object)
    }

    /// Connects `u` to `v` with `edge`. In an undirected graph the pair is
    /// unordered and the stored orientation is the canonical one.
    pub fn add_edge(&mut self, u: &V, v: &V, edge: E) -> Result<(), GraphError<V, E>> {
        let (Some(u_id), Some(v_id)) = (self.find_vertex(u), self.find_vertex(v)) else {
            return Err(GraphError::DoesNotContainVertex);
        };
        self.add_edge_by_ids(u_id, v_id, edge)
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> Result<bool, GraphError<V, E>> {
        let (Some(u_id), Some(v_id)) = (self.find_vertex(u), self.find_vertex(v)) else {
            return Err(GraphError::DoesNotContainVertex);
        };
        Ok(self.edge_between(u_id, v_id).is_some())
    }

    /// Borrows the edge object connecting `u` and `v`.
    pub fn edge(&self, u: &V, v: &V) -> Result<&E, GraphError<V, E>> {
        let (Some(u_id), Some(v_id)) = (self.find_vertex(u), self.find_vertex(v)) else {
            return Err(GraphError::DoesNotContainVertex);
        };
        let eid = self
            .edge_between(u_id, v_id)
            .ok_or(GraphError::DoesNotContainEdge)?;
        Ok(&self.edge_node(eid).object)
    }

    /// Disconnects `u` and `v`, handing the edge object back.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> Result<E, GraphError<V, E>> {
        let (Some(u_id), Some(v_id)) = (self.find_vertex(u), self.find_vertex(v)) else {
            return Err(GraphError::DoesNotContainVertex);
        };
        let eid = self
            .edge_between(u_id, v_id)
            .ok_or(GraphError::DoesNotContainEdge)?;
        let edge = self.edges.remove(eid.0).unwrap();
        let source = self.vertex_mut(edge.source);
        source.out_edges.remove(&eid);
        source.reset_iteration();
        let destination = self.vertex_mut(edge.destination);
        destination.in_edges.remove(&eid);
        destination.reset_iteration();
        Ok(edge.object)
    }

    pub fn degree(&self, vertex: &V, dir: EdgeDir) -> Result<usize, GraphError<V, E>> {
        let vid = self
            .find_vertex(vertex)
            .ok_or(GraphError::DoesNotContainVertex)?;
        Ok(self.degree_by_id(vid, dir))
    }

    /// Cycles through the vertices: returns the vertex under the cursor
    /// and steps the cursor, wrapping at either end.
    pub fn next_vertex(&mut self, direction: IterDir) -> Result<&V, GraphError<V, E>> {
        let vid = self.next_vertex_id(direction)?;
        Ok(&self.vertex(vid).object)
    }

    /// Cycles through the neighbours of `vertex` and returns the next
    /// `(neighbour, edge)` pair.
    ///
    /// With [`EdgeDir::In`] or [`EdgeDir::Out`] the corresponding edge
    /// set's cursor cycles with wraparound. With [`EdgeDir::Both`] the
    /// per-vertex counters interleave the sides: stepping forward consumes
    /// the out-edges, then the in-edges, then resets and repeats; stepping
    /// backward mirrors that. An empty side degenerates to cycling the
    /// other.
    pub fn next_neighbour(
        &mut self,
        vertex: &V,
        dir: EdgeDir,
        direction: IterDir,
    ) -> Result<(&V, &E), GraphError<V, E>> {
        let vid = self
            .find_vertex(vertex)
            .ok_or(GraphError::DoesNotContainVertex)?;
        let eid = self.neighbour_step(vid, dir, direction)?;
        let nb = self.neighbour_of(eid, vid);
        Ok((&self.vertex(nb).object, &self.edge_node(eid).object))
    }

    pub fn flag(&self, vertex: &V) -> Result<i32, GraphError<V, E>> {
        let vid = self
            .find_vertex(vertex)
            .ok_or(GraphError::DoesNotContainVertex)?;
        Ok(self.vertex(vid).flag)
    }

    pub fn set_flag(&mut self, vertex: &V, flag: i32) -> Result<(), GraphError<V, E>> {
        let vid = self
            .find_vertex(vertex)
            .ok_or(GraphError::DoesNotContainVertex)?;
        self.vertex_mut(vid).flag = flag;
        Ok(())
    }

    /// Overwrites every vertex's flag, typically to clear visited marks
    /// before a search.
    pub fn set_all_flags(&mut self, flag: i32) {
        for node in self.vertices.iter_mut() {
            node.flag = flag;
        }
    }

    // ---- internal, shared with the io and search submodules ----

    fn find_vertex(&self, object: &V) -> Option<VertexId> {
        self.vertex_set
            .filter(|id| {
                self.vertices
                    .get(id.0)
                    .is_some_and(|node| node.object == *object)
            })
            .copied()
    }

    fn vertex(&self, vid: VertexId) -> &VertexNode<V> {
        self.vertices.get(vid.0).unwrap()
    }

    fn vertex_mut(&mut self, vid: VertexId) -> &mut VertexNode<V> {
        self.vertices.get_mut(vid.0).unwrap()
    }

    fn edge_node(&self, eid: EdgeId) -> &EdgeNode<E> {
        self.edges.get(eid.0).unwrap()
    }

    fn vertex_object(&self, vid: VertexId) -> &V {
        &self.vertex(vid).object
    }

    fn edge_object(&self, eid: EdgeId) -> &E {
        &self.edge_node(eid).object
    }

    fn flag_by_id(&self, vid: VertexId) -> i32 {
        self.vertex(vid).flag
    }

    fn set_flag_by_id(&mut self, vid: VertexId, flag: i32) {
        self.vertex_mut(vid).flag = flag;
    }

    fn degree_by_id(&self, vid: VertexId, dir: EdgeDir) -> usize {
        let node = self.vertex(vid);
        match dir {
            EdgeDir::In => node.in_edges.len(),
            EdgeDir::Out => node.out_edges.len(),
            EdgeDir::Both => node.in_edges.len() + node.out_edges.len(),
        }
    }

    fn add_vertex_returning_id(&mut self, vertex: V) -> Result<VertexId, GraphError<V, E>> {
        if self.find_vertex(&vertex).is_some() {
            return Err(GraphError::ContainsVertex(vertex));
        }
        let vid = VertexId(self.vertices.insert(VertexNode::new(vertex)));
        if self.vertex_set.add(vid).is_err() {
            unreachable!("pool produced a live vertex id");
        }
        Ok(vid)
    }

    fn add_edge_by_ids(
        &mut self,
        u_id: VertexId,
        v_id: VertexId,
        edge: E,
    ) -> Result<(), GraphError<V, E>> {
        if !self.directed && u_id == v_id {
            return Err(GraphError::SelfLoop(edge));
        }
        if self.edge_between(u_id, v_id).is_some() {
            return Err(GraphError::ContainsEdge(edge));
        }
        let (source, destination) = if self.directed || u_id < v_id {
            (u_id, v_id)
        } else {
            (v_id, u_id)
        };
        let eid = EdgeId(self.edges.insert(EdgeNode {
            object: edge,
            source,
            destination,
        }));
        if self.vertex_mut(source).out_edges.add(eid).is_err() {
            let node = self.edges.remove(eid.0).unwrap();
            return Err(GraphError::ContainsEdge(node.object));
        }
        self.vertex_mut(source).reset_iteration();
        if self.vertex_mut(destination).in_edges.add(eid).is_err() {
            // Invariant: an edge is never left half-linked. Unlink the
            // out-side before reporting the failure.
            let source_node = self.vertex_mut(source);
            source_node.out_edges.remove(&eid);
            source_node.reset_iteration();
            let node = self.edges.remove(eid.0).unwrap();
            return Err(GraphError::ContainsEdge(node.object));
        }
        self.vertex_mut(destination).reset_iteration();
        Ok(())
    }

    fn edge_between(&self, u_id: VertexId, v_id: VertexId) -> Option<EdgeId> {
        let (source, destination) = if self.directed || u_id < v_id {
            (u_id, v_id)
        } else {
            (v_id, u_id)
        };
        self.vertex(source)
            .out_edges
            .filter(|&eid| self.edge_node(eid).destination == destination)
            .copied()
    }

    /// The endpoint of `eid` that is not `vid` (or `vid` for a self-loop).
    fn neighbour_of(&self, eid: EdgeId, vid: VertexId) -> VertexId {
        let edge = self.edge_node(eid);
        if edge.destination == vid {
            edge.source
        } else {
            edge.destination
        }
    }

    fn next_vertex_id(&mut self, direction: IterDir) -> Result<VertexId, GraphError<V, E>> {
        if self.vertex_set.is_empty() {
            return Err(GraphError::Empty);
        }
        Ok(cycle(&mut self.vertex_set, direction))
    }

    fn neighbour_step(
        &mut self,
        vid: VertexId,
        dir: EdgeDir,
        direction: IterDir,
    ) -> Result<EdgeId, GraphError<V, E>> {
        let node = self.vertex_mut(vid);
        match dir {
            EdgeDir::Out => {
                if node.out_edges.is_empty() {
                    return Err(GraphError::DoesNotContainEdge);
                }
                Ok(cycle(&mut node.out_edges, direction))
            }
            EdgeDir::In => {
                if node.in_edges.is_empty() {
                    return Err(GraphError::DoesNotContainEdge);
                }
                Ok(cycle(&mut node.in_edges, direction))
            }
            EdgeDir::Both => {
                let out_len = node.out_edges.len();
                let in_len = node.in_edges.len();
                if out_len == 0 && in_len == 0 {
                    return Err(GraphError::DoesNotContainEdge);
                }
                if in_len == 0 {
                    return Ok(cycle(&mut node.out_edges, direction));
                }
                if out_len == 0 {
                    return Ok(cycle(&mut node.in_edges, direction));
                }
                match direction {
                    IterDir::Next => {
                        if node.out_to_iterate == 0 && node.in_to_iterate == 0 {
                            node.reset_iteration();
                        }
                        if node.out_to_iterate > 0 {
                            node.out_to_iterate -= 1;
                            Ok(cycle(&mut node.out_edges, IterDir::Next))
                        } else {
                            node.in_to_iterate -= 1;
                            Ok(cycle(&mut node.in_edges, IterDir::Next))
                        }
                    }
                    IterDir::Previous => {
                        if node.out_to_iterate == out_len && node.in_to_iterate == in_len {
                            node.reset_iteration_backward();
                        }
                        if node.in_to_iterate < in_len {
                            node.in_to_iterate += 1;
                            Ok(cycle(&mut node.in_edges, IterDir::Previous))
                        } else {
                            node.out_to_iterate += 1;
                            Ok(cycle(&mut node.out_edges, IterDir::Previous))
                        }
                    }
                }
            }
        }
    }
}

/// Returns the item under `set`'s external cursor and steps the cursor,
/// wrapping to the opposite end when it runs out. The set must be
/// non-empty.
fn cycle<T: Copy>(set: &mut SortedSet<T>, direction: IterDir) -> T {
    let value = *set.current().unwrap();
    let stepped = match direction {
        IterDir::Next => set.cursor_next(),
        IterDir::Previous => set.cursor_previous(),
    };
    if stepped.is_err() {
        match direction {
            IterDir::Next => set.cursor_first().unwrap(),
            IterDir::Previous => set.cursor_last().unwrap(),
        }
    }
    value
}
