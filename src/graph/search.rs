// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Depth-first and breadth-first graph traversal.
//!
//! Both searches mark vertices visited by writing `visited_flag` into the
//! vertex flag; a vertex counts as unvisited while its flag differs. No
//! shadow visited-set is allocated, so the caller is responsible for
//! resetting flags (`set_all_flags`) before a fresh search.

use thiserror::Error;

use crate::queue::Queue;

use super::{EdgeDir, EdgeId, Graph, IterDir, VertexId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphSearchError {
    #[error("graph does not contain the vertex")]
    DoesNotContainVertex,
    #[error("vertex is already marked visited")]
    VertexAlreadyVisited,
}

/// Recursive depth-first search from `start`.
///
/// Visits a vertex, marks it, then recurses into each unvisited neighbour
/// after reporting the connecting edge as `(parent, edge, child)`.
/// Directed graphs follow out-edges only.
pub fn dfs<V, E, FV, FE>(
    graph: &mut Graph<V, E>,
    start: &V,
    visited_flag: i32,
    mut visit_vertex: FV,
    mut visit_edge: FE,
) -> Result<(), GraphSearchError>
where
    V: Eq,
    FV: FnMut(&V),
    FE: FnMut(&V, &E, &V),
{
    let vid = graph
        .find_vertex(start)
        .ok_or(GraphSearchError::DoesNotContainVertex)?;
    if graph.flag_by_id(vid) == visited_flag {
        return Err(GraphSearchError::VertexAlreadyVisited);
    }
    let dir = travel_direction(graph);
    dfs_visit(graph, vid, dir, visited_flag, &mut visit_vertex, &mut visit_edge);
    Ok(())
}

/// Breadth-first search from `start`, driven by a FIFO queue of
/// `(parent, edge, child)` records. Children are marked visited when
/// enqueued, so each vertex enters the queue at most once.
pub fn bfs<V, E, FV, FE>(
    graph: &mut Graph<V, E>,
    start: &V,
    visited_flag: i32,
    mut visit_vertex: FV,
    mut visit_edge: FE,
) -> Result<(), GraphSearchError>
where
    V: Eq,
    FV: FnMut(&V),
    FE: FnMut(&V, &E, &V),
{
    let vid = graph
        .find_vertex(start)
        .ok_or(GraphSearchError::DoesNotContainVertex)?;
    if graph.flag_by_id(vid) == visited_flag {
        return Err(GraphSearchError::VertexAlreadyVisited);
    }
    let dir = travel_direction(graph);
    graph.set_flag_by_id(vid, visited_flag);
    visit_vertex(graph.vertex_object(vid));
    let mut frontier: Queue<BfsRecord> = Queue::new();
    enqueue_unvisited(graph, &mut frontier, vid, dir, visited_flag);
    while let Some(record) = frontier.dequeue() {
        visit_edge(
            graph.vertex_object(record.parent),
            graph.edge_object(record.edge),
            graph.vertex_object(record.child),
        );
        visit_vertex(graph.vertex_object(record.child));
        enqueue_unvisited(graph, &mut frontier, record.child, dir, visited_flag);
    }
    Ok(())
}

struct BfsRecord {
    parent: VertexId,
    edge: EdgeId,
    child: VertexId,
}

fn travel_direction<V: Eq, E>(graph: &Graph<V, E>) -> EdgeDir {
    if graph.is_directed() {
        EdgeDir::Out
    } else {
        EdgeDir::Both
    }
}

fn dfs_visit<V, E, FV, FE>(
    graph: &mut Graph<V, E>,
    vid: VertexId,
    dir: EdgeDir,
    visited_flag: i32,
    visit_vertex: &mut FV,
    visit_edge: &mut FE,
) where
    V: Eq,
    FV: FnMut(&V),
    FE: FnMut(&V, &E, &V),
{
    visit_vertex(graph.vertex_object(vid));
    graph.set_flag_by_id(vid, visited_flag);
    let mut remaining = graph.degree_by_id(vid, dir);
    while remaining > 0 {
        remaining -= 1;
        let Ok(eid) = graph.neighbour_step(vid, dir, IterDir::Next) else {
            break;
        };
        let nb = graph.neighbour_of(eid, vid);
        if graph.flag_by_id(nb) == visited_flag {
            continue;
        }
        visit_edge(
            graph.vertex_object(vid),
            graph.edge_object(eid),
            graph.vertex_object(nb),
        );
        dfs_visit(graph, nb, dir, visited_flag, visit_vertex, visit_edge);
    }
}

fn enqueue_unvisited<V: Eq, E>(
    graph: &mut Graph<V, E>,
    frontier: &mut Queue<BfsRecord>,
    vid: VertexId,
    dir: EdgeDir,
    visited_flag: i32,
) {
    let mut remaining = graph.degree_by_id(vid, dir);
    while remaining > 0 {
        remaining -= 1;
        let Ok(eid) = graph.neighbour_step(vid, dir, IterDir::Next) else {
            break;
        };
        let child = graph.neighbour_of(eid, vid);
        if graph.flag_by_id(child) == visited_flag {
            continue;
        }
        graph.set_flag_by_id(child, visited_flag);
        frontier.enqueue(BfsRecord {
            parent: vid,
            edge: eid,
            child,
        });
    }
}
