// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Graph text serialization.
//!
//! Format, version 5:
//!
//! ```text
//! VERSION 5
//! IS_DIRECTED <0|1>
//! <vertex_count> <vertex> <flag> ... <vertex> <flag>
//! <out_degree> [<neighbour_index> <edge>]*
//! ...
//! ```
//!
//! Fields are separated by whitespace; the vertex block and each edge line
//! end with a newline. Vertices are referenced by zero-based index in
//! emission order. Vertex and edge objects are rendered by caller-supplied
//! serializers, which must not emit whitespace inside a value (the reader
//! treats whitespace as a field separator).
//!
//! The writer walks the vertex cycle once per block; because both blocks
//! start from the same cursor position and take `vertex_count` steps, they
//! enumerate the vertices in the same order. An undirected edge lives in
//! exactly one out-set (its canonical source's), so it is emitted exactly
//! once.

use std::io::{self, BufRead, Read, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::map::Map;

use super::{EdgeDir, Graph, GraphError, IterDir, VertexId};

/// Version emitted by [`write`]; [`read`] rejects any other.
pub const FORMAT_VERSION: u32 = 5;

#[derive(Debug, Error)]
pub enum GraphIoError {
    #[error("i/o failure")]
    Io(#[from] io::Error),
    #[error("unsupported file format version {found}")]
    DeprecatedFileFormat { found: u32 },
    #[error("malformed graph file")]
    CorruptedFileFormat,
    #[error("file contains the same vertex twice")]
    SameCreation,
    #[error("user deserializer rejected a value")]
    CreationFailure,
}

/// Serializes `graph` into `out`.
pub fn write<W, V, E, FV, FE>(
    graph: &mut Graph<V, E>,
    out: &mut W,
    mut write_vertex: FV,
    mut write_edge: FE,
) -> Result<(), GraphIoError>
where
    W: Write,
    V: Eq,
    FV: FnMut(&mut W, &V) -> io::Result<()>,
    FE: FnMut(&mut W, &E) -> io::Result<()>,
{
    writeln!(out, "VERSION {}", FORMAT_VERSION)?;
    writeln!(out, "IS_DIRECTED {}", i32::from(graph.is_directed()))?;
    let count = graph.vertex_count();
    write!(out, "{} ", count)?;
    let mut index_of: Map<VertexId, usize> = Map::new();
    for index in 0..count {
        let Ok(vid) = graph.next_vertex_id(IterDir::Next) else {
            break;
        };
        index_of.put(vid, index);
        write_vertex(out, graph.vertex_object(vid))?;
        write!(out, " {} ", graph.flag_by_id(vid))?;
    }
    writeln!(out)?;
    for _ in 0..count {
        let Ok(vid) = graph.next_vertex_id(IterDir::Next) else {
            break;
        };
        let degree = graph.degree_by_id(vid, EdgeDir::Out);
        write!(out, "{}", degree)?;
        for _ in 0..degree {
            let Ok(eid) = graph.neighbour_step(vid, EdgeDir::Out, IterDir::Next) else {
                break;
            };
            let nb = graph.neighbour_of(eid, vid);
            write!(out, " {} ", index_of.get(&nb).unwrap())?;
            write_edge(out, graph.edge_object(eid))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Deserializes a graph from `input`. `parse_vertex` and `parse_edge`
/// rebuild user objects from single whitespace-delimited tokens.
pub fn read<R, V, E, FV, FE>(
    input: R,
    mut parse_vertex: FV,
    mut parse_edge: FE,
) -> Result<Graph<V, E>, GraphIoError>
where
    R: BufRead,
    V: Eq,
    FV: FnMut(&str) -> Option<V>,
    FE: FnMut(&str) -> Option<E>,
{
    let mut tokens = Tokens { input };
    tokens.expect_literal("VERSION")?;
    let version: u32 = tokens.parse()?;
    if version != FORMAT_VERSION {
        return Err(GraphIoError::DeprecatedFileFormat { found: version });
    }
    tokens.expect_literal("IS_DIRECTED")?;
    let directed = match tokens.parse::<u32>()? {
        0 => false,
        1 => true,
        _ => return Err(GraphIoError::CorruptedFileFormat),
    };
    let count: usize = tokens.parse()?;
    let mut graph = Graph::new(directed);
    // Index-to-vertex table for resolving neighbour references.
    let mut ids: Vec<VertexId> = Vec::with_capacity(count);
    for _ in 0..count {
        let token = tokens.next_token()?;
        let object = parse_vertex(&token).ok_or(GraphIoError::CreationFailure)?;
        let vid = match graph.add_vertex_returning_id(object) {
            Ok(vid) => vid,
            Err(GraphError::ContainsVertex(_)) => return Err(GraphIoError::SameCreation),
            Err(_) => return Err(GraphIoError::CorruptedFileFormat),
        };
        ids.push(vid);
        let flag: i32 = tokens.parse()?;
        graph.set_flag_by_id(vid, flag);
    }
    for source_index in 0..count {
        let degree: usize = tokens.parse()?;
        for _ in 0..degree {
            let neighbour_index: usize = tokens.parse()?;
            let neighbour = *ids
                .get(neighbour_index)
                .ok_or(GraphIoError::CorruptedFileFormat)?;
            let token = tokens.next_token()?;
            let object = parse_edge(&token).ok_or(GraphIoError::CreationFailure)?;
            if graph
                .add_edge_by_ids(ids[source_index], neighbour, object)
                .is_err()
            {
                return Err(GraphIoError::CorruptedFileFormat);
            }
        }
    }
    Ok(graph)
}

struct Tokens<R> {
    input: R,
}

impl<R: BufRead> Tokens<R> {
    fn next_token(&mut self) -> Result<String, GraphIoError> {
        let mut token: Vec<u8> = Vec::new();
        loop {
            let mut byte = [0u8; 1];
            if self.input.read(&mut byte)? == 0 {
                if token.is_empty() {
                    return Err(GraphIoError::CorruptedFileFormat);
                }
                break;
            }
            if byte[0].is_ascii_whitespace() {
                if token.is_empty() {
                    continue;
                }
                break;
            }
            token.push(byte[0]);
        }
        String::from_utf8(token).map_err(|_| GraphIoError::CorruptedFileFormat)
    }

    fn parse<T: FromStr>(&mut self) -> Result<T, GraphIoError> {
        self.next_token()?
            .parse()
            .map_err(|_| GraphIoError::CorruptedFileFormat)
    }

    fn expect_literal(&mut self, literal: &str) -> Result<(), GraphIoError> {
        if self.next_token()? == literal {
            Ok(())
        } else {
            Err(GraphIoError::CorruptedFileFormat)
        }
    }
}
