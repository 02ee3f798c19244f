use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::chain;
use crate::edge::{Edge, ProtoEdge};
use crate::error::GraphError;
use crate::types::Linked;
use crate::vertex::Vertex;

/// Directed acyclic graph over a creation-order vertex chain.
///
/// `vertices[i].id() == i` and `edges[i].id() == i`. Every vertex created
/// through [`Graph::add_vertex`] is appended to the tail of one chain, and
/// ancestor queries read that chain order, not edge reachability.
#[derive(Clone, Debug)]
pub struct Graph<T = (), E = ()> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge<E>>,
}

impl<T, E> Default for Graph<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Graph<T, E> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Vertices ordered by id.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Edges ordered by id.
    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    pub fn vertex(&self, id: u32) -> Option<&Vertex<T>> {
        self.vertices.get(id as usize)
    }

    pub fn vertex_mut(&mut self, id: u32) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(id as usize)
    }

    pub fn edge(&self, id: u32) -> Option<&Edge<E>> {
        self.edges.get(id as usize)
    }

    fn check(&self, id: u32) -> Result<(), GraphError> {
        if (id as usize) < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(id))
        }
    }

    fn contains(&self, id: u32) -> bool {
        (id as usize) < self.vertices.len()
    }

    /// Head of the vertex chain.
    pub fn chain_first(&self) -> Option<u32> {
        if self.vertices.is_empty() {
            return None;
        }
        Some(chain::first(&self.vertices, 0))
    }

    /// Tail of the vertex chain.
    pub fn chain_last(&self) -> Option<u32> {
        if self.vertices.is_empty() {
            return None;
        }
        Some(chain::last(&self.vertices, 0))
    }

    /// Vertices chained before `v`, nearest first.
    pub fn before(&self, v: u32) -> Vec<u32> {
        if !self.contains(v) {
            return Vec::new();
        }
        chain::before(&self.vertices, v)
    }

    /// Vertices chained after `v`, nearest first.
    pub fn after(&self, v: u32) -> Vec<u32> {
        if !self.contains(v) {
            return Vec::new();
        }
        chain::after(&self.vertices, v)
    }

    /// Creates a vertex at the tail of the chain with an edge from each of
    /// `uplinks` to it. Returns the new vertex id.
    ///
    /// Unknown or repeated uplinks are rejected before anything is created.
    pub fn add_vertex(&mut self, uplinks: &[u32]) -> Result<u32, GraphError> {
        self.push_vertex(None, uplinks)
    }

    pub fn add_vertex_with(&mut self, content: T, uplinks: &[u32]) -> Result<u32, GraphError> {
        self.push_vertex(Some(content), uplinks)
    }

    fn push_vertex(&mut self, content: Option<T>, uplinks: &[u32]) -> Result<u32, GraphError> {
        let id = self.vertices.len() as u32;
        for (i, &u) in uplinks.iter().enumerate() {
            self.check(u)?;
            if uplinks[..i].contains(&u) {
                return Err(GraphError::AlreadyConnected { top: u, bottom: id });
            }
        }
        let tail = self.chain_last();
        self.vertices.push(match content {
            Some(content) => Vertex::with_content(id, content),
            None => Vertex::new(id),
        });
        if let Some(tail) = tail {
            chain::insert_after(&mut self.vertices, tail, id);
        }
        for &u in uplinks {
            self.connect(u, id, None)?;
        }
        debug!(vertex = id, uplinks = uplinks.len(), "added vertex");
        Ok(id)
    }

    /// Creates an edge `top -> bottom` after checking that it is among
    /// [`Graph::available_connections`] of `top`.
    pub fn add_edge(&mut self, top: u32, bottom: u32) -> Result<u32, GraphError> {
        self.add_checked_edge(top, bottom, None)
    }

    pub fn add_edge_with(&mut self, top: u32, bottom: u32, content: E) -> Result<u32, GraphError> {
        self.add_checked_edge(top, bottom, Some(content))
    }

    fn add_checked_edge(
        &mut self,
        top: u32,
        bottom: u32,
        content: Option<E>,
    ) -> Result<u32, GraphError> {
        self.check(top)?;
        self.check(bottom)?;
        let proto = ProtoEdge { top, bottom };
        if !self.available_connections(top).contains(&proto) {
            debug!(top, bottom, "rejected circular edge");
            return Err(GraphError::CircularConnection { top, bottom });
        }
        self.connect(top, bottom, content)
    }

    /// Creates an edge `top -> bottom` without a cycle check.
    ///
    /// Fails only when `top` already has an edge to `bottom`.
    pub fn connect_to(&mut self, top: u32, bottom: u32) -> Result<u32, GraphError> {
        self.connect(top, bottom, None)
    }

    fn connect(&mut self, top: u32, bottom: u32, content: Option<E>) -> Result<u32, GraphError> {
        self.check(top)?;
        self.check(bottom)?;
        if self.directly_below(top).contains(&bottom) {
            return Err(GraphError::AlreadyConnected { top, bottom });
        }
        let id = self.edges.len() as u32;
        self.edges.push(Edge::new(id, top, bottom, content));
        self.vertices[top as usize].push_downlink(id);
        self.vertices[bottom as usize].push_uplink(id);
        debug!(edge = id, top, bottom, "connected vertices");
        Ok(id)
    }

    /// Drops every vertex and edge. Ids restart from 0.
    pub fn clear(&mut self) {
        debug!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            "clearing graph"
        );
        self.vertices.clear();
        self.edges.clear();
    }

    /// Targets of the edges leaving `v`, in edge creation order.
    pub fn directly_below(&self, v: u32) -> Vec<u32> {
        self.vertex(v)
            .map(|vertex| {
                vertex
                    .downlinks()
                    .iter()
                    .map(|&e| self.edges[e as usize].bottom())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sources of the edges entering `v`, in edge creation order.
    pub fn uplink_vertices(&self, v: u32) -> Vec<u32> {
        self.vertex(v)
            .map(|vertex| {
                vertex
                    .uplinks()
                    .iter()
                    .map(|&e| self.edges[e as usize].top())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every vertex reachable from `v` along edges, nearest first, each
    /// listed once.
    pub fn below(&self, v: u32) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut queue: VecDeque<u32> = self.directly_below(v).into();
        while let Some(c) = queue.pop_front() {
            if seen.insert(c) {
                out.push(c);
                queue.extend(self.directly_below(c));
            }
        }
        out
    }

    /// Whether `other` is reachable from `v` along edges.
    pub fn is_below(&self, v: u32, other: u32) -> bool {
        let mut seen = HashSet::new();
        let mut stack = self.directly_below(v);
        while let Some(c) = stack.pop() {
            if c == other {
                return true;
            }
            if seen.insert(c) {
                stack.extend(self.directly_below(c));
            }
        }
        false
    }

    /// Edges `v -> p` that could be added without duplicating an edge or
    /// closing a cycle, for every `p` in `v`'s chain, in chain order.
    pub fn available_connections(&self, v: u32) -> Vec<ProtoEdge> {
        if !self.contains(v) {
            return Vec::new();
        }
        let direct = self.directly_below(v);
        let mut out = Vec::new();
        let mut pointer = Some(chain::first(&self.vertices, v));
        while let Some(p) = pointer {
            if p != v && !direct.contains(&p) && !self.is_below(p, v) {
                out.push(ProtoEdge { top: v, bottom: p });
            }
            pointer = self.vertices[p as usize].next();
        }
        out
    }

    /// Vertices chained before both `v0` and `v1`, in `v0`'s nearest-first
    /// order.
    pub fn common_ancestors(&self, v0: u32, v1: u32) -> Vec<u32> {
        let theirs: HashSet<u32> = self.before(v1).into_iter().collect();
        self.before(v0)
            .into_iter()
            .filter(|a| theirs.contains(a))
            .collect()
    }

    /// Nearest common chain predecessor of `v0` and `v1`.
    pub fn lowest_common_ancestor(&self, v0: u32, v1: u32) -> Option<u32> {
        self.common_ancestors(v0, v1).into_iter().next()
    }
}
