use std::fmt;

use crate::types::Linked;

/// Graph vertex: one link of the creation-order chain plus the ids of its
/// incoming (`uplinks`) and outgoing (`downlinks`) edges.
#[derive(Clone, Debug)]
pub struct Vertex<T = ()> {
    id: u32,
    next: Option<u32>,
    previous: Option<u32>,
    uplinks: Vec<u32>,
    downlinks: Vec<u32>,
    pub content: Option<T>,
}

impl<T> Vertex<T> {
    /// Unchained vertex without edges.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            next: None,
            previous: None,
            uplinks: Vec::new(),
            downlinks: Vec::new(),
            content: None,
        }
    }

    pub fn with_content(id: u32, content: T) -> Self {
        Self {
            content: Some(content),
            ..Self::new(id)
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Ids of edges ending at this vertex, in creation order.
    pub fn uplinks(&self) -> &[u32] {
        &self.uplinks
    }

    /// Ids of edges starting at this vertex, in creation order.
    pub fn downlinks(&self) -> &[u32] {
        &self.downlinks
    }

    pub(crate) fn push_uplink(&mut self, edge: u32) {
        self.uplinks.push(edge);
    }

    pub(crate) fn push_downlink(&mut self, edge: u32) {
        self.downlinks.push(edge);
    }
}

impl<T> Linked for Vertex<T> {
    fn next(&self) -> Option<u32> {
        self.next
    }

    fn previous(&self) -> Option<u32> {
        self.previous
    }

    fn set_next(&mut self, v: Option<u32>) {
        self.next = v;
    }

    fn set_previous(&mut self, v: Option<u32>) {
        self.previous = v;
    }
}

impl<T> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex [{}]", self.id)
    }
}
