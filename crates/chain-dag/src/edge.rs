/// Directed edge from `top` to `bottom`.
///
/// Endpoints are vertex ids in the owning [`crate::Graph`]. Edges are not
/// modified after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<E = ()> {
    id: u32,
    top: u32,
    bottom: u32,
    content: Option<E>,
}

impl<E> Edge<E> {
    pub(crate) fn new(id: u32, top: u32, bottom: u32, content: Option<E>) -> Self {
        Self {
            id,
            top,
            bottom,
            content,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    pub fn content(&self) -> Option<&E> {
        self.content.as_ref()
    }

    pub fn proto(&self) -> ProtoEdge {
        ProtoEdge {
            top: self.top,
            bottom: self.bottom,
        }
    }
}

/// Candidate edge that has not been created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProtoEdge {
    pub top: u32,
    pub bottom: u32,
}
