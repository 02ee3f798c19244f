#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {top} is already connected to vertex {bottom}")]
    AlreadyConnected { top: u32, bottom: u32 },
    #[error("Unable to create edge.  Circular connection detected! ({top} -> {bottom})")]
    CircularConnection { top: u32, bottom: u32 },
    #[error("unknown vertex {0}")]
    UnknownVertex(u32),
}
