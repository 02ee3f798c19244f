//! Chain link trait.
//!
//! Vertices are kept in a `Vec` arena and chained by `Option<u32>` indices.
//! The functions in [`crate::chain`] take the arena and work on indices, so
//! they apply to any node type implementing [`Linked`].

/// `next` / `previous` links of a chain node.
pub trait Linked {
    fn next(&self) -> Option<u32>;
    fn previous(&self) -> Option<u32>;
    fn set_next(&mut self, v: Option<u32>);
    fn set_previous(&mut self, v: Option<u32>);
}
