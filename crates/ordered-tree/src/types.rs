//! Node trait and the default comparator.
//!
//! Tree nodes are not linked by pointers. Each link is an `Option<u32>`
//! index into a [`Vec`]-backed arena owned by the tree, and every helper in
//! [`crate::util`] takes the arena plus node indices.

/// Parent / left / right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Three-way comparator over `PartialOrd` values: `0` when equal, `-1`
/// when less, `1` otherwise.
pub fn default_comparator<V: PartialOrd>(a: &V, b: &V) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
