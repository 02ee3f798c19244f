//! Arena-backed binary search tree with ancestor-path queries.
//!
//! Nodes are stored in a `Vec` owned by the tree and linked by
//! `Option<u32>` indices instead of pointers, so parent back-links never
//! form ownership cycles.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait, [`default_comparator`] |
//! | [`tree_node`] | [`TreeNode`] arena node |
//! | [`util`] | index-level `find`, `locate`/`attach`, `remove`, `find_path`, `height` |
//! | [`tree`] | [`OrderedTree`] |
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for x in [8, 3, 10, 1, 6, 4, 7, 14, 13, 9, 0] {
//!     tree.add(x);
//! }
//! assert_eq!(tree.find_lca(&0, &4), Some(&3));
//! assert_eq!(tree.height(), 3);
//! ```

pub mod tree;
pub mod tree_node;
pub mod types;
pub mod util;

pub use tree::OrderedTree;
pub use tree_node::TreeNode;
pub use types::{default_comparator, Node};
