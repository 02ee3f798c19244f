use std::fmt::Display;

use tracing::trace;

use crate::tree_node::TreeNode;
use crate::types::default_comparator;
use crate::util::{self, last_common, Slot};

fn element_of<V>(n: &TreeNode<V>) -> &V {
    &n.element
}

/// Unbalanced binary search tree over a node arena.
///
/// Elements are ordered by a three-way comparator and kept unique: an
/// element comparing equal to a stored one is rejected. No rebalancing is
/// done, so sorted input degenerates into a chain.
///
/// Nodes live in a `Vec` arena and link to each other by index. Removal
/// moves the last arena node into the freed slot, so the arena never holds
/// dead nodes and its length is the element count.
pub struct OrderedTree<V, C = fn(&V, &V) -> i32>
where
    C: Fn(&V, &V) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<TreeNode<V>>,
}

impl<V> OrderedTree<V, fn(&V, &V) -> i32>
where
    V: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<V>)
    }
}

impl<V> Default for OrderedTree<V, fn(&V, &V) -> i32>
where
    V: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> OrderedTree<V, C>
where
    C: Fn(&V, &V) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    /// Arena index of the root node.
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn clear(&mut self) {
        trace!(size = self.arena.len(), "clearing ordered tree");
        self.root = None;
        self.arena.clear();
    }

    fn find(&self, element: &V) -> Option<u32> {
        util::find(
            &self.arena,
            self.root,
            element,
            |n| &n.element,
            |a, b| (self.comparator)(a, b),
        )
    }

    /// Inserts `element` unless an equal element is already stored.
    ///
    /// Returns `true` when the tree changed.
    pub fn add(&mut self, element: V) -> bool {
        let slot = util::locate(
            &self.arena,
            self.root,
            &element,
            |n| &n.element,
            |a, b| (self.comparator)(a, b),
        );
        if let Slot::Occupied(_) = slot {
            return false;
        }
        self.arena.push(TreeNode::new(element));
        let node = (self.arena.len() - 1) as u32;
        self.root = util::attach(&mut self.arena, self.root, node, slot);
        true
    }

    pub fn contains(&self, element: &V) -> bool {
        self.find(element).is_some()
    }

    /// Stored element comparing equal to `element`.
    pub fn search(&self, element: &V) -> Option<&V> {
        self.find(element).map(|i| &self.arena[i as usize].element)
    }

    /// Removes the element comparing equal to `element`.
    ///
    /// Returns `false` when no such element is stored.
    pub fn remove(&mut self, element: &V) -> bool {
        self.take(element).is_some()
    }

    /// Removes and returns the element comparing equal to `element`.
    pub fn take(&mut self, element: &V) -> Option<V> {
        let node = self.find(element)?;
        self.root = util::remove(&mut self.arena, self.root, node);
        let moved = (self.arena.len() - 1) as u32;
        let removed = self.arena.swap_remove(node as usize);
        self.root = util::relocate(&mut self.arena, self.root, moved, node);
        trace!(slot = node, moved, size = self.arena.len(), "removed tree node");
        Some(removed.element)
    }

    pub fn minimum(&self) -> Option<&V> {
        util::first(&self.arena, self.root).map(|i| &self.arena[i as usize].element)
    }

    pub fn maximum(&self) -> Option<&V> {
        util::last(&self.arena, self.root).map(|i| &self.arena[i as usize].element)
    }

    /// `-1` for an empty tree, `0` for a single node.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    /// Depth-first search for `element` below the node `root`.
    ///
    /// Appends the elements from `root` down to the match onto `path` and
    /// returns `true`, or leaves `path` as it was and returns `false`.
    pub fn find_path<'a>(
        &'a self,
        root: Option<u32>,
        path: &mut Vec<&'a V>,
        element: &V,
    ) -> bool {
        let mut nodes = Vec::new();
        let found = self.find_node_path(root, &mut nodes, element);
        if found {
            path.extend(nodes.iter().map(|&i| &self.arena[i as usize].element));
        }
        found
    }

    fn find_node_path(&self, root: Option<u32>, nodes: &mut Vec<u32>, element: &V) -> bool {
        if root.is_some_and(|r| r as usize >= self.arena.len()) {
            return false;
        }
        util::find_path(
            &self.arena,
            root,
            nodes,
            element,
            &element_of::<V>,
            &self.comparator,
        )
    }

    /// Deepest element shared by the root paths of `e1` and `e2`.
    ///
    /// `None` when the tree is empty or either element is missing.
    pub fn find_lca(&self, e1: &V, e2: &V) -> Option<&V> {
        if self.is_empty() {
            return None;
        }
        let mut path1 = Vec::new();
        let mut path2 = Vec::new();
        if !self.find_node_path(self.root, &mut path1, e1)
            || !self.find_node_path(self.root, &mut path2, e2)
        {
            return None;
        }
        last_common(&path1, &path2).map(|i| &self.arena[i as usize].element)
    }

    /// Elements in ascending comparator order.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        std::iter::successors(util::first(&self.arena, self.root), move |&i| {
            util::next(&self.arena, i)
        })
        .map(move |i| &self.arena[i as usize].element)
    }

    pub fn for_each<G: FnMut(&V)>(&self, mut f: G) {
        for element in self.iter() {
            f(element);
        }
    }

    fn to_string_node(&self, node: u32, tab: &str, side: &str) -> String
    where
        V: Display,
    {
        let n = &self.arena[node as usize];
        let mut s = format!("\n{tab}{side} {}", n.element);
        if let Some(l) = n.l {
            s.push_str(&self.to_string_node(l, &format!("{tab}  "), "←"));
        }
        if let Some(r) = n.r {
            s.push_str(&self.to_string_node(r, &format!("{tab}  "), "→"));
        }
        s
    }

    /// Renders the tree shape, one node per line.
    pub fn to_string(&self, tab: &str) -> String
    where
        V: Display,
    {
        match self.root {
            Some(root) => format!("OrderedTree{}", self.to_string_node(root, tab, "└─")),
            None => "OrderedTree ∅".to_string(),
        }
    }

    /// Checks parent links, strict ordering and the element count.
    pub fn assert_valid(&self) -> Result<(), String> {
        if let Some(root) = self.root {
            if self.arena[root as usize].p.is_some() {
                return Err(format!("root {root} has a parent"));
            }
        }
        let reachable = util::size(&self.arena, self.root);
        if reachable != self.arena.len() {
            return Err(format!(
                "{reachable} reachable nodes, {} stored",
                self.arena.len()
            ));
        }
        for (i, n) in self.arena.iter().enumerate() {
            let i = i as u32;
            for child in [n.l, n.r].into_iter().flatten() {
                if self.arena[child as usize].p != Some(i) {
                    return Err(format!("node {child} does not point back to parent {i}"));
                }
            }
        }
        let mut prev: Option<&V> = None;
        for element in self.iter() {
            if let Some(p) = prev {
                if (self.comparator)(p, element) >= 0 {
                    return Err("in-order traversal is not strictly increasing".to_string());
                }
            }
            prev = Some(element);
        }
        Ok(())
    }
}
