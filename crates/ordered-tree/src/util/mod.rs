//! Arena helpers for `p` / `l` / `r` linked trees.
//!
//! Key-based helpers (`find`, `locate`) take a `key_of` accessor closure so
//! they work with any arena node layout implementing [`Node`].

pub mod path;
pub mod remove;

use crate::types::Node;

pub use path::{find_path, height, last_common};
pub use remove::{relocate, remove, transplant};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, key_of(&arena[i as usize]));
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Where a key would be attached by [`attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The tree is empty; the node becomes the root.
    Root,
    /// Empty left link of the given parent.
    Left(u32),
    /// Empty right link of the given parent.
    Right(u32),
    /// A node comparing equal to the key already exists.
    Occupied(u32),
}

/// Descends from `root` to the leaf slot for `key`.
pub fn locate<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Slot
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Slot::Root;
    };
    loop {
        let cmp = comparator(key, key_of(&arena[curr as usize]));
        if cmp == 0 {
            return Slot::Occupied(curr);
        }
        let child = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match child {
            Some(c) => curr = c,
            None if cmp < 0 => return Slot::Left(curr),
            None => return Slot::Right(curr),
        }
    }
}

/// Links the detached `node` into `slot`, returning the new root.
///
/// `Slot::Occupied` leaves the tree untouched.
pub fn attach<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    slot: Slot,
) -> Option<u32> {
    match slot {
        Slot::Root => {
            set_p(arena, node, None);
            Some(node)
        }
        Slot::Left(parent) => {
            set_l(arena, parent, Some(node));
            set_p(arena, node, Some(parent));
            root
        }
        Slot::Right(parent) => {
            set_r(arena, parent, Some(node));
            set_p(arena, node, Some(parent));
            root
        }
        Slot::Occupied(_) => root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_node::TreeNode;
    use crate::types::default_comparator;

    fn build(keys: &[i32]) -> (Vec<TreeNode<i32>>, Option<u32>) {
        let mut arena: Vec<TreeNode<i32>> = Vec::new();
        let mut root = None;
        for &k in keys {
            let slot = locate(&arena, root, &k, |n| &n.element, default_comparator);
            if matches!(slot, Slot::Occupied(_)) {
                continue;
            }
            arena.push(TreeNode::new(k));
            let node = (arena.len() - 1) as u32;
            root = attach(&mut arena, root, node, slot);
        }
        (arena, root)
    }

    fn in_order(arena: &[TreeNode<i32>], root: Option<u32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut curr = first(arena, root);
        while let Some(i) = curr {
            out.push(arena[i as usize].element);
            curr = next(arena, i);
        }
        out
    }

    #[test]
    fn locate_and_attach_build_sorted_tree() {
        let (arena, root) = build(&[8, 3, 10, 1, 6, 4, 7, 14, 13, 9]);
        assert_eq!(root, Some(0));
        assert_eq!(in_order(&arena, root), vec![1, 3, 4, 6, 7, 8, 9, 10, 13, 14]);
        assert_eq!(size(&arena, root), 10);
    }

    #[test]
    fn locate_reports_occupied_slot() {
        let (arena, root) = build(&[5, 2, 7]);
        let slot = locate(&arena, root, &7, |n| &n.element, default_comparator);
        assert_eq!(slot, Slot::Occupied(2));
        let slot = locate(&arena, root, &6, |n| &n.element, default_comparator);
        assert_eq!(slot, Slot::Left(2));
        let empty: &[TreeNode<i32>] = &[];
        let slot = locate(empty, None, &6, |n| &n.element, default_comparator);
        assert_eq!(slot, Slot::Root);
    }

    #[test]
    fn find_misses_absent_key() {
        let (arena, root) = build(&[4, 2, 6]);
        assert_eq!(find(&arena, root, &6, |n| &n.element, default_comparator), Some(2));
        assert_eq!(find(&arena, root, &5, |n| &n.element, default_comparator), None);
        assert_eq!(first(&arena, None), None);
    }
}
