use crate::types::Node;

use super::{first, get_l, get_p, get_r, set_l, set_p, set_r};

/// Puts the subtree `n2` where `n1` hangs, returning the new root.
///
/// `n1` keeps its own links; only its parent and `n2` are rewired.
pub fn transplant<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    n1: u32,
    n2: Option<u32>,
) -> Option<u32> {
    let p = get_p(arena, n1);
    let root = match p {
        None => n2,
        Some(p) => {
            if get_l(arena, p) == Some(n1) {
                set_l(arena, p, n2);
            } else {
                set_r(arena, p, n2);
            }
            root
        }
    };
    if let Some(n2) = n2 {
        set_p(arena, n2, p);
    }
    root
}

/// Unlinks `node` from the tree rooted at `root`, returning the new root.
///
/// A node with two children is replaced by its in-order successor, which
/// adopts both subtrees. Afterwards `node` has no links and nothing links
/// to it.
pub fn remove<N: Node>(arena: &mut [N], mut root: Option<u32>, node: u32) -> Option<u32> {
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    match (l, r) {
        (None, r) => root = transplant(arena, root, node, r),
        (l, None) => root = transplant(arena, root, node, l),
        (Some(l), Some(r)) => {
            // Right subtree is non-empty, so the successor exists.
            let y = first(arena, Some(r)).unwrap_or(r);
            if get_p(arena, y) != Some(node) {
                let yr = get_r(arena, y);
                root = transplant(arena, root, y, yr);
                set_r(arena, y, Some(r));
                set_p(arena, r, Some(y));
            }
            root = transplant(arena, root, node, Some(y));
            set_l(arena, y, Some(l));
            set_p(arena, l, Some(y));
        }
    }
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
    root
}

/// Rewrites every link pointing at `from` to point at `to`, returning the
/// new root.
///
/// Used after the node stored at `from` has been moved to slot `to` (for
/// example by `swap_remove` on the arena). The moved node's own links are
/// read from slot `to`.
pub fn relocate<N: Node>(arena: &mut [N], root: Option<u32>, from: u32, to: u32) -> Option<u32> {
    if from == to {
        return root;
    }
    let p = get_p(arena, to);
    let l = get_l(arena, to);
    let r = get_r(arena, to);
    if let Some(p) = p {
        if get_l(arena, p) == Some(from) {
            set_l(arena, p, Some(to));
        } else if get_r(arena, p) == Some(from) {
            set_r(arena, p, Some(to));
        }
    }
    if let Some(l) = l {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = r {
        set_p(arena, r, Some(to));
    }
    if root == Some(from) {
        Some(to)
    } else {
        root
    }
}
