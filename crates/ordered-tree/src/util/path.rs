use crate::types::Node;

use super::{get_l, get_r};

/// Height of the subtree under `root`: `-1` when empty, `0` for a leaf.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> i32 {
    let mut max = -1;
    let mut stack: Vec<(u32, i32)> = root.map(|r| (r, 0)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        for child in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            stack.push((child, depth + 1));
        }
    }
    max
}

/// Depth-first search for `key` below `root`.
///
/// Every visited node is pushed onto `path` before its children are
/// searched and popped again when neither child leads to `key`, so on
/// success `path` holds the node indices from `root` down to the match.
/// The search does not use the ordering to prune; it visits the left
/// subtree before the right one.
pub fn find_path<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    path: &mut Vec<u32>,
    key: &K,
    key_of: &F,
    comparator: &C,
) -> bool
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    // One frame per node on `path` pushed here: (node, right side tried).
    let mut frames: Vec<(u32, bool)> = Vec::new();
    let mut next = root;
    loop {
        if let Some(node) = next.take() {
            path.push(node);
            if comparator(key_of(&arena[node as usize]), key) == 0 {
                return true;
            }
            frames.push((node, false));
            next = get_l(arena, node);
            continue;
        }
        let Some(frame) = frames.last_mut() else {
            return false;
        };
        if frame.1 {
            frames.pop();
            path.pop();
        } else {
            frame.1 = true;
            next = get_r(arena, frame.0);
        }
    }
}

/// Last entry on which two root-first paths agree.
pub fn last_common<T: PartialEq + Copy>(a: &[T], b: &[T]) -> Option<T> {
    let agreed = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    agreed.checked_sub(1).map(|i| a[i])
}
