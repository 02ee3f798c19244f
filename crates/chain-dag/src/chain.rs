//! Splice helpers for a doubly-linked chain stored in an arena.
//!
//! `join` and `unjoin` are raw primitives: they touch only the links they
//! are given and never repair neighbours. `remove`, `insert_after` and
//! `insert_before` keep the rest of the chain consistent.
//!
//! These helpers work on standalone vertex arenas. A `Graph` keeps its
//! vertices private and only ever appends to its chain through them.

use crate::types::Linked;

#[inline]
fn get_next<N: Linked>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].next()
}

#[inline]
fn get_previous<N: Linked>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].previous()
}

#[inline]
fn set_next<N: Linked>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_next(v);
}

#[inline]
fn set_previous<N: Linked>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_previous(v);
}

/// Makes `b` follow `a`: sets `a.next = b` when `a` is given and
/// `b.previous = a` when `b` is given.
pub fn join<N: Linked>(arena: &mut [N], a: Option<u32>, b: Option<u32>) {
    if let Some(a) = a {
        set_next(arena, a, b);
    }
    if let Some(b) = b {
        set_previous(arena, b, a);
    }
}

/// Clears both links of `v`. Neighbours still point at `v`.
pub fn unjoin<N: Linked>(arena: &mut [N], v: u32) {
    set_next(arena, v, None);
    set_previous(arena, v, None);
}

/// Takes `v` out of its chain, joining its neighbours. Returns `v`.
pub fn remove<N: Linked>(arena: &mut [N], v: u32) -> u32 {
    let previous = get_previous(arena, v);
    let next = get_next(arena, v);
    if let Some(p) = previous {
        set_next(arena, p, next);
    }
    if let Some(n) = next {
        set_previous(arena, n, previous);
    }
    unjoin(arena, v);
    v
}

fn is_linked<N: Linked>(arena: &[N], v: u32) -> bool {
    get_next(arena, v).is_some() || get_previous(arena, v).is_some()
}

/// Splices `v` in directly after `this` and returns `v` (the inserted
/// vertex, not `this`), so `insert_after(arena, insert_after(arena, a, b), c)`
/// builds `a b c`.
///
/// A `v` that is linked elsewhere is moved. `v == this` is a no-op.
pub fn insert_after<N: Linked>(arena: &mut [N], this: u32, v: u32) -> u32 {
    if v == this {
        return v;
    }
    if is_linked(arena, v) {
        remove(arena, v);
    }
    let next = get_next(arena, this);
    join(arena, Some(v), next);
    join(arena, Some(this), Some(v));
    v
}

/// Splices `v` in directly before `this` and returns `v`.
///
/// A `v` that is linked elsewhere is moved. `v == this` is a no-op.
pub fn insert_before<N: Linked>(arena: &mut [N], this: u32, v: u32) -> u32 {
    if v == this {
        return v;
    }
    if is_linked(arena, v) {
        remove(arena, v);
    }
    let previous = get_previous(arena, this);
    join(arena, previous, Some(v));
    join(arena, Some(v), Some(this));
    v
}

/// Head of the chain containing `v`.
pub fn first<N: Linked>(arena: &[N], mut v: u32) -> u32 {
    while let Some(p) = get_previous(arena, v) {
        v = p;
    }
    v
}

/// Tail of the chain containing `v`.
pub fn last<N: Linked>(arena: &[N], mut v: u32) -> u32 {
    while let Some(n) = get_next(arena, v) {
        v = n;
    }
    v
}

/// Everything before `v`, nearest first.
pub fn before<N: Linked>(arena: &[N], v: u32) -> Vec<u32> {
    std::iter::successors(get_previous(arena, v), |&p| get_previous(arena, p)).collect()
}

/// Everything after `v`, nearest first.
pub fn after<N: Linked>(arena: &[N], v: u32) -> Vec<u32> {
    std::iter::successors(get_next(arena, v), |&n| get_next(arena, n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;

    fn setup() -> Vec<Vertex> {
        (0..5).map(Vertex::new).collect()
    }

    fn chained() -> Vec<Vertex> {
        let mut v = setup();
        let mut tail = 0;
        for i in 1..5 {
            tail = insert_after(&mut v, tail, i);
        }
        v
    }

    #[test]
    fn join_sets_one_side_each() {
        let mut v = setup();
        join(&mut v, Some(0), Some(1));
        assert_eq!(v[0].next(), Some(1));
        assert_eq!(v[1].previous(), Some(0));

        join(&mut v, None, Some(0));
        assert_eq!(v[0].previous(), None);
        join(&mut v, Some(1), None);
        assert_eq!(v[1].next(), None);
    }

    #[test]
    fn unjoin_leaves_neighbours() {
        let mut v = setup();
        join(&mut v, Some(0), Some(1));
        join(&mut v, Some(1), Some(2));
        unjoin(&mut v, 1);
        assert_eq!(v[0].next(), Some(1));
        assert_eq!(v[1].previous(), None);
        assert_eq!(v[1].next(), None);
        assert_eq!(v[2].previous(), Some(1));
    }

    #[test]
    fn fluent_insert_after_builds_chain() {
        let v = chained();
        assert_eq!(first(&v, 3), 0);
        assert_eq!(last(&v, 1), 4);
        assert_eq!(before(&v, 3), vec![2, 1, 0]);
        assert_eq!(after(&v, 1), vec![2, 3, 4]);
        assert!(before(&v, 0).is_empty());
        assert!(after(&v, 4).is_empty());
    }

    #[test]
    fn remove_stitches_neighbours() {
        let mut v = chained();
        assert_eq!(remove(&mut v, 2), 2);
        assert_eq!(v[1].next(), Some(3));
        assert_eq!(v[3].previous(), Some(1));
        assert_eq!(v[2].next(), None);
        assert_eq!(v[2].previous(), None);
        assert_eq!(after(&v, 0), vec![1, 3, 4]);

        remove(&mut v, 0);
        assert_eq!(first(&v, 4), 1);
        remove(&mut v, 4);
        assert_eq!(last(&v, 1), 3);
    }

    #[test]
    fn insert_after_then_remove_round_trips() {
        let mut v = chained();
        remove(&mut v, 2);
        let before_next = v[1].next();
        assert_eq!(insert_after(&mut v, 1, 2), 2);
        assert_eq!(v[1].next(), Some(2));
        remove(&mut v, 2);
        assert_eq!(v[1].next(), before_next);
    }

    #[test]
    fn insert_before_splices_in_front() {
        let mut v = setup();
        assert_eq!(insert_before(&mut v, 0, 1), 1);
        assert_eq!(insert_before(&mut v, 0, 2), 2);
        assert_eq!(after(&v, 1), vec![2, 0]);
        assert_eq!(first(&v, 0), 1);
    }

    #[test]
    fn insert_moves_linked_vertex() {
        let mut v = chained();
        insert_after(&mut v, 4, 1);
        assert_eq!(after(&v, 0), vec![2, 3, 4, 1]);
        insert_before(&mut v, 0, 4);
        assert_eq!(after(&v, 4), vec![0, 2, 3, 1]);
        assert_eq!(insert_after(&mut v, 3, 3), 3);
        assert_eq!(after(&v, 4), vec![0, 2, 3, 1]);
    }
}
