//! Depth-first and breadth-first visitation orders.

use std::collections::{HashSet, VecDeque};

use crate::graph::Neighbors;

/// Returns the vertices reachable from `start` in depth-first order.
///
/// Neighbors are pushed in descending order so the smallest one is
/// explored first. The traversal stops right after `end` is visited, so
/// `end` is the last element when it is reachable. An unknown `start`
/// yields an empty list; an unknown `end` is ignored.
pub fn dfs<G: Neighbors>(
    graph: &G,
    start: &G::Vertex,
    end: Option<&G::Vertex>,
) -> Vec<G::Vertex> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }
    let end = end.filter(|v| graph.contains_vertex(v));

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start.clone()];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        order.push(vertex.clone());
        if end == Some(&vertex) {
            break;
        }

        for next in graph.neighbors(&vertex).into_iter().rev() {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }

    order
}

/// Returns the vertices reachable from `start` in breadth-first order.
///
/// Neighbors are enqueued in ascending order. The traversal stops right
/// after `end` is dequeued and visited, before its neighbors are enqueued.
/// An unknown `start` yields an empty list; an unknown `end` is ignored.
pub fn bfs<G: Neighbors>(
    graph: &G,
    start: &G::Vertex,
    end: Option<&G::Vertex>,
) -> Vec<G::Vertex> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }
    let end = end.filter(|v| graph.contains_vertex(v));

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(vertex) = queue.pop_front() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        order.push(vertex.clone());
        if end == Some(&vertex) {
            break;
        }

        queue.extend(
            graph
                .neighbors(&vertex)
                .into_iter()
                .filter(|next| !visited.contains(next)),
        );
    }

    order
}
