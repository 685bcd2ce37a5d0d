//! First Kosaraju pass: post-order finish indices.

use crate::literal_store::{LiteralId, LiteralStore};

/// Runs an iterative depth-first search over outgoing implications from every
/// unvisited literal, in creation order, and records finish indices.
///
/// Returns the literals ordered by finish index, so `order[i]` finished `i`-th.
pub fn assign_finish_order(store: &mut LiteralStore) -> Vec<LiteralId> {
    let n = store.literal_count();
    let roots: Vec<LiteralId> = store.literal_ids().collect();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    // (literal, next edge to scan)
    let mut stack: Vec<(LiteralId, usize)> = Vec::new();

    for root in roots {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (node, cursor) = *top;
            let edges = &store.literal(node).out_edges;
            let unvisited = edges[cursor..]
                .iter()
                .position(|next| !visited[next.index()]);

            if let Some(offset) = unvisited {
                let next = edges[cursor + offset];
                top.1 = cursor + offset + 1;
                visited[next.index()] = true;
                stack.push((next, 0));
            } else {
                stack.pop();
                // literal count is at most 2 * MAX_VERTICES = 2^32
                store.literal_mut(node).finish = Some(order.len() as u32);
                order.push(node);
            }
        }
    }

    tracing::trace!(literals = order.len(), "Finish order assigned");
    order
}
