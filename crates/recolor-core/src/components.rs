//! Second Kosaraju pass: strongly connected component labels.

use crate::literal_store::{LiteralId, LiteralStore};

/// Labels every literal with its strongly connected component.
///
/// Roots are taken in decreasing finish index. Each search follows incoming
/// implications. Component ids start at 0 and follow discovery order, which is
/// a topological order of the condensation: an implication `x → y` between
/// different components always has `component(x) < component(y)`.
///
/// Returns the number of components.
pub fn label_components(store: &mut LiteralStore, finish_order: &[LiteralId]) -> u32 {
    debug_assert_eq!(finish_order.len(), store.literal_count());

    let mut next = 0u32;
    let mut stack = Vec::new();

    for &root in finish_order.iter().rev() {
        if store.literal(root).component.is_some() {
            continue;
        }
        store.literal_mut(root).component = Some(next);
        stack.push(root);

        while let Some(node) = stack.pop() {
            for i in 0..store.literal(node).in_edges.len() {
                let prev = store.literal(node).in_edges[i];
                if store.literal(prev).component.is_none() {
                    store.literal_mut(prev).component = Some(next);
                    stack.push(prev);
                }
            }
        }
        next += 1;
    }

    tracing::trace!(components = next, "Components labeled");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finish_order::assign_finish_order;
    use recolor_base::Color;

    fn store_with(vertices: usize) -> LiteralStore {
        let mut store = LiteralStore::new();
        for v in 0..vertices {
            store.intern(&(v as u64).into(), Color::Blue);
        }
        store
    }

    fn label(store: &mut LiteralStore) -> u32 {
        let order = assign_finish_order(store);
        label_components(store, &order)
    }

    fn component(store: &LiteralStore, id: LiteralId) -> u32 {
        store.literal(id).component.unwrap()
    }

    #[test]
    fn test_no_edges_gives_singletons() {
        let mut store = store_with(2);
        assert_eq!(label(&mut store), 4);
        let mut seen: Vec<_> = store.literal_ids().map(|id| component(&store, id)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_cycle_shares_component() {
        let mut store = store_with(2);
        let [a, b] = store.pair(0);
        let [c, d] = store.pair(1);
        store.add_implication(a, c);
        store.add_implication(c, a);
        store.add_implication(c, d);

        assert_eq!(label(&mut store), 3);
        assert_eq!(component(&store, a), component(&store, c));
        assert_ne!(component(&store, a), component(&store, d));
        assert_ne!(component(&store, b), component(&store, d));
    }

    #[test]
    fn test_ids_follow_topological_order() {
        let mut store = store_with(2);
        let [a, b] = store.pair(0);
        let [c, d] = store.pair(1);
        // b → a → d → c
        store.add_implication(b, a);
        store.add_implication(a, d);
        store.add_implication(d, c);

        assert_eq!(label(&mut store), 4);
        assert!(component(&store, b) < component(&store, a));
        assert!(component(&store, a) < component(&store, d));
        assert!(component(&store, d) < component(&store, c));
    }

    #[test]
    fn test_every_edge_respects_component_order() {
        let mut store = store_with(4);
        let ids: Vec<_> = store.literal_ids().collect();
        let edges = [(0, 3), (3, 5), (5, 0), (5, 6), (6, 7), (7, 6), (1, 2), (2, 4)];
        for (from, to) in edges {
            store.add_implication(ids[from], ids[to]);
        }
        label(&mut store);

        for (from, to) in edges {
            assert!(component(&store, ids[from]) <= component(&store, ids[to]));
        }
        assert_eq!(component(&store, ids[0]), component(&store, ids[5]));
        assert_eq!(component(&store, ids[6]), component(&store, ids[7]));
        assert_ne!(component(&store, ids[5]), component(&store, ids[6]));
    }
}
