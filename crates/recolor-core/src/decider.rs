//! Reads the satisfying assignment off the component labels.

use crate::literal_store::{LiteralId, LiteralStore};
use crate::solver::SolveResult;
use recolor_base::Assignment;

/// Picks the true literal of a vertex, or `None` if both literals share a
/// component.
///
/// Components are numbered in topological order of the condensation, so the
/// literal with the larger id is never forced false by its opposite.
///
/// # Panics
///
/// Panics if components have not been labeled.
pub fn choose(store: &LiteralStore, vertex: usize) -> Option<LiteralId> {
    let [first, second] = store.pair(vertex);
    let a = component_of(store, first);
    let b = component_of(store, second);
    match a.cmp(&b) {
        std::cmp::Ordering::Equal => None,
        std::cmp::Ordering::Greater => Some(first),
        std::cmp::Ordering::Less => Some(second),
    }
}

/// Decides every vertex in first-seen order.
pub fn decide(store: &LiteralStore) -> SolveResult {
    let mut entries = Vec::with_capacity(store.vertex_count());

    for (index, vertex) in store.vertices().iter().enumerate() {
        let Some(chosen) = choose(store, index) else {
            tracing::warn!(vertex = %vertex.id, "Both literals share a component");
            return SolveResult::Unsat;
        };
        let color = store.literal(chosen).target;
        tracing::trace!(vertex = %vertex.id, from = %vertex.original, to = %color, "Vertex decided");
        entries.push((vertex.id.clone(), color));
    }

    SolveResult::Sat(Assignment::new(entries))
}

fn component_of(store: &LiteralStore, id: LiteralId) -> u32 {
    store
        .literal(id)
        .component
        .unwrap_or_else(|| panic!("literal {} has no component", id.index()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::label_components;
    use crate::finish_order::assign_finish_order;
    use recolor_base::Color;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn labeled(store: &mut LiteralStore) {
        let order = assign_finish_order(store);
        label_components(store, &order);
    }

    #[test]
    fn test_forced_literal_is_chosen() {
        let mut store = LiteralStore::new();
        store.intern(&"1".into(), Color::Red);
        let [green, blue] = store.pair(0);
        // green → blue forces blue
        store.add_implication(green, blue);
        labeled(&mut store);

        assert_eq!(choose(&store, 0), Some(blue));
        match decide(&store) {
            SolveResult::Sat(assignment) => {
                assert_eq!(assignment.get("1"), Some(Color::Blue));
            }
            other => panic!("Expected SAT, got {:?}", other),
        }
    }

    #[test]
    fn test_contradiction_is_unsat() {
        let mut store = LiteralStore::new();
        store.intern(&"1".into(), Color::Green);
        let [red, blue] = store.pair(0);
        store.add_implication(red, blue);
        store.add_implication(blue, red);
        labeled(&mut store);

        assert_eq!(choose(&store, 0), None);
        assert!(matches!(decide(&store), SolveResult::Unsat));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_contradiction_is_logged_as_warning() {
        let mut store = LiteralStore::new();
        store.intern(&"7".into(), Color::Red);
        let [green, blue] = store.pair(0);
        store.add_implication(green, blue);
        store.add_implication(blue, green);
        labeled(&mut store);

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || decide(&store));

        assert_eq!(result, SolveResult::Unsat);
        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"), "{text}");
        assert!(text.contains("Both literals share a component"), "{text}");
    }

    #[test]
    fn test_free_vertex_gets_one_literal() {
        let mut store = LiteralStore::new();
        store.intern(&"x".into(), Color::Blue);
        labeled(&mut store);
        let chosen = choose(&store, 0).unwrap();
        assert_ne!(store.literal(chosen).target, Color::Blue);
    }
}
