//! Arena of literals and the implication edges between them.
//!
//! Every vertex owns two consecutive slots. The literal in slot `i` and the
//! literal in slot `i ^ 1` are each other's opposite.

use recolor_base::{Color, VertexId};
use std::collections::HashMap;

/// Index of a literal in the [`LiteralStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LiteralId(u32);

impl LiteralId {
    /// Returns the literal for the same vertex with the other target color.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Returns the index of the owning vertex.
    #[must_use]
    pub const fn vertex(self) -> usize {
        (self.0 >> 1) as usize
    }

    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A vertex as first seen in the input.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: VertexId,
    pub original: Color,
}

/// "Vertex V takes color C."
#[derive(Debug, Clone)]
pub struct Literal {
    /// Color this literal assigns to its vertex.
    pub target: Color,
    /// Implications `self → x`, in insertion order.
    pub out_edges: Vec<LiteralId>,
    /// Implications `x → self`, in insertion order.
    pub in_edges: Vec<LiteralId>,
    /// Post-order index from the finish-order pass.
    pub finish: Option<u32>,
    /// Strongly connected component from the labeling pass.
    pub component: Option<u32>,
}

impl Literal {
    fn new(target: Color) -> Self {
        Self {
            target,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            finish: None,
            component: None,
        }
    }
}

/// Result of [`LiteralStore::intern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interned {
    /// Index of the vertex, new or already known with the same color.
    Vertex(usize),
    /// The vertex is known with a different original color.
    ColorConflict { known: Color },
    /// The store already holds its vertex limit.
    LimitReached { limit: usize },
}

/// Most vertices a store can hold: every literal index must fit in `u32`.
pub const MAX_VERTICES: usize = 1 << 31;

/// Owns every vertex and literal of one solve.
#[derive(Debug)]
pub struct LiteralStore {
    vertices: Vec<Vertex>,
    literals: Vec<Literal>,
    index: HashMap<VertexId, usize>,
    implications: usize,
    vertex_limit: usize,
}

impl Default for LiteralStore {
    fn default() -> Self {
        Self::with_vertex_limit(MAX_VERTICES)
    }
}

impl LiteralStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store accepting at most `limit` vertices, capped at
    /// [`MAX_VERTICES`].
    pub fn with_vertex_limit(limit: usize) -> Self {
        Self {
            vertices: Vec::new(),
            literals: Vec::new(),
            index: HashMap::new(),
            implications: 0,
            vertex_limit: limit.min(MAX_VERTICES),
        }
    }

    /// Returns the vertex index for `id`, creating its literal pair on first
    /// sight.
    pub fn intern(&mut self, id: &VertexId, original: Color) -> Interned {
        if let Some(&vertex) = self.index.get(id) {
            let known = self.vertices[vertex].original;
            return if known == original {
                Interned::Vertex(vertex)
            } else {
                Interned::ColorConflict { known }
            };
        }

        let vertex = self.vertices.len();
        if vertex >= self.vertex_limit {
            return Interned::LimitReached {
                limit: self.vertex_limit,
            };
        }
        let [first, second] = original.others();
        self.literals.push(Literal::new(first));
        self.literals.push(Literal::new(second));
        self.vertices.push(Vertex {
            id: id.clone(),
            original,
        });
        self.index.insert(id.clone(), vertex);
        Interned::Vertex(vertex)
    }

    /// Returns the two literals of a vertex.
    #[must_use]
    pub fn pair(&self, vertex: usize) -> [LiteralId; 2] {
        debug_assert!(vertex < MAX_VERTICES);
        // fits: vertex < 2^31
        let base = (vertex as u32) << 1;
        [LiteralId(base), LiteralId(base | 1)]
    }

    /// Adds the implication `from → to`.
    pub fn add_implication(&mut self, from: LiteralId, to: LiteralId) {
        self.literals[from.index()].out_edges.push(to);
        self.literals[to.index()].in_edges.push(from);
        self.implications += 1;
    }

    /// Forbids choosing both `a` and `b`: adds `a → ¬b` and `b → ¬a`.
    pub fn exclude(&mut self, a: LiteralId, b: LiteralId) {
        self.add_implication(a, b.opposite());
        self.add_implication(b, a.opposite());
    }

    pub fn literal(&self, id: LiteralId) -> &Literal {
        &self.literals[id.index()]
    }

    pub fn literal_mut(&mut self, id: LiteralId) -> &mut Literal {
        &mut self.literals[id.index()]
    }

    pub fn vertex(&self, vertex: usize) -> &Vertex {
        &self.vertices[vertex]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates over literal ids in creation order.
    pub fn literal_ids(&self) -> impl Iterator<Item = LiteralId> {
        (0..self.literals.len() as u32).map(LiteralId)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// Number of implication edges.
    pub fn implication_count(&self) -> usize {
        self.implications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_opposite() {
        let mut store = LiteralStore::new();
        let a = store.intern(&"a".into(), Color::Red);
        let b = store.intern(&"b".into(), Color::Green);
        assert_eq!(a, Interned::Vertex(0));
        assert_eq!(b, Interned::Vertex(1));

        for vertex in 0..2 {
            let [p, n] = store.pair(vertex);
            assert_eq!(p.opposite(), n);
            assert_eq!(n.opposite(), p);
            assert_eq!(p.vertex(), vertex);
            assert_eq!(n.vertex(), vertex);
        }
        assert_eq!(store.literal_count(), 4);
    }

    #[test]
    fn test_targets_skip_original() {
        let mut store = LiteralStore::new();
        store.intern(&"x".into(), Color::Green);
        let [p, n] = store.pair(0);
        assert_eq!(store.literal(p).target, Color::Red);
        assert_eq!(store.literal(n).target, Color::Blue);
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut store = LiteralStore::new();
        store.intern(&"x".into(), Color::Blue);
        assert_eq!(store.intern(&"x".into(), Color::Blue), Interned::Vertex(0));
        assert_eq!(
            store.intern(&"x".into(), Color::Red),
            Interned::ColorConflict { known: Color::Blue }
        );
        assert_eq!(store.vertex_count(), 1);
    }

    #[test]
    fn test_vertex_limit_refuses_new_vertices() {
        let mut store = LiteralStore::with_vertex_limit(2);
        store.intern(&"a".into(), Color::Red);
        store.intern(&"b".into(), Color::Red);
        assert_eq!(
            store.intern(&"c".into(), Color::Red),
            Interned::LimitReached { limit: 2 }
        );
        // known vertices stay reachable
        assert_eq!(store.intern(&"a".into(), Color::Red), Interned::Vertex(0));
        assert_eq!(store.vertex_count(), 2);
        assert_eq!(store.literal_count(), 4);
    }

    #[test]
    fn test_vertex_limit_is_capped() {
        let store = LiteralStore::with_vertex_limit(usize::MAX);
        assert_eq!(store.vertex_limit, MAX_VERTICES);
    }

    #[test]
    fn test_exclude_adds_contrapositive_pair() {
        let mut store = LiteralStore::new();
        store.intern(&"a".into(), Color::Red);
        store.intern(&"b".into(), Color::Red);
        let [a, _] = store.pair(0);
        let [b, _] = store.pair(1);
        store.exclude(a, b);

        assert_eq!(store.literal(a).out_edges, vec![b.opposite()]);
        assert_eq!(store.literal(b).out_edges, vec![a.opposite()]);
        assert_eq!(store.literal(b.opposite()).in_edges, vec![a]);
        assert_eq!(store.literal(a.opposite()).in_edges, vec![b]);
        assert_eq!(store.implication_count(), 2);
    }
}
