//! Implication graph construction.
//!
//! Each constraint record forbids its two endpoints from ending up with the
//! same final color. Both endpoints already exclude their original color, so
//! only the target colors they have in common can collide:
//!
//! - equal original colors: both alternative colors are shared, giving two
//!   collisions to forbid;
//! - different original colors: exactly one alternative color is shared.
//!
//! Every collision becomes a mutual exclusion between the two literals that
//! target the shared color.

use crate::literal_store::{Interned, LiteralStore};
use recolor_base::{Color, ConstraintRecord, Error, Result, VertexId};

/// Feeds constraint records into a [`LiteralStore`].
#[derive(Debug, Default)]
pub struct ImplicationGraphBuilder {
    store: LiteralStore,
    records: u64,
}

impl ImplicationGraphBuilder {
    /// Creates a builder with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose store accepts at most `limit` vertices.
    pub fn with_vertex_limit(limit: usize) -> Self {
        Self {
            store: LiteralStore::with_vertex_limit(limit),
            records: 0,
        }
    }

    /// Adds one record, creating literals for unseen vertices.
    ///
    /// Fails on self-loops and on a vertex reported with two different
    /// original colors. The store must be discarded after an error.
    pub fn add_record(&mut self, record: &ConstraintRecord) -> Result<()> {
        self.records += 1;
        let position = self.records;

        if record.is_self_loop() {
            return Err(Error::malformed(
                position,
                record,
                "a vertex cannot be adjacent to itself",
            ));
        }

        let first = self.intern(position, record, &record.vertex1, record.color1)?;
        let second = self.intern(position, record, &record.vertex2, record.color2)?;
        let linked = self.link(first, second);

        debug_assert_eq!(
            linked,
            shared_target_count(record.color1, record.color2),
            "collision count disagrees with color arithmetic"
        );
        Ok(())
    }

    /// Adds every record of a stream, stopping at the first failure.
    pub fn add_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = ConstraintRecord>,
    {
        for record in records {
            self.add_record(&record)?;
        }
        Ok(())
    }

    /// Number of records consumed so far.
    pub fn record_count(&self) -> u64 {
        self.records
    }

    /// Read access to the store under construction.
    pub fn store(&self) -> &LiteralStore {
        &self.store
    }

    /// Hands over the finished store.
    pub fn finish(self) -> LiteralStore {
        tracing::debug!(
            records = self.records,
            vertices = self.store.vertex_count(),
            literals = self.store.literal_count(),
            implications = self.store.implication_count(),
            "Implication graph built"
        );
        self.store
    }

    fn intern(
        &mut self,
        position: u64,
        record: &ConstraintRecord,
        id: &VertexId,
        color: Color,
    ) -> Result<usize> {
        match self.store.intern(id, color) {
            Interned::Vertex(vertex) => Ok(vertex),
            Interned::ColorConflict { known } => Err(Error::malformed(
                position,
                record,
                format!("vertex {id} was first seen as {known}, now as {color}"),
            )),
            Interned::LimitReached { limit } => Err(Error::InvalidArgument(format!(
                "record #{position} ({record}) needs more than {limit} vertices"
            ))),
        }
    }

    /// Excludes every pair of literals, one per endpoint, that target the
    /// same color. Returns the number of pairs excluded.
    fn link(&mut self, first: usize, second: usize) -> usize {
        let mut linked = 0;
        for a in self.store.pair(first) {
            for b in self.store.pair(second) {
                if self.store.literal(a).target == self.store.literal(b).target {
                    self.store.exclude(a, b);
                    linked += 1;
                }
            }
        }
        linked
    }
}

/// Number of alternative colors two adjacent vertices have in common.
#[must_use]
pub fn shared_target_count(color1: Color, color2: Color) -> usize {
    if color1 == color2 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal_store::LiteralId;

    fn record(v1: &str, v2: &str, c1: Color, c2: Color) -> ConstraintRecord {
        ConstraintRecord::new(v1, v2, c1, c2)
    }

    fn targets(store: &LiteralStore, ids: &[LiteralId]) -> Vec<Color> {
        ids.iter().map(|&id| store.literal(id).target).collect()
    }

    #[test]
    fn test_equal_colors_exclude_both_collisions() {
        let mut builder = ImplicationGraphBuilder::new();
        builder
            .add_record(&record("1", "2", Color::Red, Color::Red))
            .unwrap();
        let store = builder.finish();

        assert_eq!(store.implication_count(), 4);
        let [g1, b1] = store.pair(0);
        let [g2, b2] = store.pair(1);
        // green1 forces blue2, blue1 forces green2
        assert_eq!(store.literal(g1).out_edges, vec![b2]);
        assert_eq!(store.literal(b1).out_edges, vec![g2]);
        assert_eq!(store.literal(g2).out_edges, vec![b1]);
        assert_eq!(store.literal(b2).out_edges, vec![g1]);
    }

    #[test]
    fn test_different_colors_exclude_single_collision() {
        let mut builder = ImplicationGraphBuilder::new();
        builder
            .add_record(&record("1", "2", Color::Red, Color::Green))
            .unwrap();
        let store = builder.finish();

        assert_eq!(store.implication_count(), 2);
        // vertex 1: green, blue; vertex 2: red, blue
        let [g1, b1] = store.pair(0);
        let [r2, b2] = store.pair(1);
        assert_eq!(store.literal(b1).out_edges, vec![r2]);
        assert_eq!(store.literal(b2).out_edges, vec![g1]);
        assert!(store.literal(g1).out_edges.is_empty());
        assert!(store.literal(r2).out_edges.is_empty());
    }

    #[test]
    fn test_every_distinct_color_pair_shares_exactly_one_target() {
        for c1 in Color::ALL {
            for c2 in Color::ALL {
                let mut builder = ImplicationGraphBuilder::new();
                builder.add_record(&record("u", "v", c1, c2)).unwrap();
                let store = builder.store();

                let u = targets(store, &store.pair(0));
                let v = targets(store, &store.pair(1));
                let shared = u.iter().filter(|c| v.contains(c)).count();
                assert_eq!(shared, shared_target_count(c1, c2), "{c1}/{c2}");
                assert_eq!(store.implication_count(), 2 * shared, "{c1}/{c2}");

                // the shared color is the one neither endpoint started with
                if c1 != c2 {
                    let free = Color::ALL
                        .into_iter()
                        .find(|c| *c != c1 && *c != c2)
                        .unwrap();
                    assert!(u.contains(&free) && v.contains(&free));
                }
            }
        }
    }

    #[test]
    fn test_duplicate_records_are_tolerated() {
        let mut builder = ImplicationGraphBuilder::new();
        let r = record("1", "2", Color::Blue, Color::Red);
        builder.add_record(&r).unwrap();
        builder.add_record(&r).unwrap();
        assert_eq!(builder.store().vertex_count(), 2);
        assert_eq!(builder.store().implication_count(), 4);
        assert_eq!(builder.record_count(), 2);
    }

    #[test]
    fn test_self_loop_is_malformed() {
        let mut builder = ImplicationGraphBuilder::new();
        builder
            .add_record(&record("1", "2", Color::Red, Color::Blue))
            .unwrap();
        let err = builder
            .add_record(&record("3", "3", Color::Red, Color::Red))
            .unwrap_err();
        match err {
            Error::MalformedRecord {
                position, record, ..
            } => {
                assert_eq!(position, 2);
                assert_eq!(record, "3,3,red,red");
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_vertex_limit_is_invalid_argument() {
        let mut builder = ImplicationGraphBuilder::with_vertex_limit(3);
        builder
            .add_record(&record("1", "2", Color::Red, Color::Blue))
            .unwrap();
        builder
            .add_record(&record("2", "3", Color::Blue, Color::Green))
            .unwrap();
        let err = builder
            .add_record(&record("3", "4", Color::Green, Color::Red))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_inconsistent_original_color_is_malformed() {
        let mut builder = ImplicationGraphBuilder::new();
        builder
            .add_record(&record("1", "2", Color::Red, Color::Blue))
            .unwrap();
        let err = builder
            .add_record(&record("2", "3", Color::Green, Color::Red))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { position: 2, .. }));
    }
}
