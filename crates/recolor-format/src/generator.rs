//! Random instances with a known valid recoloring.
//!
//! Every vertex draws an original color and a hidden target color different
//! from it. Edges are only drawn between vertices with different hidden
//! targets, so the hidden targets always form a valid recoloring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recolor_base::{Assignment, Color, ConstraintRecord, Error, Result, VertexId};

/// Parameters of [`generate`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of vertices, identified `1..=vertices`.
    pub vertices: usize,
    /// Probability of drawing each admissible edge.
    pub edge_probability: f64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertices: 100,
            edge_probability: 0.5,
            seed: 0,
        }
    }
}

/// A generated instance and the recoloring it was built around.
#[derive(Debug, Clone)]
pub struct GeneratedInstance {
    pub records: Vec<ConstraintRecord>,
    /// Hidden targets of the vertices that occur in `records`, by vertex id.
    pub witness: Assignment,
}

/// Generates a satisfiable instance. Identical configs give identical output.
pub fn generate(config: &GeneratorConfig) -> Result<GeneratedInstance> {
    if !(0.0..=1.0).contains(&config.edge_probability) {
        return Err(Error::InvalidArgument(format!(
            "edge probability must be within [0, 1], got {}",
            config.edge_probability
        )));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.vertices;
    let originals: Vec<Color> = (0..n).map(|_| Color::ALL[rng.gen_range(0..3)]).collect();
    let hidden: Vec<Color> = originals
        .iter()
        .map(|color| color.others()[rng.gen_range(0..2)])
        .collect();

    let mut records = Vec::new();
    let mut used = vec![false; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if hidden[i] != hidden[j] && rng.gen_bool(config.edge_probability) {
                records.push(ConstraintRecord::new(
                    (i + 1) as u64,
                    (j + 1) as u64,
                    originals[i],
                    originals[j],
                ));
                used[i] = true;
                used[j] = true;
            }
        }
    }

    let witness = Assignment::new(
        (0..n)
            .filter(|&i| used[i])
            .map(|i| (VertexId::from((i + 1) as u64), hidden[i])),
    );

    tracing::debug!(
        vertices = n,
        edges = records.len(),
        seed = config.seed,
        "Instance generated"
    );
    Ok(GeneratedInstance { records, witness })
}
