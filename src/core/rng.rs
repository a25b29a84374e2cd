//! RNG module - deterministic shape selection
//!
//! A small LCG drives uniform picks from the shape catalog. The generator is
//! injected into the session at construction, so the same seed replays the
//! same game. `ScriptedShapes` replays an explicit kind sequence instead,
//! for tests that need full control over what spawns.

use crate::core::catalog::{definition_of, ShapeCatalog, ShapeDefinition};
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed (0 is remapped to 1)
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of spawned shapes, consulted once per spawn
pub trait ShapeSource {
    fn next_shape(&mut self, catalog: &ShapeCatalog) -> &'static ShapeDefinition;
}

impl ShapeSource for SimpleRng {
    fn next_shape(&mut self, catalog: &ShapeCatalog) -> &'static ShapeDefinition {
        catalog.pick(self)
    }
}

/// Replays a fixed kind sequence, cycling when it runs out
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    shapes: Vec<&'static ShapeDefinition>,
    next: usize,
}

impl ScriptedShapes {
    /// Script from standard kinds; the sequence must not be empty
    pub fn new(kinds: &[PieceKind]) -> Self {
        assert!(!kinds.is_empty());
        Self {
            shapes: kinds.iter().map(|&kind| definition_of(kind)).collect(),
            next: 0,
        }
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self, _catalog: &ShapeCatalog) -> &'static ShapeDefinition {
        let shape = self.shapes[self.next % self.shapes.len()];
        self.next += 1;
        shape
    }
}
