//! Shape catalog - static piece definitions
//!
//! Every kind carries an ordered list of rotation states, each an occupancy
//! mask on a fixed 5x5 bounding box, plus a display color. Mask cell
//! (col, row) projects to board cell (piece.x + col, piece.y + row); the
//! horizontal centering is baked into the spawn column, so callers never
//! apply an extra offset.

use crate::core::rng::SimpleRng;
use crate::types::{PieceKind, Rgb};

/// Side length of the relative occupancy grid
pub const MASK_SIZE: usize = 5;

/// Upper bound on filled cells per rotation state
pub const MASK_AREA: usize = MASK_SIZE * MASK_SIZE;

/// One rotation state: relative occupancy over the 5x5 grid, row-major
pub type Mask = [[bool; MASK_SIZE]; MASK_SIZE];

/// Build a mask from five rows of `.`/`#` art.
/// Rows must be exactly MASK_SIZE bytes; shorter rows fail at compile time.
const fn mask(rows: [&str; MASK_SIZE]) -> Mask {
    let mut out = [[false; MASK_SIZE]; MASK_SIZE];
    let mut row = 0;
    while row < MASK_SIZE {
        let bytes = rows[row].as_bytes();
        let mut col = 0;
        while col < MASK_SIZE {
            out[row][col] = bytes[col] == b'#';
            col += 1;
        }
        row += 1;
    }
    out
}

const CYAN: Rgb = Rgb::new(0, 255, 255);
const MAGENTA: Rgb = Rgb::new(255, 0, 255);
const ORANGE: Rgb = Rgb::new(255, 165, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);
const YELLOW: Rgb = Rgb::new(255, 255, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const RED: Rgb = Rgb::new(255, 0, 0);

static S_MASKS: [Mask; 2] = [
    mask([
        ".....", //
        ".....", //
        "..##.", //
        ".##..", //
        ".....",
    ]),
    mask([
        ".....", //
        "..#..", //
        "..##.", //
        "...#.", //
        ".....",
    ]),
];

static Z_MASKS: [Mask; 2] = [
    mask([
        ".....", //
        ".....", //
        ".##..", //
        "..##.", //
        ".....",
    ]),
    mask([
        ".....", //
        "..#..", //
        ".##..", //
        ".#...", //
        ".....",
    ]),
];

static I_MASKS: [Mask; 2] = [
    mask([
        ".....", //
        "..#..", //
        "..#..", //
        "..#..", //
        "..#..",
    ]),
    mask([
        ".....", //
        "####.", //
        ".....", //
        ".....", //
        ".....",
    ]),
];

static O_MASKS: [Mask; 1] = [mask([
    ".....", //
    ".....", //
    ".##..", //
    ".##..", //
    ".....",
])];

static T_MASKS: [Mask; 4] = [
    mask([
        ".....", //
        ".....", //
        "..#..", //
        ".###.", //
        ".....",
    ]),
    mask([
        ".....", //
        "..#..", //
        "..##.", //
        "..#..", //
        ".....",
    ]),
    mask([
        ".....", //
        ".....", //
        ".###.", //
        "..#..", //
        ".....",
    ]),
    mask([
        ".....", //
        "..#..", //
        ".##..", //
        "..#..", //
        ".....",
    ]),
];

static J_MASKS: [Mask; 4] = [
    mask([
        ".....", //
        ".....", //
        ".#...", //
        ".###.", //
        ".....",
    ]),
    mask([
        ".....", //
        "..##.", //
        "..#..", //
        "..#..", //
        ".....",
    ]),
    mask([
        ".....", //
        ".....", //
        ".###.", //
        "...#.", //
        ".....",
    ]),
    mask([
        ".....", //
        "..#..", //
        "..#..", //
        ".##..", //
        ".....",
    ]),
];

static L_MASKS: [Mask; 4] = [
    mask([
        ".....", //
        ".....", //
        "...#.", //
        ".###.", //
        ".....",
    ]),
    mask([
        ".....", //
        "..#..", //
        "..#..", //
        "..##.", //
        ".....",
    ]),
    mask([
        ".....", //
        ".....", //
        ".###.", //
        ".#...", //
        ".....",
    ]),
    mask([
        ".....", //
        "..##.", //
        "..#..", //
        "..#..", //
        ".....",
    ]),
];

/// Immutable shape definition: kind, rotation states, display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: PieceKind,
    pub rotations: &'static [Mask],
    pub color: Rgb,
}

/// The classic seven kinds with their classic colors
pub static STANDARD_SHAPES: [ShapeDefinition; 7] = [
    ShapeDefinition {
        kind: PieceKind::S,
        rotations: &S_MASKS,
        color: CYAN,
    },
    ShapeDefinition {
        kind: PieceKind::Z,
        rotations: &Z_MASKS,
        color: MAGENTA,
    },
    ShapeDefinition {
        kind: PieceKind::I,
        rotations: &I_MASKS,
        color: ORANGE,
    },
    ShapeDefinition {
        kind: PieceKind::O,
        rotations: &O_MASKS,
        color: BLUE,
    },
    ShapeDefinition {
        kind: PieceKind::T,
        rotations: &T_MASKS,
        color: YELLOW,
    },
    ShapeDefinition {
        kind: PieceKind::J,
        rotations: &J_MASKS,
        color: GREEN,
    },
    ShapeDefinition {
        kind: PieceKind::L,
        rotations: &L_MASKS,
        color: RED,
    },
];

/// Resolve a kind to its standard definition
pub fn definition_of(kind: PieceKind) -> &'static ShapeDefinition {
    match kind {
        PieceKind::S => &STANDARD_SHAPES[0],
        PieceKind::Z => &STANDARD_SHAPES[1],
        PieceKind::I => &STANDARD_SHAPES[2],
        PieceKind::O => &STANDARD_SHAPES[3],
        PieceKind::T => &STANDARD_SHAPES[4],
        PieceKind::J => &STANDARD_SHAPES[5],
        PieceKind::L => &STANDARD_SHAPES[6],
    }
}

/// Handle over a set of shape definitions
///
/// Sessions run against the standard seven-kind set in normal play; smaller
/// custom slices are useful on reduced test boards.
#[derive(Debug, Clone, Copy)]
pub struct ShapeCatalog {
    shapes: &'static [ShapeDefinition],
}

impl ShapeCatalog {
    /// The full seven-kind catalog
    pub fn standard() -> Self {
        Self {
            shapes: &STANDARD_SHAPES,
        }
    }

    /// A catalog over a custom definition slice
    pub const fn from_shapes(shapes: &'static [ShapeDefinition]) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &'static [ShapeDefinition] {
        self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Look up a kind in this catalog
    pub fn find(&self, kind: PieceKind) -> Option<&'static ShapeDefinition> {
        self.shapes.iter().find(|def| def.kind == kind)
    }

    /// Rotation states for a kind in this catalog
    pub fn rotations_of(&self, kind: PieceKind) -> Option<&'static [Mask]> {
        self.find(kind).map(|def| def.rotations)
    }

    /// Display color for a kind in this catalog
    pub fn color_of(&self, kind: PieceKind) -> Option<Rgb> {
        self.find(kind).map(|def| def.color)
    }

    /// Uniform pick across the catalog, driven by the injected RNG
    pub fn pick(&self, rng: &mut SimpleRng) -> &'static ShapeDefinition {
        debug_assert!(!self.shapes.is_empty());
        let index = rng.next_range(self.shapes.len() as u32) as usize;
        &self.shapes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_count(mask: &Mask) -> usize {
        mask.iter().flatten().filter(|&&filled| filled).count()
    }

    #[test]
    fn standard_catalog_has_seven_kinds_in_order() {
        let catalog = ShapeCatalog::standard();
        let kinds: Vec<PieceKind> = catalog.shapes().iter().map(|def| def.kind).collect();
        assert_eq!(kinds, PieceKind::all().to_vec());
    }

    #[test]
    fn rotation_counts_match_shape_data() {
        let expected = [
            (PieceKind::S, 2),
            (PieceKind::Z, 2),
            (PieceKind::I, 2),
            (PieceKind::O, 1),
            (PieceKind::T, 4),
            (PieceKind::J, 4),
            (PieceKind::L, 4),
        ];
        for (kind, count) in expected {
            assert_eq!(definition_of(kind).rotations.len(), count, "{:?}", kind);
        }
    }

    #[test]
    fn every_rotation_state_has_four_cells() {
        for def in ShapeCatalog::standard().shapes() {
            for (i, mask) in def.rotations.iter().enumerate() {
                assert_eq!(cell_count(mask), 4, "{:?} rotation {}", def.kind, i);
            }
        }
    }

    #[test]
    fn colors_follow_catalog_order() {
        assert_eq!(definition_of(PieceKind::S).color, Rgb::new(0, 255, 255));
        assert_eq!(definition_of(PieceKind::O).color, Rgb::new(0, 0, 255));
        assert_eq!(definition_of(PieceKind::L).color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn find_resolves_each_kind_to_its_definition() {
        let catalog = ShapeCatalog::standard();
        for kind in PieceKind::all() {
            let def = catalog.find(kind).unwrap();
            assert_eq!(def.kind, kind);
            assert!(std::ptr::eq(def, definition_of(kind)));
        }
        assert_eq!(
            catalog.rotations_of(PieceKind::I).unwrap().len(),
            definition_of(PieceKind::I).rotations.len()
        );
        assert_eq!(
            catalog.color_of(PieceKind::T),
            Some(definition_of(PieceKind::T).color)
        );
    }

    #[test]
    fn pick_covers_all_kinds_over_many_draws() {
        let catalog = ShapeCatalog::standard();
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..200 {
            let def = catalog.pick(&mut rng);
            let index = catalog
                .shapes()
                .iter()
                .position(|d| d.kind == def.kind)
                .unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds in {:?}", seen);
    }

    #[test]
    fn sub_catalog_only_picks_its_own_shapes() {
        let catalog = ShapeCatalog::from_shapes(&STANDARD_SHAPES[3..4]);
        let mut rng = SimpleRng::new(1);
        for _ in 0..20 {
            assert_eq!(catalog.pick(&mut rng).kind, PieceKind::O);
        }
    }
}
