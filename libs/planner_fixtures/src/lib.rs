//! Synthetic road networks used by the planner's tests and benchmarks.
//!
//! Each fixture is plain data: a list of `(id, x, y)` nodes in native
//! coordinates and a list of two-way `(a, b)` segments between them.

/// A road network described as raw nodes and segments.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub nodes: Vec<(u64, f64, f64)>,
    pub segments: Vec<(u64, u64)>,
}

impl Fixture {
    /// Position of the node with the given id, if the fixture declares it.
    pub fn position(&self, id: u64) -> Option<(f64, f64)> {
        self.nodes
            .iter()
            .find(|(node, _, _)| *node == id)
            .map(|(_, x, y)| (*x, *y))
    }
}

pub const SQUARE_A: u64 = 0;
pub const SQUARE_B: u64 = 1;
pub const SQUARE_C: u64 = 2;
pub const SQUARE_D: u64 = 3;

/// Four nodes on a unit square, connected `A-B-C-D-A`.
/// There is no diagonal between `A` and `C`.
pub fn square() -> Fixture {
    Fixture {
        name: "square",
        nodes: vec![
            (SQUARE_A, 0.0, 0.0),
            (SQUARE_B, 1.0, 0.0),
            (SQUARE_C, 1.0, 1.0),
            (SQUARE_D, 0.0, 1.0),
        ],
        segments: vec![
            (SQUARE_A, SQUARE_B),
            (SQUARE_B, SQUARE_C),
            (SQUARE_C, SQUARE_D),
            (SQUARE_D, SQUARE_A),
        ],
    }
}

/// Identifier of the node at `(column, row)` within a [`grid`].
pub const fn grid_id(width: u64, column: u64, row: u64) -> u64 {
    row * width + column
}

/// A `width` by `height` lattice with unit spacing and four-way connectivity.
pub fn grid(width: u64, height: u64) -> Fixture {
    let mut nodes = Vec::with_capacity((width * height) as usize);
    let mut segments = Vec::new();

    for row in 0..height {
        for column in 0..width {
            let id = grid_id(width, column, row);
            nodes.push((id, column as f64, row as f64));

            if column + 1 < width {
                segments.push((id, grid_id(width, column + 1, row)));
            }

            if row + 1 < height {
                segments.push((id, grid_id(width, column, row + 1)));
            }
        }
    }

    Fixture {
        name: "grid",
        nodes,
        segments,
    }
}

pub const DETOUR_START: u64 = 0;
pub const DETOUR_EAGER: u64 = 1;
pub const DETOUR_JUNCTION: u64 = 2;
pub const DETOUR_BYPASS: u64 = 3;
pub const DETOUR_END: u64 = 4;

/// A network where the first path to discover the junction is not the cheapest.
///
/// The eager node sits close to the goal, so it is expanded before the bypass,
/// but reaching the junction through it costs `7 + 2`. The bypass reaches the
/// junction for `2 * sqrt(15.25)`. Everything must pass the junction to reach the end.
pub fn detour() -> Fixture {
    Fixture {
        name: "detour",
        nodes: vec![
            (DETOUR_START, 0.0, 0.0),
            (DETOUR_EAGER, 7.0, 0.0),
            (DETOUR_JUNCTION, 5.0, 0.0),
            (DETOUR_BYPASS, 2.5, 3.0),
            (DETOUR_END, 10.0, 0.0),
        ],
        segments: vec![
            (DETOUR_START, DETOUR_EAGER),
            (DETOUR_EAGER, DETOUR_JUNCTION),
            (DETOUR_START, DETOUR_BYPASS),
            (DETOUR_BYPASS, DETOUR_JUNCTION),
            (DETOUR_JUNCTION, DETOUR_END),
        ],
    }
}

/// Two components: a three node chain near the origin, and a
/// separate two node segment in the far corner.
pub fn disconnected() -> Fixture {
    Fixture {
        name: "disconnected",
        nodes: vec![
            (0, 0.0, 0.0),
            (1, 1.0, 0.0),
            (2, 1.0, 1.0),
            (3, 4.0, 4.0),
            (4, 5.0, 4.0),
        ],
        segments: vec![(0, 1), (1, 2), (3, 4)],
    }
}
