//! Grid topology and builder.
//!
//! # Data layout
//!
//! Places are stored in one `Vec` in row-major order and addressed by
//! [`PlaceId`] (`x * 5 + y`).  Each place carries two adjacency lists computed
//! once by [`GridBuilder::build`]:
//!
//! - `walls`: the places on the other side of a wall.  The relation is
//!   symmetric and exhaustively listed, including diagonal pairs, because
//!   walls also block line of sight.
//! - `traversable`: grid-adjacent (Manhattan distance 1) places not in
//!   `walls`.
//!
//! The topology is immutable after construction; everything that changes
//! during a run lives in [`Occupancy`][crate::Occupancy].

use taxi_core::{Coords, GRID_SIZE, PlaceId, PlaceState};

use crate::{GridError, GridResult};

/// Towns of the standard world: `(x, y, colour)`.
const STANDARD_TOWNS: [(i32, i32, PlaceState); 4] = [
    (0, 0, PlaceState::Red),
    (0, 4, PlaceState::Green),
    (4, 0, PlaceState::Yellow),
    (4, 3, PlaceState::Blue),
];

/// Wall pairs of the standard world.  Each pair is stored on both endpoints.
const STANDARD_WALLS: [((i32, i32), (i32, i32)); 12] = [
    ((3, 0), (3, 1)),
    ((3, 0), (4, 1)),
    ((4, 0), (4, 1)),
    ((4, 0), (3, 1)),
    ((0, 1), (0, 2)),
    ((0, 1), (1, 2)),
    ((1, 1), (1, 2)),
    ((1, 1), (0, 2)),
    ((3, 2), (3, 3)),
    ((3, 2), (4, 3)),
    ((4, 2), (4, 3)),
    ((4, 2), (3, 3)),
];

// ── Place ─────────────────────────────────────────────────────────────────────

/// Immutable description of one grid cell.
///
/// Equality is by coordinates alone; the adjacency lists are derived data.
#[derive(Clone, Debug)]
pub struct Place {
    pub coords:      Coords,
    pub state:       PlaceState,
    /// Grid-adjacent places reachable in one move, in row-major order.
    pub traversable: Vec<PlaceId>,
    /// Places separated from this one by a wall.
    pub walls:       Vec<PlaceId>,
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Eq for Place {}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The 5×5 world topology.
///
/// Do not construct directly; use [`Grid::standard`] or [`GridBuilder`].
pub struct Grid {
    places: Vec<Place>,
    towns:  Vec<PlaceId>,
}

impl Grid {
    /// The fixed world: four towns and twelve wall pairs.
    pub fn standard() -> GridResult<Self> {
        let mut b = GridBuilder::new();
        for (x, y, state) in STANDARD_TOWNS {
            b.add_town(Coords::new(x, y)?, state);
        }
        for ((ax, ay), (bx, by)) in STANDARD_WALLS {
            b.add_wall(Coords::new(ax, ay)?, Coords::new(bx, by)?)?;
        }
        Ok(b.build())
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// All place ids in row-major order.
    pub fn place_ids(&self) -> impl Iterator<Item = PlaceId> + '_ {
        (0..self.places.len() as u8).map(PlaceId)
    }

    #[inline]
    pub fn place(&self, id: PlaceId) -> &Place {
        &self.places[id.index()]
    }

    #[inline]
    pub fn coords(&self, id: PlaceId) -> Coords {
        self.places[id.index()].coords
    }

    #[inline]
    pub fn state(&self, id: PlaceId) -> PlaceState {
        self.places[id.index()].state
    }

    #[inline]
    pub fn traversable(&self, id: PlaceId) -> &[PlaceId] {
        &self.places[id.index()].traversable
    }

    #[inline]
    pub fn walls(&self, id: PlaceId) -> &[PlaceId] {
        &self.places[id.index()].walls
    }

    /// `true` if a wall separates `a` from `b`.
    #[inline]
    pub fn is_walled(&self, a: PlaceId, b: PlaceId) -> bool {
        self.walls(a).contains(&b)
    }

    /// Town places in construction order.
    pub fn towns(&self) -> &[PlaceId] {
        &self.towns
    }

    /// The place `(dx, dy)` away from `from`, or `None` if off the grid.
    #[inline]
    pub fn neighbor(&self, from: PlaceId, dx: i32, dy: i32) -> Option<PlaceId> {
        self.coords(from).offset(dx, dy).map(Coords::place_id)
    }

    /// Places visible from `from`: every place within Chebyshev distance 1
    /// (including `from` itself) that is not walled off from `from`.
    /// Returned in row-major order.
    pub fn visible_from(&self, from: PlaceId) -> Vec<PlaceId> {
        let origin = self.coords(from);
        self.places
            .iter()
            .filter(|p| origin.chebyshev(p.coords) <= 1)
            .map(|p| p.coords.place_id())
            .filter(|&id| !self.is_walled(from, id))
            .collect()
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Grid`] incrementally, then call [`build`](Self::build).
///
/// Every cell starts as an ordinary street (`-`).  Walls may be added in any
/// order; `build()` derives the traversable adjacency.
///
/// # Example
///
/// ```
/// use taxi_core::{Coords, PlaceState};
/// use taxi_grid::GridBuilder;
///
/// let mut b = GridBuilder::new();
/// b.add_town(Coords::new(0, 0).unwrap(), PlaceState::Red);
/// b.add_wall(Coords::new(0, 0).unwrap(), Coords::new(0, 1).unwrap()).unwrap();
/// let grid = b.build();
/// assert_eq!(grid.len(), 25);
/// assert_eq!(grid.traversable(Coords::new(0, 0).unwrap().place_id()).len(), 1);
/// ```
pub struct GridBuilder {
    states: Vec<PlaceState>,
    towns:  Vec<PlaceId>,
    walls:  Vec<(PlaceId, PlaceId)>,
}

impl GridBuilder {
    pub fn new() -> Self {
        let n = GRID_SIZE as usize * GRID_SIZE as usize;
        Self {
            states: vec![PlaceState::Empty; n],
            towns:  Vec::new(),
            walls:  Vec::new(),
        }
    }

    /// Colour a place as a town.  Re-colouring an existing town keeps its
    /// original position in the town list.
    pub fn add_town(&mut self, at: Coords, state: PlaceState) -> &mut Self {
        let id = at.place_id();
        self.states[id.index()] = state;
        if state.is_town() && !self.towns.contains(&id) {
            self.towns.push(id);
        }
        self
    }

    /// Add a wall between `a` and `b`, recorded on both endpoints.
    ///
    /// # Errors
    /// [`GridError::SelfWall`] if `a == b`.
    pub fn add_wall(&mut self, a: Coords, b: Coords) -> GridResult<&mut Self> {
        if a == b {
            return Err(GridError::SelfWall(a));
        }
        let (a, b) = (a.place_id(), b.place_id());
        if !self.walls.contains(&(a, b)) {
            self.walls.push((a, b));
            self.walls.push((b, a));
        }
        Ok(self)
    }

    /// Consume the builder and produce a [`Grid`].
    pub fn build(self) -> Grid {
        let mut places: Vec<Place> = self
            .states
            .iter()
            .enumerate()
            .map(|(i, &state)| Place {
                coords:      coords_of(i),
                state,
                traversable: Vec::new(),
                walls:       Vec::new(),
            })
            .collect();

        for &(a, b) in &self.walls {
            places[a.index()].walls.push(b);
        }

        let all: Vec<Coords> = places.iter().map(|p| p.coords).collect();
        for place in &mut places {
            place.traversable = all
                .iter()
                .filter(|&&c| place.coords.manhattan(c) == 1)
                .map(|c| c.place_id())
                .filter(|id| !place.walls.contains(id))
                .collect();
        }

        Grid { places, towns: self.towns }
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Coordinates of the `i`-th row-major cell.  `i` is always below 25 here.
fn coords_of(i: usize) -> Coords {
    let size = GRID_SIZE as usize;
    match Coords::new((i / size) as i32, (i % size) as i32) {
        Ok(c) => c,
        Err(_) => unreachable!("row-major index {i} outside the grid"),
    }
}
