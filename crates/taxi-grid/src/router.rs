//! Routing trait and the opponent-aware breadth-first router.
//!
//! # Pluggability
//!
//! Agents plan through the [`Router`] trait, so a test or application can swap
//! in another search without touching the decision cycle.  The default
//! [`BfsRouter`] treats every move as unit cost.
//!
//! # Opponent pruning
//!
//! The search runs over traversable neighbors with two opponent rules:
//!
//! - A neighbor that is visible to the agent and holds an opposing agent is
//!   never enqueued.  Opponents outside the agent's sight are unknown to it.
//! - If the goal itself holds an opposing agent and is one move from the
//!   agent's *current* place, the search aborts with an empty path.
//!
//! # Scratch state
//!
//! Parent pointers live in a map owned by the router and reused across
//! searches.  A guard clears the map when the search returns, whichever exit
//! it takes, so two searches never see each other's parents.

use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

use rustc_hash::{FxHashMap, FxHashSet};
use taxi_core::{AgentKey, PlaceId};
use tracing::trace;

use crate::{Grid, Occupancy};

// ── Path ──────────────────────────────────────────────────────────────────────

/// Ordered places from the search start to the goal, both inclusive.
///
/// An empty path means the goal was blocked by an opponent.  A path whose only
/// entry is the goal means the goal is unreachable (or was the start).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    places: Vec<PlaceId>,
}

impl Path {
    pub fn new(places: Vec<PlaceId>) -> Self {
        Self { places }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn places(&self) -> &[PlaceId] {
        &self.places
    }

    /// The last entry, if any.
    pub fn goal(&self) -> Option<PlaceId> {
        self.places.last().copied()
    }

    /// Remove and return the first two entries as one step.  `None` (and the
    /// path is left untouched) if fewer than two remain.
    pub fn take_step(&mut self) -> Option<(PlaceId, PlaceId)> {
        if self.places.len() < 2 {
            return None;
        }
        let step = (self.places[0], self.places[1]);
        self.places.drain(..2);
        Some(step)
    }

    pub fn clear(&mut self) {
        self.places.clear();
    }
}

// ── RouteQuery ────────────────────────────────────────────────────────────────

/// One routing request on behalf of an agent.
#[derive(Copy, Clone, Debug)]
pub struct RouteQuery<'a> {
    /// The searching agent; decides who counts as an opponent.
    pub agent:   AgentKey,
    pub start:   PlaceId,
    pub goal:    PlaceId,
    /// Where the agent actually stands.  Usually equal to `start`.
    pub current: PlaceId,
    /// The agent's visible places this tick.
    pub visible: &'a [PlaceId],
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable path search.
pub trait Router {
    /// Search from `query.start` to `query.goal`.
    ///
    /// Never fails: unreachable and blocked goals are expressed through the
    /// shape of the returned [`Path`].
    fn route(&mut self, grid: &Grid, occupancy: &Occupancy, query: RouteQuery<'_>) -> Path;
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search with parent-pointer trace-back.
#[derive(Debug, Default)]
pub struct BfsRouter {
    parents: FxHashMap<PlaceId, PlaceId>,
}

impl BfsRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if a parent pointer survived the last search.  Always `false`
    /// between searches.
    pub fn has_pending_parents(&self) -> bool {
        !self.parents.is_empty()
    }
}

impl Router for BfsRouter {
    fn route(&mut self, grid: &Grid, occupancy: &Occupancy, query: RouteQuery<'_>) -> Path {
        let mut parents = ParentScratch(&mut self.parents);
        bfs(grid, occupancy, query, &mut parents)
    }
}

/// Clears the parent map on drop.
struct ParentScratch<'a>(&'a mut FxHashMap<PlaceId, PlaceId>);

impl Deref for ParentScratch<'_> {
    type Target = FxHashMap<PlaceId, PlaceId>;
    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl DerefMut for ParentScratch<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl Drop for ParentScratch<'_> {
    fn drop(&mut self) {
        self.0.clear();
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(
    grid: &Grid,
    occupancy: &Occupancy,
    q: RouteQuery<'_>,
    parents: &mut FxHashMap<PlaceId, PlaceId>,
) -> Path {
    let agent = q.agent;
    let mut queue: VecDeque<PlaceId> = VecDeque::from([q.start]);
    let mut queued: FxHashSet<PlaceId> = FxHashSet::default();
    let mut visited: FxHashSet<PlaceId> = FxHashSet::default();
    queued.insert(q.start);

    let goal_next_to_current = grid.traversable(q.current).contains(&q.goal);

    while let Some(p) = queue.pop_front() {
        visited.insert(p);
        if p == q.goal {
            trace!(agent = %agent, place = %grid.coords(p), "goal reached");
            break;
        }

        for &n in grid.traversable(p) {
            if n == q.goal && goal_next_to_current && occupancy.has_opposing_agent(n, agent) {
                trace!(agent = %agent, goal = %grid.coords(n), "goal blocked by opponent");
                return Path::empty();
            }
            if visited.contains(&n) || queued.contains(&n) {
                continue;
            }
            if q.visible.contains(&n) && occupancy.has_opposing_agent(n, agent) {
                trace!(agent = %agent, place = %grid.coords(n), "skipping opponent place");
                continue;
            }
            queue.push_back(n);
            queued.insert(n);
            parents.insert(n, p);
        }
    }

    let mut places = vec![q.goal];
    let mut cur = q.goal;
    while let Some(&parent) = parents.get(&cur) {
        places.push(parent);
        cur = parent;
    }
    places.reverse();
    trace!(agent = %agent, steps = places.len(), "trace-back done");
    Path::new(places)
}
