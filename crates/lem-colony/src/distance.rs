//! Shortest-distance search over the colony.
//!
//! # Pluggability
//!
//! Callers go through the [`DistanceFinder`] trait so a different search
//! (plain BFS, bidirectional) can replace the default [`HeapDistanceFinder`]
//! without touching the scheduler.
//!
//! # Labels
//!
//! Every tunnel costs one hop.  The result is a [`DistanceMap`] holding the
//! hop count from the search root for each room the search reached before it
//! stopped.  Rooms it never reached are absent.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use lem_core::RoomId;

use crate::{Colony, ColonyError, ColonyResult};

/// Sentinel stored for rooms the search never reached.
const UNREACHED: u32 = u32::MAX;

// ── DistanceMap ───────────────────────────────────────────────────────────────

/// Hop counts from `root`, indexed by `RoomId`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMap {
    root: RoomId,
    hops: Vec<u32>,
}

impl DistanceMap {
    /// Build a map from explicit per-room labels (`None` = unreached).
    ///
    /// Used by tests and by callers that compute labels another way.
    pub fn from_labels<I>(root: RoomId, labels: I) -> Self
    where
        I: IntoIterator<Item = Option<u32>>,
    {
        let hops = labels.into_iter().map(|l| l.unwrap_or(UNREACHED)).collect();
        Self { root, hops }
    }

    /// The room the distances are measured from.
    pub fn root(&self) -> RoomId {
        self.root
    }

    /// Hop count of `room`, or `None` if the search never reached it.
    #[inline]
    pub fn get(&self, room: RoomId) -> Option<u32> {
        match self.hops.get(room.index()) {
            Some(&h) if h != UNREACHED => Some(h),
            _ => None,
        }
    }

    /// Number of rooms the map covers (reached or not).
    pub fn room_count(&self) -> usize {
        self.hops.len()
    }

    /// Number of rooms with a label.
    pub fn reached_count(&self) -> usize {
        self.hops.iter().filter(|&&h| h != UNREACHED).count()
    }

    /// `(room, hops)` for every labelled room, in `RoomId` order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, u32)> + '_ {
        self.hops
            .iter()
            .enumerate()
            .filter(|&(_, &h)| h != UNREACHED)
            .map(|(i, &h)| (RoomId(i as u32), h))
    }
}

// ── DistanceFinder trait ──────────────────────────────────────────────────────

/// Pluggable shortest-distance search.
pub trait DistanceFinder: Send + Sync {
    /// Label rooms with their hop count from `source`, stopping once `target`
    /// is settled.
    ///
    /// Returns [`ColonyError::Unreachable`] if `target` cannot be reached;
    /// the labels are not meaningful for scheduling in that case.
    fn distances(
        &self,
        colony: &Colony,
        source: RoomId,
        target: RoomId,
    ) -> ColonyResult<DistanceMap>;
}

/// Min-heap (Dijkstra-style) search with unit tunnel weights and early exit.
pub struct HeapDistanceFinder;

impl DistanceFinder for HeapDistanceFinder {
    fn distances(
        &self,
        colony: &Colony,
        source: RoomId,
        target: RoomId,
    ) -> ColonyResult<DistanceMap> {
        match shortest_distances(colony, source, target)? {
            (map, true)  => Ok(map),
            (_, false)   => Err(ColonyError::Unreachable { from: source, to: target }),
        }
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Run the search and return the labels plus whether `target` was reached.
///
/// Every label present in the map is final: hop counts are popped in
/// non-decreasing order, so nothing pushed later can improve an earlier one.
pub fn shortest_distances(
    colony: &Colony,
    source: RoomId,
    target: RoomId,
) -> ColonyResult<(DistanceMap, bool)> {
    if colony.is_empty() {
        return Err(ColonyError::Empty);
    }
    colony.check_room(source)?;
    colony.check_room(target)?;

    let mut hops = vec![UNREACHED; colony.room_count()];
    hops[source.index()] = 0;

    // Min-heap: (hops, room).  The RoomId secondary key keeps pops deterministic.
    let mut heap: BinaryHeap<Reverse<(u32, RoomId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    let mut reached = false;
    while let Some(Reverse((cost, room))) = heap.pop() {
        if room == target {
            reached = true;
            break;
        }

        // Skip stale heap entries.
        if cost > hops[room.index()] {
            continue;
        }

        let next = cost + 1;
        for (_, neighbor) in colony.neighbors(room) {
            // A self-loop offers `cost + 1` to a room already at `cost`.
            if next < hops[neighbor.index()] {
                hops[neighbor.index()] = next;
                heap.push(Reverse((next, neighbor)));
            }
        }
    }

    let map = DistanceMap { root: source, hops };
    tracing::debug!(
        source = colony.room_name(source),
        target = colony.room_name(target),
        reached,
        labelled = map.reached_count(),
        "distance search finished",
    );
    Ok((map, reached))
}
