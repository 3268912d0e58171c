//! Colony representation and builder.
//!
//! # Data layout
//!
//! Tunnels are undirected, but adjacency is stored in **Compressed Sparse
//! Row (CSR)** form with one entry per tunnel end.  Given a `RoomId r`, its
//! incident tunnels occupy the slice:
//!
//! ```text
//! adj_tunnel[ room_adj_start[r] .. room_adj_start[r+1] ]
//! ```
//!
//! Within a room's slice, tunnels appear in declaration order.  The
//! scheduler's tie-break between equally distant neighbours depends on this
//! order, so it must stay stable.  A self-loop contributes a single entry
//! whose neighbour is the room itself.

use std::collections::HashSet;

use lem_core::{LemError, LemResult, RoomId, TunnelId};

use crate::{ColonyError, ColonyResult};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, RoomId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, RoomId>;

// ── Room ──────────────────────────────────────────────────────────────────────

/// A declared room.  Coordinates are carried for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name: String,
    pub x:    i64,
    pub y:    i64,
}

// ── Colony ────────────────────────────────────────────────────────────────────

/// Undirected room graph in CSR format plus a name index.
///
/// Do not construct directly; use [`ColonyBuilder`].
pub struct Colony {
    /// Declared rooms, indexed by `RoomId`.
    pub rooms: Vec<Room>,

    /// Both ends of every tunnel, indexed by `TunnelId`.
    pub tunnel_ends: Vec<(RoomId, RoomId)>,

    /// CSR row pointer.  Length = `room_count + 1`.
    pub room_adj_start: Vec<u32>,

    /// Incident tunnel of each adjacency entry.
    pub adj_tunnel: Vec<TunnelId>,

    /// Room on the far side of each adjacency entry.
    pub adj_neighbor: Vec<RoomId>,

    names: NameIndex,
}

impl Colony {
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnel_ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look up a room by name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.names.get(name).copied()
    }

    #[inline]
    pub fn room_name(&self, room: RoomId) -> &str {
        &self.rooms[room.index()].name
    }

    /// `Ok(())` if `room` indexes a declared room.
    pub fn check_room(&self, room: RoomId) -> LemResult<()> {
        if room.index() < self.rooms.len() {
            Ok(())
        } else {
            Err(LemError::RoomNotFound(room))
        }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// `(tunnel, neighbour)` pairs incident to `room`, in declaration order.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> impl Iterator<Item = (TunnelId, RoomId)> + '_ {
        let start = self.room_adj_start[room.index()] as usize;
        let end   = self.room_adj_start[room.index() + 1] as usize;
        (start..end).map(|i| (self.adj_tunnel[i], self.adj_neighbor[i]))
    }

    /// Number of tunnel ends at `room` (a self-loop counts once).
    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        let start = self.room_adj_start[room.index()] as usize;
        let end   = self.room_adj_start[room.index() + 1] as usize;
        end - start
    }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// The builder enforces the graph invariants: unique room names, tunnels
/// only between declared rooms, at most one tunnel per room pair.
///
/// # Example
///
/// ```
/// use lem_colony::ColonyBuilder;
///
/// let mut b = ColonyBuilder::new();
/// let start = b.add_room("start", 0, 0).unwrap();
/// let end   = b.add_room("end", 1, 0).unwrap();
/// b.add_tunnel(start, end).unwrap();
/// let colony = b.build();
/// assert_eq!(colony.room_count(), 2);
/// assert_eq!(colony.degree(start), 1);
/// ```
pub struct ColonyBuilder {
    rooms:       Vec<Room>,
    names:       NameIndex,
    tunnel_ends: Vec<(RoomId, RoomId)>,
    pairs:       HashSet<(RoomId, RoomId)>,
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self {
            rooms:       Vec::new(),
            names:       NameIndex::default(),
            tunnel_ends: Vec::new(),
            pairs:       HashSet::new(),
        }
    }

    /// Declare a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: &str, x: i64, y: i64) -> ColonyResult<RoomId> {
        if self.names.contains_key(name) {
            return Err(ColonyError::DuplicateRoom(name.to_owned()));
        }
        let id = RoomId(self.rooms.len() as u32);
        self.names.insert(name.to_owned(), id);
        self.rooms.push(Room { name: name.to_owned(), x, y });
        Ok(id)
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.names.get(name).copied()
    }

    /// Add an undirected tunnel between two declared rooms.
    ///
    /// `a == b` is accepted; the self-loop is inert for every algorithm.
    pub fn add_tunnel(&mut self, a: RoomId, b: RoomId) -> ColonyResult<TunnelId> {
        for room in [a, b] {
            if room.index() >= self.rooms.len() {
                return Err(LemError::RoomNotFound(room).into());
            }
        }
        let key = if a <= b { (a, b) } else { (b, a) };
        if !self.pairs.insert(key) {
            return Err(ColonyError::DuplicateTunnel {
                a: self.rooms[a.index()].name.clone(),
                b: self.rooms[b.index()].name.clone(),
            });
        }
        let id = TunnelId(self.tunnel_ends.len() as u32);
        self.tunnel_ends.push((a, b));
        Ok(id)
    }

    /// Convenience: add a tunnel by room names.
    pub fn link(&mut self, a: &str, b: &str) -> ColonyResult<TunnelId> {
        let ra = self.room_id(a).ok_or_else(|| ColonyError::UnknownRoom(a.to_owned()))?;
        let rb = self.room_id(b).ok_or_else(|| ColonyError::UnknownRoom(b.to_owned()))?;
        self.add_tunnel(ra, rb)
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn tunnel_count(&self) -> usize { self.tunnel_ends.len() }

    /// Consume the builder and produce a [`Colony`].
    ///
    /// Time complexity: O(R + T) for R rooms and T tunnels.
    pub fn build(self) -> Colony {
        let room_count = self.rooms.len();

        // Degree count; a self-loop is one adjacency entry.
        let mut room_adj_start = vec![0u32; room_count + 1];
        for &(a, b) in &self.tunnel_ends {
            room_adj_start[a.index() + 1] += 1;
            if a != b {
                room_adj_start[b.index() + 1] += 1;
            }
        }
        for i in 1..=room_count {
            room_adj_start[i] += room_adj_start[i - 1];
        }
        let entries = room_adj_start[room_count] as usize;

        // Scatter in tunnel order so each room's slice stays in declaration order.
        let mut cursor: Vec<u32> = room_adj_start[..room_count].to_vec();
        let mut adj_tunnel   = vec![TunnelId::INVALID; entries];
        let mut adj_neighbor = vec![RoomId::INVALID; entries];
        for (t, &(a, b)) in self.tunnel_ends.iter().enumerate() {
            let tunnel = TunnelId(t as u32);
            let slot = cursor[a.index()] as usize;
            adj_tunnel[slot]   = tunnel;
            adj_neighbor[slot] = b;
            cursor[a.index()] += 1;
            if a != b {
                let slot = cursor[b.index()] as usize;
                adj_tunnel[slot]   = tunnel;
                adj_neighbor[slot] = a;
                cursor[b.index()] += 1;
            }
        }

        tracing::trace!(rooms = room_count, tunnels = self.tunnel_ends.len(), "colony built");

        Colony {
            rooms: self.rooms,
            tunnel_ends: self.tunnel_ends,
            room_adj_start,
            adj_tunnel,
            adj_neighbor,
            names: self.names,
        }
    }
}

impl Default for ColonyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
