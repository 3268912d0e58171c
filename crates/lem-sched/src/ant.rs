//! Per-ant position and path history.

use lem_core::{AntId, RoomId};

/// Position of every ant, indexed by `AntId::slot()`.
///
/// Paths always begin with the start room.  With `record_paths` off, each
/// path is kept at length one and simply tracks the current room.
pub struct AntStore {
    /// Current room of each ant.
    pub rooms: Vec<RoomId>,

    /// Rooms visited by each ant, in order.
    pub paths: Vec<Vec<RoomId>>,

    record_paths: bool,
}

impl AntStore {
    /// Place `count` ants at `start`.
    pub fn new(count: usize, start: RoomId, record_paths: bool) -> Self {
        Self {
            rooms: vec![start; count],
            paths: vec![vec![start]; count],
            record_paths,
        }
    }

    pub fn count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[inline]
    pub fn room(&self, ant: AntId) -> RoomId {
        self.rooms[ant.slot()]
    }

    pub fn path(&self, ant: AntId) -> &[RoomId] {
        &self.paths[ant.slot()]
    }

    /// All ant ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = AntId> + use<> {
        (0..self.rooms.len()).map(AntId::from_slot)
    }

    /// Record that `ant` stepped into `room`.
    pub fn move_to(&mut self, ant: AntId, room: RoomId) {
        let slot = ant.slot();
        self.rooms[slot] = room;
        if self.record_paths {
            self.paths[slot].push(room);
        } else {
            self.paths[slot][0] = room;
        }
    }
}
