//! Room occupancy table.

use lem_core::RoomId;

/// Number of ants in each room, indexed by `RoomId`.
///
/// The end room is always free; start is free only once it is empty.  Every
/// other room holds at most one ant, which [`overfull_rooms`] checks.
///
/// [`overfull_rooms`]: Occupancy::overfull_rooms
pub struct Occupancy {
    counts: Vec<u32>,
    start:  RoomId,
    end:    RoomId,
}

impl Occupancy {
    /// All `ants` at `start`, every other room empty.
    pub fn new(room_count: usize, start: RoomId, end: RoomId, ants: usize) -> Self {
        let mut counts = vec![0u32; room_count];
        counts[start.index()] = ants as u32;
        Self { counts, start, end }
    }

    #[inline]
    pub fn count(&self, room: RoomId) -> u32 {
        self.counts[room.index()]
    }

    /// `true` if an ant may step into `room` now.
    #[inline]
    pub fn is_free(&self, room: RoomId) -> bool {
        room == self.end || self.counts[room.index()] == 0
    }

    /// Move one ant from `from` to `to`.
    #[inline]
    pub fn transfer(&mut self, from: RoomId, to: RoomId) {
        debug_assert!(self.counts[from.index()] > 0, "no ant to move out of {from}");
        self.counts[from.index()] -= 1;
        self.counts[to.index()] += 1;
    }

    /// Rooms other than start and end holding more than one ant.
    pub fn overfull_rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &n)| (RoomId(i as u32), n))
            .filter(|&(room, n)| n > 1 && room != self.start && room != self.end)
            .map(|(room, _)| room)
    }
}
