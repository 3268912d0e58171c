//! Ant evaluation order within a round.
//!
//! Ants are evaluated one at a time and occupancy is updated immediately, so
//! this order decides which ant wins when two contend for the same room.
//! The scheduler sorts the ant list once with the policy's comparator and
//! uses that order for every round.

use std::cmp::Ordering;

use lem_core::AntId;

/// Comparator defining the per-round evaluation order.
///
/// Any `Fn(AntId, AntId) -> Ordering` closure is also a policy.
pub trait EvaluationOrder {
    fn compare(&self, a: AntId, b: AntId) -> Ordering;
}

/// Lowest ant number first.  The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AscendingId;

impl EvaluationOrder for AscendingId {
    #[inline]
    fn compare(&self, a: AntId, b: AntId) -> Ordering {
        a.cmp(&b)
    }
}

/// Highest ant number first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescendingId;

impl EvaluationOrder for DescendingId {
    #[inline]
    fn compare(&self, a: AntId, b: AntId) -> Ordering {
        b.cmp(&a)
    }
}

impl<F> EvaluationOrder for F
where
    F: Fn(AntId, AntId) -> Ordering,
{
    fn compare(&self, a: AntId, b: AntId) -> Ordering {
        self(a, b)
    }
}
