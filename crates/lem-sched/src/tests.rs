//! Unit tests for lem-sched.

use lem_colony::{Colony, ColonyBuilder, DistanceFinder, DistanceMap, HeapDistanceFinder};
use lem_core::{AntId, RoomId, ScheduleConfig};

use crate::{Schedule, SchedulerBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn colony(rooms: &[&str], links: &[(&str, &str)]) -> Colony {
    let mut b = ColonyBuilder::new();
    for (i, name) in rooms.iter().enumerate() {
        b.add_room(name, i as i64, 0).unwrap();
    }
    for (a, c) in links {
        b.link(a, c).unwrap();
    }
    b.build()
}

fn id(colony: &Colony, name: &str) -> RoomId {
    colony.room_id(name).unwrap()
}

/// Hop counts to `end`, as the driver computes them.
fn labels_to_end(colony: &Colony, start: &str, end: &str) -> DistanceMap {
    HeapDistanceFinder
        .distances(colony, id(colony, end), id(colony, start))
        .unwrap()
}

/// Schedule `ants` from `start` to `end` with the default order.
fn schedule(colony: &Colony, ants: usize, start: &str, end: &str) -> Schedule {
    let labels = labels_to_end(colony, start, end);
    SchedulerBuilder::new(ScheduleConfig::default(), colony, &labels)
        .ants(ants)
        .terminals(id(colony, start), id(colony, end))
        .build()
        .unwrap()
        .run(&mut crate::NoopObserver)
        .unwrap()
}

/// Render rounds as `L<ant>-<room>` lines for compact assertions.
fn lines(colony: &Colony, schedule: &Schedule) -> Vec<String> {
    schedule
        .rounds
        .iter()
        .map(|r| {
            r.moves
                .iter()
                .map(|m| format!("L{}-{}", m.ant.0, colony.room_name(m.room)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::ScheduleError;

    #[test]
    fn builds_with_all_ants_at_start() {
        let c = colony(&["s", "e"], &[("s", "e")]);
        let labels = labels_to_end(&c, "s", "e");
        let sched = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(4)
            .terminals(id(&c, "s"), id(&c, "e"))
            .build()
            .unwrap();
        assert_eq!(sched.ants.count(), 4);
        assert_eq!(sched.occupancy.count(id(&c, "s")), 4);
        assert_eq!(sched.occupancy.count(id(&c, "e")), 0);
        assert_eq!(sched.remaining(), 4);
        assert!(sched.ants.ids().all(|a| sched.ants.room(a) == id(&c, "s")));
    }

    #[test]
    fn missing_start_errors() {
        let c = colony(&["s", "e"], &[("s", "e")]);
        let labels = labels_to_end(&c, "s", "e");
        let result = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(1)
            .end(id(&c, "e"))
            .build();
        assert!(matches!(result, Err(ScheduleError::MissingTerminal("start"))));
    }

    #[test]
    fn missing_end_errors() {
        let c = colony(&["s", "e"], &[("s", "e")]);
        let labels = labels_to_end(&c, "s", "e");
        let result = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .start(id(&c, "s"))
            .build();
        assert!(matches!(result, Err(ScheduleError::MissingTerminal("end"))));
    }

    #[test]
    fn out_of_range_terminal_errors() {
        let c = colony(&["s", "e"], &[("s", "e")]);
        let labels = labels_to_end(&c, "s", "e");
        let result = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .terminals(RoomId(0), RoomId(9))
            .build();
        assert!(matches!(result, Err(ScheduleError::Core(_))));
    }

    #[test]
    fn label_count_mismatch_errors() {
        let c = colony(&["s", "e"], &[("s", "e")]);
        let labels = DistanceMap::from_labels(RoomId(1), [Some(1)]);
        let result = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .terminals(id(&c, "s"), id(&c, "e"))
            .build();
        assert!(matches!(
            result,
            Err(ScheduleError::LabelMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn start_rooted_labels_rejected() {
        // Hop counts from start would steer ants back once start empties.
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let from_start = HeapDistanceFinder
            .distances(&c, id(&c, "start"), id(&c, "end"))
            .unwrap();
        let result = SchedulerBuilder::new(ScheduleConfig::default(), &c, &from_start)
            .ants(3)
            .terminals(id(&c, "start"), id(&c, "end"))
            .build();
        assert!(matches!(
            result,
            Err(ScheduleError::LabelRoot { expected, got })
                if expected == id(&c, "end") && got == id(&c, "start")
        ));
    }

    #[test]
    fn zero_round_limit_rejected() {
        let c = colony(&["s", "e"], &[("s", "e")]);
        let labels = labels_to_end(&c, "s", "e");
        let config = ScheduleConfig { max_rounds: Some(0), ..Default::default() };
        let result = SchedulerBuilder::new(config, &c, &labels)
            .terminals(id(&c, "s"), id(&c, "e"))
            .build();
        assert!(matches!(result, Err(ScheduleError::Core(_))));
    }
}

// ── Documented scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn single_corridor_three_ants() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);

        // Start-rooted labels, as the finder reports them.
        let forward = HeapDistanceFinder
            .distances(&c, id(&c, "start"), id(&c, "end"))
            .unwrap();
        assert_eq!(forward.get(id(&c, "start")), Some(0));
        assert_eq!(forward.get(id(&c, "A")), Some(1));
        assert_eq!(forward.get(id(&c, "end")), Some(2));

        let s = schedule(&c, 3, "start", "end");
        assert_eq!(lines(&c, &s), ["L1-A", "L1-end L2-A", "L2-end L3-A", "L3-end"]);
        assert_eq!(s.round_count(), 4);
    }

    #[test]
    fn direct_tunnel_delivers_everyone_in_one_round() {
        let c = colony(&["start", "end"], &[("start", "end")]);
        let s = schedule(&c, 5, "start", "end");
        assert_eq!(lines(&c, &s), ["L1-end L2-end L3-end L4-end L5-end"]);
    }

    #[test]
    fn self_loop_on_only_path_is_ignored() {
        let c = colony(
            &["start", "A", "end"],
            &[("start", "A"), ("A", "A"), ("A", "end")],
        );
        let s = schedule(&c, 3, "start", "end");
        assert_eq!(lines(&c, &s), ["L1-A", "L1-end L2-A", "L2-end L3-A", "L3-end"]);
    }

    #[test]
    fn zero_ants_need_zero_rounds() {
        let c = colony(&["s", "e"], &[("s", "e")]);
        let s = schedule(&c, 0, "s", "e");
        assert_eq!(s.round_count(), 0);
        assert!(s.paths.is_empty());
    }

    #[test]
    fn start_equal_to_end_needs_zero_rounds() {
        let c = colony(&["home"], &[]);
        let s = schedule(&c, 3, "home", "home");
        assert_eq!(s.round_count(), 0);
        assert!(s.paths.iter().all(|p| p == &[id(&c, "home")]));
    }

    /// Rooms 0..7 with start 1 and end 0 (first worked example).
    #[test]
    fn eight_room_example() {
        let c = colony(
            &["1", "2", "3", "4", "5", "6", "7", "0"],
            &[
                ("0", "4"), ("0", "6"), ("1", "3"), ("4", "3"), ("5", "2"), ("3", "5"),
                ("4", "2"), ("2", "1"), ("7", "6"), ("7", "2"), ("7", "4"), ("6", "5"),
            ],
        );
        let s = schedule(&c, 3, "1", "0");
        assert_eq!(
            lines(&c, &s),
            ["L1-3 L2-2", "L1-4 L2-5 L3-3", "L1-0 L2-6 L3-4", "L2-0 L3-0"],
        );
    }

    /// A four-room corridor (second worked example).
    #[test]
    fn corridor_example() {
        let c = colony(&["0", "1", "2", "3"], &[("0", "2"), ("2", "3"), ("3", "1")]);
        let s = schedule(&c, 3, "0", "1");
        assert_eq!(
            lines(&c, &s),
            ["L1-2", "L1-3 L2-2", "L1-1 L2-3 L3-2", "L2-1 L3-3", "L3-1"],
        );
    }

    /// Two parallel branches (third worked example).
    #[test]
    fn two_branch_example() {
        let c = colony(
            &["2", "0", "1", "3"],
            &[("0", "2"), ("0", "3"), ("2", "1"), ("3", "1"), ("2", "3")],
        );
        let s = schedule(&c, 3, "0", "1");
        assert_eq!(lines(&c, &s), ["L1-2 L2-3", "L1-1 L2-1 L3-2", "L3-1"]);
    }
}

// ── Failure modes ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod failures {
    use super::*;
    use crate::{NoopObserver, ScheduleError};
    use lem_core::{Round, RoundLimit};

    #[test]
    fn unlabelled_corridor_stalls() {
        // A path exists, but the middle room carries no label.
        let c = colony(&["s", "m", "e"], &[("s", "m"), ("m", "e")]);
        let labels = DistanceMap::from_labels(id(&c, "e"), [Some(2), None, Some(0)]);
        let mut sched = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(2)
            .terminals(id(&c, "s"), id(&c, "e"))
            .build()
            .unwrap();
        let err = sched.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Stalled { round: Round(1), remaining: 2 }
        ));
    }

    #[test]
    fn explicit_limit_too_small() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let labels = labels_to_end(&c, "start", "end");
        let config = ScheduleConfig { max_rounds: Some(2), ..Default::default() };
        let mut sched = SchedulerBuilder::new(config, &c, &labels)
            .ants(3)
            .terminals(id(&c, "start"), id(&c, "end"))
            .build()
            .unwrap();
        let err = sched.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::RoundLimitExceeded { limit: RoundLimit(2) }
        ));
        // The two rounds that ran are still recorded.
        assert_eq!(sched.schedule().round_count(), 2);
    }

    #[test]
    fn cyclic_labels_hit_derived_limit() {
        // Labels that make a lone ant shuttle between a and b forever.
        let c = colony(
            &["s", "a", "b", "e"],
            &[("s", "a"), ("a", "b"), ("b", "e")],
        );
        let labels = DistanceMap::from_labels(id(&c, "e"), [Some(5), Some(1), Some(1), None]);
        let mut sched = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(1)
            .terminals(id(&c, "s"), id(&c, "e"))
            .build()
            .unwrap();
        let err = sched.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::RoundLimitExceeded { limit } if limit == RoundLimit::derived(1, 4)
        ));
    }
}

// ── Evaluation order ──────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use std::cmp::Ordering;

    use super::*;
    use crate::{DescendingId, EvaluationOrder, NoopObserver};

    #[test]
    fn descending_order_changes_contention_winner() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let labels = labels_to_end(&c, "start", "end");
        let s = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(3)
            .terminals(id(&c, "start"), id(&c, "end"))
            .order(DescendingId)
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        // Moves are still listed by ascending ant within each round.
        assert_eq!(lines(&c, &s), ["L3-A", "L2-A L3-end", "L1-A L2-end", "L1-end"]);
    }

    #[test]
    fn closure_order_is_accepted() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let labels = labels_to_end(&c, "start", "end");
        // Even ants first, then odd.
        let evens_first = |a: AntId, b: AntId| {
            (a.0 % 2, a.0).cmp(&(b.0 % 2, b.0))
        };
        let mut sched = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(3)
            .terminals(id(&c, "start"), id(&c, "end"))
            .order(evens_first)
            .build()
            .unwrap();
        assert_eq!(sched.order().compare(AntId(2), AntId(1)), Ordering::Less);
        let first = sched.step().unwrap().unwrap();
        assert_eq!(first.moves[0].ant, AntId(2));
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{RoundMoves, RoundObserver};
    use lem_core::Round;

    #[derive(Default)]
    struct Recorder {
        starts:  usize,
        ends:    Vec<usize>,
        last:    Option<Round>,
    }

    impl RoundObserver for Recorder {
        fn on_round_start(&mut self, _round: Round) { self.starts += 1; }
        fn on_round_end(&mut self, moves: &RoundMoves, _colony: &Colony) {
            self.ends.push(moves.moves.len());
        }
        fn on_schedule_end(&mut self, last: Round) { self.last = Some(last); }
    }

    #[test]
    fn hooks_fire_once_per_round() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let labels = labels_to_end(&c, "start", "end");
        let mut rec = Recorder::default();
        SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(3)
            .terminals(id(&c, "start"), id(&c, "end"))
            .build()
            .unwrap()
            .run(&mut rec)
            .unwrap();
        assert_eq!(rec.starts, 4);
        assert_eq!(rec.ends, [1, 2, 2, 1]);
        assert_eq!(rec.last, Some(Round(4)));
    }

    #[test]
    fn no_round_start_past_the_limit() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let labels = labels_to_end(&c, "start", "end");
        let config = ScheduleConfig { max_rounds: Some(2), ..Default::default() };
        let mut rec = Recorder::default();
        let result = SchedulerBuilder::new(config, &c, &labels)
            .ants(3)
            .terminals(id(&c, "start"), id(&c, "end"))
            .build()
            .unwrap()
            .run(&mut rec);
        assert!(matches!(result, Err(crate::ScheduleError::RoundLimitExceeded { .. })));
        assert_eq!(rec.starts, 2);
        assert_eq!(rec.ends, [1, 2]);
        assert_eq!(rec.last, Some(Round(2)));
    }

    #[test]
    fn schedule_end_fires_on_failure() {
        let c = colony(&["s", "m", "e"], &[("s", "m"), ("m", "e")]);
        let labels = DistanceMap::from_labels(id(&c, "e"), [Some(2), None, Some(0)]);
        let mut rec = Recorder::default();
        let result = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(1)
            .terminals(id(&c, "s"), id(&c, "e"))
            .build()
            .unwrap()
            .run(&mut rec);
        assert!(result.is_err());
        assert_eq!(rec.last, Some(Round::ZERO));
        assert!(rec.ends.is_empty());
    }
}

// ── Path recording ────────────────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use super::*;
    use crate::NoopObserver;

    #[test]
    fn paths_follow_the_corridor() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let s = schedule(&c, 2, "start", "end");
        let expected = [id(&c, "start"), id(&c, "A"), id(&c, "end")];
        assert_eq!(s.path(AntId(1)), expected);
        assert_eq!(s.path(AntId(2)), expected);
        assert_eq!(s.move_count(), 4);
    }

    #[test]
    fn run_moves_the_record_out() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let labels = labels_to_end(&c, "start", "end");
        let mut sched = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
            .ants(2)
            .terminals(id(&c, "start"), id(&c, "end"))
            .build()
            .unwrap();
        let s = sched.run(&mut NoopObserver).unwrap();
        assert_eq!(s.round_count(), 3);
        assert_eq!(s.paths.len(), 2);

        let left = sched.schedule();
        assert!(left.rounds.is_empty());
        assert!(left.paths.is_empty());
        assert!(sched.is_complete());
    }

    #[test]
    fn disabled_recording_keeps_final_room_only() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let labels = labels_to_end(&c, "start", "end");
        let config = ScheduleConfig { record_paths: false, ..Default::default() };
        let s = SchedulerBuilder::new(config, &c, &labels)
            .ants(2)
            .terminals(id(&c, "start"), id(&c, "end"))
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        assert_eq!(s.path(AntId(1)), [id(&c, "end")]);
        assert_eq!(s.round_count(), 3);
    }
}

// ── Randomised invariants ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use std::collections::HashSet;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::NoopObserver;
    use lem_colony::shortest_distances;

    fn random_colony(rng: &mut SmallRng, rooms: usize) -> Colony {
        let mut b = ColonyBuilder::new();
        for i in 0..rooms {
            b.add_room(&format!("r{i}"), i as i64, 0).unwrap();
        }
        for i in 0..rooms {
            for j in i..rooms {
                if rng.gen_bool(0.3) {
                    b.add_tunnel(RoomId(i as u32), RoomId(j as u32)).unwrap();
                }
            }
        }
        b.build()
    }

    /// Only connected start/end pairs are scheduled, as the driver does.
    fn cases() -> Vec<(Colony, RoomId, RoomId, usize)> {
        let mut rng = SmallRng::seed_from_u64(0xa17_5c4e);
        let mut out = Vec::new();
        while out.len() < 150 {
            let rooms = rng.gen_range(2..10);
            let c = random_colony(&mut rng, rooms);
            let s = RoomId(rng.gen_range(0..rooms) as u32);
            let e = RoomId(rng.gen_range(0..rooms) as u32);
            if s == e || !shortest_distances(&c, s, e).unwrap().1 {
                continue;
            }
            let ants = rng.gen_range(1..7);
            out.push((c, s, e, ants));
        }
        out
    }

    #[test]
    fn capacity_and_delivery_hold_every_round() {
        for (c, s, e, ants) in cases() {
            let labels = HeapDistanceFinder.distances(&c, e, s).unwrap();
            let mut sched = SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
                .ants(ants)
                .terminals(s, e)
                .build()
                .unwrap();

            while let Some(round) = sched.step().unwrap() {
                // No two ants enter the same non-end room in one round.
                let mut targets = HashSet::new();
                for m in &round.moves {
                    if m.room != e {
                        assert!(targets.insert(m.room), "room {} entered twice", m.room);
                    }
                }
                assert!(sched.occupancy.overfull_rooms().next().is_none());
            }

            let schedule = sched.schedule();
            for ant in sched.ants.ids() {
                let path = schedule.path(ant);
                assert_eq!(path.first(), Some(&s));
                assert_eq!(path.last(), Some(&e));
                let moves = schedule
                    .rounds
                    .iter()
                    .flat_map(|r| &r.moves)
                    .filter(|m| m.ant == ant)
                    .count();
                assert_eq!(moves, path.len() - 1);
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_schedules() {
        for (c, s, e, ants) in cases().into_iter().take(40) {
            let labels = HeapDistanceFinder.distances(&c, e, s).unwrap();
            let run = || {
                SchedulerBuilder::new(ScheduleConfig::default(), &c, &labels)
                    .ants(ants)
                    .terminals(s, e)
                    .build()
                    .unwrap()
                    .run(&mut NoopObserver)
                    .unwrap()
            };
            assert_eq!(run(), run());
        }
    }
}
