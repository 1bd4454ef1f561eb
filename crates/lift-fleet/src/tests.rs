//! Unit tests for lift-fleet.

#[cfg(test)]
mod lift_tests {
    use lift_core::{Direction, Floor, LiftId, Tick};

    use crate::{Lift, Transit};

    #[test]
    fn new_lift_is_idle_on_ground_floor() {
        let lift = Lift::new(LiftId(0));
        assert_eq!(lift.current_floor(), Floor(1));
        assert_eq!(lift.direction(), Direction::Idle);
        assert!(!lift.is_moving());
        assert!(lift.queue().is_empty());
        assert!(lift.is_available());
    }

    #[test]
    fn queue_is_fifo_and_keeps_duplicates() {
        let mut lift = Lift::new(LiftId(0));
        lift.push_stop(Floor(3));
        lift.push_stop(Floor(3));
        lift.push_stop(Floor(2));
        assert!(!lift.is_available());
        assert_eq!(lift.pop_stop(), Some(Floor(3)));
        assert_eq!(lift.pop_stop(), Some(Floor(3)));
        assert_eq!(lift.pop_stop(), Some(Floor(2)));
        assert_eq!(lift.pop_stop(), None);
    }

    #[test]
    fn start_transit_moves_floor_immediately() {
        let mut lift = Lift::new(LiftId(0));
        lift.start_transit(Transit::new(Floor(1), Floor(6), Tick(0), Tick(9)));
        assert_eq!(lift.current_floor(), Floor(6));
        assert_eq!(lift.direction(), Direction::Up);
        assert!(lift.is_moving());
        assert!(!lift.is_available());
    }

    #[test]
    fn clear_transit_returns_to_idle_in_place() {
        let mut lift = Lift::at(LiftId(0), Floor(5));
        lift.start_transit(Transit::new(Floor(5), Floor(2), Tick(0), Tick(9)));
        let done = lift.clear_transit().unwrap();
        assert_eq!(done.to, Floor(2));
        assert_eq!(done.direction, Direction::Down);
        assert_eq!(lift.current_floor(), Floor(2));
        assert_eq!(lift.direction(), Direction::Idle);
        assert!(lift.clear_transit().is_none());
    }

    #[test]
    fn transit_progress() {
        let t = Transit::new(Floor(1), Floor(4), Tick(10), Tick(20));
        assert_eq!(t.progress(Tick(10)), 0.0);
        assert!((t.progress(Tick(15)) - 0.5).abs() < 1e-6);
        assert_eq!(t.progress(Tick(25)), 1.0);
        assert_eq!(t.progress(Tick(5)), 0.0);
    }

    #[test]
    fn snapshot_copies_fields() {
        let mut lift = Lift::new(LiftId(1));
        lift.push_stop(Floor(4));
        lift.push_stop(Floor(7));
        let snap = lift.snapshot();
        assert_eq!(snap.id, LiftId(1));
        assert_eq!(snap.request_queue, vec![Floor(4), Floor(7)]);
        assert!(!snap.is_moving);
        assert_eq!(snap.direction, Direction::Idle);
        assert!(snap.transit.is_none());

        // Later mutation does not reach the copy.
        lift.pop_stop();
        assert_eq!(snap.request_queue.len(), 2);
    }
}

#[cfg(test)]
mod store_tests {
    use lift_core::{Floor, LiftError, LiftId, Tick};

    use crate::{FleetBuilder, FleetStore, Transit};

    #[test]
    fn new_store_has_ordered_ids() {
        let store = FleetStore::new(3);
        let ids: Vec<_> = store.lift_ids().collect();
        assert_eq!(ids, [LiftId(0), LiftId(1), LiftId(2)]);
        assert_eq!(store.first().unwrap().id(), LiftId(0));
        assert!(store.is_quiescent());
    }

    #[test]
    fn unknown_lift_is_internal_inconsistency() {
        let mut store = FleetStore::new(2);
        assert_eq!(store.get(LiftId(2)).unwrap_err(), LiftError::InternalInconsistency(LiftId(2)));
        assert!(store.get_mut(LiftId(9)).is_err());
    }

    #[test]
    fn mutating_one_lift_leaves_others_alone() {
        let mut store = FleetStore::new(2);
        store.get_mut(LiftId(1)).unwrap().push_stop(Floor(5));
        assert!(store.get(LiftId(0)).unwrap().queue().is_empty());
        assert_eq!(store.get(LiftId(1)).unwrap().queue().len(), 1);
        assert!(!store.is_quiescent());
    }

    #[test]
    fn builder_places_lifts() {
        let store = FleetBuilder::new(2)
            .initial_floors(vec![Floor(4), Floor(9)])
            .build()
            .unwrap();
        assert_eq!(store.get(LiftId(0)).unwrap().current_floor(), Floor(4));
        assert_eq!(store.get(LiftId(1)).unwrap().current_floor(), Floor(9));
    }

    #[test]
    fn builder_rejects_bad_input() {
        assert!(FleetBuilder::new(0).build().is_err());
        assert!(FleetBuilder::new(2).initial_floors(vec![Floor(1)]).build().is_err());
    }

    #[test]
    fn snapshot_is_repeatable() {
        let mut store = FleetStore::new(2);
        store
            .get_mut(LiftId(0))
            .unwrap()
            .start_transit(Transit::new(Floor(1), Floor(3), Tick(0), Tick(9)));
        let a = store.snapshot(Tick(4), 8);
        let b = store.snapshot(Tick(4), 8);
        assert_eq!(a, b);
        assert_eq!(a.total_floors, 8);
        assert_eq!(a.lifts.len(), 2);
    }
}

#[cfg(test)]
mod snapshot_tests {
    use lift_core::{Floor, LiftId, Tick};

    use crate::FleetStore;

    #[test]
    fn floor_active_when_occupied_or_queued() {
        let mut store = FleetStore::new(2);
        store.get_mut(LiftId(1)).unwrap().push_stop(Floor(6));
        let snap = store.snapshot(Tick(0), 8);
        assert!(snap.is_floor_active(Floor(1)));
        assert!(snap.is_floor_active(Floor(6)));
        assert!(!snap.is_floor_active(Floor(7)));
        assert!(!snap.is_idle());
    }

    #[test]
    fn lift_lookup() {
        let store = FleetStore::new(2);
        let snap = store.snapshot(Tick(0), 8);
        assert_eq!(snap.lift(LiftId(1)).unwrap().id, LiftId(1));
        assert!(snap.lift(LiftId(2)).is_none());
        assert!(snap.is_idle());
    }
}
