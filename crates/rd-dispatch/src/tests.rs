//! Unit tests for rd-dispatch.

use rd_agent::{Driver, Fleet, Passenger};
use rd_core::{DriverId, Location, PassengerId};

use crate::Dispatcher;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rider_at(fleet: &mut Fleet, name: &str, row: i64, col: i64) -> PassengerId {
    fleet
        .add_passenger(Passenger::new(name, 10, Location::new(row, col), Location::new(0, 0)))
        .unwrap()
}

fn driver_at(fleet: &mut Fleet, name: &str, row: i64, col: i64, speed: u64) -> DriverId {
    fleet.add_driver(Driver::new(name, Location::new(row, col), speed))
}

// ── request_driver ────────────────────────────────────────────────────────────

#[cfg(test)]
mod request_driver {
    use super::*;

    #[test]
    fn no_drivers_queues_passenger() {
        let mut fleet = Fleet::new();
        let p = rider_at(&mut fleet, "P1", 1, 1);
        let mut disp = Dispatcher::new(fleet);

        assert_eq!(disp.request_driver(p), None);
        assert_eq!(disp.waiting_passengers().collect::<Vec<_>>(), vec![p]);
    }

    #[test]
    fn unregistered_driver_is_not_considered() {
        let mut fleet = Fleet::new();
        driver_at(&mut fleet, "D1", 0, 0, 1);
        let p = rider_at(&mut fleet, "P1", 1, 1);
        let mut disp = Dispatcher::new(fleet);

        assert_eq!(disp.request_driver(p), None);
        assert_eq!(disp.waiting_count(), 1);
    }

    #[test]
    fn single_idle_driver_is_assigned_and_marked_busy() {
        let mut fleet = Fleet::new();
        let d = driver_at(&mut fleet, "D1", 50, 50, 1);
        let p = rider_at(&mut fleet, "P1", 0, 0);
        let mut disp = Dispatcher::new(fleet);
        disp.register(d);

        assert_eq!(disp.request_driver(p), Some(d));
        assert!(!disp.fleet().driver(d).is_idle);
        assert_eq!(disp.waiting_count(), 0);
    }

    #[test]
    fn picks_fastest_idle_driver() {
        let mut fleet = Fleet::new();
        let far = driver_at(&mut fleet, "Far", 0, 10, 1);   // 10 ticks
        let quick = driver_at(&mut fleet, "Quick", 0, 12, 4); // 12/4 = 3 ticks
        let near = driver_at(&mut fleet, "Near", 0, 5, 1);  // 5 ticks
        let p = rider_at(&mut fleet, "P1", 0, 0);
        let mut disp = Dispatcher::new(fleet);
        for d in [far, quick, near] {
            disp.register(d);
        }

        assert_eq!(disp.request_driver(p), Some(quick));
        assert!(disp.fleet().driver(far).is_idle);
        assert!(disp.fleet().driver(near).is_idle);
    }

    #[test]
    fn equidistant_tie_goes_to_first_registered() {
        let mut fleet = Fleet::new();
        let east = driver_at(&mut fleet, "East", 0, 3, 1);
        let west = driver_at(&mut fleet, "West", 0, -3, 1);
        let p = rider_at(&mut fleet, "P1", 0, 0);
        let mut disp = Dispatcher::new(fleet);
        disp.register(west);
        disp.register(east);

        assert_eq!(disp.request_driver(p), Some(west));
    }

    #[test]
    fn busy_drivers_are_skipped() {
        let mut fleet = Fleet::new();
        let d1 = driver_at(&mut fleet, "D1", 0, 0, 1);
        let d2 = driver_at(&mut fleet, "D2", 9, 9, 1);
        let p1 = rider_at(&mut fleet, "P1", 0, 1);
        let p2 = rider_at(&mut fleet, "P2", 0, 1);
        let p3 = rider_at(&mut fleet, "P3", 0, 1);
        let mut disp = Dispatcher::new(fleet);
        disp.register(d1);
        disp.register(d2);

        assert_eq!(disp.request_driver(p1), Some(d1));
        assert_eq!(disp.request_driver(p2), Some(d2));
        assert_eq!(disp.request_driver(p3), None);
        assert_eq!(disp.waiting_passengers().collect::<Vec<_>>(), vec![p3]);
    }
}

// ── request_passenger ─────────────────────────────────────────────────────────

#[cfg(test)]
mod request_passenger {
    use super::*;

    #[test]
    fn registers_driver_once() {
        let mut fleet = Fleet::new();
        let d = driver_at(&mut fleet, "D1", 0, 0, 1);
        let mut disp = Dispatcher::new(fleet);

        assert_eq!(disp.request_passenger(d), None);
        assert_eq!(disp.request_passenger(d), None);
        assert!(disp.is_registered(d));
        assert_eq!(disp.registered_drivers(), &[d]);
    }

    #[test]
    fn serves_waiting_list_fifo() {
        let mut fleet = Fleet::new();
        let d = driver_at(&mut fleet, "D1", 0, 0, 1);
        let p1 = rider_at(&mut fleet, "P1", 5, 5);
        let p2 = rider_at(&mut fleet, "P2", 1, 1);
        let mut disp = Dispatcher::new(fleet);
        disp.request_driver(p1);
        disp.request_driver(p2);

        assert_eq!(disp.request_passenger(d), Some(p1));
        assert_eq!(disp.request_passenger(d), Some(p2));
        assert_eq!(disp.request_passenger(d), None);
    }

    #[test]
    fn leaves_driver_state_alone() {
        let mut fleet = Fleet::new();
        let d = driver_at(&mut fleet, "D1", 0, 0, 1);
        let p = rider_at(&mut fleet, "P1", 5, 5);
        let mut disp = Dispatcher::new(fleet);
        disp.request_driver(p);

        assert_eq!(disp.request_passenger(d), Some(p));
        assert!(disp.fleet().driver(d).is_idle);
        assert_eq!(disp.fleet().driver(d).destination(), None);
    }

    #[test]
    fn register_reports_novelty() {
        let mut fleet = Fleet::new();
        let d = driver_at(&mut fleet, "D1", 0, 0, 1);
        let mut disp = Dispatcher::new(fleet);
        assert!(disp.register(d));
        assert!(!disp.register(d));
    }
}

// ── cancel_ride ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cancel_ride {
    use super::*;

    #[test]
    fn removes_only_that_passenger() {
        let mut fleet = Fleet::new();
        let p1 = rider_at(&mut fleet, "P1", 0, 0);
        let p2 = rider_at(&mut fleet, "P2", 0, 0);
        let p3 = rider_at(&mut fleet, "P3", 0, 0);
        let mut disp = Dispatcher::new(fleet);
        for p in [p1, p2, p3] {
            disp.request_driver(p);
        }

        disp.cancel_ride(p2);
        assert_eq!(disp.waiting_passengers().collect::<Vec<_>>(), vec![p1, p3]);
    }

    #[test]
    fn unknown_passenger_is_noop() {
        let mut fleet = Fleet::new();
        let p1 = rider_at(&mut fleet, "P1", 0, 0);
        let p2 = rider_at(&mut fleet, "P2", 0, 0);
        let mut disp = Dispatcher::new(fleet);
        disp.request_driver(p1);

        disp.cancel_ride(p2);
        disp.cancel_ride(p2);
        assert_eq!(disp.waiting_passengers().collect::<Vec<_>>(), vec![p1]);
    }
}
