//! Unit tests for rw-core primitives.

#[cfg(test)]
mod ids {
    use crate::CityId;

    #[test]
    fn index_roundtrip() {
        let id = CityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(CityId::default(), CityId::INVALID);
        assert_eq!(CityId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(CityId(7).to_string(), "CityId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn three_four_five() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn zero_iff_same_point() {
        let p = Point::new(2.5, 7.0);
        assert_eq!(p.distance_to(p), 0.0);
        assert!(p.distance_to(Point::new(2.5, 7.000_001)) > 0.0);
    }

    #[test]
    fn diagonal_is_sqrt_two() {
        let a = Point::new(0.0, 1.0);
        let c = Point::new(1.0, 0.0);
        assert_eq!(a.distance_to(c), 2.0f64.sqrt());
    }

    #[test]
    fn plane_bounds() {
        assert!(Point::new(0.0, 0.0).is_on_plane());
        assert!(!Point::new(-1.0, 0.0).is_on_plane());
        assert!(!Point::new(0.0, -1.0).is_on_plane());
        assert!(!Point::new(f64::NAN, 1.0).is_on_plane());
        assert!(!Point::new(1.0, f64::INFINITY).is_on_plane());
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, WalkConfig, WalkLimits};

    #[test]
    fn default_is_valid() {
        assert!(WalkConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_neighbours_rejected() {
        let cfg = WalkConfig { neighbours: 0, ..WalkConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn nan_cap_rejected() {
        let cfg = WalkConfig { distance_cap: f64::NAN, ..WalkConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_step_budget_rejected() {
        let cfg = WalkConfig { max_steps: Some(0), ..WalkConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn limits_follow_config() {
        let cfg = WalkConfig {
            neighbours:   3,
            distance_cap: 12.5,
            max_steps:    Some(100),
            seed:         Some(9),
        };
        let limits = cfg.limits();
        assert_eq!(limits.distance_cap, 12.5);
        assert_eq!(limits.max_steps, Some(100));
    }

    #[test]
    fn non_positive_cap_is_unlimited() {
        assert!(!WalkLimits::capped(0.0).distance_exceeded(1e12));
        assert!(!WalkLimits::capped(-5.0).distance_exceeded(1e12));
        assert!(WalkLimits::capped(2.0).distance_exceeded(2.5));
        assert!(!WalkLimits::capped(2.0).distance_exceeded(2.0));
    }

    #[test]
    fn step_budget() {
        let limits = WalkLimits { distance_cap: 0.0, max_steps: Some(3) };
        assert!(!limits.steps_exhausted(2));
        assert!(limits.steps_exhausted(3));
        assert!(!WalkLimits::UNLIMITED.steps_exhausted(u64::MAX));
    }
}

#[cfg(test)]
mod rng {
    use crate::{StepPicker, WalkConfig, WalkRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = WalkRng::new(12345);
        let mut r2 = WalkRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.pick(17), r2.pick(17));
        }
    }

    #[test]
    fn pick_in_bounds() {
        let mut rng = WalkRng::new(0);
        for len in 1..50 {
            for _ in 0..20 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn single_choice_is_zero() {
        let mut rng = WalkRng::new(7);
        assert_eq!(rng.pick(1), 0);
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let cfg = WalkConfig { seed: Some(42), ..WalkConfig::default() };
        let mut a = cfg.make_rng();
        let mut b = cfg.make_rng();
        let xs: Vec<usize> = (0..32).map(|_| a.pick(1000)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.pick(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn children_diverge() {
        let mut root = WalkRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: Vec<usize> = (0..16).map(|_| c0.pick(1 << 20)).collect();
        let b: Vec<usize> = (0..16).map(|_| c1.pick(1 << 20)).collect();
        assert_ne!(a, b);
    }
}
