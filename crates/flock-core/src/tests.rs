//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use crate::PredatorId;

    #[test]
    fn index_roundtrip() {
        let id = PredatorId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(usize::from(id), 42);
        assert_eq!(PredatorId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn predator_id_rejects_overflow() {
        assert!(PredatorId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(PredatorId(1).to_string(), "PredatorId(1)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick::ZERO), 15);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod math {
    use crate::wrap_coord;

    #[test]
    fn wraps_both_directions() {
        assert_eq!(wrap_coord(105.0, 100.0), 5.0);
        assert_eq!(wrap_coord(-5.0, 100.0), 95.0);
        assert_eq!(wrap_coord(42.0, 100.0), 42.0);
    }

    #[test]
    fn upper_bound_is_exclusive() {
        assert_eq!(wrap_coord(100.0, 100.0), 0.0);
        let tiny = wrap_coord(-1e-9, 100.0);
        assert!((0.0..100.0).contains(&tiny), "got {tiny}");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn point_in_stays_inside_domain() {
        let mut rng = SimRng::new(0);
        for _ in 0..10_000 {
            let p = rng.point_in(158.0, 96.0);
            assert!((0.0..158.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..96.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn symmetric_vec_in_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let v = rng.symmetric_vec(2.0);
            assert!((-2.0..2.0).contains(&v.x));
            assert!((-2.0..2.0).contains(&v.y));
        }
        assert_eq!(rng.symmetric_vec(0.0), glam::Vec2::ZERO);
    }
}

#[cfg(test)]
mod config {
    use crate::{BoundaryConfig, FlockConfig, FlockError, Placement, PredatorConfig};

    fn expect_config_err(cfg: &FlockConfig) {
        match cfg.validate() {
            Err(FlockError::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn presets_validate() {
        FlockConfig::default().validate().unwrap();
        FlockConfig::contained().validate().unwrap();
    }

    #[test]
    fn rejects_non_positive_domain() {
        expect_config_err(&FlockConfig::default().with_domain(0.0, 10.0));
        expect_config_err(&FlockConfig::default().with_domain(10.0, -1.0));
        expect_config_err(&FlockConfig::default().with_domain(f32::NAN, 10.0));
    }

    #[test]
    fn rejects_zero_agents() {
        let cfg = FlockConfig { agent_count: 0, ..FlockConfig::default() };
        expect_config_err(&cfg);
    }

    #[test]
    fn default_cell_size_is_largest_radius() {
        let mut cfg = FlockConfig::default();
        cfg.rules.alignment_radius = 14.0;
        assert_eq!(cfg.cell_size(), 14.0);
    }

    #[test]
    fn rejects_cell_smaller_than_radius() {
        let cfg = FlockConfig { cell_size: Some(5.0), ..FlockConfig::default() };
        expect_config_err(&cfg);
    }

    #[test]
    fn rejects_inverted_speed_limits() {
        let mut cfg = FlockConfig::default();
        cfg.rules.min_speed = 3.0;
        expect_config_err(&cfg);
    }

    #[test]
    fn rejects_bad_circle_buffer() {
        let mut cfg = FlockConfig::contained();
        cfg.boundary = BoundaryConfig::CircularContain { radius: Some(10.0), buffer: 20.0, weight: 0.1 };
        expect_config_err(&cfg);
        cfg.boundary = BoundaryConfig::CircularContain { radius: Some(10.0), buffer: 0.0, weight: 0.1 };
        expect_config_err(&cfg);
    }

    #[test]
    fn circle_radius_defaults_to_half_short_side() {
        let b = BoundaryConfig::CircularContain { radius: None, buffer: 1.0, weight: 1.0 };
        assert_eq!(b.circle_radius(200.0, 100.0), Some(50.0));
        assert_eq!(BoundaryConfig::default().circle_radius(200.0, 100.0), None);
    }

    #[test]
    fn rejects_bad_predator_params() {
        let mut cfg = FlockConfig::default();
        cfg.predators = vec![PredatorConfig { smoothing: 1.5, ..PredatorConfig::default() }];
        expect_config_err(&cfg);

        cfg.predators = vec![PredatorConfig {
            placement: Placement::At { x: 1_000.0, y: 1.0 },
            ..PredatorConfig::default()
        }];
        expect_config_err(&cfg);
    }

    #[test]
    fn placement_resolution() {
        assert_eq!(
            Placement::Center.fixed_point(100.0, 50.0),
            Some(glam::Vec2::new(50.0, 25.0))
        );
        assert_eq!(Placement::Random.fixed_point(100.0, 50.0), None);
        assert_eq!(
            Placement::At { x: 3.0, y: 4.0 }.fixed_point(100.0, 50.0),
            Some(glam::Vec2::new(3.0, 4.0))
        );
    }
}
