//! Integration-style unit tests for flock-sim.

#[cfg(test)]
mod helpers {
    use flock_core::{BoundaryConfig, FlockConfig, RuleConfig};

    /// A 100×100 wrap domain with every interaction switched off.
    pub fn quiet_config(agent_count: usize) -> FlockConfig {
        FlockConfig {
            width: 100.0,
            height: 100.0,
            agent_count,
            rules: RuleConfig {
                cohesion_radius:   0.0,
                alignment_radius:  0.0,
                separation_radius: 0.0,
                cohesion_weight:   0.0,
                alignment_weight:  0.0,
                separation_weight: 0.0,
                predator_radius:   0.0,
                predator_weight:   0.0,
                ..RuleConfig::default()
            },
            cell_size: Some(10.0),
            boundary: BoundaryConfig::Wrap { repel_radius: 0.0, weight: 0.0 },
            predators: Vec::new(),
            ..FlockConfig::default()
        }
    }
}

#[cfg(test)]
mod builder {
    use flock_core::{BoundaryConfig, FlockConfig, Placement, PredatorConfig, SimRng, Vec2};

    use super::helpers::quiet_config;
    use crate::{SimBuilder, SimError};

    #[test]
    fn presets_build() {
        let sim = SimBuilder::new(FlockConfig::default()).build().unwrap();
        assert_eq!(sim.positions().len(), 200);
        assert_eq!(sim.velocities().len(), 200);
        assert_eq!(sim.predators().len(), 1);
        assert_eq!(sim.predators()[0].position, Vec2::new(79.0, 48.0));
        assert_eq!(sim.current_tick().0, 0);

        let contained = SimBuilder::new(FlockConfig::contained()).build().unwrap();
        assert_eq!(contained.predators().len(), 2);
        assert!(!contained.boundary().is_wrap());
        assert!(contained.predator(flock_core::PredatorId(1)).is_some());
        assert!(contained.predator(flock_core::PredatorId(2)).is_none());
    }

    #[test]
    fn initial_state_respects_domain_and_speed() {
        let cfg = FlockConfig { seed: 3, ..FlockConfig::default() };
        let sim = SimBuilder::new(cfg.clone()).build().unwrap();
        for p in sim.positions() {
            assert!((0.0..cfg.width).contains(&p.x) && (0.0..cfg.height).contains(&p.y), "p = {p}");
        }
        for v in sim.velocities() {
            assert!(v.x.abs() <= cfg.initial_speed && v.y.abs() <= cfg.initial_speed, "v = {v}");
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = FlockConfig { agent_count: 0, ..FlockConfig::default() };
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_wrong_length_inputs() {
        let result = SimBuilder::new(quiet_config(3)).positions(vec![Vec2::ZERO; 2]).build();
        match result {
            Err(SimError::AgentCountMismatch { expected: 3, got: 2, .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("length mismatch accepted"),
        }
        let result = SimBuilder::new(quiet_config(3)).velocities(vec![Vec2::ZERO; 4]).build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { got: 4, .. })));
    }

    #[test]
    fn seed_draws_boids_then_predators_in_order() {
        let mut cfg = FlockConfig { agent_count: 5, seed: 21, ..FlockConfig::default() };
        cfg.predators = vec![PredatorConfig { placement: Placement::Random, ..PredatorConfig::default() }];
        let sim = SimBuilder::new(cfg.clone()).build().unwrap();

        let mut rng = SimRng::new(cfg.seed);
        let positions: Vec<Vec2> = (0..5).map(|_| rng.point_in(cfg.width, cfg.height)).collect();
        let velocities: Vec<Vec2> = (0..5).map(|_| rng.symmetric_vec(cfg.initial_speed)).collect();
        let hawk_position = rng.point_in(cfg.width, cfg.height);
        let hawk_velocity = rng.symmetric_vec(1.0);

        assert_eq!(sim.positions(), positions);
        assert_eq!(sim.velocities(), velocities);
        assert_eq!(sim.predators()[0].position, hawk_position);
        assert_eq!(sim.predators()[0].velocity, hawk_velocity);
    }

    #[test]
    fn rule_boundary_and_predator_errors_surface_as_config() {
        let mut inverted = FlockConfig::default();
        inverted.rules.min_speed = 3.0;

        let wide_buffer = FlockConfig {
            boundary: BoundaryConfig::CircularContain { radius: Some(10.0), buffer: 12.0, weight: 0.4 },
            ..FlockConfig::default()
        };

        let mut jerky = FlockConfig::default();
        jerky.predators[0].smoothing = 1.5;

        let mut reverse = FlockConfig::default();
        reverse.predators[0].cruise_speed = -1.0;

        for (name, cfg) in [
            ("inverted speeds", inverted),
            ("wide buffer", wide_buffer),
            ("smoothing", jerky),
            ("cruise speed", reverse),
        ] {
            match SimBuilder::new(cfg).build() {
                Err(SimError::Config(_)) => {}
                Err(other) => panic!("{name}: unexpected error {other}"),
                Ok(_) => panic!("{name}: invalid config accepted"),
            }
        }
    }

    #[test]
    fn explicit_predator_start() {
        let mut cfg = quiet_config(1);
        cfg.predators = vec![PredatorConfig {
            placement: Placement::At { x: 10.0, y: 20.0 },
            initial_velocity: Some(Vec2::new(0.5, 0.0)),
            ..PredatorConfig::default()
        }];
        let sim = SimBuilder::new(cfg).build().unwrap();
        assert_eq!(sim.predators()[0].position, Vec2::new(10.0, 20.0));
        assert_eq!(sim.predators()[0].velocity, Vec2::new(0.5, 0.0));
    }
}

#[cfg(test)]
mod tick_loop {
    use flock_core::{BoundaryConfig, EPSILON, FlockConfig, Placement, PredatorConfig, StrategyKind, Vec2};
    use flock_spatial::SpatialIndex;

    use super::helpers::quiet_config;
    use crate::{NoopRenderer, SimBuilder};

    #[test]
    fn wrap_keeps_every_boid_inside() {
        let cfg = FlockConfig { seed: 11, ..FlockConfig::default() };
        let mut sim = SimBuilder::new(cfg.clone()).build().unwrap();
        for _ in 0..300 {
            sim.tick();
            for p in sim.positions() {
                assert!(
                    (0.0..cfg.width).contains(&p.x) && (0.0..cfg.height).contains(&p.y),
                    "boid escaped the domain at {p} on {}",
                    sim.current_tick()
                );
            }
        }
    }

    #[test]
    fn speed_bound_for_boids_with_candidates() {
        let cfg = FlockConfig { seed: 5, ..FlockConfig::default() };
        let (min, max) = (cfg.rules.min_speed, cfg.rules.max_speed);
        let mut sim = SimBuilder::new(cfg.clone()).build().unwrap();
        for _ in 0..50 {
            let index = SpatialIndex::build(sim.positions(), cfg.cell_size());
            let had_candidates: Vec<bool> =
                (0..sim.positions().len()).map(|i| !index.neighbors_of(i).is_empty()).collect();
            sim.tick();
            for (i, v) in sim.velocities().iter().enumerate() {
                if !had_candidates[i] {
                    continue;
                }
                let s = v.length();
                assert!(s <= max + 1e-4, "boid {i} too fast: {s}");
                assert!(s == 0.0 || s >= min - 1e-3, "boid {i} too slow: {s}");
            }
        }
    }

    #[test]
    fn isolated_boid_passes_straight_through() {
        let cfg = FlockConfig {
            boundary: BoundaryConfig::Wrap { repel_radius: 10.0, weight: 0.2 },
            ..quiet_config(2)
        };
        let mut sim = SimBuilder::new(cfg)
            .positions(vec![Vec2::new(1.0, 1.0), Vec2::new(60.0, 60.0)])
            .velocities(vec![Vec2::new(-3.0, 0.5), Vec2::new(0.1, 0.0)])
            .build()
            .unwrap();
        sim.tick();
        // No candidates: no wall push, no speed clamp, just the wrap.
        assert_eq!(sim.velocities()[0], Vec2::new(-3.0, 0.5));
        assert_eq!(sim.positions()[0], Vec2::new(98.0, 1.5));
        assert_eq!(sim.velocities()[1], Vec2::new(0.1, 0.0));
    }

    #[test]
    fn two_boids_cohere_at_min_speed() {
        let mut cfg = quiet_config(2);
        cfg.rules.cohesion_radius = 10.0;
        cfg.rules.cohesion_weight = 0.02;
        let min = cfg.rules.min_speed;
        let mut sim = SimBuilder::new(cfg)
            .positions(vec![Vec2::new(10.0, 10.0), Vec2::new(12.0, 10.0)])
            .velocities(vec![Vec2::ZERO; 2])
            .build()
            .unwrap();
        sim.tick();

        let (v0, v1) = (sim.velocities()[0], sim.velocities()[1]);
        assert!(v0.x > 0.0 && v0.y == 0.0, "v0 = {v0}");
        assert!(v1.x < 0.0 && v1.y == 0.0, "v1 = {v1}");
        let expected = 0.04 * min / (0.04 + EPSILON);
        assert!((v0.length() - expected).abs() < 1e-5);
        assert!((v1.length() - expected).abs() < 1e-5);
        assert!((v0.length() - min).abs() < 1e-3);
    }

    #[test]
    fn nearest_pursuit_predator_blends_toward_boid() {
        let mut cfg = quiet_config(1);
        cfg.predators = vec![PredatorConfig {
            placement: Placement::At { x: 0.0, y: 0.0 },
            initial_velocity: Some(Vec2::ZERO),
            ..PredatorConfig::with_strategy(StrategyKind::NearestPursuit)
        }];
        let alpha = cfg.predators[0].smoothing;
        let cruise = cfg.predators[0].cruise_speed;
        let mut sim = SimBuilder::new(cfg)
            .positions(vec![Vec2::new(5.0, 0.0)])
            .velocities(vec![Vec2::ZERO])
            .build()
            .unwrap();
        sim.tick();

        let hawk = &sim.predators()[0];
        assert!(hawk.velocity.x > 0.0);
        assert_eq!(hawk.velocity.x, alpha * cruise);
        assert_eq!(hawk.velocity.y, 0.0);
        assert_eq!(hawk.position, hawk.velocity);
    }

    #[test]
    fn boids_flee_a_close_predator() {
        let mut cfg = quiet_config(2);
        cfg.rules.predator_radius = 10.0;
        cfg.rules.predator_weight = 1.5;
        cfg.predators = vec![PredatorConfig {
            placement: Placement::At { x: 50.0, y: 50.0 },
            initial_velocity: Some(Vec2::ZERO),
            ..PredatorConfig::default()
        }];
        let mut sim = SimBuilder::new(cfg)
            .positions(vec![Vec2::new(55.0, 50.0), Vec2::new(56.0, 50.0)])
            .velocities(vec![Vec2::ZERO; 2])
            .build()
            .unwrap();
        sim.tick();
        assert!(sim.velocities()[0].x > 0.0, "v = {}", sim.velocities()[0]);
    }

    #[test]
    fn same_seed_same_trajectory() {
        let cfg = FlockConfig { agent_count: 120, seed: 99, ..FlockConfig::contained() };
        let mut a = SimBuilder::new(cfg.clone()).build().unwrap();
        let mut b = SimBuilder::new(cfg).build().unwrap();
        a.run_ticks(1_000, &mut NoopRenderer);
        b.run_ticks(1_000, &mut NoopRenderer);
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.velocities(), b.velocities());
        assert_eq!(a.predators(), b.predators());
        assert_eq!(a.current_tick().0, 1_000);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = SimBuilder::new(FlockConfig { seed: 1, ..FlockConfig::default() }).build().unwrap();
        let b = SimBuilder::new(FlockConfig { seed: 2, ..FlockConfig::default() }).build().unwrap();
        assert_ne!(a.positions(), b.positions());
    }

    #[test]
    fn contained_flock_stays_finite() {
        let cfg = FlockConfig { seed: 4, ..FlockConfig::contained() };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        sim.run_ticks(500, &mut NoopRenderer);
        assert!(sim.positions().iter().all(|p| p.is_finite()));
        assert!(sim.velocities().iter().all(|v| v.is_finite()));
    }
}

#[cfg(test)]
mod renderer {
    use flock_core::{FlockConfig, Vec2};

    use crate::{FlockRenderer, PredatorView, SimBuilder};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl FlockRenderer for Recorder {
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }

        fn plot(&mut self, points: &[Vec2]) {
            self.calls.push(format!("plot {}", points.len()));
        }

        fn render(&mut self, predators: &[PredatorView]) {
            self.calls.push(format!("render {}", predators.len()));
        }
    }

    #[test]
    fn step_presents_in_order() {
        let cfg = FlockConfig { agent_count: 30, ..FlockConfig::default() };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(3, &mut rec);

        assert_eq!(sim.current_tick().0, 3);
        let expected: Vec<String> = ["clear", "plot 30", "render 1"]
            .iter()
            .cycle()
            .take(9)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(rec.calls, expected);
    }

    #[test]
    fn present_does_not_advance() {
        let sim = SimBuilder::new(FlockConfig::default()).build().unwrap();
        let mut rec = Recorder::default();
        sim.present(&mut rec);
        assert_eq!(rec.calls.len(), 3);
        assert_eq!(sim.current_tick().0, 0);
        assert_eq!(sim.predator_views()[0].position, sim.predators()[0].position);
    }
}
