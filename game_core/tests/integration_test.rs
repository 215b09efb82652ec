use game_core::*;

fn setup_world(
    config: &Config,
    viewport: &Viewport,
) -> (Bird, ObstacleField, Score, Events, GameRng) {
    let profile = config.profile_for(viewport.width);
    let bird = create_bird(config, viewport, &profile);
    let field = ObstacleField::new(config.obstacle_width, &profile);
    (bird, field, Score::new(), Events::new(), GameRng::new(12345))
}

/// Config whose gaps always open at the same height, so a hovering bird threads every one
fn fixed_gap_config(fraction: f32) -> Config {
    Config {
        gap_min_fraction: fraction,
        gap_max_fraction: fraction,
        ..Config::default()
    }
}

#[test]
fn test_gravity_scenario() {
    let mut bird = Bird::new(50.0, 150.0, 15.0, &PhysicsProfile::DESKTOP);
    bird.integrate(600.0);
    assert!((bird.velocity - 0.165).abs() < 1e-6);
    assert!((bird.y - 150.165).abs() < 1e-4);
}

#[test]
fn test_jump_overrides_downward_velocity() {
    let mut bird = Bird::new(50.0, 300.0, 15.0, &PhysicsProfile::DESKTOP);
    bird.velocity = 3.0;
    bird.jump();
    assert_eq!(bird.velocity, -4.95);
}

#[test]
fn test_collision_scenario() {
    let mut field = ObstacleField::new(60.0, &PhysicsProfile::DESKTOP);
    field.obstacles.push_back(Obstacle::new(40.0, 100.0));
    let bird = Bird::new(50.0, 90.0, 15.0, &PhysicsProfile::DESKTOP);
    let mut events = Events::new();

    systems::check_collisions(&field, &bird, &mut events);

    assert!(events.crashed);
}

#[test]
fn test_start_scenario() {
    let viewport = Viewport::new(1024.0, 768.0);
    let mut session = Session::new(viewport, 42);

    session.primary_input();

    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.score(), 0);
    assert_eq!(session.bird().y, 384.0);
    assert_eq!(session.bird().velocity, PhysicsProfile::DESKTOP.jump_impulse);
}

#[test]
fn test_first_spawn_scenario() {
    let config = Config::new();
    let viewport = Viewport::new(800.0, 600.0);
    let (_bird, mut field, _score, mut events, mut rng) = setup_world(&config, &viewport);

    systems::spawn_obstacles(&mut field, &viewport, &config, &mut rng, &mut events);

    assert_eq!(field.len(), 1);
    assert_eq!(field.newest().unwrap().x, viewport.width);
}

#[test]
fn test_spawn_spacing_independent_of_speed() {
    for profile in [PhysicsProfile::DESKTOP, PhysicsProfile::MOBILE] {
        let config = Config::new();
        let viewport = Viewport::new(1024.0, 600.0);
        let (mut bird, mut field, mut score, mut events, mut rng) =
            setup_world(&config, &viewport);
        field.apply_profile(&profile);
        bird.x = -10_000.0; // out of the way

        let mut checked = 0;
        for _ in 0..20_000 {
            events.clear();
            field.advance(&bird, &viewport, &config, &mut score, &mut events, &mut rng);
            if events.spawned && field.len() >= 2 {
                let newest = field.obstacles[field.len() - 1].x;
                let previous = field.obstacles[field.len() - 2].x;
                let spacing = newest - previous;
                assert!(
                    spacing >= config.spawn_distance - 1e-2
                        && spacing < config.spawn_distance + profile.scroll_speed + 1e-2,
                    "spacing {} at speed {}",
                    spacing,
                    profile.scroll_speed
                );
                checked += 1;
            }
        }
        assert!(checked > 5, "Expected several spawns, got {}", checked);
    }
}

#[test]
fn test_hovering_bird_scores_each_obstacle_once() {
    let config = fixed_gap_config(0.4);
    let viewport = Viewport::new(800.0, 600.0);
    let (mut bird, mut field, mut score, mut events, mut rng) = setup_world(&config, &viewport);
    // Gap is 240..420; hover in the middle
    bird.gravity = 0.0;
    bird.y = 330.0;

    let mut passed_obstacles = 0;
    for _ in 0..3_000 {
        events.clear();
        let before = score.current;
        step(
            &mut bird,
            &mut field,
            &viewport,
            &config,
            &mut score,
            &mut events,
            &mut rng,
        );
        assert!(!events.crashed, "Bird inside every gap must not crash");
        assert!(score.current - before <= 1);
        if events.scored {
            passed_obstacles += 1;
        }
    }

    assert!(score.current > 10);
    assert_eq!(score.current, passed_obstacles);
}

#[test]
fn test_pruning_never_drops_visible_obstacles() {
    let config = fixed_gap_config(0.4);
    let viewport = Viewport::new(800.0, 600.0);
    let (mut bird, mut field, mut score, mut events, mut rng) = setup_world(&config, &viewport);
    bird.gravity = 0.0;
    bird.y = 330.0;

    for _ in 0..3_000 {
        step(
            &mut bird,
            &mut field,
            &viewport,
            &config,
            &mut score,
            &mut events,
            &mut rng,
        );
        for obstacle in field.iter() {
            assert!(obstacle.trailing_edge(field.width) >= 0.0);
        }
        // A screen 800 wide never holds more than a handful of obstacles
        assert!(field.len() <= 4);
    }
}

#[test]
fn test_bird_bounds_hold_for_whole_session() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut session = Session::new(viewport, 7);
    session.primary_input();

    let mut frame = 0;
    while session.tick(frame as f64 * 16.0) == TickOutcome::Continue {
        if frame % 25 == 0 {
            session.primary_input();
        }
        let bird = session.bird();
        assert!(bird.y >= bird.radius && bird.y <= viewport.height - bird.radius);
        frame += 1;
        if frame > 100_000 {
            break;
        }
    }
}

#[test]
fn test_crash_then_restart_cycle() {
    let mut session = Session::new(Viewport::new(800.0, 600.0), 99);

    for round in 0..3 {
        if round == 0 {
            session.primary_input();
        } else {
            assert!(!session.primary_input(), "Primary input is swallowed after a crash");
            assert!(session.restart());
        }
        assert_eq!(session.state(), SessionState::Running);
        while session.tick(0.0) == TickOutcome::Continue {}
        assert_eq!(session.state(), SessionState::Ended);
        assert_eq!(session.final_score(), Some(session.score()));
    }
}

#[test]
fn test_shrinking_below_breakpoint_mid_game() {
    let mut session = Session::new(Viewport::new(1280.0, 720.0), 3);
    session.primary_input();
    for _ in 0..20 {
        session.tick(0.0);
    }
    let obstacles_before = session.field().len();

    session.resize(Viewport::new(600.0, 720.0));

    assert!(session.profile().is_mobile());
    assert_eq!(session.field().len(), obstacles_before);
    assert_eq!(session.state(), SessionState::Running);

    // Growing back restores desktop physics
    session.resize(Viewport::new(1280.0, 720.0));
    assert_eq!(session.profile(), PhysicsProfile::DESKTOP);
    assert_eq!(session.bird().gravity, PhysicsProfile::DESKTOP.gravity);
}
