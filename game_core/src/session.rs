use log::{debug, info};

use crate::fsm::{SessionAction, SessionFsm, SessionState};
use crate::{
    create_bird, step, Bird, Config, Events, GameRng, ObstacleField, PhysicsProfile, Score,
    Viewport,
};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Halt,
}

/// Read-only view handed to the renderer once per frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub state: SessionState,
    pub bird: &'a Bird,
    pub field: &'a ObstacleField,
    pub viewport: Viewport,
    pub score: u32,
}

/// A single game: owns the bird, the obstacles and everything that resets between rounds
pub struct Session {
    fsm: SessionFsm,
    bird: Bird,
    field: ObstacleField,
    score: Score,
    final_score: Option<u32>,
    frame_count: u64,
    viewport: Viewport,
    profile: PhysicsProfile,
    config: Config,
    events: Events,
    rng: GameRng,
}

impl Session {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self::with_config(Config::default(), viewport, seed)
    }

    pub fn with_config(config: Config, viewport: Viewport, seed: u64) -> Self {
        let profile = config.profile_for(viewport.width);
        let bird = create_bird(&config, &viewport, &profile);
        let field = ObstacleField::new(config.obstacle_width, &profile);

        Self {
            fsm: SessionFsm::new(),
            bird,
            field,
            score: Score::new(),
            final_score: None,
            frame_count: 0,
            viewport,
            profile,
            config,
            events: Events::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Primary input (key, pointer, touch). Starts the game from Idle, flaps while
    /// Running and is swallowed once Ended. Returns whether the input was used.
    pub fn primary_input(&mut self) -> bool {
        match self.fsm.state() {
            SessionState::Idle => {
                self.start();
                // The input that starts the game is also the first flap
                self.bird.jump();
                true
            }
            SessionState::Running => {
                self.bird.jump();
                true
            }
            SessionState::Ended => false,
        }
    }

    /// Dedicated restart control; only acts once the session has ended
    pub fn restart(&mut self) -> bool {
        let result = self.fsm.transition(SessionAction::Restart);
        if result.success {
            self.reset_round();
            info!("Restarted session");
        }
        result.success
    }

    fn start(&mut self) {
        let result = self.fsm.transition(SessionAction::Start);
        if result.success {
            self.reset_round();
            info!(
                "Started session ({} profile)",
                if self.profile.is_mobile() { "mobile" } else { "desktop" }
            );
        }
    }

    fn reset_round(&mut self) {
        self.score.reset();
        self.final_score = None;
        self.frame_count = 0;
        self.bird.reset(self.viewport.height, &self.profile);
        self.field.reset(&self.profile);
    }

    /// Run one frame. `now_ms` only drives the idle sway animation.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        self.events.clear();

        match self.fsm.state() {
            SessionState::Idle => {
                self.bird.y = self.config.idle_bird_y(self.viewport.height, now_ms);
                TickOutcome::Continue
            }
            SessionState::Running => {
                step(
                    &mut self.bird,
                    &mut self.field,
                    &self.viewport,
                    &self.config,
                    &mut self.score,
                    &mut self.events,
                    &mut self.rng,
                );
                self.frame_count += 1;

                if self.events.crashed {
                    self.end();
                    TickOutcome::Halt
                } else {
                    TickOutcome::Continue
                }
            }
            SessionState::Ended => TickOutcome::Halt,
        }
    }

    fn end(&mut self) {
        if self.fsm.transition(SessionAction::Crash).success {
            self.final_score = Some(self.score.current);
            info!(
                "Session ended with score {} after {} frames",
                self.score.current, self.frame_count
            );
        }
    }

    /// Track a new viewport size and retarget live objects to the matching profile
    pub fn resize(&mut self, viewport: Viewport) {
        let profile = self.config.profile_for(viewport.width);
        if profile != self.profile {
            debug!(
                "Physics profile switched to {} at width {}",
                if profile.is_mobile() { "mobile" } else { "desktop" },
                viewport.width
            );
        }
        self.viewport = viewport;
        self.apply_profile(profile);
    }

    /// Retarget bird and obstacle parameters in place; positions are untouched
    pub fn apply_profile(&mut self, profile: PhysicsProfile) {
        self.profile = profile;
        self.bird.apply_profile(&profile);
        self.field.apply_profile(&profile);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: self.fsm.state(),
            bird: &self.bird,
            field: &self.field,
            viewport: self.viewport,
            score: self.score.current,
        }
    }

    pub fn state(&self) -> SessionState {
        self.fsm.state()
    }

    pub fn score(&self) -> u32 {
        self.score.current
    }

    /// Score recorded at the crash; `None` until the session has ended
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn profile(&self) -> PhysicsProfile {
        self.profile
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_session() -> Session {
        Session::new(Viewport::new(800.0, 600.0), 12345)
    }

    #[test]
    fn test_new_session_is_idle_and_centered() {
        let session = setup_session();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.bird().y, 300.0);
        assert_eq!(session.profile(), PhysicsProfile::DESKTOP);
        assert_eq!(session.final_score(), None);
    }

    #[test]
    fn test_start_doubles_as_first_jump() {
        let mut session = setup_session();
        session.tick(1_234.0); // idle sway moves the bird off center

        assert!(session.primary_input());

        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.frame_count(), 0);
        assert_eq!(session.bird().y, 300.0);
        assert_eq!(session.bird().velocity, PhysicsProfile::DESKTOP.jump_impulse);
    }

    #[test]
    fn test_idle_tick_sways_without_simulating() {
        let mut session = setup_session();
        for t in 0..100 {
            assert_eq!(session.tick(t as f64 * 16.0), TickOutcome::Continue);
        }
        assert!(session.field().is_empty(), "No obstacles while idle");
        assert_eq!(session.frame_count(), 0);
        assert!((session.bird().y - 300.0).abs() <= 10.0 + 1e-4);
    }

    #[test]
    fn test_running_tick_counts_frames() {
        let mut session = setup_session();
        session.primary_input();
        for _ in 0..5 {
            assert_eq!(session.tick(0.0), TickOutcome::Continue);
        }
        assert_eq!(session.frame_count(), 5);
        assert_eq!(session.field().len(), 1);
    }

    #[test]
    fn test_falling_to_floor_ends_session() {
        let mut session = setup_session();
        session.primary_input();

        let mut frames = 0;
        while session.tick(0.0) == TickOutcome::Continue {
            frames += 1;
            assert!(frames < 1_000, "Bird should reach the floor");
        }

        assert_eq!(session.state(), SessionState::Ended);
        assert_eq!(session.final_score(), Some(0));
        assert!(session.events().crashed);
        assert_eq!(session.tick(0.0), TickOutcome::Halt, "Ended stays halted");
    }

    #[test]
    fn test_primary_input_swallowed_when_ended() {
        let mut session = setup_session();
        session.primary_input();
        while session.tick(0.0) == TickOutcome::Continue {}
        let bird_before = *session.bird();

        assert!(!session.primary_input());

        assert_eq!(session.state(), SessionState::Ended);
        assert_eq!(session.bird().velocity, bird_before.velocity);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut session = setup_session();
        assert!(!session.restart(), "Restart does nothing while idle");

        session.primary_input();
        while session.tick(0.0) == TickOutcome::Continue {}

        assert!(session.restart());

        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.frame_count(), 0);
        assert_eq!(session.final_score(), None);
        assert!(session.field().is_empty());
        assert_eq!(session.bird().y, 300.0);
        assert_eq!(session.bird().velocity, 0.0);
    }

    #[test]
    fn test_resize_retargets_without_rebuilding() {
        let mut session = setup_session();
        session.primary_input();
        for _ in 0..10 {
            session.tick(0.0);
        }
        let bird_y = session.bird().y;
        let obstacle_x = session.field().newest().unwrap().x;

        session.resize(Viewport::new(400.0, 600.0));

        assert_eq!(session.profile(), PhysicsProfile::MOBILE);
        assert_eq!(session.bird().y, bird_y);
        assert_eq!(session.bird().gravity, PhysicsProfile::MOBILE.gravity);
        assert_eq!(session.field().newest().unwrap().x, obstacle_x);
        assert_eq!(session.field().scroll_speed, PhysicsProfile::MOBILE.scroll_speed);
        assert_eq!(session.field().gap_size, PhysicsProfile::MOBILE.gap_size);
    }

    #[test]
    fn test_mobile_session_starts_with_mobile_profile() {
        let mut session = Session::new(Viewport::new(375.0, 667.0), 1);
        session.primary_input();
        assert_eq!(session.bird().velocity, PhysicsProfile::MOBILE.jump_impulse);
        assert_eq!(session.bird().y, 333.5);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = setup_session();
        session.primary_input();
        session.tick(0.0);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, SessionState::Running);
        assert_eq!(snapshot.field.len(), 1);
        assert_eq!(snapshot.viewport, Viewport::new(800.0, 600.0));
        assert_eq!(snapshot.score, 0);
    }
}
