//! A running game: the engine plus its timers and save slot.
//!
//! The driver calls [`Session::advance`] with a monotonic timestamp as often as it
//! likes and [`Session::dispatch`] for player input. The session turns elapsed
//! time into auto-income seconds, 10 second speed sweeps, period checks, and a
//! debounced save. Storage failures are logged and never reach gameplay.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::game::{save, Action, Engine, Event, PlayerState, Transition};
use crate::storage::Storage;
use crate::time::{Clock, Debounce, Interval, TICKS_PER_SEC};

/// Auto income fires once per second.
const AUTO_INCOME_TICKS: u32 = TICKS_PER_SEC;
/// The tap-speed window is 10 seconds.
const SPEED_SWEEP_TICKS: u32 = TICKS_PER_SEC * 10;

pub struct Session<S: Storage> {
    engine: Engine,
    storage: S,
    storage_key: String,
    clock: Clock,
    auto_income: Interval,
    speed_sweep: Interval,
    autosave: Debounce,
    /// Player as of the last observed change; used to detect new changes.
    last_seen: PlayerState,
}

impl<S: Storage> Session<S> {
    /// Load the saved game (or start fresh) and record today's login.
    ///
    /// `now_ms` only sets the session clock's origin. The trivia seed is
    /// `session.rng_seed` if configured, else the wall-clock time.
    pub fn start(config: &GameConfig, storage: S, now_ms: f64, today: NaiveDate) -> Self {
        let seed = config
            .session
            .rng_seed
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis().max(0) as u64);
        Self::start_with_seed(config, storage, now_ms, today, seed)
    }

    /// [`Session::start`] with an explicit trivia seed.
    pub fn start_with_seed(
        config: &GameConfig,
        mut storage: S,
        now_ms: f64,
        today: NaiveDate,
        seed: u64,
    ) -> Self {
        let key = config.save.key.clone();
        let player = match save::load_game(&mut storage, &key) {
            Some(p) => {
                info!(rebirths = p.rebirths, "save loaded");
                p
            }
            None => {
                info!("starting a new game");
                PlayerState::new()
            }
        };
        let engine = Engine::new(player, seed).with_rotation(config.challenges.rotation());

        let mut clock = Clock::new(
            TICKS_PER_SEC,
            config.session.max_catch_up_secs as f64 * 1000.0,
        );
        clock.update(now_ms);
        let autosave = Debounce::new(clock.ticks_for_ms(config.save.debounce_ms));

        let last_seen = engine.player().clone();
        let mut session = Self {
            engine,
            storage,
            storage_key: key,
            clock,
            auto_income: Interval::new(AUTO_INCOME_TICKS),
            speed_sweep: Interval::new(SPEED_SWEEP_TICKS),
            autosave,
            last_seen,
        };
        session.dispatch(Action::RecordLogin(today));
        session.dispatch(Action::CheckPeriodResets(today));
        session
    }

    /// Apply player input.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = self.engine.dispatch(action);
        if transition.events.contains(&Event::ProgressReset) {
            save::delete_save(&mut self.storage, &self.storage_key);
            self.autosave.cancel();
            self.last_seen = transition.state.clone();
        } else {
            self.observe(&transition.state);
        }
        transition
    }

    /// Arm the autosave if the player changed since last time.
    fn observe(&mut self, player: &PlayerState) {
        if *player != self.last_seen {
            self.last_seen = player.clone();
            self.autosave.arm();
        }
    }

    /// Run all timers up to `now_ms`. Returns every event produced on the way.
    pub fn advance(&mut self, now_ms: f64, today: NaiveDate) -> Vec<Event> {
        let ticks = self.clock.update(now_ms);
        let mut events = Vec::new();

        events.extend(self.dispatch(Action::CheckPeriodResets(today)).events);

        if self.engine.player().auto_per_sec > 0.0 {
            let seconds = self.auto_income.advance(ticks);
            if seconds > 0 {
                events.extend(self.dispatch(Action::Tick(seconds)).events);
            }
        } else {
            self.auto_income.reset();
        }

        if self.speed_sweep.advance(ticks) > 0 {
            events.extend(self.dispatch(Action::SweepSpeedCounter).events);
        }

        if self.autosave.advance(ticks) {
            self.save_now();
        }
        events
    }

    /// Save right away, dropping any pending autosave. Call when the app goes to
    /// the background.
    pub fn suspend(&mut self) {
        self.autosave.cancel();
        self.save_now();
    }

    /// Final save; consumes the session and all of its timers.
    pub fn shutdown(mut self) -> S {
        self.suspend();
        info!("session closed");
        self.storage
    }

    fn save_now(&mut self) {
        let timestamp = chrono::Utc::now().timestamp_millis().max(0) as u64;
        match save::save_game(
            &mut self.storage,
            &self.storage_key,
            self.engine.player(),
            timestamp,
        ) {
            Ok(()) => debug!("game saved"),
            Err(e) => warn!(error = %e, "save failed"),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save_pending(&self) -> bool {
        self.autosave.is_pending()
    }
}
