//! Hoops Idle: an incremental basketball clicker economy.
//!
//! [`Engine`] owns the whole game state and is the only way to change it. Each
//! [`Action`] becomes one synchronous transition that returns the new player
//! snapshot plus the [`Event`]s the presentation layer reacts to.

pub mod achievements;
pub mod actions;
pub mod catalog;
pub mod challenges;
pub mod economy;
pub mod format;
pub mod logic;
pub mod milestones;
pub mod save;
pub mod state;
pub mod trivia_bank;

mod simulator;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

pub use actions::{Action, Event, ItemCategory, Price, RejectReason};
pub use catalog::Period;
pub use challenges::Rotation;
pub use state::{GameState, PlayerState, SettingKey, Settings, TriviaPrompt};

/// Result of dispatching one action.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: PlayerState,
    pub events: Vec<Event>,
}

impl Transition {
    /// Whether the action was refused.
    pub fn rejected(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, Event::PurchaseRejected(_) | Event::ActionRejected(_)))
    }
}

pub struct Engine {
    state: GameState,
    rng: ChaCha8Rng,
    rotation: Rotation,
}

impl Engine {
    /// `seed` drives trivia question selection.
    pub fn new(player: PlayerState, seed: u64) -> Self {
        Self {
            state: GameState::from_player(player),
            rng: ChaCha8Rng::seed_from_u64(seed),
            rotation: Rotation::default(),
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Apply one action, then evaluate achievements.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let mut events = Vec::new();
        debug!(?action, "dispatch");
        self.apply(action, &mut events);
        achievements::evaluate(&mut self.state, &mut events);
        Transition {
            state: self.state.player.clone(),
            events,
        }
    }

    fn apply(&mut self, action: Action, events: &mut Vec<Event>) {
        let game = &mut self.state;
        match action {
            Action::Tap => logic::tap(game, &mut self.rng, events),
            Action::Tick(seconds) => logic::tick(game, seconds, &mut self.rng, events),
            Action::Buy(category, id) => {
                logic::buy(game, category, &id, events);
            }
            Action::SelectBall(id) => {
                logic::select_ball(game, &id, events);
            }
            Action::Rebirth => {
                logic::rebirth(game, events);
            }
            Action::SubmitTriviaAnswer(i) => {
                milestones::submit_trivia_answer(game, i, events);
            }
            Action::DismissTrivia => {
                milestones::dismiss_trivia(game, events);
            }
            Action::ClaimChallenge(id) => {
                challenges::claim(&mut game.player, &id, self.rotation, events);
            }
            Action::CheckPeriodResets(today) => {
                challenges::check_period_resets(&mut game.player, today, events)
            }
            // Evaluation runs after every action anyway.
            Action::EvaluateAchievements => {}
            Action::ToggleSetting(key) => logic::toggle_setting(game, key, events),
            Action::ResetAllProgress => logic::reset_all_progress(game, events),
            Action::RecordLogin(today) => logic::record_login(game, today, events),
            Action::SweepSpeedCounter => logic::sweep_speed_counter(game),
            Action::DismissAchievementPopup => {
                achievements::dismiss_popup(game, events);
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn click_value(&self) -> f64 {
        economy::click_value(&self.state.player)
    }

    pub fn auto_gain_per_tick(&self) -> f64 {
        economy::auto_gain_per_tick(&self.state.player)
    }

    pub fn rebirth_cost(&self) -> f64 {
        economy::rebirth_cost(self.state.player.rebirths)
    }

    /// Active challenges of `period` with their current progress.
    pub fn active_challenges(&self, period: Period) -> Vec<(&'static catalog::Challenge, f64)> {
        challenges::active_challenges(&self.state.player, period, self.rotation)
            .into_iter()
            .map(|c| (c, challenges::progress(&self.state.player, c)))
            .collect()
    }

    pub fn open_question(&self) -> Option<(&TriviaPrompt, &'static trivia_bank::TriviaQuestion)> {
        milestones::open_question(&self.state)
    }

    /// Oldest achievement popup waiting to be shown.
    pub fn next_popup(&self) -> Option<&'static catalog::Achievement> {
        let id = self.state.achievement_popups.front()?;
        catalog::ACHIEVEMENTS.iter().find(|a| a.id == *id)
    }
}
