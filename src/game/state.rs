//! Player state and the transient session state around it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{self, DEFAULT_BALL, TRIVIA_MILESTONES};

/// Player-facing toggles. The core only stores them; the presentation layer reads
/// them to decide whether to play sounds, vibrate, or animate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub haptic: bool,
    pub animations: bool,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptic: true,
            animations: true,
            sound: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKey {
    Haptic,
    Animations,
    Sound,
}

impl SettingKey {
    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::Haptic => "haptic",
            SettingKey::Animations => "animations",
            SettingKey::Sound => "sound",
        }
    }
}

/// Lifetime counters captured at the start of a challenge period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeSnapshot {
    pub total_clicks: f64,
    pub total_score: f64,
    pub trivia_correct: u32,
    pub rebirths: u32,
}

/// Everything that is persisted between sessions.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    /// Spendable score of the current run.
    pub score: f64,
    /// Ability points. Never reset by rebirth.
    pub ap: u64,
    /// Lifetime AP spent in the shop.
    pub ap_spent: u64,
    pub rebirths: u32,
    /// Lifetime clicks. Fractional because auto income counts `auto_per_sec` per tick.
    pub total_clicks: f64,
    pub total_score: f64,
    /// Current click tier (1 = none bought).
    pub click_mult: f64,
    /// Current auto tier (0 = none bought).
    pub auto_per_sec: f64,
    pub current_ball: String,
    pub unlocked_balls: BTreeSet<String>,
    pub completed_achievements: BTreeSet<String>,
    pub bought_ap_upgrades: BTreeSet<String>,
    pub bought_prestige_upgrades: BTreeSet<String>,
    pub trivia_milestones_done: BTreeSet<u64>,
    pub trivia_asked_this_run: BTreeSet<usize>,
    pub clicks_in_10s: u32,
    pub login_streak: u32,
    pub last_login_date: Option<NaiveDate>,
    pub trivia_answered: u32,
    pub trivia_correct: u32,
    pub challenge_last_daily_reset: Option<String>,
    pub challenge_last_weekly_reset: Option<String>,
    pub challenge_day_snapshot: Option<ChallengeSnapshot>,
    pub challenge_week_snapshot: Option<ChallengeSnapshot>,
    pub challenge_claimed: BTreeMap<String, bool>,
    pub run_milestones_celebrated: BTreeSet<u64>,
    pub settings: Settings,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            score: 0.0,
            ap: 0,
            ap_spent: 0,
            rebirths: 0,
            total_clicks: 0.0,
            total_score: 0.0,
            click_mult: 1.0,
            auto_per_sec: 0.0,
            current_ball: DEFAULT_BALL.to_string(),
            unlocked_balls: BTreeSet::from([DEFAULT_BALL.to_string()]),
            completed_achievements: BTreeSet::new(),
            bought_ap_upgrades: BTreeSet::new(),
            bought_prestige_upgrades: BTreeSet::new(),
            trivia_milestones_done: BTreeSet::new(),
            trivia_asked_this_run: BTreeSet::new(),
            clicks_in_10s: 0,
            login_streak: 0,
            last_login_date: None,
            trivia_answered: 0,
            trivia_correct: 0,
            challenge_last_daily_reset: None,
            challenge_last_weekly_reset: None,
            challenge_day_snapshot: None,
            challenge_week_snapshot: None,
            challenge_claimed: BTreeMap::new(),
            run_milestones_celebrated: BTreeSet::new(),
            settings: Settings::default(),
        }
    }

    /// Whether a challenge has been claimed in its current period.
    pub fn is_claimed(&self, challenge_id: &str) -> bool {
        self.challenge_claimed
            .get(challenge_id)
            .copied()
            .unwrap_or(false)
    }

    /// Lifetime counters as a challenge baseline.
    pub fn snapshot(&self) -> ChallengeSnapshot {
        ChallengeSnapshot {
            total_clicks: self.total_clicks,
            total_score: self.total_score,
            trivia_correct: self.trivia_correct,
            rebirths: self.rebirths,
        }
    }

    /// Re-establish invariants after loading data of unknown provenance.
    pub fn normalize(&mut self) {
        if !self.score.is_finite() || self.score < 0.0 {
            self.score = 0.0;
        }
        if !self.total_score.is_finite() || self.total_score < 0.0 {
            self.total_score = 0.0;
        }
        if !self.total_clicks.is_finite() || self.total_clicks < 0.0 {
            self.total_clicks = 0.0;
        }
        if !self.click_mult.is_finite() || self.click_mult < 1.0 {
            self.click_mult = 1.0;
        }
        if !self.auto_per_sec.is_finite() || self.auto_per_sec < 0.0 {
            self.auto_per_sec = 0.0;
        }
        self.unlocked_balls
            .retain(|id| catalog::find_ball(id).is_some());
        self.unlocked_balls.insert(DEFAULT_BALL.to_string());
        if !self.unlocked_balls.contains(&self.current_ball) {
            self.current_ball = DEFAULT_BALL.to_string();
        }
        self.trivia_milestones_done
            .retain(|m| TRIVIA_MILESTONES.contains(m));
    }
}

/// An open trivia prompt. Lives only for the session.
#[derive(Clone, Debug, PartialEq)]
pub struct TriviaPrompt {
    /// Index into the trivia bank.
    pub question_index: usize,
    /// Milestone that opened this prompt.
    pub milestone: u64,
    /// Milestones completed before this one; fixes the reward at open time.
    pub reward_index: usize,
    pub selected: Option<usize>,
    pub submitted: bool,
}

/// Full engine state: the persisted player plus session-only UI state.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    pub player: PlayerState,
    pub trivia: Option<TriviaPrompt>,
    /// Achievement ids waiting to be shown, oldest first.
    pub achievement_popups: VecDeque<&'static str>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_player(player: PlayerState) -> Self {
        Self {
            player,
            ..Self::default()
        }
    }
}
