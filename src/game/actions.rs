//! Every input the engine accepts, and the events it emits in response.
//!
//! The presentation layer turns taps, timers, and menu choices into an [`Action`],
//! hands it to `Engine::dispatch`, and drives sound/haptics/popups off the returned
//! [`Event`]s. The engine itself never renders or plays anything.

use chrono::NaiveDate;
use thiserror::Error;

use super::catalog::Period;
use super::state::SettingKey;

/// Shop section an item is bought from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemCategory {
    /// Click power tier, priced in points.
    Click,
    /// Auto income tier, priced in points.
    Auto,
    /// Permanent multiplier, priced in AP.
    ApUpgrade,
    /// Rebirth-gated permanent multiplier, priced in AP.
    Prestige,
    /// Ball skin, priced in AP.
    Ball,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Click => "click",
            ItemCategory::Auto => "auto",
            ItemCategory::ApUpgrade => "ap",
            ItemCategory::Prestige => "prestige",
            ItemCategory::Ball => "ball",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Tap,
    /// Apply this many one-second auto-income ticks.
    Tick(u32),
    Buy(ItemCategory, String),
    SelectBall(String),
    Rebirth,
    SubmitTriviaAnswer(usize),
    DismissTrivia,
    ClaimChallenge(String),
    CheckPeriodResets(NaiveDate),
    EvaluateAchievements,
    ToggleSetting(SettingKey),
    ResetAllProgress,
    RecordLogin(NaiveDate),
    /// Zero the 10-second speed counter.
    SweepSpeedCounter,
    DismissAchievementPopup,
}

/// What a purchase cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Price {
    Points(f64),
    Ap(u64),
}

/// Why an action had no effect. State is always left unchanged.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RejectReason {
    #[error("no {category} item named `{id}`")]
    UnknownItem { category: &'static str, id: String },
    #[error("already owned")]
    AlreadyOwned,
    #[error("a higher tier is already owned")]
    Superseded,
    #[error("requires {min_rebirths} rebirths")]
    Locked { min_rebirths: u32 },
    #[error("need {needed} points, have {have}")]
    InsufficientScore { needed: f64, have: f64 },
    #[error("need {needed} AP, have {have}")]
    InsufficientAp { needed: u64, have: u64 },
    #[error("no trivia question is open")]
    NoTriviaOpen,
    #[error("trivia question already answered")]
    AlreadyAnswered,
    #[error("answer {0} is out of range")]
    InvalidAnswer(usize),
    #[error("no challenge named `{0}`")]
    UnknownChallenge(String),
    #[error("challenge is not active this period")]
    NotActive,
    #[error("challenge already claimed")]
    AlreadyClaimed,
    #[error("progress {progress} of {requirement}")]
    Incomplete { progress: f64, requirement: f64 },
    #[error("no achievement popup to dismiss")]
    NoPopup,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Tapped { gained: f64 },
    AutoIncome { seconds: u32, gained: f64 },
    TriviaOpened { milestone: u64, question_index: usize, reward_index: usize },
    TriviaAnswered { correct: bool, points: f64, ap: u64 },
    TriviaDismissed,
    /// All achievements unlocked by one evaluation, in catalog order, with their summed reward.
    AchievementsUnlocked { ids: Vec<&'static str>, reward: u64 },
    /// The oldest popup was closed.
    AchievementPopupDismissed(&'static str),
    RunMilestoneCrossed(u64),
    Purchased { category: ItemCategory, id: &'static str, price: Price },
    BallSelected(&'static str),
    Reborn { rebirths: u32 },
    PurchaseRejected(RejectReason),
    ActionRejected(RejectReason),
    ChallengeClaimed { id: &'static str, reward: u64 },
    PeriodReset { period: Period, key: String },
    SettingToggled { key: SettingKey, enabled: bool },
    LoginRecorded { streak: u32 },
    ProgressReset,
}
