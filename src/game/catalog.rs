//! Static catalogs: balls, shop tiers, achievements, challenges, milestones, levels.
//!
//! Everything here is immutable reference data. State only ever stores catalog ids
//! (strings) so that saves survive catalog edits; lookups go through the `find_*` helpers.

/// Ball selected on a fresh game and after every rebirth.
pub const DEFAULT_BALL: &str = "orange";

/// Each rebirth raises point prices by this fraction (additive).
pub const REBIRTH_COST_MULT_PER: f64 = 0.12;
/// Each rebirth raises all score gains by this fraction (additive).
pub const REBIRTH_BOOST_PER: f64 = 0.10;
/// Score needed for the first rebirth.
pub const REBIRTH_COST_BASE: f64 = 50_000.0;
/// Growth ratio of the rebirth threshold.
pub const REBIRTH_COST_MULT: f64 = 1.5;

pub const TRIVIA_REWARD_PTS_BASE: f64 = 2_000.0;
pub const TRIVIA_REWARD_AP_BASE: f64 = 100.0;
/// reward = BASE * (1 + index * SCALE)
pub const TRIVIA_REWARD_SCALE: f64 = 0.3;

/// Run-score thresholds that each offer one trivia question per run. Ascending.
pub const TRIVIA_MILESTONES: &[u64] = &[
    10_000,
    25_000,
    50_000,
    100_000,
    250_000,
    500_000,
    1_000_000,
    2_000_000,
    5_000_000,
    10_000_000,
    25_000_000,
    50_000_000,
    100_000_000,
    250_000_000,
    500_000_000,
    1_000_000_000,
];

/// Run-score thresholds that only produce a celebration. Ascending.
pub const RUN_MILESTONES: &[u64] = &[
    100_000,
    250_000,
    500_000,
    1_000_000,
    5_000_000,
    10_000_000,
    50_000_000,
    100_000_000,
    500_000_000,
    1_000_000_000,
];

/// Lifetime score needed for each level.
pub const LEVEL_THRESHOLDS: &[f64] = &[0.0, 100e3, 1e6, 10e6, 50e6, 100e6, 500e6, 1e9, 5e9];
pub const LEVEL_NAMES: &[&str] = &[
    "Rookie",
    "Pro",
    "All-Star",
    "MVP",
    "Champion",
    "Legend",
    "Hall of Fame",
    "GOAT",
    "Immortal",
];

// ── Balls ───────────────────────────────────────────────────────

/// A ball skin. Multiplies every score gain while selected. Bought with AP.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub id: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
    pub ap_cost: u64,
    pub min_rebirths: u32,
}

pub const BALLS: &[Ball] = &[
    Ball { id: "orange", name: "Classic", multiplier: 1.0, ap_cost: 0, min_rebirths: 0 },
    Ball { id: "blue", name: "Cool Blue", multiplier: 2.0, ap_cost: 30, min_rebirths: 0 },
    Ball { id: "red", name: "Fire", multiplier: 3.0, ap_cost: 80, min_rebirths: 0 },
    Ball { id: "gold", name: "Gold", multiplier: 5.0, ap_cost: 200, min_rebirths: 0 },
    Ball { id: "green", name: "Court", multiplier: 8.0, ap_cost: 500, min_rebirths: 0 },
    Ball { id: "purple", name: "Royal", multiplier: 12.0, ap_cost: 1_200, min_rebirths: 1 },
    Ball { id: "black", name: "Elite", multiplier: 20.0, ap_cost: 3_500, min_rebirths: 2 },
    Ball { id: "rainbow", name: "Legend", multiplier: 35.0, ap_cost: 10_000, min_rebirths: 3 },
];

// ── Point-denominated tiers ─────────────────────────────────────

/// Click power tier. Owning it sets `click_mult` to `mult`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickUpgrade {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: f64,
    pub mult: f64,
}

pub const CLICK_UPGRADES: &[ClickUpgrade] = &[
    ClickUpgrade { id: "x2", name: "Double click", cost: 100.0, mult: 2.0 },
    ClickUpgrade { id: "x3", name: "Triple click", cost: 500.0, mult: 3.0 },
    ClickUpgrade { id: "x5", name: "Power click", cost: 2e3, mult: 5.0 },
    ClickUpgrade { id: "x10", name: "Mega click", cost: 12e3, mult: 10.0 },
    ClickUpgrade { id: "x25", name: "Ultra click", cost: 60e3, mult: 25.0 },
    ClickUpgrade { id: "x50", name: "Super click", cost: 300e3, mult: 50.0 },
    ClickUpgrade { id: "x100", name: "Hyper click", cost: 1.5e6, mult: 100.0 },
    ClickUpgrade { id: "x250", name: "Max click", cost: 8e6, mult: 250.0 },
    ClickUpgrade { id: "x500", name: "Omega click", cost: 50e6, mult: 500.0 },
    ClickUpgrade { id: "x1k", name: "Ultimate click", cost: 300e6, mult: 1000.0 },
];

/// Auto income tier. Owning it sets `auto_per_sec` to `per_sec`.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoUpgrade {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: f64,
    pub per_sec: f64,
}

pub const AUTO_UPGRADES: &[AutoUpgrade] = &[
    AutoUpgrade { id: "a1", name: "Auto click 1", cost: 300.0, per_sec: 1.0 },
    AutoUpgrade { id: "a2", name: "Auto click 2", cost: 2.5e3, per_sec: 2.0 },
    AutoUpgrade { id: "a3", name: "Auto click 3", cost: 18e3, per_sec: 5.0 },
    AutoUpgrade { id: "a4", name: "Auto click 4", cost: 100e3, per_sec: 10.0 },
    AutoUpgrade { id: "a5", name: "Auto click 5", cost: 500e3, per_sec: 25.0 },
    AutoUpgrade { id: "a6", name: "Auto click 6", cost: 3e6, per_sec: 50.0 },
    AutoUpgrade { id: "a7", name: "Auto click 7", cost: 20e6, per_sec: 100.0 },
    AutoUpgrade { id: "a8", name: "Auto click 8", cost: 120e6, per_sec: 250.0 },
    AutoUpgrade { id: "a9", name: "Auto click 9", cost: 700e6, per_sec: 500.0 },
];

// ── AP-denominated upgrades ─────────────────────────────────────

/// Permanent score multiplier bought with AP. Survives rebirth.
#[derive(Clone, Debug, PartialEq)]
pub struct ApUpgrade {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u64,
    pub mult: f64,
}

pub const AP_UPGRADES: &[ApUpgrade] = &[
    ApUpgrade { id: "ap1", name: "AP Boost +5%", cost: 150, mult: 1.05 },
    ApUpgrade { id: "ap2", name: "AP Boost +10%", cost: 400, mult: 1.10 },
    ApUpgrade { id: "ap3", name: "AP Boost +15%", cost: 800, mult: 1.15 },
    ApUpgrade { id: "ap4", name: "AP Boost +25%", cost: 1_500, mult: 1.25 },
    ApUpgrade { id: "ap5", name: "AP Boost +40%", cost: 3_000, mult: 1.40 },
    ApUpgrade { id: "ap6", name: "AP Boost +60%", cost: 6_000, mult: 1.60 },
    ApUpgrade { id: "ap7", name: "AP Boost ×2", cost: 12_000, mult: 2.00 },
    ApUpgrade { id: "ap8", name: "AP Boost ×2.5", cost: 25_000, mult: 2.50 },
    ApUpgrade { id: "ap9", name: "AP Boost ×3", cost: 50_000, mult: 3.00 },
];

/// Like [`ApUpgrade`] but only purchasable after enough rebirths.
#[derive(Clone, Debug, PartialEq)]
pub struct PrestigeUpgrade {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u64,
    pub mult: f64,
    pub min_rebirths: u32,
}

pub const PRESTIGE_UPGRADES: &[PrestigeUpgrade] = &[
    PrestigeUpgrade { id: "prestige1", name: "Prestige +50%", cost: 500, mult: 1.5, min_rebirths: 3 },
    PrestigeUpgrade { id: "prestige2", name: "Prestige ×2", cost: 2_000, mult: 2.0, min_rebirths: 5 },
    PrestigeUpgrade { id: "prestige3", name: "Prestige ×2.5", cost: 8_000, mult: 2.5, min_rebirths: 7 },
];

// ── Achievements ────────────────────────────────────────────────

/// Counter an achievement is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AchievementMetric {
    /// Lifetime clicks, including auto income.
    Clicks,
    /// Number of unlocked balls.
    Balls,
    /// Clicks in the current 10 second window.
    Speed,
    Rebirths,
    TriviaCorrect,
    LoginStreak,
    TotalScore,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub requirement: f64,
    pub metric: AchievementMetric,
    /// AP awarded once on unlock.
    pub reward: u64,
    pub icon: &'static str,
}

const fn ach(
    id: &'static str,
    name: &'static str,
    requirement: f64,
    metric: AchievementMetric,
    reward: u64,
    icon: &'static str,
) -> Achievement {
    Achievement { id, name, requirement, metric, reward, icon }
}

use AchievementMetric as M;

pub const ACHIEVEMENTS: &[Achievement] = &[
    ach("click_10", "Getting started", 10.0, M::Clicks, 3, "🏀"),
    ach("click_50", "Warm up", 50.0, M::Clicks, 6, "👆"),
    ach("click_100", "Century", 100.0, M::Clicks, 10, "💯"),
    ach("click_500", "Tap tap tap", 500.0, M::Clicks, 20, "✋"),
    ach("click_1k", "Grinder", 1e3, M::Clicks, 40, "🔥"),
    ach("click_5k", "Committed", 5e3, M::Clicks, 85, "⭐"),
    ach("click_10k", "Dedicated", 10e3, M::Clicks, 140, "🌟"),
    ach("click_50k", "Click machine", 50e3, M::Clicks, 280, "🤖"),
    ach("click_100k", "Unstoppable", 100e3, M::Clicks, 450, "💪"),
    ach("click_500k", "Legendary taps", 500e3, M::Clicks, 750, "👑"),
    ach("click_1m", "Million clicks", 1e6, M::Clicks, 1_100, "🏆"),
    ach("ball_2", "Collector", 2.0, M::Balls, 40, "🌈"),
    ach("ball_3", "Variety", 3.0, M::Balls, 70, "🎨"),
    ach("ball_4", "Squad", 4.0, M::Balls, 120, "🔮"),
    ach("ball_5", "Ball hoarder", 5.0, M::Balls, 200, "✨"),
    ach("ball_6", "Showcase", 6.0, M::Balls, 350, "💎"),
    ach("ball_7", "Almost full", 7.0, M::Balls, 550, "🔶"),
    ach("ball_8", "Complete set", 8.0, M::Balls, 900, "🎯"),
    ach("speed_5", "Quick tap", 5.0, M::Speed, 5, "⚡"),
    ach("speed_15", "Quick hands", 15.0, M::Speed, 12, "💨"),
    ach("speed_30", "Speed demon", 30.0, M::Speed, 25, "🔥"),
    ach("speed_40", "Lightning", 40.0, M::Speed, 40, "⚡"),
    ach("speed_60", "Blur", 60.0, M::Speed, 65, "👻"),
    ach("rebirth_1", "Reborn", 1.0, M::Rebirths, 200, "🔄"),
    ach("rebirth_3", "Third time", 3.0, M::Rebirths, 350, "🔁"),
    ach("rebirth_5", "Veteran", 5.0, M::Rebirths, 550, "👑"),
    ach("rebirth_10", "Prestige", 10.0, M::Rebirths, 900, "💫"),
    ach("rebirth_15", "Master", 15.0, M::Rebirths, 1_400, "🎖️"),
    ach("rebirth_25", "Immortal", 25.0, M::Rebirths, 2_500, "🌟"),
    ach("trivia_3", "Curious", 3.0, M::TriviaCorrect, 45, "🧠"),
    ach("trivia_5", "Trivia fan", 5.0, M::TriviaCorrect, 75, "📖"),
    ach("trivia_10", "Smart cookie", 10.0, M::TriviaCorrect, 140, "📚"),
    ach("trivia_15", "Trivia master", 15.0, M::TriviaCorrect, 220, "🎓"),
    ach("trivia_25", "Scholar", 25.0, M::TriviaCorrect, 400, "🏅"),
    ach("trivia_50", "Genius", 50.0, M::TriviaCorrect, 750, "💡"),
    ach("streak_3", "Three day", 3.0, M::LoginStreak, 50, "📅"),
    ach("streak_7", "Week streak", 7.0, M::LoginStreak, 120, "📆"),
    ach("streak_14", "Two weeks", 14.0, M::LoginStreak, 280, "🗓️"),
    ach("streak_30", "Monthly", 30.0, M::LoginStreak, 600, "📌"),
    ach("score_100k", "Point collector", 100e3, M::TotalScore, 90, "📈"),
    ach("score_1m", "Millionaire", 1e6, M::TotalScore, 250, "💰"),
    ach("score_10m", "High roller", 10e6, M::TotalScore, 500, "🎰"),
    ach("score_100m", "Tycoon", 100e6, M::TotalScore, 1_000, "🌐"),
    ach("score_1b", "Billionaire", 1e9, M::TotalScore, 2_000, "👑"),
];

// ── Challenges ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Daily,
    Weekly,
}

impl Period {
    pub fn name(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
        }
    }
}

/// What a challenge measures. Everything but `RunScore` is a delta against the
/// period snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeMetric {
    Clicks,
    Score,
    TriviaCorrect,
    Rebirths,
    /// Live score of the current run; no snapshot.
    RunScore,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Challenge {
    pub id: &'static str,
    pub label: &'static str,
    pub period: Period,
    pub metric: ChallengeMetric,
    pub requirement: f64,
    pub reward: u64,
    pub icon: &'static str,
}

const fn daily(
    id: &'static str,
    metric: ChallengeMetric,
    requirement: f64,
    reward: u64,
    label: &'static str,
    icon: &'static str,
) -> Challenge {
    Challenge { id, label, period: Period::Daily, metric, requirement, reward, icon }
}

const fn weekly(
    id: &'static str,
    metric: ChallengeMetric,
    requirement: f64,
    reward: u64,
    label: &'static str,
    icon: &'static str,
) -> Challenge {
    Challenge { id, label, period: Period::Weekly, metric, requirement, reward, icon }
}

use ChallengeMetric as C;

pub const DAILY_CHALLENGES: &[Challenge] = &[
    daily("daily_clicks_100", C::Clicks, 100.0, 5, "Tap 100 times today", "👆"),
    daily("daily_clicks_500", C::Clicks, 500.0, 12, "Tap 500 times today", "🔥"),
    daily("daily_score_50k", C::Score, 50e3, 8, "Score 50K today", "📈"),
    daily("daily_score_250k", C::Score, 250e3, 18, "Score 250K today", "💰"),
    daily("daily_trivia_1", C::TriviaCorrect, 1.0, 6, "Get 1 trivia correct today", "🧠"),
    daily("daily_trivia_3", C::TriviaCorrect, 3.0, 15, "Get 3 trivia correct today", "📚"),
    daily("daily_run_25k", C::RunScore, 25e3, 7, "Reach 25K in a single run", "🏀"),
];

pub const WEEKLY_CHALLENGES: &[Challenge] = &[
    weekly("weekly_clicks_1k", C::Clicks, 1e3, 15, "Tap 1,000 times this week", "✋"),
    weekly("weekly_clicks_5k", C::Clicks, 5e3, 35, "Tap 5,000 times this week", "💪"),
    weekly("weekly_rebirth_1", C::Rebirths, 1.0, 25, "Rebirth once this week", "🔄"),
    weekly("weekly_rebirth_2", C::Rebirths, 2.0, 55, "Rebirth twice this week", "🔁"),
    weekly("weekly_trivia_5", C::TriviaCorrect, 5.0, 30, "Get 5 trivia correct this week", "🎓"),
    weekly("weekly_trivia_10", C::TriviaCorrect, 10.0, 60, "Get 10 trivia correct this week", "🏅"),
    weekly("weekly_score_1m", C::Score, 1e6, 40, "Score 1M this week", "📊"),
];

pub fn challenges(period: Period) -> &'static [Challenge] {
    match period {
        Period::Daily => DAILY_CHALLENGES,
        Period::Weekly => WEEKLY_CHALLENGES,
    }
}

// ── Lookups ─────────────────────────────────────────────────────

pub fn find_ball(id: &str) -> Option<&'static Ball> {
    BALLS.iter().find(|b| b.id == id)
}

/// The ball used for all economy math. Unknown ids fall back to the default ball.
pub fn ball_or_default(id: &str) -> &'static Ball {
    find_ball(id).unwrap_or(&BALLS[0])
}

pub fn find_click_upgrade(id: &str) -> Option<&'static ClickUpgrade> {
    CLICK_UPGRADES.iter().find(|u| u.id == id)
}

pub fn find_auto_upgrade(id: &str) -> Option<&'static AutoUpgrade> {
    AUTO_UPGRADES.iter().find(|u| u.id == id)
}

pub fn find_ap_upgrade(id: &str) -> Option<&'static ApUpgrade> {
    AP_UPGRADES.iter().find(|u| u.id == id)
}

pub fn find_prestige_upgrade(id: &str) -> Option<&'static PrestigeUpgrade> {
    PRESTIGE_UPGRADES.iter().find(|u| u.id == id)
}

pub fn find_challenge(id: &str) -> Option<&'static Challenge> {
    DAILY_CHALLENGES
        .iter()
        .chain(WEEKLY_CHALLENGES.iter())
        .find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_ball_is_first_and_free() {
        assert_eq!(BALLS[0].id, DEFAULT_BALL);
        assert_eq!(BALLS[0].ap_cost, 0);
        assert!((BALLS[0].multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn milestone_tables_are_ascending() {
        assert!(TRIVIA_MILESTONES.windows(2).all(|w| w[0] < w[1]));
        assert!(RUN_MILESTONES.windows(2).all(|w| w[0] < w[1]));
        assert!(LEVEL_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn tiers_are_monotonic() {
        assert!(CLICK_UPGRADES
            .windows(2)
            .all(|w| w[0].mult < w[1].mult && w[0].cost < w[1].cost));
        assert!(AUTO_UPGRADES
            .windows(2)
            .all(|w| w[0].per_sec < w[1].per_sec && w[0].cost < w[1].cost));
    }

    #[test]
    fn ids_are_unique_across_each_catalog() {
        fn unique<'a>(ids: impl Iterator<Item = &'a str>) -> bool {
            let mut seen = HashSet::new();
            ids.into_iter().all(|id| seen.insert(id))
        }
        assert!(unique(BALLS.iter().map(|b| b.id)));
        assert!(unique(CLICK_UPGRADES.iter().map(|u| u.id)));
        assert!(unique(AUTO_UPGRADES.iter().map(|u| u.id)));
        assert!(unique(AP_UPGRADES.iter().map(|u| u.id)));
        assert!(unique(PRESTIGE_UPGRADES.iter().map(|u| u.id)));
        assert!(unique(ACHIEVEMENTS.iter().map(|a| a.id)));
        assert!(unique(
            DAILY_CHALLENGES
                .iter()
                .chain(WEEKLY_CHALLENGES.iter())
                .map(|c| c.id)
        ));
    }

    #[test]
    fn challenge_tables_match_their_period() {
        assert!(DAILY_CHALLENGES.iter().all(|c| c.period == Period::Daily));
        assert!(WEEKLY_CHALLENGES.iter().all(|c| c.period == Period::Weekly));
    }

    #[test]
    fn unknown_ball_falls_back_to_default() {
        assert_eq!(ball_or_default("nope").id, DEFAULT_BALL);
        assert_eq!(ball_or_default("gold").id, "gold");
    }

    #[test]
    fn level_names_cover_thresholds() {
        assert_eq!(LEVEL_NAMES.len(), LEVEL_THRESHOLDS.len());
    }
}
