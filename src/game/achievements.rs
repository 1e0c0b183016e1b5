//! Achievement evaluation.

use tracing::info;

use super::actions::{Event, RejectReason};
use super::catalog::{Achievement, AchievementMetric, ACHIEVEMENTS};
use super::state::{GameState, PlayerState};

/// Current value of the counter an achievement tracks.
pub fn metric_value(player: &PlayerState, metric: AchievementMetric) -> f64 {
    match metric {
        AchievementMetric::Clicks => player.total_clicks,
        AchievementMetric::Balls => player.unlocked_balls.len() as f64,
        AchievementMetric::Speed => player.clicks_in_10s as f64,
        AchievementMetric::Rebirths => player.rebirths as f64,
        AchievementMetric::TriviaCorrect => player.trivia_correct as f64,
        AchievementMetric::LoginStreak => player.login_streak as f64,
        AchievementMetric::TotalScore => player.total_score,
    }
}

pub fn is_met(player: &PlayerState, achievement: &Achievement) -> bool {
    metric_value(player, achievement.metric) >= achievement.requirement
}

/// Unlock every achievement whose requirement is now met.
///
/// Rewards of all achievements unlocked in one pass are summed and applied in a
/// single AP update. One popup per achievement is queued in catalog order.
/// Returns the number of newly unlocked achievements; running it again on the
/// same state returns 0.
pub fn evaluate(game: &mut GameState, events: &mut Vec<Event>) -> usize {
    let unlocked: Vec<&'static Achievement> = ACHIEVEMENTS
        .iter()
        .filter(|a| !game.player.completed_achievements.contains(a.id))
        .filter(|a| is_met(&game.player, a))
        .collect();
    if unlocked.is_empty() {
        return 0;
    }

    let reward: u64 = unlocked.iter().map(|a| a.reward).sum();
    game.player.ap += reward;
    for a in &unlocked {
        game.player.completed_achievements.insert(a.id.to_string());
        game.achievement_popups.push_back(a.id);
    }
    let ids: Vec<&'static str> = unlocked.iter().map(|a| a.id).collect();
    info!(?ids, reward, "achievements unlocked");
    events.push(Event::AchievementsUnlocked { ids, reward });
    unlocked.len()
}

/// Drop the oldest queued popup.
pub fn dismiss_popup(game: &mut GameState, events: &mut Vec<Event>) -> bool {
    match game.achievement_popups.pop_front() {
        Some(id) => {
            events.push(Event::AchievementPopupDismissed(id));
            true
        }
        None => {
            events.push(Event::ActionRejected(RejectReason::NoPopup));
            false
        }
    }
}
