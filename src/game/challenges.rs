//! Daily and weekly challenges: period rollover, snapshots, rotation, and claiming.
//!
//! A period is identified by a date key: the local calendar date for daily
//! challenges and the Monday starting the week for weekly ones. When the stored key
//! no longer matches, lifetime counters are snapshotted and the period's claims are
//! cleared. Progress is the delta between live counters and that snapshot.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::info;

use super::actions::{Event, RejectReason};
use super::catalog::{self, Challenge, ChallengeMetric, Period};
use super::state::{ChallengeSnapshot, PlayerState};

/// How many challenges of each period are active at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    pub daily: usize,
    pub weekly: usize,
}

impl Default for Rotation {
    fn default() -> Self {
        Self { daily: 3, weekly: 3 }
    }
}

impl Rotation {
    pub fn count(&self, period: Period) -> usize {
        match period {
            Period::Daily => self.daily,
            Period::Weekly => self.weekly,
        }
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// `YYYY-MM-DD` key of the period containing `date`.
pub fn period_key(period: Period, date: NaiveDate) -> String {
    let anchor = match period {
        Period::Daily => date,
        Period::Weekly => week_start(date),
    };
    anchor.format("%Y-%m-%d").to_string()
}

/// Polynomial string hash (base 31, wrapping at 2^32). Same key, same value.
pub fn period_hash(key: &str) -> u32 {
    key.bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32))
}

/// The contiguous, wrapping window of `count` challenges selected by `key`.
pub fn rotate<'a>(pool: &'a [Challenge], key: &str, count: usize) -> Vec<&'a Challenge> {
    if pool.is_empty() {
        return Vec::new();
    }
    let count = count.min(pool.len());
    let start = period_hash(key) as usize % pool.len();
    (0..count).map(|i| &pool[(start + i) % pool.len()]).collect()
}

fn stored_key(player: &PlayerState, period: Period) -> Option<&str> {
    match period {
        Period::Daily => player.challenge_last_daily_reset.as_deref(),
        Period::Weekly => player.challenge_last_weekly_reset.as_deref(),
    }
}

fn stored_snapshot(player: &PlayerState, period: Period) -> Option<&ChallengeSnapshot> {
    match period {
        Period::Daily => player.challenge_day_snapshot.as_ref(),
        Period::Weekly => player.challenge_week_snapshot.as_ref(),
    }
}

/// Challenges active in the period the player last rolled over into.
pub fn active_challenges(
    player: &PlayerState,
    period: Period,
    rotation: Rotation,
) -> Vec<&'static Challenge> {
    match stored_key(player, period) {
        Some(key) => rotate(catalog::challenges(period), key, rotation.count(period)),
        None => Vec::new(),
    }
}

/// Progress toward `challenge` in its current period. Never negative.
pub fn progress(player: &PlayerState, challenge: &Challenge) -> f64 {
    if challenge.metric == ChallengeMetric::RunScore {
        return player.score;
    }
    let Some(snap) = stored_snapshot(player, challenge.period) else {
        return 0.0;
    };
    let delta = match challenge.metric {
        ChallengeMetric::Clicks => player.total_clicks - snap.total_clicks,
        ChallengeMetric::Score => player.total_score - snap.total_score,
        ChallengeMetric::TriviaCorrect => player.trivia_correct as f64 - snap.trivia_correct as f64,
        ChallengeMetric::Rebirths => player.rebirths as f64 - snap.rebirths as f64,
        ChallengeMetric::RunScore => player.score,
    };
    delta.max(0.0)
}

/// Roll daily and weekly periods over if `today` has left them.
///
/// A period also rolls over when its key is unset or its snapshot is missing.
pub fn check_period_resets(player: &mut PlayerState, today: NaiveDate, events: &mut Vec<Event>) {
    for period in [Period::Daily, Period::Weekly] {
        let key = period_key(period, today);
        let current = stored_key(player, period) == Some(key.as_str())
            && stored_snapshot(player, period).is_some();
        if current {
            continue;
        }

        let snapshot = player.snapshot();
        match period {
            Period::Daily => {
                player.challenge_last_daily_reset = Some(key.clone());
                player.challenge_day_snapshot = Some(snapshot);
            }
            Period::Weekly => {
                player.challenge_last_weekly_reset = Some(key.clone());
                player.challenge_week_snapshot = Some(snapshot);
            }
        }
        for c in catalog::challenges(period) {
            player.challenge_claimed.remove(c.id);
        }
        info!(period = period.name(), %key, "challenge period reset");
        events.push(Event::PeriodReset { period, key });
    }
}

/// Claim an active, completed, unclaimed challenge for its AP reward.
pub fn claim(
    player: &mut PlayerState,
    id: &str,
    rotation: Rotation,
    events: &mut Vec<Event>,
) -> bool {
    match try_claim(player, id, rotation) {
        Ok(challenge) => {
            player.ap += challenge.reward;
            player.challenge_claimed.insert(challenge.id.to_string(), true);
            events.push(Event::ChallengeClaimed {
                id: challenge.id,
                reward: challenge.reward,
            });
            true
        }
        Err(reason) => {
            events.push(Event::ActionRejected(reason));
            false
        }
    }
}

fn try_claim(
    player: &PlayerState,
    id: &str,
    rotation: Rotation,
) -> Result<&'static Challenge, RejectReason> {
    let challenge =
        catalog::find_challenge(id).ok_or_else(|| RejectReason::UnknownChallenge(id.to_string()))?;
    if !active_challenges(player, challenge.period, rotation)
        .iter()
        .any(|c| c.id == challenge.id)
    {
        return Err(RejectReason::NotActive);
    }
    if player.is_claimed(challenge.id) {
        return Err(RejectReason::AlreadyClaimed);
    }
    let progress = progress(player, challenge);
    if progress < challenge.requirement {
        return Err(RejectReason::Incomplete {
            progress,
            requirement: challenge.requirement,
        });
    }
    Ok(challenge)
}
