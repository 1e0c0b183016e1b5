//! Game logic: taps, auto income, the shop, rebirth, and bookkeeping actions.
//!
//! Every function mutates the [`GameState`] in place and appends what happened to
//! `events`. Rejected actions push a rejection event and leave state untouched.

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use super::actions::{Event, ItemCategory, Price, RejectReason};
use super::catalog::{self, DEFAULT_BALL};
use super::economy;
use super::milestones;
use super::state::{GameState, PlayerState, SettingKey};

/// One tap on the ball.
pub fn tap<R: Rng + ?Sized>(game: &mut GameState, rng: &mut R, events: &mut Vec<Event>) {
    let prev_score = game.player.score;
    let gained = economy::click_value(&game.player);
    let p = &mut game.player;
    p.score += gained;
    p.total_score += gained;
    p.total_clicks += 1.0;
    p.clicks_in_10s = p.clicks_in_10s.saturating_add(1);
    events.push(Event::Tapped { gained });
    milestones::on_score_increase(game, prev_score, rng, events);
}

/// Apply `seconds` one-second auto-income ticks.
///
/// The gain is read from the current state on each second.
pub fn tick<R: Rng + ?Sized>(
    game: &mut GameState,
    seconds: u32,
    rng: &mut R,
    events: &mut Vec<Event>,
) {
    if seconds == 0 || game.player.auto_per_sec <= 0.0 {
        return;
    }
    let mut total = 0.0;
    for _ in 0..seconds {
        let prev_score = game.player.score;
        let gain = economy::auto_gain_per_tick(&game.player);
        let p = &mut game.player;
        p.score += gain;
        p.total_score += gain;
        p.total_clicks += p.auto_per_sec;
        total += gain;
        milestones::on_score_increase(game, prev_score, rng, events);
    }
    events.push(Event::AutoIncome {
        seconds,
        gained: total,
    });
}

// ── Shop ────────────────────────────────────────────────────────

/// Buy a shop item. Returns whether the purchase went through.
pub fn buy(game: &mut GameState, category: ItemCategory, id: &str, events: &mut Vec<Event>) -> bool {
    let p = &mut game.player;
    let result = match category {
        ItemCategory::Click => buy_click(p, id),
        ItemCategory::Auto => buy_auto(p, id),
        ItemCategory::ApUpgrade => buy_ap_upgrade(p, id),
        ItemCategory::Prestige => buy_prestige(p, id),
        ItemCategory::Ball => buy_ball(p, id),
    };
    match result {
        Ok((id, price)) => {
            debug!(category = category.name(), id, ?price, "purchased");
            events.push(Event::Purchased {
                category,
                id,
                price,
            });
            if category == ItemCategory::Ball {
                events.push(Event::BallSelected(id));
            }
            true
        }
        Err(reason) => {
            debug!(category = category.name(), id, %reason, "purchase rejected");
            events.push(Event::PurchaseRejected(reason));
            false
        }
    }
}

type Bought = Result<(&'static str, Price), RejectReason>;

fn unknown(category: ItemCategory, id: &str) -> RejectReason {
    RejectReason::UnknownItem {
        category: category.name(),
        id: id.to_string(),
    }
}

/// Tier items: owning a higher or equal tier makes the item unavailable.
fn tier_check(current: f64, tier: f64) -> Result<(), RejectReason> {
    if current == tier {
        Err(RejectReason::AlreadyOwned)
    } else if current > tier {
        Err(RejectReason::Superseded)
    } else {
        Ok(())
    }
}

fn spend_points(p: &mut PlayerState, base_cost: f64) -> Result<Price, RejectReason> {
    let cost = economy::scaled_cost(base_cost, p.rebirths);
    if p.score < cost {
        return Err(RejectReason::InsufficientScore {
            needed: cost,
            have: p.score,
        });
    }
    p.score -= cost;
    Ok(Price::Points(cost))
}

fn check_ap(p: &PlayerState, cost: u64) -> Result<(), RejectReason> {
    if p.ap < cost {
        return Err(RejectReason::InsufficientAp {
            needed: cost,
            have: p.ap,
        });
    }
    Ok(())
}

fn spend_ap(p: &mut PlayerState, cost: u64) -> Price {
    p.ap -= cost;
    p.ap_spent += cost;
    Price::Ap(cost)
}

fn check_rebirths(p: &PlayerState, min_rebirths: u32) -> Result<(), RejectReason> {
    if p.rebirths < min_rebirths {
        return Err(RejectReason::Locked { min_rebirths });
    }
    Ok(())
}

fn buy_click(p: &mut PlayerState, id: &str) -> Bought {
    let item = catalog::find_click_upgrade(id).ok_or_else(|| unknown(ItemCategory::Click, id))?;
    tier_check(p.click_mult, item.mult)?;
    let price = spend_points(p, item.cost)?;
    p.click_mult = item.mult;
    Ok((item.id, price))
}

fn buy_auto(p: &mut PlayerState, id: &str) -> Bought {
    let item = catalog::find_auto_upgrade(id).ok_or_else(|| unknown(ItemCategory::Auto, id))?;
    tier_check(p.auto_per_sec, item.per_sec)?;
    let price = spend_points(p, item.cost)?;
    p.auto_per_sec = item.per_sec;
    Ok((item.id, price))
}

fn buy_ap_upgrade(p: &mut PlayerState, id: &str) -> Bought {
    let item = catalog::find_ap_upgrade(id).ok_or_else(|| unknown(ItemCategory::ApUpgrade, id))?;
    if p.bought_ap_upgrades.contains(item.id) {
        return Err(RejectReason::AlreadyOwned);
    }
    check_ap(p, item.cost)?;
    let price = spend_ap(p, item.cost);
    p.bought_ap_upgrades.insert(item.id.to_string());
    Ok((item.id, price))
}

fn buy_prestige(p: &mut PlayerState, id: &str) -> Bought {
    let item =
        catalog::find_prestige_upgrade(id).ok_or_else(|| unknown(ItemCategory::Prestige, id))?;
    if p.bought_prestige_upgrades.contains(item.id) {
        return Err(RejectReason::AlreadyOwned);
    }
    check_rebirths(p, item.min_rebirths)?;
    check_ap(p, item.cost)?;
    let price = spend_ap(p, item.cost);
    p.bought_prestige_upgrades.insert(item.id.to_string());
    Ok((item.id, price))
}

fn buy_ball(p: &mut PlayerState, id: &str) -> Bought {
    let ball = catalog::find_ball(id).ok_or_else(|| unknown(ItemCategory::Ball, id))?;
    if p.unlocked_balls.contains(ball.id) {
        return Err(RejectReason::AlreadyOwned);
    }
    check_rebirths(p, ball.min_rebirths)?;
    check_ap(p, ball.ap_cost)?;
    let price = spend_ap(p, ball.ap_cost);
    p.unlocked_balls.insert(ball.id.to_string());
    p.current_ball = ball.id.to_string();
    Ok((ball.id, price))
}

/// Switch to an owned ball, or buy it first if it is not owned yet.
pub fn select_ball(game: &mut GameState, id: &str, events: &mut Vec<Event>) -> bool {
    let owned = catalog::find_ball(id).filter(|b| game.player.unlocked_balls.contains(b.id));
    match owned {
        Some(ball) => {
            game.player.current_ball = ball.id.to_string();
            events.push(Event::BallSelected(ball.id));
            true
        }
        None => buy(game, ItemCategory::Ball, id, events),
    }
}

// ── Rebirth ─────────────────────────────────────────────────────

/// Trade the current run for a permanent boost.
///
/// Run-scoped progress (score, tiers, balls, trivia and run milestones) resets;
/// AP, upgrades, achievements, lifetime totals, challenges and settings carry over.
pub fn rebirth(game: &mut GameState, events: &mut Vec<Event>) -> bool {
    let cost = economy::rebirth_cost(game.player.rebirths);
    if game.player.score < cost {
        events.push(Event::ActionRejected(RejectReason::InsufficientScore {
            needed: cost,
            have: game.player.score,
        }));
        return false;
    }

    let p = &mut game.player;
    p.score = 0.0;
    p.click_mult = 1.0;
    p.auto_per_sec = 0.0;
    p.current_ball = DEFAULT_BALL.to_string();
    p.unlocked_balls.clear();
    p.unlocked_balls.insert(DEFAULT_BALL.to_string());
    p.rebirths += 1;
    p.trivia_milestones_done.clear();
    p.trivia_asked_this_run.clear();
    p.run_milestones_celebrated.clear();
    game.trivia = None;

    let rebirths = game.player.rebirths;
    info!(
        rebirths,
        next_cost = economy::rebirth_cost(rebirths),
        "rebirth"
    );
    events.push(Event::Reborn { rebirths });
    true
}

// ── Bookkeeping ─────────────────────────────────────────────────

pub fn toggle_setting(game: &mut GameState, key: SettingKey, events: &mut Vec<Event>) {
    let s = &mut game.player.settings;
    let flag = match key {
        SettingKey::Haptic => &mut s.haptic,
        SettingKey::Animations => &mut s.animations,
        SettingKey::Sound => &mut s.sound,
    };
    *flag = !*flag;
    events.push(Event::SettingToggled {
        key,
        enabled: *flag,
    });
}

/// Wipe all progress. Settings survive; the caller is responsible for deleting the
/// stored save once it sees [`Event::ProgressReset`].
pub fn reset_all_progress(game: &mut GameState, events: &mut Vec<Event>) {
    let settings = game.player.settings.clone();
    *game = GameState::from_player(PlayerState {
        settings,
        ..PlayerState::new()
    });
    info!("all progress reset");
    events.push(Event::ProgressReset);
}

/// Update the login streak for a session starting on `today`.
///
/// Same day is a no-op. The day after the last login extends the streak; a longer
/// gap restarts it at 1. A date earlier than the last login leaves the streak as is.
pub fn record_login(game: &mut GameState, today: NaiveDate, events: &mut Vec<Event>) {
    let p = &mut game.player;
    let streak = match p.last_login_date {
        Some(last) if last == today => return,
        Some(last) => match (today - last).num_days() {
            1 => p.login_streak.saturating_add(1),
            d if d > 1 => 1,
            _ => p.login_streak,
        },
        None => 1,
    };
    p.login_streak = streak;
    p.last_login_date = Some(today);
    events.push(Event::LoginRecorded { streak });
}

/// Close the 10 second tap-speed window.
pub fn sweep_speed_counter(game: &mut GameState) {
    game.player.clicks_in_10s = 0;
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Clone, Debug)]
    enum Step {
        Tap,
        Tick(u32),
        BuyClick(usize),
        BuyAuto(usize),
        BuyAp(usize),
        BuyBall(usize),
        Rebirth,
        Answer(usize),
        Dismiss,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            4 => Just(Step::Tap),
            2 => (1u32..120).prop_map(Step::Tick),
            1 => (0usize..catalog::CLICK_UPGRADES.len()).prop_map(Step::BuyClick),
            1 => (0usize..catalog::AUTO_UPGRADES.len()).prop_map(Step::BuyAuto),
            1 => (0usize..catalog::AP_UPGRADES.len()).prop_map(Step::BuyAp),
            1 => (0usize..catalog::BALLS.len()).prop_map(Step::BuyBall),
            1 => Just(Step::Rebirth),
            1 => (0usize..4).prop_map(Step::Answer),
            1 => Just(Step::Dismiss),
        ]
    }

    proptest! {
        #[test]
        fn prop_balances_never_negative(
            start_score in 0.0f64..1e6,
            start_ap in 0u64..5_000,
            steps in prop::collection::vec(step(), 1..80),
        ) {
            let mut game = GameState::new();
            game.player.score = start_score;
            game.player.ap = start_ap;
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            let mut events = Vec::new();
            for s in steps {
                match s {
                    Step::Tap => tap(&mut game, &mut rng, &mut events),
                    Step::Tick(n) => tick(&mut game, n, &mut rng, &mut events),
                    Step::BuyClick(i) => {
                        buy(&mut game, ItemCategory::Click, catalog::CLICK_UPGRADES[i].id, &mut events);
                    }
                    Step::BuyAuto(i) => {
                        buy(&mut game, ItemCategory::Auto, catalog::AUTO_UPGRADES[i].id, &mut events);
                    }
                    Step::BuyAp(i) => {
                        buy(&mut game, ItemCategory::ApUpgrade, catalog::AP_UPGRADES[i].id, &mut events);
                    }
                    Step::BuyBall(i) => {
                        buy(&mut game, ItemCategory::Ball, catalog::BALLS[i].id, &mut events);
                    }
                    Step::Rebirth => {
                        rebirth(&mut game, &mut events);
                    }
                    Step::Answer(i) => {
                        milestones::submit_trivia_answer(&mut game, i, &mut events);
                    }
                    Step::Dismiss => {
                        milestones::dismiss_trivia(&mut game, &mut events);
                    }
                }
                prop_assert!(game.player.score >= 0.0);
                prop_assert!(game.player.unlocked_balls.contains(DEFAULT_BALL));
                prop_assert!(game.player.unlocked_balls.contains(&game.player.current_ball));
            }
        }

        #[test]
        fn prop_rejected_purchase_leaves_state(score in 0.0f64..99.0) {
            let mut game = GameState::new();
            game.player.score = score;
            let before = game.player.clone();
            let mut events = Vec::new();
            prop_assert!(!buy(&mut game, ItemCategory::Click, "x2", &mut events));
            prop_assert_eq!(&game.player, &before);
        }

        #[test]
        fn prop_trivia_milestone_fires_once_per_run(taps in 1usize..40) {
            let mut game = GameState::new();
            game.player.click_mult = 1_000.0;
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            let mut events = Vec::new();
            for _ in 0..taps {
                tap(&mut game, &mut rng, &mut events);
                milestones::dismiss_trivia(&mut game, &mut Vec::new());
            }
            let mut opened: Vec<u64> = events
                .iter()
                .filter_map(|e| match e {
                    Event::TriviaOpened { milestone, .. } => Some(*milestone),
                    _ => None,
                })
                .collect();
            let n = opened.len();
            opened.dedup();
            prop_assert_eq!(opened.len(), n);
        }
    }
}
