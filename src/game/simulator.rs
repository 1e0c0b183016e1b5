//! Balance simulator.
//! Run with: cargo test simulate_greedy -- --nocapture

#[cfg(test)]
mod tests {
    use crate::game::catalog::{AP_UPGRADES, AUTO_UPGRADES, BALLS, CLICK_UPGRADES};
    use crate::game::economy;
    use crate::game::format::format_number;
    use crate::game::{Action, Engine, ItemCategory, PlayerState};

    /// Next tier above the one currently owned, if any.
    fn next_click(p: &PlayerState) -> Option<(&'static str, f64)> {
        CLICK_UPGRADES
            .iter()
            .find(|u| u.mult > p.click_mult)
            .map(|u| (u.id, economy::scaled_cost(u.cost, p.rebirths)))
    }

    fn next_auto(p: &PlayerState) -> Option<(&'static str, f64)> {
        AUTO_UPGRADES
            .iter()
            .find(|u| u.per_sec > p.auto_per_sec)
            .map(|u| (u.id, economy::scaled_cost(u.cost, p.rebirths)))
    }

    /// Greedy shopping: always take the cheapest affordable point tier, then spend AP
    /// on the best available ball and the cheapest AP upgrade.
    fn shop(engine: &mut Engine) -> u32 {
        let mut bought = 0;
        for _ in 0..20 {
            let p = engine.player();
            let candidate = [
                next_click(p).map(|(id, c)| (ItemCategory::Click, id, c)),
                next_auto(p).map(|(id, c)| (ItemCategory::Auto, id, c)),
            ]
            .into_iter()
            .flatten()
            .filter(|(_, _, cost)| *cost <= p.score)
            .min_by(|a, b| a.2.total_cmp(&b.2));
            let Some((category, id, _)) = candidate else {
                break;
            };
            if engine.dispatch(Action::Buy(category, id.into())).rejected() {
                break;
            }
            bought += 1;
        }

        let p = engine.player();
        let ball = BALLS
            .iter()
            .rev()
            .find(|b| {
                !p.unlocked_balls.contains(b.id) && b.ap_cost <= p.ap && b.min_rebirths <= p.rebirths
            })
            .map(|b| b.id);
        if let Some(id) = ball {
            if !engine.dispatch(Action::SelectBall(id.into())).rejected() {
                bought += 1;
            }
        }
        let p = engine.player();
        let upgrade = AP_UPGRADES
            .iter()
            .find(|u| !p.bought_ap_upgrades.contains(u.id) && u.cost <= p.ap)
            .map(|u| u.id);
        if let Some(id) = upgrade {
            if !engine
                .dispatch(Action::Buy(ItemCategory::ApUpgrade, id.into()))
                .rejected()
            {
                bought += 1;
            }
        }
        bought
    }

    fn report(engine: &Engine, second: u32, purchases: u32) {
        let p = engine.player();
        eprintln!("┌─── {}分{}秒 ─────────────────────────", second / 60, second % 60);
        eprintln!(
            "│ Score: {}  Tap: {}  Auto: {}/s",
            format_number(p.score),
            format_number(engine.click_value()),
            format_number(engine.auto_gain_per_tick())
        );
        eprintln!(
            "│ AP: {}  Rebirths: {}  Ball: {}  Purchases: {}",
            format_number(p.ap as f64),
            p.rebirths,
            p.current_ball,
            purchases
        );
        eprintln!(
            "│ Trivia: {}/{}  Achievements: {}",
            p.trivia_correct,
            p.trivia_answered,
            p.completed_achievements.len()
        );
        eprintln!("└────────────────────────────────────");
    }

    struct Outcome {
        first_rebirth: Option<u32>,
        rebirths: u32,
    }

    /// Simulate an attentive player tapping 5 times per second for `total_seconds`.
    fn simulate(total_seconds: u32) -> Outcome {
        let mut engine = Engine::new(PlayerState::new(), 2024);
        let taps_per_second = 5;
        let report_times = [60, 300, 600, 1200, 1800, 3600];
        let mut next_report = 0;
        let mut purchases = 0;
        let mut first_rebirth = None;

        eprintln!("\n========================================");
        eprintln!("  Hoops Idle バランスシミュレーター");
        eprintln!("  プレイ時間: {}分", total_seconds / 60);
        eprintln!("  タップ速度: {}/秒", taps_per_second);
        eprintln!("========================================\n");

        for second in 1..=total_seconds {
            for _ in 0..taps_per_second {
                engine.dispatch(Action::Tap);
            }
            engine.dispatch(Action::Tick(1));
            if second % 10 == 0 {
                engine.dispatch(Action::SweepSpeedCounter);
            }

            if let Some(correct) = engine.open_question().map(|(_, q)| q.correct) {
                engine.dispatch(Action::SubmitTriviaAnswer(correct));
                engine.dispatch(Action::DismissTrivia);
            }
            while !engine.state().achievement_popups.is_empty() {
                engine.dispatch(Action::DismissAchievementPopup);
            }

            purchases += shop(&mut engine);

            if engine.player().score >= economy::rebirth_cost(engine.player().rebirths)
                && !engine.dispatch(Action::Rebirth).rejected()
                && first_rebirth.is_none()
            {
                first_rebirth = Some(second);
                eprintln!("★ 初回リバース: {}秒", second);
            }

            if next_report < report_times.len() && second >= report_times[next_report] {
                report(&engine, second, purchases);
                next_report += 1;
            }
        }

        Outcome {
            first_rebirth,
            rebirths: engine.player().rebirths,
        }
    }

    #[test]
    fn simulate_greedy_1hour() {
        let outcome = simulate(3600);
        let first = outcome.first_rebirth.expect("no rebirth within an hour");
        // Too fast means the early shop is trivial.
        assert!(first > 120, "first rebirth at {first}s");
        assert!(outcome.rebirths >= 1);
    }
}
