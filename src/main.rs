//! Headless line-driven driver.
//!
//! Reads one command per line from stdin, advances the session by the real time
//! that passed (plus any `wait`), and prints what happened.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hoops_idle::config::GameConfig;
use hoops_idle::game::catalog::{
    self, AP_UPGRADES, AUTO_UPGRADES, BALLS, CLICK_UPGRADES, PRESTIGE_UPGRADES,
};
use hoops_idle::game::economy;
use hoops_idle::game::format::format_number;
use hoops_idle::game::{Event, Period};
use hoops_idle::input::{Command, HELP};
use hoops_idle::session::Session;
use hoops_idle::storage::{FileStorage, Storage};

/// Hoops Idle - basketball clicker in your terminal
#[derive(Parser, Debug)]
#[command(name = "hoops-idle")]
#[command(about = "Tap, upgrade, rebirth. One command per line; `help` lists them.")]
struct Args {
    /// TOML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Directory for the save file (overrides config)
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Random seed for trivia selection (overrides config)
    #[arg(long)]
    seed: Option<u64>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(dir) = args.save_dir {
        config.save.dir = dir;
    }
    if args.seed.is_some() {
        config.session.rng_seed = args.seed;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(io::stderr)
        .init();

    let started = Instant::now();
    // Game time = real time + every `wait`.
    let mut skipped_ms = 0.0;
    let now = |skipped: f64| started.elapsed().as_secs_f64() * 1000.0 + skipped;

    let storage = FileStorage::new(&config.save.dir);
    let mut session = Session::start(&config, storage, now(skipped_ms), today());
    info!(dir = %config.save.dir.display(), "hoops-idle ready");
    print_status(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        print_events(&session.advance(now(skipped_ms), today()));

        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(e) => {
                println!("? {e}");
                continue;
            }
        };
        match command {
            Command::Repeat(action, n) => {
                for _ in 0..n {
                    let t = session.dispatch(action.clone());
                    print_events(&t.events);
                }
            }
            Command::Wait(secs) => {
                // One advance per waited second.
                for _ in 0..secs {
                    skipped_ms += 1000.0;
                    print_events(&session.advance(now(skipped_ms), today()));
                }
            }
            Command::Status => print_status(&session),
            Command::Shop => print_shop(&session),
            Command::Challenges => print_challenges(&session),
            Command::Save => session.suspend(),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
        print_prompt(&session);
        io::stdout().flush()?;
    }

    session.shutdown();
    Ok(())
}

fn print_events(events: &[Event]) {
    for event in events {
        match event {
            Event::Tapped { .. } | Event::AutoIncome { .. } => {}
            Event::TriviaOpened { milestone, .. } => {
                println!("🏀 Trivia time! ({} points reached)", format_number(*milestone as f64))
            }
            Event::TriviaAnswered { correct: true, points, ap } => {
                println!("✅ Correct! +{} points, +{ap} AP", format_number(*points))
            }
            Event::TriviaAnswered { correct: false, .. } => println!("❌ Not quite."),
            Event::TriviaDismissed | Event::AchievementPopupDismissed(_) => {}
            Event::AchievementsUnlocked { ids, reward } => {
                for id in ids {
                    if let Some(a) = catalog::ACHIEVEMENTS.iter().find(|a| a.id == *id) {
                        println!("{} Achievement: {} (+{} AP)", a.icon, a.name, a.reward);
                    }
                }
                if ids.len() > 1 {
                    println!("   total +{reward} AP");
                }
            }
            Event::RunMilestoneCrossed(m) => {
                println!("🎉 {} points this run!", format_number(*m as f64))
            }
            Event::Purchased { category, id, .. } => println!("🛒 bought {} {id}", category.name()),
            Event::BallSelected(id) => println!("🏀 now playing with {id}"),
            Event::Reborn { rebirths } => println!("🔄 Rebirth #{rebirths}!"),
            Event::PurchaseRejected(reason) | Event::ActionRejected(reason) => {
                println!("✋ {reason}")
            }
            Event::ChallengeClaimed { id, reward } => println!("🎯 {id} claimed, +{reward} AP"),
            Event::PeriodReset { period, key } => {
                println!("📅 new {} challenges ({key})", period.name())
            }
            Event::SettingToggled { key, enabled } => println!("⚙️  {} = {enabled}", key.name()),
            Event::LoginRecorded { streak } => println!("📆 login streak: {streak}"),
            Event::ProgressReset => println!("🧹 all progress reset"),
        }
    }
}

fn print_prompt<S: Storage>(session: &Session<S>) {
    let engine = session.engine();
    if let Some((prompt, q)) = engine.open_question() {
        if !prompt.submitted {
            println!("❓ {}", q.question);
            for (i, a) in q.answers.iter().enumerate() {
                println!("   {}. {a}", i + 1);
            }
        }
    }
    if let Some(a) = engine.next_popup() {
        println!("{} {} unlocked (`ok` to dismiss)", a.icon, a.name);
    }
    print!("{} pts > ", format_number(engine.player().score));
}

fn print_status<S: Storage>(session: &Session<S>) {
    let engine = session.engine();
    let p = engine.player();
    println!(
        "Score {}  |  AP {}  |  Level {}  |  Rebirths {}",
        format_number(p.score),
        format_number(p.ap as f64),
        economy::level_name(p.total_score),
        p.rebirths
    );
    println!(
        "Tap {}  |  Auto {}/s  |  Ball {}  |  Next rebirth at {}",
        format_number(engine.click_value()),
        format_number(engine.auto_gain_per_tick()),
        catalog::ball_or_default(&p.current_ball).name,
        format_number(engine.rebirth_cost())
    );
    println!(
        "Lifetime: {} clicks, {} points, trivia {}/{}, streak {}",
        format_number(p.total_clicks),
        format_number(p.total_score),
        p.trivia_correct,
        p.trivia_answered,
        p.login_streak
    );
}

fn print_shop<S: Storage>(session: &Session<S>) {
    let p = session.engine().player();
    let scaled = |c: f64| format_number(economy::scaled_cost(c, p.rebirths));
    println!("click:");
    for u in CLICK_UPGRADES.iter().filter(|u| u.mult > p.click_mult) {
        println!("  {:<6} {:<16} {}", u.id, u.name, scaled(u.cost));
    }
    println!("auto:");
    for u in AUTO_UPGRADES.iter().filter(|u| u.per_sec > p.auto_per_sec) {
        println!("  {:<6} {:<16} {}", u.id, u.name, scaled(u.cost));
    }
    println!("ap:");
    for u in AP_UPGRADES.iter().filter(|u| !p.bought_ap_upgrades.contains(u.id)) {
        println!("  {:<6} {:<16} {} AP", u.id, u.name, u.cost);
    }
    println!("prestige:");
    for u in PRESTIGE_UPGRADES
        .iter()
        .filter(|u| !p.bought_prestige_upgrades.contains(u.id))
    {
        println!(
            "  {:<10} {:<16} {} AP (rebirth {})",
            u.id, u.name, u.cost, u.min_rebirths
        );
    }
    println!("ball:");
    for b in BALLS {
        let mark = if b.id == p.current_ball {
            "*"
        } else if p.unlocked_balls.contains(b.id) {
            "+"
        } else {
            " "
        };
        println!(
            " {mark}{:<8} {:<10} x{:<4} {} AP",
            b.id, b.name, b.multiplier, b.ap_cost
        );
    }
}

fn print_challenges<S: Storage>(session: &Session<S>) {
    let engine = session.engine();
    for period in [Period::Daily, Period::Weekly] {
        println!("{}:", period.name());
        for (c, progress) in engine.active_challenges(period) {
            let done = if engine.player().is_claimed(c.id) {
                "claimed"
            } else if progress >= c.requirement {
                "ready"
            } else {
                ""
            };
            println!(
                "  {} {:<18} {} / {}  +{} AP  {done}",
                c.icon,
                c.id,
                format_number(progress),
                format_number(c.requirement),
                c.reward
            );
        }
    }
}
