//! Trivia milestones, run milestones, and the trivia prompt lifecycle.

use rand::Rng;
use tracing::debug;

use super::actions::{Event, RejectReason};
use super::catalog::{RUN_MILESTONES, TRIVIA_MILESTONES};
use super::economy;
use super::state::{GameState, TriviaPrompt};
use super::trivia_bank::{TriviaQuestion, TRIVIA_QUESTIONS};

/// Called after every tap or auto tick with the score from before the increase.
pub fn on_score_increase<R: Rng + ?Sized>(
    game: &mut GameState,
    prev_score: f64,
    rng: &mut R,
    events: &mut Vec<Event>,
) {
    maybe_open_trivia(game, TRIVIA_QUESTIONS, rng, events);
    celebrate_run_milestones(game, prev_score, events);
}

/// Smallest milestone reached this run that has not prompted yet.
fn pending_milestone(game: &GameState) -> Option<u64> {
    let score = game.player.score;
    TRIVIA_MILESTONES
        .iter()
        .copied()
        .find(|m| score >= *m as f64 && !game.player.trivia_milestones_done.contains(m))
}

fn maybe_open_trivia<R: Rng + ?Sized>(
    game: &mut GameState,
    bank: &[TriviaQuestion],
    rng: &mut R,
    events: &mut Vec<Event>,
) {
    if game.trivia.is_some() || bank.is_empty() {
        return;
    }
    let Some(milestone) = pending_milestone(game) else {
        return;
    };
    let unasked: Vec<usize> = (0..bank.len())
        .filter(|i| !game.player.trivia_asked_this_run.contains(i))
        .collect();
    if unasked.is_empty() {
        // Bank exhausted for this run; the milestone stays pending.
        return;
    }
    let question_index = unasked[rng.gen_range(0..unasked.len())];
    let reward_index = game.player.trivia_milestones_done.len();

    game.player.trivia_milestones_done.insert(milestone);
    game.player.trivia_asked_this_run.insert(question_index);
    game.trivia = Some(TriviaPrompt {
        question_index,
        milestone,
        reward_index,
        selected: None,
        submitted: false,
    });
    debug!(milestone, question_index, reward_index, "trivia opened");
    events.push(Event::TriviaOpened {
        milestone,
        question_index,
        reward_index,
    });
}

fn celebrate_run_milestones(game: &mut GameState, prev_score: f64, events: &mut Vec<Event>) {
    let score = game.player.score;
    for &m in RUN_MILESTONES {
        let threshold = m as f64;
        if prev_score < threshold
            && score >= threshold
            && game.player.run_milestones_celebrated.insert(m)
        {
            events.push(Event::RunMilestoneCrossed(m));
        }
    }
}

/// Answer the open trivia question. The prompt stays open until dismissed.
pub fn submit_trivia_answer(game: &mut GameState, answer: usize, events: &mut Vec<Event>) -> bool {
    match try_submit(game, answer, TRIVIA_QUESTIONS) {
        Ok(event) => {
            events.push(event);
            true
        }
        Err(reason) => {
            events.push(Event::ActionRejected(reason));
            false
        }
    }
}

fn try_submit(
    game: &mut GameState,
    answer: usize,
    bank: &[TriviaQuestion],
) -> Result<Event, RejectReason> {
    let prompt = game.trivia.as_ref().ok_or(RejectReason::NoTriviaOpen)?;
    if prompt.submitted {
        return Err(RejectReason::AlreadyAnswered);
    }
    let question = bank
        .get(prompt.question_index)
        .ok_or(RejectReason::NoTriviaOpen)?;
    if answer >= question.answers.len() {
        return Err(RejectReason::InvalidAnswer(answer));
    }

    let correct = answer == question.correct;
    let (points, ap) = if correct {
        (
            economy::trivia_reward_points(prompt.reward_index),
            economy::trivia_reward_ap(prompt.reward_index),
        )
    } else {
        (0.0, 0)
    };

    let player = &mut game.player;
    player.trivia_answered += 1;
    if correct {
        player.trivia_correct += 1;
        player.score += points;
        player.ap += ap;
    }
    if let Some(prompt) = game.trivia.as_mut() {
        prompt.selected = Some(answer);
        prompt.submitted = true;
    }
    debug!(correct, points, ap, "trivia answered");
    Ok(Event::TriviaAnswered {
        correct,
        points,
        ap,
    })
}

/// Close the trivia prompt, answered or not.
pub fn dismiss_trivia(game: &mut GameState, events: &mut Vec<Event>) -> bool {
    if game.trivia.take().is_some() {
        events.push(Event::TriviaDismissed);
        true
    } else {
        events.push(Event::ActionRejected(RejectReason::NoTriviaOpen));
        false
    }
}

/// The open prompt together with its question.
pub fn open_question(game: &GameState) -> Option<(&TriviaPrompt, &'static TriviaQuestion)> {
    let prompt = game.trivia.as_ref()?;
    let question = TRIVIA_QUESTIONS.get(prompt.question_index)?;
    Some((prompt, question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn raise_score(game: &mut GameState, to: f64, rng: &mut ChaCha8Rng, events: &mut Vec<Event>) {
        let prev = game.player.score;
        game.player.score = to;
        on_score_increase(game, prev, rng, events);
    }

    #[test]
    fn below_first_milestone_opens_nothing() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        raise_score(&mut game, 9_999.0, &mut rng(), &mut events);
        assert!(game.trivia.is_none());
        assert!(events.is_empty());
    }

    #[test]
    fn crossing_first_milestone_opens_prompt() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        raise_score(&mut game, 10_000.0, &mut rng(), &mut events);
        let prompt = game.trivia.as_ref().expect("prompt should open");
        assert_eq!(prompt.milestone, 10_000);
        assert_eq!(prompt.reward_index, 0);
        assert!(game.player.trivia_milestones_done.contains(&10_000));
        assert!(game
            .player
            .trivia_asked_this_run
            .contains(&prompt.question_index));
        assert!(matches!(events[0], Event::TriviaOpened { milestone: 10_000, .. }));
    }

    #[test]
    fn open_prompt_blocks_further_milestones() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        let mut rng = rng();
        raise_score(&mut game, 10_000.0, &mut rng, &mut events);
        raise_score(&mut game, 60_000.0, &mut rng, &mut events);
        assert_eq!(game.player.trivia_milestones_done.len(), 1);
    }

    #[test]
    fn milestone_never_fires_twice_in_a_run() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        let mut rng = rng();
        raise_score(&mut game, 10_000.0, &mut rng, &mut events);
        game.trivia = None;
        events.clear();
        raise_score(&mut game, 20_000.0, &mut rng, &mut events);
        assert!(game.trivia.is_none());
        assert!(events.is_empty());
    }

    #[test]
    fn smallest_pending_milestone_is_taken_first() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        let mut rng = rng();
        raise_score(&mut game, 60_000.0, &mut rng, &mut events);
        assert_eq!(game.trivia.as_ref().map(|p| p.milestone), Some(10_000));
        game.trivia = None;
        raise_score(&mut game, 60_001.0, &mut rng, &mut events);
        let prompt = game.trivia.as_ref().expect("second prompt");
        assert_eq!(prompt.milestone, 25_000);
        assert_eq!(prompt.reward_index, 1);
    }

    #[test]
    fn exhausted_bank_leaves_milestone_pending() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        for i in 0..TRIVIA_QUESTIONS.len() {
            game.player.trivia_asked_this_run.insert(i);
        }
        raise_score(&mut game, 10_000.0, &mut rng(), &mut events);
        assert!(game.trivia.is_none());
        assert!(game.player.trivia_milestones_done.is_empty());
    }

    #[test]
    fn empty_bank_never_prompts() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        game.player.score = 10_000.0;
        maybe_open_trivia(&mut game, &[], &mut rng(), &mut events);
        assert!(game.trivia.is_none());
    }

    #[test]
    fn reward_index_is_fixed_at_open_time() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        raise_score(&mut game, 10_000.0, &mut rng(), &mut events);
        // Completing more milestones later must not change the pending reward.
        game.player.trivia_milestones_done.insert(25_000);
        game.player.trivia_milestones_done.insert(50_000);
        let correct = open_question(&game).map(|(_, q)| q.correct).unwrap();
        events.clear();
        assert!(submit_trivia_answer(&mut game, correct, &mut events));
        assert_eq!(
            events,
            vec![Event::TriviaAnswered { correct: true, points: 2_000.0, ap: 100 }]
        );
    }

    #[test]
    fn correct_answer_rewards_score_and_ap_but_not_total() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        raise_score(&mut game, 10_000.0, &mut rng(), &mut events);
        let correct = open_question(&game).map(|(_, q)| q.correct).unwrap();
        submit_trivia_answer(&mut game, correct, &mut events);
        assert_eq!(game.player.score, 12_000.0);
        assert_eq!(game.player.total_score, 0.0);
        assert_eq!(game.player.ap, 100);
        assert_eq!(game.player.trivia_answered, 1);
        assert_eq!(game.player.trivia_correct, 1);
        assert!(game.trivia.as_ref().unwrap().submitted);
    }

    #[test]
    fn wrong_answer_counts_but_pays_nothing() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        raise_score(&mut game, 10_000.0, &mut rng(), &mut events);
        let correct = open_question(&game).map(|(_, q)| q.correct).unwrap();
        let wrong = (correct + 1) % 4;
        submit_trivia_answer(&mut game, wrong, &mut events);
        assert_eq!(game.player.score, 10_000.0);
        assert_eq!(game.player.ap, 0);
        assert_eq!(game.player.trivia_answered, 1);
        assert_eq!(game.player.trivia_correct, 0);
    }

    #[test]
    fn second_submit_is_rejected() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        raise_score(&mut game, 10_000.0, &mut rng(), &mut events);
        submit_trivia_answer(&mut game, 0, &mut events);
        events.clear();
        assert!(!submit_trivia_answer(&mut game, 0, &mut events));
        assert_eq!(
            events,
            vec![Event::ActionRejected(RejectReason::AlreadyAnswered)]
        );
        assert_eq!(game.player.trivia_answered, 1);
    }

    #[test]
    fn submit_without_prompt_is_rejected() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        assert!(!submit_trivia_answer(&mut game, 0, &mut events));
        assert_eq!(events, vec![Event::ActionRejected(RejectReason::NoTriviaOpen)]);
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        raise_score(&mut game, 10_000.0, &mut rng(), &mut events);
        events.clear();
        assert!(!submit_trivia_answer(&mut game, 99, &mut events));
        assert_eq!(events, vec![Event::ActionRejected(RejectReason::InvalidAnswer(99))]);
        assert!(!game.trivia.as_ref().unwrap().submitted);
    }

    #[test]
    fn dismiss_clears_prompt() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        raise_score(&mut game, 10_000.0, &mut rng(), &mut events);
        assert!(dismiss_trivia(&mut game, &mut events));
        assert!(game.trivia.is_none());
        assert!(!dismiss_trivia(&mut game, &mut events));
    }

    #[test]
    fn run_milestones_fire_once_each_in_order() {
        let mut game = GameState::new();
        let mut events = Vec::new();
        game.trivia = Some(TriviaPrompt {
            question_index: 0,
            milestone: 10_000,
            reward_index: 0,
            selected: None,
            submitted: false,
        });
        raise_score(&mut game, 300_000.0, &mut rng(), &mut events);
        assert_eq!(
            events,
            vec![
                Event::RunMilestoneCrossed(100_000),
                Event::RunMilestoneCrossed(250_000)
            ]
        );
        events.clear();
        // Dropping below and crossing again in the same run does nothing.
        game.player.score = 50_000.0;
        raise_score(&mut game, 300_000.0, &mut rng(), &mut events);
        assert!(events.is_empty());
    }
}
