//! Fixed timestep simulation tick
//!
//! One call advances the whole frame pipeline: input, basket motion, ball
//! physics, then collisions and scoring.

use super::collision::{ball_backboard_bounce, ball_out_of_bounds, ball_through_rim};
use super::state::{AimDir, GameEvent, GameState};

/// A single discrete key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Release the ball
    Throw,
    /// Nudge the launch power by one unit
    Aim(AimDir),
}

/// Presses collected since the previous tick, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Advance the game by one tick and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Commands only apply while the ball is at rest; the first throw wins
    for command in &input.commands {
        if state.ball.is_thrown() {
            break;
        }
        match *command {
            Command::Throw => {
                let power = state.launch.0;
                state.ball.throw(power);
                state.scoreboard.shots += 1;
                events.push(GameEvent::Thrown { power });
            }
            Command::Aim(dir) => state.launch.adjust(dir, state.settings.launch_limit),
        }
    }

    state.basket.step();

    if state.ball.is_thrown() {
        state.ball.integrate(state.settings.gravity);
    }

    // Scoring ends the tick: the reset ball can't touch anything else
    if ball_through_rim(&state.ball, &state.basket) {
        let new_best = state.scoreboard.record_make();
        events.push(GameEvent::Scored {
            score: state.scoreboard.score,
            streak: state.scoreboard.streak,
        });
        if new_best {
            events.push(GameEvent::NewBestStreak {
                streak: state.scoreboard.best_streak,
            });
        }
        state.reset_ball();
        return events;
    }

    if ball_backboard_bounce(&mut state.ball, &state.basket) {
        events.push(GameEvent::BackboardHit {
            vel_x: state.ball.vel.x,
        });
    }

    if ball_out_of_bounds(&state.ball) {
        let lost_streak = state.scoreboard.streak;
        state.scoreboard.record_miss();
        events.push(GameEvent::Missed { lost_streak });
        state.reset_ball();
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BallPhase;
    use crate::start_pos;
    use glam::Vec2;

    fn input(commands: &[Command]) -> TickInput {
        TickInput {
            commands: commands.to_vec(),
        }
    }

    /// Put the ball just above the rim, falling, ready to score next tick
    fn line_up_make(state: &mut GameState) {
        state.ball.throw(Vec2::new(0.0, 1.0));
        let basket = &state.basket;
        let next_basket_y = basket.y + basket.speed * basket.direction;
        state.ball.pos = Vec2::new(basket.x + 20.0, next_basket_y - 10.0);
    }

    #[test]
    fn test_aim_then_throw() {
        let mut state = GameState::default();
        let up = Command::Aim(AimDir::Up);
        tick(&mut state, &input(&[up, up, up]));
        assert_eq!(state.launch.0, Vec2::new(12.0, -18.0));
        assert_eq!(state.ball.phase, BallPhase::Idle);

        let events = tick(&mut state, &input(&[Command::Throw]));
        assert_eq!(
            events,
            vec![GameEvent::Thrown {
                power: Vec2::new(12.0, -18.0)
            }]
        );
        assert_eq!(state.ball.phase, BallPhase::Flying);
        // Released and integrated once in the same tick
        assert_eq!(state.ball.pos, Vec2::new(112.0, 482.0));
        assert_eq!(state.ball.vel, Vec2::new(12.0, -17.5));
        assert_eq!(state.scoreboard.shots, 1);
    }

    #[test]
    fn test_first_flight_tick() {
        let mut state = GameState::default();
        tick(&mut state, &input(&[Command::Throw]));
        assert_eq!(state.ball.pos, Vec2::new(112.0, 485.0));
        assert_eq!(state.ball.vel, Vec2::new(12.0, -14.5));
    }

    #[test]
    fn test_aim_ignored_in_flight() {
        let mut state = GameState::default();
        tick(&mut state, &input(&[Command::Throw]));
        let right = Command::Aim(AimDir::Right);
        tick(&mut state, &input(&[right, Command::Aim(AimDir::Up)]));
        assert_eq!(state.launch.0, Vec2::new(12.0, -15.0));
    }

    #[test]
    fn test_aim_after_throw_in_same_tick_ignored() {
        let mut state = GameState::default();
        tick(
            &mut state,
            &input(&[Command::Throw, Command::Aim(AimDir::Up)]),
        );
        assert_eq!(state.launch.0, Vec2::new(12.0, -15.0));
        assert_eq!(state.ball.vel.x, 12.0);
    }

    #[test]
    fn test_repeat_throw_is_noop() {
        let mut state = GameState::default();
        tick(&mut state, &input(&[Command::Throw]));
        let vel = state.ball.vel;
        let events = tick(&mut state, &input(&[Command::Throw, Command::Throw]));
        assert!(events.is_empty());
        assert_eq!(state.scoreboard.shots, 1);
        assert_eq!(state.ball.vel, vel + Vec2::new(0.0, 0.5));
    }

    #[test]
    fn test_idle_ball_stays_put() {
        let mut state = GameState::default();
        for _ in 0..120 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.ball.pos, start_pos());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.time_ticks, 120);
    }

    #[test]
    fn test_score_resets_ball_and_bumps_streak() {
        let mut state = GameState::default();
        state.launch.adjust(AimDir::Up, 40.0);
        line_up_make(&mut state);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![
                GameEvent::Scored { score: 1, streak: 1 },
                GameEvent::NewBestStreak { streak: 1 },
            ]
        );
        assert_eq!(state.ball.pos, start_pos());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.phase, BallPhase::Idle);
        assert_eq!(state.launch.0, Vec2::new(12.0, -15.0));
    }

    #[test]
    fn test_make_skips_backboard_check() {
        let mut state = GameState::default();
        state.ball.throw(Vec2::new(0.0, 1.0));
        // After the basket steps to y=303 and the ball to (712, 295), its box
        // overlaps both the rim (650..730) and the backboard (725..730)
        state.ball.pos = Vec2::new(712.0, 294.0);
        let mut basket = state.basket.clone();
        basket.step();
        let mut ball = state.ball.clone();
        ball.integrate(state.settings.gravity);
        assert!(ball.bounds().intersects(&basket.rim()));
        assert!(ball.bounds().intersects(&basket.backboard()));

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![
                GameEvent::Scored { score: 1, streak: 1 },
                GameEvent::NewBestStreak { streak: 1 },
            ]
        );
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.pos, start_pos());
    }

    #[test]
    fn test_miss_resets_streak() {
        let mut state = GameState::default();
        state.scoreboard.streak = 4;
        state.scoreboard.best_streak = 4;
        state.ball.throw(Vec2::new(5.0, 2.0));
        state.ball.pos = Vec2::new(100.0, 599.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::Missed { lost_streak: 4 }]);
        assert_eq!(state.scoreboard.streak, 0);
        assert_eq!(state.scoreboard.best_streak, 4);
        assert_eq!(state.ball.pos, start_pos());
        assert!(!state.ball.is_thrown());
    }

    #[test]
    fn test_backboard_bounce_event() {
        let mut state = GameState::default();
        state.ball.throw(Vec2::new(8.0, -2.0));
        let board = state.basket.backboard();
        // After the basket moves 3px down, the ball lands on the board's face
        state.ball.pos = Vec2::new(board.x - 15.0 - 4.0, board.y + 3.0 + 20.0 + 2.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::BackboardHit { vel_x: -8.0 }]);
        assert_eq!(state.ball.vel.x, -8.0);
        assert!(state.ball.bounds().right() < state.basket.backboard().x);
    }

    #[test]
    fn test_fire_streak_until_miss() {
        let mut state = GameState::default();
        for expected in 1..=3 {
            line_up_make(&mut state);
            tick(&mut state, &TickInput::default());
            assert_eq!(state.scoreboard.streak, expected);
        }
        assert!(state.is_on_fire());

        line_up_make(&mut state);
        tick(&mut state, &TickInput::default());
        assert!(state.is_on_fire());

        state.ball.throw(Vec2::new(0.0, 5.0));
        state.ball.pos = Vec2::new(100.0, 598.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.scoreboard.streak, 0);
        assert!(!state.is_on_fire());
        assert_eq!(state.scoreboard.best_streak, 4);
        assert_eq!(state.scoreboard.score, 4);
    }

    #[test]
    fn test_full_shot_eventually_resolves() {
        let mut state = GameState::default();
        tick(&mut state, &input(&[Command::Throw]));
        let mut resolved = false;
        for _ in 0..600 {
            let events = tick(&mut state, &TickInput::default());
            if events
                .iter()
                .any(|e| matches!(e, GameEvent::Scored { .. } | GameEvent::Missed { .. }))
            {
                resolved = true;
                break;
            }
        }
        assert!(resolved);
        assert!(!state.ball.is_thrown());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::default();
        let mut state2 = GameState::default();

        let inputs = [
            input(&[Command::Aim(AimDir::Up)]),
            input(&[Command::Aim(AimDir::Right)]),
            input(&[Command::Throw]),
            TickInput::default(),
            TickInput::default(),
        ];

        for tick_input in &inputs {
            assert_eq!(tick(&mut state1, tick_input), tick(&mut state2, tick_input));
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.basket.y, state2.basket.y);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn command() -> impl Strategy<Value = Command> {
            prop_oneof![
                Just(Command::Throw),
                Just(Command::Aim(AimDir::Up)),
                Just(Command::Aim(AimDir::Down)),
                Just(Command::Aim(AimDir::Left)),
                Just(Command::Aim(AimDir::Right)),
            ]
        }

        proptest! {
            #[test]
            fn basket_stays_within_one_step_of_bounds(
                ticks in 1usize..2000,
            ) {
                let mut state = GameState::default();
                let slack = state.basket.speed;
                for _ in 0..ticks {
                    let before = state.basket.clone();
                    tick(&mut state, &TickInput::default());
                    let basket = &state.basket;
                    prop_assert!(basket.y >= basket.min_y - slack);
                    prop_assert!(basket.y <= basket.max_y + slack);
                    let crossed = basket.y > basket.max_y || basket.y < basket.min_y;
                    prop_assert_eq!(basket.direction != before.direction, crossed);
                }
            }

            #[test]
            fn launch_power_frozen_while_flying(
                frames in proptest::collection::vec(
                    proptest::collection::vec(command(), 0..4),
                    1..200,
                ),
            ) {
                let mut state = GameState::default();
                for commands in frames {
                    let was_thrown = state.ball.is_thrown();
                    let before = state.launch;
                    let events = tick(&mut state, &TickInput { commands });
                    let reset = events.iter().any(|e| {
                        matches!(e, GameEvent::Scored { .. } | GameEvent::Missed { .. })
                    });
                    if was_thrown && !reset {
                        prop_assert_eq!(state.launch, before);
                    }
                }
            }

            #[test]
            fn streak_only_grows_by_one_or_resets(
                frames in proptest::collection::vec(
                    proptest::collection::vec(command(), 0..3),
                    1..400,
                ),
            ) {
                let mut state = GameState::default();
                for commands in frames {
                    let before = state.scoreboard.clone();
                    tick(&mut state, &TickInput { commands });
                    let after = &state.scoreboard;
                    prop_assert!(
                        after.streak == before.streak
                            || after.streak == before.streak + 1
                            || after.streak == 0
                    );
                    prop_assert!(after.score >= before.score);
                    prop_assert!(after.best_streak >= after.streak);
                }
            }
        }
    }
}
