use crate::game::Game;
use crate::model::{Activation, Bonk};
use crate::scheduler::Timer;
use crate::screen::Screen;
use crate::store::ScoreStore;
use rand::Rng;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    due: Duration,
    seq: u64,
    timer: Timer,
}

/// Drives a [`Game`] on a virtual clock. Timers fire in due order, ties in
/// the order they were armed.
pub struct Simulation<S, D, R> {
    game: Game<S, D, R>,
    now: Duration,
    seq: u64,
    pending: BinaryHeap<Reverse<Pending>>,
}

impl<S: ScoreStore, D: Screen, R: Rng> Simulation<S, D, R> {
    pub fn new(game: Game<S, D, R>) -> Self {
        Simulation {
            game,
            now: Duration::ZERO,
            seq: 0,
            pending: BinaryHeap::new(),
        }
    }

    fn arm(&mut self, timers: Vec<Timer>) {
        for timer in timers {
            self.seq += 1;
            self.pending.push(Reverse(Pending {
                due: self.now + timer.delay,
                seq: self.seq,
                timer,
            }));
        }
    }

    pub fn start_round(&mut self) {
        let timers = self.game.start_round();
        self.arm(timers);
    }

    pub fn bonk(&mut self, activation: Activation) -> Bonk {
        self.game.bonk(activation)
    }

    /// Fires the next pending timer, moving the clock to its due time.
    pub fn step(&mut self) -> Option<Timer> {
        let Reverse(Pending { due, timer, .. }) = self.pending.pop()?;
        self.now = self.now.max(due);
        let timers = self.game.fire(timer);
        self.arm(timers);
        Some(timer)
    }

    pub fn advance_to(&mut self, at: Duration) -> usize {
        let mut fired = 0;
        while self.next_due().map_or(false, |due| due <= at) {
            self.step();
            fired += 1;
        }
        self.now = self.now.max(at);
        fired
    }

    pub fn advance_by(&mut self, by: Duration) -> usize {
        self.advance_to(self.now + by)
    }

    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while self.step().is_some() {
            fired += 1;
        }
        fired
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse(pending)| pending.due)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn game(&self) -> &Game<S, D, R> {
        &self.game
    }

    pub fn into_game(self) -> Game<S, D, R> {
        self.game
    }
}
