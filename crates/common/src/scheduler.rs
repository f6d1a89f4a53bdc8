use crate::hole::{pick_hole, Holes};
use crate::round::Round;
use crate::timing::sample_duration;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKind {
    Hide { hole: usize },
    RoundOver,
}

/// A delayed callback the host must arm and later hand back to
/// [`Game::fire`](crate::game::Game::fire).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timer {
    pub round: u64,
    pub kind: TimerKind,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Peeping { hole: usize },
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    Peep,
    Stop,
    /// The hide did not belong to the current peep.
    Ignore,
}

/// The peep loop: activate a hole, wait, deactivate it, repeat until time is up.
#[derive(Clone, Debug)]
pub struct PeepCycle {
    phase: Phase,
    peep_min_ms: u32,
    peep_max_ms: u32,
}

impl PeepCycle {
    pub fn new(peep_min_ms: u32, peep_max_ms: u32) -> Self {
        PeepCycle {
            phase: Phase::Idle,
            peep_min_ms,
            peep_max_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn activate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        holes: &mut Holes,
        round: &mut Round,
    ) -> Timer {
        let hole = pick_hole(rng, holes.len(), round.last_hole());
        holes.set(hole, true);
        round.set_last_hole(hole);
        self.phase = Phase::Peeping { hole };

        let millis = sample_duration(rng, self.peep_min_ms, self.peep_max_ms);
        Timer {
            round: round.number(),
            kind: TimerKind::Hide { hole },
            delay: Duration::from_millis(millis.into()),
        }
    }

    /// Hides `hole` and decides whether the loop goes on.
    pub fn deactivate(&mut self, hole: usize, holes: &mut Holes, round: &Round) -> Next {
        if self.phase != (Phase::Peeping { hole }) {
            return Next::Ignore;
        }

        holes.set(hole, false);
        if round.is_time_up() {
            self.phase = Phase::Stopped;
            Next::Stop
        } else {
            Next::Peep
        }
    }
}
