/// Score keeping for one timed session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    number: u64,
    score: u32,
    time_up: bool,
    last_hole: Option<usize>,
}

impl Default for Round {
    /// The placeholder before the first start: round zero, already over.
    fn default() -> Self {
        Round {
            number: 0,
            score: 0,
            time_up: true,
            last_hole: None,
        }
    }
}

impl Round {
    /// Starts the round after `self`. The last peeping hole carries over so
    /// the first peep of the new round does not repeat it either.
    pub fn next(&self) -> Round {
        Round {
            number: self.number + 1,
            score: 0,
            time_up: false,
            last_hole: self.last_hole,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_time_up(&self) -> bool {
        self.time_up
    }

    pub fn last_hole(&self) -> Option<usize> {
        self.last_hole
    }

    pub fn set_last_hole(&mut self, hole: usize) {
        self.last_hole = Some(hole);
    }

    pub fn add_point(&mut self) -> u32 {
        self.score = self.score.saturating_add(1);
        self.score
    }

    /// Returns `false` if the round was already over.
    pub fn finish(&mut self) -> bool {
        !std::mem::replace(&mut self.time_up, true)
    }
}
