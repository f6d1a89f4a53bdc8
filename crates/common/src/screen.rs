/// Write-only view of the game. The core never reads back what it shows.
pub trait Screen {
    fn show_score(&mut self, score: u32);
    fn show_best_score(&mut self, best: u32);
    fn show_peep(&mut self, hole: usize, peeping: bool);
}

impl Screen for () {
    fn show_score(&mut self, _score: u32) {}
    fn show_best_score(&mut self, _best: u32) {}
    fn show_peep(&mut self, _hole: usize, _peeping: bool) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenEvent {
    Score(u32),
    BestScore(u32),
    Peep(usize, bool),
}

/// Keeps everything it is shown, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingScreen {
    pub events: Vec<ScreenEvent>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|event| match event {
            ScreenEvent::Score(score) => Some(*score),
            _ => None,
        })
    }

    pub fn best_score(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|event| match event {
            ScreenEvent::BestScore(best) => Some(*best),
            _ => None,
        })
    }
}

impl Screen for RecordingScreen {
    fn show_score(&mut self, score: u32) {
        self.events.push(ScreenEvent::Score(score));
    }

    fn show_best_score(&mut self, best: u32) {
        self.events.push(ScreenEvent::BestScore(best));
    }

    fn show_peep(&mut self, hole: usize, peeping: bool) {
        self.events.push(ScreenEvent::Peep(hole, peeping));
    }
}
