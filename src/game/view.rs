use common::Screen;
use std::rc::Rc;
use yew::{Reducible, UseReducerHandle};

/// What the board currently shows. Only ever written by the game.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardView {
    pub score: u32,
    pub best: Option<u32>,
    pub peeping: Vec<bool>,
}

impl BoardView {
    pub fn new(holes: usize) -> Self {
        BoardView {
            score: 0,
            best: None,
            peeping: vec![false; holes],
        }
    }
}

#[derive(Debug)]
pub enum ViewAction {
    Score(u32),
    Best(u32),
    Peep(usize, bool),
}

impl Reducible for BoardView {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = (*self).clone();

        match action {
            ViewAction::Score(score) => view.score = score,
            ViewAction::Best(best) => view.best = Some(best),
            ViewAction::Peep(hole, peeping) => {
                if hole >= view.peeping.len() {
                    view.peeping.resize(hole + 1, false);
                }
                view.peeping[hole] = peeping;
            }
        }

        view.into()
    }
}

pub struct WebScreen {
    view: UseReducerHandle<BoardView>,
}

impl WebScreen {
    pub fn new(view: UseReducerHandle<BoardView>) -> Self {
        WebScreen { view }
    }
}

impl Screen for WebScreen {
    fn show_score(&mut self, score: u32) {
        self.view.dispatch(ViewAction::Score(score));
    }

    fn show_best_score(&mut self, best: u32) {
        self.view.dispatch(ViewAction::Best(best));
    }

    fn show_peep(&mut self, hole: usize, peeping: bool) {
        self.view.dispatch(ViewAction::Peep(hole, peeping));
    }
}
