mod storage;
mod timer;
mod view;

pub use view::BoardView;

use storage::LocalStore;
use view::WebScreen;

use common::{Activation, Bonk, ConfigError, Game, GameConfig, Timer};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use yew::UseReducerHandle;

type WhackGame = Game<LocalStore, WebScreen, StdRng>;

/// Columns and rows of the most square grid that fits `holes`.
pub fn grid_size(holes: usize) -> (usize, usize) {
    let columns = (1..=holes.max(1))
        .find(|columns| columns * columns >= holes)
        .unwrap_or(1);
    let rows = (holes + columns - 1) / columns;
    (columns, rows.max(1))
}

/// The game shared between DOM callbacks and pending timeouts.
#[derive(Clone)]
pub struct Session {
    game: Rc<RefCell<WhackGame>>,
}

impl Session {
    pub fn new(config: GameConfig, view: UseReducerHandle<BoardView>) -> Result<Self, ConfigError> {
        let game = Game::new(config, LocalStore::open(), WebScreen::new(view), StdRng::from_entropy())?;
        Ok(Session {
            game: Rc::new(RefCell::new(game)),
        })
    }

    pub fn start(&self) {
        let timers = self.game.borrow_mut().start_round();
        self.arm(timers);
    }

    pub fn bonk(&self, activation: Activation) -> Bonk {
        self.game.borrow_mut().bonk(activation)
    }

    fn fire(&self, timer: Timer) {
        let timers = self.game.borrow_mut().fire(timer);
        self.arm(timers);
    }

    fn arm(&self, timers: Vec<Timer>) {
        for timer in timers {
            let session = self.clone();
            if let Err(err) = timer::set_timeout(timer.delay, move || session.fire(timer)) {
                log::error!("could not arm {:?}: {:?}", timer.kind, err);
            }
        }
    }
}
