use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::hole::Holes;
use crate::model::{Activation, Bonk};
use crate::round::Round;
use crate::scheduler::{Next, Phase, PeepCycle, Timer, TimerKind};
use crate::screen::Screen;
use crate::store::ScoreStore;
use rand::Rng;

/// Round controller. Owns the round state and its collaborators; the host
/// arms every returned [`Timer`] and passes it back to [`Game::fire`] once
/// its delay has elapsed.
pub struct Game<S, D, R> {
    config: GameConfig,
    holes: Holes,
    round: Round,
    cycle: PeepCycle,
    best: u32,
    store: S,
    screen: D,
    rng: R,
}

impl<S: ScoreStore, D: Screen, R: Rng> Game<S, D, R> {
    pub fn new(config: GameConfig, store: S, mut screen: D, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let best = if config.track_best {
            let best = match store.get(&config.best_score_key) {
                Ok(best) => best.unwrap_or(0),
                Err(err) => {
                    log::warn!("could not read best score, starting from 0: {err}");
                    0
                }
            };
            screen.show_best_score(best);
            best
        } else {
            0
        };

        Ok(Game {
            holes: Holes::new(config.holes),
            round: Round::default(),
            cycle: PeepCycle::new(config.peep_min_ms, config.peep_max_ms),
            best,
            config,
            store,
            screen,
            rng,
        })
    }

    pub fn start_round(&mut self) -> Vec<Timer> {
        self.screen.show_score(0);
        self.round = self.round.next();
        for hole in self.holes.clear() {
            self.screen.show_peep(hole, false);
        }
        self.cycle.reset();
        log::info!("round {} started", self.round.number());

        let hide = self.peep();
        let round_over = Timer {
            round: self.round.number(),
            kind: TimerKind::RoundOver,
            delay: self.config.round_length(),
        };
        vec![hide, round_over]
    }

    pub fn fire(&mut self, timer: Timer) -> Vec<Timer> {
        if timer.round != self.round.number() {
            log::trace!("dropping {:?} from round {}", timer.kind, timer.round);
            return Vec::new();
        }

        match timer.kind {
            TimerKind::Hide { hole } => self.hide(hole).into_iter().collect(),
            TimerKind::RoundOver => {
                self.finish_round();
                Vec::new()
            }
        }
    }

    pub fn bonk(&mut self, activation: Activation) -> Bonk {
        let Activation { hole, trusted } = activation;
        if !trusted {
            log::debug!("ignoring synthetic click on hole {hole}");
            return Bonk::Untrusted;
        }
        if !self.holes.is_peeping(hole) {
            return Bonk::Missed;
        }

        let score = self.round.add_point();
        self.holes.set(hole, false);
        self.screen.show_peep(hole, false);
        self.screen.show_score(score);
        log::debug!("bonked hole {hole}, score {score}");
        Bonk::Scored { score }
    }

    fn peep(&mut self) -> Timer {
        let timer = self
            .cycle
            .activate(&mut self.rng, &mut self.holes, &mut self.round);
        if let TimerKind::Hide { hole } = timer.kind {
            self.screen.show_peep(hole, true);
            log::debug!("hole {hole} peeps for {:?}", timer.delay);
        }
        timer
    }

    fn hide(&mut self, hole: usize) -> Option<Timer> {
        let was_peeping = self.holes.is_peeping(hole);
        let next = self.cycle.deactivate(hole, &mut self.holes, &self.round);
        if next != Next::Ignore && was_peeping {
            self.screen.show_peep(hole, false);
        }

        match next {
            Next::Peep => Some(self.peep()),
            Next::Stop => {
                log::debug!("peep loop stopped after round {}", self.round.number());
                None
            }
            Next::Ignore => None,
        }
    }

    fn finish_round(&mut self) {
        if !self.round.finish() {
            return;
        }

        let score = self.round.score();
        log::info!("round {} over with score {score}", self.round.number());
        if !self.config.track_best || score <= self.best {
            return;
        }

        self.best = score;
        log::info!("new best score {score}");
        if let Err(err) = self.store.set(&self.config.best_score_key, score) {
            log::warn!("could not save best score: {err}");
        }
        self.screen.show_best_score(score);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn holes(&self) -> &Holes {
        &self.holes
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn phase(&self) -> Phase {
        self.cycle.phase()
    }

    pub fn score(&self) -> u32 {
        self.round.score()
    }

    pub fn best_score(&self) -> u32 {
        self.best
    }

    pub fn is_running(&self) -> bool {
        !self.round.is_time_up()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn screen(&self) -> &D {
        &self.screen
    }
}
