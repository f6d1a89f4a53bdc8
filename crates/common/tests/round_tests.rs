use common::config::GameConfig;
use common::scheduler::{Timer, TimerKind};
use common::screen::{RecordingScreen, ScreenEvent};
use common::sim::Simulation;
use common::store::MemoryStore;
use common::{Activation, Bonk, Game, ScoreStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

type Sim = Simulation<MemoryStore, RecordingScreen, StdRng>;

fn simulation(config: GameConfig, store: MemoryStore, seed: u64) -> Sim {
    let game = Game::new(config, store, RecordingScreen::new(), StdRng::seed_from_u64(seed)).unwrap();
    Simulation::new(game)
}

fn peeping(sim: &Sim) -> Vec<usize> {
    sim.game().holes().peeping().collect()
}

#[test]
fn test_invariants_over_whole_rounds() {
    for seed in 0..20 {
        let mut sim = simulation(GameConfig::default(), MemoryStore::new(), seed);
        let mut player = StdRng::seed_from_u64(seed + 1000);
        sim.start_round();

        let mut last_score = 0;
        let mut last_peep = peeping(&sim).first().copied();
        while let Some(timer) = sim.step() {
            assert!(peeping(&sim).len() <= 1, "two holes peeping at {:?}", sim.now());

            if let TimerKind::Hide { hole } = timer.kind {
                if let Some(&next) = peeping(&sim).first() {
                    assert_ne!(next, hole, "hole {hole} peeped twice in a row");
                    last_peep = Some(next);
                }
            }

            if player.gen_bool(0.5) {
                if let Some(hole) = last_peep {
                    let trusted = player.gen_bool(0.8);
                    sim.bonk(Activation { hole, trusted });
                }
            }

            let score = sim.game().score();
            assert!(score >= last_score);
            last_score = score;
        }

        assert!(!sim.game().is_running());
        assert_eq!(peeping(&sim), Vec::<usize>::new());
    }
}

#[test]
fn test_peeps_never_repeat() {
    let mut sim = simulation(GameConfig::default(), MemoryStore::new(), 77);
    sim.start_round();

    let mut shown = Vec::new();
    sim.run_until_idle();
    for event in &sim.game().screen().events {
        if let ScreenEvent::Peep(hole, true) = event {
            shown.push(*hole);
        }
    }

    assert!(shown.len() > 10);
    assert!(shown.windows(2).all(|pair| pair[0] != pair[1]));
}

#[test]
fn test_bonk_before_hide() {
    let mut sim = simulation(GameConfig::default(), MemoryStore::new(), 5);
    sim.start_round();
    let hole = peeping(&sim)[0];

    sim.advance_by(Duration::from_millis(100));
    assert_eq!(sim.bonk(Activation::trusted(hole)), Bonk::Scored { score: 1 });
    assert_eq!(sim.game().score(), 1);
    assert!(peeping(&sim).is_empty());
    assert_eq!(sim.game().screen().score(), Some(1));
}

#[test]
fn test_synthetic_bonk_changes_nothing() {
    let mut sim = simulation(GameConfig::default(), MemoryStore::new(), 5);
    sim.start_round();
    let hole = peeping(&sim)[0];

    assert_eq!(sim.bonk(Activation::synthetic(hole)), Bonk::Untrusted);
    assert_eq!(sim.game().score(), 0);
    assert_eq!(peeping(&sim), vec![hole]);
}

/// Bonks the mole every time one is up, `times` times, then lets the round run out.
fn play(sim: &mut Sim, times: u32) {
    sim.start_round();
    for _ in 0..times {
        let hole = peeping(sim)[0];
        assert!(matches!(sim.bonk(Activation::trusted(hole)), Bonk::Scored { .. }));
        sim.step();
    }
    sim.run_until_idle();
}

#[test]
fn test_new_best_score_is_saved() {
    let mut sim = simulation(GameConfig::default(), MemoryStore::with("highestScore", 5), 8);
    play(&mut sim, 7);

    let game = sim.into_game();
    assert_eq!(game.score(), 7);
    assert_eq!(game.best_score(), 7);
    assert_eq!(game.store().get("highestScore"), Ok(Some(7)));
    assert_eq!(game.store().writes(), 1);
    assert_eq!(game.screen().best_score(), Some(7));
}

#[test]
fn test_lower_score_keeps_best() {
    let mut sim = simulation(GameConfig::default(), MemoryStore::with("highestScore", 5), 8);
    play(&mut sim, 3);

    let game = sim.into_game();
    assert_eq!(game.score(), 3);
    assert_eq!(game.best_score(), 5);
    assert_eq!(game.store().writes(), 0);
    assert_eq!(game.screen().best_score(), Some(5));
}

#[test]
fn test_best_score_across_rounds() {
    let mut sim = simulation(GameConfig::default(), MemoryStore::new(), 13);
    play(&mut sim, 4);
    play(&mut sim, 2);
    play(&mut sim, 6);

    let game = sim.into_game();
    assert_eq!(game.round().number(), 3);
    assert_eq!(game.best_score(), 6);
    assert_eq!(game.store().writes(), 2);
    assert_eq!(game.store().get("highestScore"), Ok(Some(6)));
}

#[test]
fn test_round_over_during_peep() {
    let config = GameConfig {
        peep_min_ms: 1000,
        peep_max_ms: 1000,
        round_ms: 2500,
        ..GameConfig::default()
    };
    let mut sim = simulation(config, MemoryStore::new(), 2);
    sim.start_round();

    sim.advance_to(Duration::from_millis(2500));
    assert!(!sim.game().is_running());
    // The third peep started at 2000 ms and is still up.
    assert_eq!(peeping(&sim).len(), 1);

    assert_eq!(sim.run_until_idle(), 1);
    assert_eq!(sim.now(), Duration::from_millis(3000));
    assert!(peeping(&sim).is_empty());
}

#[test]
fn test_single_hole_repeats() {
    let config = GameConfig {
        holes: 1,
        ..GameConfig::default()
    };
    let mut sim = simulation(config, MemoryStore::new(), 4);
    sim.start_round();
    let fired = sim.run_until_idle();

    assert!(fired > 10);
    assert!(sim
        .game()
        .screen()
        .events
        .iter()
        .all(|event| !matches!(event, ScreenEvent::Peep(hole, _) if *hole != 0)));
}

#[test]
fn test_restart_mid_round() {
    let mut sim = simulation(GameConfig::default(), MemoryStore::new(), 31);
    sim.start_round();
    sim.advance_to(Duration::from_secs(5));
    sim.start_round();

    // The first round's end at 10 s must not end the second one.
    sim.advance_to(Duration::from_millis(14_000));
    assert!(sim.game().is_running());
    assert_eq!(peeping(&sim).len(), 1);

    sim.run_until_idle();
    assert!(!sim.game().is_running());
    assert!(sim.now() >= Duration::from_secs(15));
}

#[test]
fn test_stale_timer_is_dropped() {
    let mut sim = simulation(GameConfig::default(), MemoryStore::new(), 1);
    sim.start_round();
    sim.run_until_idle();

    let stale = Timer {
        round: 0,
        kind: TimerKind::RoundOver,
        delay: Duration::ZERO,
    };
    let mut game = sim.into_game();
    assert!(game.fire(stale).is_empty());
    assert_eq!(game.round().number(), 1);
}
