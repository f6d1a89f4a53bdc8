pub mod config;
pub mod error;
pub mod game;
pub mod hole;
pub mod model;
pub mod round;
pub mod scheduler;
pub mod screen;
pub mod sim;
pub mod store;
pub mod timing;

pub use config::GameConfig;
pub use error::{ConfigError, StoreError};
pub use game::Game;
pub use model::{Activation, Bonk};
pub use scheduler::{Timer, TimerKind};
pub use screen::Screen;
pub use store::ScoreStore;
