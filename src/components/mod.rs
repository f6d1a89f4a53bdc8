pub mod app;
pub mod board;
pub mod button;
pub mod hole;
