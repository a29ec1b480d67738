pub mod app;
pub mod generator;
pub mod level;
pub mod maze;
pub mod progress;
pub mod solver;
