pub mod boundary;
pub mod cli;
pub mod config;
pub mod grid;
pub mod jacobi;
pub mod output;
pub mod render;
pub mod sim;
pub mod velocity;
