#![no_std]

extern crate alloc;

pub use board::*;
pub use coords::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use save::*;
pub use tile::*;
pub use types::*;

mod board;
mod coords;
mod engine;
mod error;
mod generator;
mod save;
mod tile;
mod types;
