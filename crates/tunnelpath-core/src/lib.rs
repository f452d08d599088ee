//! **tunnelpath-core**: board model shared by the tunnelpath crates.
//!
//! This crate provides geometry primitives, terrain symbols, the [`Board`]
//! grid and the [`TunnelTable`] of paired teleport entrances. Everything here
//! is built once and immutable during search.

pub mod board;
pub mod error;
pub mod geom;
pub mod terrain;
pub mod tunnel;

pub use board::Board;
pub use error::BoardError;
pub use geom::{Point, Range};
pub use terrain::{Terrain, TerrainCounts};
pub use tunnel::{TUNNEL_DIGITS, TunnelTable};
