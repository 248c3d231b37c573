mod cell;
mod error;
mod grid;
mod patterns;
mod strategy;
pub mod codec;

pub use cell::Cell;
pub use codec::{DecodedPattern, apply_pattern, decode, decode_with_offset, encode, encode_to_string};
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use strategy::Strategy;
