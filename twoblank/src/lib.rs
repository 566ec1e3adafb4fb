#![doc = include_str!("../README.md")]

pub mod error;
pub mod input;
pub mod path;
pub mod solver;
pub mod stats;
pub mod puzzle_sliding16x2;
