//! **tilegrid** is a 2-D lattice cell library for tile matching games: typed cells with four
//! directional neighbour relations and in-place position swaps that keep the wiring consistent.

#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

extern crate itertools;
extern crate rand;
extern crate smallvec;

#[cfg(test)]
extern crate quickcheck;

pub mod cells;
pub mod lattice;
pub mod node;
pub mod units;
