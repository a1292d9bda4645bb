//! A Rust re-write of the Stockfish chess engine.
//!
//! This crate is not intended to be used by other crates as a dependency, as it's a mostly useful as a direct
//! executable.
//!
//! If you are interested in using the direct chess library functions (The Boards, move generation, etc), please
//! checkout the core library, `corvid`, available on [on crates.io](https://crates.io/crates/corvid).
//!

#![cfg_attr(test, allow(dead_code))]

#![allow(dead_code)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
extern crate rand;
extern crate corvid;
extern crate chrono;
extern crate crossbeam_utils;
extern crate prefetch;
#[macro_use]
extern crate log;
extern crate thiserror;

pub mod endgame;
pub mod threadpool;
pub mod sync;
pub mod time;
pub mod consts;
pub mod uci;
pub mod root_moves;
pub mod movepick;
pub mod tables;
pub mod engine;
pub mod search;
pub mod error;
pub mod config;

pub use consts::*;