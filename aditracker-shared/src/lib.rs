#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(clippy::pedantic)]

//! Target-independent building blocks for the aditracker GitHub sign-in flow.
//!
//! The web front-end renders these; everything here compiles and tests natively.

pub mod config;
pub mod control;
pub mod errors;
pub mod flow;
pub mod models;
pub mod navigation;

#[cfg(test)]
pub(crate) mod testing;
