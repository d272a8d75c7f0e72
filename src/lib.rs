#![no_std]

extern crate alloc;

#[macro_use]
extern crate log;

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod config;
pub mod error;
pub mod fcs;
pub mod hal;
pub mod lights;
pub mod servo;

pub use error::Error;
