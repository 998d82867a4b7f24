#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod errors;
mod events;
mod msg;
mod stake;
mod storage;

#[cfg(test)]
mod tests;

pub use contract::*;
