#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod errors;
mod events;
mod msg;
mod rent;
mod storage;


pub use contract::*;
