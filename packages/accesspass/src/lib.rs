#![no_std]

pub mod macros;
pub mod pass_collection;
pub mod treasury;
pub mod ttl;
