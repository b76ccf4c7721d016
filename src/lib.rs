#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod buffer;
pub mod io;
pub mod model;
