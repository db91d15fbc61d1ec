#![doc = include_str!("../README.md")]
#![warn(missing_docs, unreachable_pub, rust_2021_compatibility)]
#![warn(clippy::all, clippy::pedantic)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod arithmetic;
pub mod bitlen;
pub mod codec;
pub mod ct;

pub use arithmetic::uint::{Uint, U128, U255, U256, U32, U381, U384, U448, U512, U64};
pub use codec::{error::ParseError, Endianness};
pub use ct::{SecretBool, SecretWord};
