// hdentropy-entropy/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod conditional;

/// Entropy measured in bits.
pub type Bits = f64;
