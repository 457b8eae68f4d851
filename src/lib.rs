//! passtretcher: deterministic string stretching.
//!
//! Turns an arbitrary string into a long, pseudorandom-looking lowercase hex
//! string of a requested length. The same input and length always give the
//! same output.
//!
//! # Architecture
//!
//! ```text
//! hashing   (Stage A: SHA3-512 / BLAKE2b-512 / SHA-512 rotation)
//!     ↓ 64-byte digest
//! encoding  (Stage B: base85 → base64 → hex cascade)
//!     ↓ ASCII hex seed
//! hashing::xof (Stage C: SHAKE-256 length extension)
//! ```
//!
//! [`stretcher`] wires the stages together; [`config`] turns command-line
//! arguments into a [`StretchConfig`](config::StretchConfig).
//!
//! This is a fixed-schedule scrambler, not a password hashing or key
//! derivation function: it has no salt and no tunable work factor.
//!
//! # Examples
//!
//! ```
//! use passtretcher::transform;
//!
//! let out = transform("hello", 10);
//! assert_eq!(out, "a4be34ee20");
//! assert_eq!(transform("hello", 10), out);
//! ```
//!
//! Odd lengths are exact too:
//!
//! ```
//! use passtretcher::transform;
//!
//! assert_eq!(transform("x", 11).len(), 11);
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod hashing;
pub mod stretcher;

pub use error::StretchError;
pub use stretcher::{
    iteration_count, transform, transform_traced, Transcript, DEFAULT_OUTPUT_LENGTH,
};
