#![cfg_attr(not(feature = "std"), no_std)]

//! # Threshold secret sharing with Feldman verification
//!
//! Splits a secret into `n` shares over the Mersenne-prime field of order `2^127 - 1`
//! such that any `t` of them reconstruct it exactly while fewer than `t` reveal
//! nothing, with optional Feldman commitments letting every holder check its own
//! share against the dealer's published polynomial. A trusted dealer is required.
//!
//! 1. [Shamir secret sharing](./src/shamir_ss.rs): dealing and Lagrange reconstruction
//! 1. [Feldman Verifiable Secret Sharing](./src/feldman_vss.rs): coefficient
//!    commitments, per-share verification and verified reconstruction
//! 1. [Fixed field and group parameters](./src/field.rs)
//!
//! Randomness is always supplied by the caller as an [`RngCore`](ark_std::rand::RngCore);
//! use a cryptographically secure generator in production, since the random
//! coefficients are all that masks the secret from sub-threshold coalitions.

pub mod common;
pub mod error;
pub mod feldman_vss;
pub mod field;
pub mod serde_utils;
pub mod shamir_ss;
