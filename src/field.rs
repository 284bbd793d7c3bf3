//! Fixed parameters of the scheme: the share field and the commitment group.
//!
//! Shares, polynomial coefficients and all interpolation arithmetic live in
//! [`Fr`], the prime field of order `P = 2^127 - 1`. Feldman commitments live
//! in the multiplicative group of [`Fq`], the prime field of order
//! `Q = 114*P + 1`; the committed generator [`FELDMAN_GENERATOR`] generates
//! the subgroup of order exactly `P`, so exponents of commitments reduce
//! modulo `P` and can be accumulated in [`Fr`].
//!
//! Hiding of the committed coefficients rests on the hardness of discrete log
//! in that order-`P` subgroup. A 127-bit subgroup order is demonstration
//! grade and offers nowhere near the margin of production discrete-log
//! groups.

use ark_ff::{
    fields::{Fp128, Fp192, MontBackend, MontConfig},
    MontFp,
};

/// Configuration of the share field, the Mersenne prime `P = 2^127 - 1`.
#[derive(MontConfig)]
#[modulus = "170141183460469231731687303715884105727"]
#[generator = "43"]
pub struct FrConfig;

/// The share field. Secrets, shares and Lagrange coefficients are `Fr`
/// elements.
pub type Fr = Fp128<MontBackend<FrConfig, 2>>;

/// Configuration of the field the commitment group is embedded in,
/// `Q = 114*P + 1`.
#[derive(MontConfig)]
#[modulus = "19396094914493492417412352623610788052879"]
#[generator = "6"]
pub struct FqConfig;

/// The field whose multiplicative group contains the order-`P` commitment
/// subgroup.
pub type Fq = Fp192<MontBackend<FqConfig, 3>>;

/// Generator of the order-`P` subgroup of `Fq`, computed as `6^114 mod Q`
/// where 6 is the smallest primitive root of `Q`.
pub const FELDMAN_GENERATOR: Fq = MontFp!("7645599752281476999528713249870225309866");
