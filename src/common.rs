use ark_ff::{Field, One};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_iter, collections::BTreeSet, vec::Vec};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::Zeroize;

use crate::{
    error::SSError,
    field::{Fq, Fr},
    serde_utils::CanonicalBytes,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub type ShareId = u16;

/// Largest supported number of shareholders. Share ids are `1..=MAX_TOTAL`.
pub const MAX_TOTAL: ShareId = 255;

/// Share used in Shamir secret sharing and Feldman verifiable secret sharing
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct Share {
    pub id: ShareId,
    pub threshold: ShareId,
    #[serde_as(as = "CanonicalBytes")]
    pub share: Fr,
}

/// Collection of `Share`s. A sufficient number of `Share`s reconstruct the secret.
/// Expects unique shares, i.e. each share has a different `id` and each has the same threshold.
#[derive(
    Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct Shares(pub Vec<Share>);

/// Commitments to coefficients of the polynomial created during secret sharing, one per
/// coefficient in order, each an exponentiation of the public generator by the coefficient.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct CommitmentToCoefficients(#[serde_as(as = "Vec<CanonicalBytes>")] pub Vec<Fq>);

impl Drop for Share {
    fn drop(&mut self) {
        self.share.zeroize();
    }
}

impl From<(ShareId, ShareId, Fr)> for Share {
    fn from((i, t, s): (ShareId, ShareId, Fr)) -> Self {
        Share {
            id: i,
            threshold: t,
            share: s,
        }
    }
}

impl Shares {
    pub fn threshold(&self) -> ShareId {
        self.0[0].threshold
    }

    /// Add `delta` to the value of the share at the given 1-based `index`, in place.
    /// Corruption primitive for tests and demos, and the only mutator of dealt shares;
    /// a `delta` that is a multiple of the field order leaves the share unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0 or exceeds the number of shares.
    pub fn tamper(&mut self, index: usize, delta: Fr) {
        self.0[index - 1].share += delta;
    }
}

impl From<Vec<Fq>> for CommitmentToCoefficients {
    fn from(coeffs: Vec<Fq>) -> Self {
        CommitmentToCoefficients(coeffs)
    }
}

impl CommitmentToCoefficients {
    /// The constant coefficient is the secret and thus returns the commitment to that.
    pub fn commitment_to_secret(&self) -> &Fq {
        &self.0[0]
    }

    /// The degree of the polynomial whose coefficients were committed
    pub fn poly_degree(&self) -> usize {
        self.0.len() - 1
    }

    pub fn supports_threshold(&self, threshold: ShareId) -> bool {
        threshold as usize - 1 == self.poly_degree()
    }
}

/// Return the first `n` powers of `x`, i.e. `[1, x, x^2, ..., x^{n-1}]`
pub fn powers(x: &Fr, n: usize) -> Vec<Fr> {
    let mut p = Vec::with_capacity(n);
    if n > 0 {
        p.push(Fr::one());
    }
    for i in 1..n {
        let prev = p[i - 1];
        p.push(prev * x);
    }
    p
}

/// Return the Lagrange basis polynomial at x = 0 given the `x` coordinates
/// `(-x_coords[0]) * (-x_coords[1]) * ... / ((i - x_coords[0]) * (i - x_coords[1]) * ...)`
/// skipping `i` itself. The coordinates must be distinct and nonzero; distinctness
/// across the whole set is the caller's responsibility (see [`lagrange_basis_at_0_for_all`]).
pub fn lagrange_basis_at_0(x_coords: &[ShareId], i: ShareId) -> Result<Fr, SSError> {
    if i == 0 {
        return Err(SSError::InvalidShareId(i));
    }
    let i_f = Fr::from(i);
    let mut numerator = Fr::one();
    let mut denominator = Fr::one();
    for &x in x_coords {
        if x == i {
            continue;
        }
        if x == 0 {
            return Err(SSError::InvalidShareId(x));
        }
        let x = Fr::from(x);
        numerator *= -x;
        denominator *= i_f - x;
    }
    // a zero denominator means a repeated coordinate; reject it instead of inverting
    let inv = denominator.inverse().ok_or(SSError::DuplicateShareId(i))?;
    Ok(numerator * inv)
}

/// Return the Lagrange basis polynomial at x = 0 for each of the given `x` coordinates,
/// after checking that the coordinates are distinct and in `1..=MAX_TOTAL`.
pub fn lagrange_basis_at_0_for_all(x_coords: &[ShareId]) -> Result<Vec<Fr>, SSError> {
    ensure_distinct_ids(x_coords)?;
    cfg_iter!(x_coords)
        .map(|i| lagrange_basis_at_0(x_coords, *i))
        .collect()
}

fn ensure_distinct_ids(ids: &[ShareId]) -> Result<(), SSError> {
    let mut seen = BTreeSet::new();
    for &id in ids {
        if id == 0 || id > MAX_TOTAL {
            return Err(SSError::InvalidShareId(id));
        }
        if !seen.insert(id) {
            return Err(SSError::DuplicateShareId(id));
        }
    }
    Ok(())
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn lagrange_basis_on_a_line() {
        // f(x) = 3 + 4x through (1, 7) and (2, 11): L_1(0) = 2, L_2(0) = -1
        let basis = lagrange_basis_at_0_for_all(&[1, 2]).unwrap();
        assert_eq!(basis, vec![Fr::from(2u64), -Fr::one()]);
        let f0 = basis[0] * Fr::from(7u64) + basis[1] * Fr::from(11u64);
        assert_eq!(f0, Fr::from(3u64));
    }

    #[test]
    fn lagrange_basis_sums_to_one() {
        let ids = [1, 4, 7, 200, 255];
        let basis = lagrange_basis_at_0_for_all(&ids).unwrap();
        assert_eq!(basis.iter().sum::<Fr>(), Fr::one());
    }

    #[test]
    fn repeated_or_invalid_coordinates_are_rejected() {
        assert!(matches!(
            lagrange_basis_at_0_for_all(&[1, 2, 2, 3]),
            Err(SSError::DuplicateShareId(2))
        ));
        assert!(matches!(
            lagrange_basis_at_0_for_all(&[0, 1, 2]),
            Err(SSError::InvalidShareId(0))
        ));
        assert!(matches!(
            lagrange_basis_at_0_for_all(&[1, 2, 256]),
            Err(SSError::InvalidShareId(256))
        ));
        assert!(matches!(
            lagrange_basis_at_0(&[1, 2], 0),
            Err(SSError::InvalidShareId(0))
        ));
    }

    #[test]
    fn powers_of_x() {
        let x = Fr::from(5u64);
        assert_eq!(powers(&x, 0), Vec::<Fr>::new());
        assert_eq!(
            powers(&x, 4),
            vec![Fr::one(), x, Fr::from(25u64), Fr::from(125u64)]
        );
    }

    #[test]
    fn tamper_adds_delta_to_one_share() {
        let mut shares = Shares(vec![
            Share::from((1, 2, Fr::from(10u64))),
            Share::from((2, 2, Fr::from(20u64))),
        ]);
        shares.tamper(2, Fr::from(7u64));
        assert_eq!(shares.0[0].share, Fr::from(10u64));
        assert_eq!(shares.0[1].share, Fr::from(27u64));
        shares.tamper(2, -Fr::from(7u64));
        assert_eq!(shares.0[1].share, Fr::from(20u64));
    }

    #[test]
    fn serialization() {
        let share = Share::from((3, 2, Fr::from(123u64)));
        let shares = Shares(vec![share.clone()]);
        let comms = CommitmentToCoefficients(vec![Fq::from(4u64), Fq::from(9u64)]);

        let mut bytes = vec![];
        share.serialize_compressed(&mut bytes).unwrap();
        assert_eq!(
            Share::deserialize_compressed(bytes.as_slice()).unwrap(),
            share
        );

        let json = serde_json::to_string(&shares).unwrap();
        assert_eq!(serde_json::from_str::<Shares>(&json).unwrap(), shares);

        let packed = rmp_serde::to_vec(&comms).unwrap();
        assert_eq!(
            rmp_serde::from_slice::<CommitmentToCoefficients>(&packed).unwrap(),
            comms
        );
    }
}
