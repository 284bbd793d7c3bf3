//! Shamir secret sharing

use ark_ff::UniformRand;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_std::{cfg_into_iter, rand::RngCore, vec::Vec};
use zeroize::Zeroize;

use crate::{
    common,
    common::{ShareId, Shares, MAX_TOTAL},
    error::SSError,
    field::Fr,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Generate a random secret with its shares according to Shamir secret sharing.
/// At least `threshold` number of shares are needed to reconstruct the secret.
/// Returns the secret and the shares.
pub fn deal_random_secret<R: RngCore>(
    rng: &mut R,
    threshold: ShareId,
    total: ShareId,
) -> Result<(Fr, Shares), SSError> {
    let secret = Fr::rand(rng);
    let shares = deal_secret(rng, secret, threshold, total)?;
    Ok((secret, shares))
}

/// Same as `deal_random_secret` above but accepts the secret to share. The sharing
/// polynomial exists only for the duration of this call; its coefficients are zeroed
/// before returning.
pub fn deal_secret<R: RngCore>(
    rng: &mut R,
    secret: Fr,
    threshold: ShareId,
    total: ShareId,
) -> Result<Shares, SSError> {
    let (shares, mut poly) = deal_secret_with_polynomial(rng, secret, threshold, total)?;
    poly.coeffs.iter_mut().for_each(Zeroize::zeroize);
    Ok(shares)
}

/// Build the degree `threshold - 1` sharing polynomial with the secret as constant term
/// and evaluate it at ids `1..=total`. The polynomial is secret-equivalent material, so
/// callers must zero its coefficients once commitments/shares have been derived from it.
pub(crate) fn deal_secret_with_polynomial<R: RngCore>(
    rng: &mut R,
    secret: Fr,
    threshold: ShareId,
    total: ShareId,
) -> Result<(Shares, DensePolynomial<Fr>), SSError> {
    if threshold < 2 {
        return Err(SSError::InvalidThresholdOrTotal(threshold, total));
    }
    if threshold > total {
        return Err(SSError::InvalidThresholdOrTotal(threshold, total));
    }
    if total > MAX_TOTAL {
        return Err(SSError::InvalidThresholdOrTotal(threshold, total));
    }
    let mut coeffs = Vec::with_capacity(threshold as usize);
    coeffs.append(&mut (0..threshold - 1).map(|_| Fr::rand(rng)).collect());
    coeffs.insert(0, secret);
    let poly = DensePolynomial::from_coefficients_vec(coeffs);
    let shares = cfg_into_iter!((1..=total))
        .map(|i| (i as ShareId, threshold, poly.evaluate(&Fr::from(i))).into())
        .collect::<Vec<_>>();
    Ok((Shares(shares), poly))
}

impl Shares {
    /// Reconstruct the secret by Lagrange interpolation at x = 0 over all supplied
    /// shares. Fails on empty input, on fewer shares than the threshold they were
    /// dealt with, and on repeated or out-of-range ids. Shares are trusted verbatim;
    /// use [`verify_and_reconstruct`](Shares::verify_and_reconstruct) to check them
    /// against dealer commitments first.
    pub fn reconstruct_secret(&self) -> Result<Fr, SSError> {
        if self.0.is_empty() {
            return Err(SSError::NoShares);
        }
        let threshold = self.threshold();
        let len = self.0.len() as ShareId;
        if threshold > len {
            return Err(SSError::BelowThreshold(threshold, len));
        }
        let share_ids = self.0.iter().map(|s| s.id).collect::<Vec<_>>();
        let basis = common::lagrange_basis_at_0_for_all(&share_ids)?;
        Ok(cfg_into_iter!(basis)
            .zip(cfg_into_iter!(&self.0))
            .map(|(b, s)| b * s.share)
            .sum::<Fr>())
    }
}
