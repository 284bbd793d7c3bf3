//! Feldman Verifiable Secret Sharing Scheme. Based on the paper [A practical scheme for non-interactive verifiable secret sharing](https://www.cs.umd.edu/~gasarch/TOPICS/secretsharing/feldmanVSS.pdf)
//!
//! The dealer publishes one commitment per polynomial coefficient; each holder can then
//! check its own share against them without learning the coefficients, the secret or any
//! other share.

use ark_ff::{Field, PrimeField, UniformRand};
use ark_poly::univariate::DensePolynomial;
use ark_std::{cfg_iter, rand::RngCore, vec::Vec};
use zeroize::Zeroize;

use crate::{
    common::{powers, CommitmentToCoefficients, Share, ShareId, Shares},
    error::SSError,
    field::{Fq, Fr, FELDMAN_GENERATOR},
    shamir_ss,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Generate a random secret with its shares according to Feldman's verifiable secret
/// sharing. Returns the secret, the shares and the commitments to the coefficients of
/// the sharing polynomial.
pub fn deal_random_secret<R: RngCore>(
    rng: &mut R,
    threshold: ShareId,
    total: ShareId,
) -> Result<(Fr, Shares, CommitmentToCoefficients), SSError> {
    let secret = Fr::rand(rng);
    let (shares, coeff_comms) = deal_secret(rng, secret, threshold, total)?;
    Ok((secret, shares, coeff_comms))
}

/// Same as `deal_random_secret` above but accepts the secret to share. The sharing
/// polynomial's coefficients are zeroed before returning.
pub fn deal_secret<R: RngCore>(
    rng: &mut R,
    secret: Fr,
    threshold: ShareId,
    total: ShareId,
) -> Result<(Shares, CommitmentToCoefficients), SSError> {
    let (shares, mut poly) = shamir_ss::deal_secret_with_polynomial(rng, secret, threshold, total)?;
    let coeff_comms = commit_to_poly(&poly);
    poly.coeffs.iter_mut().for_each(Zeroize::zeroize);
    Ok((shares, coeff_comms.into()))
}

pub(crate) fn commit_to_poly(poly: &DensePolynomial<Fr>) -> Vec<Fq> {
    cfg_iter!(poly.coeffs)
        .map(|a| FELDMAN_GENERATOR.pow(a.into_bigint()))
        .collect()
}

impl Share {
    /// Executed by each participant to verify its share received from the dealer:
    /// `g^y == C_0 * C_1^x * C_2^(x^2) * ...` with the exponents of the commitments
    /// accumulated in the share field, which is the order of the commitment subgroup.
    pub fn verify(&self, commitment_coeffs: &CommitmentToCoefficients) -> Result<(), SSError> {
        let len = commitment_coeffs.0.len() as ShareId;
        if self.threshold > len {
            return Err(SSError::BelowThreshold(self.threshold, len));
        }
        let exponents = powers(&Fr::from(self.id), commitment_coeffs.0.len());
        let lhs = FELDMAN_GENERATOR.pow(self.share.into_bigint());
        let rhs = cfg_iter!(commitment_coeffs.0)
            .zip(cfg_iter!(exponents))
            .map(|(c, e)| c.pow(e.into_bigint()))
            .product::<Fq>();
        #[cfg(feature = "print-trace")]
        println!(
            "verifying share id={}: lhs = g^y = {}, rhs = prod C_j^(x^j) = {}",
            self.id, lhs, rhs
        );
        if lhs != rhs {
            return Err(SSError::ShareVerificationFailed(self.id, self.share));
        }
        Ok(())
    }
}

impl Shares {
    /// Verify every share against the dealer's commitments and only then reconstruct.
    /// The first share failing verification aborts reconstruction; no interpolation is
    /// attempted on input containing a bad share.
    pub fn verify_and_reconstruct(
        &self,
        commitment_coeffs: &CommitmentToCoefficients,
    ) -> Result<Fr, SSError> {
        if self.0.is_empty() {
            return Err(SSError::NoShares);
        }
        let threshold = self.threshold();
        if !commitment_coeffs.supports_threshold(threshold) {
            return Err(SSError::DoesNotSupportThreshold(
                threshold,
                commitment_coeffs.0.len() as ShareId,
            ));
        }
        for share in &self.0 {
            share.verify(commitment_coeffs)?;
        }
        self.reconstruct_secret()
    }
}
