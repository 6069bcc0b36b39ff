// EdDSA verification over BabyJubJub.
//
// Given signature (R, S), public key A, and field-element message m:
//   1. reject if A or R is off-curve
//   2. c = H(R.x, R.y, A.x, A.y, m)
//   3. lhs = cofactor · (S · G)
//   4. rhs = cofactor · (R + c · A)
//   5. accept iff lhs == rhs (coordinate-wise)
//
// Multiplying both sides by the cofactor clears any small-subgroup component
// a crafted R or A could carry, so the comparison only sees the prime-order
// part. A mismatch is Ok(false); only malformed points are errors.

use crate::curve::{CurveParams, Fq};
use crate::error::EddsaError;
use crate::hash::{challenge, SignatureHash};
use crate::keypair::PublicKey;
use crate::sign::Signature;

/// Verify an EdDSA signature against a public key and message.
///
/// Returns `Ok(true)` on acceptance, `Ok(false)` for an ordinary mismatch,
/// and `Err(EddsaError::NotOnCurve)` when the public key or a derived point
/// is malformed — callers can tell a bad key apart from a bad signature.
pub fn verify<H: SignatureHash>(
    sig: &Signature,
    message: Fq,
    pub_key: &mut PublicKey<H>,
) -> Result<bool, EddsaError> {
    let params = CurveParams::bn254();

    if !pub_key.a.is_on_curve() {
        return Err(EddsaError::NotOnCurve);
    }

    // the transmitted R feeds point addition below; the Edwards addition
    // denominators are only guaranteed non-zero for on-curve operands
    if !sig.r.is_on_curve() {
        return Err(EddsaError::NotOnCurve);
    }

    // challenge over the transmitted R, not a recomputed one
    let c = challenge(&mut pub_key.hasher, &sig.r, &pub_key.a, &message)?;

    // lhs = cofactor · (S · G)
    let lhs = params
        .base
        .scalar_mul(&sig.s.to_biguint())
        .scalar_mul(&params.cofactor);
    if !lhs.is_on_curve() {
        return Err(EddsaError::NotOnCurve);
    }

    // rhs = cofactor · (R + c · A)
    let rhs = pub_key
        .a
        .scalar_mul(&c)
        .add(&sig.r)
        .scalar_mul(&params.cofactor);
    if !rhs.is_on_curve() {
        return Err(EddsaError::NotOnCurve);
    }

    Ok(lhs.x == rhs.x && lhs.y == rhs.y)
}
