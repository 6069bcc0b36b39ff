// EdDSA signing over BabyJubJub.
//
// Signing a field-element message m with keys (A, sk, nonceSeed):
//   1. nonce = Blake2b-512(nonceSeed || m)[0..32], as a big-endian integer
//   2. R = nonce · G                       (rejected if off-curve)
//   3. c = H(R.x, R.y, A.x, A.y, m)        (unreduced integer)
//   4. S = (nonce + c · sk) mod n
//   5. Signature = (R, S)
//
// The nonce depends only on (key, message), never on external randomness:
// the same pair always produces the same signature, and a broken randomness
// source cannot leak the key.

use num_bigint::BigUint;

use crate::curve::{fq_to_bytes_be, BjjPoint, BjjScalar, CurveParams, Fq};
use crate::error::EddsaError;
use crate::hash::{challenge, hash512, SignatureHash};
use crate::keypair::{PrivateKey, PublicKey};

/// An EdDSA signature: the commitment point R and the response scalar S.
/// Immutable once produced; R is on-curve by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: BjjPoint,
    pub s: BjjScalar,
}

/// Sign a field-element message. The caller is responsible for reducing
/// application data into `Fq` beforehand.
///
/// Mutates the hasher embedded in `pub_key` (reset before the challenge,
/// finalized after).
pub fn sign<H: SignatureHash>(
    message: Fq,
    pub_key: &mut PublicKey<H>,
    priv_key: &PrivateKey,
) -> Result<Signature, EddsaError> {
    let params = CurveParams::bn254();

    // buf = nonceSeed || canonical big-endian encoding of the message
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(&priv_key.nonce_seed);
    buf[32..].copy_from_slice(&fq_to_bytes_be(&message));

    let digest = hash512(&buf);
    let nonce = BigUint::from_bytes_be(&digest[..32]);

    // R = nonce · G
    let r = params.base.scalar_mul(&nonce);
    if !r.is_on_curve() {
        // only possible with a corrupted arithmetic provider; fatal
        return Err(EddsaError::NotOnCurve);
    }

    let c = challenge(&mut pub_key.hasher, &r, &pub_key.a, &message)?;

    // S = nonce + c·sk, reduced mod the group order; big-integer arithmetic
    // so the unreduced challenge cannot overflow
    let s_int = (nonce + c * &priv_key.scalar) % &params.order;
    let s = BjjScalar::from_biguint(&s_int);

    Ok(Signature { r, s })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{DigestHash, FailingDigest, FixedDigest};
    use crate::keypair::derive_keys;
    use sha2::Sha256;

    fn hasher() -> DigestHash<Sha256> {
        DigestHash::new()
    }

    #[test]
    fn signing_is_deterministic() {
        let (mut pub_key, priv_key) = derive_keys([3u8; 32], hasher());
        let m = Fq::from(77u64);
        let sig1 = sign(m, &mut pub_key, &priv_key).unwrap();
        let sig2 = sign(m, &mut pub_key, &priv_key).unwrap();
        assert_eq!(sig1, sig2, "same key + message must give same signature");
    }

    #[test]
    fn different_messages_different_signatures() {
        let (mut pub_key, priv_key) = derive_keys([3u8; 32], hasher());
        let sig1 = sign(Fq::from(1u64), &mut pub_key, &priv_key).unwrap();
        let sig2 = sign(Fq::from(2u64), &mut pub_key, &priv_key).unwrap();
        assert_ne!(sig1.r, sig2.r, "distinct messages must use distinct nonces");
        assert_ne!(sig1.s, sig2.s);
    }

    #[test]
    fn commitment_point_is_on_curve() {
        let (mut pub_key, priv_key) = derive_keys([5u8; 32], hasher());
        let sig = sign(Fq::from(11u64), &mut pub_key, &priv_key).unwrap();
        assert!(sig.r.is_on_curve());
        assert!(!sig.r.is_zero());
    }

    #[test]
    fn hash_failure_propagates() {
        let (mut pub_key, priv_key) = derive_keys([5u8; 32], FailingDigest);
        let err = sign(Fq::from(11u64), &mut pub_key, &priv_key).unwrap_err();
        assert!(matches!(err, EddsaError::HashWrite(_)));
    }

    #[test]
    fn response_matches_signing_equation() {
        // Pin the challenge hash to a fixed digest and recompute
        // S = (nonce + c·sk) mod n independently via the same formula.
        let fixed = FixedDigest(vec![0xAB; 32]);
        let seed = [0u8; 32];
        let (mut pub_key, priv_key) = derive_keys(seed, fixed);
        let m = Fq::from(1u64);

        let sig = sign(m, &mut pub_key, &priv_key).unwrap();

        let params = CurveParams::bn254();

        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(&priv_key.nonce_seed);
        buf[32..].copy_from_slice(&fq_to_bytes_be(&m));
        let nonce = BigUint::from_bytes_be(&hash512(&buf)[..32]);

        let c = BigUint::from_bytes_be(&[0xAB; 32]);
        let expected = (nonce + c * &priv_key.scalar) % &params.order;

        assert_eq!(sig.s.to_biguint(), expected);
        assert_eq!(sig.r, params.base.scalar_mul(&BigUint::from_bytes_be(&hash512(&buf)[..32])));
    }
}
