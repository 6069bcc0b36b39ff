// crates/eddsa-core/src/hash.rs
//
// Hash plumbing for EdDSA over BabyJubJub.
//
// Two hash roles, kept separate on purpose:
//   - a one-shot 512-bit Blake2b used for seed expansion and deterministic
//     nonce derivation (`hash512`);
//   - a streaming reset/absorb/finalize hash used for the challenge
//     H(R.x, R.y, A.x, A.y, M), abstracted behind `SignatureHash` so callers
//     pick the instantiation (SHA-2 for plain use, Poseidon for
//     circom-compatible proofs).

use ark_ff::{BigInteger, PrimeField};
use blake2::Blake2b512;
use light_poseidon::{Poseidon, PoseidonHasher};
use num_bigint::BigUint;
use sha2::digest::{Digest, FixedOutputReset};

use crate::curve::{fq_to_bytes_be, BjjPoint, Fq};
use crate::error::EddsaError;

/// Streaming hash used for the challenge computation.
///
/// `reset` and `absorb` follow the usual incremental-hash contract;
/// `finalize` may leave the hasher in a reset state, since both signing and
/// verification reset explicitly before absorbing. Implementations are
/// driven to completion inside a single call, so a hasher embedded in a
/// `PublicKey` must not be shared between concurrent operations — the
/// `&mut` receivers make the compiler enforce that.
pub trait SignatureHash {
    fn reset(&mut self);
    fn absorb(&mut self, input: &[u8]) -> Result<(), EddsaError>;
    fn finalize(&mut self) -> Vec<u8>;
}

/// Adapter exposing any RustCrypto digest (SHA-256, SHA-512, Blake2, ...)
/// through the [`SignatureHash`] trait.
#[derive(Clone, Debug, Default)]
pub struct DigestHash<D>(D);

impl<D: Digest> DigestHash<D> {
    pub fn new() -> Self {
        DigestHash(D::new())
    }
}

impl<D: Digest + FixedOutputReset> SignatureHash for DigestHash<D> {
    fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }

    fn absorb(&mut self, input: &[u8]) -> Result<(), EddsaError> {
        Digest::update(&mut self.0, input);
        Ok(())
    }

    fn finalize(&mut self) -> Vec<u8> {
        Digest::finalize_reset(&mut self.0).to_vec()
    }
}

/// Circom-compatible Poseidon over the BN254 scalar field, exposed through
/// the byte-oriented [`SignatureHash`] contract.
///
/// Absorbed bytes are buffered and split into 32-byte big-endian field
/// elements at finalize time; the challenge absorbs exactly five canonical
/// 32-byte encodings, so this matches circomlib's `Poseidon(5)`. Finalizing
/// with no absorbed input, or with more than 12 field elements' worth,
/// panics — those widths have no circom Poseidon instantiation.
#[derive(Clone, Debug, Default)]
pub struct PoseidonHash {
    buf: Vec<u8>,
}

impl PoseidonHash {
    pub fn new() -> Self {
        PoseidonHash { buf: Vec::new() }
    }
}

impl SignatureHash for PoseidonHash {
    fn reset(&mut self) {
        self.buf.clear();
    }

    fn absorb(&mut self, input: &[u8]) -> Result<(), EddsaError> {
        self.buf.extend_from_slice(input);
        Ok(())
    }

    fn finalize(&mut self) -> Vec<u8> {
        let inputs: Vec<Fq> = self
            .buf
            .chunks(32)
            .map(Fq::from_be_bytes_mod_order)
            .collect();
        let mut poseidon = Poseidon::<Fq>::new_circom(inputs.len())
            .expect("Poseidon initialization failed for absorbed width");
        let out = poseidon.hash(&inputs).expect("Poseidon hash failed");
        self.buf.clear();
        out.into_bigint().to_bytes_be()
    }
}

/// One-shot 512-bit expansion hash (Blake2b), used for seed expansion at key
/// derivation and for per-message nonce derivation.
pub fn hash512(input: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Blake2b512::digest(input));
    out
}

/// Compute the challenge integer H(R.x, R.y, A.x, A.y, M), shared verbatim
/// between signing and verification.
///
/// The digest is interpreted as a big-endian unsigned integer and is *not*
/// reduced mod the group order here; every downstream use is modular, so an
/// early reduction would be redundant and would change intermediate values.
pub fn challenge<H: SignatureHash>(
    hasher: &mut H,
    r: &BjjPoint,
    a: &BjjPoint,
    message: &Fq,
) -> Result<BigUint, EddsaError> {
    hasher.reset();
    for fe in [&r.x, &r.y, &a.x, &a.y, message] {
        hasher.absorb(&fq_to_bytes_be(fe))?;
    }
    Ok(BigUint::from_bytes_be(&hasher.finalize()))
}

/// Test double returning a fixed digest regardless of input.
#[cfg(test)]
#[derive(Clone)]
pub(crate) struct FixedDigest(pub Vec<u8>);

#[cfg(test)]
impl SignatureHash for FixedDigest {
    fn reset(&mut self) {}

    fn absorb(&mut self, _input: &[u8]) -> Result<(), EddsaError> {
        Ok(())
    }

    fn finalize(&mut self) -> Vec<u8> {
        self.0.clone()
    }
}

/// Test double whose absorb step always fails.
#[cfg(test)]
#[derive(Clone)]
pub(crate) struct FailingDigest;

#[cfg(test)]
impl SignatureHash for FailingDigest {
    fn reset(&mut self) {}

    fn absorb(&mut self, _input: &[u8]) -> Result<(), EddsaError> {
        Err(EddsaError::HashWrite("injected absorb failure".into()))
    }

    fn finalize(&mut self) -> Vec<u8> {
        Vec::new()
    }
}
