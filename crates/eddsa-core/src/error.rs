use thiserror::Error;

/// Failures surfaced by key derivation, signing, and verification.
///
/// A verification mismatch is *not* an error: `verify` reports it as
/// `Ok(false)` so callers can tell "invalid signature" apart from a broken
/// input or provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EddsaError {
    /// A point that must lie on the curve does not. Raised for the public
    /// key, the commitment point, or a derived point inside verification;
    /// fatal to the call and never retried.
    #[error("point not on curve")]
    NotOnCurve,
    /// The challenge hash failed while absorbing input.
    #[error("hash write failed: {0}")]
    HashWrite(String),
}
