// crates/eddsa-core/src/curve.rs
//
// BabyJubJub curve arithmetic with circomlib-compatible coordinates.
//
// We implement twisted Edwards curve operations directly over ark_bn254::Fr
// to match circomlib's coordinate system exactly. This avoids the mismatch
// between arkworks' (a=1) parameterization and circomlib's (a=168700).
//
// Curve equation:  a*x^2 + y^2 = 1 + d*x^2*y^2
//   a = 168700
//   d = 168696
//   Fq = F_p where p = BN254 scalar field prime
//
// Identity point: (0, 1)
// Base point: circomlib's Base8, a generator of the prime-order subgroup
// Subgroup order: n ~ 2^251, cofactor 8

use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;

/// Base field of BabyJubJub = scalar field of BN254. Point coordinates and
/// messages live here.
pub type Fq = ark_bn254::Fr;

/// Scalar field of BabyJubJub (integers mod the subgroup order n).
pub type Fr = ark_ed_on_bn254::Fr;

pub const A_COEFF: u64 = 168700;

pub const D_COEFF: u64 = 168696;

pub const BASE_X: &str = "5299619240641551281634865583518297030282874472190772894086521144482721001553";

pub const BASE_Y: &str = "16950150798460657717958625567821834550301663161624707787222815936182638968203";

/// BabyJubJub subgroup order n (decimal)
pub const BJJ_ORDER: &str = "2736030358979909402780800718157159386076813972158567259200215660948447373041";

/// Ratio between the full group order and the prime subgroup order.
pub const BJJ_COFACTOR: u64 = 8;

pub fn field_from_dec_str<F: PrimeField>(s: &str) -> F {
    let biguint: BigUint = s.parse().expect("invalid decimal string");
    let bytes = biguint.to_bytes_le();
    F::from_le_bytes_mod_order(&bytes)
}

/// Canonical 32-byte big-endian encoding of a base field element.
pub fn fq_to_bytes_be(f: &Fq) -> [u8; 32] {
    let bytes = f.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Convert a base field element to a decimal string (for JSON / witness export).
pub fn fq_to_dec_string(f: &Fq) -> String {
    let bytes = f.into_bigint().to_bytes_le();
    BigUint::from_bytes_le(&bytes).to_string()
}

/// The immutable parameters of the signature curve: the subgroup base point,
/// the subgroup order n, and the cofactor.
pub struct CurveParams {
    pub base: BjjPoint,
    pub order: BigUint,
    pub cofactor: BigUint,
}

impl CurveParams {
    /// Parameters of the twisted Edwards curve over the BN254 scalar field.
    pub fn bn254() -> Self {
        CurveParams {
            base: BjjPoint {
                x: field_from_dec_str(BASE_X),
                y: field_from_dec_str(BASE_Y),
            },
            order: BJJ_ORDER.parse().expect("invalid order constant"),
            cofactor: BigUint::from(BJJ_COFACTOR),
        }
    }
}

/// A point on the BabyJubJub twisted Edwards curve.
/// Stored as affine (x, y) in the BN254 scalar field. The identity is (0, 1).
#[derive(Clone, Debug)]
pub struct BjjPoint {
    pub x: Fq,
    pub y: Fq,
}

impl BjjPoint {
    /// The identity point (0, 1).
    pub fn identity() -> Self {
        BjjPoint {
            x: Fq::from(0u64),
            y: Fq::from(1u64),
        }
    }

    /// Check if this point lies on the curve: a*x^2 + y^2 = 1 + d*x^2*y^2
    pub fn is_on_curve(&self) -> bool {
        let a = Fq::from(A_COEFF);
        let d = Fq::from(D_COEFF);
        let x2 = self.x * self.x;
        let y2 = self.y * self.y;
        let lhs = a * x2 + y2;
        let rhs = Fq::from(1u64) + d * x2 * y2;
        lhs == rhs
    }

    /// Check if this is the identity point (0, 1).
    pub fn is_zero(&self) -> bool {
        self.x == Fq::from(0u64) && self.y == Fq::from(1u64)
    }

    /// Twisted Edwards point addition.
    ///
    /// (x1,y1) + (x2,y2) = (x3,y3) where:
    ///   x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)
    ///   y3 = (y1*y2 - a*x1*x2) / (1 - d*x1*x2*y1*y2)
    pub fn add(&self, other: &BjjPoint) -> BjjPoint {
        let a = Fq::from(A_COEFF);
        let d = Fq::from(D_COEFF);

        let x1y2 = self.x * other.y;
        let y1x2 = self.y * other.x;
        let x1x2 = self.x * other.x;
        let y1y2 = self.y * other.y;

        let dx1x2y1y2 = d * x1x2 * y1y2;

        let one = Fq::from(1u64);

        let x3_num = x1y2 + y1x2;
        let x3_den = one + dx1x2y1y2;
        let x3 = x3_num * x3_den.inverse().expect("degenerate addition");

        let y3_num = y1y2 - a * x1x2;
        let y3_den = one - dx1x2y1y2;
        let y3 = y3_num * y3_den.inverse().expect("degenerate addition");

        BjjPoint { x: x3, y: y3 }
    }

    /// Scalar multiplication by an arbitrary-size unsigned integer
    /// (double-and-add).
    ///
    /// The scalar is deliberately not reduced before the loop: the subgroup
    /// has order n, so k*P = (k mod n)*P holds for any k. Challenge integers
    /// larger than n rely on this.
    pub fn scalar_mul(&self, k: &BigUint) -> BjjPoint {
        let mut result = BjjPoint::identity();
        let mut temp = self.clone();

        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(&temp);
            }
            temp = temp.add(&temp); // double
        }

        result
    }
}

impl PartialEq for BjjPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for BjjPoint {}

/// An element of the BabyJubJub scalar field Z_n, kept in canonical form at
/// every encoding boundary.
#[derive(Clone, Debug)]
pub struct BjjScalar(pub Fr);

impl BjjScalar {
    /// Build a scalar from an unsigned integer, reducing mod n.
    pub fn from_biguint(v: &BigUint) -> Self {
        BjjScalar(Fr::from_le_bytes_mod_order(&v.to_bytes_le()))
    }

    /// The canonical integer value of this scalar (always < n).
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0.into_bigint().to_bytes_le())
    }

    /// Convert to a decimal string (for JSON / witness export).
    pub fn to_dec_string(&self) -> String {
        self.to_biguint().to_string()
    }
}

impl PartialEq for BjjScalar {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for BjjScalar {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_on_curve() {
        let params = CurveParams::bn254();
        assert!(params.base.is_on_curve(), "base point must be on curve");
    }

    #[test]
    fn identity_is_on_curve() {
        let id = BjjPoint::identity();
        assert!(id.is_on_curve(), "identity must be on curve");
    }

    #[test]
    fn base_is_not_identity() {
        let params = CurveParams::bn254();
        assert!(!params.base.is_zero());
    }

    #[test]
    fn add_identity() {
        let params = CurveParams::bn254();
        let id = BjjPoint::identity();
        let result = params.base.add(&id);
        assert_eq!(result, params.base, "G + 0 = G");
    }

    #[test]
    fn scalar_mul_by_one() {
        let params = CurveParams::bn254();
        let result = params.base.scalar_mul(&BigUint::from(1u64));
        assert!(result.is_on_curve());
        assert_eq!(params.base, result, "1*G = G");
    }

    #[test]
    fn scalar_mul_by_zero() {
        let params = CurveParams::bn254();
        let result = params.base.scalar_mul(&BigUint::from(0u64));
        assert!(result.is_zero(), "0*G = identity");
    }

    #[test]
    fn scalar_mul_distributes_over_addition() {
        let params = CurveParams::bn254();
        let g = &params.base;

        let ag = g.scalar_mul(&BigUint::from(7u64));
        let bg = g.scalar_mul(&BigUint::from(13u64));
        let sum_points = ag.add(&bg);

        let sum_scalar = g.scalar_mul(&BigUint::from(20u64));

        assert!(sum_points.is_on_curve());
        assert_eq!(sum_points, sum_scalar);
    }

    #[test]
    fn double_equals_add_self() {
        let params = CurveParams::bn254();
        let doubled = params.base.add(&params.base);
        let scaled = params.base.scalar_mul(&BigUint::from(2u64));
        assert_eq!(doubled, scaled);
    }

    #[test]
    fn scalar_mul_reduces_mod_order() {
        // (k + n)*G = k*G, the property unreduced challenge scalars rely on
        let params = CurveParams::bn254();
        let k = BigUint::from(123456789u64);
        let shifted = &k + &params.order;
        assert_eq!(params.base.scalar_mul(&k), params.base.scalar_mul(&shifted));
    }

    #[test]
    fn subgroup_order() {
        // n*G should equal identity
        let params = CurveParams::bn254();
        let result = params.base.scalar_mul(&params.order);
        assert!(result.is_zero(), "n*G must be identity");
    }

    #[test]
    fn order_two_point_is_on_curve() {
        // (0, -1) has order 2; it is the small-subgroup component that
        // cofactor clearing in verification must absorb
        let t = BjjPoint {
            x: Fq::from(0u64),
            y: -Fq::from(1u64),
        };
        assert!(t.is_on_curve());
        assert!(t.add(&t).is_zero(), "2*T must be identity");
    }

    #[test]
    fn scalar_roundtrip_through_biguint() {
        let v = BigUint::from(987654321u64);
        let s = BjjScalar::from_biguint(&v);
        assert_eq!(s.to_biguint(), v);
        assert_eq!(s.to_dec_string(), "987654321");
    }

    #[test]
    fn fq_bytes_be_canonical_width() {
        let f = Fq::from(1u64);
        let bytes = fq_to_bytes_be(&f);
        assert_eq!(bytes[31], 1);
        assert!(bytes[..31].iter().all(|b| *b == 0));
    }
}
