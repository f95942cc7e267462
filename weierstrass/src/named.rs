//! Named standard curves.
//!
//! The table is described by constants and built on first use; after that
//! it is read-only for the life of the process. A built-in entry failing
//! [`Curve::new`] is a defect in this table and panics.

use bigfield::{BigInt, BigUint};
use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::{Curve, CurveParams, Error};

// Parameters are little-endian u64 limbs, see SP 800-186 and SEC 2.

// NIST P-192: y^2 = x^3 - 3x + b over GF(2^192 - 2^64 - 1)
const P192_P: [u64; 3] = [
    0xffffffffffffffff,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];
const P192_B: [u64; 3] = [
    0xfeb8deecc146b9b1,
    0x0fa7e9ab72243049,
    0x64210519e59c80e7,
];
const P192_Q: [u64; 3] = [
    0x146bc9b1b4d22831,
    0xffffffff99def836,
    0xffffffffffffffff,
];
const P192_GX: [u64; 3] = [
    0xf4ff0afd82ff1012,
    0x7cbf20eb43a18800,
    0x188da80eb03090f6,
];
const P192_GY: [u64; 3] = [
    0x73f977a11e794811,
    0x631011ed6b24cdd5,
    0x07192b95ffc8da78,
];

// NIST P-224: y^2 = x^3 - 3x + b over GF(2^224 - 2^96 + 1)
const P224_P: [u64; 4] = [
    0x0000000000000001,
    0xffffffff00000000,
    0xffffffffffffffff,
    0x00000000ffffffff,
];
const P224_B: [u64; 4] = [
    0x270b39432355ffb4,
    0x5044b0b7d7bfd8ba,
    0x0c04b3abf5413256,
    0x00000000b4050a85,
];
const P224_Q: [u64; 4] = [
    0x13dd29455c5c2a3d,
    0xffff16a2e0b8f03e,
    0xffffffffffffffff,
    0x00000000ffffffff,
];
const P224_GX: [u64; 4] = [
    0x343280d6115c1d21,
    0x4a03c1d356c21122,
    0x6bb4bf7f321390b9,
    0x00000000b70e0cbd,
];
const P224_GY: [u64; 4] = [
    0x44d5819985007e34,
    0xcd4375a05a074764,
    0xb5f723fb4c22dfe6,
    0x00000000bd376388,
];

// NIST P-256: y^2 = x^3 - 3x + b over GF(2^256 - 2^224 + 2^192 + 2^96 - 1)
const P256_P: [u64; 4] = [
    0xffffffffffffffff,
    0x00000000ffffffff,
    0x0000000000000000,
    0xffffffff00000001,
];
const P256_B: [u64; 4] = [
    0x3bce3c3e27d2604b,
    0x651d06b0cc53b0f6,
    0xb3ebbd55769886bc,
    0x5ac635d8aa3a93e7,
];
const P256_Q: [u64; 4] = [
    0xf3b9cac2fc632551,
    0xbce6faada7179e84,
    0xffffffffffffffff,
    0xffffffff00000000,
];
const P256_GX: [u64; 4] = [
    0xf4a13945d898c296,
    0x77037d812deb33a0,
    0xf8bce6e563a440f2,
    0x6b17d1f2e12c4247,
];
const P256_GY: [u64; 4] = [
    0xcbb6406837bf51f5,
    0x2bce33576b315ece,
    0x8ee7eb4a7c0f9e16,
    0x4fe342e2fe1a7f9b,
];

// NIST P-384: y^2 = x^3 - 3x + b over GF(2^384 - 2^128 - 2^96 + 2^32 - 1)
const P384_P: [u64; 6] = [
    0x00000000ffffffff,
    0xffffffff00000000,
    0xfffffffffffffffe,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];
const P384_B: [u64; 6] = [
    0x2a85c8edd3ec2aef,
    0xc656398d8a2ed19d,
    0x0314088f5013875a,
    0x181d9c6efe814112,
    0x988e056be3f82d19,
    0xb3312fa7e23ee7e4,
];
const P384_Q: [u64; 6] = [
    0xecec196accc52973,
    0x581a0db248b0a77a,
    0xc7634d81f4372ddf,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];
const P384_GX: [u64; 6] = [
    0x3a545e3872760ab7,
    0x5502f25dbf55296c,
    0x59f741e082542a38,
    0x6e1d3b628ba79b98,
    0x8eb1c71ef320ad74,
    0xaa87ca22be8b0537,
];
const P384_GY: [u64; 6] = [
    0x7a431d7c90ea0e5f,
    0x0a60b1ce1d7e819d,
    0xe9da3113b5f0b8c0,
    0xf8f41dbd289a147c,
    0x5d9e98bf9292dc29,
    0x3617de4a96262c6f,
];

// NIST P-521: y^2 = x^3 - 3x + b over GF(2^521 - 1)
const P521_P: [u64; 9] = [
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x00000000000001ff,
];
const P521_B: [u64; 9] = [
    0xef451fd46b503f00,
    0x3573df883d2c34f1,
    0x1652c0bd3bb1bf07,
    0x56193951ec7e937b,
    0xb8b489918ef109e1,
    0xa2da725b99b315f3,
    0x929a21a0b68540ee,
    0x953eb9618e1c9a1f,
    0x0000000000000051,
];
const P521_Q: [u64; 9] = [
    0xbb6fb71e91386409,
    0x3bb5c9b8899c47ae,
    0x7fcc0148f709a5d0,
    0x51868783bf2f966b,
    0xfffffffffffffffa,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x00000000000001ff,
];
const P521_GX: [u64; 9] = [
    0xf97e7e31c2e5bd66,
    0x3348b3c1856a429b,
    0xfe1dc127a2ffa8de,
    0xa14b5e77efe75928,
    0xf828af606b4d3dba,
    0x9c648139053fb521,
    0x9e3ecb662395b442,
    0x858e06b70404e9cd,
    0x00000000000000c6,
];
const P521_GY: [u64; 9] = [
    0x88be94769fd16650,
    0x353c7086a272c240,
    0xc550b9013fad0761,
    0x97ee72995ef42640,
    0x17afbd17273e662c,
    0x98f54449579b4468,
    0x5c8a5fb42c7d1bd9,
    0x39296a789a3bc004,
    0x0000000000000118,
];

// SEC 2 secp256k1: y^2 = x^3 + 7 over GF(2^256 - 2^32 - 977)
const SECP256K1_P: [u64; 4] = [
    0xfffffffefffffc2f,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];
const SECP256K1_B: [u64; 1] = [
    0x0000000000000007,
];
const SECP256K1_Q: [u64; 4] = [
    0xbfd25e8cd0364141,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];
const SECP256K1_GX: [u64; 4] = [
    0x59f2815b16f81798,
    0x029bfcdb2dce28d9,
    0x55a06295ce870b07,
    0x79be667ef9dcbbac,
];
const SECP256K1_GY: [u64; 4] = [
    0x9c47d08ffb10d4b8,
    0xfd17b448a6855419,
    0x5da4fbfc0e1108a8,
    0x483ada7726a3c465,
];

static CURVES: Lazy<[Curve; 6]> = Lazy::new(|| {
    trace!("building named curve registry");
    [
        build("P192", &P192_P, -3, &P192_B, &P192_Q, &P192_GX, &P192_GY),
        build("P224", &P224_P, -3, &P224_B, &P224_Q, &P224_GX, &P224_GY),
        build("P256", &P256_P, -3, &P256_B, &P256_Q, &P256_GX, &P256_GY),
        build("P384", &P384_P, -3, &P384_B, &P384_Q, &P384_GX, &P384_GY),
        build("P521", &P521_P, -3, &P521_B, &P521_Q, &P521_GX, &P521_GY),
        build(
            "secp256k1",
            &SECP256K1_P,
            0,
            &SECP256K1_B,
            &SECP256K1_Q,
            &SECP256K1_GX,
            &SECP256K1_GY,
        ),
    ]
});

fn from_limbs(limbs: &[u64]) -> BigUint {
    let mut bytes = Vec::with_capacity(8 * limbs.len());
    for &limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

fn build(name: &str, p: &[u64], a: i64, b: &[u64], q: &[u64], gx: &[u64], gy: &[u64]) -> Curve {
    let params = CurveParams::new(
        name,
        from_limbs(p),
        BigInt::from(a),
        BigInt::from(from_limbs(b)),
        from_limbs(q),
        from_limbs(gx),
        from_limbs(gy),
    );
    Curve::new(params).unwrap_or_else(|err| panic!("built-in curve {name} is malformed: {err}"))
}

/// NIST P-192 (secp192r1).
pub fn p192() -> &'static Curve {
    &CURVES[0]
}

/// NIST P-224 (secp224r1).
pub fn p224() -> &'static Curve {
    &CURVES[1]
}

/// NIST P-256 (secp256r1, prime256v1).
pub fn p256() -> &'static Curve {
    &CURVES[2]
}

/// NIST P-384 (secp384r1).
pub fn p384() -> &'static Curve {
    &CURVES[3]
}

/// NIST P-521 (secp521r1).
pub fn p521() -> &'static Curve {
    &CURVES[4]
}

/// The SEC 2 Koblitz curve secp256k1.
pub fn secp256k1() -> &'static Curve {
    &CURVES[5]
}

/// Every named curve, smallest modulus first.
pub fn all() -> impl Iterator<Item = &'static Curve> {
    CURVES.iter()
}

/// Find a curve by name.
///
/// Matching ignores ASCII case and accepts both the NIST spelling
/// (`P256`, `P-256`) and the SEC names (`secp256r1`, `prime256v1`, ...).
pub fn lookup(name: &str) -> Result<&'static Curve, Error> {
    let curve = match name.to_ascii_lowercase().as_str() {
        "p192" | "p-192" | "secp192r1" | "prime192v1" => p192(),
        "p224" | "p-224" | "secp224r1" => p224(),
        "p256" | "p-256" | "secp256r1" | "prime256v1" => p256(),
        "p384" | "p-384" | "secp384r1" => p384(),
        "p521" | "p-521" | "secp521r1" => p521(),
        "secp256k1" => secp256k1(),
        _ => {
            debug!("unknown curve name {name:?}");
            return Err(Error::UnknownCurve(name.to_owned()));
        }
    };
    Ok(curve)
}
