use super::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn hex(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).unwrap()
}

fn dec(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap()
}

fn negate(curve: &Curve, point: &Point) -> Point {
    let (x, y) = point.coordinates().unwrap();
    Point::new(x.clone(), (curve.modulus() - y) % curve.modulus())
}

/// Point S from the NIST routines document for P-256.
fn nist_s() -> Point {
    Point::new(
        dec("100477533340815411662634551128749658785907042636435106397366501380429417453513"),
        dec("87104997799923409786648856004022766656120419079854375215656946413621911659094"),
    )
}

/// Point T from the NIST routines document for P-256.
fn nist_t() -> Point {
    Point::new(
        dec("38744637563132252572193375526521585173096338380822965394069276390274998769771"),
        dec("38053931953835384495674052639602881660154657110782968445504801383088376660758"),
    )
}

#[test]
fn test_generator_on_curve() {
    for curve in named::all() {
        assert!(
            is_point_on_curve(curve, curve.base_point()),
            "{} base point is not on the curve",
            curve.name()
        );
    }
}

#[test]
fn test_identity_is_neutral() {
    for curve in named::all() {
        let g = curve.base_point();
        assert_eq!(point_add(curve, g, &Point::Identity).as_ref(), Ok(g));
        assert_eq!(point_add(curve, &Point::Identity, g).as_ref(), Ok(g));
        assert_eq!(
            point_add(curve, &Point::Identity, &Point::Identity),
            Ok(Point::Identity)
        );
    }
}

#[test]
fn test_inverse_sums_to_identity() {
    let mut rng = StdRng::seed_from_u64(42);
    for curve in named::all() {
        let p = curve.mul_generator(&random_scalar(curve, &mut rng)).unwrap();
        let neg_p = negate(curve, &p);
        assert_eq!(point_add(curve, &p, &neg_p), Ok(Point::Identity), "{}", curve.name());
        assert_eq!(curve.point_neg(&p), Ok(neg_p));
    }
}

#[test]
fn test_order_annihilates_generator() {
    for curve in named::all() {
        let g = curve.base_point();
        let q = curve.order();
        assert_eq!(point_mul(curve, g, q), Ok(Point::Identity), "{}", curve.name());

        let q_minus_one = q - 1u32;
        assert_eq!(point_mul(curve, g, &q_minus_one), Ok(negate(curve, g)));

        // Scalars past the order are not reduced but wrap through the group law.
        let q_plus_one = q + 1u32;
        assert_eq!(point_mul(curve, g, &q_plus_one).as_ref(), Ok(g));
        assert_eq!(point_mul(curve, g, &(q * 3u32)), Ok(Point::Identity));
    }
}

#[test]
fn test_mul_by_zero_and_one() {
    for curve in named::all() {
        let g = curve.base_point();
        assert_eq!(point_mul(curve, g, &BigUint::from(0u32)), Ok(Point::Identity));
        assert_eq!(point_mul(curve, g, &BigUint::from(1u32)).as_ref(), Ok(g));
        assert_eq!(
            point_mul(curve, &Point::Identity, &BigUint::from(12345u32)),
            Ok(Point::Identity)
        );
    }
}

#[test]
fn test_doubling_matches_addition() {
    let expected = [
        (
            "dafebf5828783f2ad35534631588a3f629a70fb16982a888",
            "dd6bda0d993da0fa46b27bbc141b868f59331afa5c7e93ab",
        ),
        (
            "706a46dc76dcb76798e60e6d89474788d16dc18032d268fd1a704fa6",
            "1c2b76a7bc25e7702a704fa986892849fca629487acf3709d2e4e8bb",
        ),
        (
            "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
            "7775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1",
        ),
        (
            "8d999057ba3d2d969260045c55b97f089025959a6f434d651d207d19fb96e9e4fe0e86ebe0e64f85b96a9c75295df61",
            "8e80f1fa5b1b3cedb7bfe8dffd6dba74b275d875bc6cc43e904e505f256ab4255ffd43e94d39e22d61501e700a940e80",
        ),
        (
            "433c219024277e7e682fcb288148c282747403279b1ccc06352c6e5505d769be97b3b204da6ef55507aa104a3a35c5af41cf2fa364d60fd967f43e3933ba6d783d",
            "f4bb8cc7f86db26700a7f3eceeeed3f0b5c6b5107c4da97740ab21a29906c42dbbb3e377de9f251f6b93937fa99a3248f4eafcbe95edc0f4f71be356d661f41b02",
        ),
        (
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        ),
    ];

    for (curve, (x, y)) in named::all().zip(expected) {
        let g = curve.base_point();
        let two_g = Point::new(hex(x), hex(y));
        assert_eq!(point_add(curve, g, g).as_ref(), Ok(&two_g), "{}", curve.name());
        assert_eq!(point_mul(curve, g, &BigUint::from(2u32)), Ok(two_g));
    }
}

#[test]
fn test_invalid_point_rejected() {
    let off_curve = Point::new(BigUint::from(1u32), BigUint::from(1u32));
    for curve in named::all() {
        let g = curve.base_point();
        assert!(!is_point_on_curve(curve, &off_curve));
        assert_eq!(point_add(curve, &off_curve, g), Err(Error::InvalidPoint));
        assert_eq!(point_add(curve, g, &off_curve), Err(Error::InvalidPoint));
        assert_eq!(
            point_mul(curve, &off_curve, &BigUint::from(3u32)),
            Err(Error::InvalidPoint)
        );
    }
}

#[test]
fn test_p256_nist_vectors() {
    let curve = named::p256();
    let (s, t) = (nist_s(), nist_t());
    let d = hex("c51e4753afdec1e6b6c6a5b992f43f8dd0c7a8933072708b6522468b2ffb06fd");
    let e = hex("d37f628ece72a462f0145cbefe3f0b355ee8332d37acdd83a358016aea029db7");

    let sum = Point::new(
        hex("72b13dd4354b6b81745195e98cc5ba6970349191ac476bd4553cf35a545a067e"),
        hex("8d585cbb2e1327d75241a8a122d7620dc33b13315aa5c9d46d013011744ac264"),
    );
    assert_eq!(point_add(curve, &s, &t), Ok(sum));

    let doubled = Point::new(
        hex("7669e6901606ee3ba1a8eef1e0024c33df6c22f3b17481b82a860ffcdb6127b0"),
        hex("fa878162187a54f6c39f6ee0072f33de389ef3eecd03023de10ca2c1db61d0c7"),
    );
    assert_eq!(curve.point_double(&s), Ok(doubled));

    let product = Point::new(
        hex("51d08d5f2d4278882946d88d83c97d11e62becc3cfc18bedacc89ba34eeca03f"),
        hex("75ee68eb8bf626aa5b673ab51f6e744e06f8fcf8a6c0cf3035beca956a7b41d5"),
    );
    assert_eq!(point_mul(curve, &s, &d).as_ref(), Ok(&product));

    let combined = Point::new(
        hex("d867b4679221009234939221b8046245efcf58413daacbeff857b8588341f6b8"),
        hex("f2504055c03cede12d22720dad69c745106b6607ec7e50dd35d54bd80f615275"),
    );
    assert_eq!(curve.linear_combination(&d, &s, &e, &t).as_ref(), Ok(&combined));
    let separately = point_add(
        curve,
        &point_mul(curve, &s, &d).unwrap(),
        &point_mul(curve, &t, &e).unwrap(),
    );
    assert_eq!(separately, Ok(combined));
}

#[test]
fn test_secp256k1_vector() {
    let curve = named::secp256k1();
    let d = hex("AA5E28D6A97A2479A65527F7290311A3624D4CC0FA1578598EE3C2613BF99522");
    let expected = Point::new(
        hex("34f9460f0e4f08393d192b3c5133a6ba099aa0ad9fd54ebccfacdfa239ff49c6"),
        hex("b71ea9bd730fd8923f6d25a7a91e7dd7728a960686cb5a901bb419e0f2ca232"),
    );
    assert_eq!(curve.mul_generator(&d), Ok(expected));
}

#[test]
fn test_closure_under_random_scalars() {
    let mut rng = StdRng::seed_from_u64(1234);
    for curve in named::all() {
        let g = curve.base_point();
        for _ in 0..2 {
            let d = random_scalar(curve, &mut rng);
            let product = point_mul(curve, g, &d).unwrap();
            assert!(is_point_on_curve(curve, &product), "{}", curve.name());
        }
    }
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = named::all()
        .map(|curve| {
            std::thread::spawn(move || {
                point_mul(curve, curve.base_point(), &BigUint::from(0xdead_beefu32))
            })
        })
        .collect();

    for (curve, handle) in named::all().zip(handles) {
        let threaded = handle.join().unwrap();
        let local = point_mul(curve, curve.base_point(), &BigUint::from(0xdead_beefu32));
        assert_eq!(threaded, local);
    }
}

#[test]
fn test_custom_curve_from_serialized_params() {
    let params = named::secp256k1().params().clone();
    let encoded = bincode::serialize(&params).unwrap();
    let decoded: CurveParams = bincode::deserialize(&encoded).unwrap();
    assert_eq!(decoded, params);

    let curve = Curve::new(decoded).unwrap();
    let d = BigUint::from(31337u32);
    assert_eq!(
        curve.mul_generator(&d),
        named::secp256k1().mul_generator(&d)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_addition_commutes(a in 1u64.., b in 1u64..) {
        let curve = named::p256();
        let p = curve.mul_generator(&BigUint::from(a)).unwrap();
        let q = curve.mul_generator(&BigUint::from(b)).unwrap();
        prop_assert_eq!(point_add(curve, &p, &q), point_add(curve, &q, &p));
    }

    #[test]
    fn prop_mul_distributes(a in 0u64..1 << 40, b in 0u64..1 << 40) {
        let curve = named::secp256k1();
        let left = curve.mul_generator(&(BigUint::from(a) + b)).unwrap();
        let right = point_add(
            curve,
            &curve.mul_generator(&BigUint::from(a)).unwrap(),
            &curve.mul_generator(&BigUint::from(b)).unwrap(),
        )
        .unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_doubling_matches_addition(a in 1u64..) {
        let curve = named::p384();
        let p = curve.mul_generator(&BigUint::from(a)).unwrap();
        prop_assert_eq!(
            point_mul(curve, &p, &BigUint::from(2u32)),
            point_add(curve, &p, &p)
        );
    }

    #[test]
    fn prop_linear_combination_matches(a in any::<u32>(), b in any::<u32>()) {
        let curve = named::p192();
        let g = curve.base_point();
        let h = curve.mul_generator(&BigUint::from(7u32)).unwrap();
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        let expected = point_add(
            curve,
            &point_mul(curve, g, &a).unwrap(),
            &point_mul(curve, &h, &b).unwrap(),
        );
        prop_assert_eq!(curve.linear_combination(&a, g, &b, &h), expected);
    }
}
