extern crate fasttrig;

use fasttrig::{
    atan2_fast, atan_fast, direct, iacos, iasin, icos, icot, inverse, isin, itan, optimize, table,
    Config,
    Function, Precision, SIN_TABLE_16, SIN_TABLE_8, TABLE_LEN,
};

const TOLERANCE: f32 = 0.002;

// Angles with integer, fractional and out-of-period parts
fn probe_angles() -> Vec<f32> {
    let mut angles = Vec::new();
    let mut x = -1080.0f32;
    while x <= 1080.0 {
        angles.push(x);
        x += 0.731;
    }
    angles.extend([0.0, 30.0, 45.0, 89.99, 90.0, 90.01, 179.5, 180.0, 270.0, 359.9]);
    angles
}

#[test]
fn test_periodicity() {
    for x in probe_angles() {
        let a = isin(x);
        let b = isin(x + 360.0);
        assert!(
            (a - b).abs() <= TOLERANCE,
            "isin({}) = {} but isin({}) = {}",
            x,
            a,
            x + 360.0,
            b
        );
    }
}

#[test]
fn test_odd_symmetry_is_exact() {
    for x in probe_angles() {
        assert_eq!(isin(-x), -isin(x), "isin(-{}) != -isin({})", x, x);
    }
}

#[test]
fn test_cofunction_identity() {
    for x in probe_angles() {
        let c = icos(x);
        let s = isin(90.0 - x);
        assert!((c - s).abs() <= TOLERANCE, "icos({}) = {} vs {}", x, c, s);
    }
}

#[test]
fn test_tables_are_monotonic() {
    for i in 0..TABLE_LEN - 1 {
        assert!(SIN_TABLE_16[i] <= SIN_TABLE_16[i + 1], "16-bit entry {}", i);
        assert!(SIN_TABLE_8[i] <= SIN_TABLE_8[i + 1], "8-bit entry {}", i);
    }
    assert_eq!(SIN_TABLE_16[0], 0);
    assert_eq!(SIN_TABLE_16[90], u16::MAX);
    assert_eq!(SIN_TABLE_8[0], 0);
    assert_eq!(SIN_TABLE_8[90], u8::MAX);
}

#[test]
fn test_asin_round_trip() {
    for d in 0..=90usize {
        let ratio = SIN_TABLE_16[d] as f32 / 65535.0;
        let angle = iasin(ratio);
        assert!(
            (angle - d as f32).abs() <= 0.5,
            "iasin(table[{}]) = {}",
            d,
            angle
        );
    }
}

#[test]
fn test_boundaries() {
    assert_eq!(isin(0.0), 0.0);
    assert!((isin(90.0) - 1.0).abs() <= 0.0001);
    assert!(itan(90.0).is_nan());
    assert!(icot(0.0).is_nan());
}

#[test]
fn test_scenarios() {
    assert!((isin(30.0) - 0.5).abs() <= TOLERANCE);
    assert!((isin(45.0) - 0.7071).abs() <= TOLERANCE);
    assert!((icos(60.0) - 0.5).abs() <= TOLERANCE);
    assert!((iasin(0.5) - 30.0).abs() <= 0.5);
    assert!((itan(45.0) - 1.0).abs() <= 0.01);
    assert!((iacos(0.5) - 60.0).abs() <= 0.5);
    assert!((atan_fast(1.0) - 45.0).abs() <= 0.001);
    assert!((atan2_fast(-1.0, -1.0) + 135.0).abs() <= 0.1);
}

#[test]
fn test_custom_table_through_generic_functions() {
    let generated = table::generate16();
    let custom = table::validate(&generated, u16::MAX).unwrap();

    for x in [-200.0f32, -45.5, 0.0, 12.25, 100.0, 333.3] {
        let builtin = isin(x);
        let other = direct::isin_in(&custom, x);
        assert!((builtin - other).abs() <= 0.0005, "{}: {} vs {}", x, builtin, other);
    }
    assert!((inverse::iasin_in(&custom, 0.5) - 30.0).abs() <= 0.5);
    assert!(direct::itan_in(&custom, 270.0).is_nan());
}

#[test]
fn test_config_dispatch_matches_free_functions() {
    let config = Config::default();
    for x in probe_angles() {
        assert_eq!(Function::Sin.eval(&config, x), isin(x));
        assert_eq!(Function::Cos.eval(&config, x), icos(x));
    }
    assert_eq!(Function::Asin.eval(&config, 0.25), iasin(0.25));

    let low = Config::builder().precision(Precision::Low).build();
    for x in [15.0f32, 60.0, 210.0] {
        let err = (Function::Sin.eval(&low, x) as f64 - Function::Sin.reference(x as f64)).abs();
        assert!(err < 0.01, "low precision sin({}) off by {}", x, err);
    }
}

#[test]
fn test_function_reference_and_names() {
    assert_eq!(Function::Asin.to_string(), "asin");
    assert!(Function::Acos.is_inverse());
    assert!(!Function::Tan.is_inverse());
    assert!((Function::Cot.reference(45.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_full_scale_step_table() {
    let mut entries = [u16::MAX; TABLE_LEN];
    entries[0] = 0;
    let step = table::validate(&entries, u16::MAX).unwrap();

    let half = direct::isin_in(&step, 0.5);
    assert!(half > 0.45 && half < 0.55, "isin_in(step, 0.5) = {}", half);
    assert!((direct::isin_in(&step, 45.0) - 1.0).abs() <= 1e-6);
    assert!(direct::icos_in(&step, 89.5).is_finite());

    let result = optimize::optimize(&step, 1, |_| {}).unwrap();
    assert!(result.final_error() <= result.initial_error);
}

#[test]
fn test_low_precision_inverse_endpoints() {
    let low = Config::builder().precision(Precision::Low).build();
    assert_eq!(low.iasin(1.0), 90.0);
    assert_eq!(low.iacos(1.0), 0.0);
    assert_eq!(low.iasin(0.0), 0.0);
}
