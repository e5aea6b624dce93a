//! Tests for the public `add` entry point and the Python-facing package

use adder::{add, stubs, wrapper, BindingConfig, Layout, Resolution};
use proptest::prelude::*;
use pyo3::exceptions::PyOverflowError;
use pyo3::prelude::*;

fn setup() {
    Python::with_gil(|py| {
        stubs::install(py, &BindingConfig::default(), Layout::Packaged).unwrap();
    });
}

#[test]
fn test_demo_scenario() {
    setup();
    assert_eq!(add(150, 50).unwrap(), 200);
}

#[test]
fn test_zero() {
    setup();
    assert_eq!(add(0, 0).unwrap(), 0);
}

#[test]
fn test_negative_operands() {
    setup();
    assert_eq!(add(-150, 50).unwrap(), -100);
    assert_eq!(add(-1, -1).unwrap(), -2);
}

#[test]
fn test_repeated_calls_return_same_result() {
    setup();
    let first = add(100, 23).unwrap();
    for _ in 0..100 {
        assert_eq!(add(100, 23).unwrap(), first);
    }
}

#[test]
fn test_prefers_packaged_binding() {
    setup();
    let resolution = Python::with_gil(|py| {
        wrapper::init(py, &BindingConfig::default())
            .unwrap()
            .resolution()
    });
    assert_eq!(resolution, Resolution::Packaged);
}

#[test]
fn test_argument_out_of_range_raises_overflow_error() {
    setup();
    let too_big = i64::from(i32::MAX) + 1;
    let too_small = i64::from(i32::MIN) - 1;

    for &(a, b) in &[(too_big, 0), (0, too_big), (too_small, 0), (i64::MAX, 1)] {
        let err = add(a, b).unwrap_err();
        Python::with_gil(|py| {
            assert!(err.is_instance_of::<PyOverflowError>(py), "{}", err);
        });
    }
}

#[test]
fn test_sum_overflow_wraps() {
    setup();
    let max = i64::from(i32::MAX);
    let min = i64::from(i32::MIN);
    assert_eq!(add(max, 1).unwrap(), min);
    assert_eq!(add(min, -1).unwrap(), max);
    assert_eq!(add(max, max).unwrap(), -2);
}

#[test]
fn test_add_from_python() {
    setup();
    Python::with_gil(|py| {
        py.run_bound(
            r#"
from adder import add
assert add(150, 50) == 200
assert add(0, 0) == 0

try:
    add("x", 1)
except TypeError:
    pass
else:
    raise AssertionError("expected TypeError")
"#,
            None,
            None,
        )
        .unwrap();
    });
}

#[test]
fn test_stub_marshaling_from_python() {
    setup();
    Python::with_gil(|py| {
        py.run_bound(
            r#"
import adder.stubs as stubs
assert stubs.add_integers(2, 3) == 5
assert stubs.add_integers(2**31 - 1, 1) == -2**31

for args in [(2**31, 0), (0, -2**31 - 1)]:
    try:
        stubs.add_integers(*args)
    except OverflowError:
        pass
    else:
        raise AssertionError("expected OverflowError for %r" % (args,))

try:
    stubs.add_integers(1.5, 2)
except TypeError:
    pass
else:
    raise AssertionError("expected TypeError")
"#,
            None,
            None,
        )
        .unwrap();
    });
}

proptest! {
    #[test]
    fn prop_add_matches_sum(
        a in -1_000_000_000i64..=1_000_000_000,
        b in -1_000_000_000i64..=1_000_000_000,
    ) {
        setup();
        prop_assert_eq!(add(a, b).unwrap(), a + b);
    }

    #[test]
    fn prop_add_wraps_like_native_int(a in any::<i32>(), b in any::<i32>()) {
        setup();
        prop_assert_eq!(add(a.into(), b.into()).unwrap(), i64::from(a.wrapping_add(b)));
    }
}
