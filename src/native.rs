//! The native side of the boundary.
//!
//! Calling convention: C ABI, two `int` arguments passed by value, `int`
//! returned by value. No pointers cross the boundary, so there is nothing
//! to free on either side.
//!
//! ```c
//! int add_integers(int a, int b);
//! ```

use std::os::raw::c_int;

/// Add two integers.
///
/// Overflow wraps around (two's complement), so the function is total
/// over its whole input domain.
#[no_mangle]
pub extern "C" fn add_integers(a: c_int, b: c_int) -> c_int {
    a.wrapping_add(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_small_values() {
        assert_eq!(add_integers(150, 50), 200);
        assert_eq!(add_integers(100, 23), 123);
        assert_eq!(add_integers(0, 0), 0);
        assert_eq!(add_integers(-7, 7), 0);
    }

    #[test]
    fn wraps_on_overflow() {
        assert_eq!(add_integers(c_int::MAX, 1), c_int::MIN);
        assert_eq!(add_integers(c_int::MIN, -1), c_int::MAX);
    }
}
