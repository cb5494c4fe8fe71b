//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slice lengths are
/// treated as public; the contents are compared without early exit.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time selection of a 32-bit word
///
/// Returns `a` if `choice` is 0, `b` if `choice` is 1.
#[inline]
pub fn ct_select_u32(a: u32, b: u32, choice: Choice) -> u32 {
    u32::conditional_select(&a, &b, choice)
}
