//! Scalar execution of the sorting networks.
//!
//! Architecture-agnostic. Each comparator becomes a branchless
//! compare-exchange applied in network order, directly on the array.

use crate::network;

/// Branchless compare-exchange of `v[a]` and `v[b]`.
#[inline(always)]
fn compare_exchange<T: Copy + Ord>(v: &mut [T], a: usize, b: usize) {
    debug_assert!(a < b && b < v.len());

    let (x, y) = (v[a], v[b]);
    let swaps = y < x;

    // The goal is to generate cmov instructions here.
    v[a] = if swaps { y } else { x };
    v[b] = if swaps { x } else { y };
}

/// Sorts `v` ascending by running the fixed network for `N`.
///
/// The comparator sequence is selected at compile time; control flow never
/// depends on element values. Lengths outside 2..=6 fail to compile.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort<T: Copy + Ord, const N: usize>(v: &mut [T; N]) {
    const { assert!(N >= 2 && N <= 6, "no sorting network defined for this length") }

    for &(a, b) in network::comparators(N) {
        compare_exchange(v, a, b);
    }
}

macro_rules! sort_n_fns {
    ($($n:literal),*) => {
        paste::paste! {
            $(
                #[doc = concat!("Sorts ", $n, " elements ascending, branchless.")]
                #[inline]
                pub fn [<sort $n>]<T: Copy + Ord>(v: &mut [T; $n]) {
                    sort(v);
                }
            )*
        }
    };
}

sort_n_fns!(2, 3, 4, 5, 6);
