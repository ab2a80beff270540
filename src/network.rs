//! Comparator sequences for the supported element counts.
//!
//! A sorting network is pure data: an ordered list of position pairs. Apply
//! each pair as "smaller value to the first position, larger to the second"
//! and any input of the matching length comes out ascending.

/// One compare-exchange step. After application the smaller value sits at
/// position `.0` and the larger at position `.1`.
pub type Comparator = (usize, usize);

pub const NETWORK_2: &[Comparator] = &[(0, 1)];

pub const NETWORK_3: &[Comparator] = &[(1, 2), (0, 2), (0, 1)];

/// Size 5, depth 3. Simultaneously size- and depth-optimal for 4 elements.
pub const NETWORK_4: &[Comparator] = &[(0, 1), (2, 3), (0, 2), (1, 3), (1, 2)];

/// Size 9, depth 5. Optimal sorting network, see:
/// https://bertdobbelaere.github.io/sorting_networks.html.
pub const NETWORK_5: &[Comparator] = &[
    (0, 3),
    (1, 4),
    (0, 2),
    (1, 3),
    (0, 1),
    (2, 4),
    (1, 2),
    (3, 4),
    (2, 3),
];

/// Size 12, depth 5. 3-sorts {0,1,2} and {3,4,5} independently, then merges
/// the two sorted halves.
pub const NETWORK_6: &[Comparator] = &[
    (1, 2),
    (0, 2),
    (0, 1),
    (4, 5),
    (3, 5),
    (3, 4),
    (0, 3),
    (1, 4),
    (2, 5),
    (2, 4),
    (1, 3),
    (2, 3),
];

/// Comparator sequence for `len` elements.
///
/// Usable in const context. Called with a const-generic length, an
/// out-of-range `len` fails at compile time instead of at runtime.
pub const fn comparators(len: usize) -> &'static [Comparator] {
    match len {
        2 => NETWORK_2,
        3 => NETWORK_3,
        4 => NETWORK_4,
        5 => NETWORK_5,
        6 => NETWORK_6,
        _ => panic!("no sorting network defined for this length"),
    }
}
