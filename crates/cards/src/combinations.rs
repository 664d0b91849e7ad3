// Copyright (C) 2025 Dealer Drills Developers
// SPDX-License-Identifier: Apache-2.0

//! Index based k-subset enumeration.
//!
//! Hands are built by choosing k cards out of at most a handful of cards, this
//! module enumerates the k-subsets with Algorithm L from TAOCP 4a, without
//! recursion or intermediate allocations per subset.

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 53] {
    let mut t = [[0u32; 8]; 53];
    let mut n = 0;

    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 53] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");
    NCKS[n][k] as usize
}

/// Calls the `f` closure with the indices of each k-subset of `0..n`.
///
/// Subsets are generated in colexicographic order, each slice has its
/// indices sorted ascending. Nothing is generated if `k == 0` or `k > n`.
pub fn for_each_index_subset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n {
        return;
    }

    // Algorithm L: c[1..=k] holds the subset, c[k+1] and c[k+2] are sentinels.
    let mut c = vec![0usize; k + 3];
    for j in 1..=k {
        c[j] = j - 1;
    }
    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Calls the `f` closure for each k-subset of `items`.
///
/// Items in each subset keep their relative order in `items`.
pub fn for_each_subset<T, F>(items: &[T], k: usize, mut f: F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    let mut subset = Vec::with_capacity(k);
    for_each_index_subset(items.len(), k, |indices| {
        subset.clear();
        subset.extend(indices.iter().map(|&idx| items[idx]));
        f(&subset);
    });
}
