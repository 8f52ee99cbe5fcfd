// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! Pure randomness helpers.
//!
//! Both functions take the `Rng` by reference so callers control seeding: the
//! engine's determinism contract is "same seed, same catalog, same result".

use rand::Rng;

/// Returns a uniformly-random permutation of `items` (Fisher-Yates) without
/// mutating the input.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    for i in (1..copy.len()).rev() {
        let j = rng.gen_range(0..=i);
        copy.swap(i, j);
    }
    copy
}

/// Samples `min + step * k` uniformly for integer `k` in
/// `[0, (max - min) / step]`, inclusive on both ends.
///
/// When the range collapses to a single step this returns `min`. Degenerate
/// inputs (`step == 0`, `max < min`) also return `min`; the catalog rejects
/// both at load time, so this is a guard rather than a contract.
pub fn sample_stepped<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32, step: u32) -> u32 {
    if step == 0 || max <= min {
        return min;
    }
    let steps = (max - min) / step;
    min + step * rng.gen_range(0..=steps)
}
