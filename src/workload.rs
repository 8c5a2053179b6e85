//! The fixed O(n²) workload being timed.

use std::hint::black_box;

/// Sums `(i * j) % 100` over every `i, j` in `0..n`.
///
/// Products are taken in 64-bit so they cannot overflow before the modulo.
/// Zero or negative sizes never enter the loop and yield 0.
pub fn checksum(n: i32) -> i64 {
    let n = black_box(n);
    let mut sum: i64 = 0;
    for i in 0..n {
        for j in 0..n {
            sum += (i as i64 * j as i64) % 100;
        }
    }
    black_box(sum)
}
