//! euclidean distance between points

use num_traits::float::Float;

/// squared L2 distance. Slices must have the same length, this is guaranteed by [Dataset](super::dataset::Dataset)
#[inline]
pub fn squared_distance<T: Float>(p1: &[T], p2: &[T]) -> T {
    debug_assert_eq!(p1.len(), p2.len());
    p1.iter().zip(p2.iter()).fold(T::zero(), |acc, (a, b)| {
        let d = *a - *b;
        acc + d * d
    })
}

#[cfg_attr(doc, katexit::katexit)]
/// euclidean distance $$ \sqrt{\sum_i (p1_i - p2_i)^2} $$
#[inline]
pub fn distance<T: Float>(p1: &[T], p2: &[T]) -> T {
    squared_distance(p1, p2).sqrt()
}

//======================================

// end of mod tests
