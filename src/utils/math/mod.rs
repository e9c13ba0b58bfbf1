use num::Num;

/// dot product
/// d(a, b) = Σ(a_i * b_i)
///
/// Extra elements of the longer slice are ignored; callers check lengths.
#[inline]
pub fn dot<N>(vec: &[N], other: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    debug_assert_eq!(
        vec.len(),
        other.len(),
        "Vectors must be of the same length to compute dot product."
    );
    vec.iter()
        .zip(other)
        .map(|(&a, &b)| a.into() * b.into())
        .sum()
}

/// squared euclidean norm
/// ||a||^2 = Σ(a_i^2)
#[inline]
pub fn norm_sq<N>(vec: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    vec.iter()
        .map(|&a| {
            let a: f64 = a.into();
            a * a
        })
        .sum()
}

/// euclidean norm
#[inline]
pub fn norm<N>(vec: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    norm_sq(vec).sqrt()
}
