//! Band arithmetic shared by the translator and the resolver.
//!
//! The side sweep repeats a fixed-width band (`N` vertical sides followed by
//! `N + 1` horizontal sides) `N` times and finishes with one extra vertical
//! band. Every side index is therefore `band * (2N + 1) + residual + 1`.

/// Split a 1-based side number into `(band, residual)`, both 0-based.
///
/// `side` must be at least 1.
pub(crate) fn decompose(side: u32, band_width: u32) -> (u32, u32) {
    let zero_based = side - 1;
    (zero_based / band_width, zero_based % band_width)
}

/// Inverse of [`decompose`].
pub(crate) fn compose(band: u32, residual: u32, band_width: u32) -> u32 {
    band * band_width + residual + 1
}

/// Returns `true` if `value` lies in `[1, max]`.
pub(crate) fn in_one_based_range(value: u32, max: u32) -> bool {
    (1..=max).contains(&value)
}
