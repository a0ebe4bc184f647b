//! Strided segmentation of a sample sequence into analysis windows
//!
//! Windows start at offset 0 and advance by `step`. A window is emitted only
//! when all `window_length` samples are available; there is no zero-padding
//! and no partial final window. `step < window_length` overlaps windows,
//! `step > window_length` skips the samples in between.

/// Number of full windows that fit in `len` samples
///
/// Zero `window_length` or `step` yields no windows.
pub fn window_count(len: usize, window_length: usize, step: usize) -> usize {
    if window_length == 0 || step == 0 || len < window_length {
        return 0;
    }
    (len - window_length) / step + 1
}

/// Start offset of every emitted window
pub fn window_offsets(
    len: usize,
    window_length: usize,
    step: usize,
) -> impl Iterator<Item = usize> {
    (0..window_count(len, window_length, step)).map(move |i| i * step)
}

/// Iterate over the windows of `signal`
///
/// # Arguments
/// * `signal` - Full sample sequence
/// * `window_length` - Samples per window
/// * `step` - Sample advance between consecutive windows
pub fn segments<T>(
    signal: &[T],
    window_length: usize,
    step: usize,
) -> impl Iterator<Item = &[T]> {
    window_offsets(signal.len(), window_length, step)
        .map(move |start| &signal[start..start + window_length])
}
