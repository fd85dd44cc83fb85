use super::constants::{AUDIO_BASS_MAX, BASS_BIN_COUNT};

/// Reduce analyser byte magnitudes to the bass energy uniform.
///
/// Averages the lowest `BASS_BIN_COUNT` bins, normalizes to [0, 1] and scales
/// into [0, `AUDIO_BASS_MAX`]. Fewer bins than expected are averaged as-is;
/// an empty spectrum is silence.
pub fn bass_energy(bins: &[u8]) -> f32 {
    let low = &bins[..bins.len().min(BASS_BIN_COUNT)];
    if low.is_empty() {
        return 0.0;
    }
    let sum: u32 = low.iter().map(|&b| b as u32).sum();
    let avg = sum as f32 / low.len() as f32 / 255.0;
    (avg * AUDIO_BASS_MAX).clamp(0.0, AUDIO_BASS_MAX)
}
