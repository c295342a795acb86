/// Scale of frame `index` in a zoom of `frame_count` frames.
///
/// Scales form a geometric sequence from `initial_scale` (first frame) to
/// `final_scale` (last frame), so every frame zooms by the same ratio. A single-frame
/// zoom, or an index past the end, is clamped to the nearest end of the sequence.
pub fn scale_for_frame(index: u32, frame_count: u32, initial_scale: f64, final_scale: f64) -> f64 {
    if frame_count <= 1 || index == 0 {
        return initial_scale;
    }

    let last = frame_count - 1;

    if index >= last {
        return final_scale;
    }

    // interpolate in log space; the ratio final/initial can leave the f64 range
    let t = f64::from(index) / f64::from(last);
    let log_initial = initial_scale.ln();
    (log_initial + t * (final_scale.ln() - log_initial)).exp()
}
