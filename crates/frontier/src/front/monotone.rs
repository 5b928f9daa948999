use nalgebra::Vector2;

/// Drop every point that does not strictly raise the best y seen so far.
///
/// Input must be sorted by ascending x (ties by descending y, as produced by
/// `select_front`). Ties in y are dropped, so the output is strictly
/// increasing in both coordinates. Never fails.
pub fn enforce_monotone(candidates: &[Vector2<f64>], floor: f64) -> Vec<Vector2<f64>> {
    let mut best = floor;
    let mut out = Vec::with_capacity(candidates.len());
    for &p in candidates {
        if p.y > best {
            best = p.y;
            out.push(p);
        }
    }
    out
}
