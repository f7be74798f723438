// File: crates/easel-core/src/grid.rs
// Summary: Tick layout helpers: nice steps, zero-anchored value ranges, tick positions.

/// Round a raw step up to a 1/2/5 multiple of a power of ten.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    if !(range > 0.0) || target_steps == 0 {
        return 1.0;
    }
    let raw = range / target_steps as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Value range for a set of series, anchored at zero and padded 5% at the
/// top. Non-finite samples are ignored; an empty or flat set falls back to
/// a unit span so the axis still lays out.
pub fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = 0.0f64;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if !max.is_finite() || max <= min {
        let floor = min.min(0.0);
        return (floor, floor + 1.0);
    }
    (min, max + (max - min) * 0.05)
}

/// Tick positions inside `[min, max]` at a nice step.
pub fn ticks(min: f64, max: f64, target_steps: usize) -> Vec<f64> {
    let step = nice_step(max - min, target_steps);
    let mut out = Vec::new();
    let mut t = (min / step).ceil() * step;
    while t <= max + step * 1e-6 {
        out.push(t);
        t += step;
    }
    out
}
