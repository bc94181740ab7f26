// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 steps).

/// Step between roughly `count` ticks over [start, stop], rounded to 1, 2 or 5 times a power of ten.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if !(raw.is_finite() && raw > 0.0) {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10f64.powi(power as i32);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Round tick values inside [start, stop].
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let step = tick_step(start, stop, count);
    if step == 0.0 {
        return vec![start];
    }
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    // Multiply instead of accumulating so values like 0.5 * k stay exact.
    (first..=last).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_domain_ticks_every_half() {
        let t = nice_ticks(-1.01, 3.0, 10);
        assert_eq!(t.first(), Some(&-1.0));
        assert_eq!(t.last(), Some(&3.0));
        assert_eq!(t.len(), 9);
    }
}
