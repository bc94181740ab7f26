// File: crates/chart-core/src/formula.rs
// Summary: Hand-authored piecewise curves behind the three demo series.

/// Segment boundaries. A boundary belongs to the segment on its right.
pub const AWESOME_BREAKS: [f64; 3] = [2.8, 7.1, 11.0];
pub const GOOD_BREAKS: [f64; 2] = [3.0, 8.2];
pub const FAIL_BREAKS: [f64; 2] = [3.1, 10.3];

/// Rising curve: dip, hump, plateau, then a cubic lift.
pub fn awesome(x: f64) -> f64 {
    let [b1, b2, b3] = AWESOME_BREAKS;
    if x < b1 {
        (3.43 * x * x - 6.7 * x) / 14.0
    } else if x < b2 {
        -(x - 7.1) * (x - 7.1) / 10.26 + 2.378
    } else if x < b3 {
        -0.4 / (x - 4.3) + 2.53
    } else {
        (x - 11.4) * (x - 11.4) * (x - 11.4) / 13.0 + 2.476
    }
}

pub fn good(x: f64) -> f64 {
    let [b1, b2] = GOOD_BREAKS;
    if x < b1 {
        (3.255 * x * x - 9.6 * x) / 16.0
    } else if x < b2 {
        (-1.055 * (x - 8.03) * (x - 8.03) + 27.0) / 15.0
    } else {
        (x - 9.0) * (x - 9.0) * (x - 9.0) / 120.0 + 1.805
    }
}

pub fn fail(x: f64) -> f64 {
    let [b1, b2] = FAIL_BREAKS;
    if x < b1 {
        (2.255 * x * x - 9.1 * x) / 13.0
    } else if x < b2 {
        0.82 * ((x - 4.5) / 2.1).sin()
    } else {
        -(x - 13.0) * (x - 13.0) * (x - 13.0) / 64.0
    }
}
