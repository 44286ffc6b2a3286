/// The inverse golden ratio: φ = (√5 - 1) / 2
pub const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Returns the lower interior probe `b - φ (b - a)`.
pub(super) fn lower_probe(a: f64, b: f64) -> f64 {
    b - INV_PHI * (b - a)
}

/// Returns the upper interior probe `a + φ (b - a)`.
pub(super) fn upper_probe(a: f64, b: f64) -> f64 {
    a + INV_PHI * (b - a)
}
