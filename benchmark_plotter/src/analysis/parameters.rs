//!
//! Analysis parameters.
//!

///
/// Analysis parameters.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Parameters {
    /// The speedup of a perfectly parallel run, i.e. the assumed core count.
    pub ideal_parallelism: f64,
    /// The minimal sample count of the focused large-scale comparison.
    pub large_scale_threshold: u64,
    /// The relative tolerance of the stored speedup against the timings ratio.
    /// The check is disabled if unset.
    pub speedup_tolerance: Option<f64>,
}

impl Parameters {
    /// The default assumed core count.
    pub const DEFAULT_IDEAL_PARALLELISM: f64 = 4.0;

    /// The default large-scale sample count threshold.
    pub const DEFAULT_LARGE_SCALE_THRESHOLD: u64 = 50_000;

    /// The maximal speedup still considered insignificant.
    pub const SIGNIFICANT_SPEEDUP: f64 = 2.0;
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            ideal_parallelism: Self::DEFAULT_IDEAL_PARALLELISM,
            large_scale_threshold: Self::DEFAULT_LARGE_SCALE_THRESHOLD,
            speedup_tolerance: None,
        }
    }
}
