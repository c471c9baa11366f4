/// Runtime presentation options, built once from the command line.
///
/// Study constants (seed, tray shape, species table) are not configurable
/// and live in `seedtray_core::study`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Hides the banner line printed at start-up.
    pub no_banner: bool,
    /// Quietness level. `0` prints everything, `1` drops headers and
    /// separators, `2` and above also drops the per-item trees.
    pub quiet: u8,
}
