use brainfloat::RoundingMode;

/// Configuration of the numeric kernel.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct KernelConfig {
    /// How exact ties are resolved when narrowing to bfloat16.
    #[serde(default)]
    pub rounding: RoundingMode,
}
