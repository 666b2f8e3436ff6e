//! DSATUR configuration.

/// How a node's saturation degree is counted.
///
/// The two policies differ only when a node has several neighbors sharing
/// the same color; they order the selection queue differently in that case
/// but both are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SaturationPolicy {
    /// Classic DSATUR (Brélaz): saturation is the number of *distinct*
    /// colors among a node's colored neighbors.
    #[default]
    DistinctColors,

    /// Event counting: every colored-neighbor event increments saturation,
    /// so two neighbors sharing a color count twice.
    ColoredNeighbors,
}

/// Configuration parameters for the DSATUR solver.
///
/// # Examples
///
/// ```
/// use u_chroma::dsatur::{DsaturConfig, SaturationPolicy};
///
/// let config = DsaturConfig::default()
///     .with_saturation_policy(SaturationPolicy::ColoredNeighbors);
/// assert_eq!(config.saturation_policy, SaturationPolicy::ColoredNeighbors);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DsaturConfig {
    /// Saturation counting policy. Defaults to the classic distinct-color
    /// definition.
    pub saturation_policy: SaturationPolicy,
}

impl DsaturConfig {
    /// Sets the saturation counting policy.
    pub fn with_saturation_policy(mut self, policy: SaturationPolicy) -> Self {
        self.saturation_policy = policy;
        self
    }
}
