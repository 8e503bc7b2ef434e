//! Held-Karp configuration.

/// Configuration for the Held-Karp solver.
///
/// # Examples
///
/// ```
/// use u_tsp::held_karp::HeldKarpConfig;
///
/// let config = HeldKarpConfig::default().with_max_nodes(16);
/// assert_eq!(config.max_nodes, 16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeldKarpConfig {
    /// Largest instance accepted. The table grows as `2^(n-1) · (n-1)`;
    /// at 20 nodes that is about 10M entries (~90 MB).
    pub max_nodes: usize,
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self { max_nodes: 20 }
    }
}

impl HeldKarpConfig {
    /// Sets the largest accepted instance size.
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_nodes == 0 {
            return Err("max_nodes must be at least 1".into());
        }
        // subsets of the n-1 non-origin nodes are usize bitmasks
        if self.max_nodes > usize::BITS as usize {
            return Err(format!(
                "max_nodes must be at most {}, got {}",
                usize::BITS,
                self.max_nodes
            ));
        }
        Ok(())
    }
}
