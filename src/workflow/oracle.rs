use rand::Rng;

/// Decides whether the plugin-update step of a run succeeds. The simulated
/// executor draws from this instead of a real WP-CLI exit code, so tests can
/// pin the outcome.
pub trait UpdateOracle: Send + Sync {
    fn draw(&self) -> bool;
}

/// Unweighted draw with a fixed success probability.
pub struct RandomOracle {
    success_rate: f64,
}

impl RandomOracle {
    pub fn new(success_rate: f64) -> Self {
        Self { success_rate }
    }
}

impl Default for RandomOracle {
    fn default() -> Self {
        // mirrors the observed ~70% update success rate across the fleet
        Self::new(0.7)
    }
}

impl UpdateOracle for RandomOracle {
    fn draw(&self) -> bool {
        rand::thread_rng().gen::<f64>() < self.success_rate
    }
}

/// Always returns the configured outcome. Test builds use this to force the
/// success or failure branch of a run.
pub struct FixedOracle(pub bool);

impl UpdateOracle for FixedOracle {
    fn draw(&self) -> bool {
        self.0
    }
}
