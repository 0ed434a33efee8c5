use std::time::Duration;

use crate::config::PortalConfigSnapshot;

/// How "heavy" an operation looks to the user. Heavier operations wait longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationWeight {
    /// Reads: list, get.
    Light,
    /// Single-record writes.
    Standard,
    /// Writes touching many records.
    Heavy,
    /// Uploads and payments.
    Transfer,
}

impl OperationWeight {
    pub fn default_millis(&self) -> u64 {
        match self {
            OperationWeight::Light => 500,
            OperationWeight::Standard => 1000,
            OperationWeight::Heavy => 1500,
            OperationWeight::Transfer => 2000,
        }
    }

    fn config_key(&self) -> &'static str {
        match self {
            OperationWeight::Light => "latency.light_ms",
            OperationWeight::Standard => "latency.standard_ms",
            OperationWeight::Heavy => "latency.heavy_ms",
            OperationWeight::Transfer => "latency.transfer_ms",
        }
    }
}

/// Artificial latency applied before every service operation.
///
/// The delay is a `tokio::time::sleep`: the task yields and resumes later,
/// nothing blocks. There is no way to cancel it short of dropping the future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latency {
    light: Duration,
    standard: Duration,
    heavy: Duration,
    transfer: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self::fixed(|w| Duration::from_millis(w.default_millis()))
    }
}

impl Latency {
    /// No delay at all.
    pub fn none() -> Self {
        Self::fixed(|_| Duration::ZERO)
    }

    fn fixed(f: impl Fn(OperationWeight) -> Duration) -> Self {
        Self {
            light: f(OperationWeight::Light),
            standard: f(OperationWeight::Standard),
            heavy: f(OperationWeight::Heavy),
            transfer: f(OperationWeight::Transfer),
        }
    }

    /// Reads `latency.enabled` and `latency.<weight>_ms`.
    pub fn from_config(config: &PortalConfigSnapshot) -> Self {
        if config.get_bool("latency.enabled") == Some(false) {
            return Self::none();
        }

        Self::fixed(|w| {
            let ms = config.get_u64(w.config_key()).unwrap_or_else(|| w.default_millis());
            Duration::from_millis(ms)
        })
    }

    pub fn with_weight(mut self, weight: OperationWeight, delay: Duration) -> Self {
        match weight {
            OperationWeight::Light => self.light = delay,
            OperationWeight::Standard => self.standard = delay,
            OperationWeight::Heavy => self.heavy = delay,
            OperationWeight::Transfer => self.transfer = delay,
        }
        self
    }

    pub fn delay_for(&self, weight: OperationWeight) -> Duration {
        match weight {
            OperationWeight::Light => self.light,
            OperationWeight::Standard => self.standard,
            OperationWeight::Heavy => self.heavy,
            OperationWeight::Transfer => self.transfer,
        }
    }

    pub async fn wait(&self, weight: OperationWeight) {
        let delay = self.delay_for(weight);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
