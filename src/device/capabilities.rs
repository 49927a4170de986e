/// Generation tier at which the render engine starts to outperform the blit
/// engine for ordinary work. Tiers below this are "low tier".
pub const RENDER_CAPABLE_TIER: u8 = 2;

/// Fixed hardware and driver-mode facts, captured once per session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeviceCapabilities {
    /// GT tier of the part (0 for the smallest configuration).
    pub gen_tier: u8,
    /// Cross-engine semaphores let one ring wait on the other without a drain.
    pub has_semaphores: bool,
    /// Write-through caching of scanout buffers.
    pub has_write_through: bool,
    /// Global power-saving mode: trade throughput for the cheaper ring.
    pub power_save: bool,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            gen_tier: RENDER_CAPABLE_TIER,
            has_semaphores: true,
            has_write_through: false,
            power_save: false,
        }
    }
}

impl DeviceCapabilities {
    /// Low-tier parts switch rings cheaply relative to the per-engine
    /// efficiency gap.
    pub fn is_low_tier(&self) -> bool {
        self.gen_tier < RENDER_CAPABLE_TIER
    }
}
