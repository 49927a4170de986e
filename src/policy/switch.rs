use crate::{
    buffer::classify::BufferObject,
    foundation::core::Engine,
    policy::decide::RingPolicy,
};

/// Per-request hints that make a switch to the blit ring cheaper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwitchFlags {
    /// Last operation of the batch; no further render work follows.
    pub copy_last: bool,
}

impl SwitchFlags {
    /// No hints.
    pub const NONE: Self = Self { copy_last: false };
    /// Final copy of the batch.
    pub const COPY_LAST: Self = Self { copy_last: true };
}

impl RingPolicy<'_> {
    /// Is moving the next operation onto `target` cheap right now?
    ///
    /// `bo` is the buffer the operation writes, when the caller has one.
    pub fn can_switch_to(
        &self,
        target: Engine,
        bo: Option<&BufferObject>,
        flags: SwitchFlags,
    ) -> bool {
        if self.engines.ring == target {
            return true;
        }

        if !self.config.ring_switch {
            return false;
        }

        // Without semaphores every switch drains the pipeline.
        if !self.caps.has_semaphores {
            return false;
        }

        if target == Engine::Blit && flags.copy_last {
            return true;
        }

        if bo.is_some_and(|bo| bo.is_pending_on(target)) {
            return true;
        }

        if self.caps.is_low_tier() {
            return true;
        }

        match target {
            Engine::Render => {
                if bo.is_some_and(|bo| {
                    !bo.is_pending_on(Engine::Blit) && !bo.is_uncached(self.caps)
                }) {
                    return true;
                }
            }
            Engine::Blit => {
                if bo.is_some_and(|bo| bo.is_pending_on(Engine::Render)) {
                    return false;
                }
            }
        }

        self.engines.is_idle(target)
    }

    /// The render ring must not be used for the next operation.
    pub fn force_blit_ring(&self) -> bool {
        if let Some(engine) = self.config.engine_override.forced() {
            return engine.is_blit();
        }

        if self.caps.power_save {
            return true;
        }

        if self.engines.mode == Some(Engine::Render) {
            return false;
        }

        self.caps.is_low_tier()
    }

    /// Sticky per-buffer preference; `dst` marks the written buffer.
    pub fn prefer_blit_bo(&self, bo: &BufferObject, dst: bool) -> bool {
        if let Some(engine) = self.config.engine_override.forced() {
            return engine.is_blit();
        }

        if let Some(engine) = bo.pending {
            return engine.is_blit();
        }

        if self.caps.power_save {
            return true;
        }

        if dst && !self.caps.is_low_tier() {
            return false;
        }

        bo.tiling.is_linear() || bo.is_uncached(self.caps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/policy/switch.rs"]
mod tests;
