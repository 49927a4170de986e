use crate::{
    buffer::classify::BufferObject,
    device::{capabilities::DeviceCapabilities, engine_state::EngineState},
    foundation::core::Engine,
};

/// Notifications the submission layer delivers to whoever owns ring state.
pub trait RingHooks {
    /// The next batch targets `new_ring`; per-ring context must be reset.
    fn context_switch(&mut self, new_ring: Engine);

    /// Outstanding render work retired.
    fn render_retire(&mut self);
}

/// Minimal owner of [`EngineState`] driven by the [`RingHooks`] notifications.
///
/// It stands in for the submission layer in tests and demos: it counts batch
/// commands, "submits" on a ring switch and keeps buffer `pending` markers
/// consistent with what it has submitted.
#[derive(Clone, Debug)]
pub struct EngineTracker {
    state: EngineState,
    has_semaphores: bool,
    batch_len: usize,
    need_retire: bool,
    submits: u64,
}

impl EngineTracker {
    /// Idle tracker with `ring` current.
    pub fn new(caps: &DeviceCapabilities, ring: Engine) -> Self {
        Self {
            state: EngineState::idle_on(ring),
            has_semaphores: caps.has_semaphores,
            batch_len: 0,
            need_retire: false,
            submits: 0,
        }
    }

    /// Snapshot for a [`RingPolicy`](crate::RingPolicy).
    pub fn snapshot(&self) -> EngineState {
        self.state
    }

    /// Commands in the open batch.
    pub fn batch_len(&self) -> usize {
        self.batch_len
    }

    /// Batches submitted so far.
    pub fn submits(&self) -> u64 {
        self.submits
    }

    /// Open (or continue) a batch for `mode`, switching rings if needed.
    pub fn set_mode(&mut self, mode: Engine) {
        if self.state.ring != mode {
            self.context_switch(mode);
        }
        self.state.mode = Some(mode);
    }

    /// Record one command against `bo` on the current ring.
    pub fn emit(&mut self, bo: &mut BufferObject) {
        let ring = self.state.ring;
        self.batch_len += 1;
        bo.pending = Some(ring);
        bo.last_engine = Some(ring);
    }

    /// Flush the open batch to the current ring.
    pub fn submit(&mut self) {
        if self.batch_len == 0 {
            return;
        }
        let ring = self.state.ring;
        tracing::debug!(%ring, commands = self.batch_len, "submit batch");
        self.batch_len = 0;
        self.submits += 1;
        self.need_retire = true;
        self.state.mode = None;
        self.state.set_idle(ring, false);
    }

    /// Work on `engine` completed: clear its markers and idle its queue.
    pub fn retire<'b>(
        &mut self,
        engine: Engine,
        buffers: impl IntoIterator<Item = &'b mut BufferObject>,
    ) {
        for bo in buffers {
            if bo.is_pending_on(engine) {
                bo.pending = None;
            }
        }
        self.state.set_idle(engine, true);
        self.need_retire = !(self.state.blit_idle && self.state.render_idle);
        if engine == Engine::Render {
            self.render_retire();
        }
    }
}

impl RingHooks for EngineTracker {
    fn context_switch(&mut self, new_ring: Engine) {
        tracing::debug!(from = %self.state.ring, to = %new_ring, "ring switch");
        self.submit();
        self.state.ring = new_ring;
    }

    fn render_retire(&mut self) {
        self.state.render_idle = true;
        if (self.has_semaphores || !self.need_retire)
            && let Some(mode) = self.state.mode
        {
            self.state.ring = mode;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/tracker.rs"]
mod tests;
