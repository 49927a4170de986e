use crate::foundation::core::Engine;

/// Momentary view of ring activity, owned by the submission layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EngineState {
    /// Ring that last received a batch. Work for the other ring forces a switch.
    pub ring: Engine,
    /// Ring the batch under construction is being built for, if any.
    #[serde(default)]
    pub mode: Option<Engine>,
    /// No in-flight work on the blit ring.
    #[serde(default = "idle")]
    pub blit_idle: bool,
    /// No in-flight work on the render ring.
    #[serde(default = "idle")]
    pub render_idle: bool,
}

fn idle() -> bool {
    true
}

impl EngineState {
    /// Both queues idle, no batch open, `ring` current.
    pub fn idle_on(ring: Engine) -> Self {
        Self {
            ring,
            mode: None,
            blit_idle: true,
            render_idle: true,
        }
    }

    /// Idleness of `engine`'s queue.
    pub fn is_idle(&self, engine: Engine) -> bool {
        match engine {
            Engine::Render => self.render_idle,
            Engine::Blit => self.blit_idle,
        }
    }

    pub(crate) fn set_idle(&mut self, engine: Engine, idle: bool) {
        match engine {
            Engine::Render => self.render_idle = idle,
            Engine::Blit => self.blit_idle = idle,
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::idle_on(Engine::Render)
    }
}
