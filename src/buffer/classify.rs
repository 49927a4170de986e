use crate::{
    device::capabilities::DeviceCapabilities,
    foundation::core::{Engine, Tiling},
};

/// Row pitch from which a linear buffer thrashes the render engine's TLB.
pub const TLB_MISS_PITCH: u32 = 4096;

/// Allocator-side metadata of a GPU buffer, as seen by the policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BufferObject {
    /// Ring that last issued work against the buffer.
    pub last_engine: Option<Engine>,
    /// Memory layout.
    pub tiling: Tiling,
    /// Row pitch in bytes.
    pub pitch: u32,
    /// Attached to a display plane.
    pub scanout: bool,
    /// Mapped through the I/O aperture.
    pub io: bool,
    /// Ring with outstanding work referencing this buffer. Cleared on retire.
    pub pending: Option<Engine>,
}

impl BufferObject {
    /// Untiled, idle buffer with the given pitch.
    pub fn linear(pitch: u32) -> Self {
        Self {
            pitch,
            ..Self::default()
        }
    }

    /// Idle buffer with the given layout and pitch.
    pub fn tiled(tiling: Tiling, pitch: u32) -> Self {
        Self {
            tiling,
            pitch,
            ..Self::default()
        }
    }

    /// Mark outstanding work on `engine`, keeping `last_engine` in step.
    pub fn with_pending(mut self, engine: Engine) -> Self {
        self.pending = Some(engine);
        self.last_engine = Some(engine);
        self
    }

    /// Outstanding work sits on `engine`.
    pub fn is_pending_on(&self, engine: Engine) -> bool {
        self.pending == Some(engine)
    }

    /// Outstanding work was issued through the render path.
    pub fn is_render_affine(&self) -> bool {
        self.is_pending_on(Engine::Render)
    }

    /// Expensive for the render engine to touch repeatedly.
    pub fn is_uncached(&self, caps: &DeviceCapabilities) -> bool {
        self.io || (self.scanout && !caps.has_write_through)
    }

    /// Linear and wide enough to thrash the render TLB, unless the render
    /// ring already owns it.
    pub fn is_tlb_miss_prone(&self) -> bool {
        if self.is_render_affine() {
            return false;
        }
        self.tiling.is_linear() && self.pitch >= TLB_MISS_PITCH
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/classify.rs"]
mod tests;
