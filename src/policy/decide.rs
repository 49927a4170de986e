use crate::{
    buffer::classify::BufferObject,
    device::{capabilities::DeviceCapabilities, engine_state::EngineState},
    foundation::core::Engine,
    policy::{config::PolicyConfig, switch::SwitchFlags},
};

/// Tier from which in-place copies and end-of-batch copies stop defaulting
/// to the blit ring.
const COPY_RENDER_TIER: u8 = 3;

/// Kind of fill request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillKind {
    /// Solid rectangle fill.
    Solid,
    /// Point lists: tiny, high fixed overhead per call.
    Points,
    /// Span lists, same cost profile as points.
    Spans,
}

/// Kind of drawing request handed to [`RingPolicy::select_engine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    /// Block copy from `src` to `dst`.
    Copy,
    /// Blend `src` (optional) into `dst`.
    Composite,
    /// See [`FillKind::Solid`].
    FillSolid,
    /// See [`FillKind::Points`].
    FillPoints,
    /// See [`FillKind::Spans`].
    FillSpans,
}

impl OpKind {
    /// The fill flavor, for the three fill kinds.
    pub fn fill_kind(self) -> Option<FillKind> {
        match self {
            Self::FillSolid => Some(FillKind::Solid),
            Self::FillPoints => Some(FillKind::Points),
            Self::FillSpans => Some(FillKind::Spans),
            Self::Copy | Self::Composite => None,
        }
    }
}

/// A request built per call by the drawing layer.
#[derive(Clone, Copy, Debug)]
pub struct OperationRequest<'a> {
    /// Buffer written by the operation.
    pub dst: &'a BufferObject,
    /// Buffer read by the operation, if any.
    pub src: Option<&'a BufferObject>,
    /// What the drawing layer is about to emit.
    pub kind: OpKind,
    /// Final operation of the batch.
    pub copy_last: bool,
}

/// Ring-selection policy over one set of snapshots.
///
/// Every query is a pure function of the borrowed snapshots and the
/// [`PolicyConfig`]; building a policy is free, so callers create one per
/// operation from fresh state. Answers are advisory: a stale snapshot only
/// costs performance.
///
/// `true` from a `prefer_blit_*` query means "target the blit ring".
#[derive(Clone, Copy, Debug)]
pub struct RingPolicy<'a> {
    pub(crate) caps: &'a DeviceCapabilities,
    pub(crate) engines: &'a EngineState,
    pub(crate) config: PolicyConfig,
}

impl<'a> RingPolicy<'a> {
    /// Borrow one set of snapshots.
    pub fn new(
        caps: &'a DeviceCapabilities,
        engines: &'a EngineState,
        config: PolicyConfig,
    ) -> Self {
        Self {
            caps,
            engines,
            config,
        }
    }

    /// Generic blit-side query: is moving to the blit ring cheap for `bo`?
    ///
    /// Callers must have ruled out [`force_blit_ring`](Self::force_blit_ring)
    /// and render affinity of `bo` first.
    pub fn prefer_blit_ring(&self, bo: &BufferObject, flags: SwitchFlags) -> bool {
        if let Some(engine) = self.config.engine_override.forced() {
            return engine.is_blit();
        }

        debug_assert!(
            !self.force_blit_ring(),
            "prefer_blit_ring queried while the blit ring is forced"
        );
        debug_assert!(
            !bo.is_render_affine(),
            "prefer_blit_ring queried for a buffer with outstanding render work"
        );

        self.can_switch_to(Engine::Blit, Some(bo), flags)
    }

    /// Generic render-side query: should work on `bo` go to the render ring?
    pub fn prefer_render_ring(&self, bo: &BufferObject) -> bool {
        if let Some(engine) = self.config.engine_override.forced() {
            return !engine.is_blit();
        }

        if self.caps.power_save {
            return false;
        }

        if self.caps.is_low_tier() {
            return false;
        }

        self.can_switch_to(Engine::Render, Some(bo), SwitchFlags::NONE)
    }

    /// Composite from `src` (if any) into `dst`.
    pub fn prefer_blit_composite(&self, dst: &BufferObject, src: Option<&BufferObject>) -> bool {
        if let Some(engine) = self.config.engine_override.forced() {
            return engine.is_blit();
        }

        if dst.is_tlb_miss_prone() || src.is_some_and(BufferObject::is_tlb_miss_prone) {
            return true;
        }

        if self.force_blit_ring() {
            return true;
        }

        if dst.is_render_affine() || src.is_some_and(BufferObject::is_render_affine) {
            return false;
        }

        if self.prefer_render_ring(dst) {
            return false;
        }

        if !self.prefer_blit_ring(dst, SwitchFlags::NONE) {
            return false;
        }

        self.prefer_blit_bo(dst, true) || src.is_some_and(|src| self.prefer_blit_bo(src, false))
    }

    /// Fill into `bo`.
    pub fn prefer_blit_fill(&self, bo: &BufferObject, kind: FillKind) -> bool {
        if let Some(engine) = self.config.engine_override.forced() {
            return engine.is_blit();
        }

        if bo.is_tlb_miss_prone() {
            return true;
        }

        if self.force_blit_ring() {
            return true;
        }

        match kind {
            FillKind::Solid => {
                if bo.is_render_affine() {
                    return false;
                }

                if self.prefer_render_ring(bo) {
                    return false;
                }

                if !self.prefer_blit_ring(bo, SwitchFlags::NONE) {
                    return false;
                }
            }
            FillKind::Points | FillKind::Spans => {
                if self.can_switch_to(Engine::Blit, Some(bo), SwitchFlags::NONE) {
                    return true;
                }
            }
        }

        self.prefer_blit_bo(bo, false)
    }

    /// Copy from `src` into `dst`. Pass the same reference twice for an
    /// in-place copy.
    pub fn prefer_blit_copy(
        &self,
        src: &BufferObject,
        dst: &BufferObject,
        flags: SwitchFlags,
    ) -> bool {
        if let Some(engine) = self.config.engine_override.forced() {
            return engine.is_blit();
        }

        if self.engines.mode == Some(Engine::Blit) {
            return true;
        }

        if src.is_tlb_miss_prone() || dst.is_tlb_miss_prone() {
            return true;
        }

        if self.force_blit_ring() {
            return true;
        }

        let early_tier = self.caps.gen_tier < COPY_RENDER_TIER;
        if early_tier
            && std::ptr::eq(src, dst)
            && self.can_switch_to(Engine::Blit, Some(dst), flags)
        {
            return true;
        }

        if dst.is_render_affine() || src.is_render_affine() {
            return false;
        }

        if flags.copy_last && early_tier && self.can_switch_to(Engine::Blit, Some(dst), flags) {
            return true;
        }

        if self.prefer_render_ring(dst) {
            return false;
        }

        if !self.prefer_blit_ring(dst, flags) {
            return false;
        }

        self.prefer_blit_bo(src, false) || self.prefer_blit_bo(dst, true)
    }

    /// Route a request to its call-site policy and name the chosen ring.
    pub fn select_engine(&self, req: &OperationRequest<'_>) -> Engine {
        let flags = SwitchFlags {
            copy_last: req.copy_last,
        };
        let prefer_blit = match req.kind {
            OpKind::Copy => {
                debug_assert!(req.src.is_some(), "copy request without a source buffer");
                self.prefer_blit_copy(req.src.unwrap_or(req.dst), req.dst, flags)
            }
            OpKind::Composite => self.prefer_blit_composite(req.dst, req.src),
            OpKind::FillSolid => self.prefer_blit_fill(req.dst, FillKind::Solid),
            OpKind::FillPoints => self.prefer_blit_fill(req.dst, FillKind::Points),
            OpKind::FillSpans => self.prefer_blit_fill(req.dst, FillKind::Spans),
        };
        let engine = Engine::from_prefer_blit(prefer_blit);
        tracing::trace!(kind = ?req.kind, current = %self.engines.ring, %engine, "ring selected");
        engine
    }
}

#[cfg(test)]
#[path = "../../tests/unit/policy/decide.rs"]
mod tests;
