use std::path::Path;

use crate::{
    buffer::classify::BufferObject,
    device::{capabilities::DeviceCapabilities, engine_state::EngineState},
    foundation::{
        core::Engine,
        error::{RingError, RingResult},
    },
    policy::{
        config::PolicyConfig,
        decide::{OpKind, OperationRequest, RingPolicy},
    },
};

/// Serialized operation: owned buffers plus request fields.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScenarioOp {
    /// Request kind.
    pub kind: OpKind,
    /// Written buffer.
    pub dst: BufferObject,
    /// Read buffer; required for copies, absent for fills.
    #[serde(default)]
    pub src: Option<BufferObject>,
    /// Final operation of the batch.
    #[serde(default)]
    pub copy_last: bool,
}

/// One frozen decision input: every snapshot the policy reads.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    /// Device snapshot.
    #[serde(default)]
    pub caps: DeviceCapabilities,
    /// Ring activity snapshot.
    pub engines: EngineState,
    /// Overrides; environment and CLI flags apply on top.
    #[serde(default)]
    pub config: PolicyConfig,
    /// The request to decide.
    pub op: ScenarioOp,
}

/// Outcome reported for a [`Scenario`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Decision {
    /// Chosen ring.
    pub engine: Engine,
    /// The render ring was ruled out before any heuristic ran.
    pub force_blit: bool,
    /// The chosen engine differs from the current ring.
    pub switch_needed: bool,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json_str(json: &str) -> RingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario file.
    pub fn from_path(path: &Path) -> RingResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RingError::Other(anyhow::Error::new(e).context(format!(
                "read scenario '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&raw)
    }

    /// Check the snapshot invariants a real submission layer guarantees.
    pub fn validate(&self) -> RingResult<()> {
        match self.op.kind {
            OpKind::Copy if self.op.src.is_none() => {
                return Err(RingError::validation("copy requires a source buffer"));
            }
            OpKind::FillSolid | OpKind::FillPoints | OpKind::FillSpans
                if self.op.src.is_some() =>
            {
                return Err(RingError::validation("fills take no source buffer"));
            }
            _ => {}
        }

        check_buffer("dst", &self.op.dst)?;
        if let Some(src) = &self.op.src {
            check_buffer("src", src)?;
        }
        Ok(())
    }

    /// Borrow the operation as a policy request.
    pub fn request(&self) -> OperationRequest<'_> {
        OperationRequest {
            dst: &self.op.dst,
            src: self.op.src.as_ref(),
            kind: self.op.kind,
            copy_last: self.op.copy_last,
        }
    }

    /// Validate, then run the request through a [`RingPolicy`].
    #[tracing::instrument(skip(self), fields(kind = ?self.op.kind))]
    pub fn decide(&self) -> RingResult<Decision> {
        self.validate()?;
        let policy = RingPolicy::new(&self.caps, &self.engines, self.config);
        let engine = policy.select_engine(&self.request());
        Ok(Decision {
            engine,
            force_blit: policy.force_blit_ring(),
            switch_needed: engine != self.engines.ring,
        })
    }
}

fn check_buffer(name: &str, bo: &BufferObject) -> RingResult<()> {
    if let Some(pending) = bo.pending
        && bo.last_engine != Some(pending)
    {
        return Err(RingError::validation(format!(
            "{name}: pending on {pending} but last used by {}",
            bo.last_engine
                .map_or_else(|| "no engine".to_string(), |e| e.to_string())
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scenario/model.rs"]
mod tests;
