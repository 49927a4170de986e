//! ringsel picks the command engine ("ring") for the next GPU operation on
//! hardware with a render ring and a blit ring.
//!
//! Moving between rings costs a synchronization point. The policy weighs that
//! cost against per-ring efficiency using only caller-supplied snapshots:
//!
//! 1. [`DeviceCapabilities`]: generation tier, semaphores, write-through, power saving
//! 2. [`EngineState`]: current ring, open batch mode, queue idleness
//! 3. [`BufferObject`]: tiling, pitch, residency and the pending-ring marker
//! 4. [`PolicyConfig`]: diagnostic overrides
//!
//! [`RingPolicy`] borrows those snapshots and answers the call-site queries
//! (`prefer_blit_copy`, `prefer_blit_composite`, `prefer_blit_fill`, ...).
//! Queries never fail, allocate or block. Caller contract violations trip
//! `debug_assert!`s.
//!
//! [`EngineTracker`] is a small reference owner of ring state that reacts to the
//! [`RingHooks`] notifications, and [`Scenario`] freezes a full decision input
//! as JSON for the `ringsel` binary.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
mod device;
mod engine;
mod foundation;
mod policy;
mod scenario;

pub use buffer::classify::{BufferObject, TLB_MISS_PITCH};
pub use device::capabilities::{DeviceCapabilities, RENDER_CAPABLE_TIER};
pub use device::engine_state::EngineState;
pub use engine::tracker::{EngineTracker, RingHooks};
pub use foundation::core::{Engine, Tiling};
pub use foundation::error::{RingError, RingResult};
pub use policy::config::{ENV_FORCE_ENGINE, ENV_NO_RING_SWITCH, EngineOverride, PolicyConfig};
pub use policy::decide::{FillKind, OpKind, OperationRequest, RingPolicy};
pub use policy::switch::SwitchFlags;
pub use scenario::model::{Decision, Scenario, ScenarioOp};
