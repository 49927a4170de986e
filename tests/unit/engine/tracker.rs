use super::*;
use crate::foundation::core::Tiling;

fn caps() -> DeviceCapabilities {
    DeviceCapabilities {
        gen_tier: 3,
        has_semaphores: true,
        has_write_through: true,
        power_save: false,
    }
}

#[test]
fn emit_marks_buffers_pending_on_current_ring() {
    let mut tracker = EngineTracker::new(&caps(), Engine::Render);
    let mut bo = BufferObject::tiled(Tiling::X, 512);

    tracker.set_mode(Engine::Render);
    tracker.emit(&mut bo);

    assert_eq!(tracker.batch_len(), 1);
    assert_eq!(bo.pending, Some(Engine::Render));
    assert_eq!(bo.last_engine, Some(Engine::Render));
    assert_eq!(tracker.submits(), 0);
}

#[test]
fn switching_rings_submits_open_batch() {
    let mut tracker = EngineTracker::new(&caps(), Engine::Render);
    let mut bo = BufferObject::linear(256);

    tracker.set_mode(Engine::Render);
    tracker.emit(&mut bo);
    tracker.set_mode(Engine::Blit);

    let state = tracker.snapshot();
    assert_eq!(tracker.submits(), 1);
    assert_eq!(tracker.batch_len(), 0);
    assert_eq!(state.ring, Engine::Blit);
    assert_eq!(state.mode, Some(Engine::Blit));
    assert!(!state.render_idle);
    assert!(state.blit_idle);
}

#[test]
fn empty_batch_switch_does_not_submit() {
    let mut tracker = EngineTracker::new(&caps(), Engine::Render);
    tracker.context_switch(Engine::Blit);
    assert_eq!(tracker.submits(), 0);
    assert_eq!(tracker.snapshot().ring, Engine::Blit);
}

#[test]
fn retire_clears_only_matching_markers() {
    let mut tracker = EngineTracker::new(&caps(), Engine::Render);
    let mut on_render = BufferObject::linear(256);
    let mut on_blit = BufferObject::linear(256).with_pending(Engine::Blit);

    tracker.set_mode(Engine::Render);
    tracker.emit(&mut on_render);
    tracker.submit();
    tracker.retire(Engine::Render, [&mut on_render, &mut on_blit]);

    assert_eq!(on_render.pending, None);
    assert_eq!(on_render.last_engine, Some(Engine::Render));
    assert_eq!(on_blit.pending, Some(Engine::Blit));
    assert!(tracker.snapshot().render_idle);
}

#[test]
fn render_retire_returns_ring_to_open_batch_mode() {
    let mut tracker = EngineTracker::new(&caps(), Engine::Render);

    tracker.set_mode(Engine::Render);
    tracker.context_switch(Engine::Blit);
    assert_eq!(tracker.submits(), 0);
    assert_eq!(tracker.snapshot().ring, Engine::Blit);

    tracker.render_retire();

    let state = tracker.snapshot();
    assert_eq!(state.ring, Engine::Render);
    assert_eq!(state.mode, Some(Engine::Render));
    assert!(state.render_idle);
}

#[test]
fn render_retire_keeps_ring_while_retire_outstanding_without_semaphores() {
    let caps = DeviceCapabilities {
        has_semaphores: false,
        ..caps()
    };
    let mut tracker = EngineTracker::new(&caps, Engine::Render);
    let mut bo = BufferObject::linear(256);

    tracker.set_mode(Engine::Render);
    tracker.emit(&mut bo);
    tracker.submit();
    assert_eq!(tracker.submits(), 1);

    tracker.set_mode(Engine::Render);
    tracker.context_switch(Engine::Blit);
    tracker.render_retire();

    let state = tracker.snapshot();
    assert_eq!(state.ring, Engine::Blit);
    assert!(state.render_idle);
}
