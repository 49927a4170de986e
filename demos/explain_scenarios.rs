//! Walk a short drawing sequence through the policy, letting a tracker play
//! the submission layer. Run with `cargo run --example explain_scenarios`.

use ringsel::{
    BufferObject, DeviceCapabilities, Engine, EngineTracker, OpKind, OperationRequest,
    PolicyConfig, RingPolicy, Tiling,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let caps = DeviceCapabilities {
        gen_tier: 2,
        has_semaphores: true,
        has_write_through: false,
        power_save: false,
    };
    let config = PolicyConfig::from_env()?;
    let mut tracker = EngineTracker::new(&caps, Engine::Render);

    let mut scanout = BufferObject {
        scanout: true,
        ..BufferObject::tiled(Tiling::X, 7680)
    };
    let mut pixmap = BufferObject::tiled(Tiling::Y, 1024);
    let mut upload = BufferObject::linear(8192);

    let steps = [
        ("solid fill into pixmap", OpKind::FillSolid, false),
        ("composite pixmap onto scanout", OpKind::Composite, false),
        ("span fill on scanout", OpKind::FillSpans, false),
        ("final copy from upload buffer", OpKind::Copy, true),
    ];

    for (label, kind, copy_last) in steps {
        let engines = tracker.snapshot();
        let policy = RingPolicy::new(&caps, &engines, config);
        let (dst, src) = match kind {
            OpKind::FillSolid => (&mut pixmap, None),
            OpKind::Composite => (&mut scanout, Some(&pixmap)),
            OpKind::Copy => (&mut pixmap, Some(&upload)),
            _ => (&mut scanout, None),
        };
        let engine = policy.select_engine(&OperationRequest {
            dst: &*dst,
            src,
            kind,
            copy_last,
        });
        println!("{label:<32} -> {engine} (was on {})", engines.ring);

        tracker.set_mode(engine);
        tracker.emit(dst);
    }

    tracker.submit();
    let ring = tracker.snapshot().ring;
    tracker.retire(Engine::Blit, [&mut scanout, &mut pixmap, &mut upload]);
    tracker.retire(Engine::Render, [&mut scanout, &mut pixmap, &mut upload]);
    println!(
        "{} submits, ring {} -> {}",
        tracker.submits(),
        ring,
        tracker.snapshot().ring
    );
    Ok(())
}
