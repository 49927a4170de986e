use super::*;

fn caps(has_write_through: bool) -> DeviceCapabilities {
    DeviceCapabilities {
        has_write_through,
        ..DeviceCapabilities::default()
    }
}

#[test]
fn io_mapped_is_always_uncached() {
    let bo = BufferObject {
        io: true,
        ..BufferObject::tiled(Tiling::X, 512)
    };
    assert!(bo.is_uncached(&caps(true)));
    assert!(bo.is_uncached(&caps(false)));
}

#[test]
fn scanout_is_uncached_only_without_write_through() {
    let bo = BufferObject {
        scanout: true,
        ..BufferObject::tiled(Tiling::X, 8192)
    };
    assert!(bo.is_uncached(&caps(false)));
    assert!(!bo.is_uncached(&caps(true)));
    assert!(!BufferObject::tiled(Tiling::X, 8192).is_uncached(&caps(false)));
}

#[test]
fn tlb_miss_needs_linear_and_wide_pitch() {
    assert!(BufferObject::linear(TLB_MISS_PITCH).is_tlb_miss_prone());
    assert!(!BufferObject::linear(TLB_MISS_PITCH - 1).is_tlb_miss_prone());
    assert!(!BufferObject::tiled(Tiling::Y, 16384).is_tlb_miss_prone());
}

#[test]
fn render_affinity_suppresses_tlb_miss() {
    let bo = BufferObject::linear(8192).with_pending(Engine::Render);
    assert!(bo.is_render_affine());
    assert!(!bo.is_tlb_miss_prone());

    let bo = BufferObject::linear(8192).with_pending(Engine::Blit);
    assert!(!bo.is_render_affine());
    assert!(bo.is_tlb_miss_prone());
}

#[test]
fn with_pending_tracks_last_engine() {
    let bo = BufferObject::linear(64).with_pending(Engine::Blit);
    assert_eq!(bo.last_engine, Some(Engine::Blit));
    assert!(bo.is_pending_on(Engine::Blit));
}
