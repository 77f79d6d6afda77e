use shape_bench::*;

#[test]
fn raqote_support_matches_translator() {
    let module = RaqoteModule::new();
    for op in CompOp::ALL {
        assert_eq!(module.supports_comp_op(op), raqote_blend_mode(op).is_some(), "{}", op);
        assert_eq!(module.supports_comp_op_code(op.to_u32()), module.supports_comp_op(op));
    }
}

#[test]
fn tiny_skia_support_matches_translator() {
    let module = TinySkiaModule::new();
    for op in CompOp::ALL {
        assert_eq!(module.supports_comp_op(op), tiny_skia_blend_mode(op).is_some(), "{}", op);
        assert!(module.supports_comp_op(op));
    }
}

#[test]
fn raqote_cannot_modulate() {
    let module = RaqoteModule::new();
    assert_eq!(raqote_blend_mode(CompOp::Modulate), None);
    assert!(!module.supports_comp_op(CompOp::Modulate));

    let unsupported: Vec<_> = CompOp::ALL
        .iter()
        .filter(|op| !module.supports_comp_op(**op))
        .collect();
    assert_eq!(unsupported, [&CompOp::Modulate]);
}

#[test]
fn raqote_mapping() {
    assert_eq!(raqote_blend_mode(CompOp::SrcOver), Some(raqote::BlendMode::SrcOver));
    assert_eq!(raqote_blend_mode(CompOp::SrcCopy), Some(raqote::BlendMode::Src));
    assert_eq!(raqote_blend_mode(CompOp::DstCopy), Some(raqote::BlendMode::Dst));
    assert_eq!(raqote_blend_mode(CompOp::Plus), Some(raqote::BlendMode::Add));
    assert_eq!(raqote_blend_mode(CompOp::Exclusion), Some(raqote::BlendMode::Exclusion));
}

#[test]
fn tiny_skia_mapping() {
    use tiny_skia::BlendMode;

    assert_eq!(tiny_skia_blend_mode(CompOp::SrcCopy), Some(BlendMode::Source));
    assert_eq!(tiny_skia_blend_mode(CompOp::DstAtop), Some(BlendMode::DestinationAtop));
    assert_eq!(tiny_skia_blend_mode(CompOp::Modulate), Some(BlendMode::Modulate));
}

#[test]
fn out_of_range_codes() {
    let modules: [Box<dyn BenchModule>; 2] =
        [Box::new(RaqoteModule::new()), Box::new(TinySkiaModule::new())];

    for code in [25, 26, 1000, u32::MAX] {
        assert_eq!(raqote_blend_mode_from_code(code), None);
        assert_eq!(tiny_skia_blend_mode_from_code(code), None);
        for module in &modules {
            assert!(!module.supports_comp_op_code(code), "{} {}", module.name(), code);
        }
    }
}

#[test]
fn translation_is_deterministic() {
    for op in CompOp::ALL {
        assert_eq!(raqote_blend_mode(op), raqote_blend_mode_from_code(op.to_u32()));
        assert_eq!(tiny_skia_blend_mode(op), tiny_skia_blend_mode_from_code(op.to_u32()));
    }
}
