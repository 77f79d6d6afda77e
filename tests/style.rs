use shape_bench::*;

#[test]
fn raqote_supports_every_style() {
    let module = RaqoteModule::new();
    for style in Style::ALL {
        assert!(module.supports_style(style), "{}", style);
        assert!(module.supports_style_code(style.to_u32()));
    }
}

#[test]
fn tiny_skia_has_no_conic() {
    let module = TinySkiaModule::new();
    for style in Style::ALL {
        assert_eq!(module.supports_style(style), style != Style::Conic, "{}", style);
    }
}

#[test]
fn unknown_style_codes() {
    let raqote = RaqoteModule::new();
    let tiny_skia = TinySkiaModule::new();
    for code in [10, 11, 255, u32::MAX] {
        assert!(!raqote.supports_style_code(code));
        assert!(!tiny_skia.supports_style_code(code));
        assert_eq!(EdgeMode::from_style_code(code), EdgeMode::Clamp);
    }
}

#[test]
fn edge_modes() {
    use EdgeMode::*;

    let expected = [
        (Style::Solid, Clamp),
        (Style::LinearPad, Clamp),
        (Style::LinearRepeat, Repeat),
        (Style::LinearReflect, Mirror),
        (Style::RadialPad, Clamp),
        (Style::RadialRepeat, Repeat),
        (Style::RadialReflect, Mirror),
        (Style::Conic, Clamp),
        (Style::PatternNearest, Clamp),
        (Style::PatternBilinear, Clamp),
    ];

    for (style, mode) in expected {
        assert_eq!(EdgeMode::from_style(style), mode, "{}", style);
        assert_eq!(EdgeMode::from_style_code(style.to_u32()), mode);
    }
}
