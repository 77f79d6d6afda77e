use shape_bench::*;

struct Driver {
    params: BenchParams,
    surface: Surface,
    sprites: SpriteSet,
    randoms: BenchRandoms,
}

impl Driver {
    fn new(params: BenchParams) -> Self {
        Driver {
            surface: Surface::new(params.screen_w, params.screen_h, params.format).unwrap(),
            sprites: SpriteSet::generate(params.shape_size).unwrap(),
            randoms: BenchRandoms::default(),
            params,
        }
    }

    fn context(&mut self) -> RunContext {
        RunContext {
            params: &self.params,
            surface: &mut self.surface,
            sprites: &self.sprites,
            randoms: &mut self.randoms,
        }
    }
}

fn params_64(style: Style) -> BenchParams {
    BenchParams {
        screen_w: 64,
        screen_h: 64,
        style,
        shape_size: 16,
        quantity: 10,
        ..BenchParams::default()
    }
}

fn cycles(n: u32) -> ResourceStats {
    ResourceStats {
        created: n,
        released: n,
    }
}

fn modules() -> Vec<Box<dyn BenchModule>> {
    ModuleKind::ALL.iter().map(|kind| create_module(*kind)).collect()
}

#[test]
fn before_after_without_draws() {
    for module in modules() {
        let mut driver = Driver::new(params_64(Style::Solid));
        driver.surface.fill(0xFF12_3456);
        let sprites = driver.sprites.clone();

        let run = module.on_before_run(driver.context()).unwrap();
        module.on_after_run(run);

        assert_eq!(module.resources().live(), 0, "{}", module.name());
        assert!(driver.surface.data().iter().all(|p| *p == 0), "{}", module.name());
        assert_eq!(driver.sprites, sprites);
    }
}

#[test]
fn radial_reflect_scenario() {
    let module = RaqoteModule::new();
    let mut driver = Driver::new(params_64(Style::RadialReflect));

    let run = module.on_before_run(driver.context()).unwrap();
    assert_eq!(run.edge_mode(), EdgeMode::Mirror);
    assert_eq!(run.comp_op(), CompOp::SrcOver);
    module.on_after_run(run);

    assert_eq!(driver.surface.packed_pixels().unwrap().len(), 64 * 64);
    assert!(driver.surface.data().iter().all(|p| *p == 0));
}

#[test]
fn two_cycles() {
    for module in modules() {
        let mut driver = Driver::new(params_64(Style::LinearRepeat));
        for _ in 0..2 {
            let run = module.on_before_run(driver.context()).unwrap();
            assert_eq!(module.resources().live(), 1);
            module.on_after_run(run);
        }

        let stats = module.resources();
        assert_eq!(stats, cycles(2), "{}", module.name());
        assert_eq!(stats.live(), 0);
    }
}

#[test]
fn dropped_run_is_released() {
    let module = TinySkiaModule::new();
    let mut driver = Driver::new(params_64(Style::Solid));
    {
        let mut run = module.on_before_run(driver.context()).unwrap();
        run.rect_smooth(false);
    }

    assert_eq!(module.resources(), cycles(1));
}

#[test]
fn padded_surface_is_rejected() {
    for module in modules() {
        let mut driver = Driver::new(params_64(Style::Solid));
        driver.surface = Surface::with_stride(64, 64, 80, PixelFormat::Prgb32).unwrap();
        driver.surface.fill(0xFFFF_FFFF);

        let result = module.on_before_run(driver.context());
        assert!(matches!(result, Err(BenchError::Surface(_))), "{}", module.name());
        drop(result);

        assert_eq!(module.resources(), ResourceStats::default());
        assert!(driver.surface.data().iter().all(|p| *p == 0xFFFF_FFFF));
    }
}

#[test]
fn mismatched_surface_is_rejected() {
    for module in modules() {
        let mut driver = Driver::new(params_64(Style::Solid));
        driver.surface = Surface::new(32, 64, PixelFormat::Prgb32).unwrap();

        assert!(module.on_before_run(driver.context()).is_err());
        assert_eq!(module.resources().created, 0);
    }
}

#[test]
fn rejected_runs_leave_surface_untouched() {
    let cases: [(Box<dyn BenchModule>, BenchParams); 3] = [
        (
            Box::new(RaqoteModule::new()),
            BenchParams {
                comp_op: CompOp::Modulate,
                ..params_64(Style::Solid)
            },
        ),
        (Box::new(TinySkiaModule::new()), params_64(Style::Conic)),
        (
            Box::new(TinySkiaModule::new()),
            BenchParams {
                shape_size: 0,
                ..params_64(Style::Solid)
            },
        ),
    ];

    for (module, params) in cases {
        let mut driver = Driver::new(params_64(Style::Solid));
        driver.params = params;
        driver.surface.fill(0xFF12_3456);

        assert!(module.on_before_run(driver.context()).is_err(), "{}", module.name());
        assert!(driver.surface.data().iter().all(|p| *p == 0xFF12_3456), "{}", module.name());
        assert_eq!(module.resources(), ResourceStats::default());
    }
}

#[test]
fn unsupported_combinations_fail_early() {
    let raqote = RaqoteModule::new();
    let mut driver = Driver::new(BenchParams {
        comp_op: CompOp::Modulate,
        ..params_64(Style::Solid)
    });
    assert!(matches!(
        raqote.on_before_run(driver.context()),
        Err(BenchError::Backend { .. })
    ));
    assert_eq!(raqote.resources().created, 0);

    let tiny_skia = TinySkiaModule::new();
    let mut driver = Driver::new(params_64(Style::Conic));
    assert!(tiny_skia.on_before_run(driver.context()).is_err());
    assert_eq!(tiny_skia.resources().created, 0);
}

#[test]
fn invalid_params_fail_early() {
    let module = RaqoteModule::new();
    let mut driver = Driver::new(params_64(Style::Solid));
    driver.params.stroke_width = f64::NAN;

    assert!(matches!(
        module.on_before_run(driver.context()),
        Err(BenchError::InvalidParams(_))
    ));
    assert_eq!(module.resources(), ResourceStats::default());
}
