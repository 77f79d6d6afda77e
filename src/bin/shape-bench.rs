use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use shape_bench::{BenchConfig, BenchRunner, BenchTest, CompOp, ModuleKind, Style};

#[derive(Parser, Debug)]
#[command(name = "shape-bench", version, about = "Benchmarks 2D rendering backends")]
struct Cli {
    /// Module to run: raqote, tiny-skia or all.
    #[arg(long, default_value = "all")]
    module: String,

    /// JSON configuration. Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Screen width.
    #[arg(long)]
    width: Option<u32>,

    /// Screen height.
    #[arg(long)]
    height: Option<u32>,

    /// Shapes per test.
    #[arg(long)]
    quantity: Option<u32>,

    /// Runs per test, the best one is reported.
    #[arg(long)]
    repeat: Option<u32>,

    /// Compositing operator, like `src-over` or `multiply`.
    #[arg(long)]
    comp_op: Option<CompOp>,

    /// Fill style, like `solid`, `radial-reflect` or `pattern-nn`.
    #[arg(long)]
    style: Option<Style>,

    /// Shape size. Can be repeated.
    #[arg(long = "size")]
    sizes: Vec<u32>,

    /// Test to run, like `fill-rect-a`. Can be repeated.
    #[arg(long = "test")]
    tests: Vec<BenchTest>,

    /// Stroke width.
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Workload seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Writes results as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Saves final surfaces as PNG into a directory.
    #[arg(long)]
    save_images: Option<PathBuf>,

    /// Enables debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn modules(&self) -> anyhow::Result<Vec<ModuleKind>> {
        if self.module == "all" {
            return Ok(ModuleKind::ALL.to_vec());
        }

        Ok(vec![self.module.parse()?])
    }

    fn config(&self) -> anyhow::Result<BenchConfig> {
        let mut config = match self.config {
            Some(ref path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read config '{}'", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parse config '{}'", path.display()))?
            }
            None => BenchConfig::default(),
        };

        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.quantity {
            config.quantity = v;
        }
        if let Some(v) = self.repeat {
            config.repeat = v;
        }
        if let Some(v) = self.comp_op {
            config.comp_op = v;
        }
        if let Some(v) = self.style {
            config.style = v;
        }
        if !self.sizes.is_empty() {
            config.sizes = self.sizes.clone();
        }
        if !self.tests.is_empty() {
            config.tests = self.tests.clone();
        }
        if let Some(v) = self.stroke_width {
            config.stroke_width = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.save_images.is_some() {
            config.save_images = self.save_images.clone();
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let modules = cli.modules()?;
    let config = cli.config()?;
    let mut runner = BenchRunner::new(config).context("invalid configuration")?;

    let mut reports = Vec::with_capacity(modules.len());
    for kind in modules {
        let module = shape_bench::create_module(kind);
        let report = runner
            .run_module(module.as_ref())
            .with_context(|| format!("run '{}'", kind))?;
        reports.push(report);
    }

    print!("{}", shape_bench::render_table(&reports));

    if let Some(ref path) = cli.json {
        let json = shape_bench::to_json(&reports)?;
        std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
    }

    Ok(())
}
