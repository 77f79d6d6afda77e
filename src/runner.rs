// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use shape_bench_core::{
    BenchError, BenchModule, BenchParams, BenchRandoms, BenchResult, BenchTest, CompOp,
    PixelFormat, RunContext, SpriteSet, Style, Surface, DEFAULT_SIZES,
};

/// Benchmark configuration.
///
/// Every field has a default, so a JSON config can set only what it needs.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BenchConfig {
    /// Screen width.
    pub width: u32,
    /// Screen height.
    pub height: u32,
    /// Shapes per test.
    pub quantity: u32,
    /// How many times each test is run. The best time is kept.
    pub repeat: u32,
    /// Shape sizes.
    pub sizes: Vec<u32>,
    /// Compositing operator.
    pub comp_op: CompOp,
    /// Fill style.
    pub style: Style,
    /// Stroke width.
    pub stroke_width: f64,
    /// Tests to run, in order.
    pub tests: Vec<BenchTest>,
    /// Workload seed.
    pub seed: Option<u64>,
    /// A directory to save final surfaces into.
    pub save_images: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            width: 512,
            height: 600,
            quantity: 1000,
            repeat: 1,
            sizes: DEFAULT_SIZES.to_vec(),
            comp_op: CompOp::SrcOver,
            style: Style::Solid,
            stroke_width: 2.0,
            tests: BenchTest::ALL.to_vec(),
            seed: None,
            save_images: None,
        }
    }
}

impl BenchConfig {
    /// Returns run parameters for a shape size.
    pub fn params(&self, shape_size: u32) -> BenchParams {
        BenchParams {
            screen_w: self.width,
            screen_h: self.height,
            format: PixelFormat::Prgb32,
            style: self.style,
            comp_op: self.comp_op,
            shape_size,
            stroke_width: self.stroke_width,
            quantity: self.quantity,
        }
    }

    /// Checks that configuration describes a runnable benchmark.
    pub fn validate(&self) -> BenchResult<()> {
        if self.tests.is_empty() {
            return Err(BenchError::invalid_params("no tests to run"));
        }

        if self.sizes.is_empty() {
            return Err(BenchError::invalid_params("no shape sizes"));
        }

        if self.repeat == 0 {
            return Err(BenchError::invalid_params("repeat must be positive"));
        }

        if self.save_images.is_some() && !cfg!(feature = "png-format") {
            return Err(BenchError::invalid_params(
                "saving images requires the `png-format` feature",
            ));
        }

        for size in &self.sizes {
            self.params(*size).validate()?;
        }

        Ok(())
    }
}

/// A test result.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    /// The best run time in microseconds.
    Measured {
        /// Microseconds.
        best_us: u64,
    },
    /// The module cannot run the test.
    Skipped {
        /// Why.
        reason: String,
    },
}

/// A single test result for a single shape size.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TestRecord {
    pub test: BenchTest,
    pub size: u32,
    pub outcome: Outcome,
}

/// Parameters shared by all records of a report.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParamsSummary {
    pub width: u32,
    pub height: u32,
    pub quantity: u32,
    pub repeat: u32,
    pub comp_op: CompOp,
    pub style: Style,
    pub stroke_width: f64,
}

/// All results of a single module.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModuleReport {
    pub module: String,
    pub params: ParamsSummary,
    pub sizes: Vec<u32>,
    pub records: Vec<TestRecord>,
}

impl ModuleReport {
    /// Returns a result for a test and a shape size.
    pub fn outcome(&self, test: BenchTest, size: u32) -> Option<&Outcome> {
        self.records
            .iter()
            .find(|r| r.test == test && r.size == size)
            .map(|r| &r.outcome)
    }

    /// Returns tests in the order they were run.
    pub fn tests(&self) -> Vec<BenchTest> {
        let mut tests: Vec<BenchTest> = Vec::new();
        for record in &self.records {
            if !tests.contains(&record.test) {
                tests.push(record.test);
            }
        }

        tests
    }
}

/// A benchmark driver.
///
/// Owns everything modules draw into and everything the workload is derived from.
#[derive(Debug)]
pub struct BenchRunner {
    config: BenchConfig,
    randoms: BenchRandoms,
    surface: Surface,
    // One per `config.sizes` entry.
    sprites: Vec<SpriteSet>,
}

impl BenchRunner {
    /// Creates a new runner.
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        config.validate()?;

        let surface = Surface::new(config.width, config.height, PixelFormat::Prgb32)?;
        let sprites = config
            .sizes
            .iter()
            .map(|size| SpriteSet::generate(*size))
            .collect::<BenchResult<Vec<_>>>()?;

        let randoms = match config.seed {
            Some(seed) => BenchRandoms::new(seed),
            None => BenchRandoms::default(),
        };

        Ok(BenchRunner {
            config,
            randoms,
            surface,
            sprites,
        })
    }

    /// Returns runner's configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Returns the surface as the last run left it.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Runs all configured tests with all configured sizes.
    ///
    /// Fails on the first run that a module fails to set up.
    #[tracing::instrument(skip_all, fields(module = %module.name()))]
    pub fn run_module(&mut self, module: &dyn BenchModule) -> BenchResult<ModuleReport> {
        let mut records = Vec::with_capacity(self.config.tests.len() * self.config.sizes.len());
        let tests = self.config.tests.clone();

        for test in tests {
            for idx in 0..self.config.sizes.len() {
                let size = self.config.sizes[idx];
                let outcome = self.run_test(module, test, idx)?;
                match outcome {
                    Outcome::Measured { best_us } => {
                        tracing::info!(test = %test, size, best_us, "measured");
                        self.save_image(module, test, size)?;
                    }
                    Outcome::Skipped { ref reason } => {
                        tracing::warn!(test = %test, size, %reason, "skipped");
                    }
                }

                records.push(TestRecord {
                    test,
                    size,
                    outcome,
                });
            }
        }

        Ok(ModuleReport {
            module: module.name().to_string(),
            params: ParamsSummary {
                width: self.config.width,
                height: self.config.height,
                quantity: self.config.quantity,
                repeat: self.config.repeat,
                comp_op: self.config.comp_op,
                style: self.config.style,
                stroke_width: self.config.stroke_width,
            },
            sizes: self.config.sizes.clone(),
            records,
        })
    }

    fn run_test(
        &mut self,
        module: &dyn BenchModule,
        test: BenchTest,
        size_idx: usize,
    ) -> BenchResult<Outcome> {
        if !module.supports_comp_op(self.config.comp_op) {
            return Ok(Outcome::Skipped {
                reason: format!("'{}' compositing is not supported", self.config.comp_op),
            });
        }

        if !module.supports_style(self.config.style) {
            return Ok(Outcome::Skipped {
                reason: format!("'{}' style is not supported", self.config.style),
            });
        }

        let params = self.config.params(self.config.sizes[size_idx]);
        let mut best = Duration::MAX;
        for _ in 0..self.config.repeat {
            self.randoms.reset();

            let ctx = RunContext {
                params: &params,
                surface: &mut self.surface,
                sprites: &self.sprites[size_idx],
                randoms: &mut self.randoms,
            };

            let start = Instant::now();
            let mut run = module.on_before_run(ctx)?;
            test.run(run.as_mut());
            module.on_after_run(run);
            best = best.min(start.elapsed());
        }

        Ok(Outcome::Measured {
            best_us: u64::try_from(best.as_micros()).unwrap_or(u64::MAX),
        })
    }

    #[cfg(feature = "png-format")]
    fn save_image(&self, module: &dyn BenchModule, test: BenchTest, size: u32) -> BenchResult<()> {
        let dir = match self.config.save_images {
            Some(ref dir) => dir,
            None => return Ok(()),
        };

        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}-{}-{}.png", module.name(), test, size));
        crate::save_png(&self.surface, &path)?;
        tracing::debug!(path = %path.display(), "image saved");
        Ok(())
    }

    #[cfg(not(feature = "png-format"))]
    fn save_image(&self, _: &dyn BenchModule, _: BenchTest, _: u32) -> BenchResult<()> {
        Ok(())
    }
}
