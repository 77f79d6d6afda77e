/*!
`shape-bench` measures how fast 2D rendering backends draw simple shapes.

Every backend is wrapped into a [`BenchModule`] that renders exactly the same
random workload into driver-owned pixels. See `src/bin/shape-bench.rs` for
the command line driver.
*/

#![warn(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![allow(clippy::float_cmp)]
#![allow(clippy::too_many_arguments)]

mod raqote_module;
mod registry;
mod report;
mod runner;
mod tiny_skia_module;

#[cfg(feature = "png-format")]
mod png_output;

pub use shape_bench_core::*;

pub use raqote_module::{raqote_blend_mode, raqote_blend_mode_from_code, RaqoteModule};
pub use registry::{create_module, ModuleKind};
pub use report::{render_table, to_json};
pub use runner::{BenchConfig, BenchRunner, ModuleReport, Outcome, ParamsSummary, TestRecord};
pub use tiny_skia_module::{tiny_skia_blend_mode, tiny_skia_blend_mode_from_code, TinySkiaModule};

#[cfg(feature = "png-format")]
pub use png_output::{encode_png, save_png, ImageError};
