// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::fmt::Write;

use crate::{ModuleReport, Outcome};

const TEST_COLUMN_WIDTH: usize = 18;
const SIZE_COLUMN_WIDTH: usize = 12;

/// Renders reports as plain text tables.
///
/// One table per module, one row per test and one column per shape size.
/// Times are the best run in milliseconds. Skipped tests are shown as `N/A`.
pub fn render_table(reports: &[ModuleReport]) -> String {
    let mut out = String::new();
    for report in reports {
        render_module(report, &mut out);
    }

    out
}

fn render_module(report: &ModuleReport, out: &mut String) {
    let p = &report.params;
    // Writing into a `String` never fails.
    let _ = writeln!(
        out,
        "{} [{}x{}, quantity={}, comp-op={}, style={}]",
        report.module, p.width, p.height, p.quantity, p.comp_op, p.style
    );

    let _ = write!(out, "{:<w$}", "test", w = TEST_COLUMN_WIDTH);
    for size in &report.sizes {
        let _ = write!(out, "{:>w$}", format!("{}x{}", size, size), w = SIZE_COLUMN_WIDTH);
    }
    out.push('\n');

    for test in report.tests() {
        let _ = write!(out, "{:<w$}", test.name(), w = TEST_COLUMN_WIDTH);
        for size in &report.sizes {
            let cell = match report.outcome(test, *size) {
                Some(Outcome::Measured { best_us }) => format!("{:.3}", *best_us as f64 / 1000.0),
                Some(Outcome::Skipped { .. }) | None => "N/A".to_string(),
            };
            let _ = write!(out, "{:>w$}", cell, w = SIZE_COLUMN_WIDTH);
        }
        out.push('\n');
    }

    out.push('\n');
}

/// Serializes reports into pretty JSON.
pub fn to_json(reports: &[ModuleReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
