// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shape_bench_core::{BenchError, BenchModule};

use crate::{RaqoteModule, TinySkiaModule};

/// A known backend module.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    Raqote,
    TinySkia,
}

impl ModuleKind {
    /// All modules.
    pub const ALL: [ModuleKind; 2] = [ModuleKind::Raqote, ModuleKind::TinySkia];

    /// Returns module's name.
    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::Raqote => "raqote",
            ModuleKind::TinySkia => "tiny-skia",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| BenchError::unknown_name("module", s))
    }
}

/// Creates a new module.
pub fn create_module(kind: ModuleKind) -> Box<dyn BenchModule> {
    match kind {
        ModuleKind::Raqote => Box::new(RaqoteModule::new()),
        ModuleKind::TinySkia => Box::new(TinySkiaModule::new()),
    }
}
