// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// A shorthand for results produced by the driver and the modules.
pub type BenchResult<T> = Result<T, BenchError>;

/// A benchmark error.
///
/// Unsupported operators and styles are not errors: they are reported
/// by [`BenchModule`](crate::BenchModule) capability queries instead.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// Parameters or configuration cannot be used for a run.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A driver-owned buffer cannot be created or viewed.
    #[error("surface error: {0}")]
    Surface(String),

    /// A backend refused to create one of its resources.
    #[error("{module} backend error: {message}")]
    Backend {
        /// Module name.
        module: String,
        /// What went wrong.
        message: String,
    },

    /// A name that doesn't match any known value.
    #[error("unknown {kind} '{name}'")]
    UnknownName {
        /// What was looked up.
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// An I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An image output error, like a failed PNG encoding.
    #[error(transparent)]
    Image(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// A JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    /// Creates a [`BenchError::InvalidParams`].
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Creates a [`BenchError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Creates a [`BenchError::Backend`].
    pub fn backend(module: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Backend {
            module: module.into(),
            message: msg.into(),
        }
    }

    /// Creates a [`BenchError::UnknownName`].
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
        }
    }
}
