// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod clean;
pub mod concat;
pub mod copy;
pub mod options;
pub mod sass;

pub use clean::*;
pub use concat::*;
pub use copy::*;
pub use options::*;
pub use sass::*;

use std::path::Path;

use crate::errors::TaskError;
use crate::observability::messages::{task::OutputWritten, StructuredLog};

/// Write a bundle, creating missing parent directories
pub(crate) async fn write_output(task_id: &str, path: &Path, bytes: &[u8]) -> Result<(), TaskError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| TaskError::io("failed to create directory", parent, e))?;
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| TaskError::io("failed to write", path, e))?;

    OutputWritten {
        task_id,
        path,
        size: bytes.len(),
    }
    .log();
    Ok(())
}
