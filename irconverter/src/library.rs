// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::OsStr;
use std::sync::Arc;

use irconverter_sys::MetalIrConverter;

use crate::Result;

/// Environment variable naming the shared library [`IrConverter::from_env`] opens.
pub const LIBRARY_PATH_ENV: &str = "IRCONVERTER_LIBRARY_PATH";

/// A loaded instance of the Metal shader converter library.
///
/// This is a cheap handle: clones share the same loaded library, which stays loaded until
/// the last clone and every object created from it are dropped.
#[derive(Clone, Debug)]
pub struct IrConverter {
    lib: Arc<MetalIrConverter>,
}

impl IrConverter {
    /// Opens the library at `path`, resolving all of its entry points.
    pub fn new(path: impl AsRef<OsStr>) -> Result<Self> {
        let path = path.as_ref();
        // SAFETY: `metal_irconverter` has no initialisers with preconditions, and the entry
        // point signatures in `irconverter_sys` follow its public header.
        let lib = unsafe { MetalIrConverter::new(path) }?;
        for symbol in lib.missing_optional_symbols() {
            log::debug!("{path:?} doesn't export `{symbol}`");
        }
        Ok(Self { lib: Arc::new(lib) })
    }

    /// Opens the library named by the `IRCONVERTER_LIBRARY_PATH` environment variable.
    ///
    /// When the variable is unset this falls back to the platform's file name for
    /// `metalirconverter` (e.g. `libmetalirconverter.dylib`), found through the usual
    /// dynamic loader search path.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(LIBRARY_PATH_ENV) {
            Some(path) => Self::new(path),
            None => Self::new(libloading::library_filename("metalirconverter")),
        }
    }

    /// The raw entry points.
    pub fn ffi(&self) -> &MetalIrConverter {
        &self.lib
    }
}

static_assertions::assert_impl_all!(IrConverter: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn missing_library_is_a_library_error() {
        let result = IrConverter::new("/nonexistent/libmetalirconverter.dylib");
        assert!(matches!(result, Err(Error::Library(_))));
    }
}
