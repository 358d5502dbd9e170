// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::c_void;
use std::ptr::NonNull;

use irconverter_sys as ffi;

use crate::{Error, IrConverter, Result};

/// Error codes reported by the converter.
///
/// Unlike [`ffi::IRErrorCode`], this can represent any raw code: values this crate doesn't
/// know map to [`IrErrorCode::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IrErrorCode {
    NoError,
    ShaderRequiresRootSignature,
    UnrecognizedRootSignatureDescriptor,
    UnrecognizedParameterTypeInRootSignature,
    ResourceNotReferencedByRootSignature,
    ShaderIncompatibleWithDualSourceBlending,
    UnsupportedWaveSize,
    UnsupportedInstruction,
    CompilationError,
    FailedToSynthesizeStageInFunction,
    FailedToSynthesizeStreamOutFunction,
    FailedToSynthesizeIntersectionWrapperFunction,
    UnableToVerifyModule,
    UnableToLinkModule,
    Unknown,
}

impl IrErrorCode {
    pub fn from_raw(code: u32) -> Self {
        use ffi::IRErrorCode as Raw;
        match code {
            c if c == Raw::NoError as u32 => Self::NoError,
            c if c == Raw::ShaderRequiresRootSignature as u32 => Self::ShaderRequiresRootSignature,
            c if c == Raw::UnrecognizedRootSignatureDescriptor as u32 => {
                Self::UnrecognizedRootSignatureDescriptor
            }
            c if c == Raw::UnrecognizedParameterTypeInRootSignature as u32 => {
                Self::UnrecognizedParameterTypeInRootSignature
            }
            c if c == Raw::ResourceNotReferencedByRootSignature as u32 => {
                Self::ResourceNotReferencedByRootSignature
            }
            c if c == Raw::ShaderIncompatibleWithDualSourceBlending as u32 => {
                Self::ShaderIncompatibleWithDualSourceBlending
            }
            c if c == Raw::UnsupportedWaveSize as u32 => Self::UnsupportedWaveSize,
            c if c == Raw::UnsupportedInstruction as u32 => Self::UnsupportedInstruction,
            c if c == Raw::CompilationError as u32 => Self::CompilationError,
            c if c == Raw::FailedToSynthesizeStageInFunction as u32 => {
                Self::FailedToSynthesizeStageInFunction
            }
            c if c == Raw::FailedToSynthesizeStreamOutFunction as u32 => {
                Self::FailedToSynthesizeStreamOutFunction
            }
            c if c == Raw::FailedToSynthesizeIntersectionWrapperFunction as u32 => {
                Self::FailedToSynthesizeIntersectionWrapperFunction
            }
            c if c == Raw::UnableToVerifyModule as u32 => Self::UnableToVerifyModule,
            c if c == Raw::UnableToLinkModule as u32 => Self::UnableToLinkModule,
            _ => Self::Unknown,
        }
    }
}

/// An error object returned by the converter.
///
/// The native object is destroyed on drop.
pub struct IrError {
    me: NonNull<ffi::IRError>,
    lib: IrConverter,
}

impl IrError {
    /// Takes ownership of a native error, if there is one.
    ///
    /// # Safety
    ///
    /// `error` must be null or an error object created by `lib` that nothing else owns.
    pub(crate) unsafe fn from_raw(lib: &IrConverter, error: *mut ffi::IRError) -> Option<Self> {
        NonNull::new(error).map(|me| Self {
            me,
            lib: lib.clone(),
        })
    }

    pub fn raw_code(&self) -> u32 {
        unsafe { (self.lib.ffi().IRErrorGetCode)(self.me.as_ptr()) }
    }

    pub fn code(&self) -> IrErrorCode {
        IrErrorCode::from_raw(self.raw_code())
    }

    /// Code-dependent payload. Its layout is undocumented, and it lives as long as `self`.
    ///
    /// May be null. Errors returned as [`Error::Converter`] have already been destroyed, so
    /// use the `try_` constructors, such as [`Compiler::try_alloc_compile_and_link`], to
    /// reach it.
    ///
    /// [`Compiler::try_alloc_compile_and_link`]: crate::Compiler::try_alloc_compile_and_link
    pub fn payload(&self) -> *const c_void {
        unsafe { (self.lib.ffi().IRErrorGetPayload)(self.me.as_ptr()) }
    }

    /// Destroys the native error, keeping its code.
    pub fn into_error(self, context: &'static str) -> Error {
        Error::Converter {
            code: self.code(),
            context,
        }
    }
}

/// Interprets the outputs of a native constructor that reports failure through an
/// `IRError**` out parameter, handing a reported error back to the caller.
///
/// An error reported alongside a valid handle is logged and destroyed.
///
/// # Safety
///
/// `handle` must be null or a new object created by `lib`, and `error` null or a new error
/// object created by `lib`.
pub(crate) unsafe fn take_handle_or_error<T>(
    lib: &IrConverter,
    handle: *mut T,
    error: *mut ffi::IRError,
    context: &'static str,
    constructor: &'static str,
) -> Result<Result<NonNull<T>, IrError>> {
    let error = IrError::from_raw(lib, error);
    match (NonNull::new(handle), error) {
        (Some(handle), None) => Ok(Ok(handle)),
        (Some(handle), Some(error)) => {
            log::warn!("{context} succeeded but reported {:?}", error.code());
            Ok(Ok(handle))
        }
        (None, Some(error)) => Ok(Err(error)),
        (None, None) => Err(Error::NullHandle(constructor)),
    }
}

/// Like [`take_handle_or_error`], but turns a reported error into [`Error::Converter`].
///
/// # Safety
///
/// See [`take_handle_or_error`].
pub(crate) unsafe fn take_handle<T>(
    lib: &IrConverter,
    handle: *mut T,
    error: *mut ffi::IRError,
    context: &'static str,
    constructor: &'static str,
) -> Result<NonNull<T>> {
    take_handle_or_error(lib, handle, error, context, constructor)?
        .map_err(|error| error.into_error(context))
}

impl Drop for IrError {
    fn drop(&mut self) {
        unsafe { (self.lib.ffi().IRErrorDestroy)(self.me.as_ptr()) }
    }
}

impl std::fmt::Debug for IrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IrError")
            .field("code", &self.code())
            .finish_non_exhaustive()
    }
}

// SAFETY: an error object is only read after creation and has no thread affinity.
unsafe impl Send for IrError {}

static_assertions::assert_impl_all!(IrError: Send);
static_assertions::assert_not_impl_any!(IrError: Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_matches_header_order() {
        assert_eq!(IrErrorCode::from_raw(0), IrErrorCode::NoError);
        assert_eq!(
            IrErrorCode::from_raw(1),
            IrErrorCode::ShaderRequiresRootSignature
        );
        assert_eq!(IrErrorCode::from_raw(8), IrErrorCode::CompilationError);
        assert_eq!(IrErrorCode::from_raw(13), IrErrorCode::UnableToLinkModule);
        assert_eq!(IrErrorCode::from_raw(14), IrErrorCode::Unknown);
    }

    #[test]
    fn from_raw_is_total() {
        for raw in [15, 255, 0x8000_0000, u32::MAX] {
            assert_eq!(IrErrorCode::from_raw(raw), IrErrorCode::Unknown);
        }
        let known = (0..15)
            .map(IrErrorCode::from_raw)
            .filter(|code| *code != IrErrorCode::Unknown)
            .count();
        assert_eq!(known, 14);
    }
}
