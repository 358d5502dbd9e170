// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::{c_char, c_void, OsStr};
use std::fmt;

use libloading::Library;

use crate::bindings::*;

macro_rules! entry_points {
    (
        required {
            $( $name:ident: fn($($arg:ty),* $(,)?) $(-> $ret:ty)?; )*
        }
        optional {
            $( $opt_name:ident: fn($($opt_arg:ty),* $(,)?) $(-> $opt_ret:ty)?; )*
        }
    ) => {
        /// Entry points of a loaded `metal_irconverter` shared library.
        ///
        /// Required functions are resolved when the library is opened. Functions that are
        /// missing from some shipped builds are `None` when absent.
        pub struct MetalIrConverter {
            // Keeps the function pointers below valid.
            _library: Library,
            $( pub $name: unsafe extern "C" fn($($arg),*) $(-> $ret)?, )*
            $( pub $opt_name: Option<unsafe extern "C" fn($($opt_arg),*) $(-> $opt_ret)?>, )*
        }

        impl MetalIrConverter {
            /// Resolves every entry point from an already opened library.
            ///
            /// # Safety
            ///
            /// `library` must be a build of `metal_irconverter` whose exported functions have
            /// the signatures declared by this crate.
            pub unsafe fn from_library(library: Library) -> Result<Self, libloading::Error> {
                $(
                    let $name = *library.get::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>(
                        concat!(stringify!($name), "\0").as_bytes(),
                    )?;
                )*
                $(
                    let $opt_name = library
                        .get::<unsafe extern "C" fn($($opt_arg),*) $(-> $opt_ret)?>(
                            concat!(stringify!($opt_name), "\0").as_bytes(),
                        )
                        .ok()
                        .map(|symbol| *symbol);
                )*
                Ok(Self {
                    _library: library,
                    $( $name, )*
                    $( $opt_name, )*
                })
            }

            /// Names of the optional entry points this library does not export.
            pub fn missing_optional_symbols(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$opt_name.is_none() {
                        missing.push(stringify!($opt_name));
                    }
                )*
                missing
            }
        }
    };
}

entry_points! {
    required {
        IRErrorGetCode: fn(*const IRError) -> u32;
        IRErrorGetPayload: fn(*const IRError) -> *const c_void;
        IRErrorDestroy: fn(*mut IRError);

        IRRootSignatureCreateFromDescriptor: fn(
            *const IRVersionedRootSignatureDescriptor,
            *mut *mut IRError,
        ) -> *mut IRRootSignature;
        IRRootSignatureDestroy: fn(*mut IRRootSignature);
        IRRootSignatureGetResourceCount: fn(*const IRRootSignature) -> usize;
        IRRootSignatureGetResourceLocations: fn(*const IRRootSignature, *mut IRResourceLocation);

        IRObjectCreateFromDXIL: fn(*const u8, usize, IRBytecodeOwnership) -> *mut IRObject;
        IRObjectDestroy: fn(*mut IRObject);
        IRObjectGetType: fn(*const IRObject) -> IRObjectType;
        IRObjectGetMetalIRShaderStage: fn(*const IRObject) -> IRShaderStage;
        IRObjectGetMetalLibBinary: fn(*const IRObject, IRShaderStage, *mut IRMetalLibBinary) -> bool;
        IRObjectGetReflection: fn(*const IRObject, IRShaderStage, *mut IRShaderReflection) -> bool;
        IRObjectSerialize: fn(*const c_char, *const IRObject, IRShaderStage) -> bool;

        IRCompilerCreate: fn() -> *mut IRCompiler;
        IRCompilerDestroy: fn(*mut IRCompiler);
        IRCompilerSetValidationFlags: fn(*mut IRCompiler, IRCompilerValidationFlags);
        IRCompilerAllocCompileAndLink: fn(
            *mut IRCompiler,
            *const *const c_char,
            usize,
            *const IRObject,
            *mut *mut IRError,
        ) -> *mut IRObject;
        IRCompilerSetStageInGenerationMode: fn(*mut IRCompiler, IRStageInCodeGenerationMode);
        IRCompilerSetGlobalRootSignature: fn(*mut IRCompiler, *const IRRootSignature);
        IRCompilerSetCompatibilityFlags: fn(*mut IRCompiler, IRCompatibilityFlags);
        IRCompilerSetInputTopology: fn(*mut IRCompiler, IRInputTopology);
        IRCompilerEnableGeometryAndTessellationEmulation: fn(*mut IRCompiler, bool);
        IRCompilerSetDualSourceBlendingConfiguration: fn(*mut IRCompiler, IRDualSourceBlendingConfiguration);
        IRCompilerSetDepthFeedbackConfiguration: fn(*mut IRCompiler, IRDepthFeedbackConfiguration);
        IRCompilerSetEntryPointName: fn(*mut IRCompiler, *const c_char);
        IRCompilerSetMinimumGPUFamily: fn(*mut IRCompiler, IRGPUFamily);
        IRCompilerSetMinimumDeploymentTarget: fn(*mut IRCompiler, IROperatingSystem, *const c_char);

        IRMetalLibSynthesizeStageInFunction: fn(
            *const IRCompiler,
            *const IRShaderReflection,
            *const IRVersionedInputLayoutDescriptor,
            *mut IRMetalLibBinary,
        ) -> bool;
        IRMetalLibBinaryCreate: fn() -> *mut IRMetalLibBinary;
        IRMetalLibBinaryDestroy: fn(*mut IRMetalLibBinary);
        IRMetalLibGetBytecode: fn(*const IRMetalLibBinary, *mut u8) -> usize;
        IRMetalLibGetBytecodeSize: fn(*const IRMetalLibBinary) -> usize;

        IRShaderReflectionCreate: fn() -> *mut IRShaderReflection;
        IRShaderReflectionDestroy: fn(*mut IRShaderReflection);
        IRShaderReflectionGetEntryPointFunctionName: fn(*const IRShaderReflection) -> *const c_char;
        IRShaderReflectionNeedsFunctionConstants: fn(*const IRShaderReflection) -> bool;
        IRShaderReflectionGetFunctionConstantCount: fn(*const IRShaderReflection) -> usize;
        IRShaderReflectionCopyFunctionConstants: fn(*const IRShaderReflection, *mut IRFunctionConstant);
        IRShaderReflectionReleaseFunctionConstants: fn(*mut IRFunctionConstant, usize);
        IRShaderReflectionCopyComputeInfo: fn(*const IRShaderReflection, IRReflectionVersion, *mut IRVersionedCSInfo) -> bool;
        IRShaderReflectionCopyVertexInfo: fn(*const IRShaderReflection, IRReflectionVersion, *mut IRVersionedVSInfo) -> bool;
        IRShaderReflectionCopyFragmentInfo: fn(*const IRShaderReflection, IRReflectionVersion, *mut IRVersionedFSInfo) -> bool;
        IRShaderReflectionCopyGeometryInfo: fn(*const IRShaderReflection, IRReflectionVersion, *mut IRVersionedGSInfo) -> bool;
        IRShaderReflectionCopyHullInfo: fn(*const IRShaderReflection, IRReflectionVersion, *mut IRVersionedHSInfo) -> bool;
        IRShaderReflectionCopyDomainInfo: fn(*const IRShaderReflection, IRReflectionVersion, *mut IRVersionedDSInfo) -> bool;
        IRShaderReflectionReleaseComputeInfo: fn(*mut IRVersionedCSInfo) -> bool;
        IRShaderReflectionReleaseVertexInfo: fn(*mut IRVersionedVSInfo) -> bool;
        IRShaderReflectionReleaseFragmentInfo: fn(*mut IRVersionedFSInfo) -> bool;
        IRShaderReflectionReleaseGeometryInfo: fn(*mut IRVersionedGSInfo) -> bool;
        IRShaderReflectionReleaseHullInfo: fn(*mut IRVersionedHSInfo) -> bool;
        IRShaderReflectionReleaseDomainInfo: fn(*mut IRVersionedDSInfo) -> bool;
        IRShaderReflectionGetResourceCount: fn(*const IRShaderReflection) -> usize;
        IRShaderReflectionGetResourceLocations: fn(*const IRShaderReflection, *mut IRResourceLocation);
        IRShaderReflectionSerialize: fn(*mut IRShaderReflection) -> *const c_char;
        IRShaderReflectionDeserialize: fn(*const c_char, *mut IRShaderReflection);
    }
    optional {
        // Not in the Windows builds Apple ships.
        IRMetalLibSynthesizeIntersectionWrapperFunction: fn(*const IRCompiler, *mut IRMetalLibBinary) -> bool;
    }
}

impl MetalIrConverter {
    /// Opens the shared library at `path` and resolves its entry points.
    ///
    /// # Safety
    ///
    /// Loading a library runs its initialisers. See [`Library::new`] and
    /// [`MetalIrConverter::from_library`].
    pub unsafe fn new(path: impl AsRef<OsStr>) -> Result<Self, libloading::Error> {
        let library = Library::new(path)?;
        Self::from_library(library)
    }
}

impl fmt::Debug for MetalIrConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetalIrConverter")
            .field("missing_optional_symbols", &self.missing_optional_symbols())
            .finish_non_exhaustive()
    }
}
