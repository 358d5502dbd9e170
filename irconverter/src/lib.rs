// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Safe bindings to Apple's Metal shader converter, which translates DXIL bytecode into
//! Metal IR.
//!
//! The converter ships as a closed-source shared library. Open it with [`IrConverter`], then
//! create the objects you need from it:
//!
//! ```no_run
//! use irconverter::{ffi, Compiler, IrConverter, Object};
//!
//! # fn main() -> Result<(), irconverter::Error> {
//! let converter = IrConverter::from_env()?;
//! let dxil = std::fs::read("shader.dxil")?;
//!
//! let input = Object::from_dxil(&converter, &dxil)?;
//! let mut compiler = Compiler::new(&converter)?;
//! let output = compiler.compile("main", &input)?;
//!
//! if let Some(metallib) = output.metal_lib_binary(ffi::IRShaderStage::Compute)? {
//!     std::fs::write("shader.metallib", metallib.byte_code()?)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every native object is owned by exactly one Rust value and destroyed when that value is
//! dropped. Lifetimes tie objects that borrow native memory to the memory they borrow:
//! [`Object`] to the DXIL bytes it was created from without copying, and [`Compiler`] to its
//! global [`RootSignature`].
//!
//! None of the handles are [`Sync`]: the library performs no internal locking. Most may be
//! moved between threads. A [`Compiler`] can't be, because it may borrow a [`RootSignature`]
//! that its owning thread keeps using. Create one compiler per thread instead.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
// Feel free to send a PR that solves one or more of these.
#![allow(missing_docs, reason = "We have many as-yet undocumented items.")]

mod argument_buffer;
mod compiler;
mod error;
mod library;
mod metallib;
mod object;
mod reflection;
mod resource;
mod root_signature;

use std::ffi::NulError;

use thiserror::Error;

pub use irconverter_sys as ffi;

pub use argument_buffer::ArgumentBufferLayout;
pub use compiler::{Compiler, CompilerOptions};
pub use error::{IrError, IrErrorCode};
pub use library::{IrConverter, LIBRARY_PATH_ENV};
pub use metallib::{InputElement, InputLayoutDescriptor, MetalLibBinary, MAX_INPUT_ELEMENTS};
pub use object::Object;
pub use reflection::{
    ComputeInfo, DomainInfo, FragmentInfo, FunctionConstant, GeometryInfo, HullInfo,
    ReflectionVersion, ShaderReflection, StageInfoGuard, VersionedStageInfo, VertexInfo,
    VertexAttribute,
};
pub use resource::ResourceLocation;
pub use root_signature::{
    DescriptorRange, DescriptorRange1, RawVersionedRootSignatureDescriptor, RootConstants,
    RootDescriptor, RootDescriptor1, RootParameter, RootParameter1, RootParameterKind,
    RootParameterKind1, RootSignature, RootSignatureDescriptor, RootSignatureDescriptor1,
    StaticSamplerDescriptor, VersionedRootSignatureDescriptor, DESCRIPTOR_RANGE_OFFSET_APPEND,
};

/// Errors that can occur when driving the Metal shader converter.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The shared library couldn't be opened, or lacks a required entry point.
    /// See [`libloading::Error`] for more information.
    #[error("Couldn't load the metal_irconverter library")]
    Library(#[from] libloading::Error),
    /// The converter reported an error while performing `context`.
    #[error("{context} failed with {code:?}")]
    Converter {
        code: IrErrorCode,
        context: &'static str,
    },
    /// Compilation was requested without any entry point.
    #[error("No entry point to compile")]
    NoEntryPoints,
    /// A native constructor returned null without reporting an error.
    #[error("`{0}` returned a null handle")]
    NullHandle(&'static str),
    /// A string passed to the converter contains an interior nul byte.
    #[error("String contains an interior nul byte")]
    InvalidString(#[from] NulError),
    /// The reflection data holds no stage info of this kind and version.
    #[error("No {stage} stage info available for reflection version {version:?}")]
    StageInfoUnavailable {
        stage: &'static str,
        version: ReflectionVersion,
    },
    /// An optional entry point isn't exported by the loaded library build.
    #[error("`{0}` isn't exported by this build of metal_irconverter")]
    MissingSymbol(&'static str),
    /// The output buffer can't hold the metallib bytecode.
    #[error("Buffer of {provided} bytes is too small for {required} bytes of bytecode")]
    BufferTooSmall { required: usize, provided: usize },
    /// The library wrote a different number of bytes than it reported.
    #[error("Metallib reported {expected} bytes of bytecode but wrote {written}")]
    BytecodeSizeMismatch { expected: usize, written: usize },
    /// An input layout has more elements than the converter accepts.
    #[error("Input layout has {0} elements, at most {max} are supported", max = MAX_INPUT_ELEMENTS)]
    TooManyInputElements(usize),
    /// The converter couldn't synthesize the named function.
    #[error("Failed to synthesize the {0}")]
    SynthesisFailed(&'static str),
    /// The converter couldn't serialize the named data.
    #[error("Failed to serialize {0}")]
    SerializationFailed(&'static str),
    /// No resource location matches this binding.
    #[error("No resource location for {ty:?} in space {space}, slot {slot}")]
    UnknownBinding {
        ty: ffi::IRResourceType,
        space: u32,
        slot: u32,
    },
    /// A value doesn't fit its top-level argument buffer entry.
    #[error("Value of {size} bytes doesn't fit an argument buffer entry of {capacity} bytes")]
    ValueTooLarge { size: usize, capacity: usize },
    /// Reading or writing a file failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
