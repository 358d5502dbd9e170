// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for tests which drive the real Metal shader converter library.
//!
//! These tests need the closed-source `metal_irconverter` library. When it can't be opened
//! (see [`IrConverter::from_env`]) they are skipped rather than failed, so that the suite
//! still runs on machines without the SDK. Tests which need compiled shaders also read DXIL
//! fixtures from the directory named by [`DXIL_DIR_ENV`].

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
#![allow(
    missing_debug_implementations,
    unreachable_pub,
    missing_docs,
    clippy::missing_assert_message,
    clippy::print_stderr,
    clippy::allow_attributes_without_reason
)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};

use anyhow::{Context, Result};
use irconverter::{
    ffi, Compiler, DescriptorRange, IrConverter, Object, RootConstants, RootDescriptor,
    RootParameter, RootParameterKind, RootSignatureDescriptor, StaticSamplerDescriptor,
};

/// Names the directory holding the DXIL fixtures.
pub const DXIL_DIR_ENV: &str = "IRCONVERTER_TEST_DXIL_DIR";

/// A compute shader with entry point [`ENTRY_POINT`], using at least one resource.
pub const COMPUTE_FIXTURE: &str = "compute";
pub const ENTRY_POINT: &str = "main";

/// Opens the converter library, or returns `None` (after saying so) if it isn't installed.
pub fn converter() -> Option<IrConverter> {
    match IrConverter::from_env() {
        Ok(converter) => Some(converter),
        Err(e) => {
            eprintln!("Skipping test, metal_irconverter is unavailable: {e}");
            None
        }
    }
}

/// Reads `<name>.dxil` from the fixture directory.
///
/// Returns `Ok(None)` if no fixture directory is configured.
pub fn dxil_fixture(name: &str) -> Result<Option<Vec<u8>>> {
    let Some(dir) = std::env::var_os(DXIL_DIR_ENV) else {
        eprintln!("Skipping test, {DXIL_DIR_ENV} is not set");
        return Ok(None);
    };
    let path = PathBuf::from(dir).join(name).with_extension("dxil");
    match std::fs::read(&path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("Skipping test, fixture {} is missing", path.display());
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Couldn't read {}", path.display())),
    }
}

/// The converter and the compute fixture, if both are available.
pub fn compute_setup() -> Result<Option<(IrConverter, Vec<u8>)>> {
    let Some(converter) = converter() else {
        return Ok(None);
    };
    Ok(dxil_fixture(COMPUTE_FIXTURE)?.map(|dxil| (converter, dxil)))
}

/// Compiles `dxil` with default options.
pub fn compile(converter: &IrConverter, dxil: &[u8]) -> Result<Object<'static>> {
    let input = Object::from_dxil(converter, dxil).context("Creating the DXIL object")?;
    let mut compiler = Compiler::new(converter)?;
    let output = compiler
        .compile(ENTRY_POINT, &input)
        .context("Compiling the fixture")?;
    Ok(output)
}

/// A root signature using every kind of root parameter, and a static sampler.
pub fn sample_root_signature() -> RootSignatureDescriptor {
    RootSignatureDescriptor {
        parameters: vec![
            RootParameter {
                kind: RootParameterKind::DescriptorTable(vec![
                    DescriptorRange::new(ffi::IRDescriptorRangeType::SRV, 4, 0, 0),
                    DescriptorRange::new(ffi::IRDescriptorRangeType::UAV, 2, 0, 0),
                ]),
                visibility: ffi::IRShaderVisibility::All,
            },
            RootParameter {
                kind: RootParameterKind::Constants(RootConstants {
                    shader_register: 0,
                    register_space: 0,
                    num_32bit_values: 4,
                }),
                visibility: ffi::IRShaderVisibility::All,
            },
            RootParameter {
                kind: RootParameterKind::Cbv(RootDescriptor {
                    shader_register: 1,
                    register_space: 0,
                }),
                visibility: ffi::IRShaderVisibility::All,
            },
            RootParameter {
                kind: RootParameterKind::Srv(RootDescriptor {
                    shader_register: 4,
                    register_space: 1,
                }),
                visibility: ffi::IRShaderVisibility::Pixel,
            },
            RootParameter {
                kind: RootParameterKind::Uav(RootDescriptor {
                    shader_register: 2,
                    register_space: 1,
                }),
                visibility: ffi::IRShaderVisibility::All,
            },
        ],
        static_samplers: vec![StaticSamplerDescriptor::new(0, 0)
            .with_filter(ffi::IRFilter::MinMagMipLinear)
            .with_address_mode(ffi::IRTextureAddressMode::Clamp)],
        flags: ffi::IRRootSignatureFlags::None,
    }
}

/// A global allocator which counts live allocations made through it.
///
/// Install it in a test binary with `#[global_allocator]`. Only allocations made by Rust code
/// are counted; the converter library allocates with the system allocator directly.
pub struct CountingAllocator {
    live: AtomicIsize,
    total: AtomicUsize,
}

impl CountingAllocator {
    pub const fn new() -> Self {
        Self {
            live: AtomicIsize::new(0),
            total: AtomicUsize::new(0),
        }
    }

    /// Allocations made minus allocations freed since the program started.
    pub fn live(&self) -> isize {
        self.live.load(Ordering::SeqCst)
    }

    /// Allocations made since the program started.
    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

impl Default for CountingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            self.live.fetch_add(1, Ordering::SeqCst);
            self.total.fetch_add(1, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            self.live.fetch_add(1, Ordering::SeqCst);
            self.total.fetch_add(1, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        self.live.fetch_sub(1, Ordering::SeqCst);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // A successful reallocation keeps the count unchanged.
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}
