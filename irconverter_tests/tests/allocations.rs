// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeated conversions must not leak Rust-side allocations. Pairing of native copies and
//! releases is checked by the unit tests of `irconverter` against counting entry points.
//!
//! This is the only test in its binary, so no other test allocates concurrently.

use anyhow::{Context, Result};
use irconverter::{ffi, ReflectionVersion};
use irconverter_tests::{compile, compute_setup, CountingAllocator};

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator::new();

const CYCLES: usize = 16;

#[test]
fn conversion_cycles_release_everything() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let cycle = || -> Result<()> {
        let output = compile(&converter, &dxil)?;
        let metallib = output
            .metal_lib_binary(ffi::IRShaderStage::Compute)?
            .context("No compute bytecode")?;
        let reflection = output
            .reflection(ffi::IRShaderStage::Compute)?
            .context("No compute reflection")?;
        let bytecode = metallib.byte_code()?;
        assert!(!bytecode.is_empty());
        reflection.compute_info(ReflectionVersion::V1_0)?;
        reflection.resource_locations();
        reflection.function_constants();
        reflection.to_json()?;
        Ok(())
    };

    // The first cycle may initialize lazily allocated state.
    cycle()?;
    let before = ALLOCATOR.live();
    for _ in 0..CYCLES {
        cycle()?;
    }
    assert_eq!(ALLOCATOR.live(), before);
    assert!(ALLOCATOR.total() > 0);
    Ok(())
}
