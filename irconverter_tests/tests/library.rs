// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::Result;
use irconverter::{Compiler, Error, IrConverter, RootSignature, VersionedRootSignatureDescriptor};
use irconverter_tests::{converter, sample_root_signature};

#[test]
fn missing_library_is_a_load_error() {
    let result = IrConverter::new("/nonexistent/libmetalirconverter.dylib");
    assert!(matches!(result, Err(Error::Library(_))));
}

#[test]
fn root_signature_versions_agree() -> Result<()> {
    let Some(converter) = converter() else {
        return Ok(());
    };
    let descriptor = sample_root_signature();
    let upgraded = VersionedRootSignatureDescriptor::V1_1(descriptor.to_v1_1());
    let original = VersionedRootSignatureDescriptor::V1_0(descriptor);

    let v1_0 = RootSignature::new(&converter, &original)?;
    let v1_1 = RootSignature::new(&converter, &upgraded)?;
    let locations = v1_0.resource_locations();
    assert!(!locations.is_empty());
    assert_eq!(locations, v1_1.resource_locations());
    Ok(())
}

#[test]
fn root_signature_outlives_its_converter_handle() -> Result<()> {
    let Some(converter) = converter() else {
        return Ok(());
    };
    let root_signature = RootSignature::new(&converter, &sample_root_signature().into())?;
    drop(converter);
    // The signature keeps the library loaded.
    assert!(!root_signature.resource_locations().is_empty());
    Ok(())
}

// Handles may move between threads but are never shared.
static_assertions::assert_impl_all!(RootSignature: Send);
static_assertions::assert_not_impl_any!(RootSignature: Sync);
static_assertions::assert_not_impl_any!(Compiler<'static>: Send, Sync);

#[test]
fn one_root_signature_per_thread() -> Result<()> {
    let Some(converter) = converter() else {
        return Ok(());
    };
    let moved = RootSignature::new(&converter, &sample_root_signature().into())?;
    let expected = RootSignature::new(&converter, &sample_root_signature().into())?
        .resource_locations();
    let converter = &converter;
    std::thread::scope(|scope| -> Result<()> {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || -> Result<_> {
                    let own = RootSignature::new(converter, &sample_root_signature().into())?;
                    Ok(own.resource_locations())
                })
            })
            .collect();
        let moved = scope.spawn(move || moved.resource_locations());
        for handle in handles {
            assert_eq!(handle.join().unwrap()?, expected);
        }
        assert_eq!(moved.join().unwrap(), expected);
        Ok(())
    })
}
