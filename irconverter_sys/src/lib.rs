// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw bindings to Apple's Metal shader converter.
//!
//! The type definitions in [`bindings`](self) mirror `metal_irconverter.h` one to one and are
//! regenerated by the `irconverter_bindgen` tool. The library itself is not linked at build
//! time: [`MetalIrConverter`] opens it at runtime and resolves every entry point up front.

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
#![allow(
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    missing_docs,
    clippy::doc_markdown,
    clippy::missing_safety_doc,
    reason = "Names follow the C header"
)]

mod bindings;
mod library;

pub use bindings::*;
pub use library::MetalIrConverter;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::const_assert_eq;
    use std::mem::size_of;

    const_assert_eq!(size_of::<IRDescriptorRange>(), 20);
    const_assert_eq!(size_of::<IRDescriptorRange1>(), 24);
    const_assert_eq!(size_of::<IRRootConstants>(), 12);
    const_assert_eq!(size_of::<IRStaticSamplerDescriptor>(), 52);
    const_assert_eq!(size_of::<IRInputElementDescriptor1>(), 24);
    const_assert_eq!(size_of::<IRCSInfo_1_0>(), 12);
    const_assert_eq!(size_of::<IRVersionedCSInfo>(), 16);

    #[cfg(target_pointer_width = "64")]
    mod pointer_sized {
        use super::*;

        const_assert_eq!(size_of::<IRRootParameter>(), 32);
        const_assert_eq!(size_of::<IRRootParameter1>(), 32);
        const_assert_eq!(size_of::<IRVersionedRootSignatureDescriptor>(), 48);
        const_assert_eq!(size_of::<IRInputLayoutDescriptor1>(), 1000);
        const_assert_eq!(size_of::<IRResourceLocation>(), 32);
        const_assert_eq!(size_of::<IRFunctionConstant>(), 16);
    }

    #[test]
    fn ensure_shader_stage_values() {
        assert_eq!(IRShaderStage::Invalid as u32, 0);
        assert_eq!(IRShaderStage::Vertex as u32, 1);
        assert_eq!(IRShaderStage::Fragment as u32, 2);
        assert_eq!(IRShaderStage::Compute as u32, 8);
        assert_eq!(IRShaderStage::RayGeneration as u32, 13);
        assert_eq!(IRShaderStage::StageIn as u32, 16);
    }

    #[test]
    fn ensure_error_code_values() {
        assert_eq!(IRErrorCode::NoError as u32, 0);
        assert_eq!(IRErrorCode::CompilationError as u32, 8);
        assert_eq!(IRErrorCode::FailedToSynthesizeIntersectionWrapperFunction as u32, 11);
        assert_eq!(IRErrorCode::Unknown as u32, 14);
    }

    #[test]
    fn ensure_flag_values() {
        assert_eq!(IRCompilerValidationFlags::All.0, !0);
        assert_eq!(
            (IRCompatibilityFlags::BoundsCheck | IRCompatibilityFlags::PositionInvariance).0,
            17
        );
        assert_eq!(IRRootSignatureFlags::SamplerHeapDirectlyIndexed.0, 0x800);
        assert_eq!(
            IRDescriptorRangeFlags::DescriptorsStaticKeepingBufferBoundsChecks.0,
            0x10000
        );
        assert_eq!(IRRootDescriptorFlags::DataStatic.0, 8);
    }

    #[test]
    fn ensure_misc_enum_values() {
        assert_eq!(IRRootSignatureVersion::_1, IRRootSignatureVersion::_1_0);
        assert_eq!(IRRootSignatureVersion::_1_1 as u32, 2);
        assert_eq!(IRGPUFamily::Metal3 as u32, 5001);
        assert_eq!(IRFunctionConstantType::Bool as u32, 53);
        assert_eq!(IRFilter::MaximumAnisotropic as u32, 0x1d5);
        assert_eq!(IRFormat::B4G4R4A4Unorm as u32, 115);
        assert_eq!(IRStripCutIndex::_0xFFFFFFFF as u32, 2);
        assert_eq!(IRDescriptorRangeOffsetAppend, u32::MAX);
    }
}
