// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side helpers for binding resources to shaders produced by the Metal shader converter.
//!
//! Converted shaders read their resources through a top-level argument buffer and descriptor
//! heaps laid out in a fixed format. This crate encodes those heap entries, the draw records
//! of emulated geometry and tessellation pipelines and the dispatch records of ray tracing
//! shaders, without depending on any Metal bindings: pass GPU addresses and resource IDs as
//! raw `u64` values.

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

mod descriptor;
mod draw;
mod pipeline;
mod raytracing;

pub use descriptor::{
    BufferView, DescriptorTableEntry, BUF_SIZE_MASK, BUF_SIZE_OFFSET, TEX_VIEW_MASK,
    TEX_VIEW_OFFSET, TYPED_BUFFER_OFFSET,
};
pub use draw::{
    DrawArgument, DrawIndexedArgument, DrawInfo, DrawParams, RuntimePrimitiveType,
    RuntimeVertexBuffer, RuntimeVertexBuffers, NON_INDEXED_DRAW, RUNTIME_VERTEX_BUFFER_COUNT,
};
pub use pipeline::{
    GeometryPipelineConfig, TessellationPipelineConfig, TessellatorOutputPrimitive,
    LINE_PASSTHROUGH_GEOMETRY_SHADER, POINT_PASSTHROUGH_GEOMETRY_SHADER,
    TESSELLATOR_TABLES_COUNTS_AND_OFFSET_LENGTH, TESSELLATOR_TABLES_LOOKUP_TABLE_LENGTH,
    TRIANGLE_PASSTHROUGH_GEOMETRY_SHADER,
};
pub use raytracing::{
    DispatchRaysArgument, DispatchRaysDescriptor, RaytracingAccelerationStructureGpuHeader,
    RaytracingInstanceDescriptor, ShaderIdentifier, VirtualAddressRange,
    VirtualAddressRangeAndStride, FUNCTION_GROUP_CLOSEST_HIT, FUNCTION_GROUP_MISS,
    FUNCTION_GROUP_RAY_GENERATION, INDIRECT_PROCEDURAL_INTERSECTION_FUNCTION_NAME,
    INDIRECT_TRIANGLE_INTERSECTION_FUNCTION_NAME, RAY_DISPATCH_INDIRECTION_KERNEL_NAME,
};

/// Buffer index of the CBV/SRV/UAV descriptor heap.
pub const DESCRIPTOR_HEAP_BIND_POINT: u32 = 0;
/// Buffer index of the sampler heap.
pub const SAMPLER_HEAP_BIND_POINT: u32 = 1;
/// Buffer index of the top-level argument buffer.
pub const ARGUMENT_BUFFER_BIND_POINT: u32 = 2;
/// Buffer index of the argument buffer of emulated hull and domain stages.
pub const ARGUMENT_BUFFER_HULL_DOMAIN_BIND_POINT: u32 = 3;
pub const ARGUMENT_BUFFER_DRAW_ARGUMENTS_BIND_POINT: u32 = 4;
pub const ARGUMENT_BUFFER_UNIFORMS_BIND_POINT: u32 = 5;
pub const VERTEX_BUFFER_BIND_POINT: u32 = 6;
pub const STAGE_IN_ATTRIBUTE_START_INDEX: u32 = 11;
/// Buffer index of the tessellator tables of emulated tessellation.
pub const TESSELLATOR_TABLES_BIND_POINT: u32 = 7;
/// Buffer index of the dispatch arguments of ray tracing shaders. Shares its slot with the
/// hull/domain argument buffer, as the two are never bound together.
pub const RAY_DISPATCH_ARGUMENTS_BIND_POINT: u32 = 3;

/// Resource classes of the runtime's descriptor heaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RuntimeResourceType {
    Srv = 0,
    Uav = 1,
    Cbv = 2,
    Sampler = 3,
}

impl RuntimeResourceType {
    /// Number of resource classes.
    pub const COUNT: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_bind_point_values() {
        assert_eq!(DESCRIPTOR_HEAP_BIND_POINT, 0);
        assert_eq!(SAMPLER_HEAP_BIND_POINT, 1);
        assert_eq!(ARGUMENT_BUFFER_BIND_POINT, 2);
        assert_eq!(ARGUMENT_BUFFER_HULL_DOMAIN_BIND_POINT, 3);
        assert_eq!(ARGUMENT_BUFFER_DRAW_ARGUMENTS_BIND_POINT, 4);
        assert_eq!(ARGUMENT_BUFFER_UNIFORMS_BIND_POINT, 5);
        assert_eq!(VERTEX_BUFFER_BIND_POINT, 6);
        assert_eq!(TESSELLATOR_TABLES_BIND_POINT, 7);
        assert_eq!(RAY_DISPATCH_ARGUMENTS_BIND_POINT, 3);
        assert_eq!(STAGE_IN_ATTRIBUTE_START_INDEX, 11);
    }

    #[test]
    fn ensure_resource_type_values() {
        assert_eq!(RuntimeResourceType::Srv as u32, 0);
        assert_eq!(RuntimeResourceType::Sampler as u32, 3);
        assert_eq!(RuntimeResourceType::COUNT, 4);
    }
}
