// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration of emulated geometry and tessellation pipelines.
//!
//! The values come from the reflection data of the converted stages. Hosts use them to size
//! the mesh and object stages that replace the emulated ones.

use std::ffi::CStr;

use bytemuck::{Pod, Zeroable};

/// Number of entries in the counts-and-offsets part of the tessellator tables.
pub const TESSELLATOR_TABLES_COUNTS_AND_OFFSET_LENGTH: u32 = 32768;
/// Number of entries in the lookup part of the tessellator tables.
pub const TESSELLATOR_TABLES_LOOKUP_TABLE_LENGTH: u32 = 701_114;

/// Geometry stages generated for pipelines whose domain stage has no geometry stage.
pub const TRIANGLE_PASSTHROUGH_GEOMETRY_SHADER: &CStr =
    c"irconverter_domain_shader_triangle_passthrough";
pub const LINE_PASSTHROUGH_GEOMETRY_SHADER: &CStr = c"irconverter_domain_shader_line_passthrough";
pub const POINT_PASSTHROUGH_GEOMETRY_SHADER: &CStr =
    c"irconverter_domain_shader_point_passthrough";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct GeometryPipelineConfig {
    pub gs_vertex_size_in_bytes: u32,
    pub gs_max_input_primitives_per_mesh_threadgroup: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TessellatorOutputPrimitive {
    #[default]
    Undefined = 0,
    Point = 1,
    Line = 2,
    TriangleCw = 3,
    TriangleCcw = 4,
}

/// This must be kept in sync with `IRRuntimeTessellationPipelineConfig` in
/// `metal_irconverter_runtime.h`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct TessellationPipelineConfig {
    pub output_primitive_type: TessellatorOutputPrimitive,
    pub vs_output_size_in_bytes: u32,
    pub gs_max_input_primitives_per_mesh_threadgroup: u32,
    pub hs_max_patches_per_object_threadgroup: u32,
    pub hs_input_control_point_count: u32,
    pub hs_max_object_threads_per_threadgroup: u32,
    pub hs_max_tessellation_factor: f32,
    pub gs_instance_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::const_assert_eq;

    const_assert_eq!(size_of::<GeometryPipelineConfig>(), 8);
    const_assert_eq!(size_of::<TessellationPipelineConfig>(), 32);

    #[test]
    fn ensure_tessellator_output_primitive_values() {
        assert_eq!(TessellatorOutputPrimitive::Undefined as u32, 0);
        assert_eq!(TessellatorOutputPrimitive::Line as u32, 2);
        assert_eq!(TessellatorOutputPrimitive::TriangleCcw as u32, 4);
    }

    #[test]
    fn passthrough_shader_names() {
        for (name, primitive) in [
            (TRIANGLE_PASSTHROUGH_GEOMETRY_SHADER, "triangle"),
            (LINE_PASSTHROUGH_GEOMETRY_SHADER, "line"),
            (POINT_PASSTHROUGH_GEOMETRY_SHADER, "point"),
        ] {
            let name = name.to_str().unwrap();
            assert!(name.starts_with("irconverter_domain_shader_"));
            assert!(name.ends_with(&format!("{primitive}_passthrough")));
        }
    }
}
