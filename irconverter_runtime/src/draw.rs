// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records read by emulated geometry and tessellation pipelines.

use bytemuck::{Pod, Zeroable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RuntimePrimitiveType {
    Point = 0,
    Line = 1,
    LineStrip = 2,
    Triangle = 3,
    TriangleStrip = 4,
    LineWithAdjacency = 5,
    TriangleWithAdjacency = 6,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct DrawArgument {
    pub vertex_count_per_instance: u32,
    pub instance_count: u32,
    pub start_vertex_location: u32,
    pub start_instance_location: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct DrawIndexedArgument {
    pub index_count_per_instance: u32,
    pub instance_count: u32,
    pub start_index_location: u32,
    pub base_vertex_location: i32,
    pub start_instance_location: u32,
}

/// Arguments of the draw an emulated pipeline replays, stored in the draw arguments buffer
/// at [`ARGUMENT_BUFFER_DRAW_ARGUMENTS_BIND_POINT`](crate::ARGUMENT_BUFFER_DRAW_ARGUMENTS_BIND_POINT).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawParams {
    Draw(DrawArgument),
    DrawIndexed(DrawIndexedArgument),
}

impl DrawParams {
    /// Size of the native union, which is that of its larger member.
    pub const SIZE: usize = size_of::<DrawIndexedArgument>();

    /// The native union, with unused trailing words zeroed.
    pub fn to_words(&self) -> [u32; Self::SIZE / 4] {
        let mut words = [0; Self::SIZE / 4];
        match self {
            Self::Draw(draw) => words[..4].copy_from_slice(bytemuck::cast_slice(&[*draw])),
            Self::DrawIndexed(draw) => words = bytemuck::cast(*draw),
        }
        words
    }
}

/// Written by [`DrawInfo`] for draws without an index buffer.
pub const NON_INDEXED_DRAW: u16 = 0;

/// Describes a draw of an emulated geometry or tessellation pipeline to its shaders.
///
/// This must be kept in sync with `IRRuntimeDrawInfo` in `metal_irconverter_runtime.h`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct DrawInfo {
    /// `MTLIndexType` of the index buffer, or [`NON_INDEXED_DRAW`].
    pub index_type: u16,
    pub primitive_topology: u8,
    pub threads_per_patch: u8,
    pub max_input_primitives_per_mesh_threadgroup: u16,
    pub object_threadgroup_vertex_stride: u16,
    pub mesh_threadgroup_primitive_stride: u16,
    pub gs_instance_count: u16,
    pub patches_per_object_threadgroup: u16,
    pub input_control_points_per_patch: u16,
    /// GPU address of the index buffer.
    pub index_buffer: u64,
}

/// A vertex buffer binding of an emulated pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct RuntimeVertexBuffer {
    pub addr: u64,
    pub length: u32,
    pub stride: u32,
}

/// Number of vertex buffers an emulated pipeline can bind.
pub const RUNTIME_VERTEX_BUFFER_COUNT: usize = 31;

/// The vertex buffer table of an emulated pipeline.
pub type RuntimeVertexBuffers = [RuntimeVertexBuffer; RUNTIME_VERTEX_BUFFER_COUNT];

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::const_assert_eq;

    const_assert_eq!(size_of::<DrawArgument>(), 16);
    const_assert_eq!(size_of::<DrawIndexedArgument>(), 20);
    const_assert_eq!(size_of::<RuntimeVertexBuffer>(), 16);
    const_assert_eq!(size_of::<RuntimeVertexBuffers>(), 496);
    const_assert_eq!(size_of::<DrawInfo>(), 24);
    const_assert_eq!(DrawParams::SIZE, 20);

    #[test]
    fn ensure_primitive_type_values() {
        assert_eq!(RuntimePrimitiveType::Point as u32, 0);
        assert_eq!(RuntimePrimitiveType::TriangleStrip as u32, 4);
        assert_eq!(RuntimePrimitiveType::TriangleWithAdjacency as u32, 6);
    }

    #[test]
    fn indexed_argument_field_order() {
        let argument = DrawIndexedArgument {
            index_count_per_instance: 36,
            instance_count: 2,
            start_index_location: 6,
            base_vertex_location: -4,
            start_instance_location: 1,
        };
        let words: [u32; 5] = bytemuck::cast(argument);
        assert_eq!(words, [36, 2, 6, (-4_i32) as u32, 1]);
    }

    #[test]
    fn draw_params_fill_the_union() {
        let draw = DrawParams::Draw(DrawArgument {
            vertex_count_per_instance: 3,
            instance_count: 1,
            start_vertex_location: 9,
            start_instance_location: 2,
        });
        assert_eq!(draw.to_words(), [3, 1, 9, 2, 0]);

        let indexed = DrawParams::DrawIndexed(DrawIndexedArgument {
            index_count_per_instance: 6,
            instance_count: 4,
            start_index_location: 0,
            base_vertex_location: -1,
            start_instance_location: 3,
        });
        assert_eq!(indexed.to_words(), [6, 4, 0, u32::MAX, 3]);
    }

    #[test]
    fn draw_info_field_offsets() {
        let info = DrawInfo {
            index_type: 1,
            primitive_topology: 3,
            threads_per_patch: 32,
            input_control_points_per_patch: 4,
            index_buffer: 0x1_0000_0000,
            ..DrawInfo::default()
        };
        let bytes = bytemuck::bytes_of(&info);
        assert_eq!(u16::from_ne_bytes([bytes[0], bytes[1]]), 1);
        assert_eq!(bytes[2], 3);
        assert_eq!(bytes[3], 32);
        assert_eq!(u16::from_ne_bytes([bytes[14], bytes[15]]), 4);
        assert_eq!(bytemuck::pod_read_unaligned::<u64>(&bytes[16..]), 0x1_0000_0000);
    }
}
