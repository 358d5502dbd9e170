// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records read by converted ray tracing shaders.

use std::ffi::CStr;

use bytemuck::{Pod, Zeroable};

/// Intersection functions synthesized by
/// `MetalLibBinary::synthesize_intersection_wrapper_function` in `irconverter`.
pub const INDIRECT_TRIANGLE_INTERSECTION_FUNCTION_NAME: &CStr =
    c"irconverter.wrapper.intersection.function.triangle";
pub const INDIRECT_PROCEDURAL_INTERSECTION_FUNCTION_NAME: &CStr =
    c"irconverter.wrapper.intersection.function.procedural";

/// Function group names of a ray tracing module.
pub const FUNCTION_GROUP_RAY_GENERATION: &CStr = c"rayGen";
pub const FUNCTION_GROUP_CLOSEST_HIT: &CStr = c"closestHit";
pub const FUNCTION_GROUP_MISS: &CStr = c"miss";

/// Kernel which reads a [`DispatchRaysArgument`] and invokes the ray generation shader.
pub const RAY_DISPATCH_INDIRECTION_KERNEL_NAME: &CStr = c"RaygenIndirection";

/// An entry of a shader table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct ShaderIdentifier {
    pub intersection_shader_handle: u64,
    pub shader_handle: u64,
    pub local_root_signature_samplers_buffer: u64,
    pub pad0: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct VirtualAddressRange {
    pub start_address: u64,
    pub size_in_bytes: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct VirtualAddressRangeAndStride {
    pub start_address: u64,
    pub size_in_bytes: u64,
    pub stride_in_bytes: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct DispatchRaysDescriptor {
    pub ray_generation_shader_record: VirtualAddressRange,
    pub miss_shader_table: VirtualAddressRangeAndStride,
    pub hit_group_table: VirtualAddressRangeAndStride,
    pub callable_shader_table: VirtualAddressRangeAndStride,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// Tail padding of the C struct.
    pub pad0: u32,
}

/// Bound at [`RAY_DISPATCH_ARGUMENTS_BIND_POINT`](crate::RAY_DISPATCH_ARGUMENTS_BIND_POINT).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct DispatchRaysArgument {
    pub dispatch_rays_desc: DispatchRaysDescriptor,
    /// GPU address of the top-level argument buffer.
    pub grs: u64,
    pub res_desc_heap: u64,
    pub smp_desc_heap: u64,
    /// `MTLResourceID` of the visible function table.
    pub visible_function_table: u64,
    /// `MTLResourceID` of the intersection function table.
    pub intersection_function_table: u64,
    pub intersection_function_tables: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct RaytracingAccelerationStructureGpuHeader {
    pub acceleration_structure_id: u64,
    pub address_of_instance_contributions: u64,
    pub pad0: [u64; 4],
    /// Room for `MTLDispatchThreadgroupsIndirectArguments`.
    pub pad1: [u32; 3],
    pub pad2: u32,
}

/// An instance of a top-level acceleration structure.
///
/// The C struct packs its identifiers into bitfields; the accessors below read and write
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
#[repr(C)]
pub struct RaytracingInstanceDescriptor {
    pub transform: [[f32; 4]; 3],
    /// Instance ID in the low 24 bits, instance mask in the high 8.
    id_and_mask: u32,
    /// Hit group index contribution in the low 24 bits, flags in the high 8.
    contribution_and_flags: u32,
    pub acceleration_structure: u64,
}

const LOW_24: u32 = 0x00ff_ffff;

impl RaytracingInstanceDescriptor {
    pub fn instance_id(&self) -> u32 {
        self.id_and_mask & LOW_24
    }

    /// Keeps the low 24 bits of `id`.
    pub fn set_instance_id(&mut self, id: u32) {
        self.id_and_mask = (self.id_and_mask & !LOW_24) | (id & LOW_24);
    }

    pub fn instance_mask(&self) -> u8 {
        (self.id_and_mask >> 24) as u8
    }

    pub fn set_instance_mask(&mut self, mask: u8) {
        self.id_and_mask = (self.id_and_mask & LOW_24) | (u32::from(mask) << 24);
    }

    pub fn instance_contribution_to_hit_group_index(&self) -> u32 {
        self.contribution_and_flags & LOW_24
    }

    /// Keeps the low 24 bits of `index`.
    pub fn set_instance_contribution_to_hit_group_index(&mut self, index: u32) {
        self.contribution_and_flags =
            (self.contribution_and_flags & !LOW_24) | (index & LOW_24);
    }

    pub fn flags(&self) -> u8 {
        (self.contribution_and_flags >> 24) as u8
    }

    pub fn set_flags(&mut self, flags: u8) {
        self.contribution_and_flags =
            (self.contribution_and_flags & LOW_24) | (u32::from(flags) << 24);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::const_assert_eq;

    const_assert_eq!(size_of::<ShaderIdentifier>(), 32);
    const_assert_eq!(size_of::<DispatchRaysDescriptor>(), 104);
    const_assert_eq!(size_of::<DispatchRaysArgument>(), 152);
    const_assert_eq!(size_of::<RaytracingAccelerationStructureGpuHeader>(), 64);
    const_assert_eq!(size_of::<RaytracingInstanceDescriptor>(), 64);

    #[test]
    fn instance_bitfields_are_independent() {
        let mut instance = RaytracingInstanceDescriptor::default();
        instance.set_instance_id(0x0123_4567);
        instance.set_instance_mask(0xff);
        instance.set_instance_contribution_to_hit_group_index(5);
        instance.set_flags(0x4);

        assert_eq!(instance.instance_id(), 0x0023_4567);
        assert_eq!(instance.instance_mask(), 0xff);
        assert_eq!(instance.instance_contribution_to_hit_group_index(), 5);
        assert_eq!(instance.flags(), 0x4);

        instance.set_instance_mask(0);
        assert_eq!(instance.instance_id(), 0x0023_4567);
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn instance_bitfields_match_c_layout() {
        let mut instance = RaytracingInstanceDescriptor::default();
        instance.set_instance_id(0x0a_0b0c);
        instance.set_instance_mask(0xee);
        instance.set_flags(0x01);
        let bytes = &bytemuck::bytes_of(&instance)[48..56];
        assert_eq!(bytes, &[0x0c, 0x0b, 0x0a, 0xee, 0, 0, 0, 0x01]);
    }
}
