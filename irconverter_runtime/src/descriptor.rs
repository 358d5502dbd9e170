// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bytemuck::{Pod, Zeroable};

pub const BUF_SIZE_OFFSET: u64 = 0;
pub const BUF_SIZE_MASK: u64 = 0xffff_ffff;
pub const TEX_VIEW_OFFSET: u64 = 32;
pub const TEX_VIEW_MASK: u64 = 0xff;
pub const TYPED_BUFFER_OFFSET: u64 = 63;

/// A view of a buffer, optionally reinterpreted as a texture buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferView {
    /// GPU address of the start of the buffer.
    pub gpu_address: u64,
    pub buffer_offset: u64,
    pub buffer_size: u64,
    /// Resource ID of the texture buffer view, if the shader reads this as a typed buffer.
    pub texture_buffer_view: Option<u64>,
    pub texture_view_offset_in_elements: u32,
    pub typed_buffer: bool,
}

/// One entry of a descriptor heap.
///
/// This must be kept in sync with `IRDescriptorTableEntry` in `metal_irconverter_runtime.h`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct DescriptorTableEntry {
    pub gpu_va: u64,
    pub texture_view_id: u64,
    pub metadata: u64,
}

impl DescriptorTableEntry {
    /// A buffer at `gpu_address`. `metadata` is usually [`DescriptorTableEntry::buffer_metadata`].
    pub fn buffer(gpu_address: u64, metadata: u64) -> Self {
        Self {
            gpu_va: gpu_address,
            texture_view_id: 0,
            metadata,
        }
    }

    pub fn buffer_view(view: &BufferView) -> Self {
        Self {
            gpu_va: view.gpu_address + view.buffer_offset,
            texture_view_id: view.texture_buffer_view.unwrap_or(0),
            metadata: Self::buffer_metadata(view),
        }
    }

    /// A texture with resource ID `resource_id`.
    pub fn texture(resource_id: u64, min_lod_clamp: f32) -> Self {
        // The upper half of the metadata is reserved and must stay zero.
        Self {
            gpu_va: 0,
            texture_view_id: resource_id,
            metadata: u64::from(min_lod_clamp.to_bits()),
        }
    }

    /// A sampler with resource ID `resource_id`.
    pub fn sampler(resource_id: u64, lod_bias: f32) -> Self {
        Self {
            gpu_va: resource_id,
            texture_view_id: 0,
            metadata: u64::from(lod_bias.to_bits()),
        }
    }

    pub fn acceleration_structure(gpu_address: u64) -> Self {
        Self {
            gpu_va: gpu_address,
            texture_view_id: 0,
            metadata: 0,
        }
    }

    /// Packs the size, texture view offset and typed flag of `view`.
    pub fn buffer_metadata(view: &BufferView) -> u64 {
        ((view.buffer_size & BUF_SIZE_MASK) << BUF_SIZE_OFFSET)
            | ((u64::from(view.texture_view_offset_in_elements) & TEX_VIEW_MASK) << TEX_VIEW_OFFSET)
            | (u64::from(view.typed_buffer) << TYPED_BUFFER_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::const_assert_eq;

    const_assert_eq!(size_of::<DescriptorTableEntry>(), 24);

    #[test]
    fn buffer_metadata_layout() {
        let view = BufferView {
            gpu_address: 0x1000,
            buffer_offset: 0x40,
            buffer_size: 0x1_0000_0100,
            texture_buffer_view: Some(7),
            texture_view_offset_in_elements: 0x1ff,
            typed_buffer: true,
        };
        let metadata = DescriptorTableEntry::buffer_metadata(&view);
        // The size is truncated to 32 bits, the element offset to 8.
        assert_eq!(metadata & 0xffff_ffff, 0x100);
        assert_eq!((metadata >> 32) & 0xff, 0xff);
        assert_eq!(metadata >> 63, 1);
        assert_eq!(metadata & 0x7fff_ff00_0000_0000, 0);

        let entry = DescriptorTableEntry::buffer_view(&view);
        assert_eq!(entry.gpu_va, 0x1040);
        assert_eq!(entry.texture_view_id, 7);
        assert_eq!(entry.metadata, metadata);
    }

    #[test]
    fn untyped_view_without_texture() {
        let view = BufferView {
            gpu_address: 0x2000,
            buffer_size: 256,
            ..Default::default()
        };
        let entry = DescriptorTableEntry::buffer_view(&view);
        assert_eq!(entry.texture_view_id, 0);
        assert_eq!(entry.metadata, 256);
    }

    #[test]
    fn texture_and_sampler_encoding() {
        let texture = DescriptorTableEntry::texture(42, 1.5);
        assert_eq!(texture.gpu_va, 0);
        assert_eq!(texture.texture_view_id, 42);
        assert_eq!(texture.metadata, u64::from(1.5_f32.to_bits()));
        assert_eq!(texture.metadata >> 32, 0);

        let sampler = DescriptorTableEntry::sampler(9, -0.5);
        assert_eq!(sampler.gpu_va, 9);
        assert_eq!(sampler.texture_view_id, 0);
        assert_eq!(f32::from_bits(sampler.metadata as u32), -0.5);
    }

    #[test]
    fn entries_are_plain_bytes() {
        let entries = [
            DescriptorTableEntry::buffer(0xdead_0000, 64),
            DescriptorTableEntry::acceleration_structure(0xbeef_0000),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&entries);
        assert_eq!(bytes.len(), 48);
        assert_eq!(
            bytemuck::pod_read_unaligned::<u64>(&bytes[24..32]),
            0xbeef_0000
        );
    }
}
