// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use bytemuck::NoUninit;
use irconverter_sys as ffi;

use crate::{Error, ResourceLocation, Result};

type BindingKey = (ffi::IRResourceType, u32, u32);

/// Offsets of the entries of a top-level argument buffer, as recorded by a root signature or
/// shader reflection.
///
/// Offsets are never computed here: a binding is only writable if one of the source
/// locations names it.
#[derive(Clone, Debug, Default)]
pub struct ArgumentBufferLayout {
    entries: HashMap<BindingKey, ResourceLocation>,
    size_in_bytes: u64,
}

impl ArgumentBufferLayout {
    pub fn from_locations(locations: &[ResourceLocation]) -> Self {
        let mut layout = Self::default();
        for location in locations {
            let key = (location.resource_type, location.space, location.slot);
            if layout.entries.contains_key(&key) {
                log::debug!("Ignoring repeated resource location {location:?}");
                continue;
            }
            layout.size_in_bytes = layout.size_in_bytes.max(location.end_offset());
            layout.entries.insert(key, location.clone());
        }
        layout
    }

    /// Size a buffer must have to hold every entry.
    pub fn size_in_bytes(&self) -> u64 {
        self.size_in_bytes
    }

    pub fn location(
        &self,
        ty: ffi::IRResourceType,
        space: u32,
        slot: u32,
    ) -> Option<&ResourceLocation> {
        self.entries.get(&(ty, space, slot))
    }

    /// Writes `value` at the offset recorded for the binding.
    ///
    /// Fails if no location names the binding, or `value` is larger than its entry.
    pub fn write<T: NoUninit>(
        &self,
        buffer: &mut [u8],
        ty: ffi::IRResourceType,
        space: u32,
        slot: u32,
        value: &T,
    ) -> Result<()> {
        let location = self
            .location(ty, space, slot)
            .ok_or(Error::UnknownBinding { ty, space, slot })?;
        let bytes = bytemuck::bytes_of(value);
        if bytes.len() as u64 > location.size_bytes {
            return Err(Error::ValueTooLarge {
                size: bytes.len(),
                capacity: location.size_bytes as usize,
            });
        }
        let start = location.top_level_offset as usize;
        let end = start + bytes.len();
        let provided = buffer.len();
        let target = buffer.get_mut(start..end).ok_or(Error::BufferTooSmall {
            required: end,
            provided,
        })?;
        target.copy_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(ty: ffi::IRResourceType, slot: u32, offset: u32, size: u64) -> ResourceLocation {
        ResourceLocation {
            resource_type: ty,
            space: 0,
            slot,
            top_level_offset: offset,
            size_bytes: size,
            name: None,
        }
    }

    fn layout() -> ArgumentBufferLayout {
        ArgumentBufferLayout::from_locations(&[
            location(ffi::IRResourceType::CBV, 0, 0, 8),
            location(ffi::IRResourceType::Constant, 1, 8, 16),
            location(ffi::IRResourceType::SRV, 0, 24, 8),
        ])
    }

    #[test]
    fn size_is_furthest_entry_end() {
        assert_eq!(layout().size_in_bytes(), 32);
        assert_eq!(ArgumentBufferLayout::default().size_in_bytes(), 0);
    }

    #[test]
    fn writes_at_recorded_offsets() {
        let layout = layout();
        let mut buffer = vec![0_u8; layout.size_in_bytes() as usize];
        layout
            .write(
                &mut buffer,
                ffi::IRResourceType::SRV,
                0,
                0,
                &0x1122_3344_5566_7788_u64,
            )
            .unwrap();
        layout
            .write(
                &mut buffer,
                ffi::IRResourceType::Constant,
                0,
                1,
                &[1_u32, 2, 3, 4],
            )
            .unwrap();
        assert_eq!(&buffer[..8], &[0; 8]);
        assert_eq!(
            bytemuck::pod_read_unaligned::<[u32; 4]>(&buffer[8..24]),
            [1, 2, 3, 4]
        );
        assert_eq!(
            bytemuck::pod_read_unaligned::<u64>(&buffer[24..32]),
            0x1122_3344_5566_7788
        );
    }

    #[test]
    fn rejects_oversize_values() {
        let layout = layout();
        let mut buffer = vec![0_u8; 32];
        let result = layout.write(&mut buffer, ffi::IRResourceType::CBV, 0, 0, &[0_u64; 2]);
        assert!(matches!(
            result,
            Err(Error::ValueTooLarge {
                size: 16,
                capacity: 8
            })
        ));
        assert!(buffer.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn rejects_unknown_bindings_and_short_buffers() {
        let layout = layout();
        let mut buffer = vec![0_u8; 16];
        assert!(matches!(
            layout.write(&mut buffer, ffi::IRResourceType::UAV, 0, 0, &0_u64),
            Err(Error::UnknownBinding { slot: 0, .. })
        ));
        assert!(matches!(
            layout.write(&mut buffer, ffi::IRResourceType::SRV, 0, 0, &0_u64),
            Err(Error::BufferTooSmall {
                required: 32,
                provided: 16
            })
        ));
    }

    #[test]
    fn first_location_wins() {
        let layout = ArgumentBufferLayout::from_locations(&[
            location(ffi::IRResourceType::SRV, 0, 0, 8),
            location(ffi::IRResourceType::SRV, 0, 64, 8),
        ]);
        let entry = layout.location(ffi::IRResourceType::SRV, 0, 0).unwrap();
        assert_eq!(entry.top_level_offset, 0);
        assert_eq!(layout.size_in_bytes(), 8);
    }
}
