// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::CStr;

use irconverter_sys as ffi;

/// Where a shader resource lives in the top-level argument buffer.
///
/// These records are the only source of truth for argument buffer offsets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    pub resource_type: ffi::IRResourceType,
    /// DXIL register space.
    pub space: u32,
    /// DXIL register slot.
    pub slot: u32,
    /// Byte offset into the top-level argument buffer.
    pub top_level_offset: u32,
    /// Size of the argument buffer entry in bytes.
    pub size_bytes: u64,
    pub name: Option<String>,
}

impl ResourceLocation {
    /// Copies a native record, including its name.
    ///
    /// # Safety
    ///
    /// `raw.resourceName` must be null or point to a nul-terminated string.
    pub(crate) unsafe fn from_raw(raw: &ffi::IRResourceLocation) -> Self {
        let name = (!raw.resourceName.is_null())
            .then(|| CStr::from_ptr(raw.resourceName).to_string_lossy().into_owned());
        Self {
            resource_type: raw.resourceType,
            space: raw.space,
            slot: raw.slot,
            top_level_offset: raw.topLevelOffset,
            size_bytes: raw.sizeBytes,
            name,
        }
    }

    /// One past the last byte of this entry in the argument buffer.
    pub fn end_offset(&self) -> u64 {
        u64::from(self.top_level_offset) + self.size_bytes
    }
}

/// Runs the native count-then-fill protocol and copies the records out.
///
/// # Safety
///
/// `fill` must write exactly `count` valid records to the pointer it is given, whose names
/// stay valid until this function returns.
pub(crate) unsafe fn collect_locations(
    count: usize,
    fill: impl FnOnce(*mut ffi::IRResourceLocation),
) -> Vec<ResourceLocation> {
    if count == 0 {
        return Vec::new();
    }
    let mut raw = Vec::<ffi::IRResourceLocation>::with_capacity(count);
    fill(raw.as_mut_ptr());
    raw.set_len(count);
    raw.iter().map(|location| ResourceLocation::from_raw(location)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    fn raw(slot: u32, name: *const std::ffi::c_char) -> ffi::IRResourceLocation {
        ffi::IRResourceLocation {
            resourceType: ffi::IRResourceType::SRV,
            space: 1,
            slot,
            topLevelOffset: 16 * slot,
            sizeBytes: 24,
            resourceName: name,
        }
    }

    #[test]
    fn names_are_copied_and_null_is_none() {
        let name = c"albedo";
        let locations = unsafe {
            collect_locations(2, |out| {
                out.write(raw(0, name.as_ptr()));
                out.add(1).write(raw(1, ptr::null()));
            })
        };
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name.as_deref(), Some("albedo"));
        assert_eq!(locations[0].resource_type, ffi::IRResourceType::SRV);
        assert_eq!(locations[1].name, None);
        assert_eq!(locations[1].top_level_offset, 16);
        assert_eq!(locations[1].end_offset(), 40);
    }

    #[test]
    fn empty_list_skips_fill() {
        let locations = unsafe { collect_locations(0, |_| panic!("nothing to fill")) };
        assert!(locations.is_empty());
    }
}
