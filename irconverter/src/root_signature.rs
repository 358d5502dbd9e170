// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root signatures describe how shader resources map onto the top-level argument buffer.

use std::ptr::{self, NonNull};

use irconverter_sys as ffi;

use crate::error::take_handle;
use crate::resource::{collect_locations, ResourceLocation};
use crate::{IrConverter, Result};

/// Place a descriptor range directly after the previous one in its table.
pub const DESCRIPTOR_RANGE_OFFSET_APPEND: u32 = ffi::IRDescriptorRangeOffsetAppend;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DescriptorRange {
    pub range_type: ffi::IRDescriptorRangeType,
    pub num_descriptors: u32,
    pub base_shader_register: u32,
    pub register_space: u32,
    pub offset_in_descriptors_from_table_start: u32,
}

impl DescriptorRange {
    /// A range appended after the previous range of its table.
    pub fn new(
        range_type: ffi::IRDescriptorRangeType,
        num_descriptors: u32,
        base_shader_register: u32,
        register_space: u32,
    ) -> Self {
        Self {
            range_type,
            num_descriptors,
            base_shader_register,
            register_space,
            offset_in_descriptors_from_table_start: DESCRIPTOR_RANGE_OFFSET_APPEND,
        }
    }

    fn to_raw(self) -> ffi::IRDescriptorRange {
        ffi::IRDescriptorRange {
            RangeType: self.range_type,
            NumDescriptors: self.num_descriptors,
            BaseShaderRegister: self.base_shader_register,
            RegisterSpace: self.register_space,
            OffsetInDescriptorsFromTableStart: self.offset_in_descriptors_from_table_start,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DescriptorRange1 {
    pub range_type: ffi::IRDescriptorRangeType,
    pub num_descriptors: u32,
    pub base_shader_register: u32,
    pub register_space: u32,
    pub flags: ffi::IRDescriptorRangeFlags,
    pub offset_in_descriptors_from_table_start: u32,
}

impl DescriptorRange1 {
    fn to_raw(self) -> ffi::IRDescriptorRange1 {
        ffi::IRDescriptorRange1 {
            RangeType: self.range_type,
            NumDescriptors: self.num_descriptors,
            BaseShaderRegister: self.base_shader_register,
            RegisterSpace: self.register_space,
            Flags: self.flags,
            OffsetInDescriptorsFromTableStart: self.offset_in_descriptors_from_table_start,
        }
    }
}

/// Version 1.0 ranges behave as if their descriptors were volatile, and, except for
/// samplers, their data too.
impl From<DescriptorRange> for DescriptorRange1 {
    fn from(range: DescriptorRange) -> Self {
        let flags = match range.range_type {
            ffi::IRDescriptorRangeType::Sampler => ffi::IRDescriptorRangeFlags::DescriptorsVolatile,
            ffi::IRDescriptorRangeType::SRV
            | ffi::IRDescriptorRangeType::UAV
            | ffi::IRDescriptorRangeType::CBV => {
                ffi::IRDescriptorRangeFlags::DescriptorsVolatile
                    | ffi::IRDescriptorRangeFlags::DataVolatile
            }
        };
        Self {
            range_type: range.range_type,
            num_descriptors: range.num_descriptors,
            base_shader_register: range.base_shader_register,
            register_space: range.register_space,
            flags,
            offset_in_descriptors_from_table_start: range.offset_in_descriptors_from_table_start,
        }
    }
}

/// 32-bit values placed inline in the top-level argument buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootConstants {
    pub shader_register: u32,
    pub register_space: u32,
    pub num_32bit_values: u32,
}

impl RootConstants {
    fn to_raw(self) -> ffi::IRRootConstants {
        ffi::IRRootConstants {
            ShaderRegister: self.shader_register,
            RegisterSpace: self.register_space,
            Num32BitValues: self.num_32bit_values,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootDescriptor {
    pub shader_register: u32,
    pub register_space: u32,
}

impl RootDescriptor {
    fn to_raw(self) -> ffi::IRRootDescriptor {
        ffi::IRRootDescriptor {
            ShaderRegister: self.shader_register,
            RegisterSpace: self.register_space,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootDescriptor1 {
    pub shader_register: u32,
    pub register_space: u32,
    pub flags: ffi::IRRootDescriptorFlags,
}

impl RootDescriptor1 {
    fn to_raw(self) -> ffi::IRRootDescriptor1 {
        ffi::IRRootDescriptor1 {
            ShaderRegister: self.shader_register,
            RegisterSpace: self.register_space,
            Flags: self.flags,
        }
    }
}

/// Version 1.0 root descriptors behave as if their data were volatile.
impl From<RootDescriptor> for RootDescriptor1 {
    fn from(descriptor: RootDescriptor) -> Self {
        Self {
            shader_register: descriptor.shader_register,
            register_space: descriptor.register_space,
            flags: ffi::IRRootDescriptorFlags::DataVolatile,
        }
    }
}

/// What a version 1.0 root parameter binds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootParameterKind {
    DescriptorTable(Vec<DescriptorRange>),
    Constants(RootConstants),
    Cbv(RootDescriptor),
    Srv(RootDescriptor),
    Uav(RootDescriptor),
}

/// What a version 1.1 root parameter binds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootParameterKind1 {
    DescriptorTable(Vec<DescriptorRange1>),
    Constants(RootConstants),
    Cbv(RootDescriptor1),
    Srv(RootDescriptor1),
    Uav(RootDescriptor1),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootParameter {
    pub kind: RootParameterKind,
    pub visibility: ffi::IRShaderVisibility,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootParameter1 {
    pub kind: RootParameterKind1,
    pub visibility: ffi::IRShaderVisibility,
}

impl From<RootParameter> for RootParameter1 {
    fn from(parameter: RootParameter) -> Self {
        let kind = match parameter.kind {
            RootParameterKind::DescriptorTable(ranges) => RootParameterKind1::DescriptorTable(
                ranges.into_iter().map(DescriptorRange1::from).collect(),
            ),
            RootParameterKind::Constants(constants) => RootParameterKind1::Constants(constants),
            RootParameterKind::Cbv(descriptor) => RootParameterKind1::Cbv(descriptor.into()),
            RootParameterKind::Srv(descriptor) => RootParameterKind1::Srv(descriptor.into()),
            RootParameterKind::Uav(descriptor) => RootParameterKind1::Uav(descriptor.into()),
        };
        Self {
            kind,
            visibility: parameter.visibility,
        }
    }
}

/// A sampler baked into the root signature.
///
/// [`StaticSamplerDescriptor::new`] starts from the usual Direct3D defaults: anisotropic
/// filtering, wrapping on every axis and an unbounded LOD range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticSamplerDescriptor {
    pub filter: ffi::IRFilter,
    pub address_u: ffi::IRTextureAddressMode,
    pub address_v: ffi::IRTextureAddressMode,
    pub address_w: ffi::IRTextureAddressMode,
    pub mip_lod_bias: f32,
    pub max_anisotropy: u32,
    pub comparison_func: ffi::IRComparisonFunction,
    pub border_color: ffi::IRStaticBorderColor,
    pub min_lod: f32,
    pub max_lod: f32,
    pub shader_register: u32,
    pub register_space: u32,
    pub visibility: ffi::IRShaderVisibility,
}

impl StaticSamplerDescriptor {
    pub fn new(shader_register: u32, register_space: u32) -> Self {
        Self {
            filter: ffi::IRFilter::Anisotropic,
            address_u: ffi::IRTextureAddressMode::Wrap,
            address_v: ffi::IRTextureAddressMode::Wrap,
            address_w: ffi::IRTextureAddressMode::Wrap,
            mip_lod_bias: 0.0,
            max_anisotropy: 16,
            comparison_func: ffi::IRComparisonFunction::LessEqual,
            border_color: ffi::IRStaticBorderColor::OpaqueWhite,
            min_lod: 0.0,
            max_lod: f32::MAX,
            shader_register,
            register_space,
            visibility: ffi::IRShaderVisibility::All,
        }
    }

    pub fn with_filter(mut self, filter: ffi::IRFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Uses `mode` on all three axes.
    pub fn with_address_mode(mut self, mode: ffi::IRTextureAddressMode) -> Self {
        self.address_u = mode;
        self.address_v = mode;
        self.address_w = mode;
        self
    }

    pub fn with_comparison(mut self, comparison_func: ffi::IRComparisonFunction) -> Self {
        self.comparison_func = comparison_func;
        self
    }

    pub fn with_lod_range(mut self, min_lod: f32, max_lod: f32) -> Self {
        self.min_lod = min_lod;
        self.max_lod = max_lod;
        self
    }

    pub fn with_visibility(mut self, visibility: ffi::IRShaderVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    fn to_raw(self) -> ffi::IRStaticSamplerDescriptor {
        ffi::IRStaticSamplerDescriptor {
            Filter: self.filter,
            AddressU: self.address_u,
            AddressV: self.address_v,
            AddressW: self.address_w,
            MipLODBias: self.mip_lod_bias,
            MaxAnisotropy: self.max_anisotropy,
            ComparisonFunc: self.comparison_func,
            BorderColor: self.border_color,
            MinLOD: self.min_lod,
            MaxLOD: self.max_lod,
            ShaderRegister: self.shader_register,
            RegisterSpace: self.register_space,
            ShaderVisibility: self.visibility,
        }
    }
}

/// A version 1.0 root signature.
#[derive(Clone, Debug, PartialEq)]
pub struct RootSignatureDescriptor {
    pub parameters: Vec<RootParameter>,
    pub static_samplers: Vec<StaticSamplerDescriptor>,
    pub flags: ffi::IRRootSignatureFlags,
}

impl RootSignatureDescriptor {
    /// The equivalent version 1.1 descriptor.
    ///
    /// Ranges and root descriptors get the volatility flags that version 1.0 implies:
    /// `DescriptorsVolatile | DataVolatile` for CBV, SRV and UAV ranges, `DescriptorsVolatile`
    /// for sampler ranges and `DataVolatile` for root descriptors.
    pub fn to_v1_1(&self) -> RootSignatureDescriptor1 {
        RootSignatureDescriptor1 {
            parameters: self
                .parameters
                .iter()
                .cloned()
                .map(RootParameter1::from)
                .collect(),
            static_samplers: self.static_samplers.clone(),
            flags: self.flags,
        }
    }
}

/// A version 1.1 root signature.
#[derive(Clone, Debug, PartialEq)]
pub struct RootSignatureDescriptor1 {
    pub parameters: Vec<RootParameter1>,
    pub static_samplers: Vec<StaticSamplerDescriptor>,
    pub flags: ffi::IRRootSignatureFlags,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VersionedRootSignatureDescriptor {
    V1_0(RootSignatureDescriptor),
    V1_1(RootSignatureDescriptor1),
}

impl VersionedRootSignatureDescriptor {
    pub fn version(&self) -> ffi::IRRootSignatureVersion {
        match self {
            Self::V1_0(_) => ffi::IRRootSignatureVersion::_1_0,
            Self::V1_1(_) => ffi::IRRootSignatureVersion::_1_1,
        }
    }

    /// Builds the native representation.
    pub fn to_raw(&self) -> RawVersionedRootSignatureDescriptor {
        RawVersionedRootSignatureDescriptor::new(self)
    }
}

impl From<RootSignatureDescriptor> for VersionedRootSignatureDescriptor {
    fn from(descriptor: RootSignatureDescriptor) -> Self {
        Self::V1_0(descriptor)
    }
}

impl From<RootSignatureDescriptor1> for VersionedRootSignatureDescriptor {
    fn from(descriptor: RootSignatureDescriptor1) -> Self {
        Self::V1_1(descriptor)
    }
}

fn slice_ptr<T>(items: &[T]) -> *const T {
    if items.is_empty() {
        ptr::null()
    } else {
        items.as_ptr()
    }
}

/// A native root signature descriptor together with the arrays its pointers refer to.
///
/// The arrays are heap allocations owned by this value, so the pointers stay valid for as
/// long as it lives, even when it is moved.
pub struct RawVersionedRootSignatureDescriptor {
    raw: ffi::IRVersionedRootSignatureDescriptor,
    _parameters: Vec<ffi::IRRootParameter>,
    _parameters1: Vec<ffi::IRRootParameter1>,
    _ranges: Vec<Vec<ffi::IRDescriptorRange>>,
    _ranges1: Vec<Vec<ffi::IRDescriptorRange1>>,
    _static_samplers: Vec<ffi::IRStaticSamplerDescriptor>,
}

impl RawVersionedRootSignatureDescriptor {
    fn new(descriptor: &VersionedRootSignatureDescriptor) -> Self {
        match descriptor {
            VersionedRootSignatureDescriptor::V1_0(descriptor) => Self::new_1_0(descriptor),
            VersionedRootSignatureDescriptor::V1_1(descriptor) => Self::new_1_1(descriptor),
        }
    }

    fn new_1_0(descriptor: &RootSignatureDescriptor) -> Self {
        let mut ranges = Vec::new();
        let parameters = descriptor
            .parameters
            .iter()
            .map(|parameter| {
                let (ty, u_1) = match &parameter.kind {
                    RootParameterKind::DescriptorTable(table) => {
                        let table: Vec<_> = table.iter().map(|range| range.to_raw()).collect();
                        let raw = ffi::IRRootDescriptorTable {
                            NumDescriptorRanges: table.len() as u32,
                            pDescriptorRanges: slice_ptr(&table),
                        };
                        ranges.push(table);
                        (
                            ffi::IRRootParameterType::DescriptorTable,
                            ffi::IRRootParameter_u {
                                DescriptorTable: raw,
                            },
                        )
                    }
                    RootParameterKind::Constants(constants) => (
                        ffi::IRRootParameterType::_32BitConstants,
                        ffi::IRRootParameter_u {
                            Constants: constants.to_raw(),
                        },
                    ),
                    RootParameterKind::Cbv(descriptor) => (
                        ffi::IRRootParameterType::CBV,
                        ffi::IRRootParameter_u {
                            Descriptor: descriptor.to_raw(),
                        },
                    ),
                    RootParameterKind::Srv(descriptor) => (
                        ffi::IRRootParameterType::SRV,
                        ffi::IRRootParameter_u {
                            Descriptor: descriptor.to_raw(),
                        },
                    ),
                    RootParameterKind::Uav(descriptor) => (
                        ffi::IRRootParameterType::UAV,
                        ffi::IRRootParameter_u {
                            Descriptor: descriptor.to_raw(),
                        },
                    ),
                };
                ffi::IRRootParameter {
                    ParameterType: ty,
                    u_1,
                    ShaderVisibility: parameter.visibility,
                }
            })
            .collect::<Vec<_>>();
        let static_samplers = lower_samplers(&descriptor.static_samplers);
        let raw = ffi::IRVersionedRootSignatureDescriptor {
            version: ffi::IRRootSignatureVersion::_1_0,
            u_1: ffi::IRVersionedRootSignatureDescriptor_u {
                desc_1_0: ffi::IRRootSignatureDescriptor {
                    NumParameters: parameters.len() as u32,
                    pParameters: slice_ptr(&parameters),
                    NumStaticSamplers: static_samplers.len() as u32,
                    pStaticSamplers: slice_ptr(&static_samplers),
                    Flags: descriptor.flags,
                },
            },
        };
        Self {
            raw,
            _parameters: parameters,
            _parameters1: Vec::new(),
            _ranges: ranges,
            _ranges1: Vec::new(),
            _static_samplers: static_samplers,
        }
    }

    fn new_1_1(descriptor: &RootSignatureDescriptor1) -> Self {
        let mut ranges = Vec::new();
        let parameters = descriptor
            .parameters
            .iter()
            .map(|parameter| {
                let (ty, u_1) = match &parameter.kind {
                    RootParameterKind1::DescriptorTable(table) => {
                        let table: Vec<_> = table.iter().map(|range| range.to_raw()).collect();
                        let raw = ffi::IRRootDescriptorTable1 {
                            NumDescriptorRanges: table.len() as u32,
                            pDescriptorRanges: slice_ptr(&table),
                        };
                        ranges.push(table);
                        (
                            ffi::IRRootParameterType::DescriptorTable,
                            ffi::IRRootParameter1_u {
                                DescriptorTable: raw,
                            },
                        )
                    }
                    RootParameterKind1::Constants(constants) => (
                        ffi::IRRootParameterType::_32BitConstants,
                        ffi::IRRootParameter1_u {
                            Constants: constants.to_raw(),
                        },
                    ),
                    RootParameterKind1::Cbv(descriptor) => (
                        ffi::IRRootParameterType::CBV,
                        ffi::IRRootParameter1_u {
                            Descriptor: descriptor.to_raw(),
                        },
                    ),
                    RootParameterKind1::Srv(descriptor) => (
                        ffi::IRRootParameterType::SRV,
                        ffi::IRRootParameter1_u {
                            Descriptor: descriptor.to_raw(),
                        },
                    ),
                    RootParameterKind1::Uav(descriptor) => (
                        ffi::IRRootParameterType::UAV,
                        ffi::IRRootParameter1_u {
                            Descriptor: descriptor.to_raw(),
                        },
                    ),
                };
                ffi::IRRootParameter1 {
                    ParameterType: ty,
                    u_1,
                    ShaderVisibility: parameter.visibility,
                }
            })
            .collect::<Vec<_>>();
        let static_samplers = lower_samplers(&descriptor.static_samplers);
        let raw = ffi::IRVersionedRootSignatureDescriptor {
            version: ffi::IRRootSignatureVersion::_1_1,
            u_1: ffi::IRVersionedRootSignatureDescriptor_u {
                desc_1_1: ffi::IRRootSignatureDescriptor1 {
                    NumParameters: parameters.len() as u32,
                    pParameters: slice_ptr(&parameters),
                    NumStaticSamplers: static_samplers.len() as u32,
                    pStaticSamplers: slice_ptr(&static_samplers),
                    Flags: descriptor.flags,
                },
            },
        };
        Self {
            raw,
            _parameters: Vec::new(),
            _parameters1: parameters,
            _ranges: Vec::new(),
            _ranges1: ranges,
            _static_samplers: static_samplers,
        }
    }

    pub fn version(&self) -> ffi::IRRootSignatureVersion {
        self.raw.version
    }

    /// The native descriptor. Valid for as long as `self` is.
    pub fn as_raw(&self) -> &ffi::IRVersionedRootSignatureDescriptor {
        &self.raw
    }
}

fn lower_samplers(samplers: &[StaticSamplerDescriptor]) -> Vec<ffi::IRStaticSamplerDescriptor> {
    samplers.iter().map(|sampler| sampler.to_raw()).collect()
}

/// A root signature created by the converter.
///
/// Like every other handle, it may be moved to another thread but not shared: the library
/// makes no promise about concurrent reads.
pub struct RootSignature {
    me: NonNull<ffi::IRRootSignature>,
    lib: IrConverter,
}

impl RootSignature {
    pub fn new(
        converter: &IrConverter,
        descriptor: &VersionedRootSignatureDescriptor,
    ) -> Result<Self> {
        Self::from_raw_descriptor(converter, &descriptor.to_raw())
    }

    pub fn from_raw_descriptor(
        converter: &IrConverter,
        descriptor: &RawVersionedRootSignatureDescriptor,
    ) -> Result<Self> {
        let mut error = ptr::null_mut();
        let me = unsafe {
            let me = (converter.ffi().IRRootSignatureCreateFromDescriptor)(
                descriptor.as_raw(),
                &mut error,
            );
            take_handle(
                converter,
                me,
                error,
                "Root signature creation",
                "IRRootSignatureCreateFromDescriptor",
            )?
        };
        Ok(Self {
            me,
            lib: converter.clone(),
        })
    }

    /// Where each resource of this root signature lives in the top-level argument buffer.
    pub fn resource_locations(&self) -> Vec<ResourceLocation> {
        let ffi = self.lib.ffi();
        unsafe {
            let count = (ffi.IRRootSignatureGetResourceCount)(self.me.as_ptr());
            collect_locations(count, |out| {
                (ffi.IRRootSignatureGetResourceLocations)(self.me.as_ptr(), out);
            })
        }
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::IRRootSignature {
        self.me.as_ptr()
    }
}

impl Drop for RootSignature {
    fn drop(&mut self) {
        unsafe { (self.lib.ffi().IRRootSignatureDestroy)(self.me.as_ptr()) }
    }
}

impl std::fmt::Debug for RootSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootSignature")
            .field("me", &self.me)
            .finish_non_exhaustive()
    }
}

// SAFETY: root signatures have no thread affinity. Shared access isn't synchronised by the
// library.
unsafe impl Send for RootSignature {}

static_assertions::assert_impl_all!(RootSignature: Send);
static_assertions::assert_not_impl_any!(RootSignature: Sync);
