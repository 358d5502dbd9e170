// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reflection data produced while compiling a shader.

use std::ffi::{c_char, c_void, CStr, CString};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use irconverter_sys::{self as ffi, MetalIrConverter};

use crate::resource::{collect_locations, ResourceLocation};
use crate::{Error, IrConverter, Result};

/// Layout version of the per-stage reflection structs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReflectionVersion {
    #[default]
    V1_0,
}

impl ReflectionVersion {
    pub fn to_raw(self) -> ffi::IRReflectionVersion {
        match self {
            Self::V1_0 => ffi::IRReflectionVersion::_1_0,
        }
    }
}

/// # Safety
///
/// `ptr` must be null or point to a nul-terminated string.
unsafe fn owned_string(ptr: *const c_char) -> Option<String> {
    (!ptr.is_null()).then(|| CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// A named vertex attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: Option<String>,
    pub attribute_index: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputeInfo {
    pub threadgroup_size: [u32; 3],
}

impl ComputeInfo {
    fn from_raw(raw: &ffi::IRCSInfo_1_0) -> Self {
        Self {
            threadgroup_size: raw.tg_size,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexInfo {
    /// Negative if the shader doesn't read the instance ID.
    pub instance_id_index: i32,
    /// Negative if the shader doesn't read the vertex ID.
    pub vertex_id_index: i32,
    pub vertex_output_size_in_bytes: u32,
    pub needs_draw_params: bool,
    pub vertex_inputs: Vec<VertexAttribute>,
}

impl VertexInfo {
    unsafe fn from_raw(raw: &ffi::IRVSInfo_1_0) -> Self {
        let inputs = raw_slice(raw.vertex_inputs, raw.num_vertex_inputs);
        Self {
            instance_id_index: raw.instance_id_index,
            vertex_id_index: raw.vertex_id_index,
            vertex_output_size_in_bytes: raw.vertex_output_size_in_bytes,
            needs_draw_params: raw.needs_draw_params,
            vertex_inputs: inputs
                .iter()
                .map(|input| VertexAttribute {
                    name: owned_string(input.name),
                    attribute_index: input.attributeIndex,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FragmentInfo {
    pub num_render_targets: i32,
    pub rt_index_int: u8,
    pub discards: bool,
}

impl FragmentInfo {
    fn from_raw(raw: &ffi::IRFSInfo_1_0) -> Self {
        Self {
            num_render_targets: raw.num_render_targets,
            rt_index_int: raw.rt_index_int,
            discards: raw.discards,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeometryInfo {
    pub vertex_outputs: Vec<VertexAttribute>,
    pub is_passthrough: bool,
    pub rt_array_index_record_id: i32,
    pub viewport_array_index_record_id: i32,
    pub input_primitive: ffi::IRInputPrimitive,
    pub max_input_primitives_per_mesh_threadgroup: u32,
    pub max_payload_size_in_bytes: u32,
    pub instance_count: u32,
}

impl GeometryInfo {
    unsafe fn from_raw(raw: &ffi::IRGSInfo_1_0) -> Self {
        let outputs = raw_slice(raw.vertex_outputs, raw.num_vertex_outputs);
        Self {
            vertex_outputs: outputs
                .iter()
                .map(|output| VertexAttribute {
                    name: owned_string(output.name),
                    attribute_index: output.attributeIndex,
                })
                .collect(),
            is_passthrough: raw.is_passthrough,
            rt_array_index_record_id: raw.rt_array_index_record_id,
            viewport_array_index_record_id: raw.viewport_array_index_record_id,
            input_primitive: raw.input_primitive,
            max_input_primitives_per_mesh_threadgroup: raw
                .max_input_primitives_per_mesh_threadgroup,
            max_payload_size_in_bytes: raw.max_payload_size_in_bytes,
            instance_count: raw.instance_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HullInfo {
    pub max_patches_per_object_threadgroup: u32,
    pub max_object_threads_per_patch: u32,
    pub patch_constants_size: u32,
    pub patch_constant_function: Option<String>,
    pub static_payload_size: u32,
    pub payload_size_per_patch: u32,
    pub input_control_point_count: u32,
    pub output_control_point_count: u32,
    pub output_control_point_size: u32,
    pub tessellator_domain: ffi::IRTessellatorDomain,
    pub tessellator_partitioning: ffi::IRTessellatorPartitioning,
    pub tessellator_output_primitive: ffi::IRTessellatorOutputPrimitive,
    pub tessellation_type_half: bool,
    pub max_tessellation_factor: f32,
}

impl HullInfo {
    unsafe fn from_raw(raw: &ffi::IRHSInfo_1_0) -> Self {
        Self {
            max_patches_per_object_threadgroup: raw.max_patches_per_object_threadgroup,
            max_object_threads_per_patch: raw.max_object_threads_per_patch,
            patch_constants_size: raw.patch_constants_size,
            patch_constant_function: owned_string(raw.patch_constant_function),
            static_payload_size: raw.static_payload_size,
            payload_size_per_patch: raw.payload_size_per_patch,
            input_control_point_count: raw.input_control_point_count,
            output_control_point_count: raw.output_control_point_count,
            output_control_point_size: raw.output_control_point_size,
            tessellator_domain: raw.tessellator_domain,
            tessellator_partitioning: raw.tessellator_partitioning,
            tessellator_output_primitive: raw.tessellator_output_primitive,
            tessellation_type_half: raw.tessellation_type_half,
            max_tessellation_factor: raw.max_tessellation_factor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainInfo {
    pub tessellator_domain: ffi::IRTessellatorDomain,
    pub max_input_prims_per_mesh_threadgroup: u32,
    pub input_control_point_count: u32,
    pub input_control_point_size: u32,
    pub patch_constants_size: u32,
    pub tessellation_type_half: bool,
}

impl DomainInfo {
    fn from_raw(raw: &ffi::IRDSInfo_1_0) -> Self {
        Self {
            tessellator_domain: raw.tessellator_domain,
            max_input_prims_per_mesh_threadgroup: raw.max_input_prims_per_mesh_threadgroup,
            input_control_point_count: raw.input_control_point_count,
            input_control_point_size: raw.input_control_point_size,
            patch_constants_size: raw.patch_constants_size,
            tessellation_type_half: raw.tessellation_type_half,
        }
    }
}

/// # Safety
///
/// `ptr` must be null or valid for `len` reads.
unsafe fn raw_slice<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if ptr.is_null() || len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(ptr, len)
    }
}

mod sealed {
    pub trait Sealed {}
}

type CopyFn<T> =
    unsafe extern "C" fn(*const ffi::IRShaderReflection, ffi::IRReflectionVersion, *mut T) -> bool;
type ReleaseFn<T> = unsafe extern "C" fn(*mut T) -> bool;

/// A native per-stage reflection struct, with the functions that copy it out of a
/// reflection object and release it again.
pub trait VersionedStageInfo: sealed::Sealed + Sized {
    /// Owned form of the struct.
    type Info;
    /// Stage name used in errors.
    const STAGE: &'static str;

    #[doc(hidden)]
    fn copy_fn(lib: &MetalIrConverter) -> CopyFn<Self>;

    #[doc(hidden)]
    fn release_fn(lib: &MetalIrConverter) -> ReleaseFn<Self>;

    #[doc(hidden)]
    unsafe fn to_info(&self) -> Self::Info;
}

macro_rules! versioned_stage_info {
    ($raw:ty, $info:ty, $stage:literal, $copy:ident, $release:ident, $from_raw:path) => {
        impl sealed::Sealed for $raw {}

        impl VersionedStageInfo for $raw {
            type Info = $info;
            const STAGE: &'static str = $stage;

            fn copy_fn(lib: &MetalIrConverter) -> CopyFn<Self> {
                lib.$copy
            }

            fn release_fn(lib: &MetalIrConverter) -> ReleaseFn<Self> {
                lib.$release
            }

            unsafe fn to_info(&self) -> Self::Info {
                match self.version {
                    ffi::IRReflectionVersion::_1_0 => $from_raw(&self.u_1.info_1_0),
                }
            }
        }
    };
}

versioned_stage_info!(
    ffi::IRVersionedCSInfo,
    ComputeInfo,
    "compute",
    IRShaderReflectionCopyComputeInfo,
    IRShaderReflectionReleaseComputeInfo,
    ComputeInfo::from_raw
);
versioned_stage_info!(
    ffi::IRVersionedVSInfo,
    VertexInfo,
    "vertex",
    IRShaderReflectionCopyVertexInfo,
    IRShaderReflectionReleaseVertexInfo,
    VertexInfo::from_raw
);
versioned_stage_info!(
    ffi::IRVersionedFSInfo,
    FragmentInfo,
    "fragment",
    IRShaderReflectionCopyFragmentInfo,
    IRShaderReflectionReleaseFragmentInfo,
    FragmentInfo::from_raw
);
versioned_stage_info!(
    ffi::IRVersionedGSInfo,
    GeometryInfo,
    "geometry",
    IRShaderReflectionCopyGeometryInfo,
    IRShaderReflectionReleaseGeometryInfo,
    GeometryInfo::from_raw
);
versioned_stage_info!(
    ffi::IRVersionedHSInfo,
    HullInfo,
    "hull",
    IRShaderReflectionCopyHullInfo,
    IRShaderReflectionReleaseHullInfo,
    HullInfo::from_raw
);
versioned_stage_info!(
    ffi::IRVersionedDSInfo,
    DomainInfo,
    "domain",
    IRShaderReflectionCopyDomainInfo,
    IRShaderReflectionReleaseDomainInfo,
    DomainInfo::from_raw
);

/// Stage info copied out of a [`ShaderReflection`], released again on drop.
///
/// Strings inside the raw struct point into the reflection object, which the guard borrows.
pub struct StageInfoGuard<'r, T: VersionedStageInfo> {
    raw: T,
    release: ReleaseFn<T>,
    _reflection: PhantomData<&'r ShaderReflection>,
}

impl<'r, T: VersionedStageInfo> StageInfoGuard<'r, T> {
    fn acquire(reflection: &'r ShaderReflection, version: ReflectionVersion) -> Result<Self> {
        let ffi = reflection.lib.ffi();
        unsafe {
            Self::acquire_with(
                T::copy_fn(ffi),
                T::release_fn(ffi),
                reflection.as_ptr(),
                version,
            )
        }
    }

    /// Copies the stage info with `copy`, to be released with `release` on drop.
    ///
    /// # Safety
    ///
    /// `copy` and `release` must be a matching pair, and both they and `reflection` must stay
    /// valid for `'r`.
    unsafe fn acquire_with(
        copy: CopyFn<T>,
        release: ReleaseFn<T>,
        reflection: *const ffi::IRShaderReflection,
        version: ReflectionVersion,
    ) -> Result<Self> {
        let mut raw = MaybeUninit::<T>::uninit();
        if !copy(reflection, version.to_raw(), raw.as_mut_ptr()) {
            return Err(Error::StageInfoUnavailable {
                stage: T::STAGE,
                version,
            });
        }
        Ok(Self {
            raw: raw.assume_init(),
            release,
            _reflection: PhantomData,
        })
    }

    /// The native struct.
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Copies the info out, including every string it references.
    pub fn to_info(&self) -> T::Info {
        unsafe { self.raw.to_info() }
    }
}

impl<T: VersionedStageInfo> Drop for StageInfoGuard<'_, T> {
    fn drop(&mut self) {
        let released = unsafe { (self.release)(&mut self.raw) };
        if !released {
            log::warn!("Releasing {} stage info failed", T::STAGE);
        }
    }
}

/// A specialization constant a compiled shader reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionConstant {
    pub name: Option<String>,
    pub ty: ffi::IRFunctionConstantType,
}

struct FunctionConstantsGuard<'a> {
    raw: Vec<ffi::IRFunctionConstant>,
    lib: &'a MetalIrConverter,
}

impl Drop for FunctionConstantsGuard<'_> {
    fn drop(&mut self) {
        unsafe {
            (self.lib.IRShaderReflectionReleaseFunctionConstants)(
                self.raw.as_mut_ptr(),
                self.raw.len(),
            );
        }
    }
}

/// Reflection data of a compiled shader.
pub struct ShaderReflection {
    me: NonNull<ffi::IRShaderReflection>,
    lib: IrConverter,
}

impl ShaderReflection {
    /// Creates an empty reflection object, to be filled by
    /// [`Object::copy_reflection`](crate::Object::copy_reflection) or
    /// [`ShaderReflection::deserialize_from`].
    pub fn new(converter: &IrConverter) -> Result<Self> {
        let me = unsafe { (converter.ffi().IRShaderReflectionCreate)() };
        let me = NonNull::new(me).ok_or(Error::NullHandle("IRShaderReflectionCreate"))?;
        Ok(Self {
            me,
            lib: converter.clone(),
        })
    }

    /// Recreates reflection data from [`ShaderReflection::to_json`] output.
    pub fn from_json(converter: &IrConverter, json: &str) -> Result<Self> {
        let mut reflection = Self::new(converter)?;
        reflection.deserialize_from(json)?;
        Ok(reflection)
    }

    pub fn entry_point_function_name(&self) -> Option<&CStr> {
        let name =
            unsafe { (self.lib.ffi().IRShaderReflectionGetEntryPointFunctionName)(self.as_ptr()) };
        (!name.is_null()).then(|| unsafe { CStr::from_ptr(name) })
    }

    pub fn needs_function_constants(&self) -> bool {
        unsafe { (self.lib.ffi().IRShaderReflectionNeedsFunctionConstants)(self.as_ptr()) }
    }

    pub fn function_constants(&self) -> Vec<FunctionConstant> {
        let ffi = self.lib.ffi();
        let count = unsafe { (ffi.IRShaderReflectionGetFunctionConstantCount)(self.as_ptr()) };
        if count == 0 {
            return Vec::new();
        }
        let mut guard = FunctionConstantsGuard {
            raw: Vec::with_capacity(count),
            lib: ffi,
        };
        unsafe {
            (ffi.IRShaderReflectionCopyFunctionConstants)(self.as_ptr(), guard.raw.as_mut_ptr());
            guard.raw.set_len(count);
        }
        guard
            .raw
            .iter()
            .map(|constant| FunctionConstant {
                name: unsafe { owned_string(constant.name) },
                ty: constant.type_,
            })
            .collect()
    }

    /// Copies the native stage info of type `T`, keeping it alive in the returned guard.
    pub fn stage_info<T: VersionedStageInfo>(
        &self,
        version: ReflectionVersion,
    ) -> Result<StageInfoGuard<'_, T>> {
        StageInfoGuard::acquire(self, version)
    }

    fn owned_stage_info<T: VersionedStageInfo>(
        &self,
        version: ReflectionVersion,
    ) -> Result<T::Info> {
        Ok(self.stage_info::<T>(version)?.to_info())
    }

    pub fn compute_info(&self, version: ReflectionVersion) -> Result<ComputeInfo> {
        self.owned_stage_info::<ffi::IRVersionedCSInfo>(version)
    }

    pub fn vertex_info(&self, version: ReflectionVersion) -> Result<VertexInfo> {
        self.owned_stage_info::<ffi::IRVersionedVSInfo>(version)
    }

    pub fn fragment_info(&self, version: ReflectionVersion) -> Result<FragmentInfo> {
        self.owned_stage_info::<ffi::IRVersionedFSInfo>(version)
    }

    pub fn geometry_info(&self, version: ReflectionVersion) -> Result<GeometryInfo> {
        self.owned_stage_info::<ffi::IRVersionedGSInfo>(version)
    }

    pub fn hull_info(&self, version: ReflectionVersion) -> Result<HullInfo> {
        self.owned_stage_info::<ffi::IRVersionedHSInfo>(version)
    }

    pub fn domain_info(&self, version: ReflectionVersion) -> Result<DomainInfo> {
        self.owned_stage_info::<ffi::IRVersionedDSInfo>(version)
    }

    /// Where each resource the shader uses lives in the top-level argument buffer.
    pub fn resource_locations(&self) -> Vec<ResourceLocation> {
        let ffi = self.lib.ffi();
        unsafe {
            let count = (ffi.IRShaderReflectionGetResourceCount)(self.as_ptr());
            collect_locations(count, |out| {
                (ffi.IRShaderReflectionGetResourceLocations)(self.as_ptr(), out);
            })
        }
    }

    /// Serializes the reflection data into the converter's JSON format.
    ///
    /// The library hands the caller a `malloc` allocation, which is copied into the returned
    /// string and freed with the C allocator. On Windows this relies on the library sharing
    /// the universal CRT's heap, as the shipped builds do.
    pub fn to_json(&self) -> Result<String> {
        let ffi = self.lib.ffi();
        let json = unsafe { (ffi.IRShaderReflectionSerialize)(self.me.as_ptr()) };
        if json.is_null() {
            return Err(Error::SerializationFailed("shader reflection"));
        }
        let owned = unsafe { CStr::from_ptr(json) }.to_string_lossy().into_owned();
        unsafe { libc::free(json.cast_mut().cast::<c_void>()) };
        Ok(owned)
    }

    /// Replaces the contents of this object with deserialized JSON.
    pub fn deserialize_from(&mut self, json: &str) -> Result<()> {
        let json = CString::new(json)?;
        unsafe { (self.lib.ffi().IRShaderReflectionDeserialize)(json.as_ptr(), self.me.as_ptr()) };
        Ok(())
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::IRShaderReflection {
        self.me.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut ffi::IRShaderReflection {
        self.me.as_ptr()
    }
}

impl Drop for ShaderReflection {
    fn drop(&mut self) {
        unsafe { (self.lib.ffi().IRShaderReflectionDestroy)(self.me.as_ptr()) }
    }
}

impl std::fmt::Debug for ShaderReflection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderReflection")
            .field("entry_point", &self.entry_point_function_name())
            .finish_non_exhaustive()
    }
}

// SAFETY: reflection objects have no thread affinity. Shared access isn't synchronised by the
// library.
unsafe impl Send for ShaderReflection {}

static_assertions::assert_impl_all!(ShaderReflection: Send);
static_assertions::assert_not_impl_any!(ShaderReflection: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::ptr;

    thread_local! {
        static COPIES: Cell<usize> = const { Cell::new(0) };
        static RELEASES: Cell<usize> = const { Cell::new(0) };
    }

    fn calls() -> (usize, usize) {
        (COPIES.get(), RELEASES.get())
    }

    unsafe extern "C" fn counting_copy<T>(
        _reflection: *const ffi::IRShaderReflection,
        version: ffi::IRReflectionVersion,
        out: *mut T,
    ) -> bool {
        COPIES.set(COPIES.get() + 1);
        // Every versioned struct starts with its version.
        ptr::write_bytes(out, 0, 1);
        out.cast::<ffi::IRReflectionVersion>().write(version);
        true
    }

    unsafe extern "C" fn absent_copy<T>(
        _reflection: *const ffi::IRShaderReflection,
        _version: ffi::IRReflectionVersion,
        _out: *mut T,
    ) -> bool {
        COPIES.set(COPIES.get() + 1);
        false
    }

    unsafe extern "C" fn counting_release<T>(info: *mut T) -> bool {
        // Only count releases of what `counting_copy` wrote.
        let version = info.cast::<ffi::IRReflectionVersion>().read();
        let copied = version == ffi::IRReflectionVersion::_1_0;
        if copied {
            RELEASES.set(RELEASES.get() + 1);
        }
        copied
    }

    fn check_copy_release_pairing<T: VersionedStageInfo>() {
        COPIES.set(0);
        RELEASES.set(0);
        let acquire = |copy: CopyFn<T>| unsafe {
            StageInfoGuard::<T>::acquire_with(
                copy,
                counting_release::<T>,
                ptr::null(),
                ReflectionVersion::V1_0,
            )
        };

        let guard = acquire(counting_copy::<T>);
        assert!(guard.is_ok(), "{} info wasn't copied", T::STAGE);
        assert_eq!(calls(), (1, 0), "{} info released early", T::STAGE);
        drop(guard);
        assert_eq!(calls(), (1, 1), "{} info not released", T::STAGE);

        let missing = acquire(absent_copy::<T>);
        assert!(matches!(
            missing,
            Err(Error::StageInfoUnavailable { stage, .. }) if stage == T::STAGE
        ));
        assert_eq!(calls(), (2, 1), "{} info released without a copy", T::STAGE);
    }

    #[test]
    fn every_stage_info_copy_is_released_once() {
        check_copy_release_pairing::<ffi::IRVersionedVSInfo>();
        check_copy_release_pairing::<ffi::IRVersionedFSInfo>();
        check_copy_release_pairing::<ffi::IRVersionedGSInfo>();
        check_copy_release_pairing::<ffi::IRVersionedHSInfo>();
        check_copy_release_pairing::<ffi::IRVersionedDSInfo>();
        check_copy_release_pairing::<ffi::IRVersionedCSInfo>();
    }

    #[test]
    fn stage_info_converts_strings_and_arrays() {
        let names = [c"POSITION", c"NORMAL"];
        let mut inputs = [
            ffi::IRVertexInputInfo_1_0 {
                name: names[0].as_ptr(),
                attributeIndex: 0,
            },
            ffi::IRVertexInputInfo_1_0 {
                name: names[1].as_ptr(),
                attributeIndex: 3,
            },
        ];
        let raw = ffi::IRVersionedVSInfo {
            version: ffi::IRReflectionVersion::_1_0,
            u_1: ffi::IRVersionedVSInfo_u {
                info_1_0: ffi::IRVSInfo_1_0 {
                    instance_id_index: -1,
                    vertex_id_index: 2,
                    vertex_output_size_in_bytes: 32,
                    needs_draw_params: true,
                    vertex_inputs: inputs.as_mut_ptr(),
                    num_vertex_inputs: inputs.len(),
                },
            },
        };
        let info = unsafe { raw.to_info() };
        assert_eq!(info.instance_id_index, -1);
        assert_eq!(info.vertex_id_index, 2);
        assert!(info.needs_draw_params);
        assert_eq!(
            info.vertex_inputs,
            vec![
                VertexAttribute {
                    name: Some("POSITION".into()),
                    attribute_index: 0,
                },
                VertexAttribute {
                    name: Some("NORMAL".into()),
                    attribute_index: 3,
                },
            ]
        );
    }

    #[test]
    fn empty_arrays_and_null_strings() {
        let raw = ffi::IRVersionedGSInfo {
            version: ffi::IRReflectionVersion::_1_0,
            u_1: ffi::IRVersionedGSInfo_u {
                info_1_0: ffi::IRGSInfo_1_0 {
                    vertex_outputs: ptr::null_mut(),
                    num_vertex_outputs: 4,
                    is_passthrough: false,
                    rt_array_index_record_id: -1,
                    viewport_array_index_record_id: -1,
                    input_primitive: ffi::IRInputPrimitive::Triangle,
                    max_input_primitives_per_mesh_threadgroup: 8,
                    max_payload_size_in_bytes: 1024,
                    instance_count: 1,
                },
            },
        };
        let info = unsafe { raw.to_info() };
        assert!(info.vertex_outputs.is_empty());
        assert_eq!(info.input_primitive, ffi::IRInputPrimitive::Triangle);

        let hull = unsafe {
            HullInfo::from_raw(&ffi::IRHSInfo_1_0 {
                max_patches_per_object_threadgroup: 1,
                max_object_threads_per_patch: 32,
                patch_constants_size: 16,
                patch_constant_function: ptr::null(),
                static_payload_size: 0,
                payload_size_per_patch: 64,
                input_control_point_count: 3,
                output_control_point_count: 3,
                output_control_point_size: 16,
                tessellator_domain: ffi::IRTessellatorDomain::Tri,
                tessellator_partitioning: ffi::IRTessellatorPartitioning::FractionalOdd,
                tessellator_output_primitive: ffi::IRTessellatorOutputPrimitive::TriangleCW,
                tessellation_type_half: false,
                max_tessellation_factor: 64.0,
            })
        };
        assert_eq!(hull.patch_constant_function, None);
        assert_eq!(hull.output_control_point_count, 3);
    }

    #[test]
    fn compute_info_reads_threadgroup_size() {
        let raw = ffi::IRVersionedCSInfo {
            version: ffi::IRReflectionVersion::_1_0,
            u_1: ffi::IRVersionedCSInfo_u {
                info_1_0: ffi::IRCSInfo_1_0 {
                    tg_size: [8, 8, 1],
                },
            },
        };
        assert_eq!(
            unsafe { raw.to_info() },
            ComputeInfo {
                threadgroup_size: [8, 8, 1]
            }
        );
        assert_eq!(<ffi::IRVersionedCSInfo as VersionedStageInfo>::STAGE, "compute");
    }

    #[test]
    fn default_reflection_version() {
        assert_eq!(
            ReflectionVersion::default().to_raw(),
            ffi::IRReflectionVersion::_1_0
        );
    }
}
