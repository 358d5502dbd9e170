// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::{c_char, CStr, CString};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use irconverter_sys as ffi;

use crate::error::take_handle_or_error;
use crate::{Error, IrConverter, IrError, Object, Result, RootSignature};

/// Settings applied to a [`Compiler`].
///
/// `None` leaves the library default in place. The dual-source blending and depth feedback
/// configurations only apply to the next compilation, after which the library resets them
/// to `DecideAtRuntime`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerOptions {
    pub validation_flags: Option<ffi::IRCompilerValidationFlags>,
    pub compatibility_flags: Option<ffi::IRCompatibilityFlags>,
    pub minimum_gpu_family: Option<ffi::IRGPUFamily>,
    /// Operating system and version string, such as `"14.0.0"`.
    pub minimum_deployment_target: Option<(ffi::IROperatingSystem, String)>,
    pub input_topology: Option<ffi::IRInputTopology>,
    pub stage_in_generation_mode: Option<ffi::IRStageInCodeGenerationMode>,
    pub geometry_and_tessellation_emulation: Option<bool>,
    /// Name given to the emitted entry point.
    pub entry_point_name: Option<String>,
    pub dual_source_blending: ffi::IRDualSourceBlendingConfiguration,
    pub depth_feedback: ffi::IRDepthFeedbackConfiguration,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            validation_flags: None,
            compatibility_flags: None,
            minimum_gpu_family: None,
            minimum_deployment_target: None,
            input_topology: None,
            stage_in_generation_mode: None,
            geometry_and_tessellation_emulation: None,
            entry_point_name: None,
            dual_source_blending: ffi::IRDualSourceBlendingConfiguration::DecideAtRuntime,
            depth_feedback: ffi::IRDepthFeedbackConfiguration::DecideAtRuntime,
        }
    }
}

impl CompilerOptions {
    fn reset_after_compile(&mut self) {
        self.dual_source_blending = ffi::IRDualSourceBlendingConfiguration::DecideAtRuntime;
        self.depth_feedback = ffi::IRDepthFeedbackConfiguration::DecideAtRuntime;
    }
}

/// Translates DXIL objects into Metal IR.
///
/// A compiler that uses a global root signature borrows it for `'rs`.
pub struct Compiler<'rs> {
    me: NonNull<ffi::IRCompiler>,
    lib: IrConverter,
    options: CompilerOptions,
    has_global_root_signature: bool,
    // The converter may hold on to these pointers.
    entry_point_name: Option<CString>,
    deployment_version: Option<CString>,
    _root_signature: PhantomData<&'rs RootSignature>,
}

impl<'rs> Compiler<'rs> {
    pub fn new(converter: &IrConverter) -> Result<Self> {
        let me = unsafe { (converter.ffi().IRCompilerCreate)() };
        let me = NonNull::new(me).ok_or(Error::NullHandle("IRCompilerCreate"))?;
        Ok(Self {
            me,
            lib: converter.clone(),
            options: CompilerOptions::default(),
            has_global_root_signature: false,
            entry_point_name: None,
            deployment_version: None,
            _root_signature: PhantomData,
        })
    }

    /// Creates a compiler with every setting in `options` applied.
    pub fn with_options(converter: &IrConverter, options: &CompilerOptions) -> Result<Self> {
        let mut compiler = Self::new(converter)?;
        compiler.apply_options(options)?;
        Ok(compiler)
    }

    pub fn apply_options(&mut self, options: &CompilerOptions) -> Result<()> {
        if let Some(flags) = options.validation_flags {
            self.set_validation_flags(flags);
        }
        if let Some(flags) = options.compatibility_flags {
            self.set_compatibility_flags(flags);
        }
        if let Some(family) = options.minimum_gpu_family {
            self.set_minimum_gpu_family(family);
        }
        if let Some((os, version)) = &options.minimum_deployment_target {
            self.set_minimum_deployment_target(*os, version)?;
        }
        if let Some(topology) = options.input_topology {
            self.set_input_topology(topology);
        }
        if let Some(mode) = options.stage_in_generation_mode {
            self.set_stage_in_generation_mode(mode);
        }
        if let Some(enable) = options.geometry_and_tessellation_emulation {
            self.enable_geometry_and_tessellation_emulation(enable);
        }
        if let Some(name) = &options.entry_point_name {
            self.set_entry_point_name(name)?;
        }
        self.set_dual_source_blending_configuration(options.dual_source_blending);
        self.set_depth_feedback_configuration(options.depth_feedback);
        Ok(())
    }

    /// The settings currently held by the native compiler, as far as they were set through
    /// this value.
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn set_validation_flags(&mut self, flags: ffi::IRCompilerValidationFlags) {
        unsafe { (self.lib.ffi().IRCompilerSetValidationFlags)(self.me.as_ptr(), flags) };
        self.options.validation_flags = Some(flags);
    }

    pub fn set_compatibility_flags(&mut self, flags: ffi::IRCompatibilityFlags) {
        unsafe { (self.lib.ffi().IRCompilerSetCompatibilityFlags)(self.me.as_ptr(), flags) };
        self.options.compatibility_flags = Some(flags);
    }

    pub fn set_minimum_gpu_family(&mut self, family: ffi::IRGPUFamily) {
        unsafe { (self.lib.ffi().IRCompilerSetMinimumGPUFamily)(self.me.as_ptr(), family) };
        self.options.minimum_gpu_family = Some(family);
    }

    /// Targets `os` at `version` (such as `"14.0.0"`) or newer.
    ///
    /// A target newer than the installed SDK makes compilation fail with
    /// [`IrErrorCode::UnableToLinkModule`](crate::IrErrorCode::UnableToLinkModule).
    pub fn set_minimum_deployment_target(
        &mut self,
        os: ffi::IROperatingSystem,
        version: &str,
    ) -> Result<()> {
        let raw = CString::new(version)?;
        unsafe {
            (self.lib.ffi().IRCompilerSetMinimumDeploymentTarget)(
                self.me.as_ptr(),
                os,
                raw.as_ptr(),
            );
        }
        self.deployment_version = Some(raw);
        self.options.minimum_deployment_target = Some((os, version.to_owned()));
        Ok(())
    }

    /// Makes compiled shaders use the top-level argument buffer layout of `root_signature`.
    pub fn set_global_root_signature(&mut self, root_signature: &'rs RootSignature) {
        unsafe {
            (self.lib.ffi().IRCompilerSetGlobalRootSignature)(
                self.me.as_ptr(),
                root_signature.as_ptr(),
            );
        }
        self.has_global_root_signature = true;
    }

    /// Goes back to a linear resource layout.
    pub fn clear_global_root_signature(&mut self) {
        unsafe {
            (self.lib.ffi().IRCompilerSetGlobalRootSignature)(self.me.as_ptr(), ptr::null());
        }
        self.has_global_root_signature = false;
    }

    pub fn has_global_root_signature(&self) -> bool {
        self.has_global_root_signature
    }

    pub fn set_input_topology(&mut self, topology: ffi::IRInputTopology) {
        unsafe { (self.lib.ffi().IRCompilerSetInputTopology)(self.me.as_ptr(), topology) };
        self.options.input_topology = Some(topology);
    }

    pub fn set_stage_in_generation_mode(&mut self, mode: ffi::IRStageInCodeGenerationMode) {
        unsafe { (self.lib.ffi().IRCompilerSetStageInGenerationMode)(self.me.as_ptr(), mode) };
        self.options.stage_in_generation_mode = Some(mode);
    }

    /// Applies to the next compilation only.
    pub fn set_dual_source_blending_configuration(
        &mut self,
        configuration: ffi::IRDualSourceBlendingConfiguration,
    ) {
        unsafe {
            (self.lib.ffi().IRCompilerSetDualSourceBlendingConfiguration)(
                self.me.as_ptr(),
                configuration,
            );
        }
        self.options.dual_source_blending = configuration;
    }

    /// Applies to the next compilation only.
    pub fn set_depth_feedback_configuration(
        &mut self,
        configuration: ffi::IRDepthFeedbackConfiguration,
    ) {
        unsafe {
            (self.lib.ffi().IRCompilerSetDepthFeedbackConfiguration)(
                self.me.as_ptr(),
                configuration,
            );
        }
        self.options.depth_feedback = configuration;
    }

    pub fn enable_geometry_and_tessellation_emulation(&mut self, enable: bool) {
        unsafe {
            (self.lib.ffi().IRCompilerEnableGeometryAndTessellationEmulation)(
                self.me.as_ptr(),
                enable,
            );
        }
        self.options.geometry_and_tessellation_emulation = Some(enable);
    }

    /// Renames the emitted entry point.
    pub fn set_entry_point_name(&mut self, name: &str) -> Result<()> {
        let raw = CString::new(name)?;
        unsafe { (self.lib.ffi().IRCompilerSetEntryPointName)(self.me.as_ptr(), raw.as_ptr()) };
        self.entry_point_name = Some(raw);
        self.options.entry_point_name = Some(name.to_owned());
        Ok(())
    }

    /// Compiles and links `entry_points` of `input` into a new Metal IR object.
    ///
    /// Several entry points produce a ray tracing module.
    pub fn alloc_compile_and_link(
        &mut self,
        entry_points: &[&CStr],
        input: &Object<'_>,
    ) -> Result<Object<'static>> {
        self.try_alloc_compile_and_link(entry_points, input)?
            .map_err(|error| error.into_error("Compilation"))
    }

    /// Like [`alloc_compile_and_link`](Self::alloc_compile_and_link), but returns the error
    /// object reported by the converter so that its [payload](IrError::payload) can be
    /// inspected.
    pub fn try_alloc_compile_and_link(
        &mut self,
        entry_points: &[&CStr],
        input: &Object<'_>,
    ) -> Result<Result<Object<'static>, IrError>> {
        if entry_points.is_empty() {
            return Err(Error::NoEntryPoints);
        }
        let names: Vec<*const c_char> = entry_points.iter().map(|name| name.as_ptr()).collect();
        log::debug!("Compiling {entry_points:?}");
        let mut error = ptr::null_mut();
        let output = unsafe {
            (self.lib.ffi().IRCompilerAllocCompileAndLink)(
                self.me.as_ptr(),
                names.as_ptr(),
                names.len(),
                input.as_ptr(),
                &mut error,
            )
        };
        self.options.reset_after_compile();
        let output = unsafe {
            take_handle_or_error(
                &self.lib,
                output,
                error,
                "Compilation",
                "IRCompilerAllocCompileAndLink",
            )?
        };
        Ok(output.map(|output| unsafe { Object::from_compiled(&self.lib, output) }))
    }

    /// Compiles a single entry point.
    pub fn compile(&mut self, entry_point: &str, input: &Object<'_>) -> Result<Object<'static>> {
        let entry_point = CString::new(entry_point)?;
        self.alloc_compile_and_link(&[entry_point.as_c_str()], input)
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::IRCompiler {
        self.me.as_ptr()
    }

    pub(crate) fn converter(&self) -> &IrConverter {
        &self.lib
    }
}

impl Drop for Compiler<'_> {
    fn drop(&mut self) {
        unsafe { (self.lib.ffi().IRCompilerDestroy)(self.me.as_ptr()) }
    }
}

impl std::fmt::Debug for Compiler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler")
            .field("options", &self.options)
            .field("has_global_root_signature", &self.has_global_root_signature)
            .finish_non_exhaustive()
    }
}

// A compiler reads its global root signature while compiling, so it stays on the thread
// that owns the root signature.
static_assertions::assert_not_impl_any!(Compiler<'static>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_only_touches_per_compilation_settings() {
        let mut options = CompilerOptions {
            validation_flags: Some(ffi::IRCompilerValidationFlags::All),
            compatibility_flags: Some(
                ffi::IRCompatibilityFlags::BoundsCheck | ffi::IRCompatibilityFlags::SamplerLODBias,
            ),
            minimum_gpu_family: Some(ffi::IRGPUFamily::Apple7),
            minimum_deployment_target: Some((ffi::IROperatingSystem::macOS, "14.0.0".into())),
            input_topology: Some(ffi::IRInputTopology::Triangle),
            stage_in_generation_mode: Some(
                ffi::IRStageInCodeGenerationMode::UseSeparateStageInFunction,
            ),
            geometry_and_tessellation_emulation: Some(true),
            entry_point_name: Some("renamed".into()),
            dual_source_blending: ffi::IRDualSourceBlendingConfiguration::ForceEnabled,
            depth_feedback: ffi::IRDepthFeedbackConfiguration::ForceDisabled,
        };
        let before = options.clone();
        options.reset_after_compile();

        assert_eq!(
            options.dual_source_blending,
            ffi::IRDualSourceBlendingConfiguration::DecideAtRuntime
        );
        assert_eq!(
            options.depth_feedback,
            ffi::IRDepthFeedbackConfiguration::DecideAtRuntime
        );
        assert_eq!(
            options,
            CompilerOptions {
                dual_source_blending: ffi::IRDualSourceBlendingConfiguration::DecideAtRuntime,
                depth_feedback: ffi::IRDepthFeedbackConfiguration::DecideAtRuntime,
                ..before
            }
        );
    }

    #[test]
    fn default_options_leave_library_defaults() {
        let options = CompilerOptions::default();
        assert!(options.validation_flags.is_none());
        assert!(options.entry_point_name.is_none());
        let mut reset = options.clone();
        reset.reset_after_compile();
        assert_eq!(reset, options);
    }
}
