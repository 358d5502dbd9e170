// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::CString;
use std::marker::PhantomData;
use std::path::Path;
use std::ptr::NonNull;

use irconverter_sys as ffi;

use crate::{Error, IrConverter, MetalLibBinary, Result, ShaderReflection};

/// DXIL bytecode or compiled Metal IR.
///
/// An object created with [`Object::from_dxil`] doesn't copy its bytecode, and borrows it
/// for `'a`. Copied and compiled objects are `Object<'static>`.
pub struct Object<'a> {
    me: NonNull<ffi::IRObject>,
    lib: IrConverter,
    _bytecode: PhantomData<&'a [u8]>,
}

impl<'a> Object<'a> {
    /// Wraps DXIL bytecode without copying it.
    ///
    /// The bytecode must outlive the object:
    ///
    /// ```compile_fail
    /// # use irconverter::{IrConverter, Object};
    /// # fn wrap(converter: &IrConverter) -> Result<(), irconverter::Error> {
    /// let dxil = std::fs::read("shader.dxil")?;
    /// let input = Object::from_dxil(converter, &dxil)?;
    /// drop(dxil);
    /// input.object_type();
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// Use [`Object::from_dxil_copied`] when it can't.
    pub fn from_dxil(converter: &IrConverter, bytecode: &'a [u8]) -> Result<Self> {
        unsafe { Self::create(converter, bytecode, ffi::IRBytecodeOwnership::None) }
    }

    unsafe fn create(
        converter: &IrConverter,
        bytecode: &[u8],
        ownership: ffi::IRBytecodeOwnership,
    ) -> Result<Self> {
        let me = (converter.ffi().IRObjectCreateFromDXIL)(
            bytecode.as_ptr(),
            bytecode.len(),
            ownership,
        );
        let me = NonNull::new(me).ok_or(Error::NullHandle("IRObjectCreateFromDXIL"))?;
        Ok(Self {
            me,
            lib: converter.clone(),
            _bytecode: PhantomData,
        })
    }

    pub fn object_type(&self) -> ffi::IRObjectType {
        unsafe { (self.lib.ffi().IRObjectGetType)(self.me.as_ptr()) }
    }

    /// The stage this object was compiled for. [`ffi::IRShaderStage::Invalid`] for DXIL.
    pub fn metal_ir_shader_stage(&self) -> ffi::IRShaderStage {
        unsafe { (self.lib.ffi().IRObjectGetMetalIRShaderStage)(self.me.as_ptr()) }
    }

    /// Copies the metallib for `stage` into `binary`.
    ///
    /// Returns `false` if this object holds no bytecode for `stage`.
    pub fn copy_metal_lib_binary(
        &self,
        stage: ffi::IRShaderStage,
        binary: &mut MetalLibBinary,
    ) -> bool {
        unsafe {
            (self.lib.ffi().IRObjectGetMetalLibBinary)(self.me.as_ptr(), stage, binary.as_mut_ptr())
        }
    }

    /// The metallib for `stage`, if this object holds bytecode for it.
    pub fn metal_lib_binary(&self, stage: ffi::IRShaderStage) -> Result<Option<MetalLibBinary>> {
        let mut binary = MetalLibBinary::new(&self.lib)?;
        Ok(self
            .copy_metal_lib_binary(stage, &mut binary)
            .then_some(binary))
    }

    /// Copies the reflection data for `stage` into `reflection`.
    ///
    /// Returns `false` if this object holds no bytecode for `stage`.
    pub fn copy_reflection(
        &self,
        stage: ffi::IRShaderStage,
        reflection: &mut ShaderReflection,
    ) -> bool {
        unsafe {
            (self.lib.ffi().IRObjectGetReflection)(
                self.me.as_ptr(),
                stage,
                reflection.as_mut_ptr(),
            )
        }
    }

    pub fn reflection(&self, stage: ffi::IRShaderStage) -> Result<Option<ShaderReflection>> {
        let mut reflection = ShaderReflection::new(&self.lib)?;
        Ok(self
            .copy_reflection(stage, &mut reflection)
            .then_some(reflection))
    }

    /// Writes the metallib for `stage` to `path`.
    pub fn serialize(&self, path: impl AsRef<Path>, stage: ffi::IRShaderStage) -> Result<()> {
        let path = CString::new(path.as_ref().as_os_str().as_encoded_bytes())?;
        let written =
            unsafe { (self.lib.ffi().IRObjectSerialize)(path.as_ptr(), self.me.as_ptr(), stage) };
        if written {
            Ok(())
        } else {
            Err(Error::SerializationFailed("Metal IR object"))
        }
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::IRObject {
        self.me.as_ptr()
    }
}

impl Object<'static> {
    /// Wraps a copy of DXIL bytecode. The object doesn't borrow `bytecode`.
    pub fn from_dxil_copied(converter: &IrConverter, bytecode: &[u8]) -> Result<Self> {
        unsafe { Self::create(converter, bytecode, ffi::IRBytecodeOwnership::Copy) }
    }

    /// Takes ownership of an object produced by the compiler.
    ///
    /// # Safety
    ///
    /// `me` must be a new object created by `lib` that nothing else owns.
    pub(crate) unsafe fn from_compiled(lib: &IrConverter, me: NonNull<ffi::IRObject>) -> Self {
        Self {
            me,
            lib: lib.clone(),
            _bytecode: PhantomData,
        }
    }
}

impl Drop for Object<'_> {
    fn drop(&mut self) {
        unsafe { (self.lib.ffi().IRObjectDestroy)(self.me.as_ptr()) }
    }
}

impl std::fmt::Debug for Object<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Object")
            .field("me", &self.me)
            .finish_non_exhaustive()
    }
}

// SAFETY: objects have no thread affinity. Shared access isn't synchronised by the library.
unsafe impl Send for Object<'_> {}

static_assertions::assert_impl_all!(Object<'static>: Send);
static_assertions::assert_not_impl_any!(Object<'static>: Sync);
