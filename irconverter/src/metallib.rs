// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::CString;
use std::path::Path;
use std::ptr::{self, NonNull};

use irconverter_sys as ffi;

use crate::{Compiler, Error, IrConverter, Result, ShaderReflection};

/// The most elements an [`InputLayoutDescriptor`] can hold.
pub const MAX_INPUT_ELEMENTS: usize = 31;

/// Compiled bytecode of a single shader stage.
pub struct MetalLibBinary {
    me: NonNull<ffi::IRMetalLibBinary>,
    lib: IrConverter,
}

impl MetalLibBinary {
    /// Creates an empty binary.
    pub fn new(converter: &IrConverter) -> Result<Self> {
        let me = unsafe { (converter.ffi().IRMetalLibBinaryCreate)() };
        let me = NonNull::new(me).ok_or(Error::NullHandle("IRMetalLibBinaryCreate"))?;
        Ok(Self {
            me,
            lib: converter.clone(),
        })
    }

    pub fn bytecode_size(&self) -> usize {
        unsafe { (self.lib.ffi().IRMetalLibGetBytecodeSize)(self.me.as_ptr()) }
    }

    /// Copies the bytecode to the start of `out`, returning the number of bytes written.
    pub fn copy_bytecode(&self, out: &mut [u8]) -> Result<usize> {
        let required = self.bytecode_size();
        if out.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: out.len(),
            });
        }
        if required == 0 {
            return Ok(0);
        }
        Ok(unsafe { (self.lib.ffi().IRMetalLibGetBytecode)(self.me.as_ptr(), out.as_mut_ptr()) })
    }

    /// The bytecode, ready to be loaded as a Metal library.
    pub fn byte_code(&self) -> Result<Vec<u8>> {
        let expected = self.bytecode_size();
        let mut bytes = vec![0; expected];
        let written = self.copy_bytecode(&mut bytes)?;
        if written != expected {
            return Err(Error::BytecodeSizeMismatch { expected, written });
        }
        Ok(bytes)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.byte_code()?)?;
        Ok(())
    }

    /// Synthesizes a separate stage-in function feeding the vertex shader described by
    /// `reflection` from `layout`.
    ///
    /// `compiler` should use [`ffi::IRStageInCodeGenerationMode::UseSeparateStageInFunction`].
    pub fn synthesize_stage_in_function(
        compiler: &Compiler<'_>,
        reflection: &ShaderReflection,
        layout: &InputLayoutDescriptor,
    ) -> Result<Self> {
        let layout = layout.to_raw()?;
        let mut binary = Self::new(compiler.converter())?;
        let synthesized = unsafe {
            (compiler.converter().ffi().IRMetalLibSynthesizeStageInFunction)(
                compiler.as_ptr(),
                reflection.as_ptr(),
                layout.as_raw(),
                binary.as_mut_ptr(),
            )
        };
        if synthesized {
            Ok(binary)
        } else {
            Err(Error::SynthesisFailed("stage-in function"))
        }
    }

    /// Synthesizes the wrapper that runs intersection shaders of the compiler's hit groups.
    pub fn synthesize_intersection_wrapper_function(compiler: &Compiler<'_>) -> Result<Self> {
        let synthesize = compiler
            .converter()
            .ffi()
            .IRMetalLibSynthesizeIntersectionWrapperFunction
            .ok_or(Error::MissingSymbol(
                "IRMetalLibSynthesizeIntersectionWrapperFunction",
            ))?;
        let mut binary = Self::new(compiler.converter())?;
        if unsafe { synthesize(compiler.as_ptr(), binary.as_mut_ptr()) } {
            Ok(binary)
        } else {
            Err(Error::SynthesisFailed("intersection wrapper function"))
        }
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut ffi::IRMetalLibBinary {
        self.me.as_ptr()
    }
}

impl Drop for MetalLibBinary {
    fn drop(&mut self) {
        unsafe { (self.lib.ffi().IRMetalLibBinaryDestroy)(self.me.as_ptr()) }
    }
}

impl std::fmt::Debug for MetalLibBinary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetalLibBinary")
            .field("bytecode_size", &self.bytecode_size())
            .finish_non_exhaustive()
    }
}

// SAFETY: binaries have no thread affinity. Shared access isn't synchronised by the library.
unsafe impl Send for MetalLibBinary {}

static_assertions::assert_impl_all!(MetalLibBinary: Send);
static_assertions::assert_not_impl_any!(MetalLibBinary: Sync);

/// One vertex attribute of an [`InputLayoutDescriptor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputElement {
    pub semantic_name: String,
    pub semantic_index: u32,
    pub format: ffi::IRFormat,
    pub input_slot: u32,
    pub aligned_byte_offset: u32,
    pub input_slot_class: ffi::IRInputClassification,
    pub instance_data_step_rate: u32,
}

impl InputElement {
    /// A per-vertex element.
    pub fn per_vertex(
        semantic_name: impl Into<String>,
        semantic_index: u32,
        format: ffi::IRFormat,
        input_slot: u32,
        aligned_byte_offset: u32,
    ) -> Self {
        Self {
            semantic_name: semantic_name.into(),
            semantic_index,
            format,
            input_slot,
            aligned_byte_offset,
            input_slot_class: ffi::IRInputClassification::PerVertexData,
            instance_data_step_rate: 0,
        }
    }
}

/// The vertex input layout a stage-in function fetches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputLayoutDescriptor {
    pub elements: Vec<InputElement>,
}

const UNUSED_ELEMENT: ffi::IRInputElementDescriptor1 = ffi::IRInputElementDescriptor1 {
    semanticIndex: 0,
    format: ffi::IRFormat::Unknown,
    inputSlot: 0,
    alignedByteOffset: 0,
    inputSlotClass: ffi::IRInputClassification::PerVertexData,
    instanceDataStepRate: 0,
};

impl InputLayoutDescriptor {
    pub(crate) fn to_raw(&self) -> Result<RawInputLayoutDescriptor> {
        if self.elements.len() > MAX_INPUT_ELEMENTS {
            return Err(Error::TooManyInputElements(self.elements.len()));
        }
        let names = self
            .elements
            .iter()
            .map(|element| CString::new(element.semantic_name.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut desc = ffi::IRInputLayoutDescriptor1 {
            semanticNames: [ptr::null(); MAX_INPUT_ELEMENTS],
            inputElementDescs: [UNUSED_ELEMENT; MAX_INPUT_ELEMENTS],
            numElements: self.elements.len() as u32,
        };
        for (i, (element, name)) in self.elements.iter().zip(&names).enumerate() {
            desc.semanticNames[i] = name.as_ptr();
            desc.inputElementDescs[i] = ffi::IRInputElementDescriptor1 {
                semanticIndex: element.semantic_index,
                format: element.format,
                inputSlot: element.input_slot,
                alignedByteOffset: element.aligned_byte_offset,
                inputSlotClass: element.input_slot_class,
                instanceDataStepRate: element.instance_data_step_rate,
            };
        }
        Ok(RawInputLayoutDescriptor {
            raw: Box::new(ffi::IRVersionedInputLayoutDescriptor {
                version: ffi::IRInputLayoutDescriptorVersion::_1,
                u_1: ffi::IRVersionedInputLayoutDescriptor_u { desc_1_0: desc },
            }),
            _names: names,
        })
    }
}

/// A native input layout with the semantic name strings it points to.
pub(crate) struct RawInputLayoutDescriptor {
    raw: Box<ffi::IRVersionedInputLayoutDescriptor>,
    _names: Vec<CString>,
}

impl RawInputLayoutDescriptor {
    pub(crate) fn as_raw(&self) -> &ffi::IRVersionedInputLayoutDescriptor {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn position() -> InputElement {
        InputElement::per_vertex("POSITION", 0, ffi::IRFormat::R32G32B32Float, 0, 0)
    }

    #[test]
    fn lowers_elements_in_order() {
        let layout = InputLayoutDescriptor {
            elements: vec![
                position(),
                InputElement {
                    semantic_name: "TEXCOORD".into(),
                    semantic_index: 1,
                    format: ffi::IRFormat::R32G32Float,
                    input_slot: 1,
                    aligned_byte_offset: 12,
                    input_slot_class: ffi::IRInputClassification::PerInstanceData,
                    instance_data_step_rate: 1,
                },
            ],
        };
        let raw = layout.to_raw().unwrap();
        assert_eq!(raw.as_raw().version, ffi::IRInputLayoutDescriptorVersion::_1);
        let desc = unsafe { &raw.as_raw().u_1.desc_1_0 };
        assert_eq!(desc.numElements, 2);

        let name = unsafe { CStr::from_ptr(desc.semanticNames[1]) };
        assert_eq!(name.to_str().unwrap(), "TEXCOORD");
        let texcoord = desc.inputElementDescs[1];
        assert_eq!(texcoord.semanticIndex, 1);
        assert_eq!(texcoord.format, ffi::IRFormat::R32G32Float);
        assert_eq!(texcoord.alignedByteOffset, 12);
        assert_eq!(
            texcoord.inputSlotClass,
            ffi::IRInputClassification::PerInstanceData
        );
        assert!(desc.semanticNames[2].is_null());
        assert_eq!(desc.inputElementDescs[2].format, ffi::IRFormat::Unknown);
    }

    #[test]
    fn accepts_the_maximum() {
        let layout = InputLayoutDescriptor {
            elements: vec![position(); MAX_INPUT_ELEMENTS],
        };
        let raw = layout.to_raw().unwrap();
        let desc = unsafe { &raw.as_raw().u_1.desc_1_0 };
        assert_eq!(desc.numElements as usize, MAX_INPUT_ELEMENTS);
        assert!(desc.semanticNames.iter().all(|name| !name.is_null()));
    }

    #[test]
    fn rejects_too_many_elements() {
        let layout = InputLayoutDescriptor {
            elements: vec![position(); MAX_INPUT_ELEMENTS + 1],
        };
        assert!(matches!(
            layout.to_raw(),
            Err(Error::TooManyInputElements(32))
        ));
    }

    #[test]
    fn rejects_interior_nul() {
        let layout = InputLayoutDescriptor {
            elements: vec![InputElement::per_vertex(
                "POS\0ITION",
                0,
                ffi::IRFormat::R32G32B32Float,
                0,
                0,
            )],
        };
        assert!(matches!(layout.to_raw(), Err(Error::InvalidString(_))));
    }
}
