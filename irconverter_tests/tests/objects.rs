// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{Context, Result};
use irconverter::{
    ffi, ArgumentBufferLayout, Compiler, Error, IrErrorCode, Object, ReflectionVersion,
    ShaderReflection,
};
use irconverter_tests::{compile, compute_setup, ENTRY_POINT};

#[test]
fn copied_dxil_outlives_its_source() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let input = Object::from_dxil_copied(&converter, &dxil)?;
    drop(dxil);
    assert_eq!(input.object_type(), ffi::IRObjectType::DXILBytecode);

    let mut compiler = Compiler::new(&converter)?;
    let output = compiler.compile(ENTRY_POINT, &input)?;
    assert_eq!(output.object_type(), ffi::IRObjectType::MetalIRObject);
    assert_eq!(output.metal_ir_shader_stage(), ffi::IRShaderStage::Compute);
    Ok(())
}

#[test]
fn bytecode_copy_matches_reported_size() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let output = compile(&converter, &dxil)?;
    let metallib = output
        .metal_lib_binary(ffi::IRShaderStage::Compute)?
        .context("No compute bytecode")?;

    let size = metallib.bytecode_size();
    assert!(size > 0);
    let mut buffer = vec![0_u8; size];
    assert_eq!(metallib.copy_bytecode(&mut buffer)?, size);
    assert_eq!(buffer, metallib.byte_code()?);

    let mut short = vec![0_u8; size - 1];
    assert!(matches!(
        metallib.copy_bytecode(&mut short),
        Err(Error::BufferTooSmall { required, provided })
            if required == size && provided == size - 1
    ));
    Ok(())
}

#[test]
fn missing_stage_yields_none() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let output = compile(&converter, &dxil)?;
    assert!(output.metal_lib_binary(ffi::IRShaderStage::Vertex)?.is_none());
    Ok(())
}

#[test]
fn serialized_file_matches_bytecode() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let output = compile(&converter, &dxil)?;
    let metallib = output
        .metal_lib_binary(ffi::IRShaderStage::Compute)?
        .context("No compute bytecode")?;

    let dir = std::env::temp_dir();
    let pid = std::process::id();
    let object_path = dir.join(format!("irconverter_tests_{pid}_object.metallib"));
    let binary_path = dir.join(format!("irconverter_tests_{pid}_binary.metallib"));
    output.serialize(&object_path, ffi::IRShaderStage::Compute)?;
    metallib.write_to_file(&binary_path)?;

    let expected = metallib.byte_code()?;
    let from_object = std::fs::read(&object_path)?;
    let from_binary = std::fs::read(&binary_path)?;
    std::fs::remove_file(&object_path)?;
    std::fs::remove_file(&binary_path)?;
    assert_eq!(from_object, expected);
    assert_eq!(from_binary, expected);
    Ok(())
}

#[test]
fn reflection_round_trips_through_json() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let output = compile(&converter, &dxil)?;
    let reflection = output
        .reflection(ffi::IRShaderStage::Compute)?
        .context("No compute reflection")?;
    let entry_point = reflection
        .entry_point_function_name()
        .context("No entry point name")?
        .to_owned();
    let info = reflection.compute_info(ReflectionVersion::V1_0)?;
    assert!(info.threadgroup_size.iter().all(|size| *size > 0));

    let json = reflection.to_json()?;
    let restored = ShaderReflection::from_json(&converter, &json)?;
    assert_eq!(
        restored.entry_point_function_name(),
        Some(entry_point.as_c_str())
    );
    assert_eq!(restored.resource_locations(), reflection.resource_locations());
    Ok(())
}

#[test]
fn reflection_describes_the_argument_buffer() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let output = compile(&converter, &dxil)?;
    let reflection = output
        .reflection(ffi::IRShaderStage::Compute)?
        .context("No compute reflection")?;
    let locations = reflection.resource_locations();
    let layout = ArgumentBufferLayout::from_locations(&locations);
    for location in &locations {
        assert!(location.end_offset() <= layout.size_in_bytes());
        assert!(layout
            .location(location.resource_type, location.space, location.slot)
            .is_some());
    }
    Ok(())
}

#[test]
fn wrong_stage_info_is_unavailable() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let output = compile(&converter, &dxil)?;
    let reflection = output
        .reflection(ffi::IRShaderStage::Compute)?
        .context("No compute reflection")?;
    assert!(matches!(
        reflection.vertex_info(ReflectionVersion::V1_0),
        Err(Error::StageInfoUnavailable { stage: "vertex", .. })
    ));
    Ok(())
}

#[test]
fn one_compiler_per_thread() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let sizes = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| -> Result<usize> {
                    let output = compile(&converter, &dxil)?;
                    let metallib = output
                        .metal_lib_binary(ffi::IRShaderStage::Compute)?
                        .context("No compute bytecode")?;
                    Ok(metallib.bytecode_size())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Result<Vec<_>>>()
    })?;
    assert!(sizes.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}

#[test]
fn unknown_entry_point_hands_back_the_error_object() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let input = Object::from_dxil(&converter, &dxil)?;
    let mut compiler = Compiler::new(&converter)?;

    let Err(error) = compiler.try_alloc_compile_and_link(&[c"no_such_entry_point"], &input)?
    else {
        anyhow::bail!("Compiled an entry point the shader doesn't have");
    };
    assert_ne!(error.code(), IrErrorCode::NoError);
    assert_eq!(error.code(), IrErrorCode::from_raw(error.raw_code()));
    // Readable for as long as the error lives; null when the code carries no payload.
    let _payload = error.payload();
    let code = error.code();
    assert!(matches!(
        error.into_error("Compilation"),
        Error::Converter { code: c, context: "Compilation" } if c == code
    ));

    // The compiler stays usable after a failure.
    let output = compiler.compile(ENTRY_POINT, &input)?;
    assert_eq!(output.metal_ir_shader_stage(), ffi::IRShaderStage::Compute);
    Ok(())
}

#[test]
fn compiling_nothing_is_rejected() -> Result<()> {
    let Some((converter, dxil)) = compute_setup()? else {
        return Ok(());
    };
    let input = Object::from_dxil(&converter, &dxil)?;
    let mut compiler = Compiler::new(&converter)?;
    assert!(matches!(
        compiler.alloc_compile_and_link(&[], &input),
        Err(Error::NoEntryPoints)
    ));
    Ok(())
}
