// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converts a DXIL shader into a `.metallib`, optionally writing its reflection data as JSON.
//!
//! ```sh
//! IRCONVERTER_LIBRARY_PATH=/usr/local/lib/libmetalirconverter.dylib \
//!     cargo run -p convert_dxil -- shader.dxil -o shader.metallib --reflection shader.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use irconverter::{
    ffi, Compiler, IrConverter, Object, ReflectionVersion, RootConstants, RootParameter1,
    RootParameterKind1, RootSignature, RootSignatureDescriptor1, StaticSamplerDescriptor,
    VersionedRootSignatureDescriptor,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Convert DXIL bytecode to a Metal library
struct Args {
    /// The DXIL file to convert
    input: PathBuf,
    /// Where to write the metallib; defaults to the input path with a `metallib` extension
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Name of the entry point to compile
    #[arg(long, default_value = "main")]
    entry_point: String,
    /// Stage of the entry point
    #[arg(long, value_enum, default_value_t = Stage::Compute)]
    stage: Stage,
    /// Also write the reflection data as JSON to this path
    #[arg(long)]
    reflection: Option<PathBuf>,
    /// Path to `libmetalirconverter`; defaults to `IRCONVERTER_LIBRARY_PATH`
    #[arg(long)]
    library: Option<PathBuf>,
    /// Compile against a bindless root signature with directly indexed heaps
    #[arg(long)]
    bindless: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Stage {
    Vertex,
    Fragment,
    Hull,
    Domain,
    Geometry,
    Mesh,
    Amplification,
    Compute,
}

impl From<Stage> for ffi::IRShaderStage {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Vertex => Self::Vertex,
            Stage::Fragment => Self::Fragment,
            Stage::Hull => Self::Hull,
            Stage::Domain => Self::Domain,
            Stage::Geometry => Self::Geometry,
            Stage::Mesh => Self::Mesh,
            Stage::Amplification => Self::Amplification,
            Stage::Compute => Self::Compute,
        }
    }
}

/// Push constants in space 0, and one static sampler per common filter and address mode.
fn bindless_root_signature() -> VersionedRootSignatureDescriptor {
    let constants = RootParameter1 {
        kind: RootParameterKind1::Constants(RootConstants {
            shader_register: 0,
            register_space: 0,
            num_32bit_values: 8,
        }),
        visibility: ffi::IRShaderVisibility::All,
    };
    let samplers = [
        (ffi::IRFilter::MinMagMipPoint, ffi::IRTextureAddressMode::Wrap),
        (ffi::IRFilter::MinMagMipPoint, ffi::IRTextureAddressMode::Clamp),
        (ffi::IRFilter::MinMagMipLinear, ffi::IRTextureAddressMode::Wrap),
        (ffi::IRFilter::MinMagMipLinear, ffi::IRTextureAddressMode::Clamp),
        (ffi::IRFilter::MinMagMipLinear, ffi::IRTextureAddressMode::Border),
    ];
    let static_samplers = samplers
        .into_iter()
        .zip(0..)
        .map(|((filter, address_mode), register)| {
            StaticSamplerDescriptor::new(register, 0)
                .with_filter(filter)
                .with_address_mode(address_mode)
                .with_comparison(ffi::IRComparisonFunction::Never)
        })
        .collect();
    RootSignatureDescriptor1 {
        parameters: vec![constants],
        static_samplers,
        flags: ffi::IRRootSignatureFlags::CBVSRVUAVHeapDirectlyIndexed
            | ffi::IRRootSignatureFlags::SamplerHeapDirectlyIndexed,
    }
    .into()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let stage = ffi::IRShaderStage::from(args.stage);

    let converter = match &args.library {
        Some(path) => IrConverter::new(path),
        None => IrConverter::from_env(),
    }
    .context("Couldn't open the Metal shader converter")?;

    let dxil = std::fs::read(&args.input)
        .with_context(|| format!("Couldn't read {}", args.input.display()))?;
    let input = Object::from_dxil(&converter, &dxil)?;

    let root_signature = if args.bindless {
        Some(RootSignature::new(&converter, &bindless_root_signature())?)
    } else {
        None
    };
    let mut compiler = Compiler::new(&converter)?;
    if let Some(root_signature) = &root_signature {
        compiler.set_global_root_signature(root_signature);
    }
    let output = compiler
        .compile(&args.entry_point, &input)
        .with_context(|| format!("Couldn't compile `{}`", args.entry_point))?;
    if output.metal_ir_shader_stage() != stage {
        log::warn!(
            "`{}` compiled to a {:?} shader, but {stage:?} was requested",
            args.entry_point,
            output.metal_ir_shader_stage()
        );
    }

    let Some(metallib) = output.metal_lib_binary(stage)? else {
        bail!("The converted object holds no {stage:?} bytecode");
    };
    let output_path = args
        .output
        .unwrap_or_else(|| args.input.with_extension("metallib"));
    metallib
        .write_to_file(&output_path)
        .with_context(|| format!("Couldn't write {}", output_path.display()))?;
    log::info!(
        "Wrote {} bytes to {}",
        metallib.bytecode_size(),
        output_path.display()
    );

    if let Some(path) = &args.reflection {
        let Some(reflection) = output.reflection(stage)? else {
            bail!("The converted object holds no {stage:?} reflection data");
        };
        if stage == ffi::IRShaderStage::Compute {
            let info = reflection.compute_info(ReflectionVersion::V1_0)?;
            log::info!("Threadgroup size: {:?}", info.threadgroup_size);
        }
        for location in reflection.resource_locations() {
            log::debug!("{location:?}");
        }
        std::fs::write(path, reflection.to_json()?)
            .with_context(|| format!("Couldn't write {}", path.display()))?;
    }
    Ok(())
}
