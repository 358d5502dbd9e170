// Copyright 2024 the IR Converter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regenerates the type definitions of `irconverter_sys` from the installed Metal shader
//! converter headers.
//!
//! The library is loaded at runtime, so only types and constants are generated. The entry
//! point table in `irconverter_sys/src/library.rs` is maintained by hand.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bindgen::callbacks::{EnumVariantValue, ParseCallbacks};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Regenerate the `irconverter_sys` bindings
struct Args {
    /// Directory containing `metal_irconverter/metal_irconverter.h`
    #[arg(long, default_value = "/usr/local/include")]
    sdk_include: PathBuf,
    /// Directory to write the generated files to
    #[arg(long, default_value = "irconverter_sys/src")]
    out: PathBuf,
    /// Also generate bindings for the runtime header, to check the hand-written
    /// `irconverter_runtime` records against. They aren't part of any crate.
    #[arg(long)]
    runtime: bool,
    /// Where `--runtime` writes its bindings
    #[arg(long, default_value = "target/irconverter_runtime_bindings.rs")]
    runtime_out: PathBuf,
}

/// Strips the enum name from C enum variants, and names anonymous unions after their
/// parent struct.
#[derive(Debug)]
struct Renamer;

impl ParseCallbacks for Renamer {
    fn enum_variant_name(
        &self,
        enum_name: Option<&str>,
        original_variant_name: &str,
        _variant_value: EnumVariantValue,
    ) -> Option<String> {
        let enum_name = enum_name?.trim_start_matches("enum ");
        strip_variant_prefix(enum_name, original_variant_name)
    }

    fn item_name(&self, original_item_name: &str) -> Option<String> {
        original_item_name
            .strip_suffix("__bindgen_ty_1")
            .map(|parent| format!("{parent}_u"))
    }
}

/// `IRShaderStageVertex` becomes `Vertex`, `IRCompatibilityFlagBoundsCheck` (of
/// `IRCompatibilityFlags`) becomes `BoundsCheck`, and `IRRootSignatureVersion_1_1` becomes
/// `_1_1`.
fn strip_variant_prefix(enum_name: &str, variant: &str) -> Option<String> {
    let singular = enum_name.strip_suffix('s');
    let rest = [Some(enum_name), singular]
        .into_iter()
        .flatten()
        .find_map(|prefix| variant.strip_prefix(prefix))?;
    let rest = rest.trim_start_matches('_');
    match rest.chars().next() {
        None => None,
        Some(first) if first.is_ascii_digit() => Some(format!("_{rest}")),
        Some(_) => Some(rest.to_owned()),
    }
}

fn common_builder(sdk_include: &Path) -> bindgen::Builder {
    bindgen::Builder::default()
        .clang_arg(format!("-I{}", sdk_include.display()))
        .clang_arg("-Wno-microsoft-enum-forward-reference")
        .parse_callbacks(Box::new(Renamer))
        .default_enum_style(bindgen::EnumVariation::Rust {
            non_exhaustive: false,
        })
        .bitfield_enum(".*Flags$")
        .anon_fields_prefix("u_")
        .layout_tests(false)
        .ignore_functions()
        .blocklist_item("__darwin.*")
        .blocklist_item("__DARWIN.*")
        .blocklist_item("_DARWIN.*")
        .blocklist_item("_opaque_pthread.*")
        .blocklist_item("true_")
        .blocklist_item("false_")
        .blocklist_item("__bool_true_false_are_defined")
        .blocklist_item("__security_.*")
        .blocklist_item("__va_start")
        .blocklist_item("__report_gsfailure")
}

fn generate(builder: bindgen::Builder, header: &Path, out_file: &Path) -> Result<()> {
    let header = header
        .to_str()
        .with_context(|| format!("{} is not valid UTF-8", header.display()))?;
    if let Some(parent) = out_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Couldn't create {}", parent.display()))?;
    }
    builder
        .header(header)
        .generate()
        .with_context(|| format!("Couldn't generate bindings for {header}"))?
        .write_to_file(out_file)
        .with_context(|| format!("Couldn't write {}", out_file.display()))?;
    log::info!("Wrote {}", out_file.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let headers = Path::new(env!("CARGO_MANIFEST_DIR")).join("headers");
    let vendor_header = args.sdk_include.join("metal_irconverter/metal_irconverter.h");
    if !vendor_header.is_file() {
        bail!(
            "{} not found, pass the SDK include directory with --sdk-include",
            vendor_header.display()
        );
    }

    generate(
        common_builder(&args.sdk_include),
        &headers.join("wrapper.h"),
        &args.out.join("bindings.rs"),
    )?;

    if args.runtime {
        let builder = common_builder(&args.sdk_include)
            .clang_args(["-x", "c++", "-std=c++17"])
            .allowlist_item("IR.*")
            .allowlist_item("kIR.*")
            // Opaque stand-ins from `runtime_wrapper.h`.
            .blocklist_type("NS.*")
            .blocklist_type("MTL.*")
            .blocklist_type("id");
        generate(
            builder,
            &headers.join("runtime_wrapper.h"),
            &args.runtime_out,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_enum_prefixes() {
        assert_eq!(
            strip_variant_prefix("IRShaderStage", "IRShaderStageVertex").as_deref(),
            Some("Vertex")
        );
        assert_eq!(
            strip_variant_prefix("IRCompatibilityFlags", "IRCompatibilityFlagBoundsCheck")
                .as_deref(),
            Some("BoundsCheck")
        );
        assert_eq!(
            strip_variant_prefix("IROperatingSystem", "IROperatingSystem_macOS").as_deref(),
            Some("macOS")
        );
    }

    #[test]
    fn digit_leading_variants_keep_an_underscore() {
        assert_eq!(
            strip_variant_prefix("IRRootSignatureVersion", "IRRootSignatureVersion_1_1")
                .as_deref(),
            Some("_1_1")
        );
        assert_eq!(
            strip_variant_prefix("IRRootParameterType", "IRRootParameterType32BitConstants")
                .as_deref(),
            Some("_32BitConstants")
        );
        assert_eq!(
            strip_variant_prefix("IRStripCutIndex", "IRStripCutIndex0xFFFF").as_deref(),
            Some("_0xFFFF")
        );
    }

    #[test]
    fn unrelated_variants_are_left_alone() {
        assert_eq!(strip_variant_prefix("IRFilter", "SomethingElse"), None);
        assert_eq!(strip_variant_prefix("IRFilter", "IRFilter"), None);
    }
}
