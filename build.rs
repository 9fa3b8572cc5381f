//! Build script to compile the C reference engine.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    // Check for C compiler compatibility and type
    let build = cc::Build::new();
    let compiler = build.get_compiler();

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). C engine disabled.");
        return;
    };

    let mut build = cc::Build::new();

    // Auto-detect all C files in src/ directory
    let c_files = glob::glob("src/**/*.c")
        .expect("Failed to read glob pattern")
        .filter_map(|entry| entry.ok());

    let mut found = false;
    for file in c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
        found = true;
    }

    if !found {
        println!("cargo:warning=No C sources found. C engine disabled.");
        return;
    }

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    let is_rust_native = rustflags.contains("target-cpu=native")
        || encoded_rustflags.contains("target-cpu=native");

    build.opt_level(3);

    // Keep the C baseline aligned with the Rust one so the comparison stays fair
    if is_rust_native {
        build.flag_if_supported("-march=native");
    }

    build.compile("prng_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
