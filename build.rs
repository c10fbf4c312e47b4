// build.rs: link a system CBLAS for the `blas` feature.
//
//   STRIDED_BLAS_LIB   library to link (default `openblas`; e.g. `cblas`, `blis`)
//   OPENBLAS_LIB_DIR   search directory; replaces the macOS Homebrew defaults

use std::env;
use std::path::Path;

/// Homebrew prefixes (Apple Silicon, then Intel).
const MACOS_SEARCH_DIRS: [&str; 2] = [
    "/opt/homebrew/opt/openblas/lib",
    "/usr/local/opt/openblas/lib",
];

fn main() {
    println!("cargo:rerun-if-env-changed=STRIDED_BLAS_LIB");
    println!("cargo:rerun-if-env-changed=OPENBLAS_LIB_DIR");

    if env::var_os("CARGO_FEATURE_BLAS").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("OPENBLAS_LIB_DIR") {
        let dir = Path::new(&dir);
        if !dir.is_dir() {
            println!("cargo:warning=OPENBLAS_LIB_DIR={} is not a directory", dir.display());
        }
        println!("cargo:rustc-link-search=native={}", dir.display());
    } else if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        for dir in MACOS_SEARCH_DIRS.iter().filter(|d| Path::new(d).is_dir()) {
            println!("cargo:rustc-link-search=native={dir}");
        }
    }

    let lib = env::var("STRIDED_BLAS_LIB").unwrap_or_else(|_| "openblas".into());
    println!("cargo:rustc-link-lib={lib}");
}
