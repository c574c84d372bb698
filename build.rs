use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Put memory.x on the linker search path for the thumbv6m target.
    // Host builds ignore it; cortex-m-rt only reads it through -Tlink.x.
    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out.join("memory.x"), include_bytes!("memory.x")).expect("write memory.x");
    println!("cargo:rustc-link-search={}", out.display());

    // Rerun if the memory layout changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // DEFMT_LOG normally comes from .cargo/config.toml
    if env::var("DEFMT_LOG").is_err() {
        println!("cargo:warning=DEFMT_LOG not set, defmt will only emit errors");
    }
    println!("cargo:rerun-if-env-changed=DEFMT_LOG");
}
