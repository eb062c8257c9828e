use std::path::PathBuf;
use std::{env, fs};

// nRF52833 without a bootloader or SoftDevice.
const FLASH_ORIGIN: u32 = 0x0000_0000;
const FLASH_LENGTH: u32 = 512 * 1024;
const RAM_ORIGIN: u32 = 0x2000_0000;
const RAM_LENGTH: u32 = 128 * 1024;

fn main() {
    let memory_x = format!(
        "\
MEMORY
{{
  FLASH : ORIGIN = {FLASH_ORIGIN:#010x}, LENGTH = {FLASH_LENGTH:#08x}
  RAM   : ORIGIN = {RAM_ORIGIN:#010x}, LENGTH = {RAM_LENGTH:#08x}
}}
"
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("memory.x"), memory_x)
        .unwrap_or_else(|e| panic!("Failed to write memory.x: {}", e));

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
