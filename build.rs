// Copies the static site to `dist/`. The wasm bundle itself is produced by
// `wasm-pack` (see `src/main.rs`) into `static/pkg` before this runs.
use fs_extra::dir::{copy, CopyOptions};
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        println!("cargo:warning=no static/ directory – skipping dist copy");
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    if let Err(err) = fs::create_dir_all(out_dir) {
        println!("cargo:warning=failed to create dist/: {err}");
        return;
    }

    let options = CopyOptions::new().content_only(true).overwrite(true);
    if let Err(err) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=failed to copy static/ to dist/: {err}");
    }
}
