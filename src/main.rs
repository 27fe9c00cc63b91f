//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg`
//! and serves `static/` on a local HTTP port (`PORT`, default 8000).

use std::process::{Command, Stdio};
use std::{env, process};

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors.");
            process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/). Serving whatever is already in static/pkg.");
        }
    }

    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    println!("Serving static/ at http://127.0.0.1:{port} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status();

    match server {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("http server exited with {st}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("failed to start http server (python3 required): {err}");
            process::exit(1);
        }
    }
}
