//! Copies the compiled yew bundle into `static/dist`, which `main.rs` embeds
//! with `include_dir!`. Without a frontend build the directory is still
//! created so the backend compiles and serves only the API.

use std::fs;
use std::path::Path;

const FRONTEND_DIST: &str = "../frontend/dist";
const EMBED_ROOT: &str = "static";

fn main() {
    let embed_root = Path::new(EMBED_ROOT);
    let frontend_dist = Path::new(FRONTEND_DIST);

    if frontend_dist.exists() {
        let _ = fs::remove_dir_all(embed_root);
        fs::create_dir_all(embed_root).expect("create static dir");
        let options = fs_extra::dir::CopyOptions::new()
            .overwrite(true)
            .copy_inside(true);
        fs_extra::dir::copy(frontend_dist, embed_root, &options).expect("copy frontend dist");
    }
    fs::create_dir_all(embed_root.join("dist")).expect("create static/dist");

    println!("cargo:rerun-if-changed={FRONTEND_DIST}");
}
