// File: crates/gantt-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    // Checked against the target, not the host, so cross builds link correctly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
