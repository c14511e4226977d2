//! Binary entrypoint for the browser-hosted component catalog.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    basalt_showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary targets the browser/WASM workflow. Build basalt_showcase for wasm32 with the `csr` feature."
    );
}
