//! UniFFI binding generator binary
//!
//! Generates the Swift bindings for the editor app.
//! Run with: cargo run --features uniffi --bin uniffi-bindgen generate --library <path> --language swift --out-dir <dir>

fn main() {
    uniffi::uniffi_bindgen_main()
}
