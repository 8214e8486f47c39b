//! Entry point for the WASM application

pub fn main() {
    intake_frontend::mount_intake();
}
