//! gcpilot - guided workflows on top of the gcloud CLI
//!
//! This is the main entry point for the Rust CLI binary.

fn main() {
    std::process::exit(gcpilot::run());
}
