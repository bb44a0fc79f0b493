//! Dockerfile generation and image builds.

pub mod build;
pub mod dockerfile;

pub use build::{build_command, build_image, build_plan, BuildPlan};
pub use dockerfile::{node_major, render_dockerfile, write_dockerfile};
