//! Integration tests grouped by pipeline stage.

mod common;

#[path = "stages/infer.rs"]
mod infer;

#[path = "stages/sampler.rs"]
mod sampler;

#[path = "stages/trainer.rs"]
mod trainer;

#[path = "stages/wrapper.rs"]
mod wrapper;
