pub mod binder_pipeline;

pub use binder_pipeline::BinderPipeline;
