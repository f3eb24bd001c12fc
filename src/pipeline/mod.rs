mod dataset_builder;
mod errors;

pub use dataset_builder::DatasetBuilder;
pub use errors::BuilderError;
