pub mod datastore;
pub mod text_generator;
pub mod transcript_source;
