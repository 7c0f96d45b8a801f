// Authorlens: compare authors by the subjects of their books.
//
// This is the library root. Each module corresponds to a stage of the
// collect -> aggregate -> compare workflow.

pub mod catalog;
pub mod config;
pub mod documents;
pub mod output;
pub mod pipeline;
pub mod subjects;
