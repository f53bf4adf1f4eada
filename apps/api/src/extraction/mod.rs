// Heuristic résumé extraction pipeline.
// Every extractor is a pure function of the document text.

pub mod ai;
pub mod assembler;
pub mod education;
pub mod experience;
pub mod fields;
pub mod handlers;
pub mod limits;
pub mod links;
pub mod projects;
pub mod prompts;
pub mod sections;
pub mod skills;
pub mod text;
