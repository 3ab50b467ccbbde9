//! Workspace generation: template resolution, materialization, archiving.

pub mod archive;
pub mod materializer;
pub mod template;

pub use archive::build_archive;
pub use materializer::{
    generate_workspace, generate_workspace_keeping_scratch, GeneratedArchive, GenerationStage,
    ARCHIVE_CONTENT_TYPE,
};
pub use template::resolve_template_root;
