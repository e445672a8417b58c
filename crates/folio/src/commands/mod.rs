//! CLI command implementations.

pub(crate) mod articles;
pub(crate) mod render;

pub(crate) use articles::ArticlesCommand;
pub(crate) use render::RenderArgs;
