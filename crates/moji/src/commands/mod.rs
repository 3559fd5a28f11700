//! CLI command implementations.

pub(crate) mod embed;
pub(crate) mod list;
pub(crate) mod render;

pub(crate) use embed::EmbedArgs;
pub(crate) use list::ListArgs;
pub(crate) use render::RenderArgs;
