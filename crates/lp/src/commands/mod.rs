//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

/// Resolve a `--flag` / `--no-flag` pair into an optional override.
fn resolve_flag(enable: bool, disable: bool) -> Option<bool> {
    if disable {
        Some(false)
    } else {
        enable.then_some(true)
    }
}
