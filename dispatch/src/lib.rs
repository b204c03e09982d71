//! Runtime resolution and dispatch of gl/gles/egl/glx/wgl entry points.
//!
//! Gl family symbols cannot be linked statically: their addresses come out
//! of platform loaders at runtime, are only valid for the currently bound
//! context (on windows, for a context + pixel format pair), and one logical
//! function may hide behind several core/extension symbol names. The thunks
//! in [gl], [egl], [glx] and [wgl] look and call exactly like the native
//! functions; behind them, each thread keeps one lazily populated dispatch
//! table per context identity. A call that cannot be resolved never falls
//! through to address zero: it aborts the process with a diagnostic naming
//! the function and the capabilities it would have needed.

mod capability;
mod context;
mod error;
mod loader;
pub mod registry;
mod table;
pub mod types;

pub mod gl;

#[cfg(unix)]
pub mod egl;
#[cfg(unix)]
pub mod glx;
#[cfg(windows)]
pub mod wgl;

pub use capability::{
    CapabilitySet, ContextCapabilities, Flavor, Profile, Version, WindowSystem, WsiCapabilitySet,
};
pub use context::{ContextIdentity, current_identity, notify_context_changed};
pub use error::ResolveError;

/// Whether the context current on this thread is desktop gl (as opposed to
/// gles). False when nothing is current.
pub fn is_desktop_gl() -> bool {
    table::with_current_capabilities(|caps| {
        caps.gl
            .as_ref()
            .is_some_and(|gl| gl.flavor == Flavor::Desktop)
    })
    .unwrap_or(false)
}

/// The version of the context current on this thread, if any.
pub fn gl_version() -> Option<Version> {
    table::with_current_capabilities(|caps| caps.gl.as_ref().map(|gl| gl.version)).flatten()
}

/// The profile of the context current on this thread, if any.
pub fn gl_profile() -> Option<Profile> {
    table::with_current_capabilities(|caps| caps.gl.as_ref().map(|gl| gl.profile)).flatten()
}

/// Whether the context current on this thread advertises the given gl
/// extension. False when nothing is current.
pub fn has_gl_extension(name: &str) -> bool {
    table::with_current_capabilities(|caps| {
        caps.gl.as_ref().is_some_and(|gl| gl.has_extension(name))
    })
    .unwrap_or(false)
}

/// A snapshot of everything known about the current context's capabilities.
pub fn capabilities() -> Option<ContextCapabilities> {
    table::with_current_capabilities(|caps| caps.clone())
}
