#[cfg(unix)]
use crate::capability::WindowSystem;
use crate::loader;
use crate::table;

/// Identifies "the thing proc addresses are valid against" on the calling
/// thread. On egl/glx that is just the current context handle; on wgl a
/// resolved address is only good for a (context, pixel format) pair, so the
/// pixel format id of the current device context is part of the identity.
///
/// Two equal identities are interchangeable for address resolution; anything
/// else must get its own dispatch table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ContextIdentity {
    #[cfg(unix)]
    system: WindowSystem,
    context: usize,
    #[cfg(windows)]
    pixel_format: i32,
}

impl ContextIdentity {
    #[cfg(unix)]
    pub(crate) fn new(system: WindowSystem, context: usize) -> Self {
        Self { system, context }
    }

    #[cfg(windows)]
    pub(crate) fn new(context: usize, pixel_format: i32) -> Self {
        Self {
            context,
            pixel_format,
        }
    }

    #[cfg(unix)]
    pub(crate) fn system(&self) -> WindowSystem {
        self.system
    }

    #[cfg(test)]
    pub(crate) fn fake(context: usize) -> Self {
        Self {
            #[cfg(unix)]
            system: WindowSystem::Glx,
            context,
            #[cfg(windows)]
            pixel_format: 1,
        }
    }
}

/// Asks the window system what is current on this thread right now. Always
/// accurate on egl/glx; on wgl it reflects whatever
/// wglGetCurrentContext/GetPixelFormat report at this instant.
pub fn current_identity() -> Option<ContextIdentity> {
    loader::process().current_identity()
}

/// Must be called after activating a context through a path this crate
/// cannot observe, primarily a wglMakeCurrent (or SetPixelFormat on the
/// current dc) issued by the embedding application on windows. Drops the
/// calling thread's active-table selection so the next dispatched call
/// re-reads the identity and re-selects (not re-resolves) the right table.
///
/// Without this, a thread that switched contexts externally would keep being
/// served pointers resolved for the previous identity. That hazard is
/// inherent to wglGetProcAddress and accepted here; there is no transparent
/// detection.
pub fn notify_context_changed() {
    table::reset_active();
    log::debug!("context change notified, dispatch table will be re-selected on next call");
}
