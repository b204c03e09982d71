use std::ffi::c_void;
use std::mem;
use std::sync::OnceLock;

use crate::capability::{CapabilitySet, ContextCapabilities, GlProbe};
use crate::context::ContextIdentity;
use crate::registry::Target;

#[cfg(unix)]
#[path = "platform_unix.rs"]
mod platform;

#[cfg(windows)]
#[path = "platform_windows.rs"]
mod platform;

pub(crate) use platform::NativeLoader;

pub(crate) struct ProcessState {
    native: NativeLoader,
}

// SAFETY: ProcessState holds opaque OS library handles (NonNull<c_void>) that
// are only ever used read-only after single-flight initialization. The
// underlying dlsym/GetProcAddress lookups are thread-safe, so sharing the
// fully-constructed state across threads — as the process-wide OnceLock static
// requires — is sound.
unsafe impl Send for ProcessState {}
unsafe impl Sync for ProcessState {}

static PROCESS: OnceLock<ProcessState> = OnceLock::new();

/// The process-wide loader state, opened on first use. OnceLock makes the
/// initialization single-flight: concurrent first calls from several threads
/// all observe the fully constructed state.
pub(crate) fn process() -> &'static ProcessState {
    PROCESS.get_or_init(|| ProcessState {
        native: NativeLoader::open(),
    })
}

impl ProcessState {
    pub fn current_identity(&self) -> Option<ContextIdentity> {
        self.native.current_identity()
    }

    /// The full loader chain for one symbol: window-system get-proc-address
    /// first, dynamic-library lookup second. Null means not found anywhere;
    /// the caller decides whether that is fatal.
    pub fn resolve(
        &self,
        target: Target,
        identity: Option<&ContextIdentity>,
        symbol: &str,
    ) -> *const c_void {
        self.native.resolve(target, identity, symbol)
    }

    pub fn context_capabilities(
        &self,
        identity: Option<&ContextIdentity>,
    ) -> Result<ContextCapabilities, String> {
        let wsi = self.native.wsi_capabilities(identity);
        let gl = match identity {
            Some(identity) => Some(self.gl_capabilities(identity)?),
            None => None,
        };
        Ok(ContextCapabilities { gl, wsi })
    }

    fn gl_capabilities(&self, identity: &ContextIdentity) -> Result<CapabilitySet, String> {
        // bootstrap: these go straight through the loader so that capability
        // computation cannot recurse into the dispatch machinery.
        let get_string = self.resolve(Target::Gl, Some(identity), "glGetString");
        let get_integerv = self.resolve(Target::Gl, Some(identity), "glGetIntegerv");
        if get_string.is_null() || get_integerv.is_null() {
            return Err(
                "could not resolve glGetString/glGetIntegerv, the context is not actually \
                 current or the gl library is broken"
                    .to_string(),
            );
        }
        let get_stringi = self.resolve(Target::Gl, Some(identity), "glGetStringi");

        let probe = unsafe {
            GlProbe {
                get_string: mem::transmute(get_string),
                get_integerv: mem::transmute(get_integerv),
                get_stringi: if get_stringi.is_null() {
                    None
                } else {
                    Some(mem::transmute(get_stringi))
                },
            }
        };
        probe.compute().map_err(|err| err.to_string())
    }
}
