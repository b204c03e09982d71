use std::ffi::{CStr, CString, c_char, c_int, c_void};
use std::ptr::{null, null_mut};

use dynlib::DynLib;

use crate::capability::{
    Version, WindowSystem, WsiCapabilitySet, parse_leading_version, split_extension_string,
};
use crate::context::ContextIdentity;
use crate::registry::Target;

const EGL_VERSION: c_int = 0x3054;
const EGL_EXTENSIONS: c_int = 0x3055;

#[allow(non_snake_case)]
struct EglChain {
    GetProcAddress: unsafe extern "C" fn(*const c_char) -> Option<unsafe extern "C" fn()>,
    GetCurrentContext: unsafe extern "C" fn() -> *mut c_void,
    GetCurrentDisplay: unsafe extern "C" fn() -> *mut c_void,
    QueryString: unsafe extern "C" fn(*mut c_void, c_int) -> *const c_char,
    dynlib: DynLib,
    // NOTE: some funcs are only reliably reachable by dlsym against the
    // client libraries, eglGetProcAddress may return null for them.
    gles2: Option<DynLib>,
    gles1: Option<DynLib>,
}

impl EglChain {
    fn load() -> Result<Self, dynlib::Error> {
        let dynlib = DynLib::load(c"libEGL.so.1").or_else(|_| DynLib::load(c"libEGL.so"))?;
        Ok(Self {
            GetProcAddress: dynlib.lookup(c"eglGetProcAddress")?,
            GetCurrentContext: dynlib.lookup(c"eglGetCurrentContext")?,
            GetCurrentDisplay: dynlib.lookup(c"eglGetCurrentDisplay")?,
            QueryString: dynlib.lookup(c"eglQueryString")?,
            gles2: DynLib::load(c"libGLESv2.so.2")
                .or_else(|_| DynLib::load(c"libGLESv2.so"))
                .ok(),
            gles1: DynLib::load(c"libGLESv1_CM.so.1").ok(),
            dynlib,
        })
    }

    fn resolve(&self, name: &CStr) -> *const c_void {
        if let Some(addr) = unsafe { (self.GetProcAddress)(name.as_ptr()) } {
            return addr as *const c_void;
        }
        let fallbacks = [Some(&self.dynlib), self.gles2.as_ref(), self.gles1.as_ref()];
        for lib in fallbacks.into_iter().flatten() {
            if let Ok(addr) = lib.lookup::<*const c_void>(name) {
                if !addr.is_null() {
                    return addr;
                }
            }
        }
        null()
    }

    fn wsi_capabilities(&self) -> WsiCapabilitySet {
        let display = unsafe { (self.GetCurrentDisplay)() };
        if display.is_null() {
            // nothing current. assume the conservative baseline of 1.4 so
            // that bootstrap entry points (eglBindAPI and friends) resolve
            // before the first context exists; only the client extension
            // string is observable at this point.
            let mut caps = WsiCapabilitySet::bare(WindowSystem::Egl);
            caps.version = Version(1, 4);
            let client_exts = unsafe { (self.QueryString)(null_mut(), EGL_EXTENSIONS) };
            if !client_exts.is_null() {
                caps.extensions = split_extension_string(
                    &unsafe { CStr::from_ptr(client_exts) }.to_string_lossy(),
                );
            }
            return caps;
        }

        let version = unsafe { (self.QueryString)(display, EGL_VERSION) };
        let version = if version.is_null() {
            Version(1, 0)
        } else {
            parse_leading_version(&unsafe { CStr::from_ptr(version) }.to_string_lossy())
                .unwrap_or(Version(1, 0))
        };
        let extensions = unsafe { (self.QueryString)(display, EGL_EXTENSIONS) };
        let extensions = if extensions.is_null() {
            Default::default()
        } else {
            split_extension_string(&unsafe { CStr::from_ptr(extensions) }.to_string_lossy())
        };
        WsiCapabilitySet {
            system: WindowSystem::Egl,
            version,
            extensions,
        }
    }
}

#[allow(non_snake_case)]
struct GlxChain {
    GetProcAddress: unsafe extern "C" fn(*const c_char) -> Option<unsafe extern "C" fn()>,
    GetCurrentContext: unsafe extern "C" fn() -> *mut c_void,
    GetCurrentDisplay: unsafe extern "C" fn() -> *mut c_void,
    QueryVersion: unsafe extern "C" fn(*mut c_void, *mut c_int, *mut c_int) -> c_int,
    QueryExtensionsString: unsafe extern "C" fn(*mut c_void, c_int) -> *const c_char,
    dynlib: DynLib,
}

impl GlxChain {
    fn load() -> Result<Self, dynlib::Error> {
        let dynlib = DynLib::load(c"libGL.so.1").or_else(|_| DynLib::load(c"libGL.so"))?;
        Ok(Self {
            // glXGetProcAddress is required to exist as a public symbol by
            // the linux opengl abi, but older installs only ship the ARB
            // name.
            GetProcAddress: dynlib
                .lookup(c"glXGetProcAddress")
                .or_else(|_| dynlib.lookup(c"glXGetProcAddressARB"))?,
            GetCurrentContext: dynlib.lookup(c"glXGetCurrentContext")?,
            GetCurrentDisplay: dynlib.lookup(c"glXGetCurrentDisplay")?,
            QueryVersion: dynlib.lookup(c"glXQueryVersion")?,
            QueryExtensionsString: dynlib.lookup(c"glXQueryExtensionsString")?,
            dynlib,
        })
    }

    fn resolve(&self, name: &CStr) -> *const c_void {
        // NOTE: glXGetProcAddress never returns null for well-formed names,
        // even for functions the implementation does not support; that is
        // exactly why resolution is gated on capabilities, not on a null
        // check.
        if let Some(addr) = unsafe { (self.GetProcAddress)(name.as_ptr()) } {
            return addr as *const c_void;
        }
        self.dynlib
            .lookup::<*const c_void>(name)
            .unwrap_or(null())
    }

    fn wsi_capabilities(&self) -> WsiCapabilitySet {
        let display = unsafe { (self.GetCurrentDisplay)() };
        if display.is_null() {
            // same conservative 1.4 baseline as the egl side.
            let mut caps = WsiCapabilitySet::bare(WindowSystem::Glx);
            caps.version = Version(1, 4);
            return caps;
        }

        let (mut major, mut minor) = (0, 0);
        let version = if unsafe { (self.QueryVersion)(display, &mut major, &mut minor) } != 0 {
            Version(major.max(0) as u16, minor.max(0) as u16)
        } else {
            Version(1, 0)
        };
        // TODO: screen 0 is an assumption; glXQueryExtensionsString wants
        // the screen of the current drawable, which would take an x
        // roundtrip to discover.
        let extensions = unsafe { (self.QueryExtensionsString)(display, 0) };
        let extensions = if extensions.is_null() {
            Default::default()
        } else {
            split_extension_string(&unsafe { CStr::from_ptr(extensions) }.to_string_lossy())
        };
        WsiCapabilitySet {
            system: WindowSystem::Glx,
            version,
            extensions,
        }
    }
}

pub(crate) struct NativeLoader {
    egl: Option<EglChain>,
    glx: Option<GlxChain>,
}

impl NativeLoader {
    pub fn open() -> Self {
        let egl = EglChain::load()
            .inspect_err(|err| log::debug!("egl chain unavailable: {err}"))
            .ok();
        let glx = GlxChain::load()
            .inspect_err(|err| log::debug!("glx chain unavailable: {err}"))
            .ok();
        if egl.is_none() && glx.is_none() {
            log::warn!("neither libEGL nor libGL could be opened, nothing will resolve");
        }
        Self { egl, glx }
    }

    pub fn current_identity(&self) -> Option<ContextIdentity> {
        if let Some(egl) = self.egl.as_ref() {
            let context = unsafe { (egl.GetCurrentContext)() };
            if !context.is_null() {
                return Some(ContextIdentity::new(WindowSystem::Egl, context as usize));
            }
        }
        if let Some(glx) = self.glx.as_ref() {
            let context = unsafe { (glx.GetCurrentContext)() };
            if !context.is_null() {
                return Some(ContextIdentity::new(WindowSystem::Glx, context as usize));
            }
        }
        None
    }

    fn system_for(&self, target: Target, identity: Option<&ContextIdentity>) -> WindowSystem {
        match target {
            Target::Egl => WindowSystem::Egl,
            Target::Glx => WindowSystem::Glx,
            _ => identity.map(|identity| identity.system()).unwrap_or_else(|| {
                if self.egl.is_some() {
                    WindowSystem::Egl
                } else {
                    WindowSystem::Glx
                }
            }),
        }
    }

    pub fn resolve(
        &self,
        target: Target,
        identity: Option<&ContextIdentity>,
        symbol: &str,
    ) -> *const c_void {
        let Ok(name) = CString::new(symbol) else {
            return null();
        };
        match self.system_for(target, identity) {
            WindowSystem::Egl => self
                .egl
                .as_ref()
                .map(|chain| chain.resolve(&name))
                .unwrap_or(null()),
            WindowSystem::Glx => self
                .glx
                .as_ref()
                .map(|chain| chain.resolve(&name))
                .unwrap_or(null()),
            WindowSystem::Wgl => null(),
        }
    }

    pub fn wsi_capabilities(&self, identity: Option<&ContextIdentity>) -> WsiCapabilitySet {
        match self.system_for(Target::Gl, identity) {
            WindowSystem::Egl => self
                .egl
                .as_ref()
                .map(|chain| chain.wsi_capabilities())
                .unwrap_or_else(|| WsiCapabilitySet::bare(WindowSystem::Egl)),
            _ => self
                .glx
                .as_ref()
                .map(|chain| chain.wsi_capabilities())
                .unwrap_or_else(|| WsiCapabilitySet::bare(WindowSystem::Glx)),
        }
    }
}
