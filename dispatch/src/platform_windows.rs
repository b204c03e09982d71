use std::ffi::{CStr, CString, c_char, c_void};
use std::ptr::null;

use dynlib::DynLib;

use winapi::um::wingdi::GetPixelFormat;

use crate::capability::{WindowSystem, WsiCapabilitySet, split_extension_string};
use crate::context::ContextIdentity;
use crate::registry::Target;

#[allow(non_snake_case)]
struct WglChain {
    GetProcAddress: unsafe extern "system" fn(*const c_char) -> Option<unsafe extern "system" fn() -> isize>,
    GetCurrentContext: unsafe extern "system" fn() -> *mut c_void,
    GetCurrentDC: unsafe extern "system" fn() -> *mut c_void,
    dynlib: DynLib,
}

impl WglChain {
    fn load() -> Result<Self, dynlib::Error> {
        let dynlib = DynLib::load(c"opengl32.dll")?;
        Ok(Self {
            GetProcAddress: dynlib.lookup(c"wglGetProcAddress")?,
            GetCurrentContext: dynlib.lookup(c"wglGetCurrentContext")?,
            GetCurrentDC: dynlib.lookup(c"wglGetCurrentDC")?,
            dynlib,
        })
    }

    fn resolve(&self, name: &CStr) -> *const c_void {
        // NOTE: wglGetProcAddress only answers for the current context, and
        // some drivers return 1..=3 or -1 instead of null on failure.
        if let Some(addr) = unsafe { (self.GetProcAddress)(name.as_ptr()) } {
            let raw = addr as *const c_void;
            if !matches!(raw as isize, 1..=3 | -1) {
                return raw;
            }
        }
        // core 1.1 symbols never come out of wglGetProcAddress, only out of
        // opengl32.dll itself.
        self.dynlib
            .lookup::<*const c_void>(name)
            .unwrap_or(null())
    }

    fn wsi_capabilities(&self) -> WsiCapabilitySet {
        let mut caps = WsiCapabilitySet::bare(WindowSystem::Wgl);

        let dc = unsafe { (self.GetCurrentDC)() };
        if dc.is_null() {
            return caps;
        }

        // the extension-string query is itself an extension; resolve it
        // straight off wglGetProcAddress to avoid recursing into dispatch.
        type GetExtensionsStringArb =
            unsafe extern "system" fn(*mut c_void) -> *const c_char;
        type GetExtensionsStringExt = unsafe extern "system" fn() -> *const c_char;

        let arb = self.resolve(c"wglGetExtensionsStringARB");
        let joined = if !arb.is_null() {
            let arb = unsafe {
                std::mem::transmute::<*const c_void, GetExtensionsStringArb>(arb)
            };
            unsafe { arb(dc) }
        } else {
            let ext = self.resolve(c"wglGetExtensionsStringEXT");
            if ext.is_null() {
                return caps;
            }
            let ext = unsafe {
                std::mem::transmute::<*const c_void, GetExtensionsStringExt>(ext)
            };
            unsafe { ext() }
        };
        if !joined.is_null() {
            caps.extensions =
                split_extension_string(&unsafe { CStr::from_ptr(joined) }.to_string_lossy());
        }
        caps
    }
}

pub(crate) struct NativeLoader {
    wgl: Option<WglChain>,
}

impl NativeLoader {
    pub fn open() -> Self {
        let wgl = WglChain::load()
            .inspect_err(|err| log::warn!("wgl chain unavailable: {err}"))
            .ok();
        Self { wgl }
    }

    pub fn current_identity(&self) -> Option<ContextIdentity> {
        let wgl = self.wgl.as_ref()?;
        let context = unsafe { (wgl.GetCurrentContext)() };
        if context.is_null() {
            return None;
        }
        let dc = unsafe { (wgl.GetCurrentDC)() };
        let pixel_format = if dc.is_null() {
            0
        } else {
            unsafe { GetPixelFormat(dc.cast()) }
        };
        Some(ContextIdentity::new(context as usize, pixel_format))
    }

    pub fn resolve(
        &self,
        _target: Target,
        _identity: Option<&ContextIdentity>,
        symbol: &str,
    ) -> *const c_void {
        let Ok(name) = CString::new(symbol) else {
            return null();
        };
        self.wgl
            .as_ref()
            .map(|chain| chain.resolve(&name))
            .unwrap_or(null())
    }

    pub fn wsi_capabilities(&self, _identity: Option<&ContextIdentity>) -> WsiCapabilitySet {
        self.wgl
            .as_ref()
            .map(|chain| chain.wsi_capabilities())
            .unwrap_or_else(|| WsiCapabilitySet::bare(WindowSystem::Wgl))
    }
}
