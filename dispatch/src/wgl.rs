//! The wgl entry-point table and thunks. The core 1.0 surface lives in
//! opengl32.dll and is always reachable; everything else is an extension
//! whose availability (and address) depends on the current context and
//! pixel format, which is the reason wgl identities carry the pixel format
//! id.

use std::ffi::c_int;

use crate::registry::{always, entry_points, wgl_ext};
use crate::types::*;

entry_points! {
    target: Wgl;

    fn wglCreateContext(hDc: HDC) -> HGLRC {
        "wglCreateContext" => always(),
    }
    fn wglDeleteContext(oldContext: HGLRC) -> BOOL {
        "wglDeleteContext" => always(),
    }
    fn wglGetCurrentContext() -> HGLRC {
        "wglGetCurrentContext" => always(),
    }
    fn wglGetCurrentDC() -> HDC {
        "wglGetCurrentDC" => always(),
    }
    fn wglGetProcAddress(lpszProc: LPCSTR) -> PROC {
        "wglGetProcAddress" => always(),
    }
    fn wglMakeCurrent(hDc: HDC, newContext: HGLRC) -> BOOL {
        "wglMakeCurrent" => always(),
    }
    fn wglShareLists(hrcSrvShare: HGLRC, hrcSrvSource: HGLRC) -> BOOL {
        "wglShareLists" => always(),
    }
    fn wglCopyContext(hglrcSrc: HGLRC, hglrcDst: HGLRC, mask: UINT) -> BOOL {
        "wglCopyContext" => always(),
    }
    fn wglGetExtensionsStringARB(hdc: HDC) -> LPCSTR {
        "wglGetExtensionsStringARB" => wgl_ext("WGL_ARB_extensions_string"),
    }
    fn wglGetExtensionsStringEXT() -> LPCSTR {
        "wglGetExtensionsStringEXT" => wgl_ext("WGL_EXT_extensions_string"),
    }
    fn wglChoosePixelFormatARB(
        hdc: HDC,
        piAttribIList: *const c_int,
        pfAttribFList: *const FLOAT,
        nMaxFormats: UINT,
        piFormats: *mut c_int,
        nNumFormats: *mut UINT,
    ) -> BOOL {
        "wglChoosePixelFormatARB" => wgl_ext("WGL_ARB_pixel_format"),
    }
    fn wglCreateContextAttribsARB(
        hDC: HDC,
        hShareContext: HGLRC,
        attribList: *const c_int,
    ) -> HGLRC {
        "wglCreateContextAttribsARB" => wgl_ext("WGL_ARB_create_context"),
    }
    fn wglSwapIntervalEXT(interval: c_int) -> BOOL {
        "wglSwapIntervalEXT" => wgl_ext("WGL_EXT_swap_control"),
    }
    fn wglGetSwapIntervalEXT() -> c_int {
        "wglGetSwapIntervalEXT" => wgl_ext("WGL_EXT_swap_control"),
    }
}
