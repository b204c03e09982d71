//! The glx entry-point table and thunks. Everything up to 1.3 is a public
//! symbol of libGL per the linux opengl abi, so those are always-available
//! dlsym targets; later additions and extensions gate on the glx version or
//! extension string of the current display.

use std::ffi::c_int;

use crate::registry::{always, entry_points, glx, glx_ext};
use crate::types::*;

entry_points! {
    target: Glx;

    fn glXChooseVisual(dpy: *mut XDisplay, screen: c_int, attribList: *mut c_int) -> *mut XVisualInfo {
        "glXChooseVisual" => always(),
    }
    fn glXCreateContext(
        dpy: *mut XDisplay,
        vis: *mut XVisualInfo,
        shareList: GLXContext,
        direct: Bool,
    ) -> GLXContext {
        "glXCreateContext" => always(),
    }
    fn glXDestroyContext(dpy: *mut XDisplay, ctx: GLXContext) {
        "glXDestroyContext" => always(),
    }
    fn glXMakeCurrent(dpy: *mut XDisplay, drawable: GLXDrawable, ctx: GLXContext) -> Bool {
        "glXMakeCurrent" => always(),
    }
    fn glXSwapBuffers(dpy: *mut XDisplay, drawable: GLXDrawable) {
        "glXSwapBuffers" => always(),
    }
    fn glXQueryVersion(dpy: *mut XDisplay, maj: *mut c_int, min: *mut c_int) -> Bool {
        "glXQueryVersion" => always(),
    }
    fn glXQueryExtensionsString(dpy: *mut XDisplay, screen: c_int) -> *const GLchar {
        "glXQueryExtensionsString" => glx(1, 1),
    }
    fn glXGetCurrentContext() -> GLXContext {
        "glXGetCurrentContext" => always(),
    }
    fn glXGetCurrentDrawable() -> GLXDrawable {
        "glXGetCurrentDrawable" => always(),
    }
    fn glXGetCurrentDisplay() -> *mut XDisplay {
        "glXGetCurrentDisplay" => glx(1, 2),
    }
    // required to be a public symbol by the linux opengl abi, even though it
    // started life as an extension.
    fn glXGetProcAddress(procName: *const GLubyte) -> __GLXextFuncPtr {
        "glXGetProcAddress" => always(),
        "glXGetProcAddressARB" => always(),
    }
    fn glXChooseFBConfig(
        dpy: *mut XDisplay,
        screen: c_int,
        attrib_list: *const c_int,
        nelements: *mut c_int,
    ) -> *mut GLXFBConfig {
        "glXChooseFBConfig" => glx(1, 3),
        "glXChooseFBConfigSGIX" => glx_ext("GLX_SGIX_fbconfig"),
    }
    fn glXGetFBConfigAttrib(
        dpy: *mut XDisplay,
        config: GLXFBConfig,
        attribute: c_int,
        value: *mut c_int,
    ) -> c_int {
        "glXGetFBConfigAttrib" => glx(1, 3),
        "glXGetFBConfigAttribSGIX" => glx_ext("GLX_SGIX_fbconfig"),
    }
    fn glXGetVisualFromFBConfig(dpy: *mut XDisplay, config: GLXFBConfig) -> *mut XVisualInfo {
        "glXGetVisualFromFBConfig" => glx(1, 3),
        "glXGetVisualFromFBConfigSGIX" => glx_ext("GLX_SGIX_fbconfig"),
    }
    fn glXCreateNewContext(
        dpy: *mut XDisplay,
        config: GLXFBConfig,
        renderType: c_int,
        shareList: GLXContext,
        direct: Bool,
    ) -> GLXContext {
        "glXCreateNewContext" => glx(1, 3),
    }
    fn glXMakeContextCurrent(
        dpy: *mut XDisplay,
        draw: GLXDrawable,
        read: GLXDrawable,
        ctx: GLXContext,
    ) -> Bool {
        "glXMakeContextCurrent" => glx(1, 3),
    }
    fn glXCreateContextAttribsARB(
        dpy: *mut XDisplay,
        config: GLXFBConfig,
        share_context: GLXContext,
        direct: Bool,
        attrib_list: *const c_int,
    ) -> GLXContext {
        "glXCreateContextAttribsARB" => glx_ext("GLX_ARB_create_context"),
    }
    fn glXSwapIntervalEXT(dpy: *mut XDisplay, drawable: GLXDrawable, interval: c_int) {
        "glXSwapIntervalEXT" => glx_ext("GLX_EXT_swap_control"),
    }
    fn glXSwapIntervalMESA(interval: std::ffi::c_uint) -> c_int {
        "glXSwapIntervalMESA" => glx_ext("GLX_MESA_swap_control"),
    }
}
