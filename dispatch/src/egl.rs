//! The egl entry-point table and thunks. Core entry points up to 1.4 are
//! marked always-available because they must be dlsym()ed out of libEGL
//! anyway; eglGetProcAddress is only guaranteed to answer for extensions
//! before 1.5.

use std::ffi::{c_char, c_void};

use crate::registry::{always, egl, egl_ext, entry_points};
use crate::types::*;

entry_points! {
    target: Egl;

    fn eglGetError() -> EGLint {
        "eglGetError" => always(),
    }
    fn eglGetDisplay(display_id: EGLNativeDisplayType) -> EGLDisplay {
        "eglGetDisplay" => always(),
    }
    fn eglInitialize(dpy: EGLDisplay, major: *mut EGLint, minor: *mut EGLint) -> EGLBoolean {
        "eglInitialize" => always(),
    }
    fn eglTerminate(dpy: EGLDisplay) -> EGLBoolean {
        "eglTerminate" => always(),
    }
    fn eglQueryString(dpy: EGLDisplay, name: EGLint) -> *const c_char {
        "eglQueryString" => always(),
    }
    fn eglGetConfigs(
        dpy: EGLDisplay,
        configs: *mut EGLConfig,
        config_size: EGLint,
        num_config: *mut EGLint,
    ) -> EGLBoolean {
        "eglGetConfigs" => always(),
    }
    fn eglChooseConfig(
        dpy: EGLDisplay,
        attrib_list: *const EGLint,
        configs: *mut EGLConfig,
        config_size: EGLint,
        num_config: *mut EGLint,
    ) -> EGLBoolean {
        "eglChooseConfig" => always(),
    }
    fn eglGetConfigAttrib(
        dpy: EGLDisplay,
        config: EGLConfig,
        attribute: EGLint,
        value: *mut EGLint,
    ) -> EGLBoolean {
        "eglGetConfigAttrib" => always(),
    }
    fn eglCreateWindowSurface(
        dpy: EGLDisplay,
        config: EGLConfig,
        win: EGLNativeWindowType,
        attrib_list: *const EGLint,
    ) -> EGLSurface {
        "eglCreateWindowSurface" => always(),
    }
    fn eglCreatePbufferSurface(
        dpy: EGLDisplay,
        config: EGLConfig,
        attrib_list: *const EGLint,
    ) -> EGLSurface {
        "eglCreatePbufferSurface" => always(),
    }
    fn eglDestroySurface(dpy: EGLDisplay, surface: EGLSurface) -> EGLBoolean {
        "eglDestroySurface" => always(),
    }
    fn eglCreateContext(
        dpy: EGLDisplay,
        config: EGLConfig,
        share_context: EGLContext,
        attrib_list: *const EGLint,
    ) -> EGLContext {
        "eglCreateContext" => always(),
    }
    fn eglDestroyContext(dpy: EGLDisplay, ctx: EGLContext) -> EGLBoolean {
        "eglDestroyContext" => always(),
    }
    fn eglMakeCurrent(
        dpy: EGLDisplay,
        draw: EGLSurface,
        read: EGLSurface,
        ctx: EGLContext,
    ) -> EGLBoolean {
        "eglMakeCurrent" => always(),
    }
    fn eglGetCurrentContext() -> EGLContext {
        "eglGetCurrentContext" => egl(1, 4),
    }
    fn eglGetCurrentDisplay() -> EGLDisplay {
        "eglGetCurrentDisplay" => always(),
    }
    fn eglGetCurrentSurface(readdraw: EGLint) -> EGLSurface {
        "eglGetCurrentSurface" => always(),
    }
    fn eglSwapBuffers(dpy: EGLDisplay, surface: EGLSurface) -> EGLBoolean {
        "eglSwapBuffers" => always(),
    }
    fn eglSwapInterval(dpy: EGLDisplay, interval: EGLint) -> EGLBoolean {
        "eglSwapInterval" => egl(1, 1),
    }
    fn eglBindAPI(api: EGLenum) -> EGLBoolean {
        "eglBindAPI" => egl(1, 2),
    }
    fn eglQueryAPI() -> EGLenum {
        "eglQueryAPI" => egl(1, 2),
    }
    fn eglWaitClient() -> EGLBoolean {
        "eglWaitClient" => egl(1, 2),
    }
    fn eglReleaseThread() -> EGLBoolean {
        "eglReleaseThread" => egl(1, 2),
    }
    fn eglGetProcAddress(procname: *const c_char) -> __eglMustCastToProperFunctionPointerType {
        "eglGetProcAddress" => always(),
    }

    // ----
    // 1.5 core and the extensions it was promoted from

    fn eglCreateSync(dpy: EGLDisplay, r#type: EGLenum, attrib_list: *const EGLAttrib) -> EGLSync {
        "eglCreateSync" => egl(1, 5),
    }
    fn eglDestroySync(dpy: EGLDisplay, sync: EGLSync) -> EGLBoolean {
        "eglDestroySync" => egl(1, 5),
    }
    fn eglClientWaitSync(
        dpy: EGLDisplay,
        sync: EGLSync,
        flags: EGLint,
        timeout: EGLTime,
    ) -> EGLint {
        "eglClientWaitSync" => egl(1, 5),
    }
    fn eglGetPlatformDisplay(
        platform: EGLenum,
        native_display: *mut c_void,
        attrib_list: *const EGLAttrib,
    ) -> EGLDisplay {
        "eglGetPlatformDisplay" => egl(1, 5),
    }
    fn eglGetPlatformDisplayEXT(
        platform: EGLenum,
        native_display: *mut c_void,
        attrib_list: *const EGLint,
    ) -> EGLDisplay {
        "eglGetPlatformDisplayEXT" => egl_ext("EGL_EXT_platform_base"),
    }
    fn eglCreatePlatformWindowSurface(
        dpy: EGLDisplay,
        config: EGLConfig,
        native_window: *mut c_void,
        attrib_list: *const EGLAttrib,
    ) -> EGLSurface {
        "eglCreatePlatformWindowSurface" => egl(1, 5),
    }
    fn eglCreateImage(
        dpy: EGLDisplay,
        ctx: EGLContext,
        target: EGLenum,
        buffer: EGLClientBuffer,
        attrib_list: *const EGLAttrib,
    ) -> EGLImage {
        "eglCreateImage" => egl(1, 5),
    }
    fn eglDestroyImage(dpy: EGLDisplay, image: EGLImage) -> EGLBoolean {
        "eglDestroyImage" => egl(1, 5),
    }
    fn eglCreateImageKHR(
        dpy: EGLDisplay,
        ctx: EGLContext,
        target: EGLenum,
        buffer: EGLClientBuffer,
        attrib_list: *const EGLint,
    ) -> EGLImage {
        "eglCreateImageKHR" => egl_ext("EGL_KHR_image"),
        "eglCreateImageKHR" => egl_ext("EGL_KHR_image_base"),
    }
    fn eglDestroyImageKHR(dpy: EGLDisplay, image: EGLImage) -> EGLBoolean {
        "eglDestroyImageKHR" => egl_ext("EGL_KHR_image"),
        "eglDestroyImageKHR" => egl_ext("EGL_KHR_image_base"),
    }
}
