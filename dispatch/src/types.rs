// https://registry.khronos.org/OpenGL/api/GL/glcorearb.h

pub type GLbitfield = std::ffi::c_uint;
pub type GLboolean = std::ffi::c_uchar;
pub type GLbyte = std::ffi::c_char;
pub type GLchar = std::ffi::c_char;
pub type GLclampd = std::ffi::c_double;
pub type GLclampf = std::ffi::c_float;
pub type GLdouble = std::ffi::c_double;
pub type GLenum = std::ffi::c_uint;
pub type GLfloat = std::ffi::c_float;
pub type GLint = std::ffi::c_int;
pub type GLint64 = i64;
pub type GLintptr = isize;
pub type GLshort = std::ffi::c_short;
pub type GLsizei = std::ffi::c_int;
pub type GLsizeiptr = isize;
pub type GLsync = *mut std::ffi::c_void;
pub type GLubyte = std::ffi::c_uchar;
pub type GLuint = std::ffi::c_uint;
pub type GLuint64 = u64;
pub type GLushort = std::ffi::c_ushort;

#[allow(non_snake_case)]
pub type GLDEBUGPROC = Option<
    extern "system" fn(
        source: GLenum,
        r#type: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        userParam: *mut std::ffi::c_void,
    ),
>;

// https://registry.khronos.org/EGL/api/EGL/eglplatform.h

pub type EGLNativeDisplayType = *mut std::ffi::c_void;
pub type EGLNativePixmapType = *mut std::ffi::c_void;
pub type EGLNativeWindowType = *mut std::ffi::c_void;

// https://registry.khronos.org/EGL/api/EGL/egl.h

pub type EGLBoolean = std::ffi::c_uint;
pub type EGLint = i32;
pub type EGLenum = std::ffi::c_uint;
pub type EGLDisplay = *mut std::ffi::c_void;
pub type EGLConfig = *mut std::ffi::c_void;
pub type EGLSurface = *mut std::ffi::c_void;
pub type EGLContext = *mut std::ffi::c_void;
pub type EGLClientBuffer = *mut std::ffi::c_void;
pub type EGLSync = *mut std::ffi::c_void;
pub type EGLAttrib = isize;
pub type EGLTime = u64;
pub type EGLImage = *mut std::ffi::c_void;
pub type __eglMustCastToProperFunctionPointerType = Option<unsafe extern "C" fn()>;

// https://registry.khronos.org/OpenGL/api/GL/glx.h
// NOTE: the X11 structs are only ever passed around by pointer here, so they
// can stay opaque.

dynlib::opaque_struct!(XDisplay);
dynlib::opaque_struct!(XVisualInfo);

pub type Bool = std::ffi::c_int;
pub type XID = std::ffi::c_ulong;
pub type GLXDrawable = XID;
pub type GLXPixmap = XID;
pub type GLXContext = *mut std::ffi::c_void;
pub type GLXFBConfig = *mut std::ffi::c_void;
pub type __GLXextFuncPtr = Option<unsafe extern "C" fn()>;

// wgl; HDC/HGLRC are opaque handle pointers, same layout as in wingdi.h.

pub type HDC = *mut std::ffi::c_void;
pub type HGLRC = *mut std::ffi::c_void;
pub type BOOL = std::ffi::c_int;
pub type UINT = std::ffi::c_uint;
pub type FLOAT = std::ffi::c_float;
pub type LPCSTR = *const std::ffi::c_char;
pub type PROC = Option<unsafe extern "system" fn() -> isize>;
