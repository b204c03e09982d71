struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        println!(
            "{level:<5} {file}:{line} > {text}",
            level = record.level(),
            file = record.file().unwrap_or_else(|| record.target()),
            line = record
                .line()
                .map_or_else(|| "??".to_string(), |line| line.to_string()),
            text = record.args(),
        );
    }

    fn flush(&self) {}
}

impl Logger {
    fn init() {
        log::set_logger(&Logger).expect("could not set logger");
        log::set_max_level(log::LevelFilter::Trace);
    }
}

fn main() -> anyhow::Result<()> {
    Logger::init();

    log::info!("current identity: {:?}", dispatch::current_identity());

    #[cfg(unix)]
    egl_smoke()?;

    Ok(())
}

/// Brings up a surfaceless egl context and pokes at the dispatch layer
/// through it: thunked egl calls before any context exists, thunked gl
/// calls and capability queries after one is bound.
#[cfg(unix)]
fn egl_smoke() -> anyhow::Result<()> {
    use std::ffi::CStr;
    use std::ptr::null_mut;

    use anyhow::bail;

    use dispatch::egl::*;
    use dispatch::types::*;

    const EGL_NONE: EGLint = 0x3038;
    const EGL_OPENGL_ES_API: EGLenum = 0x30A0;
    const EGL_OPENGL_API: EGLenum = 0x30A2;
    const GL_VENDOR: GLenum = 0x1F00;
    const GL_RENDERER: GLenum = 0x1F01;

    unsafe {
        let display = eglGetDisplay(null_mut());
        if display.is_null() {
            bail!("could not get the default egl display");
        }

        let (mut major, mut minor) = (0, 0);
        if eglInitialize(display, &mut major, &mut minor) == 0 {
            bail!("could not initialize egl (error {:#x})", eglGetError());
        }
        log::info!("initialized egl {major}.{minor}");

        if eglBindAPI(EGL_OPENGL_API) == 0 && eglBindAPI(EGL_OPENGL_ES_API) == 0 {
            bail!("could not bind either gl api (error {:#x})", eglGetError());
        }

        let mut config: EGLConfig = null_mut();
        let mut num_configs: EGLint = 0;
        let config_attrs = [EGL_NONE];
        if eglChooseConfig(display, config_attrs.as_ptr(), &mut config, 1, &mut num_configs) == 0
            || num_configs == 0
        {
            bail!("could not choose a config (error {:#x})", eglGetError());
        }

        let context_attrs = [EGL_NONE];
        let context = eglCreateContext(display, config, null_mut(), context_attrs.as_ptr());
        if context.is_null() {
            bail!("could not create a context (error {:#x})", eglGetError());
        }

        if eglMakeCurrent(display, null_mut(), null_mut(), context) == 0 {
            bail!(
                "could not make the context current without a surface \
                 (error {:#x}; EGL_KHR_surfaceless_context missing?)",
                eglGetError(),
            );
        }
        dispatch::notify_context_changed();

        log::info!("identity: {:?}", dispatch::current_identity());
        log::info!("gl version: {:?}", dispatch::gl_version());
        log::info!("desktop gl: {}", dispatch::is_desktop_gl());
        log::info!(
            "vertex buffer objects: {}",
            dispatch::gl_version() >= Some(dispatch::Version(1, 5))
                || dispatch::has_gl_extension("GL_ARB_vertex_buffer_object"),
        );

        let vendor = dispatch::gl::glGetString(GL_VENDOR);
        let renderer = dispatch::gl::glGetString(GL_RENDERER);
        if !vendor.is_null() && !renderer.is_null() {
            log::info!(
                "driver: {} / {}",
                CStr::from_ptr(vendor.cast()).to_string_lossy(),
                CStr::from_ptr(renderer.cast()).to_string_lossy(),
            );
        }

        eglMakeCurrent(display, null_mut(), null_mut(), null_mut());
        dispatch::notify_context_changed();
        eglDestroyContext(display, context);
        eglTerminate(display);
    }

    Ok(())
}
