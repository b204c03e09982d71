use std::collections::BTreeSet;
use std::error;
use std::ffi::CStr;
use std::fmt;

use crate::types::{GLenum, GLint, GLubyte, GLuint};

pub(crate) const GL_VERSION: GLenum = 0x1F02;
pub(crate) const GL_EXTENSIONS: GLenum = 0x1F03;
pub(crate) const GL_NUM_EXTENSIONS: GLenum = 0x821D;
pub(crate) const GL_CONTEXT_PROFILE_MASK: GLenum = 0x9126;
pub(crate) const GL_CONTEXT_CORE_PROFILE_BIT: GLint = 0x1;
pub(crate) const GL_CONTEXT_COMPATIBILITY_PROFILE_BIT: GLint = 0x2;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version(pub u16, pub u16);

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}.{}", self.0, self.1))
    }
}

/// Parses the leading "major.minor" out of a version string, ignoring
/// whatever release/vendor garbage follows ("4.6.0 NVIDIA 535.54", "1.4
/// (2.1 Mesa 23.0)", ...).
pub(crate) fn parse_leading_version(s: &str) -> Option<Version> {
    let mut parts = s.split(['.', ' ']);
    let major: u16 = parts.next()?.parse().ok()?;
    let minor: u16 = parts.next()?.parse().ok()?;
    Some(Version(major, minor))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flavor {
    Desktop,
    Gles,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Profile {
    Core,
    Compatibility,
    /// Pre-3.2 desktop contexts and gles contexts have no profile notion.
    Unknown,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WindowSystem {
    Egl,
    Glx,
    Wgl,
}

/// What one rendering context is capable of. Computed once per context
/// identity and immutable from then on: a context cannot gain or lose
/// extensions after creation.
#[derive(Clone, Debug)]
pub struct CapabilitySet {
    pub flavor: Flavor,
    pub version: Version,
    pub profile: Profile,
    pub extensions: BTreeSet<String>,
}

impl CapabilitySet {
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }
}

/// The window-system side of the capability story (egl/glx/wgl version and
/// extensions). Unlike gl capabilities this is obtainable without a bound
/// context, which is what lets context-creation entry points resolve before
/// any context exists.
#[derive(Clone, Debug)]
pub struct WsiCapabilitySet {
    pub system: WindowSystem,
    pub version: Version,
    pub extensions: BTreeSet<String>,
}

impl WsiCapabilitySet {
    pub(crate) fn bare(system: WindowSystem) -> Self {
        Self {
            system,
            version: Version(1, 0),
            extensions: BTreeSet::new(),
        }
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }
}

#[derive(Clone, Debug)]
pub struct ContextCapabilities {
    /// None when no rendering context is bound on the querying thread.
    pub gl: Option<CapabilitySet>,
    pub wsi: WsiCapabilitySet,
}

// ----
// probing

pub(crate) type GetStringFn = unsafe extern "system" fn(name: GLenum) -> *const GLubyte;
pub(crate) type GetIntegervFn = unsafe extern "system" fn(pname: GLenum, data: *mut GLint);
pub(crate) type GetStringiFn =
    unsafe extern "system" fn(name: GLenum, index: GLuint) -> *const GLubyte;

#[derive(Debug)]
pub(crate) enum ProbeError {
    NoVersionString,
    BadVersionString(String),
}

impl error::Error for ProbeError {}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVersionString => {
                f.write_str("glGetString(GL_VERSION) returned null; the context is not actually current")
            }
            Self::BadVersionString(s) => {
                f.write_fmt(format_args!("could not parse gl version string {s:?}"))
            }
        }
    }
}

/// The raw query functions needed to compute a [CapabilitySet]. These are
/// resolved straight through the symbol loader, not through the dispatch
/// machinery, so capability computation cannot recurse into itself.
pub(crate) struct GlProbe {
    pub get_string: GetStringFn,
    pub get_integerv: GetIntegervFn,
    pub get_stringi: Option<GetStringiFn>,
}

impl GlProbe {
    pub fn compute(&self) -> Result<CapabilitySet, ProbeError> {
        let version_str = unsafe { cstr_or_none((self.get_string)(GL_VERSION)) }
            .ok_or(ProbeError::NoVersionString)?;
        let (flavor, version) = parse_version_string(&version_str)
            .ok_or_else(|| ProbeError::BadVersionString(version_str.clone()))?;

        let profile = if flavor == Flavor::Desktop && version >= Version(3, 2) {
            let mut mask: GLint = 0;
            unsafe { (self.get_integerv)(GL_CONTEXT_PROFILE_MASK, &mut mask) };
            if mask & GL_CONTEXT_CORE_PROFILE_BIT != 0 {
                Profile::Core
            } else if mask & GL_CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
                Profile::Compatibility
            } else {
                Profile::Unknown
            }
        } else {
            Profile::Unknown
        };

        // NOTE: 3.0 and up use the indexed extension query; the single-string
        // form was removed from core profiles, so the two are mutually
        // exclusive in practice.
        let extensions = match self.get_stringi {
            Some(get_stringi) if version >= Version(3, 0) => {
                let mut num: GLint = 0;
                unsafe { (self.get_integerv)(GL_NUM_EXTENSIONS, &mut num) };
                let mut extensions = BTreeSet::new();
                for index in 0..num.max(0) as GLuint {
                    if let Some(name) =
                        unsafe { cstr_or_none(get_stringi(GL_EXTENSIONS, index)) }
                    {
                        extensions.insert(name);
                    }
                }
                extensions
            }
            _ => {
                let joined = unsafe { cstr_or_none((self.get_string)(GL_EXTENSIONS)) };
                if joined.is_none() {
                    log::warn!("glGetString(GL_EXTENSIONS) returned null, assuming no extensions");
                }
                split_extension_string(joined.as_deref().unwrap_or(""))
            }
        };

        Ok(CapabilitySet {
            flavor,
            version,
            profile,
            extensions,
        })
    }
}

unsafe fn cstr_or_none(ptr: *const GLubyte) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(
            unsafe { CStr::from_ptr(ptr.cast()) }
                .to_string_lossy()
                .into_owned(),
        )
    }
}

pub(crate) fn parse_version_string(s: &str) -> Option<(Flavor, Version)> {
    // gles version strings are prefixed: "OpenGL ES 3.2 ...", "OpenGL ES-CM
    // 1.1", "OpenGL ES-CL 1.0"; desktop ones start with the number.
    for prefix in ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return parse_leading_version(rest).map(|version| (Flavor::Gles, version));
        }
    }
    parse_leading_version(s).map(|version| (Flavor::Desktop, version))
}

pub(crate) fn split_extension_string(s: &str) -> BTreeSet<String> {
    s.split_ascii_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_string() {
        assert_eq!(
            parse_version_string("4.6.0 NVIDIA 535.54.03"),
            Some((Flavor::Desktop, Version(4, 6)))
        );
        assert_eq!(
            parse_version_string("2.1 Metal - 76.3"),
            Some((Flavor::Desktop, Version(2, 1)))
        );
        assert_eq!(
            parse_version_string("OpenGL ES 3.2 Mesa 23.0.4"),
            Some((Flavor::Gles, Version(3, 2)))
        );
        assert_eq!(
            parse_version_string("OpenGL ES-CM 1.1"),
            Some((Flavor::Gles, Version(1, 1)))
        );
        assert_eq!(parse_version_string("garbage"), None);
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version(1, 4) < Version(1, 5));
        assert!(Version(2, 0) > Version(1, 9));
        assert!(Version(3, 0) >= Version(3, 0));
    }

    // fake query functions for exercising GlProbe::compute without a driver.

    unsafe extern "system" fn legacy_get_string(name: GLenum) -> *const GLubyte {
        match name {
            GL_VERSION => c"2.1 Mesa 23.0.4".as_ptr().cast(),
            GL_EXTENSIONS => c"GL_ARB_vertex_buffer_object GL_EXT_framebuffer_object"
                .as_ptr()
                .cast(),
            _ => std::ptr::null(),
        }
    }

    unsafe extern "system" fn indexed_get_string(name: GLenum) -> *const GLubyte {
        match name {
            GL_VERSION => c"3.3.0 NVIDIA 535.54.03".as_ptr().cast(),
            _ => std::ptr::null(),
        }
    }

    unsafe extern "system" fn indexed_get_integerv(pname: GLenum, data: *mut GLint) {
        let value = match pname {
            GL_NUM_EXTENSIONS => 2,
            GL_CONTEXT_PROFILE_MASK => GL_CONTEXT_CORE_PROFILE_BIT,
            _ => 0,
        };
        unsafe { *data = value };
    }

    unsafe extern "system" fn indexed_get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
        match (name, index) {
            (GL_EXTENSIONS, 0) => c"GL_ARB_vertex_buffer_object".as_ptr().cast(),
            (GL_EXTENSIONS, 1) => c"GL_EXT_framebuffer_object".as_ptr().cast(),
            _ => std::ptr::null(),
        }
    }

    unsafe extern "system" fn noop_get_integerv(_pname: GLenum, _data: *mut GLint) {}

    #[test]
    fn test_legacy_extension_probe() {
        let probe = GlProbe {
            get_string: legacy_get_string,
            get_integerv: noop_get_integerv,
            get_stringi: None,
        };
        let caps = probe.compute().unwrap();
        assert_eq!(caps.flavor, Flavor::Desktop);
        assert_eq!(caps.version, Version(2, 1));
        assert_eq!(caps.profile, Profile::Unknown);
        assert!(caps.has_extension("GL_ARB_vertex_buffer_object"));
        assert!(caps.has_extension("GL_EXT_framebuffer_object"));
        assert!(!caps.has_extension("GL_KHR_debug"));
    }

    // the indexed and the legacy query format must derive the same effective
    // extension set.
    #[test]
    fn test_extension_format_independence() {
        let legacy = GlProbe {
            get_string: legacy_get_string,
            get_integerv: noop_get_integerv,
            get_stringi: None,
        };
        let indexed = GlProbe {
            get_string: indexed_get_string,
            get_integerv: indexed_get_integerv,
            get_stringi: Some(indexed_get_stringi),
        };
        assert_eq!(
            legacy.compute().unwrap().extensions,
            indexed.compute().unwrap().extensions
        );
    }

    #[test]
    fn test_indexed_probe_reads_profile() {
        let probe = GlProbe {
            get_string: indexed_get_string,
            get_integerv: indexed_get_integerv,
            get_stringi: Some(indexed_get_stringi),
        };
        let caps = probe.compute().unwrap();
        assert_eq!(caps.version, Version(3, 3));
        assert_eq!(caps.profile, Profile::Core);
    }

    unsafe extern "system" fn null_get_string(_name: GLenum) -> *const GLubyte {
        std::ptr::null()
    }

    #[test]
    fn test_probe_without_current_context_fails() {
        let probe = GlProbe {
            get_string: null_get_string,
            get_integerv: noop_get_integerv,
            get_stringi: None,
        };
        assert!(matches!(probe.compute(), Err(ProbeError::NoVersionString)));
    }
}
