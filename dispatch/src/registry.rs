use std::fmt;

use crate::capability::{ContextCapabilities, Flavor, Version};

/// Which native api a table of entry points belongs to. Mirrors the split of
/// the khronos registry files (gl.xml, egl.xml, glx.xml, wgl.xml).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Target {
    Gl,
    Egl,
    Glx,
    Wgl,
}

/// One logical function. `aliases` is the ordered list of symbols that may
/// provide it, most preferred first; the list is fixed at build time and
/// never mutated.
pub struct EntryPoint {
    pub name: &'static str,
    pub aliases: &'static [AliasCandidate],
}

pub struct AliasCandidate {
    pub symbol: &'static str,
    pub requires: Requirement,
}

/// The capability predicate attached to one alias candidate. Evaluation is
/// pure: same capabilities in, same answer out.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Requirement {
    Always,
    /// desktop gl at or above the given version.
    Gl(Version),
    /// gles at or above the given version.
    Gles(Version),
    /// gles 1.x only; the fixed-function entry points disappeared in 2.0.
    Gles1,
    /// a gl or gles extension.
    GlExt(&'static str),
    Glx(Version),
    GlxExt(&'static str),
    Egl(Version),
    EglExt(&'static str),
    WglExt(&'static str),
}

pub const fn always() -> Requirement {
    Requirement::Always
}

pub const fn gl(major: u16, minor: u16) -> Requirement {
    Requirement::Gl(Version(major, minor))
}

pub const fn gles(major: u16, minor: u16) -> Requirement {
    Requirement::Gles(Version(major, minor))
}

pub const fn gles1() -> Requirement {
    Requirement::Gles1
}

pub const fn gl_ext(name: &'static str) -> Requirement {
    Requirement::GlExt(name)
}

pub const fn glx(major: u16, minor: u16) -> Requirement {
    Requirement::Glx(Version(major, minor))
}

pub const fn glx_ext(name: &'static str) -> Requirement {
    Requirement::GlxExt(name)
}

pub const fn egl(major: u16, minor: u16) -> Requirement {
    Requirement::Egl(Version(major, minor))
}

pub const fn egl_ext(name: &'static str) -> Requirement {
    Requirement::EglExt(name)
}

pub const fn wgl_ext(name: &'static str) -> Requirement {
    Requirement::WglExt(name)
}

impl Requirement {
    pub fn satisfied_by(&self, caps: &ContextCapabilities) -> bool {
        use crate::capability::WindowSystem;

        let gl_caps = caps.gl.as_ref();
        match *self {
            Self::Always => true,
            Self::Gl(min) => {
                gl_caps.is_some_and(|gl| gl.flavor == Flavor::Desktop && gl.version >= min)
            }
            Self::Gles(min) => {
                gl_caps.is_some_and(|gl| gl.flavor == Flavor::Gles && gl.version >= min)
            }
            Self::Gles1 => gl_caps.is_some_and(|gl| {
                gl.flavor == Flavor::Gles && gl.version >= Version(1, 0) && gl.version < Version(2, 0)
            }),
            Self::GlExt(name) => gl_caps.is_some_and(|gl| gl.has_extension(name)),
            Self::Glx(min) => caps.wsi.system == WindowSystem::Glx && caps.wsi.version >= min,
            Self::GlxExt(name) => {
                caps.wsi.system == WindowSystem::Glx && caps.wsi.has_extension(name)
            }
            Self::Egl(min) => caps.wsi.system == WindowSystem::Egl && caps.wsi.version >= min,
            Self::EglExt(name) => {
                caps.wsi.system == WindowSystem::Egl && caps.wsi.has_extension(name)
            }
            Self::WglExt(name) => {
                caps.wsi.system == WindowSystem::Wgl && caps.wsi.has_extension(name)
            }
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Always => f.write_str("always available"),
            Self::Gl(min) => f.write_fmt(format_args!("desktop gl >= {min}")),
            Self::Gles(min) => f.write_fmt(format_args!("gles >= {min}")),
            Self::Gles1 => f.write_str("gles 1.x"),
            Self::GlExt(name) => f.write_fmt(format_args!("gl extension {name}")),
            Self::Glx(min) => f.write_fmt(format_args!("glx >= {min}")),
            Self::GlxExt(name) => f.write_fmt(format_args!("glx extension {name}")),
            Self::Egl(min) => f.write_fmt(format_args!("egl >= {min}")),
            Self::EglExt(name) => f.write_fmt(format_args!("egl extension {name}")),
            Self::WglExt(name) => f.write_fmt(format_args!("wgl extension {name}")),
        }
    }
}

/// Picks the first candidate whose requirement holds. `None` means the
/// function exists in the table but the context does not provide it; an
/// expected outcome (the caller forgot a capability check), distinct from a
/// loader failure.
pub fn best_candidate<'a>(
    entry_point: &'a EntryPoint,
    caps: &ContextCapabilities,
) -> Option<&'a AliasCandidate> {
    entry_point
        .aliases
        .iter()
        .find(|candidate| candidate.requires.satisfied_by(caps))
}

/// Declares one target's entry-point table and its thunks in one go: a
/// `Id` enum whose discriminants index into `ENTRY_POINTS`, the static
/// table itself, and one `extern "system"` thunk per entry point with the
/// exact native signature, dispatching through the calling thread's table.
macro_rules! entry_points {
    (
        target: $target:ident;
        $(
            fn $name:ident($($arg:ident: $argty:ty),* $(,)?) $(-> $ret:ty)? {
                $($symbol:literal => $req:expr),+ $(,)?
            }
        )+
    ) => {
        #[allow(non_camel_case_types)]
        #[allow(clippy::enum_variant_names)]
        #[derive(Clone, Copy)]
        #[repr(u16)]
        pub(crate) enum Id {
            $($name),+
        }

        pub(crate) static ENTRY_POINTS: &[crate::registry::EntryPoint] = &[
            $(
                crate::registry::EntryPoint {
                    name: stringify!($name),
                    aliases: &[
                        $(
                            crate::registry::AliasCandidate {
                                symbol: $symbol,
                                requires: $req,
                            }
                        ),+
                    ],
                },
            )+
        ];

        $(
            #[allow(non_snake_case)]
            pub unsafe extern "system" fn $name($($arg: $argty),*) $(-> $ret)? {
                type Dst = unsafe extern "system" fn($($argty),*) $(-> $ret)?;
                let ptr = crate::table::dispatch(
                    crate::registry::Target::$target,
                    Id::$name as u16,
                );
                #[cfg(all(feature = "debug", debug_assertions))]
                log::trace!("{}", stringify!($name));
                unsafe { std::mem::transmute::<*const std::ffi::c_void, Dst>(ptr)($($arg),*) }
            }
        )+
    };
}

pub(crate) use entry_points;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::capability::{
        CapabilitySet, ContextCapabilities, Profile, WindowSystem, WsiCapabilitySet,
    };

    fn desktop_caps(version: Version, extensions: &[&str]) -> ContextCapabilities {
        ContextCapabilities {
            gl: Some(CapabilitySet {
                flavor: Flavor::Desktop,
                version,
                profile: Profile::Unknown,
                extensions: extensions.iter().map(|s| s.to_string()).collect(),
            }),
            wsi: WsiCapabilitySet {
                system: WindowSystem::Glx,
                version: Version(1, 4),
                extensions: BTreeSet::new(),
            },
        }
    }

    fn find(name: &str) -> &'static EntryPoint {
        crate::gl::ENTRY_POINTS
            .iter()
            .find(|ep| ep.name == name)
            .unwrap()
    }

    #[test]
    fn test_buffer_data_unsupported_on_gl_14() {
        let caps = desktop_caps(Version(1, 4), &[]);
        assert!(best_candidate(find("glBufferData"), &caps).is_none());
    }

    #[test]
    fn test_buffer_data_resolves_core_on_gl_15() {
        let caps = desktop_caps(Version(1, 5), &[]);
        let candidate = best_candidate(find("glBufferData"), &caps).unwrap();
        assert_eq!(candidate.symbol, "glBufferData");
    }

    #[test]
    fn test_buffer_data_resolves_arb_via_extension() {
        let caps = desktop_caps(Version(1, 4), &["GL_ARB_vertex_buffer_object"]);
        let candidate = best_candidate(find("glBufferData"), &caps).unwrap();
        assert_eq!(candidate.symbol, "glBufferDataARB");
    }

    #[test]
    fn test_core_preferred_over_extension() {
        // both the core version and the extension are present; declared
        // order must win, repeatably.
        let caps = desktop_caps(Version(1, 5), &["GL_ARB_vertex_buffer_object"]);
        for _ in 0..3 {
            let candidate = best_candidate(find("glBufferData"), &caps).unwrap();
            assert_eq!(candidate.symbol, "glBufferData");
        }
    }

    #[test]
    fn test_gles1_requirement_excludes_gles2() {
        let gles = |version| ContextCapabilities {
            gl: Some(CapabilitySet {
                flavor: Flavor::Gles,
                version,
                profile: Profile::Unknown,
                extensions: BTreeSet::new(),
            }),
            wsi: WsiCapabilitySet::bare(WindowSystem::Egl),
        };
        assert!(Requirement::Gles1.satisfied_by(&gles(Version(1, 1))));
        assert!(!Requirement::Gles1.satisfied_by(&gles(Version(2, 0))));
        assert!(!Requirement::Gles1.satisfied_by(&desktop_caps(Version(1, 1), &[])));
    }

    #[test]
    fn test_wsi_requirements_check_the_window_system() {
        let caps = desktop_caps(Version(4, 6), &[]);
        // wsi says glx 1.4 in desktop_caps
        assert!(Requirement::Glx(Version(1, 3)).satisfied_by(&caps));
        assert!(!Requirement::Glx(Version(1, 5)).satisfied_by(&caps));
        assert!(!Requirement::Egl(Version(1, 0)).satisfied_by(&caps));
        assert!(!Requirement::WglExt("WGL_ARB_pixel_format").satisfied_by(&caps));
    }
}
