use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::c_void;
use std::rc::Rc;

use crate::capability::ContextCapabilities;
use crate::context::ContextIdentity;
use crate::error::ResolveError;
use crate::loader;
use crate::registry::{EntryPoint, Requirement, Target};

fn entry_points(target: Target) -> &'static [EntryPoint] {
    match target {
        Target::Gl => crate::gl::ENTRY_POINTS,
        #[cfg(unix)]
        Target::Egl => crate::egl::ENTRY_POINTS,
        #[cfg(unix)]
        Target::Glx => crate::glx::ENTRY_POINTS,
        #[cfg(windows)]
        Target::Wgl => crate::wgl::ENTRY_POINTS,
        #[allow(unreachable_patterns)]
        _ => unreachable!("target has no thunks on this platform"),
    }
}

/// Per-slot resolution state. Failed is terminal for the owning
/// (thread, identity) pair: the reason is kept so every later call can
/// report the same diagnostic.
enum Slot {
    Unresolved,
    Resolved(*const c_void),
    Failed(Box<ResolveError>),
}

#[derive(Default)]
struct IdentityTables {
    /// computed on first need, immutable afterwards; a context cannot
    /// change its capabilities post-creation.
    caps: Option<Rc<ContextCapabilities>>,
    slots: HashMap<Target, Box<[Slot]>>,
}

impl IdentityTables {
    fn slots_mut(&mut self, target: Target) -> &mut [Slot] {
        self.slots.entry(target).or_insert_with(|| {
            std::iter::repeat_with(|| Slot::Unresolved)
                .take(entry_points(target).len())
                .collect()
        })
    }
}

/// One table per (thread, identity). The map key is None while no context
/// is bound: window-system entry points (eglGetDisplay, wglCreateContext,
/// ...) must resolve before the first context exists.
#[derive(Default)]
struct ThreadState {
    active: Option<Option<ContextIdentity>>,
    tables: HashMap<Option<ContextIdentity>, IdentityTables>,
}

impl ThreadState {
    fn entry(&mut self, key: Option<ContextIdentity>) -> &mut IdentityTables {
        self.tables.entry(key).or_default()
    }
}

thread_local! {
    static THREAD: RefCell<ThreadState> = RefCell::new(ThreadState::default());
}

/// Forgets which table is active for the calling thread; the next dispatch
/// re-reads the current identity and re-selects. Existing tables (and their
/// resolved slots) stay as they are.
pub(crate) fn reset_active() {
    THREAD.with(|state| state.borrow_mut().active = None);
}

#[derive(Debug)]
pub(crate) struct Resolution {
    pub ptr: *const c_void,
    pub symbol: &'static str,
}

/// The lazy-population sequence for one slot: walk the candidates in
/// declared order, evaluating capabilities only when a non-trivial
/// requirement shows up (so bootstrap entry points resolve without a
/// capability query), and fall through to the next candidate when the
/// loader has no symbol for one that qualified.
pub(crate) fn resolve_entry(
    entry_point: &EntryPoint,
    caps_cache: &mut Option<Rc<ContextCapabilities>>,
    compute_caps: impl FnOnce() -> Result<ContextCapabilities, String>,
    lookup: impl Fn(&'static str) -> *const c_void,
) -> Result<Resolution, Box<ResolveError>> {
    let mut compute_caps = Some(compute_caps);
    let mut attempted: Vec<&'static str> = Vec::new();
    let mut any_satisfied = false;

    for candidate in entry_point.aliases {
        let satisfied = match candidate.requires {
            Requirement::Always => true,
            ref requirement => {
                if caps_cache.is_none() {
                    let compute = compute_caps.take().expect("capabilities computed twice");
                    match compute() {
                        Ok(caps) => *caps_cache = Some(Rc::new(caps)),
                        Err(detail) => {
                            return Err(Box::new(ResolveError::IdentityUnavailable {
                                function: entry_point.name,
                                detail: Some(detail),
                            }));
                        }
                    }
                }
                requirement.satisfied_by(caps_cache.as_ref().expect("capabilities just computed"))
            }
        };
        if !satisfied {
            continue;
        }
        any_satisfied = true;
        if attempted.contains(&candidate.symbol) {
            continue;
        }
        let ptr = lookup(candidate.symbol);
        if !ptr.is_null() {
            return Ok(Resolution {
                ptr,
                symbol: candidate.symbol,
            });
        }
        attempted.push(candidate.symbol);
    }

    if any_satisfied {
        Err(Box::new(ResolveError::LoaderNotFound {
            function: entry_point.name,
            attempted,
        }))
    } else {
        Err(Box::new(ResolveError::Unsupported {
            function: entry_point.name,
            requirements: entry_point
                .aliases
                .iter()
                .map(|candidate| candidate.requires.to_string())
                .collect(),
        }))
    }
}

/// The thunk entry. Returns a callable pointer or does not return at all:
/// an unresolvable slot terminates the process with a diagnostic instead of
/// letting the call reach address zero.
pub(crate) fn dispatch(target: Target, index: u16) -> *const c_void {
    match try_dispatch(target, index as usize) {
        Ok(ptr) => ptr,
        Err(err) => resolution_failure(&err),
    }
}

#[cold]
#[inline(never)]
fn resolution_failure(err: &ResolveError) -> ! {
    log::error!("{err}");
    eprintln!("{err}");
    std::process::abort()
}

fn try_dispatch(target: Target, index: usize) -> Result<*const c_void, Box<ResolveError>> {
    THREAD.with(|cell| {
        let mut state = cell.borrow_mut();

        let mut key = match state.active {
            Some(key) => key,
            None => {
                let key = loader::process().current_identity();
                state.active = Some(key);
                key
            }
        };

        match state.entry(key).slots_mut(target)[index] {
            Slot::Resolved(ptr) => return Ok(ptr),
            Slot::Failed(ref err) => return Err(err.clone()),
            Slot::Unresolved => {}
        }

        // slow path. confirm the identity before resolving: the slot may be
        // unresolved simply because the thread switched contexts since the
        // active table was selected.
        let fresh = loader::process().current_identity();
        if state.active != Some(fresh) {
            log::debug!("context identity changed, switching dispatch table");
            state.active = Some(fresh);
            key = fresh;
            match state.entry(key).slots_mut(target)[index] {
                Slot::Resolved(ptr) => return Ok(ptr),
                Slot::Failed(ref err) => return Err(err.clone()),
                Slot::Unresolved => {}
            }
        }

        let entry_point = &entry_points(target)[index];

        if target == Target::Gl && key.is_none() {
            let err = Box::new(ResolveError::IdentityUnavailable {
                function: entry_point.name,
                detail: None,
            });
            state.entry(key).slots_mut(target)[index] = Slot::Failed(err.clone());
            return Err(err);
        }

        let mut caps_cache = state.entry(key).caps.clone();
        let result = resolve_entry(
            entry_point,
            &mut caps_cache,
            || loader::process().context_capabilities(key.as_ref()).inspect(|caps| {
                log::debug!("computed capabilities for {key:?}: {caps:?}");
            }),
            |symbol| loader::process().resolve(target, key.as_ref(), symbol),
        );

        let entry = state.entry(key);
        entry.caps = caps_cache;
        match result {
            Ok(resolution) => {
                log::debug!(
                    "resolved {} via {} for {key:?}",
                    entry_point.name,
                    resolution.symbol,
                );
                entry.slots_mut(target)[index] = Slot::Resolved(resolution.ptr);
                Ok(resolution.ptr)
            }
            Err(err) => {
                entry.slots_mut(target)[index] = Slot::Failed(err.clone());
                Err(err)
            }
        }
    })
}

/// Runs `f` against the capabilities of the thread's current identity,
/// computing and caching them if this is the first query. None when no
/// context is bound or the capability queries are unanswerable.
pub(crate) fn with_current_capabilities<R>(
    f: impl FnOnce(&ContextCapabilities) -> R,
) -> Option<R> {
    let key = loader::process().current_identity()?;
    THREAD.with(|cell| {
        let mut state = cell.borrow_mut();
        let entry = state.entry(Some(key));
        if entry.caps.is_none() {
            match loader::process().context_capabilities(Some(&key)) {
                Ok(caps) => entry.caps = Some(Rc::new(caps)),
                Err(detail) => {
                    log::warn!("could not compute capabilities for {key:?}: {detail}");
                    return None;
                }
            }
        }
        entry.caps.as_deref().map(f)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::BTreeSet;
    use std::ptr::null;

    use super::*;
    use crate::capability::{
        CapabilitySet, Flavor, Profile, Version, WindowSystem, WsiCapabilitySet,
    };
    use crate::registry::{AliasCandidate, gl, gl_ext};

    static BUFFER_DATA: EntryPoint = EntryPoint {
        name: "glBufferData",
        aliases: &[
            AliasCandidate {
                symbol: "glBufferData",
                requires: gl(1, 5),
            },
            AliasCandidate {
                symbol: "glBufferDataARB",
                requires: gl_ext("GL_ARB_vertex_buffer_object"),
            },
        ],
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

    fn fake_address(n: usize) -> *const c_void {
        n as *const c_void
    }

    #[test]
    fn test_unsupported_when_no_candidate_qualifies() {
        let mut cache = Some(Rc::new(desktop_caps(Version(1, 4), &[])));
        let err = resolve_entry(
            &BUFFER_DATA,
            &mut cache,
            || unreachable!("capabilities already cached"),
            |_| fake_address(0x1000),
        )
        .unwrap_err();
        match *err {
            ResolveError::Unsupported { function, ref requirements } => {
                assert_eq!(function, "glBufferData");
                assert_eq!(requirements.len(), 2);
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_loader_not_found_when_symbols_absent() {
        let mut cache = Some(Rc::new(desktop_caps(Version(1, 5), &[])));
        let err = resolve_entry(&BUFFER_DATA, &mut cache, || unreachable!(), |_| null())
            .unwrap_err();
        match *err {
            ResolveError::LoaderNotFound { function, ref attempted } => {
                assert_eq!(function, "glBufferData");
                assert_eq!(*attempted, vec!["glBufferData"]);
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extension_candidate_resolves() {
        let mut cache = Some(Rc::new(desktop_caps(
            Version(1, 4),
            &["GL_ARB_vertex_buffer_object"],
        )));
        let resolution = resolve_entry(&BUFFER_DATA, &mut cache, || unreachable!(), |symbol| {
            match symbol {
                "glBufferDataARB" => fake_address(0x2000),
                _ => null(),
            }
        })
        .unwrap();
        assert_eq!(resolution.symbol, "glBufferDataARB");
        assert_eq!(resolution.ptr, fake_address(0x2000));
    }

    #[test]
    fn test_loader_falls_through_null_candidates() {
        // core symbol qualified but the loader has nothing for it; the
        // extension alias still saves the day.
        let mut cache = Some(Rc::new(desktop_caps(
            Version(1, 5),
            &["GL_ARB_vertex_buffer_object"],
        )));
        let resolution = resolve_entry(&BUFFER_DATA, &mut cache, || unreachable!(), |symbol| {
            match symbol {
                "glBufferDataARB" => fake_address(0x3000),
                _ => null(),
            }
        })
        .unwrap();
        assert_eq!(resolution.symbol, "glBufferDataARB");
    }

    #[test]
    fn test_capabilities_computed_lazily_and_once() {
        static ALWAYS: EntryPoint = EntryPoint {
            name: "glGetString",
            aliases: &[AliasCandidate {
                symbol: "glGetString",
                requires: crate::registry::always(),
            }],
        };
        // an always-available entry point must resolve without a capability
        // query at all.
        let mut cache = None;
        let resolution = resolve_entry(
            &ALWAYS,
            &mut cache,
            || panic!("capability query issued for an always-present symbol"),
            |_| fake_address(0x4000),
        )
        .unwrap();
        assert_eq!(resolution.ptr, fake_address(0x4000));
        assert!(cache.is_none());

        // a versioned one computes them exactly once and leaves them cached.
        let computed = Cell::new(0);
        let mut cache = None;
        let _ = resolve_entry(
            &BUFFER_DATA,
            &mut cache,
            || {
                computed.set(computed.get() + 1);
                Ok(desktop_caps(Version(1, 5), &[]))
            },
            |_| fake_address(0x5000),
        )
        .unwrap();
        assert_eq!(computed.get(), 1);
        assert!(cache.is_some());
    }

    #[test]
    fn test_capability_query_failure_is_identity_error() {
        let mut cache = None;
        let err = resolve_entry(
            &BUFFER_DATA,
            &mut cache,
            || Err("queries unanswered".to_string()),
            |_| fake_address(0x6000),
        )
        .unwrap_err();
        assert!(matches!(*err, ResolveError::IdentityUnavailable { .. }));
    }

    #[test]
    fn test_identity_switch_reuses_existing_table() {
        let identity_a = Some(ContextIdentity::fake(0xa));
        let identity_b = Some(ContextIdentity::fake(0xb));

        let lookups = Cell::new(0);
        let mut resolve_into = |state: &mut ThreadState, key: Option<ContextIdentity>| {
            let entry = state.entry(key);
            if let Slot::Resolved(ptr) = entry.slots_mut(Target::Gl)[0] {
                return ptr;
            }
            let mut caps = entry.caps.clone();
            let resolution = resolve_entry(
                &BUFFER_DATA,
                &mut caps,
                || Ok(desktop_caps(Version(1, 5), &[])),
                |_| {
                    lookups.set(lookups.get() + 1);
                    fake_address(0x7000)
                },
            )
            .unwrap();
            let entry = state.entry(key);
            entry.caps = caps;
            entry.slots_mut(Target::Gl)[0] = Slot::Resolved(resolution.ptr);
            resolution.ptr
        };

        let mut state = ThreadState::default();
        let first = resolve_into(&mut state, identity_a);
        assert_eq!(lookups.get(), 1);
        let _ = resolve_into(&mut state, identity_b);
        assert_eq!(lookups.get(), 2);
        // back to a: the previously populated table must be reused, not
        // re-resolved.
        let again = resolve_into(&mut state, identity_a);
        assert_eq!(lookups.get(), 2);
        assert_eq!(first, again);
    }

    #[test]
    fn test_threads_resolve_independently() {
        // two threads, two identities, same entry point: each reaches its
        // own verdict without touching the other's slots.
        let supported = std::thread::spawn(|| {
            let mut cache = Some(Rc::new(desktop_caps(Version(1, 5), &[])));
            resolve_entry(&BUFFER_DATA, &mut cache, || unreachable!(), |_| {
                fake_address(0x8000)
            })
            .map(|resolution| resolution.ptr as usize)
            .map_err(|err| err.to_string())
        });
        let unsupported = std::thread::spawn(|| {
            let mut cache = Some(Rc::new(desktop_caps(Version(1, 4), &[])));
            resolve_entry(&BUFFER_DATA, &mut cache, || unreachable!(), |_| {
                fake_address(0x8000)
            })
            .map(|resolution| resolution.ptr as usize)
            .map_err(|err| err.to_string())
        });

        assert_eq!(supported.join().unwrap(), Ok(0x8000));
        let err = unsupported.join().unwrap().unwrap_err();
        assert!(err.contains("no provider of glBufferData"));
    }
}
