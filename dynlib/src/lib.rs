use std::error;
use std::ffi::CStr;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Open { filename: String, reason: String },
    Lookup { symbol: String, reason: String },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { filename, reason } => {
                f.write_fmt(format_args!("could not open {filename}: {reason}"))
            }
            Self::Lookup { symbol, reason } => {
                f.write_fmt(format_args!("could not look up {symbol}: {reason}"))
            }
        }
    }
}

#[cfg(unix)]
mod imp {
    use std::ffi::{CStr, c_void};
    use std::mem::transmute_copy;
    use std::ptr::NonNull;

    use libc::{dlclose, dlerror, dlopen, dlsym};

    use super::Error;

    fn take_dlerror() -> Option<String> {
        let err = unsafe { dlerror() };
        if err.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned())
        }
    }

    #[derive(Debug)]
    pub struct DynLib(NonNull<c_void>);

    impl DynLib {
        pub fn load(filename: &CStr) -> Result<Self, Error> {
            let handle = unsafe { dlopen(filename.as_ptr(), libc::RTLD_LAZY) };
            match NonNull::new(handle) {
                Some(handle) => Ok(Self(handle)),
                None => Err(Error::Open {
                    filename: filename.to_string_lossy().into_owned(),
                    reason: take_dlerror().unwrap_or_else(|| "unknown dlopen error".to_string()),
                }),
            }
        }

        pub fn lookup<F: Sized>(&self, name: &CStr) -> Result<F, Error> {
            // NOTE: a symbol may legitimately resolve to null, dlerror is the
            // only way to tell that apart from a missing symbol.
            _ = take_dlerror();

            let addr = unsafe { dlsym(self.0.as_ptr(), name.as_ptr()) };

            match take_dlerror() {
                Some(reason) => Err(Error::Lookup {
                    symbol: name.to_string_lossy().into_owned(),
                    reason,
                }),
                None => Ok(unsafe { transmute_copy(&addr) }),
            }
        }
    }

    impl Drop for DynLib {
        fn drop(&mut self) {
            unsafe {
                dlclose(self.0.as_ptr());
            }
        }
    }
}

#[cfg(windows)]
mod imp {
    use std::ffi::{CStr, c_void};
    use std::mem::transmute_copy;
    use std::ptr::NonNull;

    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::libloaderapi::{FreeLibrary, GetProcAddress, LoadLibraryA};

    use super::Error;

    pub struct DynLib(NonNull<c_void>);

    impl DynLib {
        pub fn load(filename: &CStr) -> Result<Self, Error> {
            let handle = unsafe { LoadLibraryA(filename.as_ptr()) };
            match NonNull::new(handle.cast::<c_void>()) {
                Some(handle) => Ok(Self(handle)),
                None => Err(Error::Open {
                    filename: filename.to_string_lossy().into_owned(),
                    reason: format!("system error {:#x}", unsafe { GetLastError() }),
                }),
            }
        }

        pub fn lookup<F: Sized>(&self, name: &CStr) -> Result<F, Error> {
            let addr = unsafe { GetProcAddress(self.0.as_ptr().cast(), name.as_ptr()) };
            if addr.is_null() {
                Err(Error::Lookup {
                    symbol: name.to_string_lossy().into_owned(),
                    reason: format!("system error {:#x}", unsafe { GetLastError() }),
                })
            } else {
                Ok(unsafe { transmute_copy(&addr) })
            }
        }
    }

    impl Drop for DynLib {
        fn drop(&mut self) {
            unsafe {
                FreeLibrary(self.0.as_ptr().cast());
            }
        }
    }
}

pub use imp::DynLib;

#[macro_export]
macro_rules! opaque_struct {
    ($name:ident) => {
        #[repr(C)]
        pub struct $name {
            _data: [u8; 0],
            _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
        }
    };
}

#[test]
fn test_load_missing() {
    let err = DynLib::load(c"libdefinitely-not-a-real-library.so.99").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("could not open libdefinitely-not-a-real-library.so.99"));
}
