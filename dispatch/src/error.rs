use std::error;
use std::fmt;

/// Why an entry point could not be resolved. All three kinds are fatal at
/// the thunk boundary, but they are kept apart so the diagnostic tells the
/// developer what actually went wrong: a broken driver install, a missing
/// capability check, or calling gl with nothing bound.
#[derive(Clone, Debug)]
pub enum ResolveError {
    /// Every candidate whose requirement held came back symbol-less from
    /// the native loader chain.
    LoaderNotFound {
        function: &'static str,
        attempted: Vec<&'static str>,
    },
    /// No candidate's requirement held under the current capabilities.
    Unsupported {
        function: &'static str,
        requirements: Vec<String>,
    },
    /// No rendering context was current on the calling thread at resolution
    /// time (or the claimed context turned out not to answer queries).
    IdentityUnavailable {
        function: &'static str,
        detail: Option<String>,
    },
}

impl error::Error for ResolveError {}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoaderNotFound {
                function,
                attempted,
            } => f.write_fmt(format_args!(
                "no native symbol found for {function} (tried: {}); \
                 the gl driver or library installation looks broken",
                attempted.join(", "),
            )),
            Self::Unsupported {
                function,
                requirements,
            } => f.write_fmt(format_args!(
                "no provider of {function} found, requires one of: {}; \
                 check the gl version or extension before calling this function",
                requirements.join(", "),
            )),
            Self::IdentityUnavailable { function, detail } => {
                f.write_fmt(format_args!(
                    "{function} was called with no current rendering context on this thread"
                ))?;
                if let Some(detail) = detail {
                    f.write_fmt(format_args!(" ({detail})"))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_names_function_and_requirements() {
        let err = ResolveError::Unsupported {
            function: "glBufferData",
            requirements: vec![
                "desktop gl >= 1.5".to_string(),
                "gl extension GL_ARB_vertex_buffer_object".to_string(),
            ],
        };
        let text = err.to_string();
        assert!(text.contains("glBufferData"));
        assert!(text.contains("desktop gl >= 1.5"));
        assert!(text.contains("GL_ARB_vertex_buffer_object"));
    }

    #[test]
    fn test_kinds_render_distinctly() {
        let loader = ResolveError::LoaderNotFound {
            function: "glFrobnicate",
            attempted: vec!["glFrobnicate", "glFrobnicateEXT"],
        }
        .to_string();
        let identity = ResolveError::IdentityUnavailable {
            function: "glFrobnicate",
            detail: None,
        }
        .to_string();
        assert!(loader.contains("no native symbol"));
        assert!(identity.contains("no current rendering context"));
        assert_ne!(loader, identity);
    }
}
