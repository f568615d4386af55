/// A trait to abstract over environment variable access.
///
/// Swatches consult a handful of environment variables before picking escape
/// sequences. Reading them through this trait keeps that logic testable
/// without touching the process environment.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }

    /// Determine whether the environment variable has one of the given values.
    fn has_any_value(&self, key: &str, expected_values: &[&str]) -> bool {
        self.read_os(key)
            .is_some_and(|v| expected_values.iter().any(|e| v == *e))
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}


#[cfg(test)]
pub(crate) use test::FakeEnv;
