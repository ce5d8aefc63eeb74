//! Profiling hooks via Tracy.
//!
//! Instrumentation is enabled with the `profiling` Cargo feature:
//!
//! ```bash
//! cargo run -p assetdump-demos --features profiling
//! ```
//!
//! Welding is quadratic in the number of unique vertices, so the indexer and
//! the export loop are instrumented to make large meshes easy to spot in a
//! Tracy capture:
//!
//! ```ignore
//! use assetdump_core::{profile_function, profile_scope};
//!
//! fn export() {
//!     profile_function!();
//!     {
//!         profile_scope!("weld");
//!         // ...
//!     }
//! }
//! ```
//!
//! When the feature is disabled all macros compile to no-ops.

#[cfg(feature = "profiling")]
pub use tracy_client::{self, Client, span};

/// Create a profiling span for the current scope.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_span = $crate::profiling::span!($name);
    };
}

/// Create a profiling span (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope {
    ($name:expr) => {};
}

/// Create a profiling span for the entire function.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_function {
    () => {
        let _profile_span = $crate::profiling::span!();
    };
}

/// Create a profiling span for function (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_function {
    () => {};
}

/// Start the Tracy client if profiling is enabled.
///
/// Binaries call this once at startup; library code never does.
#[cfg(feature = "profiling")]
pub fn init() {
    Client::start();
    log::info!("Tracy profiling enabled");
}

/// Start the Tracy client (no-op when profiling disabled).
#[cfg(not(feature = "profiling"))]
pub fn init() {}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_expand_in_functions() {
        fn instrumented() -> u32 {
            crate::profile_function!();
            crate::profile_scope!("inner");
            7
        }
        assert_eq!(instrumented(), 7);
    }
}
