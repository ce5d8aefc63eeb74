//! # assetdump core
//!
//! Scene-to-text asset export: tolerance-based vertex welding
//! ([`mesh`]), material and texture slot resolution ([`material`]), the host
//! scene seam ([`scene`]) and the dump file writer ([`dump`]).

pub mod dump;
pub mod material;
pub mod math;
pub mod mesh;
pub mod profiling;
pub mod scene;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version. Call once after the logger is installed.
pub fn init() {
    log::info!("assetdump core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
