// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod error;
    pub mod matrix;
    pub mod ops;
    pub mod inverse;
    pub mod display;
    pub mod vector;
}
