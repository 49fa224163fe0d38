// Data types shared across the harness
pub mod executor;
pub mod publish;
pub mod registry;
