//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for the quote source and the order destination
//! - **Use Cases**: The size → build → submit pipeline

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
