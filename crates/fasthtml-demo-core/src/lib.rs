// ABOUTME: Core state for the fasthtml-demo app: counter, todo list, system facts.
// ABOUTME: Pure in-memory types with no I/O; the server crate owns synchronization.

pub mod state;
pub mod system;

pub use state::{DemoState, StateSnapshot};
pub use system::SystemSnapshot;
