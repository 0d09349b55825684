// ABOUTME: Demo state store: a counter and an append-only todo list.
// ABOUTME: Mutations are plain &mut methods; synchronization is the owner's job.

/// Read-only copy of the demo state, taken for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub counter: u64,
    pub todos: Vec<String>,
}

/// In-memory demo state: a counter and an ordered todo list.
///
/// Both start at zero/empty and live only as long as the process; nothing
/// is persisted. The struct itself is not thread-safe, so the server wraps
/// it in a lock before sharing it across handlers.
#[derive(Debug, Default)]
pub struct DemoState {
    counter: u64,
    todos: Vec<String>,
}

impl DemoState {
    /// Create an empty state: counter at zero, no todos.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to the counter and return the new value.
    pub fn increment(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    /// Append a task verbatim and return the full list in insertion order.
    /// No trimming, no deduplication; the empty string is accepted.
    pub fn add_task(&mut self, text: impl Into<String>) -> &[String] {
        self.todos.push(text.into());
        &self.todos
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn todos(&self) -> &[String] {
        &self.todos
    }

    /// Copy the current counter and todo list for rendering.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            counter: self.counter,
            todos: self.todos.clone(),
        }
    }
}
