//! Surface records held by the directory.

/// A geometric boundary known to the directory.
///
/// Only the identity of a surface lives here. Its shape, boundary condition
/// and intersection routines belong to the geometry engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    id: i32,
    name: Option<String>,
}

impl Surface {
    /// Creates an unnamed surface with the given user identifier.
    pub fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    /// Sets a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the user-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
