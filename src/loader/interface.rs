use crate::error::Result;
use std::sync::Arc;

/// A host facility that resolves a partial's name to its template text.
///
/// The adapter never implements lookup itself; whatever the host supplies is
/// called as-is and its errors are returned to the caller untouched.
pub trait PartialLoader: Send + Sync {
    /// Loads the template text of the partial called `name`.
    ///
    /// # Returns
    /// * `Result<String>` - Template text of the partial
    fn load(&self, name: &str) -> Result<String>;
}

impl<F> PartialLoader for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn load(&self, name: &str) -> Result<String> {
        self(name)
    }
}

impl<L: PartialLoader + ?Sized> PartialLoader for Arc<L> {
    fn load(&self, name: &str) -> Result<String> {
        (**self).load(name)
    }
}

/// Single-argument capability handed to an engine for lazy partial lookup.
pub type LoadPartial = Arc<dyn Fn(&str) -> Result<String> + Send + Sync>;
