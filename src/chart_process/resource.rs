//! Renderer resource ownership.
//!
//! A renderer creates meshes and materials for every arrow or waveform segment it draws. They
//! are owned by a [`ResourceScope`] for the plan they were created from, and released together
//! when the plan is replaced.

/// A resource which must be disposed explicitly, such as a GPU buffer.
pub trait Release {
    /// Disposes the resource.
    fn release(self);
}

impl Release for () {
    fn release(self) {}
}

/// Handle to a resource tracked in a [`ResourceScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub usize);

impl ResourceId {
    /// Returns the contained id value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<ResourceId> for usize {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

/// Generation of a scope, increased by every [`ResourceScope::release_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ScopeGeneration(pub u64);

/// Owns the resources created for one plan.
#[derive(Debug)]
pub struct ResourceScope<R: Release> {
    resources: Vec<R>,
    generation: ScopeGeneration,
}

impl<R: Release> Default for ResourceScope<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Release> ResourceScope<R> {
    /// Creates an empty scope.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resources: Vec::new(),
            generation: ScopeGeneration(0),
        }
    }

    /// Takes ownership of a resource.
    pub fn track(&mut self, resource: R) -> ResourceId {
        self.resources.push(resource);
        ResourceId(self.resources.len() - 1)
    }

    /// Gets a tracked resource.
    #[must_use]
    pub fn get(&self, id: ResourceId) -> Option<&R> {
        self.resources.get(id.0)
    }

    /// Iterates over the tracked resources.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.resources.iter()
    }

    /// The number of tracked resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no resource is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// The current generation. Ids from an older generation are invalid.
    #[must_use]
    pub const fn generation(&self) -> ScopeGeneration {
        self.generation
    }

    /// Releases every tracked resource and starts a new generation.
    pub fn release_all(&mut self) {
        let released = self.resources.len();
        self.resources.drain(..).for_each(Release::release);
        self.generation.0 += 1;
        log::trace!(
            "released {released} resources, now generation {}",
            self.generation.0
        );
    }
}

impl<R: Release> Drop for ResourceScope<R> {
    fn drop(&mut self) {
        self.resources.drain(..).for_each(Release::release);
    }
}
