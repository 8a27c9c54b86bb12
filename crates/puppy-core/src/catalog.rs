//! The fixed, ordered puppy catalog
//!
//! The built-in catalog is created once per process on first access and
//! never changes afterwards. All consumers see it through shared references.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::puppy::{ImageRef, Puppy, PuppyId};

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Ordered, read-only collection of puppies with distinct ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    puppies: Vec<Puppy>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank names.
    pub fn new(puppies: Vec<Puppy>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(puppies.len());
        for puppy in &puppies {
            if puppy.name().trim().is_empty() {
                return Err(Error::invalid_puppy(puppy.id(), "name must not be empty"));
            }
            if !seen.insert(puppy.id()) {
                return Err(Error::DuplicatePuppyId(puppy.id()));
            }
        }
        Ok(Self { puppies })
    }

    /// The catalog shipped with the application
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            tracing::debug!("Building built-in puppy catalog");
            Catalog {
                puppies: builtin_puppies(),
            }
        })
    }

    /// All puppies, in catalog order
    pub fn all(&self) -> &[Puppy] {
        &self.puppies
    }

    /// Linear lookup; the catalog is small enough that no index pays off.
    pub fn find_by_id(&self, id: PuppyId) -> Option<&Puppy> {
        self.puppies.iter().find(|p| p.id() == id)
    }

    /// Index of the puppy with `id` in catalog order
    pub fn position_of(&self, id: PuppyId) -> Option<usize> {
        self.puppies.iter().position(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.puppies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puppies.is_empty()
    }
}

fn builtin_puppies() -> Vec<Puppy> {
    [(1, "Bob", 9), (2, "Jake", 2), (3, "Star", 1), (4, "Moon", 3)]
        .into_iter()
        .map(|(id, name, age)| {
            Puppy::new(
                id,
                name,
                age,
                ImageRef::new(format!("dog{id}")),
                format!("I'm a gorgeous dog with {age} Year and I do think I fit your family."),
            )
        })
        .collect()
}
