//! Puppy record and its field types

use std::fmt;

use serde::Serialize;

/// Catalog-unique puppy identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PuppyId(pub i32);

impl PuppyId {
    /// Parse a textual route argument into an id.
    ///
    /// Accepts the same forms as integer parsing (`"2"`, `"+2"`, `"-1"`);
    /// anything else yields `None`.
    pub fn parse(arg: &str) -> Option<Self> {
        arg.parse::<i32>().ok().map(PuppyId)
    }
}

impl fmt::Display for PuppyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PuppyId {
    fn from(id: i32) -> Self {
        PuppyId(id)
    }
}

/// Opaque handle to a display asset.
///
/// The core never interprets the key; the host UI resolves it to whatever
/// it can draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single adoptable puppy. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puppy {
    id: PuppyId,
    name: String,
    /// Age in years
    age: u32,
    image: ImageRef,
    description: String,
}

impl Puppy {
    pub fn new(
        id: impl Into<PuppyId>,
        name: impl Into<String>,
        age: u32,
        image: ImageRef,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            image,
            description: description.into(),
        }
    }

    pub fn id(&self) -> PuppyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
