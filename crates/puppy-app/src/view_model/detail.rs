//! Detail screen view-model
//!
//! Lookups that fail, whether the argument is not a number or the id is not
//! in the catalog, render [`DetailView::Empty`] instead of an error.

use puppy_core::{Catalog, ImageRef, PuppyId};
use serde::Serialize;
use tracing::debug;

/// Full field set shown on the detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuppyDetail {
    pub name: String,
    pub age: u32,
    pub image: ImageRef,
    pub description: String,
}

/// Rendered detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    Puppy(PuppyDetail),
    Empty,
}

impl DetailView {
    pub fn is_empty(&self) -> bool {
        matches!(self, DetailView::Empty)
    }
}

pub struct DetailViewModel;

impl DetailViewModel {
    pub fn render(catalog: &Catalog, id: PuppyId) -> DetailView {
        match catalog.find_by_id(id) {
            Some(puppy) => DetailView::Puppy(PuppyDetail {
                name: puppy.name().to_string(),
                age: puppy.age(),
                image: puppy.image().clone(),
                description: puppy.description().to_string(),
            }),
            None => {
                debug!("Puppy {} not in catalog, rendering empty detail", id);
                DetailView::Empty
            }
        }
    }

    /// Render from the textual route argument
    pub fn render_arg(catalog: &Catalog, arg: &str) -> DetailView {
        match PuppyId::parse(arg) {
            Some(id) => Self::render(catalog, id),
            None => {
                debug!("Malformed puppy id {:?}, rendering empty detail", arg);
                DetailView::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_catalog_for_every_id() {
        let catalog = Catalog::builtin();
        for puppy in catalog.all() {
            match DetailViewModel::render(catalog, puppy.id()) {
                DetailView::Puppy(detail) => {
                    assert_eq!(detail.name, puppy.name());
                    assert_eq!(detail.age, puppy.age());
                    assert_eq!(detail.description, puppy.description());
                    assert_eq!(&detail.image, puppy.image());
                }
                DetailView::Empty => panic!("puppy {} should resolve", puppy.id()),
            }
        }
    }

    #[test]
    fn test_render_unknown_id_is_empty() {
        let catalog = Catalog::builtin();
        for id in [0, 5, -1, 999] {
            assert!(DetailViewModel::render(catalog, PuppyId(id)).is_empty());
        }
    }

    #[test]
    fn test_render_arg() {
        let catalog = Catalog::builtin();
        let view = DetailViewModel::render_arg(catalog, "3");
        assert!(matches!(view, DetailView::Puppy(ref d) if d.name == "Star"));
    }

    #[test]
    fn test_render_arg_malformed_is_empty() {
        let catalog = Catalog::builtin();
        for arg in ["", "abc", "1.5", "two"] {
            assert_eq!(DetailViewModel::render_arg(catalog, arg), DetailView::Empty);
        }
    }

    #[test]
    fn test_empty_serializes_with_kind_tag() {
        let json = serde_json::to_string(&DetailView::Empty).unwrap();
        assert_eq!(json, r#"{"kind":"empty"}"#);
    }
}
