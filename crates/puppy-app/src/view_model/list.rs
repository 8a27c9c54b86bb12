//! List screen view-model

use puppy_core::{Catalog, ImageRef, PuppyId};
use serde::Serialize;

use crate::navigation::NavIntent;

/// One row of the list screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTile {
    pub id: PuppyId,
    pub name: String,
    pub image: ImageRef,
}

impl SummaryTile {
    /// Intent emitted when this tile is activated
    pub fn activate(&self) -> NavIntent {
        NavIntent::GoToDetail(self.id)
    }
}

/// Projects the catalog into summary tiles
pub struct ListViewModel;

impl ListViewModel {
    /// One tile per catalog entry, in catalog order
    pub fn render(catalog: &Catalog) -> Vec<SummaryTile> {
        catalog
            .all()
            .iter()
            .map(|puppy| SummaryTile {
                id: puppy.id(),
                name: puppy.name().to_string(),
                image: puppy.image().clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puppy_core::{ImageRef, Puppy};

    #[test]
    fn test_render_one_tile_per_puppy_in_order() {
        let catalog = Catalog::builtin();
        let tiles = ListViewModel::render(catalog);

        assert_eq!(tiles.len(), catalog.len());
        for (tile, puppy) in tiles.iter().zip(catalog.all()) {
            assert_eq!(tile.id, puppy.id());
            assert_eq!(tile.name, puppy.name());
            assert_eq!(&tile.image, puppy.image());
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        let catalog = Catalog::builtin();
        assert_eq!(ListViewModel::render(catalog), ListViewModel::render(catalog));
    }

    #[test]
    fn test_render_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(ListViewModel::render(&catalog).is_empty());
    }

    #[test]
    fn test_activate_emits_go_to_detail() {
        let catalog = Catalog::new(vec![Puppy::new(
            12,
            "Rex",
            1,
            ImageRef::new("rex"),
            "",
        )])
        .unwrap();
        let tiles = ListViewModel::render(&catalog);
        assert_eq!(tiles[0].activate(), NavIntent::GoToDetail(PuppyId(12)));
    }
}
