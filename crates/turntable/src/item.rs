use serde::{Deserialize, Serialize};

crate::string_newtype!(
    /// Opaque reference to an item's content, typically a photo path or URL.
    ItemSource
);

crate::string_newtype!(Category);

/// An entry of the ordered item list handed to the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemDescriptor {
    pub source: ItemSource,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub flagged: bool,
}

impl ItemDescriptor {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: ItemSource::new(source),
            category: None,
            flagged: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Category::new(category));
        self
    }

    pub fn flagged(mut self) -> Self {
        self.flagged = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    pub content: ItemDescriptor,
}

impl Item {
    pub fn index_all(descriptors: impl IntoIterator<Item = ItemDescriptor>) -> Vec<Self> {
        descriptors
            .into_iter()
            .enumerate()
            .map(|(index, content)| Self { index, content })
            .collect()
    }
}
