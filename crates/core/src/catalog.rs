//! Catalog
//!
//! The florist's reference data: individual flowers sold by the stem and pre-arranged bouquets.
//! The catalog is read-only; carts copy what they need from it at insertion time.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::MinorUnits;

/// Errors raised by catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No flower or bouquet has the given id.
    #[error("product {0:?} not found")]
    NotFound(String),

    /// The category name is not one the store uses.
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}

/// Flower category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Roses
    Roses,

    /// Tulips
    Tulips,

    /// Lilies
    Lilies,

    /// Seasonal blooms
    Seasonal,

    /// Mixed stems
    Mixed,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Roses,
        Category::Tulips,
        Category::Lilies,
        Category::Seasonal,
        Category::Mixed,
    ];

    /// Lowercase name used in URLs and payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Roses => "roses",
            Category::Tulips => "tulips",
            Category::Lilies => "lilies",
            Category::Seasonal => "seasonal",
            Category::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| CatalogError::UnknownCategory(value.to_string()))
    }
}

/// A flower sold by the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flower {
    /// Product id, e.g. `rose-red`
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// Short description
    pub description: &'static str,

    /// Price per stem in cents
    pub price: MinorUnits,

    /// Image reference
    pub image: &'static str,

    /// Category
    pub category: Category,

    /// Colours the flower comes in
    pub colors: &'static [&'static str],

    /// Whether the flower can currently be ordered
    pub in_stock: bool,
}

/// A pre-arranged bouquet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bouquet {
    /// Product id, e.g. `romantic-red`
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// Short description
    pub description: &'static str,

    /// Price of the arrangement in cents
    pub price: MinorUnits,

    /// Image reference
    pub image: &'static str,

    /// Ids of the flowers the bouquet is made of
    pub flowers: &'static [&'static str],

    /// Whether the bouquet is featured as popular
    pub popular: bool,
}

/// What kind of catalog record a product was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// A single flower
    Flower,

    /// A pre-arranged bouquet
    Bouquet,
}

/// A purchasable catalog entry, flattened for pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: String,

    /// Unit price in cents
    pub unit_price: MinorUnits,

    /// Image reference
    pub image: String,

    /// Flower or bouquet
    pub kind: ProductKind,
}

impl From<&Flower> for Product {
    fn from(flower: &Flower) -> Self {
        Product {
            id: flower.id.to_string(),
            name: flower.name.to_string(),
            description: flower.description.to_string(),
            unit_price: flower.price,
            image: flower.image.to_string(),
            kind: ProductKind::Flower,
        }
    }
}

impl From<&Bouquet> for Product {
    fn from(bouquet: &Bouquet) -> Self {
        Product {
            id: bouquet.id.to_string(),
            name: bouquet.name.to_string(),
            description: bouquet.description.to_string(),
            unit_price: bouquet.price,
            image: bouquet.image.to_string(),
            kind: ProductKind::Bouquet,
        }
    }
}

/// Read-only catalog of flowers and bouquets.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    flowers: &'static [Flower],
    bouquets: &'static [Bouquet],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::florist()
    }
}

impl Catalog {
    /// Creates a catalog over the given records.
    pub const fn new(flowers: &'static [Flower], bouquets: &'static [Bouquet]) -> Self {
        Self { flowers, bouquets }
    }

    /// The shop's own catalog.
    pub const fn florist() -> Self {
        Self::new(FLOWERS, BOUQUETS)
    }

    /// All flowers, in catalog order.
    pub fn flowers(&self) -> &'static [Flower] {
        self.flowers
    }

    /// All bouquets, in catalog order.
    pub fn bouquets(&self) -> &'static [Bouquet] {
        self.bouquets
    }

    /// Flowers in the given category, or all flowers when `category` is `None`.
    pub fn flowers_in(&self, category: Option<Category>) -> impl Iterator<Item = &'static Flower> {
        self.flowers
            .iter()
            .filter(move |flower| category.is_none_or(|category| flower.category == category))
    }

    /// In-stock flowers that can be picked in the bouquet builder.
    pub fn selectable_flowers(
        &self,
        category: Option<Category>,
    ) -> impl Iterator<Item = &'static Flower> {
        self.flowers_in(category).filter(|flower| flower.in_stock)
    }

    /// Bouquets flagged as popular.
    pub fn popular_bouquets(&self) -> impl Iterator<Item = &'static Bouquet> {
        self.bouquets.iter().filter(|bouquet| bouquet.popular)
    }

    /// Finds a flower by id.
    pub fn flower(&self, id: &str) -> Option<&'static Flower> {
        self.flowers.iter().find(|flower| flower.id == id)
    }

    /// Finds a bouquet by id.
    pub fn bouquet(&self, id: &str) -> Option<&'static Bouquet> {
        self.bouquets.iter().find(|bouquet| bouquet.id == id)
    }

    /// Flowers a bouquet is composed of. Unknown component ids are skipped.
    pub fn bouquet_flowers(&self, bouquet: &Bouquet) -> impl Iterator<Item = &'static Flower> {
        let catalog = *self;

        bouquet.flowers.iter().filter_map(move |id| catalog.flower(id))
    }

    /// All products, bouquets first, as offered by the payment catalog.
    pub fn products(&self) -> impl Iterator<Item = Product> {
        self.bouquets
            .iter()
            .map(Product::from)
            .chain(self.flowers.iter().map(Product::from))
    }

    /// Resolves a product id to its name, description and price.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when neither a bouquet nor a flower has the id.
    pub fn resolve(&self, id: &str) -> Result<Product, CatalogError> {
        self.bouquet(id)
            .map(Product::from)
            .or_else(|| self.flower(id).map(Product::from))
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

static FLOWERS: &[Flower] = &[
    Flower {
        id: "rose-red",
        name: "Red Roses",
        description: "Classic red roses symbolizing love and passion",
        price: 4_99,
        image: "/red-roses-bouquet.png",
        category: Category::Roses,
        colors: &["red"],
        in_stock: true,
    },
    Flower {
        id: "rose-pink",
        name: "Pink Roses",
        description: "Soft pink roses representing grace and elegance",
        price: 4_99,
        image: "/pink-roses-bouquet.png",
        category: Category::Roses,
        colors: &["pink"],
        in_stock: true,
    },
    Flower {
        id: "rose-white",
        name: "White Roses",
        description: "Pure white roses for innocence and new beginnings",
        price: 4_99,
        image: "/white-roses-bouquet.png",
        category: Category::Roses,
        colors: &["white"],
        in_stock: true,
    },
    Flower {
        id: "tulip-red",
        name: "Red Tulips",
        description: "Vibrant red tulips bringing spring joy",
        price: 3_99,
        image: "/red-tulips-bouquet.jpg",
        category: Category::Tulips,
        colors: &["red"],
        in_stock: true,
    },
    Flower {
        id: "tulip-yellow",
        name: "Yellow Tulips",
        description: "Cheerful yellow tulips for sunshine and happiness",
        price: 3_99,
        image: "/yellow-tulips-bouquet.jpg",
        category: Category::Tulips,
        colors: &["yellow"],
        in_stock: true,
    },
    Flower {
        id: "tulip-pink",
        name: "Pink Tulips",
        description: "Delicate pink tulips for caring and affection",
        price: 3_99,
        image: "/pink-tulips-bouquet.jpg",
        category: Category::Tulips,
        colors: &["pink"],
        in_stock: true,
    },
    Flower {
        id: "lily-white",
        name: "White Lilies",
        description: "Elegant white lilies symbolizing purity",
        price: 5_99,
        image: "/white-lilies-bouquet.png",
        category: Category::Lilies,
        colors: &["white"],
        in_stock: true,
    },
    Flower {
        id: "lily-pink",
        name: "Pink Lilies",
        description: "Beautiful pink lilies for prosperity and abundance",
        price: 5_99,
        image: "/pink-lilies-bouquet.jpg",
        category: Category::Lilies,
        colors: &["pink"],
        in_stock: true,
    },
    Flower {
        id: "sunflower",
        name: "Sunflowers",
        description: "Bright sunflowers bringing warmth and positivity",
        price: 4_49,
        image: "/sunflowers-bouquet.png",
        category: Category::Seasonal,
        colors: &["yellow"],
        in_stock: true,
    },
    Flower {
        id: "lavender",
        name: "Lavender",
        description: "Fragrant lavender for calm and serenity",
        price: 3_49,
        image: "/lavender-flowers-bouquet.jpg",
        category: Category::Seasonal,
        colors: &["purple"],
        in_stock: true,
    },
];

static BOUQUETS: &[Bouquet] = &[
    Bouquet {
        id: "romantic-red",
        name: "Romantic Red",
        description: "A stunning arrangement of red roses and white lilies",
        price: 79_99,
        image: "/romantic-red-rose-and-lily-bouquet.jpg",
        flowers: &["rose-red", "lily-white"],
        popular: true,
    },
    Bouquet {
        id: "spring-garden",
        name: "Spring Garden",
        description: "Colorful mix of tulips and seasonal flowers",
        price: 64_99,
        image: "/spring-garden-mixed-tulips-bouquet.jpg",
        flowers: &["tulip-red", "tulip-yellow", "tulip-pink"],
        popular: true,
    },
    Bouquet {
        id: "elegant-white",
        name: "Elegant White",
        description: "Pure white roses and lilies for sophistication",
        price: 89_99,
        image: "/elegant-white-roses-and-lilies-bouquet.jpg",
        flowers: &["rose-white", "lily-white"],
        popular: false,
    },
    Bouquet {
        id: "pink-blush",
        name: "Pink Blush",
        description: "Soft pink roses and lilies for grace",
        price: 74_99,
        image: "/pink-blush-roses-and-lilies-bouquet.jpg",
        flowers: &["rose-pink", "lily-pink", "tulip-pink"],
        popular: true,
    },
    Bouquet {
        id: "sunshine-delight",
        name: "Sunshine Delight",
        description: "Bright sunflowers and yellow tulips",
        price: 59_99,
        image: "/sunshine-sunflowers-and-yellow-tulips-bouquet.jpg",
        flowers: &["sunflower", "tulip-yellow"],
        popular: false,
    },
    Bouquet {
        id: "lavender-dreams",
        name: "Lavender Dreams",
        description: "Calming lavender with pink accents",
        price: 54_99,
        image: "/lavender-dreams-purple-and-pink-bouquet.jpg",
        flowers: &["lavender", "rose-pink"],
        popular: false,
    },
];

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn florist_catalog_has_flowers_and_bouquets() {
        let catalog = Catalog::florist();

        assert_eq!(catalog.flowers().len(), 10);
        assert_eq!(catalog.bouquets().len(), 6);
    }

    #[test]
    fn resolve_finds_flowers_and_bouquets() -> TestResult {
        let catalog = Catalog::florist();

        let rose = catalog.resolve("rose-red")?;
        let bouquet = catalog.resolve("romantic-red")?;

        assert_eq!(rose.unit_price, 4_99);
        assert_eq!(rose.kind, ProductKind::Flower);
        assert_eq!(bouquet.unit_price, 79_99);
        assert_eq!(bouquet.kind, ProductKind::Bouquet);

        Ok(())
    }

    #[test]
    fn resolve_unknown_id_is_not_found() {
        let result = Catalog::florist().resolve("custom-123");

        assert_eq!(result, Err(CatalogError::NotFound("custom-123".to_string())));
    }

    #[test]
    fn flowers_in_filters_by_category() {
        let catalog = Catalog::florist();

        let tulips: Vec<_> = catalog
            .flowers_in(Some(Category::Tulips))
            .map(|flower| flower.id)
            .collect();

        assert_eq!(tulips, ["tulip-red", "tulip-yellow", "tulip-pink"]);
        assert_eq!(catalog.flowers_in(None).count(), 10);
        assert_eq!(catalog.flowers_in(Some(Category::Mixed)).count(), 0);
    }

    #[test]
    fn selectable_flowers_skip_out_of_stock() {
        static STOCK: &[Flower] = &[
            Flower {
                id: "peony",
                name: "Peonies",
                description: "",
                price: 6_99,
                image: "",
                category: Category::Seasonal,
                colors: &["pink"],
                in_stock: false,
            },
            Flower {
                id: "aster",
                name: "Asters",
                description: "",
                price: 2_99,
                image: "",
                category: Category::Seasonal,
                colors: &["purple"],
                in_stock: true,
            },
        ];

        let catalog = Catalog::new(STOCK, &[]);
        let ids: Vec<_> = catalog.selectable_flowers(None).map(|f| f.id).collect();

        assert_eq!(ids, ["aster"]);
    }

    #[test]
    fn popular_bouquets() {
        let ids: Vec<_> = Catalog::florist()
            .popular_bouquets()
            .map(|bouquet| bouquet.id)
            .collect();

        assert_eq!(ids, ["romantic-red", "spring-garden", "pink-blush"]);
    }

    #[test]
    fn bouquet_components_resolve_to_flowers() {
        let catalog = Catalog::florist();
        let bouquet = catalog.bouquet("spring-garden");

        let names: Vec<_> = bouquet
            .into_iter()
            .flat_map(|bouquet| catalog.bouquet_flowers(bouquet))
            .map(|flower| flower.name)
            .collect();

        assert_eq!(names, ["Red Tulips", "Yellow Tulips", "Pink Tulips"]);
    }

    #[test]
    fn products_list_bouquets_before_flowers() {
        let products: Vec<_> = Catalog::florist().products().collect();

        assert_eq!(products.len(), 16);
        assert_eq!(
            products.first().map(|product| product.kind),
            Some(ProductKind::Bouquet)
        );
        assert_eq!(
            products.last().map(|product| product.kind),
            Some(ProductKind::Flower)
        );
    }

    #[test]
    fn category_parses_case_insensitively() -> TestResult {
        assert_eq!("Roses".parse::<Category>()?, Category::Roses);
        assert_eq!(" lilies ".parse::<Category>()?, Category::Lilies);
        assert!("cacti".parse::<Category>().is_err());

        Ok(())
    }
}
