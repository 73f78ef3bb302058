//! Shop catalog reference data: trusted static configuration consumed by
//! the purchase flow, loadable from JSON or taken from the built-in sets.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::TeamMember;

/// A purchasable catalog entry. Buying it creates an asset or logs an
/// expense on the player, depending on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub kind: ProductKind,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: i64,
        kind: ProductKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            kind,
        }
    }
}

/// How a purchase of this product lands on the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Asset,
    Expense,
}

impl ProductKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Asset => "asset",
            ProductKind::Expense => "expense",
        }
    }
}

/// One storefront on the street, holding its product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub products: Vec<Product>,
}

impl Shop {
    pub fn new(id: impl Into<String>, name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            products,
        }
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

/// A full shopping street: every shop a game skin can open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    pub shops: Vec<Shop>,
}

impl Catalog {
    pub fn new(shops: Vec<Shop>) -> Self {
        Self { shops }
    }

    pub fn shop(&self, id: &str) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.id == id)
    }

    pub fn find_product(&self, shop_id: &str, product_id: &str) -> Option<&Product> {
        self.shop(shop_id)?.product(product_id)
    }

    pub fn product_count(&self) -> usize {
        self.shops.iter().map(|shop| shop.products.len()).sum()
    }

    pub fn from_json_str(data: &str) -> Result<Self, LedgerError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, LedgerError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}

static CLASSIC_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    use ProductKind::{Asset, Expense};
    Catalog::new(vec![
        Shop::new(
            "restaurant",
            "Restaurant",
            vec![
                Product::new("meal", "Meal", 1_000, Expense),
                Product::new("cookware", "Cookware", 5_000, Asset),
                Product::new("drinks", "Drinks", 500, Expense),
            ],
        ),
        Shop::new(
            "bookstore",
            "Bookstore",
            vec![
                Product::new("magazine", "Magazine", 800, Expense),
                Product::new("computer", "Computer", 80_000, Asset),
                Product::new("books", "Reference books", 2_000, Expense),
            ],
        ),
        Shop::new(
            "bank",
            "Bank",
            vec![
                Product::new("loan_fee", "Bank fee", 200, Expense),
                Product::new("savings", "Time deposit", 10_000, Asset),
                Product::new("investment", "Investment fund", 5_000, Asset),
            ],
        ),
        Shop::new(
            "electronics",
            "Electronics store",
            vec![
                Product::new("phone_bill", "Phone bill", 8_000, Expense),
                Product::new("smartphone", "Smartphone", 60_000, Asset),
                Product::new("warranty", "Warranty", 3_000, Expense),
            ],
        ),
        Shop::new(
            "car_dealer",
            "Car dealer",
            vec![
                Product::new("gas", "Gasoline", 5_000, Expense),
                Product::new("car", "Car", 200_000, Asset),
                Product::new("insurance", "Car insurance", 4_000, Expense),
            ],
        ),
        Shop::new(
            "realestate",
            "Real-estate agency",
            vec![
                Product::new("rent", "Rent", 80_000, Expense),
                Product::new("house", "House", 3_000_000, Asset),
                Product::new("utilities", "Utilities", 12_000, Expense),
            ],
        ),
    ])
});

static MODERN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    use ProductKind::{Asset, Expense};
    Catalog::new(vec![
        Shop::new(
            "food",
            "Food alley",
            vec![
                Product::new("ramen", "Ramen", 800, Expense),
                Product::new("coffee", "Coffee", 300, Expense),
                Product::new("bento", "Bento box", 600, Expense),
            ],
        ),
        Shop::new(
            "tech",
            "Tech corner",
            vec![
                Product::new("laptop", "Laptop", 80_000, Asset),
                Product::new("phone", "Smartphone", 50_000, Asset),
                Product::new("headphones", "Headphones", 15_000, Asset),
            ],
        ),
        Shop::new(
            "clothing",
            "Fashion house",
            vec![
                Product::new("shirt", "T-shirt", 2_000, Expense),
                Product::new("jeans", "Jeans", 5_000, Expense),
                Product::new("shoes", "Sneakers", 8_000, Expense),
            ],
        ),
        Shop::new(
            "books",
            "Book forest",
            vec![
                Product::new("manga", "Manga", 500, Expense),
                Product::new("textbook", "Textbook", 3_000, Asset),
                Product::new("novel", "Novel", 800, Expense),
            ],
        ),
        Shop::new(
            "games",
            "Game world",
            vec![
                Product::new("console", "Game console", 30_000, Asset),
                Product::new("game", "Video game", 6_000, Expense),
                Product::new("controller", "Controller", 5_000, Asset),
            ],
        ),
        Shop::new(
            "sports",
            "Sports shop",
            vec![
                Product::new("ball", "Soccer ball", 3_000, Asset),
                Product::new("racket", "Tennis racket", 12_000, Asset),
                Product::new("uniform", "Uniform", 4_000, Expense),
            ],
        ),
    ])
});

static RECRUITMENT_BOARD: Lazy<Vec<TeamMember>> = Lazy::new(|| {
    vec![
        TeamMember::new(
            "candidate1",
            "Sakura",
            "Marketing",
            vec![
                "Social media".into(),
                "Ad planning".into(),
                "Market research".into(),
            ],
            1_500,
        ),
        TeamMember::new(
            "candidate2",
            "Yuta",
            "Engineering",
            vec![
                "Programming".into(),
                "System design".into(),
                "Data analysis".into(),
            ],
            2_000,
        ),
        TeamMember::new(
            "candidate3",
            "Ayaka",
            "Design",
            vec!["UI/UX".into(), "Graphics".into(), "Branding".into()],
            1_800,
        ),
        TeamMember::new(
            "candidate4",
            "Daiki",
            "Sales",
            vec![
                "Prospecting".into(),
                "Presentations".into(),
                "Negotiation".into(),
            ],
            1_700,
        ),
    ]
});

/// Catalog used by the classic balance-sheet skin.
pub fn classic_catalog() -> &'static Catalog {
    &CLASSIC_CATALOG
}

/// Catalog used by the modern shop-grid skin.
pub fn modern_catalog() -> &'static Catalog {
    &MODERN_CATALOG
}

/// Candidates listed on the recruitment board.
pub fn recruitment_board() -> &'static [TeamMember] {
    &RECRUITMENT_BOARD
}
