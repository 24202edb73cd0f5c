//! Pure burger generation logic for Burgershop.
//!
//! This crate contains the recipe generator that turns a customer's taste
//! profile into a burger, independent of the game client, the drag-and-drop
//! assembly minigame, or asset loading. Functions take plain data and an
//! explicit random source, making them unit-testable and reproducible with a
//! seeded rng.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`tags`] | Flavor tags, ingredient categories, customer size classes |
//! | [`ingredient`] | Immutable ingredient records and the dislike filter |
//! | [`customer`] | Customer taste profiles and hungriness levels |
//! | [`catalog`] | Read-only ingredient index by category |
//! | [`recipe`] | Portion counts, slot selection, burger generation |
//! | [`loader`] | Record parsing (line format and JSON) |
//! | [`error`] | Catalog and loader errors |
//!
//! # Example
//!
//! ```rust
//! use burgershop_logic::catalog::Catalog;
//! use burgershop_logic::customer::{Customer, Hungriness};
//! use burgershop_logic::loader::parse_ingredients;
//! use burgershop_logic::recipe::generate;
//! use rand::SeedableRng;
//!
//! let records = parse_ingredients("beef,Beef Patty,Salty,Meat\nbrioche,Brioche,Sweet,Bun\n").unwrap();
//! let catalog = Catalog::build(records).unwrap();
//! let customer = Customer::new("c1", "Pat").with_hungriness(Hungriness::Famished);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let burger = generate(&customer, &catalog, &mut rng);
//! assert_eq!(burger.len(), 4); // bun, beef, beef, bun
//! ```

pub mod catalog;
pub mod customer;
pub mod error;
pub mod ingredient;
pub mod loader;
pub mod recipe;
pub mod tags;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::customer::{Customer, Hungriness};
    pub use crate::error::{CatalogError, LoadError};
    pub use crate::ingredient::Ingredient;
    pub use crate::recipe::{generate, Burger, PortionCounts};
    pub use crate::tags::{Category, Size, Tag};
}
