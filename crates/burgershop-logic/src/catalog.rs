//! Read-only ingredient index by category.
//!
//! A `Catalog` is built once from loaded ingredient records and then shared by
//! reference with every generation call. It holds no interior mutability, so
//! any number of threads may read it at once.
//!
//! Within each category, ingredients keep the order they were loaded in. The
//! generator draws from these lists with a caller-supplied rng, so a seeded
//! rng over the same records always yields the same burger.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::ingredient::Ingredient;
use crate::tags::Category;

/// Ingredients indexed by id and by category.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    by_id: HashMap<String, usize>,
    by_category: HashMap<Category, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog from ingredient records.
    ///
    /// Fails with [`CatalogError::DuplicateId`] if two records share an id.
    /// An ingredient is listed under every category it declares.
    pub fn build(records: impl IntoIterator<Item = Ingredient>) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();

        for ingredient in records {
            if catalog.by_id.contains_key(&ingredient.id) {
                return Err(CatalogError::DuplicateId(ingredient.id));
            }

            let idx = catalog.ingredients.len();
            // HashSet order is unstable; index categories in a fixed order
            for &category in Category::all() {
                if ingredient.is_in(category) {
                    catalog.by_category.entry(category).or_default().push(idx);
                }
            }
            catalog.by_id.insert(ingredient.id.clone(), idx);
            catalog.ingredients.push(ingredient);
        }

        log::info!(
            "Catalog built: {} ingredients ({} toppings, {} buns, {} meats, {} garnishes)",
            catalog.len(),
            catalog.count_of(Category::Topping),
            catalog.count_of(Category::Bun),
            catalog.count_of(Category::Meat),
            catalog.count_of(Category::Garnish),
        );

        Ok(catalog)
    }

    /// All ingredients holding `category`, in load order.
    ///
    /// Returns an empty iterator for a category with no members.
    pub fn ingredients_of(&self, category: Category) -> impl Iterator<Item = &Ingredient> + '_ {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&idx| &self.ingredients[idx])
    }

    /// Number of ingredients holding `category`.
    pub fn count_of(&self, category: Category) -> usize {
        self.by_category.get(&category).map_or(0, Vec::len)
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.by_id.get(id).map(|&idx| &self.ingredients[idx])
    }

    /// All ingredients in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> + '_ {
        self.ingredients.iter()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
