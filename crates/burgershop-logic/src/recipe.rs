//! Burger generation — turns a customer's taste profile into a burger.
//!
//! Generation happens in two steps:
//! 1. **Portion counts** are derived from the customer: buns, meats and
//!    toppings depend only on hungriness; the garnish count is rolled from the
//!    customer's attitude towards `Expensive`.
//! 2. **Slot selection** fills each slot independently by picking uniformly at
//!    random among the category's ingredients that share no tag with the
//!    customer's dislikes. A slot with no acceptable ingredient is omitted.
//!
//! Likes only influence the garnish count. Dislikes are a hard filter, and a
//! tag present in both sets counts as disliked.
//!
//! The final stacking order is:
//! `[garnishes, newest first] [bun bottom] [toppings] [meats] [bun top]`.
//! When only one bun is called for it sits after the meats.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::customer::{Customer, Hungriness};
use crate::ingredient::Ingredient;
use crate::tags::{Category, Tag};

/// Requested slot counts that depend only on hungriness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortionCounts {
    /// 1 for a snack (one bun serves as both halves), otherwise 2.
    pub buns: u32,
    /// Always at least 1.
    pub meats: u32,
    pub toppings: u32,
}

impl PortionCounts {
    pub fn for_hungriness(hungriness: Hungriness) -> Self {
        let level = hungriness.level() as u32;
        Self {
            buns: if level < 1 { 1 } else { 2 },
            meats: level.max(1),
            // floor(level * 1.5)
            toppings: level * 3 / 2,
        }
    }
}

/// Roll the number of garnish slots for a customer.
///
/// Customers who dislike `Expensive` get none. Everyone else gets 0 or 1,
/// plus one more if they like `Expensive`.
pub fn roll_garnish_count(customer: &Customer, rng: &mut impl Rng) -> u32 {
    if customer.dislikes(Tag::Expensive) {
        return 0;
    }
    let base = rng.gen_range(0..=1);
    if customer.likes(Tag::Expensive) {
        base + 1
    } else {
        base
    }
}

/// Pick one ingredient uniformly among the candidates the customer tolerates.
pub fn pick_acceptable<'a>(
    candidates: impl IntoIterator<Item = &'a Ingredient>,
    dislikes: &HashSet<Tag>,
    rng: &mut impl Rng,
) -> Option<&'a Ingredient> {
    let acceptable: Vec<&Ingredient> = candidates
        .into_iter()
        .filter(|i| i.is_acceptable_to(dislikes))
        .collect();
    acceptable.choose(rng).copied()
}

/// An ordered stack of ingredients, bottom of the list first.
///
/// Borrows its ingredients from the catalog it was generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Burger<'a> {
    ingredients: Vec<&'a Ingredient>,
}

impl<'a> Burger<'a> {
    pub fn ingredients(&self) -> &[&'a Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Ingredient> + '_ {
        self.ingredients.iter().copied()
    }

    /// Number of layers whose ingredient holds `category`.
    pub fn count_in(&self, category: Category) -> usize {
        self.ingredients.iter().filter(|i| i.is_in(category)).count()
    }

    /// Display names, in stacking order.
    pub fn names(&self) -> Vec<&'a str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}

impl fmt::Display for Burger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ingredient in &self.ingredients {
            writeln!(f, "{}", ingredient.name)?;
        }
        Ok(())
    }
}

/// Fill `count` slots from `category`, skipping slots nothing acceptable fits.
fn fill_slots<'a>(
    catalog: &'a Catalog,
    category: Category,
    count: u32,
    dislikes: &HashSet<Tag>,
    rng: &mut impl Rng,
) -> Vec<&'a Ingredient> {
    let mut picked = Vec::with_capacity(count as usize);
    for _ in 0..count {
        match pick_acceptable(catalog.ingredients_of(category), dislikes, rng) {
            Some(ingredient) => picked.push(ingredient),
            None => log::debug!("No acceptable {} left, omitting slot", category),
        }
    }
    picked
}

/// Generate a burger suited to the customer's tastes.
///
/// Never fails: a customer who can't be satisfied gets a smaller burger, and
/// an empty catalog yields an empty burger.
pub fn generate<'a>(customer: &Customer, catalog: &'a Catalog, rng: &mut impl Rng) -> Burger<'a> {
    let counts = PortionCounts::for_hungriness(customer.hungriness);
    let garnish_count = roll_garnish_count(customer, rng);
    let dislikes = &customer.dislikes;

    let mut layers = fill_slots(catalog, Category::Topping, counts.toppings, dislikes, rng);
    layers.extend(fill_slots(catalog, Category::Meat, counts.meats, dislikes, rng));

    // Same bun type top and bottom
    match pick_acceptable(catalog.ingredients_of(Category::Bun), dislikes, rng) {
        Some(bun) => {
            layers.push(bun);
            if counts.buns == 2 {
                layers.insert(0, bun);
            }
        }
        None => log::debug!("No acceptable bun for {}", customer.name),
    }

    for garnish in fill_slots(catalog, Category::Garnish, garnish_count, dislikes, rng) {
        layers.insert(0, garnish);
    }

    log::debug!(
        "Generated {}-layer burger for {} (hungriness {}, {} garnish slots)",
        layers.len(),
        customer.name,
        customer.hungriness.level(),
        garnish_count
    );

    Burger { ingredients: layers }
}
