//! Property-based tests for burger generation.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated catalogs, customers and rng seeds.

mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use burgershop_logic::catalog::Catalog;
use burgershop_logic::customer::{Customer, Hungriness};
use burgershop_logic::ingredient::Ingredient;
use burgershop_logic::recipe::{generate, roll_garnish_count, PortionCounts};
use burgershop_logic::tags::{Category, Tag};

use common::replay_selection;

/// Strategy for a subset of tags.
fn tag_set() -> impl Strategy<Value = HashSet<Tag>> {
    prop::collection::hash_set(prop::sample::select(Tag::all().to_vec()), 0..5)
}

/// Strategy for a non-empty subset of categories.
fn category_set() -> impl Strategy<Value = HashSet<Category>> {
    prop::collection::hash_set(prop::sample::select(Category::all().to_vec()), 1..3)
}

fn hungriness() -> impl Strategy<Value = Hungriness> {
    prop::sample::select(Hungriness::all().to_vec())
}

/// Strategy for a catalog with unique ids.
fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((tag_set(), category_set()), 0..24).prop_map(|specs| {
        let records = specs
            .into_iter()
            .enumerate()
            .map(|(idx, (tags, categories))| Ingredient {
                id: format!("ing-{idx}"),
                name: format!("Ingredient {idx}"),
                tags,
                categories,
            });
        Catalog::build(records).unwrap()
    })
}

fn customer() -> impl Strategy<Value = Customer> {
    (tag_set(), tag_set(), hungriness()).prop_map(|(likes, dislikes, hungriness)| {
        Customer::new("p", "Prop")
            .with_likes(likes)
            .with_dislikes(dislikes)
            .with_hungriness(hungriness)
    })
}

proptest! {
    /// No layer of any burger carries a tag the customer dislikes.
    #[test]
    fn burger_never_contains_disliked_tags(
        catalog in catalog(),
        customer in customer(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let burger = generate(&customer, &catalog, &mut rng);
        for ingredient in burger.iter() {
            prop_assert!(ingredient.is_acceptable_to(&customer.dislikes));
        }
    }

    /// A burger never exceeds the requested slot counts.
    #[test]
    fn burger_respects_portion_counts(
        catalog in catalog(),
        customer in customer(),
        seed in any::<u64>(),
    ) {
        let counts = PortionCounts::for_hungriness(customer.hungriness);
        let mut rng = StdRng::seed_from_u64(seed);
        let burger = generate(&customer, &catalog, &mut rng);
        let max_layers = counts.buns + counts.meats + counts.toppings + 2;
        prop_assert!(burger.len() <= max_layers as usize);
    }

    /// With two buns, the same bun sits right after the garnishes and on top,
    /// with only fillings between them.
    #[test]
    fn two_buns_flank_fillings(
        catalog in catalog(),
        customer in customer(),
        seed in any::<u64>(),
    ) {
        prop_assume!(customer.hungriness != Hungriness::Snack);
        let bun_available = catalog
            .ingredients_of(Category::Bun)
            .any(|i| i.is_acceptable_to(&customer.dislikes));
        prop_assume!(bun_available);

        let mut rng = StdRng::seed_from_u64(seed);
        let burger = generate(&customer, &catalog, &mut rng);
        let selection = replay_selection(&customer, &catalog, seed);

        let layers = burger.ingredients();
        let top = layers[layers.len() - 1];
        prop_assert!(top.is_in(Category::Bun));

        let bottom_idx = selection.garnishes.len();
        prop_assert!(bottom_idx < layers.len() - 1);
        prop_assert!(std::ptr::eq(layers[bottom_idx], top));
        for filling in &layers[bottom_idx + 1..layers.len() - 1] {
            prop_assert!(filling.is_in(Category::Topping) || filling.is_in(Category::Meat));
        }

        let expected = selection.expected_stack();
        prop_assert_eq!(layers.len(), expected.len());
        for (got, want) in layers.iter().zip(&expected) {
            prop_assert!(std::ptr::eq(*got, *want));
        }
    }

    /// Garnish counts stay within the bounds set by the Expensive preference.
    #[test]
    fn garnish_count_bounds(customer in customer(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = roll_garnish_count(&customer, &mut rng);
        if customer.dislikes(Tag::Expensive) {
            prop_assert_eq!(n, 0);
        } else if customer.likes(Tag::Expensive) {
            prop_assert!((1..=2).contains(&n));
        } else {
            prop_assert!(n <= 1);
        }
    }

    /// Portion counts are a pure function of hungriness.
    #[test]
    fn portion_counts_are_pure(h in hungriness()) {
        let a = PortionCounts::for_hungriness(h);
        prop_assert_eq!(a, PortionCounts::for_hungriness(h));
        prop_assert!(a.meats >= 1);
        prop_assert_eq!(a.toppings, (h.level() as f32 * 1.5).floor() as u32);
    }
}
