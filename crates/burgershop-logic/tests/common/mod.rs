//! Shared helpers for integration tests.

use burgershop_logic::catalog::Catalog;
use burgershop_logic::customer::Customer;
use burgershop_logic::ingredient::Ingredient;
use burgershop_logic::recipe::{pick_acceptable, roll_garnish_count, PortionCounts};
use burgershop_logic::tags::Category;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Slot picks in the order `generate` draws them from the rng.
pub struct Selection<'a> {
    pub buns: u32,
    pub toppings: Vec<&'a Ingredient>,
    pub meats: Vec<&'a Ingredient>,
    pub bun: Option<&'a Ingredient>,
    pub garnishes: Vec<&'a Ingredient>,
}

impl<'a> Selection<'a> {
    /// The stack `generate` should build from these picks.
    pub fn expected_stack(&self) -> Vec<&'a Ingredient> {
        let mut stack: Vec<&Ingredient> = self.garnishes.iter().rev().copied().collect();
        if let (Some(bun), 2) = (self.bun, self.buns) {
            stack.push(bun);
        }
        stack.extend(&self.toppings);
        stack.extend(&self.meats);
        stack.extend(self.bun);
        stack
    }
}

fn picks<'a>(
    catalog: &'a Catalog,
    category: Category,
    count: u32,
    customer: &Customer,
    rng: &mut StdRng,
) -> Vec<&'a Ingredient> {
    (0..count)
        .filter_map(|_| pick_acceptable(catalog.ingredients_of(category), &customer.dislikes, rng))
        .collect()
}

/// Replay the rng draws `generate` makes for `seed`, slot by slot.
pub fn replay_selection<'a>(customer: &Customer, catalog: &'a Catalog, seed: u64) -> Selection<'a> {
    let mut rng = StdRng::seed_from_u64(seed);
    let counts = PortionCounts::for_hungriness(customer.hungriness);
    let garnish_count = roll_garnish_count(customer, &mut rng);

    let toppings = picks(catalog, Category::Topping, counts.toppings, customer, &mut rng);
    let meats = picks(catalog, Category::Meat, counts.meats, customer, &mut rng);
    let bun = pick_acceptable(
        catalog.ingredients_of(Category::Bun),
        &customer.dislikes,
        &mut rng,
    );
    let garnishes = picks(catalog, Category::Garnish, garnish_count, customer, &mut rng);

    Selection {
        buns: counts.buns,
        toppings,
        meats,
        bun,
        garnishes,
    }
}
