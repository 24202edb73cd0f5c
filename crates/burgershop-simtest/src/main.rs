//! Burgershop Headless Generation Harness
//!
//! Validates burger generation logic and the bundled data without the game
//! client. Runs entirely in-process — no engine, no rendering.
//!
//! Usage:
//!   cargo run -p burgershop-simtest
//!   cargo run -p burgershop-simtest -- --verbose --seed 7 --rounds 50
//!   cargo run -p burgershop-simtest -- --ingredients my.csv --customers my.csv

use std::path::{Path, PathBuf};

use burgershop_logic::catalog::Catalog;
use burgershop_logic::customer::{Customer, Hungriness};
use burgershop_logic::ingredient::Ingredient;
use burgershop_logic::loader::{parse_customers, parse_ingredients};
use burgershop_logic::recipe::{generate, roll_garnish_count, Burger, PortionCounts};
use burgershop_logic::tags::{Category, Tag};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

// ── Bundled data (same records the game ships with) ─────────────────────
const INGREDIENTS_CSV: &str = include_str!("../../../data/ingredients.csv");
const CUSTOMERS_CSV: &str = include_str!("../../../data/characters.csv");

#[derive(Parser)]
#[command(name = "burgershop-simtest")]
#[command(about = "Generate burgers for every customer and validate the results")]
struct Args {
    /// Ingredient records (line format). Defaults to the bundled data.
    #[arg(long)]
    ingredients: Option<PathBuf>,

    /// Customer records (line format). Defaults to the bundled data.
    #[arg(long)]
    customers: Option<PathBuf>,

    /// Seed for the random source
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Burgers generated per customer
    #[arg(long, default_value_t = 20)]
    rounds: u32,

    /// Print one burger per customer as JSON
    #[arg(long)]
    json: bool,

    /// Show passing checks and debug logging
    #[arg(short, long)]
    verbose: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

#[derive(Serialize)]
struct CustomerOrder<'a> {
    customer: &'a str,
    hungriness: u8,
    burger: Vec<&'a str>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn read_or_bundled(path: Option<&Path>, bundled: &'static str) -> std::io::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p),
        None => Ok(bundled.to_string()),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    println!("=== Burgershop Generation Harness ===\n");

    let (catalog, customers) = match load(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Failed to load records: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} ingredients and {} customers (seed {})",
        catalog.len(),
        customers.len(),
        args.seed
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut results = Vec::new();

    // 1. Catalog coverage
    results.extend(validate_catalog(&catalog));

    // 2. Portion rules
    results.extend(validate_portions(&customers, &mut rng));

    // 3. Generation invariants per customer
    results.extend(validate_generation(&catalog, &customers, args.rounds, &mut rng));

    // 4. Degenerate inputs
    results.extend(validate_degenerate(&catalog, &mut rng));

    // 5. Sample orders
    print_orders(&catalog, &customers, &mut rng, args.json, args.verbose);

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn load(args: &Args) -> Result<(Catalog, Vec<Customer>), Box<dyn std::error::Error>> {
    let ingredient_text = read_or_bundled(args.ingredients.as_deref(), INGREDIENTS_CSV)?;
    let customer_text = read_or_bundled(args.customers.as_deref(), CUSTOMERS_CSV)?;

    let catalog = Catalog::build(parse_ingredients(&ingredient_text)?)?;
    // Hungriness rolls use their own stream so --seed keeps generation stable
    let mut customer_rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));
    let customers = parse_customers(&customer_text, &mut customer_rng)?;
    Ok((catalog, customers))
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(catalog: &Catalog) -> Vec<TestResult> {
    println!("--- Catalog ---");
    let mut results = Vec::new();

    for &category in Category::all() {
        let count = catalog.count_of(category);
        results.push(TestResult::check(
            format!("catalog_has_{}", category.name().to_lowercase()),
            count > 0,
            format!("{} ingredients", count),
        ));
    }

    let listed: usize = Category::all().iter().map(|c| catalog.count_of(*c)).sum();
    results.push(TestResult::check(
        "every_ingredient_categorized",
        catalog.iter().all(|i| !i.categories.is_empty()),
        format!("{} ingredients, {} category listings", catalog.len(), listed),
    ));

    results
}

// ── 2. Portions ─────────────────────────────────────────────────────────

fn validate_portions(customers: &[Customer], rng: &mut StdRng) -> Vec<TestResult> {
    println!("--- Portions ---");
    let mut results = Vec::new();

    for &h in Hungriness::all() {
        let counts = PortionCounts::for_hungriness(h);
        let again = PortionCounts::for_hungriness(h);
        results.push(TestResult::check(
            format!("portions_level_{}", h.level()),
            counts == again && counts.meats >= 1 && (1..=2).contains(&counts.buns),
            format!(
                "buns={} meats={} toppings={}",
                counts.buns, counts.meats, counts.toppings
            ),
        ));
    }

    let mut out_of_bounds = Vec::new();
    for customer in customers {
        for _ in 0..50 {
            let n = roll_garnish_count(customer, rng);
            let ok = if customer.dislikes(Tag::Expensive) {
                n == 0
            } else if customer.likes(Tag::Expensive) {
                (1..=2).contains(&n)
            } else {
                n <= 1
            };
            if !ok {
                out_of_bounds.push(format!("{}={}", customer.name, n));
                break;
            }
        }
    }
    results.push(TestResult::check(
        "garnish_count_bounds",
        out_of_bounds.is_empty(),
        if out_of_bounds.is_empty() {
            format!("{} customers x 50 rolls", customers.len())
        } else {
            out_of_bounds.join(", ")
        },
    ));

    results
}

// ── 3. Generation ───────────────────────────────────────────────────────

/// Returns a description of the first broken invariant, if any.
fn check_burger(customer: &Customer, catalog: &Catalog, burger: &Burger<'_>) -> Option<String> {
    if let Some(bad) = burger
        .iter()
        .find(|i| !i.is_acceptable_to(&customer.dislikes))
    {
        return Some(format!("got disliked {}", bad.name));
    }

    let counts = PortionCounts::for_hungriness(customer.hungriness);
    let bun_available = catalog
        .ingredients_of(Category::Bun)
        .any(|i| i.is_acceptable_to(&customer.dislikes));
    if counts.buns == 2 && bun_available {
        if let Some(reason) = check_flanking(burger.ingredients()) {
            return Some(reason);
        }
    }

    let max_layers = (counts.buns + counts.meats + counts.toppings + 2) as usize;
    if burger.len() > max_layers {
        return Some(format!("{} layers exceeds request of {}", burger.len(), max_layers));
    }

    None
}

/// Two-bun layout: garnishes, bottom bun, fillings only, then the same bun on top.
fn check_flanking(layers: &[&Ingredient]) -> Option<String> {
    let top = match layers.last() {
        Some(top) if top.is_in(Category::Bun) => *top,
        _ => return Some("top layer is not a bun".to_string()),
    };
    let bottom_idx = match layers.iter().position(|l| std::ptr::eq(*l, top)) {
        Some(idx) if idx < layers.len() - 1 => idx,
        _ => return Some("no bottom bun under the fillings".to_string()),
    };
    if bottom_idx > 2 || !layers[..bottom_idx].iter().all(|l| l.is_in(Category::Garnish)) {
        return Some(format!("{} layers before the bottom bun", bottom_idx));
    }
    if let Some(stray) = layers[bottom_idx + 1..layers.len() - 1]
        .iter()
        .find(|l| !l.is_in(Category::Topping) && !l.is_in(Category::Meat))
    {
        return Some(format!("{} between the buns is not a filling", stray.name));
    }
    None
}

fn validate_generation(
    catalog: &Catalog,
    customers: &[Customer],
    rounds: u32,
    rng: &mut StdRng,
) -> Vec<TestResult> {
    println!("--- Generation ---");
    let mut results = Vec::new();

    for customer in customers {
        let mut failure = None;
        let mut total_layers = 0;
        for _ in 0..rounds {
            let burger = generate(customer, catalog, rng);
            total_layers += burger.len();
            if let Some(reason) = check_burger(customer, catalog, &burger) {
                failure = Some(reason);
                break;
            }
        }
        let detail = match &failure {
            Some(reason) => reason.clone(),
            None => format!(
                "{} burgers, avg {:.1} layers",
                rounds,
                total_layers as f32 / rounds.max(1) as f32
            ),
        };
        results.push(TestResult::check(
            format!("generate_for_{}", customer.id),
            failure.is_none(),
            detail,
        ));
    }

    results
}

// ── 4. Degenerate inputs ────────────────────────────────────────────────

fn validate_degenerate(catalog: &Catalog, rng: &mut StdRng) -> Vec<TestResult> {
    println!("--- Degenerate inputs ---");
    let mut results = Vec::new();

    let empty = Catalog::default();
    let hog = Customer::new("hog", "Whole Hog").with_hungriness(Hungriness::WholeHog);
    let burger = generate(&hog, &empty, rng);
    results.push(TestResult::check(
        "empty_catalog_empty_burger",
        burger.is_empty(),
        format!("{} layers", burger.len()),
    ));

    let meat_tags: Vec<Tag> = catalog
        .ingredients_of(Category::Meat)
        .flat_map(|i| i.tags.iter().copied())
        .collect();
    let no_meat = hog.clone().with_dislikes(meat_tags);
    let burger = generate(&no_meat, catalog, rng);
    results.push(TestResult::check(
        "all_meat_disliked_no_meat",
        burger.count_in(Category::Meat) == 0,
        format!("{} layers, no meat", burger.len()),
    ));

    let picky = hog.with_dislikes(Tag::all().iter().copied());
    let burger = generate(&picky, catalog, rng);
    let untagged = catalog.iter().any(|i| i.tags.is_empty());
    results.push(TestResult::check(
        "everything_disliked",
        untagged || burger.is_empty(),
        format!("{} layers", burger.len()),
    ));

    results
}

// ── 5. Sample orders ────────────────────────────────────────────────────

fn print_orders(
    catalog: &Catalog,
    customers: &[Customer],
    rng: &mut StdRng,
    json: bool,
    verbose: bool,
) {
    println!("--- Sample orders ---");
    let orders: Vec<(&Customer, Burger<'_>)> = customers
        .iter()
        .map(|c| (c, generate(c, catalog, rng)))
        .collect();

    if json {
        let dump: Vec<CustomerOrder<'_>> = orders
            .iter()
            .map(|(c, b)| CustomerOrder {
                customer: &c.name,
                hungriness: c.hungriness.level(),
                burger: b.names(),
            })
            .collect();
        match serde_json::to_string_pretty(&dump) {
            Ok(text) => println!("{}", text),
            Err(e) => tracing::warn!("Could not serialize orders: {}", e),
        }
        return;
    }

    for (customer, burger) in &orders {
        if verbose {
            print!("{}", customer);
        } else {
            println!("{} (hungriness {})", customer.name, customer.hungriness.level());
        }
        for line in burger.to_string().lines() {
            println!("    {}", line);
        }
    }
}
