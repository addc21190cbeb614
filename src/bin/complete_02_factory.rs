use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum DrinkError {
    #[error("unknown drink '{0}'")]
    UnknownDrink(String),
}

// =============================================================================
// Milestone 1: Factory function
// =============================================================================

trait HotDrink: std::fmt::Debug {
    fn prepare(&self, volume_ml: u32) -> String;
}

#[derive(Debug)]
struct Tea;

impl HotDrink for Tea {
    fn prepare(&self, volume_ml: u32) -> String {
        format!("Take tea bag, boil water, pour {volume_ml}ml, add some lemon")
    }
}

#[derive(Debug)]
struct Coffee;

impl HotDrink for Coffee {
    fn prepare(&self, volume_ml: u32) -> String {
        format!("Grind some beans, boil water, pour {volume_ml}ml")
    }
}

// Unknown kinds are an error rather than a silent fallback to coffee.
fn make_drink(kind: &str) -> Result<Box<dyn HotDrink>, DrinkError> {
    match kind {
        "tea" => Ok(Box::new(Tea)),
        "coffee" => Ok(Box::new(Coffee)),
        other => Err(DrinkError::UnknownDrink(other.to_string())),
    }
}

// =============================================================================
// Milestone 2: Abstract factory
// =============================================================================

trait HotDrinkFactory {
    fn make(&self) -> Box<dyn HotDrink>;
}

struct TeaFactory;

impl HotDrinkFactory for TeaFactory {
    fn make(&self) -> Box<dyn HotDrink> {
        Box::new(Tea)
    }
}

struct CoffeeFactory;

impl HotDrinkFactory for CoffeeFactory {
    fn make(&self) -> Box<dyn HotDrink> {
        Box::new(Coffee)
    }
}

struct DrinkFactory {
    hot_factories: HashMap<String, Box<dyn HotDrinkFactory>>,
}

impl DrinkFactory {
    fn new() -> Self {
        let mut hot_factories: HashMap<String, Box<dyn HotDrinkFactory>> = HashMap::new();
        hot_factories.insert("tea".to_string(), Box::new(TeaFactory));
        hot_factories.insert("coffee".to_string(), Box::new(CoffeeFactory));
        DrinkFactory { hot_factories }
    }

    fn make_drink(&self, name: &str) -> Result<Box<dyn HotDrink>, DrinkError> {
        self.hot_factories
            .get(name)
            .map(|factory| factory.make())
            .ok_or_else(|| DrinkError::UnknownDrink(name.to_string()))
    }
}

// =============================================================================
// Milestone 3: Functional factory
// =============================================================================

// Instead of one factory type per drink, store a closure per drink that
// prepares it with its customary volume.
struct DrinkWithVolumeFactory {
    factories: HashMap<String, Box<dyn Fn() -> String>>,
}

impl DrinkWithVolumeFactory {
    fn new() -> Self {
        let mut factories: HashMap<String, Box<dyn Fn() -> String>> = HashMap::new();
        factories.insert("tea".to_string(), Box::new(|| Tea.prepare(200)));
        factories.insert("coffee".to_string(), Box::new(|| Coffee.prepare(50)));
        DrinkWithVolumeFactory { factories }
    }

    fn prepare(&self, name: &str) -> Result<String, DrinkError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| DrinkError::UnknownDrink(name.to_string()))
    }
}

fn main() {
    println!("=== Milestone 1: Factory function ===");
    match make_drink("tea") {
        Ok(drink) => println!("{}", drink.prepare(200)),
        Err(err) => eprintln!("error: {err}"),
    }
    match make_drink("soup") {
        Ok(drink) => println!("{}", drink.prepare(200)),
        Err(err) => println!("rejected: {err}"),
    }

    println!("\n=== Milestone 2: Abstract factory ===");
    let factory = DrinkFactory::new();
    for name in ["coffee", "tea"] {
        match factory.make_drink(name) {
            Ok(drink) => println!("{}", drink.prepare(200)),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    println!("\n=== Milestone 3: Functional factory ===");
    let volume_factory = DrinkWithVolumeFactory::new();
    for name in ["tea", "coffee"] {
        match volume_factory.prepare(name) {
            Ok(steps) => println!("{steps}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }
}
