use std::cell::{Cell, RefCell};
use std::fmt;

// =============================================================================
// Milestone 1: Property proxy
// =============================================================================

// A field that looks like a plain value but traces every assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Property<T> {
    value: T,
}

impl<T: Copy + fmt::Display> Property<T> {
    fn new(value: T) -> Self {
        Property { value }
    }

    fn get(&self) -> T {
        self.value
    }

    fn set(&mut self, value: T) {
        println!("assigning {} (was {})", value, self.value);
        self.value = value;
    }
}

struct StatBlock {
    strength: Property<i32>,
    agility: Property<i32>,
}

impl StatBlock {
    fn new() -> Self {
        StatBlock {
            strength: Property::new(10),
            agility: Property::new(5),
        }
    }
}

// =============================================================================
// Milestone 2: Virtual proxy - lazy image
// =============================================================================

trait Image {
    fn display(&self) -> String;
}

struct RealImage {
    filename: String,
}

impl RealImage {
    // "Loading" is the costly operation the proxy wants to defer.
    fn load(filename: &str) -> Self {
        println!("Loading heavy image: {filename}");
        RealImage {
            filename: filename.to_string(),
        }
    }
}

impl Image for RealImage {
    fn display(&self) -> String {
        format!("Displaying image: {}", self.filename)
    }
}

struct LazyImage {
    filename: String,
    real: RefCell<Option<RealImage>>,
    loads: Cell<usize>,
}

impl LazyImage {
    fn new(filename: &str) -> Self {
        LazyImage {
            filename: filename.to_string(),
            real: RefCell::new(None),
            loads: Cell::new(0),
        }
    }

    fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl Image for LazyImage {
    fn display(&self) -> String {
        let mut slot = self.real.borrow_mut();
        let real = slot.get_or_insert_with(|| {
            self.loads.set(self.loads.get() + 1);
            RealImage::load(&self.filename)
        });
        real.display()
    }
}

// =============================================================================
// Milestone 3: Communication proxy
// =============================================================================

trait Pingable {
    fn ping(&self, message: &str) -> String;
}

struct Pong;

impl Pingable for Pong {
    fn ping(&self, message: &str) -> String {
        format!("{message} pong")
    }
}

// In-process stand-in for the network hop; the caller cannot tell it from
// the local Pong.
fn remote_call(payload: &str) -> String {
    format!("{payload} pong")
}

struct RemotePong;

impl Pingable for RemotePong {
    fn ping(&self, message: &str) -> String {
        remote_call(message)
    }
}

fn try_it(pingable: &dyn Pingable) -> String {
    pingable.ping("ping")
}

// =============================================================================
// Milestone 4: Bank account behind a report
// =============================================================================

struct BankAccount {
    balance: i64,
}

impl BankAccount {
    fn new(balance: i64) -> Self {
        BankAccount { balance }
    }

    fn report(&self) -> String {
        format!("Your account has {} yuan", self.balance)
    }
}

fn main() {
    println!("=== Milestone 1: Property proxy ===");
    let mut stats = StatBlock::new();
    stats.strength.set(12);
    stats.agility.set(7);
    println!("strength={} agility={}", stats.strength.get(), stats.agility.get());

    println!("\n=== Milestone 2: Lazy image ===");
    let image = LazyImage::new("pokemon.png");
    println!("proxy constructed, nothing loaded yet");
    println!("{}", image.display());
    println!("{}", image.display());
    println!("loads: {}", image.load_count());

    println!("\n=== Milestone 3: Communication proxy ===");
    let local = Pong;
    let remote = RemotePong;
    for _ in 0..3 {
        println!("{}", try_it(&local));
    }
    println!("{}", try_it(&remote));

    println!("\n=== Milestone 4: Bank account ===");
    let account = BankAccount::new(500);
    println!("{}", account.report());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_get_set() {
        let mut strength = Property::new(10);
        assert_eq!(strength.get(), 10);
        strength.set(12);
        assert_eq!(strength.get(), 12);
    }

    #[test]
    fn test_stat_block_defaults() {
        let stats = StatBlock::new();
        assert_eq!(stats.strength.get(), 10);
        assert_eq!(stats.agility.get(), 5);
    }

    #[test]
    fn test_lazy_image_defers_loading() {
        let image = LazyImage::new("pokemon.png");
        assert_eq!(image.load_count(), 0);
        assert_eq!(image.display(), "Displaying image: pokemon.png");
        assert_eq!(image.load_count(), 1);
    }

    #[test]
    fn test_lazy_image_loads_exactly_once() {
        let image = LazyImage::new("pokemon.png");
        for _ in 0..5 {
            image.display();
        }
        assert_eq!(image.load_count(), 1);
    }

    #[test]
    fn test_real_image_displays_directly() {
        let image = RealImage::load("direct.png");
        assert_eq!(image.display(), "Displaying image: direct.png");
    }

    #[test]
    fn test_remote_proxy_is_indistinguishable() {
        let local = Pong;
        let remote = RemotePong;
        assert_eq!(try_it(&local), try_it(&remote));
        assert_eq!(try_it(&remote), "ping pong");
    }

    #[test]
    fn test_bank_account_report() {
        let account = BankAccount::new(500);
        assert_eq!(account.report(), "Your account has 500 yuan");
    }
}
