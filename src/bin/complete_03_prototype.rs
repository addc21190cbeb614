use serde::{Deserialize, Serialize};

// =============================================================================
// Milestone 1: Prototype factory
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Address {
    street: String,
    city: String,
    suite: u32,
}

impl Address {
    fn new(street: &str, city: &str, suite: u32) -> Self {
        Address {
            street: street.to_string(),
            city: city.to_string(),
            suite,
        }
    }
}

// The address is boxed so a clone is visibly a deep copy of an owned
// allocation, not a shared pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Contact {
    name: String,
    address: Box<Address>,
}

impl Contact {
    fn new(name: &str, address: Address) -> Self {
        Contact {
            name: name.to_string(),
            address: Box::new(address),
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} works at {} suite {}, {}",
            self.name, self.address.street, self.address.suite, self.address.city
        )
    }
}

struct EmployeeFactory {
    main_office: Contact,
    aux_office: Contact,
}

impl EmployeeFactory {
    fn new() -> Self {
        EmployeeFactory {
            main_office: Contact::new("", Address::new("123 East Dr", "London", 0)),
            aux_office: Contact::new("", Address::new("123B East Dr", "London", 0)),
        }
    }

    fn new_main_office_employee(&self, name: &str, suite: u32) -> Contact {
        Self::new_employee(&self.main_office, name, suite)
    }

    fn new_aux_office_employee(&self, name: &str, suite: u32) -> Contact {
        Self::new_employee(&self.aux_office, name, suite)
    }

    fn new_employee(prototype: &Contact, name: &str, suite: u32) -> Contact {
        let mut employee = prototype.clone();
        employee.name = name.to_string();
        employee.address.suite = suite;
        employee
    }
}

// =============================================================================
// Milestone 2: Deep copy through serialization
// =============================================================================

// Round-tripping through JSON copies the whole object graph without the
// type opting into Clone knowledge of its own structure.
fn clone_via_serialization(contact: &Contact) -> serde_json::Result<Contact> {
    let json = serde_json::to_string(contact)?;
    serde_json::from_str(&json)
}

fn main() {
    println!("=== Milestone 1: Prototype factory ===");
    let factory = EmployeeFactory::new();
    let john = factory.new_aux_office_employee("John Doe", 123);
    let jane = factory.new_main_office_employee("Jane Doe", 125);
    println!("{john}");
    println!("{jane}");

    println!("\n=== Milestone 2: Deep copy through serialization ===");
    match clone_via_serialization(&john) {
        Ok(mut copy) => {
            copy.name = "John Clone".to_string();
            copy.address.suite = 999;
            println!("original: {john}");
            println!("copy:     {copy}");
        }
        Err(err) => eprintln!("serialization failed: {err}"),
    }
}
