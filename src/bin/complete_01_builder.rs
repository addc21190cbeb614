// =============================================================================
// Milestone 1: Fluent HTML builder
// =============================================================================

const INDENT_SIZE: usize = 2;

#[derive(Debug, Clone, Default)]
struct HtmlElement {
    name: String,
    text: String,
    children: Vec<HtmlElement>,
}

impl HtmlElement {
    fn new(name: &str) -> Self {
        HtmlElement {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn with_text(name: &str, text: &str) -> Self {
        HtmlElement {
            name: name.to_string(),
            text: text.to_string(),
            children: Vec::new(),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    // Indentation grows by INDENT_SIZE per nesting level; empty text emits
    // no line at all.
    fn render_into(&self, out: &mut String, depth: usize) {
        let pad = " ".repeat(INDENT_SIZE * depth);
        out.push_str(&format!("{}<{}>\n", pad, self.name));

        if !self.text.is_empty() {
            let text_pad = " ".repeat(INDENT_SIZE * (depth + 1));
            out.push_str(&format!("{}{}\n", text_pad, self.text));
        }

        for child in &self.children {
            child.render_into(out, depth + 1);
        }

        out.push_str(&format!("{}</{}>\n", pad, self.name));
    }
}

struct HtmlBuilder {
    root: HtmlElement,
}

impl HtmlBuilder {
    fn new(root_name: &str) -> Self {
        HtmlBuilder {
            root: HtmlElement::new(root_name),
        }
    }

    fn add_child(&mut self, name: &str, text: &str) -> &mut Self {
        self.root.children.push(HtmlElement::with_text(name, text));
        self
    }

    // Consuming variant for one-expression chains.
    fn child(mut self, name: &str, text: &str) -> Self {
        self.root.children.push(HtmlElement::with_text(name, text));
        self
    }

    fn render(&self) -> String {
        self.root.render()
    }

    fn build(self) -> HtmlElement {
        self.root
    }
}

// =============================================================================
// Milestone 2: Faceted person builder
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    // address
    street_address: String,
    post_code: String,
    city: String,

    // employment
    company_name: String,
    position: String,
    annual_income: u32,
}

impl Person {
    fn builder() -> PersonBuilder {
        PersonBuilder {
            person: Person::default(),
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lives at {}, {}, {}; works at {} as a {} earning {}",
            self.street_address,
            self.post_code,
            self.city,
            self.company_name,
            self.position,
            self.annual_income
        )
    }
}

struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    fn lives(self) -> PersonAddressBuilder {
        PersonAddressBuilder {
            person: self.person,
        }
    }

    fn works(self) -> PersonJobBuilder {
        PersonJobBuilder {
            person: self.person,
        }
    }

    fn build(self) -> Person {
        self.person
    }
}

// Each facet owns the person under construction and can hand it to the
// other facet, so one chain can configure both aspects.
struct PersonAddressBuilder {
    person: Person,
}

impl PersonAddressBuilder {
    fn at(mut self, street_address: &str) -> Self {
        self.person.street_address = street_address.to_string();
        self
    }

    fn with_postcode(mut self, post_code: &str) -> Self {
        self.person.post_code = post_code.to_string();
        self
    }

    fn in_city(mut self, city: &str) -> Self {
        self.person.city = city.to_string();
        self
    }

    fn works(self) -> PersonJobBuilder {
        PersonJobBuilder {
            person: self.person,
        }
    }

    fn build(self) -> Person {
        self.person
    }
}

struct PersonJobBuilder {
    person: Person,
}

impl PersonJobBuilder {
    fn at(mut self, company_name: &str) -> Self {
        self.person.company_name = company_name.to_string();
        self
    }

    fn as_a(mut self, position: &str) -> Self {
        self.person.position = position.to_string();
        self
    }

    fn earning(mut self, annual_income: u32) -> Self {
        self.person.annual_income = annual_income;
        self
    }

    fn lives(self) -> PersonAddressBuilder {
        PersonAddressBuilder {
            person: self.person,
        }
    }

    fn build(self) -> Person {
        self.person
    }
}

fn main() {
    println!("=== Milestone 1: Fluent HTML builder ===");
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "hello").add_child("li", "world");
    println!("{}", builder.render());

    let page = HtmlBuilder::new("div")
        .child("p", "Built in one expression")
        .child("p", "No intermediate bindings")
        .build();
    println!("{}", page.render());

    println!("=== Milestone 2: Faceted person builder ===");
    let person = Person::builder()
        .lives()
        .at("123 London Road")
        .with_postcode("SW1 1GB")
        .in_city("London")
        .works()
        .at("PragmaSoft")
        .as_a("Consultant")
        .earning(10_000_000)
        .build();
    println!("Person {person}");
}
