// =============================================================================
// Milestone 1: Renderer bridge
// =============================================================================

trait Renderer {
    fn render_circle(&self, x: f64, y: f64, radius: f64) -> String;
}

struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, _x: f64, _y: f64, radius: f64) -> String {
        format!("Drawing a vector circle of radius {radius}")
    }
}

struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render_circle(&self, _x: f64, _y: f64, radius: f64) -> String {
        format!("Rasterizing circle of radius {radius}")
    }
}

// The shape hierarchy and the rendering hierarchy vary independently; a
// shape borrows whichever renderer it is bridged to.
struct Circle<'a> {
    renderer: &'a dyn Renderer,
    x: f64,
    y: f64,
    radius: f64,
}

impl<'a> Circle<'a> {
    fn new(renderer: &'a dyn Renderer, x: f64, y: f64, radius: f64) -> Self {
        Circle { renderer, x, y, radius }
    }

    fn draw(&self) -> String {
        self.renderer.render_circle(self.x, self.y, self.radius)
    }

    fn resize(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

// =============================================================================
// Milestone 2: Pimpl
// =============================================================================

// The implementation lives in a private module; callers of Person only
// ever see the outer type.
mod detail {
    pub struct PersonImpl;

    impl PersonImpl {
        pub fn greet(&self, name: &str) -> String {
            format!("Hello, {name}")
        }
    }
}

struct Person {
    name: String,
    inner: detail::PersonImpl,
}

impl Person {
    fn new(name: &str) -> Self {
        Person {
            name: name.to_string(),
            inner: detail::PersonImpl,
        }
    }

    fn greet(&self) -> String {
        self.inner.greet(&self.name)
    }
}

fn main() {
    println!("=== Milestone 1: Renderer bridge ===");
    let raster = RasterRenderer;
    let mut circle = Circle::new(&raster, 5.0, 5.0, 5.0);
    println!("{}", circle.draw());
    circle.resize(2.0);
    println!("{}", circle.draw());

    let vector = VectorRenderer;
    let vector_circle = Circle::new(&vector, 5.0, 5.0, 5.0);
    println!("{}", vector_circle.draw());

    println!("\n=== Milestone 2: Pimpl ===");
    let person = Person::new("John");
    println!("{}", person.greet());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_shape_different_renderers() {
        let raster = RasterRenderer;
        let vector = VectorRenderer;

        let raster_circle = Circle::new(&raster, 5.0, 5.0, 5.0);
        let vector_circle = Circle::new(&vector, 5.0, 5.0, 5.0);

        assert_eq!(raster_circle.draw(), "Rasterizing circle of radius 5");
        assert_eq!(vector_circle.draw(), "Drawing a vector circle of radius 5");
    }

    #[test]
    fn test_resize_scales_radius() {
        let raster = RasterRenderer;
        let mut circle = Circle::new(&raster, 5.0, 5.0, 5.0);
        circle.resize(2.0);
        assert_eq!(circle.radius, 10.0);
        assert_eq!(circle.draw(), "Rasterizing circle of radius 10");
    }

    #[test]
    fn test_pimpl_greeting() {
        let person = Person::new("John");
        assert_eq!(person.greet(), "Hello, John");
    }
}
