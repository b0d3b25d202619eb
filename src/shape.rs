// 🔺 Shape - Polymorphism
// Geometry lives on the variant; color lives on the shared wrapper.
// Draw dispatches per variant and never mutates.

use serde::{Deserialize, Serialize};

/// Color a shape starts with when none is given
pub const DEFAULT_COLOR: &str = "Black";

// ============================================================================
// SHAPE
// ============================================================================

/// Shape variants, each carrying only its own geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Triangle { base: f64, height: f64 },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "Circle",
            Shape::Rectangle { .. } => "Rectangle",
            Shape::Triangle { .. } => "Triangle",
        }
    }
}

// ============================================================================
// COLORED SHAPE
// ============================================================================

/// A shape plus its mutable color.
///
/// `set_color` is shared behavior on the wrapper; `draw` dispatches on the
/// variant. Repainting never touches geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredShape {
    color: String,
    shape: Shape,
}

impl ColoredShape {
    /// New shape with the default color
    pub fn new(shape: Shape) -> Self {
        ColoredShape {
            color: DEFAULT_COLOR.to_string(),
            shape,
        }
    }

    /// New shape with an explicit color
    pub fn with_color(shape: Shape, color: &str) -> Self {
        ColoredShape {
            color: color.to_string(),
            shape,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Repaint; callable any number of times
    pub fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    /// Variant-specific description; reads only
    pub fn draw(&self) -> String {
        match &self.shape {
            Shape::Circle { radius } => {
                format!("Drawing a {} Circle with radius {}", self.color, radius)
            }
            Shape::Rectangle { width, height } => {
                format!(
                    "Drawing a {} Rectangle with width {} and height {}",
                    self.color, width, height
                )
            }
            Shape::Triangle { base, height } => {
                format!(
                    "Drawing a {} Triangle with base {} and height {}",
                    self.color, base, height
                )
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
