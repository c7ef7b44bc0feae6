//! Raw inputs that value objects are built from.

use core::fmt;

/// The raw input a value object derives its attributes from.
///
/// A significance is kept verbatim next to the populated attributes, so it must be
/// cheap to clone and debuggable. `render` is the default textual view of a value
/// object; concrete kinds can override it on their side.
pub trait Significance: Clone + fmt::Debug {
    /// Render the raw input as text.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_display_significance {
    ($($t:ty),* $(,)?) => {
        $(
            impl Significance for $t {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_display_significance!(
    String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

impl Significance for &'static str {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Structured records render their parts separated by a single space.
impl<A: Significance, B: Significance> Significance for (A, B) {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)?;
        f.write_str(" ")?;
        self.1.render(f)
    }
}

/// Adapter that lets a significance be used with `format!` and friends.
pub struct Rendered<'a, S: Significance>(pub &'a S);

impl<S: Significance> fmt::Display for Rendered<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_render_like_display() {
        assert_eq!(Rendered(&"e.test@mail.org".to_string()).to_string(), "e.test@mail.org");
        assert_eq!(Rendered(&42u32).to_string(), "42");
        assert_eq!(Rendered(&1.0f64).to_string(), "1");
        assert_eq!(Rendered(&"raw").to_string(), "raw");
    }

    #[test]
    fn pairs_render_space_separated() {
        let record = (1.5f64, "Gcal.".to_string());
        assert_eq!(Rendered(&record).to_string(), "1.5 Gcal.");
    }
}
