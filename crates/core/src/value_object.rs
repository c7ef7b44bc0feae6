//! Value objects: equality by content, never by identity.
//!
//! A value object is built exactly once from a raw *significance*, never mutated
//! afterwards, and compared by its domain attributes. The abstraction is split in
//! two halves:
//!
//! - [`ValueKind`] is what a concrete type supplies: how to populate its attributes
//!   from a significance and how two populated instances compare.
//! - [`Value`] is what callers use: construction, rendering, comparison against an
//!   instance or a raw significance, and "change" (which always returns a new
//!   instance).

use core::cmp::Ordering;
use core::fmt;
use core::ops::Deref;

use crate::error::{ValueError, ValueResult};
use crate::significance::{Rendered, Significance};

/// Capability set a concrete value type implements.
///
/// Implement it on the struct holding the *attributes* derived from the
/// significance; callers work with [`Value<Self>`].
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Percent(u8);
///
/// impl ValueKind for Percent {
///     type Significance = u8;
///     const KIND: &'static str = "percent";
///
///     fn populate(raw: &u8) -> ValueResult<Self> {
///         if *raw > 100 {
///             return Err(ValueError::invalid(Self::KIND, "must be at most 100"));
///         }
///         Ok(Percent(*raw))
///     }
///
///     fn compare_same(&self, other: &Self) -> Ordering {
///         self.0.cmp(&other.0)
///     }
/// }
///
/// let half = Value::<Percent>::construct(50)?;
/// assert!(half.compare_to_raw(50)?.is_eq());
/// ```
pub trait ValueKind: Sized {
    /// Raw input the attributes are derived from.
    type Significance: Significance;

    /// Short label used in errors and log records.
    const KIND: &'static str;

    /// Derive the attributes from `significance`.
    ///
    /// Called exactly once per instance, before the instance exists. Return
    /// [`ValueError::InvalidSignificance`] when the input does not describe a valid
    /// value; it is propagated to the caller unchanged.
    fn populate(significance: &Self::Significance) -> ValueResult<Self>;

    /// Three-way comparison between two populated instances.
    ///
    /// Equality is derived from this: two values are equal iff this returns
    /// `Ordering::Equal`. Kinds that only have a meaningful notion of equality
    /// still return a total order.
    fn compare_same(&self, other: &Self) -> Ordering;

    /// Textual view of the value. Renders the raw significance unless overridden.
    fn render(&self, significance: &Self::Significance, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        significance.render(f)
    }
}

/// Marker for kinds whose `compare_same` is a total order.
///
/// Only these get `PartialEq`, `Eq`, `PartialOrd` and `Ord` on [`Value`], so they
/// can be sorted and used as `BTreeMap`/`BTreeSet` keys. Do not implement it for a
/// kind with tolerance-based equality: "within epsilon" is not transitive. Such
/// kinds are compared with [`Value::compare_to`] and [`Value::compare_to_value`].
pub trait TotalOrder: ValueKind {}

/// Right-hand side of [`Value::compare_to`].
#[derive(Debug)]
pub enum Operand<'a, K: ValueKind> {
    /// An already constructed instance of the same kind.
    Instance(&'a Value<K>),
    /// A raw significance, validated through full construction before comparing.
    Raw(K::Significance),
}

impl<'a, K: ValueKind> From<&'a Value<K>> for Operand<'a, K> {
    fn from(value: &'a Value<K>) -> Self {
        Operand::Instance(value)
    }
}

/// An immutable value object of kind `K`.
///
/// Holds the raw significance it was built from plus the attributes `K` populated
/// from it. There is no way to obtain a `&mut` to either: the only way to get a
/// different value is [`Value::change_to`].
#[derive(Clone)]
pub struct Value<K: ValueKind> {
    significance: K::Significance,
    attributes: K,
}

impl<K: ValueKind> Value<K> {
    /// Build a value object from its raw significance.
    pub fn construct(significance: K::Significance) -> ValueResult<Self> {
        let attributes = K::populate(&significance).inspect_err(|err| {
            tracing::trace!(kind = K::KIND, error = %err, "value object rejected");
        })?;
        tracing::trace!(kind = K::KIND, "value object constructed");

        Ok(Self {
            significance,
            attributes,
        })
    }

    /// Re-run initialization on an existing value object.
    ///
    /// Every reachable `Value` is already initialized, so this always fails with
    /// [`ValueError::IllegalReconstruction`] and leaves `self` as it was.
    pub fn reinitialize(&mut self, _significance: K::Significance) -> ValueResult<()> {
        tracing::warn!(kind = K::KIND, "attempted to re-initialize an immutable value object");
        Err(ValueError::reconstruction(K::KIND))
    }

    pub fn significance(&self) -> &K::Significance {
        &self.significance
    }

    pub fn attributes(&self) -> &K {
        &self.attributes
    }

    pub fn into_parts(self) -> (K::Significance, K) {
        (self.significance, self.attributes)
    }

    /// Compare against another instance or a raw significance.
    ///
    /// A raw significance is first turned into a temporary instance with the same
    /// validation as [`Value::construct`]; its failure is returned as is.
    pub fn compare_to(&self, operand: Operand<'_, K>) -> ValueResult<Ordering> {
        match operand {
            Operand::Instance(other) => Ok(self.compare_to_value(other)),
            Operand::Raw(raw) => {
                tracing::debug!(
                    kind = K::KIND,
                    raw = %Rendered(&raw),
                    "comparing value object against raw significance"
                );
                let other = Self::construct(raw)?;
                Ok(self.compare_to_value(&other))
            }
        }
    }

    pub fn compare_to_value(&self, other: &Self) -> Ordering {
        self.attributes.compare_same(&other.attributes)
    }

    pub fn compare_to_raw(&self, raw: K::Significance) -> ValueResult<Ordering> {
        self.compare_to(Operand::Raw(raw))
    }

    /// `true` when `raw` describes a value equal to `self`.
    pub fn equals_raw(&self, raw: K::Significance) -> ValueResult<bool> {
        Ok(self.compare_to_raw(raw)?.is_eq())
    }

    /// Build a new value object from `significance`; `self` is left untouched.
    pub fn change_to(&self, significance: K::Significance) -> ValueResult<Self> {
        tracing::trace!(kind = K::KIND, "changing value object");
        Self::construct(significance)
    }
}

impl<K: ValueKind> Deref for Value<K> {
    type Target = K;

    fn deref(&self) -> &Self::Target {
        &self.attributes
    }
}

impl<K: ValueKind> fmt::Display for Value<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.attributes.render(&self.significance, f)
    }
}

impl<K: ValueKind + fmt::Debug> fmt::Debug for Value<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("kind", &K::KIND)
            .field("significance", &self.significance)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl<K: TotalOrder> PartialEq for Value<K> {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to_value(other).is_eq()
    }
}

impl<K: TotalOrder> Eq for Value<K> {}

impl<K: TotalOrder> PartialOrd for Value<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: TotalOrder> Ord for Value<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to_value(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Equality-style kind: a trimmed, non-empty label.
    #[derive(Debug, Clone)]
    struct Label {
        text: String,
    }

    impl ValueKind for Label {
        type Significance = String;
        const KIND: &'static str = "label";

        fn populate(significance: &String) -> ValueResult<Self> {
            if significance.trim().is_empty() {
                return Err(ValueError::invalid(Self::KIND, "label cannot be empty"));
            }
            Ok(Self {
                text: significance.clone(),
            })
        }

        fn compare_same(&self, other: &Self) -> Ordering {
            self.text.cmp(&other.text)
        }
    }

    impl TotalOrder for Label {}

    /// Ordered kind with a derived attribute and a rendering override.
    #[derive(Debug, Clone)]
    struct Length {
        millimetres: i64,
    }

    impl ValueKind for Length {
        type Significance = (i64, String);
        const KIND: &'static str = "length";

        fn populate(significance: &(i64, String)) -> ValueResult<Self> {
            let (amount, unit) = significance;
            let factor = match unit.as_str() {
                "mm" => 1,
                "cm" => 10,
                "m" => 1000,
                other => {
                    return Err(ValueError::invalid(Self::KIND, format!("unknown unit '{other}'")));
                }
            };
            Ok(Self {
                millimetres: amount * factor,
            })
        }

        fn compare_same(&self, other: &Self) -> Ordering {
            self.millimetres.cmp(&other.millimetres)
        }

        fn render(&self, _significance: &(i64, String), f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}mm", self.millimetres)
        }
    }

    impl TotalOrder for Length {}

    fn label(text: &str) -> Value<Label> {
        Value::construct(text.to_string()).unwrap()
    }

    fn length(amount: i64, unit: &str) -> (i64, String) {
        (amount, unit.to_string())
    }

    #[test]
    fn construct_renders_raw_significance_by_default() {
        let value = label("e.test@mail.org");
        assert_eq!(value.to_string(), "e.test@mail.org");
        assert_eq!(value.significance(), "e.test@mail.org");
        assert_eq!(value.text, "e.test@mail.org");
    }

    #[test]
    fn construct_propagates_populate_failure() {
        let err = Value::<Label>::construct("   ".to_string()).unwrap_err();
        assert_eq!(err, ValueError::invalid("label", "label cannot be empty"));
    }

    #[test]
    fn reinitialize_is_rejected_and_leaves_value_untouched() {
        let mut value = label("e.test@mail.org");

        let err = value.reinitialize("test@mail.org".to_string()).unwrap_err();
        assert!(err.is_illegal_reconstruction());
        assert_eq!(err.to_string(), "cannot change an immutable value object (label)");
        assert_eq!(value.to_string(), "e.test@mail.org");
    }

    #[test]
    fn change_to_returns_new_value_and_keeps_original() {
        let original = label("e.test@mail.org");
        let changed = original.change_to("j.test@mail.org".to_string()).unwrap();

        assert_eq!(original.to_string(), "e.test@mail.org");
        assert_eq!(changed.to_string(), "j.test@mail.org");
        assert!(changed.equals_raw("j.test@mail.org".to_string()).unwrap());
        assert!(!core::ptr::eq(&original, &changed));
        assert_ne!(original, changed);
    }

    #[test]
    fn change_to_validates_new_significance() {
        let original = label("a");
        let err = original.change_to(String::new()).unwrap_err();
        assert!(err.is_invalid_significance());
        assert_eq!(original.to_string(), "a");
    }

    #[test]
    fn compare_to_accepts_instance_or_raw() {
        let one_metre = Value::<Length>::construct(length(1, "m")).unwrap();
        let hundred_cm = Value::<Length>::construct(length(100, "cm")).unwrap();

        assert_eq!(one_metre.compare_to(Operand::from(&hundred_cm)).unwrap(), Ordering::Equal);
        assert_eq!(one_metre.compare_to_raw(length(999, "mm")).unwrap(), Ordering::Greater);
        assert_eq!(one_metre.compare_to_raw(length(101, "cm")).unwrap(), Ordering::Less);
        assert_eq!(one_metre, hundred_cm);
    }

    #[test]
    fn compare_to_raw_propagates_validation_failure() {
        let one_metre = Value::<Length>::construct(length(1, "m")).unwrap();
        let err = one_metre.compare_to_raw(length(1, "furlong")).unwrap_err();
        assert_eq!(err, ValueError::invalid("length", "unknown unit 'furlong'"));
    }

    #[test]
    fn render_override_uses_derived_attribute() {
        let value = Value::<Length>::construct(length(3, "cm")).unwrap();
        assert_eq!(value.to_string(), "30mm");
    }

    #[test]
    fn ord_follows_compare_same() {
        let mut values: Vec<Value<Length>> = [length(2, "m"), length(5, "mm"), length(3, "cm")]
            .into_iter()
            .map(|s| Value::construct(s).unwrap())
            .collect();
        values.sort();

        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["5mm", "30mm", "2000mm"]);
    }

    #[test]
    fn values_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value<Label>>();
        assert_send_sync::<Value<Length>>();
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn unit() -> impl Strategy<Value = String> {
            prop_oneof![Just("mm"), Just("cm"), Just("m")].prop_map(str::to_string)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a value compares equal to its own significance and to itself.
            #[test]
            fn comparison_is_reflexive(amount in -1_000_000i64..1_000_000i64, unit in unit()) {
                let value = Value::<Length>::construct((amount, unit.clone())).unwrap();
                prop_assert_eq!(value.compare_to_raw((amount, unit)).unwrap(), Ordering::Equal);
                prop_assert_eq!(value.compare_to_value(&value), Ordering::Equal);
            }

            /// Property: comparing to a raw value equals comparing to its constructed instance.
            #[test]
            fn raw_and_instance_comparison_agree(
                a in -1_000_000i64..1_000_000i64,
                a_unit in unit(),
                b in -1_000_000i64..1_000_000i64,
                b_unit in unit(),
            ) {
                let left = Value::<Length>::construct((a, a_unit)).unwrap();
                let right = Value::<Length>::construct((b, b_unit.clone())).unwrap();

                prop_assert_eq!(
                    left.compare_to_raw((b, b_unit)).unwrap(),
                    left.compare_to(Operand::Instance(&right)).unwrap()
                );
            }

            /// Property: change_to never alters the original value.
            #[test]
            fn change_to_keeps_original(first in "[a-z]{1,16}", second in "[a-z]{1,16}") {
                let original = Value::<Label>::construct(first.clone()).unwrap();
                let changed = original.change_to(second.clone()).unwrap();

                prop_assert_eq!(original.to_string(), first.clone());
                prop_assert_eq!(changed.to_string(), second.clone());
                prop_assert!(original.equals_raw(first).unwrap());
                prop_assert!(changed.equals_raw(second).unwrap());
            }
        }
    }
}
