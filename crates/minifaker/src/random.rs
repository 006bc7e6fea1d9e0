//! Random selection primitives.
//!
//! Every generator in the crate is built from these functions. They take the
//! random source as an argument, so the same seed always produces the same
//! sequence of values.

use std::collections::BTreeMap;

use rand::Rng;
use serde_json::Value;

use crate::error::SamplingError;

/// Range and rounding options for [`number`].
///
/// Defaults to the integer range `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberOptions {
    /// Lower bound of the range.
    pub min: f64,
    /// Upper bound of the range.
    pub max: f64,
    /// Return the raw fractional value instead of rounding.
    pub float: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            float: false,
        }
    }
}

impl NumberOptions {
    /// Integer range `[0, max]`.
    #[must_use]
    pub const fn up_to(max: f64) -> Self {
        Self {
            min: 0.0,
            max,
            float: false,
        }
    }

    /// Integer range `[min, max]`.
    #[must_use]
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            float: false,
        }
    }

    /// Keeps the fractional part of the drawn value.
    #[must_use]
    pub const fn fractional(mut self) -> Self {
        self.float = true;
        self
    }
}

/// A key/value pair picked by [`object_element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectEntry<'a> {
    /// The chosen key.
    pub key: &'a str,
    /// The value stored under the key.
    pub value: &'a Value,
}

/// Draws a number uniformly from `[min, max]`.
///
/// Unless `float` is set, the value is rounded half up to an integer. A range
/// with `min > max` is accepted and draws from `[max, min]`.
///
/// # Example
///
/// ```
/// use minifaker::random::{NumberOptions, number};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let value = number(&mut rng, NumberOptions::between(10.0, 20.0));
///
/// assert!((10.0..=20.0).contains(&value));
/// assert_eq!(value.fract(), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "uniform draws are scaled into the caller's range"
)]
pub fn number<R: Rng>(rng: &mut R, options: NumberOptions) -> f64 {
    let unit: f64 = rng.random();
    let value = options.min + unit * (options.max - options.min);
    if options.float {
        value
    } else {
        (value + 0.5).floor()
    }
}

/// Draws `true` or `false` with equal probability.
pub fn boolean<R: Rng>(rng: &mut R) -> bool {
    number(rng, NumberOptions::default()) > 0.0
}

/// Picks one element of `items` uniformly at random.
///
/// # Errors
///
/// Returns [`SamplingError::EmptyInput`] if `items` is empty.
pub fn array_element<'a, T, R: Rng>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, SamplingError> {
    pick_nth(rng, items.len(), items.iter())
}

/// Builds a vector of `count` elements where element `i` is `f(i)`.
///
/// `f` is called once per index, in increasing order.
///
/// # Example
///
/// ```
/// use minifaker::random::array;
///
/// assert_eq!(array(5, |i| i), [0, 1, 2, 3, 4]);
/// ```
pub fn array<T, F>(count: usize, f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..count).map(f).collect()
}

/// Picks one key of a JSON object uniformly at random.
///
/// # Errors
///
/// Returns [`SamplingError::NotAnObject`] if `value` is not a JSON object
/// (arrays included) and [`SamplingError::EmptyInput`] if the object has no
/// keys.
///
/// # Example
///
/// ```
/// use minifaker::random::object_element;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use serde_json::json;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let object = json!({"a": 1, "b": 2});
///
/// let entry = object_element(&mut rng, &object).expect("object has keys");
/// assert!(entry.key == "a" || entry.key == "b");
/// assert!(object_element(&mut rng, &json!([])).is_err());
/// ```
pub fn object_element<'a, R: Rng>(
    rng: &mut R,
    value: &'a Value,
) -> Result<ObjectEntry<'a>, SamplingError> {
    let Value::Object(map) = value else {
        return Err(SamplingError::NotAnObject {
            found: json_kind(value),
        });
    };

    let (key, entry_value) = pick_nth(rng, map.len(), map.iter())?;
    Ok(ObjectEntry {
        key,
        value: entry_value,
    })
}

/// Picks one entry of a map uniformly at random.
///
/// # Errors
///
/// Returns [`SamplingError::EmptyInput`] if `map` is empty.
pub fn map_element<'a, K, V, R: Rng>(
    rng: &mut R,
    map: &'a BTreeMap<K, V>,
) -> Result<(&'a K, &'a V), SamplingError> {
    pick_nth(rng, map.len(), map.iter())
}

fn pick_nth<I, R>(rng: &mut R, len: usize, mut items: I) -> Result<I::Item, SamplingError>
where
    I: Iterator,
    R: Rng,
{
    if len == 0 {
        return Err(SamplingError::EmptyInput);
    }
    items
        .nth(rng.random_range(0..len))
        .ok_or(SamplingError::EmptyInput)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
