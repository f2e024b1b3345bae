//! # Membership: Enumerated Literals

use schemata_core::{render, Rejection, Schema, Value};

/// Accepts a value equal to one of `allowed`, returning it unchanged.
///
/// Equality is value equality in the data model: `5` and `5.0` are
/// distinct, and mappings compare without regard to entry order.
pub fn enum_of<I, V>(allowed: I) -> Schema
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
    let listing = allowed.iter().map(render).collect::<Vec<_>>().join(", ");
    let name = format!("enum({listing})");
    Schema::predicate(name, move |value: &Value| {
        if allowed.contains(value) {
            Ok(value.clone())
        } else {
            Err(Rejection::refused(
                "NotAllowed",
                format!("{} is not one of {listing}", render(value)),
            ))
        }
    })
}
