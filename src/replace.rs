//! Typed single-field replacement over any record.
//!
//! A field is named by a zero-sized marker type (see [`crate::fields`]). The
//! marker implements [`Field`] once per record that has such a field, and the
//! associated `Value` ties the replacement value to that field's declared
//! type, so a wrong field name or value type does not compile.
//!
//! # Laws
//!
//! 1. **GetPut**: `replace(&r, f, view(&r, f).clone()) == r`
//! 2. **PutGet**: `view(&replace(&r, f, v), f) == &v`
//! 3. **PutPut**: `replace(&replace(&r, f, v1), f, v2) == replace(&r, f, v2)`

/// Access to one field of the record `R`.
pub trait Field<R> {
    type Value;

    fn get(record: &R) -> &Self::Value;
    fn get_mut(record: &mut R) -> &mut Self::Value;
}

/// Returns a shallow copy of `record` with the field `F` set to `value`.
/// The input is left untouched.
pub fn replace<R, F>(record: &R, _field: F, value: F::Value) -> R
where
    R: Clone,
    F: Field<R>,
{
    let mut next = record.clone();
    *F::get_mut(&mut next) = value;
    next
}

/// Reads the field `F` of `record`.
pub fn view<R, F: Field<R>>(record: &R, _field: F) -> &F::Value {
    F::get(record)
}

/// Implements [`Field`] for a record, one marker per field:
///
/// ```ignore
/// record_fields!(Drink {
///     fields::Carbonated => carbonated: bool,
/// });
/// ```
///
/// Must be invoked in the module that defines the record.
macro_rules! record_fields {
    ($record:ty { $( $marker:path => $field:ident: $value:ty ),+ $(,)? }) => {
        $(
            impl $crate::replace::Field<$record> for $marker {
                type Value = $value;

                fn get(record: &$record) -> &$value {
                    &record.$field
                }
                fn get_mut(record: &mut $record) -> &mut $value {
                    &mut record.$field
                }
            }
        )+
    };
}

pub(crate) use record_fields;
