//! Field markers used with [`crate::replace::replace`].
//!
//! One marker may name the same field on several records, e.g. [`Filling`]
//! addresses both `PartialSandwich::filling` and `Sandwich::filling`.
//! Processing state has no marker; it only moves through
//! `PartialSandwich::advance`.

#[derive(Debug, Clone, Copy, Default)]
pub struct BreadType;

#[derive(Debug, Clone, Copy, Default)]
pub struct Filling;

#[derive(Debug, Clone, Copy, Default)]
pub struct Toppings;

#[derive(Debug, Clone, Copy, Default)]
pub struct Description;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpiryDate;

#[derive(Debug, Clone, Copy, Default)]
pub struct Carbonated;

#[derive(Debug, Clone, Copy, Default)]
pub struct Layers;

#[derive(Debug, Clone, Copy, Default)]
pub struct Length;
