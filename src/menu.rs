//! Other items on the menu, built around [`Sandwich`].
use super::catalog::{Filling, SubLength};
use super::fields;
use super::replace::{record_fields, replace};
use super::sandwich::{Sandwich, TimeStamp};
use chrono::Utc;

/// A stacked sandwich with a number of layers.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Club {
    #[n(0)]
    pub sandwich: Sandwich,
    #[n(1)]
    pub layers: u32,
}

/// A sandwich on a long roll.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Sub {
    #[n(0)]
    pub sandwich: Sandwich,
    #[n(1)]
    pub length: SubLength,
}

record_fields!(Club {
    fields::Layers => layers: u32,
});

record_fields!(Sub {
    fields::Length => length: SubLength,
});

impl Club {
    pub fn new(sandwich: Sandwich, layers: u32) -> Self {
        Self { sandwich, layers }
    }
}

impl Sub {
    pub fn new(sandwich: Sandwich, length: SubLength) -> Self {
        Self { sandwich, length }
    }
}

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    #[n(0)]
    carbonated: bool,
    #[n(1)]
    expiry_date: Option<TimeStamp<Utc>>,
}

record_fields!(Drink {
    fields::Carbonated => carbonated: bool,
    fields::ExpiryDate => expiry_date: Option<TimeStamp<Utc>>,
});

impl Drink {
    pub fn new(carbonated: bool) -> Self {
        Self {
            carbonated,
            expiry_date: None,
        }
    }
    pub fn with_expiry_date(mut self, date: TimeStamp<Utc>) -> Self {
        self.expiry_date = Some(date);
        self
    }
    pub fn carbonated(&self) -> bool {
        self.carbonated
    }
    pub fn expiry_date(&self) -> Option<&TimeStamp<Utc>> {
        self.expiry_date.as_ref()
    }
}

/// A sandwich whose filling is always [`Filling::Ham`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HamSandwich(Sandwich);

impl HamSandwich {
    pub fn as_sandwich(&self) -> &Sandwich {
        &self.0
    }
    pub fn into_inner(self) -> Sandwich {
        self.0
    }
}

impl TryFrom<Sandwich> for HamSandwich {
    type Error = Sandwich;

    /// Hands the sandwich back unchanged if it isn't ham.
    fn try_from(sandwich: Sandwich) -> Result<Self, Self::Error> {
        if sandwich.filling() == Filling::Ham {
            Ok(HamSandwich(sandwich))
        } else {
            Err(sandwich)
        }
    }
}

/// Swaps the filling for ham, keeping everything else.
pub fn convert_to_ham(sandwich: &Sandwich) -> HamSandwich {
    HamSandwich(replace(sandwich, fields::Filling, Filling::Ham))
}
