//! Finding items that have gone past their expiry date.
use super::menu::{Club, Drink, HamSandwich, Sub};
use super::sandwich::Sandwich;
use chrono::{DateTime, Utc};

/// Anything that can carry an expiry date.
pub trait Expireable {
    /// `None` means the item has no expiry date and never expires.
    fn expiry_date(&self) -> Option<DateTime<Utc>>;
}

impl Expireable for Sandwich {
    fn expiry_date(&self) -> Option<DateTime<Utc>> {
        Sandwich::expiry_date(self).map(|ts| ts.to_datetime_utc())
    }
}

impl Expireable for Club {
    fn expiry_date(&self) -> Option<DateTime<Utc>> {
        Expireable::expiry_date(&self.sandwich)
    }
}

impl Expireable for Sub {
    fn expiry_date(&self) -> Option<DateTime<Utc>> {
        Expireable::expiry_date(&self.sandwich)
    }
}

impl Expireable for HamSandwich {
    fn expiry_date(&self) -> Option<DateTime<Utc>> {
        Expireable::expiry_date(self.as_sandwich())
    }
}

impl Expireable for Drink {
    fn expiry_date(&self) -> Option<DateTime<Utc>> {
        Drink::expiry_date(self).map(|ts| ts.to_datetime_utc())
    }
}

/// Strictly before `now`; the expiry instant itself is still fine.
pub fn is_expired_at<T: Expireable + ?Sized>(item: &T, now: DateTime<Utc>) -> bool {
    item.expiry_date().is_some_and(|expiry| expiry < now)
}

/// Items expired as of the current time, in input order.
pub fn find_expired<T: Expireable>(items: &[T]) -> Vec<&T> {
    find_expired_at(items, Utc::now())
}

pub fn find_expired_at<T: Expireable>(items: &[T], now: DateTime<Utc>) -> Vec<&T> {
    items.iter().filter(|item| is_expired_at(*item, now)).collect()
}
