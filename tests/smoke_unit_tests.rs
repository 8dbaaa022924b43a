//! Smoke Screen Unit tests for sandwich bar components
//!
//! These tests span the public API and check behaviour in isolation from the
//! end-to-end scenarios. They mostly cover the happy path.

use chrono::{Datelike, Utc};
use sandwich_bar::{
    catalog::{BreadType, Filling, SubLength, Topping},
    config::BarConfig,
    error::ValidationError,
    expiry::{find_expired, find_expired_at},
    fields,
    menu::{Club, Drink, Sub, convert_to_ham},
    replace::{replace, view},
    sandwich::{PartialSandwich, Sandwich, TimeStamp},
    state::ProcessingState,
    workflow::SandwichBar,
};

fn cheese_sandwich() -> Sandwich {
    Sandwich::new(
        BreadType::TigerBread,
        Filling::Cheese,
        vec![Topping::Lettuce],
        ProcessingState::AddingFilling,
    )
}

// CATALOG TESTS
mod catalog_tests {
    use super::*;

    /// Every closed set lists its members in menu order
    #[test]
    fn closed_sets_list_all_members() {
        assert_eq!(
            BreadType::ALL,
            &[BreadType::TigerBread, BreadType::Italian, BreadType::Wholemeal]
        );
        assert_eq!(Filling::ALL.len(), 3);
        assert_eq!(Topping::ALL.len(), 3);
        assert_eq!(SubLength::ALL, &[SubLength::Six, SubLength::Twelve]);
    }

    /// Labels are the readable menu names
    #[test]
    fn labels_are_menu_names() {
        assert_eq!(BreadType::TigerBread.to_string(), "Tiger bread");
        assert_eq!(Topping::Olives.label(), "Olives");
        assert_eq!(ProcessingState::AddingFilling.label(), "ADDING_FILLING");
    }

    /// Anything outside the set is refused with the field it was meant for
    #[test]
    fn rejects_values_outside_the_set() {
        let err = "Grass".parse::<Topping>().unwrap_err();
        assert_eq!(err.to_string(), "'Grass' is not a valid value for toppings");

        assert!("Sourdough".parse::<BreadType>().is_err());
        assert!("Spinach".parse::<Filling>().is_err());
        assert!("9".parse::<SubLength>().is_err());
    }
}

// SANDWICH MODULE TESTS
mod sandwich_tests {
    use super::*;

    /// Test that TimeStamp::new() creates a timestamp close to current time
    #[test]
    fn timestamp_new_creates_current_time() {
        let ts = TimeStamp::new();
        let now = Utc::now();

        let diff = (now - ts.to_datetime_utc()).num_seconds().abs();
        assert!(diff < 1);
    }

    #[test]
    fn timestamp_new_with_creates_specific_time() {
        let ts = TimeStamp::new_with(2024, 6, 15, 10, 30, 0).unwrap();
        let dt = ts.to_datetime_utc();

        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 15);
    }

    /// Builder-style setters fill the optional fields
    #[test]
    fn optional_fields_via_builder() {
        let expiry = TimeStamp::new_with(2030, 1, 1, 0, 0, 0).unwrap();
        let sandwich = cheese_sandwich()
            .with_description("Tasty sandwich")
            .with_expiry_date(expiry.clone());

        assert_eq!(sandwich.description(), Some("Tasty sandwich"));
        assert_eq!(sandwich.expiry_date(), Some(&expiry));
    }

    /// A partial sandwich can't complete without its filling
    #[test]
    fn partial_without_filling_is_incomplete() {
        let partial = PartialSandwich::new(BreadType::Italian);
        assert_eq!(
            partial.complete().unwrap_err(),
            ValidationError::MissingField("filling")
        );
    }

    /// Finalising a finished, dated sandwich yields a stable hash
    #[test]
    fn finalise_is_deterministic() {
        let sandwich = Sandwich::new(
            BreadType::TigerBread,
            Filling::Cheese,
            vec![Topping::Lettuce],
            ProcessingState::Complete,
        )
        .with_expiry_date(TimeStamp::new_with(2030, 1, 1, 0, 0, 0).unwrap());

        let (first, _) = sandwich.finalise().unwrap();
        let (second, _) = sandwich.clone().finalise().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn finalise_rejects_unfinished_sandwich() {
        let sandwich =
            cheese_sandwich().with_expiry_date(TimeStamp::new_with(2030, 1, 1, 0, 0, 0).unwrap());

        let err = sandwich.finalise().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::NotComplete(Some(
                ProcessingState::AddingFilling
            )))
        );
    }
}

// REPLACE MODULE TESTS
mod replace_tests {
    use super::*;

    /// Replacing leaves the input untouched
    #[test]
    fn replace_does_not_mutate_input() {
        let original = cheese_sandwich();
        let snapshot = original.clone();

        let _ = replace(&original, fields::Filling, Filling::Tuna);
        let _ = replace(&original, fields::Toppings, vec![]);

        assert_eq!(original, snapshot);
    }

    /// Replacing a field with its current value changes nothing
    #[test]
    fn replace_with_current_value_is_identity() {
        let original = cheese_sandwich();
        let same = replace(&original, fields::BreadType, original.bread_type());

        assert_eq!(same, original);
    }

    /// The same marker works on any record with that field
    #[test]
    fn markers_are_shared_between_records() {
        let drink = Drink::new(true);
        let dated = replace(
            &drink,
            fields::ExpiryDate,
            TimeStamp::new_with(2020, 1, 1, 0, 0, 0),
        );

        assert!(view(&dated, fields::ExpiryDate).is_some());
        assert!(drink.expiry_date().is_none());
        assert!(view(&cheese_sandwich(), fields::ExpiryDate).is_none());
    }
}

// MENU + EXPIRY TESTS
mod menu_tests {
    use super::*;

    #[test]
    fn convert_to_ham_only_changes_filling() {
        let cheese = cheese_sandwich().with_description("Tasty sandwich");
        let ham = convert_to_ham(&cheese).into_inner();

        assert_eq!(replace(&ham, fields::Filling, Filling::Cheese), cheese);
    }

    /// The expiry filter accepts any expireable item
    #[test]
    fn find_expired_works_across_item_types() {
        let past = TimeStamp::new_with(2000, 1, 1, 0, 0, 0).unwrap();
        let future = TimeStamp::new_with(2999, 1, 1, 0, 0, 0).unwrap();

        let subs = vec![
            Sub::new(cheese_sandwich().with_expiry_date(future.clone()), SubLength::Six),
            Sub::new(cheese_sandwich().with_expiry_date(past.clone()), SubLength::Twelve),
        ];
        let expired = find_expired(&subs);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].length, SubLength::Twelve);

        let clubs = vec![Club::new(cheese_sandwich().with_expiry_date(past), 3)];
        assert_eq!(find_expired(&clubs).len(), 1);

        let drinks = vec![Drink::new(false).with_expiry_date(future)];
        assert!(find_expired(&drinks).is_empty());
    }

    #[test]
    fn find_expired_at_uses_given_instant() {
        let expiry = TimeStamp::new_with(2024, 6, 15, 0, 0, 0).unwrap();
        let drinks = vec![Drink::new(true).with_expiry_date(expiry.clone())];

        let before = TimeStamp::new_with(2024, 6, 14, 0, 0, 0).unwrap();
        let after = TimeStamp::new_with(2024, 6, 16, 0, 0, 0).unwrap();

        assert!(find_expired_at(&drinks, before.to_datetime_utc()).is_empty());
        assert!(find_expired_at(&drinks, expiry.to_datetime_utc()).is_empty());
        assert_eq!(find_expired_at(&drinks, after.to_datetime_utc()).len(), 1);
    }
}

// WORKFLOW TESTS
mod workflow_tests {
    use super::*;

    #[test]
    fn default_config_names_the_bar() {
        assert_eq!(BarConfig::default().name, "Rubik Sandwich bar");
    }

    #[test]
    fn created_sandwich_leaves_description_and_expiry_empty() {
        let mut bar = SandwichBar::new(BarConfig::default(), Vec::<String>::new());
        let sandwich = bar
            .create_sandwich(BreadType::Italian, Filling::Cheese, vec![Topping::Tomato], false)
            .unwrap();

        assert_eq!(sandwich.description(), None);
        assert_eq!(sandwich.expiry_date(), None);
    }

    /// Replacing fields on a finished sandwich never takes it out of COMPLETE
    #[test]
    fn finished_sandwich_stays_complete() {
        let mut bar = SandwichBar::new(BarConfig::default(), Vec::<String>::new());
        let done = bar
            .create_sandwich(BreadType::Italian, Filling::Ham, vec![Topping::Olives], true)
            .unwrap();

        let changed = replace(&done, fields::Filling, Filling::Tuna);
        let changed = replace(&changed, fields::BreadType, BreadType::Wholemeal);
        let changed = replace(&changed, fields::Toppings, vec![]);
        let changed = replace(&changed, fields::Description, Some("changed".into()));

        assert_eq!(done.state(), ProcessingState::Complete);
        assert_eq!(changed.state(), ProcessingState::Complete);
    }

    /// The tracing-backed bar works without a subscriber installed
    #[test]
    fn default_bar_runs_with_tracing_notifier() {
        let mut bar: SandwichBar = SandwichBar::default();
        let sandwich = bar
            .create_sandwich(BreadType::Wholemeal, Filling::Ham, vec![], true)
            .unwrap();

        assert_eq!(sandwich.state(), ProcessingState::Complete);
    }
}
