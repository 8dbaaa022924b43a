//! Making a sandwich from a customer's order.
use super::catalog::{BreadType, Filling, Topping, parse_toppings};
use super::config::BarConfig;
use super::error::ValidationError;
use super::fields;
use super::notify::{Notifier, TracingNotifier};
use super::replace::replace;
use super::sandwich::{PartialSandwich, Sandwich};
use super::state::ProcessingState;
use tracing::debug;

pub struct SandwichBar<N: Notifier = TracingNotifier> {
    config: BarConfig,
    notifier: N,
}

impl Default for SandwichBar<TracingNotifier> {
    fn default() -> Self {
        Self::new(BarConfig::default(), TracingNotifier)
    }
}

impl<N: Notifier> SandwichBar<N> {
    pub fn new(config: BarConfig, notifier: N) -> Self {
        Self { config, notifier }
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    /// Makes a sandwich, telling the customer about each step.
    ///
    /// The sandwich goes through `ADDING_FILLING`, optionally `TOASTING`,
    /// `ADDING_TOPPINGS` and finally `COMPLETE`. Toppings keep the order they
    /// were given in. Description and expiry date are left for the caller.
    pub fn create_sandwich(
        &mut self,
        bread: BreadType,
        filling: Filling,
        toppings: Vec<Topping>,
        wants_toasted: bool,
    ) -> Result<Sandwich, ValidationError> {
        let sandwich = PartialSandwich::new(bread);
        debug!(%bread, %filling, toppings = toppings.len(), wants_toasted, "starting sandwich");

        self.notifier
            .notify(&format!("Welcome to the {}", self.config.name));

        self.notifier
            .notify(&format!("Adding your filling: {filling}"));
        let sandwich = sandwich.advance(ProcessingState::AddingFilling)?;
        let sandwich = replace(&sandwich, fields::Filling, Some(filling));

        let sandwich = if wants_toasted {
            self.notifier.notify("Toasting your sandwich");
            let toasted = sandwich.advance(ProcessingState::Toasting)?;
            self.notifier.notify("Toasting done!");
            toasted
        } else {
            sandwich
        };

        self.notifier
            .notify(&format!("Adding your toppings: {}", join_labels(&toppings)));
        let sandwich = replace(&sandwich, fields::Toppings, Some(toppings));
        let sandwich = sandwich.advance(ProcessingState::AddingToppings)?;

        self.notifier.notify("Done, enjoy!");
        let sandwich = sandwich.advance(ProcessingState::Complete)?.complete()?;

        debug!(state = %sandwich.state(), "sandwich complete");
        Ok(sandwich)
    }

    /// Same as [`SandwichBar::create_sandwich`] but from menu labels.
    /// Every label is checked before the customer hears anything.
    pub fn create_from_labels<S: AsRef<str>>(
        &mut self,
        bread: &str,
        filling: &str,
        toppings: &[S],
        wants_toasted: bool,
    ) -> Result<Sandwich, ValidationError> {
        let bread: BreadType = bread.parse()?;
        let filling: Filling = filling.parse()?;
        let toppings = parse_toppings(toppings)?;

        self.create_sandwich(bread, filling, toppings, wants_toasted)
    }
}

fn join_labels(toppings: &[Topping]) -> String {
    toppings
        .iter()
        .map(Topping::label)
        .collect::<Vec<_>>()
        .join(", ")
}
