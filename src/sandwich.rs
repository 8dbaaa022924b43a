//! The sandwich record, its partial form and timestamps
use super::catalog::{BreadType, Filling, Topping};
use super::error::ValidationError;
use super::fields;
use super::replace::record_fields;
use super::state::ProcessingState;
use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }
    /// `None` when the components do not name a single valid instant.
    pub fn new_with(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for TimeStamp<Utc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeZone> From<DateTime<T>> for TimeStamp<T> {
    fn from(value: DateTime<T>) -> Self {
        TimeStamp(value)
    }
}

impl<C> minicbor::Encode<C> for TimeStamp<Utc> {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        if let Some(nsec) = self.0.timestamp_nanos_opt() {
            return e.i64(nsec)?.ok();
        }

        Err(minicbor::encode::Error::message(
            "failed to encode timestamp. timestamp_nanos_opt returned None",
        ))
    }
}

impl<'b, C> minicbor::Decode<'b, C> for TimeStamp<Utc> {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let nsecs = d.i64()?;

        Ok(TimeStamp(DateTime::from_timestamp_nanos(nsecs)))
    }
}

/// A sandwich still being made. Every field is optional until
/// [`PartialSandwich::complete`] checks the required ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialSandwich {
    bread_type: Option<BreadType>,
    filling: Option<Filling>,
    toppings: Option<Vec<Topping>>,
    description: Option<String>,
    expiry_date: Option<TimeStamp<Utc>>,
    state: Option<ProcessingState>,
}

record_fields!(PartialSandwich {
    fields::BreadType => bread_type: Option<BreadType>,
    fields::Filling => filling: Option<Filling>,
    fields::Toppings => toppings: Option<Vec<Topping>>,
    fields::Description => description: Option<String>,
    fields::ExpiryDate => expiry_date: Option<TimeStamp<Utc>>,
});

impl PartialSandwich {
    /// Every sandwich starts from its bread.
    pub fn new(bread_type: BreadType) -> Self {
        Self {
            bread_type: Some(bread_type),
            ..Self::default()
        }
    }
    pub fn bread_type(&self) -> Option<BreadType> {
        self.bread_type
    }
    pub fn filling(&self) -> Option<Filling> {
        self.filling
    }
    pub fn toppings(&self) -> Option<&[Topping]> {
        self.toppings.as_deref()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn expiry_date(&self) -> Option<&TimeStamp<Utc>> {
        self.expiry_date.as_ref()
    }
    pub fn state(&self) -> Option<ProcessingState> {
        self.state
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
    pub fn with_expiry_date(mut self, date: TimeStamp<Utc>) -> Self {
        self.expiry_date = Some(date);
        self
    }
    /// Returns a copy moved on to `next`. Going backwards, or anywhere from
    /// `Complete`, is rejected. This is the only way to change the state;
    /// there is no state marker for [`crate::replace::replace`].
    ///
    /// ```compile_fail
    /// use sandwich_bar::{catalog::BreadType, fields, replace::replace, sandwich::PartialSandwich};
    /// use sandwich_bar::state::ProcessingState;
    ///
    /// let partial = PartialSandwich::new(BreadType::Italian);
    /// let _ = replace(&partial, fields::State, Some(ProcessingState::Complete));
    /// ```
    pub fn advance(&self, next: ProcessingState) -> Result<Self, ValidationError> {
        if let Some(current) = self.state {
            if !current.can_advance_to(next) {
                return Err(ValidationError::StateRegression {
                    from: current,
                    to: next,
                });
            }
        }
        let mut next_sandwich = self.clone();
        next_sandwich.state = Some(next);
        Ok(next_sandwich)
    }
    // Checks the required fields and that the state reached COMPLETE
    pub fn complete(&self) -> Result<Sandwich, ValidationError> {
        let bread_type = self
            .bread_type
            .ok_or(ValidationError::MissingField("breadType"))?;
        let filling = self.filling.ok_or(ValidationError::MissingField("filling"))?;
        let toppings = self
            .toppings
            .clone()
            .ok_or(ValidationError::MissingField("toppings"))?;
        let state = match self.state {
            Some(state) if state.is_terminal() => state,
            other => return Err(ValidationError::NotComplete(other)),
        };

        Ok(Sandwich {
            bread_type,
            filling,
            toppings,
            description: self.description.clone(),
            expiry_date: self.expiry_date.clone(),
            state,
        })
    }
}

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Sandwich {
    #[n(0)]
    bread_type: BreadType,
    #[n(1)]
    filling: Filling,
    #[n(2)]
    toppings: Vec<Topping>, // in the order the customer asked for them
    #[n(3)]
    description: Option<String>,
    #[n(4)]
    expiry_date: Option<TimeStamp<Utc>>,
    #[n(5)]
    state: ProcessingState,
}

record_fields!(Sandwich {
    fields::BreadType => bread_type: BreadType,
    fields::Filling => filling: Filling,
    fields::Toppings => toppings: Vec<Topping>,
    fields::Description => description: Option<String>,
    fields::ExpiryDate => expiry_date: Option<TimeStamp<Utc>>,
});

impl Sandwich {
    pub fn new(
        bread_type: BreadType,
        filling: Filling,
        toppings: Vec<Topping>,
        state: ProcessingState,
    ) -> Self {
        Self {
            bread_type,
            filling,
            toppings,
            description: None,
            expiry_date: None,
            state,
        }
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
    pub fn with_expiry_date(mut self, date: TimeStamp<Utc>) -> Self {
        self.expiry_date = Some(date);
        self
    }
    pub fn bread_type(&self) -> BreadType {
        self.bread_type
    }
    pub fn filling(&self) -> Filling {
        self.filling
    }
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn expiry_date(&self) -> Option<&TimeStamp<Utc>> {
        self.expiry_date.as_ref()
    }
    pub fn state(&self) -> ProcessingState {
        self.state
    }
    /// Checks the sandwich is complete and carries an expiry date, then
    /// returns the sha256 of its CBOR encoding along with the encoding.
    pub fn finalise(&self) -> anyhow::Result<(String, Vec<u8>)> {
        if !self.state.is_terminal() {
            return Err(ValidationError::NotComplete(Some(self.state)).into());
        }
        if self.expiry_date.is_none() {
            return Err(ValidationError::MissingField("expiryDate").into());
        }

        let contents = minicbor::to_vec(self)?;
        let hash = sha256::digest(&contents);

        Ok((hash, contents))
    }
}
