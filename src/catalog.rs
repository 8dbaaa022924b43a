//! Closed value sets for everything the bar can put in a sandwich.
//!
//! Each set is an enum whose members carry the human-readable label used on
//! the menu. Labels are what gets displayed, parsed and written to CBOR, so a
//! serialized order stays readable and an unknown label is rejected where it
//! enters the crate.

/// Declares a closed value set: the enum, its labels, `Display`, `FromStr`
/// and a label-based CBOR encoding.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];
            /// Field name reported when parsing fails.
            pub const FIELD: &'static str = $field;

            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    other => Err($crate::error::ValidationError::InvalidValue {
                        field: $field,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl<C> minicbor::Encode<C> for $name {
            fn encode<W: minicbor::encode::Write>(
                &self,
                e: &mut minicbor::Encoder<W>,
                _: &mut C,
            ) -> Result<(), minicbor::encode::Error<W::Error>> {
                e.str(self.label())?.ok()
            }
        }

        impl<'b, C> minicbor::Decode<'b, C> for $name {
            fn decode(
                d: &mut minicbor::Decoder<'b>,
                _: &mut C,
            ) -> Result<Self, minicbor::decode::Error> {
                d.str()?.parse::<Self>().map_err(|_| {
                    minicbor::decode::Error::message(concat!("unknown label for ", $field))
                })
            }
        }
    };
}

pub(crate) use closed_set;

closed_set! {
    pub enum BreadType: "breadType" {
        TigerBread => "Tiger bread",
        Italian => "Italian",
        Wholemeal => "Wholemeal",
    }
}

closed_set! {
    pub enum Filling: "filling" {
        Cheese => "Cheese",
        Tuna => "Tuna",
        Ham => "Ham",
    }
}

closed_set! {
    pub enum Topping: "toppings" {
        Tomato => "Tomato",
        Lettuce => "Lettuce",
        Olives => "Olives",
    }
}

closed_set! {
    /// Length of a sub roll, in inches.
    pub enum SubLength: "length" {
        Six => "6",
        Twelve => "12",
    }
}

impl SubLength {
    pub fn inches(&self) -> u32 {
        match self {
            SubLength::Six => 6,
            SubLength::Twelve => 12,
        }
    }
}

/// Parses a list of topping labels, keeping the caller's order.
pub fn parse_toppings<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Topping>, crate::error::ValidationError> {
    labels.iter().map(|label| label.as_ref().parse()).collect()
}
