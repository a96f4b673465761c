//! Macros for ergonomic graph construction.

/// Generate a `State` implementation for a simple enum.
///
/// Each variant is named by its identifier unless a label is given with
/// `=> "label"`.
///
/// # Example
///
/// ```
/// use waypoints::state_enum;
/// use waypoints::core::State;
///
/// state_enum! {
///     pub enum Gear {
///         Parked => "parked",
///         Idling => "idling",
///         FirstGear,
///     }
/// }
///
/// assert_eq!(Gear::Parked.name(), "parked");
/// assert_eq!(Gear::FirstGear.name(), "FirstGear");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };

    (@label $variant:ident) => {
        stringify!($variant)
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                }
            }
        }
    };
}
