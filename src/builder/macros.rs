//! Macros for declaring state and input enums.

/// Generate a `State` implementation for a simple enum.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq` and `Debug`, and each
/// variant's name is its identifier.
///
/// # Example
///
/// ```
/// use moore::core::State;
/// use moore::state_enum;
///
/// state_enum! {
///     pub enum Heater {
///         Idle,
///         Heating,
///         Fault,
///     }
/// }
///
/// assert_eq!(Heater::Heating.name(), "Heating");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Input` implementation for a simple enum.
///
/// The `none:` clause names the variant that means "no input".
///
/// # Example
///
/// ```
/// use moore::core::Input;
/// use moore::input_enum;
///
/// input_enum! {
///     pub enum ButtonEvent {
///         Idle,
///         Pressed,
///         Released,
///     }
///     none: Idle
/// }
///
/// assert!(ButtonEvent::Idle.is_none());
/// assert!(!ButtonEvent::Pressed.is_none());
/// ```
#[macro_export]
macro_rules! input_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        none: $none:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Input for $name {
            const NONE: Self = Self::$none;
        }
    };
}
