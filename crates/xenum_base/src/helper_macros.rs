//! Declarative macros to declare and describe enums


/// Declare an enum together with its descriptor.
///
/// The enum gets `Clone, Copy, PartialEq, Eq` derived, any other attributes are forwarded as-is.
/// When an underlying type is given, it is used as the `#[repr]` of the enum, otherwise the underlying type is `isize`.
///
/// ```
/// xenum_base::x_enum! {
///     #[derive(Debug)]
///     pub enum Color: u8 {
///         Red,
///         Green = 5,
///         Blue,
///     }
/// }
///
/// assert_eq!(xenum_base::enum_values::<Color>(), &[0, 5, 6]);
/// ```
#[macro_export]
macro_rules! x_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident $(: $repr:ident)? {
            $(
                $(#[$var_attr:meta])*
                $variant:ident $(= $value:expr)?
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq)]
        $(#[repr($repr)])?
        $vis enum $name {
            $(
                $(#[$var_attr])*
                $variant $(= $value)?,
            )+
        }

        $crate::describe_enum!($name $(: $repr)? { $($variant),+ });
    };
}

/// Attach a descriptor to an enum that was declared elsewhere in the current crate.
///
/// The enumerators are listed in the order they should appear in the descriptor. If the enum lives in another module,
/// its module path can be given with `in`:
///
/// ```
/// mod palette {
///     pub mod rgb {
///         #[derive(Clone, Copy, PartialEq, Eq)]
///         #[repr(u8)]
///         pub enum Color { Red, Green, Blue }
///     }
/// }
///
/// xenum_base::describe_enum!(Color in palette::rgb: u8 { Red, Green, Blue });
///
/// assert_eq!(xenum_base::enum_values::<palette::rgb::Color>(), &[0, 1, 2]);
/// ```
///
/// Listing a subset of the enumerators, or the same enumerator twice, is allowed:
/// lookups use the first match and [`to_index`](crate::to_index) returns the size for unlisted enumerators.
///
/// Every listed enumerator has to fit in the underlying type, otherwise the descriptor fails to compile:
///
/// ```compile_fail
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// #[repr(u16)]
/// enum Big { A = 300, B = 44 }
///
/// // 300 doesn't fit in a `u8`
/// xenum_base::describe_enum!(Big: u8 { A, B });
/// ```
#[macro_export]
macro_rules! describe_enum {
    (@impl $name:ident, $ty:ty, $repr:ty, $($variant:ident),+) => {
        const _: () = {
            $(
                assert!(
                    (<$ty>::$variant as $repr) as i128 == <$ty>::$variant as i128,
                    "enumerator value doesn't fit in the underlying type of the descriptor"
                );
            )+
        };

        impl $crate::EnumTraitsT for $ty {
            type Underlying = $repr;

            const DESCRIPTOR: $crate::EnumDescriptor<Self, $repr> = $crate::EnumDescriptor::new(
                stringify!($name),
                &[$(Self::$variant),+],
                &[$(stringify!($variant)),+],
                &[$(Self::$variant as $repr),+],
            );

            #[inline]
            fn to_underlying(self) -> $repr {
                self as $repr
            }
        }
    };
    ($name:ident $(in $($module:ident)::+)? : $repr:ty { $($variant:ident),+ $(,)? }) => {
        $crate::describe_enum!(@impl $name, $($($module::)+)? $name, $repr, $($variant),+);
    };
    ($name:ident $(in $($module:ident)::+)? { $($variant:ident),+ $(,)? }) => {
        $crate::describe_enum!(@impl $name, $($($module::)+)? $name, isize, $($variant),+);
    };
}

#[cfg(test)]
mod tests {
    use crate::*;

    mod palette {
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        #[repr(u16)]
        pub enum Tone {
            Dark = 100,
            Mid = 200,
            Light = 300,
        }
    }

    crate::describe_enum!(Tone in palette: u16 { Dark, Mid, Light });

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    #[repr(i8)]
    enum Signed {
        Low = -5,
        High = 100,
    }

    // a wider underlying type keeps every value intact
    crate::describe_enum!(Signed: i64 { Low, High });

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Partial {
        First,
        Second,
        Hidden,
    }

    // `Hidden` is intentionally left out and `First` is listed twice
    crate::describe_enum!(Partial { First, Second, First });

    #[test]
    fn external_in_module() {
        assert_eq!(enum_name::<palette::Tone>(), "Tone");
        assert_eq!(enum_values::<palette::Tone>(), &[100u16, 200, 300]);
        assert_eq!(from_value::<palette::Tone>(200), Ok(palette::Tone::Mid));
        assert_eq!(to_string(palette::Tone::Light), Ok("Light"));
    }

    #[test]
    fn widened_underlying() {
        assert_eq!(enum_values::<Signed>(), &[-5i64, 100]);
        assert_eq!(to_value(Signed::Low), -5i64);
        assert_eq!(from_value::<Signed>(100), Ok(Signed::High));
    }

    #[test]
    fn partial_descriptor() {
        assert_eq!(enum_size::<Partial>(), 3);
        assert_eq!(to_index(Partial::Hidden), 3);
        assert_eq!(to_string_opt(Partial::Hidden), None);
        assert_eq!(to_string(Partial::Hidden), Err(Error::ValueOutOfRange { enum_name: "Partial" }));

        assert_eq!(to_index(Partial::First), 0);
        assert_eq!(from_string::<Partial>("First"), Ok(Partial::First));
        assert_eq!(from_index::<Partial>(2), Ok(Partial::First));
        assert_eq!(from_value_opt::<Partial>(2), None);
        assert_eq!(to_value(Partial::Hidden), 2);
    }
}
