//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and a display template. The macro derives
//! `thiserror::Error` and emits one snake-case constructor per variant whose
//! parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unavailable { message: String } => "unavailable: {message}",
            Rejected { column: String, attempts: u32 } => "rejected {column} after {attempts}",
        }
    }

    #[test]
    fn constructor_accepts_str_for_string_field() {
        let err = SamplePortError::unavailable("pool drained");
        assert_eq!(err.to_string(), "unavailable: pool drained");
    }

    #[test]
    fn constructor_supports_mixed_field_types() {
        let err = SamplePortError::rejected("email", 2_u32);
        assert_eq!(err.to_string(), "rejected email after 2");
        assert_eq!(
            err,
            SamplePortError::Rejected {
                column: "email".to_owned(),
                attempts: 2,
            }
        );
    }
}
