//! Helper macro generating the error enums raised by driven ports.
//!
//! Each variant carries named fields and gets a snake-case constructor whose
//! parameters accept anything convertible into the field type, so adapters can
//! write `UserLookupError::query("boom")`.

macro_rules! define_port_error {
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
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
                define_port_error!(@ctor $variant { $($field : $ty),* });
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
            Rejected { message: String, attempts: u32 } => "rejected after {attempts}: {message}",
        }
    }

    #[test]
    fn constructor_converts_str_into_string() {
        let err = SamplePortError::unavailable("pool exhausted");

        assert_eq!(err.to_string(), "unavailable: pool exhausted");
    }

    #[test]
    fn constructor_keeps_non_string_fields() {
        let err = SamplePortError::rejected("constraint", 1_u32);

        assert_eq!(
            err,
            SamplePortError::Rejected {
                message: "constraint".to_owned(),
                attempts: 1,
            }
        );
    }
}
