/// Создаёт новый доменный тип поверх строки.
///
/// Значение проверяется функцией `$validate_fn` как при создании через `new`,
/// так и при десериализации.
#[macro_export]
macro_rules! newtype {
    ($tname:ident, $validate_fn:ident, $error:ty) => {
        #[derive(
            std::fmt::Debug,
            std::clone::Clone,
            serde::Serialize,
            serde::Deserialize,
            std::cmp::PartialEq,
            std::cmp::Eq,
        )]
        #[serde(try_from = "String")]
        pub struct $tname(String);

        impl $tname {
            pub fn new(value: impl Into<String>) -> std::result::Result<Self, $error> {
                let value = value.into();
                $validate_fn(&value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::convert::From<$tname> for String {
            fn from(value: $tname) -> String {
                value.0
            }
        }

        impl std::convert::TryFrom<String> for $tname {
            type Error = $error;

            fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                $tname::new(value)
            }
        }

        impl std::str::FromStr for $tname {
            type Err = $error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $tname::new(s)
            }
        }

        impl std::fmt::Display for $tname {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
