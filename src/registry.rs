use core::{fmt, marker::PhantomData, str::FromStr};

use xenum::EnumTraitsT;

/// What to look an enumerator up by
pub enum Query<'a> {
    Name(&'a str),
    Index(usize),
    Value(&'a str),
}

#[derive(Debug)]
pub enum ToolError {
    /// No enum with this name is registered
    UnknownEnum(String),
    /// The value can't be parsed as the underlying type of the enum
    InvalidValue { enum_name: &'static str, value: String },
    /// The lookup itself failed
    Lookup(xenum::Error),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::UnknownEnum(name)                => f.write_fmt(format_args!("Unknown enum '{name}'")),
            ToolError::InvalidValue { enum_name, value } => f.write_fmt(format_args!("'{value}' is not a valid underlying value for '{enum_name}'")),
            ToolError::Lookup(err)                      => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<xenum::Error> for ToolError {
    fn from(err: xenum::Error) -> Self {
        ToolError::Lookup(err)
    }
}

/// Type-erased view on a described enum
pub trait EnumInfo {
    fn name(&self) -> &'static str;
    fn names(&self) -> &'static [&'static str];
    fn values(&self) -> Vec<String>;

    /// Look up an enumerator and return its position
    fn lookup(&self, query: &Query) -> Result<usize, ToolError>;
}

struct Info<E>(PhantomData<E>);

impl<E: EnumTraitsT> EnumInfo for Info<E>
where
    E::Underlying: FromStr
{
    fn name(&self) -> &'static str {
        xenum::enum_name::<E>()
    }

    fn names(&self) -> &'static [&'static str] {
        xenum::enum_names::<E>()
    }

    fn values(&self) -> Vec<String> {
        xenum::enum_values::<E>().iter().map(ToString::to_string).collect()
    }

    fn lookup(&self, query: &Query) -> Result<usize, ToolError> {
        let descriptor = xenum::enum_descriptor::<E>();
        let index = match query {
            Query::Name(name) => descriptor.find_name(name).ok_or_else(|| xenum::Error::NameNotFound {
                enum_name: descriptor.name(),
                name: name.to_string()
            })?,
            Query::Index(index) => xenum::from_index::<E>(*index).map(|_| *index)?,
            Query::Value(value) => {
                let parsed = value.parse::<E::Underlying>().map_err(|_| ToolError::InvalidValue {
                    enum_name: descriptor.name(),
                    value: value.to_string()
                })?;
                descriptor.find_value(&parsed).ok_or_else(|| xenum::Error::ValueNotFound {
                    enum_name: descriptor.name(),
                    value: value.to_string()
                })?
            },
        };
        Ok(index)
    }
}

pub fn info<E: EnumTraitsT>() -> Box<dyn EnumInfo>
where
    E::Underlying: FromStr
{
    Box::new(Info::<E>(PhantomData))
}

/// Set of enums known to the tool
pub struct Registry {
    enums: Vec<Box<dyn EnumInfo>>,
}

impl Registry {
    pub fn new() -> Self {
        Self { enums: Vec::new() }
    }

    pub fn register(&mut self, info: Box<dyn EnumInfo>) {
        self.enums.push(info);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn EnumInfo> {
        self.enums.iter().map(|info| info.as_ref())
    }

    pub fn get(&self, name: &str) -> Result<&dyn EnumInfo, ToolError> {
        self.iter().find(|info| info.name() == name).ok_or_else(|| ToolError::UnknownEnum(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{Color, HttpStatus, Ordering};

    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Twice {
        A,
        B,
    }

    xenum::describe_enum!(Twice { A, B, A });

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(info::<Color>());
        registry.register(info::<HttpStatus>());
        registry.register(info::<Ordering>());
        registry.register(info::<Twice>());
        registry
    }

    #[test]
    fn registry_lookup() {
        let registry = registry();
        let color = registry.get("Color").unwrap();
        assert_eq!(color.names(), &["Red", "Green", "Blue"]);
        assert_eq!(color.values(), vec!["0", "5", "6"]);

        assert_eq!(color.lookup(&Query::Name("Blue")).unwrap(), 2);
        assert_eq!(color.lookup(&Query::Index(1)).unwrap(), 1);
        assert_eq!(color.lookup(&Query::Value("6")).unwrap(), 2);

        let ordering = registry.get("Ordering").unwrap();
        assert_eq!(ordering.lookup(&Query::Value("-1")).unwrap(), 0);
    }

    #[test]
    fn registry_errors() {
        let registry = registry();
        assert!(matches!(registry.get("Colour"), Err(ToolError::UnknownEnum(_))));

        let status = registry.get("HttpStatus").unwrap();
        assert!(matches!(status.lookup(&Query::Value("abc")), Err(ToolError::InvalidValue { .. })));
        assert!(matches!(status.lookup(&Query::Value("201")), Ok(1)));
        assert!(matches!(status.lookup(&Query::Value("403")), Err(ToolError::Lookup(xenum::Error::ValueNotFound { .. }))));
        assert!(matches!(status.lookup(&Query::Index(7)), Err(ToolError::Lookup(xenum::Error::IndexOutOfRange { .. }))));
        assert!(matches!(status.lookup(&Query::Name("ok")), Err(ToolError::Lookup(xenum::Error::NameNotFound { .. }))));
    }

    #[test]
    fn registry_reports_matched_position() {
        let registry = registry();
        let twice = registry.get("Twice").unwrap();
        assert_eq!(twice.values(), vec!["0", "1", "0"]);

        assert_eq!(twice.lookup(&Query::Index(2)).unwrap(), 2);
        assert_eq!(twice.lookup(&Query::Index(0)).unwrap(), 0);
        assert_eq!(twice.lookup(&Query::Name("A")).unwrap(), 0);
        assert_eq!(twice.lookup(&Query::Value("0")).unwrap(), 0);
        assert_eq!(twice.lookup(&Query::Value("1")).unwrap(), 1);
    }
}
