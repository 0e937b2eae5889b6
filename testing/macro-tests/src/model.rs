use propbind::Bindable;

///
/// Point
///

#[derive(Bindable, Clone, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

///
/// City
///
/// `zip` is skipped by `propbind.toml`.
///

#[derive(Bindable, Clone, Debug, Default, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub zip: String,
}

///
/// Address
///

#[derive(Bindable, Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,

    #[binding(nested)]
    pub city: Option<City>,
}

///
/// Customer
///

#[derive(Bindable, Clone, Debug, Default, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub(crate) rank: u32,

    #[binding(nested)]
    pub address: Option<Address>,

    #[binding(skip)]
    pub notes: String,

    secret: String,
}

impl Customer {
    #[must_use]
    pub fn new(name: &str, secret: &str) -> Self {
        Self {
            name: name.to_string(),
            secret: secret.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}

///
/// Holder
///

#[derive(Bindable, Clone, Debug, Default, PartialEq, Eq)]
pub struct Holder<T>
where
    T: Clone,
{
    pub value: T,
    pub label: Option<String>,
}
