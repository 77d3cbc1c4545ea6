/// Coarse selector for how many fields a query returns for a given entity.
///
/// Passed to a resource builder's constructor to pick which catalog
/// fragment backs its selections; not stored anywhere else.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DetailLevel {
    Summary,
    #[default]
    Core,
    Full,
}

impl DetailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Core => "core",
            Self::Full => "full",
        }
    }
}
