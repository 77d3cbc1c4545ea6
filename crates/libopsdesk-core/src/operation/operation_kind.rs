/// The two kinds of executable operation this SDK emits.
///
/// The API exposes no subscription surface, so there is no third variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
}

impl OperationKind {
    /// The keyword that opens the operation header.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        }
    }
}
