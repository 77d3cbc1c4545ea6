mod fragments;
mod mutation;
mod query;

use crate::Cli;
use crate::CommandResult;
use fragments::FragmentsCmd;
use mutation::MutationCmd;
use query::QueryCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "opsdesk")]
pub(crate) enum CommandEnum {
    Fragments(Box<FragmentsCmd>),
    Mutation(Box<MutationCmd>),
    Query(Box<QueryCmd>),
}
impl CommandEnum {
    pub(crate) fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Fragments(cmd) => cmd.run(cli),
            Self::Mutation(cmd) => cmd.run(cli),
            Self::Query(cmd) => cmd.run(cli),
        }
    }
}

/// Detail levels accepted on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum DetailLevelArg {
    Summary,
    Core,
    Full,
}

impl From<DetailLevelArg> for libopsdesk::operation::DetailLevel {
    fn from(arg: DetailLevelArg) -> Self {
        match arg {
            DetailLevelArg::Summary => Self::Summary,
            DetailLevelArg::Core => Self::Core,
            DetailLevelArg::Full => Self::Full,
        }
    }
}

/// Comma-separated list of every resource the CLI can generate documents
/// for, for error messages.
pub(super) fn known_resources() -> String {
    libopsdesk::operation::descriptors::ALL
        .iter()
        .map(|descriptor| descriptor.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum SortDirectionArg {
    Asc,
    Desc,
}

impl From<SortDirectionArg> for libopsdesk::types::SortDirection {
    fn from(arg: SortDirectionArg) -> Self {
        match arg {
            SortDirectionArg::Asc => Self::Asc,
            SortDirectionArg::Desc => Self::Desc,
        }
    }
}
