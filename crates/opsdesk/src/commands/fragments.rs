use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libopsdesk::fragments::registry;

#[derive(Debug, clap::Args)]
pub(crate) struct FragmentsCmd {
    #[arg(
        help="Fragment names to render (with their transitive dependencies). \
             With no names, lists every fragment in the catalog.",
        name="FRAGMENT_NAMES",
    )]
    names: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for FragmentsCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        let registry = registry();

        if self.names.is_empty() {
            let mut names: Vec<&str> = registry
                .fragments()
                .keys()
                .map(String::as_str)
                .collect();
            names.sort_unstable();
            return CommandResult::stdout(format_args!("{}", names.join("\n")));
        }

        let resolved = registry.resolve(self.names.iter().map(String::as_str));
        let rendered = registry.render(resolved.iter().map(String::as_str));
        if rendered.is_empty() {
            return CommandResult::stderr(format_args!(
                "None of the requested fragments exist in the catalog."
            ));
        }
        CommandResult::stdout(format_args!("{rendered}"))
    }
}
