use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::DetailLevelArg;
use crate::commands::known_resources;
use libopsdesk::operation::ResourceMutationBuilder;
use libopsdesk::operation::descriptors;
use serde_json::Value as JsonValue;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum MutationAction {
    Create,
    Update,
    Delete,
}

#[derive(Debug, clap::Args)]
pub(crate) struct MutationCmd {
    #[arg(
        help="Resource to generate a mutation for (e.g. `ticket`, `client`).",
        name="RESOURCE",
    )]
    resource: String,

    #[arg(help="Mutation action.", name="ACTION", value_enum)]
    action: MutationAction,

    #[arg(
        help="Entity id; required for `update` and `delete`.",
        long,
    )]
    id: Option<String>,

    #[arg(
        help="Input object as a JSON string; required for `create` and \
             `update`.",
        long,
    )]
    input: Option<String>,

    #[arg(
        default_value="core",
        help="Detail level for the returned entity fields.",
        long,
        value_enum,
    )]
    detail: DetailLevelArg,

    #[arg(help="Operation name for the document header.", long)]
    operation_name: Option<String>,

    #[arg(
        help="Also print the variables map as JSON after the document.",
        long,
    )]
    show_variables: bool,
}

#[inherent::inherent]
impl RunnableCommand for MutationCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        let Some(descriptor) = descriptors::by_name(&self.resource) else {
            return CommandResult::stderr(format_args!(
                "Unknown resource: `{}`. Known resources: {}",
                self.resource,
                known_resources(),
            ));
        };

        let mut builder =
            ResourceMutationBuilder::new(descriptor, self.detail.into());
        if let Some(operation_name) = &self.operation_name {
            builder = builder.operation_name(operation_name);
        }

        let input: Option<JsonValue> = match &self.input {
            Some(raw) => match serde_json::from_str(raw) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    return CommandResult::stderr(format_args!(
                        "Invalid JSON passed to --input: {err}"
                    ));
                },
            },
            None => None,
        };

        let configured = match self.action {
            MutationAction::Create => {
                let Some(input) = &input else {
                    return CommandResult::stderr(format_args!(
                        "`create` requires --input."
                    ));
                };
                builder.create(input)
            },
            MutationAction::Update => {
                let (Some(id), Some(input)) = (&self.id, &input) else {
                    return CommandResult::stderr(format_args!(
                        "`update` requires both --id and --input."
                    ));
                };
                builder.update(id, input)
            },
            MutationAction::Delete => {
                let Some(id) = &self.id else {
                    return CommandResult::stderr(format_args!(
                        "`delete` requires --id."
                    ));
                };
                builder.delete(id)
            },
        };

        let builder = match configured {
            Ok(builder) => builder,
            Err(err) => return CommandResult::stderr(format_args!("{err}")),
        };

        let document = match builder.build() {
            Ok(document) => document,
            Err(err) => return CommandResult::stderr(format_args!("{err}")),
        };

        if self.show_variables {
            let variables = JsonValue::Object(builder.variables());
            let variables = serde_json::to_string_pretty(&variables)
                .unwrap_or_else(|_| "{}".to_string());
            CommandResult::stdout(format_args!("{document}\n\n{variables}"))
        } else {
            CommandResult::stdout(format_args!("{document}"))
        }
    }
}
