use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::DetailLevelArg;
use crate::commands::SortDirectionArg;
use crate::commands::known_resources;
use libopsdesk::operation::ResourceQueryBuilder;
use libopsdesk::operation::descriptors;
use libopsdesk::types::PaginationArgs;
use libopsdesk::types::SortArgs;
use serde_json::Value as JsonValue;

#[derive(Debug, clap::Args)]
pub(crate) struct QueryCmd {
    #[arg(
        help="Resource to generate a query for (e.g. `ticket`, `client`, \
             `asset`).",
        name="RESOURCE",
    )]
    resource: String,

    #[arg(
        help="Generate a get-by-id document for this id instead of a list \
             document.",
        long,
    )]
    id: Option<String>,

    #[arg(
        default_value="core",
        help="Detail level for the returned fields.",
        long,
        value_enum,
    )]
    detail: DetailLevelArg,

    #[arg(
        help="Filter object as a JSON string (snake_case keys are converted \
             to the wire format automatically).",
        long,
    )]
    filter: Option<String>,

    #[arg(help="Page number (1-based).", long)]
    page: Option<u32>,

    #[arg(help="Items per page (1-1000).", long)]
    page_size: Option<u32>,

    #[arg(help="Wire-format field name to sort by.", long)]
    sort_field: Option<String>,

    #[arg(
        default_value="asc",
        help="Sort direction; only used together with --sort-field.",
        long,
        value_enum,
    )]
    sort_direction: SortDirectionArg,

    #[arg(
        help="Nested sections to include (e.g. `comments`), comma-separated.",
        long,
        value_delimiter=',',
    )]
    include: Vec<String>,

    #[arg(help="Operation name for the document header.", long)]
    operation_name: Option<String>,

    #[arg(
        help="Also print the variables map as JSON after the document.",
        long,
    )]
    show_variables: bool,
}

#[inherent::inherent]
impl RunnableCommand for QueryCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        let Some(descriptor) = descriptors::by_name(&self.resource) else {
            return CommandResult::stderr(format_args!(
                "Unknown resource: `{}`. Known resources: {}",
                self.resource,
                known_resources(),
            ));
        };

        let mut builder =
            ResourceQueryBuilder::new(descriptor, self.detail.into());
        for section in &self.include {
            builder = builder.with_section(section);
        }
        if let Some(operation_name) = &self.operation_name {
            builder = builder.operation_name(operation_name);
        }

        let configured = if let Some(id) = &self.id {
            log::debug!("Generating get-by-id document for `{}`.", descriptor.name);
            builder.get(id)
        } else {
            log::debug!("Generating list document for `{}`.", descriptor.name);
            let filter: Option<JsonValue> = match &self.filter {
                Some(raw) => match serde_json::from_str(raw) {
                    Ok(parsed) => Some(parsed),
                    Err(err) => {
                        return CommandResult::stderr(format_args!(
                            "Invalid JSON passed to --filter: {err}"
                        ));
                    },
                },
                None => None,
            };

            let pagination =
                if self.page.is_some() || self.page_size.is_some() {
                    let page = self.page.unwrap_or(1);
                    let page_size = self.page_size.unwrap_or(50);
                    match PaginationArgs::new(page, page_size) {
                        Ok(pagination) => Some(pagination),
                        Err(err) => {
                            return CommandResult::stderr(format_args!("{err}"));
                        },
                    }
                } else {
                    None
                };

            let sort = self.sort_field.as_ref().map(|field| {
                SortArgs::new(field, self.sort_direction.into())
            });

            builder.list(filter.as_ref(), pagination.as_ref(), sort.as_ref())
        };

        let builder = match configured {
            Ok(builder) => builder,
            Err(err) => return CommandResult::stderr(format_args!("{err}")),
        };

        let document = if self.id.is_some() {
            builder.build_get()
        } else {
            builder.build_list()
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
