use crate::fragments::FragmentRegistry;
use crate::fragments::registry;
use crate::operation::DetailLevel;
use crate::operation::DocumentBuildError;
use crate::operation::MutationBuilder;
use crate::operation::QueryBuilder;
use crate::types::PaginationArgs;
use crate::types::SortArgs;
use serde::Serialize;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Fixed rendering order for optional list arguments. Only arguments whose
/// variable was actually bound are included, but the order never varies
/// with registration order.
const LIST_ARGUMENT_ORDER: &[(&str, &str)] = &[
    ("filter", "filter: $filter"),
    ("page", "page: $page"),
    ("pageSize", "pageSize: $pageSize"),
    ("sortField", "sortField: $sortField"),
    ("sortDirection", "sortDirection: $sortDirection"),
];

/// An optional nested selection a resource declares (e.g. a ticket's
/// comments). Enabled per builder instance via
/// [`ResourceQueryBuilder::with_section`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NestedSection {
    /// Key callers use to opt in.
    pub key: &'static str,
    /// Field name selected on the parent entity.
    pub field: &'static str,
    /// Fragment spread inside the nested block.
    pub fragment: &'static str,
}

/// Data-driven specification of a domain entity's query/mutation shape.
///
/// Resources differ only in configuration, never in algorithm, so the
/// builders below are generic over a descriptor instead of existing once
/// per resource. The standard descriptors live in [`descriptors`].
#[derive(Clone, Copy, Debug)]
pub struct ResourceDescriptor {
    pub name: &'static str,
    /// Query field returning a single entity by id.
    pub singular_field: &'static str,
    /// Query field returning a paginated list.
    pub plural_field: &'static str,
    /// GraphQL type name; mutation fields derive from it
    /// (`create<Type>`, `update<Type>`, `delete<Type>`).
    pub graphql_type: &'static str,
    pub filter_type: &'static str,
    pub input_type: &'static str,
    /// Catalog fragment backing each detail level.
    pub fragment_for: fn(DetailLevel) -> &'static str,
    pub sections: &'static [NestedSection],
}

impl ResourceDescriptor {
    fn section(&self, key: &str) -> Option<&'static NestedSection> {
        self.sections.iter().find(|section| section.key == key)
    }
}

/// The standard resource descriptors.
pub mod descriptors {
    use super::NestedSection;
    use super::ResourceDescriptor;
    use crate::fragments::catalog;

    pub static CLIENT: ResourceDescriptor = ResourceDescriptor {
        name: "client",
        singular_field: "client",
        plural_field: "clients",
        graphql_type: "Client",
        filter_type: "ClientFilter",
        input_type: "ClientInput",
        fragment_for: catalog::client_fragment,
        sections: &[],
    };

    pub static CONTACT: ResourceDescriptor = ResourceDescriptor {
        name: "contact",
        singular_field: "contact",
        plural_field: "contacts",
        graphql_type: "Contact",
        filter_type: "ContactFilter",
        input_type: "ContactInput",
        fragment_for: catalog::contact_fragment,
        sections: &[],
    };

    pub static SITE: ResourceDescriptor = ResourceDescriptor {
        name: "site",
        singular_field: "site",
        plural_field: "sites",
        graphql_type: "Site",
        filter_type: "SiteFilter",
        input_type: "SiteInput",
        fragment_for: catalog::site_fragment,
        sections: &[],
    };

    pub static ASSET: ResourceDescriptor = ResourceDescriptor {
        name: "asset",
        singular_field: "asset",
        plural_field: "assets",
        graphql_type: "Asset",
        filter_type: "AssetFilter",
        input_type: "AssetInput",
        fragment_for: catalog::asset_fragment,
        sections: &[],
    };

    pub static TICKET: ResourceDescriptor = ResourceDescriptor {
        name: "ticket",
        singular_field: "ticket",
        plural_field: "tickets",
        graphql_type: "Ticket",
        filter_type: "TicketFilter",
        input_type: "TicketInput",
        fragment_for: catalog::ticket_fragment,
        sections: &[NestedSection {
            key: "comments",
            field: "comments",
            fragment: "TicketCommentFields",
        }],
    };

    pub static TASK: ResourceDescriptor = ResourceDescriptor {
        name: "task",
        singular_field: "task",
        plural_field: "tasks",
        graphql_type: "Task",
        filter_type: "TaskFilter",
        input_type: "TaskInput",
        fragment_for: catalog::task_fragment,
        sections: &[
            NestedSection {
                key: "comments",
                field: "comments",
                fragment: "TaskCommentFields",
            },
            NestedSection {
                key: "time_entries",
                field: "timeEntries",
                fragment: "TaskTimeEntryFields",
            },
        ],
    };

    pub static PROJECT: ResourceDescriptor = ResourceDescriptor {
        name: "project",
        singular_field: "project",
        plural_field: "projects",
        graphql_type: "Project",
        filter_type: "ProjectFilter",
        input_type: "ProjectInput",
        fragment_for: catalog::project_fragment,
        sections: &[
            NestedSection {
                key: "milestones",
                field: "milestones",
                fragment: "ProjectMilestoneFields",
            },
            NestedSection {
                key: "tasks",
                field: "tasks",
                fragment: "ProjectTaskFields",
            },
            NestedSection {
                key: "time_entries",
                field: "timeEntries",
                fragment: "ProjectTimeEntryFields",
            },
        ],
    };

    pub static USER: ResourceDescriptor = ResourceDescriptor {
        name: "user",
        singular_field: "user",
        plural_field: "users",
        graphql_type: "User",
        filter_type: "UserFilter",
        input_type: "UserInput",
        fragment_for: catalog::user_fragment,
        sections: &[],
    };

    pub static TIME_ENTRY: ResourceDescriptor = ResourceDescriptor {
        name: "time_entry",
        singular_field: "timeEntry",
        plural_field: "timeEntries",
        graphql_type: "TimeEntry",
        filter_type: "TimeEntryFilter",
        input_type: "TimeEntryInput",
        fragment_for: catalog::time_entry_fragment,
        sections: &[],
    };

    pub static TIMER: ResourceDescriptor = ResourceDescriptor {
        name: "timer",
        singular_field: "timer",
        plural_field: "timers",
        graphql_type: "Timer",
        filter_type: "TimerFilter",
        input_type: "TimerInput",
        fragment_for: catalog::timer_fragment,
        sections: &[],
    };

    pub static KB_COLLECTION: ResourceDescriptor = ResourceDescriptor {
        name: "kb_collection",
        singular_field: "kbCollection",
        plural_field: "kbCollections",
        graphql_type: "KnowledgeBaseCollection",
        filter_type: "KnowledgeBaseCollectionFilter",
        input_type: "KnowledgeBaseCollectionInput",
        fragment_for: catalog::kb_collection_fragment,
        sections: &[],
    };

    pub static KB_ARTICLE: ResourceDescriptor = ResourceDescriptor {
        name: "kb_article",
        singular_field: "kbArticle",
        plural_field: "kbArticles",
        graphql_type: "KnowledgeBaseArticle",
        filter_type: "KnowledgeBaseArticleFilter",
        input_type: "KnowledgeBaseArticleInput",
        fragment_for: catalog::kb_article_fragment,
        sections: &[],
    };

    /// All standard descriptors, for enumeration (e.g. by the CLI).
    pub static ALL: &[&ResourceDescriptor] = &[
        &CLIENT,
        &CONTACT,
        &SITE,
        &ASSET,
        &TICKET,
        &TASK,
        &PROJECT,
        &USER,
        &TIME_ENTRY,
        &TIMER,
        &KB_COLLECTION,
        &KB_ARTICLE,
    ];

    /// Look up a descriptor by its resource name.
    pub fn by_name(name: &str) -> Option<&'static ResourceDescriptor> {
        ALL.iter().copied().find(|descriptor| descriptor.name == name)
    }
}

/// Generic list/get query builder for one resource.
///
/// The constructor pre-registers the catalog fragment matching the
/// requested detail level; [`ResourceQueryBuilder::with_section`] opts into
/// the descriptor's nested selections.
#[derive(Clone, Debug)]
pub struct ResourceQueryBuilder<'fragreg> {
    builder: QueryBuilder<'fragreg>,
    descriptor: &'static ResourceDescriptor,
    detail_level: DetailLevel,
    enabled_sections: BTreeSet<&'static str>,
}

impl ResourceQueryBuilder<'static> {
    pub fn new(
        descriptor: &'static ResourceDescriptor,
        detail_level: DetailLevel,
    ) -> Self {
        Self::with_registry(registry(), descriptor, detail_level)
    }
}

impl<'fragreg> ResourceQueryBuilder<'fragreg> {
    pub fn with_registry(
        fragment_registry: &'fragreg FragmentRegistry,
        descriptor: &'static ResourceDescriptor,
        detail_level: DetailLevel,
    ) -> Self {
        let builder = QueryBuilder::with_registry(fragment_registry)
            .add_fragment((descriptor.fragment_for)(detail_level));
        Self {
            builder,
            descriptor,
            detail_level,
            enabled_sections: BTreeSet::new(),
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    pub fn detail_level(&self) -> DetailLevel {
        self.detail_level
    }

    /// Enable one of the descriptor's nested selections by key.
    ///
    /// Keys the descriptor does not declare are ignored: sections are
    /// forward-compatible configuration, not a validated surface.
    pub fn with_section(mut self, key: &str) -> Self {
        if let Some(section) = self.descriptor.section(key) {
            self.enabled_sections.insert(section.key);
            self.builder = self.builder.add_fragment(section.fragment);
        }
        self
    }

    /// Set the operation name rendered in the document header.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.builder = self.builder.operation_name(name);
        self
    }

    /// Reference an extra fragment beyond what the descriptor pulls in.
    pub fn add_fragment(mut self, name: impl Into<String>) -> Self {
        self.builder = self.builder.add_fragment(name);
        self
    }

    /// Configure a paginated list query over the resource's plural field.
    ///
    /// Each argument is optional; only supplied arguments register
    /// variables and appear in the rendered argument list.
    pub fn list<F>(
        mut self,
        filter: Option<&F>,
        pagination: Option<&PaginationArgs>,
        sort: Option<&SortArgs>,
    ) -> Result<Self>
    where
        F: Serialize,
    {
        if let Some(filter) = filter {
            self.builder =
                self.builder
                    .bind_variable("filter", self.descriptor.filter_type, filter)?;
        }
        if let Some(pagination) = pagination {
            self.builder = self
                .builder
                .bind_variable("page", "Int", &pagination.page())?
                .bind_variable("pageSize", "Int", &pagination.page_size())?;
        }
        if let Some(sort) = sort {
            self.builder = self
                .builder
                .bind_variable("sortField", "String", &sort.field)?
                .bind_variable("sortDirection", "SortDirection", &sort.direction)?;
        }

        let items = self.items_selection();
        self.builder = self
            .builder
            .add_selection(items)
            .add_selection("pagination {\n  ...PaginationInfo\n}")
            .add_fragment("PaginationInfo");
        Ok(self)
    }

    /// Configure a get-by-id query over the resource's singular field.
    pub fn get(mut self, id: impl Into<String>) -> Result<Self> {
        self.builder = self.builder.bind_variable("id", "ID!", &id.into())?;

        let mut selection =
            format!("...{}", (self.descriptor.fragment_for)(self.detail_level));
        for section in self.active_sections() {
            selection.push_str(&format!(
                "\n{} {{\n  ...{}\n}}",
                section.field, section.fragment,
            ));
        }
        self.builder = self.builder.add_selection(selection);
        Ok(self)
    }

    /// Render the list document. Arguments follow the fixed order
    /// filter, page, pageSize, sortField, sortDirection, including only the
    /// variables bound by [`ResourceQueryBuilder::list`].
    pub fn build_list(&self) -> String {
        let arguments: Vec<&str> = LIST_ARGUMENT_ORDER
            .iter()
            .filter(|(name, _)| self.builder.is_bound(name))
            .map(|(_, argument)| *argument)
            .collect();
        self.builder
            .build(self.descriptor.plural_field, &arguments.join(", "))
    }

    /// Render the get-by-id document.
    pub fn build_get(&self) -> String {
        self.builder.build(self.descriptor.singular_field, "id: $id")
    }

    /// A copy of the bound variable values.
    pub fn variables(&self) -> JsonMap<String, JsonValue> {
        self.builder.variables()
    }

    fn active_sections(&self) -> impl Iterator<Item = &'static NestedSection> + '_ {
        self.descriptor
            .sections
            .iter()
            .filter(|section| self.enabled_sections.contains(section.key))
    }

    fn items_selection(&self) -> String {
        let mut block = format!(
            "items {{\n  ...{}",
            (self.descriptor.fragment_for)(self.detail_level),
        );
        for section in self.active_sections() {
            block.push_str(&format!(
                "\n  {} {{\n    ...{}\n  }}",
                section.field, section.fragment,
            ));
        }
        block.push_str("\n}");
        block
    }
}

/// Generic create/update/delete mutation builder for one resource.
///
/// Non-delete mutations return the resource's detail-level fragment spread;
/// delete returns a bare acknowledgement.
#[derive(Clone, Debug)]
pub struct ResourceMutationBuilder<'fragreg> {
    builder: MutationBuilder<'fragreg>,
    descriptor: &'static ResourceDescriptor,
}

impl ResourceMutationBuilder<'static> {
    pub fn new(
        descriptor: &'static ResourceDescriptor,
        detail_level: DetailLevel,
    ) -> Self {
        Self::with_registry(registry(), descriptor, detail_level)
    }
}

impl<'fragreg> ResourceMutationBuilder<'fragreg> {
    pub fn with_registry(
        fragment_registry: &'fragreg FragmentRegistry,
        descriptor: &'static ResourceDescriptor,
        detail_level: DetailLevel,
    ) -> Self {
        let fragment = (descriptor.fragment_for)(detail_level);
        let builder = MutationBuilder::with_registry(fragment_registry)
            .add_fragment(fragment)
            .return_field(format!("...{fragment}"));
        Self {
            builder,
            descriptor,
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    /// Set the operation name rendered in the document header.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.builder = self.builder.operation_name(name);
        self
    }

    /// Configure a `create<Type>` mutation.
    pub fn create<I>(mut self, input: &I) -> Result<Self>
    where
        I: Serialize,
    {
        self.builder = self
            .builder
            .bind_variable("input", format!("{}!", self.descriptor.input_type), input)?
            .mutation_field(
                format!("create{}", self.descriptor.graphql_type),
                "input: $input",
            );
        Ok(self)
    }

    /// Configure an `update<Type>` mutation.
    pub fn update<I>(mut self, id: impl Into<String>, input: &I) -> Result<Self>
    where
        I: Serialize,
    {
        self.builder = self
            .builder
            .bind_variable("id", "ID!", &id.into())?
            .bind_variable("input", format!("{}!", self.descriptor.input_type), input)?
            .mutation_field(
                format!("update{}", self.descriptor.graphql_type),
                "id: $id, input: $input",
            );
        Ok(self)
    }

    /// Configure a `delete<Type>` mutation. The entity payload is replaced
    /// by an acknowledgement, so the pre-registered fragment is dropped.
    pub fn delete(mut self, id: impl Into<String>) -> Result<Self> {
        self.builder = self
            .builder
            .bind_variable("id", "ID!", &id.into())?
            .set_return_fields(["success", "message"])
            .clear_fragments()
            .mutation_field(
                format!("delete{}", self.descriptor.graphql_type),
                "id: $id",
            );
        Ok(self)
    }

    /// Render the mutation document. Errors if none of
    /// [`create`](Self::create)/[`update`](Self::update)/
    /// [`delete`](Self::delete) ran first.
    pub fn build(&self) -> Result<String> {
        self.builder.build()
    }

    /// A copy of the bound variable values.
    pub fn variables(&self) -> JsonMap<String, JsonValue> {
        self.builder.variables()
    }
}
