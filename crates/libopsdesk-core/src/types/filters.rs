//! Sparse query filters: all fields optional, unset fields vanish from the
//! serialized variable (see
//! [`serialize::serialize_value`](crate::types::serialize::serialize_value)).
//!
//! Field names are lower_snake_case here; the serializer converts them to
//! the wire format's lowerCamelCase mechanically, so no per-field serde
//! renames are needed.

use crate::types::ApprovalStatus;
use crate::types::AssetStatus;
use crate::types::ClientStatus;
use crate::types::ProjectPriority;
use crate::types::ProjectStatus;
use crate::types::TaskStatus;
use crate::types::TicketPriority;
use crate::types::TicketStatus;
use crate::types::TimerState;
use crate::types::UserRole;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClientFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<ClientStatus>,
    pub tags: Option<Vec<String>>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactFilter {
    pub client_id: Option<String>,
    pub email: Option<String>,
    pub is_primary: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SiteFilter {
    pub client_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TicketFilter {
    pub client_id: Option<String>,
    pub site_id: Option<String>,
    pub asset_id: Option<String>,
    pub contact_id: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assigned_to: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub due_after: Option<DateTime<Utc>>,
    pub due_before: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AssetFilter {
    pub client_id: Option<String>,
    pub site_id: Option<String>,
    pub name: Option<String>,
    pub asset_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub status: Option<AssetStatus>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskFilter {
    pub project_id: Option<String>,
    pub assigned_to: Option<String>,
    pub assigned_to_team: Option<String>,
    pub creator_id: Option<String>,
    pub parent_task_id: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TicketPriority>,
    pub tags: Option<Vec<String>>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub due_after: Option<DateTime<Utc>>,
    pub due_before: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProjectFilter {
    pub client_id: Option<String>,
    pub contract_id: Option<String>,
    pub site_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<ProjectPriority>,
    pub assigned_to: Option<String>,
    pub manager_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub start_after: Option<DateTime<Utc>>,
    pub start_before: Option<DateTime<Utc>>,
    pub due_after: Option<DateTime<Utc>>,
    pub due_before: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub department: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TimeEntryFilter {
    pub user_id: Option<String>,
    pub ticket_id: Option<String>,
    pub task_id: Option<String>,
    pub project_id: Option<String>,
    pub is_billable: Option<bool>,
    pub approval_status: Option<ApprovalStatus>,
    pub logged_after: Option<DateTime<Utc>>,
    pub logged_before: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TimerFilter {
    pub user_id: Option<String>,
    pub ticket_id: Option<String>,
    pub task_id: Option<String>,
    pub state: Option<TimerState>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KnowledgeBaseCollectionFilter {
    pub parent_id: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KnowledgeBaseArticleFilter {
    pub collection_id: Option<String>,
    pub author_id: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}
