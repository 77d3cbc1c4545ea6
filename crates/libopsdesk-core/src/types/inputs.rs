//! Mutation input objects. Required fields are plain; everything optional
//! follows the same sparse semantics as the filters — an unset field is
//! omitted from the serialized variable, which the API reads as "leave
//! unchanged" on updates.

use crate::types::ApprovalStatus;
use crate::types::AssetStatus;
use crate::types::ClientStatus;
use crate::types::ProjectPriority;
use crate::types::ProjectStatus;
use crate::types::TaskStatus;
use crate::types::TicketPriority;
use crate::types::TicketStatus;
use crate::types::UserRole;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClientInput {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: Option<ClientStatus>,
    pub billing_address: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub custom_fields: Option<JsonMap<String, JsonValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactInput {
    pub client_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub is_primary: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SiteInput {
    pub client_id: String,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub timezone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AssetInput {
    pub client_id: String,
    pub name: String,
    pub site_id: Option<String>,
    pub asset_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub warranty_expiry: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub custom_fields: Option<JsonMap<String, JsonValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TicketInput {
    pub client_id: String,
    pub title: String,
    pub site_id: Option<String>,
    pub asset_id: Option<String>,
    pub contact_id: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assigned_to: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
    pub custom_fields: Option<JsonMap<String, JsonValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskInput {
    pub title: String,
    pub project_id: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TicketPriority>,
    pub assigned_to: Option<String>,
    pub assigned_to_team: Option<String>,
    pub parent_task_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub estimated_hours: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub custom_fields: Option<JsonMap<String, JsonValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProjectInput {
    pub client_id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<ProjectPriority>,
    pub contract_id: Option<String>,
    pub site_id: Option<String>,
    pub assigned_to: Option<String>,
    pub manager_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub budget: Option<f64>,
    pub billing_rate: Option<f64>,
    pub progress_percentage: Option<u8>,
    pub estimated_hours: Option<f64>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub custom_fields: Option<JsonMap<String, JsonValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub is_active: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub custom_fields: Option<JsonMap<String, JsonValue>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TimeEntryInput {
    pub user_id: String,
    pub hours: f64,
    pub ticket_id: Option<String>,
    pub task_id: Option<String>,
    pub project_id: Option<String>,
    pub description: Option<String>,
    pub date_logged: Option<DateTime<Utc>>,
    pub is_billable: Option<bool>,
    pub hourly_rate: Option<f64>,
    pub approval_status: Option<ApprovalStatus>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TimerInput {
    pub user_id: String,
    pub ticket_id: Option<String>,
    pub task_id: Option<String>,
    pub description: Option<String>,
    pub is_billable: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KnowledgeBaseCollectionInput {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KnowledgeBaseArticleInput {
    pub collection_id: String,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}
