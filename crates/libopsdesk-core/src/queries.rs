//! Prebuilt common operations: ready-to-send document + variables pairs for
//! the requests most callers issue, each a thin composition over the
//! resource builders.

use crate::operation::DetailLevel;
use crate::operation::DocumentBuildError;
use crate::operation::ResourceQueryBuilder;
use crate::operation::descriptors;
use crate::types::AssetFilter;
use crate::types::AssetStatus;
use crate::types::ClientFilter;
use crate::types::ClientStatus;
use crate::types::PaginationArgs;
use crate::types::PaginationError;
use crate::types::SortArgs;
use crate::types::TicketFilter;
use crate::types::TicketPriority;
use crate::types::TicketStatus;
use chrono::DateTime;
use chrono::Utc;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use thiserror::Error;

type Result<T> = std::result::Result<T, CommonQueryError>;

/// A generated operation document paired with its variables map.
pub type PreparedQuery = (String, JsonMap<String, JsonValue>);

#[derive(Debug, Error)]
pub enum CommonQueryError {
    #[error(transparent)]
    Build(#[from] DocumentBuildError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

/// All clients, paginated and sorted.
pub fn list_all_clients(
    page: u32,
    page_size: u32,
    sort: SortArgs,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::CLIENT, detail_level)
        .list::<ClientFilter>(None, Some(&pagination), Some(&sort))?;
    Ok((builder.build_list(), builder.variables()))
}

/// Only clients with `ACTIVE` status.
pub fn list_active_clients(
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let filter = ClientFilter {
        status: Some(ClientStatus::Active),
        ..ClientFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::CLIENT, detail_level)
        .list(Some(&filter), Some(&pagination), None)?;
    Ok((builder.build_list(), builder.variables()))
}

/// Clients whose name matches `name_query`.
pub fn search_clients_by_name(
    name_query: impl Into<String>,
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let filter = ClientFilter {
        name: Some(name_query.into()),
        ..ClientFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::CLIENT, detail_level)
        .list(Some(&filter), Some(&pagination), None)?;
    Ok((builder.build_list(), builder.variables()))
}

pub fn get_client_by_id(
    client_id: impl Into<String>,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let builder = ResourceQueryBuilder::new(&descriptors::CLIENT, detail_level)
        .get(client_id)?;
    Ok((builder.build_get(), builder.variables()))
}

/// All tickets currently in `OPEN` status, newest first.
pub fn list_open_tickets(
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
    include_comments: bool,
) -> Result<PreparedQuery> {
    let filter = TicketFilter {
        status: Some(TicketStatus::Open),
        ..TicketFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let mut builder = ResourceQueryBuilder::new(&descriptors::TICKET, detail_level);
    if include_comments {
        builder = builder.with_section("comments");
    }
    let builder = builder.list(
        Some(&filter),
        Some(&pagination),
        Some(&SortArgs::descending("createdAt")),
    )?;
    Ok((builder.build_list(), builder.variables()))
}

/// Tickets for one client, optionally narrowed by status.
pub fn list_tickets_by_client(
    client_id: impl Into<String>,
    status: Option<TicketStatus>,
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let filter = TicketFilter {
        client_id: Some(client_id.into()),
        status,
        ..TicketFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::TICKET, detail_level)
        .list(Some(&filter), Some(&pagination), None)?;
    Ok((builder.build_list(), builder.variables()))
}

/// Urgent-priority tickets, highest priority first.
pub fn list_urgent_tickets(
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let filter = TicketFilter {
        priority: Some(TicketPriority::Urgent),
        ..TicketFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::TICKET, detail_level)
        .list(
            Some(&filter),
            Some(&pagination),
            Some(&SortArgs::descending("priority")),
        )?;
    Ok((builder.build_list(), builder.variables()))
}

/// Tickets whose due date has passed as of `as_of`, oldest due first.
pub fn list_overdue_tickets(
    as_of: DateTime<Utc>,
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let filter = TicketFilter {
        due_before: Some(as_of),
        ..TicketFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::TICKET, detail_level)
        .list(
            Some(&filter),
            Some(&pagination),
            Some(&SortArgs::ascending("dueDate")),
        )?;
    Ok((builder.build_list(), builder.variables()))
}

pub fn get_ticket_by_id(
    ticket_id: impl Into<String>,
    detail_level: DetailLevel,
    include_comments: bool,
) -> Result<PreparedQuery> {
    let mut builder = ResourceQueryBuilder::new(&descriptors::TICKET, detail_level);
    if include_comments {
        builder = builder.with_section("comments");
    }
    let builder = builder.get(ticket_id)?;
    Ok((builder.build_get(), builder.variables()))
}

/// Assets belonging to one client.
pub fn list_assets_by_client(
    client_id: impl Into<String>,
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let filter = AssetFilter {
        client_id: Some(client_id.into()),
        ..AssetFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::ASSET, detail_level)
        .list(Some(&filter), Some(&pagination), None)?;
    Ok((builder.build_list(), builder.variables()))
}

/// Only assets with `ACTIVE` status.
pub fn list_active_assets(
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let filter = AssetFilter {
        status: Some(AssetStatus::Active),
        ..AssetFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::ASSET, detail_level)
        .list(Some(&filter), Some(&pagination), None)?;
    Ok((builder.build_list(), builder.variables()))
}

/// Assets of one type (e.g. `"SERVER"`), sorted by name.
pub fn search_assets_by_type(
    asset_type: impl Into<String>,
    page: u32,
    page_size: u32,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let filter = AssetFilter {
        asset_type: Some(asset_type.into()),
        ..AssetFilter::default()
    };
    let pagination = PaginationArgs::new(page, page_size)?;
    let builder = ResourceQueryBuilder::new(&descriptors::ASSET, detail_level)
        .list(
            Some(&filter),
            Some(&pagination),
            Some(&SortArgs::ascending("name")),
        )?;
    Ok((builder.build_list(), builder.variables()))
}

pub fn get_asset_by_id(
    asset_id: impl Into<String>,
    detail_level: DetailLevel,
) -> Result<PreparedQuery> {
    let builder = ResourceQueryBuilder::new(&descriptors::ASSET, detail_level)
        .get(asset_id)?;
    Ok((builder.build_get(), builder.variables()))
}

#[cfg(test)]
mod tests;
