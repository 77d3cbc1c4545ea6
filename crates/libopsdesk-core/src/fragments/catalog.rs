//! The standard fragment catalog: every reusable field-selection block the
//! resource builders can pull in, plus the per-resource detail-level
//! selector functions.
//!
//! Field blocks use the wire format's lowerCamelCase names. Dependency
//! edges mirror the `...Spread`s inside each block.

use crate::fragments::Fragment;
use crate::operation::DetailLevel;

/// Every fragment in the standard catalog, in registration order.
///
/// The returned fragments are fed into the process-wide registry exactly
/// once (see [`registry`](crate::fragments::registry)); the function itself
/// is cheap but not cached.
pub fn standard_fragments() -> Vec<Fragment> {
    vec![
        Fragment::new(
            "BaseFields",
            "BaseModel",
            r#"
    id
    createdAt
    updatedAt
    "#,
            &[],
        ),
        Fragment::new(
            "PaginationInfo",
            "PaginationInfo",
            r#"
    page
    pageSize
    total
    hasNextPage
    hasPreviousPage
    "#,
            &[],
        ),
        // Clients
        Fragment::new(
            "ClientSummaryFields",
            "Client",
            r#"
    id
    name
    email
    status
    "#,
            &[],
        ),
        Fragment::new(
            "ClientCoreFields",
            "Client",
            r#"
    ...BaseFields
    name
    email
    phone
    status
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "ClientFullFields",
            "Client",
            r#"
    ...ClientCoreFields
    address
    billingAddress
    notes
    tags
    customFields
    "#,
            &["ClientCoreFields"],
        ),
        // Contacts
        Fragment::new(
            "ContactCoreFields",
            "Contact",
            r#"
    ...BaseFields
    clientId
    firstName
    lastName
    email
    phone
    isPrimary
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "ContactFullFields",
            "Contact",
            r#"
    ...ContactCoreFields
    title
    notes
    "#,
            &["ContactCoreFields"],
        ),
        // Sites
        Fragment::new(
            "SiteCoreFields",
            "Site",
            r#"
    ...BaseFields
    clientId
    name
    address
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "SiteFullFields",
            "Site",
            r#"
    ...SiteCoreFields
    description
    timezone
    notes
    "#,
            &["SiteCoreFields"],
        ),
        // Assets
        Fragment::new(
            "AssetSummaryFields",
            "Asset",
            r#"
    id
    name
    assetType
    status
    manufacturer
    model
    "#,
            &[],
        ),
        Fragment::new(
            "AssetCoreFields",
            "Asset",
            r#"
    ...BaseFields
    clientId
    siteId
    name
    assetType
    status
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "AssetFullFields",
            "Asset",
            r#"
    ...AssetCoreFields
    manufacturer
    model
    serialNumber
    purchaseDate
    warrantyExpiry
    location
    notes
    customFields
    "#,
            &["AssetCoreFields"],
        ),
        // Tickets
        Fragment::new(
            "TicketSummaryFields",
            "Ticket",
            r#"
    id
    title
    status
    priority
    assignedTo
    createdAt
    dueDate
    "#,
            &[],
        ),
        Fragment::new(
            "TicketCoreFields",
            "Ticket",
            r#"
    ...BaseFields
    clientId
    siteId
    assetId
    contactId
    title
    status
    priority
    assignedTo
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "TicketFullFields",
            "Ticket",
            r#"
    ...TicketCoreFields
    description
    dueDate
    resolution
    timeSpent
    tags
    customFields
    "#,
            &["TicketCoreFields"],
        ),
        Fragment::new(
            "TicketCommentFields",
            "TicketComment",
            r#"
    ...BaseFields
    ticketId
    authorId
    authorName
    content
    isInternal
    timeSpent
    "#,
            &["BaseFields"],
        ),
        // Tasks
        Fragment::new(
            "TaskSummaryFields",
            "Task",
            r#"
    id
    title
    status
    priority
    assignedTo
    dueDate
    progressPercentage
    createdAt
    updatedAt
    "#,
            &[],
        ),
        Fragment::new(
            "TaskCoreFields",
            "Task",
            r#"
    ...BaseFields
    title
    description
    status
    priority
    projectId
    assignedTo
    assignedToTeam
    creatorId
    parentTaskId
    dueDate
    startDate
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "TaskFullFields",
            "Task",
            r#"
    ...TaskCoreFields
    subtaskCount
    completedAt
    estimatedHours
    actualHours
    recurrenceType
    recurrenceInterval
    recurrenceEndDate
    timeEntriesCount
    totalTimeLogged
    billableTime
    labels
    tags
    customFields
    progressPercentage
    isMilestone
    isTemplate
    templateId
    attachmentCount
    commentCount
    "#,
            &["TaskCoreFields"],
        ),
        Fragment::new(
            "TaskCommentFields",
            "TaskComment",
            r#"
    ...BaseFields
    taskId
    authorId
    authorName
    content
    isInternal
    timeLogged
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "TaskTimeEntryFields",
            "TaskTimeEntry",
            r#"
    ...BaseFields
    taskId
    userId
    userName
    hours
    description
    dateLogged
    isBillable
    hourlyRate
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "TaskTemplateFields",
            "TaskTemplate",
            r#"
    ...BaseFields
    name
    description
    defaultPriority
    estimatedHours
    defaultAssigneeId
    defaultTags
    defaultCustomFields
    checklistItems
    "#,
            &["BaseFields"],
        ),
        // Projects
        Fragment::new(
            "ProjectSummaryFields",
            "Project",
            r#"
    id
    name
    status
    priority
    assignedTo
    dueDate
    progressPercentage
    "#,
            &[],
        ),
        Fragment::new(
            "ProjectCoreFields",
            "Project",
            r#"
    ...BaseFields
    clientId
    name
    status
    priority
    assignedTo
    managerId
    startDate
    dueDate
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "ProjectFullFields",
            "Project",
            r#"
    ...ProjectCoreFields
    description
    contractId
    siteId
    endDate
    budget
    billingRate
    progressPercentage
    estimatedHours
    actualHours
    notes
    tags
    customFields
    "#,
            &["ProjectCoreFields"],
        ),
        Fragment::new(
            "ProjectMilestoneFields",
            "ProjectMilestone",
            r#"
    ...BaseFields
    projectId
    name
    dueDate
    completionDate
    isCompleted
    progressPercentage
    orderIndex
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "ProjectTaskFields",
            "ProjectTask",
            r#"
    ...BaseFields
    projectId
    milestoneId
    name
    status
    priority
    assignedTo
    dueDate
    progressPercentage
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "ProjectTimeEntryFields",
            "ProjectTimeEntry",
            r#"
    ...BaseFields
    projectId
    taskId
    userId
    userName
    description
    hours
    startTime
    endTime
    isBillable
    "#,
            &["BaseFields"],
        ),
        // Users (technicians and agents)
        Fragment::new(
            "UserSummaryFields",
            "User",
            r#"
    id
    name
    email
    role
    isActive
    "#,
            &[],
        ),
        Fragment::new(
            "UserCoreFields",
            "User",
            r#"
    ...BaseFields
    name
    email
    role
    department
    isActive
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "UserFullFields",
            "User",
            r#"
    ...UserCoreFields
    phone
    timezone
    avatarUrl
    lastLoginAt
    permissions
    tags
    customFields
    "#,
            &["UserCoreFields"],
        ),
        // Standalone time entries (worklog)
        Fragment::new(
            "TimeEntrySummaryFields",
            "TimeEntry",
            r#"
    id
    userId
    hours
    dateLogged
    isBillable
    "#,
            &[],
        ),
        Fragment::new(
            "TimeEntryCoreFields",
            "TimeEntry",
            r#"
    ...BaseFields
    userId
    userName
    ticketId
    taskId
    projectId
    description
    hours
    dateLogged
    isBillable
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "TimeEntryFullFields",
            "TimeEntry",
            r#"
    ...TimeEntryCoreFields
    hourlyRate
    billableAmount
    approvalStatus
    approvedBy
    notes
    "#,
            &["TimeEntryCoreFields"],
        ),
        // Timers
        Fragment::new(
            "TimerCoreFields",
            "Timer",
            r#"
    ...BaseFields
    userId
    ticketId
    taskId
    state
    startedAt
    elapsedSeconds
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "TimerFullFields",
            "Timer",
            r#"
    ...TimerCoreFields
    pausedAt
    stoppedAt
    description
    isBillable
    "#,
            &["TimerCoreFields"],
        ),
        // Knowledge base
        Fragment::new(
            "KBCollectionCoreFields",
            "KnowledgeBaseCollection",
            r#"
    ...BaseFields
    name
    description
    parentId
    isPublic
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "KBCollectionFullFields",
            "KnowledgeBaseCollection",
            r#"
    ...KBCollectionCoreFields
    articleCount
    "#,
            &["KBCollectionCoreFields"],
        ),
        Fragment::new(
            "KBArticleSummaryFields",
            "KnowledgeBaseArticle",
            r#"
    id
    title
    summary
    authorName
    isPublished
    viewCount
    createdAt
    updatedAt
    "#,
            &[],
        ),
        Fragment::new(
            "KBArticleCoreFields",
            "KnowledgeBaseArticle",
            r#"
    ...BaseFields
    collectionId
    title
    summary
    authorId
    authorName
    isPublished
    isFeatured
    "#,
            &["BaseFields"],
        ),
        Fragment::new(
            "KBArticleFullFields",
            "KnowledgeBaseArticle",
            r#"
    ...KBArticleCoreFields
    content
    viewCount
    tags
    "#,
            &["KBArticleCoreFields"],
        ),
    ]
}

pub fn client_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary => "ClientSummaryFields",
        DetailLevel::Core => "ClientCoreFields",
        DetailLevel::Full => "ClientFullFields",
    }
}

/// Contacts have no summary projection; summary falls back to core.
pub fn contact_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary | DetailLevel::Core => "ContactCoreFields",
        DetailLevel::Full => "ContactFullFields",
    }
}

/// Sites have no summary projection; summary falls back to core.
pub fn site_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary | DetailLevel::Core => "SiteCoreFields",
        DetailLevel::Full => "SiteFullFields",
    }
}

pub fn asset_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary => "AssetSummaryFields",
        DetailLevel::Core => "AssetCoreFields",
        DetailLevel::Full => "AssetFullFields",
    }
}

pub fn ticket_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary => "TicketSummaryFields",
        DetailLevel::Core => "TicketCoreFields",
        DetailLevel::Full => "TicketFullFields",
    }
}

pub fn task_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary => "TaskSummaryFields",
        DetailLevel::Core => "TaskCoreFields",
        DetailLevel::Full => "TaskFullFields",
    }
}

pub fn project_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary => "ProjectSummaryFields",
        DetailLevel::Core => "ProjectCoreFields",
        DetailLevel::Full => "ProjectFullFields",
    }
}

pub fn user_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary => "UserSummaryFields",
        DetailLevel::Core => "UserCoreFields",
        DetailLevel::Full => "UserFullFields",
    }
}

pub fn time_entry_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary => "TimeEntrySummaryFields",
        DetailLevel::Core => "TimeEntryCoreFields",
        DetailLevel::Full => "TimeEntryFullFields",
    }
}

/// Timers have no summary projection; summary falls back to core.
pub fn timer_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary | DetailLevel::Core => "TimerCoreFields",
        DetailLevel::Full => "TimerFullFields",
    }
}

/// Knowledge-base collections have no summary projection; summary falls
/// back to core.
pub fn kb_collection_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary | DetailLevel::Core => "KBCollectionCoreFields",
        DetailLevel::Full => "KBCollectionFullFields",
    }
}

pub fn kb_article_fragment(detail_level: DetailLevel) -> &'static str {
    match detail_level {
        DetailLevel::Summary => "KBArticleSummaryFields",
        DetailLevel::Core => "KBArticleCoreFields",
        DetailLevel::Full => "KBArticleFullFields",
    }
}
