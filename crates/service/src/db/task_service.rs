use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::task::{self, DEFAULT_PRIORITY, DEFAULT_STATUS};
use crate::{db::{non_blank, LIST_LIMIT}, errors::ServiceError};

/// Body of task create and replace. Missing priority/status take the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remind_at: String,
}

impl TaskInput {
    fn priority(&self) -> String {
        self.priority.clone().unwrap_or_else(|| DEFAULT_PRIORITY.to_string())
    }

    fn status(&self) -> String {
        self.status.clone().unwrap_or_else(|| DEFAULT_STATUS.to_string())
    }
}

/// Query-string filters for the task list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub assignee: Option<String>,
}

pub async fn list_tasks(db: &DatabaseConnection, filter: &TaskFilter) -> Result<Vec<task::Model>, ServiceError> {
    let mut q = task::Entity::find();
    if let Some(s) = non_blank(filter.status.as_deref()) {
        q = q.filter(task::Column::Status.eq(s));
    }
    if let Some(a) = non_blank(filter.assignee.as_deref()) {
        q = q.filter(task::Column::Assignee.eq(a));
    }
    let rows = q
        .order_by_desc(task::Column::CreatedAt)
        .limit(LIST_LIMIT)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn create_task(db: &DatabaseConnection, input: TaskInput) -> Result<task::Model, ServiceError> {
    let now = Utc::now();
    let (priority, status) = (input.priority(), input.status());
    let am = task::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        due_date: Set(input.due_date),
        assignee: Set(input.assignee),
        priority: Set(priority),
        status: Set(status),
        remind_at: Set(input.remind_at),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn replace_task(db: &DatabaseConnection, id: Uuid, input: TaskInput) -> Result<task::Model, ServiceError> {
    let mut am: task::ActiveModel = task::Entity::find_by_id(id)
        .one(db).await?
        .ok_or_else(|| ServiceError::not_found("Task"))?
        .into();
    am.priority = Set(input.priority());
    am.status = Set(input.status());
    am.title = Set(input.title);
    am.description = Set(input.description);
    am.due_date = Set(input.due_date);
    am.assignee = Set(input.assignee);
    am.remind_at = Set(input.remind_at);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

pub async fn delete_task(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = task::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Task"));
    }
    Ok(())
}
