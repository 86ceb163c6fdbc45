//! Mock natural-language task agent. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use models::task::{DEFAULT_PRIORITY, DEFAULT_STATUS};

/// Characters of the prompt kept as the draft title.
pub const TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentInput {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
    pub assignee: String,
    pub remind_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentReply {
    pub success: bool,
    pub message: String,
    pub task: TaskDraft,
}

/// Turn free text into a task draft: the title is the first
/// [`TITLE_CHARS`] characters, the description the full text.
///
/// ```
/// let d = service::agent::draft_task("Book the hall for Friday");
/// assert_eq!(d.title, "Book the hall for Friday");
/// assert_eq!(d.status, "pending");
/// ```
pub fn draft_task(text: &str) -> TaskDraft {
    TaskDraft {
        title: text.chars().take(TITLE_CHARS).collect(),
        description: text.to_string(),
        priority: DEFAULT_PRIORITY.to_string(),
        status: DEFAULT_STATUS.to_string(),
        due_date: String::new(),
        assignee: String::new(),
        remind_at: String::new(),
    }
}

pub fn reply(input: &AgentInput) -> AgentReply {
    AgentReply {
        success: true,
        message: "Task drafted from natural language input (mock)".into(),
        task: draft_task(&input.text),
    }
}
