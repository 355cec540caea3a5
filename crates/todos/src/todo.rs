use serde::{Deserialize, Serialize};

use cartkit_core::{DomainError, DomainResult, Entity, Reducer, TodoId};
use cartkit_events::Action;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Todo list state.
///
/// Ids come from `next_id`, which only ever grows, so a deleted id is never
/// handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoState {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starter list: one completed todo, two open.
    pub fn seeded() -> Self {
        let todos = vec![
            Todo {
                id: TodoId::new(1),
                text: "Learn React basics".to_string(),
                completed: true,
            },
            Todo {
                id: TodoId::new(2),
                text: "Understand hooks".to_string(),
                completed: false,
            },
            Todo {
                id: TodoId::new(3),
                text: "Build a project".to_string(),
                completed: false,
            },
        ];
        Self { todos, next_id: 4 }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Number of todos not yet completed.
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append an open todo. Blank text is rejected; text is stored as given.
    Add { text: String },
    /// Flip `completed`. Unknown ids are a no-op.
    Toggle(TodoId),
    /// Remove a todo. Unknown ids are a no-op.
    Delete(TodoId),
    /// Remove every completed todo.
    ClearCompleted,
}

impl Action for TodoAction {
    fn action_type(&self) -> &'static str {
        match self {
            TodoAction::Add { .. } => "todos.add",
            TodoAction::Toggle(_) => "todos.toggle",
            TodoAction::Delete(_) => "todos.delete",
            TodoAction::ClearCompleted => "todos.clear_completed",
        }
    }
}

pub fn try_apply(state: &TodoState, action: &TodoAction) -> DomainResult<TodoState> {
    match action {
        TodoAction::Add { text } => {
            if text.trim().is_empty() {
                return Err(DomainError::validation("todo text must not be blank"));
            }
            let next_id = state
                .next_id
                .checked_add(1)
                .ok_or_else(|| DomainError::invariant("todo ids exhausted"))?;

            let mut todos = state.todos.clone();
            todos.push(Todo {
                id: TodoId::new(state.next_id),
                text: text.clone(),
                completed: false,
            });
            Ok(TodoState { todos, next_id })
        }
        TodoAction::Toggle(id) => Ok(TodoState {
            todos: state
                .todos
                .iter()
                .map(|t| {
                    if t.id == *id {
                        Todo {
                            completed: !t.completed,
                            ..t.clone()
                        }
                    } else {
                        t.clone()
                    }
                })
                .collect(),
            next_id: state.next_id,
        }),
        TodoAction::Delete(id) => Ok(retain(state, |t| t.id != *id)),
        TodoAction::ClearCompleted => Ok(retain(state, |t| !t.completed)),
    }
}

pub fn apply(state: &TodoState, action: &TodoAction) -> TodoState {
    try_apply(state, action).unwrap_or_else(|_| state.clone())
}

fn retain(state: &TodoState, keep: impl Fn(&Todo) -> bool) -> TodoState {
    TodoState {
        todos: state.todos.iter().filter(|t| keep(t)).cloned().collect(),
        next_id: state.next_id,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Error = DomainError;

    fn initial_state(&self) -> TodoState {
        TodoState::empty()
    }

    fn reduce(&self, state: &TodoState, action: &TodoAction) -> DomainResult<TodoState> {
        try_apply(state, action)
    }
}
