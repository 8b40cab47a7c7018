//! View state held by the presentation layer for one session.

use crate::model::task::{IsoDate, Task, TaskDraft, TaskId};
use crate::provider::clock::Clock;
use crate::provider::ids::IdGenerator;
use crate::query::{derive_view, SortMode, StatusFilter, TaskView, ViewParams};
use crate::repo::task_repo::TaskRepository;
use crate::service::task_store::{Mutation, StoreError, StoreResult, TaskStore};
use log::debug;

/// Filter, search, sort and edit-draft state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    params: ViewParams,
    editing: Option<TaskId>,
    draft: TaskDraft,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn active_filter(&self) -> StatusFilter {
        self.params.filter
    }

    pub fn set_active_filter(&mut self, filter: StatusFilter) {
        self.params.filter = filter;
    }

    pub fn search_query(&self) -> &str {
        &self.params.query
    }

    /// Stores the query trimmed; matching is case-insensitive downstream.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.params.query = query.into().trim().to_string();
    }

    pub fn sort_mode(&self) -> SortMode {
        self.params.sort
    }

    pub fn set_sort_mode(&mut self, sort: SortMode) {
        self.params.sort = sort;
    }

    pub fn editing_task_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    /// Enters edit mode with the draft populated from `task`.
    pub fn begin_edit(&mut self, task: &Task) {
        debug!("event=edit_begin module=controller task_id={}", task.id);
        self.draft = TaskDraft::from_task(task);
        self.editing = Some(task.id.clone());
    }

    /// Looks up `id` in the store and enters edit mode for it.
    ///
    /// # Errors
    /// - `NotFound` when the store has no such task; state is unchanged.
    pub fn begin_edit_by_id<R, C, G>(
        &mut self,
        store: &TaskStore<R, C, G>,
        id: &str,
    ) -> StoreResult<()>
    where
        R: TaskRepository,
        C: Clock,
        G: IdGenerator,
    {
        let task = store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.begin_edit(task);
        Ok(())
    }

    /// Leaves edit mode and clears the draft without touching the store.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Submits the draft: `update` while editing, `add` otherwise.
    ///
    /// On success the draft is cleared and edit mode exits. On error both
    /// are kept so the user can correct the input.
    pub fn submit<R, C, G>(&mut self, store: &mut TaskStore<R, C, G>) -> StoreResult<Mutation<Task>>
    where
        R: TaskRepository,
        C: Clock,
        G: IdGenerator,
    {
        let outcome = match self.editing.as_deref() {
            Some(id) => store.update(id, &self.draft)?,
            None => store.add(&self.draft)?,
        };
        self.cancel_edit();
        Ok(outcome)
    }

    /// Removes a task, leaving edit mode if it was the one being edited.
    pub fn remove<R, C, G>(
        &mut self,
        store: &mut TaskStore<R, C, G>,
        id: &str,
    ) -> StoreResult<Mutation<Task>>
    where
        R: TaskRepository,
        C: Clock,
        G: IdGenerator,
    {
        let outcome = store.remove(id)?;
        if self.editing.as_deref() == Some(id) {
            self.cancel_edit();
        }
        Ok(outcome)
    }

    /// Computes the view for the current parameters.
    pub fn view<'a, R, C, G>(&self, store: &'a TaskStore<R, C, G>, today: &IsoDate) -> TaskView<'a>
    where
        R: TaskRepository,
        C: Clock,
        G: IdGenerator,
    {
        derive_view(store.all(), &self.params, today)
    }
}
