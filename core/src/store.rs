//! Todo list state kept in sync with the REST backend.
//!
//! # Design
//! `TodoStore` owns two signals, the full list and the active filter, and
//! mutates the list only after the server has answered a request
//! successfully. Every HTTP or transport failure is logged and swallowed at
//! this boundary: local state just stays as it was. The visible list is never
//! stored; `visible()` derives it from both signals on every call.
//!
//! `toggle_all` sends one PATCH per item with no transaction around them, so
//! a partial failure leaves whichever items the server did confirm updated.

use tracing::{debug, error};

use crate::client::TodoClient;
use crate::error::{ApiError, StoreError};
use crate::filter;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::signal::Signal;
use crate::types::{CreateTodo, Filter, TodoCounts, TodoItem, UpdateTodo};

pub struct TodoStore<T> {
    client: TodoClient,
    transport: T,
    todos: Signal<Vec<TodoItem>>,
    filter: Signal<Filter>,
}

impl<T: Transport> TodoStore<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            todos: Signal::new(Vec::new()),
            filter: Signal::new(Filter::All),
        }
    }

    /// The list signal, for subscribing to changes or seeding state.
    pub fn todos_signal(&self) -> &Signal<Vec<TodoItem>> {
        &self.todos
    }

    pub fn filter_signal(&self) -> &Signal<Filter> {
        &self.filter
    }

    pub fn todos(&self) -> Vec<TodoItem> {
        self.todos.get()
    }

    pub fn filter(&self) -> Filter {
        self.filter.get()
    }

    pub fn visible(&self) -> Vec<TodoItem> {
        let current = self.filter.get();
        self.todos.with(|todos| filter::derive(todos, current))
    }

    pub fn counts(&self) -> TodoCounts {
        self.todos.with(|todos| filter::counts(todos))
    }

    pub fn search(&self, term: &str) -> Vec<TodoItem> {
        self.todos.with(|todos| filter::search(todos, term))
    }

    pub fn set_filter(&self, filter: Filter) {
        self.filter.set(filter);
    }

    /// Replace local state with the server's list. Returns false if the
    /// fetch failed.
    pub fn list(&self) -> bool {
        let request = self.client.build_list_todos();
        match self.send(request, |client, response| client.parse_list_todos(response)) {
            Ok(todos) => {
                debug!(count = todos.len(), "loaded todos");
                self.todos.set(todos);
                true
            }
            Err(err) => {
                error!(operation = "list", error = %err, "request failed");
                false
            }
        }
    }

    /// Create a todo from `text`. Blank text is ignored without a request.
    pub fn add(&self, text: &str) -> Option<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let input = CreateTodo {
            text: text.to_string(),
            is_completed: false,
        };
        let result = self
            .client
            .build_create_todo(&input)
            .and_then(|request| self.send(request, |client, response| client.parse_create_todo(response)));
        match result {
            Ok(created) => {
                debug!(id = %created.id, "added todo");
                self.todos.update(|todos| todos.push(created.clone()));
                Some(created)
            }
            Err(err) => {
                error!(operation = "add", error = %err, "request failed");
                None
            }
        }
    }

    /// Rename a todo. Blank text is ignored without a request. An id missing
    /// from local state still goes to the server; only the local replace is
    /// skipped.
    pub fn change_text(&self, id: &str, text: &str) -> Option<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.patch("change_text", id, &UpdateTodo::text(text))
    }

    /// Delete a todo. A 404 means it is already gone on the server, so it is
    /// dropped locally as well.
    pub fn remove(&self, id: &str) -> bool {
        let request = self.client.build_delete_todo(id);
        match self.send(request, |client, response| client.parse_delete_todo(response)) {
            Ok(()) => {}
            Err(ApiError::NotFound) => debug!(id, "todo already removed on server"),
            Err(err) => {
                error!(operation = "remove", id, error = %err, "request failed");
                return false;
            }
        }
        self.todos.update(|todos| todos.retain(|todo| todo.id != id));
        true
    }

    /// Flip `is_completed` on one todo.
    ///
    /// Fails without sending anything if `id` is not in local state. A
    /// failed request is logged and yields `Ok(None)`.
    pub fn toggle(&self, id: &str) -> Result<Option<TodoItem>, StoreError> {
        let current = self
            .todos
            .with(|todos| todos.iter().find(|todo| todo.id == id).map(|todo| todo.is_completed))
            .ok_or_else(|| StoreError::TodoNotFound(id.to_string()))?;
        Ok(self.patch("toggle", id, &UpdateTodo::completed(!current)))
    }

    /// Set every todo to `completed`, one request per item. Returns how many
    /// the server confirmed.
    pub fn toggle_all(&self, completed: bool) -> usize {
        let ids: Vec<String> = self
            .todos
            .with(|todos| todos.iter().map(|todo| todo.id.clone()).collect());
        let update = UpdateTodo::completed(completed);
        ids.iter()
            .filter(|id| self.patch("toggle_all", id, &update).is_some())
            .count()
    }

    fn patch(&self, operation: &'static str, id: &str, update: &UpdateTodo) -> Option<TodoItem> {
        let result = self
            .client
            .build_update_todo(id, update)
            .and_then(|request| self.send(request, |client, response| client.parse_update_todo(response)));
        match result {
            Ok(updated) => {
                debug!(operation, id, "updated todo");
                self.replace(id, updated.clone());
                Some(updated)
            }
            Err(err) => {
                error!(operation, id, error = %err, "request failed");
                None
            }
        }
    }

    fn replace(&self, id: &str, updated: TodoItem) {
        self.todos.update(|todos| {
            if let Some(slot) = todos.iter_mut().find(|todo| todo.id == id) {
                *slot = updated;
            }
        });
    }

    fn send<R>(
        &self,
        request: HttpRequest,
        parse: impl FnOnce(&TodoClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        parse(&self.client, response)
    }
}
