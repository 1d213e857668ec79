use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Employee;

/// Shared state handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: EmployeeStore,
}

/// In-memory employee collection. Cloning is cheap; all clones share the
/// same map.
#[derive(Clone, Default)]
pub struct EmployeeStore {
    inner: Arc<RwLock<HashMap<Uuid, Employee>>>,
}

impl EmployeeStore {
    pub async fn list(&self) -> Vec<Employee> {
        self.inner.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: Uuid) -> Option<Employee> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Inserts a new record. Returns `false` without modifying the map when
    /// the id is already taken.
    pub async fn insert(&self, employee: Employee) -> bool {
        let mut map = self.inner.write().await;
        if map.contains_key(&employee.id) {
            return false;
        }
        map.insert(employee.id, employee);
        true
    }

    /// Mutates an existing record in place, returning the updated copy.
    pub async fn update(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Employee),
    ) -> Option<Employee> {
        let mut map = self.inner.write().await;
        let employee = map.get_mut(&id)?;
        apply(employee);
        Some(employee.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<Employee> {
        self.inner.write().await.remove(&id)
    }
}
