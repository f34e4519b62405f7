use crate::domain::catalog::PolicyGroup;
use crate::domain::errors::ZeroBraveError;
use crate::domain::models::{GroupRow, SelectionSummary};
use serde_json::{Map, Value};

/// Unions the groups' tables in order; a later group wins on a shared key.
pub fn merge_groups<'a>(groups: impl IntoIterator<Item = &'a PolicyGroup>) -> Map<String, Value> {
    let mut out = Map::new();
    for g in groups {
        for (key, value) in g.policies {
            out.insert((*key).to_string(), (*value).into());
        }
    }
    out
}

/// Enabled flag per catalog group, kept in catalog order.
#[derive(Debug, Clone)]
pub struct Selection<'c> {
    catalog: &'c [PolicyGroup],
    enabled: Vec<bool>,
}

impl<'c> Selection<'c> {
    pub fn new(catalog: &'c [PolicyGroup]) -> Self {
        Self {
            catalog,
            enabled: vec![true; catalog.len()],
        }
    }

    pub fn catalog(&self) -> &'c [PolicyGroup] {
        self.catalog
    }

    #[cfg(test)]
    pub fn is_enabled(&self, id: &str) -> Option<bool> {
        self.catalog
            .iter()
            .position(|g| g.id == id)
            .map(|i| self.enabled[i])
    }

    /// 1-based, as shown in the menu. Returns the new flag, or `None` when out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.enabled.get_mut(index.checked_sub(1)?)?;
        *slot = !*slot;
        Some(*slot)
    }

    /// Any enabled → all off; none enabled → all on.
    pub fn toggle_all(&mut self) {
        let target = !self.enabled.iter().any(|e| *e);
        self.enabled.iter_mut().for_each(|e| *e = target);
    }

    pub fn set(&mut self, id: &str, on: bool) -> Result<(), ZeroBraveError> {
        let i = self
            .catalog
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| ZeroBraveError::UnknownGroup(id.to_string()))?;
        self.enabled[i] = on;
        Ok(())
    }

    pub fn enabled_groups(&self) -> impl Iterator<Item = &'c PolicyGroup> + '_ {
        self.catalog
            .iter()
            .zip(self.enabled.iter())
            .filter(|(_, on)| **on)
            .map(|(g, _)| g)
    }

    /// Rebuilt on every call; never cached across toggles.
    pub fn build_document(&self) -> Map<String, Value> {
        merge_groups(self.enabled_groups())
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            enabled_groups: self.enabled.iter().filter(|e| **e).count(),
            total_groups: self.catalog.len(),
            policies: self.build_document().len(),
        }
    }

    pub fn rows(&self) -> Vec<GroupRow> {
        self.catalog
            .iter()
            .zip(self.enabled.iter())
            .enumerate()
            .map(|(i, (g, on))| GroupRow {
                index: i + 1,
                id: g.id.to_string(),
                tag: g.tag.to_string(),
                name: g.name.to_string(),
                description: g.description.to_string(),
                policies: g.policies.len(),
                enabled: *on,
            })
            .collect()
    }
}
