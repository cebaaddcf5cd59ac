//! The authoritative plan collection and its persistence.

use crate::core::id::generate_id;
use crate::core::stats::DashboardStats;
use crate::errors::AppResult;
use crate::models::{LessonPlan, NewLessonPlan, PlanStatus};
use crate::storage::KeyValueStore;
use chrono::{SecondsFormat, Utc};

/// Blocking yes/no question asked before a destructive operation.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(LessonPlan),
    Cancelled,
    NotFound,
}

/// In-memory plan list mirrored to a key-value store.
///
/// Every mutation rewrites the full collection under `key`.
pub struct PlanStore<S: KeyValueStore> {
    storage: S,
    key: String,
    plans: Vec<LessonPlan>,
    recovered_from_corruption: Option<String>,
}

impl<S: KeyValueStore> PlanStore<S> {
    /// Read the persisted collection. A missing, `null` or unparseable value
    /// yields an empty collection; only backend failures are errors.
    pub fn load(storage: S, key: &str) -> AppResult<Self> {
        let raw = storage.get_item(key)?;

        let (plans, recovered_from_corruption) = match raw {
            None => (Vec::new(), None),
            Some(text) => match serde_json::from_str::<Option<Vec<LessonPlan>>>(&text) {
                Ok(list) => (list.unwrap_or_default(), None),
                Err(e) => (Vec::new(), Some(e.to_string())),
            },
        };

        Ok(Self {
            storage,
            key: key.to_string(),
            plans,
            recovered_from_corruption,
        })
    }

    pub fn plans(&self) -> &[LessonPlan] {
        &self.plans
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Parse error of the persisted value, when `load` had to discard it.
    pub fn recovered_from_corruption(&self) -> Option<&str> {
        self.recovered_from_corruption.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&LessonPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn create(&mut self, fields: NewLessonPlan) -> AppResult<LessonPlan> {
        let mut id = generate_id();
        while self.get(&id).is_some() {
            id = generate_id();
        }
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let plan = fields.into_plan(id, created_at);
        self.plans.push(plan.clone());
        self.save()?;
        Ok(plan)
    }

    /// Remove the plan with `id` after `confirm` accepts.
    /// Unknown ids are a no-op and never prompt.
    pub fn delete(&mut self, id: &str, confirm: &mut dyn Confirm) -> AppResult<DeleteOutcome> {
        let Some(pos) = self.plans.iter().position(|p| p.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        let prompt = format!(
            "Delete lesson plan '{}' ({} {})? This action is irreversible.",
            id, self.plans[pos].subject, self.plans[pos].date
        );
        if !confirm.confirm(&prompt) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.plans.remove(pos);
        self.save()?;
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Flip Planned <-> Completed. Returns the new status, `None` if unknown.
    pub fn toggle_status(&mut self, id: &str) -> AppResult<Option<PlanStatus>> {
        let Some(plan) = self.plans.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        plan.status = plan.status.toggled();
        let status = plan.status;
        self.save()?;
        Ok(Some(status))
    }

    /// Plans whose subject, class/section or topic contains `term`
    /// (trimmed, case-insensitive), in stored order.
    pub fn filter(&self, term: &str) -> Vec<LessonPlan> {
        let needle = term.trim().to_lowercase();
        self.plans
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn aggregate(&self) -> DashboardStats {
        DashboardStats::compute(&self.plans)
    }

    fn save(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.plans)?;
        self.storage.set_item(&self.key, &json)?;
        self.recovered_from_corruption = None;
        Ok(())
    }
}
