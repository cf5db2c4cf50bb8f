use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Budget, BudgetItem};
use crate::errors::BudgetError;

/// Lifecycle state of a [`Quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    InEffect,
    /// Replaced by a newer quote.
    Superseded,
    Withdrawn,
}

/// A single priced line of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub description: String,
    pub amount: i64,
}

/// In-memory budget: an ordered list of uniquely described items with a
/// validity status and an optional expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub name: String,
    pub status: QuoteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<QuoteItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: QuoteStatus::InEffect,
            valid_until: None,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_valid_until(mut self, valid_until: DateTime<Utc>) -> Self {
        self.valid_until = Some(valid_until);
        self
    }

    pub fn supersede(&mut self) {
        self.set_status(QuoteStatus::Superseded);
    }

    pub fn withdraw(&mut self) {
        self.set_status(QuoteStatus::Withdrawn);
    }

    pub fn reinstate(&mut self) {
        self.set_status(QuoteStatus::InEffect);
    }

    pub fn expire_at(&mut self, when: DateTime<Utc>) {
        self.valid_until = Some(when);
        self.touch();
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_until.is_some_and(|until| now > until)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn set_status(&mut self, status: QuoteStatus) {
        self.status = status;
        self.touch();
    }

    fn position_of(&self, description: &str) -> Option<usize> {
        let normalized = normalize(description);
        self.items
            .iter()
            .position(|item| normalize(&item.description) == normalized)
    }
}

impl Budget for Quote {
    fn is_in_effect(&self) -> bool {
        self.status == QuoteStatus::InEffect && !self.is_expired_at(Utc::now())
    }

    /// Saturates at `i64::MAX` instead of wrapping.
    fn total_amount(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.amount))
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn add_item(&mut self, description: &str, amount: i64) -> Result<(), BudgetError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(BudgetError::InvalidItem("description is empty".into()));
        }
        if amount < 0 {
            return Err(BudgetError::InvalidItem(format!(
                "amount for `{}` is negative",
                trimmed
            )));
        }
        if self.position_of(trimmed).is_some() {
            return Err(BudgetError::DuplicateItem(trimmed.to_string()));
        }
        self.items.push(QuoteItem {
            description: trimmed.to_string(),
            amount,
        });
        self.touch();
        Ok(())
    }

    fn remove_item(&mut self, index: usize) -> Result<(), BudgetError> {
        if index >= self.items.len() {
            return Err(BudgetError::ItemNotFound(index));
        }
        self.items.remove(index);
        self.touch();
        Ok(())
    }

    fn item(&self, index: usize) -> Result<BudgetItem, BudgetError> {
        self.items
            .get(index)
            .map(|item| BudgetItem::new(item.description.clone(), item.amount.to_string()))
            .ok_or(BudgetError::ItemNotFound(index))
    }
}

fn normalize(description: &str) -> String {
    description.trim().to_ascii_lowercase()
}
