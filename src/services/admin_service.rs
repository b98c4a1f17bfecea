use std::sync::Arc;

use crate::errors::ServiceError;
use crate::services::validation;
use crate::stores::CatalogStore;
use crate::types::db::{category, program, user, InterestLevel};

/// Admin service for catalog management, bound to one actor
///
/// Thin orchestrator over the validation rules and the catalog store:
/// every mutating call sanitizes its inputs, validates them, then
/// delegates to the store with the bound actor. The store re-checks the
/// ADMIN role on each call, so constructing this service with a
/// non-admin actor yields Authorization errors rather than a panic.
pub struct AdminService {
    catalog_store: Arc<CatalogStore>,
    actor: user::Model,
}

impl AdminService {
    pub fn new(catalog_store: Arc<CatalogStore>, actor: user::Model) -> Self {
        Self { catalog_store, actor }
    }

    pub fn actor(&self) -> &user::Model {
        &self.actor
    }

    pub async fn list_programs(&self) -> Result<Vec<program::Model>, ServiceError> {
        self.catalog_store.list_programs().await
    }

    pub async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        self.catalog_store.list_categories().await
    }

    /// Create a category explicitly
    pub async fn create_category(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<category::Model, ServiceError> {
        let name = sanitize(name);
        if name.is_empty() {
            return Err(ServiceError::validation("Category name is required."));
        }
        let description = sanitize(description.unwrap_or(""));
        validation::validate_category(&name, &description)?;

        self.catalog_store
            .add_category(&self.actor, &name, &description)
            .await
    }

    /// Look up a category by name, creating it when missing
    ///
    /// The only recovery behavior in the system: idempotent, so two
    /// calls with the same name return the same row.
    pub async fn ensure_category_exists(&self, name: &str) -> Result<category::Model, ServiceError> {
        let name = sanitize(name);
        if name.is_empty() {
            return Err(ServiceError::validation("Category is required."));
        }

        if let Some(existing) = self.catalog_store.find_category_by_name(&name).await? {
            return Ok(existing);
        }

        validation::validate_category(&name, "")?;
        self.catalog_store.add_category(&self.actor, &name, "").await
    }

    /// Add a program under an already-resolved category
    ///
    /// # Arguments
    /// * `name` - Program name; trimmed, then validated
    /// * `category` - Resolved category; a missing selection is a
    ///   validation failure before any store call
    /// * `interest` - Required analytical interest; likewise mandatory
    pub async fn add_program(
        &self,
        name: &str,
        category: Option<&category::Model>,
        min_salary: f64,
        min_previous_gpa: f64,
        interest: Option<InterestLevel>,
        post_degree_gpa: f64,
    ) -> Result<program::Model, ServiceError> {
        let name = sanitize(name);
        let category =
            category.ok_or_else(|| ServiceError::validation("Category selection is required."))?;
        let interest =
            interest.ok_or_else(|| ServiceError::validation("Interest level is required."))?;
        validation::validate_program(&name, min_salary, min_previous_gpa, post_degree_gpa)?;

        self.catalog_store
            .add_program(
                &self.actor,
                &name,
                category.id,
                min_salary,
                min_previous_gpa,
                interest,
                post_degree_gpa,
            )
            .await
    }

    /// Update an existing program
    pub async fn update_program(
        &self,
        program_id: i32,
        name: &str,
        category: Option<&category::Model>,
        min_salary: f64,
        min_previous_gpa: f64,
        interest: Option<InterestLevel>,
        post_degree_gpa: f64,
    ) -> Result<(), ServiceError> {
        if program_id <= 0 {
            return Err(ServiceError::validation("Invalid program identifier."));
        }
        let name = sanitize(name);
        let category =
            category.ok_or_else(|| ServiceError::validation("Category selection is required."))?;
        let interest =
            interest.ok_or_else(|| ServiceError::validation("Interest level is required."))?;
        validation::validate_program(&name, min_salary, min_previous_gpa, post_degree_gpa)?;

        self.catalog_store
            .update_program(
                &self.actor,
                program_id,
                &name,
                category.id,
                min_salary,
                min_previous_gpa,
                interest,
                post_degree_gpa,
            )
            .await
    }

    pub async fn delete_program(&self, program_id: i32) -> Result<(), ServiceError> {
        if program_id <= 0 {
            return Err(ServiceError::validation("Invalid program identifier."));
        }
        self.catalog_store.delete_program(&self.actor, program_id).await
    }

    pub async fn delete_category(&self, category_id: i32) -> Result<(), ServiceError> {
        if category_id <= 0 {
            return Err(ServiceError::validation("Invalid category identifier."));
        }
        self.catalog_store.delete_category(&self.actor, category_id).await
    }
}

fn sanitize(value: &str) -> String {
    value.trim().to_string()
}
