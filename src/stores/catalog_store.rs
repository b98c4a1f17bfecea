use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::ServiceError;
use crate::types::db::{category, program, user, InterestLevel};

const ADMIN_REQUIRED: &str = "Admin privileges are required for this operation.";
const PROGRAM_EXISTS: &str = "Program already exists.";
const CATEGORY_EXISTS: &str = "Category already exists.";
const PROGRAM_NOT_FOUND: &str = "Program not found.";
const CATEGORY_NOT_FOUND: &str = "Category not found.";

/// CatalogStore manages category and program rows
///
/// Every mutating operation takes the acting user and re-checks the
/// ADMIN role on each call; the actor is never held as ambient state.
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All programs, sorted by name ascending
    pub async fn list_programs(&self) -> Result<Vec<program::Model>, ServiceError> {
        program::Entity::find()
            .order_by_asc(program::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::database("list_programs", e))
    }

    /// All categories, sorted by name ascending
    pub async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::database("list_categories", e))
    }

    /// Case-insensitive exact-name category lookup
    pub async fn find_category_by_name(
        &self,
        name: &str,
    ) -> Result<Option<category::Model>, ServiceError> {
        category::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(category::Column::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::database("find_category_by_name", e))
    }

    /// Case-insensitive exact-name program lookup
    pub async fn find_program_by_name(
        &self,
        name: &str,
    ) -> Result<Option<program::Model>, ServiceError> {
        program::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(program::Column::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::database("find_program_by_name", e))
    }

    pub async fn find_program_by_id(&self, id: i32) -> Result<Option<program::Model>, ServiceError> {
        program::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::database("find_program_by_id", e))
    }

    /// Insert a category
    ///
    /// The unique index on `name` (case-insensitive) is the
    /// authoritative duplicate guard; its violation maps to Conflict.
    ///
    /// # Arguments
    /// * `actor` - Authenticated user; must hold the ADMIN role
    /// * `name` - Already-validated category name (stored trimmed)
    /// * `description` - Optional description; empty becomes NULL
    pub async fn add_category(
        &self,
        actor: &user::Model,
        name: &str,
        description: &str,
    ) -> Result<category::Model, ServiceError> {
        require_admin(actor)?;

        let description = description.trim();
        let new_category = category::ActiveModel {
            name: Set(name.trim().to_string()),
            description: Set(if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            }),
            ..Default::default()
        };

        new_category.insert(&self.db).await.map_err(|e| {
            if ServiceError::is_unique_violation(&e) {
                ServiceError::conflict(CATEGORY_EXISTS)
            } else {
                ServiceError::database("add_category", e)
            }
        })
    }

    /// Insert a program
    ///
    /// Pre-checks the name for a friendlier message; the unique index
    /// stays authoritative under concurrent admin sessions. A
    /// foreign-key violation means the category vanished between
    /// resolution and insert.
    pub async fn add_program(
        &self,
        actor: &user::Model,
        name: &str,
        category_id: i32,
        min_salary: f64,
        min_previous_gpa: f64,
        interest: InterestLevel,
        post_degree_gpa: f64,
    ) -> Result<program::Model, ServiceError> {
        require_admin(actor)?;

        if self.find_program_by_name(name).await?.is_some() {
            return Err(ServiceError::conflict(PROGRAM_EXISTS));
        }

        let new_program = program::ActiveModel {
            name: Set(name.trim().to_string()),
            category_id: Set(category_id),
            min_salary: Set(min_salary),
            min_previous_gpa: Set(min_previous_gpa),
            interest_level: Set(interest),
            post_degree_gpa: Set(post_degree_gpa),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        new_program.insert(&self.db).await.map_err(|e| {
            if ServiceError::is_unique_violation(&e) {
                ServiceError::conflict(PROGRAM_EXISTS)
            } else if ServiceError::is_foreign_key_violation(&e) {
                ServiceError::NotFound(CATEGORY_NOT_FOUND.to_string())
            } else {
                ServiceError::database("add_program", e)
            }
        })
    }

    /// Update a program in place
    ///
    /// Renaming to a name already used by a *different* program is a
    /// Conflict; an update target that vanished is NotFound.
    pub async fn update_program(
        &self,
        actor: &user::Model,
        program_id: i32,
        name: &str,
        category_id: i32,
        min_salary: f64,
        min_previous_gpa: f64,
        interest: InterestLevel,
        post_degree_gpa: f64,
    ) -> Result<(), ServiceError> {
        require_admin(actor)?;

        if let Some(existing) = self.find_program_by_name(name).await? {
            if existing.id != program_id {
                return Err(ServiceError::conflict(PROGRAM_EXISTS));
            }
        }

        let target = self
            .find_program_by_id(program_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(PROGRAM_NOT_FOUND.to_string()))?;

        let mut row: program::ActiveModel = target.into();
        row.name = Set(name.trim().to_string());
        row.category_id = Set(category_id);
        row.min_salary = Set(min_salary);
        row.min_previous_gpa = Set(min_previous_gpa);
        row.interest_level = Set(interest);
        row.post_degree_gpa = Set(post_degree_gpa);

        row.update(&self.db).await.map_err(|e| {
            if ServiceError::is_unique_violation(&e) {
                ServiceError::conflict(PROGRAM_EXISTS)
            } else if ServiceError::is_foreign_key_violation(&e) {
                ServiceError::NotFound(CATEGORY_NOT_FOUND.to_string())
            } else {
                ServiceError::database("update_program", e)
            }
        })?;

        Ok(())
    }

    /// Delete a program; deleting an id with no row is a no-op
    pub async fn delete_program(&self, actor: &user::Model, program_id: i32) -> Result<(), ServiceError> {
        require_admin(actor)?;

        program::Entity::delete_by_id(program_id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::database("delete_program", e))?;

        Ok(())
    }

    /// Delete a category; programs referencing it are removed by the
    /// ON DELETE CASCADE foreign key
    pub async fn delete_category(&self, actor: &user::Model, category_id: i32) -> Result<(), ServiceError> {
        require_admin(actor)?;

        category::Entity::delete_by_id(category_id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::database("delete_category", e))?;

        Ok(())
    }
}

fn require_admin(actor: &user::Model) -> Result<(), ServiceError> {
    if !actor.is_admin() {
        tracing::warn!(username = %actor.username, "privileged catalog call rejected");
        return Err(ServiceError::Authorization(ADMIN_REQUIRED.to_string()));
    }
    Ok(())
}
