//! First-run fixture data: five categories and two programs per
//! category, inserted only when the catalog tables are empty.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, DatabaseConnection, PaginatorTrait, Set};

use crate::errors::ServiceError;
use crate::types::db::{category, program, InterestLevel};

struct SeedProgram {
    name: &'static str,
    category: &'static str,
    min_salary: f64,
    min_previous_gpa: f64,
    interest: InterestLevel,
    post_degree_gpa: f64,
}

const SEED_CATEGORIES: [(&str, &str); 5] = [
    ("Finance", "Corporate and investment finance degrees"),
    ("Marketing", "Consumer insight and brand strategy degrees"),
    ("Accounting", "Financial and managerial accounting degrees"),
    ("HRM", "Human resource management degrees"),
    ("Operations", "Operations and supply chain degrees"),
];

const SEED_PROGRAMS: [SeedProgram; 10] = [
    SeedProgram {
        name: "Corporate Finance",
        category: "Finance",
        min_salary: 4200.0,
        min_previous_gpa: 2.5,
        interest: InterestLevel::Medium,
        post_degree_gpa: 3.0,
    },
    SeedProgram {
        name: "Investment Banking",
        category: "Finance",
        min_salary: 4800.0,
        min_previous_gpa: 2.8,
        interest: InterestLevel::High,
        post_degree_gpa: 3.2,
    },
    SeedProgram {
        name: "Digital Marketing",
        category: "Marketing",
        min_salary: 5500.0,
        min_previous_gpa: 2.5,
        interest: InterestLevel::VeryHigh,
        post_degree_gpa: 3.0,
    },
    SeedProgram {
        name: "Brand Management",
        category: "Marketing",
        min_salary: 6000.0,
        min_previous_gpa: 2.7,
        interest: InterestLevel::VeryHigh,
        post_degree_gpa: 3.1,
    },
    SeedProgram {
        name: "Financial Accounting",
        category: "Accounting",
        min_salary: 5000.0,
        min_previous_gpa: 3.0,
        interest: InterestLevel::High,
        post_degree_gpa: 3.5,
    },
    SeedProgram {
        name: "Managerial Accounting",
        category: "Accounting",
        min_salary: 5200.0,
        min_previous_gpa: 3.0,
        interest: InterestLevel::High,
        post_degree_gpa: 3.4,
    },
    SeedProgram {
        name: "Human Resources Management",
        category: "HRM",
        min_salary: 5000.0,
        min_previous_gpa: 2.5,
        interest: InterestLevel::Medium,
        post_degree_gpa: 3.0,
    },
    SeedProgram {
        name: "Organizational Behavior",
        category: "HRM",
        min_salary: 5600.0,
        min_previous_gpa: 3.0,
        interest: InterestLevel::High,
        post_degree_gpa: 3.3,
    },
    SeedProgram {
        name: "Operations Management",
        category: "Operations",
        min_salary: 5800.0,
        min_previous_gpa: 3.5,
        interest: InterestLevel::High,
        post_degree_gpa: 3.6,
    },
    SeedProgram {
        name: "Supply Chain Management",
        category: "Operations",
        min_salary: 6200.0,
        min_previous_gpa: 3.5,
        interest: InterestLevel::High,
        post_degree_gpa: 3.7,
    },
];

/// Populate the catalog with the fixture rows when both tables are
/// empty
///
/// # Returns
/// * `Ok(true)` - Fixture inserted
/// * `Ok(false)` - Catalog already has data; nothing done
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<bool, ServiceError> {
    let categories = category::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::database("count_categories", e))?;
    let programs = program::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::database("count_programs", e))?;
    if categories > 0 || programs > 0 {
        return Ok(false);
    }

    let now = Utc::now().timestamp();

    for (name, description) in SEED_CATEGORIES {
        let inserted = category::ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| ServiceError::database("seed_category", e))?;

        for seed in SEED_PROGRAMS.iter().filter(|s| s.category == name) {
            program::ActiveModel {
                name: Set(seed.name.to_string()),
                category_id: Set(inserted.id),
                min_salary: Set(seed.min_salary),
                min_previous_gpa: Set(seed.min_previous_gpa),
                interest_level: Set(seed.interest),
                post_degree_gpa: Set(seed.post_degree_gpa),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await
            .map_err(|e| ServiceError::database("seed_program", e))?;
        }
    }

    tracing::info!("seeded catalog with fixture categories and programs");
    Ok(true)
}
