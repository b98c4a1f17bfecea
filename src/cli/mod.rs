// CLI module - the presentation shell over the services layer

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::errors::ServiceError;
use crate::seed;
use crate::services::{crypto, recommendation, validation, AdminService, AuthService};
use crate::types::db::{user, InterestLevel, Role};

/// Program advisor CLI
#[derive(Parser)]
#[command(name = "program-advisor")]
#[command(about = "Academic program recommendation and catalog administration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Populate an empty catalog with the fixture categories and programs
    Seed,

    /// Create an administrator account
    BootstrapAdmin {
        /// Username for the new administrator
        username: String,
    },

    /// Register a new student account
    Register {
        /// Username for the new student
        username: String,
    },

    /// Verify a username/password pair and report the account role
    Login {
        /// Username to authenticate
        username: String,
    },

    /// Recommend programs for the given preferences
    Recommend {
        /// Minimum acceptable industry salary
        #[arg(long)]
        min_salary: f64,

        /// Previous GPA, 0.0 to 4.0
        #[arg(long)]
        gpa: f64,

        /// Analytical interest: low, medium, high, or very high
        #[arg(long)]
        interest: String,
    },

    /// List all programs, sorted by name
    ListPrograms,

    /// List all categories, sorted by name
    ListCategories,

    /// Create a category (administrators only)
    AddCategory {
        /// Category name, letters only
        name: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// Add a program to the catalog (administrators only)
    AddProgram {
        /// Program name
        name: String,

        /// Category name; created when missing
        #[arg(long)]
        category: String,

        /// Minimum industry salary
        #[arg(long)]
        min_salary: f64,

        /// Minimum previous GPA required
        #[arg(long)]
        min_gpa: f64,

        /// Required analytical interest
        #[arg(long)]
        interest: String,

        /// Post-degree GPA the industry accepts
        #[arg(long)]
        post_gpa: f64,
    },

    /// Delete a program by id (administrators only)
    DeleteProgram {
        /// Program id
        id: i32,
    },
}

/// Execute a parsed CLI command against the application data
pub async fn execute_command(cli: Cli, app_data: &AppData) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => {
            if seed::seed_catalog(&app_data.db).await? {
                println!("Catalog seeded.");
            } else {
                println!("Catalog already has data; nothing to do.");
            }
        }
        Commands::BootstrapAdmin { username } => {
            bootstrap_admin(app_data, &username).await?;
        }
        Commands::Register { username } => {
            let auth = AuthService::new(Arc::clone(&app_data.user_store));
            let password = prompt_password("Password")?;
            let created = auth.register(&username, &password).await?;
            println!("Registered student account '{}' (id {}).", created.username, created.id);
        }
        Commands::Login { username } => {
            let auth = AuthService::new(Arc::clone(&app_data.user_store));
            let password = prompt_password("Password")?;
            match auth.authenticate(&username, &password).await? {
                Some(user) => println!("Welcome {}. Role: {:?}", user.username, user.role),
                None => println!("Wrong username or password."),
            }
        }
        Commands::Recommend {
            min_salary,
            gpa,
            interest,
        } => {
            let programs = app_data.catalog_store.list_programs().await?;
            let input = recommendation::RecommendationInput {
                min_acceptable_salary: min_salary,
                previous_gpa: gpa,
                student_interest: InterestLevel::parse_lenient(&interest),
            };
            let results = recommendation::recommend(programs, &input);
            if results.is_empty() {
                println!("No programs match your preferences.");
            } else {
                for r in results {
                    println!(
                        "{} - min salary {:.0}, required previous GPA {:.2}, interest {}, suggested extra study: {:.2} h/day",
                        r.program.name,
                        r.program.min_salary,
                        r.program.min_previous_gpa,
                        r.program.interest_level.label(),
                        r.suggested_extra_study_hours,
                    );
                }
            }
        }
        Commands::ListPrograms => {
            for p in app_data.catalog_store.list_programs().await? {
                println!(
                    "[{}] {} - min salary {:.0}, min GPA {:.2}, interest {}, post-degree GPA {:.2}",
                    p.id,
                    p.name,
                    p.min_salary,
                    p.min_previous_gpa,
                    p.interest_level.label(),
                    p.post_degree_gpa,
                );
            }
        }
        Commands::ListCategories => {
            for c in app_data.catalog_store.list_categories().await? {
                println!("[{}] {} - {}", c.id, c.name, c.description.unwrap_or_default());
            }
        }
        Commands::AddCategory { name, description } => {
            let admin = admin_login(app_data).await?;
            let created = admin.create_category(&name, description.as_deref()).await?;
            println!("Created category '{}' (id {}).", created.name, created.id);
        }
        Commands::AddProgram {
            name,
            category,
            min_salary,
            min_gpa,
            interest,
            post_gpa,
        } => {
            let admin = admin_login(app_data).await?;
            let category = admin.ensure_category_exists(&category).await?;
            let created = admin
                .add_program(
                    &name,
                    Some(&category),
                    min_salary,
                    min_gpa,
                    Some(InterestLevel::parse_lenient(&interest)),
                    post_gpa,
                )
                .await?;
            println!("Added program '{}' (id {}).", created.name, created.id);
        }
        Commands::DeleteProgram { id } => {
            let admin = admin_login(app_data).await?;
            admin.delete_program(id).await?;
            println!("Deleted program {}.", id);
        }
    }

    Ok(())
}

/// Create an administrator account after validating the credentials
async fn bootstrap_admin(app_data: &AppData, username: &str) -> Result<(), ServiceError> {
    let password = prompt_password("Admin password")
        .map_err(|e| ServiceError::validation(format!("Could not read password: {}", e)))?;
    let confirmation = prompt_password("Confirm password")
        .map_err(|e| ServiceError::validation(format!("Could not read password: {}", e)))?;
    if password != confirmation {
        return Err(ServiceError::validation("Passwords do not match."));
    }

    let errors = validation::validate_credentials(username, &password);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let salt = crypto::generate_salt();
    let password_hash = crypto::hash_password(&password, &salt)?;
    let created = app_data
        .user_store
        .insert_user(username, &password_hash, &salt, Role::Admin)
        .await?;

    println!("Created administrator account '{}' (id {}).", created.username, created.id);
    Ok(())
}

/// Prompt for admin credentials and build the actor-bound service
async fn admin_login(app_data: &AppData) -> Result<AdminService, Box<dyn std::error::Error>> {
    let user = login(app_data).await?;
    if !user.is_admin() {
        return Err(Box::new(ServiceError::Authorization(
            "Admin privileges are required for this operation.".to_string(),
        )));
    }
    Ok(AdminService::new(Arc::clone(&app_data.catalog_store), user))
}

async fn login(app_data: &AppData) -> Result<user::Model, Box<dyn std::error::Error>> {
    let auth = AuthService::new(Arc::clone(&app_data.user_store));
    let username = prompt("Username")?;
    let password = prompt_password("Password")?;
    match auth.authenticate(&username, &password).await? {
        Some(user) => Ok(user),
        None => Err("Wrong username or password.".into()),
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_password(label: &str) -> io::Result<String> {
    // Plain stdin read; the single-user desktop shell has no TTY tricks
    prompt(label)
}
