use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "programs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub category_id: i32,
    pub min_salary: f64,
    pub min_previous_gpa: f64,
    pub interest_level: InterestLevel,
    pub post_degree_gpa: f64,
    pub created_at: i64,
}

/// Required analytical interest, ordered by rank for threshold
/// comparison in the recommendation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum InterestLevel {
    #[sea_orm(string_value = "LOW")]
    Low,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "HIGH")]
    High,
    #[sea_orm(string_value = "VERY_HIGH")]
    VeryHigh,
}

impl InterestLevel {
    pub fn rank(self) -> u8 {
        match self {
            InterestLevel::Low => 1,
            InterestLevel::Medium => 2,
            InterestLevel::High => 3,
            InterestLevel::VeryHigh => 4,
        }
    }

    /// Parse a user-supplied interest label. Unrecognized input falls
    /// back to `Low` rather than failing; callers that need strictness
    /// must check the label themselves.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "medium" => InterestLevel::Medium,
            "high" => InterestLevel::High,
            "very high" | "very_high" | "veryhigh" => InterestLevel::VeryHigh,
            _ => InterestLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InterestLevel::Low => "LOW",
            InterestLevel::Medium => "MEDIUM",
            InterestLevel::High => "HIGH",
            InterestLevel::VeryHigh => "VERY_HIGH",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Cascade"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering_is_strictly_increasing() {
        assert_eq!(InterestLevel::Low.rank(), 1);
        assert_eq!(InterestLevel::Medium.rank(), 2);
        assert_eq!(InterestLevel::High.rank(), 3);
        assert_eq!(InterestLevel::VeryHigh.rank(), 4);
    }

    #[test]
    fn test_parse_lenient_accepts_known_spellings() {
        assert_eq!(InterestLevel::parse_lenient("low"), InterestLevel::Low);
        assert_eq!(InterestLevel::parse_lenient("Medium"), InterestLevel::Medium);
        assert_eq!(InterestLevel::parse_lenient("HIGH"), InterestLevel::High);
        assert_eq!(InterestLevel::parse_lenient("very high"), InterestLevel::VeryHigh);
        assert_eq!(InterestLevel::parse_lenient("very_high"), InterestLevel::VeryHigh);
        assert_eq!(InterestLevel::parse_lenient("VeryHigh"), InterestLevel::VeryHigh);
    }

    #[test]
    fn test_parse_lenient_defaults_unknown_input_to_low() {
        assert_eq!(InterestLevel::parse_lenient("extreme"), InterestLevel::Low);
        assert_eq!(InterestLevel::parse_lenient(""), InterestLevel::Low);
        assert_eq!(InterestLevel::parse_lenient("42"), InterestLevel::Low);
    }
}
