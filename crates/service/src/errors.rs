use models::errors::ModelError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    Conflict(String),
    #[error("transaction error: {0}")]
    Transaction(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn transaction(e: DbErr) -> Self { Self::Transaction(e.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => 1001,
            ServiceError::NotFound(_) | ServiceError::Model(ModelError::NotFound(_)) => 1003,
            ServiceError::Conflict(_) => 1002,
            ServiceError::Transaction(_) => 1201,
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => 1200,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ServiceError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => ServiceError::Conflict(msg),
            _ => ServiceError::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::errors::ModelError;
    use models::{tag, ModuleType};
    use sea_orm::{ActiveModelTrait, Set};

    #[test]
    fn codes_group_validation_failures() {
        assert_eq!(ServiceError::Validation("x".into()).code(), 1001);
        assert_eq!(ServiceError::from(ModelError::Validation("x".into())).code(), 1001);
        assert_eq!(ServiceError::not_found("book").code(), 1003);
    }

    #[test]
    fn plain_db_errors_map_to_db() {
        let err = ServiceError::from(DbErr::Custom("boom".into()));
        assert!(matches!(err, ServiceError::Db(_)));
        assert_eq!(err.code(), 1200);
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("book").to_string(), "not found: book not found");
    }

    #[tokio::test]
    async fn unique_violation_maps_to_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let new_tag = || tag::ActiveModel { name: Set("go".into()), module_type: Set(ModuleType::Book), ..Default::default() };
        new_tag().insert(&db).await?;

        let err = new_tag().insert(&db).await.expect_err("duplicate (name, module) must be rejected");
        let err = ServiceError::from(err);
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        assert_eq!(err.code(), 1002);
        Ok(())
    }
}
