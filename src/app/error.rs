use crate::export::ExportError;
use crate::storage::StorageError;
use thiserror::Error;

/// Input the controller refuses to act on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("최대 {max}개까지만 추가할 수 있습니다.")]
    TooManyProperties { max: usize },

    #[error("고객명을 입력해주세요.")]
    MissingCustomerName,

    #[error("매물 {}번이 없습니다.", .0 + 1)]
    NoSuchProperty(usize),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("제안서를 찾을 수 없습니다: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
