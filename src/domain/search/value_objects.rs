//! Search Context - Value Objects

use serde::Serialize;

use super::errors::SearchQueryError;

/// 搜索词
///
/// 只拒绝缺失和空字符串，纯空白的搜索词原样交给解析器。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Result<Self, SearchQueryError> {
        let query = query.into();
        if query.is_empty() {
            return Err(SearchQueryError::Missing);
        }
        Ok(Self(query))
    }

    /// 从请求体中可选的 `query` 字段构造
    pub fn parse(query: Option<String>) -> Result<Self, SearchQueryError> {
        match query {
            Some(query) => Self::new(query),
            None => Err(SearchQueryError::Missing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
