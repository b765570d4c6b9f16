//! 路由器统一错误定义
//!
//! 只覆盖路由器自身能产生的错误：非法参数、回调失败与（理论上不可达的）类型不匹配。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// 回调返回的错误原样透传，不做包装与重试
    #[error(transparent)]
    Callback(#[from] anyhow::Error),

    /// 擦除后的回调收到了其他类型的事件（键与闭包同一泛型时不可达）
    #[error("type mismatch: expected={expected}")]
    TypeMismatch { expected: &'static str },
}

impl RouterError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        RouterError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// 是否为回调失败
    pub fn is_callback(&self) -> bool {
        matches!(self, RouterError::Callback(_))
    }
}

/// 统一 Result 类型别名
pub type RouterResult<T> = Result<T, RouterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("disk on fire")]
    struct Boom;

    #[test]
    fn callback_error_is_transparent() {
        let err = RouterError::from(anyhow::Error::new(Boom));
        assert!(err.is_callback());
        assert_eq!(err.to_string(), "disk on fire");

        match err {
            RouterError::Callback(inner) => assert!(inner.downcast_ref::<Boom>().is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_argument_message() {
        let err = RouterError::invalid_argument("event may not be null");
        assert!(!err.is_callback());
        assert_eq!(err.to_string(), "invalid argument: event may not be null");
    }
}
