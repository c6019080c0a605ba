use thiserror::Error;

/// Errors raised when an action vector is rejected.
///
/// Falling off the platform is normal episode termination, not an error;
/// only malformed input reaches this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("action has {got} components, expected {expected}")]
    ActionLength { expected: usize, got: usize },

    #[error("action component {index} is not finite ({value})")]
    NonFiniteAction { index: usize, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = EnvError::ActionLength {
            expected: 2,
            got: 3,
        };
        assert_eq!(err.to_string(), "action has 3 components, expected 2");

        let err = EnvError::NonFiniteAction {
            index: 1,
            value: f64::NAN,
        };
        assert!(err.to_string().contains("component 1"));
    }
}
