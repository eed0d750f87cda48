use super::error::DomainError;

/// Validate a project name against the identifier pattern `[a-z0-9-_]+`.
///
/// The name becomes the output directory and is embedded verbatim into the
/// generated manifest and scripts, so it is validated exactly once, before
/// any directory is created.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
    {
        let reason = if bad.is_whitespace() {
            "name cannot contain whitespace".to_string()
        } else if bad.is_ascii_uppercase() {
            "name must be lowercase".to_string()
        } else {
            format!("character '{bad}' is not allowed")
        };
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_digits_hyphen_underscore() {
        for name in ["my-api_2", "service", "a", "0day", "web_hooks"] {
            assert!(validate_project_name(name).is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn rejects_spaces_and_uppercase() {
        for name in ["My App", "my app", "MyApp", "my.app", "my/app", ""] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn uppercase_gets_a_specific_reason() {
        let err = validate_project_name("MyApp").unwrap_err();
        match err {
            DomainError::InvalidProjectName { reason, .. } => {
                assert!(reason.contains("lowercase"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
