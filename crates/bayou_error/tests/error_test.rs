//! Tests for error construction and conversion.

use bayou_error::{
    BayouError, BayouErrorKind, BayouResult, ConfigError, IoError, PromptError, PromptErrorKind,
    ProviderError, ProviderErrorKind,
};

#[test]
fn provider_error_records_location() {
    let err = ProviderError::invalid_request("prompt is empty");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
    assert_eq!(err.kind().name(), "invalid_request");
}

#[test]
fn every_kind_has_a_distinct_name() {
    let kinds = [
        ProviderErrorKind::InvalidRequest(String::new()),
        ProviderErrorKind::Unauthorized(String::new()),
        ProviderErrorKind::RateLimited(String::new()),
        ProviderErrorKind::Timeout(String::new()),
        ProviderErrorKind::ConnectionError(String::new()),
        ProviderErrorKind::ProviderFailure {
            status: 500,
            message: String::new(),
        },
        ProviderErrorKind::Unknown(String::new()),
    ];
    let mut names: Vec<&str> = kinds.iter().map(ProviderErrorKind::name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), kinds.len());
}

#[test]
fn provider_failure_message_omits_status() {
    let kind = ProviderErrorKind::ProviderFailure {
        status: 502,
        message: "bad gateway".to_string(),
    };
    assert_eq!(kind.message(), "bad gateway");
    assert!(kind.to_string().contains("502"));
}

#[test]
fn question_mark_converts_into_bayou_error() {
    fn load() -> BayouResult<()> {
        Err::<(), _>(ConfigError::new("missing base_url"))?;
        Ok(())
    }
    fn read() -> BayouResult<()> {
        Err::<(), _>(IoError::new("no such file"))?;
        Ok(())
    }
    fn compose() -> BayouResult<()> {
        Err::<(), _>(PromptError::new(PromptErrorKind::InvalidBank("empty".to_string())))?;
        Ok(())
    }

    assert!(matches!(load().unwrap_err().kind(), BayouErrorKind::Config(_)));
    assert!(matches!(read().unwrap_err().kind(), BayouErrorKind::Io(_)));
    assert!(matches!(compose().unwrap_err().kind(), BayouErrorKind::Prompt(_)));
}

#[test]
fn bayou_error_display_includes_inner_message() {
    let err: BayouError =
        ProviderError::new(ProviderErrorKind::RateLimited("retry later".to_string())).into();
    let text = err.to_string();
    assert!(text.starts_with("Bayou Error:"));
    assert!(text.contains("retry later"));
}
