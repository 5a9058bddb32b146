use wasm_bindgen::JsValue;

pub type SiteResult<T> = Result<T, SiteError>;

#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    #[error("config error: {0}")]
    Config(String),

    #[error("breakpoint error: {0}")]
    Breakpoints(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SiteError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn breakpoints(msg: impl Into<String>) -> Self {
        Self::Breakpoints(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    /// Wraps a thrown JS value; browsers hand back arbitrary objects here.
    pub fn from_js(value: JsValue) -> Self {
        match value.as_string() {
            Some(s) => Self::Dom(s),
            None => Self::Dom(format!("{value:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(SiteError::config("x").to_string().contains("config error:"));
        assert!(
            SiteError::breakpoints("x")
                .to_string()
                .contains("breakpoint error:")
        );
        assert!(SiteError::dom("x").to_string().contains("dom error:"));
    }

    #[test]
    fn json_errors_convert() {
        let err: SiteError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SiteError::Parse(_)));
        assert!(err.to_string().starts_with("parse error:"));
    }
}
