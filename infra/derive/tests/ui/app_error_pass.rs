use changelog_derive::app_error;
use std::borrow::Cow;

#[app_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected scope{}: {scope}", format_context(.context))]
    InvalidScope { scope: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
    io.context("Reading changelog")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading changelog): disk");

    let scope: Result<(), DemoError> =
        Err(DemoError::InvalidScope { scope: "changelogs:delete".into(), context: None });
    let err = scope.context("API key").unwrap_err();
    assert_eq!(err.to_string(), "Rejected scope (API key): changelogs:delete");

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}
