#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{}", _0)]
    Io(::std::io::Error),
    #[fail(display = "{}", _0)]
    Json(::serde_json::Error),
    #[fail(display = "Invalid settings: {}.", _0)]
    InvalidSettings(String),
    #[fail(display = "{}", _0)]
    Application(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<::std::io::Error> for Error {
    fn from(err: ::std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<::serde_json::Error> for Error {
    fn from(err: ::serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Builds an `Error::Application` with formatted message.
#[macro_export]
macro_rules! app_err {
    ($e:expr) => {
        $crate::errors::Error::Application(String::from($e))
    };
    ($fmt:expr, $($arg:tt)+) => {
        $crate::errors::Error::Application(format!($fmt, $($arg)+))
    };
}
