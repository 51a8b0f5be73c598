use crate::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
pub enum Error {
    #[fail(display = "Cycle error: {} can not be attached under {}.", child, parent)]
    Cycle { parent: Node, child: Node },
    #[fail(display = "{} does not exist in scene graph.", _0)]
    NonNodeFound(Node),
    #[fail(display = "The world transform of {} can not be inversed.", _0)]
    CanNotInverseTransform(Node),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<Error> for cortex::errors::Error {
    fn from(err: Error) -> Self {
        cortex::errors::Error::Application(err.to_string())
    }
}
