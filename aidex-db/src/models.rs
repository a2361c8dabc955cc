pub mod platforms;
pub use platforms::*;

pub mod reviews;
pub use reviews::*;

pub mod tags;
pub use tags::*;
