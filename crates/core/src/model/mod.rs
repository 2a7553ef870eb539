mod catalog;
mod community;
mod ids;
pub mod program;
mod progress;
pub mod session;
mod user;

pub use ids::{ChapterId, ProgramId, SessionId, UserId};

pub use catalog::Catalog;
pub use community::{Artwork, ArtworkComment, ArtworkLike, Author, Post};
pub use program::{Chapter, Program, ProgramError};
pub use progress::{completion_percent, ProgressRecord};
pub use session::{Session, SessionError};
pub use user::CurrentUser;
