pub mod note;
pub mod user;

pub use note::PostgresNoteRepository;
pub use user::PostgresUserRepository;
