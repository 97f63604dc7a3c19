//! Document model - releases, their categories, and the changelog itself

pub mod category;
pub mod changelog;
pub mod release;

pub use category::Category;
pub use changelog::Changelog;
pub use release::Release;
