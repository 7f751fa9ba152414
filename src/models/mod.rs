pub mod adopter;
pub mod adoption;
pub mod cat;
pub mod note;
pub mod page;
pub mod sterilization;

pub use adopter::{Address, Adopter};
pub use adoption::{Adoption, AdoptionStatus};
pub use cat::{AdoptionState, Cat, CatColor, Sex};
pub use note::Note;
pub use page::Page;
pub use sterilization::{Sterilization, SterilizationStatus};
