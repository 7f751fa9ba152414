pub mod adopter_form;
pub mod adopters;
pub mod adoption_form;
pub mod adoptions;
pub mod cat_detail;
pub mod cat_form;
pub mod cats;
pub mod home;
pub mod login;
pub mod navigation;
pub mod sterilization_form;
pub mod sterilizations;

pub use adopters::AdoptersScreen;
pub use adoptions::AdoptionsScreen;
pub use cat_detail::CatDetailScreen;
pub use cats::CatsScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use navigation::NavigationBar;
pub use sterilizations::SterilizationsScreen;
